mod generator;
mod json;

pub use generator::*;
pub use json::*;
