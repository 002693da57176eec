use async_trait::async_trait;
use ielts_prep::{Error, Result, llm::{GenerativeBackend, ModelInput}};
use std::sync::{Arc, Mutex};

/// Mock backend that records every input and replays scripted replies
#[derive(Debug, Clone)]
pub struct MockBackend {
    pub replies: Arc<Mutex<Vec<String>>>,
    pub inputs: Arc<Mutex<Vec<ModelInput>>>,
    pub error: Option<String>,
    /// Keep returning the last reply instead of running dry
    pub repeat: bool,
}

impl MockBackend {
    pub fn new() -> Self {
        Self {
            replies: Arc::new(Mutex::new(Vec::new())),
            inputs: Arc::new(Mutex::new(Vec::new())),
            error: None,
            repeat: false,
        }
    }

    pub fn with_reply(self, reply: impl Into<String>) -> Self {
        self.replies.lock().unwrap().push(reply.into());
        self
    }

    pub fn repeating(mut self) -> Self {
        self.repeat = true;
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn get_inputs(&self) -> Vec<ModelInput> {
        self.inputs.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerativeBackend for MockBackend {
    async fn generate_content(&self, input: ModelInput) -> Result<String> {
        self.inputs.lock().unwrap().push(input);

        if let Some(ref error) = self.error {
            return Err(Error::generation(error.clone()));
        }

        let mut replies = self.replies.lock().unwrap();
        if replies.is_empty() {
            return Err(Error::generation("No more mock replies available"));
        }

        if self.repeat && replies.len() == 1 {
            Ok(replies[0].clone())
        } else {
            Ok(replies.remove(0))
        }
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}
