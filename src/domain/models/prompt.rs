use super::{Category, Message};

/// The fixed system text plus the filled-in user text sent for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptPair {
    system: String,
    user: String,
}

impl PromptPair {
    pub fn new(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            user: user.into(),
        }
    }

    pub fn system(&self) -> &str {
        &self.system
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    /// Message list in the order completion services expect: system, then user.
    pub fn to_messages(&self) -> Vec<Message> {
        vec![Message::system(&self.system), Message::user(&self.user)]
    }
}

/// A validated request that knows which prompt it turns into.
pub trait PromptTemplate: Send + Sync {
    fn category(&self) -> Category;

    fn prompt(&self) -> PromptPair;
}
