use crate::model::Message;
use crate::store::Intent;

#[derive(Debug, Clone)]
pub enum MessagesIntent {
    /// Replace the whole list atomically.
    ReplaceMessages(Vec<Message>),
    /// Prepend a message. Id uniqueness is the caller's responsibility.
    AddMessage(Message),
}

impl Intent for MessagesIntent {}
