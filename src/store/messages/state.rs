use crate::model::Message;
use crate::store::SliceState;

/// State for the direct-messaging page. Newest message first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MessagesState {
    pub messages: Vec<Message>,
    pub loading: bool,
}

impl SliceState for MessagesState {}
