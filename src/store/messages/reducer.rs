use crate::store::messages::intent::MessagesIntent;
use crate::store::messages::state::MessagesState;
use crate::store::Reducer;

pub struct MessagesReducer;

impl Reducer for MessagesReducer {
    type State = MessagesState;
    type Intent = MessagesIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            MessagesIntent::ReplaceMessages(messages) => MessagesState { messages, ..state },
            MessagesIntent::AddMessage(message) => {
                let mut messages = state.messages;
                messages.insert(0, message);
                MessagesState { messages, ..state }
            }
        }
    }
}
