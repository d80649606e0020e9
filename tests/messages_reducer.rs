use creatordeck::model::Message;
use creatordeck::store::messages::{MessagesIntent, MessagesReducer};
use creatordeck::store::{seed, Reducer};

#[test]
fn add_message_prepends_and_keeps_existing_order() {
    let state = seed::messages();
    let original = state.messages.clone();
    let state = MessagesReducer::reduce(
        state,
        MessagesIntent::AddMessage(Message {
            id: 999,
            sender: "You".into(),
            message: "hi".into(),
            timestamp: "2025-01-01T00:00:00Z".into(),
        }),
    );
    assert_eq!(state.messages.len(), 3);
    assert_eq!(state.messages[0].id, 999);
    assert_eq!(&state.messages[1..], &original[..]);
}

#[test]
fn replace_messages_round_trips() {
    let state = seed::messages();
    let replacement = vec![Message {
        id: 1,
        sender: "A".into(),
        message: "b".into(),
        timestamp: "2025-01-01T00:00:00Z".into(),
    }];
    let state =
        MessagesReducer::reduce(state, MessagesIntent::ReplaceMessages(replacement.clone()));
    assert_eq!(state.messages, replacement);
}

#[test]
fn add_message_does_not_enforce_id_uniqueness() {
    let state = seed::messages();
    let duplicate = state.messages[0].clone();
    let state = MessagesReducer::reduce(state, MessagesIntent::AddMessage(duplicate));
    assert_eq!(state.messages.len(), 3);
    assert_eq!(state.messages[0].id, state.messages[1].id);
}
