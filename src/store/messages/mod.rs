mod intent;
mod reducer;
mod state;

pub use intent::MessagesIntent;
pub use reducer::MessagesReducer;
pub use state::MessagesState;
