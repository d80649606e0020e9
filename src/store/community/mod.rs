mod intent;
mod reducer;
mod state;

pub use intent::{AddCommentPayload, CommunityIntent};
pub use reducer::CommunityReducer;
pub use state::CommunityState;
