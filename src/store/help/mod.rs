mod intent;
mod reducer;
mod state;

pub use intent::HelpIntent;
pub use reducer::HelpReducer;
pub use state::HelpState;
