mod intent;
mod reducer;
mod state;

pub use intent::CampaignsIntent;
pub use reducer::CampaignsReducer;
pub use state::CampaignsState;
