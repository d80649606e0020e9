//! Root state container: composes the five domain slices, routes actions,
//! and notifies observers.

use serde_json::Value;
use thiserror::Error;

use crate::store::campaigns::{CampaignsIntent, CampaignsReducer, CampaignsState};
use crate::store::community::{AddCommentPayload, CommunityIntent, CommunityReducer, CommunityState};
use crate::store::help::{HelpIntent, HelpReducer, HelpState};
use crate::store::messages::{MessagesIntent, MessagesReducer, MessagesState};
use crate::store::profile::{ProfileIntent, ProfileReducer, ProfileState};
use crate::store::seed;
use crate::store::Reducer;

/// The composed application state tree. One field per slice; no operation
/// ever touches more than one of them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RootState {
    pub campaigns: CampaignsState,
    pub community: CommunityState,
    pub messages: MessagesState,
    pub profile: ProfileState,
    pub help: HelpState,
}

impl RootState {
    /// The fixed demo data every session starts from.
    pub fn seeded() -> Self {
        Self {
            campaigns: seed::campaigns(),
            community: seed::community(),
            messages: seed::messages(),
            profile: seed::profile(),
            help: seed::help(),
        }
    }
}

/// A mutation request addressed to exactly one slice.
#[derive(Debug, Clone)]
pub enum Action {
    Campaigns(CampaignsIntent),
    Community(CommunityIntent),
    Messages(MessagesIntent),
    Profile(ProfileIntent),
    Help(HelpIntent),
}

impl Action {
    /// The wire name of this operation, `"<slice>/<operation>"`.
    pub fn name(&self) -> &'static str {
        match self {
            Action::Campaigns(CampaignsIntent::ReplaceCampaigns(_)) => "campaigns/replaceCampaigns",
            Action::Campaigns(CampaignsIntent::SelectCampaign(_)) => "campaigns/selectCampaign",
            Action::Campaigns(CampaignsIntent::SetLoading(_)) => "campaigns/setLoading",
            Action::Community(CommunityIntent::ReplacePosts(_)) => "community/replacePosts",
            Action::Community(CommunityIntent::AddPost(_)) => "community/addPost",
            Action::Community(CommunityIntent::LikePost { .. }) => "community/likePost",
            Action::Community(CommunityIntent::AddComment { .. }) => "community/addComment",
            Action::Messages(MessagesIntent::ReplaceMessages(_)) => "messages/replaceMessages",
            Action::Messages(MessagesIntent::AddMessage(_)) => "messages/addMessage",
            Action::Profile(ProfileIntent::ReplaceProfile(_)) => "profile/replaceProfile",
            Action::Help(HelpIntent::ReplaceHelpItems(_)) => "help/replaceHelpItems",
        }
    }

    /// Parse a named operation plus JSON payload into a typed action.
    ///
    /// This is the view contract's write entry point: an unrecognized name
    /// or a payload that does not match the operation's shape is rejected
    /// before any slice is touched.
    pub fn parse(name: &str, payload: Value) -> Result<Self, StoreError> {
        fn payload_of<T: serde::de::DeserializeOwned>(
            name: &str,
            payload: Value,
        ) -> Result<T, StoreError> {
            serde_json::from_value(payload).map_err(|source| StoreError::InvalidPayload {
                name: name.to_string(),
                source,
            })
        }

        let action = match name {
            "campaigns/replaceCampaigns" => {
                Action::Campaigns(CampaignsIntent::ReplaceCampaigns(payload_of(name, payload)?))
            }
            "campaigns/selectCampaign" => {
                Action::Campaigns(CampaignsIntent::SelectCampaign(payload_of(name, payload)?))
            }
            "campaigns/setLoading" => {
                Action::Campaigns(CampaignsIntent::SetLoading(payload_of(name, payload)?))
            }
            "community/replacePosts" => {
                Action::Community(CommunityIntent::ReplacePosts(payload_of(name, payload)?))
            }
            "community/addPost" => {
                Action::Community(CommunityIntent::AddPost(payload_of(name, payload)?))
            }
            "community/likePost" => Action::Community(CommunityIntent::LikePost {
                id: payload_of(name, payload)?,
            }),
            "community/addComment" => {
                let AddCommentPayload { post_id, comment } = payload_of(name, payload)?;
                Action::Community(CommunityIntent::AddComment { post_id, comment })
            }
            "messages/replaceMessages" => {
                Action::Messages(MessagesIntent::ReplaceMessages(payload_of(name, payload)?))
            }
            "messages/addMessage" => {
                Action::Messages(MessagesIntent::AddMessage(payload_of(name, payload)?))
            }
            "profile/replaceProfile" => {
                Action::Profile(ProfileIntent::ReplaceProfile(payload_of(name, payload)?))
            }
            "help/replaceHelpItems" => {
                Action::Help(HelpIntent::ReplaceHelpItems(payload_of(name, payload)?))
            }
            _ => return Err(StoreError::UnknownOperation(name.to_string())),
        };
        Ok(action)
    }
}

/// Errors from the named-operation dispatch contract. Both variants fail
/// closed: no state change, no observer notification.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("unknown operation '{0}'")]
    UnknownOperation(String),

    #[error("invalid payload for '{name}': {source}")]
    InvalidPayload {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Pure root reduction step: route the action to its owning slice reducer
/// and rebuild the tree around the new slice state.
pub fn reduce(state: RootState, action: Action) -> RootState {
    match action {
        Action::Campaigns(intent) => RootState {
            campaigns: CampaignsReducer::reduce(state.campaigns, intent),
            ..state
        },
        Action::Community(intent) => RootState {
            community: CommunityReducer::reduce(state.community, intent),
            ..state
        },
        Action::Messages(intent) => RootState {
            messages: MessagesReducer::reduce(state.messages, intent),
            ..state
        },
        Action::Profile(intent) => RootState {
            profile: ProfileReducer::reduce(state.profile, intent),
            ..state
        },
        Action::Help(intent) => RootState {
            help: HelpReducer::reduce(state.help, intent),
            ..state
        },
    }
}

/// Handle returned by [`Store::subscribe`], usable with
/// [`Store::unsubscribe`].
pub type ObserverId = u64;

/// The state container handed to the view layer.
///
/// Constructor-injected, never a module-level global: tests build a fresh
/// store per case. Single-threaded by contract: every dispatch runs to
/// completion, observers included, before the call returns. Observers get a
/// read-only snapshot and must route any further mutation back through
/// [`Store::dispatch`].
pub struct Store {
    state: RootState,
    observers: Vec<(ObserverId, Box<dyn Fn(&RootState)>)>,
    next_observer: ObserverId,
}

impl Store {
    pub fn new(initial: RootState) -> Self {
        Self {
            state: initial,
            observers: Vec::new(),
            next_observer: 0,
        }
    }

    /// A store preloaded with the fixed demo data.
    pub fn seeded() -> Self {
        Self::new(RootState::seeded())
    }

    /// Current snapshot of the whole tree.
    pub fn state(&self) -> &RootState {
        &self.state
    }

    // Per-slice reads, the granularity the pages select at.

    pub fn campaigns(&self) -> &CampaignsState {
        &self.state.campaigns
    }

    pub fn community(&self) -> &CommunityState {
        &self.state.community
    }

    pub fn messages(&self) -> &MessagesState {
        &self.state.messages
    }

    pub fn profile(&self) -> &ProfileState {
        &self.state.profile
    }

    pub fn help(&self) -> &HelpState {
        &self.state.help
    }

    /// Apply a typed action and notify every observer with the new snapshot.
    ///
    /// Lookup misses inside a slice (like/comment on an absent post id) are
    /// still successful dispatches: the reducer ran, observers are notified.
    pub fn dispatch(&mut self, action: Action) {
        tracing::debug!(op = action.name(), "dispatch");
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, action);
        for (_, observer) in &self.observers {
            observer(&self.state);
        }
    }

    /// Apply an operation by wire name, for callers holding untyped
    /// payloads. Fails closed on unknown names and malformed payloads.
    pub fn dispatch_named(&mut self, name: &str, payload: Value) -> Result<(), StoreError> {
        let action = Action::parse(name, payload)?;
        self.dispatch(action);
        Ok(())
    }

    /// Register an observer called synchronously after every successful
    /// dispatch.
    pub fn subscribe(&mut self, observer: impl Fn(&RootState) + 'static) -> ObserverId {
        let id = self.next_observer;
        self.next_observer += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove a previously registered observer. Returns false if the id is
    /// not (or no longer) registered.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);
        self.observers.len() != before
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::seeded()
    }
}
