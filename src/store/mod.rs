//! Centralized application state container.
//!
//! The store implements unidirectional data flow over five independent
//! domain slices:
//!
//! ```text
//! Intent ──→ Reducer ──→ Slice state ──→ Snapshot ──→ View
//!    ↑                                                  │
//!    └──────────────── dispatch ────────────────────────┘
//! ```
//!
//! - **Slice state**: immutable value; reducers clone/move to build the next
//!   state rather than mutating in place.
//! - **Intent**: a named, total state-transition request owned by exactly
//!   one slice.
//! - **Reducer**: a pure function `(State, Intent) -> State`.
//! - **Store** ([`root::Store`]): composes the slices into one tree, routes
//!   each dispatched [`root::Action`] to its owning slice, and notifies
//!   observers synchronously after every successful dispatch.

mod intent;
mod reducer;
mod state;

pub mod campaigns;
pub mod community;
pub mod help;
pub mod messages;
pub mod profile;
pub mod root;
pub mod seed;

pub use intent::Intent;
pub use reducer::Reducer;
pub use root::{Action, RootState, Store, StoreError};
pub use state::SliceState;
