//! creatordeck: a terminal UI for an influencer-marketing campaign
//! platform demo.
//!
//! All data lives in a single in-memory state container ([`store::Store`])
//! seeded at startup; the ratatui view layer dispatches named mutations to
//! it and re-renders from the resulting snapshots.

pub mod config;
pub mod logging;
pub mod model;
pub mod store;
pub mod ui;
