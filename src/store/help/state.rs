use crate::model::HelpItem;
use crate::store::SliceState;

/// State for the FAQ/help page. Items keep seed order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HelpState {
    pub help_items: Vec<HelpItem>,
    pub loading: bool,
}

impl SliceState for HelpState {}
