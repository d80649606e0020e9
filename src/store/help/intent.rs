use crate::model::HelpItem;
use crate::store::Intent;

#[derive(Debug, Clone)]
pub enum HelpIntent {
    /// Replace the whole collection atomically.
    ReplaceHelpItems(Vec<HelpItem>),
}

impl Intent for HelpIntent {}
