use crate::model::Profile;
use crate::store::Intent;

#[derive(Debug, Clone)]
pub enum ProfileIntent {
    /// Whole-record replace.
    ReplaceProfile(Profile),
}

impl Intent for ProfileIntent {}
