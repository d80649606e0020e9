use crate::model::Profile;
use crate::store::SliceState;

/// State for the profile page. The profile is a singleton record,
/// replaced whole.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProfileState {
    pub profile: Option<Profile>,
    pub loading: bool,
}

impl SliceState for ProfileState {}
