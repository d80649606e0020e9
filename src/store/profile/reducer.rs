use crate::store::profile::intent::ProfileIntent;
use crate::store::profile::state::ProfileState;
use crate::store::Reducer;

pub struct ProfileReducer;

impl Reducer for ProfileReducer {
    type State = ProfileState;
    type Intent = ProfileIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ProfileIntent::ReplaceProfile(profile) => ProfileState {
                profile: Some(profile),
                ..state
            },
        }
    }
}
