use crate::store::help::intent::HelpIntent;
use crate::store::help::state::HelpState;
use crate::store::Reducer;

pub struct HelpReducer;

impl Reducer for HelpReducer {
    type State = HelpState;
    type Intent = HelpIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            HelpIntent::ReplaceHelpItems(help_items) => HelpState {
                help_items,
                ..state
            },
        }
    }
}
