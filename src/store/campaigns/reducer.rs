use crate::store::campaigns::intent::CampaignsIntent;
use crate::store::campaigns::state::CampaignsState;
use crate::store::Reducer;

pub struct CampaignsReducer;

impl Reducer for CampaignsReducer {
    type State = CampaignsState;
    type Intent = CampaignsIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CampaignsIntent::ReplaceCampaigns(campaigns) => CampaignsState {
                campaigns,
                ..state
            },
            CampaignsIntent::SelectCampaign(selected) => CampaignsState {
                selected_campaign: selected,
                ..state
            },
            CampaignsIntent::SetLoading(loading) => CampaignsState { loading, ..state },
        }
    }
}
