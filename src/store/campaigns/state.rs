use crate::model::Campaign;
use crate::store::SliceState;

/// State for the campaign browsing/detail pages.
///
/// `selected_campaign` is a denormalized copy set at selection time; it is
/// not re-synchronized if `campaigns` is later replaced. The view re-resolves
/// it by id when it needs a fresh value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CampaignsState {
    pub campaigns: Vec<Campaign>,
    pub selected_campaign: Option<Campaign>,
    pub loading: bool,
}

impl SliceState for CampaignsState {}

impl CampaignsState {
    /// Look up a campaign by id (first match).
    pub fn campaign_by_id(&self, id: i64) -> Option<&Campaign> {
        self.campaigns.iter().find(|c| c.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed;

    #[test]
    fn default_is_empty_and_not_loading() {
        let state = CampaignsState::default();
        assert!(state.campaigns.is_empty());
        assert!(state.selected_campaign.is_none());
        assert!(!state.loading);
    }

    #[test]
    fn campaign_by_id_finds_seeded_campaign() {
        let state = seed::campaigns();
        assert_eq!(state.campaign_by_id(1).unwrap().brand, "Nike");
        assert!(state.campaign_by_id(99).is_none());
    }
}
