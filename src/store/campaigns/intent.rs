use crate::model::Campaign;
use crate::store::Intent;

#[derive(Debug, Clone)]
pub enum CampaignsIntent {
    /// Replace the whole collection. Leaves `selected_campaign` untouched.
    ReplaceCampaigns(Vec<Campaign>),
    /// Set or clear the selected campaign. The value is not validated
    /// against the collection.
    SelectCampaign(Option<Campaign>),
    SetLoading(bool),
}

impl Intent for CampaignsIntent {}
