//! Path-based routing between pages.
//!
//! Routes mirror the URL scheme of the web version of the platform; the
//! campaign-details route carries the campaign id as a path parameter,
//! resolved against the campaigns slice by the view.

/// The pages the application can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Campaigns,
    CampaignDetails(i64),
    Community,
    Messages,
    Profile,
    Help,
}

/// Tab order shown in the header. Details has no tab of its own; it
/// highlights the campaigns tab.
pub const TABS: [Route; 5] = [
    Route::Campaigns,
    Route::Community,
    Route::Messages,
    Route::Profile,
    Route::Help,
];

impl Route {
    /// Parse a route from a URL-style path. Returns `None` for paths that
    /// map to no page.
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.trim_end_matches('/');
        match path {
            "" => Some(Route::Campaigns),
            "/community" => Some(Route::Community),
            "/messages" => Some(Route::Messages),
            "/profile" => Some(Route::Profile),
            "/help" => Some(Route::Help),
            _ => {
                let id = path.strip_prefix("/campaign/")?;
                id.parse().ok().map(Route::CampaignDetails)
            }
        }
    }

    /// The URL-style path of this route.
    pub fn path(&self) -> String {
        match self {
            Route::Campaigns => "/".to_string(),
            Route::CampaignDetails(id) => format!("/campaign/{}", id),
            Route::Community => "/community".to_string(),
            Route::Messages => "/messages".to_string(),
            Route::Profile => "/profile".to_string(),
            Route::Help => "/help".to_string(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Campaigns | Route::CampaignDetails(_) => "Campaigns",
            Route::Community => "Community",
            Route::Messages => "Messages",
            Route::Profile => "Profile",
            Route::Help => "Help",
        }
    }

    /// Index of the header tab this route highlights.
    pub fn tab_index(&self) -> usize {
        match self {
            Route::Campaigns | Route::CampaignDetails(_) => 0,
            Route::Community => 1,
            Route::Messages => 2,
            Route::Profile => 3,
            Route::Help => 4,
        }
    }

    /// The next tab in order, wrapping around.
    pub fn next_tab(&self) -> Route {
        TABS[(self.tab_index() + 1) % TABS.len()]
    }

    /// The previous tab in order, wrapping around.
    pub fn prev_tab(&self) -> Route {
        TABS[(self.tab_index() + TABS.len() - 1) % TABS.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_static_paths() {
        assert_eq!(Route::parse("/"), Some(Route::Campaigns));
        assert_eq!(Route::parse("/community"), Some(Route::Community));
        assert_eq!(Route::parse("/messages"), Some(Route::Messages));
        assert_eq!(Route::parse("/profile"), Some(Route::Profile));
        assert_eq!(Route::parse("/help"), Some(Route::Help));
    }

    #[test]
    fn parses_campaign_id_parameter() {
        assert_eq!(Route::parse("/campaign/2"), Some(Route::CampaignDetails(2)));
        assert_eq!(Route::parse("/campaign/2/"), Some(Route::CampaignDetails(2)));
        assert_eq!(Route::parse("/campaign/x"), None);
        assert_eq!(Route::parse("/campaign/"), None);
    }

    #[test]
    fn rejects_unknown_paths() {
        assert_eq!(Route::parse("/settings"), None);
        assert_eq!(Route::parse("campaign/1"), None);
    }

    #[test]
    fn path_round_trips() {
        for route in [
            Route::Campaigns,
            Route::CampaignDetails(7),
            Route::Community,
            Route::Messages,
            Route::Profile,
            Route::Help,
        ] {
            assert_eq!(Route::parse(&route.path()), Some(route));
        }
    }

    #[test]
    fn tab_cycle_wraps() {
        assert_eq!(Route::Help.next_tab(), Route::Campaigns);
        assert_eq!(Route::Campaigns.prev_tab(), Route::Help);
        assert_eq!(Route::CampaignDetails(1).tab_index(), 0);
    }
}
