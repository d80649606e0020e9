//! Entity models shared by the store and the view layer.
//!
//! All of these are plain records: no behavior, no hidden state, identity
//! only through the documented `id` fields. Field names follow the wire
//! shape used by the named-operation dispatch contract (`snake_case`).

use serde::{Deserialize, Serialize};

/// A brand campaign open for influencer applications.
///
/// Immutable once seeded except through whole-collection replacement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: i64,
    pub brand: String,
    pub campaign_title: String,
    pub payout_type: String,
    pub payout_amount: String,
    /// Display string of the form `"<current>/<total> Influencers Hired"`.
    pub hiring_progress: String,
    pub image: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requirements: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_deadline: Option<String>,
}

/// A comment embedded in a [`Post`]. No identity of its own; ordering within
/// the post is insertion order and is never disturbed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub username: String,
    pub comment: String,
}

/// A community feed post. Likes increment, comments append; nothing else
/// mutates an existing post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub username: String,
    pub profile_pic: String,
    pub post: String,
    pub likes: u32,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

/// A direct message. Ids are caller-supplied (the view uses millisecond
/// timestamps); `timestamp` is an ISO-8601 string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: i64,
    pub sender: String,
    pub message: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLinks {
    pub instagram: String,
    pub youtube: String,
}

/// A past collaboration shown on the profile page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PastCampaign {
    pub brand: String,
    pub campaign_title: String,
    pub status: String,
}

/// The singleton user profile. Replaced whole, never patched field-by-field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub username: String,
    pub profile_pic: String,
    pub bio: String,
    pub social_links: SocialLinks,
    #[serde(default)]
    pub past_campaigns: Vec<PastCampaign>,
}

/// One question/answer pair on the help page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HelpItem {
    pub question: String,
    pub answer: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn campaign_optional_fields_default_to_none() {
        let json = r#"{
            "id": 2,
            "brand": "Starbucks",
            "campaign_title": "Starbucks Summer Drinks",
            "payout_type": "Barter",
            "payout_amount": "Free Beverages for 1 Month",
            "hiring_progress": "10/15 Influencers Hired",
            "image": "/Starbucks Summer Drinks.webp",
            "description": "Showcase your favorite Starbucks summer drinks."
        }"#;
        let campaign: Campaign = serde_json::from_str(json).unwrap();
        assert!(campaign.requirements.is_none());
        assert!(campaign.application_deadline.is_none());
    }

    #[test]
    fn post_comments_default_to_empty() {
        let json = r#"{
            "id": 7,
            "username": "You",
            "profile_pic": "",
            "post": "hello",
            "likes": 0
        }"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert!(post.comments.is_empty());
    }
}
