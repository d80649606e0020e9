//! Fixed demo data compiled into the binary. Every session starts from
//! this state; nothing is read from disk or the network at runtime.

use crate::model::{
    Campaign, Comment, HelpItem, Message, PastCampaign, Post, Profile, SocialLinks,
};
use crate::store::campaigns::CampaignsState;
use crate::store::community::CommunityState;
use crate::store::help::HelpState;
use crate::store::messages::MessagesState;
use crate::store::profile::ProfileState;

pub fn campaigns() -> CampaignsState {
    CampaignsState {
        campaigns: vec![
            Campaign {
                id: 1,
                brand: "Nike".into(),
                campaign_title: "Promote Nike Air Max".into(),
                payout_type: "Fixed Pay".into(),
                payout_amount: "$500".into(),
                hiring_progress: "15/20 Influencers Hired".into(),
                image: "/Nike Air Max.jpg".into(),
                description: "Create engaging content showcasing Nike Air Max sneakers in your daily routine.".into(),
                requirements: Some(vec![
                    "Minimum 10K Instagram followers".into(),
                    "Post 2 Instagram Reels showcasing the product".into(),
                    "Tag @nike and use hashtags #NikeAirMax #FeelTheComfort".into(),
                ]),
                application_deadline: Some("April 15, 2025".into()),
            },
            Campaign {
                id: 2,
                brand: "Starbucks".into(),
                campaign_title: "Starbucks Summer Drinks".into(),
                payout_type: "Barter".into(),
                payout_amount: "Free Beverages for 1 Month".into(),
                hiring_progress: "10/15 Influencers Hired".into(),
                image: "/Starbucks Summer Drinks.webp".into(),
                description: "Showcase your favorite Starbucks summer drinks on Instagram.".into(),
                requirements: None,
                application_deadline: None,
            },
        ],
        selected_campaign: None,
        loading: false,
    }
}

pub fn community() -> CommunityState {
    CommunityState {
        posts: vec![
            Post {
                id: 1,
                username: "Influencer123".into(),
                profile_pic: "https://via.placeholder.com/50".into(),
                post: "Excited to collaborate with Nike! Who else is on this campaign? #NikeAirMax".into(),
                likes: 25,
                comments: vec![Comment {
                    username: "FitnessGuru".into(),
                    comment: "I'm in! Can't wait to get started.".into(),
                }],
            },
            Post {
                id: 2,
                username: "TravelBlogger".into(),
                profile_pic: "https://via.placeholder.com/50".into(),
                post: "Thinking of applying for the Starbucks campaign. Anyone done this before?".into(),
                likes: 40,
                comments: vec![Comment {
                    username: "CoffeeLover".into(),
                    comment: "Yes! It was a great experience.".into(),
                }],
            },
        ],
        loading: false,
    }
}

pub fn messages() -> MessagesState {
    MessagesState {
        messages: vec![
            Message {
                id: 1,
                sender: "Nike Brand Manager".into(),
                message: "Hey, we loved your application! Let's discuss next steps.".into(),
                timestamp: "2025-03-16 14:30".into(),
            },
            Message {
                id: 2,
                sender: "Starbucks Team".into(),
                message: "Your content was amazing! We'd love to collaborate again.".into(),
                timestamp: "2025-03-15 10:00".into(),
            },
        ],
        loading: false,
    }
}

pub fn profile() -> ProfileState {
    ProfileState {
        profile: Some(Profile {
            username: "Influencer123".into(),
            profile_pic: "https://via.placeholder.com/100".into(),
            bio: "Lifestyle & fitness influencer | 50K followers | Content creator".into(),
            social_links: SocialLinks {
                instagram: "https://instagram.com/influencer123".into(),
                youtube: "https://youtube.com/influencer123".into(),
            },
            past_campaigns: vec![
                PastCampaign {
                    brand: "Adidas".into(),
                    campaign_title: "Adidas Ultraboost Promo".into(),
                    status: "Completed".into(),
                },
                PastCampaign {
                    brand: "Samsung".into(),
                    campaign_title: "Galaxy S24 Review".into(),
                    status: "Completed".into(),
                },
            ],
        }),
        loading: false,
    }
}

pub fn help() -> HelpState {
    HelpState {
        help_items: vec![
            HelpItem {
                question: "How do I apply for a campaign?".into(),
                answer: "Go to the Campaigns page, select a campaign, and click on the 'Apply' button. Follow the instructions to submit your application.".into(),
            },
            HelpItem {
                question: "What types of payouts are available?".into(),
                answer: "We offer Fixed Pay (monetary), Barter (free products/services), and Refunds (cashback on purchased items).".into(),
            },
            HelpItem {
                question: "How can I contact a brand?".into(),
                answer: "Once you're accepted into a campaign, you can use the Messages section to communicate with the brand directly.".into(),
            },
        ],
        loading: false,
    }
}
