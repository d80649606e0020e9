use crate::model::Post;
use crate::store::SliceState;

/// State for the community feed. Posts are kept most-recent-first:
/// new posts are prepended, never appended.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CommunityState {
    pub posts: Vec<Post>,
    pub loading: bool,
}

impl SliceState for CommunityState {}
