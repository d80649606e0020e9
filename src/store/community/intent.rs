use serde::Deserialize;

use crate::model::{Comment, Post};
use crate::store::Intent;

#[derive(Debug, Clone)]
pub enum CommunityIntent {
    /// Replace the whole feed atomically.
    ReplacePosts(Vec<Post>),
    /// Prepend a fully-formed post. The caller supplies the id; duplicate
    /// ids are accepted and later lookups hit the first match only.
    AddPost(Post),
    /// Increment the like count of the first post with this id.
    /// Silent no-op when no post matches.
    LikePost { id: i64 },
    /// Append a comment to the first post with this id.
    /// Silent no-op when no post matches.
    AddComment { post_id: i64, comment: Comment },
}

impl Intent for CommunityIntent {}

/// Wire payload for `community/addComment`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCommentPayload {
    pub post_id: i64,
    pub comment: Comment,
}
