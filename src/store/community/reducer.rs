use crate::store::community::intent::CommunityIntent;
use crate::store::community::state::CommunityState;
use crate::store::Reducer;

pub struct CommunityReducer;

impl Reducer for CommunityReducer {
    type State = CommunityState;
    type Intent = CommunityIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CommunityIntent::ReplacePosts(posts) => CommunityState { posts, ..state },
            CommunityIntent::AddPost(post) => {
                let mut posts = state.posts;
                posts.insert(0, post);
                CommunityState { posts, ..state }
            }
            CommunityIntent::LikePost { id } => {
                let mut posts = state.posts;
                if let Some(post) = posts.iter_mut().find(|p| p.id == id) {
                    post.likes += 1;
                }
                CommunityState { posts, ..state }
            }
            CommunityIntent::AddComment { post_id, comment } => {
                let mut posts = state.posts;
                if let Some(post) = posts.iter_mut().find(|p| p.id == post_id) {
                    post.comments.push(comment);
                }
                CommunityState { posts, ..state }
            }
        }
    }
}
