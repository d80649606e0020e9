use creatordeck::model::{Comment, Post};
use creatordeck::store::community::{CommunityIntent, CommunityReducer, CommunityState};
use creatordeck::store::{seed, Reducer};

fn make_post(id: i64, likes: u32) -> Post {
    Post {
        id,
        username: format!("user{}", id),
        profile_pic: String::new(),
        post: format!("post {}", id),
        likes,
        comments: Vec::new(),
    }
}

// -- addPost ordering ---------------------------------------------------------

#[test]
fn add_post_prepends() {
    let state = seed::community();
    let original = state.posts.clone();
    let state = CommunityReducer::reduce(state, CommunityIntent::AddPost(make_post(10, 0)));
    assert_eq!(state.posts.len(), original.len() + 1);
    assert_eq!(state.posts[0].id, 10);
    assert_eq!(&state.posts[1..], &original[..]);
}

#[test]
fn add_post_sequence_is_most_recent_first() {
    let mut state = CommunityState::default();
    for id in [1, 2, 3] {
        state = CommunityReducer::reduce(state, CommunityIntent::AddPost(make_post(id, 0)));
    }
    let ids: Vec<i64> = state.posts.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![3, 2, 1]);
}

#[test]
fn add_post_accepts_duplicate_ids() {
    let mut state = CommunityState::default();
    state = CommunityReducer::reduce(state, CommunityIntent::AddPost(make_post(1, 0)));
    state = CommunityReducer::reduce(state, CommunityIntent::AddPost(make_post(1, 5)));
    assert_eq!(state.posts.len(), 2);
}

// -- likePost -----------------------------------------------------------------

#[test]
fn like_post_increments_only_the_target() {
    let state = seed::community();
    let state = CommunityReducer::reduce(state, CommunityIntent::LikePost { id: 1 });
    let state = CommunityReducer::reduce(state, CommunityIntent::LikePost { id: 1 });
    assert_eq!(state.posts[0].likes, 27);
    assert_eq!(state.posts[1].likes, 40);
}

#[test]
fn like_post_leaves_other_posts_untouched() {
    let state = seed::community();
    let before = state.posts[1].clone();
    let state = CommunityReducer::reduce(state, CommunityIntent::LikePost { id: 1 });
    assert_eq!(state.posts[1], before);
}

#[test]
fn like_post_missing_id_is_a_noop() {
    let state = seed::community();
    let before = state.clone();
    let state = CommunityReducer::reduce(state, CommunityIntent::LikePost { id: 999 });
    assert_eq!(state, before);
}

#[test]
fn like_post_duplicate_ids_hit_first_match_only() {
    let mut state = CommunityState::default();
    // Prepends reverse order: the later add ends up first.
    state = CommunityReducer::reduce(state, CommunityIntent::AddPost(make_post(7, 0)));
    state = CommunityReducer::reduce(state, CommunityIntent::AddPost(make_post(7, 100)));
    let state = CommunityReducer::reduce(state, CommunityIntent::LikePost { id: 7 });
    assert_eq!(state.posts[0].likes, 101);
    assert_eq!(state.posts[1].likes, 0);
}

// -- addComment ---------------------------------------------------------------

#[test]
fn add_comment_appends_to_target_post() {
    let state = seed::community();
    let state = CommunityReducer::reduce(
        state,
        CommunityIntent::AddComment {
            post_id: 2,
            comment: Comment {
                username: "X".into(),
                comment: "hi".into(),
            },
        },
    );
    assert_eq!(state.posts[1].comments.len(), 2);
    assert_eq!(state.posts[1].comments[1].username, "X");
    // Prior comment order preserved.
    assert_eq!(state.posts[1].comments[0].username, "CoffeeLover");
    // Post 1 untouched.
    assert_eq!(state.posts[0].comments.len(), 1);
}

#[test]
fn add_comment_missing_post_is_a_noop() {
    let state = seed::community();
    let before = state.clone();
    let state = CommunityReducer::reduce(
        state,
        CommunityIntent::AddComment {
            post_id: 999,
            comment: Comment {
                username: "X".into(),
                comment: "hi".into(),
            },
        },
    );
    assert_eq!(state, before);
}

// -- replacePosts -------------------------------------------------------------

#[test]
fn replace_posts_round_trips() {
    let state = seed::community();
    let replacement = vec![make_post(42, 3)];
    let state = CommunityReducer::reduce(state, CommunityIntent::ReplacePosts(replacement.clone()));
    assert_eq!(state.posts, replacement);
}

#[test]
fn replace_posts_keeps_loading_flag() {
    let state = CommunityState {
        posts: Vec::new(),
        loading: true,
    };
    let state = CommunityReducer::reduce(state, CommunityIntent::ReplacePosts(Vec::new()));
    assert!(state.loading);
}
