//! View-shell behavior: key-driven navigation and dispatches.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use creatordeck::store::Store;
use creatordeck::ui::app::{App, Editor};
use creatordeck::ui::Route;

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.on_key(press(KeyCode::Char(c)));
    }
}

fn make_app() -> App {
    App::new(Store::seeded(), Route::Campaigns)
}

// -- navigation ---------------------------------------------------------------

#[test]
fn digit_keys_switch_pages() {
    let mut app = make_app();
    app.on_key(press(KeyCode::Char('3')));
    assert_eq!(app.route(), Route::Messages);
    app.on_key(press(KeyCode::Char('5')));
    assert_eq!(app.route(), Route::Help);
}

#[test]
fn tab_cycles_pages() {
    let mut app = make_app();
    app.on_key(press(KeyCode::Tab));
    assert_eq!(app.route(), Route::Community);
    app.on_key(press(KeyCode::BackTab));
    assert_eq!(app.route(), Route::Campaigns);
}

#[test]
fn quit_keys() {
    let mut app = make_app();
    assert!(!app.should_quit());
    app.on_key(press(KeyCode::Char('q')));
    assert!(app.should_quit());

    let mut app = make_app();
    app.on_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL));
    assert!(app.should_quit());
}

// -- campaigns page -----------------------------------------------------------

#[test]
fn enter_opens_details_and_selects_campaign() {
    let mut app = make_app();
    app.on_key(press(KeyCode::Down));
    app.on_key(press(KeyCode::Enter));
    assert_eq!(app.route(), Route::CampaignDetails(2));
    assert_eq!(
        app.store()
            .campaigns()
            .selected_campaign
            .as_ref()
            .map(|c| c.id),
        Some(2)
    );
}

#[test]
fn escape_from_details_clears_selection() {
    let mut app = make_app();
    app.on_key(press(KeyCode::Enter));
    assert!(app.store().campaigns().selected_campaign.is_some());
    app.on_key(press(KeyCode::Esc));
    assert_eq!(app.route(), Route::Campaigns);
    assert!(app.store().campaigns().selected_campaign.is_none());
}

#[test]
fn deep_link_resolves_path_parameter() {
    let app = App::new(Store::seeded(), Route::CampaignDetails(2));
    assert_eq!(
        app.store()
            .campaigns()
            .selected_campaign
            .as_ref()
            .map(|c| c.brand.as_str()),
        Some("Starbucks")
    );
}

#[test]
fn deep_link_to_missing_campaign_leaves_selection_empty() {
    let app = App::new(Store::seeded(), Route::CampaignDetails(404));
    assert!(app.store().campaigns().selected_campaign.is_none());
}

// -- community page -----------------------------------------------------------

#[test]
fn like_key_increments_post_under_cursor() {
    let mut app = make_app();
    app.on_key(press(KeyCode::Char('2')));
    app.on_key(press(KeyCode::Char('l')));
    assert_eq!(app.store().community().posts[0].likes, 26);
    app.on_key(press(KeyCode::Down));
    app.on_key(press(KeyCode::Char('l')));
    assert_eq!(app.store().community().posts[1].likes, 41);
}

#[test]
fn comment_editor_appends_to_post_under_cursor() {
    let mut app = make_app();
    app.on_key(press(KeyCode::Char('2')));
    app.on_key(press(KeyCode::Down));
    app.on_key(press(KeyCode::Char('c')));
    assert_eq!(app.editor(), Editor::Comment { post_id: 2 });
    type_text(&mut app, "nice one");
    app.on_key(press(KeyCode::Enter));
    assert_eq!(app.editor(), Editor::None);
    let post = &app.store().community().posts[1];
    assert_eq!(post.comments.last().unwrap().username, "You");
    assert_eq!(post.comments.last().unwrap().comment, "nice one");
}

#[test]
fn new_post_is_prepended() {
    let mut app = make_app();
    app.on_key(press(KeyCode::Char('2')));
    app.on_key(press(KeyCode::Char('n')));
    type_text(&mut app, "hello world");
    app.on_key(press(KeyCode::Enter));
    let posts = &app.store().community().posts;
    assert_eq!(posts.len(), 3);
    assert_eq!(posts[0].post, "hello world");
    assert_eq!(posts[0].username, "You");
}

#[test]
fn empty_editor_commit_dispatches_nothing() {
    let mut app = make_app();
    app.on_key(press(KeyCode::Char('2')));
    app.on_key(press(KeyCode::Char('n')));
    type_text(&mut app, "   ");
    app.on_key(press(KeyCode::Enter));
    assert_eq!(app.store().community().posts.len(), 2);
}

#[test]
fn escape_cancels_editor_without_dispatch() {
    let mut app = make_app();
    app.on_key(press(KeyCode::Char('2')));
    app.on_key(press(KeyCode::Char('n')));
    type_text(&mut app, "draft");
    app.on_key(press(KeyCode::Esc));
    assert_eq!(app.editor(), Editor::None);
    assert_eq!(app.store().community().posts.len(), 2);
}

// -- messages page ------------------------------------------------------------

#[test]
fn composed_message_is_prepended_with_you_as_sender() {
    let mut app = make_app();
    app.on_key(press(KeyCode::Char('3')));
    app.on_key(press(KeyCode::Char('i')));
    assert_eq!(app.editor(), Editor::Message);
    type_text(&mut app, "hey there");
    app.on_key(press(KeyCode::Enter));
    let messages = &app.store().messages().messages;
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[0].sender, "You");
    assert_eq!(messages[0].message, "hey there");
    // Remaining entries keep their original order.
    assert_eq!(messages[1].id, 1);
    assert_eq!(messages[2].id, 2);
}

// -- help page ----------------------------------------------------------------

#[test]
fn help_search_query_survives_closing_the_editor() {
    let mut app = make_app();
    app.on_key(press(KeyCode::Char('5')));
    app.on_key(press(KeyCode::Char('/')));
    assert_eq!(app.editor(), Editor::HelpSearch);
    type_text(&mut app, "payout");
    app.on_key(press(KeyCode::Enter));
    assert_eq!(app.editor(), Editor::None);
    assert_eq!(app.help_query(), "payout");
    // Esc in normal mode clears it.
    app.on_key(press(KeyCode::Esc));
    assert_eq!(app.help_query(), "");
}
