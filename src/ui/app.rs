//! Application shell: owns the store, the current route, and the
//! view-local state (cursors, input line) the pages render from.
//!
//! Every mutation goes through [`Store::dispatch`]; the app never reaches
//! into slice state directly. A store observer sets a dirty flag so the
//! run loop knows a redraw is due.

use std::cell::Cell;
use std::rc::Rc;

use chrono::Utc;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::{Comment, Message, Post};
use crate::store::campaigns::CampaignsIntent;
use crate::store::community::CommunityIntent;
use crate::store::messages::MessagesIntent;
use crate::store::{Action, Store};
use crate::ui::router::{Route, TABS};

/// Which input line, if any, currently captures typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Editor {
    None,
    /// Composing a direct message.
    Message,
    /// Commenting on the post with this id.
    Comment { post_id: i64 },
    /// Writing a new community post.
    NewPost,
    /// Editing the help-page search query.
    HelpSearch,
}

pub struct App {
    store: Store,
    route: Route,
    dirty: Rc<Cell<bool>>,
    should_quit: bool,
    campaign_cursor: usize,
    post_cursor: usize,
    editor: Editor,
    input: String,
    /// Help-page filter; view-local, survives closing the search editor.
    help_query: String,
}

impl App {
    pub fn new(mut store: Store, route: Route) -> Self {
        let dirty = Rc::new(Cell::new(true));
        let flag = Rc::clone(&dirty);
        store.subscribe(move |_| flag.set(true));

        // Deep link straight to a details page resolves the id the same
        // way following a campaign-card link would.
        if let Route::CampaignDetails(id) = route {
            let campaign = store.campaigns().campaign_by_id(id).cloned();
            store.dispatch(Action::Campaigns(CampaignsIntent::SelectCampaign(campaign)));
        }

        Self {
            store,
            route,
            dirty,
            should_quit: false,
            campaign_cursor: 0,
            post_cursor: 0,
            editor: Editor::None,
            input: String::new(),
            help_query: String::new(),
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn editor(&self) -> Editor {
        self.editor
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn help_query(&self) -> &str {
        &self.help_query
    }

    /// Cursor into the campaigns list, clamped to the current collection.
    pub fn campaign_cursor(&self) -> usize {
        let len = self.store.campaigns().campaigns.len();
        self.campaign_cursor.min(len.saturating_sub(1))
    }

    /// Cursor into the community feed, clamped to the current collection.
    pub fn post_cursor(&self) -> usize {
        let len = self.store.community().posts.len();
        self.post_cursor.min(len.saturating_sub(1))
    }

    /// True when a redraw is due; clears the flag.
    pub fn take_dirty(&mut self) -> bool {
        self.dirty.replace(false)
    }

    /// Force a redraw on the next loop iteration (resize, first frame).
    pub fn mark_dirty(&self) {
        self.dirty.set(true);
    }

    pub fn navigate(&mut self, route: Route) {
        tracing::debug!(path = %route.path(), "navigate");
        self.route = route;
        self.editor = Editor::None;
        self.input.clear();
        self.dirty.set(true);
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('q') {
            self.should_quit = true;
            return;
        }

        if self.editor != Editor::None {
            self.on_editor_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Tab => self.navigate(self.route.next_tab()),
            KeyCode::BackTab => self.navigate(self.route.prev_tab()),
            KeyCode::Char(c @ '1'..='5') => {
                let index = (c as u8 - b'1') as usize;
                self.navigate(TABS[index]);
            }
            _ => self.on_page_key(key),
        }
    }

    fn on_page_key(&mut self, key: KeyEvent) {
        match self.route {
            Route::Campaigns => self.on_campaigns_key(key),
            Route::CampaignDetails(_) => {
                if matches!(key.code, KeyCode::Esc | KeyCode::Backspace) {
                    self.store
                        .dispatch(Action::Campaigns(CampaignsIntent::SelectCampaign(None)));
                    self.navigate(Route::Campaigns);
                }
            }
            Route::Community => self.on_community_key(key),
            Route::Messages => {
                if key.code == KeyCode::Char('i') {
                    self.open_editor(Editor::Message);
                }
            }
            Route::Profile => {}
            Route::Help => match key.code {
                KeyCode::Char('/') => self.open_editor(Editor::HelpSearch),
                KeyCode::Esc if !self.help_query.is_empty() => {
                    self.help_query.clear();
                    self.dirty.set(true);
                }
                _ => {}
            },
        }
    }

    fn on_campaigns_key(&mut self, key: KeyEvent) {
        let len = self.store.campaigns().campaigns.len();
        match key.code {
            KeyCode::Up => {
                self.campaign_cursor = self.campaign_cursor().saturating_sub(1);
                self.dirty.set(true);
            }
            KeyCode::Down if len > 0 => {
                self.campaign_cursor = (self.campaign_cursor() + 1).min(len - 1);
                self.dirty.set(true);
            }
            KeyCode::Enter => {
                let selected = self
                    .store
                    .campaigns()
                    .campaigns
                    .get(self.campaign_cursor())
                    .cloned();
                if let Some(campaign) = selected {
                    let id = campaign.id;
                    self.store.dispatch(Action::Campaigns(
                        CampaignsIntent::SelectCampaign(Some(campaign)),
                    ));
                    self.navigate(Route::CampaignDetails(id));
                }
            }
            _ => {}
        }
    }

    fn on_community_key(&mut self, key: KeyEvent) {
        let len = self.store.community().posts.len();
        match key.code {
            KeyCode::Up => {
                self.post_cursor = self.post_cursor().saturating_sub(1);
                self.dirty.set(true);
            }
            KeyCode::Down if len > 0 => {
                self.post_cursor = (self.post_cursor() + 1).min(len - 1);
                self.dirty.set(true);
            }
            KeyCode::Char('l') => {
                if let Some(post) = self.store.community().posts.get(self.post_cursor()) {
                    let id = post.id;
                    self.store
                        .dispatch(Action::Community(CommunityIntent::LikePost { id }));
                }
            }
            KeyCode::Char('c') => {
                if let Some(post) = self.store.community().posts.get(self.post_cursor()) {
                    let post_id = post.id;
                    self.open_editor(Editor::Comment { post_id });
                }
            }
            KeyCode::Char('n') => self.open_editor(Editor::NewPost),
            _ => {}
        }
    }

    fn open_editor(&mut self, editor: Editor) {
        self.editor = editor;
        self.input.clear();
        if editor == Editor::HelpSearch {
            self.input = self.help_query.clone();
        }
        self.dirty.set(true);
    }

    fn on_editor_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.editor = Editor::None;
                self.input.clear();
                self.dirty.set(true);
            }
            KeyCode::Enter => self.commit_editor(),
            KeyCode::Backspace => {
                self.input.pop();
                if self.editor == Editor::HelpSearch {
                    self.help_query = self.input.clone();
                }
                self.dirty.set(true);
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input.push(c);
                if self.editor == Editor::HelpSearch {
                    self.help_query = self.input.clone();
                }
                self.dirty.set(true);
            }
            _ => {}
        }
    }

    fn commit_editor(&mut self) {
        let text = self.input.trim().to_string();
        let editor = self.editor;
        self.editor = Editor::None;
        self.input.clear();
        self.dirty.set(true);

        match editor {
            Editor::None => {}
            Editor::HelpSearch => {
                // Query already applied while typing; Enter just closes.
            }
            _ if text.is_empty() => {}
            Editor::Message => {
                let now = Utc::now();
                self.store
                    .dispatch(Action::Messages(MessagesIntent::AddMessage(Message {
                        id: now.timestamp_millis(),
                        sender: "You".to_string(),
                        message: text,
                        timestamp: now.to_rfc3339(),
                    })));
            }
            Editor::Comment { post_id } => {
                self.store
                    .dispatch(Action::Community(CommunityIntent::AddComment {
                        post_id,
                        comment: Comment {
                            username: "You".to_string(),
                            comment: text,
                        },
                    }));
            }
            Editor::NewPost => {
                self.store
                    .dispatch(Action::Community(CommunityIntent::AddPost(Post {
                        id: Utc::now().timestamp_millis(),
                        username: "You".to_string(),
                        profile_pic: "https://via.placeholder.com/50".to_string(),
                        post: text,
                        likes: 0,
                        comments: Vec::new(),
                    })));
                self.post_cursor = 0;
            }
        }
    }
}
