use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};
use ratatui::Frame;

use crate::ui::app::{App, Editor};
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, LIKE, TEXT, TEXT_DIM};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let community = app.store().community();
    if community.loading {
        super::loading_placeholder(frame, area, "posts");
        return;
    }

    let editing = matches!(app.editor(), Editor::Comment { .. } | Editor::NewPost);
    let (feed_area, editor_area) = if editing {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(area);
        (chunks[0], Some(chunks[1]))
    } else {
        (area, None)
    };

    let items: Vec<ListItem> = community
        .posts
        .iter()
        .map(|post| {
            let mut lines = vec![
                Line::from(vec![
                    Span::styled(
                        post.username.clone(),
                        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("  ♥ {}", post.likes),
                        Style::default().fg(LIKE),
                    ),
                ]),
                Line::from(Span::styled(post.post.clone(), Style::default().fg(TEXT))),
            ];
            for comment in &post.comments {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("    {}: ", comment.username),
                        Style::default().fg(TEXT_DIM).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(comment.comment.clone(), Style::default().fg(TEXT_DIM)),
                ]));
            }
            lines.push(Line::default());
            ListItem::new(lines)
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Community feed ")
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
        .highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT));

    let mut state = ListState::default();
    state.select(Some(app.post_cursor()));
    frame.render_stateful_widget(list, feed_area, &mut state);

    if let Some(editor_area) = editor_area {
        let title = match app.editor() {
            Editor::NewPost => "New post",
            _ => "Comment",
        };
        super::input_line(frame, editor_area, title, app.input());
    }
}
