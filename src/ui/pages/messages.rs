use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem};
use ratatui::Frame;

use crate::ui::app::{App, Editor};
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, TEXT, TEXT_DIM};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let messages = app.store().messages();
    if messages.loading {
        super::loading_placeholder(frame, area, "messages");
        return;
    }

    let editing = app.editor() == Editor::Message;
    let (list_area, editor_area) = if editing {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(area);
        (chunks[0], Some(chunks[1]))
    } else {
        (area, None)
    };

    let items: Vec<ListItem> = messages
        .messages
        .iter()
        .map(|message| {
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(
                        message.sender.clone(),
                        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("  {}", message.timestamp),
                        Style::default().fg(TEXT_DIM),
                    ),
                ]),
                Line::from(Span::styled(message.message.clone(), Style::default().fg(TEXT))),
                Line::default(),
            ])
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Messages — newest first ")
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(list, list_area);

    if let Some(editor_area) = editor_area {
        super::input_line(frame, editor_area, "New message", app.input());
    }
}
