//! One render function per route. Pages read slice snapshots through the
//! store and never mutate state themselves.

pub mod campaign_details;
pub mod campaigns;
pub mod community;
pub mod help;
pub mod messages;
pub mod profile;

use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::ui::theme::{ACCENT, GLOBAL_BORDER, TEXT, TEXT_DIM};

/// Placeholder shown while a slice's loading flag is set.
fn loading_placeholder(frame: &mut Frame, area: Rect, what: &str) {
    let paragraph = Paragraph::new(Line::from(Span::styled(
        format!("Loading {}…", what),
        Style::default().fg(TEXT_DIM),
    )))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(GLOBAL_BORDER)));
    frame.render_widget(paragraph, area);
}

/// One-line input editor rendered at the bottom of a page.
fn input_line(frame: &mut Frame, area: Rect, title: &str, input: &str) {
    let paragraph = Paragraph::new(Line::from(vec![
        Span::styled(" > ", Style::default().fg(ACCENT)),
        Span::styled(input.to_string(), Style::default().fg(TEXT)),
        Span::styled("█", Style::default().fg(ACCENT)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", title))
            .border_style(Style::default().fg(ACCENT)),
    );
    frame.render_widget(paragraph, area);
}
