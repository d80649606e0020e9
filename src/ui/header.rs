use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::router::{Route, TABS};
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, SEPARATOR, TEXT, TEXT_DIM};

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, route: Route) -> Paragraph<'static> {
        let text_style = Style::default().fg(TEXT);
        let dim_style = Style::default().fg(TEXT_DIM);
        let separator_style = Style::default().fg(SEPARATOR);
        let active_style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);

        let mut spans = vec![
            Span::styled("  creatordeck", active_style),
            Span::styled("  │ ", separator_style),
        ];
        for (index, tab) in TABS.iter().enumerate() {
            let style = if index == route.tab_index() {
                text_style.add_modifier(Modifier::BOLD).fg(ACCENT)
            } else {
                dim_style
            };
            spans.push(Span::styled(format!(" {} {} ", index + 1, tab.title()), style));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}
