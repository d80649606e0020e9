use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::app::{App, Editor};
use crate::ui::router::Route;
use crate::ui::theme::{GLOBAL_BORDER, TEXT};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer;

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, app: &App, area: Rect) -> Paragraph<'static> {
        let hints = match (app.editor(), app.route()) {
            (Editor::None, Route::Campaigns) => {
                " ↑/↓: Browse │ Enter: Details │ 1-5/Tab: Pages │ q: Quit"
            }
            (Editor::None, Route::CampaignDetails(_)) => {
                " Esc: Back to campaigns │ 1-5/Tab: Pages │ q: Quit"
            }
            (Editor::None, Route::Community) => {
                " ↑/↓: Browse │ l: Like │ c: Comment │ n: New post │ q: Quit"
            }
            (Editor::None, Route::Messages) => " i: Compose │ 1-5/Tab: Pages │ q: Quit",
            (Editor::None, Route::Profile) => " 1-5/Tab: Pages │ q: Quit",
            (Editor::None, Route::Help) => " /: Search │ Esc: Clear search │ q: Quit",
            (Editor::HelpSearch, _) => " Type to filter │ Enter: Done │ Esc: Cancel",
            _ => " Type your text │ Enter: Send │ Esc: Cancel",
        };
        let version = format!("v{} ", VERSION);

        // Pad using char count, not byte count (for Unicode)
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints.to_string(), text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}
