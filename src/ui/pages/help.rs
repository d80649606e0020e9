use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};
use ratatui::Frame;

use crate::model::HelpItem;
use crate::ui::app::{App, Editor};
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, TEXT, TEXT_DIM};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let help = app.store().help();
    if help.loading {
        super::loading_placeholder(frame, area, "help topics");
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    if app.editor() == Editor::HelpSearch {
        super::input_line(frame, chunks[0], "Search help", app.input());
    } else {
        let query = if app.help_query().is_empty() {
            "Press / to search".to_string()
        } else {
            format!("Filter: {}", app.help_query())
        };
        let bar = Paragraph::new(Line::from(Span::styled(
            format!(" {}", query),
            Style::default().fg(TEXT_DIM),
        )))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        );
        frame.render_widget(bar, chunks[0]);
    }

    let filtered: Vec<&HelpItem> = help
        .help_items
        .iter()
        .filter(|item| matches_query(item, app.help_query()))
        .collect();

    let items: Vec<ListItem> = if filtered.is_empty() {
        vec![ListItem::new(Line::from(Span::styled(
            "No help topics match your search.",
            Style::default().fg(TEXT_DIM),
        )))]
    } else {
        filtered
            .iter()
            .map(|item| {
                ListItem::new(vec![
                    Line::from(Span::styled(
                        item.question.clone(),
                        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(item.answer.clone(), Style::default().fg(TEXT))),
                    Line::default(),
                ])
            })
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Help center ")
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(list, chunks[1]);
}

/// Case-insensitive substring match over question and answer, mirroring
/// the help page's search box.
fn matches_query(item: &HelpItem, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    item.question.to_lowercase().contains(&query) || item.answer.to_lowercase().contains(&query)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item() -> HelpItem {
        HelpItem {
            question: "What types of payouts are available?".into(),
            answer: "We offer Fixed Pay (monetary), Barter, and Refunds.".into(),
        }
    }

    #[test]
    fn empty_query_matches_everything() {
        assert!(matches_query(&item(), ""));
    }

    #[test]
    fn matches_question_and_answer_case_insensitively() {
        assert!(matches_query(&item(), "PAYOUT"));
        assert!(matches_query(&item(), "barter"));
        assert!(!matches_query(&item(), "messages"));
    }
}
