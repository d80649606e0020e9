use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};
use ratatui::Frame;

use crate::ui::app::App;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, STATUS_OK, TEXT, TEXT_DIM};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let campaigns = app.store().campaigns();
    if campaigns.loading {
        super::loading_placeholder(frame, area, "campaigns");
        return;
    }

    let items: Vec<ListItem> = campaigns
        .campaigns
        .iter()
        .map(|campaign| {
            let title = Line::from(vec![
                Span::styled(
                    campaign.brand.clone(),
                    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" — ", Style::default().fg(TEXT_DIM)),
                Span::styled(campaign.campaign_title.clone(), Style::default().fg(TEXT)),
            ]);
            let detail = Line::from(vec![
                Span::styled(
                    format!("   {} · {}", campaign.payout_type, campaign.payout_amount),
                    Style::default().fg(TEXT_DIM),
                ),
                Span::styled(
                    format!("  {}", campaign.hiring_progress),
                    Style::default().fg(STATUS_OK),
                ),
            ]);
            ListItem::new(vec![title, detail, Line::default()])
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Campaigns — discover and apply ")
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
        .highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT));

    let mut state = ListState::default();
    state.select(Some(app.campaign_cursor()));
    frame.render_stateful_widget(list, area, &mut state);
}
