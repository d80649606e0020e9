use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::model::Campaign;
use crate::ui::app::App;
use crate::ui::router::Route;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, STATUS_OK, TEXT, TEXT_DIM};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let campaigns = app.store().campaigns();
    if campaigns.loading {
        super::loading_placeholder(frame, area, "campaign");
        return;
    }

    // Prefer the selection, but re-resolve the path parameter against the
    // collection so a stale selection never renders outdated data.
    let route_id = match app.route() {
        Route::CampaignDetails(id) => Some(id),
        _ => None,
    };
    let campaign = route_id
        .and_then(|id| campaigns.campaign_by_id(id))
        .or(campaigns.selected_campaign.as_ref());

    let Some(campaign) = campaign else {
        let paragraph = Paragraph::new("Campaign not found")
            .style(Style::default().fg(TEXT_DIM))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(GLOBAL_BORDER)));
        frame.render_widget(paragraph, area);
        return;
    };

    frame.render_widget(details_widget(campaign), area);
}

fn details_widget(campaign: &Campaign) -> Paragraph<'static> {
    let label = Style::default().fg(TEXT_DIM);
    let value = Style::default().fg(TEXT);

    let mut lines = vec![
        Line::from(Span::styled(
            format!("{} — {}", campaign.brand, campaign.campaign_title),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(vec![
            Span::styled("Payout     ", label),
            Span::styled(
                format!("{} · {}", campaign.payout_type, campaign.payout_amount),
                value,
            ),
        ]),
        Line::from(vec![
            Span::styled("Hiring     ", label),
            Span::styled(campaign.hiring_progress.clone(), Style::default().fg(STATUS_OK)),
        ]),
        Line::from(vec![
            Span::styled("Image      ", label),
            Span::styled(campaign.image.clone(), value),
        ]),
    ];

    if let Some(deadline) = &campaign.application_deadline {
        lines.push(Line::from(vec![
            Span::styled("Apply by   ", label),
            Span::styled(deadline.clone(), value),
        ]));
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(campaign.description.clone(), value)));

    if let Some(requirements) = &campaign.requirements {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Requirements",
            Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
        )));
        for requirement in requirements {
            lines.push(Line::from(Span::styled(
                format!("  • {}", requirement),
                value,
            )));
        }
    }

    Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Campaign details ")
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}
