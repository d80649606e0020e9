use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{BarChart, Block, Borders, Paragraph};
use ratatui::Frame;

use crate::ui::app::App;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, STATUS_OK, TEXT, TEXT_DIM};

/// Fixed engagement figures for the analytics chart; the platform demo has
/// no real analytics pipeline behind it.
const ENGAGEMENT: [(&str, u64); 6] = [
    ("Mar", 42),
    ("Apr", 58),
    ("May", 51),
    ("Jun", 64),
    ("Jul", 72),
    ("Aug", 69),
];

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let profile_state = app.store().profile();
    if profile_state.loading {
        super::loading_placeholder(frame, area, "profile");
        return;
    }

    let Some(profile) = &profile_state.profile else {
        let paragraph = Paragraph::new("No profile")
            .style(Style::default().fg(TEXT_DIM))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(GLOBAL_BORDER)));
        frame.render_widget(paragraph, area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(10)])
        .split(area);

    let label = Style::default().fg(TEXT_DIM);
    let value = Style::default().fg(TEXT);

    let mut lines = vec![
        Line::from(Span::styled(
            profile.username.clone(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(profile.bio.clone(), value)),
        Line::default(),
        Line::from(vec![
            Span::styled("Instagram  ", label),
            Span::styled(profile.social_links.instagram.clone(), value),
        ]),
        Line::from(vec![
            Span::styled("YouTube    ", label),
            Span::styled(profile.social_links.youtube.clone(), value),
        ]),
        Line::default(),
        Line::from(Span::styled(
            "Past campaigns",
            Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
        )),
    ];
    for past in &profile.past_campaigns {
        lines.push(Line::from(vec![
            Span::styled(format!("  {} — {}  ", past.brand, past.campaign_title), value),
            Span::styled(past.status.clone(), Style::default().fg(STATUS_OK)),
        ]));
    }

    let info = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Profile ")
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(info, chunks[0]);

    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Engagement (posts/month) ")
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
        .data(&ENGAGEMENT)
        .bar_width(5)
        .bar_gap(2)
        .bar_style(Style::default().fg(ACCENT))
        .value_style(Style::default().fg(TEXT).add_modifier(Modifier::BOLD));
    frame.render_widget(chart, chunks[1]);
}
