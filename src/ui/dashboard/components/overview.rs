//! Overview tab component (the landing dashboard)
//!
//! Renders the aggregate stat cards, the recent crossings panel and the
//! model performance panel.

use super::super::state::DashboardState;
use super::super::utils::{crossing_status_color, format_date, model_status_color};
use crate::ui::views::{self, DashboardView, StatCard};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

pub fn render(f: &mut Frame, area: Rect, state: &DashboardState) {
    let view = views::dashboard_view(&state.dataset);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Fill(1)])
        .split(area);

    render_stat_cards(f, chunks[0], &view.stats);

    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_recent_crossings(f, content[0], &view);
    render_model_performance(f, content[1], &view);
}

/// Evenly spaced aggregate cards; also used by the collaboration and
/// safety tabs.
pub(crate) fn render_stat_cards(f: &mut Frame, area: Rect, stats: &[StatCard]) {
    if stats.is_empty() {
        return;
    }
    let constraints: Vec<Constraint> = stats
        .iter()
        .map(|_| Constraint::Ratio(1, stats.len() as u32))
        .collect();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (card, chunk) in stats.iter().zip(chunks.iter()) {
        let lines = vec![
            Line::from(Span::styled(
                card.value.clone(),
                Style::default()
                    .fg(Color::LightGreen)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                card.label.clone(),
                Style::default().fg(Color::Gray),
            )),
        ];
        let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        f.render_widget(paragraph, *chunk);
    }
}

fn render_recent_crossings(f: &mut Frame, area: Rect, view: &DashboardView) {
    let mut lines = Vec::new();
    for crossing in &view.recent_crossings {
        lines.push(Line::from(vec![
            Span::styled(
                crossing.pairing.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format!("[{}]", crossing.status),
                Style::default().fg(crossing_status_color(crossing.status)),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!(
                "  Taxa de Sucesso: {:.1}% | Confiança IA: {:.0}%",
                crossing.success_rate_percent,
                crossing.confidence_ratio * 100.0
            ),
            Style::default().fg(Color::Gray),
        )));
    }

    let block = Block::default()
        .title("🧪 CRUZAMENTOS RECENTES")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

fn render_model_performance(f: &mut Frame, area: Rect, view: &DashboardView) {
    let mut lines = Vec::new();
    for model in &view.models {
        lines.push(Line::from(vec![
            Span::styled(
                model.name.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format!("[{}]", model.status),
                Style::default().fg(model_status_color(model.status)),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!(
                "  Precisão: {:.1}% | Amostras: {} | Atualizado: {}",
                model.accuracy_ratio * 100.0,
                model.trained_samples,
                format_date(model.last_update)
            ),
            Style::default().fg(Color::Gray),
        )));
    }

    let block = Block::default()
        .title("📈 PERFORMANCE DOS MODELOS")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}
