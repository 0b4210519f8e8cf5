//! Dashboard header component
//!
//! Renders the platform title, the notification badge, the researcher
//! profile and the session status gauge.

use super::super::state::DashboardState;
use crate::simulation::SimulationStatus;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph};

pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let version = env!("CARGO_PKG_VERSION");
    let title_text = format!(
        "🧬 PLANTGEN AI v{}  |  🔔 {}  |  [{}] {} — {}",
        version,
        state.dataset.notifications.len(),
        state.profile.initials(),
        state.profile.researcher_name,
        state.profile.researcher_role,
    );

    let title = Paragraph::new(title_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    // Status gauge: a running simulation animates, otherwise the session
    // is ready (or showing the last completed run).
    let (progress_text, gauge_color, progress_percent) = match state.simulation_status() {
        SimulationStatus::Running => {
            // Loops every 20 ticks for a smooth busy animation
            let progress = ((state.tick % 20) as f64 / 20.0 * 100.0) as u16;
            (
                "SIMULANDO — Executando cruzamento".to_string(),
                Color::LightGreen,
                progress,
            )
        }
        SimulationStatus::Completed => {
            let label = match state.last_outcome() {
                Some(outcome) => format!(
                    "SIMULAÇÃO CONCLUÍDA — {:.1}% de sucesso",
                    outcome.success_rate_percent
                ),
                None => "SIMULAÇÃO CONCLUÍDA — Resultado disponível".to_string(),
            };
            (label, Color::LightBlue, 100)
        }
        SimulationStatus::Idle => (
            "PRONTO — Aguardando comandos".to_string(),
            Color::LightBlue,
            100,
        ),
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .gauge_style(
            Style::default()
                .fg(gauge_color)
                .add_modifier(Modifier::BOLD),
        )
        .percent(progress_percent)
        .label(progress_text);

    f.render_widget(gauge, header_chunks[1]);
}
