//! Simulation tab component
//!
//! Renders the parent selectors, the fixed forecast and risk panels, and
//! the activity panel with the latest run events. The selectors only
//! preview species details; the forecast never depends on them.

use super::super::state::DashboardState;
use super::super::utils::{format_compact_timestamp, source_color};
use crate::events::EventKind;
use crate::ui::views::{self, ParentPanel, SimulationView};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

pub fn render(f: &mut Frame, area: Rect, state: &DashboardState) {
    let view = views::simulation_view(&state.dataset, state.parent1_index, state.parent2_index);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8),
            Constraint::Fill(1),
            Constraint::Length(5),
        ])
        .split(area);

    let selectors = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(46),
            Constraint::Percentage(8),
            Constraint::Percentage(46),
        ])
        .split(chunks[0]);

    render_parent_panel(f, selectors[0], &view.parent1, "↑/↓");
    render_cross_marker(f, selectors[1]);
    render_parent_panel(f, selectors[2], &view.parent2, "PgUp/PgDn");

    let results = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_forecast_panel(f, results[0], &view);
    render_risk_panel(f, results[1], &view);

    render_activity_panel(f, chunks[2], state);
}

fn render_parent_panel(f: &mut Frame, area: Rect, panel: &ParentPanel, keys: &str) {
    let lines = vec![
        Line::from(Span::styled(
            format!("{} {}", panel.icon, panel.selection),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("Família: {}", panel.family),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            format!("Produtividade: {}", panel.productivity),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            format!("Resistências: {}", panel.resistances),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            format!("[{}] trocar espécie", keys),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let block = Block::default()
        .title(panel.heading.clone())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

fn render_cross_marker(f: &mut Frame, area: Rect) {
    let marker = Paragraph::new("\n\n✕")
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(marker, area);
}

fn render_forecast_panel(f: &mut Frame, area: Rect, view: &SimulationView) {
    let hybrid = &view.hybrid;
    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!("🌱 {} ", hybrid.title),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                hybrid.scientific_name,
                Style::default()
                    .fg(Color::Gray)
                    .add_modifier(Modifier::ITALIC),
            ),
        ]),
        Line::from(vec![
            Span::styled("Taxa de Sucesso: ", Style::default().fg(Color::Gray)),
            Span::styled(
                hybrid.success_rate,
                Style::default()
                    .fg(Color::LightGreen)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            format!("Produtividade Estimada: {}", hybrid.productivity),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            format!("Tempo de Cultivo: {}", hybrid.cultivation),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            format!("Valor Nutricional: {}", hybrid.nutrition),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            format!(
                "Resistências Herdadas: {}",
                hybrid.inherited_resistances.join(", ")
            ),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            format!("Confiança da IA: {}%", hybrid.confidence_percent),
            Style::default().fg(Color::LightCyan),
        )),
        Line::from(Span::styled(
            hybrid.confidence_note,
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let block = Block::default()
        .title("📊 RESULTADO DA SIMULAÇÃO")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

fn render_risk_panel(f: &mut Frame, area: Rect, view: &SimulationView) {
    let risk = &view.risk;
    let mut lines = vec![Line::from(vec![
        Span::styled("Nível de Risco: ", Style::default().fg(Color::Gray)),
        Span::styled(
            format!("{} ({}%)", risk.level, risk.level_percent),
            Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
        ),
    ])];

    for factor in &risk.factors {
        let (icon, color) = if factor.warning {
            ("⚠️", Color::Yellow)
        } else {
            ("✅", Color::Green)
        };
        lines.push(Line::from(Span::styled(
            format!("{} {}", icon, factor.text),
            Style::default().fg(color),
        )));
    }

    lines.push(Line::from(Span::styled(
        "Recomendações:",
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )));
    for recommendation in &risk.recommendations {
        lines.push(Line::from(Span::styled(
            format!("• {}", recommendation),
            Style::default().fg(Color::Gray),
        )));
    }

    let block = Block::default()
        .title("⚠️ ANÁLISE DE RISCOS")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

/// Latest run events, newest first, as many as fit the panel.
fn render_activity_panel(f: &mut Frame, area: Rect, state: &DashboardState) {
    let max_logs = (area.height.saturating_sub(3)) as usize;
    let log_count = max_logs.max(1);

    let log_lines: Vec<Line> = state
        .activity_logs
        .iter()
        .filter(|event| event.should_display())
        .rev()
        .take(log_count)
        .map(|event| {
            let status_icon = match event.kind {
                EventKind::Success => "✅",
                EventKind::Info | EventKind::StateChange => "",
            };
            Line::from(vec![
                Span::raw(format!("{} ", status_icon)),
                Span::styled(
                    format!("{} ", format_compact_timestamp(&event.timestamp)),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    event.msg.clone(),
                    Style::default().fg(source_color(event.source)),
                ),
            ])
        })
        .collect();

    let paragraph = if log_lines.is_empty() {
        Paragraph::new(vec![Line::from("Nenhuma simulação executada nesta sessão")])
    } else {
        Paragraph::new(log_lines)
    };

    let block = Block::default()
        .title("ATIVIDADE")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    f.render_widget(paragraph.block(block).wrap(Wrap { trim: true }), area);
}
