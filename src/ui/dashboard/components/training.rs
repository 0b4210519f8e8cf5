//! Training tab component
//!
//! Renders the active models panel and the training history table.

use super::super::state::DashboardState;
use super::super::utils::{format_date, model_status_color, training_status_color};
use crate::ui::views::{self, TrainingView};

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Padding, Paragraph, Row, Table, Wrap};

pub fn render(f: &mut Frame, area: Rect, state: &DashboardState) {
    let view = views::training_view(&state.dataset);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(40), Constraint::Fill(1)])
        .split(area);

    render_active_models(f, chunks[0], &view);
    render_history_table(f, chunks[1], &view);
}

fn render_active_models(f: &mut Frame, area: Rect, view: &TrainingView) {
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
                "  Tipo: {} | Precisão: {:.1}% | Amostras: {} | Última Atualização: {}",
                model.algorithm,
                model.accuracy_ratio * 100.0,
                model.trained_samples,
                format_date(model.last_update)
            ),
            Style::default().fg(Color::Gray),
        )));
    }

    let block = Block::default()
        .title("🤖 MODELOS ATIVOS")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

fn render_history_table(f: &mut Frame, area: Rect, view: &TrainingView) {
    let header = Row::new(vec![
        "Modelo",
        "Tipo",
        "Início",
        "Duração",
        "Precisão Final",
        "Status",
    ])
    .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = view
        .history
        .iter()
        .map(|run| {
            Row::new(vec![
                Cell::from(run.label.clone()),
                Cell::from(run.algorithm.clone()),
                Cell::from(format_date(run.started)),
                Cell::from(run.duration.clone()),
                Cell::from(run.accuracy.clone()),
                Cell::from(run.status.to_string())
                    .style(Style::default().fg(training_status_color(run.status))),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(10),
            Constraint::Length(16),
            Constraint::Length(12),
            Constraint::Length(9),
            Constraint::Length(15),
            Constraint::Fill(1),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .title("📊 HISTÓRICO DE TREINAMENTOS")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    f.render_widget(table, area);
}
