//! Safety tab component
//!
//! Renders the biosafety oversight figures and the compliance table.

use super::super::state::DashboardState;
use super::super::utils::{format_date, review_status_color};
use super::overview::render_stat_cards;
use crate::ui::views::{self, SafetyView};

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Row, Table};

pub fn render(f: &mut Frame, area: Rect, state: &DashboardState) {
    let view = views::safety_view(&state.dataset);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Fill(1)])
        .split(area);

    render_stat_cards(f, chunks[0], &view.stats);
    render_compliance_table(f, chunks[1], &view);
}

fn render_compliance_table(f: &mut Frame, area: Rect, view: &SafetyView) {
    let header = Row::new(vec!["Cruzamento", "Tipo", "Status", "Data"])
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = view
        .reports
        .iter()
        .map(|report| {
            Row::new(vec![
                Cell::from(report.code.clone()),
                Cell::from(report.review.to_string()),
                Cell::from(report.status.to_string())
                    .style(Style::default().fg(review_status_color(report.status))),
                Cell::from(format_date(report.date)),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(12),
            Constraint::Length(12),
            Constraint::Length(12),
            Constraint::Fill(1),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .title("📊 RELATÓRIOS DE CONFORMIDADE")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    f.render_widget(table, area);
}
