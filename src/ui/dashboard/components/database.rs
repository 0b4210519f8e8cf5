//! Database tab component
//!
//! Renders the species catalog table. The filter row is a visual stub: the
//! fields are shown but not wired to any filtering logic.

use super::super::state::DashboardState;
use crate::ui::views;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table};

pub fn render(f: &mut Frame, area: Rect, state: &DashboardState) {
    let view = views::database_view(&state.dataset);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Fill(1)])
        .split(area);

    render_filter_stub(f, chunks[0]);
    render_species_table(f, chunks[1], &view);
}

fn render_filter_stub(f: &mut Frame, area: Rect) {
    let filters = Paragraph::new(
        "🔍 Buscar: __________   Família: Todas   Clima: Todos   (filtros ilustrativos)",
    )
    .style(Style::default().fg(Color::DarkGray))
    .block(
        Block::default()
            .title("FILTROS")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(filters, area);
}

fn render_species_table(f: &mut Frame, area: Rect, view: &views::DatabaseView) {
    let header = Row::new(vec![
        "Espécie",
        "Nome Científico",
        "Tags",
        "Cultivo",
        "Produtividade",
        "Resistências",
    ])
    .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = view
        .species
        .iter()
        .map(|card| {
            Row::new(vec![
                Cell::from(format!("{} {}", card.icon, card.name)),
                Cell::from(card.scientific_name.clone()).style(
                    Style::default()
                        .fg(Color::Gray)
                        .add_modifier(Modifier::ITALIC),
                ),
                Cell::from(card.tags.join(" · ")),
                Cell::from(card.cultivation.clone()),
                Cell::from(card.productivity.clone()),
                Cell::from(card.resistances.clone()),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(14),
            Constraint::Length(24),
            Constraint::Length(32),
            Constraint::Length(10),
            Constraint::Length(14),
            Constraint::Fill(1),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .title("🗃️ BANCO DE DADOS DE ESPÉCIES")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    f.render_widget(table, area);
}
