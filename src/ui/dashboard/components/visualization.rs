//! Visualization tab component
//!
//! Renders the genealogy example, the family success chart and the
//! adaptability legend.

use super::super::state::DashboardState;
use crate::ui::views::{self, VisualizationView};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{BarChart, Block, BorderType, Borders, Padding, Paragraph};

pub fn render(f: &mut Frame, area: Rect, state: &DashboardState) {
    let view = views::visualization_view(&state.dataset);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Fill(1), Constraint::Length(3)])
        .split(area);

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[0]);

    render_genealogy(f, panels[0], &view);
    render_family_chart(f, panels[1], &view);
    render_legend(f, chunks[1], &view);
}

fn render_genealogy(f: &mut Frame, area: Rect, view: &VisualizationView) {
    let genealogy = &view.genealogy;
    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!("{} {} (Parental A)", genealogy.parent_a.0, genealogy.parent_a.1),
                Style::default().fg(Color::White),
            ),
            Span::styled("   ×   ", Style::default().fg(Color::LightGreen)),
            Span::styled(
                format!("{} {} (Parental B)", genealogy.parent_b.0, genealogy.parent_b.1),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(Span::styled("│", Style::default().fg(Color::LightGreen))),
        Line::from(Span::styled(
            format!("🌱 {}", genealogy.hybrid_note),
            Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    let block = Block::default()
        .title("🌳 ÁRVORE GENEALÓGICA")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}

fn render_family_chart(f: &mut Frame, area: Rect, view: &VisualizationView) {
    let chart = BarChart::default()
        .block(
            Block::default()
                .title("📈 TAXA DE SUCESSO POR FAMÍLIA")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .data(view.family_success.as_slice())
        .max(100)
        .bar_width(13)
        .bar_gap(2)
        .bar_style(Style::default().fg(Color::LightGreen))
        .value_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
        );

    f.render_widget(chart, area);
}

fn render_legend(f: &mut Frame, area: Rect, view: &VisualizationView) {
    let legend = Paragraph::new(view.legend.join("  |  "))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray))
        .block(
            Block::default()
                .title("🗺️ LEGENDA DE ADAPTABILIDADE")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    f.render_widget(legend, area);
}
