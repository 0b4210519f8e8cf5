//! Navigation tab bar component

use super::super::state::DashboardState;
use super::super::tabs::Tab;

use ratatui::Frame;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Tabs};

pub fn render_nav(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let titles: Vec<Line> = Tab::ALL
        .iter()
        .map(|tab| Line::from(format!("{} {}", tab.icon(), tab.label())))
        .collect();

    let tabs = Tabs::new(titles)
        .select(state.current_tab().index())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
        )
        .divider("│");

    f.render_widget(tabs, area);
}
