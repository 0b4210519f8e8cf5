//! Dashboard footer component
//!
//! Renders the key hints for the active tab.

use super::super::state::DashboardState;
use super::super::tabs::Tab;

use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub fn render_footer(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let mut hints = vec!["[1-7/←→] Abas", "[N] Notificações"];
    match state.current_tab() {
        Tab::Database => hints.push("[A] Nova Espécie"),
        Tab::Simulation => {
            hints.push("[S] Simular");
            hints.push("[↑↓/PgUp·PgDn] Parentais");
        }
        _ => {}
    }
    hints.push("[Q] Sair");

    let footer = Paragraph::new(hints.join(" | "))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, area);
}
