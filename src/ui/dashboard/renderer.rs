//! Dashboard main renderer

use super::components::{
    collaboration, database, footer, header, modals, nav, overview, safety, simulation_tab,
    training, visualization,
};
use super::state::DashboardState;
use super::tabs::Tab;
use crate::simulation::SimulationStatus;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(12, 24, 16))),
            f.area(),
        );
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state);
    nav::render_nav(f, main_chunks[1], state);

    // Only the active tab's body is rendered.
    match state.current_tab() {
        Tab::Dashboard => overview::render(f, main_chunks[2], state),
        Tab::Database => database::render(f, main_chunks[2], state),
        Tab::AiTraining => training::render(f, main_chunks[2], state),
        Tab::Simulation => simulation_tab::render(f, main_chunks[2], state),
        Tab::Visualization => visualization::render(f, main_chunks[2], state),
        Tab::Collaboration => collaboration::render(f, main_chunks[2], state),
        Tab::Safety => safety::render(f, main_chunks[2], state),
    }

    footer::render_footer(f, main_chunks[3], state);

    // Overlays paint last so they sit above the active tab.
    if state.simulation_status() == SimulationStatus::Running {
        modals::render_busy_overlay(f, state);
    } else if let Some(modal) = &state.modal {
        modals::render_modal(f, modal, state);
    }
}
