//! Collaboration tab component
//!
//! Renders the community figures, the discussion forum and the featured
//! projects.

use super::super::state::DashboardState;
use super::super::utils::format_date;
use super::overview::render_stat_cards;
use crate::ui::views::{self, CollaborationView};

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

pub fn render(f: &mut Frame, area: Rect, state: &DashboardState) {
    let view = views::collaboration_view(&state.dataset);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Fill(1)])
        .split(area);

    render_stat_cards(f, chunks[0], &view.stats);

    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_forum(f, content[0], &view);
    render_projects(f, content[1], &view);
}

fn render_forum(f: &mut Frame, area: Rect, view: &CollaborationView) {
    let mut lines = Vec::new();
    for topic in &view.topics {
        lines.push(Line::from(Span::styled(
            topic.title.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!(
                "  por {} — {} · 💬 {} · 👁️ {}",
                topic.author,
                format_date(topic.posted),
                topic.comments,
                topic.views
            ),
            Style::default().fg(Color::Gray),
        )));
    }

    let block = Block::default()
        .title("💬 FÓRUM DE DISCUSSÕES")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

fn render_projects(f: &mut Frame, area: Rect, view: &CollaborationView) {
    let mut lines = Vec::new();
    for project in &view.projects {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} {} ", project.icon, project.title),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("({}%)", project.progress_percent),
                Style::default().fg(Color::LightGreen),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {}", project.description),
            Style::default().fg(Color::Gray),
        )));
        lines.push(Line::from(Span::styled(
            format!("  👥 {} participantes", project.participants),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let block = Block::default()
        .title("🏆 PROJETOS EM DESTAQUE")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}
