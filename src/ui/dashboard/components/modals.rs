//! Modal overlay components
//!
//! Renders the busy indicator and the dialog boxes (notifications,
//! add-species stub, simulation result) on top of the active tab.

use super::super::state::{DashboardState, Modal};
use super::super::utils::{centered_rect, severity_color};
use crate::simulation::SimulationOutcome;

use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Wrap};

const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

/// Busy indicator shown for the whole fixed delay of a run.
pub fn render_busy_overlay(f: &mut Frame, state: &DashboardState) {
    let area = centered_rect(44, 20, f.area());
    f.render_widget(Clear, area);

    let spinner = SPINNER_FRAMES[state.tick % SPINNER_FRAMES.len()];
    let busy = Paragraph::new(format!("\n{} Executando simulação... {}", spinner, spinner))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .title("🔬 SIMULAÇÃO")
                .borders(Borders::ALL)
                .border_type(BorderType::Thick)
                .border_style(Style::default().fg(Color::LightGreen)),
        );
    f.render_widget(busy, area);
}

/// Dialog box for the currently open modal.
pub fn render_modal(f: &mut Frame, modal: &Modal, state: &DashboardState) {
    match modal {
        Modal::Notifications => render_notifications(f, state),
        Modal::AddSpecies => render_add_species(f),
        Modal::SimulationResult(outcome) => render_simulation_result(f, outcome),
    }
}

fn render_notifications(f: &mut Frame, state: &DashboardState) {
    let mut lines: Vec<Line> = state
        .dataset
        .notifications
        .iter()
        .map(|notification| {
            Line::from(Span::styled(
                format!("• {}", notification.message),
                Style::default().fg(severity_color(notification.severity)),
            ))
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(close_hint());

    render_dialog(f, "📬 NOTIFICAÇÕES", lines);
}

fn render_add_species(f: &mut Frame) {
    let lines = vec![
        Line::from("🌱 Formulário de cadastro de nova espécie seria aberto aqui."),
        Line::from(""),
        Line::from("Esta funcionalidade incluiria campos para:"),
        Line::from("• Nome científico"),
        Line::from("• Família botânica"),
        Line::from("• Características genéticas"),
        Line::from("• Dados fenotípicos"),
        Line::from("• Condições de cultivo"),
        Line::from(""),
        close_hint(),
    ];

    render_dialog(f, "➕ ADICIONAR ESPÉCIE", lines);
}

fn render_simulation_result(f: &mut Frame, outcome: &SimulationOutcome) {
    let lines = vec![
        Line::from(Span::styled(
            "✅ Simulação concluída!",
            Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!(
            "🧬 Resultado: Taxa de sucesso de {:.1}%",
            outcome.success_rate_percent
        )),
        Line::from(format!(
            "🌱 Características preditas: {}",
            outcome.predicted_traits
        )),
        Line::from(format!(
            "⚠️ Análise de biossegurança: {}",
            outcome.biosafety
        )),
        Line::from(""),
        close_hint(),
    ];

    render_dialog(f, "🔬 RESULTADO", lines);
}

fn close_hint() -> Line<'static> {
    Line::from(Span::styled(
        "[Esc] Fechar",
        Style::default().fg(Color::DarkGray),
    ))
}

fn render_dialog(f: &mut Frame, title: &str, lines: Vec<Line>) {
    let area = centered_rect(62, 45, f.area());
    f.render_widget(Clear, area);

    let dialog = Paragraph::new(lines)
        .block(
            Block::default()
                .title(title.to_string())
                .borders(Borders::ALL)
                .border_type(BorderType::Thick)
                .border_style(Style::default().fg(Color::Cyan))
                .padding(Padding::uniform(1)),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(dialog, area);
}
