//! Headless mode execution
//!
//! Prints the generated catalog, runs one simulated crossing and logs its
//! events to the console, then exits. Ctrl+C cancels the run.

use super::setup::SessionData;
use crate::cli_messages::{print_info, print_success, print_warn};
use crate::consts::simulation_consts;
use crate::data::model::Severity;
use crate::events::{Event, EventKind};
use crate::simulation::{self, SimulationStatus};
use std::error::Error;

pub async fn run_headless_mode(mut session: SessionData) -> Result<(), Box<dyn Error>> {
    print_info("Iniciando sessão headless", &session.dataset.summary());

    // Seeded notifications go straight to the console
    for notification in &session.dataset.notifications {
        match notification.severity {
            Severity::Warning => print_warn("Notificação", &notification.message),
            _ => print_info("Notificação", &notification.message),
        }
    }

    let _ = session
        .event_sender
        .send(Event::catalog(format!(
            "Catálogo gerado: {}",
            session.dataset.summary()
        )))
        .await;

    // One simulated run, exactly as the dashboard would trigger it
    let handle = simulation::spawn(session.event_sender.clone(), simulation_consts::RUN_DELAY);

    // Trigger shutdown on Ctrl+C
    let shutdown_sender = session.shutdown_sender.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = shutdown_sender.send(());
        }
    });

    let mut shutdown_receiver = session.shutdown_sender.subscribe();

    // Event loop: log events until the run resolves or shutdown arrives
    loop {
        tokio::select! {
            Some(event) = session.event_receiver.recv() => {
                if event.kind == EventKind::StateChange {
                    print_info("Simulação", &event.msg);
                } else if event.should_display() {
                    println!("{}", event);
                }
                if event.simulation == Some(SimulationStatus::Completed) {
                    break;
                }
            }
            _ = shutdown_receiver.recv() => {
                handle.cancel();
                break;
            }
        }
    }

    print_success("Sessão encerrada", "");
    Ok(())
}
