//! Simulated crossing runs.
//!
//! A run is a fire-once worker task: it announces the running phase, waits
//! a fixed delay, then resolves to the same fixed literal outcome. The
//! outcome never depends on which parents are selected in the simulation
//! view. The handle supports cancellation and a double-start guard lives in
//! the key handler.

use crate::events::Event;
use std::fmt::{self, Display, Formatter};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Phase of the simulated crossing run.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default, strum::Display)]
pub enum SimulationStatus {
    #[default]
    Idle,
    Running,
    Completed,
}

/// The fixed predicted outcome every run resolves to.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationOutcome {
    pub success_rate_percent: f64,
    pub predicted_traits: String,
    pub biosafety: String,
}

impl SimulationOutcome {
    pub fn fixed() -> Self {
        Self {
            success_rate_percent: 87.3,
            predicted_traits: "Alta produtividade, resistência a seca".to_string(),
            biosafety: "Aprovada".to_string(),
        }
    }
}

impl Display for SimulationOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Taxa de sucesso de {:.1}% | Características preditas: {} | Análise de biossegurança: {}",
            self.success_rate_percent, self.predicted_traits, self.biosafety
        )
    }
}

/// Handle to an in-flight run.
///
/// Dropping the handle does not stop the task; cancellation is explicit.
#[derive(Debug)]
pub struct SimulationHandle {
    cancel: CancellationToken,
    task: JoinHandle<()>,
}

impl SimulationHandle {
    /// Abort the run. The worker emits an idle state change instead of the
    /// completion event.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

/// Spawn a simulated crossing run that reports over the event channel.
pub fn spawn(events: mpsc::Sender<Event>, delay: Duration) -> SimulationHandle {
    let cancel = CancellationToken::new();
    let token = cancel.clone();
    let task = tokio::spawn(async move {
        let _ = events
            .send(Event::state_change(
                SimulationStatus::Running,
                "Executando simulação...".to_string(),
            ))
            .await;
        tokio::select! {
            _ = token.cancelled() => {
                let _ = events
                    .send(Event::state_change(
                        SimulationStatus::Idle,
                        "Simulação cancelada".to_string(),
                    ))
                    .await;
            }
            _ = tokio::time::sleep(delay) => {
                let _ = events
                    .send(Event::simulation_completed(SimulationOutcome::fixed()))
                    .await;
            }
        }
    });
    SimulationHandle { cancel, task }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventKind;
    use tokio::time::timeout;

    #[tokio::test]
    /// A run announces the running phase, then resolves to the fixed outcome.
    async fn run_resolves_to_the_fixed_outcome() {
        let (sender, mut receiver) = mpsc::channel(8);
        let _handle = spawn(sender, Duration::from_millis(10));

        let started = timeout(Duration::from_secs(2), receiver.recv())
            .await
            .expect("no running event")
            .expect("channel open");
        assert_eq!(started.kind, EventKind::StateChange);
        assert_eq!(started.simulation, Some(SimulationStatus::Running));

        let completed = timeout(Duration::from_secs(2), receiver.recv())
            .await
            .expect("no completion event")
            .expect("channel open");
        assert_eq!(completed.simulation, Some(SimulationStatus::Completed));
        assert_eq!(completed.outcome, Some(SimulationOutcome::fixed()));
    }

    #[tokio::test]
    /// Cancelling a run suppresses the completion event.
    async fn cancellation_suppresses_completion() {
        let (sender, mut receiver) = mpsc::channel(8);
        let handle = spawn(sender, Duration::from_secs(30));

        let started = timeout(Duration::from_secs(2), receiver.recv())
            .await
            .expect("no running event")
            .expect("channel open");
        assert_eq!(started.simulation, Some(SimulationStatus::Running));

        handle.cancel();
        let cancelled = timeout(Duration::from_secs(2), receiver.recv())
            .await
            .expect("no cancellation event")
            .expect("channel open");
        assert_eq!(cancelled.simulation, Some(SimulationStatus::Idle));
        assert!(cancelled.outcome.is_none());

        // Channel drains with no further events from the aborted run.
        assert!(
            timeout(Duration::from_millis(100), receiver.recv())
                .await
                .is_err()
        );
    }

    #[test]
    /// The outcome is a contract value, independent of any selection.
    fn fixed_outcome_matches_contract() {
        let outcome = SimulationOutcome::fixed();
        assert_eq!(outcome.success_rate_percent, 87.3);
        assert_eq!(
            outcome.predicted_traits,
            "Alta produtividade, resistência a seca"
        );
        assert_eq!(outcome.biosafety, "Aprovada");
    }
}
