//! Event system
//!
//! Events flow from worker tasks to the UI loop over an mpsc channel; in
//! headless mode they are printed to the console instead.

use crate::logging::should_log_with_env;
use crate::simulation::{SimulationOutcome, SimulationStatus};
use chrono::Local;
use log::Level;
use std::fmt::Display;

/// Which part of the application emitted an event.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Source {
    /// Mock-data generation at startup.
    Catalog,
    /// The simulated crossing run.
    Simulation,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventKind {
    Success,
    Info,
    StateChange,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub source: Source,
    pub msg: String,
    pub timestamp: String,
    pub kind: EventKind,
    pub level: Level,
    /// Simulation phase carried by state-change and completion events.
    pub simulation: Option<SimulationStatus>,
    /// Fixed outcome carried by the completion event.
    pub outcome: Option<SimulationOutcome>,
}

impl Event {
    fn new(source: Source, msg: String, kind: EventKind, level: Level) -> Self {
        Self {
            source,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            kind,
            level,
            simulation: None,
            outcome: None,
        }
    }

    /// Catalog generation notice, shown on headless startup.
    pub fn catalog(msg: String) -> Self {
        Self::new(Source::Catalog, msg, EventKind::Info, Level::Info)
    }

    /// Simulation phase transition. Updates the busy indicator rather than
    /// the activity log.
    pub fn state_change(status: SimulationStatus, msg: String) -> Self {
        let mut event = Self::new(Source::Simulation, msg, EventKind::StateChange, Level::Info);
        event.simulation = Some(status);
        event
    }

    /// Completion of a simulated run, carrying the fixed outcome.
    pub fn simulation_completed(outcome: SimulationOutcome) -> Self {
        let mut event = Self::new(
            Source::Simulation,
            format!("Simulação concluída! {}", outcome),
            EventKind::Success,
            Level::Info,
        );
        event.simulation = Some(SimulationStatus::Completed);
        event.outcome = Some(outcome);
        event
    }

    pub fn should_display(&self) -> bool {
        // State changes drive the busy indicator, not the log.
        if self.kind == EventKind::StateChange {
            return false;
        }
        if self.kind == EventKind::Success || self.level <= Level::Info {
            return true;
        }
        should_log_with_env(self.level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.kind, self.timestamp, self.msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// State changes are filtered from the activity display.
    fn state_changes_are_not_displayed() {
        let event = Event::state_change(SimulationStatus::Running, "busy".to_string());
        assert!(!event.should_display());
        assert_eq!(event.simulation, Some(SimulationStatus::Running));
    }

    #[test]
    /// Completion events carry the fixed outcome and always display.
    fn completion_carries_the_fixed_outcome() {
        let event = Event::simulation_completed(SimulationOutcome::fixed());
        assert!(event.should_display());
        assert_eq!(event.simulation, Some(SimulationStatus::Completed));
        let outcome = event.outcome.expect("completion outcome");
        assert_eq!(outcome.success_rate_percent, 87.3);
    }
}
