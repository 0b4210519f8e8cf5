//! Dashboard state update logic
//!
//! Applies queued worker events to the dashboard between renders.

use super::state::{DashboardState, Modal};
use crate::events::Event;

impl DashboardState {
    /// Advance the animation tick and apply all queued events.
    pub fn update(&mut self) {
        self.tick = self.tick.wrapping_add(1);

        while let Some(event) = self.pending_events.pop_front() {
            self.add_to_activity_log(event.clone());
            self.process_event(&event);
        }
    }

    /// Apply a single event to the simulation bookkeeping.
    fn process_event(&mut self, event: &Event) {
        if let Some(status) = event.simulation {
            self.set_simulation_status(status);
        }
        if let Some(outcome) = &event.outcome {
            self.set_last_outcome(Some(outcome.clone()));
            self.open_modal(Modal::SimulationResult(outcome.clone()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::data::Dataset;
    use crate::simulation::{SimulationOutcome, SimulationStatus};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::time::Instant;

    fn state() -> DashboardState {
        let dataset = Dataset::generate(&mut StdRng::seed_from_u64(1));
        DashboardState::new(dataset, Config::default(), Instant::now(), false)
    }

    #[test]
    /// Each update advances the animation tick.
    fn update_advances_the_tick() {
        let mut state = state();
        state.update();
        state.update();
        assert_eq!(state.tick, 2);
    }

    #[test]
    /// A running state change flips the busy indicator.
    fn running_event_sets_the_simulation_status() {
        let mut state = state();
        state.add_event(Event::state_change(
            SimulationStatus::Running,
            "Executando simulação...".to_string(),
        ));
        state.update();
        assert_eq!(state.simulation_status(), SimulationStatus::Running);
        assert!(state.pending_events.is_empty());
    }

    #[test]
    /// Completion records the outcome and opens the result dialog.
    fn completion_event_opens_the_result_modal() {
        let mut state = state();
        state.add_event(Event::state_change(
            SimulationStatus::Running,
            "Executando simulação...".to_string(),
        ));
        state.add_event(Event::simulation_completed(SimulationOutcome::fixed()));
        state.update();

        assert_eq!(state.simulation_status(), SimulationStatus::Completed);
        assert_eq!(state.last_outcome(), Some(&SimulationOutcome::fixed()));
        assert_eq!(
            state.modal,
            Some(Modal::SimulationResult(SimulationOutcome::fixed()))
        );
        // Both events were archived for the activity panel.
        assert_eq!(state.activity_logs.len(), 2);
    }
}
