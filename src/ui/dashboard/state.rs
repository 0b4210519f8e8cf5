//! Dashboard state management
//!
//! Holds the view selector, the generated collections and the queues that
//! connect worker events to the render loop. The collections themselves are
//! never mutated after startup; handlers only move the selector, the modal
//! overlay and the simulation bookkeeping.

use super::tabs::Tab;
use crate::config::Config;
use crate::consts::ui_consts::MAX_ACTIVITY_LOGS;
use crate::data::Dataset;
use crate::events::Event;
use crate::simulation::{SimulationOutcome, SimulationStatus};

use std::collections::VecDeque;
use std::time::Instant;

/// Modal overlay shown on top of the active tab.
#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    /// All notification messages, concatenated.
    Notifications,
    /// Presentation-only stub for the add-species form.
    AddSpecies,
    /// Fixed result of a completed simulated run.
    SimulationResult(SimulationOutcome),
}

#[derive(Debug)]
pub struct DashboardState {
    /// The collections generated at startup, immutable for the session.
    pub dataset: Dataset,
    /// Researcher profile shown in the header.
    pub profile: Config,
    /// Start of the session, used for computing uptime.
    pub start_time: Instant,
    /// Whether to paint the dashboard background color.
    pub with_background_color: bool,
    /// Animation tick counter.
    pub tick: usize,
    /// Queue of worker events waiting to be processed.
    pub pending_events: VecDeque<Event>,
    /// Processed events kept for the simulation activity panel.
    pub activity_logs: VecDeque<Event>,
    /// Modal overlay, if one is open.
    pub modal: Option<Modal>,
    /// Parent selections on the simulation tab; display-only stubs.
    pub parent1_index: usize,
    pub parent2_index: usize,

    current_tab: Tab,
    simulation_status: SimulationStatus,
    last_outcome: Option<SimulationOutcome>,
}

impl DashboardState {
    pub fn new(
        dataset: Dataset,
        profile: Config,
        start_time: Instant,
        with_background_color: bool,
    ) -> Self {
        Self {
            dataset,
            profile,
            start_time,
            with_background_color,
            tick: 0,
            pending_events: VecDeque::new(),
            activity_logs: VecDeque::new(),
            modal: None,
            parent1_index: 0,
            parent2_index: 1,
            current_tab: Tab::Dashboard,
            simulation_status: SimulationStatus::Idle,
            last_outcome: None,
        }
    }

    pub fn current_tab(&self) -> Tab {
        self.current_tab
    }

    /// Switch the active tab.
    pub fn select_tab(&mut self, tab: Tab) {
        self.current_tab = tab;
    }

    /// Switch by string id. Unknown ids leave the selection unchanged and
    /// return `false`; callers wanting an error parse with `Tab::from_str`.
    pub fn select_tab_by_id(&mut self, id: &str) -> bool {
        match id.parse::<Tab>() {
            Ok(tab) => {
                self.current_tab = tab;
                true
            }
            Err(_) => false,
        }
    }

    pub fn next_tab(&mut self) {
        self.current_tab = self.current_tab.next();
    }

    pub fn previous_tab(&mut self) {
        self.current_tab = self.current_tab.previous();
    }

    pub fn simulation_status(&self) -> SimulationStatus {
        self.simulation_status
    }

    pub fn set_simulation_status(&mut self, status: SimulationStatus) {
        self.simulation_status = status;
    }

    pub fn last_outcome(&self) -> Option<&SimulationOutcome> {
        self.last_outcome.as_ref()
    }

    pub fn set_last_outcome(&mut self, outcome: Option<SimulationOutcome>) {
        self.last_outcome = outcome;
    }

    pub fn open_modal(&mut self, modal: Modal) {
        self.modal = Some(modal);
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    /// Open the notifications dialog, or close it if it is already open.
    pub fn toggle_notifications(&mut self) {
        if self.modal == Some(Modal::Notifications) {
            self.modal = None;
        } else {
            self.modal = Some(Modal::Notifications);
        }
    }

    /// Add an event to the processing queue.
    pub fn add_event(&mut self, event: Event) {
        self.pending_events.push_back(event);
    }

    /// Add an event to the activity log, bounded by [`MAX_ACTIVITY_LOGS`].
    pub fn add_to_activity_log(&mut self, event: Event) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    pub fn select_next_parent1(&mut self) {
        self.parent1_index = (self.parent1_index + 1) % self.dataset.species.len();
    }

    pub fn select_previous_parent1(&mut self) {
        let len = self.dataset.species.len();
        self.parent1_index = (self.parent1_index + len - 1) % len;
    }

    pub fn select_next_parent2(&mut self) {
        self.parent2_index = (self.parent2_index + 1) % self.dataset.species.len();
    }

    pub fn select_previous_parent2(&mut self) {
        let len = self.dataset.species.len();
        self.parent2_index = (self.parent2_index + len - 1) % len;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn state() -> DashboardState {
        let dataset = Dataset::generate(&mut StdRng::seed_from_u64(1));
        DashboardState::new(dataset, Config::default(), Instant::now(), false)
    }

    #[test]
    /// The dashboard opens on the dashboard tab.
    fn initial_tab_is_dashboard() {
        assert_eq!(state().current_tab(), Tab::Dashboard);
    }

    #[test]
    /// Selecting by id activates exactly that tab.
    fn select_tab_by_id_switches_the_active_tab() {
        let mut state = state();
        assert!(state.select_tab_by_id("database"));
        assert_eq!(state.current_tab(), Tab::Database);
        // Every other tab is inactive by construction of the selector.
        let inactive = Tab::ALL
            .iter()
            .filter(|tab| **tab != state.current_tab())
            .count();
        assert_eq!(inactive, 6);
    }

    #[test]
    /// An unknown id is a no-op that reports failure.
    fn select_tab_by_unknown_id_is_a_no_op() {
        let mut state = state();
        state.select_tab(Tab::Simulation);
        assert!(!state.select_tab_by_id("not-a-real-tab"));
        assert_eq!(state.current_tab(), Tab::Simulation);
    }

    #[test]
    /// The activity log is bounded.
    fn activity_log_is_bounded() {
        let mut state = state();
        for i in 0..(MAX_ACTIVITY_LOGS + 10) {
            state.add_to_activity_log(Event::catalog(format!("evento {}", i)));
        }
        assert_eq!(state.activity_logs.len(), MAX_ACTIVITY_LOGS);
        assert!(state.activity_logs[0].msg.ends_with("10"));
    }

    #[test]
    /// The notifications dialog toggles open and closed.
    fn notifications_modal_toggles() {
        let mut state = state();
        state.toggle_notifications();
        assert_eq!(state.modal, Some(Modal::Notifications));
        state.toggle_notifications();
        assert_eq!(state.modal, None);
    }

    #[test]
    /// Parent selection wraps around the eight-species catalog.
    fn parent_selection_wraps() {
        let mut state = state();
        state.parent1_index = 7;
        state.select_next_parent1();
        assert_eq!(state.parent1_index, 0);
        state.select_previous_parent1();
        assert_eq!(state.parent1_index, 7);
        state.parent2_index = 0;
        state.select_previous_parent2();
        assert_eq!(state.parent2_index, 7);
    }
}
