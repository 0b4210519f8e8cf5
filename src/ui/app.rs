//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::config::Config;
use crate::consts::{simulation_consts, ui_consts};
use crate::data::Dataset;
use crate::events::Event as WorkerEvent;
use crate::simulation::{self, SimulationHandle, SimulationStatus};
use crate::ui::dashboard::{DashboardState, Modal, Tab, render_dashboard};
use crate::ui::splash::render_splash;
use crossterm::event::{self, Event, KeyCode};
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::Instant;
use tokio::sync::{broadcast, mpsc};

/// The different screens in the application.
#[derive(Debug)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// Dashboard screen displaying the tabbed research views.
    Dashboard(Box<DashboardState>),
}

/// Application state
#[derive(Debug)]
pub struct App {
    /// The current screen being displayed.
    current_screen: Screen,
    /// Dashboard state prepared at startup, installed when the splash ends.
    pending_dashboard: Option<Box<DashboardState>>,
    /// Receives events from worker tasks.
    event_receiver: mpsc::Receiver<WorkerEvent>,
    /// Cloned into the simulation worker on each run.
    event_sender: mpsc::Sender<WorkerEvent>,
    /// Broadcasts shutdown signal to worker tasks.
    shutdown_sender: broadcast::Sender<()>,
    /// Handle of the in-flight simulated run, if any.
    simulation: Option<SimulationHandle>,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        dataset: Dataset,
        profile: Config,
        event_receiver: mpsc::Receiver<WorkerEvent>,
        event_sender: mpsc::Sender<WorkerEvent>,
        shutdown_sender: broadcast::Sender<()>,
        with_background_color: bool,
    ) -> Self {
        let state = DashboardState::new(dataset, profile, Instant::now(), with_background_color);
        Self {
            current_screen: Screen::Splash,
            pending_dashboard: Some(Box::new(state)),
            event_receiver,
            event_sender,
            shutdown_sender,
            simulation: None,
        }
    }

    /// Install the prepared dashboard state as the current screen.
    fn open_dashboard(&mut self) {
        if let Some(state) = self.pending_dashboard.take() {
            self.current_screen = Screen::Dashboard(state);
        }
    }

    /// Apply a key press. Returns `true` when the application should quit;
    /// quitting cancels an in-flight run and broadcasts shutdown.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        let quit = match &mut self.current_screen {
            Screen::Splash => {
                if matches!(code, KeyCode::Esc | KeyCode::Char('q')) {
                    true
                } else {
                    // Any other key skips the splash screen
                    self.open_dashboard();
                    false
                }
            }
            Screen::Dashboard(state) => match code {
                KeyCode::Char('q') => true,
                KeyCode::Esc => {
                    if state.modal.is_some() {
                        state.close_modal();
                        false
                    } else {
                        true
                    }
                }
                KeyCode::Char(c @ '1'..='7') => {
                    let index = c as usize - '1' as usize;
                    state.select_tab(Tab::ALL[index]);
                    false
                }
                KeyCode::Tab | KeyCode::Right => {
                    state.next_tab();
                    false
                }
                KeyCode::BackTab | KeyCode::Left => {
                    state.previous_tab();
                    false
                }
                KeyCode::Char('n') => {
                    state.toggle_notifications();
                    false
                }
                KeyCode::Char('a') if state.current_tab() == Tab::Database => {
                    state.open_modal(Modal::AddSpecies);
                    false
                }
                KeyCode::Char('s') if state.current_tab() == Tab::Simulation => {
                    // Guard against double invocation: the status flips on
                    // the Running event, so also check the live handle.
                    let already_running = state.simulation_status() == SimulationStatus::Running
                        || self
                            .simulation
                            .as_ref()
                            .is_some_and(|handle| !handle.is_finished());
                    if !already_running {
                        self.simulation = Some(simulation::spawn(
                            self.event_sender.clone(),
                            simulation_consts::RUN_DELAY,
                        ));
                    }
                    false
                }
                KeyCode::Up if state.current_tab() == Tab::Simulation => {
                    state.select_previous_parent1();
                    false
                }
                KeyCode::Down if state.current_tab() == Tab::Simulation => {
                    state.select_next_parent1();
                    false
                }
                KeyCode::PageUp if state.current_tab() == Tab::Simulation => {
                    state.select_previous_parent2();
                    false
                }
                KeyCode::PageDown if state.current_tab() == Tab::Simulation => {
                    state.select_next_parent2();
                    false
                }
                _ => false,
            },
        };

        if quit {
            if let Some(simulation) = &self.simulation {
                simulation.cancel();
            }
            let _ = self.shutdown_sender.send(());
        }
        quit
    }
}

/// Runs the application UI in a loop, handling events and rendering the
/// appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();

    loop {
        // Queue all incoming worker events for processing
        while let Ok(event) = app.event_receiver.try_recv() {
            if let Screen::Dashboard(state) = &mut app.current_screen {
                state.add_event(event);
            }
        }

        // Apply queued events and advance the animation tick
        if let Screen::Dashboard(state) = &mut app.current_screen {
            state.update();
        }

        terminal.draw(|f| render(f, &app.current_screen))?;

        // Handle splash-to-dashboard transition
        if matches!(app.current_screen, Screen::Splash)
            && splash_start.elapsed() >= ui_consts::SPLASH_DURATION
        {
            app.open_dashboard();
            continue;
        }

        // Poll for key events
        if event::poll(ui_consts::KEY_POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }
                if app.handle_key(key.code) {
                    return Ok(());
                }
            }
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, screen: &Screen) {
    match screen {
        Screen::Splash => render_splash(f),
        Screen::Dashboard(state) => render_dashboard(f, state),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::time::Duration;
    use tokio::time::sleep;

    fn test_app() -> (App, broadcast::Receiver<()>) {
        let (event_sender, event_receiver) = mpsc::channel(ui_consts::EVENT_QUEUE_SIZE);
        let (shutdown_sender, shutdown_receiver) = broadcast::channel(1);
        let dataset = Dataset::generate(&mut StdRng::seed_from_u64(9));
        let app = App::new(
            dataset,
            Config::default(),
            event_receiver,
            event_sender,
            shutdown_sender,
            false,
        );
        (app, shutdown_receiver)
    }

    #[tokio::test]
    /// Number keys switch the active tab.
    async fn number_keys_switch_tabs() {
        let (mut app, _shutdown) = test_app();
        app.open_dashboard();
        assert!(!app.handle_key(KeyCode::Char('2')));
        let Screen::Dashboard(state) = &app.current_screen else {
            panic!("dashboard expected");
        };
        assert_eq!(state.current_tab(), Tab::Database);
    }

    #[tokio::test]
    /// A second start while a run is in flight spawns nothing.
    async fn simulation_key_is_guarded_while_running() {
        let (mut app, _shutdown) = test_app();
        app.open_dashboard();
        app.handle_key(KeyCode::Char('4'));
        app.handle_key(KeyCode::Char('s'));
        app.handle_key(KeyCode::Char('s'));
        sleep(Duration::from_millis(50)).await;

        let mut running_events = 0;
        while let Ok(event) = app.event_receiver.try_recv() {
            if event.simulation == Some(SimulationStatus::Running) {
                running_events += 1;
            }
        }
        assert_eq!(running_events, 1);
    }

    #[tokio::test]
    /// The simulation key only works on the simulation tab.
    async fn simulation_key_is_tab_scoped() {
        let (mut app, _shutdown) = test_app();
        app.open_dashboard();
        app.handle_key(KeyCode::Char('s'));
        assert!(app.simulation.is_none());
    }

    #[tokio::test]
    /// Quitting broadcasts the shutdown signal.
    async fn quit_broadcasts_shutdown() {
        let (mut app, mut shutdown) = test_app();
        app.open_dashboard();
        assert!(app.handle_key(KeyCode::Char('q')));
        assert!(shutdown.try_recv().is_ok());
    }

    #[tokio::test]
    /// Escape closes an open modal before it quits the application.
    async fn escape_closes_modal_first() {
        let (mut app, _shutdown) = test_app();
        app.open_dashboard();
        app.handle_key(KeyCode::Char('n'));
        assert!(!app.handle_key(KeyCode::Esc));
        let Screen::Dashboard(state) = &app.current_screen else {
            panic!("dashboard expected");
        };
        assert!(state.modal.is_none());
        assert!(app.handle_key(KeyCode::Esc));
    }
}
