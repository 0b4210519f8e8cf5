pub mod ui_consts {
    //! Dashboard timing and buffering constants.

    use std::time::Duration;

    /// Maximum number of events kept in the simulation activity log.
    pub const MAX_ACTIVITY_LOGS: usize = 50;

    /// Buffer size for the worker event channel.
    pub const EVENT_QUEUE_SIZE: usize = 64;

    /// How long the splash screen is shown before the dashboard opens.
    pub const SPLASH_DURATION: Duration = Duration::from_secs(2);

    /// Keyboard polling interval of the UI loop.
    pub const KEY_POLL_INTERVAL: Duration = Duration::from_millis(100);
}

pub mod simulation_consts {
    //! Simulated-run configuration.

    use std::time::Duration;

    /// Fixed duration of a simulated crossing run.
    pub const RUN_DELAY: Duration = Duration::from_secs(3);
}
