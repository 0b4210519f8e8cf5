//! Session setup shared by the TUI and headless modes.

use crate::config::{Config, ConfigError, get_config_path};
use crate::consts::ui_consts::EVENT_QUEUE_SIZE;
use crate::data::Dataset;
use crate::events::Event;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::sync::{broadcast, mpsc};

/// Everything a session mode needs to run.
pub struct SessionData {
    pub dataset: Dataset,
    pub profile: Config,
    pub event_receiver: mpsc::Receiver<Event>,
    pub event_sender: mpsc::Sender<Event>,
    pub shutdown_sender: broadcast::Sender<()>,
}

/// Load the researcher profile, generate the dataset and wire the worker
/// channels. A seed fixes the generator for reproducible sessions.
pub fn setup_session(seed: Option<u64>) -> Result<SessionData, ConfigError> {
    let profile = Config::load_or_default(&get_config_path()?);
    let mut rng = rng_from_seed(seed);
    let dataset = Dataset::generate(&mut rng);

    let (event_sender, event_receiver) = mpsc::channel(EVENT_QUEUE_SIZE);
    let (shutdown_sender, _) = broadcast::channel(1);

    Ok(SessionData {
        dataset,
        profile,
        event_receiver,
        event_sender,
        shutdown_sender,
    })
}

/// Seeded RNG when a seed is given, entropy-based otherwise.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// Seeded sessions regenerate the exact same dataset.
    fn seeded_sessions_are_reproducible() {
        let a = Dataset::generate(&mut rng_from_seed(Some(7)));
        let b = Dataset::generate(&mut rng_from_seed(Some(7)));
        assert_eq!(a, b);
    }
}
