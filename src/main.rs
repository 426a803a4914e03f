//! Meteor Shooter entry point
//!
//! Loads settings and runs a headless autopilot session on the system clock.
//! Usage: `meteor-shooter [settings.json]`

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use meteor_shooter::audio::{AudioManager, LogBackend};
use meteor_shooter::demo::Autopilot;
use meteor_shooter::renderer::LogRenderer;
use meteor_shooter::sim::SystemClock;
use meteor_shooter::{Session, SessionOutcome, Settings};

fn main() {
    env_logger::init();
    log::info!("Meteor Shooter (headless) starting...");

    let path = std::env::args().nth(1).map(PathBuf::from);
    let settings = Settings::load(path.as_deref());

    let seed = settings.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    });

    let mut input = Autopilot::new(&settings);
    let mut renderer = LogRenderer::new(u64::from(settings.target_fps));
    let mut audio = AudioManager::from_settings(LogBackend, &settings);
    let mut session = Session::new(settings, seed, SystemClock::new());

    match session.run(&mut input, &mut renderer, &mut audio) {
        SessionOutcome::Quit { score_secs } => {
            log::info!("Demo finished: survived {}s", score_secs);
        }
        SessionOutcome::GameOver { score_secs } => {
            log::info!(
                "Ship destroyed after {}s ({} meteors shot, seed {})",
                score_secs,
                session.state().meteors_destroyed,
                seed
            );
        }
    }
}
