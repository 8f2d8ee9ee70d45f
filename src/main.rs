mod config;
mod core;
mod models;
mod store;

use config::Settings;
use core::session::SwipeSession;
use core::SwipeDecision;
use models::Profile;
use tracing::{error, info};

/// Bundled mock deck, stands in for the profile feed the real app loads
const MOCK_PROFILES: &str = include_str!("../data/profiles.json");

/// Simulated frame cadence (~60fps)
const FRAME_MS: f64 = 16.0;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize logging
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&log_level))
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting Roomly swipe demo...");

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        error!("Failed to load configuration, falling back to defaults: {}", e);
        Settings::default()
    });

    let deck: Vec<Profile> = serde_json::from_str(MOCK_PROFILES)?;
    info!(profiles = deck.len(), "mock deck loaded");

    let mut session = SwipeSession::new(&settings);
    session.load_deck(deck);

    let screen_width = settings.screen.width;

    // A hesitant drag first: past half the threshold, then released short of it
    simulate_swipe(&mut session, screen_width * 0.2);

    // Then walk the whole deck, liking every other profile
    let mut card = 0usize;
    while !session.store().is_exhausted() {
        let dx = if card % 2 == 0 {
            screen_width * 0.5
        } else {
            -screen_width * 0.5
        };
        simulate_swipe(&mut session, dx);
        card += 1;
    }
    // The last card still gets its swipe; the cursor just clamps
    simulate_swipe(&mut session, screen_width * 0.5);

    info!(
        matches = session.store().matches().len(),
        deck = session.store().deck().len(),
        "session finished"
    );
    for record in session.store().matches() {
        info!(
            profile_id = record.profile_id(),
            name = %record.profile.name,
            matched_at = %record.matched_at,
            "matched"
        );
    }

    Ok(())
}

/// Drive one full gesture through the session: ramping drag samples, release,
/// then frame ticks until the animation settles.
fn simulate_swipe(session: &mut SwipeSession, final_dx: f64) {
    if let Err(e) = session.gesture_start() {
        error!("unexpected gesture rejection: {}", e);
        return;
    }

    // Ten samples ramping to the final displacement, with a little vertical wobble
    for step in 1..=10 {
        let t = step as f64 / 10.0;
        let dy = 12.0 * (1.0 - t);
        if let Err(e) = session.gesture_update(final_dx * t, dy) {
            error!("drag sample dropped: {}", e);
            return;
        }
        let overlay = session.overlay();
        tracing::debug!(
            dx = final_dx * t,
            signal = session.direction_signal(),
            overlay_opacity = overlay.opacity,
            "drag sample"
        );
    }

    match session.gesture_release() {
        Ok(SwipeDecision::Committed(direction)) => {
            info!(%direction, "gesture committed");
        }
        Ok(SwipeDecision::Reverted) => {
            info!("gesture reverted, card snaps back");
        }
        Err(e) => {
            error!("release failed: {}", e);
            return;
        }
    }

    session.run_until_idle(FRAME_MS);
}
