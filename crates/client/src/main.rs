//! Arena terminal client.
//!
//! Reads one key per line from stdin and redraws a one-line HUD whenever the
//! visible state changes. `1`/`2`/`3` pick a fighter in the menu and a tactic
//! during the fight, an empty line (or `enter`) starts the match, `r`
//! restarts after a result, `s` dumps the current snapshot as JSON, and `q`
//! quits.
//!
//! ```bash
//! ARENA_SEED=7 RUST_LOG=debug cargo run -p arena-client
//! ```
mod hud;

use std::time::Duration;

use anyhow::Result;
use game_core::GameError;
use runtime::{KeyOutcome, RuntimeConfig, Session, parse_key};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::MissedTickBehavior;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = RuntimeConfig::from_env();
    let tick = Duration::from_millis(config.tick_ms);
    tracing::info!(seed = ?config.seed, tick_ms = config.tick_ms, "starting arena");

    let mut session = Session::new(config)?;
    run(&mut session, tick).await?;

    tracing::info!("arena shutdown complete");
    Ok(())
}

async fn run(session: &mut Session, tick: Duration) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut interval = tokio::time::interval(tick);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut last_hud = String::new();

    println!("{}", hud::HELP);

    loop {
        tokio::select! {
            _ = interval.tick() => {
                let snapshot = session.tick();
                for event in session.drain_events() {
                    if let Some(cue) = hud::sound_cue(&event) {
                        tracing::debug!(target: "arena::sfx", cue, "play");
                    }
                }

                let line = hud::render(&snapshot);
                if line != last_hud {
                    println!("{line}");
                    last_hud = line;
                }
            }
            line = lines.next_line() => {
                // EOF on stdin ends the session.
                let Some(line) = line? else {
                    break;
                };
                let token = line.trim();

                if token.eq_ignore_ascii_case("s") {
                    println!("{}", serde_json::to_string_pretty(&session.snapshot())?);
                    continue;
                }

                let key = match parse_key(token) {
                    Ok(key) => key,
                    Err(err) => {
                        println!("{err}");
                        continue;
                    }
                };
                match session.press(key) {
                    Ok(KeyOutcome::Quit) => break,
                    Ok(KeyOutcome::Applied | KeyOutcome::Ignored) => {}
                    Err(err) => {
                        tracing::warn!(code = err.error_code(), "{err}");
                    }
                }
            }
        }
    }

    Ok(())
}
