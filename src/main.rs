use rps_vision::capture::{fixtures, HandObservation, ScriptedSource};
use rps_vision::coordinator::MatchCoordinatorBuilder;
use rps_vision::error::EngineError;
use rps_vision::present::TerminalPresenter;
use rps_vision::MatchConfig;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::Level;

fn init_logging() {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();
}

/// Round count from the first argument, defaulting to a short match.
fn parse_rounds() -> u32 {
    std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(3)
}

/// Scripted stand-in for a camera: each round replays one pose with a few
/// empty ticks mixed in, cycling paper, rock, scissors, and one pose neither
/// classifier recognizes.
fn replay_source(rounds: u32, samples_per_round: u32) -> ScriptedSource {
    let poses = [
        fixtures::paper(),
        fixtures::rock(),
        fixtures::scissors(),
        fixtures::thumbs_out_fist(),
    ];
    let mut steps: Vec<Option<HandObservation>> = Vec::new();
    for round in 0..rounds {
        let pose = &poses[round as usize % poses.len()];
        for sample in 0..samples_per_round {
            if sample % 4 == 0 {
                steps.push(None);
            } else {
                steps.push(Some(pose.clone()));
            }
        }
    }
    ScriptedSource::new(steps)
}

#[tokio::main]
async fn main() -> Result<(), EngineError> {
    init_logging();

    let config = MatchConfig::default();
    let rounds = parse_rounds();
    let samples_per_round = config.samples_per_round;
    let cancel_token = CancellationToken::new();

    let presenter = TerminalPresenter::new()
        .with_result_hold(Duration::from_secs(2))
        .with_cancel_token(cancel_token.clone());

    let coordinator = MatchCoordinatorBuilder::new(config)
        .rounds(rounds)
        .source(Box::new(replay_source(rounds, samples_per_round)))
        .sink(Box::new(presenter))
        .cancel_token(cancel_token.clone())
        .build()?;

    // Ctrl-C plays the role of the original's ESC key.
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("stop requested");
            cancel_token.cancel();
        }
    });

    coordinator.join().await?;
    Ok(())
}
