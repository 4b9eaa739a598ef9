//! Roach Dance Simulation
//!
//! Runs the FancyRoach machine on software timers and logging motors.
//!
//! Key concepts:
//! - Parent/child composition (the dance runs inside `Dancing`)
//! - Timer-driven transitions
//! - Events bubbling up when no machine handles them
//!
//! Run with: RUST_LOG=hsmkit=debug cargo run --example roach_dance
//! Optionally pass a JSON config file as the first argument.

use hsmkit::config::RoachConfig;
use hsmkit::core::Event;
use hsmkit::roach::{FancyRoach, RoachBoard, RoachEvent, TracingMotors};
use hsmkit::runtime::{Framework, DEFAULT_QUEUE_CAPACITY};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hsmkit=info")),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => RoachConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => RoachConfig::default(),
    };

    let board = RoachBoard::new(TracingMotors);
    let mut fw = Framework::new(FancyRoach::new(&config), board, DEFAULT_QUEUE_CAPACITY);
    fw.start()?;

    println!("=== Roach Dance ===\n");

    let script = [
        (0, Some(RoachEvent::Bumped)),
        (200, None),
        (400, None),
        (0, Some(RoachEvent::Bumped)),
        (400, None),
        (100, Some(RoachEvent::LightOn)),
        (50, Some(RoachEvent::LightOff)),
    ];

    for (ticks, sensor) in script {
        fw.tick(ticks)?;
        if let Some(event) = sensor {
            fw.post(Event::Domain(event))?;
        }
        let report = fw.run_to_idle()?;
        let label = format!("{sensor:?}");
        println!(
            "after {ticks:>3} ticks {label:<16} -> {:<8} (dance: {:<13}) unhandled: {}",
            fw.machine().state_name(),
            fw.machine().behavior().dance().state_name(),
            report.unhandled,
        );
    }

    println!("\nPath: {:?}", fw.machine().history().get_path());
    println!("\n=== Simulation Complete ===");
    Ok(())
}
