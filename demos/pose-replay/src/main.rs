//! Replay scripted gesture performances through a full session
//!
//! With no arguments every built-in gesture is replayed in catalog order;
//! otherwise only the named gestures run. Set RUST_LOG=debug to watch the
//! machines advance stage by stage.

use std::error::Error;

use tracing_subscriber::EnvFilter;

use mudra_core::GestureKind;
use mudra_session::InteractionSession;
use mudra_test::{JitterConfig, MotionScript};

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let kinds: Vec<GestureKind> = if args.is_empty() {
        GestureKind::concrete().to_vec()
    } else {
        let mut kinds = Vec::with_capacity(args.len());
        for arg in &args {
            match arg.parse::<GestureKind>() {
                Ok(kind) if !kind.is_pseudo() => kinds.push(kind),
                Ok(kind) => {
                    println!("{} is a pseudo-value, not a performable gesture", kind);
                    print_usage();
                    return Ok(());
                }
                Err(error) => {
                    println!("{}", error);
                    print_usage();
                    return Ok(());
                }
            }
        }
        kinds
    };

    let noise = JitterConfig::default();
    let mut session = InteractionSession::with_catalog();

    println!(
        "Replaying {} gesture(s) with {} m of sensor noise",
        kinds.len(),
        noise.amplitude
    );

    for kind in kinds {
        let script = MotionScript::perform(kind)?.with_jitter(&noise);
        let recognized = script.run_session(&mut session);
        match recognized.len() {
            1 => println!(
                "  {:<16} recognized as \"{}\" after {} frames",
                kind,
                session.label(script.last_timestamp()),
                script.len()
            ),
            0 => println!("  {:<16} not recognized", kind),
            n => println!("  {:<16} reported {} times", kind, n),
        }
    }

    Ok(())
}

fn print_usage() {
    let gestures: Vec<&str> = GestureKind::concrete().iter().map(|k| k.as_str()).collect();
    println!("Usage: pose-replay [gesture ...]");
    println!("Gestures: {}", gestures.join(", "));
    println!("Example: pose-replay WaveRight SwipeLeft GripZoomIn");
}
