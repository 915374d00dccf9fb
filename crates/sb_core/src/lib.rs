//! # sb_core - Gesture-Driven Stickman Fighting Engine
//!
//! Turns noisy 2D pose keypoints (or key presses) into fighter actions and
//! advances two stick figures through timed punch, guard and jump animation
//! with per-tick hit detection.
//!
//! ## Pipeline (per fighter, per tick)
//! ```text
//! pose source -> SignalBuffer -> GestureClassifier -> Fighter -> combat -> renderer
//! ```
//!
//! ## Features
//! - Deterministic fixed-tick simulation (same script = same transcript)
//! - Configurable scene scale (ground line, screen size, tick rate)
//! - Single or dual attack channel fighters
//! - JSON/YAML scripted matches for headless hosts

// Struct initialization pattern used intentionally
#![allow(clippy::field_reassign_with_default)]

pub mod api;
pub mod classifier;
pub mod config;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod render;
pub mod signal;
pub mod synthetic;

pub use api::{simulate_script, simulate_script_json, MatchScript, MatchTranscript};
pub use classifier::{GestureClassifier, GestureFlags};
pub use config::{GameConfig, PRESET_NAMES};
pub use engine::{
    ActionRequest, ControllerSpec, Fighter, Match, MatchPhase, MatchSession, RoundOutcome, Side,
    SideInput, TickEvent, TickReport,
};
pub use error::{ClassifyError, CoreError, Result};
pub use geometry::Point2D;
pub use render::{DrawCommand, Frame, Rgb};
pub use signal::{PoseSample, SignalBuffer};
pub use synthetic::{Gesture, SynthConfig, SyntheticPose};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;
    use sha2::{Digest, Sha256};

    #[test]
    fn test_synthetic_script_end_to_end() {
        let config = SynthConfig { seed: 42, jitter: 0.5, dropout: 0.0, gesture_ticks: 20 };
        let mut gen = SyntheticPose::new(config).unwrap();
        let script = gen.script(&[Gesture::PunchRight, Gesture::Guard, Gesture::Jump]);

        let transcript = simulate_script(&script).unwrap();
        assert_eq!(transcript.ticks.len(), 90);
        assert_eq!(transcript.degraded_ticks, [29, 0]);

        let started =
            |ev: &TickEvent| matches!(ev, TickEvent::AttackStarted { side: Side::One, .. });
        assert!(transcript.ticks.iter().flat_map(|t| &t.events).any(started));
        assert!(transcript.ticks.iter().any(|t| t.fighters[0].defending));
        assert!(transcript.ticks.iter().any(|t| t.fighters[0].is_jumping));
    }

    #[test]
    fn test_seeded_runs_hash_identically() {
        let run = || {
            let mut gen =
                SyntheticPose::new(SynthConfig { seed: 5, ..SynthConfig::default() }).unwrap();
            let script = gen.script(&[Gesture::PunchLeft, Gesture::StepRight, Gesture::Idle]);
            let json = serde_json::to_string(&simulate_script(&script).unwrap()).unwrap();
            Sha256::digest(json.as_bytes())
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
