//! Seeded synthetic pose tracks
//!
//! Stands in for a camera + landmark model: each gesture is a short keyframed
//! motion around a rest pose, with gaussian jitter on every coordinate and
//! random dropouts (missed detections). Same seed, same samples.

use std::fmt;
use std::str::FromStr;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};

use crate::api::{MatchScript, ScriptFrame};
use crate::engine::{ControllerSpec, SideInput};
use crate::error::{CoreError, Result};
use crate::geometry::Point2D;
use crate::signal::{PoseSample, HEAD_WINDOW};

/// Rest pose in camera pixels
pub const REST_HEAD: Point2D = Point2D::new(320.0, 180.0);
pub const REST_LEFT_HAND: Point2D = Point2D::new(260.0, 300.0);
pub const REST_RIGHT_HAND: Point2D = Point2D::new(380.0, 300.0);

const PUNCH_EXTENT: f32 = 120.0;
const JUMP_HEIGHT: f32 = 80.0;
const STEP_SPEED: f32 = 3.0;
const GUARD_HAND_Y: f32 = 150.0;
const GUARD_CROSS: f32 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gesture {
    Idle,
    PunchLeft,
    PunchRight,
    Jump,
    Guard,
    /// Screen-left step. The camera faces the player, so the head drifts
    /// right in the frame.
    StepLeft,
    StepRight,
}

impl Gesture {
    pub const ALL: [Gesture; 7] = [
        Gesture::Idle,
        Gesture::PunchLeft,
        Gesture::PunchRight,
        Gesture::Jump,
        Gesture::Guard,
        Gesture::StepLeft,
        Gesture::StepRight,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Gesture::Idle => "idle",
            Gesture::PunchLeft => "punch_left",
            Gesture::PunchRight => "punch_right",
            Gesture::Jump => "jump",
            Gesture::Guard => "guard",
            Gesture::StepLeft => "step_left",
            Gesture::StepRight => "step_right",
        }
    }
}

impl fmt::Display for Gesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Gesture {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_ascii_lowercase().replace('-', "_");
        Gesture::ALL
            .into_iter()
            .find(|g| g.name() == key)
            .ok_or_else(|| CoreError::InvalidScript(format!("unknown gesture: {}", s)))
    }
}

/// Parse a comma separated gesture list (`"idle,punch_left"`).
pub fn parse_gestures(list: &str) -> Result<Vec<Gesture>> {
    list.split(',').filter(|s| !s.trim().is_empty()).map(str::parse).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SynthConfig {
    pub seed: u64,
    /// Standard deviation of per-coordinate noise (px)
    pub jitter: f32,
    /// Probability that a landmark is missed on a tick
    pub dropout: f64,
    /// Ticks per gesture
    pub gesture_ticks: u32,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self { seed: 0, jitter: 1.5, dropout: 0.05, gesture_ticks: 20 }
    }
}

pub struct SyntheticPose {
    rng: ChaCha8Rng,
    noise: Normal<f32>,
    dropout: f64,
    gesture_ticks: u32,
    /// Horizontal body offset accumulated by steps
    drift_x: f32,
}

impl SyntheticPose {
    pub fn new(config: SynthConfig) -> Result<Self> {
        if !(0.0..=1.0).contains(&config.dropout) {
            return Err(CoreError::invalid("synthetic.dropout", "must be within [0, 1]"));
        }
        if !(config.jitter.is_finite() && config.jitter >= 0.0) {
            return Err(CoreError::invalid("synthetic.jitter", "must be a finite value >= 0"));
        }
        let noise = Normal::new(0.0, config.jitter)
            .map_err(|e| CoreError::invalid("synthetic.jitter", e.to_string()))?;
        Ok(Self {
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            noise,
            dropout: config.dropout,
            gesture_ticks: config.gesture_ticks.max(1),
            drift_x: 0.0,
        })
    }

    /// Noisy samples for one gesture lasting `ticks`.
    pub fn frames(&mut self, gesture: Gesture, ticks: u32) -> Vec<PoseSample> {
        (0..ticks)
            .map(|t| {
                let phase = (t + 1) as f32 / ticks as f32;
                let [left, right, head] = self.keyframe(gesture, phase);
                PoseSample {
                    left_hand: self.observe(left),
                    right_hand: self.observe(right),
                    head: self.observe(head),
                }
            })
            .collect()
    }

    /// Noise-free landmark positions at `phase` in (0, 1].
    fn keyframe(&mut self, gesture: Gesture, phase: f32) -> [Point2D; 3] {
        let swing = if phase <= 0.5 { phase * 2.0 } else { (1.0 - phase) * 2.0 };
        match gesture {
            Gesture::StepLeft => self.drift_x += STEP_SPEED,
            Gesture::StepRight => self.drift_x -= STEP_SPEED,
            _ => {}
        }
        let shift = |p: Point2D, dx: f32, dy: f32| Point2D::new(p.x + self.drift_x + dx, p.y + dy);

        match gesture {
            Gesture::PunchLeft => [
                shift(REST_LEFT_HAND, -PUNCH_EXTENT * swing, 0.0),
                shift(REST_RIGHT_HAND, 0.0, 0.0),
                shift(REST_HEAD, 0.0, 0.0),
            ],
            Gesture::PunchRight => [
                shift(REST_LEFT_HAND, 0.0, 0.0),
                shift(REST_RIGHT_HAND, PUNCH_EXTENT * swing, 0.0),
                shift(REST_HEAD, 0.0, 0.0),
            ],
            Gesture::Jump => {
                let lift = -JUMP_HEIGHT * swing;
                [
                    shift(REST_LEFT_HAND, 0.0, lift),
                    shift(REST_RIGHT_HAND, 0.0, lift),
                    shift(REST_HEAD, 0.0, lift),
                ]
            }
            Gesture::Guard => {
                // wrists cross in front of the chest, above head level
                let chest = Point2D::new(REST_HEAD.x, GUARD_HAND_Y);
                [
                    shift(chest, GUARD_CROSS, 0.0),
                    shift(chest, -GUARD_CROSS, 0.0),
                    shift(REST_HEAD, 0.0, 0.0),
                ]
            }
            Gesture::Idle | Gesture::StepLeft | Gesture::StepRight => [
                shift(REST_LEFT_HAND, 0.0, 0.0),
                shift(REST_RIGHT_HAND, 0.0, 0.0),
                shift(REST_HEAD, 0.0, 0.0),
            ],
        }
    }

    fn observe(&mut self, p: Point2D) -> Option<Point2D> {
        if self.rng.gen_bool(self.dropout) {
            return None;
        }
        let dx = self.noise.sample(&mut self.rng);
        let dy = self.noise.sample(&mut self.rng);
        Some(Point2D::new(p.x + dx, p.y + dy))
    }

    /// Pose script for side one (side two idles): a warm-up of idle ticks
    /// followed by each gesture in turn.
    pub fn script(&mut self, gestures: &[Gesture]) -> MatchScript {
        let ticks = self.gesture_ticks;
        let mut samples = self.frames(Gesture::Idle, HEAD_WINDOW as u32);
        for gesture in gestures {
            samples.extend(self.frames(*gesture, ticks));
        }

        MatchScript {
            controllers: [ControllerSpec::Pose, ControllerSpec::Idle],
            frames: samples
                .into_iter()
                .map(|pose| ScriptFrame {
                    p1: SideInput { pose, keys: Vec::new() },
                    p2: SideInput::default(),
                    repeat: 1,
                })
                .collect(),
            ..MatchScript::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::is_defending;
    use crate::config::GameConfig;
    use crate::engine::{ActionRequest, PoseController};

    fn quiet(seed: u64) -> SyntheticPose {
        let config = SynthConfig { seed, jitter: 0.5, dropout: 0.0, gesture_ticks: 20 };
        SyntheticPose::new(config).unwrap()
    }

    fn run(gen: &mut SyntheticPose, gestures: &[Gesture]) -> Vec<ActionRequest> {
        let mut ctl = PoseController::new(&GameConfig::default());
        let mut out = Vec::new();
        for pose in gen.frames(Gesture::Idle, 30) {
            ctl.acquire(&pose);
        }
        for g in gestures {
            for pose in gen.frames(*g, 20) {
                out.push(ctl.acquire(&pose));
            }
        }
        out
    }

    #[test]
    fn test_gesture_parsing() {
        assert_eq!("punch-left".parse::<Gesture>().unwrap(), Gesture::PunchLeft);
        assert_eq!(
            parse_gestures("idle, jump,guard").unwrap(),
            vec![Gesture::Idle, Gesture::Jump, Gesture::Guard]
        );
        assert!(matches!("kick".parse::<Gesture>(), Err(CoreError::InvalidScript(_))));
        assert_eq!(Gesture::StepRight.to_string(), "step_right");
    }

    #[test]
    fn test_same_seed_same_track() {
        let cfg = SynthConfig { seed: 7, ..SynthConfig::default() };
        let a = SyntheticPose::new(cfg).unwrap().frames(Gesture::Jump, 40);
        let b = SyntheticPose::new(cfg).unwrap().frames(Gesture::Jump, 40);
        assert_eq!(a, b);
        let c =
            SyntheticPose::new(SynthConfig { seed: 8, ..cfg }).unwrap().frames(Gesture::Jump, 40);
        assert_ne!(a, c);
    }

    #[test]
    fn test_rejects_bad_config() {
        let bad_dropout = SynthConfig { dropout: 1.5, ..SynthConfig::default() };
        assert!(SyntheticPose::new(bad_dropout).is_err());
        let bad_jitter =
            |jitter| SyntheticPose::new(SynthConfig { jitter, ..SynthConfig::default() });
        assert!(bad_jitter(-1.0).is_err());
        assert!(bad_jitter(f32::NAN).is_err());
        assert!(bad_jitter(0.0).is_ok());
    }

    #[test]
    fn test_dropout_produces_misses() {
        let config = SynthConfig { dropout: 0.5, ..SynthConfig::default() };
        let mut gen = SyntheticPose::new(config).unwrap();
        let frames = gen.frames(Gesture::Idle, 200);
        let missing = frames.iter().filter(|p| p.head.is_none()).count();
        assert!(missing > 50 && missing < 150);
    }

    #[test]
    fn test_punches_classified() {
        let right = run(&mut quiet(1), &[Gesture::PunchRight]);
        assert!(right.iter().any(|r| r.attack_right));
        assert!(!right.iter().any(|r| r.attack_left));

        let left = run(&mut quiet(2), &[Gesture::PunchLeft]);
        assert!(left.iter().any(|r| r.attack_left));
        assert!(!left.iter().any(|r| r.attack_right));
    }

    #[test]
    fn test_jump_and_steps_classified() {
        assert!(run(&mut quiet(3), &[Gesture::Jump]).iter().any(|r| r.jump));
        assert!(run(&mut quiet(4), &[Gesture::StepLeft]).iter().any(|r| r.move_left));
        assert!(run(&mut quiet(5), &[Gesture::StepRight]).iter().any(|r| r.move_right));
    }

    #[test]
    fn test_guard_pose_is_defending() {
        let mut gen = quiet(6);
        let [left, right, head] = gen.keyframe(Gesture::Guard, 0.5);
        assert!(is_defending(left, right, head));
        assert!(run(&mut quiet(6), &[Gesture::Guard]).iter().all(|r| r.defend));
    }

    #[test]
    fn test_idle_never_attacks() {
        let config = SynthConfig { seed: 11, ..SynthConfig::default() };
        let mut gen = SyntheticPose::new(config).unwrap();
        let out = run(&mut gen, &[Gesture::Idle; 10]);
        assert!(!out.iter().any(|r| r.attack_left || r.attack_right || r.jump || r.defend));
    }

    #[test]
    fn test_script_shape() {
        let mut gen = quiet(9);
        let script = gen.script(&[Gesture::PunchRight, Gesture::Guard]);
        assert_eq!(script.total_ticks(), 30 + 40);
        assert_eq!(script.controllers[0], ControllerSpec::Pose);
        assert!(script.frames.iter().all(|f| f.p2 == SideInput::default()));
    }
}
