//! Input acquisition - per-fighter controllers
//!
//! A keyboard fighter maps pressed keys straight to actions; a vision fighter
//! feeds its landmark buffers and asks the gesture classifier. Both produce
//! an [`ActionRequest`] for step (c) of the fighter tick.

use serde::{Deserialize, Serialize};

use super::types::Side;
use crate::classifier::{GestureClassifier, GestureFlags};
use crate::config::GameConfig;
use crate::signal::{LandmarkBuffers, PoseSample};

/// Discrete action requests for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ActionRequest {
    #[serde(default)]
    pub move_left: bool,
    #[serde(default)]
    pub move_right: bool,
    #[serde(default)]
    pub jump: bool,
    #[serde(default)]
    pub attack_left: bool,
    #[serde(default)]
    pub attack_right: bool,
    #[serde(default)]
    pub defend: bool,
}

impl ActionRequest {
    pub const NONE: ActionRequest = ActionRequest {
        move_left: false,
        move_right: false,
        jump: false,
        attack_left: false,
        attack_right: false,
        defend: false,
    };

    pub fn is_empty(&self) -> bool {
        *self == Self::NONE
    }
}

impl From<GestureFlags> for ActionRequest {
    fn from(flags: GestureFlags) -> Self {
        Self {
            move_left: flags.moving_left,
            move_right: flags.moving_right,
            jump: flags.jumping,
            attack_left: flags.attacking_left,
            attack_right: flags.attacking_right,
            defend: flags.defending,
        }
    }
}

/// Raw per-side input for one tick, as delivered by the capture layer
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SideInput {
    #[serde(default)]
    pub pose: PoseSample,
    /// Names of keys currently held down
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keys: Vec<String>,
}

// ============================================================================
// Keyboard
// ============================================================================

/// Key names for the six logical actions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindings {
    pub move_left: String,
    pub move_right: String,
    pub jump: String,
    pub attack_left: String,
    pub attack_right: String,
    pub defend: String,
}

impl KeyBindings {
    /// a/d walk, w jump, f/h punch, g guard
    pub fn player_one() -> Self {
        Self {
            move_left: "a".into(),
            move_right: "d".into(),
            jump: "w".into(),
            attack_left: "f".into(),
            attack_right: "h".into(),
            defend: "g".into(),
        }
    }

    /// arrows walk/jump, comma/period punch, slash guard
    pub fn player_two() -> Self {
        Self {
            move_left: "left".into(),
            move_right: "right".into(),
            jump: "up".into(),
            attack_left: "comma".into(),
            attack_right: "period".into(),
            defend: "slash".into(),
        }
    }

    pub fn for_side(side: Side) -> Self {
        match side {
            Side::One => Self::player_one(),
            Side::Two => Self::player_two(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct KeyboardController {
    bindings: KeyBindings,
}

impl KeyboardController {
    pub fn new(bindings: KeyBindings) -> Self {
        Self { bindings }
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    /// Key names compare case-insensitively.
    pub fn request<S: AsRef<str>>(&self, pressed: &[S]) -> ActionRequest {
        let held = |key: &str| pressed.iter().any(|p| p.as_ref().eq_ignore_ascii_case(key));
        ActionRequest {
            move_left: held(&self.bindings.move_left),
            move_right: held(&self.bindings.move_right),
            jump: held(&self.bindings.jump),
            attack_left: held(&self.bindings.attack_left),
            attack_right: held(&self.bindings.attack_right),
            defend: held(&self.bindings.defend),
        }
    }
}

// ============================================================================
// Pose
// ============================================================================

/// Owns the signal buffers of a vision-controlled fighter
#[derive(Debug, Clone)]
pub struct PoseController {
    buffers: LandmarkBuffers,
    classifier: GestureClassifier,
    /// Ticks on which inference was skipped
    degraded_ticks: u64,
}

impl PoseController {
    pub fn new(config: &GameConfig) -> Self {
        let cls = &config.classifier;
        Self {
            buffers: LandmarkBuffers::new(cls.hand_window, cls.head_window),
            classifier: GestureClassifier::new(cls.clone(), config.scene.camera_width),
            degraded_ticks: 0,
        }
    }

    pub fn buffers(&self) -> &LandmarkBuffers {
        &self.buffers
    }

    pub fn degraded_ticks(&self) -> u64 {
        self.degraded_ticks
    }

    /// Push this tick's observation (carry-forward on misses), then classify.
    ///
    /// A degraded classifier outcome is logged and yields no actions.
    pub fn acquire(&mut self, sample: &PoseSample) -> ActionRequest {
        self.buffers.push(sample);
        match self.classifier.classify(&self.buffers, sample) {
            Ok(flags) => {
                if flags.any() {
                    log::trace!("gestures: {:?}", flags);
                }
                flags.into()
            }
            Err(err) => {
                self.degraded_ticks += 1;
                log::debug!("gesture inference skipped: {}", err);
                ActionRequest::NONE
            }
        }
    }

    /// Full match reset
    pub fn reset(&mut self) {
        self.buffers.clear();
        self.degraded_ticks = 0;
    }
}

// ============================================================================
// Controller
// ============================================================================

/// Serializable controller choice for scripts and sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ControllerSpec {
    Keyboard {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        bindings: Option<KeyBindings>,
    },
    Pose,
    /// Never acts (training dummy)
    Idle,
}

impl ControllerSpec {
    pub fn build(&self, side: Side, config: &GameConfig) -> Controller {
        match self {
            ControllerSpec::Keyboard { bindings } => Controller::Keyboard(KeyboardController::new(
                bindings.clone().unwrap_or_else(|| KeyBindings::for_side(side)),
            )),
            ControllerSpec::Pose => Controller::Pose(PoseController::new(config)),
            ControllerSpec::Idle => Controller::Idle,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Controller {
    Keyboard(KeyboardController),
    Pose(PoseController),
    Idle,
}

impl Controller {
    pub fn acquire(&mut self, input: &SideInput) -> ActionRequest {
        match self {
            Controller::Keyboard(keyboard) => keyboard.request(input.keys.as_slice()),
            Controller::Pose(pose) => pose.acquire(&input.pose),
            Controller::Idle => ActionRequest::NONE,
        }
    }

    pub fn reset(&mut self) {
        if let Controller::Pose(pose) = self {
            pose.reset();
        }
    }

    pub fn as_pose(&self) -> Option<&PoseController> {
        match self {
            Controller::Pose(pose) => Some(pose),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point2D;

    #[test]
    fn test_keyboard_mapping() {
        let kb = KeyboardController::new(KeyBindings::player_two());
        let req = kb.request(&["LEFT", "period"]);
        assert!(req.move_left);
        assert!(req.attack_right);
        assert!(!req.jump && !req.defend && !req.attack_left && !req.move_right);

        assert!(kb.request::<&str>(&[]).is_empty());
    }

    #[test]
    fn test_player_one_bindings() {
        let kb = KeyboardController::new(KeyBindings::for_side(Side::One));
        let req = kb.request(&["w".to_string(), "g".to_string()]);
        assert!(req.jump && req.defend);
    }

    #[test]
    fn test_gesture_flags_conversion() {
        let flags = GestureFlags { jumping: true, attacking_left: true, ..GestureFlags::default() };
        let req: ActionRequest = flags.into();
        assert!(req.jump && req.attack_left);
        assert!(!req.attack_right);
    }

    #[test]
    fn test_pose_controller_warmup_then_punch() {
        let config = GameConfig::default();
        let mut pose = PoseController::new(&config);
        let rest = PoseSample {
            left_hand: Some(Point2D::new(260.0, 300.0)),
            right_hand: Some(Point2D::new(380.0, 300.0)),
            head: Some(Point2D::new(320.0, 180.0)),
        };

        for _ in 0..29 {
            assert!(pose.acquire(&rest).is_empty());
        }
        assert_eq!(pose.degraded_ticks(), 29);

        let punch = PoseSample { right_hand: Some(Point2D::new(460.0, 300.0)), ..rest };
        let req = pose.acquire(&punch);
        assert!(req.attack_right);
        assert_eq!(pose.degraded_ticks(), 29);
    }

    #[test]
    fn test_pose_controller_mirrors_head_steps() {
        let mut config = GameConfig::default();
        config.classifier.warmup = false;
        let mut pose = PoseController::new(&config);
        let at = |x: f32| PoseSample {
            left_hand: Some(Point2D::new(260.0, 300.0)),
            right_hand: Some(Point2D::new(380.0, 300.0)),
            head: Some(Point2D::new(x, 180.0)),
        };

        assert!(pose.acquire(&at(320.0)).is_empty());
        let req = pose.acquire(&at(330.0));
        assert!(req.move_left);
        assert!(!req.move_right);
        assert!(!req.attack_left && !req.attack_right);
    }

    #[test]
    fn test_pose_controller_survives_missing_observations() {
        let config = GameConfig::default();
        let mut controller = ControllerSpec::Pose.build(Side::One, &config);
        for _ in 0..40 {
            let req = controller.acquire(&SideInput::default());
            assert!(req.is_empty());
        }
        let buffers = controller.as_pose().unwrap().buffers();
        assert_eq!(buffers.head.len(), 30);
        assert_eq!(buffers.left_hand.len(), 15);

        controller.reset();
        assert!(controller.as_pose().unwrap().buffers().head.is_empty());
    }

    #[test]
    fn test_controller_spec_json() {
        let spec: ControllerSpec = serde_json::from_str(r#"{"kind":"keyboard"}"#).unwrap();
        assert_eq!(spec, ControllerSpec::Keyboard { bindings: None });
        let spec: ControllerSpec = serde_json::from_str(r#"{"kind":"pose"}"#).unwrap();
        assert_eq!(spec, ControllerSpec::Pose);
    }
}
