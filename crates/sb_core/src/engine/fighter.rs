//! Fighter State Machine
//!
//! One combatant: position, health, timed action channels and jump state.
//!
//! ## Tick order
//! ```text
//! (a) integrate jump physics
//! (b) advance the active attack/defense channel
//! (c) accept new requests: move, jump, attack-left, attack-right, defend
//! ```
//!
//! ## Acceptance rules
//! - jump: only while grounded
//! - attack: only when no attack and no guard is running
//! - defend: only when no attack and no guard is running
//! - take_damage: fully absorbed while guarding

use serde::Serialize;

use super::channels::{AttackChannel, DefenseChannel, JumpState};
use super::input::ActionRequest;
use super::types::{Arm, Side};
use crate::config::{ChannelLayout, FighterConfig, SceneConfig, HEALTH_CAP};
use crate::render::Rgb;

/// What step (c) actually accepted this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct AppliedActions {
    pub moved: bool,
    pub jumped: bool,
    pub attack: Option<Arm>,
    pub defended: bool,
}

#[derive(Debug, Clone)]
pub struct Fighter {
    side: Side,
    pub x: f32,
    pub y: f32,
    color: Rgb,
    /// Spawned on the right, facing left
    flip: bool,
    facing_right: bool,
    health: u32,

    left: AttackChannel,
    right: AttackChannel,
    defense: DefenseChannel,
    jump: JumpState,

    is_moving: bool,
    animation_frame: f32,

    config: FighterConfig,
}

impl Fighter {
    pub fn new(side: Side, x: f32, y: f32, color: Rgb, flip: bool, config: FighterConfig) -> Self {
        let rest = config.rest_arm_length;
        Self {
            side,
            x,
            y,
            color,
            flip,
            facing_right: !flip,
            health: config.max_health.min(HEALTH_CAP),
            left: AttackChannel::new(rest),
            right: AttackChannel::new(rest),
            defense: DefenseChannel::default(),
            jump: JumpState::default(),
            is_moving: false,
            animation_frame: 0.0,
            config,
        }
    }

    // ========== Accessors ==========

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn flip(&self) -> bool {
        self.flip
    }

    pub fn facing_right(&self) -> bool {
        self.facing_right
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    /// Configured starting health, capped at `HEALTH_CAP`
    pub fn max_health(&self) -> u32 {
        self.config.max_health.min(HEALTH_CAP)
    }

    pub fn is_knocked_out(&self) -> bool {
        self.health == 0
    }

    pub fn config(&self) -> &FighterConfig {
        &self.config
    }

    pub fn layout(&self) -> ChannelLayout {
        self.config.channels
    }

    /// Arm that punches in the single-channel layout
    pub fn lead_arm(&self) -> Arm {
        if self.flip {
            Arm::Left
        } else {
            Arm::Right
        }
    }

    pub fn channel(&self, arm: Arm) -> &AttackChannel {
        match arm {
            Arm::Left => &self.left,
            Arm::Right => &self.right,
        }
    }

    fn channel_mut(&mut self, arm: Arm) -> &mut AttackChannel {
        match arm {
            Arm::Left => &mut self.left,
            Arm::Right => &mut self.right,
        }
    }

    pub fn attacking_left(&self) -> bool {
        self.left.active
    }

    pub fn attacking_right(&self) -> bool {
        self.right.active
    }

    pub fn attack_timer_left(&self) -> u32 {
        self.left.timer
    }

    pub fn attack_timer_right(&self) -> u32 {
        self.right.timer
    }

    pub fn punch_scale_left(&self) -> f32 {
        self.left.punch_scale
    }

    pub fn punch_scale_right(&self) -> f32 {
        self.right.punch_scale
    }

    pub fn arm_length_left(&self) -> f32 {
        self.left.arm_length
    }

    pub fn arm_length_right(&self) -> f32 {
        self.right.arm_length
    }

    pub fn defending(&self) -> bool {
        self.defense.active
    }

    pub fn defense_timer(&self) -> u32 {
        self.defense.timer
    }

    pub fn head_scale(&self) -> f32 {
        self.defense.head_scale
    }

    pub fn is_jumping(&self) -> bool {
        self.jump.is_jumping
    }

    pub fn jump_velocity(&self) -> f32 {
        self.jump.velocity
    }

    pub fn is_moving(&self) -> bool {
        self.is_moving
    }

    pub fn animation_frame(&self) -> f32 {
        self.animation_frame
    }

    /// Any of attack-left, attack-right or defend in progress
    pub fn is_busy(&self) -> bool {
        self.left.active || self.right.active || self.defense.active
    }

    // ========== Actions ==========

    pub fn jump(&mut self) -> bool {
        if self.jump.is_jumping {
            return false;
        }
        self.jump.launch(self.config.jump_speed);
        true
    }

    pub fn attack_left(&mut self) -> bool {
        self.start_attack(Arm::Left)
    }

    pub fn attack_right(&mut self) -> bool {
        self.start_attack(Arm::Right)
    }

    fn start_attack(&mut self, requested: Arm) -> bool {
        if self.is_busy() {
            return false;
        }
        let arm = match self.config.channels {
            ChannelLayout::Dual => requested,
            ChannelLayout::Single => self.lead_arm(),
        };
        self.channel_mut(arm).start();
        true
    }

    pub fn defend(&mut self) -> bool {
        if self.is_busy() {
            return false;
        }
        self.defense.start();
        true
    }

    /// Returns false when the guard absorbed the blow.
    pub fn take_damage(&mut self, amount: u32) -> bool {
        if self.defense.active {
            return false;
        }
        self.health = self.health.saturating_sub(amount);
        true
    }

    // ========== Tick ==========

    /// Steps (a) and (b): physics and channel animation against the
    /// opponent's current x.
    pub fn update(&mut self, opponent_x: f32, ground_y: f32) {
        self.animation_frame += self.config.animation_step;

        let (y, _landed) = self.jump.integrate(self.y, self.config.gravity, ground_y);
        self.y = y;

        let cfg = &self.config;
        let rest = cfg.rest_arm_length;
        let reach = (opponent_x - self.x).abs().max(rest).min(cfg.max_reach);
        for arm in [Arm::Left, Arm::Right] {
            let channel = match arm {
                Arm::Left => &mut self.left,
                Arm::Right => &mut self.right,
            };
            channel.advance(cfg.attack_duration, reach, rest, cfg.peak_punch_scale);
        }
        self.defense.advance(cfg.defense_duration, cfg.peak_head_scale);
    }

    /// Step (c): movement first, then jump/attack/defend in order.
    pub fn apply_request(
        &mut self,
        request: &ActionRequest,
        scene: &SceneConfig,
    ) -> AppliedActions {
        let mut applied = AppliedActions::default();

        self.is_moving = false;
        if request.move_left {
            self.x -= self.config.move_speed;
            self.is_moving = true;
            self.facing_right = false;
        }
        if request.move_right {
            self.x += self.config.move_speed;
            self.is_moving = true;
            self.facing_right = true;
        }
        self.x = scene.clamp_x(self.x);
        applied.moved = self.is_moving;

        if request.jump {
            applied.jumped = self.jump();
        }
        if request.attack_left && self.attack_left() {
            applied.attack = Some(self.started_arm(Arm::Left));
        }
        if request.attack_right && self.attack_right() {
            applied.attack = Some(self.started_arm(Arm::Right));
        }
        if request.defend {
            applied.defended = self.defend();
        }

        if applied.jumped || applied.attack.is_some() || applied.defended {
            log::trace!("{:?} accepted {:?}", self.side, applied);
        }
        applied
    }

    fn started_arm(&self, requested: Arm) -> Arm {
        match self.config.channels {
            ChannelLayout::Dual => requested,
            ChannelLayout::Single => self.lead_arm(),
        }
    }

    /// Full tick in the fixed (a), (b), (c) order.
    pub fn tick(
        &mut self,
        opponent_x: f32,
        request: &ActionRequest,
        scene: &SceneConfig,
    ) -> AppliedActions {
        self.update(opponent_x, scene.ground_y);
        self.apply_request(request, scene)
    }

    /// Round restart: full health, idle channels, back at the spawn point.
    pub fn reset_for_round(&mut self, x: f32, y: f32) {
        let rest = self.config.rest_arm_length;
        self.x = x;
        self.y = y;
        self.health = self.max_health();
        self.left.reset(rest);
        self.right.reset(rest);
        self.defense = DefenseChannel::default();
        self.jump = JumpState::default();
        self.is_moving = false;
        self.facing_right = !self.flip;
    }
}
