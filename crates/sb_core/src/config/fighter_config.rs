//! Fighter animation/physics and combat tuning

use serde::{Deserialize, Serialize};

/// Number of independently timed attack channels per fighter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelLayout {
    /// One lead arm punching toward the fighter's side of the arena
    Single,
    /// Left arm punches toward -x, right arm toward +x
    #[default]
    Dual,
}

/// Health never exceeds this, whatever `max_health` says
pub const HEALTH_CAP: u32 = 100;

/// Per-fighter state machine parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FighterConfig {
    /// Attack length in ticks (default: 20)
    pub attack_duration: u32,
    /// Defense length in ticks (default: 20)
    pub defense_duration: u32,
    /// Per-tick velocity loss while airborne (default: 0.8)
    pub gravity: f32,
    /// Initial jump velocity (default: 15)
    pub jump_speed: f32,
    /// Horizontal step per tick of movement (default: 5)
    pub move_speed: f32,
    /// Resting arm length (default: 40)
    pub rest_arm_length: f32,
    /// Upper clamp for reach (default: 150)
    pub max_reach: f32,
    /// Punch circle scale at full extension (default: 3.0)
    pub peak_punch_scale: f32,
    /// Head scale reached while guarding (default: 3.0)
    pub peak_head_scale: f32,
    /// Starting and maximum health, at most `HEALTH_CAP` (default: 100)
    pub max_health: u32,
    /// Animation accumulator step per tick (default: 0.2)
    pub animation_step: f32,
    pub channels: ChannelLayout,
}

impl Default for FighterConfig {
    fn default() -> Self {
        Self {
            attack_duration: 20,
            defense_duration: 20,
            gravity: 0.8,
            jump_speed: 15.0,
            move_speed: 5.0,
            rest_arm_length: 40.0,
            max_reach: 150.0,
            peak_punch_scale: 3.0,
            peak_head_scale: 3.0,
            max_health: 100,
            animation_step: 0.2,
            channels: ChannelLayout::Dual,
        }
    }
}

/// Hit detection parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatConfig {
    /// A punch connects when the fist lands closer than this (default: 40)
    pub hit_radius: f32,
    /// Damage per connecting punch (default: 10)
    pub damage: u32,
    /// Unscaled head radius (default: 15)
    pub head_radius: f32,
    /// Shoulder line sits this far below the bottom of the head (default: 15)
    pub arm_joint_offset: f32,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self { hit_radius: 40.0, damage: 10, head_radius: 15.0, arm_joint_offset: 15.0 }
    }
}
