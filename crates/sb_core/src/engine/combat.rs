//! Combat Resolution
//!
//! A punch is checked on exactly one tick: the tick its channel timer equals
//! half the attack duration (full extension). The fist sits at
//! `x ± arm_length` on the shoulder line; it connects when it lands closer
//! than `hit_radius` to the opponent's anchor point.

use serde::Serialize;

use super::fighter::Fighter;
use super::types::{Arm, Side};
use crate::config::CombatConfig;
use crate::geometry::Point2D;

/// A punch at full extension this tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Strike {
    pub attacker: Side,
    pub arm: Arm,
    pub fist: Point2D,
    pub distance: f32,
    pub connects: bool,
}

/// A connecting punch after damage was applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Hit {
    pub attacker: Side,
    pub arm: Arm,
    /// The defender's guard swallowed the damage
    pub absorbed: bool,
}

/// Shoulder line y for a fighter
pub fn arm_joint_y(fighter: &Fighter, cfg: &CombatConfig) -> f32 {
    fighter.y + cfg.head_radius * fighter.head_scale() + cfg.arm_joint_offset
}

/// Fist position of `arm` at its current length
pub fn fist_position(fighter: &Fighter, arm: Arm, cfg: &CombatConfig) -> Point2D {
    let length = fighter.channel(arm).arm_length;
    Point2D::new(fighter.x + arm.direction() * length, arm_joint_y(fighter, cfg))
}

/// Punches of `attacker` at full extension this tick, right arm first.
pub fn strikes(attacker: &Fighter, target: &Fighter, cfg: &CombatConfig) -> Vec<Strike> {
    let duration = attacker.config().attack_duration;
    let anchor = Point2D::new(target.x, target.y);

    [Arm::Right, Arm::Left]
        .into_iter()
        .filter(|arm| attacker.channel(*arm).at_full_extension(duration))
        .map(|arm| {
            let fist = fist_position(attacker, arm, cfg);
            let distance = fist.distance_to(anchor);
            Strike {
                attacker: attacker.side(),
                arm,
                fist,
                distance,
                connects: distance < cfg.hit_radius,
            }
        })
        .collect()
}

/// Resolve both fighters for one tick.
///
/// Strikes are measured for both sides before any damage lands, so mutual
/// hits on the same tick both apply regardless of order.
pub fn resolve(fighters: &mut [Fighter; 2], cfg: &CombatConfig) -> Vec<Hit> {
    let pending: Vec<Strike> = strikes(&fighters[0], &fighters[1], cfg)
        .into_iter()
        .chain(strikes(&fighters[1], &fighters[0], cfg))
        .filter(|s| s.connects)
        .collect();

    pending
        .into_iter()
        .map(|strike| {
            let target = &mut fighters[strike.attacker.opponent().index()];
            let absorbed = !target.take_damage(cfg.damage);
            log::debug!(
                "{:?} {:?} punch connects at {:.1}px{}",
                strike.attacker,
                strike.arm,
                strike.distance,
                if absorbed { " (guarded)" } else { "" }
            );
            Hit { attacker: strike.attacker, arm: strike.arm, absorbed }
        })
        .collect()
}
