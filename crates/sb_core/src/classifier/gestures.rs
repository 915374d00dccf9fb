//! Configured gesture classifier over a fighter's landmark buffers

use serde::Serialize;

use super::predicates::{
    is_attacking_left_with, is_attacking_right_with, is_defending, is_jumping_with,
    is_moving_left_with, is_moving_right_with,
};
use crate::config::{ClassifierConfig, DefenseMode, MovementMode};
use crate::error::ClassifyError;
use crate::geometry::Point2D;
use crate::signal::{Landmark, LandmarkBuffers, PoseSample};

/// Boolean action predicates for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct GestureFlags {
    pub jumping: bool,
    pub moving_left: bool,
    pub moving_right: bool,
    pub attacking_left: bool,
    pub attacking_right: bool,
    pub defending: bool,
}

impl GestureFlags {
    pub fn any(&self) -> bool {
        self.jumping
            || self.moving_left
            || self.moving_right
            || self.attacking_left
            || self.attacking_right
            || self.defending
    }
}

/// Stateless apart from its configuration; reads windows, returns flags.
#[derive(Debug, Clone)]
pub struct GestureClassifier {
    config: ClassifierConfig,
    camera_width: f32,
}

impl GestureClassifier {
    pub fn new(config: ClassifierConfig, camera_width: f32) -> Self {
        Self { config, camera_width }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Classify the current windows.
    ///
    /// `fresh` is this tick's raw observation; the zone and boundary variants
    /// only fire on landmarks actually detected this tick.
    pub fn classify(
        &self,
        buffers: &LandmarkBuffers,
        fresh: &PoseSample,
    ) -> Result<GestureFlags, ClassifyError> {
        for landmark in [Landmark::LeftHand, Landmark::RightHand, Landmark::Head] {
            if buffers.get(landmark).is_empty() {
                return Err(ClassifyError::EmptyWindow(landmark));
            }
        }
        if self.config.warmup && !buffers.head.is_filled() {
            return Err(ClassifyError::WarmingUp {
                filled: buffers.head.len(),
                capacity: buffers.head.capacity(),
            });
        }

        let cfg = &self.config;
        let head = buffers.head.window();
        let left_hand = buffers.left_hand.window();
        let right_hand = buffers.right_hand.window();
        let mut flags = GestureFlags {
            jumping: is_jumping_with(&head, cfg.jump_threshold),
            attacking_left: is_attacking_left_with(&left_hand, cfg.attack_threshold),
            attacking_right: is_attacking_right_with(&right_hand, cfg.attack_threshold),
            ..GestureFlags::default()
        };

        match cfg.movement {
            MovementMode::HeadDelta => {
                let left = is_moving_left_with(&head, cfg.move_threshold);
                let right = is_moving_right_with(&head, cfg.move_threshold);
                (flags.moving_left, flags.moving_right) =
                    if cfg.mirror_movement { (right, left) } else { (left, right) };
            }
            MovementMode::HeadRegion => {
                if let Some(head) = fresh.head {
                    flags.moving_left = head.x < self.camera_width * cfg.region_left;
                    flags.moving_right = head.x > self.camera_width * cfg.region_right;
                }
            }
            MovementMode::Disabled => {}
        }

        if let Some(boundary) = cfg.boundary_attack {
            if fresh.left_hand.is_some_and(|p| p.x < boundary.left_x) {
                flags.attacking_left = true;
            }
            if fresh.right_hand.is_some_and(|p| p.x > boundary.right_x) {
                flags.attacking_right = true;
            }
        }

        flags.defending = match cfg.defense {
            DefenseMode::CrossedHands => match (
                buffers.left_hand.newest(),
                buffers.right_hand.newest(),
                buffers.head.newest(),
            ) {
                (Some(l), Some(r), Some(h)) => is_defending(l, r, h),
                _ => false,
            },
            DefenseMode::ChestZone => match (fresh.left_hand, fresh.right_hand, fresh.head) {
                (Some(l), Some(r), Some(h)) => self.in_chest_zone(l, h) && self.in_chest_zone(r, h),
                _ => false,
            },
        };

        Ok(flags)
    }

    fn in_chest_zone(&self, hand: Point2D, head: Point2D) -> bool {
        let zone = &self.config.chest_zone;
        let (left, right) = (head.x - zone.half_width, head.x + zone.half_width);
        let (top, bottom) = (head.y + zone.top_offset, head.y + zone.bottom_offset);
        left < hand.x && hand.x < right && top < hand.y && hand.y < bottom
    }
}
