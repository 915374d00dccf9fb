//! Timed action channels
//!
//! Each channel counts `0..duration` while active and derives its animation
//! parameter from the timer every tick.
//!
//! ```text
//! attack:  scale 1 -> peak -> 1, arm rest -> reach -> rest
//! defense: head scale 1 -> peak over the first half, then holds until reset
//! jump:    y -= v; v -= gravity; land at ground_y
//! ```

use serde::Serialize;

/// One punching arm
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AttackChannel {
    pub active: bool,
    pub timer: u32,
    pub punch_scale: f32,
    pub arm_length: f32,
}

impl AttackChannel {
    pub fn new(rest_arm_length: f32) -> Self {
        Self { active: false, timer: 0, punch_scale: 1.0, arm_length: rest_arm_length }
    }

    pub fn start(&mut self) {
        self.active = true;
        self.timer = 0;
    }

    /// Advance one tick toward `reach`; returns true when the punch finished.
    ///
    /// Reach is re-measured by the caller every tick.
    pub fn advance(&mut self, duration: u32, reach: f32, rest: f32, peak_scale: f32) -> bool {
        if !self.active {
            return false;
        }
        self.timer += 1;

        let half = duration as f32 / 2.0;
        let t = self.timer as f32;
        if t <= half {
            let progress = t / half;
            self.punch_scale = 1.0 + progress * (peak_scale - 1.0);
            self.arm_length = rest + progress * (reach - rest);
        } else {
            let progress = (t - half) / half;
            self.punch_scale = peak_scale - progress * (peak_scale - 1.0);
            self.arm_length = rest + ((duration as f32 - t) / half) * (reach - rest);
        }

        if self.timer >= duration {
            self.reset(rest);
            return true;
        }
        false
    }

    /// True only on the single tick of full extension.
    pub fn at_full_extension(&self, duration: u32) -> bool {
        self.active && self.timer == duration / 2
    }

    pub fn reset(&mut self, rest: f32) {
        *self = Self::new(rest);
    }
}

/// Guard channel
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DefenseChannel {
    pub active: bool,
    pub timer: u32,
    pub head_scale: f32,
}

impl Default for DefenseChannel {
    fn default() -> Self {
        Self { active: false, timer: 0, head_scale: 1.0 }
    }
}

impl DefenseChannel {
    pub fn start(&mut self) {
        self.active = true;
        self.timer = 0;
    }

    /// Ramp up over the first half, then hold; snap back at `duration`.
    pub fn advance(&mut self, duration: u32, peak_scale: f32) -> bool {
        if !self.active {
            return false;
        }
        self.timer += 1;

        let half = duration as f32 / 2.0;
        let t = self.timer as f32;
        if t <= half {
            self.head_scale = 1.0 + (t / half) * (peak_scale - 1.0);
        }

        if self.timer >= duration {
            *self = Self::default();
            return true;
        }
        false
    }
}

/// Airborne sub-state
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct JumpState {
    pub is_jumping: bool,
    pub velocity: f32,
}

impl JumpState {
    pub fn launch(&mut self, speed: f32) {
        self.is_jumping = true;
        self.velocity = speed;
    }

    /// Integrate one tick; returns the new y and whether the fighter landed.
    pub fn integrate(&mut self, y: f32, gravity: f32, ground_y: f32) -> (f32, bool) {
        if !self.is_jumping {
            return (y, false);
        }
        let mut y = y - self.velocity;
        self.velocity -= gravity;

        if y >= ground_y {
            y = ground_y;
            *self = Self::default();
            return (y, true);
        }
        (y, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DURATION: u32 = 20;

    #[test]
    fn test_attack_ramp_and_retract() {
        let mut ch = AttackChannel::new(40.0);
        ch.start();

        let mut scales = Vec::new();
        let mut lengths = Vec::new();
        for _ in 0..DURATION {
            ch.advance(DURATION, 100.0, 40.0, 3.0);
            scales.push(ch.punch_scale);
            lengths.push(ch.arm_length);
        }

        // tick 5: halfway out
        assert!((scales[4] - 2.0).abs() < 1e-5);
        assert!((lengths[4] - 70.0).abs() < 1e-4);
        // tick 10: full extension
        assert!((scales[9] - 3.0).abs() < 1e-6);
        assert!((lengths[9] - 100.0).abs() < 1e-4);
        // tick 15: halfway back
        assert!((scales[14] - 2.0).abs() < 1e-5);
        assert!((lengths[14] - 70.0).abs() < 1e-4);
        // tick 20: reset
        assert!(!ch.active);
        assert_eq!(ch.timer, 0);
        assert_eq!(scales[19], 1.0);
        assert_eq!(lengths[19], 40.0);
    }

    #[test]
    fn test_full_extension_is_single_tick() {
        let mut ch = AttackChannel::new(40.0);
        ch.start();
        let mut hits = 0;
        for _ in 0..DURATION {
            ch.advance(DURATION, 120.0, 40.0, 3.0);
            if ch.at_full_extension(DURATION) {
                hits += 1;
                assert_eq!(ch.timer, 10);
            }
        }
        assert_eq!(hits, 1);
    }

    #[test]
    fn test_inactive_channel_does_not_advance() {
        let mut ch = AttackChannel::new(40.0);
        assert!(!ch.advance(DURATION, 100.0, 40.0, 3.0));
        assert_eq!(ch.timer, 0);
        assert!(!ch.at_full_extension(DURATION));
    }

    #[test]
    fn test_defense_ramps_then_holds() {
        let mut ch = DefenseChannel::default();
        ch.start();
        for tick in 1..DURATION {
            ch.advance(DURATION, 3.0);
            if tick >= 10 {
                assert!((ch.head_scale - 3.0).abs() < 1e-6, "tick {tick} should hold");
            }
        }
        assert!(ch.active);
        assert!(ch.advance(DURATION, 3.0));
        assert!(!ch.active);
        assert_eq!(ch.head_scale, 1.0);
    }

    #[test]
    fn test_jump_arc_lands_on_ground() {
        let mut jump = JumpState::default();
        jump.launch(15.0);

        let mut y = 450.0;
        let mut apex = y;
        let mut ticks = 0;
        loop {
            let (ny, landed) = jump.integrate(y, 0.8, 450.0);
            y = ny;
            apex = apex.min(y);
            ticks += 1;
            if landed {
                break;
            }
            assert!(ticks < 100);
        }
        assert_eq!(y, 450.0);
        assert!(!jump.is_jumping);
        assert_eq!(jump.velocity, 0.0);
        assert!(apex < 450.0 - 100.0);
    }
}
