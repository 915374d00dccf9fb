//! Scene geometry and tick rate

use serde::{Deserialize, Serialize};

/// Screen and arena parameters the core accepts instead of hardcoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Screen width (px) (default: 800)
    pub width: f32,
    /// Screen height (px) (default: 600)
    pub height: f32,
    /// Landing line for the head anchor; fighters spawn here (default: 450)
    pub ground_y: f32,
    /// Decorative floor line drawn under the fighters (default: 450)
    pub floor_line_y: f32,
    /// Fighters are kept inside [margin, width - margin] (default: 50)
    pub margin: f32,
    /// Target tick rate (default: 30)
    pub fps: u32,
    /// Camera frame width used by head-region movement (default: 640)
    pub camera_width: f32,
    /// Spawn x of the left fighter as a fraction of width (default: 0.25)
    pub left_spawn_ratio: f32,
    /// Spawn x of the right fighter as a fraction of width (default: 0.75)
    pub right_spawn_ratio: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            ground_y: 450.0,
            floor_line_y: 450.0,
            margin: 50.0,
            fps: 30,
            camera_width: 640.0,
            left_spawn_ratio: 0.25,
            right_spawn_ratio: 0.75,
        }
    }
}

impl SceneConfig {
    /// Clamp an x coordinate into the playable strip.
    pub fn clamp_x(&self, x: f32) -> f32 {
        x.max(self.margin).min(self.width - self.margin)
    }

    /// Spawn points (left fighter, right fighter) on the ground line.
    pub fn spawn_points(&self) -> [(f32, f32); 2] {
        [
            (self.width * self.left_spawn_ratio, self.ground_y),
            (self.width * self.right_spawn_ratio, self.ground_y),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_x() {
        let scene = SceneConfig::default();
        assert_eq!(scene.clamp_x(10.0), 50.0);
        assert_eq!(scene.clamp_x(790.0), 750.0);
        assert_eq!(scene.clamp_x(400.0), 400.0);
    }

    #[test]
    fn test_spawn_points_match_classic_layout() {
        let scene = SceneConfig::default();
        assert_eq!(scene.spawn_points(), [(200.0, 450.0), (600.0, 450.0)]);
    }
}
