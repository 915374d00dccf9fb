//! Health bars and floor line

use serde::Serialize;

use super::primitives::{DrawCommand, Rgb};
use crate::config::SceneConfig;
use crate::engine::{Fighter, Side};
use crate::geometry::Point2D;

pub const BAR_WIDTH: f32 = 200.0;
pub const BAR_HEIGHT: f32 = 24.0;
pub const BAR_Y: f32 = 30.0;
pub const BAR_INSET: f32 = 50.0;
pub const BAR_BORDER: f32 = 2.0;
pub const FLOOR_WIDTH: f32 = 5.0;

/// One fighter's health bar
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HealthBar {
    pub origin: Point2D,
    pub fill_width: f32,
    pub fill_color: Rgb,
}

impl HealthBar {
    pub fn for_fighter(fighter: &Fighter, scene: &SceneConfig) -> Self {
        let x = match fighter.side() {
            Side::One => BAR_INSET,
            Side::Two => scene.width - BAR_WIDTH - BAR_INSET,
        };
        let max = fighter.max_health().max(1) as f32;
        let ratio = fighter.health() as f32 / max;
        Self {
            origin: Point2D::new(x, BAR_Y),
            fill_width: BAR_WIDTH * ratio,
            fill_color: fill_color(ratio, fighter.color()),
        }
    }

    /// Background, fill, then border.
    pub fn commands(&self) -> [DrawCommand; 3] {
        [
            DrawCommand::filled_rect(self.origin, BAR_WIDTH, BAR_HEIGHT, Rgb::LIGHT_GRAY),
            DrawCommand::filled_rect(self.origin, self.fill_width, BAR_HEIGHT, self.fill_color),
            DrawCommand::Rect {
                origin: self.origin,
                width: BAR_WIDTH,
                height: BAR_HEIGHT,
                color: Rgb::BLACK,
                border: BAR_BORDER,
            },
        ]
    }
}

/// Own color above 60%, orange above 30%, crimson below.
pub fn fill_color(ratio: f32, own: Rgb) -> Rgb {
    if ratio > 0.6 {
        own
    } else if ratio > 0.3 {
        Rgb::ORANGE
    } else {
        Rgb::CRIMSON
    }
}

pub fn floor_line(scene: &SceneConfig) -> DrawCommand {
    DrawCommand::line(
        Point2D::new(0.0, scene.floor_line_y),
        Point2D::new(scene.width, scene.floor_line_y),
        FLOOR_WIDTH,
        Rgb::BLACK,
    )
}

pub fn compose_hud(fighters: &[Fighter; 2], scene: &SceneConfig) -> Vec<DrawCommand> {
    fighters
        .iter()
        .flat_map(|f| HealthBar::for_fighter(f, scene).commands())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FighterConfig;

    #[test]
    fn test_fill_color_bands() {
        assert_eq!(fill_color(1.0, Rgb::BLUE), Rgb::BLUE);
        assert_eq!(fill_color(0.61, Rgb::BLUE), Rgb::BLUE);
        assert_eq!(fill_color(0.6, Rgb::BLUE), Rgb::ORANGE);
        assert_eq!(fill_color(0.31, Rgb::BLUE), Rgb::ORANGE);
        assert_eq!(fill_color(0.3, Rgb::BLUE), Rgb::CRIMSON);
        assert_eq!(fill_color(0.0, Rgb::BLUE), Rgb::CRIMSON);
    }

    #[test]
    fn test_bar_placement() {
        let scene = SceneConfig::default();
        let mut right =
            Fighter::new(Side::Two, 600.0, 450.0, Rgb::BLUE, true, FighterConfig::default());
        right.take_damage(50);

        let bar = HealthBar::for_fighter(&right, &scene);
        assert_eq!(bar.origin, Point2D::new(550.0, 30.0));
        assert_eq!(bar.fill_width, 100.0);
        assert_eq!(bar.fill_color, Rgb::ORANGE);
    }

    #[test]
    fn test_compose_hud() {
        let scene = SceneConfig::default();
        let fighters = [
            Fighter::new(Side::One, 200.0, 450.0, Rgb::RED, false, FighterConfig::default()),
            Fighter::new(Side::Two, 600.0, 450.0, Rgb::BLUE, true, FighterConfig::default()),
        ];
        let cmds = compose_hud(&fighters, &scene);
        assert_eq!(cmds.len(), 6);
        let fill = DrawCommand::filled_rect(Point2D::new(50.0, 30.0), 200.0, 24.0, Rgb::RED);
        assert_eq!(cmds[1], fill);
    }
}
