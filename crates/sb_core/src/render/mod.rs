//! Procedural renderer
//!
//! Maps match state to draw primitives for whatever layer rasterizes them.
//! Draw order: floor, fighters, HUD.

pub mod hud;
mod primitives;
pub mod stickman;

pub use hud::{compose_hud, floor_line, HealthBar};
pub use primitives::{DrawCommand, Rgb};
pub use stickman::draw_fighter;

use serde::Serialize;

use crate::engine::Match;

/// Ordered primitives for one tick
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Frame {
    pub commands: Vec<DrawCommand>,
}

impl Frame {
    pub fn compose(m: &Match) -> Self {
        let scene = &m.config().scene;
        let mut commands = vec![floor_line(scene)];
        for fighter in m.fighters() {
            commands.extend(draw_fighter(fighter, &m.config().combat));
        }
        commands.extend(compose_hud(m.fighters(), scene));
        Self { commands }
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }
}
