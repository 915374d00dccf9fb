//! Match session
//!
//! Glues the per-side controllers to the match aggregate and produces one
//! [`TickReport`] per tick:
//!
//! ```text
//! input acquisition -> classification -> fighter update -> combat -> frame
//! ```

use serde::Serialize;

use super::events::TickEvent;
use super::fighter::Fighter;
use super::input::{ActionRequest, Controller, ControllerSpec, SideInput};
use super::match_state::{Match, MatchPhase};
use super::types::Side;
use crate::config::GameConfig;
use crate::render::Frame;

/// Per-fighter state handed to the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FighterSnapshot {
    pub side: Side,
    pub x: f32,
    pub y: f32,
    pub health: u32,
    pub attacking_left: bool,
    pub attacking_right: bool,
    pub defending: bool,
    pub is_jumping: bool,
    pub head_scale: f32,
    pub punch_scale_left: f32,
    pub punch_scale_right: f32,
    pub arm_length_left: f32,
    pub arm_length_right: f32,
    /// What the controller asked for this tick
    pub request: ActionRequest,
}

impl FighterSnapshot {
    pub fn capture(fighter: &Fighter, request: ActionRequest) -> Self {
        Self {
            side: fighter.side(),
            x: fighter.x,
            y: fighter.y,
            health: fighter.health(),
            attacking_left: fighter.attacking_left(),
            attacking_right: fighter.attacking_right(),
            defending: fighter.defending(),
            is_jumping: fighter.is_jumping(),
            head_scale: fighter.head_scale(),
            punch_scale_left: fighter.punch_scale_left(),
            punch_scale_right: fighter.punch_scale_right(),
            arm_length_left: fighter.arm_length_left(),
            arm_length_right: fighter.arm_length_right(),
            request,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TickReport {
    pub tick: u64,
    pub round: u32,
    pub phase: MatchPhase,
    pub fighters: [FighterSnapshot; 2],
    /// A punch connected this tick
    pub hit: bool,
    pub events: Vec<TickEvent>,
    #[serde(skip_serializing_if = "Frame::is_empty")]
    pub frame: Frame,
}

#[derive(Debug)]
pub struct MatchSession {
    inner: Match,
    specs: [ControllerSpec; 2],
    controllers: [Controller; 2],
    render: bool,
    /// Events raised between ticks (start/restart), flushed into the next report
    pending: Vec<TickEvent>,
}

impl MatchSession {
    pub fn new(config: GameConfig, specs: [ControllerSpec; 2]) -> Self {
        let controllers = build_controllers(&specs, &config);
        Self { inner: Match::new(config), specs, controllers, render: true, pending: Vec::new() }
    }

    /// Skip draw primitive generation (headless runs)
    pub fn with_render(mut self, render: bool) -> Self {
        self.render = render;
        self
    }

    pub fn game(&self) -> &Match {
        &self.inner
    }

    pub fn controller(&self, side: Side) -> &Controller {
        &self.controllers[side.index()]
    }

    pub fn start(&mut self) {
        if let Some(ev) = self.inner.start() {
            self.pending.push(ev);
        }
    }

    /// Restart keeps scores and controller buffers.
    pub fn restart_round(&mut self) {
        let ev = self.inner.restart_round();
        self.pending.push(ev);
    }

    /// Discard both fighters, scores and signal buffers.
    pub fn new_match(&mut self) {
        let config = self.inner.config().clone();
        self.inner = Match::new(config);
        for controller in &mut self.controllers {
            controller.reset();
        }
        self.pending.clear();
        log::info!("new match");
    }

    pub fn tick(&mut self, inputs: &[SideInput; 2]) -> TickReport {
        // buffers keep filling outside of play so the classifier stays warm
        let requests = [
            self.controllers[0].acquire(&inputs[0]),
            self.controllers[1].acquire(&inputs[1]),
        ];

        let outcome = self.inner.step(&requests);
        let mut events = std::mem::take(&mut self.pending);
        events.extend(outcome.events.iter().copied());

        let fighters = self.inner.fighters();
        TickReport {
            tick: self.inner.tick(),
            round: self.inner.round(),
            phase: self.inner.phase(),
            fighters: [
                FighterSnapshot::capture(&fighters[0], requests[0]),
                FighterSnapshot::capture(&fighters[1], requests[1]),
            ],
            hit: outcome.hit(),
            events,
            frame: if self.render { Frame::compose(&self.inner) } else { Frame::default() },
        }
    }

    pub fn specs(&self) -> &[ControllerSpec; 2] {
        &self.specs
    }
}

fn build_controllers(specs: &[ControllerSpec; 2], config: &GameConfig) -> [Controller; 2] {
    [specs[0].build(Side::One, config), specs[1].build(Side::Two, config)]
}
