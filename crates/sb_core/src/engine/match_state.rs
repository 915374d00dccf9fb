//! Match aggregate
//!
//! Owns both fighters plus round number and running score.
//!
//! ```text
//! Waiting --start()--> Playing --KO--> RoundOver { outcome }
//!                         ^                  |
//!                         +--restart_round()-+
//! ```
//!
//! Fighters only advance while `Playing`.

use serde::Serialize;

use super::combat::{self, Hit};
use super::events::TickEvent;
use super::fighter::{AppliedActions, Fighter};
use super::input::ActionRequest;
use super::types::Side;
use crate::config::GameConfig;
use crate::render::Rgb;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundOutcome {
    Winner(Side),
    /// Both fighters dropped to zero on the same tick
    Draw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum MatchPhase {
    Waiting,
    Playing,
    RoundOver { outcome: RoundOutcome },
}

impl MatchPhase {
    pub fn is_playing(&self) -> bool {
        matches!(self, MatchPhase::Playing)
    }
}

/// Everything one `Match::step` produced
#[derive(Debug, Clone, Default)]
pub struct StepOutcome {
    pub applied: [AppliedActions; 2],
    pub hits: Vec<Hit>,
    pub events: Vec<TickEvent>,
}

impl StepOutcome {
    /// At least one punch connected this tick (guarded or not)
    pub fn hit(&self) -> bool {
        !self.hits.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct Match {
    config: GameConfig,
    fighters: [Fighter; 2],
    round: u32,
    scores: [u32; 2],
    phase: MatchPhase,
    tick: u64,
}

impl Match {
    pub fn new(config: GameConfig) -> Self {
        let fighters = spawn_fighters(&config);
        Self { config, fighters, round: 1, scores: [0, 0], phase: MatchPhase::Waiting, tick: 0 }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn fighters(&self) -> &[Fighter; 2] {
        &self.fighters
    }

    pub fn fighter(&self, side: Side) -> &Fighter {
        &self.fighters[side.index()]
    }

    pub fn fighter_mut(&mut self, side: Side) -> &mut Fighter {
        &mut self.fighters[side.index()]
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn scores(&self) -> [u32; 2] {
        self.scores
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Leave the waiting screen. No-op once play has begun.
    pub fn start(&mut self) -> Option<TickEvent> {
        if self.phase != MatchPhase::Waiting {
            return None;
        }
        self.phase = MatchPhase::Playing;
        log::info!("round {} started", self.round);
        Some(TickEvent::RoundStarted { round: self.round })
    }

    /// One simulation tick: fighter updates, combat, then round-end check.
    pub fn step(&mut self, requests: &[ActionRequest; 2]) -> StepOutcome {
        self.tick += 1;
        let mut outcome = StepOutcome::default();
        if !self.phase.is_playing() {
            return outcome;
        }

        // reach is measured against where the opponent stood at tick start
        let xs = [self.fighters[0].x, self.fighters[1].x];
        let scene = &self.config.scene;
        for side in Side::BOTH {
            let i = side.index();
            let applied = self.fighters[i].tick(xs[side.opponent().index()], &requests[i], scene);
            if applied.jumped {
                outcome.events.push(TickEvent::JumpStarted { side });
            }
            if let Some(arm) = applied.attack {
                outcome.events.push(TickEvent::AttackStarted { side, arm });
            }
            if applied.defended {
                outcome.events.push(TickEvent::GuardRaised { side });
            }
            outcome.applied[i] = applied;
        }

        outcome.hits = combat::resolve(&mut self.fighters, &self.config.combat);
        outcome.events.extend(outcome.hits.iter().copied().map(TickEvent::from));

        if let Some(result) = self.round_result() {
            for side in Side::BOTH {
                if self.fighters[side.index()].is_knocked_out() {
                    outcome.events.push(TickEvent::KnockedOut { side });
                }
            }
            if let RoundOutcome::Winner(side) = result {
                self.scores[side.index()] += 1;
            }
            self.phase = MatchPhase::RoundOver { outcome: result };
            log::info!(
                "round {} over: {:?} (score {}-{})",
                self.round,
                result,
                self.scores[0],
                self.scores[1]
            );
            outcome.events.push(TickEvent::RoundEnded { outcome: result });
        }

        outcome
    }

    fn round_result(&self) -> Option<RoundOutcome> {
        match (self.fighters[0].is_knocked_out(), self.fighters[1].is_knocked_out()) {
            (true, true) => Some(RoundOutcome::Draw),
            (true, false) => Some(RoundOutcome::Winner(Side::Two)),
            (false, true) => Some(RoundOutcome::Winner(Side::One)),
            (false, false) => None,
        }
    }

    /// Next round: fighters back at spawn with full health, scores kept.
    pub fn restart_round(&mut self) -> TickEvent {
        self.round += 1;
        let spawns = self.config.scene.spawn_points();
        for (fighter, (x, y)) in self.fighters.iter_mut().zip(spawns) {
            fighter.reset_for_round(x, y);
        }
        self.phase = MatchPhase::Playing;
        log::info!("round {} started", self.round);
        TickEvent::RoundStarted { round: self.round }
    }
}

fn spawn_fighters(config: &GameConfig) -> [Fighter; 2] {
    let [(x1, y1), (x2, y2)] = config.scene.spawn_points();
    [
        Fighter::new(Side::One, x1, y1, Rgb::RED, false, config.fighter.clone()),
        Fighter::new(Side::Two, x2, y2, Rgb::BLUE, true, config.fighter.clone()),
    ]
}
