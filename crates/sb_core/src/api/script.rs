//! Scripted matches
//!
//! A [`MatchScript`] names a configuration, one controller per side and a
//! list of input frames. Running it yields a [`MatchTranscript`] with one
//! report per tick. The same script always produces the same transcript.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::GameConfig;
use crate::engine::{
    ControllerSpec, MatchPhase, MatchSession, RoundOutcome, Side, SideInput, TickEvent, TickReport,
};
use crate::error::{CoreError, Result};

pub const SCRIPT_SCHEMA_VERSION: u32 = 1;

/// Upper bound on expanded ticks per script
pub const MAX_SCRIPT_TICKS: u64 = 1_000_000;

fn default_schema() -> u32 {
    SCRIPT_SCHEMA_VERSION
}

fn default_controllers() -> [ControllerSpec; 2] {
    [ControllerSpec::Keyboard { bindings: None }, ControllerSpec::Keyboard { bindings: None }]
}

fn default_true() -> bool {
    true
}

fn default_repeat() -> u32 {
    1
}

/// Inputs for both sides, held for `repeat` ticks
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScriptFrame {
    #[serde(default)]
    pub p1: SideInput,
    #[serde(default)]
    pub p2: SideInput,
    #[serde(default = "default_repeat")]
    pub repeat: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchScript {
    #[serde(default = "default_schema")]
    pub schema_version: u32,
    /// Named preset; ignored when `config` is present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<GameConfig>,
    #[serde(default = "default_controllers")]
    pub controllers: [ControllerSpec; 2],
    #[serde(default)]
    pub frames: Vec<ScriptFrame>,
    /// Leave the waiting screen before the first frame
    #[serde(default = "default_true")]
    pub auto_start: bool,
    /// Start the next round on the tick after a knockout
    #[serde(default)]
    pub auto_restart: bool,
    /// Emit draw primitives in every tick report
    #[serde(default)]
    pub include_frames: bool,
}

impl Default for MatchScript {
    fn default() -> Self {
        Self {
            schema_version: SCRIPT_SCHEMA_VERSION,
            preset: None,
            config: None,
            controllers: default_controllers(),
            frames: Vec::new(),
            auto_start: true,
            auto_restart: false,
            include_frames: false,
        }
    }
}

impl MatchScript {
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_yaml_str(text: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Load a `.json`/`.yaml`/`.yml` script file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "json" => Self::from_json_str(&text),
            "yaml" | "yml" => Self::from_yaml_str(&text),
            other => Err(CoreError::UnsupportedFormat(other.to_string())),
        }
    }

    /// Inline config wins over the preset name; both default to `arena`.
    pub fn resolve_config(&self) -> Result<GameConfig> {
        match (&self.config, &self.preset) {
            (Some(cfg), preset) => {
                if let Some(name) = preset {
                    warn!(preset = %name, "inline config given, preset ignored");
                }
                cfg.validate()?;
                Ok(cfg.clone())
            }
            (None, Some(name)) => GameConfig::preset(name),
            (None, None) => Ok(GameConfig::arena()),
        }
    }

    pub fn total_ticks(&self) -> u64 {
        self.frames.iter().map(|f| u64::from(f.repeat)).sum()
    }

    fn check(&self) -> Result<()> {
        if self.schema_version != SCRIPT_SCHEMA_VERSION {
            return Err(CoreError::InvalidScript(format!(
                "unsupported schema version: {}",
                self.schema_version
            )));
        }
        let total = self.total_ticks();
        if total > MAX_SCRIPT_TICKS {
            return Err(CoreError::InvalidScript(format!(
                "{} ticks exceeds the limit of {}",
                total, MAX_SCRIPT_TICKS
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchTranscript {
    pub schema_version: u32,
    pub ticks: Vec<TickReport>,
    pub outcomes: Vec<RoundOutcome>,
    pub final_phase: MatchPhase,
    pub rounds: u32,
    pub scores: [u32; 2],
    pub hits: usize,
    /// Hits that got past a guard
    pub landed: usize,
    /// Ticks each pose controller skipped inference
    pub degraded_ticks: [u64; 2],
}

pub fn simulate_script(script: &MatchScript) -> Result<MatchTranscript> {
    script.check()?;
    let config = script.resolve_config()?;
    info!(
        ticks = script.total_ticks(),
        width = config.scene.width,
        ground_y = config.scene.ground_y,
        "running match script"
    );

    let mut session =
        MatchSession::new(config, script.controllers.clone()).with_render(script.include_frames);
    if script.auto_start {
        session.start();
    }

    let mut ticks = Vec::new();
    let mut outcomes = Vec::new();
    for frame in &script.frames {
        let inputs = [frame.p1.clone(), frame.p2.clone()];
        for _ in 0..frame.repeat {
            let report = session.tick(&inputs);
            for ev in &report.events {
                if let TickEvent::RoundEnded { outcome } = ev {
                    debug!(tick = report.tick, ?outcome, "round ended");
                    outcomes.push(*outcome);
                }
            }
            let over = matches!(report.phase, MatchPhase::RoundOver { .. });
            ticks.push(report);
            if over && script.auto_restart {
                session.restart_round();
            }
        }
    }

    let game = session.game();
    let degraded =
        |side: Side| session.controller(side).as_pose().map_or(0, |p| p.degraded_ticks());
    let transcript = MatchTranscript {
        schema_version: SCRIPT_SCHEMA_VERSION,
        hits: ticks.iter().filter(|t| t.hit).count(),
        landed: ticks.iter().flat_map(|t| &t.events).filter(|ev| ev.is_landed_hit()).count(),
        ticks,
        outcomes,
        final_phase: game.phase(),
        rounds: game.round(),
        scores: game.scores(),
        degraded_ticks: [degraded(Side::One), degraded(Side::Two)],
    };
    info!(hits = transcript.hits, scores = ?transcript.scores, "match script finished");
    Ok(transcript)
}

/// JSON in, JSON transcript out.
pub fn simulate_script_json(script_json: &str) -> Result<String> {
    let script = MatchScript::from_json_str(script_json)?;
    let transcript = simulate_script(&script)?;
    Ok(serde_json::to_string(&transcript)?)
}
