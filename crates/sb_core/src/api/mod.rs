//! JSON entry points for hosts that drive the engine from outside Rust

pub mod script;

pub use script::{
    simulate_script, simulate_script_json, MatchScript, MatchTranscript, ScriptFrame,
    MAX_SCRIPT_TICKS, SCRIPT_SCHEMA_VERSION,
};
