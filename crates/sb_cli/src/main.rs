//! Stickman Battle CLI
//!
//! Headless driver: runs scripted matches, generates synthetic pose scripts
//! and prints configuration presets.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use sb_core::synthetic::parse_gestures;
use sb_core::{
    simulate_script, GameConfig, MatchScript, MatchTranscript, SynthConfig, SyntheticPose,
};

#[derive(Parser)]
#[command(name = "sb_cli")]
#[command(about = "Run and generate stickman battle scripts", long_about = None)]
#[command(version = sb_core::VERSION)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate a match script and write its transcript
    Run {
        /// Script file (.json / .yaml / .yml)
        #[arg(long)]
        script: PathBuf,

        /// Transcript output (JSON); summary only when omitted
        #[arg(long)]
        out: Option<PathBuf>,

        /// Pretty-print the transcript JSON
        #[arg(long, default_value = "false")]
        pretty: bool,
    },

    /// Generate a pose-controlled script from a gesture list
    Synth {
        /// Comma separated gestures (idle,punch_left,punch_right,jump,guard,step_left,step_right)
        #[arg(long)]
        gestures: String,

        #[arg(long, default_value = "0")]
        seed: u64,

        /// Output script file (.json / .yaml / .yml)
        #[arg(long)]
        out: PathBuf,

        /// Per-coordinate noise std dev (px)
        #[arg(long, default_value = "1.5")]
        jitter: f32,

        /// Probability of a missed landmark per tick
        #[arg(long, default_value = "0.05")]
        dropout: f64,

        /// Ticks per gesture
        #[arg(long, default_value = "20")]
        ticks: u32,
    },

    /// Print a configuration preset as YAML
    Config {
        /// classic | arena | wide
        #[arg(long, default_value = "arena")]
        preset: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { script, out, pretty } => {
            println!("🥊 Running match script...");
            println!("   Script: {}", script.display());

            let parsed = MatchScript::load(&script)
                .with_context(|| format!("failed to load script {}", script.display()))?;
            let transcript = simulate_script(&parsed)?;
            print_summary(&transcript);

            if let Some(path) = out {
                let json = if pretty {
                    serde_json::to_string_pretty(&transcript)?
                } else {
                    serde_json::to_string(&transcript)?
                };
                std::fs::write(&path, json)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                println!("\n📄 Transcript saved to: {}", path.display());
            }
        }

        Commands::Synth { gestures, seed, out, jitter, dropout, ticks } => {
            let gestures = parse_gestures(&gestures)?;
            if gestures.is_empty() {
                anyhow::bail!("no gestures given");
            }
            println!("🔨 Generating synthetic pose script...");
            let names: Vec<&str> = gestures.iter().map(|g| g.name()).collect();
            println!("   Gestures: {}", names.join(", "));
            println!("   Seed:     {}", seed);

            let config = SynthConfig { seed, jitter, dropout, gesture_ticks: ticks };
            let mut gen = SyntheticPose::new(config)?;
            let script = gen.script(&gestures);
            write_script(&out, &script)?;
            println!("\n✅ {} ticks written to {}", script.total_ticks(), out.display());
        }

        Commands::Config { preset } => {
            let config = GameConfig::preset(&preset)?;
            print!("{}", config.to_yaml_string()?);
        }
    }

    Ok(())
}

fn write_script(path: &Path, script: &MatchScript) -> Result<()> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or_default().to_ascii_lowercase();
    let text = match ext.as_str() {
        "yaml" | "yml" => serde_yaml::to_string(script)?,
        "json" => serde_json::to_string_pretty(script)?,
        other => anyhow::bail!("unsupported script format: {:?}", other),
    };
    std::fs::write(path, text).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

fn print_summary(transcript: &MatchTranscript) {
    println!("\n✅ Match simulated");
    println!("   Ticks:    {}", transcript.ticks.len());
    println!("   Hits:     {}", transcript.hits);
    println!("   Rounds:   {}", transcript.rounds);
    println!("   Score:    {} - {}", transcript.scores[0], transcript.scores[1]);
    println!("   Phase:    {:?}", transcript.final_phase);
    if transcript.degraded_ticks.iter().any(|n| *n > 0) {
        println!(
            "   Degraded: {} / {} ticks",
            transcript.degraded_ticks[0], transcript.degraded_ticks[1]
        );
    }
}
