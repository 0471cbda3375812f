//! fancy-switch demo host.
//!
//! Runs a switch through a scripted sequence of taps and prints one line (or
//! one JSON object) per frame.
//!
//! ```text
//! fancy-switch-demo --taps 0,8 --frames 40
//! fancy-switch-demo --checked --disabled --frames 1 --json
//! RUST_LOG=fancy_switch=debug fancy-switch-demo --taps 0
//! ```

mod host;

use anyhow::{bail, Context, Result};
use clap::Parser;
use fancy_switch::SwitchConfig;
use host::SwitchHost;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "fancy-switch-demo")]
#[command(about = "Drive a fancy switch through scripted taps")]
#[command(version)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Start checked
    #[arg(long)]
    checked: bool,

    /// Render the switch disabled
    #[arg(long)]
    disabled: bool,

    /// Frames at which to tap, comma separated
    #[arg(long, value_delimiter = ',')]
    taps: Vec<usize>,

    /// Number of frames to run
    #[arg(long, default_value = "30")]
    frames: usize,

    /// Frames per second
    #[arg(long, default_value = "60")]
    fps: u32,

    /// Print frames as JSON lines, including draw commands
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Print a sample configuration and exit
    #[arg(long)]
    sample_config: bool,
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "fancy_switch=debug,fancy_switch_demo=debug",
        _ => "fancy_switch=trace,fancy_switch_demo=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<SwitchConfig> {
    match path {
        Some(path) => SwitchConfig::load_from_file(path)
            .with_context(|| format!("loading {}", path.display())),
        None => Ok(SwitchConfig::default()),
    }
}

fn run(cli: &Cli) -> Result<()> {
    if cli.fps == 0 {
        bail!("--fps must be positive");
    }
    let config = load_config(cli.config.as_deref())?;
    let mut host = SwitchHost::new(cli.checked, !cli.disabled, &config)?;
    let dt = 1.0 / f64::from(cli.fps);

    for tap in cli.taps.iter().filter(|&&t| t >= cli.frames) {
        warn!(frame = tap, frames = cli.frames, "tap after last frame is never delivered");
    }

    for index in 0..cli.frames {
        for _ in cli.taps.iter().filter(|&&t| t == index) {
            let accepted = host.tap();
            debug!(frame = index, accepted, "scripted tap");
        }
        let report = host.frame(dt, cli.json);
        if cli.json {
            println!("{}", serde_json::to_string(&report)?);
        } else {
            println!("{}", report.summary());
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if cli.sample_config {
        print!("{}", SwitchConfig::sample_config());
        return Ok(());
    }
    init_tracing(cli.verbose);
    run(&cli)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_args() {
        let cli = Cli::parse_from([
            "fancy-switch-demo",
            "--taps",
            "0,12",
            "--frames",
            "40",
            "--checked",
            "-vv",
        ]);
        assert_eq!(cli.taps, vec![0, 12]);
        assert_eq!(cli.frames, 40);
        assert_eq!(cli.fps, 60);
        assert!(cli.checked);
        assert!(!cli.disabled);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_load_default_config() {
        assert_eq!(load_config(None).unwrap(), SwitchConfig::default());
    }

    #[test]
    fn test_load_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("switch.toml");
        std::fs::write(&path, "theme = \"dark\"\n[spring]\nstiffness = 400.0\n").unwrap();
        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.spring.stiffness, 400.0);
    }

    #[test]
    fn test_load_bad_config_names_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[colors]\nripple = \"nope\"\n").unwrap();
        let err = load_config(Some(&path)).unwrap_err();
        assert!(format!("{err:#}").contains("bad.toml"));
    }

    #[test]
    fn test_run_rejects_zero_fps() {
        let cli = Cli::parse_from(["fancy-switch-demo", "--fps", "0"]);
        assert!(run(&cli).is_err());
    }
}
