use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tetro_engine::EngineConfig;

use self::play::PlayArg;

mod play;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Play in the terminal (default)
    Play(#[clap(flatten)] PlayArg),
    /// Print the effective engine configuration as JSON
    ShowConfig(#[clap(flatten)] ConfigArg),
}

/// Engine configuration sources, applied in order: defaults, `--config`
/// file, then the individual flags.
#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct ConfigArg {
    /// JSON file with engine settings; missing fields keep their defaults
    #[clap(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Seed for the piece randomizer
    #[clap(long)]
    seed: Option<u64>,
    /// Tick period in milliseconds
    #[clap(long, value_name = "MS")]
    tick_ms: Option<u64>,
    /// Ticks per forced drop at the start of the game
    #[clap(long)]
    initial_speed: Option<usize>,
    /// Lowest ticks per forced drop
    #[clap(long)]
    min_speed: Option<usize>,
    /// Award a flat bonus for every locked piece
    #[clap(long)]
    per_piece_bonus: bool,
}

impl ConfigArg {
    pub(crate) fn resolve(&self) -> anyhow::Result<EngineConfig> {
        let mut config = match &self.config {
            Some(path) => read_config_file(path)?,
            None => EngineConfig::default(),
        };
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(tick_ms) = self.tick_ms {
            config.tick_period_ms = tick_ms;
        }
        if let Some(speed) = self.initial_speed {
            config.initial_speed = speed;
        }
        if let Some(speed) = self.min_speed {
            config.min_speed = speed;
        }
        if self.per_piece_bonus {
            config.award_per_piece_bonus = true;
        }
        config.validate().context("invalid engine configuration")?;
        Ok(config)
    }
}

fn read_config_file(path: &Path) -> anyhow::Result<EngineConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let config = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse config file {}", path.display()))?;
    Ok(config)
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode.unwrap_or(Mode::Play(PlayArg::default())) {
        Mode::Play(arg) => play::run(&arg)?,
        Mode::ShowConfig(arg) => {
            let config = arg.resolve()?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::env;

    use super::*;

    fn config_arg(args: &[&str]) -> ConfigArg {
        let args = CommandArgs::try_parse_from(["tetro", "show-config"].iter().chain(args)).unwrap();
        match args.mode {
            Some(Mode::ShowConfig(arg)) => arg,
            mode => panic!("unexpected mode {mode:?}"),
        }
    }

    #[test]
    fn test_no_subcommand_means_play() {
        let args = CommandArgs::try_parse_from(["tetro"]).unwrap();
        assert!(args.mode.is_none());
    }

    #[test]
    fn test_flags_override_defaults() {
        let config = config_arg(&["--seed", "7", "--tick-ms", "30", "--per-piece-bonus"])
            .resolve()
            .unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.tick_period_ms, 30);
        assert!(config.award_per_piece_bonus);
        assert_eq!(config.initial_speed, 20);
    }

    #[test]
    fn test_invalid_flags_are_rejected() {
        let err = config_arg(&["--initial-speed", "5"]).resolve().unwrap_err();
        assert_eq!(err.to_string(), "invalid engine configuration");
        assert_eq!(
            err.root_cause().to_string(),
            "min-speed 10 is greater than initial-speed 5"
        );
    }

    #[test]
    fn test_flags_override_config_file() {
        let path = env::temp_dir().join(format!("tetro-config-{}.json", std::process::id()));
        fs::write(&path, r#"{ "seed": 1, "min-speed": 4, "width": 14 }"#).unwrap();

        let config = config_arg(&["--config", path.to_str().unwrap(), "--seed", "2"]).resolve();
        fs::remove_file(&path).unwrap();

        let config = config.unwrap();
        assert_eq!(config.seed, Some(2));
        assert_eq!(config.min_speed, 4);
        assert_eq!(config.width, 14);
    }

    #[test]
    fn test_missing_config_file_reports_path() {
        let err = config_arg(&["--config", "/nonexistent/tetro.json"])
            .resolve()
            .unwrap_err();
        assert!(err.to_string().contains("/nonexistent/tetro.json"), "{err}");
    }
}
