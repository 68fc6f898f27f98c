use crate::cli::{Cli, StrategyArg};
use crate::error::{CliError, Result};
use lifegrid::core::grid::Glyphs;
use lifegrid::core::io::coords::ParseMode;
use lifegrid::core::io::loader::{LoadOptions, OutOfBoundsPolicy};
use lifegrid::engine::config::{self as core_config, ExecutionStrategy};
use lifegrid::engine::error::EngineError;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Fully resolved settings for one run.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub simulation: core_config::SimulationConfig,
    pub load_options: LoadOptions,
    pub board_path: Option<PathBuf>,
    pub save_path: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Clone, Copy)]
#[serde(rename_all = "kebab-case")]
enum PartialStrategy {
    Sequential,
    Parallel,
}

impl From<PartialStrategy> for ExecutionStrategy {
    fn from(p: PartialStrategy) -> Self {
        match p {
            PartialStrategy::Sequential => ExecutionStrategy::Sequential,
            PartialStrategy::Parallel => ExecutionStrategy::Parallel,
        }
    }
}

impl From<StrategyArg> for ExecutionStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Sequential => ExecutionStrategy::Sequential,
            StrategyArg::Parallel => ExecutionStrategy::Parallel,
        }
    }
}

#[derive(Deserialize, Debug, Clone, Copy)]
#[serde(rename_all = "kebab-case")]
enum PartialParseMode {
    Lenient,
    Strict,
}

impl From<PartialParseMode> for ParseMode {
    fn from(p: PartialParseMode) -> Self {
        match p {
            PartialParseMode::Lenient => ParseMode::Lenient,
            PartialParseMode::Strict => ParseMode::Strict,
        }
    }
}

#[derive(Deserialize, Debug, Clone, Copy)]
#[serde(rename_all = "kebab-case")]
enum PartialOutOfBounds {
    Reject,
    Ignore,
}

impl From<PartialOutOfBounds> for OutOfBoundsPolicy {
    fn from(p: PartialOutOfBounds) -> Self {
        match p {
            PartialOutOfBounds::Reject => OutOfBoundsPolicy::Reject,
            PartialOutOfBounds::Ignore => OutOfBoundsPolicy::Ignore,
        }
    }
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialSimulationConfig {
    strategy: Option<PartialStrategy>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialBoardConfig {
    #[serde(rename = "parse-mode")]
    parse_mode: Option<PartialParseMode>,
    #[serde(rename = "out-of-bounds")]
    out_of_bounds: Option<PartialOutOfBounds>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialRenderConfig {
    #[serde(rename = "alive-glyph")]
    alive_glyph: Option<char>,
    #[serde(rename = "dead-glyph")]
    dead_glyph: Option<char>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialRunConfig {
    simulation: Option<PartialSimulationConfig>,
    board: Option<PartialBoardConfig>,
    render: Option<PartialRenderConfig>,
}

impl PartialRunConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })?;
        Self::parse_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    fn parse_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Layers CLI arguments over file values over built-in defaults.
    pub fn merge_with_cli(mut self, args: &Cli) -> Result<AppConfig> {
        let iterations = validate_iterations(args.iterations)?;

        let sim_config = self.simulation.take().unwrap_or_default();
        let board_config = self.board.take().unwrap_or_default();
        let render_config = self.render.take().unwrap_or_default();

        let strategy = args
            .strategy
            .map(ExecutionStrategy::from)
            .or(sim_config.strategy.map(ExecutionStrategy::from))
            .unwrap_or_default();

        let defaults = Glyphs::default();
        let glyphs = Glyphs {
            alive: render_config.alive_glyph.unwrap_or(defaults.alive),
            dead: render_config.dead_glyph.unwrap_or(defaults.dead),
        };
        if glyphs.alive == glyphs.dead {
            return Err(CliError::Config(format!(
                "`render.alive-glyph` and `render.dead-glyph` must differ (both are '{}').",
                glyphs.alive
            )));
        }

        let parse_mode = if args.strict {
            ParseMode::Strict
        } else {
            board_config
                .parse_mode
                .map(ParseMode::from)
                .unwrap_or_default()
        };

        let out_of_bounds = if args.ignore_out_of_bounds {
            OutOfBoundsPolicy::Ignore
        } else {
            board_config
                .out_of_bounds
                .map(OutOfBoundsPolicy::from)
                .unwrap_or_default()
        };

        let simulation = core_config::SimulationConfigBuilder::new()
            .iterations(iterations)
            .strategy(strategy)
            .glyphs(glyphs)
            .build()
            .map_err(EngineError::from)?;

        Ok(AppConfig {
            simulation,
            load_options: LoadOptions {
                parse_mode,
                out_of_bounds,
            },
            board_path: args.board.clone(),
            save_path: args.save.clone(),
        })
    }
}

fn validate_iterations(iterations: i64) -> Result<u64> {
    u64::try_from(iterations).map_err(|_| {
        CliError::Argument(format!(
            "iteration count must be non-negative, got {}",
            iterations
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;

    fn parse_args(args: &[&str]) -> Cli {
        let mut full = vec!["life"];
        full.extend_from_slice(args);
        Cli::try_parse_from(full).unwrap()
    }

    #[test]
    fn defaults_apply_without_config_file() {
        let args = parse_args(&["4"]);
        let config = PartialRunConfig::default().merge_with_cli(&args).unwrap();

        assert_eq!(config.simulation.iterations, 4);
        assert_eq!(config.simulation.strategy, ExecutionStrategy::Parallel);
        assert_eq!(config.simulation.glyphs, Glyphs::default());
        assert_eq!(config.load_options, LoadOptions::default());
        assert!(config.board_path.is_none());
        assert!(config.save_path.is_none());
    }

    #[test]
    fn negative_iterations_are_an_argument_error() {
        let args = parse_args(&["-1"]);
        let err = PartialRunConfig::default().merge_with_cli(&args).unwrap_err();
        assert!(matches!(err, CliError::Argument(_)));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn load_from_file_and_merge() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("life.toml");
        fs::write(
            &path,
            r##"
            [simulation]
            strategy = "sequential"

            [board]
            parse-mode = "strict"
            out-of-bounds = "ignore"

            [render]
            alive-glyph = "#"
            dead-glyph = " "
            "##,
        )
        .unwrap();

        let args = parse_args(&["2", "seed.txt"]);
        let config = PartialRunConfig::from_file(&path)
            .unwrap()
            .merge_with_cli(&args)
            .unwrap();

        assert_eq!(config.simulation.strategy, ExecutionStrategy::Sequential);
        assert_eq!(config.load_options.parse_mode, ParseMode::Strict);
        assert_eq!(config.load_options.out_of_bounds, OutOfBoundsPolicy::Ignore);
        assert_eq!(
            config.simulation.glyphs,
            Glyphs {
                alive: '#',
                dead: ' '
            }
        );
        assert_eq!(config.board_path, Some(PathBuf::from("seed.txt")));
    }

    #[test]
    fn cli_args_override_file_values() {
        let partial = PartialRunConfig::parse_str(
            r#"
            [simulation]
            strategy = "sequential"
            "#,
        )
        .unwrap();

        let args = parse_args(&["1", "--strategy", "parallel", "--strict"]);
        let config = partial.merge_with_cli(&args).unwrap();

        assert_eq!(config.simulation.strategy, ExecutionStrategy::Parallel);
        assert_eq!(config.load_options.parse_mode, ParseMode::Strict);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result = PartialRunConfig::parse_str(
            r#"
            [simulation]
            threads = 4
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn identical_glyphs_are_rejected() {
        let partial = PartialRunConfig::parse_str(
            r#"
            [render]
            alive-glyph = "x"
            dead-glyph = "x"
            "#,
        )
        .unwrap();
        let err = partial.merge_with_cli(&parse_args(&["1"])).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }

    #[test]
    fn missing_config_file_is_a_parsing_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = PartialRunConfig::from_file(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, CliError::FileParsing { .. }));
    }
}
