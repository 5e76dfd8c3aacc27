//! REPL configuration and command-line parsing.

use plis_parse::DEFAULT_MAX_DEPTH;

/// Prompt printed before each line when none is configured.
pub const DEFAULT_PROMPT: &str = "> ";

/// Settings for a REPL session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplConfig {
    /// Printed before each line is read. `None` prints nothing.
    pub prompt: Option<String>,
    /// Print each parsed tree before evaluating it.
    pub dump_ast: bool,
    /// Nesting limit shared by the parser and the interpreter.
    pub max_depth: usize,
}

impl Default for ReplConfig {
    fn default() -> Self {
        ReplConfig {
            prompt: Some(DEFAULT_PROMPT.to_string()),
            dump_ast: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// What the command line asked for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CliAction {
    Repl(ReplConfig),
    Help,
    Version,
}

/// Invalid command line.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown option '{0}'")]
    UnknownOption(String),
    #[error("invalid value for --max-depth: '{0}' (expected a positive integer)")]
    InvalidMaxDepth(String),
}

impl ReplConfig {
    /// Parse command-line arguments, program name excluded.
    ///
    /// `help` and `version` win over everything else on the line.
    pub fn from_args(args: &[String]) -> Result<CliAction, ConfigError> {
        let mut config = ReplConfig::default();

        for arg in args {
            match arg.as_str() {
                "help" | "--help" | "-h" => return Ok(CliAction::Help),
                "version" | "--version" | "-V" => return Ok(CliAction::Version),
                "--dump-ast" => config.dump_ast = true,
                "--no-prompt" => config.prompt = None,
                _ => {
                    if let Some(prompt) = arg.strip_prefix("--prompt=") {
                        config.prompt = Some(prompt.to_string());
                    } else if let Some(depth) = arg.strip_prefix("--max-depth=") {
                        config.max_depth = match depth.parse::<usize>() {
                            Ok(n) if n > 0 => n,
                            _ => return Err(ConfigError::InvalidMaxDepth(depth.to_string())),
                        };
                    } else {
                        return Err(ConfigError::UnknownOption(arg.clone()));
                    }
                }
            }
        }

        Ok(CliAction::Repl(config))
    }
}
