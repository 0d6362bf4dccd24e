//! Command-line argument parsing and validation.
//!
//! This module defines the command-line interface structure and provides
//! validation for CLI arguments using the `clap` crate.

use crate::arguments::{determine, Provider, Source};
use clap::{Parser, ValueEnum};
use keyprompt_core::error::Result;

/// What `kp` prints on stdout once an option is chosen.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrintFormat {
    /// The option's full name
    Name,
    /// The option's key
    Key,
    /// The option's 0-based position in the option list
    Index,
}

/// Command-line arguments for the keyprompt CLI tool.
///
/// The prompt is either given inline (a question plus `-o` options) or
/// taken from the prompt definitions file with `-p`. The prompt itself is
/// written to stderr and answered on stdin; only the answer goes to stdout.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use keyprompt_cli::cli_args::Args;
///
/// let args = Args::parse_from(["kp", "Continue?", "-o", "yes", "-o", "no"]);
/// assert_eq!(args.options.len(), 2);
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Path to the prompt definitions YAML.
    ///
    /// If not provided, defaults to `~/.keyprompt/prompts.yml`.
    #[arg(long, short = 'c')]
    pub config_path: Option<String>,

    /// ID of a prompt from the prompt definitions file to ask.
    ///
    /// Cannot be combined with an inline question or options.
    #[arg(long = "prompt", short = 'p', conflicts_with_all = ["question", "options"])]
    pub prompt_id: Option<String>,

    /// An inline option in the format NAME or NAME=KEY.
    ///
    /// Without a KEY the first character of NAME is used. Repeat the flag
    /// for every option, in the order they should be shown.
    ///
    /// # Examples
    /// ```bash
    /// kp "Overwrite?" -o yes -o no -o all=a
    /// ```
    #[arg(long = "option", short = 'o', action = clap::ArgAction::Append)]
    pub options: Vec<String>,

    /// Name of the option chosen on an empty reply.
    #[arg(long, short = 'd', conflicts_with = "first_is_default")]
    pub default: Option<String>,

    /// Use the first option as the default.
    #[arg(long, short = 'F', action)]
    pub first_is_default: bool,

    /// What to print on stdout for the chosen option.
    #[arg(long, value_enum, default_value_t = PrintFormat::Name)]
    pub print: PrintFormat,

    /// The question to ask, when not using `--prompt`.
    pub question: Option<String>,
}

impl Provider for Args {
    /// Determines where the prompt comes from, see [`determine`].
    ///
    /// # Errors
    ///
    /// Returns an error if an inline prompt is missing its question or options.
    fn get_source(&self) -> Result<Source> {
        determine(
            self.prompt_id.as_deref(),
            self.question.as_deref(),
            &self.options,
        )
    }
}
