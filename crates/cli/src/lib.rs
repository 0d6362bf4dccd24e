//! Keyprompt CLI Library
//!
//! This crate provides `kp`, a command that asks a single-key choice prompt
//! on the terminal and prints the chosen option, so shell scripts can ask
//! questions without writing their own read loops.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing and validation
//! - [`arguments`]: Turning arguments or prompt definitions into a prompt to ask
//!
//! # Examples
//!
//! ```bash
//! # Inline prompt, the answer's name is printed on stdout
//! answer=$(kp "Overwrite the file?" -o yes -o no -o all=a --default no)
//!
//! # Prompt from ~/.keyprompt/prompts.yml
//! kp --prompt deploy
//!
//! # Print the option's position instead of its name
//! kp "Which environment?" -o staging -o production --print index
//! ```

pub mod arguments;
pub mod cli_args;
