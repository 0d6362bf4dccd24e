//! Keyprompt Core Library
//!
//! This crate provides single-key choice prompts for terminal programs: a
//! question is written with its options, one line of operator input is read
//! at a time, and the reply is resolved to one of the options.
//!
//! # Key Features
//!
//! - **Key Emphasis**: Each option's key is shown in bold inside its name
//! - **Forgiving Matching**: Replies match an option's key or full name, ignoring case
//! - **Defaults**: An optional default is chosen on an empty reply
//! - **Retry Loop**: Unmatched replies are answered with a message and read again
//! - **Any Transport**: Works on any `BufRead` input and `Write` output
//! - **Prompt Definitions**: Reusable prompts loaded from a YAML file
//!
//! # Examples
//!
//! ```no_run
//! use std::io::{stdin, stdout};
//! use keyprompt_core::choice::Choice;
//! use keyprompt_core::prompt::prompt;
//!
//! let choices = [Choice::new("yes", 'y'), Choice::new("no", 'n')];
//! let answer = prompt(
//!     &mut stdin().lock(),
//!     &mut stdout(),
//!     "Overwrite the file?",
//!     &choices,
//!     Some(&choices[1]),
//! )?;
//! println!("You chose {}", answer.name);
//! # Ok::<(), keyprompt_core::error::Error>(())
//! ```

pub mod choice;
pub mod config;
pub mod error;
pub mod file_handling;
pub mod prompt;
pub mod prompt_definitions;
