//! Argument processing and validation for the keyprompt CLI.
//!
//! This module turns command-line arguments into a prompt to ask:
//! - **Inline prompts**: A question with `-o NAME[=KEY]` options
//! - **Defined prompts**: A prompt from the definitions file, selected with `-p ID`
//!
//! Either way the default can be overridden with `-d NAME` or `-F`.

// Export public items from submodules
pub mod processing;
pub mod style;

// Re-exports for convenience
pub use processing::{format_answer, parse_option, resolve_prompt, ResolvedPrompt};
pub use style::determine;
pub use style::Provider;
pub use style::Source;
