//! Terminal interaction helpers for text games.
//!
//! Provides tinted output, screen control, menus and headers, a typewriter
//! effect, a redrawable progress bar, and blocking prompt loops that keep
//! asking until the player types something valid. Prompt loops run over an
//! explicit reader/writer pair, so every interaction can be scripted in
//! tests with in-memory buffers.

pub mod error;
pub mod output;
pub mod progress;
pub mod prompt;
pub mod screen;
pub mod style;

pub use error::{PromptError, PromptResult};
pub use progress::ProgressBar;
pub use prompt::{NameRules, PromptStyle, Prompter, normalize_name};
pub use style::Tint;
