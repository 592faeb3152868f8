//! Terminal user interface for pybuild.
//!
//! Output formatting, progress spinners, styling, and the interactive
//! prompts used by the menu and the workflows.

pub mod output;
pub mod prompt;
pub mod spinner;
pub mod style;

pub use output::{Output, Verbosity};
pub use spinner::Spinner;
pub use style::Style;
