//! CLI commands

mod classify;
mod generate;
mod validate;

pub use classify::ClassifyCommand;
pub use generate::GenerateCommand;
pub use validate::ValidateCommand;
