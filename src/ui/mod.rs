// Thu Oct 15 2026 - Alex

pub mod cli;
pub mod errors;
pub mod usage;

pub use cli::{Args, Command, CommandHandler};
pub use errors::ErrorDisplay;
