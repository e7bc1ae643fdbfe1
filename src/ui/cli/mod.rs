// Thu Oct 15 2026 - Alex

pub mod args;
pub mod handler;

pub use args::{parse, Args, Command};
pub use handler::CommandHandler;

use crate::error::Result;

pub fn parse_args() -> Result<Command> {
    parse(std::env::args_os().skip(1))
}
