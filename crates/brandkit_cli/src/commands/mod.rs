//! Command dispatch.

pub mod charts;
pub mod convert;
pub mod css;
pub mod tokens;

use anyhow::Result;

use crate::cli::{Cli, Command};

pub fn handle(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Tokens { action } => tokens::handle(action),
        Command::Css { prefix, root_block } => css::handle(&prefix, root_block),
        Command::Charts { name } => charts::handle(name.as_deref()),
        Command::Convert { hex } => convert::handle(&hex),
    }
}
