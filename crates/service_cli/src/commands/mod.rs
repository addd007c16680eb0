//! CLI command implementations
//!
//! Each submodule implements one `portfolio-analyzer` subcommand. Commands
//! take an already loaded portfolio and write to any `io::Write`, so they can
//! be driven from tests as well as from `main`.

pub mod payoff;
pub mod price;
pub mod simulate;
