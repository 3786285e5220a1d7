//! One module per subcommand, each exposing an `execute` function.

pub mod add;
pub mod completions;
pub mod delete;
pub mod find;
pub mod generate;
pub mod list;
pub mod menu;
