// Interactive command line interface

mod commands;
mod repl;

pub use commands::Command;
pub use repl::Repl;
