//! Engine module: CLI surface and path filtering

pub mod arg_parser;
pub mod cli;
pub mod tools;

pub use arg_parser::Cli;
pub use cli::{RunSetup, handle_run, setup_opts};
pub use tools::{DepthGate, PathFilter, compile_exclusion, path_relative_to, posix_surface};
