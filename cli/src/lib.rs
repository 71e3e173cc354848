pub mod commands;
pub mod context;
pub mod link_loader;
pub mod logging;
pub mod render;
pub mod repl;

pub use context::CliContext;
pub use repl::readline;
