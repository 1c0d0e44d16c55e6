//! Command handlers for CLI subcommands
//!
//! Each submodule implements one subcommand. Handlers write through an
//! [`OutputWriter`](crate::output::OutputWriter) so their output can be
//! captured in tests.

mod build_code;
mod bump;
mod compare;
mod completions;
mod config;
mod explain;
mod parse;
mod stamp;
mod validate;

pub use build_code::handle_build_code;
pub use bump::handle_bump;
pub use compare::handle_compare;
pub use completions::handle_completions;
pub use config::handle_config;
pub use explain::handle_explain;
pub use parse::handle_parse;
pub use stamp::handle_stamp;
pub use validate::handle_validate;
