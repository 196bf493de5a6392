//! Subcommand handlers, one module per subcommand.

pub mod closest;
pub mod describe;
pub mod route;
