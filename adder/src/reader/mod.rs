mod args;
mod configure;
mod error;
pub use args::resolve_args;
pub use configure::{AdderConfig, read_config};
