//! Subcommand implementations.

pub mod convert;
pub mod stream;

pub use convert::{convert, ConvertSummary};
pub use stream::{stream, StreamOptions};
