//! Domain layer: tags, commands and the update accumulator
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod builder;
pub mod entities;
pub mod error;
pub mod messages;

pub use builder::UpdateBuilder;
pub use entities::*;
pub use error::{ParseError, ParseResult};
pub use messages::ErrorKind;
