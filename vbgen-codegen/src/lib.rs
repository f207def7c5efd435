//! Swift declaration emitter for variadic view builders.
//!
//! For every arity from 2 up to a configured maximum this crate produces a
//! `buildBlock` overload on the builder and a matching constructor on the
//! tuple aggregate. Output is deterministic and written to any
//! [`std::io::Write`] sink.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`swift`] - Swift declaration nodes (Extension, Func, Init, etc.)
//! - [`Placeholders`] - Positional value/type identifiers for one arity
//! - [`Emitter`] - The declaration emitter itself

pub mod builder;
mod config;
mod emitter;
mod placeholders;
pub mod swift;

pub use config::{DEFAULT_HEADER, DEFAULT_MAX_ARITY, GeneratorConfig, MIN_ARITY, Names};
pub use emitter::Emitter;
pub use placeholders::{Placeholder, Placeholders};
