//! # ScalarComb - Parser Combinator Core
//!
//! A small parser combinator engine over Unicode scalar values.
//!
//! Parsers are built from a handful of primitives in [`scalar`] and composed
//! with [`map`](MapExt::map) and [`flat_map`](FlatMapExt::flat_map). The
//! library emphasizes:
//!
//! - **Backtracking by value**: a [`Cursor`] is a copyable position. Parsers
//!   return the advanced cursor on success and nothing on failure, so a failed
//!   parser can never leave its caller half way through the input
//! - **One failure kind**: parsers either match or report [`NoMatch`]; there
//!   are no diagnostics and no panics in the engine
//! - **Shareable grammars**: parsers are immutable once built and can be run
//!   any number of times, from any number of threads
//!
//! ```
//! use scalarcomb::{FlatMapExt, MapExt, Parser};
//! use scalarcomb::scalar::{characters_until, literal, whitespace};
//!
//! let key_value = characters_until(literal("=")).flat_map(|key| {
//!     literal("=")
//!         .flat_map(|()| whitespace())
//!         .flat_map(move |()| characters_until(literal(";")).map(move |value| (key, value)))
//! });
//!
//! assert_eq!(key_value.run("name= scalarcomb"), Some(("name", "scalarcomb")));
//! assert_eq!(key_value.run_from("a=1;b=2", 0), (Some(("a", "1")), ";b=2"));
//! ```

pub mod boxed;
pub mod cursor;
pub mod error;
pub mod flat_map;
pub mod from_fn;
pub mod lazy;
pub mod lookahead;
pub mod map;
pub mod or;
pub mod parsable;
pub mod parser;
pub mod scalar;

pub use boxed::{BoxedExt, BoxedParser};
pub use cursor::Cursor;
pub use error::{LiteralError, NoMatch, ParseResult};
pub use flat_map::{FlatMapExt, flat_map};
pub use from_fn::from_fn;
pub use lazy::lazy;
pub use lookahead::{LookaheadExt, lookahead};
pub use map::{MapExt, map};
pub use or::{OrExt, or};
pub use parsable::Parsable;
pub use parser::Parser;
