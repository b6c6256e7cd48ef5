//! Primitive parsers over Unicode scalar values
//!
//! Each of these is a direct application of the engine: a small struct with a
//! [`Parser`](crate::Parser) impl and a constructor function.

pub mod any;
pub mod literal;
pub mod number;
pub mod until;
pub mod whitespace;

pub use any::any_scalar;
pub use literal::literal;
pub use number::non_negative;
pub use until::characters_until;
pub use whitespace::whitespace;
