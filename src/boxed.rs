use crate::parser::Parser;

/// A type-erased parser
///
/// Lets a grammar refer to itself by name (recursive functions returning
/// `impl Parser` would have an infinitely sized type) and lets differently
/// built parsers with the same output live in one collection. The bounds keep
/// erased parsers shareable across threads.
pub type BoxedParser<'code, T> = Box<dyn Parser<'code, Output = T> + Send + Sync + 'code>;

/// Extension trait to add .boxed() method support for parsers
pub trait BoxedExt<'code>: Parser<'code> + Sized + Send + Sync + 'code {
    fn boxed(self) -> BoxedParser<'code, Self::Output> {
        Box::new(self)
    }
}

/// Implement BoxedExt for all thread-safe parsers
impl<'code, P> BoxedExt<'code> for P where P: Parser<'code> + Send + Sync + 'code {}
