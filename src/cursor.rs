/// A position in a piece of text, counted in Unicode scalar values
///
/// Cursors are plain values: parsers take one and hand back an advanced copy on
/// success. A caller that keeps its own copy can always return to where it
/// started, which is how every combinator in this crate backtracks.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Cursor<'code> {
    source: &'code str,
    /// Byte offset into `source`, always on a char boundary
    offset: usize,
    /// Number of scalars before `offset`
    position: usize,
}

impl<'code> Cursor<'code> {
    pub fn new(source: &'code str) -> Self {
        Cursor {
            source,
            offset: 0,
            position: 0,
        }
    }

    /// Create a cursor positioned `position` scalars into `source`
    ///
    /// Returns `None` if `source` has fewer than `position` scalars.
    pub fn at(source: &'code str, position: usize) -> Option<Self> {
        Cursor::new(source).advance(position)
    }

    /// The scalar at the current position, or `None` at end of input
    pub fn value(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Advance past the current scalar
    ///
    /// If already at the end, returns a cursor still positioned at the end.
    pub fn next(self) -> Self {
        match self.value() {
            Some(scalar) => Cursor {
                offset: self.offset + scalar.len_utf8(),
                position: self.position + 1,
                ..self
            },
            None => self,
        }
    }

    /// Advance by `count` scalars, or `None` if fewer remain
    pub fn advance(self, count: usize) -> Option<Self> {
        let mut cursor = self;
        for _ in 0..count {
            if cursor.eos() {
                return None;
            }
            cursor = cursor.next();
        }
        Some(cursor)
    }

    /// The unconsumed input
    pub fn rest(&self) -> &'code str {
        &self.source[self.offset..]
    }

    /// Check if the cursor is at the end of the input
    pub fn eos(&self) -> bool {
        self.offset >= self.source.len()
    }

    /// Number of scalars consumed so far
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn source(&self) -> &'code str {
        self.source
    }

    /// The text between `self` and a later cursor over the same source
    pub fn slice_to(&self, end: &Cursor<'code>) -> &'code str {
        &self.source[self.offset..end.offset]
    }
}
