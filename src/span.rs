use crate::cursor::Advance;

/// A pass-through pairing of two externally supplied cursors.
///
/// Holds exactly the two cursor values it was given: no validation, no
/// arithmetic, no bounds checking, no ownership of the underlying sequence.
/// The caller is responsible for handing in cursors that denote a reachable
/// span over some live sequence; an end that the begin cursor can never reach
/// is the caller's contract breach.
#[derive(Debug, Clone, Copy)]
pub struct CursorRange<B, E> {
    first: B,
    last: E,
}

/// Pairs a begin cursor and an end cursor so they can be consumed through the
/// usual iterate-until-equal convention. The two may be of different types,
/// as long as the begin cursor compares against the end.
pub fn cursor_range<B, E>(begin: B, end: E) -> CursorRange<B, E> {
    CursorRange::new(begin, end)
}

impl<B, E> CursorRange<B, E> {
    pub fn new(first: B, last: E) -> Self {
        Self { first, last }
    }

    pub fn begin(&self) -> B
    where
        B: Clone,
    {
        self.first.clone()
    }

    pub fn end(&self) -> E
    where
        E: Clone,
    {
        self.last.clone()
    }
}

/// Iterator driving a cursor toward its end marker. The equality check runs
/// before every read, so the end cursor itself is never dereferenced and the
/// cursor is never advanced past it.
#[derive(Debug, Clone)]
pub struct CursorIter<B, E> {
    cursor: B,
    limit: E,
}

impl<B, E> Iterator for CursorIter<B, E>
where
    B: Advance + PartialEq<E>,
{
    type Item = B::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor == self.limit {
            return None;
        }
        let value = self.cursor.value();
        self.cursor.advance();
        Some(value)
    }
}

impl<B, E> IntoIterator for CursorRange<B, E>
where
    B: Advance + PartialEq<E>,
{
    type Item = B::Item;
    type IntoIter = CursorIter<B, E>;

    fn into_iter(self) -> Self::IntoIter {
        CursorIter {
            cursor: self.first,
            limit: self.last,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::{Bound, SliceCursor};
    use crate::range::{xrange_between, Xrange};

    #[test]
    fn test_first_three_of_five_elements() {
        let data = [5, 10, 15, 20, 25];
        let span = cursor_range(SliceCursor::new(&data, 0), SliceCursor::new(&data, 3));
        let taken: Vec<i32> = span.into_iter().copied().collect();
        assert_eq!(taken, vec![5, 10, 15]);
    }

    #[test]
    fn test_span_length_independent_of_sequence_length() {
        let short = [1, 2, 3];
        let long = [1, 2, 3, 4, 5, 6, 7, 8, 9];
        let from_short: Vec<i32> = cursor_range(
            SliceCursor::new(&short, 0),
            SliceCursor::new(&short, 2),
        )
        .into_iter()
        .copied()
        .collect();
        let from_long: Vec<i32> = cursor_range(
            SliceCursor::new(&long, 0),
            SliceCursor::new(&long, 2),
        )
        .into_iter()
        .copied()
        .collect();
        assert_eq!(from_short, from_long);
    }

    #[test]
    fn test_empty_span_yields_nothing() {
        let data = [1, 2, 3];
        let span = cursor_range(SliceCursor::new(&data, 1), SliceCursor::new(&data, 1));
        assert_eq!(span.into_iter().next(), None);
    }

    #[test]
    fn test_heterogeneous_end_marker() {
        let data = [5, 10, 15, 20, 25];
        let span = cursor_range(SliceCursor::new(&data, 1), Bound(4));
        let taken: Vec<i32> = span.into_iter().copied().collect();
        assert_eq!(taken, vec![10, 15, 20]);
    }

    #[test]
    fn test_integer_cursors_make_a_valid_span() {
        let range = xrange_between(10, 0, -3).unwrap();
        let span = cursor_range(range.begin(), range.end());
        let values: Vec<i32> = span.into_iter().collect();
        assert_eq!(values, vec![10, 7, 4, 1]);
    }

    #[test]
    fn test_integer_span_ending_next_to_type_max() {
        let range = Xrange::new(250u8, 255u8, 2u8).unwrap();
        let values: Vec<u8> = cursor_range(range.begin(), range.end())
            .into_iter()
            .collect();
        assert_eq!(values, vec![250, 252, 254]);
    }

    #[test]
    fn test_integer_span_ending_next_to_type_min() {
        let range = Xrange::new(i8::MIN + 2, i8::MIN, -1).unwrap();
        let values: Vec<i8> = cursor_range(range.begin(), range.end())
            .into_iter()
            .collect();
        assert_eq!(values, vec![-126, -127]);
    }

    #[test]
    fn test_accessors_return_the_held_cursors() {
        let data = [1, 2, 3];
        let span = cursor_range(SliceCursor::new(&data, 0), SliceCursor::new(&data, 2));
        assert_eq!(span.begin().position(), 0);
        assert_eq!(span.end().position(), 2);
    }
}
