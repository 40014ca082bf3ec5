use num_traits::PrimInt;

//==============================================================================
// The cursor capability
//==============================================================================

/// The capability shared by every cursor type: read the value under the
/// cursor and move it one step forward.
///
/// Termination is expressed separately, through `PartialEq` between a live
/// cursor and its end marker, so the two ends of a span may have different
/// types (an integer cursor against an integer limit, a slice cursor against
/// a bare [`Bound`], and so on).
pub trait Advance {
    type Item;

    /// Returns the value under the cursor without mutating it.
    fn value(&self) -> Self::Item;

    /// Moves the cursor one step forward.
    fn advance(&mut self);
}

//==============================================================================
// Integer cursors
//==============================================================================

/// Iteration state handed out by [`Xrange`](crate::Xrange).
///
/// A positioned cursor carries the live state (`current`, `step`, distance
/// travelled). The limit cursor carries only the target count and serves as
/// the sentinel. Equality compares distance travelled, never element values,
/// which keeps termination exact even when the step overshoots `stop` or
/// never lands on it.
#[derive(Debug, Clone, Copy)]
pub enum Cursor<T> {
    Positioned { current: T, step: T, progress: T },
    Limit { count: T },
}

impl<T: PrimInt> Cursor<T> {
    fn travelled(&self) -> T {
        match self {
            Cursor::Positioned { progress, .. } => *progress,
            Cursor::Limit { count } => *count,
        }
    }
}

impl<T: PrimInt> PartialEq for Cursor<T> {
    fn eq(&self, other: &Self) -> bool {
        self.travelled() == other.travelled()
    }
}

impl<T: PrimInt> Advance for Cursor<T> {
    type Item = T;

    /// Reading the limit cursor is a contract violation; it holds no value.
    fn value(&self) -> T {
        match self {
            Cursor::Positioned { current, .. } => *current,
            Cursor::Limit { .. } => panic!("cannot read the value of a limit cursor"),
        }
    }

    /// Advancing the limit cursor is a contract violation; it marks the end
    /// of iteration and never moves.
    fn advance(&mut self) {
        match self {
            Cursor::Positioned {
                current,
                step,
                progress,
            } => {
                // Count derivation keeps every in-range value representable;
                // only the dead slot after the last element can overflow, and
                // that value is unreadable once the cursor meets its limit.
                // Freeze the value there instead of wrapping past the type.
                *current = current.checked_add(step).unwrap_or(*current);
                *progress = *progress + T::one();
            }
            Cursor::Limit { .. } => panic!("cannot advance a limit cursor"),
        }
    }
}

//==============================================================================
// Slice cursors
//==============================================================================

/// A cursor into a borrowed slice, the external-sequence counterpart of the
/// integer cursors above. Pairs of these, or a cursor and a [`Bound`], can be
/// handed to [`cursor_range`](crate::cursor_range).
#[derive(Debug, Clone, Copy)]
pub struct SliceCursor<'a, T> {
    data: &'a [T],
    position: usize,
}

impl<'a, T> SliceCursor<'a, T> {
    pub fn new(data: &'a [T], position: usize) -> Self {
        Self { data, position }
    }

    pub fn position(&self) -> usize {
        self.position
    }
}

impl<'a, T> Advance for SliceCursor<'a, T> {
    type Item = &'a T;

    fn value(&self) -> &'a T {
        &self.data[self.position]
    }

    fn advance(&mut self) {
        self.position += 1;
    }
}

/// Equality looks at position only; pairing cursors from different slices is
/// the caller's contract breach, not something checked here.
impl<T> PartialEq for SliceCursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
    }
}

/// A bare end marker for slice cursors, for spans whose end is known only as
/// a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bound(pub usize);

impl<T> PartialEq<Bound> for SliceCursor<'_, T> {
    fn eq(&self, other: &Bound) -> bool {
        self.position == other.0
    }
}

//==============================================================================
// Tests
//==============================================================================
