use std::cmp::Ordering;
use std::iter::FusedIterator;

use num_traits::PrimInt;

use crate::cursor::Cursor;
use crate::error::RangeError;

//==============================================================================
// The range descriptor
//==============================================================================

/// A lazy arithmetic sequence over the half-open interval `[start, stop)`.
///
/// The number of elements is derived once at construction, so iteration never
/// compares element values against `stop`: a live cursor is matched against
/// the limit purely by distance travelled. That makes termination exact for
/// steps that overshoot `stop` or never land on it, in either direction.
///
/// The descriptor itself is an immutable factory and may be iterated any
/// number of times; each iterator produced from it is independent, single-use
/// state.
///
/// ```
/// use xrange::Xrange;
///
/// let odds: Vec<i32> = Xrange::new(1, 10, 2)?.into_iter().collect();
/// assert_eq!(odds, vec![1, 3, 5, 7, 9]);
/// # Ok::<(), xrange::RangeError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Xrange<T> {
    start: T,
    stop: T,
    step: T,
    count: T,
}

impl<T: PrimInt> Xrange<T> {
    /// Builds a range from `start` toward `stop` in increments of `step`.
    ///
    /// Ascending ranges require `step > 0`, descending ranges `step < 0`; a
    /// step pointing away from `stop` yields an empty range rather than an
    /// error. Construction fails only for the arguments no count exists for:
    /// a zero step, a signed step equal to its type's minimum, or a
    /// start-to-stop distance wider than the element type.
    pub fn new(start: T, stop: T, step: T) -> Result<Self, RangeError> {
        let count = derive_count(start, stop, step)?;
        Ok(Self {
            start,
            stop,
            step,
            count,
        })
    }

    /// Like [`Xrange::new`], with the step supplied in a different integer
    /// type. The step must convert losslessly into `T`; a value that does not
    /// fit is rejected, never truncated.
    pub fn with_step<S: PrimInt>(start: T, stop: T, step: S) -> Result<Self, RangeError> {
        let step = T::from(step).ok_or(RangeError::StepNotRepresentable)?;
        Self::new(start, stop, step)
    }

    pub fn start(&self) -> T {
        self.start
    }

    pub fn stop(&self) -> T {
        self.stop
    }

    pub fn step(&self) -> T {
        self.step
    }

    /// The exact number of elements iteration will yield.
    pub fn count(&self) -> T {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count.is_zero()
    }

    /// Returns a positioned cursor at the first element.
    pub fn begin(&self) -> Cursor<T> {
        Cursor::Positioned {
            current: self.start,
            step: self.step,
            progress: T::zero(),
        }
    }

    /// Returns the limit cursor. It carries only the target count; reading or
    /// advancing it is a contract violation.
    pub fn end(&self) -> Cursor<T> {
        Cursor::Limit { count: self.count }
    }

    pub fn iter(&self) -> XrangeIter<T> {
        XrangeIter {
            current: self.start,
            step: self.step,
            progress: T::zero(),
            count: self.count,
        }
    }
}

/// Creates the range `0, 1, ..., stop - 1`.
///
/// Equivalent to `Xrange::new(0, stop, 1)` but infallible: a unit step needs
/// no validation and `stop - 0` cannot overflow. A non-positive `stop` gives
/// an empty range.
pub fn xrange<T: PrimInt>(stop: T) -> Xrange<T> {
    let zero = T::zero();
    let count = if stop > zero { stop } else { zero };
    Xrange {
        start: zero,
        stop,
        step: T::one(),
        count,
    }
}

/// Creates the range `start, start + step, ...`, stopping before `stop`.
/// The free-function form of [`Xrange::new`].
pub fn xrange_between<T: PrimInt>(start: T, stop: T, step: T) -> Result<Xrange<T>, RangeError> {
    Xrange::new(start, stop, step)
}

//==============================================================================
// Count derivation
//==============================================================================

/// Decides how many elements `[start, stop)` holds when walked in increments
/// of `step`: the smallest count such that `start + count * step` passes
/// `stop`. Integer arithmetic only; the ceiling adjustment is "+1 on a
/// nonzero remainder".
fn derive_count<T: PrimInt>(start: T, stop: T, step: T) -> Result<T, RangeError> {
    let zero = T::zero();
    if step == zero {
        return Err(RangeError::ZeroStep);
    }
    // The magnitude of a signed type's minimum is not representable, so the
    // descending branch below could not negate it.
    if step < zero && step == T::min_value() {
        return Err(RangeError::StepNegationOverflow);
    }

    match start.cmp(&stop) {
        Ordering::Equal => Ok(zero),
        Ordering::Less if step > zero => {
            let difference = stop.checked_sub(&start).ok_or(RangeError::SpanOverflow)?;
            Ok(ceil_div(difference, step))
        }
        Ordering::Greater if step < zero => {
            let difference = start.checked_sub(&stop).ok_or(RangeError::SpanOverflow)?;
            Ok(ceil_div(difference, zero - step))
        }
        // Direction mismatch: the step points away from stop.
        _ => Ok(zero),
    }
}

/// Ceiling division for a nonnegative `difference` and positive `divisor`.
fn ceil_div<T: PrimInt>(difference: T, divisor: T) -> T {
    let quotient = difference / divisor;
    if (difference % divisor).is_zero() {
        quotient
    } else {
        quotient + T::one()
    }
}

//==============================================================================
// Iteration
//==============================================================================

/// Iterator over an [`Xrange`]; yields exactly `count` values.
#[derive(Debug, Clone)]
pub struct XrangeIter<T> {
    current: T,
    step: T,
    progress: T,
    count: T,
}

impl<T: PrimInt> Iterator for XrangeIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.progress == self.count {
            return None;
        }
        let value = self.current;
        self.progress = self.progress + T::one();
        // The slot after the last element is never read; skipping its step
        // keeps a range ending next to T::MAX or T::MIN from overflowing.
        if self.progress < self.count {
            self.current = self.current + self.step;
        }
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match (self.count - self.progress).to_usize() {
            Some(remaining) => (remaining, Some(remaining)),
            // Wider than the platform word; only the lower bound is honest.
            None => (usize::MAX, None),
        }
    }
}

impl<T: PrimInt> FusedIterator for XrangeIter<T> {}

impl<T: PrimInt> IntoIterator for Xrange<T> {
    type Item = T;
    type IntoIter = XrangeIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PrimInt> IntoIterator for &Xrange<T> {
    type Item = T;
    type IntoIter = XrangeIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

//==============================================================================
// Tests
//==============================================================================
