//! Factory functions for the [variants](crate::variant).
//!
//! ```
//! use either_of_core::of;
//! use either_of_core::union::Union;
//!
//! let left = of::left::<_, String>(3);
//! assert_eq!(*left.left(), 3);
//!
//! // Bind the other side's type when it cannot be inferred.
//! let right = of::r("abc").l::<i64>();
//! assert!(right.has_right());
//! ```

use crate::error::Error;
use crate::kind::Side;
use crate::variant::{Left, Neither, Right};

/// Creates a [`Left`] holding `value`.
#[inline]
pub const fn left<L, R>(value: L) -> Left<L, R> {
  Left::new(value)
}

/// Creates a [`Right`] holding `value`.
#[inline]
pub const fn right<L, R>(value: R) -> Right<L, R> {
  Right::new(value)
}

/// Creates a [`Neither`]. It holds no value, so this never allocates.
#[inline]
pub const fn none<L, R>() -> Neither<L, R> {
  Neither::new()
}


/// Creates a [`Left`] holding `value`, or returns a [null argument](Error::NullArgument) error if `value` is absent.
#[inline]
pub fn try_left<L, R>(value: Option<L>) -> Result<Left<L, R>, Error> {
  value.map(Left::new).ok_or_else(|| reject_absent(Side::Left))
}

/// Creates a [`Right`] holding `value`, or returns a [null argument](Error::NullArgument) error if `value` is absent.
#[inline]
pub fn try_right<L, R>(value: Option<R>) -> Result<Right<L, R>, Error> {
  value.map(Right::new).ok_or_else(|| reject_absent(Side::Right))
}

fn reject_absent(side: Side) -> Error {
  let argument = match side {
    Side::Left => "left value",
    Side::Right => "right value",
  };
  #[cfg(feature = "tracing")] {
    tracing::trace!(%side, argument, "rejecting absent value");
  }
  Error::null_argument(argument)
}


/// Starts creating a [`Left`] holding `value`. Finish with [r](LeftBuilder::r), binding the right type.
#[inline]
pub const fn l<L>(value: L) -> LeftBuilder<L> {
  LeftBuilder(value)
}

/// Starts creating a [`Right`] holding `value`. Finish with [l](RightBuilder::l), binding the left type.
#[inline]
pub const fn r<R>(value: R) -> RightBuilder<R> {
  RightBuilder(value)
}

#[repr(transparent)]
#[must_use]
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct LeftBuilder<L>(L);
impl<L> LeftBuilder<L> {
  #[inline]
  pub fn r<R>(self) -> Left<L, R> {
    Left::new(self.0)
  }
}

#[repr(transparent)]
#[must_use]
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct RightBuilder<R>(R);
impl<R> RightBuilder<R> {
  #[inline]
  pub fn l<L>(self) -> Right<L, R> {
    Right::new(self.0)
  }
}
