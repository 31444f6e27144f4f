use crate::kind::Variant;
use crate::union::Union;

/// Holds a left value, a right value, or neither.
///
/// Create one with the [factory functions](crate::of) and convert the returned variant with
/// [`Into`](Into::into), or construct it directly.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Either<L, R> {
  Left(L),
  Right(R),
  Neither,
}

impl<L, R> Default for Either<L, R> {
  #[inline]
  fn default() -> Self { Self::Neither }
}

impl<L, R> Either<L, R> {
  #[inline]
  pub const fn variant(&self) -> Variant {
    match self {
      Either::Left(_) => Variant::Left,
      Either::Right(_) => Variant::Right,
      Either::Neither => Variant::Neither,
    }
  }

  #[inline]
  pub const fn as_ref(&self) -> Either<&L, &R> {
    match self {
      Either::Left(value) => Either::Left(value),
      Either::Right(value) => Either::Right(value),
      Either::Neither => Either::Neither,
    }
  }


  #[inline]
  pub fn into_left(self) -> Option<L> {
    match self {
      Either::Left(value) => Some(value),
      _ => None,
    }
  }

  #[inline]
  pub fn into_right(self) -> Option<R> {
    match self {
      Either::Right(value) => Some(value),
      _ => None,
    }
  }

  /// Splits into a left and right option, of which at least one is `None`.
  #[inline]
  pub fn into_sides(self) -> (Option<L>, Option<R>) {
    match self {
      Either::Left(value) => (Some(value), None),
      Either::Right(value) => (None, Some(value)),
      Either::Neither => (None, None),
    }
  }

  /// Consuming version of [as_joined](Union::as_joined).
  #[inline]
  pub fn into_joined<O>(self, left_fn: impl FnOnce(L) -> O, right_fn: impl FnOnce(R) -> O) -> Option<O> {
    match self {
      Either::Left(value) => Some(left_fn(value)),
      Either::Right(value) => Some(right_fn(value)),
      Either::Neither => None,
    }
  }
}

impl<L, R> Union for Either<L, R> {
  type LeftValue = L;
  type RightValue = R;

  #[inline]
  fn as_either(&self) -> Either<&L, &R> { self.as_ref() }
}
