use crate::either::Either;
use crate::error::Error;
use crate::kind::{Side, Variant};

/// A value that holds a left value, a right value, or neither.
///
/// Implementors only provide a [borrowed view](Self::as_either) of themselves as an [`Either`]; all combinators are
/// provided on top of that view. Implemented by [`Either`] and by the individual variants
/// [`Left`](crate::variant::Left), [`Right`](crate::variant::Right), and [`Neither`](crate::variant::Neither).
///
/// Handlers that take both sides at once (the `_bi` combinators) receive a pair of options, of which at least one is
/// always `None`.
pub trait Union {
  type LeftValue;
  type RightValue;

  /// Borrow this value as an [`Either`] of references.
  fn as_either(&self) -> Either<&Self::LeftValue, &Self::RightValue>;

  /// Gets which variant this is.
  #[inline]
  fn variant(&self) -> Variant {
    self.as_either().variant()
  }


  /// Gets the left value, or an [unsupported access](Error::UnsupportedAccess) error if there is none.
  #[inline]
  fn try_left(&self) -> Result<&Self::LeftValue, Error> {
    match self.as_either() {
      Either::Left(value) => Ok(value),
      either => Err(Error::unsupported_access(either.variant(), Side::Left)),
    }
  }

  /// Gets the right value, or an [unsupported access](Error::UnsupportedAccess) error if there is none.
  #[inline]
  fn try_right(&self) -> Result<&Self::RightValue, Error> {
    match self.as_either() {
      Either::Right(value) => Ok(value),
      either => Err(Error::unsupported_access(either.variant(), Side::Right)),
    }
  }

  /// Gets the left value.
  ///
  /// Prefer [left_optional](Self::left_optional) or [try_left](Self::try_left) unless [has_left](Self::has_left)
  /// was already checked.
  ///
  /// # Panics
  ///
  /// Panics if this does not hold a left value.
  #[inline]
  #[track_caller]
  fn left(&self) -> &Self::LeftValue {
    match self.try_left() {
      Ok(value) => value,
      Err(e) => panic!("{}", e),
    }
  }

  /// Gets the right value.
  ///
  /// # Panics
  ///
  /// Panics if this does not hold a right value.
  #[inline]
  #[track_caller]
  fn right(&self) -> &Self::RightValue {
    match self.try_right() {
      Ok(value) => value,
      Err(e) => panic!("{}", e),
    }
  }

  #[inline]
  fn left_optional(&self) -> Option<&Self::LeftValue> {
    match self.as_either() {
      Either::Left(value) => Some(value),
      _ => None,
    }
  }

  #[inline]
  fn right_optional(&self) -> Option<&Self::RightValue> {
    match self.as_either() {
      Either::Right(value) => Some(value),
      _ => None,
    }
  }

  #[inline]
  fn has_left(&self) -> bool {
    matches!(self.as_either(), Either::Left(_))
  }

  #[inline]
  fn has_right(&self) -> bool {
    matches!(self.as_either(), Either::Right(_))
  }


  /// Joins both sides into a single output: applies `left_fn` to the left value or `right_fn` to the right value,
  /// whichever is present. Returns `None` without calling either function if neither is present.
  #[inline]
  fn as_joined<O>(
    &self,
    left_fn: impl FnOnce(&Self::LeftValue) -> O,
    right_fn: impl FnOnce(&Self::RightValue) -> O,
  ) -> Option<O> {
    match self.as_either() {
      Either::Left(value) => Some(left_fn(value)),
      Either::Right(value) => Some(right_fn(value)),
      Either::Neither => None,
    }
  }

  /// Joins both sides into a single output by calling `bi_fn` with both optional values. At least one of the
  /// arguments is `None`.
  ///
  /// Unlike [as_joined](Self::as_joined), `bi_fn` is also called when neither value is present.
  #[inline]
  fn as_joined_bi<O>(
    &self,
    bi_fn: impl FnOnce(Option<&Self::LeftValue>, Option<&Self::RightValue>) -> O,
  ) -> O {
    let (left, right) = self.as_either().into_sides();
    bi_fn(left, right)
  }

  /// Same as [as_joined](Self::as_joined), for functions that may not produce an output.
  #[inline]
  fn as_joined_optional<O>(
    &self,
    left_fn: impl FnOnce(&Self::LeftValue) -> Option<O>,
    right_fn: impl FnOnce(&Self::RightValue) -> Option<O>,
  ) -> Option<O> {
    self.as_joined(left_fn, right_fn).flatten()
  }

  /// Same as [as_joined_bi](Self::as_joined_bi), for functions that may not produce an output.
  #[inline]
  fn as_joined_bi_optional<O>(
    &self,
    bi_fn: impl FnOnce(Option<&Self::LeftValue>, Option<&Self::RightValue>) -> Option<O>,
  ) -> Option<O> {
    self.as_joined_bi(bi_fn)
  }


  /// Calls `left_consumer` with the left value or `right_consumer` with the right value, whichever is present. Calls
  /// neither if neither value is present.
  #[inline]
  fn accept(
    &self,
    left_consumer: impl FnOnce(&Self::LeftValue),
    right_consumer: impl FnOnce(&Self::RightValue),
  ) {
    match self.as_either() {
      Either::Left(value) => left_consumer(value),
      Either::Right(value) => right_consumer(value),
      Either::Neither => {}
    }
  }

  /// Calls `bi_consumer` with both optional values. At least one of the arguments is `None`.
  ///
  /// Unlike [accept](Self::accept), `bi_consumer` is also called when neither value is present.
  #[inline]
  fn accept_bi(&self, bi_consumer: impl FnOnce(Option<&Self::LeftValue>, Option<&Self::RightValue>)) {
    self.as_joined_bi(bi_consumer)
  }

  #[inline]
  fn accept_left(&self, left_consumer: impl FnOnce(&Self::LeftValue)) {
    if let Either::Left(value) = self.as_either() {
      left_consumer(value)
    }
  }

  #[inline]
  fn accept_right(&self, right_consumer: impl FnOnce(&Self::RightValue)) {
    if let Either::Right(value) = self.as_either() {
      right_consumer(value)
    }
  }


  /// [Accepts](Self::accept) and then returns `self` unchanged.
  #[inline]
  fn peek(
    self,
    left_consumer: impl FnOnce(&Self::LeftValue),
    right_consumer: impl FnOnce(&Self::RightValue),
  ) -> Self where
    Self: Sized,
  {
    self.accept(left_consumer, right_consumer);
    self
  }

  /// [Accepts](Self::accept_bi) and then returns `self` unchanged.
  #[inline]
  fn peek_bi(self, bi_consumer: impl FnOnce(Option<&Self::LeftValue>, Option<&Self::RightValue>)) -> Self where
    Self: Sized,
  {
    self.accept_bi(bi_consumer);
    self
  }

  #[inline]
  fn peek_left(self, left_consumer: impl FnOnce(&Self::LeftValue)) -> Self where
    Self: Sized,
  {
    self.accept_left(left_consumer);
    self
  }

  #[inline]
  fn peek_right(self, right_consumer: impl FnOnce(&Self::RightValue)) -> Self where
    Self: Sized,
  {
    self.accept_right(right_consumer);
    self
  }
}


#[cfg(test)]
mod tests {
  use std::cell::Cell;

  use super::*;

  fn left() -> Either<i64, String> { Either::Left(3) }
  fn right() -> Either<i64, String> { Either::Right("abc".to_string()) }
  fn neither() -> Either<i64, String> { Either::Neither }

  #[test]
  fn accessors_on_left() {
    let target = left();
    assert_eq!(target.variant(), Variant::Left);
    assert!(target.has_left());
    assert!(!target.has_right());
    assert_eq!(*target.left(), 3);
    assert_eq!(target.try_left(), Ok(&3));
    assert_eq!(target.try_right(), Err(Error::unsupported_access(Variant::Left, Side::Right)));
    assert_eq!(target.left_optional(), Some(&3));
    assert_eq!(target.right_optional(), None);
  }

  #[test]
  fn accessors_on_right() {
    let target = right();
    assert_eq!(target.variant(), Variant::Right);
    assert!(!target.has_left());
    assert!(target.has_right());
    assert_eq!(target.right(), "abc");
    assert_eq!(target.try_left(), Err(Error::unsupported_access(Variant::Right, Side::Left)));
    assert_eq!(target.left_optional(), None);
    assert_eq!(target.right_optional().map(String::as_str), Some("abc"));
  }

  #[test]
  fn accessors_on_neither() {
    let target = neither();
    assert_eq!(target.variant(), Variant::Neither);
    assert!(!target.has_left());
    assert!(!target.has_right());
    assert_eq!(target.try_left(), Err(Error::unsupported_access(Variant::Neither, Side::Left)));
    assert_eq!(target.try_right(), Err(Error::unsupported_access(Variant::Neither, Side::Right)));
    assert_eq!(target.left_optional(), None);
    assert_eq!(target.right_optional(), None);
  }

  #[test]
  #[should_panic(expected = "Left variant has been requested to return right value")]
  fn right_of_left_panics() {
    left().right();
  }

  #[test]
  #[should_panic(expected = "Right variant has been requested to return left value")]
  fn left_of_right_panics() {
    right().left();
  }

  #[test]
  #[should_panic(expected = "Neither variant has been requested to return left value")]
  fn left_of_neither_panics() {
    neither().left();
  }

  #[test]
  #[should_panic(expected = "Neither variant has been requested to return right value")]
  fn right_of_neither_panics() {
    neither().right();
  }


  #[test]
  fn as_joined_calls_matching_function() {
    let left_calls = Cell::new(0);
    let right_calls = Cell::new(0);
    let to_string = |target: Either<i64, String>| target.as_joined(
      |l| {
        left_calls.set(left_calls.get() + 1);
        l.to_string()
      },
      |r| {
        right_calls.set(right_calls.get() + 1);
        r.to_uppercase()
      },
    );

    assert_eq!(to_string(left()), Some("3".to_string()));
    assert_eq!((left_calls.get(), right_calls.get()), (1, 0));
    assert_eq!(to_string(right()), Some("ABC".to_string()));
    assert_eq!((left_calls.get(), right_calls.get()), (1, 1));
    assert_eq!(to_string(neither()), None);
    assert_eq!((left_calls.get(), right_calls.get()), (1, 1));
  }

  #[test]
  fn as_joined_bi_is_called_for_every_variant() {
    let describe = |target: Either<i64, String>| target.as_joined_bi(|l, r| match (l, r) {
      (Some(l), None) => format!("left {}", l),
      (None, Some(r)) => format!("right {}", r),
      (None, None) => "neither".to_string(),
      (Some(_), Some(_)) => unreachable!("both sides present"),
    });

    assert_eq!(describe(left()), "left 3");
    assert_eq!(describe(right()), "right abc");
    assert_eq!(describe(neither()), "neither");
  }

  #[test]
  fn as_joined_optional_flattens_absent_output() {
    let parse = |target: Either<i64, String>| target.as_joined_optional(
      |l| u8::try_from(*l).ok(),
      |r| r.parse::<u8>().ok(),
    );

    assert_eq!(parse(left()), Some(3));
    assert_eq!(parse(Either::Left(1024)), None);
    assert_eq!(parse(Either::Right("7".to_string())), Some(7));
    assert_eq!(parse(right()), None);
    assert_eq!(parse(neither()), None);
  }

  #[test]
  fn as_joined_bi_optional_maps_absent_output() {
    let positive = |target: Either<i64, String>| target.as_joined_bi_optional(|l, _| l.copied().filter(|l| *l > 0));

    assert_eq!(positive(left()), Some(3));
    assert_eq!(positive(Either::Left(-3)), None);
    assert_eq!(positive(right()), None);
    assert_eq!(positive(neither()), None);
  }


  #[test]
  fn accept_skips_neither_but_accept_bi_does_not() {
    let calls = Cell::new(0);
    neither().accept(|_| calls.set(calls.get() + 1), |_| calls.set(calls.get() + 1));
    assert_eq!(calls.get(), 0);

    let mut received = Vec::new();
    neither().accept_bi(|l, r| received.push((l.copied(), r.cloned())));
    assert_eq!(received, vec![(None, None)]);
  }

  #[test]
  fn accept_calls_matching_consumer() {
    let mut lefts = Vec::new();
    let mut rights = Vec::new();
    left().accept(|l| lefts.push(*l), |r| rights.push(r.clone()));
    right().accept(|l| lefts.push(*l), |r| rights.push(r.clone()));
    assert_eq!(lefts, vec![3]);
    assert_eq!(rights, vec!["abc".to_string()]);
  }

  #[test]
  fn accept_side_only_when_present() {
    let mut lefts = Vec::new();
    left().accept_left(|l| lefts.push(*l));
    right().accept_left(|l| lefts.push(*l));
    neither().accept_left(|l| lefts.push(*l));
    assert_eq!(lefts, vec![3]);

    let mut rights = Vec::new();
    left().accept_right(|r| rights.push(r.clone()));
    right().accept_right(|r| rights.push(r.clone()));
    neither().accept_right(|r| rights.push(r.clone()));
    assert_eq!(rights, vec!["abc".to_string()]);
  }


  #[test]
  fn peek_returns_self_unchanged() {
    let calls = Cell::new(0);
    let count = |_: &i64| calls.set(calls.get() + 1);

    let target = left().peek(count, |_| {}).peek_left(count).peek_right(|_| panic!("no right value"));
    assert_eq!(target, left());
    assert_eq!(calls.get(), 2);

    let target = neither().peek_bi(|l, r| {
      assert_eq!((l, r), (None, None));
      calls.set(calls.get() + 1);
    });
    assert_eq!(target, neither());
    assert_eq!(calls.get(), 3);
  }
}
