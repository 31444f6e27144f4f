//! Free functions that turn [`Union`] combinators into closures, for use in iterator pipelines.
//!
//! ```
//! use either_of_core::adapter::to_joined_with;
//! use either_of_core::either::Either;
//!
//! let values: Vec<Either<i64, String>> = vec![Either::Left(3), Either::Right("abc".to_string()), Either::Neither];
//! let joined: Vec<Option<String>> = values.iter()
//!   .map(to_joined_with::<Either<i64, String>, _>(|l| l.to_string(), |r| r.to_uppercase()))
//!   .collect();
//! assert_eq!(joined, vec![Some("3".to_string()), Some("ABC".to_string()), None]);
//! ```

use crate::union::Union;

/// Returns a closure that calls [as_joined](Union::as_joined).
#[inline]
pub fn to_joined_with<U: Union, O>(
  mut left_fn: impl FnMut(&U::LeftValue) -> O,
  mut right_fn: impl FnMut(&U::RightValue) -> O,
) -> impl FnMut(&U) -> Option<O> {
  move |union| union.as_joined(&mut left_fn, &mut right_fn)
}

/// Returns a closure that calls [as_joined_bi](Union::as_joined_bi).
#[inline]
pub fn to_joined_bi_with<U: Union, O>(
  mut bi_fn: impl FnMut(Option<&U::LeftValue>, Option<&U::RightValue>) -> O,
) -> impl FnMut(&U) -> O {
  move |union| union.as_joined_bi(&mut bi_fn)
}

/// Returns a closure that calls [as_joined_optional](Union::as_joined_optional).
#[inline]
pub fn to_joined_optional_with<U: Union, O>(
  mut left_fn: impl FnMut(&U::LeftValue) -> Option<O>,
  mut right_fn: impl FnMut(&U::RightValue) -> Option<O>,
) -> impl FnMut(&U) -> Option<O> {
  move |union| union.as_joined_optional(&mut left_fn, &mut right_fn)
}

/// Returns a closure that calls [as_joined_bi_optional](Union::as_joined_bi_optional).
#[inline]
pub fn to_joined_bi_optional_with<U: Union, O>(
  mut bi_fn: impl FnMut(Option<&U::LeftValue>, Option<&U::RightValue>) -> Option<O>,
) -> impl FnMut(&U) -> Option<O> {
  move |union| union.as_joined_bi_optional(&mut bi_fn)
}


/// Returns a closure that calls [accept](Union::accept).
#[inline]
pub fn accept_with<U: Union>(
  mut left_consumer: impl FnMut(&U::LeftValue),
  mut right_consumer: impl FnMut(&U::RightValue),
) -> impl FnMut(&U) {
  move |union| union.accept(&mut left_consumer, &mut right_consumer)
}

/// Returns a closure that calls [accept_bi](Union::accept_bi).
#[inline]
pub fn accept_bi_with<U: Union>(
  mut bi_consumer: impl FnMut(Option<&U::LeftValue>, Option<&U::RightValue>),
) -> impl FnMut(&U) {
  move |union| union.accept_bi(&mut bi_consumer)
}

#[inline]
pub fn accept_left_with<U: Union>(mut left_consumer: impl FnMut(&U::LeftValue)) -> impl FnMut(&U) {
  move |union| union.accept_left(&mut left_consumer)
}

#[inline]
pub fn accept_right_with<U: Union>(mut right_consumer: impl FnMut(&U::RightValue)) -> impl FnMut(&U) {
  move |union| union.accept_right(&mut right_consumer)
}


/// Returns a closure that calls [peek](Union::peek), passing the value through.
#[inline]
pub fn peek_with<U: Union>(
  mut left_consumer: impl FnMut(&U::LeftValue),
  mut right_consumer: impl FnMut(&U::RightValue),
) -> impl FnMut(U) -> U {
  move |union| union.peek(&mut left_consumer, &mut right_consumer)
}

/// Returns a closure that calls [peek_bi](Union::peek_bi), passing the value through.
#[inline]
pub fn peek_bi_with<U: Union>(
  mut bi_consumer: impl FnMut(Option<&U::LeftValue>, Option<&U::RightValue>),
) -> impl FnMut(U) -> U {
  move |union| union.peek_bi(&mut bi_consumer)
}

#[inline]
pub fn peek_left_with<U: Union>(mut left_consumer: impl FnMut(&U::LeftValue)) -> impl FnMut(U) -> U {
  move |union| union.peek_left(&mut left_consumer)
}

#[inline]
pub fn peek_right_with<U: Union>(mut right_consumer: impl FnMut(&U::RightValue)) -> impl FnMut(U) -> U {
  move |union| union.peek_right(&mut right_consumer)
}
