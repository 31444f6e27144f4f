use std::fmt::{Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use crate::either::Either;
use crate::union::Union;

/// Holds only a left value. The right type `R` is never stored.
#[must_use]
pub struct Left<L, R> {
  value: L,
  _right: PhantomData<fn() -> R>,
}

/// Holds only a right value. The left type `L` is never stored.
#[must_use]
pub struct Right<L, R> {
  value: R,
  _left: PhantomData<fn() -> L>,
}

/// Holds no value. Zero-sized; every instance is the same.
#[must_use]
pub struct Neither<L, R>(PhantomData<fn() -> (L, R)>);


impl<L, R> Left<L, R> {
  #[inline]
  pub(crate) const fn new(value: L) -> Self {
    Self { value, _right: PhantomData }
  }

  /// Gets the left value.
  #[inline]
  pub const fn get(&self) -> &L { &self.value }

  #[inline]
  pub fn into_inner(self) -> L { self.value }

  #[inline]
  pub fn into_either(self) -> Either<L, R> { Either::Left(self.value) }
}

impl<L, R> Right<L, R> {
  #[inline]
  pub(crate) const fn new(value: R) -> Self {
    Self { value, _left: PhantomData }
  }

  /// Gets the right value.
  #[inline]
  pub const fn get(&self) -> &R { &self.value }

  #[inline]
  pub fn into_inner(self) -> R { self.value }

  #[inline]
  pub fn into_either(self) -> Either<L, R> { Either::Right(self.value) }
}

impl<L, R> Neither<L, R> {
  #[inline]
  pub(crate) const fn new() -> Self { Self(PhantomData) }

  #[inline]
  pub const fn into_either(self) -> Either<L, R> { Either::Neither }
}


impl<L, R> Union for Left<L, R> {
  type LeftValue = L;
  type RightValue = R;

  #[inline]
  fn as_either(&self) -> Either<&L, &R> { Either::Left(&self.value) }
}

impl<L, R> Union for Right<L, R> {
  type LeftValue = L;
  type RightValue = R;

  #[inline]
  fn as_either(&self) -> Either<&L, &R> { Either::Right(&self.value) }
}

impl<L, R> Union for Neither<L, R> {
  type LeftValue = L;
  type RightValue = R;

  #[inline]
  fn as_either(&self) -> Either<&L, &R> { Either::Neither }
}


impl<L, R> From<Left<L, R>> for Either<L, R> {
  #[inline]
  fn from(left: Left<L, R>) -> Self { left.into_either() }
}
impl<L, R> From<Right<L, R>> for Either<L, R> {
  #[inline]
  fn from(right: Right<L, R>) -> Self { right.into_either() }
}
impl<L, R> From<Neither<L, R>> for Either<L, R> {
  #[inline]
  fn from(neither: Neither<L, R>) -> Self { neither.into_either() }
}


// Manual impls: derives would bound the phantom side as well.

impl<L: Clone, R> Clone for Left<L, R> {
  #[inline]
  fn clone(&self) -> Self { Self::new(self.value.clone()) }
}
impl<L: Copy, R> Copy for Left<L, R> {}
impl<L: PartialEq, R> PartialEq for Left<L, R> {
  #[inline]
  fn eq(&self, other: &Self) -> bool { self.value == other.value }
}
impl<L: Eq, R> Eq for Left<L, R> {}
impl<L: Hash, R> Hash for Left<L, R> {
  #[inline]
  fn hash<H: Hasher>(&self, state: &mut H) { self.value.hash(state) }
}
impl<L: Debug, R> Debug for Left<L, R> {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.debug_tuple("Left").field(&self.value).finish()
  }
}

impl<L, R: Clone> Clone for Right<L, R> {
  #[inline]
  fn clone(&self) -> Self { Self::new(self.value.clone()) }
}
impl<L, R: Copy> Copy for Right<L, R> {}
impl<L, R: PartialEq> PartialEq for Right<L, R> {
  #[inline]
  fn eq(&self, other: &Self) -> bool { self.value == other.value }
}
impl<L, R: Eq> Eq for Right<L, R> {}
impl<L, R: Hash> Hash for Right<L, R> {
  #[inline]
  fn hash<H: Hasher>(&self, state: &mut H) { self.value.hash(state) }
}
impl<L, R: Debug> Debug for Right<L, R> {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.debug_tuple("Right").field(&self.value).finish()
  }
}

impl<L, R> Clone for Neither<L, R> {
  #[inline]
  fn clone(&self) -> Self { *self }
}
impl<L, R> Copy for Neither<L, R> {}
impl<L, R> Default for Neither<L, R> {
  #[inline]
  fn default() -> Self { Self::new() }
}
impl<L, R> PartialEq for Neither<L, R> {
  #[inline]
  fn eq(&self, _other: &Self) -> bool { true }
}
impl<L, R> Eq for Neither<L, R> {}
impl<L, R> Hash for Neither<L, R> {
  #[inline]
  fn hash<H: Hasher>(&self, _state: &mut H) {}
}
impl<L, R> Debug for Neither<L, R> {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.write_str("Neither")
  }
}
