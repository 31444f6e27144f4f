use crate::kind::{Side, Variant};

#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, thiserror::Error)]
pub enum Error {
  /// A value was requested from a side that `variant` does not hold.
  #[error("{variant} variant has been requested to return {side} value")]
  UnsupportedAccess { variant: Variant, side: Side },
  /// A required value was absent when constructing a variant.
  #[error("{argument} must not be absent")]
  NullArgument { argument: &'static str },
}
impl Error {
  #[inline]
  pub const fn unsupported_access(variant: Variant, side: Side) -> Self {
    Self::UnsupportedAccess { variant, side }
  }

  #[inline]
  pub const fn null_argument(argument: &'static str) -> Self {
    Self::NullArgument { argument }
  }
}
