use std::fmt::{Display, Formatter};

/// Which variant a [`Union`](crate::union::Union) is.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Variant {
  Left,
  Right,
  Neither,
}
impl Variant {
  /// Returns `true` if this variant carries a value on `side`.
  #[inline]
  pub const fn holds(self, side: Side) -> bool {
    matches!((self, side), (Variant::Left, Side::Left) | (Variant::Right, Side::Right))
  }

  /// Returns the side this variant carries a value on, or `None` for [`Variant::Neither`].
  #[inline]
  pub const fn side(self) -> Option<Side> {
    match self {
      Variant::Left => Some(Side::Left),
      Variant::Right => Some(Side::Right),
      Variant::Neither => None,
    }
  }
}
impl Display for Variant {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    let name = match self {
      Variant::Left => "Left",
      Variant::Right => "Right",
      Variant::Neither => "Neither",
    };
    f.write_str(name)
  }
}


/// One of the two sides a value can be on.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Side {
  Left,
  Right,
}
impl Side {
  #[inline]
  pub const fn other(self) -> Self {
    match self {
      Side::Left => Side::Right,
      Side::Right => Side::Left,
    }
  }
}
impl Display for Side {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    let name = match self {
      Side::Left => "left",
      Side::Right => "right",
    };
    f.write_str(name)
  }
}
