//! A value that holds a left value, a right value, or neither, with combinators to join, accept, and peek at it
//! without branching at every call site.
//!
//! - [`Either`](either::Either) is the sum type itself.
//! - [`Left`](variant::Left), [`Right`](variant::Right), and [`Neither`](variant::Neither) are the individual
//!   variants, as created by the [factory functions](of).
//! - [`Union`](union::Union) provides the combinators for all of the above.
//! - [`adapter`] turns combinators into closures for iterator pipelines.

pub mod kind;
pub mod error;

pub mod union;
pub mod either;
pub mod variant;

pub mod of;
pub mod adapter;

pub use either::Either;
pub use error::Error;
pub use union::Union;
