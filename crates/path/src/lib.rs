#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![allow(clippy::match_like_matches_macro)]
#![no_std]

//! A single sub-path outline made of move, line, quadratic, cubic and close commands.
//!
//! The [`Path`](struct.Path.html) type stores an ordered sequence of
//! [`Command`](enum.Command.html)s and derives geometry from them: an approximate
//! bounding box, the winding direction and a reversed copy tracing the same outline
//! backward.
//!
//! # Examples
//!
//! ```
//! # extern crate sketch_path;
//! # fn main() {
//! use sketch_path::{Direction, Path};
//! use sketch_path::math::point;
//!
//! let mut path = Path::new();
//! path.move_to(point(0.0, 0.0));
//! path.line_to(point(10.0, 0.0));
//! path.line_to(point(10.0, 10.0));
//! path.line_to(point(0.0, 10.0));
//! // Returning to the start closes the path automatically.
//! path.line_to(point(0.0, 0.0));
//!
//! assert!(path.is_closed());
//! assert_eq!(path.direction(), Direction::Clockwise);
//! assert_eq!(path.reversed().direction(), Direction::CounterClockwise);
//!
//! for command in &path {
//!     println!("{:?}", command);
//! }
//! # }
//! ```
//!

extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

// Reexport dependencies.
pub use arrayvec;
pub use euclid;

mod command;
mod error;
pub mod path;

#[doc(inline)]
pub use crate::command::{Command, CommandKind};
#[doc(inline)]
pub use crate::error::PathError;
#[doc(inline)]
pub use crate::path::{Path, PathF32, PathF64, PathI32};
pub use crate::scalar::Scalar;

mod scalar {
    use core::fmt::Debug;
    use num_traits::Num;

    /// The coordinate type of a path.
    ///
    /// Implemented for every copyable, ordered numeric type, integers included.
    pub trait Scalar: Num + Copy + PartialOrd + Debug {}

    impl<T> Scalar for T where T: Num + Copy + PartialOrd + Debug {}
}

pub mod math {
    //! Generic versions of the euclid types used by the path.

    /// Alias for ```euclid::default::Point2D<T>```.
    pub type Point<T> = euclid::default::Point2D<T>;

    /// Alias for ```euclid::default::Vector2D<T>```.
    pub type Vector<T> = euclid::default::Vector2D<T>;

    /// Alias for ```euclid::default::Box2D<T>```.
    pub type Box2D<T> = euclid::default::Box2D<T>;

    /// Shorthand for `Point::new(x, y)`.
    #[inline]
    pub fn point<T>(x: T, y: T) -> Point<T> {
        Point::new(x, y)
    }

    /// Shorthand for `Vector::new(x, y)`.
    #[inline]
    pub fn vector<T>(x: T, y: T) -> Vector<T> {
        Vector::new(x, y)
    }
}

/// The orientation in which a path's outline is traced.
///
/// Orientations are given for a y-down coordinate system (screen space):
/// the square `(0, 0) -> (10, 0) -> (10, 10) -> (0, 10)` is clockwise.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// The path has too few commands to have an orientation.
    Undefined,
    Clockwise,
    CounterClockwise,
}

impl Direction {
    /// Returns the orientation of the same outline traced backward.
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Direction::Undefined => Direction::Undefined,
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }

    #[inline]
    pub fn is_defined(self) -> bool {
        self != Direction::Undefined
    }
}

#[test]
fn direction_opposite() {
    assert_eq!(Direction::Clockwise.opposite(), Direction::CounterClockwise);
    assert_eq!(Direction::CounterClockwise.opposite(), Direction::Clockwise);
    assert_eq!(Direction::Undefined.opposite(), Direction::Undefined);
    assert!(!Direction::Undefined.is_defined());
    assert!(Direction::Clockwise.is_defined());
}
