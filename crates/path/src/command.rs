//! The drawing commands stored in a path.

use crate::math::Point;

use arrayvec::ArrayVec;

/// The kind of a [`Command`](enum.Command.html), without its points.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Move,
    Line,
    Quadratic,
    Cubic,
    Close,
}

impl CommandKind {
    /// Number of points carried by commands of this kind.
    #[inline]
    pub fn arity(self) -> usize {
        match self {
            CommandKind::Move | CommandKind::Line => 1,
            CommandKind::Quadratic => 2,
            CommandKind::Cubic => 3,
            CommandKind::Close => 0,
        }
    }
}

/// One drawing instruction of a path.
///
/// Each variant holds exactly the points its kind needs. Curves describe their
/// control points before their endpoint, which is also the order in which
/// [`points`](#method.points) lists them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Command<T> {
    Move {
        to: Point<T>,
    },
    Line {
        to: Point<T>,
    },
    Quadratic {
        ctrl: Point<T>,
        to: Point<T>,
    },
    Cubic {
        ctrl1: Point<T>,
        ctrl2: Point<T>,
        to: Point<T>,
    },
    Close,
}

impl<T: Copy> Command<T> {
    #[inline]
    pub fn move_to(to: Point<T>) -> Self {
        Command::Move { to }
    }

    #[inline]
    pub fn line_to(to: Point<T>) -> Self {
        Command::Line { to }
    }

    #[inline]
    pub fn quadratic_to(ctrl: Point<T>, to: Point<T>) -> Self {
        Command::Quadratic { ctrl, to }
    }

    #[inline]
    pub fn cubic_to(ctrl1: Point<T>, ctrl2: Point<T>, to: Point<T>) -> Self {
        Command::Cubic { ctrl1, ctrl2, to }
    }

    #[inline]
    pub fn close() -> Self {
        Command::Close
    }

    /// Builds a command of the given kind, taking as many points from `points`
    /// as the kind needs.
    ///
    /// Returns `None` if `points` runs out first.
    pub fn from_points<I>(kind: CommandKind, points: &mut I) -> Option<Self>
    where
        I: Iterator<Item = Point<T>>,
    {
        Some(match kind {
            CommandKind::Move => Command::Move { to: points.next()? },
            CommandKind::Line => Command::Line { to: points.next()? },
            CommandKind::Quadratic => Command::Quadratic {
                ctrl: points.next()?,
                to: points.next()?,
            },
            CommandKind::Cubic => Command::Cubic {
                ctrl1: points.next()?,
                ctrl2: points.next()?,
                to: points.next()?,
            },
            CommandKind::Close => Command::Close,
        })
    }

    #[inline]
    pub fn kind(&self) -> CommandKind {
        match self {
            Command::Move { .. } => CommandKind::Move,
            Command::Line { .. } => CommandKind::Line,
            Command::Quadratic { .. } => CommandKind::Quadratic,
            Command::Cubic { .. } => CommandKind::Cubic,
            Command::Close => CommandKind::Close,
        }
    }

    /// The anchor point the command ends at, if it has one.
    #[inline]
    pub fn endpoint(&self) -> Option<Point<T>> {
        match *self {
            Command::Move { to }
            | Command::Line { to }
            | Command::Quadratic { to, .. }
            | Command::Cubic { to, .. } => Some(to),
            Command::Close => None,
        }
    }

    /// The first control point of a curve.
    #[inline]
    pub fn control1(&self) -> Option<Point<T>> {
        match *self {
            Command::Quadratic { ctrl, .. } => Some(ctrl),
            Command::Cubic { ctrl1, .. } => Some(ctrl1),
            _ => None,
        }
    }

    /// The second control point of a cubic curve.
    #[inline]
    pub fn control2(&self) -> Option<Point<T>> {
        match *self {
            Command::Cubic { ctrl2, .. } => Some(ctrl2),
            _ => None,
        }
    }

    /// All points of the command, control points first.
    pub fn points(&self) -> ArrayVec<Point<T>, 3> {
        let mut points = ArrayVec::new();
        match *self {
            Command::Move { to } | Command::Line { to } => {
                points.push(to);
            }
            Command::Quadratic { ctrl, to } => {
                points.push(ctrl);
                points.push(to);
            }
            Command::Cubic { ctrl1, ctrl2, to } => {
                points.push(ctrl1);
                points.push(ctrl2);
                points.push(to);
            }
            Command::Close => {}
        }

        points
    }

    /// Returns true for lines and curves.
    #[inline]
    pub fn is_segment(&self) -> bool {
        match self {
            Command::Line { .. } | Command::Quadratic { .. } | Command::Cubic { .. } => true,
            _ => false,
        }
    }
}

#[test]
fn command_accessors() {
    use crate::math::point;

    let cubic = Command::cubic_to(point(1, 2), point(3, 4), point(5, 6));
    assert_eq!(cubic.kind(), CommandKind::Cubic);
    assert_eq!(cubic.control1(), Some(point(1, 2)));
    assert_eq!(cubic.control2(), Some(point(3, 4)));
    assert_eq!(cubic.endpoint(), Some(point(5, 6)));
    assert!(cubic.is_segment());

    let quadratic = Command::quadratic_to(point(1, 2), point(3, 4));
    assert_eq!(quadratic.control1(), Some(point(1, 2)));
    assert_eq!(quadratic.control2(), None);
    assert_eq!(quadratic.endpoint(), Some(point(3, 4)));

    let begin = Command::move_to(point(7, 8));
    assert_eq!(begin.control1(), None);
    assert_eq!(begin.endpoint(), Some(point(7, 8)));
    assert!(!begin.is_segment());

    let close: Command<i32> = Command::close();
    assert_eq!(close.kind(), CommandKind::Close);
    assert_eq!(close.endpoint(), None);
    assert!(close.points().is_empty());
    assert!(!close.is_segment());
}

#[test]
fn command_points_match_arity() {
    use crate::math::point;

    let commands = [
        Command::move_to(point(0.0, 0.0)),
        Command::line_to(point(1.0, 0.0)),
        Command::quadratic_to(point(2.0, 0.0), point(2.0, 1.0)),
        Command::cubic_to(point(2.0, 2.0), point(1.0, 2.0), point(0.0, 2.0)),
        Command::close(),
    ];

    for command in &commands {
        assert_eq!(command.points().len(), command.kind().arity());
    }

    assert_eq!(
        &commands[3].points()[..],
        &[point(2.0, 2.0), point(1.0, 2.0), point(0.0, 2.0)]
    );
}

#[test]
fn command_from_points() {
    use crate::math::point;

    let stream = [point(1, 1), point(2, 2), point(3, 3)];
    let mut points = stream.iter().cloned();
    assert_eq!(
        Command::from_points(CommandKind::Quadratic, &mut points),
        Some(Command::quadratic_to(point(1, 1), point(2, 2)))
    );
    assert_eq!(
        Command::from_points(CommandKind::Close, &mut points),
        Some(Command::Close)
    );
    // Only one point left, a cubic needs three.
    assert_eq!(Command::from_points(CommandKind::Cubic, &mut points), None);

    let mut empty = core::iter::empty();
    assert_eq!(
        Command::<f32>::from_points(CommandKind::Line, &mut empty),
        None
    );
}
