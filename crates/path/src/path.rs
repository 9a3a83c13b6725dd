//! The path data structure.

use crate::math::{Box2D, Point};
use crate::{Command, CommandKind, Direction, PathError, Scalar};

use core::fmt;
use core::iter::FromIterator;
use core::ops::{Index, IndexMut};
use core::slice;

use alloc::vec;
use alloc::vec::Vec;

/// A single sub-path outline.
///
/// # Representation
///
/// The path stores one [`Command`](enum.Command.html) per drawing instruction:
///
/// ```ascii
///  ______________________________________________________________
/// |         |        |                |                  |       |
/// | Move to | Line to| Quadratic ctrl | Cubic ctrl1 ctrl2 | Close |
/// |_________|________|________to______|________to________|_______|
/// ```
///
/// # Single sub-path
///
/// The mutation methods keep a path made of exactly one sub-path: the first command
/// is always a move, `move_to` starts over from an empty path, and returning to the
/// first point closes the path automatically.
///
/// Paths built from an explicit list of commands ([`from_commands`](#method.from_commands),
/// [`set`](#method.set), `From<Vec<Command<T>>>`, `FromIterator`) store the list as is.
/// Use [`validate`](#method.validate) or [`try_from_commands`](#method.try_from_commands)
/// to check it.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Path<T> {
    commands: Vec<Command<T>>,
}

pub type PathI32 = Path<i32>;
pub type PathF32 = Path<f32>;
pub type PathF64 = Path<f64>;

impl<T> Path<T> {
    /// Creates an empty `Path`.
    #[inline]
    pub fn new() -> Self {
        Path {
            commands: Vec::new(),
        }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Path {
            commands: Vec::with_capacity(capacity),
        }
    }

    /// Creates a path from a list of commands, without validating it.
    #[inline]
    pub fn from_commands(commands: Vec<Command<T>>) -> Self {
        Path { commands }
    }

    /// Replaces the commands of this path, without validating them.
    #[inline]
    pub fn set(&mut self, commands: Vec<Command<T>>) {
        self.commands = commands;
    }

    /// Removes all commands.
    #[inline]
    pub fn reset(&mut self) {
        self.commands.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    #[inline]
    pub fn commands(&self) -> &[Command<T>] {
        &self.commands
    }

    /// Direct access to the command storage.
    ///
    /// Nothing prevents edits made this way from breaking the single sub-path
    /// structure that the mutation methods maintain.
    #[inline]
    pub fn commands_mut(&mut self) -> &mut Vec<Command<T>> {
        &mut self.commands
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Command<T>> {
        self.commands.get(index)
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Command<T>> {
        self.commands.get_mut(index)
    }

    #[inline]
    pub fn first(&self) -> Option<&Command<T>> {
        self.commands.first()
    }

    #[inline]
    pub fn first_mut(&mut self) -> Option<&mut Command<T>> {
        self.commands.first_mut()
    }

    #[inline]
    pub fn last(&self) -> Option<&Command<T>> {
        self.commands.last()
    }

    #[inline]
    pub fn last_mut(&mut self) -> Option<&mut Command<T>> {
        self.commands.last_mut()
    }

    /// Iterates over the commands.
    ///
    /// The iterator is double-ended, use `iter().rev()` to walk the path backward.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Command<T>> {
        self.commands.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, Command<T>> {
        self.commands.iter_mut()
    }
}

impl<T: Scalar> Path<T> {
    /// Creates a path from a list of commands, checking that it describes a single
    /// sub-path.
    pub fn try_from_commands(commands: Vec<Command<T>>) -> Result<Self, PathError> {
        let path = Path { commands };
        path.validate()?;

        Ok(path)
    }

    /// Checks that the path is empty or starts with its only move command.
    pub fn validate(&self) -> Result<(), PathError> {
        for (index, command) in self.commands.iter().enumerate() {
            let kind = command.kind();
            if (index == 0) != (kind == CommandKind::Move) {
                return Err(PathError::InvalidCommandSequence { index, kind });
            }
        }

        Ok(())
    }

    /// The endpoint of the first command.
    #[inline]
    pub fn first_point(&self) -> Option<Point<T>> {
        self.commands.first().and_then(Command::endpoint)
    }

    /// The endpoint of the last command that has one.
    pub fn last_point(&self) -> Option<Point<T>> {
        self.commands.iter().rev().find_map(Command::endpoint)
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.commands.last() == Some(&Command::Close)
    }

    /// Starts the path over at `to`.
    ///
    /// All existing commands are discarded: a path holds a single sub-path.
    pub fn move_to(&mut self, to: Point<T>) {
        self.commands.clear();
        self.commands.push(Command::Move { to });
    }

    /// Adds a line to `to`, or starts the path at `to` if it is empty.
    pub fn line_to(&mut self, to: Point<T>) {
        self.push_segment(Command::Line { to }, to);
    }

    /// Adds a quadratic bézier curve to `to`.
    ///
    /// If the path is empty, it starts at `to` instead and `ctrl` is ignored.
    pub fn quadratic_to(&mut self, ctrl: Point<T>, to: Point<T>) {
        self.push_segment(Command::Quadratic { ctrl, to }, to);
    }

    /// Adds a cubic bézier curve to `to`.
    ///
    /// If the path is empty, it starts at `to` instead and the control points are
    /// ignored.
    pub fn cubic_to(&mut self, ctrl1: Point<T>, ctrl2: Point<T>, to: Point<T>) {
        self.push_segment(Command::Cubic { ctrl1, ctrl2, to }, to);
    }

    fn push_segment(&mut self, segment: Command<T>, to: Point<T>) {
        if self.commands.is_empty() {
            if segment.kind() != CommandKind::Line {
                log::debug!(
                    "{:?} command on an empty path, starting at {:?} instead",
                    segment.kind(),
                    to
                );
            }
            self.move_to(to);
            return;
        }

        self.commands.push(segment);

        if self.first_point() == Some(to) {
            self.close();
        }
    }

    /// Closes the path unless it is already closed.
    ///
    /// The path must not be empty.
    pub fn close(&mut self) {
        if let Err(err) = self.try_close() {
            log::error!("Ignoring close(): {}", err);
            debug_assert!(false, "{}", err);
        }
    }

    /// Closes the path unless it is already closed, or fails if the path is empty.
    pub fn try_close(&mut self) -> Result<(), PathError> {
        if self.commands.is_empty() {
            return Err(PathError::EmptyPath);
        }

        if !self.is_closed() {
            self.commands.push(Command::Close);
        }

        Ok(())
    }

    /// Computes an axis-aligned rectangle containing every endpoint and control point.
    ///
    /// Curves are bounded by their control points, so the rectangle can be larger than
    /// the outline. A path without any point has a zero-sized rectangle at the origin.
    pub fn bounds(&self) -> Box2D<T> {
        let mut min_max: Option<(Point<T>, Point<T>)> = None;
        for command in &self.commands {
            for p in command.points() {
                min_max = Some(match min_max {
                    Some((min, max)) => (min.min(p), max.max(p)),
                    None => (p, p),
                });
            }
        }

        match min_max {
            Some((min, max)) => Box2D::new(min, max),
            None => Box2D::zero(),
        }
    }

    /// Computes the orientation of the path.
    ///
    /// Panics in debug builds if a move follows the first command or if the first
    /// command has no point.
    /// Release builds log the problem and return `Direction::Undefined`.
    /// See [`try_direction`](#method.try_direction).
    pub fn direction(&self) -> Direction {
        match self.try_direction() {
            Ok(direction) => direction,
            Err(err) => {
                log::error!("Failed to compute the direction of the path: {}", err);
                debug_assert!(false, "{}", err);
                Direction::Undefined
            }
        }
    }

    /// Computes the orientation of the path from the signed area of the polygon
    /// formed by its endpoints.
    ///
    /// Curves are approximated by the chord between their endpoints. Paths of fewer
    /// than three commands have an undefined direction, and a zero area is considered
    /// clockwise.
    pub fn try_direction(&self) -> Result<Direction, PathError> {
        if self.commands.len() < 3 {
            return Ok(Direction::Undefined);
        }

        let first = self.commands[0];
        let first_point = first
            .endpoint()
            .ok_or(PathError::InvalidCommandSequence {
                index: 0,
                kind: first.kind(),
            })?;

        let mut area = T::zero();
        let mut from = first_point;
        for (index, command) in self.commands.iter().enumerate().skip(1) {
            let to = match *command {
                Command::Line { to } | Command::Quadratic { to, .. } | Command::Cubic { to, .. } => {
                    to
                }
                Command::Close => first_point,
                Command::Move { .. } => {
                    return Err(PathError::InvalidCommandSequence {
                        index,
                        kind: CommandKind::Move,
                    });
                }
            };
            area = area + from.to_vector().cross(to.to_vector());
            from = to;
        }

        Ok(if area < T::zero() {
            Direction::CounterClockwise
        } else {
            Direction::Clockwise
        })
    }

    /// Reverses the path in place so that it traces the same outline backward.
    ///
    /// The first command stays a move and a closed path stays closed.
    /// See [`try_reverse`](#method.try_reverse).
    pub fn reverse(&mut self) -> &mut Self {
        if let Err(err) = self.try_reverse() {
            log::error!("Failed to reverse the path: {}", err);
            debug_assert!(false, "{}", err);
        }

        self
    }

    /// Returns a reversed copy of this path.
    pub fn reversed(&self) -> Self {
        let mut path = self.clone();
        path.reverse();

        path
    }

    /// Reverses the path in place.
    ///
    /// The points of all commands are collected in order, the command kinds between
    /// the leading move and the trailing close (if any) are reversed, and the commands
    /// are then rebuilt from the points in reverse order. The path is left untouched if
    /// the rebuilt commands don't consume exactly the collected points.
    pub fn try_reverse(&mut self) -> Result<&mut Self, PathError> {
        let points: Vec<Point<T>> = self.commands.iter().flat_map(Command::points).collect();

        let mut kinds: Vec<CommandKind> = self.commands.iter().map(Command::kind).collect();
        let end = if self.is_closed() {
            kinds.len() - 1
        } else {
            kinds.len()
        };
        if end > 1 {
            kinds[1..end].reverse();
        }

        // Each command carries exactly `kind.arity()` points and reversing the kinds keeps
        // their total, so this only fails if that bookkeeping breaks.
        let available = points.len();
        let mut stream = points.into_iter().rev();
        let commands: Option<Vec<Command<T>>> = kinds
            .iter()
            .map(|&kind| Command::from_points(kind, &mut stream))
            .collect();
        let commands = match commands {
            Some(commands) if stream.len() == 0 => commands,
            _ => {
                return Err(PathError::PointCountMismatch {
                    available,
                    required: kinds.iter().map(|kind| kind.arity()).sum(),
                });
            }
        };

        self.commands = commands;

        Ok(self)
    }
}

impl<T> Default for Path<T> {
    fn default() -> Self {
        Path::new()
    }
}

impl<T> From<Vec<Command<T>>> for Path<T> {
    fn from(commands: Vec<Command<T>>) -> Self {
        Path::from_commands(commands)
    }
}

impl<T> FromIterator<Command<T>> for Path<T> {
    fn from_iter<I: IntoIterator<Item = Command<T>>>(iter: I) -> Self {
        Path {
            commands: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<Command<T>> for Path<T> {
    fn extend<I: IntoIterator<Item = Command<T>>>(&mut self, iter: I) {
        self.commands.extend(iter);
    }
}

impl<T> Index<usize> for Path<T> {
    type Output = Command<T>;
    fn index(&self, index: usize) -> &Command<T> {
        &self.commands[index]
    }
}

impl<T> IndexMut<usize> for Path<T> {
    fn index_mut(&mut self, index: usize) -> &mut Command<T> {
        &mut self.commands[index]
    }
}

impl<T> IntoIterator for Path<T> {
    type Item = Command<T>;
    type IntoIter = vec::IntoIter<Command<T>>;

    fn into_iter(self) -> vec::IntoIter<Command<T>> {
        self.commands.into_iter()
    }
}

impl<'l, T> IntoIterator for &'l Path<T> {
    type Item = &'l Command<T>;
    type IntoIter = slice::Iter<'l, Command<T>>;

    fn into_iter(self) -> slice::Iter<'l, Command<T>> {
        self.commands.iter()
    }
}

impl<'l, T> IntoIterator for &'l mut Path<T> {
    type Item = &'l mut Command<T>;
    type IntoIter = slice::IterMut<'l, Command<T>>;

    fn into_iter(self) -> slice::IterMut<'l, Command<T>> {
        self.commands.iter_mut()
    }
}

impl<T: fmt::Debug> fmt::Debug for Path<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        fn write_point<T: fmt::Debug>(formatter: &mut fmt::Formatter, point: &Point<T>) -> fmt::Result {
            write!(formatter, " ")?;
            fmt::Debug::fmt(&point.x, formatter)?;
            write!(formatter, " ")?;
            fmt::Debug::fmt(&point.y, formatter)
        }

        write!(formatter, "\"")?;

        for command in &self.commands {
            match command {
                Command::Move { to } => {
                    write!(formatter, " M")?;
                    write_point(formatter, to)?;
                }
                Command::Line { to } => {
                    write!(formatter, " L")?;
                    write_point(formatter, to)?;
                }
                Command::Quadratic { ctrl, to } => {
                    write!(formatter, " Q")?;
                    write_point(formatter, ctrl)?;
                    write_point(formatter, to)?;
                }
                Command::Cubic { ctrl1, ctrl2, to } => {
                    write!(formatter, " C")?;
                    write_point(formatter, ctrl1)?;
                    write_point(formatter, ctrl2)?;
                    write_point(formatter, to)?;
                }
                Command::Close => {
                    write!(formatter, " Z")?;
                }
            }
        }

        write!(formatter, "\"")
    }
}

#[cfg(test)]
use crate::math::point;

#[cfg(test)]
fn square(points: &[(i32, i32)]) -> PathI32 {
    let mut path = Path::new();
    path.move_to(point(points[0].0, points[0].1));
    for &(x, y) in &points[1..] {
        path.line_to(point(x, y));
    }

    path
}

#[test]
fn clockwise_square() {
    let path = square(&[(0, 0), (10, 0), (10, 10), (0, 10), (0, 0)]);

    assert_eq!(path.len(), 6);
    assert_eq!(path.last(), Some(&Command::Close));
    assert_eq!(path.direction(), Direction::Clockwise);
    assert_eq!(path.bounds(), Box2D::new(point(0, 0), point(10, 10)));
}

#[test]
fn counter_clockwise_square() {
    let path = square(&[(0, 0), (0, 10), (10, 10), (10, 0), (0, 0)]);

    assert!(path.is_closed());
    assert_eq!(path.direction(), Direction::CounterClockwise);
    assert_eq!(path.bounds(), Box2D::new(point(0, 0), point(10, 10)));
}

#[test]
fn empty_path() {
    let path: PathF32 = Path::new();

    assert_eq!(path.len(), 0);
    assert!(path.is_empty());
    assert_eq!(path.bounds(), Box2D::new(point(0.0, 0.0), point(0.0, 0.0)));
    assert_eq!(path.direction(), Direction::Undefined);
    assert_eq!(path.first(), None);
    assert_eq!(path.last(), None);
    assert_eq!(path.first_point(), None);
    assert_eq!(path, Path::default());
}

#[test]
fn too_few_commands_for_a_direction() {
    let mut path = PathF64::new();
    path.move_to(point(1.0, 2.0));
    assert_eq!(path.direction(), Direction::Undefined);

    path.line_to(point(3.0, 4.0));
    assert_eq!(path.direction(), Direction::Undefined);

    path.line_to(point(3.0, 10.0));
    assert!(path.direction().is_defined());
}

#[test]
fn curves_on_empty_path_start_the_path() {
    let mut path = PathF32::new();
    path.quadratic_to(point(5.0, 5.0), point(1.0, 2.0));
    assert_eq!(path.commands(), &[Command::Move { to: point(1.0, 2.0) }]);
    assert_eq!(path.bounds(), Box2D::new(point(1.0, 2.0), point(1.0, 2.0)));

    let mut path = PathF32::new();
    path.cubic_to(point(5.0, 5.0), point(-5.0, -5.0), point(3.0, 4.0));
    assert_eq!(path.commands(), &[Command::Move { to: point(3.0, 4.0) }]);

    let mut path = PathF32::new();
    path.line_to(point(3.0, 4.0));
    assert_eq!(path.commands(), &[Command::Move { to: point(3.0, 4.0) }]);
}

#[test]
fn move_to_starts_over() {
    let mut path = square(&[(0, 0), (10, 0), (10, 10)]);
    assert_eq!(path.len(), 3);

    path.move_to(point(5, 5));
    assert_eq!(path.commands(), &[Command::Move { to: point(5, 5) }]);
}

#[test]
fn auto_close() {
    let mut path = PathI32::new();
    path.move_to(point(0, 0));
    path.quadratic_to(point(10, 0), point(10, 10));
    path.cubic_to(point(10, 20), point(0, 20), point(0, 0));

    assert_eq!(path.len(), 4);
    assert!(path.is_closed());

    path.close();
    assert_eq!(path.len(), 4);

    let mut path = PathI32::new();
    path.move_to(point(0, 0));
    path.line_to(point(10, 0));
    path.quadratic_to(point(10, 10), point(0, 0));
    assert_eq!(path.len(), 4);
    assert_eq!(path.last(), Some(&Command::Close));
}

#[test]
fn explicit_close() {
    let mut path = square(&[(0, 0), (10, 0), (10, 10)]);
    assert!(!path.is_closed());

    path.close();
    path.close();
    assert_eq!(path.len(), 4);
    assert!(path.is_closed());
    assert_eq!(path.last_point(), Some(point(10, 10)));
}

#[test]
fn try_close_empty_path() {
    let mut path = PathI32::new();
    assert_eq!(path.try_close(), Err(PathError::EmptyPath));
    assert!(path.is_empty());
}

#[test]
fn bounds_include_control_points() {
    let mut path = PathF32::new();
    path.move_to(point(-10.0, -3.0));
    path.line_to(point(0.0, -12.0));
    path.quadratic_to(point(3.0, 4.0), point(5.0, 3.0));
    path.close();

    assert_eq!(
        path.bounds(),
        Box2D::new(point(-10.0, -12.0), point(5.0, 4.0))
    );

    let mut path = PathF32::new();
    path.move_to(point(0.0, 0.0));
    path.cubic_to(point(-1.0, 2.0), point(3.0, -4.0), point(1.0, -1.0));

    assert_eq!(path.bounds(), Box2D::new(point(-1.0, -4.0), point(3.0, 2.0)));
}

#[test]
fn bounds_of_close_only_path() {
    let path: PathI32 = Path::from_commands(vec![Command::Close, Command::Close]);
    assert_eq!(path.bounds(), Box2D::new(point(0, 0), point(0, 0)));
}

#[test]
fn direction_ignores_control_points() {
    // The control points bulge the other way, only the chords count.
    let mut path = PathI32::new();
    path.move_to(point(0, 0));
    path.quadratic_to(point(5, 100), point(10, 0));
    path.cubic_to(point(100, 0), point(100, 10), point(10, 10));
    path.line_to(point(0, 10));
    path.close();

    assert_eq!(path.direction(), Direction::Clockwise);
    assert_eq!(path.reversed().direction(), Direction::CounterClockwise);
}

#[test]
fn degenerate_direction_is_clockwise() {
    let path = square(&[(0, 0), (5, 5), (10, 10)]);
    assert_eq!(path.direction(), Direction::Clockwise);
}

#[test]
fn direction_rejects_inner_move() {
    let path: PathI32 = Path::from_commands(vec![
        Command::move_to(point(0, 0)),
        Command::line_to(point(10, 0)),
        Command::move_to(point(10, 10)),
        Command::line_to(point(0, 10)),
    ]);

    assert_eq!(
        path.try_direction(),
        Err(PathError::InvalidCommandSequence {
            index: 2,
            kind: CommandKind::Move,
        })
    );
}

#[test]
fn direction_rejects_missing_start() {
    let path: PathI32 = Path::from_commands(vec![
        Command::close(),
        Command::line_to(point(10, 0)),
        Command::line_to(point(0, 10)),
    ]);

    assert_eq!(
        path.try_direction(),
        Err(PathError::InvalidCommandSequence {
            index: 0,
            kind: CommandKind::Close,
        })
    );
}

#[test]
fn reverse_closed_path() {
    let mut path = PathI32::new();
    path.move_to(point(0, 0));
    path.line_to(point(10, 0));
    path.quadratic_to(point(15, 5), point(10, 10));
    path.cubic_to(point(8, 12), point(2, 12), point(0, 10));
    path.close();

    let reversed = path.reversed();

    assert_eq!(
        reversed.commands(),
        &[
            Command::move_to(point(0, 10)),
            Command::cubic_to(point(2, 12), point(8, 12), point(10, 10)),
            Command::quadratic_to(point(15, 5), point(10, 0)),
            Command::line_to(point(0, 0)),
            Command::close(),
        ]
    );
    // The source path is untouched.
    assert_eq!(path.first_point(), Some(point(0, 0)));
}

#[test]
fn reverse_open_path() {
    let mut path = PathF32::new();
    path.move_to(point(0.0, 0.0));
    path.line_to(point(1.0, 0.0));
    path.line_to(point(1.0, 1.0));

    path.reverse();

    assert_eq!(
        path.commands(),
        &[
            Command::move_to(point(1.0, 1.0)),
            Command::line_to(point(1.0, 0.0)),
            Command::line_to(point(0.0, 0.0)),
        ]
    );
}

#[test]
fn reverse_returns_self() {
    let mut path = square(&[(0, 0), (10, 0), (10, 10), (0, 10), (0, 0)]);
    let direction = path.reverse().direction();
    assert_eq!(direction, Direction::CounterClockwise);
}

#[test]
fn reverse_tiny_paths() {
    let mut empty = PathI32::new();
    empty.reverse();
    assert!(empty.is_empty());

    let mut single = PathI32::new();
    single.move_to(point(3, 4));
    assert_eq!(single.reversed(), single);

    let mut closed_point: PathI32 =
        Path::from_commands(vec![Command::move_to(point(3, 4)), Command::close()]);
    closed_point.reverse();
    assert_eq!(
        closed_point.commands(),
        &[Command::move_to(point(3, 4)), Command::close()]
    );

    let lonely_close: PathI32 = Path::from_commands(vec![Command::close()]);
    assert_eq!(lonely_close.reversed(), lonely_close);
}

#[test]
fn reverse_properties() {
    let mut paths = Vec::new();

    paths.push(square(&[(0, 0), (10, 0), (10, 10), (0, 10), (0, 0)]));
    paths.push(square(&[(0, 0), (0, 10), (10, 10), (10, 0)]));

    let mut path = PathI32::new();
    path.move_to(point(-3, 2));
    path.cubic_to(point(4, -8), point(9, 1), point(12, 7));
    path.quadratic_to(point(6, 20), point(1, 9));
    path.line_to(point(-1, 5));
    paths.push(path.clone());

    path.close();
    paths.push(path);

    let mut path = PathI32::new();
    path.move_to(point(0, 0));
    path.line_to(point(20, -5));
    path.quadratic_to(point(50, -20), point(30, 30));
    path.cubic_to(point(20, 40), point(-10, 40), point(0, 0));
    assert!(path.is_closed());
    paths.push(path);

    for path in &paths {
        let reversed = path.reversed();

        assert_eq!(&reversed.reversed(), path);
        assert_eq!(reversed.bounds(), path.bounds());
        assert_eq!(reversed.len(), path.len());
        assert_eq!(reversed.is_closed(), path.is_closed());
        assert_eq!(reversed.first().map(Command::kind), Some(CommandKind::Move));
        assert_eq!(reversed.direction(), path.direction().opposite());
    }
}

#[test]
fn validation() {
    let valid = vec![
        Command::move_to(point(0, 0)),
        Command::line_to(point(1, 0)),
        Command::close(),
    ];
    assert!(Path::try_from_commands(valid).is_ok());
    assert!(PathI32::new().validate().is_ok());

    let no_move = vec![Command::line_to(point(1, 0)), Command::close()];
    assert_eq!(
        Path::try_from_commands(no_move),
        Err(PathError::InvalidCommandSequence {
            index: 0,
            kind: CommandKind::Line,
        })
    );

    let two_moves = Path::from_commands(vec![
        Command::move_to(point(0, 0)),
        Command::line_to(point(1, 0)),
        Command::move_to(point(2, 0)),
    ]);
    assert_eq!(
        two_moves.validate(),
        Err(PathError::InvalidCommandSequence {
            index: 2,
            kind: CommandKind::Move,
        })
    );
}

#[test]
fn access_and_iteration() {
    let mut path = square(&[(0, 0), (10, 0), (10, 10)]);

    assert_eq!(path[1], Command::line_to(point(10, 0)));
    assert_eq!(path.get(3), None);

    path[1] = Command::line_to(point(20, 0));
    assert_eq!(path.get(1), Some(&Command::line_to(point(20, 0))));

    let backward: Vec<CommandKind> = path.iter().rev().map(Command::kind).collect();
    assert_eq!(
        backward,
        vec![CommandKind::Line, CommandKind::Line, CommandKind::Move]
    );

    for command in &mut path {
        if let Command::Line { to } = command {
            to.y += 1;
        }
    }
    assert_eq!(path.last_point(), Some(point(10, 11)));

    let endpoints: Vec<_> = path.iter().filter_map(Command::endpoint).collect();
    assert_eq!(endpoints, vec![point(0, 0), point(20, 1), point(10, 11)]);

    let copy: PathI32 = path.clone().into_iter().collect();
    assert_eq!(copy, path);

    path.reset();
    assert!(path.is_empty());
    assert_ne!(copy, path);
}

#[test]
#[should_panic]
fn index_out_of_range() {
    let path = square(&[(0, 0), (10, 0)]);
    let _command = path[2];
}

#[test]
fn try_reverse_mixed_path() {
    let mut path = PathI32::new();
    path.move_to(point(0, 0));
    path.cubic_to(point(5, -10), point(15, -10), point(20, 0));
    path.quadratic_to(point(25, 10), point(20, 20));
    path.line_to(point(0, 0));
    assert!(path.is_closed());

    let mut reversed = path.clone();
    assert!(reversed.try_reverse().is_ok());
    assert_eq!(reversed, path.reversed());
    assert_eq!(reversed.direction(), path.direction().opposite());

    assert!(reversed.try_reverse().is_ok());
    assert_eq!(reversed, path);
}

#[cfg(debug_assertions)]
#[test]
#[should_panic]
fn close_empty_path_asserts() {
    PathI32::new().close();
}

#[cfg(debug_assertions)]
#[test]
#[should_panic]
fn direction_with_inner_move_asserts() {
    let path: PathI32 = Path::from_commands(vec![
        Command::move_to(point(0, 0)),
        Command::line_to(point(10, 0)),
        Command::move_to(point(10, 10)),
    ]);
    path.direction();
}

#[test]
fn set_stores_commands_verbatim() {
    let mut path = PathI32::new();
    let commands = vec![Command::close(), Command::line_to(point(1, 1))];
    path.set(commands.clone());
    assert_eq!(path.commands(), &commands[..]);

    path.extend(vec![Command::move_to(point(2, 2))]);
    assert_eq!(path.len(), 3);
}

#[test]
fn debug_format() {
    use alloc::format;

    let mut path = PathI32::new();
    path.move_to(point(0, 0));
    path.line_to(point(10, 0));
    path.quadratic_to(point(10, 10), point(0, 10));
    path.close();

    assert_eq!(
        format!("{:?}", path),
        "\" M 0 0 L 10 0 Q 10 10 0 10 Z\""
    );
}
