use crate::CommandKind;

use thiserror::Error;

/// Structural problems detected in a path's command sequence.
///
/// Paths built from explicit command lists are not validated, so these errors
/// surface when such a path is queried or checked with
/// [`Path::validate`](struct.Path.html#method.validate).
#[derive(Error, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PathError {
    #[error("The path is empty.")]
    EmptyPath,
    #[error("Command {index}: unexpected {kind:?} command.")]
    InvalidCommandSequence { index: usize, kind: CommandKind },
    /// Internal error: the points collected while reversing a path did not match
    /// the arity of the reversed commands.
    #[error("Reversed commands need {required} points, {available} were collected.")]
    PointCountMismatch { available: usize, required: usize },
}
