use crate::Shape;
use thiserror::Error;

/// Failures raised while building or invoking a typed dispatcher.
///
/// Undeclared capability requests on a bundle have no variant here: they do
/// not compile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// Two handlers declared the same shape. Raised before the dispatcher exists.
    #[error("ambiguous handler registration: `{shape}` is declared more than once")]
    AmbiguousHandler { shape: Shape },

    /// No registered handler accepts the value's exact type and category.
    #[error("no handler accepts `{shape}`")]
    NoMatchingHandler { shape: Shape },

    /// `replace` was asked to rebind a shape that was never registered.
    #[error("cannot replace handler for `{shape}`: shape is not registered")]
    UnknownShape { shape: Shape },
}

impl DispatchError {
    pub fn shape(&self) -> Shape {
        match self {
            DispatchError::AmbiguousHandler { shape }
            | DispatchError::NoMatchingHandler { shape }
            | DispatchError::UnknownShape { shape } => *shape,
        }
    }

    pub fn is_unmatched(&self) -> bool {
        matches!(self, DispatchError::NoMatchingHandler { .. })
    }
}
