use thiserror::Error;


/// Errors raised by array operations and trainers.
///
/// All checks run before any mutation takes place, so an `Err`
/// leaves the receiver untouched.

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  #[error("invalid shape {shape:?}: dimensions must be non-empty and positive")]
  InvalidShape { shape: Vec<usize> },

  #[error("shape mismatch between {lhs:?} and {rhs:?}")]
  ShapeMismatch { lhs: Vec<usize>, rhs: Vec<usize> },

  #[error("size mismatch between {lhs} and {rhs} elements")]
  SizeMismatch { lhs: usize, rhs: usize },

  #[error("axis {axis} out of range for rank {rank}")]
  AxisOutOfRange { axis: usize, rank: usize },

  #[error("expected rank {expected}, got {actual}")]
  RankError { expected: usize, actual: usize },

  #[error("index {index:?} out of range for shape {shape:?}")]
  IndexOutOfRange { index: Vec<usize>, shape: Vec<usize> },

  #[error("empty sampling range: min must be below max")]
  EmptyRange,

  #[error("inconsistent layout: {reason}")]
  InvalidLayout { reason: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn messages() {
    let err = Error::ShapeMismatch { lhs: vec![2, 3], rhs: vec![2, 2] };
    assert_eq!(err.to_string(), "shape mismatch between [2, 3] and [2, 2]");

    let err = Error::AxisOutOfRange { axis: 2, rank: 2 };
    assert_eq!(err.to_string(), "axis 2 out of range for rank 2");

    assert_eq!(Error::EmptyRange.to_string(), "empty sampling range: min must be below max");
  }
}
