//! Toy regression models trained with full-batch gradient descent.
//!
//! Both trainers run for a fixed number of epochs, without any
//! convergence check. Progress gets reported through an optional
//! callback that receives a [TrainProgress] after every epoch.

mod linear;
mod logistic;

pub use linear::LinearRegression;
pub use logistic::LogisticRegression;

use rand::Rng;

use crate::{
  internal::*,
  error::{ Error, Result },
  array::NdArray,
  scalar::Real,
};


/// Hyperparameters shared by all trainers.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainOptions<T> {
  /// Step size of every parameter update.
  pub learning_rate: T,
  /// Number of passes over the training set.
  pub epochs: usize,
}

impl<T: Real> Default for TrainOptions<T> {
  fn default() -> Self {
    Self {
      learning_rate: cast(0.01),
      epochs: 100,
    }
  }
}


/// Reported once per epoch, after the parameters have been updated.
/// The loss belongs to the parameters the epoch started with.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainProgress<T> {
  pub epoch: usize,
  pub loss: T,
}


/// Weights of shape `[d, 1]` and a `[1, 1]` bias.

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Parameters<T: Real> {
  pub weights: NdArray<T>,
  pub bias: NdArray<T>,
}

impl<T: Real> Parameters<T> {
  pub fn init<R: Rng>(features: usize, rng: &mut R) -> Result<Self> {
    let mut weights = NdArray::zeros(&[features, 1])?;
    let mut bias = NdArray::zeros(&[1, 1])?;
    weights.random_range_with(-T::one(), T::one(), rng)?;
    bias.random_range_with(-T::one(), T::one(), rng)?;
    Ok(Self { weights, bias })
  }

  /// `x · w + b`, with the single bias value added to every row.

  pub fn affine(&self, x: &NdArray<T>) -> Result<NdArray<T>> {
    Ok(x.matmul(&self.weights)? + self.bias.item()?)
  }

  /// Descend along `xᵀ · residual / n` for the weights and
  /// `mean(residual)` for the bias, both scaled by `rate`.

  pub fn update(&mut self, x: &NdArray<T>, residual: &NdArray<T>, rate: T) -> Result<()> {
    let n: T = cast(x.shape()[0]);
    let gradient = x.transpose()?.matmul(residual)? * (rate / n);
    self.weights.sub_assign(&gradient)?;
    self.bias.sub_assign_scalar(residual.mean() * rate);
    Ok(())
  }

  /// Features of `x` have to line up with the weights.

  pub fn check_features(&self, x: &NdArray<T>) -> Result<()> {
    if x.rank() != 2 || x.shape()[1] != self.weights.shape()[0] {
      return Err(Error::ShapeMismatch { lhs: x.shape().to_vec(), rhs: self.weights.shape().to_vec() })
    }
    Ok(())
  }

  pub fn set_weights(&mut self, weights: NdArray<T>) -> Result<()> {
    check_same_shape(&self.weights, &weights)?;
    self.weights = weights;
    Ok(())
  }

  pub fn set_bias(&mut self, bias: NdArray<T>) -> Result<()> {
    check_same_shape(&self.bias, &bias)?;
    self.bias = bias;
    Ok(())
  }
}


fn check_same_shape<T: Real>(current: &NdArray<T>, new: &NdArray<T>) -> Result<()> {
  if current.shape() != new.shape() {
    return Err(Error::ShapeMismatch { lhs: current.shape().to_vec(), rhs: new.shape().to_vec() })
  }
  Ok(())
}

/// Features must be `[n, d]` and targets `[n, 1]`.

pub(crate) fn check_data<T: Real>(x: &NdArray<T>, y: &NdArray<T>) -> Result<()> {
  for array in [x, y] {
    if array.rank() != 2 {
      return Err(Error::RankError { expected: 2, actual: array.rank() })
    }
  }
  if y.shape() != [x.shape()[0], 1] {
    return Err(Error::ShapeMismatch { lhs: x.shape().to_vec(), rhs: y.shape().to_vec() })
  }
  Ok(())
}


#[cfg(test)]
mod tests {
  use super::*;
  use rand::{SeedableRng, rngs::StdRng};

  #[test]
  fn defaults() {
    let options = TrainOptions::<f64>::default();
    assert_eq!(options.epochs, 100);
    assert!((options.learning_rate - 0.01).abs() < 1e-12);
  }

  #[test]
  fn init() {
    let params = Parameters::<f64>::init(3, &mut StdRng::seed_from_u64(1)).unwrap();
    assert_eq!(params.weights.shape(), &[3,1]);
    assert_eq!(params.bias.shape(), &[1,1]);
    assert!(params.weights.iter().all(|w| (-1.0..1.0).contains(&w) ));
  }

  #[test]
  fn update() {
    let mut params = Parameters {
      weights: NdArray::new(&[2,1], vec![0.0, 0.0]).unwrap(),
      bias: NdArray::new(&[1,1], vec![0.0]).unwrap(),
    };
    let x = NdArray::new(&[2,2], vec![1.0, 0.0, 0.0, 2.0]).unwrap();
    let residual = NdArray::new(&[2,1], vec![-1.0, -2.0]).unwrap();
    params.update(&x, &residual, 0.5).unwrap();
    assert_eq!(params.weights, NdArray::new(&[2,1], vec![0.25, 1.0]).unwrap());
    assert_eq!(params.bias.item(), Ok(0.75));
  }

  #[test]
  fn validation() {
    let x = NdArray::<f64>::zeros(&[4,2]).unwrap();
    assert!(check_data(&x, &NdArray::zeros(&[4,1]).unwrap()).is_ok());
    assert_eq!(check_data(&x, &NdArray::zeros(&[4]).unwrap()),
      Err(Error::RankError { expected: 2, actual: 1 }));
    assert_eq!(check_data(&x, &NdArray::zeros(&[3,1]).unwrap()),
      Err(Error::ShapeMismatch { lhs: vec![4,2], rhs: vec![3,1] }));
  }

  #[test]
  fn features() {
    let params = Parameters::<f64>::init(2, &mut StdRng::seed_from_u64(4)).unwrap();
    assert!(params.check_features(&NdArray::zeros(&[7,2]).unwrap()).is_ok());
    assert_eq!(params.check_features(&NdArray::zeros(&[7,3]).unwrap()),
      Err(Error::ShapeMismatch { lhs: vec![7,3], rhs: vec![2,1] }));
  }

  #[test]
  fn setters() {
    let mut params = Parameters::<f32>::init(2, &mut StdRng::seed_from_u64(3)).unwrap();
    assert!(params.set_weights(NdArray::zeros(&[3,1]).unwrap()).is_err());
    params.set_bias(NdArray::ones(&[1,1]).unwrap()).unwrap();
    assert_eq!(params.bias.item(), Ok(1.0));
  }
}
