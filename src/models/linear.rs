use log::{ debug, info };
use rand::Rng;

use crate::{
  internal::*,
  error::Result,
  array::NdArray,
  scalar::Real,
};

use super::{ Parameters, TrainOptions, TrainProgress, check_data };


/// Least squares linear regression.
///
/// ```
/// use microarray::{ NdArray, LinearRegression, TrainOptions };
///
/// let x: NdArray<f64> = NdArray::new(&[4, 1], vec![0.0, 1.0, 2.0, 3.0]).unwrap();
/// let y = NdArray::new(&[4, 1], vec![1.0, 3.0, 5.0, 7.0]).unwrap();
/// let options = TrainOptions { learning_rate: 0.1, epochs: 2000 };
///
/// let mut model = LinearRegression::new(x, y, options).unwrap();
/// model.fit().unwrap();
/// assert!((model.weights().item().unwrap() - 2.0).abs() < 1e-3);
/// ```

#[derive(Debug, Clone)]
pub struct LinearRegression<T: Real> {
  x: NdArray<T>,
  y: NdArray<T>,
  params: Parameters<T>,
  options: TrainOptions<T>,
  losses: Vec<T>,
}

impl<T: Real> LinearRegression<T> {
  pub fn new(x: NdArray<T>, y: NdArray<T>, options: TrainOptions<T>) -> Result<Self> {
    Self::with_rng(x, y, options, &mut rand::thread_rng())
  }

  /// Initialize weights and bias from the given generator.

  pub fn with_rng<R: Rng>(x: NdArray<T>, y: NdArray<T>, options: TrainOptions<T>, rng: &mut R) -> Result<Self> {
    check_data(&x, &y)?;
    let params = Parameters::init(x.shape()[1], rng)?;
    Ok(Self { x, y, params, options, losses: vec![] })
  }

  pub fn predict(&self, x: &NdArray<T>) -> Result<NdArray<T>> {
    self.params.affine(x)
  }

  /// Prediction minus target on the training set.

  pub fn residual(&self) -> Result<NdArray<T>> {
    self.predict(&self.x)?.sub(&self.y)
  }

  /// Mean squared error on the training set.

  pub fn mse(&self) -> Result<T> {
    Ok(squared_error(&self.residual()?))
  }

  pub fn fit(&mut self) -> Result<()> {
    self.fit_with_progress(&mut |_| {})
  }

  pub fn fit_with_progress(&mut self, update_progress: &mut dyn FnMut(TrainProgress<T>)) -> Result<()> {
    for epoch in 0..self.options.epochs {
      let residual = self.residual()?;
      let loss = squared_error(&residual);
      self.params.update(&self.x, &residual, self.options.learning_rate)?;
      debug!("Epoch {} loss {:?}", epoch, loss);
      self.losses.push(loss);
      update_progress(TrainProgress { epoch, loss });
    }
    info!("Trained linear regression for {} epochs", self.options.epochs);
    Ok(())
  }

  /// Swap in a new training set. Parameters and loss history
  /// carry over, so the next fit continues from the current state.

  pub fn set_data(&mut self, x: NdArray<T>, y: NdArray<T>) -> Result<()> {
    check_data(&x, &y)?;
    self.params.check_features(&x)?;
    self.x = x;
    self.y = y;
    Ok(())
  }

  pub fn fit_on(&mut self, x: NdArray<T>, y: NdArray<T>) -> Result<()> {
    self.set_data(x, y)?;
    self.fit()
  }

  pub fn weights(&self) -> &NdArray<T> {
    &self.params.weights
  }

  pub fn bias(&self) -> &NdArray<T> {
    &self.params.bias
  }

  pub fn set_weights(&mut self, weights: NdArray<T>) -> Result<()> {
    self.params.set_weights(weights)
  }

  pub fn set_bias(&mut self, bias: NdArray<T>) -> Result<()> {
    self.params.set_bias(bias)
  }

  pub fn options(&self) -> &TrainOptions<T> {
    &self.options
  }

  pub fn set_options(&mut self, options: TrainOptions<T>) {
    self.options = options;
  }

  /// Loss at the start of every epoch trained so far.

  pub fn losses(&self) -> &[T] {
    &self.losses
  }
}

fn squared_error<T: Real>(residual: &NdArray<T>) -> T {
  residual.sqr().sum() / cast(residual.shape()[0])
}


#[cfg(test)]
mod tests {
  use super::*;
  use rand::{SeedableRng, rngs::StdRng};
  use crate::error::Error;

  fn doubling() -> (NdArray<f64>, NdArray<f64>) {
    let x = NdArray::arrange(&[10,1], 0.0, 1.0).unwrap();
    let y = NdArray::arrange(&[10,1], 0.0, 2.0).unwrap();
    (x, y)
  }

  #[test]
  fn converges() {
    let (x, y) = doubling();
    let options = TrainOptions { learning_rate: 0.05, epochs: 2000 };
    let mut model = LinearRegression::with_rng(x, y, options, &mut StdRng::seed_from_u64(42)).unwrap();
    let initial = model.mse().unwrap();
    model.fit().unwrap();

    assert_eq!(model.losses().len(), 2000);
    assert_eq!(model.losses()[0], initial);
    assert!((model.weights().item().unwrap() - 2.0).abs() < 1e-3);
    assert!(model.bias().item().unwrap().abs() < 1e-3);
    assert!(model.mse().unwrap() < 1e-6);
  }

  #[test]
  fn loss_never_increases() {
    let (x, y) = doubling();
    let options = TrainOptions { learning_rate: 0.01, epochs: 500 };
    let mut model = LinearRegression::with_rng(x, y, options, &mut StdRng::seed_from_u64(7)).unwrap();
    let mut reported = vec![];
    model.fit_with_progress(&mut |progress| reported.push(progress) ).unwrap();

    assert_eq!(reported.len(), 500);
    assert_eq!(reported[499].epoch, 499);
    for pair in model.losses().windows(2) {
      assert!(pair[1] <= pair[0] + 1e-12);
    }
    assert_eq!(reported.iter().map(|p| p.loss ).collect::<Vec<_>>(), model.losses());
  }

  #[test]
  fn predict() {
    let (x, y) = doubling();
    let mut model = LinearRegression::new(x, y, TrainOptions::default()).unwrap();
    model.set_weights(NdArray::new(&[1,1], vec![3.0]).unwrap()).unwrap();
    model.set_bias(NdArray::new(&[1,1], vec![1.0]).unwrap()).unwrap();

    let p = model.predict(&NdArray::new(&[2,1], vec![1.0, 2.0]).unwrap()).unwrap();
    assert_eq!(p, NdArray::new(&[2,1], vec![4.0, 7.0]).unwrap());

    // residual is (x + 1), so the error is mean((x + 1)²) over 1..=10
    assert!((model.mse().unwrap() - 38.5).abs() < 1e-9);

    let wide = NdArray::zeros(&[2,2]).unwrap();
    assert!(matches!(model.predict(&wide), Err(Error::ShapeMismatch { .. })));
  }

  #[test]
  fn zero_epochs() {
    let (x, y) = doubling();
    let options = TrainOptions { learning_rate: 0.01, epochs: 0 };
    let mut model = LinearRegression::with_rng(x, y, options, &mut StdRng::seed_from_u64(1)).unwrap();
    let before = model.weights().clone();
    model.fit().unwrap();
    assert_eq!(model.weights(), &before);
    assert!(model.losses().is_empty());
  }

  #[test]
  fn retarget() {
    let (x, y) = doubling();
    let options = TrainOptions { learning_rate: 0.05, epochs: 2000 };
    let mut model = LinearRegression::with_rng(x.clone(), y, options, &mut StdRng::seed_from_u64(42)).unwrap();
    model.fit().unwrap();

    let shifted = NdArray::arrange(&[10,1], 1.0, 3.0).unwrap();
    model.fit_on(x, shifted).unwrap();
    assert_eq!(model.losses().len(), 4000);
    assert!((model.weights().item().unwrap() - 3.0).abs() < 1e-3);
    assert!((model.bias().item().unwrap() - 1.0).abs() < 1e-3);

    let wide = NdArray::zeros(&[10,2]).unwrap();
    let targets = NdArray::zeros(&[10,1]).unwrap();
    assert!(matches!(model.set_data(wide, targets.clone()), Err(Error::ShapeMismatch { .. })));
    assert!(matches!(model.fit_on(NdArray::zeros(&[10]).unwrap(), targets), Err(Error::RankError { .. })));
    assert!((model.weights().item().unwrap() - 3.0).abs() < 1e-3);
  }

  #[test]
  fn invalid_targets() {
    let (x, _) = doubling();
    let y = NdArray::zeros(&[9,1]).unwrap();
    assert!(matches!(LinearRegression::new(x, y, TrainOptions::default()), Err(Error::ShapeMismatch { .. })));
  }
}
