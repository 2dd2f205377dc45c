use log::{ debug, info };
use rand::Rng;

use crate::{
  internal::*,
  error::Result,
  array::NdArray,
  scalar::Real,
};

use super::{ Parameters, TrainOptions, TrainProgress, check_data };


/// Binary classifier on a sigmoid of a linear model.
/// Targets are expected to be zeros and ones.

#[derive(Debug, Clone)]
pub struct LogisticRegression<T: Real> {
  x: NdArray<T>,
  y: NdArray<T>,
  params: Parameters<T>,
  options: TrainOptions<T>,
  losses: Vec<T>,
}

impl<T: Real> LogisticRegression<T> {
  pub fn new(x: NdArray<T>, y: NdArray<T>, options: TrainOptions<T>) -> Result<Self> {
    Self::with_rng(x, y, options, &mut rand::thread_rng())
  }

  pub fn with_rng<R: Rng>(x: NdArray<T>, y: NdArray<T>, options: TrainOptions<T>, rng: &mut R) -> Result<Self> {
    check_data(&x, &y)?;
    let params = Parameters::init(x.shape()[1], rng)?;
    Ok(Self { x, y, params, options, losses: vec![] })
  }

  /// Probability of the positive class for every row of `x`.

  pub fn predict(&self, x: &NdArray<T>) -> Result<NdArray<T>> {
    Ok(self.params.affine(x)?.sigmoid())
  }

  /// Target minus prediction on the training set.

  pub fn residual(&self) -> Result<NdArray<T>> {
    self.y.sub(&self.predict(&self.x)?)
  }

  /// Fraction of rows whose rounded prediction equals the target.

  pub fn accuracy(&self, x: &NdArray<T>, y: &NdArray<T>) -> Result<T> {
    let hits = self.predict(x)?.round().equal(y)?.sum();
    Ok(hits / cast(x.shape()[0]))
  }

  /// Mean binary cross entropy on the training set.

  pub fn log_loss(&self) -> Result<T> {
    cross_entropy(&self.predict(&self.x)?, &self.y)
  }

  pub fn fit(&mut self) -> Result<()> {
    self.fit_with_progress(&mut |_| {})
  }

  pub fn fit_with_progress(&mut self, update_progress: &mut dyn FnMut(TrainProgress<T>)) -> Result<()> {
    for epoch in 0..self.options.epochs {
      let prediction = self.predict(&self.x)?;
      let loss = cross_entropy(&prediction, &self.y)?;
      let residual = self.y.sub(&prediction)?;
      // Residual points uphill, so step against the negated rate
      self.params.update(&self.x, &residual, -self.options.learning_rate)?;
      debug!("Epoch {} loss {:?}", epoch, loss);
      self.losses.push(loss);
      update_progress(TrainProgress { epoch, loss });
    }
    info!("Trained logistic regression for {} epochs", self.options.epochs);
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

  pub fn losses(&self) -> &[T] {
    &self.losses
  }
}

fn cross_entropy<T: Real>(prediction: &NdArray<T>, y: &NdArray<T>) -> Result<T> {
  let eps = T::epsilon();
  let terms = prediction.zip_with(y, |(p, t)| {
    let p = p.max(eps).min(T::one() - eps);
    -(t * p.ln() + (T::one() - t) * (T::one() - p).ln())
  })?;
  Ok(terms.mean())
}


#[cfg(test)]
mod tests {
  use super::*;
  use rand::{SeedableRng, rngs::StdRng};
  use crate::error::Error;

  fn separable() -> (NdArray<f64>, NdArray<f64>) {
    let x = NdArray::new(&[6,1], vec![-3.0, -2.0, -1.0, 1.0, 2.0, 3.0]).unwrap();
    let y = NdArray::new(&[6,1], vec![0.0, 0.0, 0.0, 1.0, 1.0, 1.0]).unwrap();
    (x, y)
  }

  #[test]
  fn classifies() {
    let (x, y) = separable();
    let options = TrainOptions { learning_rate: 0.1, epochs: 1000 };
    let mut model = LogisticRegression::with_rng(x.clone(), y.clone(), options, &mut StdRng::seed_from_u64(3)).unwrap();
    let initial = model.log_loss().unwrap();
    model.fit().unwrap();

    assert_eq!(model.accuracy(&x, &y), Ok(1.0));
    assert!(model.weights().item().unwrap() > 1.0);
    assert!(model.log_loss().unwrap() < initial);
    assert!(model.losses().last().unwrap() < &0.1);
  }

  #[test]
  fn residual_sign() {
    let (x, y) = separable();
    let mut model = LogisticRegression::new(x, y, TrainOptions::default()).unwrap();
    model.set_weights(NdArray::zeros(&[1,1]).unwrap()).unwrap();
    model.set_bias(NdArray::zeros(&[1,1]).unwrap()).unwrap();

    let r = model.residual().unwrap();
    assert_eq!(r, NdArray::new(&[6,1], vec![-0.5, -0.5, -0.5, 0.5, 0.5, 0.5]).unwrap());
    assert!((model.log_loss().unwrap() - 2f64.ln()).abs() < 1e-12);
  }

  #[test]
  fn accuracy_counts_matches() {
    let (x, y) = separable();
    let mut model = LogisticRegression::new(x.clone(), y.clone(), TrainOptions::default()).unwrap();
    model.set_weights(NdArray::new(&[1,1], vec![1.0]).unwrap()).unwrap();
    // Shifts the boundary past x = 1.5, so one positive row flips
    model.set_bias(NdArray::new(&[1,1], vec![-1.5]).unwrap()).unwrap();
    assert!((model.accuracy(&x, &y).unwrap() - 5.0 / 6.0).abs() < 1e-12);

    let short = NdArray::zeros(&[5,1]).unwrap();
    assert!(matches!(model.accuracy(&x, &short), Err(Error::SizeMismatch { .. })));
  }

  #[test]
  fn retarget() {
    let (x, y) = separable();
    let options = TrainOptions { learning_rate: 0.1, epochs: 1000 };
    let mut model = LogisticRegression::with_rng(x.clone(), y.clone(), options, &mut StdRng::seed_from_u64(3)).unwrap();
    model.fit().unwrap();

    let flipped = y.map(|t| 1.0 - t );
    model.fit_on(x.clone(), flipped.clone()).unwrap();
    assert!(model.weights().item().unwrap() < -1.0);
    assert_eq!(model.accuracy(&x, &flipped), Ok(1.0));

    let short = NdArray::zeros(&[5,1]).unwrap();
    assert!(matches!(model.set_data(x, short), Err(Error::ShapeMismatch { .. })));
  }

  #[test]
  fn progress() {
    let (x, y) = separable();
    let options = TrainOptions { learning_rate: 0.1, epochs: 25 };
    let mut model = LogisticRegression::with_rng(x, y, options, &mut StdRng::seed_from_u64(5)).unwrap();
    let mut epochs = vec![];
    model.fit_with_progress(&mut |progress| epochs.push(progress.epoch) ).unwrap();
    assert_eq!(epochs, (0..25).collect::<Vec<_>>());
  }
}
