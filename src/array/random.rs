use rand::Rng;

use crate::{
  error::{ Error, Result },
  array::NdArray,
  scalar::Real,
};


impl<T: Real> NdArray<T> {
  /// New array with values drawn uniformly from [0, 1).

  pub fn rand(shape: &[usize]) -> Result<Self> {
    let mut out = Self::zeros(shape)?;
    out.random();
    Ok(out)
  }

  pub fn random(&mut self) {
    self.random_with(&mut rand::thread_rng());
  }

  /// Fill from [min, max). Fails with [Error::EmptyRange]
  /// unless `min < max`.

  pub fn random_range(&mut self, min: T, max: T) -> Result<()> {
    self.random_range_with(min, max, &mut rand::thread_rng())
  }

  /// Fill from [0, 1) using the given generator.

  pub fn random_with<R: Rng>(&mut self, rng: &mut R) {
    self.sample(T::zero(), T::one(), rng);
  }

  /// Fill from [min, max) using the given generator.

  pub fn random_range_with<R: Rng>(&mut self, min: T, max: T, rng: &mut R) -> Result<()> {
    // Also rejects NaN bounds
    if !(min < max) { return Err(Error::EmptyRange) }
    self.sample(min, max, rng);
    Ok(())
  }

  fn sample<R: Rng>(&mut self, min: T, max: T, rng: &mut R) {
    for a in self.data.iter_mut() {
      *a = rng.gen_range(min, max);
    }
  }
}


#[cfg(test)]
mod tests {
  use super::*;
  use rand::{SeedableRng, rngs::StdRng};

  #[test]
  fn bounds() {
    let mut x = NdArray::<f64>::zeros(&[4,8]).unwrap();
    x.random_range(-2.0, -1.0).unwrap();
    assert!(x.iter().all(|a| (-2.0..-1.0).contains(&a) ));

    let r = NdArray::<f32>::rand(&[16]).unwrap();
    assert!(r.iter().all(|a| (0.0..1.0).contains(&a) ));
  }

  #[test]
  fn empty_range() {
    let mut x = NdArray::<f64>::ones(&[2,2]).unwrap();
    assert_eq!(x.random_range(1.0, 1.0), Err(Error::EmptyRange));
    assert_eq!(x.random_range_with(2.0, 1.0, &mut StdRng::seed_from_u64(1)), Err(Error::EmptyRange));
    assert_eq!(x.random_range(f64::NAN, 1.0), Err(Error::EmptyRange));
    assert_eq!(x, NdArray::ones(&[2,2]).unwrap());
  }

  #[test]
  fn seeded() {
    let mut x = NdArray::<f64>::zeros(&[3,3]).unwrap();
    let mut y = x.clone();
    x.random_with(&mut StdRng::seed_from_u64(7));
    y.random_with(&mut StdRng::seed_from_u64(7));
    assert_eq!(x, y);

    y.random_with(&mut StdRng::seed_from_u64(8));
    assert_ne!(x, y);
  }
}
