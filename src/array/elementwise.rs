use crate::{
  internal::*,
  error::{ Error, Result },
  shape::Shape,
  array::NdArray,
  scalar::{ Numeric, Signed, Real },
};


impl<T: Numeric> NdArray<T> {
  pub fn zeros(shape: &[usize]) -> Result<Self> {
    Self::fill(shape, T::zero())
  }

  pub fn ones(shape: &[usize]) -> Result<Self> {
    Self::fill(shape, T::one())
  }

  /// Evenly spaced values in row-major order.

  pub fn arrange(shape: &[usize], start: T, step: T) -> Result<Self> {
    check_dims(shape)?;
    let mut value = start;
    let data = (0..shape.iter().product::<usize>())
      .map(|_| {
        let out = value;
        value += step;
        out
      })
      .collect();
    Ok(Self::from_shape(Shape::new(shape), data))
  }

  /// Identity matrix.

  pub fn eye(n: usize) -> Result<Self> {
    let mut out = Self::zeros(&[n, n])?;
    for i in 0..n {
      out.data[i * n + i] = T::one();
    }
    Ok(out)
  }

  pub fn add(&self, rhs: &Self) -> Result<Self> {
    self.zip_with(rhs, |(a, b)| a + b )
  }

  pub fn sub(&self, rhs: &Self) -> Result<Self> {
    self.zip_with(rhs, |(a, b)| a - b )
  }

  pub fn mul(&self, rhs: &Self) -> Result<Self> {
    self.zip_with(rhs, |(a, b)| a * b )
  }

  pub fn div(&self, rhs: &Self) -> Result<Self> {
    self.zip_with(rhs, |(a, b)| a / b )
  }

  pub fn add_assign(&mut self, rhs: &Self) -> Result<&mut Self> {
    self.zip_assign(rhs, |a, b| *a += b )
  }

  pub fn sub_assign(&mut self, rhs: &Self) -> Result<&mut Self> {
    self.zip_assign(rhs, |a, b| *a -= b )
  }

  pub fn mul_assign(&mut self, rhs: &Self) -> Result<&mut Self> {
    self.zip_assign(rhs, |a, b| *a *= b )
  }

  pub fn div_assign(&mut self, rhs: &Self) -> Result<&mut Self> {
    self.zip_assign(rhs, |a, b| *a /= b )
  }

  /// Negative elements become zero.

  pub fn relu(&self) -> Self {
    self.map(|a| if a > T::zero() { a } else { T::zero() } )
  }

  // Layout doesn't matter when every element gets the same treatment

  pub fn add_assign_scalar(&mut self, rhs: T) -> &mut Self {
    self.data.iter_mut().for_each(|a| *a += rhs );
    self
  }

  pub fn sub_assign_scalar(&mut self, rhs: T) -> &mut Self {
    self.data.iter_mut().for_each(|a| *a -= rhs );
    self
  }

  pub fn mul_assign_scalar(&mut self, rhs: T) -> &mut Self {
    self.data.iter_mut().for_each(|a| *a *= rhs );
    self
  }

  pub fn div_assign_scalar(&mut self, rhs: T) -> &mut Self {
    self.data.iter_mut().for_each(|a| *a /= rhs );
    self
  }

  /// Elementwise equality as zeros and ones, shaped like `self`.
  ///
  /// Only the number of elements has to match.

  pub fn equal(&self, rhs: &Self) -> Result<Self> {
    if self.size() != rhs.size() {
      return Err(Error::SizeMismatch { lhs: self.size(), rhs: rhs.size() })
    }
    let data = self.iter()
      .zip(rhs.iter())
      .map(|(a, b)| if a == b { T::one() } else { T::zero() })
      .collect();
    Ok(Self::from_shape(Shape::new(&self.shape.dims), data))
  }
}

impl<T: Signed> NdArray<T> {
  pub fn abs(&self) -> Self {
    self.map(|a| num_traits::Signed::abs(&a) )
  }
}

impl<T: Real> NdArray<T> {
  pub fn round(&self) -> Self {
    self.map(|a| a.round() )
  }

  pub fn exp(&self) -> Self {
    self.map(|a| a.exp() )
  }

  pub fn pow(&self, exponent: T) -> Self {
    self.map(|a| a.powf(exponent) )
  }

  pub fn sqr(&self) -> Self {
    self.map(|a| a * a )
  }

  /// Elementwise reciprocal. Zeros turn into infinities.

  pub fn inv(&self) -> Self {
    self.map(|a| a.recip() )
  }

  pub fn sigmoid(&self) -> Self {
    self.map(|a| T::one() / (T::one() + (-a).exp()) )
  }

  /// Central difference approximation of the elementwise derivative
  /// of `func` at `self`, using step `h`.

  pub fn derivative<F>(&self, func: F, h: T) -> Result<Self>
  where F: Fn(&Self) -> Self {
    let two: T = cast(2);
    let ahead = func(&(self + h));
    let behind = func(&(self - h));
    Ok(ahead.sub(&behind)? / (two * h))
  }
}
