use crate::{
  internal::*,
  error::Result,
  shape::Shape,
  array::NdArray,
  scalar::{ Numeric, Real },
};


impl<T: Numeric> NdArray<T> {
  pub fn sum(&self) -> T {
    self.iter().sum()
  }

  /// Sum along `axis`, removing it from the result.
  ///
  /// Reducing a rank-1 array yields shape `[1]`.

  pub fn sum_axis(&self, axis: usize) -> Result<Self> {
    let dims = self.shape.without(axis)?;
    let outer: usize = self.shape.dims[..axis].iter().product();
    let inner: usize = self.shape.dims[axis + 1..].iter().product();
    let n = self.shape[axis];

    let values: Vec<T> = self.iter().collect();
    let mut data = vec![T::zero(); outer * inner];
    for o in 0..outer {
      for k in 0..n {
        let row = (o * n + k) * inner;
        for i in 0..inner {
          data[o * inner + i] += values[row + i];
        }
      }
    }

    Ok(Self::from_shape(Shape::new(&dims), data))
  }
}

impl<T: Real> NdArray<T> {
  pub fn mean(&self) -> T {
    self.sum() / cast(self.size())
  }
}
