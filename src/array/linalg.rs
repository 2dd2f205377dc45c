use crate::{
  error::{ Error, Result },
  shape::Shape,
  array::NdArray,
  scalar::Numeric,
};


impl<T: Numeric> NdArray<T> {
  /// Matrix product of two rank-2 arrays.
  ///
  /// Accumulates in `T`, reading both operands through their strides.

  pub fn matmul(&self, rhs: &Self) -> Result<Self> {
    for operand in [self, rhs] {
      if operand.rank() != 2 {
        return Err(Error::RankError { expected: 2, actual: operand.rank() })
      }
    }
    if self.shape[1] != rhs.shape[0] {
      return Err(Error::ShapeMismatch { lhs: self.shape.dims.clone(), rhs: rhs.shape.dims.clone() })
    }

    let rows_l = self.shape[0];
    let cols_l = self.shape[1];
    let cols_r = rhs.shape[1];

    let mut data = vec![T::zero(); rows_l * cols_r];
    for i in 0..rows_l {
      for j in 0..cols_r {
        for k in 0..cols_l {
          data[i * cols_r + j] +=
            self.data[self.shape.index(&[i, k])] *
            rhs.data[rhs.shape.index(&[k, j])];
        }
      }
    }

    Ok(Self::from_shape(Shape::new(&[rows_l, cols_r]), data))
  }

  /// Outer product.
  ///
  /// The result has the dims of `self` followed by those of `rhs`,
  /// with `out[i.., j..] = self[i..] * rhs[j..]`.

  pub fn tensor_product(&self, rhs: &Self) -> Self {
    let dims = [self.shape.dims.clone(), rhs.shape.dims.clone()].concat();
    let values: Vec<T> = rhs.iter().collect();
    let data = self.iter()
      .flat_map(|a| values.iter().map(move |&b| a * b ) )
      .collect();
    Self::from_shape(Shape::new(&dims), data)
  }

  /// Inner product over all elements in logical order.

  pub fn dot(&self, rhs: &Self) -> Result<T> {
    if self.size() != rhs.size() {
      return Err(Error::SizeMismatch { lhs: self.size(), rhs: rhs.size() })
    }
    Ok(self.iter().zip(rhs.iter()).map(|(a, b)| a * b ).sum())
  }
}
