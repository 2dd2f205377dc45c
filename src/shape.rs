use serde::{Serialize, Deserialize};

use crate::{
  internal::*,
  error::{ Error, Result },
};


/// The shape of an [NdArray](crate::NdArray).
///
/// Besides the extent of every axis, a shape stores the strides
/// used to map a multi-index onto a position in the array's buffer.
/// Freshly created shapes are row-major, but swapping axes permutes
/// strides along with dims, leaving the layout non-contiguous.

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawShape")]
pub struct Shape {
  pub dims: Vec<usize>,
  pub(crate) strides: Vec<usize>,
  pub(crate) offset: usize,
}

// Serialized form, checked before it becomes a Shape

#[derive(Deserialize)]
struct RawShape {
  dims: Vec<usize>,
  strides: Vec<usize>,
  offset: usize,
}

impl TryFrom<RawShape> for Shape {
  type Error = Error;

  fn try_from(raw: RawShape) -> Result<Self> {
    check_dims(&raw.dims)?;
    if raw.strides.len() != raw.dims.len() {
      return Err(Error::InvalidLayout {
        reason: format!("{} strides for {} dims", raw.strides.len(), raw.dims.len())
      })
    }
    let shape = Self { dims: raw.dims, strides: raw.strides, offset: raw.offset };
    if shape.extent().is_none() {
      return Err(Error::InvalidLayout { reason: "buffer positions overflow".to_string() })
    }
    Ok(shape)
  }
}

impl Shape {
  pub fn new(dims: &[usize]) -> Self {
    let strides = Self::make_strides(dims);
    Self {
      dims: dims.to_vec(),
      strides,
      offset: 0,
    }
  }

  fn make_strides(dims: &[usize]) -> Vec<usize> {
    if dims.len() == 0 { return vec![] }
    let mut strides = vec![0; dims.len()];
    strides[dims.len() - 1] = 1;
    for i in (1..dims.len()).rev() {
      strides[i - 1] = dims[i] * strides[i];
    }
    strides
  }

  pub fn size(&self) -> usize {
    self.dims.iter().product()
  }

  pub fn rank(&self) -> usize {
    self.dims.len()
  }

  pub fn strides(&self) -> &[usize] {
    &self.strides
  }

  pub(crate) fn index(&self, indices: &[usize]) -> usize {
    debug_assert!(indices.len() <= self.rank());
    // Missing trailing dimensions count as zero
    indices.iter()
      .zip(&self.strides)
      .map(|(&i, &s)| i * s )
      .sum::<usize>() + self.offset
  }

  /// Buffer position of a complete multi-index, with bounds checks.

  pub fn checked_index(&self, indices: &[usize]) -> Result<usize> {
    if indices.len() != self.rank() {
      return Err(Error::RankError { expected: self.rank(), actual: indices.len() })
    }
    if indices.iter().zip(&self.dims).any(|(&i, &n)| i >= n ) {
      return Err(Error::IndexOutOfRange { index: indices.to_vec(), shape: self.dims.clone() })
    }
    Ok(self.index(indices))
  }

  /// One past the highest buffer position this layout can reach,
  /// or `None` if that position does not fit into a usize.

  pub(crate) fn extent(&self) -> Option<usize> {
    self.dims.iter()
      .zip(&self.strides)
      .try_fold(self.offset, |end, (&n, &s)| {
        end.checked_add(n.checked_sub(1)?.checked_mul(s)?)
      })?
      .checked_add(1)
  }

  pub fn contiguous(&self) -> bool {
    self.offset == 0 && self.strides == Self::make_strides(&self.dims)
  }

  /// Buffer positions in logical (row-major) order.

  pub fn iter(&self) -> Box<dyn Iterator<Item=usize> + '_> {
    if self.contiguous() {
      Box::new(self.offset..self.offset + self.size())
    } else {
      Box::new(ShapeIterator::new(self))
    }
  }

  /// Sub-shape addressed by fixing the leading indices.

  pub(crate) fn take(&self, indices: &[usize]) -> Self {
    let dims = self.dims[indices.len()..].to_vec();
    let strides = self.strides[indices.len()..].to_vec();
    let offset = self.index(indices);
    Self { dims, strides, offset }
  }

  pub(crate) fn unsqueeze(&self, axis: usize) -> Result<Self> {
    if axis > self.rank() {
      return Err(Error::AxisOutOfRange { axis, rank: self.rank() })
    }
    let mut shape = self.clone();
    shape.strides.insert(axis, if axis < shape.dims.len() {
      shape.strides[axis] * shape.dims[axis]
    } else { 1 });
    shape.dims.insert(axis, 1);
    Ok(shape)
  }

  pub(crate) fn transpose(&self, axis1: usize, axis2: usize) -> Result<Self> {
    check_axis(axis1, self.rank())?;
    check_axis(axis2, self.rank())?;
    let mut shape = self.clone();
    shape.dims.swap(axis1, axis2);
    shape.strides.swap(axis1, axis2);
    Ok(shape)
  }

  /// Row-major dims with one axis removed. Never drops below rank 1.

  pub(crate) fn without(&self, axis: usize) -> Result<Vec<usize>> {
    check_axis(axis, self.rank())?;
    let mut dims = self.dims.clone();
    dims.remove(axis);
    if dims.is_empty() { dims.push(1) }
    Ok(dims)
  }
}

impl std::ops::Index<usize> for Shape {
  type Output = usize;

  fn index(&self, i: usize) -> &usize {
    &self.dims[i]
  }
}

impl std::fmt::Display for Shape {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    write!(f, "Shape{:?}", self.dims)
  }
}


/// Iterate through a [Shape]'s buffer positions, honoring strides.

pub struct ShapeIterator<'a> {
  shape: &'a Shape,
  counter: Vec<usize>,
  idx: usize,
  finished: bool,
}

impl<'a> ShapeIterator<'a> {
  fn new(shape: &'a Shape) -> Self {
    Self {
      counter: vec![0; shape.rank()],
      idx: shape.offset,
      finished: shape.size() == 0,
      shape,
    }
  }
}

impl<'a> Iterator for ShapeIterator<'a> {
  type Item = usize;

  fn next(&mut self) -> Option<Self::Item> {
    if self.finished { return None }
    let out = self.idx;
    let len = self.counter.len();
    if len == 0 {
      self.finished = true;
      return Some(out)
    }
    // Walk backward through dimensions
    for cd in (0..len).rev() {
      // Increment counter on full turn of right hand dimension
      if cd == len - 1 || self.counter[cd + 1] == 0 {
        let count = &mut self.counter[cd];
        // Full turn?
        if *count == self.shape.dims[cd] - 1 {
          if cd == 0 { self.finished = true; break }
          *count = 0;
          self.idx -= (self.shape.dims[cd] - 1) * self.shape.strides[cd];
        } else {
          *count += 1;
          self.idx += self.shape.strides[cd];
        }
      } else {
        break
      }
    }
    Some(out)
  }
}
