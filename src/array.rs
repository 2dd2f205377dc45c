use std::fmt::Debug;

use itertools::Itertools;
use log::trace;
use serde::{Serialize, Deserialize};

mod elementwise;
mod linalg;
mod random;
mod reduce;

use crate::{
  internal::*,
  error::{ Error, Result },
  shape::Shape,
  scalar::{ Inner, Numeric },
};


/// Multidimensional array.
///
/// Arrays may contain any type that satisfies [Inner], but
/// arithmetic is only available for [Numeric] inner types,
/// and transcendental functions for [Real](crate::scalar::Real) ones.
///
/// Every array exclusively owns its buffer. Operations that return
/// a differently shaped array, like [slice](NdArray::slice) or
/// [transpose_axes](NdArray::transpose_axes), always copy.

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawArray<T>", bound(deserialize = "T: Deserialize<'de>"))]
pub struct NdArray<T: Inner> {
  shape: Shape,
  data: Vec<T>,
}

// Serialized form, checked before it becomes an NdArray

#[derive(Deserialize)]
struct RawArray<T> {
  shape: Shape,
  data: Vec<T>,
}

impl<T: Inner> TryFrom<RawArray<T>> for NdArray<T> {
  type Error = Error;

  fn try_from(raw: RawArray<T>) -> Result<Self> {
    let RawArray { shape, data } = raw;
    if shape.size() != data.len() {
      return Err(Error::ShapeMismatch { lhs: shape.dims, rhs: vec![data.len()] })
    }
    // Every position the layout reaches has to lie within the buffer
    match shape.extent() {
      Some(end) if end <= data.len() => Ok(Self::from_shape(shape, data)),
      _ => Err(Error::InvalidLayout {
        reason: format!("strides {:?} reach past {} elements", shape.strides, data.len())
      }),
    }
  }
}

/// How [resize](NdArray::resize) treats the buffer.

#[derive(Debug, Clone, Copy)]
pub struct ResizeOptions<T> {
  /// Value for newly created slots, zero if `None`.
  pub fill: Option<T>,
  /// Keep existing elements in logical order. Otherwise every
  /// slot receives the fill value.
  pub preserve: bool,
}

impl<T> Default for ResizeOptions<T> {
  fn default() -> Self {
    Self { fill: None, preserve: true }
  }
}

impl<T: Inner> PartialEq for NdArray<T> {
  fn eq(&self, rhs: &Self) -> bool {
    self.shape.dims == rhs.shape.dims &&
      self.iter().zip(rhs.iter()).all(|(a, b)| a == b )
  }
}

impl<T: Inner> NdArray<T> {
  pub(crate) fn from_shape(shape: Shape, data: Vec<T>) -> Self {
    debug_assert_eq!(shape.size(), data.len());
    Self { shape, data }
  }

  pub fn new(shape: &[usize], data: Vec<T>) -> Result<Self> {
    check_dims(shape)?;
    let shape = Shape::new(shape);
    if shape.size() != data.len() {
      return Err(Error::ShapeMismatch { lhs: shape.dims, rhs: vec![data.len()] })
    }
    Ok(Self::from_shape(shape, data))
  }

  pub fn from_vec(vec: Vec<T>) -> Result<Self> {
    Self::new(&[vec.len()], vec)
  }

  pub fn fill(shape: &[usize], filler: T) -> Result<Self> {
    check_dims(shape)?;
    Ok(Self::from_shape(Shape::new(shape), vec![filler; shape.iter().product()]))
  }

  pub fn shape(&self) -> &[usize] {
    &self.shape.dims
  }

  pub fn strides(&self) -> &[usize] {
    self.shape.strides()
  }

  pub fn layout(&self) -> &Shape {
    &self.shape
  }

  pub fn size(&self) -> usize {
    self.shape.size()
  }

  pub fn rank(&self) -> usize {
    self.shape.rank()
  }

  /// Extent of a single axis.

  pub fn dim(&self, axis: usize) -> Result<usize> {
    check_axis(axis, self.rank())?;
    Ok(self.shape[axis])
  }

  pub fn is_contiguous(&self) -> bool {
    self.shape.contiguous()
  }

  /// The underlying buffer in storage order.

  pub fn raw(&self) -> &[T] {
    &self.data
  }

  /// Consume the array, returning its elements in logical order.

  pub fn into_raw(self) -> Vec<T> {
    if self.is_contiguous() {
      self.data
    } else {
      self.iter().collect()
    }
  }

  /// Iterate over all elements in logical (row-major) order,
  /// independent of the storage layout.

  pub fn iter(&self) -> impl Iterator<Item=T> + '_ {
    self.shape.iter().map(move |i| self.data[i] )
  }

  pub fn get(&self, indices: &[usize]) -> Result<T> {
    let i = self.shape.checked_index(indices)?;
    Ok(self.data[i])
  }

  pub fn set(&mut self, indices: &[usize], value: T) -> Result<()> {
    let i = self.shape.checked_index(indices)?;
    self.data[i] = value;
    Ok(())
  }

  /// The single element of a one-element array.

  pub fn item(&self) -> Result<T> {
    if self.size() != 1 {
      return Err(Error::SizeMismatch { lhs: self.size(), rhs: 1 })
    }
    Ok(self.data[0])
  }

  /// Copy of the sub-array at the given leading index.
  /// The result has rank one less than `self`.

  pub fn slice(&self, index: usize) -> Result<Self> {
    if self.rank() < 2 {
      return Err(Error::RankError { expected: 2, actual: self.rank() })
    }
    if index >= self.shape[0] {
      return Err(Error::IndexOutOfRange { index: vec![index], shape: self.shape.dims.clone() })
    }
    let sub = self.shape.take(&[index]);
    let data = sub.iter().map(|i| self.data[i] ).collect();
    Ok(Self::from_shape(Shape::new(&sub.dims), data))
  }

  pub fn contiguous(&self) -> Self {
    if self.is_contiguous() {
      self.clone()
    } else {
      self.map(|a| a )
    }
  }

  pub fn make_contiguous(&mut self) {
    if !self.is_contiguous() {
      self.data = self.iter().collect();
      self.shape = Shape::new(&self.shape.dims);
    }
  }

  /// Change dims without touching the element order.
  /// Total size and rank must be kept.

  pub fn reshape(&mut self, shape: &[usize]) -> Result<()> {
    let size: usize = shape.iter().product();
    if shape.len() != self.rank() || size != self.size() {
      return Err(Error::ShapeMismatch { lhs: self.shape.dims.clone(), rhs: shape.to_vec() })
    }
    self.make_contiguous();
    self.shape = Shape::new(shape);
    Ok(())
  }

  /// Rank-1 copy of all elements in logical order.

  pub fn flatten(&self) -> Self {
    Self::from_shape(Shape::new(&[self.size()]), self.iter().collect())
  }

  /// Mathematical transpose of a matrix.

  pub fn transpose(&self) -> Result<Self> {
    if self.rank() != 2 {
      return Err(Error::RankError { expected: 2, actual: self.rank() })
    }
    Ok(self.transpose_axes(0, 1)?.contiguous())
  }

  /// Swap two axes by permuting dims and strides.
  ///
  /// The result owns a copy of the buffer in its original order,
  /// so it is generally not contiguous. Writing to it never
  /// affects `self`.

  pub fn transpose_axes(&self, axis1: usize, axis2: usize) -> Result<Self> {
    let shape = self.shape.transpose(axis1, axis2)?;
    Ok(Self::from_shape(shape, self.data.clone()))
  }

  /// Insert an axis of length one at position `axis`.

  pub fn expand_dims(&self, axis: usize) -> Result<Self> {
    let shape = self.shape.unsqueeze(axis)?;
    Ok(Self::from_shape(shape, self.data.clone()))
  }

  pub fn fill_with(&mut self, filler: T) {
    for a in self.data.iter_mut() {
      *a = filler;
    }
  }

  /// Overwrite all elements with those of `other`, taken in logical order.

  pub fn copy_from(&mut self, other: &Self) -> Result<()> {
    if self.size() != other.size() {
      return Err(Error::SizeMismatch { lhs: self.size(), rhs: other.size() })
    }
    for (i, a) in self.shape.iter().zip(other.iter()) {
      self.data[i] = a;
    }
    Ok(())
  }

  pub fn map<O,F>(&self, cb: F) -> NdArray<O>
  where
    O: Inner,
    F: FnMut(T) -> O,
  {
    let data = self.iter().map(cb).collect();
    NdArray::from_shape(Shape::new(&self.shape.dims), data)
  }

  pub fn zip_with<O,F>(&self, rhs: &Self, cb: F) -> Result<NdArray<O>>
  where
    O: Inner,
    F: FnMut((T, T)) -> O,
  {
    if self.shape.dims != rhs.shape.dims {
      return Err(Error::ShapeMismatch { lhs: self.shape.dims.clone(), rhs: rhs.shape.dims.clone() })
    }
    let data = self.iter().zip(rhs.iter()).map(cb).collect();
    Ok(NdArray::from_shape(Shape::new(&self.shape.dims), data))
  }

  pub(crate) fn zip_assign<F>(&mut self, rhs: &Self, mut cb: F) -> Result<&mut Self>
  where
    F: FnMut(&mut T, T),
  {
    if self.shape.dims != rhs.shape.dims {
      return Err(Error::ShapeMismatch { lhs: self.shape.dims.clone(), rhs: rhs.shape.dims.clone() })
    }
    for (i, b) in self.shape.iter().zip(rhs.iter()) {
      cb(&mut self.data[i], b);
    }
    Ok(self)
  }
}

impl<T: Numeric> NdArray<T> {
  /// Resize to arbitrary dims, possibly changing size and rank.
  ///
  /// The array is row-major afterwards.

  pub fn resize(&mut self, shape: &[usize], options: ResizeOptions<T>) -> Result<()> {
    check_dims(shape)?;
    let filler = options.fill.unwrap_or_else(T::zero);
    let size = shape.iter().product();
    let data = if options.preserve {
      let mut data: Vec<T> = self.iter().collect();
      data.resize(size, filler);
      data
    } else {
      vec![filler; size]
    };
    if size != self.size() {
      trace!("Resizing array from {} to {} elements", self.size(), size);
    }
    self.shape = Shape::new(shape);
    self.data = data;
    Ok(())
  }

  /// Resize a single axis, keeping all others.

  pub fn resize_axis(&mut self, axis: usize, len: usize, options: ResizeOptions<T>) -> Result<()> {
    check_axis(axis, self.rank())?;
    let mut dims = self.shape.dims.clone();
    dims[axis] = len;
    self.resize(&dims, options)
  }
}

impl<T: Inner> std::fmt::Display for NdArray<T> {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    let data: Vec<T> = self.iter().collect();
    print_nested(&self.shape.dims, &data, f)
  }
}

fn print_nested<T: Debug>(dims: &[usize], vec: &[T], f: &mut std::fmt::Formatter) -> std::fmt::Result {
  if dims.len() <= 1 {
    write!(f, "[{}]", vec.iter().map(|a| format!("{:?}", a) ).join(", "))
  } else {
    write!(f, "[")?;
    for (i, chunk) in vec.chunks(vec.len() / dims[0]).enumerate() {
      if i > 0 { write!(f, ", ")? }
      print_nested(&dims[1..], chunk, f)?;
    }
    write!(f, "]")
  }
}
