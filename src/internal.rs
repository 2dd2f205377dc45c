use num_traits::{NumCast, ToPrimitive};

use crate::{
  error::{ Error, Result },
  scalar::Real,
};


#[inline]
pub fn check_axis(axis: usize, rank: usize) -> Result<()> {
  if axis >= rank {
    Err(Error::AxisOutOfRange { axis, rank })
  } else {
    Ok(())
  }
}


// Empty shapes, zero length dimensions and element counts
// beyond usize cannot be allocated

pub fn check_dims(dims: &[usize]) -> Result<()> {
  let size = dims.iter().try_fold(1usize, |size, &n| size.checked_mul(n) );
  if dims.is_empty() || dims.iter().any(|&n| n == 0 ) || size.is_none() {
    Err(Error::InvalidShape { shape: dims.to_vec() })
  } else {
    Ok(())
  }
}


// Counts and literals always fit into a float type

#[inline]
pub fn cast<T: Real, N: ToPrimitive>(n: N) -> T {
  <T as NumCast>::from(n).expect("Value not representable in float type")
}
