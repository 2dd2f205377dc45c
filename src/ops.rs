//! Operator overloads.
//!
//! Combining two arrays requires matching shapes, so these operators
//! yield a [Result](crate::Result). Operators taking a scalar cannot
//! fail and yield the array directly.

use crate::{
  error::Result,
  array::NdArray,
  scalar::{ Numeric, Signed },
};


impl<T: Signed> std::ops::Neg for &NdArray<T> {
  type Output = NdArray<T>;

  fn neg(self) -> Self::Output {
    self.map(|a| -a )
  }
}

impl<T: Signed> std::ops::Neg for NdArray<T> {
  type Output = NdArray<T>;

  fn neg(self) -> Self::Output {
    -&self
  }
}

macro_rules! add_operator {
  ($trait:ident, $meth:ident, $assign_trait:ident, $assign_meth:ident, $scalar_assign:ident, $symbol:tt) => {
    impl<T: Numeric> std::ops::$trait for &NdArray<T> { // &array + &other
      type Output = Result<NdArray<T>>;

      fn $meth(self, rhs: Self) -> Self::Output {
        NdArray::$meth(self, rhs)
      }
    }

    impl<T: Numeric> std::ops::$trait for NdArray<T> { // array + other
      type Output = Result<NdArray<T>>;

      fn $meth(self, rhs: Self) -> Self::Output {
        NdArray::$meth(&self, &rhs)
      }
    }

    impl<T: Numeric> std::ops::$trait<NdArray<T>> for &NdArray<T> { // &array + other
      type Output = Result<NdArray<T>>;

      fn $meth(self, rhs: NdArray<T>) -> Self::Output {
        NdArray::$meth(self, &rhs)
      }
    }

    impl<T: Numeric> std::ops::$trait<&NdArray<T>> for NdArray<T> { // array + &other
      type Output = Result<NdArray<T>>;

      fn $meth(self, rhs: &NdArray<T>) -> Self::Output {
        NdArray::$meth(&self, rhs)
      }
    }

    impl<T: Numeric> std::ops::$trait<T> for &NdArray<T> { // &array + T
      type Output = NdArray<T>;

      fn $meth(self, rhs: T) -> NdArray<T> {
        self.map(|a| a $symbol rhs )
      }
    }

    impl<T: Numeric> std::ops::$trait<T> for NdArray<T> { // array + T
      type Output = NdArray<T>;

      fn $meth(mut self, rhs: T) -> NdArray<T> {
        self.$scalar_assign(rhs);
        self
      }
    }

    impl<T: Numeric> std::ops::$assign_trait<T> for NdArray<T> { // array += T
      fn $assign_meth(&mut self, rhs: T) {
        self.$scalar_assign(rhs);
      }
    }

    impl std::ops::$trait<&NdArray<f32>> for f32 { // f32 + &array
      type Output = NdArray<f32>;

      fn $meth(self, array: &NdArray<f32>) -> NdArray<f32> {
        array.map(|a| self $symbol a )
      }
    }

    impl std::ops::$trait<NdArray<f32>> for f32 { // f32 + array
      type Output = NdArray<f32>;

      fn $meth(self, array: NdArray<f32>) -> NdArray<f32> {
        self $symbol &array
      }
    }

    impl std::ops::$trait<&NdArray<f64>> for f64 { // f64 + &array
      type Output = NdArray<f64>;

      fn $meth(self, array: &NdArray<f64>) -> NdArray<f64> {
        array.map(|a| self $symbol a )
      }
    }

    impl std::ops::$trait<NdArray<f64>> for f64 { // f64 + array
      type Output = NdArray<f64>;

      fn $meth(self, array: NdArray<f64>) -> NdArray<f64> {
        self $symbol &array
      }
    }
  };
}

add_operator!(Add, add, AddAssign, add_assign, add_assign_scalar, +);
add_operator!(Sub, sub, SubAssign, sub_assign, sub_assign_scalar, -);
add_operator!(Mul, mul, MulAssign, mul_assign, mul_assign_scalar, *);
add_operator!(Div, div, DivAssign, div_assign, div_assign_scalar, /);
