//! Strided N-dimensional numeric arrays.
//! Tiny. Few dependencies. CPU only.
//!
//! # Features
//!
//! - **Strided layout**: Arrays store dims and strides separately from
//! their buffer, so swapped axes are read correctly without reordering data.
//!
//! - **Owned storage**: Every array owns its buffer. Slicing, transposing
//! and expanding always copy, so no array can observe another one being resized.
//!
//! - **Checked operations**: Shape, size, rank and axis mismatches are
//! reported as an [Error] before anything gets mutated.
//!
//! - **Arbitrary inner types**: Arrays can store *almost* any [Copy] type.
//! Arithmetic becomes available for [scalar::Numeric] types and transcendental
//! functions for [scalar::Real] ones.
//!
//! - **Regression**: Includes linear and logistic regression trainers running
//! plain gradient descent, reporting progress through a callback.
//!
//! # Examples
//!
//! ```
//! use microarray::NdArray;
//!
//! let a = NdArray::new(&[2, 3], vec![1, 2, 3, 4, 5, 6]).unwrap();
//! let b = a.transpose().unwrap();
//!
//! let c = a.matmul(&b).unwrap();
//! assert_eq!(c.to_string(), "[[14, 32], [32, 77]]");
//!
//! // Shapes never get broadcast
//! assert!((&a + &b).is_err());
//! assert_eq!((&a * 2).sum(), 42);
//! ```
//!
//! Fitting a line:
//! ```
//! use microarray::{ NdArray, LinearRegression, TrainOptions };
//!
//! let x = NdArray::arrange(&[10, 1], 0.0, 1.0).unwrap();
//! let y = &x * 2.0;
//!
//! let options = TrainOptions { learning_rate: 0.05, epochs: 1000 };
//! let mut model = LinearRegression::new(x, y, options).unwrap();
//! model.fit_with_progress(&mut |progress| {
//!   if progress.epoch % 100 == 0 { println!("{:?}", progress) }
//! }).unwrap();
//!
//! assert!(model.mse().unwrap() < 1e-3);
//! ```

mod internal;
mod shape;
mod array;
mod ops;

pub mod error;
pub mod scalar;
pub mod models;

pub use error::{ Error, Result };
pub use shape::{ Shape, ShapeIterator };
pub use array::{ NdArray, ResizeOptions };
pub use models::{ LinearRegression, LogisticRegression, TrainOptions, TrainProgress };
