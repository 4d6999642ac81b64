#![no_std]

//! A **stack-resident**, **fixed-capacity**, **variable-size** vector, `no_std` compatible.
//!
//! `FixedVect<T, N>` stores up to `N` elements of type `T` contiguously,
//! inline in the value itself.
//! Unlike [`Vec`], the capacity is **fixed at compile-time**, and cannot grow.
//! However, its length (`len`) can vary dynamically up to `N`.
//!
//! This type is ideal for cases where:
//! - You're working in `no_std` environments.
//! - You want a `Vec`-like API but need deterministic capacity.
//! - You need a bounded, allocation-free buffer that later seeds a heap-backed
//!   dynamic sequence.
//!
//! ```rust
//! use fixed_vect::FixedVect;
//!
//! let mut fv = FixedVect::<i32, 10>::new();
//! let mut leftover = fv.extend([1, 2, 3, 4, 5]);
//! assert_eq!(leftover.next(), None);
//!
//! assert_eq!(fv.len(), 5);
//! assert_eq!(fv.capacity(), 10);
//! assert_eq!(&fv[..], &[1, 2, 3, 4, 5]);
//!
//! // Seed a dynamic sequence from the iterator range.
//! let v: Vec<i32> = fv.iter().copied().collect();
//! assert_eq!(v.len(), 5);
//! assert!(v.capacity() >= 5);
//! ```
//!
//! # Features
//!
//! - `alloc` *(default)* — conversions into [`Vec`].
//! - `serde` — `Serialize`/`Deserialize` implementations, sequence-encoded.

#[cfg(any(feature = "alloc", test))]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod error;
mod iter;
#[cfg(feature = "serde")]
mod serde;
mod vec;

pub use error::CapacityError;
pub use iter::{Drain, IntoIter};
pub use vec::FixedVect;
