//! rusty-fields validation predicates
//!
//! Pure functions over strings and numbers. The `rusty-fields` stock
//! validators wrap these to operate on JSON values.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod numeric;
pub mod string;

pub use numeric::*;
pub use string::*;
