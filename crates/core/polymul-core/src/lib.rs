//! # Polymul Core
//!
//! Companion code for study notes on fast polynomial multiplication in
//! lattice-based cryptography.
//!
//! ## Overview
//!
//! The notes walk from schoolbook multiplication through Karatsuba and
//! Toom-Cook to FFT/NTT-based products. This crate implements the pieces
//! the notes actually exercise:
//!
//! - [`roots`]: the complex n-th roots of unity `exp(i·2πk/n)`, the
//!   evaluation points behind every FFT
//! - [`karatsuba`]: three-product divide and conquer, O(n^1.585)
//! - [`toom3`]: five-point evaluation and interpolation, O(n^1.465)
//! - [`compare`]: runs every method on the same operands and checks that
//!   they agree
//! - [`demo`]: the canned Karatsuba and Toom-3 demonstrations
//!
//! ## Quick Start
//!
//! ```
//! use polymul_core::prelude::*;
//!
//! # fn main() -> Result<(), PolymulError> {
//! let roots = roots_of_unity(4)?;
//! print!("{}", render_text(&roots));
//!
//! let x = BigInt::from(1234567);
//! let y = BigInt::from(7654321);
//! assert!(compare(&x, &y).all_agree());
//! # Ok(())
//! # }
//! ```
//!
//! ## Supporting modules
//!
//! - [`display`]: `(re±imi)` rendering of complex values
//! - [`report`]: text and JSON output
//! - [`config`]: layered file/environment configuration
//! - [`observability`]: tracing subscriber setup
//! - [`error`]: the crate error type

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    rust_2018_idioms,
    unused_qualifications,
    missing_debug_implementations
)]

pub use crate::error::{PolymulError, PolymulResult};

pub mod error;
pub mod config;
pub mod observability;

mod digits;
pub mod roots;
pub mod display;
pub mod karatsuba;
pub mod toom3;
pub mod compare;
pub mod report;
pub mod demo;

pub mod prelude {
    //! Common imports for using polymul-core
    //!
    //! ```
    //! use polymul_core::prelude::*;
    //! ```

    pub use crate::{
        PolymulError, PolymulResult,
        compare::{compare, Comparison, MultiplicationMethod},
        demo::Demo,
        display::ComplexDisplay,
        karatsuba::karatsuba,
        report::{render_comparison, render_json, render_text, RootRecord},
        roots::{principal_root, root_of_unity, roots_of_unity},
        toom3::toom3,
    };

    pub use num_bigint::BigInt;
    pub use num_complex::Complex64;
}
