//! # freemath-core
//!
//! Freestanding single-precision elementary math: absolute value, ceiling,
//! sine/cosine, exponential, natural logarithm and power.
//!
//! The crate is `no_std` and allocation-free so it can be linked into kernels
//! and firmware that have no math runtime. Out-of-domain arguments are handled
//! according to the build-time [`DEFAULT_POLICY`], or an explicit
//! [`DomainPolicy`] through the `*_with` functions; the `try_*` functions
//! report them as [`MathError`] instead.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod math;

pub use config::{DEFAULT_POLICY, DomainPolicy};
pub use error::MathError;
pub use math::*;
