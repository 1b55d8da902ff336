// Copyright 2025 the Bezout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Exact intersections of Bézier curves and ellipses.
//!
//! Every curve/curve query is reduced to a single polynomial, the Bézout
//! resultant of the two curves, whose real roots are found by closed form
//! (up to degree four) or by derivative-guided root isolation (up to degree
//! nine). Bounding boxes are tight: they come from the curve's extrema, not
//! its control polygon, and double as the pre-filter for every query.
//!
//! # Examples
//!
//! Intersecting two circles:
//! ```
//! use bezout::Ellipse;
//!
//! let a = Ellipse::circle((0.0, 0.0), 1.0);
//! let b = Ellipse::circle((1.0, 0.0), 1.0);
//! let hits = a.intersect_ellipse(&b).unwrap();
//! assert_eq!(hits.len(), 2);
//! for hit in hits {
//!     assert!((hit.point.x - 0.5).abs() < 1e-9);
//!     assert!((hit.point.y.abs() - 0.75_f64.sqrt()).abs() < 1e-9);
//!     // Ellipses are implicit: there is no curve parameter.
//!     assert_eq!(hit.t, None);
//! }
//! ```
//!
//! A cubic crossing an ellipse, and whether both fit on a canvas:
//! ```
//! use bezout::{Canvas, CubicBez, Ellipse, ParamCurve};
//!
//! let canvas = Canvas::new(200.0, 100.0);
//! let ellipse = Ellipse::new((100.0, 50.0), 40.0, 20.0);
//! let cubic = CubicBez::new((10.0, 50.0), (60.0, 10.0), (140.0, 90.0), (190.0, 50.0));
//! assert!(canvas.contains(&ellipse) && canvas.contains(&cubic));
//!
//! for hit in cubic.intersect_ellipse(&ellipse).unwrap() {
//!     let t = hit.t.unwrap();
//!     assert!(cubic.eval(t).distance(hit.point) < 1e-9);
//! }
//! ```
//!
//! # Features
//!
//! The following crate [feature flags](https://doc.rust-lang.org/cargo/reference/features.html#dependency-features) are available:
//!
//! - `std` (enabled by default): Get floating point functions from the standard library.
//! - `libm`: Use floating point implementations from [libm][].
//!   This is useful for `no_std` environments.
//! - `mint`: Enable `From`/`Into` conversion of [`Point`] and [mint][] points.
//! - `serde`: Implement `serde::Deserialize` and `serde::Serialize` on the value types.
//! - `schemars`: Add best-effort support for the value types in JSON schemas using [schemars][].
//!
//! At least one of `std` and `libm` is required; `std` overrides `libm`.
//! An allocator is required (i.e. it uses [alloc]).
//!
//! [libm]: https://docs.rs/libm
//! [mint]: https://docs.rs/mint
//! [schemars]: https://docs.rs/schemars

// LINEBENDER LINT SET - lib.rs - v1
// See https://linebender.org/wiki/canonical-lints/
// These lints aren't included in Cargo.toml because they
// shouldn't apply to examples and tests
#![warn(unused_crate_dependencies)]
#![warn(clippy::print_stdout, clippy::print_stderr)]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![allow(
    clippy::unreadable_literal,
    clippy::many_single_char_names,
    clippy::excessive_precision
)]
// The following lints are part of the Linebender standard set,
// but resolving them has been deferred for now.
#![allow(
    single_use_lifetimes,
    clippy::use_self,
    clippy::return_self_not_must_use,
    clippy::cast_possible_truncation,
    clippy::missing_assert_message,
    clippy::exhaustive_enums,
    clippy::match_same_arms,
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason
)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("bezout requires either the `std` or `libm` feature");

// Suppress the unused_crate_dependencies lint when both std and libm are specified.
#[cfg(all(feature = "std", feature = "libm"))]
use libm as _;

extern crate alloc;

mod bounding_box;
mod canvas;
pub mod common;
mod cubicbez;
mod ellipse;
mod error;
mod intersection;
mod line;
mod param_curve;
mod point;
mod poly;
mod quadbez;
pub mod resultant;
mod shape;
mod svg;

pub use crate::bounding_box::*;
pub use crate::canvas::*;
pub use crate::cubicbez::*;
pub use crate::ellipse::*;
pub use crate::error::*;
pub use crate::intersection::*;
pub use crate::line::*;
pub use crate::param_curve::*;
pub use crate::point::*;
pub use crate::poly::*;
pub use crate::quadbez::*;
pub use crate::shape::*;
pub use crate::svg::*;
