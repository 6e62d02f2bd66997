//! Color types and fixed-point accumulation
//!
//! This module provides the 8-bit RGBA [`Color`] (also used as the
//! [`Pixel`] type of a block), the foreground/background [`ColorPair`] that
//! describes a candidate cell, and the [`ColorAccum`] used to average
//! colors through the reciprocal table.
//!
//! # Example
//!
//! ```
//! use cell_kernel::{Color, ColorAccum};
//!
//! let mut accum = ColorAccum::default();
//! accum.add_color(Color::new(10, 20, 30, 255));
//! accum.add_color(Color::new(20, 30, 40, 255));
//!
//! assert_eq!(accum.div_scalar(2).to_color(), Color::new(15, 25, 35, 255));
//! ```

mod accum;
mod color;
mod pair;
mod reciprocal;

pub use accum::ColorAccum;
pub use color::{Color, Pixel};
pub use pair::ColorPair;
pub use reciprocal::{reciprocal, RECIPROCALS, RECIPROCAL_SHIFT};
