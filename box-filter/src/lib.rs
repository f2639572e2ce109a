//! Generates square binary box filter masks.
//!
//! A mask has an odd side length (see [`Diameter`]). A cell is switched on when
//! its euclidean distance from the center lies inside a [`RadiusBand`] and the
//! [`Density`] sub-sampling rule selects it. The center cell is always on.
//!
//! Start with [`MaskParams`] and [`Mask::generate`], then hand the result to
//! the writers in [`render`].
#![forbid(unsafe_code)]

pub mod band;
pub mod density;
pub mod diameter;
pub mod mask;
pub mod render;

mod error;

pub use crate::band::RadiusBand;
pub use crate::density::Density;
pub use crate::diameter::Diameter;
pub use crate::error::Error;
pub use crate::mask::{Mask, MaskParams};
