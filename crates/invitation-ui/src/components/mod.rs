//! Reusable UI components for the invitation
//!
//! All components use the black-and-gold palette with:
//! - A script face for names and headings
//! - A serif face for body text
//! - CSS keyframe animations selected by motion classes

mod backdrop;
mod button;
mod detail_row;
mod icons;
mod reveal;

pub use backdrop::*;
pub use button::*;
pub use detail_row::*;
pub use icons::*;
pub use reveal::*;
