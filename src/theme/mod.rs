//! Visual theme for the invitation.

mod styles;

pub use styles::GLOBAL_STYLES;
