//! Wedding Invitation UI Components
//!
//! Dioxus components shared by the invitation page.
//!
//! ## Palette
//!
//! - **Gold (#d4af37)**: names, headings, calls to action
//! - **Beige (#f5f0e1)**: body text
//! - **Black (#000000)**: page background under a faded floral texture

pub mod components;

pub use components::*;
