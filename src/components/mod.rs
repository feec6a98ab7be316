//! UI Components for the invitation page.

mod asset_image;
mod cover;
mod music_toggle;
mod page_section;
pub mod sections;

pub use asset_image::AssetImage;
pub use cover::Cover;
pub use music_toggle::MusicToggle;
pub use page_section::PageSection;
