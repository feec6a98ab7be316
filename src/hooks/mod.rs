//! Platform hooks: audio output, webview visibility observers, scrolling.

mod audio;
mod scroll;
mod section_tracker;

pub use audio::use_audio;
pub use scroll::scroll_to_section;
pub use section_tracker::{use_reveal_on_scroll, use_section_tracker};
