//! Full-height page section wrapper.

use dioxus::prelude::*;
use invitation_core::motion::{Motion, SECTION_ENTER};
use invitation_core::SectionId;
use invitation_ui::reveal_class;

/// A min-height-screen section that fades up the first time it scrolls into
/// view. Carries the section's DOM id for the visibility tracker.
#[component]
pub fn PageSection(
    section: SectionId,
    /// Max-width class of the inner column
    #[props(default = "max-w-4xl".to_string())]
    width: String,
    children: Element,
) -> Element {
    let class = reveal_class(Motion::FadeUp, true, Some("page-section"));
    let style = SECTION_ENTER.css();

    rsx! {
        section {
            id: "{section.dom_id()}",
            class: "{class}",
            style: "{style}",
            div { class: "section-inner {width}",
                {children}
            }
        }
    }
}
