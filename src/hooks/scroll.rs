//! Delayed smooth scrolling.

use std::time::Duration;

use dioxus::prelude::*;
use invitation_core::SectionId;

fn scroll_script(section: SectionId) -> String {
    format!(
        "document.getElementById('{}')?.scrollIntoView({{ behavior: 'smooth' }});",
        section.dom_id()
    )
}

/// Smoothly scroll `section` into view after `delay`.
///
/// The timer belongs to the calling component and is dropped with it.
pub fn scroll_to_section(section: SectionId, delay: Duration) {
    spawn(async move {
        tokio::time::sleep(delay).await;
        tracing::debug!(section = %section, "Scrolling to section");
        let _ = document::eval(&scroll_script(section));
    });
}
