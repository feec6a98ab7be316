//! Locked cover - the gate in front of the invitation.

use dioxus::prelude::*;
use invitation_core::motion::{Motion, COVER_EXIT, COVER_TITLE};
use invitation_core::SectionId;
use invitation_ui::{Button, ButtonVariant, Ornament, Reveal};

use crate::context::use_config;

/// Cover with the couple title, date and the open button.
///
/// While `exiting`, the cover stays on screen fading out and scaling up
/// above the revealed content.
#[component]
pub fn Cover(exiting: bool, on_open: EventHandler<()>) -> Element {
    let config = use_config();
    let content = &config.content;

    let class = if exiting {
        format!("cover {}", Motion::ExitZoom.class())
    } else {
        "cover".to_string()
    };
    let style = if exiting { COVER_EXIT.css() } else { String::new() };

    rsx! {
        section {
            id: "{SectionId::Hero.dom_id()}",
            class: "{class}",
            style: "{style}",
            Reveal { motion: Motion::Rise, transition: COVER_TITLE, once_in_view: false,
                class: "text-center".to_string(),
                h1 { class: "cover-title font-script text-gold", "{content.title}" }
                Ornament {}
                p { class: "cover-date", "{content.date_label}" }
                Button {
                    variant: ButtonVariant::Gold,
                    class: "btn-large".to_string(),
                    disabled: exiting,
                    onclick: move |_| on_open.call(()),
                    "{content.open_label}"
                }
            }
        }
    }
}
