use dioxus::prelude::*;
use invitation_core::motion::{Motion, PARAGRAPH_ENTER};
use invitation_core::SectionId;
use invitation_ui::Reveal;

use crate::components::PageSection;
use crate::context::use_config;

/// Religious opening: basmala, greeting and the invitation sentence
#[component]
pub fn OpeningSection() -> Element {
    let config = use_config();
    let opening = &config.content.opening;

    rsx! {
        PageSection { section: SectionId::Opening, width: "max-w-3xl".to_string(),
            div { class: "text-center",
                h2 { class: "font-arabic heading-xl text-gold", lang: "ar", dir: "rtl", "{opening.basmala}" }
                p { class: "lead", "{opening.greeting}" }
                Reveal { motion: Motion::FadeIn, transition: PARAGRAPH_ENTER,
                    p { class: "body-muted", "{opening.text}" }
                }
            }
        }
    }
}
