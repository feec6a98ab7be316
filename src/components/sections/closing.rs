use dioxus::prelude::*;
use invitation_core::motion::{column_enter, Motion};
use invitation_core::SectionId;
use invitation_ui::Reveal;

use super::couple::ParentList;
use crate::components::PageSection;
use crate::context::use_config;

/// "Hormat Kami" - both families sign off
#[component]
pub fn ClosingSection() -> Element {
    let config = use_config();
    let content = &config.content;

    rsx! {
        PageSection { section: SectionId::Closing, width: "max-w-5xl".to_string(),
            div { class: "text-center",
                h2 { class: "font-script heading-lg text-gold spaced", "{content.closing_heading}" }
                div { class: "two-column",
                    for (i, family) in content.families.iter().enumerate() {
                        Reveal {
                            key: "{family.title}",
                            motion: Motion::Rise,
                            transition: column_enter(i),
                            h3 { class: "font-script heading-sm text-gold", "{family.title}" }
                            ParentList { parents: family.members.clone() }
                        }
                    }
                }
            }
        }
    }
}
