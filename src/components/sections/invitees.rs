use dioxus::prelude::*;
use invitation_core::motion::{column_enter, Motion};
use invitation_core::SectionId;
use invitation_ui::Reveal;

use crate::components::PageSection;
use crate::context::use_config;

/// "Turut Mengundang" - co-hosts from both sides
#[component]
pub fn InviteesSection() -> Element {
    let config = use_config();
    let content = &config.content;

    rsx! {
        PageSection { section: SectionId::Invitees, width: "max-w-5xl".to_string(),
            div { class: "text-center",
                h2 { class: "font-script heading-lg text-gold", "{content.invitees_heading}" }
                div { class: "two-column",
                    for (i, group) in content.invitees.iter().enumerate() {
                        Reveal {
                            key: "{group.title}",
                            motion: Motion::Rise,
                            transition: column_enter(i),
                            class: "glass-card".to_string(),
                            h3 { class: "heading-sm text-gold", "{group.title}" }
                            ul { class: "name-list",
                                for name in group.names.iter() {
                                    li { "{name}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
