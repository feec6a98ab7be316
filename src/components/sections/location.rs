use dioxus::prelude::*;
use invitation_core::SectionId;
use invitation_ui::{Icon, IconKind};

use crate::components::PageSection;
use crate::context::use_config;

/// Embedded map and a link out to the maps app
#[component]
pub fn LocationSection() -> Element {
    let config = use_config();
    let location = &config.content.location;

    rsx! {
        PageSection { section: SectionId::Location, width: "max-w-5xl".to_string(),
            div { class: "text-center",
                h2 { class: "font-script heading-lg text-gold", "{location.heading}" }
                div { class: "map-card hover-lift",
                    div { class: "aspect-video",
                        iframe {
                            src: "{location.embed_url}",
                            width: "100%",
                            height: "100%",
                            style: "border: 0;",
                            allowfullscreen: true,
                            "loading": "lazy",
                            "referrerpolicy": "no-referrer-when-downgrade",
                            title: "Wedding Location",
                        }
                    }
                }
                a {
                    class: "btn-gold btn-link",
                    href: "{location.maps_url}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    Icon { kind: IconKind::MapPin, size: 22 }
                    "{location.link_label}"
                    Icon { kind: IconKind::ExternalLink, size: 18 }
                }
            }
        }
    }
}
