use dioxus::prelude::*;
use invitation_core::content::EventDetails;
use invitation_core::motion::{Motion, PARAGRAPH_ENTER};
use invitation_core::SectionId;
use invitation_ui::{DetailCard, DetailRow, IconKind, Reveal};

use crate::components::PageSection;
use crate::context::use_config;

/// Date, time and venue card
#[component]
fn EventCard(details: EventDetails) -> Element {
    rsx! {
        DetailCard {
            DetailRow { icon: IconKind::Calendar, text: details.date.clone() }
            DetailRow { icon: IconKind::Clock, text: details.time.clone() }
            DetailRow { icon: IconKind::MapPin, text: details.venue.clone() }
        }
    }
}

/// Marriage ceremony (akad nikah) details
#[component]
pub fn AkadSection() -> Element {
    let config = use_config();
    let akad = config.content.akad.clone();

    rsx! {
        PageSection { section: SectionId::Akad,
            div { class: "text-center",
                h2 { class: "font-script heading-lg text-gold", "{akad.title}" }
                EventCard { details: akad.clone() }
            }
        }
    }
}

/// Reception details, the invitation remark and the closing salutation
#[component]
pub fn ReceptionSection() -> Element {
    let config = use_config();
    let content = &config.content;

    rsx! {
        PageSection { section: SectionId::Reception,
            div { class: "text-center",
                h2 { class: "font-script heading-lg text-gold", "{content.reception.title}" }
                EventCard { details: content.reception.clone() }
                Reveal { motion: Motion::FadeIn, transition: PARAGRAPH_ENTER,
                    p { class: "body-muted", "{content.reception_remark}" }
                }
                p { class: "lead", "{content.farewell}" }
            }
        }
    }
}
