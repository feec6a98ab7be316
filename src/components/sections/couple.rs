use dioxus::prelude::*;
use invitation_core::content::Person;
use invitation_core::motion::{Motion, COLUMN_ENTER};
use invitation_core::SectionId;
use invitation_ui::Reveal;

use crate::components::{AssetImage, PageSection};
use crate::context::use_config;

/// Portrait, name and parents of one side of the couple
#[component]
fn PersonCard(person: Person, motion: Motion) -> Element {
    rsx! {
        Reveal { motion: motion, transition: COLUMN_ENTER, class: "text-center".to_string(),
            div { class: "portrait",
                AssetImage { src: person.photo.clone(), alt: person.name.clone() }
            }
            h3 { class: "font-script heading-md text-gold", "{person.name}" }
            p { class: "relation", "{person.relation}" }
            ParentList { parents: person.parents.clone() }
        }
    }
}

/// Parents joined by "&" lines
#[component]
pub fn ParentList(parents: Vec<String>) -> Element {
    rsx! {
        for (i, parent) in parents.iter().enumerate() {
            if i > 0 {
                p { class: "name-line", "&" }
            }
            p { class: "name-line", "{parent}" }
        }
    }
}

/// Bride and groom introduction
#[component]
pub fn CoupleSection() -> Element {
    let config = use_config();
    let content = &config.content;

    rsx! {
        PageSection { section: SectionId::Couple, width: "max-w-5xl".to_string(),
            h2 { class: "font-script heading-lg text-gold text-center spaced", "{content.couple_heading}" }
            div { class: "two-column",
                PersonCard { person: content.bride.clone(), motion: Motion::SlideFromLeft }
                PersonCard { person: content.groom.clone(), motion: Motion::SlideFromRight }
            }
        }
    }
}
