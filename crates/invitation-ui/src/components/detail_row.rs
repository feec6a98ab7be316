//! Icon + text row used on event cards

use dioxus::prelude::*;

use super::icons::{Icon, IconKind};

/// One line of event details, e.g. calendar icon + date
#[component]
pub fn DetailRow(icon: IconKind, text: String) -> Element {
    rsx! {
        div { class: "detail-row",
            Icon { kind: icon, size: 28, class: "icon text-gold shrink-0".to_string() }
            p { class: "detail-row__text", "{text}" }
        }
    }
}

/// Bordered card holding a group of detail rows
#[component]
pub fn DetailCard(children: Element) -> Element {
    rsx! {
        div { class: "detail-card hover-lift",
            {children}
        }
    }
}
