use dioxus::prelude::*;
use invitation_ui::Ornament;

use crate::context::use_config;

#[component]
pub fn Footer() -> Element {
    let config = use_config();
    let content = &config.content;

    rsx! {
        footer { class: "page-footer",
            Ornament {}
            p { class: "font-script heading-md text-gold", "{content.title}" }
            p { class: "footer-date", "{content.footer_date}" }
        }
    }
}
