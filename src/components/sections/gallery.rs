//! Photo gallery with an enlarged-view lightbox.

use dioxus::prelude::*;
use invitation_core::SectionId;
use invitation_ui::CloseButton;

use crate::components::{AssetImage, PageSection};
use crate::context::{use_config, use_invitation_state};

/// Three-up thumbnail grid. Clicking a thumbnail opens it in the lightbox.
#[component]
pub fn GallerySection() -> Element {
    let config = use_config();
    let content = &config.content;
    let mut state = use_invitation_state();
    let count = content.gallery.len();

    rsx! {
        PageSection { section: SectionId::Gallery, width: "max-w-6xl".to_string(),
            div { class: "text-center",
                h2 { class: "font-script heading-lg text-gold", "{content.gallery_heading}" }
                div { class: "gallery-grid",
                    for (index, photo) in content.gallery.iter().enumerate() {
                        button {
                            key: "{photo.src}",
                            class: "gallery-thumb hover-lift",
                            r#type: "button",
                            "aria-label": "{photo.alt}",
                            onclick: move |_| {
                                state.write().open_photo(index, count);
                            },
                            AssetImage {
                                src: photo.src.clone(),
                                alt: photo.alt.clone(),
                                class: "cover-fit zoom-on-hover".to_string(),
                            }
                        }
                    }
                }
            }
        }
        Lightbox {}
    }
}

/// Modal showing the selected photo at full size
#[component]
fn Lightbox() -> Element {
    let config = use_config();
    let mut state = use_invitation_state();

    let Some(index) = state.read().lightbox() else {
        return rsx! {};
    };
    let Some(photo) = config.content.gallery.get(index).cloned() else {
        return rsx! {};
    };

    let close = move |_| state.write().close_photo();

    rsx! {
        div {
            class: "modal-overlay",
            onclick: close,

            div {
                class: "lightbox",
                onclick: move |e| e.stop_propagation(),

                CloseButton { onclick: move |_| state.write().close_photo() }
                div { class: "lightbox__frame",
                    AssetImage {
                        src: photo.src.clone(),
                        alt: photo.alt.clone(),
                        class: "contain-fit".to_string(),
                    }
                }
            }
        }
    }
}
