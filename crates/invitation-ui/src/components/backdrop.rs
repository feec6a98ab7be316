//! Decorative Background Components
//!
//! A fixed, faded floral texture behind the whole page and a small
//! ornamental divider drawn as inline SVG.

use dioxus::prelude::*;

/// Properties for the FloralBackdrop component
#[derive(Clone, PartialEq, Props)]
pub struct FloralBackdropProps {
    /// Opacity of the texture (default: 0.15)
    #[props(default = 0.15)]
    pub opacity: f32,
    /// The texture itself, usually an image
    pub children: Element,
}

/// Fixed full-viewport background layer that ignores pointer events
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     FloralBackdrop {
///         img { src: "images/floral.jpg", alt: "Floral Background" }
///     }
/// }
/// ```
#[component]
pub fn FloralBackdrop(props: FloralBackdropProps) -> Element {
    let opacity = props.opacity;

    rsx! {
        div {
            class: "floral-backdrop",
            style: "opacity: {opacity};",
            "aria-hidden": "true",
            {props.children}
        }
    }
}

/// Thin gold divider with a diamond in the middle
#[component]
pub fn Ornament() -> Element {
    rsx! {
        div { class: "ornament",
            svg {
                view_box: "0 0 200 20",
                width: "200",
                height: "20",
                "aria-hidden": "true",
                g {
                    fill: "none",
                    stroke: "#d4af37",
                    stroke_width: "0.75",
                    line { x1: "0", y1: "10", x2: "88", y2: "10" }
                    // Center diamond
                    polygon { points: "100,3 107,10 100,17 93,10" }
                    line { x1: "112", y1: "10", x2: "200", y2: "10" }
                }
            }
        }
    }
}
