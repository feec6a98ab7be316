//! Reveal Animation Wrapper
//!
//! Applies a [`Motion`] preset with a [`Transition`] timing to its children.
//! With `once_in_view` the animation waits until the element scrolls into
//! view (the page's scroll observer adds the `in-view` class once);
//! otherwise it plays on mount.

use dioxus::prelude::*;
use invitation_core::motion::{Motion, Transition, SECTION_ENTER};

/// Properties for the Reveal component
#[derive(Clone, PartialEq, Props)]
pub struct RevealProps {
    /// Animation preset (default: fade up)
    #[props(default)]
    pub motion: Motion,
    /// Duration and delay (default: section entrance)
    #[props(default = SECTION_ENTER)]
    pub transition: Transition,
    /// Wait until scrolled into view before animating
    #[props(default = true)]
    pub once_in_view: bool,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
    pub children: Element,
}

/// CSS classes for a reveal wrapper
pub fn reveal_class(motion: Motion, once_in_view: bool, extra: Option<&str>) -> String {
    let trigger = if once_in_view { "reveal" } else { "reveal reveal--immediate" };
    match extra {
        Some(extra) if !extra.is_empty() => format!("{} {} {}", trigger, motion.class(), extra),
        _ => format!("{} {}", trigger, motion.class()),
    }
}

/// Animated wrapper
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Reveal { motion: Motion::SlideFromLeft, transition: COLUMN_ENTER,
///         h3 { "Irma N." }
///     }
/// }
/// ```
#[component]
pub fn Reveal(props: RevealProps) -> Element {
    let class = reveal_class(props.motion, props.once_in_view, props.class.as_deref());
    let style = props.transition.css();

    rsx! {
        div {
            class: "{class}",
            style: "{style}",
            {props.children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_view_reveal_class() {
        assert_eq!(
            reveal_class(Motion::FadeUp, true, None),
            "reveal motion-fade-up"
        );
    }

    #[test]
    fn immediate_reveal_class_with_extra() {
        assert_eq!(
            reveal_class(Motion::FadeIn, false, Some("content")),
            "reveal reveal--immediate motion-fade-in content"
        );
    }
}
