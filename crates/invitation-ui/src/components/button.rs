//! Button Components
//!
//! Button styles used across the invitation:
//! - Gold: solid gold call to action ("Lihat Undangan", maps link)
//! - Floating: round music toggle pinned to the corner

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Solid gold background, black text, scales on hover and press
    #[default]
    Gold,
    /// Round floating action button
    Floating,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Gold => "btn-gold",
            ButtonVariant::Floating => "btn-floating",
        }
    }
}

/// Join a base class with optional extras
fn join_class(base: &str, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Accessible label, for icon-only buttons
    #[props(default)]
    pub aria_label: Option<String>,
    /// Optional inline style (animation timing)
    #[props(default)]
    pub style: Option<String>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button component
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Gold,
///         onclick: move |_| open_invitation(),
///         "Lihat Undangan"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = join_class(props.variant.class(), props.class.as_deref());
    let style = props.style.clone().unwrap_or_default();

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            style: "{style}",
            disabled: props.disabled,
            "aria-label": props.aria_label.clone(),
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Close button with X icon
#[component]
pub fn CloseButton(onclick: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: "icon-btn close-btn",
            r#type: "button",
            "aria-label": "Close",
            onclick: move |_| onclick.call(()),
            "\u{00D7}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::Gold.class(), "btn-gold");
        assert_eq!(ButtonVariant::Floating.class(), "btn-floating");
    }

    #[test]
    fn button_variant_default() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Gold);
    }

    #[test]
    fn join_class_skips_empty() {
        assert_eq!(join_class("btn-gold", None), "btn-gold");
        assert_eq!(join_class("btn-gold", Some("")), "btn-gold");
        assert_eq!(join_class("btn-gold", Some("wide")), "btn-gold wide");
    }
}
