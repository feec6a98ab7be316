//! Inline line icons.

use dioxus::prelude::*;

/// Available icons
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum IconKind {
    Calendar,
    Clock,
    MapPin,
    Music,
    /// Music note struck through
    MusicOff,
    ExternalLink,
}

/// Properties for the Icon component
#[derive(Clone, PartialEq, Props)]
pub struct IconProps {
    pub kind: IconKind,
    /// Width and height in pixels (default: 24)
    #[props(default = 24)]
    pub size: u32,
    #[props(default)]
    pub class: Option<String>,
}

/// Renders a 24x24 stroke icon scaled to `size`
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Icon { kind: IconKind::Calendar, size: 28, class: "text-gold".to_string() }
/// }
/// ```
#[component]
pub fn Icon(props: IconProps) -> Element {
    let size = props.size;
    let class = props.class.clone().unwrap_or_else(|| "icon".to_string());

    let shape = match props.kind {
        IconKind::Calendar => rsx! {
            rect { x: "3", y: "4", width: "18", height: "18", rx: "2" }
            line { x1: "16", y1: "2", x2: "16", y2: "6" }
            line { x1: "8", y1: "2", x2: "8", y2: "6" }
            line { x1: "3", y1: "10", x2: "21", y2: "10" }
        },
        IconKind::Clock => rsx! {
            circle { cx: "12", cy: "12", r: "10" }
            polyline { points: "12 6 12 12 16 14" }
        },
        IconKind::MapPin => rsx! {
            path { d: "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z" }
            circle { cx: "12", cy: "10", r: "3" }
        },
        IconKind::Music => rsx! {
            path { d: "M9 18V5l12-2v13" }
            circle { cx: "6", cy: "18", r: "3" }
            circle { cx: "18", cy: "16", r: "3" }
        },
        IconKind::MusicOff => rsx! {
            path { d: "M9 18V5l12-2v13" }
            circle { cx: "6", cy: "18", r: "3" }
            circle { cx: "18", cy: "16", r: "3" }
            line { x1: "2", y1: "2", x2: "22", y2: "22" }
        },
        IconKind::ExternalLink => rsx! {
            path { d: "M15 3h6v6" }
            path { d: "M10 14 21 3" }
            path { d: "M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6" }
        },
    };

    rsx! {
        svg {
            class: "{class}",
            view_box: "0 0 24 24",
            width: "{size}",
            height: "{size}",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            {shape}
        }
    }
}
