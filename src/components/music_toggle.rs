//! Floating background music toggle.

use dioxus::prelude::*;
use invitation_core::motion::{Motion, MUSIC_TOGGLE};
use invitation_ui::{Button, ButtonVariant, Icon, IconKind};

/// Round button pinned bottom-right that mutes and unmutes the music.
///
/// Shown disabled when the track failed to load.
#[component]
pub fn MusicToggle(playing: bool, disabled: bool, label: String, onclick: EventHandler<()>) -> Element {
    let style = MUSIC_TOGGLE.css();
    let class = format!("music-toggle reveal reveal--immediate {}", Motion::Rise.class());

    rsx! {
        Button {
            variant: ButtonVariant::Floating,
            class: class,
            style: style,
            disabled: disabled,
            aria_label: label,
            onclick: move |_| onclick.call(()),
            if playing {
                Icon { kind: IconKind::MusicOff, size: 20 }
            } else {
                Icon { kind: IconKind::Music, size: 20 }
            }
        }
    }
}
