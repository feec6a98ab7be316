//! Invitation page - cover gate, content sections and background music.
//!
//! The page owns the [`InvitationState`] and the audio resource. Opening the
//! cover starts the music, cross-fades cover and content, and scrolls to the
//! opening section once the fade is underway.

use dioxus::prelude::*;
use invitation_core::motion::{Motion, CONTENT_REVEAL, COVER_EXIT};
use invitation_core::{AudioOptions, InvitationState};
use invitation_ui::{FloralBackdrop, Reveal};

use crate::components::sections::{
    AkadSection, ClosingSection, CoupleSection, Footer, GallerySection, InviteesSection,
    LocationSection, OpeningSection, ReceptionSection,
};
use crate::components::{AssetImage, Cover, MusicToggle};
use crate::context::use_config;
use crate::hooks::{scroll_to_section, use_audio, use_reveal_on_scroll, use_section_tracker};

/// Invitation page component.
#[component]
pub fn Invitation() -> Element {
    let config = use_config();
    let mut state = use_signal(InvitationState::new);
    use_context_provider(|| state);

    let audio_options = if config.music_enabled {
        config.audio.clone()
    } else {
        AudioOptions {
            sources: Vec::new(),
            preload: false,
            ..config.audio.clone()
        }
    };
    let mut audio = use_audio(audio_options);

    // Cover stays mounted while its exit animation plays
    let mut cover_visible = use_signal(|| true);

    use_section_tracker(state);
    let unlocked = !state.read().is_locked();
    use_reveal_on_scroll(unlocked);

    let open = move |_| {
        let plan = state.write().open();
        let Some(plan) = plan else {
            return;
        };
        if plan.start_music {
            let playing = state.peek().music_playing();
            audio.set_playback_intent(playing);
        }
        scroll_to_section(plan.scroll_target, plan.scroll_delay);
        spawn(async move {
            tokio::time::sleep(COVER_EXIT.total()).await;
            cover_visible.set(false);
        });
    };

    let toggle_music = move |_| {
        let playing = state.write().toggle_music();
        audio.set_playback_intent(playing);
    };

    let status = audio.status();
    let music = state.read().music();
    let background = config.content.background.clone();

    rsx! {
        div { class: "page",
            FloralBackdrop {
                AssetImage {
                    src: background,
                    alt: "Floral Background".to_string(),
                }
            }

            if unlocked && config.music_enabled {
                MusicToggle {
                    playing: music.is_playing(),
                    disabled: status.error,
                    label: music.toggle_label().to_string(),
                    onclick: toggle_music,
                }
            }

            if cover_visible() {
                Cover { exiting: unlocked, on_open: open }
            }

            if unlocked {
                Reveal {
                    motion: Motion::FadeIn,
                    transition: CONTENT_REVEAL,
                    once_in_view: false,
                    class: "content".to_string(),
                    OpeningSection {}
                    CoupleSection {}
                    AkadSection {}
                    ReceptionSection {}
                    ClosingSection {}
                    GallerySection {}
                    InviteesSection {}
                    LocationSection {}
                    Footer {}
                }
            }
        }
    }
}
