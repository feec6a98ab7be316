//! Asset Image Loader
//!
//! Loads images from the asset directory and displays them as data URIs.

use dioxus::prelude::*;

use crate::context::use_config;

/// Asynchronously load and display an image from the asset directory.
///
/// A missing or unreadable file falls back to the raw path so the webview's
/// own broken-image handling applies.
///
/// # Examples
///
/// ```rust,ignore
/// rsx! {
///     AssetImage {
///         src: "images/irma.jpg".to_string(),
///         alt: "Irma N.".to_string(),
///     }
/// }
/// ```
#[component]
pub fn AssetImage(
    /// Path relative to the asset directory
    src: String,
    /// Alt text for accessibility
    alt: String,
    /// Optional CSS class
    #[props(default = None)]
    class: Option<String>,
) -> Element {
    let config = use_config();
    let mut resolved = use_signal(|| Option::<String>::None);

    // Load image on mount or when src changes
    use_effect(use_reactive((&src,), move |(src,)| {
        let assets = config.assets.clone();
        spawn(async move {
            let relative = src.clone();
            let uri = tokio::task::spawn_blocking(move || assets.data_uri(&relative)).await;
            match uri {
                Ok(Ok(uri)) => resolved.set(Some(uri)),
                Ok(Err(e)) => {
                    tracing::warn!("Image {} unavailable: {}", src, e);
                    resolved.set(Some(src));
                }
                Err(e) => {
                    tracing::warn!("Image load task failed for {}: {}", src, e);
                    resolved.set(Some(src));
                }
            }
        });
    }));

    let css_class = class.unwrap_or_else(|| "cover-fit".to_string());

    rsx! {
        if let Some(uri) = resolved() {
            img {
                class: "{css_class}",
                src: "{uri}",
                alt: "{alt}",
            }
        } else {
            div { class: "image-placeholder" }
        }
    }
}
