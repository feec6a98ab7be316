use dioxus::prelude::*;

use crate::context::{get_config, SharedConfig};
use crate::pages::Invitation;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and configuration context, then renders the
/// invitation page.
#[component]
pub fn App() -> Element {
    use_context_provider::<SharedConfig>(get_config);

    rsx! {
        style { {GLOBAL_STYLES} }
        Invitation {}
    }
}
