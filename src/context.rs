//! Context providers for the invitation.
//!
//! Provides the launch configuration and the page state to all components
//! via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let config = use_config();
//! let state = use_invitation_state();
//! ```

use std::sync::Arc;

use dioxus::prelude::*;
use invitation_core::{InvitationConfig, InvitationState};

/// Shared configuration type for context.
///
/// Immutable after launch, so a plain Arc is enough.
pub type SharedConfig = Arc<InvitationConfig>;

/// Get the launch configuration.
/// Uses the global config set from command line args.
pub fn get_config() -> SharedConfig {
    crate::get_config()
}

/// Hook to access the launch configuration from context.
pub fn use_config() -> SharedConfig {
    use_context::<SharedConfig>()
}

/// Hook to access the page state from context.
///
/// Provided by the `Invitation` page, which owns it.
pub fn use_invitation_state() -> Signal<InvitationState> {
    use_context::<Signal<InvitationState>>()
}
