//! The UI signal bus.
//!
//! One [`UiBus`] instance carries the four channels the whole application
//! shares: current user, transient info message, latest error message and
//! the authentication requirement. Construct it once at startup and hand
//! clones to the components that need it; clones observe the same channels.
//!
//! The bus is generic over the user record type `U`, which it stores and
//! forwards without inspecting.

use crate::auth::{AuthBehavior, AuthPrompt, AuthRequirement};
use crate::notification::InfoMessage;
use crate::slot::Slot;

/// Shared reactive UI state with four independent channels.
#[derive(Clone)]
pub struct UiBus<U> {
    current_user: Slot<Option<U>>,
    info_message: Slot<Option<InfoMessage>>,
    error_message: Slot<Option<String>>,
    auth_required: Slot<AuthRequirement>,
}

impl<U: Clone + Send + 'static> UiBus<U> {
    /// Create a bus with every channel at its default: no user, no
    /// messages, authentication not required.
    pub fn new() -> Self {
        Self {
            current_user: Slot::new(None),
            info_message: Slot::new(None),
            error_message: Slot::new(None),
            auth_required: Slot::new(AuthRequirement::NotRequired),
        }
    }

    /// The signed-in user, `None` when signed out.
    pub fn current_user(&self) -> &Slot<Option<U>> {
        &self.current_user
    }

    /// The pending info message, consumed and cleared by the renderer.
    pub fn info_message(&self) -> &Slot<Option<InfoMessage>> {
        &self.info_message
    }

    /// The most recent error text; a new error overwrites an unread one.
    pub fn error_message(&self) -> &Slot<Option<String>> {
        &self.error_message
    }

    /// Whether the UI must enter an authentication flow.
    pub fn auth_required(&self) -> &Slot<AuthRequirement> {
        &self.auth_required
    }

    /// Record a successful sign-in.
    pub fn set_user(&self, user: U) {
        tracing::debug!("user signed in");
        self.current_user.set(Some(user));
    }

    /// Clear the user on logout or session expiry.
    pub fn clear_user(&self) {
        tracing::debug!("user signed out");
        self.current_user.set(None);
    }

    /// Surface a dismissible info message or notification.
    pub fn show_info(&self, message: impl Into<InfoMessage>) {
        self.info_message.set(Some(message.into()));
    }

    /// Clear the info channel after the message was shown.
    pub fn clear_info(&self) {
        self.info_message.set(None);
    }

    /// Surface an error, replacing any unread prior error.
    pub fn show_error(&self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!("error surfaced: {}", message);
        self.error_message.set(Some(message));
    }

    /// Dismiss the shown error.
    pub fn clear_error(&self) {
        self.error_message.set(None);
    }

    /// Demand a login flow, running `on_complete` once it finishes.
    pub fn require_login(&self, on_complete: impl Fn() + Send + Sync + 'static) {
        tracing::debug!("login required");
        self.auth_required.set(AuthRequirement::Prompt(
            AuthPrompt::new(AuthBehavior::Login).with_on_complete(on_complete),
        ));
    }

    /// Drop any authentication requirement.
    pub fn clear_auth_requirement(&self) {
        self.auth_required.set(AuthRequirement::NotRequired);
    }
}

impl<U: Clone + Send + 'static> Default for UiBus<U> {
    fn default() -> Self {
        Self::new()
    }
}
