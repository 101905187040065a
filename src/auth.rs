//! Authentication requirement signaling.
//!
//! The auth channel tells the UI whether it must block or redirect into an
//! authentication flow, and optionally what to run once that flow finishes.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// What the authentication flow should do.
///
/// A closed set; `Login` is the only defined behavior. Its token spelling
/// `"login"` is part of the external contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthBehavior {
    Login,
}

impl AuthBehavior {
    /// The contract token for this behavior.
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthBehavior::Login => "login",
        }
    }
}

impl fmt::Display for AuthBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Zero-argument callback run when an authentication flow completes.
pub type AuthCallback = Arc<dyn Fn() + Send + Sync>;

/// Options for a required authentication flow.
#[derive(Clone)]
pub struct AuthPrompt {
    behavior: AuthBehavior,
    on_complete: Option<AuthCallback>,
}

impl AuthPrompt {
    pub fn new(behavior: AuthBehavior) -> Self {
        Self {
            behavior,
            on_complete: None,
        }
    }

    /// Attach a completion callback.
    pub fn with_on_complete(mut self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_complete = Some(Arc::new(callback));
        self
    }

    pub fn behavior(&self) -> AuthBehavior {
        self.behavior
    }

    /// Run the completion callback, if any.
    ///
    /// Called by the authentication flow once it finishes.
    pub fn complete(&self) {
        if let Some(callback) = &self.on_complete {
            callback();
        }
    }
}

impl fmt::Debug for AuthPrompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthPrompt")
            .field("behavior", &self.behavior)
            .field("on_complete", &self.on_complete.is_some())
            .finish()
    }
}

/// Whether the UI must enter an authentication flow.
#[derive(Debug, Clone, Default)]
pub enum AuthRequirement {
    /// No authentication needed.
    #[default]
    NotRequired,
    /// Authentication needed, default flow.
    Required,
    /// Authentication needed, with explicit options.
    Prompt(AuthPrompt),
}

impl AuthRequirement {
    pub fn is_required(&self) -> bool {
        !matches!(self, AuthRequirement::NotRequired)
    }

    /// The requested behavior, if options were given.
    pub fn behavior(&self) -> Option<AuthBehavior> {
        match self {
            AuthRequirement::Prompt(prompt) => Some(prompt.behavior()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn default_is_not_required() {
        assert!(!AuthRequirement::default().is_required());
    }

    #[test]
    fn behavior_token_spelling_is_login() {
        assert_eq!(AuthBehavior::Login.as_str(), "login");
        assert_eq!(AuthBehavior::Login.to_string(), "login");
    }

    #[test]
    fn prompt_reports_its_behavior() {
        let requirement = AuthRequirement::Prompt(AuthPrompt::new(AuthBehavior::Login));
        assert!(requirement.is_required());
        assert_eq!(requirement.behavior(), Some(AuthBehavior::Login));
    }

    #[test]
    fn complete_runs_callback_each_time() {
        let runs = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&runs);
        let prompt = AuthPrompt::new(AuthBehavior::Login)
            .with_on_complete(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            });

        prompt.complete();
        prompt.complete();
        assert_eq!(runs.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn complete_without_callback_is_a_noop() {
        AuthPrompt::new(AuthBehavior::Login).complete();
    }
}
