//! Shared reactive UI state.
//!
//! Four observable channels drive cross-cutting UI concerns in a client
//! application: the signed-in user, a transient info/notification message,
//! the latest error message, and an authentication-required flag.
//!
//! # Architecture
//!
//! ```text
//! login/logout ──→ ┌────────────┐ ──→ header, avatar
//! api errors   ──→ │   UiBus    │ ──→ error banner
//! any feature  ──→ │ 4 channels │ ──→ toast renderer
//! route guards ──→ └────────────┘ ──→ login dialog
//! ```
//!
//! Each channel is a [`Slot`]: get the current value, set a new one, or
//! subscribe and receive the current value immediately plus every later one.
//! All notification happens synchronously on the caller's thread.

pub mod auth;
pub mod bus;
pub mod notification;
pub mod slot;

pub use auth::{AuthBehavior, AuthCallback, AuthPrompt, AuthRequirement};
pub use bus::UiBus;
pub use notification::{InfoMessage, Notification, Placement, PlacementParseError};
pub use slot::{Slot, Subscription};
