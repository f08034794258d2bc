//! Shared types for refwidget.
//!
//! Value objects ([`ReferenceToken`], [`InteractionId`]) and the serde
//! configuration consumed by the core and by UI bindings.

pub mod config;
pub mod formatting;
mod interaction;
pub mod token;

pub use config::{InteractionFilter, TrackingConfig, TrackingPolicy, WidgetConfig};
pub use interaction::InteractionId;
pub use token::{ReferenceToken, TokenParseError};
