//! Interaction lifecycle tracking
//!
//! This module provides:
//! - **Signals**: Host-agnostic "assigned"/"ended" notifications
//! - **Host payloads**: Serde model of the agent desktop's event JSON
//! - **Tracker**: Signal handler that decides widget visibility
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                 Host event bus (agent desktop)                   │
//! │   {"interactionId": "int-1", "mediaType": "email", ...}         │
//! └─────────────────────────────────────────────────────────────────┘
//!                              │
//!                  HostEvent::into_signal(kind)
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │               InteractionTracker (tracked id set)                │
//! │   "int-1 and int-2 open, widget visible"                        │
//! └─────────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//!                     Presentation layer
//! ```

pub mod handler;
pub mod host;
pub mod signal;
pub mod tracker;


pub use handler::InteractionHandler;
pub use host::{ContactDirection, HostEvent, HostEventKind, RecordedHostEvent};
pub use signal::InteractionSignal;
pub use tracker::{InteractionTracker, VisibilityChange};
