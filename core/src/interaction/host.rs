//! Host event payloads.
//!
//! The agent desktop publishes interaction events as JSON objects with the
//! interaction id, the media channel and, for some channels, the contact
//! direction. Only those fields are read; everything else in the payload is
//! ignored.

use serde::{Deserialize, Serialize};

use refwidget_types::InteractionId;

use super::InteractionSignal;

/// Which host notification a payload arrived on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HostEventKind {
    Assigned,
    Ended,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDirection {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

/// Fields consumed from a host interaction payload.
///
/// Everything is optional at the serde level so a partial payload still
/// deserializes; [`HostEvent::into_signal`] decides whether it is usable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostEvent {
    #[serde(default)]
    pub interaction_id: Option<String>,
    #[serde(default)]
    pub media_type: Option<String>,
    #[serde(default)]
    pub contact_direction: Option<ContactDirection>,
}

impl HostEvent {
    pub fn direction(&self) -> Option<&str> {
        self.contact_direction
            .as_ref()
            .and_then(|d| d.kind.as_deref())
    }

    /// Convert into a lifecycle signal. Payloads without an interaction id
    /// cannot be tracked and yield `None`.
    pub fn into_signal(self, kind: HostEventKind) -> Option<InteractionSignal> {
        let direction = self.direction().map(str::to_string);
        let Some(raw_id) = self.interaction_id.filter(|id| !id.is_empty()) else {
            tracing::debug!(?kind, "Dropping host event without interactionId");
            return None;
        };
        let id = InteractionId::from(raw_id);

        Some(match kind {
            HostEventKind::Assigned => InteractionSignal::Assigned {
                id,
                media_type: self.media_type,
                direction,
            },
            HostEventKind::Ended => InteractionSignal::Ended { id },
        })
    }
}

/// One line of a recorded host event stream: the payload tagged with its kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedHostEvent {
    pub event: HostEventKind,
    #[serde(flatten)]
    pub payload: HostEvent,
}

impl RecordedHostEvent {
    pub fn into_signal(self) -> Option<InteractionSignal> {
        self.payload.into_signal(self.event)
    }
}
