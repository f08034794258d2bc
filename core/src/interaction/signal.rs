use refwidget_types::InteractionId;

/// Lifecycle notifications relayed from the host.
/// Adapters translate whatever the host's event bus delivers into these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractionSignal {
    /// The agent has been given an interaction.
    Assigned {
        id: InteractionId,
        media_type: Option<String>,
        direction: Option<String>,
    },
    /// The interaction has been wrapped up or otherwise closed.
    Ended { id: InteractionId },
}

impl InteractionSignal {
    pub fn assigned(id: impl Into<InteractionId>, media_type: &str) -> Self {
        Self::Assigned {
            id: id.into(),
            media_type: Some(media_type.to_string()),
            direction: None,
        }
    }

    pub fn ended(id: impl Into<InteractionId>) -> Self {
        Self::Ended { id: id.into() }
    }

    pub fn id(&self) -> &InteractionId {
        match self {
            Self::Assigned { id, .. } | Self::Ended { id } => id,
        }
    }
}
