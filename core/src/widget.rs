//! Headless reference widget.
//!
//! Owns the displayed token, the interaction tracker and the transient
//! "copied" state. A UI binding renders [`RefWidget`] and forwards button
//! presses and host events to it; timers are modelled as deadlines checked
//! against a caller-supplied `Instant`.

use std::time::{Duration, Instant};

use refwidget_types::{ReferenceToken, WidgetConfig};

use crate::interaction::{InteractionHandler, InteractionSignal, InteractionTracker};
use crate::reference;

/// Message shown to the agent when the clipboard rejects a write.
pub const CLIPBOARD_DENIED_MESSAGE: &str =
    "Unable to write to clipboard. Please ensure permissions have been enabled.";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClipboardError {
    #[error("clipboard permission denied")]
    PermissionDenied,
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, thiserror::Error)]
pub enum WidgetError {
    #[error("Unable to write to clipboard. Please ensure permissions have been enabled.")]
    Clipboard(#[source] ClipboardError),
}

/// Destination for copied tokens.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// In-process clipboard holding the last written text.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
    denied: bool,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard that refuses every write, as when the host withholds permission.
    pub fn denied() -> Self {
        Self {
            contents: None,
            denied: true,
        }
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.denied {
            return Err(ClipboardError::PermissionDenied);
        }
        self.contents = Some(text.to_string());
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct RefWidget {
    token: ReferenceToken,
    tracker: InteractionTracker,
    success_flash: Duration,
    success_until: Option<Instant>,
}

impl RefWidget {
    pub fn new(config: WidgetConfig) -> Self {
        let success_flash = config.success_flash();
        Self {
            token: reference::generate(),
            tracker: InteractionTracker::new(config.tracking),
            success_flash,
            success_until: None,
        }
    }

    pub fn token(&self) -> &ReferenceToken {
        &self.token
    }

    /// Replace the displayed token with a freshly generated one.
    pub fn regenerate(&mut self) -> &ReferenceToken {
        self.token = reference::generate();
        tracing::debug!(token = %self.token, "Regenerated reference");
        &self.token
    }

    /// Copy the displayed token.
    pub fn copy_current(
        &mut self,
        clipboard: &mut dyn Clipboard,
        now: Instant,
    ) -> Result<&ReferenceToken, WidgetError> {
        self.write_token(clipboard, now)?;
        Ok(&self.token)
    }

    /// Generate a new token, display it and copy it in one step.
    pub fn copy_fresh(
        &mut self,
        clipboard: &mut dyn Clipboard,
        now: Instant,
    ) -> Result<&ReferenceToken, WidgetError> {
        self.regenerate();
        self.write_token(clipboard, now)?;
        Ok(&self.token)
    }

    fn write_token(&mut self, clipboard: &mut dyn Clipboard, now: Instant) -> Result<(), WidgetError> {
        if let Err(e) = clipboard.write_text(self.token.as_str()) {
            tracing::warn!(error = %e, "Clipboard write failed");
            return Err(WidgetError::Clipboard(e));
        }
        // A new copy restarts the flash window
        self.success_until = Some(now + self.success_flash);
        Ok(())
    }

    /// Whether the copy button should show its success styling at `now`.
    pub fn is_success(&self, now: Instant) -> bool {
        self.success_until.is_some_and(|until| now < until)
    }

    /// Drop an elapsed success window. Returns true if the state changed.
    pub fn expire_success(&mut self, now: Instant) -> bool {
        match self.success_until {
            Some(until) if now >= until => {
                self.success_until = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.tracker.is_visible()
    }

    pub fn tracker(&self) -> &InteractionTracker {
        &self.tracker
    }
}

impl InteractionHandler for RefWidget {
    fn handle_signal(&mut self, signal: &InteractionSignal) {
        self.tracker.handle_signal(signal);
    }
}
