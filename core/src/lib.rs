pub mod config;
pub mod interaction;
pub mod reference;
pub mod widget;

// Re-exports for convenience
pub use interaction::{
    HostEvent, HostEventKind, InteractionHandler, InteractionSignal, InteractionTracker,
    VisibilityChange,
};
pub use reference::generate;
pub use refwidget_types::{
    InteractionFilter, InteractionId, ReferenceToken, TrackingConfig, TrackingPolicy,
    WidgetConfig,
};
pub use widget::{Clipboard, ClipboardError, MemoryClipboard, RefWidget, WidgetError};
