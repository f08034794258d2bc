use std::path::PathBuf;

use refwidget_core::{MemoryClipboard, RefWidget, WidgetConfig};

/// Everything the REPL host owns for one widget attachment.
pub struct HostState {
    pub config: WidgetConfig,
    pub config_path: Option<PathBuf>,
    pub widget: RefWidget,
    pub clipboard: MemoryClipboard,
}

impl HostState {
    pub fn new(config: WidgetConfig, config_path: Option<PathBuf>) -> Self {
        Self {
            widget: RefWidget::new(config.clone()),
            config,
            config_path,
            clipboard: MemoryClipboard::new(),
        }
    }
}
