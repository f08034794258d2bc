//! REPL command implementations.
//!
//! Each command returns the text to print so the loop in `main` owns stdout.

use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::time::Instant;

use refwidget_core::interaction::RecordedHostEvent;
use refwidget_core::{InteractionHandler, InteractionId, InteractionSignal, VisibilityChange};

use crate::state::HostState;

fn visibility_label(visible: bool) -> &'static str {
    if visible { "visible" } else { "hidden" }
}

fn describe_change(change: VisibilityChange, visible: bool) -> String {
    match change {
        VisibilityChange::Shown => "widget shown".to_string(),
        VisibilityChange::Hidden => "widget hidden".to_string(),
        VisibilityChange::Unchanged => format!("no change ({})", visibility_label(visible)),
    }
}

pub fn generate(count: usize) -> String {
    (0..count.max(1))
        .map(|_| refwidget_core::generate().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn regenerate(state: &mut HostState) -> String {
    state.widget.regenerate().to_string()
}

pub fn show(state: &HostState) -> String {
    state.widget.token().to_string()
}

pub fn copy(state: &mut HostState, fresh: bool) -> Result<String, String> {
    let now = Instant::now();
    let result = if fresh {
        state.widget.copy_fresh(&mut state.clipboard, now)
    } else {
        state.widget.copy_current(&mut state.clipboard, now)
    };
    result
        .map(|token| format!("Copied {token}"))
        .map_err(|e| e.to_string())
}

pub fn paste(state: &HostState) -> String {
    state
        .clipboard
        .contents()
        .map(str::to_string)
        .unwrap_or_else(|| "(clipboard empty)".to_string())
}

pub fn assign(
    state: &mut HostState,
    id: &str,
    media_type: &str,
    direction: Option<&str>,
) -> String {
    let signal = InteractionSignal::Assigned {
        id: InteractionId::from(id),
        media_type: Some(media_type.to_string()),
        direction: direction.map(str::to_string),
    };
    apply_signal(state, &signal)
}

pub fn end(state: &mut HostState, id: &str) -> String {
    apply_signal(state, &InteractionSignal::ended(id))
}

fn apply_signal(state: &mut HostState, signal: &InteractionSignal) -> String {
    let was_visible = state.widget.is_visible();
    state.widget.handle_signal(signal);
    let visible = state.widget.is_visible();
    let change = match (was_visible, visible) {
        (false, true) => VisibilityChange::Shown,
        (true, false) => VisibilityChange::Hidden,
        _ => VisibilityChange::Unchanged,
    };
    describe_change(change, visible)
}

/// Feed a JSON-lines recording of host events through the widget.
pub fn replay(state: &mut HostState, path: &str) -> Result<String, String> {
    let file = File::open(path).map_err(|e| format!("Failed to open {path}: {e}"))?;
    replay_reader(state, BufReader::new(file))
}

pub fn replay_reader(state: &mut HostState, reader: impl BufRead) -> Result<String, String> {
    let mut applied = 0usize;
    let mut skipped = 0usize;

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| e.to_string())?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let signal = match serde_json::from_str::<RecordedHostEvent>(line) {
            Ok(event) => event.into_signal(),
            Err(e) => {
                tracing::warn!(line = idx + 1, error = %e, "Skipping malformed host event");
                None
            }
        };

        match signal {
            Some(signal) => {
                state.widget.handle_signal(&signal);
                applied += 1;
            }
            None => skipped += 1,
        }
    }

    Ok(format!(
        "Replayed {applied} events ({skipped} skipped), widget {}",
        visibility_label(state.widget.is_visible())
    ))
}

pub fn status(state: &HostState) -> String {
    let tracker = state.widget.tracker();
    let mut ids: Vec<&str> = tracker.tracked_ids().map(InteractionId::as_str).collect();
    ids.sort_unstable();

    let mut out = String::new();
    let _ = writeln!(out, "Widget:    {}", visibility_label(state.widget.is_visible()));
    let _ = writeln!(out, "Policy:    {}", tracker.policy().label());
    let _ = writeln!(
        out,
        "Filter:    {}{}",
        tracker.filter().media_type,
        tracker
            .filter()
            .direction
            .as_deref()
            .map(|d| format!(" / {d}"))
            .unwrap_or_default()
    );
    let _ = writeln!(out, "Tracking:  [{}]", ids.join(", "));
    let _ = writeln!(out, "Reference: {}", state.widget.token());
    let _ = write!(
        out,
        "Copied:    {}",
        if state.widget.is_success(Instant::now()) { "yes" } else { "no" }
    );
    out
}

pub fn show_settings(state: &HostState) -> String {
    let location = state
        .config_path
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(defaults)".to_string());
    format!(
        "Config file: {location}\n{:#?}",
        state.config
    )
}

pub fn exit() -> String {
    "Exiting...".to_string()
}
