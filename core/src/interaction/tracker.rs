//! Interaction tracker
//!
//! Keeps the set of interactions a widget cares about and derives visibility
//! from its occupancy. Visibility is level-triggered: it follows whether the
//! set is non-empty, not which event arrived last, so overlapping interactions
//! keep the widget up until the last one ends.

use std::collections::HashSet;

use refwidget_types::{InteractionFilter, InteractionId, TrackingConfig, TrackingPolicy};

use super::{InteractionHandler, InteractionSignal};

/// Visibility edge produced by a single lifecycle event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityChange {
    Shown,
    Hidden,
    Unchanged,
}

#[derive(Debug, Clone, Default)]
pub struct InteractionTracker {
    policy: TrackingPolicy,
    filter: InteractionFilter,
    tracked: HashSet<InteractionId>,
}

impl InteractionTracker {
    pub fn new(config: TrackingConfig) -> Self {
        Self {
            policy: config.policy,
            filter: config.filter,
            tracked: HashSet::new(),
        }
    }

    pub fn single_slot(filter: InteractionFilter) -> Self {
        Self::new(TrackingConfig {
            policy: TrackingPolicy::SingleSlot,
            filter,
        })
    }

    pub fn multi_slot(filter: InteractionFilter) -> Self {
        Self::new(TrackingConfig {
            policy: TrackingPolicy::MultiSlot,
            filter,
        })
    }

    pub fn policy(&self) -> TrackingPolicy {
        self.policy
    }

    pub fn filter(&self) -> &InteractionFilter {
        &self.filter
    }

    /// Start tracking `id` if it passes the filter and the policy has room.
    ///
    /// Single-slot trackers keep the first id they accepted; later assignments
    /// are dropped until it ends. Re-assigning an already tracked id is a no-op.
    pub fn on_assigned(
        &mut self,
        id: &InteractionId,
        media_type: Option<&str>,
        direction: Option<&str>,
    ) -> VisibilityChange {
        if !self.filter.matches(media_type, direction) {
            tracing::debug!(
                interaction_id = %id,
                media_type = media_type.unwrap_or(""),
                direction = direction.unwrap_or(""),
                "Ignoring assignment outside filter"
            );
            return VisibilityChange::Unchanged;
        }

        if self.tracked.contains(id) {
            return VisibilityChange::Unchanged;
        }

        if self.policy == TrackingPolicy::SingleSlot && !self.tracked.is_empty() {
            tracing::debug!(
                interaction_id = %id,
                "Single slot occupied, ignoring assignment"
            );
            return VisibilityChange::Unchanged;
        }

        let was_visible = self.is_visible();
        self.tracked.insert(id.clone());
        tracing::debug!(interaction_id = %id, tracked = self.tracked.len(), "Tracking interaction");

        if was_visible {
            VisibilityChange::Unchanged
        } else {
            tracing::info!(interaction_id = %id, "Widget shown");
            VisibilityChange::Shown
        }
    }

    /// Stop tracking `id`. Ids that were never tracked are ignored.
    pub fn on_ended(&mut self, id: &InteractionId) -> VisibilityChange {
        if !self.tracked.remove(id) {
            tracing::debug!(interaction_id = %id, "Ignoring end of untracked interaction");
            return VisibilityChange::Unchanged;
        }

        tracing::debug!(interaction_id = %id, tracked = self.tracked.len(), "Interaction ended");

        if self.tracked.is_empty() {
            tracing::info!(interaction_id = %id, "Widget hidden");
            VisibilityChange::Hidden
        } else {
            VisibilityChange::Unchanged
        }
    }

    pub fn is_visible(&self) -> bool {
        !self.tracked.is_empty()
    }

    pub fn is_tracking(&self, id: &InteractionId) -> bool {
        self.tracked.contains(id)
    }

    pub fn tracked_count(&self) -> usize {
        self.tracked.len()
    }

    /// Tracked ids in no particular order.
    pub fn tracked_ids(&self) -> impl Iterator<Item = &InteractionId> {
        self.tracked.iter()
    }

    /// Apply a signal and report the resulting visibility edge.
    pub fn apply(&mut self, signal: &InteractionSignal) -> VisibilityChange {
        match signal {
            InteractionSignal::Assigned {
                id,
                media_type,
                direction,
            } => self.on_assigned(id, media_type.as_deref(), direction.as_deref()),
            InteractionSignal::Ended { id } => self.on_ended(id),
        }
    }
}

impl InteractionHandler for InteractionTracker {
    fn handle_signal(&mut self, signal: &InteractionSignal) {
        self.apply(signal);
    }
}
