//! Click-to-track / click-again-for-details state machine.
//!
//! Pure bookkeeping driven by explicit timestamps, so it can be exercised
//! without the engine. Per satellite: Idle -> Tracked on the first click,
//! Tracked -> DetailRequested on a second click inside the window,
//! Tracked -> Idle when the window runs out. DetailRequested holds until the
//! detail view is dismissed.

use std::collections::BTreeMap;

use orbital_core::enums::SelectionState;
use orbital_core::events::InteractionEvent;

#[derive(Debug, Clone, Copy)]
struct ClickEntry {
    state: SelectionState,
    /// Host time of the click that entered `Tracked`.
    since_ms: f64,
}

/// Selection bookkeeping for the whole fleet.
#[derive(Debug, Clone)]
pub struct ClickTracker {
    window_ms: f64,
    /// Satellites not in here are `Idle`. Ordered for deterministic events.
    entries: BTreeMap<String, ClickEntry>,
    /// Highlighted satellite. Survives window expiry.
    tracked: Option<String>,
    /// Satellite whose detail view is open.
    details: Option<String>,
}

impl ClickTracker {
    pub fn new(window_ms: f64) -> Self {
        Self {
            window_ms: window_ms.max(0.0),
            entries: BTreeMap::new(),
            tracked: None,
            details: None,
        }
    }

    pub fn window_ms(&self) -> f64 {
        self.window_ms
    }

    pub fn tracked(&self) -> Option<&str> {
        self.tracked.as_deref()
    }

    pub fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }

    pub fn state_of(&self, id: &str) -> SelectionState {
        self.entries
            .get(id)
            .map(|entry| entry.state)
            .unwrap_or(SelectionState::Idle)
    }

    /// Reset every `Tracked` entry whose window has elapsed at `now_ms`.
    pub fn expire(&mut self, now_ms: f64) -> Vec<InteractionEvent> {
        let window_ms = self.window_ms;
        let mut events = Vec::new();
        self.entries.retain(|id, entry| {
            let expired =
                entry.state == SelectionState::Tracked && now_ms - entry.since_ms > window_ms;
            if expired {
                events.push(InteractionEvent::ClickWindowExpired { id: id.clone() });
            }
            !expired
        });
        events
    }

    /// Register a click at `now_ms`. `hit` is the satellite under the
    /// pointer, or `None` for empty space.
    ///
    /// Clicks are ignored while a detail view is open.
    pub fn click(&mut self, hit: Option<&str>, now_ms: f64) -> Vec<InteractionEvent> {
        if self.details.is_some() {
            return Vec::new();
        }

        let mut events = self.expire(now_ms);

        let Some(id) = hit else {
            self.entries.clear();
            if self.tracked.take().is_some() {
                events.push(InteractionEvent::Deselected);
            }
            return events;
        };

        match self.state_of(id) {
            SelectionState::Idle => {
                self.entries.insert(
                    id.to_string(),
                    ClickEntry {
                        state: SelectionState::Tracked,
                        since_ms: now_ms,
                    },
                );
                self.tracked = Some(id.to_string());
                events.push(InteractionEvent::Tracked { id: id.to_string() });
            }
            SelectionState::Tracked => {
                self.entries.insert(
                    id.to_string(),
                    ClickEntry {
                        state: SelectionState::DetailRequested,
                        since_ms: now_ms,
                    },
                );
                self.tracked = Some(id.to_string());
                self.details = Some(id.to_string());
                events.push(InteractionEvent::DetailsRequested { id: id.to_string() });
            }
            // Unreachable while `details` guards clicks.
            SelectionState::DetailRequested => {}
        }

        events
    }

    /// Close the detail view. With `keep_tracking` the satellite returns to
    /// `Tracked` with a fresh window; otherwise it returns to `Idle` and is
    /// no longer highlighted.
    pub fn dismiss(&mut self, keep_tracking: bool, now_ms: f64) -> Option<InteractionEvent> {
        let id = self.details.take()?;
        if keep_tracking {
            self.entries.insert(
                id.clone(),
                ClickEntry {
                    state: SelectionState::Tracked,
                    since_ms: now_ms,
                },
            );
            self.tracked = Some(id.clone());
        } else {
            self.entries.remove(&id);
            if self.tracked.as_deref() == Some(id.as_str()) {
                self.tracked = None;
            }
        }
        Some(InteractionEvent::DetailsDismissed { id })
    }

    /// Drop all state for a satellite that left the fleet.
    pub fn forget(&mut self, id: &str) {
        self.entries.remove(id);
        if self.tracked.as_deref() == Some(id) {
            self.tracked = None;
        }
        if self.details.as_deref() == Some(id) {
            self.details = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orbital_core::constants::CLICK_WINDOW_MS;

    #[test]
    fn test_double_click_within_window_requests_details() {
        let mut tracker = ClickTracker::new(CLICK_WINDOW_MS);
        assert_eq!(tracker.state_of("sat-1"), SelectionState::Idle);

        let events = tracker.click(Some("sat-1"), 0.0);
        assert_eq!(events, vec![InteractionEvent::Tracked { id: "sat-1".into() }]);
        assert_eq!(tracker.state_of("sat-1"), SelectionState::Tracked);
        assert_eq!(tracker.tracked(), Some("sat-1"));

        let events = tracker.click(Some("sat-1"), 2500.0);
        assert_eq!(events, vec![InteractionEvent::DetailsRequested { id: "sat-1".into() }]);
        assert_eq!(tracker.state_of("sat-1"), SelectionState::DetailRequested);
        assert_eq!(tracker.details(), Some("sat-1"));
    }

    #[test]
    fn test_window_edge_is_inclusive() {
        let mut tracker = ClickTracker::new(CLICK_WINDOW_MS);
        tracker.click(Some("sat-1"), 1000.0);
        tracker.click(Some("sat-1"), 4000.0);
        assert_eq!(tracker.state_of("sat-1"), SelectionState::DetailRequested);
    }

    #[test]
    fn test_slow_second_click_tracks_again() {
        let mut tracker = ClickTracker::new(CLICK_WINDOW_MS);
        tracker.click(Some("sat-1"), 0.0);

        let events = tracker.click(Some("sat-1"), 4000.0);
        assert_eq!(
            events,
            vec![
                InteractionEvent::ClickWindowExpired { id: "sat-1".into() },
                InteractionEvent::Tracked { id: "sat-1".into() },
            ]
        );
        assert_eq!(tracker.state_of("sat-1"), SelectionState::Tracked);
        assert_eq!(tracker.details(), None);
    }

    #[test]
    fn test_expiry_keeps_highlight() {
        let mut tracker = ClickTracker::new(CLICK_WINDOW_MS);
        tracker.click(Some("sat-1"), 0.0);

        assert!(tracker.expire(3000.0).is_empty());
        let events = tracker.expire(3000.5);
        assert_eq!(events, vec![InteractionEvent::ClickWindowExpired { id: "sat-1".into() }]);
        assert_eq!(tracker.state_of("sat-1"), SelectionState::Idle);
        assert_eq!(tracker.tracked(), Some("sat-1"));
    }

    #[test]
    fn test_click_on_empty_space_deselects() {
        let mut tracker = ClickTracker::new(CLICK_WINDOW_MS);
        tracker.click(Some("sat-1"), 0.0);
        tracker.click(Some("sat-2"), 100.0);

        let events = tracker.click(None, 200.0);
        assert_eq!(events, vec![InteractionEvent::Deselected]);
        assert_eq!(tracker.tracked(), None);
        assert_eq!(tracker.state_of("sat-1"), SelectionState::Idle);
        assert_eq!(tracker.state_of("sat-2"), SelectionState::Idle);

        assert!(tracker.click(None, 300.0).is_empty());
    }

    #[test]
    fn test_counters_are_per_satellite() {
        let mut tracker = ClickTracker::new(CLICK_WINDOW_MS);
        tracker.click(Some("sat-1"), 0.0);
        let events = tracker.click(Some("sat-2"), 500.0);
        assert_eq!(events, vec![InteractionEvent::Tracked { id: "sat-2".into() }]);
        assert_eq!(tracker.tracked(), Some("sat-2"));
        assert_eq!(tracker.state_of("sat-1"), SelectionState::Tracked);
    }

    #[test]
    fn test_details_block_clicks_until_dismissed() {
        let mut tracker = ClickTracker::new(CLICK_WINDOW_MS);
        tracker.click(Some("sat-1"), 0.0);
        tracker.click(Some("sat-1"), 100.0);

        assert!(tracker.click(Some("sat-2"), 200.0).is_empty());
        assert!(tracker.click(None, 300.0).is_empty());
        // Terminal: expiry does not touch DetailRequested.
        assert!(tracker.expire(100_000.0).is_empty());
        assert_eq!(tracker.state_of("sat-1"), SelectionState::DetailRequested);

        let event = tracker.dismiss(true, 100_000.0);
        assert_eq!(event, Some(InteractionEvent::DetailsDismissed { id: "sat-1".into() }));
        assert_eq!(tracker.state_of("sat-1"), SelectionState::Tracked);
        assert_eq!(tracker.tracked(), Some("sat-1"));
    }

    #[test]
    fn test_dismiss_to_idle() {
        let mut tracker = ClickTracker::new(CLICK_WINDOW_MS);
        tracker.click(Some("sat-1"), 0.0);
        tracker.click(Some("sat-1"), 100.0);
        tracker.dismiss(false, 200.0);
        assert_eq!(tracker.state_of("sat-1"), SelectionState::Idle);
        assert_eq!(tracker.tracked(), None);
        assert_eq!(tracker.details(), None);
        assert_eq!(tracker.dismiss(false, 300.0), None);
    }

    #[test]
    fn test_forget_clears_references() {
        let mut tracker = ClickTracker::new(CLICK_WINDOW_MS);
        tracker.click(Some("sat-1"), 0.0);
        tracker.click(Some("sat-1"), 100.0);
        tracker.forget("sat-1");
        assert_eq!(tracker.tracked(), None);
        assert_eq!(tracker.details(), None);
        assert_eq!(tracker.state_of("sat-1"), SelectionState::Idle);
        // Clicks work again once the detail view is gone.
        assert_eq!(tracker.click(Some("sat-2"), 200.0).len(), 1);
    }
}
