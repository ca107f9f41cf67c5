/// Selection state machine: decides when the popover appears and disappears

/// The two states the controller can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No popover shown, no captured text.
    Idle,
    /// Popover shown for the captured text.
    Showing,
}

/// What the controller should do after a pointer-release event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseAction {
    /// The release landed inside the popover; leave everything alone.
    Ignore,
    /// No qualifying selection; tear the popover down.
    Dismiss,
    /// A qualifying selection was captured; rebuild the popover for it.
    Show,
}

/// Tracks the captured selection text.
///
/// The popover element's existence must mirror this tracker: the controller
/// holds the overlay handle exactly while the tracker is `Showing`, so the
/// "at most one popover, and only with non-empty text" invariant follows
/// from keeping the two in lockstep.
#[derive(Debug, Default)]
pub struct SelectionTracker {
    text: String,
}

/// A selection qualifies when it stringifies to something non-whitespace.
fn qualifies(raw: &str) -> bool {
    !raw.trim().is_empty()
}

impl SelectionTracker {
    pub fn new() -> SelectionTracker {
        SelectionTracker::default()
    }

    /// The captured selection text, verbatim as the page reported it.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn phase(&self) -> Phase {
        if self.text.is_empty() {
            Phase::Idle
        } else {
            Phase::Showing
        }
    }

    /// Handle a pointer release anywhere in the document.
    ///
    /// Releases inside the popover are ignored so the popover cannot dismiss
    /// itself. Otherwise the current selection decides: a non-whitespace
    /// selection is captured (untrimmed) and shown, anything else resets to
    /// `Idle`.
    pub fn on_pointer_release(&mut self, inside_overlay: bool, raw: &str) -> ReleaseAction {
        if inside_overlay {
            return ReleaseAction::Ignore;
        }

        if qualifies(raw) {
            self.text = raw.to_string();
            ReleaseAction::Show
        } else {
            self.text.clear();
            ReleaseAction::Dismiss
        }
    }

    /// Coarse invalidation: scroll, visibility change, key press, resize,
    /// or the copy action. The anchor rectangle may be stale, so the safe
    /// policy is to always dismiss rather than reposition.
    pub fn dismiss(&mut self) {
        self.text.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_idle() {
        let tracker = SelectionTracker::new();

        assert_eq!(tracker.phase(), Phase::Idle);
        assert_eq!(tracker.text(), "");
    }

    #[test]
    fn test_qualifying_selection_shows() {
        let mut tracker = SelectionTracker::new();

        let action = tracker.on_pointer_release(false, "hello world");

        assert_eq!(action, ReleaseAction::Show);
        assert_eq!(tracker.phase(), Phase::Showing);
        assert_eq!(tracker.text(), "hello world");
    }

    #[test]
    fn test_captured_text_is_not_trimmed() {
        let mut tracker = SelectionTracker::new();

        let action = tracker.on_pointer_release(false, "  padded  ");

        // The trim applies to the qualification check only
        assert_eq!(action, ReleaseAction::Show);
        assert_eq!(tracker.text(), "  padded  ");
    }

    #[test]
    fn test_empty_selection_dismisses() {
        let mut tracker = SelectionTracker::new();
        tracker.on_pointer_release(false, "hello");

        let action = tracker.on_pointer_release(false, "");

        assert_eq!(action, ReleaseAction::Dismiss);
        assert_eq!(tracker.phase(), Phase::Idle);
        assert_eq!(tracker.text(), "");
    }

    #[test]
    fn test_whitespace_only_selection_dismisses() {
        let mut tracker = SelectionTracker::new();

        let action = tracker.on_pointer_release(false, " \n\t ");

        assert_eq!(action, ReleaseAction::Dismiss);
        assert_eq!(tracker.phase(), Phase::Idle);
    }

    #[test]
    fn test_release_inside_overlay_is_ignored() {
        let mut tracker = SelectionTracker::new();
        tracker.on_pointer_release(false, "hello");

        // Whatever the live selection says, a click inside the popover
        // must not change anything
        let action = tracker.on_pointer_release(true, "");

        assert_eq!(action, ReleaseAction::Ignore);
        assert_eq!(tracker.phase(), Phase::Showing);
        assert_eq!(tracker.text(), "hello");
    }

    #[test]
    fn test_new_selection_replaces_old() {
        let mut tracker = SelectionTracker::new();
        tracker.on_pointer_release(false, "first");

        let action = tracker.on_pointer_release(false, "second");

        assert_eq!(action, ReleaseAction::Show);
        assert_eq!(tracker.text(), "second");
    }

    #[test]
    fn test_dismiss_clears_text() {
        let mut tracker = SelectionTracker::new();
        tracker.on_pointer_release(false, "hello");

        tracker.dismiss();

        assert_eq!(tracker.phase(), Phase::Idle);
        assert_eq!(tracker.text(), "");
    }

    #[test]
    fn test_dismiss_from_idle_is_a_no_op() {
        let mut tracker = SelectionTracker::new();

        tracker.dismiss();
        tracker.dismiss();

        assert_eq!(tracker.phase(), Phase::Idle);
        assert_eq!(tracker.text(), "");
    }

    #[test]
    fn test_phase_mirrors_text_across_event_sequences() {
        let mut tracker = SelectionTracker::new();

        let releases = [
            (false, "alpha"),
            (true, ""),
            (false, "   "),
            (false, "beta"),
            (false, "gamma"),
            (true, "stale"),
            (false, ""),
        ];

        for (inside, raw) in releases {
            tracker.on_pointer_release(inside, raw);
            assert_eq!(tracker.text().is_empty(), tracker.phase() == Phase::Idle);
        }

        tracker.dismiss();
        assert_eq!(tracker.phase(), Phase::Idle);
    }
}
