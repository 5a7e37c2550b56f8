//! Hover highlight tracker: the state machine behind the sliding indicator.
//!
//! The tracker owns an ordered list of items, one of which is the default
//! target the indicator rests on. Pointer entry moves the indicator onto the
//! entered item immediately; leaving the whole collection schedules a delayed
//! return to the default target that any later event supersedes. The host
//! feeds events in through named methods (`focus_enter`, `collection_exit`,
//! `return_due`, `viewport_resized`) and applies the returned [`Placement`]
//! to the indicator element.
//!
//! Scheduled returns are identified by a [`ReturnToken`]. Every focus change
//! advances an internal epoch, so a timer that fires with a stale token is a
//! no-op. This replaces a shared mutable timer handle with plain data the
//! host can carry into its deferred callback.

#[cfg(test)]
#[path = "highlight_test.rs"]
mod highlight_test;

/// Delay before the indicator returns to the default target after the pointer
/// leaves the collection, in milliseconds.
pub const RETURN_DELAY_MS: u32 = 300;

/// Position and size of an item, in CSS pixels relative to the frame origin.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ItemBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// One selectable entry in the tracked collection.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackedItem {
    pub label: String,
    pub bounds: ItemBox,
}

/// Where the indicator must sit after an event: exactly one item's bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub index: usize,
    pub bounds: ItemBox,
}

/// Identifies one scheduled return-to-default. Stale tokens are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReturnToken(u64);

/// Tracks which item owns the highlight indicator.
#[derive(Debug, Clone)]
pub struct HighlightTracker {
    items: Vec<TrackedItem>,
    default_index: usize,
    active: Option<usize>,
    epoch: u64,
}

impl HighlightTracker {
    /// Build a tracker over `items`. The default target is the first item whose
    /// label contains `default_pattern` (case-insensitive, whitespace
    /// collapsed), falling back to the first item.
    ///
    /// Returns `None` for an empty collection; an absent anchor disables the
    /// widget rather than erroring.
    #[must_use]
    pub fn new(items: Vec<TrackedItem>, default_pattern: &str) -> Option<Self> {
        if items.is_empty() {
            return None;
        }
        let default_index = find_default(&items, default_pattern);
        Some(Self { items, default_index, active: None, epoch: 0 })
    }

    /// Placement applied immediately after construction: the default target.
    #[must_use]
    pub fn initial_placement(&self) -> Placement {
        self.placement_of(self.default_index)
    }

    /// Pointer entered the item at `index`. Cancels any pending return and
    /// moves the indicator onto the item. Out-of-range input is a no-op.
    pub fn focus_enter(&mut self, index: usize) -> Option<Placement> {
        if index >= self.items.len() {
            return None;
        }
        self.epoch += 1;
        self.active = Some(index);
        Some(self.placement_of(index))
    }

    /// Pointer left the whole collection. Supersedes any earlier pending
    /// return and hands back the token for the newly scheduled one.
    pub fn collection_exit(&mut self) -> ReturnToken {
        self.epoch += 1;
        ReturnToken(self.epoch)
    }

    /// A scheduled return fired. Moves the indicator back to the default
    /// target only if `token` is still the most recent schedule; a focus
    /// change or later exit in the meantime invalidates it.
    pub fn return_due(&mut self, token: ReturnToken) -> Option<Placement> {
        if token.0 != self.epoch {
            return None;
        }
        self.active = Some(self.default_index);
        Some(self.placement_of(self.default_index))
    }

    /// Viewport geometry changed. Resets the indicator to the default target
    /// unconditionally, regardless of prior hover state.
    pub fn viewport_resized(&mut self) -> Placement {
        self.active = Some(self.default_index);
        self.placement_of(self.default_index)
    }

    /// Replace the measured bounds of one item after a host re-measure.
    pub fn update_bounds(&mut self, index: usize, bounds: ItemBox) {
        if let Some(item) = self.items.get_mut(index) {
            item.bounds = bounds;
        }
    }

    /// Index of the item currently owning the indicator (the default target
    /// until the first focus event).
    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active.unwrap_or(self.default_index)
    }

    /// Whether `index` is the current target. True for exactly one index.
    #[must_use]
    pub fn is_active(&self, index: usize) -> bool {
        self.active_index() == index
    }

    /// Index of the default target.
    #[must_use]
    pub fn default_index(&self) -> usize {
        self.default_index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn placement_of(&self, index: usize) -> Placement {
        Placement { index, bounds: self.items[index].bounds }
    }
}

fn find_default(items: &[TrackedItem], pattern: &str) -> usize {
    let wanted = normalized(pattern);
    items
        .iter()
        .position(|item| !wanted.is_empty() && normalized(&item.label).contains(&wanted))
        .unwrap_or(0)
}

/// Lowercase and collapse runs of whitespace so label matching tolerates
/// markup formatting differences.
fn normalized(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase()
}
