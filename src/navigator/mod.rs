//! Wheel-driven single-step navigation.
//!
//! [`StepNavigator`] turns a stream of wheel deltas into discrete
//! advance/retreat steps. Deltas accumulate until they cross a threshold, one
//! step commits, and a cooldown lock swallows the rest of the gesture. The
//! focused item is kept centered in a [`ScrollViewport`].

mod cooldown;
mod tier;
mod viewport;

#[cfg(test)]
pub use cooldown::ManualClock;
pub use cooldown::{Clock, Cooldown, SystemClock};
pub use tier::VisualTier;
pub use viewport::{ListViewport, ScrollViewport, centered_offset};

use std::time::Duration;

/// Accumulated wheel delta needed to commit one step
pub const STEP_THRESHOLD: f64 = 40.0;
/// Lock duration after a committed step
pub const RELEASE_DELAY: Duration = Duration::from_millis(350);

/// Entry in a navigable list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationItem {
    pub id: String,
    pub label: String,
}

impl NavigationItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Tunables for a [`StepNavigator`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepSettings {
    pub step_threshold: f64,
    pub cooldown: Duration,
    /// Height of one item in viewport units
    pub item_extent: f64,
}

impl Default for StepSettings {
    fn default() -> Self {
        Self {
            step_threshold: STEP_THRESHOLD,
            cooldown: RELEASE_DELAY,
            item_extent: 1.0,
        }
    }
}

/// Result of feeding one wheel event to the navigator.
///
/// Every outcome means the event was consumed; the host should not apply it
/// anywhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelOutcome {
    /// No items to navigate
    Ignored,
    /// Cooldown active, delta discarded
    Suppressed,
    /// Delta added, threshold not reached
    Accumulated,
    /// One step committed, focus moved to `index`
    Stepped { index: usize },
}

/// Wraps a signed candidate index into `0..count`.
///
/// Only steps of one are expected: anything below zero lands on the last item
/// and anything past the end lands on the first. Returns `None` for an empty
/// list.
#[must_use]
pub fn wrap_index(candidate: isize, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    if candidate < 0 {
        Some(count - 1)
    } else if candidate as usize >= count {
        Some(0)
    } else {
        Some(candidate as usize)
    }
}

type SelectionHandler = Box<dyn FnMut(&NavigationItem)>;

/// Focus controller for a list navigated one item at a time
pub struct StepNavigator<V: ScrollViewport, C: Clock = SystemClock> {
    items: Vec<NavigationItem>,
    focused_index: Option<usize>,
    accumulated_delta: f64,
    cooldown: Cooldown<C>,
    settings: StepSettings,
    viewport: V,
    on_select: Option<SelectionHandler>,
}

impl<V: ScrollViewport> StepNavigator<V, SystemClock> {
    pub fn new(
        items: Vec<NavigationItem>,
        active_id: Option<&str>,
        settings: StepSettings,
        viewport: V,
    ) -> Self {
        Self::with_clock(items, active_id, settings, viewport, SystemClock)
    }
}

impl<V: ScrollViewport, C: Clock> StepNavigator<V, C> {
    pub fn with_clock(
        items: Vec<NavigationItem>,
        active_id: Option<&str>,
        settings: StepSettings,
        viewport: V,
        clock: C,
    ) -> Self {
        let mut navigator = Self {
            items: Vec::new(),
            focused_index: None,
            accumulated_delta: 0.0,
            cooldown: Cooldown::new(clock, settings.cooldown),
            settings,
            viewport,
            on_select: None,
        };
        navigator.configure(items, active_id);
        navigator
    }

    /// Registers the handler called with every committed selection
    pub fn on_select(&mut self, handler: impl FnMut(&NavigationItem) + 'static) {
        self.on_select = Some(Box::new(handler));
    }

    /// Replaces the item list and resolves focus from `active_id`.
    ///
    /// An unknown or missing id focuses the first item. This reflects an
    /// external change, so the selection handler is not called.
    pub fn configure(&mut self, items: Vec<NavigationItem>, active_id: Option<&str>) {
        let resolved = active_id.and_then(|id| items.iter().position(|item| item.id == id));
        if active_id.is_some() && resolved.is_none() {
            log::debug!("active id {:?} not in navigator items, focusing first", active_id);
        }
        self.focused_index = if items.is_empty() {
            None
        } else {
            Some(resolved.unwrap_or(0))
        };
        self.items = items;
        self.scroll_to_focus();
    }

    /// Feeds one wheel event. Positive deltas advance, negative deltas retreat.
    pub fn on_wheel(&mut self, delta_y: f64) -> WheelOutcome {
        self.tick();

        if !delta_y.is_finite() {
            log::debug!("ignoring non-finite wheel delta {}", delta_y);
            return WheelOutcome::Ignored;
        }

        let Some(focused) = self.focused_index else {
            return WheelOutcome::Ignored;
        };
        if self.is_locked() {
            return WheelOutcome::Suppressed;
        }

        self.accumulated_delta += delta_y;
        if self.accumulated_delta.abs() < self.settings.step_threshold {
            return WheelOutcome::Accumulated;
        }

        let direction: isize = if self.accumulated_delta > 0.0 { 1 } else { -1 };
        self.accumulated_delta = 0.0;
        self.cooldown.arm();

        let Some(index) = wrap_index(focused as isize + direction, self.items.len()) else {
            return WheelOutcome::Ignored;
        };
        log::debug!("wheel step {:+} -> index {}", direction, index);
        self.commit(index);
        WheelOutcome::Stepped { index }
    }

    /// Focuses `index` directly, ignoring threshold and lock.
    ///
    /// Returns false when `index` is out of range.
    pub fn on_item_activate(&mut self, index: usize) -> bool {
        if index >= self.items.len() {
            log::debug!("ignoring activation of index {} ({} items)", index, self.items.len());
            return false;
        }
        self.commit(index);
        true
    }

    /// Re-centers the focused item, e.g. after the viewport was (re)mounted
    pub fn resync_scroll(&mut self) {
        self.scroll_to_focus();
    }

    /// Releases the lock once the cooldown has elapsed
    pub fn tick(&mut self) {
        if self.cooldown.fire_if_due() {
            log::trace!("navigator unlocked");
        }
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.cooldown.is_armed()
    }

    #[must_use]
    pub fn focused_index(&self) -> Option<usize> {
        self.focused_index
    }

    #[must_use]
    pub fn focused_item(&self) -> Option<&NavigationItem> {
        self.focused_index.and_then(|index| self.items.get(index))
    }

    #[must_use]
    pub fn items(&self) -> &[NavigationItem] {
        &self.items
    }

    #[must_use]
    pub fn accumulated_delta(&self) -> f64 {
        self.accumulated_delta
    }

    #[must_use]
    pub fn settings(&self) -> &StepSettings {
        &self.settings
    }

    /// Emphasis for the item at `index`; `None` when nothing is focused
    #[must_use]
    pub fn tier(&self, index: usize) -> Option<VisualTier> {
        self.focused_index
            .map(|focused| VisualTier::for_index(index, focused))
    }

    #[must_use]
    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut V {
        &mut self.viewport
    }

    fn commit(&mut self, index: usize) {
        self.focused_index = Some(index);
        if let (Some(handler), Some(item)) = (self.on_select.as_mut(), self.items.get(index)) {
            handler(item);
        }
        self.scroll_to_focus();
    }

    fn scroll_to_focus(&mut self) {
        let Some(index) = self.focused_index else {
            return;
        };
        match self.viewport.measure() {
            Some(viewport) => {
                let offset = centered_offset(index, self.settings.item_extent, viewport.extent);
                self.viewport.scroll_to(offset, true);
            }
            None => log::debug!("viewport not mounted, skipping scroll to {}", index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::viewport::Viewport;
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Default)]
    struct FakeViewport {
        extent: Option<f64>,
        scrolls: Vec<(f64, bool)>,
    }

    impl FakeViewport {
        fn mounted(extent: f64) -> Self {
            Self {
                extent: Some(extent),
                scrolls: Vec::new(),
            }
        }
    }

    impl ScrollViewport for FakeViewport {
        fn measure(&self) -> Option<Viewport> {
            self.extent.map(|extent| Viewport {
                offset: 0.0,
                extent,
            })
        }

        fn scroll_to(&mut self, offset: f64, animated: bool) {
            self.scrolls.push((offset, animated));
        }
    }

    fn items(ids: &[&str]) -> Vec<NavigationItem> {
        ids.iter()
            .map(|id| NavigationItem::new(*id, id.to_uppercase()))
            .collect()
    }

    struct Harness {
        navigator: StepNavigator<FakeViewport, ManualClock>,
        clock: ManualClock,
        selected: Rc<RefCell<Vec<String>>>,
    }

    fn harness(ids: &[&str], active_id: Option<&str>) -> Harness {
        harness_with_viewport(ids, active_id, FakeViewport::mounted(4.0))
    }

    fn harness_with_viewport(ids: &[&str], active_id: Option<&str>, viewport: FakeViewport) -> Harness {
        let clock = ManualClock::new();
        let mut navigator = StepNavigator::with_clock(
            items(ids),
            active_id,
            StepSettings::default(),
            viewport,
            clock.clone(),
        );
        let selected = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&selected);
        navigator.on_select(move |item| sink.borrow_mut().push(item.id.clone()));
        Harness {
            navigator,
            clock,
            selected,
        }
    }

    #[test]
    fn test_wrap_index() {
        assert_eq!(wrap_index(-1, 4), Some(3));
        assert_eq!(wrap_index(4, 4), Some(0));
        assert_eq!(wrap_index(2, 4), Some(2));
        assert_eq!(wrap_index(1, 1), Some(0));
        assert_eq!(wrap_index(-1, 1), Some(0));
        assert_eq!(wrap_index(0, 0), None);
    }

    #[test]
    fn test_configure_resolves_active_id() {
        let h = harness(&["a", "b", "c"], Some("c"));
        assert_eq!(h.navigator.focused_index(), Some(2));
        assert!(h.selected.borrow().is_empty());
    }

    #[test]
    fn test_configure_unknown_id_defaults_to_first() {
        let h = harness(&["a", "b", "c"], Some("zzz"));
        assert_eq!(h.navigator.focused_index(), Some(0));

        let h = harness(&["a", "b"], None);
        assert_eq!(h.navigator.focused_index(), Some(0));
    }

    #[test]
    fn test_configure_is_idempotent() {
        let mut h = harness(&["a", "b", "c"], Some("b"));
        h.navigator.configure(items(&["a", "b", "c"]), Some("b"));
        assert_eq!(h.navigator.focused_index(), Some(1));
        assert!(h.selected.borrow().is_empty());
    }

    #[test]
    fn test_small_deltas_accumulate_into_one_step() {
        let mut h = harness(&["a", "b", "c", "d"], None);
        assert_eq!(h.navigator.on_wheel(15.0), WheelOutcome::Accumulated);
        assert_eq!(h.navigator.on_wheel(15.0), WheelOutcome::Accumulated);
        assert!(h.selected.borrow().is_empty());

        assert_eq!(h.navigator.on_wheel(15.0), WheelOutcome::Stepped { index: 1 });
        assert_eq!(h.navigator.focused_index(), Some(1));
        assert_eq!(*h.selected.borrow(), vec!["b".to_string()]);
        assert_eq!(h.navigator.accumulated_delta(), 0.0);
        assert!(h.navigator.is_locked());
    }

    #[test]
    fn test_below_threshold_never_moves() {
        let mut h = harness(&["a", "b", "c"], None);
        for delta in [10.0, 10.0, -5.0, 20.0] {
            h.navigator.on_wheel(delta);
        }
        assert_eq!(h.navigator.accumulated_delta(), 35.0);
        assert_eq!(h.navigator.focused_index(), Some(0));
        assert!(h.selected.borrow().is_empty());
        assert!(!h.navigator.is_locked());
    }

    #[test]
    fn test_negative_delta_wraps_to_last() {
        let mut h = harness(&["a", "b", "c"], None);
        assert_eq!(h.navigator.on_wheel(-50.0), WheelOutcome::Stepped { index: 2 });
        assert_eq!(*h.selected.borrow(), vec!["c".to_string()]);
    }

    #[test]
    fn test_advance_from_last_wraps_to_first() {
        let mut h = harness(&["a", "b", "c"], Some("c"));
        assert_eq!(h.navigator.on_wheel(40.0), WheelOutcome::Stepped { index: 0 });
        assert_eq!(*h.selected.borrow(), vec!["a".to_string()]);
    }

    #[test]
    fn test_overshoot_still_moves_one_step() {
        let mut h = harness(&["a", "b", "c", "d"], None);
        assert_eq!(h.navigator.on_wheel(500.0), WheelOutcome::Stepped { index: 1 });
    }

    #[test]
    fn test_lock_suppresses_until_cooldown_elapses() {
        let mut h = harness(&["a", "b", "c", "d"], None);
        h.navigator.on_wheel(40.0);

        h.clock.advance(Duration::from_millis(349));
        assert_eq!(h.navigator.on_wheel(100.0), WheelOutcome::Suppressed);
        assert_eq!(h.navigator.focused_index(), Some(1));
        assert_eq!(h.navigator.accumulated_delta(), 0.0);

        h.clock.advance(Duration::from_millis(1));
        assert_eq!(h.navigator.on_wheel(40.0), WheelOutcome::Stepped { index: 2 });
        assert_eq!(
            *h.selected.borrow(),
            vec!["b".to_string(), "c".to_string()]
        );
    }

    #[test]
    fn test_tick_releases_lock() {
        let mut h = harness(&["a", "b"], None);
        h.navigator.on_wheel(-40.0);
        assert!(h.navigator.is_locked());
        h.clock.advance(RELEASE_DELAY);
        h.navigator.tick();
        assert!(!h.navigator.is_locked());
    }

    #[test]
    fn test_single_item_still_notifies() {
        let mut h = harness(&["only"], None);
        assert_eq!(h.navigator.on_wheel(45.0), WheelOutcome::Stepped { index: 0 });
        h.clock.advance(RELEASE_DELAY);
        assert_eq!(h.navigator.on_wheel(-45.0), WheelOutcome::Stepped { index: 0 });
        assert_eq!(h.navigator.focused_index(), Some(0));
        assert_eq!(h.selected.borrow().len(), 2);
    }

    #[test]
    fn test_empty_list_is_inert() {
        let mut h = harness(&[], Some("a"));
        assert_eq!(h.navigator.on_wheel(100.0), WheelOutcome::Ignored);
        assert!(!h.navigator.on_item_activate(0));
        assert_eq!(h.navigator.focused_index(), None);
        assert_eq!(h.navigator.tier(0), None);
        assert!(h.selected.borrow().is_empty());
    }

    #[test]
    fn test_activate_bypasses_lock_without_clearing_it() {
        let mut h = harness(&["a", "b", "c", "d"], None);
        h.navigator.on_wheel(40.0);
        assert!(h.navigator.on_item_activate(3));
        assert_eq!(h.navigator.focused_index(), Some(3));
        assert!(h.navigator.is_locked());
        assert_eq!(h.navigator.on_wheel(40.0), WheelOutcome::Suppressed);
        assert_eq!(
            *h.selected.borrow(),
            vec!["b".to_string(), "d".to_string()]
        );
    }

    #[test]
    fn test_activate_keeps_accumulated_delta() {
        let mut h = harness(&["a", "b", "c"], None);
        h.navigator.on_wheel(25.0);
        h.navigator.on_item_activate(2);
        assert_eq!(h.navigator.accumulated_delta(), 25.0);
        assert_eq!(h.navigator.on_wheel(15.0), WheelOutcome::Stepped { index: 0 });
    }

    #[test]
    fn test_activate_out_of_range_is_ignored() {
        let mut h = harness(&["a", "b"], Some("b"));
        assert!(!h.navigator.on_item_activate(7));
        assert_eq!(h.navigator.focused_index(), Some(1));
        assert!(h.selected.borrow().is_empty());
    }

    #[test]
    fn test_focus_stays_in_range_after_mixed_input() {
        let mut h = harness(&["a", "b", "c", "d", "e"], None);
        let deltas = [60.0, -10.0, -70.0, 33.0, 9.0, -120.0, 41.0, 5.0];
        for (step, delta) in deltas.iter().enumerate() {
            h.navigator.on_wheel(*delta);
            if step % 2 == 0 {
                h.clock.advance(RELEASE_DELAY);
            }
            let focused = h.navigator.focused_index();
            assert!(focused.is_some_and(|index| index < 5));
        }
    }

    #[test]
    fn test_replacing_items_reclamps_focus() {
        let mut h = harness(&["a", "b", "c", "d"], Some("d"));
        h.navigator.configure(items(&["x", "y"]), Some("d"));
        assert_eq!(h.navigator.focused_index(), Some(0));
        h.navigator.configure(Vec::new(), None);
        assert_eq!(h.navigator.focused_index(), None);
        assert!(h.navigator.focused_item().is_none());
    }

    #[test]
    fn test_focus_changes_scroll_to_center() {
        let mut h = harness(&["a", "b", "c", "d", "e", "f"], None);
        h.navigator.on_item_activate(4);
        // index 4, item extent 1, viewport extent 4: 4 - 2 + 0.5
        assert_eq!(h.navigator.viewport().scrolls.last(), Some(&(2.5, true)));
    }

    #[test]
    fn test_configure_scrolls_to_active_item() {
        let h = harness(&["a", "b", "c", "d", "e", "f"], Some("e"));
        assert_eq!(h.navigator.viewport().scrolls.last(), Some(&(2.5, true)));

        let mut h = harness(&["a", "b", "c", "d", "e", "f"], None);
        h.navigator.configure(items(&["a", "b", "c", "d", "e", "f"]), Some("e"));
        assert_eq!(h.navigator.viewport().scrolls.last(), Some(&(2.5, true)));
        assert!(h.selected.borrow().is_empty());
    }

    #[test]
    fn test_resync_scroll_recenters_after_mount() {
        let mut h = harness_with_viewport(&["a", "b", "c", "d", "e"], Some("d"), FakeViewport::default());
        assert!(h.navigator.viewport().scrolls.is_empty());

        h.navigator.viewport_mut().extent = Some(4.0);
        h.navigator.resync_scroll();
        // index 3 in a 4-row viewport: 3 - 2 + 0.5
        assert_eq!(h.navigator.viewport().scrolls.last(), Some(&(1.5, true)));
        assert!(h.selected.borrow().is_empty());
    }

    #[test]
    fn test_non_finite_delta_is_ignored() {
        let mut h = harness(&["a", "b", "c"], Some("b"));
        h.navigator.on_wheel(10.0);
        for delta in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(h.navigator.on_wheel(delta), WheelOutcome::Ignored);
        }
        assert_eq!(h.navigator.focused_index(), Some(1));
        assert_eq!(h.navigator.accumulated_delta(), 10.0);
        assert!(!h.navigator.is_locked());
        assert!(h.selected.borrow().is_empty());
    }

    #[test]
    fn test_unmounted_viewport_does_not_block_focus() {
        let mut h = harness_with_viewport(&["a", "b", "c"], None, FakeViewport::default());
        assert_eq!(h.navigator.on_wheel(40.0), WheelOutcome::Stepped { index: 1 });
        assert_eq!(h.navigator.focused_index(), Some(1));
        assert!(h.navigator.viewport().scrolls.is_empty());
    }

    #[test]
    fn test_tier_projection_follows_focus() {
        let mut h = harness(&["a", "b", "c", "d"], Some("b"));
        assert_eq!(h.navigator.tier(1), Some(VisualTier::Focused));
        assert_eq!(h.navigator.tier(0), Some(VisualTier::Adjacent));
        assert_eq!(h.navigator.tier(3), Some(VisualTier::Far));
        h.navigator.on_item_activate(3);
        assert_eq!(h.navigator.tier(3), Some(VisualTier::Focused));
        assert_eq!(h.navigator.tier(1), Some(VisualTier::Far));
    }

    #[test]
    fn test_dropping_locked_navigator_is_clean() {
        let mut h = harness(&["a", "b"], None);
        h.navigator.on_wheel(40.0);
        assert!(h.navigator.is_locked());
        drop(h.navigator);
        h.clock.advance(RELEASE_DELAY);
        assert_eq!(h.selected.borrow().len(), 1);
    }
}
