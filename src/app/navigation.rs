use crate::navigator::{Clock, ScrollViewport, StepNavigator, wrap_index};

/// Keyboard-style list navigation with wrap-around at both ends
pub trait Navigable {
    fn item_count(&self) -> usize;

    fn selected_index(&self) -> Option<usize>;

    fn select_index(&mut self, index: usize);

    fn select_next(&mut self) {
        self.select_relative(1);
    }

    fn select_previous(&mut self) {
        self.select_relative(-1);
    }

    fn select_relative(&mut self, direction: isize) {
        let current = self.selected_index().unwrap_or(0) as isize;
        if let Some(index) = wrap_index(current + direction, self.item_count()) {
            self.select_index(index);
        }
    }
}

// Key presses are direct selections: they skip the wheel threshold and lock
impl<V: ScrollViewport, C: Clock> Navigable for StepNavigator<V, C> {
    fn item_count(&self) -> usize {
        self.items().len()
    }

    fn selected_index(&self) -> Option<usize> {
        self.focused_index()
    }

    fn select_index(&mut self, index: usize) {
        self.on_item_activate(index);
    }
}
