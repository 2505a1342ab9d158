/// Measured geometry of a scroll container, in the container's own units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub offset: f64,
    pub extent: f64,
}

/// Scroll container the navigator keeps its focused item visible in.
///
/// `measure` returns `None` while the container is not mounted; callers treat
/// that as "nothing to scroll" rather than an error.
pub trait ScrollViewport {
    fn measure(&self) -> Option<Viewport>;
    fn scroll_to(&mut self, offset: f64, animated: bool);
}

/// Offset that places item `index` in the vertical center of the viewport
#[must_use]
pub fn centered_offset(index: usize, item_extent: f64, viewport_extent: f64) -> f64 {
    let item_top = index as f64 * item_extent;
    (item_top - viewport_extent / 2.0 + item_extent / 2.0).max(0.0)
}

/// Terminal list viewport with an ease-out scroll animation.
///
/// Offsets are in rows. The host mounts it with the visible row count and the
/// total content height once layout is known, then calls [`ListViewport::tick`]
/// every frame. The requested target is clamped against the content height
/// whenever it is read.
#[derive(Debug, Clone)]
pub struct ListViewport {
    extent: Option<f64>,
    content: f64,
    offset: f64,
    target: f64,
    speed: f64,
}

impl ListViewport {
    pub fn new(speed: f64) -> Self {
        Self {
            extent: None,
            content: 0.0,
            offset: 0.0,
            target: 0.0,
            speed: speed.clamp(0.05, 1.0),
        }
    }

    pub fn mount(&mut self, extent: u16, content: usize) {
        self.extent = Some(f64::from(extent));
        self.content = content as f64;
        self.offset = self.clamp(self.offset);
    }

    pub fn unmount(&mut self) {
        self.extent = None;
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.extent.is_some()
    }

    /// Moves the offset a fraction of the way toward the target
    pub fn tick(&mut self) {
        let target = self.target();
        let remaining = target - self.offset;
        if remaining.abs() < 0.05 {
            self.offset = target;
            return;
        }
        self.offset += remaining * self.speed;
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.offset != self.target()
    }

    /// First content row currently shown at the top of the viewport
    #[must_use]
    pub fn first_visible_row(&self) -> usize {
        self.offset.round().max(0.0) as usize
    }

    /// Requested offset, clamped to the current content
    #[must_use]
    pub fn target(&self) -> f64 {
        self.clamp(self.target)
    }

    fn max_offset(&self) -> f64 {
        let extent = self.extent.unwrap_or(0.0);
        (self.content - extent).max(0.0)
    }

    fn clamp(&self, offset: f64) -> f64 {
        offset.clamp(0.0, self.max_offset())
    }
}

impl ScrollViewport for ListViewport {
    fn measure(&self) -> Option<Viewport> {
        self.extent.map(|extent| Viewport {
            offset: self.offset,
            extent,
        })
    }

    fn scroll_to(&mut self, offset: f64, animated: bool) {
        // Kept unclamped so a later mount with more content can still reach it
        self.target = offset.max(0.0);
        if !animated {
            self.offset = self.target();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_offset_clamps_at_top() {
        assert_eq!(centered_offset(0, 1.0, 9.0), 0.0);
        assert_eq!(centered_offset(3, 1.0, 9.0), 0.0);
    }

    #[test]
    fn test_centered_offset_centers_item() {
        // Row 10 with a 9-row viewport: 10 - 4.5 + 0.5
        assert_eq!(centered_offset(10, 1.0, 9.0), 6.0);
        // Two-row items: 5 * 2 - 4 + 1
        assert_eq!(centered_offset(5, 2.0, 8.0), 7.0);
    }

    #[test]
    fn test_unmounted_viewport_measures_nothing() {
        let viewport = ListViewport::new(0.5);
        assert!(viewport.measure().is_none());
    }

    #[test]
    fn test_scroll_target_clamped_to_content() {
        let mut viewport = ListViewport::new(0.5);
        viewport.mount(5, 8);
        viewport.scroll_to(10.0, false);
        assert_eq!(viewport.first_visible_row(), 3);
        viewport.scroll_to(-4.0, false);
        assert_eq!(viewport.first_visible_row(), 0);
    }

    #[test]
    fn test_animated_scroll_settles_on_target() {
        let mut viewport = ListViewport::new(0.5);
        viewport.mount(4, 20);
        viewport.scroll_to(8.0, true);
        assert!(viewport.is_animating());
        assert_eq!(viewport.first_visible_row(), 0);

        viewport.tick();
        assert_eq!(viewport.first_visible_row(), 4);

        for _ in 0..20 {
            viewport.tick();
        }
        assert!(!viewport.is_animating());
        assert_eq!(viewport.first_visible_row(), 8);
    }

    #[test]
    fn test_remount_with_shorter_content_reclamps() {
        let mut viewport = ListViewport::new(1.0);
        viewport.mount(4, 20);
        viewport.scroll_to(12.0, false);
        viewport.mount(4, 6);
        assert_eq!(viewport.first_visible_row(), 2);
        assert_eq!(viewport.target(), 2.0);
    }
}
