/// Rows moved by one wheel notch over the page pane
pub const CONTENT_SCROLL_LINES: u16 = 3;

impl crate::app::App {
    pub fn scroll_content_up(&mut self, lines: u16) {
        self.content_scroll = self.content_scroll.saturating_sub(lines);
    }

    pub fn scroll_content_down(&mut self, lines: u16) {
        // Upper bound depends on wrapped height, clamped at render time
        self.content_scroll = self.content_scroll.saturating_add(lines);
    }

    pub fn scroll_content_page_up(&mut self) {
        let page = self.page_height();
        self.scroll_content_up(page);
    }

    pub fn scroll_content_page_down(&mut self) {
        let page = self.page_height();
        self.scroll_content_down(page);
    }

    pub fn reset_content_scroll(&mut self) {
        self.content_scroll = 0;
    }

    fn page_height(&self) -> u16 {
        self.layout
            .map_or(10, |layout| layout.page.height.saturating_sub(2).max(1))
    }
}
