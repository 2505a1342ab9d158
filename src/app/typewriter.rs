use std::time::{Duration, Instant};

use crate::config::TypewriterConfig;

/// Reveals text one character at a time.
///
/// The first character appears after `delay`, each following one `speed`
/// later. Once the text is complete the cursor blinks.
#[derive(Debug, Clone)]
pub struct Typewriter {
    text: String,
    delay: Duration,
    speed: Duration,
    blink: Duration,
    started_at: Instant,
}

impl Typewriter {
    pub fn new(text: impl Into<String>, delay: Duration, speed: Duration, now: Instant) -> Self {
        Self {
            text: text.into(),
            delay,
            speed,
            blink: Duration::from_millis(530),
            started_at: now,
        }
    }

    pub fn from_config(text: impl Into<String>, config: &TypewriterConfig, now: Instant) -> Self {
        Self::new(
            text,
            Duration::from_millis(config.delay_ms),
            Duration::from_millis(config.speed_ms),
            now,
        )
        .with_blink(Duration::from_millis(config.cursor_blink_ms))
    }

    #[must_use]
    pub fn with_blink(mut self, blink: Duration) -> Self {
        self.blink = blink;
        self
    }

    /// Starts over with new text
    pub fn restart(&mut self, text: impl Into<String>, now: Instant) {
        self.text = text.into();
        self.started_at = now;
    }

    #[must_use]
    pub fn revealed_chars(&self, now: Instant) -> usize {
        let elapsed = now.saturating_duration_since(self.started_at);
        let total = self.text.chars().count();
        if elapsed < self.delay || total == 0 {
            return 0;
        }
        let speed = self.speed.as_millis().max(1);
        let after_first = (elapsed - self.delay).as_millis() / speed;
        usize::try_from(after_first)
            .unwrap_or(usize::MAX)
            .saturating_add(1)
            .min(total)
    }

    #[must_use]
    pub fn visible_text(&self, now: Instant) -> String {
        self.text.chars().take(self.revealed_chars(now)).collect()
    }

    #[must_use]
    pub fn is_complete(&self, now: Instant) -> bool {
        self.revealed_chars(now) == self.text.chars().count()
    }

    /// Solid while typing, blinking afterwards
    #[must_use]
    pub fn cursor_visible(&self, now: Instant) -> bool {
        let Some(completed_at) = self.completed_at() else {
            return true;
        };
        let elapsed = now.saturating_duration_since(self.started_at);
        if elapsed < completed_at {
            return true;
        }
        let blink = self.blink.as_millis().max(1);
        ((elapsed - completed_at).as_millis() / blink).is_multiple_of(2)
    }

    fn completed_at(&self) -> Option<Duration> {
        let total = self.text.chars().count();
        if total == 0 {
            return Some(Duration::ZERO);
        }
        let remaining = u32::try_from(total - 1).ok()?;
        self.speed
            .checked_mul(remaining)
            .and_then(|typing| self.delay.checked_add(typing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn test_nothing_before_delay() {
        let start = Instant::now();
        let typewriter = Typewriter::new("$ whoami", ms(500), ms(50), start);
        assert_eq!(typewriter.visible_text(start), "");
        assert_eq!(typewriter.visible_text(start + ms(499)), "");
    }

    #[test]
    fn test_reveals_one_char_per_tick() {
        let start = Instant::now();
        let typewriter = Typewriter::new("$ whoami", ms(500), ms(50), start);
        assert_eq!(typewriter.visible_text(start + ms(500)), "$");
        assert_eq!(typewriter.visible_text(start + ms(549)), "$");
        assert_eq!(typewriter.visible_text(start + ms(550)), "$ ");
        assert_eq!(typewriter.visible_text(start + ms(650)), "$ wh");
        assert_eq!(typewriter.visible_text(start + ms(10_000)), "$ whoami");
    }

    #[test]
    fn test_complete_after_last_char() {
        let start = Instant::now();
        let typewriter = Typewriter::new("abc", ms(0), ms(100), start);
        assert!(!typewriter.is_complete(start + ms(199)));
        assert!(typewriter.is_complete(start + ms(200)));
    }

    #[test]
    fn test_cursor_blinks_after_completion() {
        let start = Instant::now();
        let typewriter = Typewriter::new("ab", ms(0), ms(100), start).with_blink(ms(530));
        assert!(typewriter.cursor_visible(start + ms(50)));
        assert!(typewriter.cursor_visible(start + ms(100)));
        assert!(!typewriter.cursor_visible(start + ms(630)));
        assert!(typewriter.cursor_visible(start + ms(1160)));
    }

    #[test]
    fn test_restart_rewinds() {
        let start = Instant::now();
        let mut typewriter = Typewriter::new("one", ms(0), ms(10), start);
        assert_eq!(typewriter.visible_text(start + ms(100)), "one");
        typewriter.restart("two", start + ms(100));
        assert_eq!(typewriter.visible_text(start + ms(100)), "t");
    }

    #[test]
    fn test_multibyte_text() {
        let start = Instant::now();
        let typewriter = Typewriter::new("→ ok", ms(0), ms(10), start);
        assert_eq!(typewriter.visible_text(start), "→");
    }
}
