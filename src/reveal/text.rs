//! Character-by-character blur-in of a text block.
//!
//! Each character owns a short window of the block's reveal progress. Windows start a fixed
//! fraction apart and overlap, so roughly `chars_animated` characters are fading at once.

use std::time::Duration;

use crate::animation::ease::Ease;

/// Characters fading simultaneously unless configured otherwise.
pub const DEFAULT_CHARS_ANIMATED: f64 = 10.0;

/// Blur radius of a character before its window opens.
pub const BLUR_START_PX: f64 = 10.0;

/// Rendered style of one character.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct CharStyle {
    /// 0 hidden, 1 visible.
    pub opacity: f64,
    /// Gaussian blur radius in pixels.
    pub blur_px: f64,
}

/// One animated character and its reveal window.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct CharReveal {
    /// The character itself.
    pub ch: char,
    /// UTF-16 offset among the animated characters of the block.
    pub index: usize,
    /// Block progress at which the character starts to appear.
    pub start: f64,
    /// Block progress at which the character is fully visible.
    pub end: f64,
}

impl CharReveal {
    /// Style at block progress `progress`, mapped linearly over `[start, end]` and clamped.
    pub fn sample(&self, progress: f64) -> CharStyle {
        let span = self.end - self.start;
        let t = if span <= 0.0 {
            if progress >= self.start { 1.0 } else { 0.0 }
        } else {
            ((progress - self.start) / span).clamp(0.0, 1.0)
        };
        CharStyle {
            opacity: t,
            blur_px: BLUR_START_PX * (1.0 - t),
        }
    }
}

/// Characters of one word, kept together when lines wrap.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct WordReveal {
    /// Characters in reading order.
    pub chars: Vec<CharReveal>,
}

/// Words of one source line.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct LineReveal {
    /// Words in reading order.
    pub words: Vec<WordReveal>,
}

/// Reveal plan of a whole text block.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct TextReveal {
    /// Lines in source order.
    pub lines: Vec<LineReveal>,
    /// UTF-16 length used for timing; includes whitespace.
    pub total_chars: usize,
}

impl TextReveal {
    /// Every animated character, in reading order.
    pub fn chars(&self) -> impl Iterator<Item = &CharReveal> {
        self.lines
            .iter()
            .flat_map(|l| l.words.iter())
            .flat_map(|w| w.chars.iter())
    }

    /// `true` for a blank body.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Lay out reveal windows for `body`.
///
/// Lines split on `'\n'`, words on runs of whitespace. Whitespace counts toward the timing
/// total but is never animated itself. A blank body produces an empty plan.
///
/// Timing is measured in UTF-16 code units, the unit a browser splits text into: a character
/// outside the BMP occupies two slots, and its window starts at the first.
pub fn plan_text_reveal(body: &str, chars_animated: f64) -> TextReveal {
    if body.trim().is_empty() {
        return TextReveal::default();
    }

    let total_chars: usize = body.split('\n').map(|l| l.encode_utf16().count()).sum();
    let total = total_chars as f64;
    let step = 1.0 / (total * 1.8);
    let width = chars_animated.max(0.0) / (total * 2.0);

    let mut index = 0usize;
    let lines = body
        .split('\n')
        .map(|line| LineReveal {
            words: line
                .split_whitespace()
                .map(|word| WordReveal {
                    chars: word
                        .chars()
                        .map(|ch| {
                            let start = index as f64 * step;
                            let c = CharReveal {
                                ch,
                                index,
                                start,
                                end: start + width,
                            };
                            index += ch.len_utf16();
                            c
                        })
                        .collect(),
                })
                .collect(),
        })
        .collect();

    TextReveal { lines, total_chars }
}

/// Reveal progress of a non-sticky block, eased toward 1 while in view and back to 0 after.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InViewProgress {
    from: f64,
    target: f64,
    started_at: Duration,
    duration: Duration,
}

impl InViewProgress {
    /// Time to reach 1 after entering view.
    pub const ENTER: Duration = Duration::from_secs(2);
    /// Time to fall back to 0 after leaving view.
    pub const LEAVE: Duration = Duration::from_secs(1);
    const EASE: Ease = Ease::EaseInOut;

    /// Out of view, at 0.
    pub fn new() -> Self {
        Self {
            from: 0.0,
            target: 0.0,
            started_at: Duration::ZERO,
            duration: Duration::ZERO,
        }
    }

    /// Latest reported visibility.
    pub fn in_view(&self) -> bool {
        self.target >= 1.0
    }

    /// Retarget on a visibility change. The new animation starts from the current value.
    pub fn set_in_view(&mut self, now: Duration, in_view: bool) {
        if in_view == self.in_view() {
            return;
        }
        self.from = self.value(now);
        self.started_at = now;
        if in_view {
            self.target = 1.0;
            self.duration = Self::ENTER;
        } else {
            self.target = 0.0;
            self.duration = Self::LEAVE;
        }
    }

    /// Progress in `[0, 1]` at `now`.
    pub fn value(&self, now: Duration) -> f64 {
        if self.duration.is_zero() {
            return self.target;
        }
        let elapsed = now.saturating_sub(self.started_at).as_secs_f64();
        let t = elapsed / self.duration.as_secs_f64();
        self.from + (self.target - self.from) * Self::EASE.apply(t)
    }
}

impl Default for InViewProgress {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/text.rs"]
mod tests;
