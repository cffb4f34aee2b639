use crate::{
    animation::interpolate::interpolate_clamped,
    animation::timing::blink_on,
    foundation::core::Fps,
};

/// Typewriter reveal of a fixed string at a constant per-character duration.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TypingEffect {
    /// Full text once typing is complete.
    pub text: String,
    /// Seconds spent on each character.
    pub seconds_per_char: f64,
}

impl TypingEffect {
    /// Typing effect for `text`.
    pub fn new(text: impl Into<String>, seconds_per_char: f64) -> Self {
        Self {
            text: text.into(),
            seconds_per_char,
        }
    }

    /// Number of characters in the target text.
    pub fn len_chars(&self) -> usize {
        self.text.chars().count()
    }

    /// Frames per character at `fps`.
    pub fn frames_per_char(&self, fps: Fps) -> f64 {
        self.seconds_per_char * fps.as_f64()
    }

    /// `min(len, floor(frame / framesPerChar))`, never negative.
    pub fn chars_typed(&self, frame: f64, fps: Fps) -> usize {
        let per_char = self.frames_per_char(fps);
        let len = self.len_chars();
        if per_char <= 0.0 {
            return len;
        }
        let typed = (frame / per_char).floor().max(0.0);
        (typed as usize).min(len)
    }

    /// Prefix of the text typed so far.
    pub fn typed_text(&self, frame: f64, fps: Fps) -> &str {
        prefix_chars(&self.text, self.chars_typed(frame, fps))
    }

    /// Whether characters are still being added.
    pub fn is_typing(&self, frame: f64, fps: Fps) -> bool {
        self.chars_typed(frame, fps) < self.len_chars()
    }

    /// First frame at which the whole text is shown: `ceil(len * framesPerChar)`.
    pub fn typing_end_frame(&self, fps: Fps) -> u64 {
        (self.len_chars() as f64 * self.frames_per_char(fps))
            .ceil()
            .max(0.0) as u64
    }
}

/// Typing cursor visibility: solid while typing, then blinking.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TypingCursor {
    /// Seconds per blink half-period.
    pub blink_seconds: f64,
}

impl Default for TypingCursor {
    fn default() -> Self {
        Self { blink_seconds: 0.55 }
    }
}

impl TypingCursor {
    /// Opacity (0 or 1) at `frame`.
    pub fn opacity(&self, frame: f64, fps: Fps, is_typing: bool) -> f64 {
        if is_typing || blink_on(frame, self.blink_seconds * fps.as_f64()) {
            1.0
        } else {
            0.0
        }
    }
}

/// Headline typed between two frames with clamped linear interpolation of the character count.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HeadlineTyping {
    /// Full headline.
    pub text: String,
    /// Frame where the first character appears.
    pub start_frame: f64,
    /// Frame where the last character appears.
    pub end_frame: f64,
}

impl HeadlineTyping {
    /// Characters shown at `frame`.
    pub fn chars_typed(&self, frame: f64) -> usize {
        let len = self.text.chars().count();
        let v = interpolate_clamped(frame, [self.start_frame, self.end_frame], [0.0, len as f64]);
        (v.floor().max(0.0) as usize).min(len)
    }

    /// Prefix shown at `frame`.
    pub fn typed_text(&self, frame: f64) -> &str {
        prefix_chars(&self.text, self.chars_typed(frame))
    }
}

/// Line-by-line reveal of output that starts once typing finishes.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LineReveal {
    /// Total number of lines.
    pub line_count: usize,
    /// Seconds between consecutive lines.
    pub seconds_per_line: f64,
    /// Frame at which the first line appears.
    pub start_frame: f64,
}

impl LineReveal {
    /// Frames between lines at `fps`.
    pub fn frames_per_line(&self, fps: Fps) -> f64 {
        self.seconds_per_line * fps.as_f64()
    }

    /// `clamp(floor((frame - start) / framesPerLine) + 1, 0, line_count)`.
    pub fn visible_count(&self, frame: f64, fps: Fps) -> usize {
        let per_line = self.frames_per_line(fps);
        if frame < self.start_frame {
            return 0;
        }
        if per_line <= 0.0 {
            return self.line_count;
        }
        let n = ((frame - self.start_frame) / per_line).floor() + 1.0;
        (n.max(0.0) as usize).min(self.line_count)
    }

    /// Frame at which the final line becomes visible.
    pub fn complete_frame(&self, fps: Fps) -> u64 {
        let extra = (self.line_count.saturating_sub(1) as f64 * self.seconds_per_line
            * fps.as_f64())
        .ceil();
        (self.start_frame + extra).max(0.0) as u64
    }
}

fn prefix_chars(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/typing.rs"]
mod tests;
