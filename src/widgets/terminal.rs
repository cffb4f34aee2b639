use crate::{
    animation::typing::{LineReveal, TypingCursor, TypingEffect},
    foundation::core::{Affine, Fps, Point, Rect, Rgba8, Size},
    scene::{
        node::{Group, Node, RectNode, TextAnchor, TextStyle},
        paint::{Shadow, Stroke},
    },
    widgets::baseline,
};

/// Command typed at the prompt.
pub const TERMINAL_COMMAND: &str = "npx skills add remotion-dev/skills";
/// Prompt shown before the command.
pub const TERMINAL_PROMPT: &str = "guest@macbook ~ %";
/// Typing speed.
pub const TERMINAL_SECONDS_PER_CHAR: f64 = 0.06;
/// Output scroll speed.
pub const TERMINAL_SECONDS_PER_LINE: f64 = 0.05;

const ASCII_LINES: [&str; 6] = [
    "███████╗██╗  ██╗██╗██╗     ██╗     ███████╗",
    "██╔════╝██║ ██╔╝██║██║     ██║     ██╔════╝",
    "███████╗█████╔╝ ██║██║     ██║     ███████╗",
    "╚════██║██╔═██╗ ██║██║     ██║     ╚════██║",
    "███████║██║  ██╗██║███████╗███████╗███████║",
    "╚══════╝╚═╝  ╚═╝╚═╝╚══════╝╚══════╝╚══════╝",
];

const OUTPUT_LINES: [&str; 6] = [
    "Source: https://github.com/remotion-dev/skills.git",
    "Cloning repository...",
    "Repository cloned",
    "Found 1 skill",
    "Skill: remotion-best-practices",
    "Best practices for Remotion - Video creation in React",
];

/// Banner, one blank separator, then the install log.
pub const TERMINAL_OUTPUT_LINE_COUNT: usize = ASCII_LINES.len() + 1 + OUTPUT_LINES.len();

/// Outer size of the terminal window.
pub const TERMINAL_WINDOW_SIZE: Size = Size::new(1100.0, 640.0);

const FONT_SIZE: f64 = 30.0;
const PROMPT_ROW_HEIGHT: f64 = 36.0;
const ROW_GAP: f64 = 16.0;
const PROMPT_GAP: f64 = 10.0;
const ASCII_LINE_HEIGHT: f64 = FONT_SIZE * 1.1;
const OUTPUT_LINE_HEIGHT: f64 = FONT_SIZE * 1.4;
const BLANK_LINE_MARGIN: f64 = 12.0;
const TITLE_BAR_HEIGHT: f64 = 44.0;
const CONTENT_PADDING: (f64, f64) = (32.0, 28.0);

const INK: Rgba8 = Rgba8::rgb(0x1f, 0x23, 0x28);
const BORDER: Rgba8 = Rgba8::rgb(0xd7, 0xd9, 0xdd);

/// Every output line in display order.
pub fn output_lines() -> impl Iterator<Item = &'static str> {
    ASCII_LINES
        .iter()
        .copied()
        .chain(std::iter::once(""))
        .chain(OUTPUT_LINES.iter().copied())
}

/// Typing effect of the install command.
pub fn command_typing() -> TypingEffect {
    TypingEffect::new(TERMINAL_COMMAND, TERMINAL_SECONDS_PER_CHAR)
}

/// Line reveal that starts when the command finishes typing.
pub fn output_reveal(fps: Fps) -> LineReveal {
    LineReveal {
        line_count: TERMINAL_OUTPUT_LINE_COUNT,
        seconds_per_line: TERMINAL_SECONDS_PER_LINE,
        start_frame: command_typing().typing_end_frame(fps) as f64,
    }
}

/// Frame at which the last output line appears.
pub fn output_end_frame(fps: Fps) -> u64 {
    output_reveal(fps).complete_frame(fps)
}

/// Timing of the terminal content at one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct TerminalContentState {
    pub chars_typed: usize,
    pub typed_text: &'static str,
    pub is_typing: bool,
    pub cursor_opacity: f64,
    pub typing_end_frame: u64,
    pub visible_lines: usize,
}

impl TerminalContentState {
    /// Sample at local `frame`.
    pub fn at(frame: f64, fps: Fps) -> Self {
        let typing = command_typing();
        let chars_typed = typing.chars_typed(frame, fps);
        let is_typing = typing.is_typing(frame, fps);
        let typed_text = match TERMINAL_COMMAND.char_indices().nth(chars_typed) {
            Some((idx, _)) => &TERMINAL_COMMAND[..idx],
            None => TERMINAL_COMMAND,
        };
        Self {
            chars_typed,
            typed_text,
            is_typing,
            cursor_opacity: TypingCursor::default().opacity(frame, fps, is_typing),
            typing_end_frame: typing.typing_end_frame(fps),
            visible_lines: output_reveal(fps).visible_count(frame, fps),
        }
    }

    /// `true` once any output is on screen.
    pub fn shows_output(&self) -> bool {
        self.visible_lines > 0
    }
}

/// 10x20 block cursor.
pub fn terminal_cursor(origin: Point, opacity: f64) -> Node {
    Node::rect(
        Rect::from_origin_size(origin, (10.0, 20.0)),
        2.0,
        INK,
    )
    .faded(opacity)
}

/// Prompt, typed command, cursor and scrolling output, laid out from the local origin.
pub fn terminal_content(frame: f64, fps: Fps) -> Node {
    let state = TerminalContentState::at(frame, fps);
    let mono = |color| TextStyle::mono(FONT_SIZE, color);

    let prompt_style = mono(Rgba8::rgb(0x3b, 0x3f, 0x45));
    let row_baseline = baseline(0.0, PROMPT_ROW_HEIGHT, FONT_SIZE);
    let command_x = prompt_style.estimate_width(TERMINAL_PROMPT) + PROMPT_GAP;
    let cursor_x = command_x + mono(INK).estimate_width(state.typed_text) + PROMPT_GAP;

    let mut children = vec![
        Node::text(TERMINAL_PROMPT, Point::new(0.0, row_baseline), prompt_style),
        Node::text(state.typed_text, Point::new(command_x, row_baseline), mono(INK)),
        terminal_cursor(
            Point::new(cursor_x, (PROMPT_ROW_HEIGHT - 20.0) * 0.5),
            state.cursor_opacity,
        ),
    ];

    let mut top = PROMPT_ROW_HEIGHT + ROW_GAP;
    for (index, line) in output_lines().take(state.visible_lines).enumerate() {
        let (line_height, color) = if index < ASCII_LINES.len() {
            (ASCII_LINE_HEIGHT, Rgba8::rgb(0x9a, 0xa0, 0xa6))
        } else {
            (OUTPUT_LINE_HEIGHT, Rgba8::rgb(0x4b, 0x4f, 0x56))
        };
        if line.is_empty() {
            top += BLANK_LINE_MARGIN + line_height;
            continue;
        }
        children.push(Node::text(
            line,
            Point::new(0.0, baseline(top, line_height, FONT_SIZE)),
            mono(color),
        ));
        top += line_height;
    }

    Node::group(children)
}

fn traffic_light(x: f64, fill: Rgba8, ring: Rgba8) -> Node {
    Node::Rect(RectNode {
        rect: Rect::new(x, 16.0, x + 12.0, 28.0),
        radius: 6.0,
        fill: Some(fill.into()),
        stroke: Some(Stroke::new(ring, 1.0)),
        shadow: None,
    })
}

/// Light macOS-style terminal window hosting [`terminal_content`], origin at its top-left.
pub fn terminal_window(frame: f64, fps: Fps) -> Node {
    let (w, h) = (TERMINAL_WINDOW_SIZE.width, TERMINAL_WINDOW_SIZE.height);
    let bounds = Rect::new(0.0, 0.0, w, h);
    let shadowed = |shadow| {
        Node::Rect(RectNode {
            rect: bounds,
            radius: 18.0,
            fill: Some(Rgba8::WHITE.into()),
            stroke: None,
            shadow: Some(shadow),
        })
    };

    let title_style = TextStyle::sans(14.0, Rgba8::rgb(0x6b, 0x6f, 0x76))
        .weight(600)
        .letter_spacing(0.2)
        .anchor(TextAnchor::Middle);
    // Title sits centered between the 52px light cluster and the 56px spacer.
    let title_x = 16.0 + 52.0 + (w - 32.0 - 52.0 - 56.0) * 0.5;

    let chrome = Group::new(vec![
        Node::rect(bounds, 0.0, Rgba8::WHITE),
        Node::rect(
            Rect::new(0.0, 0.0, w, TITLE_BAR_HEIGHT),
            0.0,
            Rgba8::rgb(0xf0, 0xf1, 0xf4),
        ),
        Node::line(
            Point::new(0.0, TITLE_BAR_HEIGHT + 0.5),
            Point::new(w, TITLE_BAR_HEIGHT + 0.5),
            Stroke::new(BORDER, 1.0),
        ),
        traffic_light(16.0, Rgba8::rgb(0xff, 0x5f, 0x57), Rgba8::rgb(0xd0, 0x4a, 0x45)),
        traffic_light(36.0, Rgba8::rgb(0xfe, 0xbc, 0x2e), Rgba8::rgb(0xd1, 0x9a, 0x26)),
        traffic_light(56.0, Rgba8::rgb(0x28, 0xc8, 0x40), Rgba8::rgb(0x1e, 0xa3, 0x33)),
        Node::text(
            "Terminal",
            Point::new(title_x, baseline(0.0, TITLE_BAR_HEIGHT, 14.0)),
            title_style,
        ),
        Node::rect(
            Rect::new(0.0, TITLE_BAR_HEIGHT + 1.0, w, h),
            0.0,
            Rgba8::rgb(0xfb, 0xfb, 0xfc),
        ),
        terminal_content(frame, fps).transformed(Affine::translate((
            CONTENT_PADDING.0,
            TITLE_BAR_HEIGHT + 1.0 + CONTENT_PADDING.1,
        ))),
    ])
    .clip(bounds, 18.0);

    Node::group(vec![
        shadowed(Shadow::new(0.0, 24.0, 60.0, Rgba8::rgba(15, 23, 42, 0.18))),
        shadowed(Shadow::new(0.0, 8.0, 16.0, Rgba8::rgba(15, 23, 42, 0.08))),
        Node::Group(chrome),
        Node::Rect(RectNode {
            rect: bounds.inset(-0.5),
            radius: 18.0,
            fill: None,
            stroke: Some(Stroke::new(BORDER, 1.0)),
            shadow: None,
        }),
    ])
}

#[cfg(test)]
#[path = "../../tests/unit/widgets/terminal.rs"]
mod tests;
