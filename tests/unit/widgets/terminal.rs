use super::*;

fn fps() -> Fps {
    Fps::whole(30).unwrap()
}

#[test]
fn output_has_thirteen_lines_with_one_blank() {
    assert_eq!(TERMINAL_OUTPUT_LINE_COUNT, 13);
    let lines: Vec<_> = output_lines().collect();
    assert_eq!(lines.len(), 13);
    assert_eq!(lines[6], "");
    assert_eq!(lines[12], "Best practices for Remotion - Video creation in React");
}

#[test]
fn typing_completes_at_frame_62() {
    let s = TerminalContentState::at(0.0, fps());
    assert_eq!(s.chars_typed, 0);
    assert!(s.is_typing);
    assert_eq!(s.cursor_opacity, 1.0);
    assert_eq!(s.typing_end_frame, 62);

    let done = TerminalContentState::at(62.0, fps());
    assert_eq!(done.typed_text, TERMINAL_COMMAND);
    assert!(!done.is_typing);
}

#[test]
fn output_waits_for_typing_then_scrolls_in() {
    assert!(!TerminalContentState::at(61.0, fps()).shows_output());
    assert_eq!(TerminalContentState::at(62.0, fps()).visible_lines, 1);

    let mut last = 0;
    for f in 0..200 {
        let n = TerminalContentState::at(f as f64, fps()).visible_lines;
        assert!(n >= last && n <= TERMINAL_OUTPUT_LINE_COUNT);
        last = n;
    }
    let end = output_end_frame(fps());
    assert!((80..=81).contains(&end));
    assert_eq!(
        TerminalContentState::at(end as f64, fps()).visible_lines,
        TERMINAL_OUTPUT_LINE_COUNT
    );
}

#[test]
fn content_tree_shows_prompt_and_revealed_lines() {
    let early = terminal_content(10.0, fps());
    let texts = early.texts();
    assert_eq!(texts[0], TERMINAL_PROMPT);
    assert_eq!(texts.len(), 2);

    let late = terminal_content(150.0, fps());
    let texts = late.texts();
    // Prompt, command and the twelve non-blank output lines.
    assert_eq!(texts.len(), 14);
    assert!(texts.contains(&"Found 1 skill"));
}

#[test]
fn window_carries_title_and_chrome() {
    let w = terminal_window(0.0, fps());
    assert!(w.texts().contains(&"Terminal"));
}
