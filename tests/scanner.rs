//! Integration tests exercising [`LineBreakScanner`] the way a caller would:
//! through `encode_utf16` and the public iterator, rather than by poking at
//! internal state.

use linebreak_core::LineBreakScanner;

fn breaks(s: &str) -> Vec<(usize, usize, bool)> {
    let _ = env_logger::try_init();
    let units: Vec<u16> = s.encode_utf16().collect();
    LineBreakScanner::new(&units)
        .map(|b| (b.position_wrap, b.position_required, b.required))
        .collect()
}

fn required_positions(s: &str) -> Vec<(usize, bool)> {
    breaks(s)
        .into_iter()
        .map(|(_, pos, required)| (pos, required))
        .collect()
}

#[test]
fn empty_text_yields_nothing() {
    assert_eq!(breaks(""), Vec::new());
}

#[test]
fn word_boundaries_break_after_trailing_space() {
    assert_eq!(required_positions("Hello world"), vec![(6, false), (11, false)]);
}

#[test]
fn explicit_newline_is_a_mandatory_break() {
    assert_eq!(
        required_positions("Hello\nworld"),
        vec![(6, true), (11, false)]
    );
}

#[test]
fn lone_trailing_newline_is_the_only_break_and_is_mandatory() {
    assert_eq!(required_positions("Hello\n"), vec![(6, true)]);
}

#[test]
fn crlf_is_a_single_mandatory_break() {
    assert_eq!(required_positions("a\r\nb"), vec![(3, true), (4, false)]);
    // The wrap position excludes the whole CRLF terminator, not just the LF.
    assert_eq!(breaks("a\r\nb")[0], (1, 3, true));
}

#[test]
fn lone_cr_not_followed_by_lf_is_still_mandatory() {
    assert_eq!(required_positions("a\rb"), vec![(2, true), (3, false)]);
}

#[test]
fn regional_indicators_pair_before_breaking() {
    // U+1F1EC U+1F1E7 (GB) + U+1F1E9 U+1F1EA (DE), each codepoint a
    // surrogate pair: 4 codepoints, 8 UTF-16 code units total. A break
    // opportunity falls between the two flags, never inside either pair.
    let flags = "\u{1F1EC}\u{1F1E7}\u{1F1E9}\u{1F1EA}";
    assert_eq!(required_positions(flags), vec![(4, false), (8, false)]);
}

#[test]
fn trailing_whitespace_is_excluded_from_the_wrap_position() {
    let all = breaks("Hello world");
    assert_eq!(all[0], (5, 6, false)); // wrap excludes the space itself.
}

#[test]
fn positions_are_monotonically_increasing() {
    for text in ["Hello world, this is a test.\nSecond line here.", "a\r\nb\nc d"] {
        let all = breaks(text);
        let mut last = 0;
        for (wrap, required, _) in &all {
            assert!(*wrap <= *required);
            assert!(*required >= last);
            last = *required;
        }
        assert_eq!(all.last().unwrap().1, text.encode_utf16().count());
    }
}

#[test]
fn combining_marks_never_start_a_line() {
    let _ = env_logger::try_init();
    // U+0301 COMBINING ACUTE ACCENT glued onto 'e'.
    let text = "e\u{0301} world";
    let units: Vec<u16> = text.encode_utf16().collect();
    let positions: Vec<usize> = LineBreakScanner::new(&units)
        .map(|b| b.position_required)
        .collect();
    // No break is ever reported between 'e' and its combining mark.
    assert!(!positions.contains(&1));
}

#[test]
fn no_break_before_a_combining_mark_following_a_space() {
    // "a <CM>": space then combining mark is the CPBRK column's
    // last_class == SP case, which must not itself force a break.
    let text = "a \u{0301}";
    assert!(!required_positions(text).iter().any(|&(pos, _)| pos == 2));
}
