//! A [Unicode Standard Annex #14][UAX14] line-break engine and the
//! codepoint/UTF-16/property substrate it is built on.
//!
//! This crate is the text-segmentation core shared by the font-handling
//! subsystems that need to know where a run of shaped glyphs is allowed —
//! or required — to wrap onto a new line. It does not itself measure glyphs
//! or lay out text; callers combine the break opportunities this crate
//! reports with their own metrics to decide where lines actually end.
//!
//! # Example
//!
//! ```
//! use linebreak_core::LineBreakScanner;
//!
//! let units: Vec<u16> = "Hello world".encode_utf16().collect();
//! let mut scanner = LineBreakScanner::new(&units);
//! let breaks: Vec<_> = (&mut scanner).map(|b| (b.position_required, b.required)).collect();
//! assert_eq!(breaks, vec![(6, false), (11, false)]);
//! ```
//!
//! [UAX14]: https://www.unicode.org/reports/tr14/

#![deny(missing_docs, missing_debug_implementations)]

mod codepoint;
mod decode;
mod error;
mod pairtable;
mod properties;
mod scanner;

pub use codepoint::{CodePoint, REPLACEMENT_CHARACTER};
pub use decode::{decode_at, decode_before};
pub use error::CodePointError;
pub use pairtable::PairTableEntry;
pub use properties::{
    get_bidi_type, get_general_category, get_grapheme_cluster_class, get_line_break_class,
    BidiClass, GeneralCategory, GraphemeClusterBreak, LineBreakClass,
};
pub use scanner::{LineBreak, LineBreakScanner};

/// The [Unicode version](https://www.unicode.org/versions/) the bundled
/// property tables conform to.
///
/// The `ucd/` snapshot this crate's `build.rs` compiles from is a curated
/// excerpt rather than a full UCD distribution (see `SPEC_FULL.md` §10.4);
/// bump this constant together with `ucd/` when regenerating against a full
/// snapshot.
pub const UNICODE_VERSION: (u64, u64, u64) = (15, 1, 0);

#[cfg(test)]
mod tests {
    use super::*;

    fn units(s: &str) -> Vec<u16> {
        s.encode_utf16().collect()
    }

    #[test]
    fn empty_input_yields_no_breaks() {
        let src = units("");
        let mut scanner = LineBreakScanner::new(&src);
        assert_eq!(scanner.try_get_next_break(), None);
    }

    #[test]
    fn simple_sentence() {
        let src = units("Hello world");
        let breaks: Vec<_> = LineBreakScanner::new(&src)
            .map(|b| (b.position_required, b.required))
            .collect();
        assert_eq!(breaks, vec![(6, false), (11, false)]);
    }

    #[test]
    fn explicit_newline_is_mandatory() {
        let src = units("Hello\nworld");
        let breaks: Vec<_> = LineBreakScanner::new(&src)
            .map(|b| (b.position_required, b.required))
            .collect();
        assert_eq!(breaks, vec![(6, true), (11, false)]);
    }

    #[test]
    fn crlf_counts_as_one_mandatory_break() {
        let src = units("a\r\nb");
        let breaks: Vec<_> = LineBreakScanner::new(&src)
            .map(|b| (b.position_required, b.required))
            .collect();
        assert_eq!(breaks, vec![(3, true), (4, false)]);
    }

    #[test]
    fn trailing_newline_reports_mandatory_end_of_text_break() {
        let src = units("Hello\n");
        let breaks: Vec<_> = LineBreakScanner::new(&src)
            .map(|b| (b.position_required, b.required))
            .collect();
        assert_eq!(breaks, vec![(6, true)]);
    }
}
