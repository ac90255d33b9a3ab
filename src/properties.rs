//! Immutable, process-wide Unicode property lookups (spec.md §4.3).
//!
//! The four properties this crate's collaborators need — line-break class,
//! general category, bidi character type, and grapheme-cluster-break class —
//! are packed into a single `u32` per codepoint and looked up through one
//! paged trie, generated offline by `build.rs` from the UCD snapshot under
//! `ucd/`. The packed-word idea follows `linebender-parley`'s
//! `unicode_data::Properties`; the paged-array trie itself is the teacher
//! crate's own `BREAK_PROP_DATA`/`PAGE_INDICES` technique, generalized from
//! one field to four.

use core::mem;

/// UAX #14 line-break class, before the class-folding `LineBreakScanner`
/// applies on top (spec.md §4.4).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[repr(u8)]
pub enum LineBreakClass {
    /// Opening punctuation.
    OP,
    /// Closing punctuation.
    CL,
    /// Closing parenthesis.
    CP,
    /// Quotation mark.
    QU,
    /// Non-breaking ("glue") character.
    GL,
    /// Non-starter.
    NS,
    /// Exclamation/interrogation.
    EX,
    /// Symbols allowing break after.
    SY,
    /// Infix numeric separator.
    IS,
    /// Prefix numeric.
    PR,
    /// Postfix numeric.
    PO,
    /// Numeric.
    NU,
    /// Ordinary alphabetic and symbol characters.
    AL,
    /// Hebrew letter.
    HL,
    /// Ideographic.
    ID,
    /// Inseparable characters.
    IN,
    /// Hyphen.
    HY,
    /// Break after.
    BA,
    /// Break before.
    BB,
    /// Break on either side (em dash).
    B2,
    /// Zero width space.
    ZW,
    /// Combining mark.
    CM,
    /// Word joiner.
    WJ,
    /// Hangul LV syllable.
    H2,
    /// Hangul LVT syllable.
    H3,
    /// Hangul L jamo.
    JL,
    /// Hangul V jamo.
    JV,
    /// Hangul T jamo.
    JT,
    /// Regional indicator.
    RI,
    /// Emoji base.
    EB,
    /// Emoji modifier.
    EM,
    /// Zero width joiner.
    ZWJ,
    /// Contingent break opportunity.
    CB,
    /// Ambiguous (Alphabetic or Ideographic); folded to `AL` before use.
    AI,
    /// Mandatory break; folded from LF/NL on the first codepoint.
    BK,
    /// Conditional Japanese starter; folded to `NS` before use.
    CJ,
    /// Carriage return.
    CR,
    /// Line feed.
    LF,
    /// Next line.
    NL,
    /// Complex context dependent (South East Asian); folded to `AL`/`CM`.
    SA,
    /// Surrogate; folded to `AL` before use.
    SG,
    /// Space.
    SP,
    /// Unknown; folded to `AL` before use.
    XX,
}

pub(crate) const NUM_LINE_BREAK_CLASSES: usize = 43;

/// Unicode general category, restricted to the values this crate's
/// collaborators can observe (full UAX #44 category set).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[repr(u8)]
pub enum GeneralCategory {
    /// Uppercase letter.
    Lu,
    /// Lowercase letter.
    Ll,
    /// Titlecase letter.
    Lt,
    /// Modifier letter.
    Lm,
    /// Other letter.
    Lo,
    /// Non-spacing mark.
    Mn,
    /// Spacing combining mark.
    Mc,
    /// Enclosing mark.
    Me,
    /// Decimal digit number.
    Nd,
    /// Letter number.
    Nl,
    /// Other number.
    No,
    /// Connector punctuation.
    Pc,
    /// Dash punctuation.
    Pd,
    /// Open punctuation.
    Ps,
    /// Close punctuation.
    Pe,
    /// Initial quote punctuation.
    Pi,
    /// Final quote punctuation.
    Pf,
    /// Other punctuation.
    Po,
    /// Math symbol.
    Sm,
    /// Currency symbol.
    Sc,
    /// Modifier symbol.
    Sk,
    /// Other symbol.
    So,
    /// Space separator.
    Zs,
    /// Line separator.
    Zl,
    /// Paragraph separator.
    Zp,
    /// Control.
    Cc,
    /// Format.
    Cf,
    /// Surrogate.
    Cs,
    /// Private use.
    Co,
    /// Unassigned.
    Cn,
}

impl GeneralCategory {
    /// True for the two categories LB1/SA-folding cares about (spec.md §4.4).
    pub fn is_mark(self) -> bool {
        matches!(self, GeneralCategory::Mn | GeneralCategory::Mc)
    }
}

/// Unicode bidirectional character type (UAX #9), consumed here only by
/// `CodePoint::is_white_space` for non-ASCII BMP scalars (spec.md §4.1).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[repr(u8)]
pub enum BidiClass {
    /// Left-to-right.
    L,
    /// Right-to-left.
    R,
    /// Right-to-left Arabic.
    AL,
    /// European number.
    EN,
    /// European number separator.
    ES,
    /// European number terminator.
    ET,
    /// Arabic number.
    AN,
    /// Common number separator.
    CS,
    /// Non-spacing mark.
    NSM,
    /// Boundary neutral.
    BN,
    /// Paragraph separator.
    B,
    /// Segment separator.
    S,
    /// Whitespace; the only value `CodePoint::is_white_space` checks for.
    WS,
    /// Other neutral.
    ON,
    /// Left-to-right embedding.
    LRE,
    /// Left-to-right override.
    LRO,
    /// Right-to-left embedding.
    RLE,
    /// Right-to-left override.
    RLO,
    /// Pop directional format.
    PDF,
    /// Left-to-right isolate.
    LRI,
    /// Right-to-left isolate.
    RLI,
    /// First strong isolate.
    FSI,
    /// Pop directional isolate.
    PDI,
}

/// Grapheme-cluster-break class (UAX #29). Exposed so consumers share the
/// same entry points as the line-break core; not consumed by the scanner.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[repr(u8)]
pub enum GraphemeClusterBreak {
    /// No special grapheme-cluster-break behavior.
    Other,
    /// Control character.
    Control,
    /// Carriage return.
    CR,
    /// Line feed.
    LF,
    /// Combining or extending character.
    Extend,
    /// Zero width joiner.
    ZWJ,
    /// Regional indicator.
    RegionalIndicator,
    /// Prepended concatenation mark.
    Prepend,
    /// Spacing combining mark.
    SpacingMark,
    /// Hangul leading jamo.
    L,
    /// Hangul vowel jamo.
    V,
    /// Hangul trailing jamo.
    T,
    /// Hangul LV syllable.
    LV,
    /// Hangul LVT syllable.
    LVT,
}

include!(concat!(env!("OUT_DIR"), "/tables.rs"));

const LINE_BREAK_BITS: u32 = 6;
const GENERAL_CATEGORY_BITS: u32 = 5;
const BIDI_CLASS_BITS: u32 = 5;

const LINE_BREAK_SHIFT: u32 = 0;
const GENERAL_CATEGORY_SHIFT: u32 = LINE_BREAK_SHIFT + LINE_BREAK_BITS;
const BIDI_CLASS_SHIFT: u32 = GENERAL_CATEGORY_SHIFT + GENERAL_CATEGORY_BITS;
const GRAPHEME_CLUSTER_BREAK_SHIFT: u32 = BIDI_CLASS_SHIFT + BIDI_CLASS_BITS;

const LINE_BREAK_MASK: u32 = (1 << LINE_BREAK_BITS) - 1;
const GENERAL_CATEGORY_MASK: u32 = (1 << GENERAL_CATEGORY_BITS) - 1;
const BIDI_CLASS_MASK: u32 = (1 << BIDI_CLASS_BITS) - 1;

fn packed_properties(codepoint: u32) -> u32 {
    let codepoint = codepoint as usize;
    if codepoint >= 0x110000 {
        return 0; // XX/Cn/BN/Other — same as an unassigned trailing codepoint.
    }
    let page_index = PAGE_INDICES[codepoint >> 8];
    if (page_index & UNIFORM_PAGE) != 0 {
        (page_index & !UNIFORM_PAGE) as u32
    } else {
        PROPS_DATA[page_index][codepoint & 0xFF]
    }
}

/// Returns the UAX #14 line-break class of `codepoint`, before LB1 folding.
#[inline]
pub fn get_line_break_class(codepoint: u32) -> LineBreakClass {
    let bits = (packed_properties(codepoint) >> LINE_BREAK_SHIFT) & LINE_BREAK_MASK;
    unsafe { mem::transmute(bits as u8) }
}

/// Returns the Unicode general category of `codepoint`.
#[inline]
pub fn get_general_category(codepoint: u32) -> GeneralCategory {
    let bits = (packed_properties(codepoint) >> GENERAL_CATEGORY_SHIFT) & GENERAL_CATEGORY_MASK;
    unsafe { mem::transmute(bits as u8) }
}

/// Returns the bidi character type of `codepoint`.
#[inline]
pub fn get_bidi_type(codepoint: u32) -> BidiClass {
    let bits = (packed_properties(codepoint) >> BIDI_CLASS_SHIFT) & BIDI_CLASS_MASK;
    unsafe { mem::transmute(bits as u8) }
}

/// Returns the grapheme-cluster-break class of `codepoint`.
#[inline]
pub fn get_grapheme_cluster_class(codepoint: u32) -> GraphemeClusterBreak {
    let bits = (packed_properties(codepoint) >> GRAPHEME_CLUSTER_BREAK_SHIFT) & 0xF;
    unsafe { mem::transmute(bits as u8) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_letters_are_alphabetic() {
        assert_eq!(get_line_break_class('A' as u32), LineBreakClass::AL);
        assert_eq!(get_line_break_class('z' as u32), LineBreakClass::AL);
    }

    #[test]
    fn digits_are_numeric() {
        assert_eq!(get_line_break_class('5' as u32), LineBreakClass::NU);
        assert_eq!(get_general_category('5' as u32), GeneralCategory::Nd);
    }

    #[test]
    fn space_class() {
        assert_eq!(get_line_break_class(' ' as u32), LineBreakClass::SP);
    }

    #[test]
    fn hard_terminators() {
        assert_eq!(get_line_break_class('\n' as u32), LineBreakClass::LF);
        assert_eq!(get_line_break_class('\r' as u32), LineBreakClass::CR);
    }

    #[test]
    fn regional_indicators() {
        assert_eq!(get_line_break_class(0x1F1E6), LineBreakClass::RI);
        assert_eq!(get_line_break_class(0x1F1FF), LineBreakClass::RI);
    }

    #[test]
    fn combining_marks_are_nonspacing() {
        assert_eq!(get_line_break_class(0x0301), LineBreakClass::CM);
        assert!(get_general_category(0x0301).is_mark());
    }

    #[test]
    fn unassigned_defaults_to_xx_or_id() {
        // Inside the CJK Unified Ideographs block's default-ID range.
        assert_eq!(get_line_break_class(0x4E01), LineBreakClass::ID);
        // Outside any special default range.
        assert_eq!(get_line_break_class(0x05D0), LineBreakClass::XX);
    }
}
