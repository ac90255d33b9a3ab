//! The UAX #14 pair table (spec.md §3 "PairTableEntry", §9 "Pair table").
//!
//! Unlike the per-codepoint property tables in `properties.rs`, this table's
//! domain is the 43 fixed line-break classes, not the ~1.1M Unicode scalar
//! values, so it is small enough to construct directly in Rust rather than
//! through the `build.rs` codegen pipeline. It is built once, lazily, and
//! never mutated afterwards (spec.md §5).

use crate::properties::{LineBreakClass, NUM_LINE_BREAK_CLASSES};
use once_cell::sync::Lazy;

#[allow(unused_imports)]
use LineBreakClass::{
    AI, AL, B2, BA, BB, BK, CB, CJ, CL, CM, CP, CR, EB, EM, EX, GL, H2, H3, HL, HY, ID, IN, IS, JL,
    JT, JV, LF, NL, NS, NU, OP, PO, PR, QU, RI, SA, SG, SP, SY, WJ, XX, ZW, ZWJ,
};

/// One cell of the pair table (spec.md §3).
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum PairTableEntry {
    /// Direct break: a break is always allowed here.
    DirectBreak,
    /// Indirect break: normally prohibited, but the scanner's exception
    /// flags (`lb24ex`, `lb25ex`, `lb30`, `lb31`) or a preceding space can
    /// force a break (spec.md §4.4 "Pair-table resolution").
    IndirectBreak,
    /// Combining-indirect break: like an indirect break, but a miss skips
    /// the remaining per-step rules (LB22, LB8a, LB21a, LB30a) entirely.
    CombiningIndirectBreak,
    /// Combining-prohibited break: never breaks by itself. When the
    /// preceding class was space, control falls through to the scanner's
    /// post-rules (LB22/LB8a/LB21a/LB30a), any of which may still force a
    /// break; otherwise the cell misses and, unlike every other cell kind,
    /// `currentClass` is *not* advanced (spec.md §9 Open Question (b),
    /// reproduced as observed).
    CombiningProhibitedBreak,
    /// Always prohibited.
    Prohibited,
}

#[allow(unused_imports)]
use PairTableEntry::{
    CombiningIndirectBreak as CIBRK, CombiningProhibitedBreak as CPBRK, DirectBreak as DIBRK,
    IndirectBreak as INBRK, Prohibited as PRBRK,
};

pub(crate) static PAIR_TABLE: Lazy<[[PairTableEntry; NUM_LINE_BREAK_CLASSES]; NUM_LINE_BREAK_CLASSES]> =
    Lazy::new(build_pair_table);

fn set_row(
    table: &mut [[PairTableEntry; NUM_LINE_BREAK_CLASSES]; NUM_LINE_BREAK_CLASSES],
    row: LineBreakClass,
    value: PairTableEntry,
) {
    table[row as usize] = [value; NUM_LINE_BREAK_CLASSES];
}

fn set_col(
    table: &mut [[PairTableEntry; NUM_LINE_BREAK_CLASSES]; NUM_LINE_BREAK_CLASSES],
    col: LineBreakClass,
    value: PairTableEntry,
) {
    for row in table.iter_mut() {
        row[col as usize] = value;
    }
}

fn set_cell(
    table: &mut [[PairTableEntry; NUM_LINE_BREAK_CLASSES]; NUM_LINE_BREAK_CLASSES],
    row: LineBreakClass,
    col: LineBreakClass,
    value: PairTableEntry,
) {
    table[row as usize][col as usize] = value;
}

/// Builds the pair table by applying the tailorable UAX #14 rules in
/// ascending rule-number order, so a later (more specific) rule's cells
/// always win over an earlier (more general) one's.
///
/// The scanner (spec.md §4.4) implements LB1-LB3, LB5, LB6, LB8a, LB18,
/// LB21a, LB22, LB30a and the explicit end-of-text/mandatory-break handling
/// itself, outside the table. In particular LB18 ("break after spaces")
/// never touches a row here: `SP` is intercepted before reaching the table
/// at all, and the scanner instead carries it forward as `lastClass`, which
/// is exactly what the default `IndirectBreak` entry below — and the
/// `CombiningIndirectBreak`/`CombiningProhibitedBreak` miss paths — consult.
/// So the table's default is *indirect*, not prohibited: most class pairs
/// only break when a space separated them, and only the rules below carve
/// out the pairs that are unconditionally direct or unconditionally
/// prohibited.
fn build_pair_table() -> [[PairTableEntry; NUM_LINE_BREAK_CLASSES]; NUM_LINE_BREAK_CLASSES] {
    let mut t = [[INBRK; NUM_LINE_BREAK_CLASSES]; NUM_LINE_BREAK_CLASSES];

    // LB7: do not break before a zero-width space (SP itself never reaches
    // this table, see above).
    set_col(&mut t, ZW, PRBRK);
    // LB8: always break after a zero-width space, even before another one.
    set_row(&mut t, ZW, DIBRK);

    // LB9/LB10: a combining mark or joiner glues to whatever precedes it,
    // unless that preceding context was itself a space (the scanner detects
    // that case via `lastClass == SP` and the CPBRK miss path).
    set_col(&mut t, CM, CPBRK);
    set_col(&mut t, ZWJ, CPBRK);

    // LB11: never break around a word joiner.
    set_row(&mut t, WJ, PRBRK);
    set_col(&mut t, WJ, PRBRK);
    // LB12/LB12a: never break after non-breaking glue, nor before it.
    set_row(&mut t, GL, PRBRK);
    set_col(&mut t, GL, PRBRK);

    // LB13: never break before closing punctuation, exclamation, or the
    // infix/symbol separators.
    for col in [CL, CP, EX, IS, SY] {
        set_col(&mut t, col, PRBRK);
    }
    // LB14: never break after an opening punctuation, even after spaces
    // (a plain `Prohibited` cell ignores `lastClass` entirely, which is
    // exactly the "even after spaces" proviso).
    set_row(&mut t, OP, PRBRK);

    // LB19: never break around a quotation mark.
    set_col(&mut t, QU, PRBRK);
    set_row(&mut t, QU, PRBRK);
    set_cell(&mut t, QU, CM, CIBRK); // LB19's blanket PRBRK above must not clobber LB9/10.

    // LB20: always break before and after an unresolved contingent break.
    set_row(&mut t, CB, DIBRK);
    set_col(&mut t, CB, DIBRK);

    // LB21: never break before a hyphen, a break-after class, or a
    // non-starter, nor after a break-before class.
    for col in [HY, BA, LineBreakClass::NS] {
        set_col(&mut t, col, PRBRK);
    }
    set_row(&mut t, BB, PRBRK);

    // LB23: never break between a letter and a digit in either order.
    for (row, col) in [(AL, NU), (HL, NU), (NU, AL), (NU, HL)] {
        set_cell(&mut t, row, col, PRBRK);
    }
    // LB23a: never break between a numeric prefix/postfix and an
    // ideograph/emoji.
    for (row, col) in [(PR, ID), (PR, EB), (PR, EM), (ID, PO), (EB, PO), (EM, PO)] {
        set_cell(&mut t, row, col, PRBRK);
    }

    t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn most_pairs_are_indirect_by_default() {
        assert_eq!(PAIR_TABLE[AL as usize][AL as usize], INBRK);
        assert_eq!(PAIR_TABLE[AL as usize][OP as usize], INBRK);
    }

    #[test]
    fn zero_width_space_always_breaks_after() {
        assert_eq!(PAIR_TABLE[ZW as usize][AL as usize], DIBRK);
        assert_eq!(PAIR_TABLE[ZW as usize][ZW as usize], DIBRK);
    }

    #[test]
    fn quotation_marks_never_break() {
        assert_eq!(PAIR_TABLE[QU as usize][AL as usize], PRBRK);
        assert_eq!(PAIR_TABLE[AL as usize][QU as usize], PRBRK);
    }

    #[test]
    fn combining_mark_column_is_prohibited_by_default() {
        assert_eq!(PAIR_TABLE[AL as usize][CM as usize], CPBRK);
    }

    #[test]
    fn opening_punctuation_never_breaks_after_even_following_a_space() {
        assert_eq!(PAIR_TABLE[OP as usize][AL as usize], PRBRK);
    }
}
