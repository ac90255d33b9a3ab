//! The line-break scanner (spec.md §4.4): a stateful, single-pass cursor
//! over a borrowed UTF-16 source that lazily yields break opportunities.

use crate::decode::{decode_at, decode_before};
use crate::pairtable::{PairTableEntry, PAIR_TABLE};
use crate::properties::{get_general_category, get_line_break_class, LineBreakClass};
use log::{debug, trace};

use LineBreakClass::{
    AL, BA, BK, CB, CJ, CL, CM, CP, CR, EX, HL, HY, IN, IS, LF, NL, NU, OP, PO, PR, RI, SA, SG, SP,
    SY, WJ, XX, ZW, ZWJ,
};
use PairTableEntry::{
    CombiningIndirectBreak as CIBRK, CombiningProhibitedBreak as CPBRK, DirectBreak as DIBRK,
    IndirectBreak as INBRK, Prohibited as PRBRK,
};

/// One break opportunity (or mandatory break) emitted by the scanner
/// (spec.md §3 "LineBreak").
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct LineBreak {
    /// Code-unit index where the visible line content ends (before any
    /// trailing whitespace).
    pub position_wrap: usize,
    /// Code-unit index where the next line begins — immediately past the
    /// break.
    pub position_required: usize,
    /// `true` for a mandatory break (after BK/CR/LF/NL, or end-of-text
    /// following one), `false` for a break opportunity.
    pub required: bool,
}

/// LB1: folds the ambiguous/surrogate/conditional classes into concrete
/// ones before the state machine ever sees them.
fn fold_class(raw: LineBreakClass, scalar: u32) -> LineBreakClass {
    match raw {
        LineBreakClass::AI | SG | XX => AL,
        SA => {
            if get_general_category(scalar).is_mark() {
                CM
            } else {
                AL
            }
        }
        CJ => LineBreakClass::NS,
        other => other,
    }
}

/// The first folded class is adjusted once more before becoming the
/// scanner's initial `currentClass`.
fn map_first(folded: LineBreakClass) -> LineBreakClass {
    match folded {
        LF | NL => BK,
        SP => WJ,
        other => other,
    }
}

/// A single-pass, stateful cursor over a borrowed UTF-16 source that yields
/// line-break opportunities on demand (spec.md §4.4, §5, §9 "Iterator
/// shape"). Never shared across threads; restarting means constructing a
/// fresh scanner.
pub struct LineBreakScanner<'a> {
    source: &'a [u16],
    cursor: usize,
    current_class: LineBreakClass,
    next_class: LineBreakClass,
    first: bool,
    initialized: bool,
    done: bool,
    lb8a: bool,
    lb21a: bool,
    lb22ex: bool,
    lb24ex: bool,
    lb25ex: bool,
    lb30: bool,
    lb31: bool,
    lb30a: u8,
    alpha_numeric_count: u32,
}

impl<'a> LineBreakScanner<'a> {
    /// Constructs a scanner over `source`. No work happens until the first
    /// call to [`LineBreakScanner::try_get_next_break`].
    pub fn new(source: &'a [u16]) -> Self {
        debug!("linebreak scanner over {} code units", source.len());
        LineBreakScanner {
            source,
            cursor: 0,
            current_class: XX,
            next_class: XX,
            first: true,
            initialized: false,
            done: false,
            lb8a: false,
            lb21a: false,
            lb22ex: false,
            lb24ex: false,
            lb25ex: false,
            lb30: false,
            lb31: false,
            lb30a: 0,
            alpha_numeric_count: 0,
        }
    }

    /// Advances past the next break opportunity and returns it, or `None`
    /// once no further break (including the synthetic end-of-text break)
    /// remains. The public name spec.md gives this operation; `next()` (the
    /// [`Iterator`] impl below) is the idiomatic alias.
    pub fn try_get_next_break(&mut self) -> Option<LineBreak> {
        if self.done {
            return None;
        }
        if !self.initialized {
            self.initialized = true;
            if self.source.is_empty() {
                self.done = true;
                return None;
            }
            self.initialize();
        }

        loop {
            if self.cursor >= self.source.len() {
                self.done = true;
                let required =
                    self.current_class == BK || (self.current_class == CR && self.next_class != LF);
                let pos = self.source.len();
                return Some(LineBreak {
                    position_wrap: self.find_prior_non_whitespace(pos),
                    position_required: pos,
                    required,
                });
            }

            let last_position = self.cursor;
            let last_class = self.next_class;
            self.consume_next();
            trace!(
                "consumed unit {} -> {:?} (current {:?})",
                last_position, self.next_class, self.current_class
            );

            // Explicit newline.
            if self.current_class == BK || (self.current_class == CR && self.next_class != LF) {
                self.current_class = map_first(self.next_class);
                return Some(LineBreak {
                    position_wrap: self.find_prior_non_whitespace(last_position),
                    position_required: last_position,
                    required: true,
                });
            }

            // Simple break (explicit space/newline/CR run tracking).
            match self.next_class {
                SP => continue,
                LineBreakClass::BK | LF | NL => {
                    self.current_class = BK;
                    continue;
                }
                CR => {
                    self.current_class = CR;
                    continue;
                }
                _ => {}
            }

            if let Some(line_break) = self.resolve_pair(last_position, last_class) {
                return Some(line_break);
            }
        }
    }

    fn initialize(&mut self) {
        let folded0 = self.consume_next();
        self.first = false;
        self.lb8a = folded0 == ZWJ;
        self.lb30a = 0;
        self.current_class = map_first(folded0);
    }

    /// Decodes the codepoint at `self.cursor`, folds its class, applies the
    /// per-codepoint bookkeeping (spec.md §4.4), advances the cursor past
    /// it, and stores the folded class in `self.next_class`.
    fn consume_next(&mut self) -> LineBreakClass {
        let (cp, width) = decode_at(self.source, self.cursor);
        self.cursor += width;
        let scalar = cp.value();
        let folded = fold_class(get_line_break_class(scalar), scalar);
        self.bookkeeping(scalar, folded);
        self.next_class = folded;
        folded
    }

    fn bookkeeping(&mut self, scalar: u32, new_class: LineBreakClass) {
        let prev = self.current_class;

        // 1.
        if matches!(prev, AL | HL | NU) || (self.alpha_numeric_count > 0 && new_class == CM) {
            self.alpha_numeric_count += 1;
        }
        // 2.
        if new_class == CM && matches!(prev, BK | CB | EX | LF | NL | SP | ZW | CR) {
            self.lb22ex = true;
        }
        // 3.
        if self.first && new_class == CM {
            self.lb31 = true;
        }
        // 4.
        if new_class == CM && matches!(prev, BK | CB | EX | LF | NL | SP | ZW | CR | ZWJ) {
            self.lb31 = true;
        }
        // 5.
        if self.first && matches!(new_class, PO | PR | SP) {
            self.lb31 = true;
        }
        // 6.
        if prev == AL && matches!(new_class, PO | PR | SP) {
            self.lb31 = true;
        }
        // 7.
        if self.lb31 && !matches!(prev, PO | PR) && new_class == OP && scalar == 0x0028 {
            self.lb31 = false;
        }
        // 8.
        if self.first && matches!(new_class, CL | CP) {
            self.lb24ex = true;
        }
        // 9.
        if self.first && matches!(new_class, CL | IS | SY) {
            self.lb25ex = true;
        }
        // 10.
        if matches!(new_class, SP | WJ | AL) {
            let (peek_cp, _) = decode_at(self.source, self.cursor);
            let peek_scalar = peek_cp.value();
            let peek_class = fold_class(get_line_break_class(peek_scalar), peek_scalar);
            if matches!(peek_class, CL | IS | SY) {
                self.lb25ex = true;
            }
        }
        // 11.
        self.lb30 = self.alpha_numeric_count > 0
            && new_class == OP
            && !matches!(scalar, 0x0028 | 0x005B | 0x007B);
    }

    /// Pair-table resolution for one (currentClass, nextClass) transition.
    /// Returns `Some` iff a break is emitted; mutates scanner state exactly
    /// like spec.md §4.4's per-step algorithm. CIBRK's miss path returns
    /// early, skipping the post-rules and the `currentClass` update; CPBRK's
    /// `lastClass != SP` miss does the same (spec.md §9 Open Question (b)),
    /// but its `lastClass == SP` case carries `shouldBreak = false` *into*
    /// the post-rules below rather than returning, since LB22/LB8a/LB21a/
    /// LB30a may still flip it.
    fn resolve_pair(&mut self, last_position: usize, last_class: LineBreakClass) -> Option<LineBreak> {
        let entry = PAIR_TABLE[self.current_class as usize][self.next_class as usize];

        let mut should_break = match entry {
            DIBRK => true,
            INBRK => {
                if self.lb31 && self.next_class == OP {
                    self.lb31 = false;
                    true
                } else if self.lb30 {
                    self.lb30 = false;
                    self.alpha_numeric_count = 0;
                    true
                } else if self.lb25ex && matches!(self.next_class, PR | NU) {
                    self.lb25ex = false;
                    true
                } else if self.lb24ex && matches!(self.next_class, PO | PR) {
                    self.lb24ex = false;
                    true
                } else {
                    last_class == SP
                }
            }
            CIBRK => {
                let should_break = last_class == SP;
                if !should_break {
                    return None; // Early return: no further adjustment.
                }
                should_break
            }
            CPBRK => {
                if last_class != SP {
                    return None; // Early return: currentClass stays stale.
                }
                false // Carried into the post-rules below, which may still flip it.
            }
            PRBRK => false,
        };

        // Rule LB22: no break before IN, unless the context allows it.
        if self.next_class == IN {
            should_break = match last_class {
                LineBreakClass::BK | CB | EX | LF | NL | SP | ZW => should_break,
                CM => {
                    if self.lb22ex {
                        self.lb22ex = false;
                        should_break
                    } else {
                        false
                    }
                }
                _ => false,
            };
        }
        // Rule LB8a: no break after a zero width joiner.
        if self.lb8a {
            should_break = false;
        }
        // Rule LB21a: no break after Hebrew + Hyphen/BA.
        if self.lb21a && matches!(self.current_class, HY | BA) {
            should_break = false;
            self.lb21a = false;
        } else {
            self.lb21a = self.current_class == HL;
        }
        // Rule LB30a: regional indicator pairing.
        if self.current_class == RI {
            self.lb30a += 1;
            if self.lb30a == 2 && self.next_class == RI {
                should_break = true;
                self.lb30a = 0;
            }
        } else {
            self.lb30a = 0;
        }

        self.current_class = self.next_class;
        self.lb8a = self.next_class == ZWJ;

        if should_break {
            Some(LineBreak {
                position_wrap: self.find_prior_non_whitespace(last_position),
                position_required: last_position,
                required: false,
            })
        } else {
            None
        }
    }

    /// Steps `from` back past at most one hard terminator (CRLF counting as
    /// a single terminator) and then past any run of spaces, so a break's
    /// `position_wrap` excludes trailing whitespace (spec.md §4.4
    /// "findPriorNonWhitespace").
    fn find_prior_non_whitespace(&self, from: usize) -> usize {
        let mut pos = from;

        let (cp, width) = decode_before(self.source, pos);
        let cls = fold_class(get_line_break_class(cp.value()), cp.value());
        if matches!(cls, BK | LF | CR) {
            pos -= width;
            if cls == LF && pos > 0 {
                let (prev_cp, prev_width) = decode_before(self.source, pos);
                if prev_cp.value() == '\r' as u32 {
                    pos -= prev_width;
                }
            }
        }

        while pos > 0 {
            let (cp, width) = decode_before(self.source, pos);
            let cls = fold_class(get_line_break_class(cp.value()), cp.value());
            if cls == SP {
                pos -= width;
            } else {
                break;
            }
        }

        pos
    }
}

impl<'a> Iterator for LineBreakScanner<'a> {
    type Item = LineBreak;

    fn next(&mut self) -> Option<LineBreak> {
        self.try_get_next_break()
    }
}
