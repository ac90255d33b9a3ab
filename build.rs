//! Generates `tables.rs` (packed, paged Unicode property trie) from the UCD
//! snapshot under `ucd/`. See SPEC_FULL.md §10.4 and `src/properties.rs`.
//!
//! Architecture borrowed from the teacher crate's own `build.rs`: parse
//! UCD-format range files with a regex, expand to one entry per codepoint,
//! then compress runs of 256 codepoints ("pages") that share a single value
//! down to just that value, so the vast unassigned regions of the codepoint
//! space cost one `usize` each instead of 256.

use regex::Regex;
use std::env;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

const MAX_CODEPOINT: u32 = 0x10FFFF;
const UNIFORM_PAGE: usize = 1 << 24;

// Keep in sync with the variant order of `LineBreakClass` in src/properties.rs.
const LINE_BREAK_CLASSES: [&str; 43] = [
    "OP", "CL", "CP", "QU", "GL", "NS", "EX", "SY", "IS", "PR", "PO", "NU", "AL", "HL", "ID", "IN",
    "HY", "BA", "BB", "B2", "ZW", "CM", "WJ", "H2", "H3", "JL", "JV", "JT", "RI", "EB", "EM",
    "ZWJ", "CB", "AI", "BK", "CJ", "CR", "LF", "NL", "SA", "SG", "SP", "XX",
];

// Keep in sync with `GeneralCategory` in src/properties.rs.
const GENERAL_CATEGORIES: [&str; 30] = [
    "Lu", "Ll", "Lt", "Lm", "Lo", "Mn", "Mc", "Me", "Nd", "Nl", "No", "Pc", "Pd", "Ps", "Pe", "Pi",
    "Pf", "Po", "Sm", "Sc", "Sk", "So", "Zs", "Zl", "Zp", "Cc", "Cf", "Cs", "Co", "Cn",
];

// Keep in sync with `BidiClass` in src/properties.rs.
const BIDI_CLASSES: [&str; 23] = [
    "L", "R", "AL", "EN", "ES", "ET", "AN", "CS", "NSM", "BN", "B", "S", "WS", "ON", "LRE", "LRO",
    "RLE", "RLO", "PDF", "LRI", "RLI", "FSI", "PDI",
];

// Keep in sync with `GraphemeClusterBreak` in src/properties.rs.
const GRAPHEME_CLUSTER_BREAKS: [&str; 14] = [
    "Other",
    "Control",
    "CR",
    "LF",
    "Extend",
    "ZWJ",
    "Regional_Indicator",
    "Prepend",
    "SpacingMark",
    "L",
    "V",
    "T",
    "LV",
    "LVT",
];

fn index_of(table: &[&str], key: &str) -> usize {
    table
        .iter()
        .position(|&k| k == key)
        .unwrap_or_else(|| panic!("unknown property value {:?}", key))
}

/// Mirrors the teacher's `default_value`: a handful of large, entirely
/// unassigned-but-reserved blocks get a non-XX line-break default instead of
/// falling through to the general "XX" catch-all.
fn default_line_break(codepoint: u32) -> &'static str {
    match codepoint {
        0x3400..=0x4DBF | 0x4E00..=0x9FFF | 0xF900..=0xFAFF => "ID",
        0x20000..=0x2FFFD | 0x30000..=0x3FFFD => "ID",
        0x1F000..=0x1FFFD => "ID",
        0x20A0..=0x20CF => "PR",
        _ => "XX",
    }
}

/// Parses a UCD-format range file (`XXXX;VALUE` or `XXXX..YYYY;VALUE`,
/// `#` comments, blank lines ignored) into a dense per-codepoint index array.
fn parse_property_file(
    path: &str,
    table: &[&str],
    default: impl Fn(u32) -> &'static str,
) -> Vec<usize> {
    let re = Regex::new(
        r"(?x)^
        (?P<start>[[:xdigit:]]{4,})
        (?:\.{2}(?P<end>[[:xdigit:]]{4,}))?
        \s*;\s*
        (?P<value>[A-Za-z_]+)",
    )
    .unwrap();

    let mut values: Vec<usize> = (0..=MAX_CODEPOINT)
        .map(|cp| index_of(table, default(cp)))
        .collect();

    let file = File::open(path).unwrap_or_else(|e| panic!("opening {}: {}", path, e));
    for line in BufReader::new(file).lines() {
        let line = line.unwrap();
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let caps = match re.captures(line) {
            Some(c) => c,
            None => continue,
        };
        let start = u32::from_str_radix(&caps["start"], 16).unwrap();
        let end = caps
            .name("end")
            .and_then(|m| u32::from_str_radix(m.as_str(), 16).ok())
            .unwrap_or(start);
        let idx = index_of(table, &caps["value"]);
        for cp in start..=end.min(MAX_CODEPOINT) {
            values[cp as usize] = idx;
        }
    }
    values
}

fn main() -> std::io::Result<()> {
    println!("cargo:rerun-if-changed=ucd/LineBreak.txt");
    println!("cargo:rerun-if-changed=ucd/DerivedGeneralCategory.txt");
    println!("cargo:rerun-if-changed=ucd/DerivedBidiClass.txt");
    println!("cargo:rerun-if-changed=ucd/GraphemeBreakProperty.txt");

    let line_break = parse_property_file("ucd/LineBreak.txt", &LINE_BREAK_CLASSES, default_line_break);
    let general_category =
        parse_property_file("ucd/DerivedGeneralCategory.txt", &GENERAL_CATEGORIES, |_| "Cn");
    let bidi_class = parse_property_file("ucd/DerivedBidiClass.txt", &BIDI_CLASSES, |_| "L");
    let grapheme_cluster = parse_property_file(
        "ucd/GraphemeBreakProperty.txt",
        &GRAPHEME_CLUSTER_BREAKS,
        |_| "Other",
    );

    let packed: Vec<u32> = (0..=MAX_CODEPOINT as usize)
        .map(|cp| {
            (line_break[cp] as u32)
                | ((general_category[cp] as u32) << 6)
                | ((bidi_class[cp] as u32) << 11)
                | ((grapheme_cluster[cp] as u32) << 16)
        })
        .collect();

    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("tables.rs");
    let mut stream = BufWriter::new(File::create(&dest_path)?);

    writeln!(stream, "static PROPS_DATA: &[[u32; 256]] = &[")?;
    let mut page_indices = Vec::new();
    let mut page_count = 0usize;
    for page in packed.chunks(256) {
        let first = page[0];
        if page.iter().all(|&v| v == first) {
            page_indices.push(first as usize | UNIFORM_PAGE);
        } else {
            write!(stream, "[")?;
            for (i, v) in page.iter().enumerate() {
                if i > 0 {
                    write!(stream, ",")?;
                }
                write!(stream, "{}", v)?;
            }
            writeln!(stream, "],")?;
            page_indices.push(page_count);
            page_count += 1;
        }
    }
    writeln!(stream, "];")?;

    writeln!(stream, "const UNIFORM_PAGE: usize = {};", UNIFORM_PAGE)?;
    writeln!(
        stream,
        "static PAGE_INDICES: [usize; {}] = [",
        page_indices.len()
    )?;
    for idx in &page_indices {
        write!(stream, "{},", idx)?;
    }
    writeln!(stream, "];")?;

    Ok(())
}
