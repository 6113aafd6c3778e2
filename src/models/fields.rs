// Static description of the TD3 MRZ layout: which character ranges of which
// line hold which field, and the characters OCR engines commonly confuse.

use lazy_static::lazy_static;
use std::collections::HashMap;

/// Length of a TD3 MRZ line.
pub const MRZ_LINE_LEN: usize = 44;

/// Padding/absence marker used throughout the MRZ.
pub const FILLER: char = '<';

/// Expected character class of an MRZ field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alphabet {
    Digits,
    Letters,
}

impl Alphabet {
    pub fn contains(&self, c: char) -> bool {
        match self {
            Alphabet::Digits => c.is_ascii_digit(),
            Alphabet::Letters => c.is_ascii_uppercase(),
        }
    }

    /// The other class, used to pick which confusion-table entries apply to
    /// a field: only substitutions whose source is a misread from the
    /// complementary class are meaningful.
    pub fn complement(&self) -> Alphabet {
        match self {
            Alphabet::Digits => Alphabet::Letters,
            Alphabet::Letters => Alphabet::Digits,
        }
    }
}

/// Location and expected alphabet of a single MRZ field.
///
/// `line` is 0 for the visual/name line and 1 for the data line; `start` and
/// `end` are 0-indexed character offsets with `end` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub line: usize,
    pub start: usize,
    pub end: usize,
    pub alphabet: Alphabet,
}

const fn field(line: usize, start: usize, end: usize, alphabet: Alphabet) -> FieldSpec {
    FieldSpec {
        line,
        start,
        end,
        alphabet,
    }
}

/// The TD3 passport field registry.
///
/// The document-number body (line 2, offsets 0-9) is deliberately absent:
/// it is alphanumeric, so neither expected alphabet applies to it.
pub const PASSPORT_FIELDS: &[(&str, FieldSpec)] = &[
    ("document_type", field(0, 0, 2, Alphabet::Letters)),
    ("country_code", field(0, 2, 5, Alphabet::Letters)),
    ("full_name", field(0, 5, 44, Alphabet::Letters)),
    ("document_number_check", field(1, 9, 10, Alphabet::Digits)),
    ("nationality", field(1, 10, 13, Alphabet::Letters)),
    ("birth_date", field(1, 13, 19, Alphabet::Digits)),
    ("birth_date_check", field(1, 19, 20, Alphabet::Digits)),
    ("expiry_date", field(1, 21, 27, Alphabet::Digits)),
    ("expiry_date_check", field(1, 27, 28, Alphabet::Digits)),
    ("optional_data_check", field(1, 42, 43, Alphabet::Digits)),
    ("final_check", field(1, 43, 44, Alphabet::Digits)),
];

lazy_static! {
    /// Single most-likely optical substitute for each commonly misread
    /// character. Lookups outside this set leave the character unchanged.
    pub static ref MRZ_REPLACEMENTS: HashMap<char, char> = {
        let mut m = HashMap::new();
        m.insert('0', 'O');
        m.insert('O', '0');
        m.insert('D', '0');
        m.insert('I', '1');
        m.insert('1', 'I');
        m.insert('2', 'Z');
        m.insert('Z', '2');
        m.insert('5', 'S');
        m.insert('S', '5');
        m.insert('B', '8');
        m.insert('8', 'B');
        m
    };
}

/// Returns the confused counterpart of `c`, if the character is optically
/// ambiguous.
pub fn confusion_for(c: char) -> Option<char> {
    MRZ_REPLACEMENTS.get(&c).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_ranges_within_line_bounds() {
        for (name, spec) in PASSPORT_FIELDS {
            assert!(spec.line < 2, "{} is on a nonexistent line", name);
            assert!(spec.start < spec.end, "{} has an empty range", name);
            assert!(spec.end <= MRZ_LINE_LEN, "{} exceeds the line length", name);
        }
    }

    #[test]
    fn test_field_ranges_do_not_overlap() {
        for (i, (name_a, a)) in PASSPORT_FIELDS.iter().enumerate() {
            for (name_b, b) in &PASSPORT_FIELDS[i + 1..] {
                if a.line != b.line {
                    continue;
                }
                let disjoint = a.end <= b.start || b.end <= a.start;
                assert!(disjoint, "{} overlaps {}", name_a, name_b);
            }
        }
    }

    #[test]
    fn test_confusion_table_entries() {
        assert_eq!(confusion_for('O'), Some('0'));
        assert_eq!(confusion_for('0'), Some('O'));
        assert_eq!(confusion_for('D'), Some('0'));
        assert_eq!(confusion_for('5'), Some('S'));
        assert_eq!(confusion_for('8'), Some('B'));
        // Characters outside the table are left alone.
        assert_eq!(confusion_for('A'), None);
        assert_eq!(confusion_for('7'), None);
        assert_eq!(confusion_for(FILLER), None);
    }

    #[test]
    fn test_alphabet_membership() {
        assert!(Alphabet::Digits.contains('4'));
        assert!(!Alphabet::Digits.contains('A'));
        assert!(Alphabet::Letters.contains('Z'));
        assert!(!Alphabet::Letters.contains('9'));
        assert!(!Alphabet::Letters.contains(FILLER));
        assert_eq!(Alphabet::Digits.complement(), Alphabet::Letters);
    }
}
