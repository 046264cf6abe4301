//! Table-driven keyword recognition for the banner line
//!
//! Each banner slot matches against an ordered table mapping keyword to enum
//! variant, so adding or removing a keyword is a one-line change. Matching is
//! case-insensitive; the magic banner itself is matched elsewhere,
//! case-sensitively.

use super::header::{ElementType, MatrixFormat, Symmetry};

/// Storage formats accepted in banner slot three
pub const FORMATS: &[(&str, MatrixFormat)] = &[
    ("coordinate", MatrixFormat::Coordinate),
    ("array", MatrixFormat::Array),
];

/// Element types accepted in banner slot four
pub const ELEMENT_TYPES: &[(&str, ElementType)] = &[
    ("integer", ElementType::Integer),
    ("real", ElementType::Real),
    ("complex", ElementType::Complex),
    ("pattern", ElementType::Pattern),
];

/// Symmetries accepted in banner slot five
pub const SYMMETRIES: &[(&str, Symmetry)] = &[
    ("general", Symmetry::General),
    ("symmetric", Symmetry::Symmetric),
    ("skew-symmetric", Symmetry::SkewSymmetric),
    ("hermitian", Symmetry::Hermitian),
];

/// Case-insensitive lookup in an ordered keyword table
pub fn lookup<T: Copy>(word: &str, table: &[(&str, T)]) -> Option<T> {
    table
        .iter()
        .find(|(keyword, _)| keyword.eq_ignore_ascii_case(word))
        .map(|&(_, value)| value)
}

/// Quoted, comma-separated keyword list for error messages
pub fn expected_list<T>(table: &[(&str, T)]) -> String {
    let mut out = String::new();
    for (i, (keyword, _)) in table.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push('\'');
        out.push_str(keyword);
        out.push('\'');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(lookup("COORDINATE", FORMATS), Some(MatrixFormat::Coordinate));
        assert_eq!(lookup("Real", ELEMENT_TYPES), Some(ElementType::Real));
        assert_eq!(
            lookup("Skew-Symmetric", SYMMETRIES),
            Some(Symmetry::SkewSymmetric)
        );
    }

    #[test]
    fn test_lookup_rejects_unknown() {
        assert_eq!(lookup("dense", FORMATS), None);
        assert_eq!(lookup("boolean", ELEMENT_TYPES), None);
        assert_eq!(lookup("", SYMMETRIES), None);
    }

    #[test]
    fn test_expected_list_preserves_order() {
        assert_eq!(expected_list(FORMATS), "'coordinate', 'array'");
        assert_eq!(
            expected_list(ELEMENT_TYPES),
            "'integer', 'real', 'complex', 'pattern'"
        );
    }
}
