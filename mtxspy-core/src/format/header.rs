//! Matrix Market header model
//!
//! The header captures everything the banner and dimensions lines declare.
//! It is immutable once parsed; the rest of the pipeline only reads it.

use core::fmt;

/// Entry layout declared by the banner line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MatrixFormat {
    /// Sparse coordinate list, one `row col [value]` triple per line
    Coordinate,
    /// Dense column-major value list; parses fine, rejected by the pipeline
    Array,
}

impl MatrixFormat {
    /// Keyword spelled in the banner line
    pub const fn as_keyword(self) -> &'static str {
        match self {
            MatrixFormat::Coordinate => "coordinate",
            MatrixFormat::Array => "array",
        }
    }
}

impl fmt::Display for MatrixFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_keyword())
    }
}

/// Element type declared by the banner line
///
/// The aggregation pipeline ignores values entirely, so this only decides
/// whether a value field may appear on data lines. The `complex` token is
/// tolerated; no complex arithmetic happens anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ElementType {
    Integer,
    Real,
    Complex,
    Pattern,
}

impl ElementType {
    /// Keyword spelled in the banner line
    pub const fn as_keyword(self) -> &'static str {
        match self {
            ElementType::Integer => "integer",
            ElementType::Real => "real",
            ElementType::Complex => "complex",
            ElementType::Pattern => "pattern",
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_keyword())
    }
}

/// Symmetry declared by the banner line
///
/// Anything other than `General` makes the file omit the mirror of every
/// off-diagonal entry; the grid reconstructs them during aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Symmetry {
    General,
    Symmetric,
    SkewSymmetric,
    Hermitian,
}

impl Symmetry {
    /// Keyword spelled in the banner line
    pub const fn as_keyword(self) -> &'static str {
        match self {
            Symmetry::General => "general",
            Symmetry::Symmetric => "symmetric",
            Symmetry::SkewSymmetric => "skew-symmetric",
            Symmetry::Hermitian => "hermitian",
        }
    }
}

impl fmt::Display for Symmetry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_keyword())
    }
}

/// Validated Matrix Market header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Header {
    pub format: MatrixFormat,
    pub element_type: ElementType,
    pub symmetry: Symmetry,
    /// Declared row count, always > 0 after a successful parse
    pub rows: u64,
    /// Declared column count, always > 0 after a successful parse
    pub cols: u64,
    /// Entries listed in the file body; symmetry-implied mirrors are not
    /// included. Advisory only, never cross-checked against the data lines.
    pub declared_entries: u64,
    /// Physical lines consumed before the first data line (banner, comments,
    /// blanks, and the dimensions line). Later diagnostics continue this
    /// running line count.
    pub preamble_lines: u64,
}

impl Header {
    /// Literal first token of every Matrix Market file, case-sensitive
    pub const MAGIC: &'static str = "%%MatrixMarket";

    /// Re-serialize the recognized fields into a banner line
    ///
    /// Parsing the result yields the same format, element type, and symmetry.
    pub fn banner(&self) -> String {
        format!(
            "{} matrix {} {} {}",
            Self::MAGIC,
            self.format,
            self.element_type,
            self.symmetry
        )
    }

    /// True when data lines imply their mirrored counterpart
    pub fn is_symmetric(&self) -> bool {
        self.symmetry != Symmetry::General
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_round_trip_display() {
        assert_eq!(MatrixFormat::Coordinate.to_string(), "coordinate");
        assert_eq!(ElementType::Pattern.to_string(), "pattern");
        assert_eq!(Symmetry::SkewSymmetric.to_string(), "skew-symmetric");
    }

    #[test]
    fn test_banner_line() {
        let header = Header {
            format: MatrixFormat::Coordinate,
            element_type: ElementType::Real,
            symmetry: Symmetry::Symmetric,
            rows: 4,
            cols: 4,
            declared_entries: 2,
            preamble_lines: 2,
        };
        assert_eq!(
            header.banner(),
            "%%MatrixMarket matrix coordinate real symmetric"
        );
    }

    #[test]
    fn test_symmetry_predicate() {
        for symmetry in [Symmetry::Symmetric, Symmetry::SkewSymmetric, Symmetry::Hermitian] {
            let header = Header {
                format: MatrixFormat::Coordinate,
                element_type: ElementType::Pattern,
                symmetry,
                rows: 1,
                cols: 1,
                declared_entries: 0,
                preamble_lines: 2,
            };
            assert!(header.is_symmetric());
        }
    }
}
