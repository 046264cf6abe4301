//! Property-based tests for the parser and the occupancy grid
//!
//! These tests use proptest to verify the block-size derivation, the
//! order-independence of aggregation, and header round-tripping.

use proptest::prelude::*;
use mtxspy_core::{
    parse_entries, parse_header, ElementType, Grid, Header, MatrixFormat, SliceSource, Symmetry,
};

fn header(rows: u64, cols: u64, symmetry: Symmetry) -> Header {
    Header {
        format: MatrixFormat::Coordinate,
        element_type: ElementType::Pattern,
        symmetry,
        rows,
        cols,
        declared_entries: 0,
        preamble_lines: 2,
    }
}

fn symmetry_strategy() -> impl Strategy<Value = Symmetry> {
    prop_oneof![
        Just(Symmetry::General),
        Just(Symmetry::Symmetric),
        Just(Symmetry::SkewSymmetric),
        Just(Symmetry::Hermitian),
    ]
}

fn element_type_strategy() -> impl Strategy<Value = ElementType> {
    prop_oneof![
        Just(ElementType::Integer),
        Just(ElementType::Real),
        Just(ElementType::Complex),
        Just(ElementType::Pattern),
    ]
}

proptest! {
    /// Property: the grid fits the viewport budget, and no smaller square
    /// block size would fit it
    #[test]
    fn prop_block_size_is_minimal(
        rows in 1u64..5_000,
        cols in 1u64..5_000,
        max_rows in 1u64..200,
        max_cols in 1u64..200,
    ) {
        let grid = Grid::new(&header(rows, cols, Symmetry::General), max_rows, max_cols);
        let bs = grid.block_size();

        prop_assert!(grid.rows() as u64 <= max_rows);
        prop_assert!(grid.cols() as u64 <= max_cols);
        prop_assert_eq!(grid.rows() as u64, rows.div_ceil(bs));
        prop_assert_eq!(grid.cols() as u64, cols.div_ceil(bs));

        if bs > 1 {
            let smaller = bs - 1;
            let would_fit = rows.div_ceil(smaller) <= max_rows
                && cols.div_ceil(smaller) <= max_cols;
            prop_assert!(!would_fit);
        }
    }

    /// Property: aggregation is order-independent
    #[test]
    fn prop_aggregation_order_is_irrelevant(
        entries in prop::collection::vec((0u64..500, 0u64..500), 0..100),
        symmetry in symmetry_strategy(),
    ) {
        let header = header(500, 500, symmetry);
        let mut forward = Grid::new(&header, 16, 16);
        let mut backward = Grid::new(&header, 16, 16);

        for &(row, col) in &entries {
            forward.record_entry(row, col);
        }
        for &(row, col) in entries.iter().rev() {
            backward.record_entry(row, col);
        }

        prop_assert_eq!(forward.entries(), backward.entries());
        prop_assert_eq!(forward.max_occupancy(), backward.max_occupancy());
        for block_row in 0..forward.rows() {
            for block_col in 0..forward.cols() {
                prop_assert_eq!(
                    forward.count_at(block_row, block_col),
                    backward.count_at(block_row, block_col)
                );
            }
        }
    }

    /// Property: off-diagonal entries count twice under symmetry, diagonal
    /// entries once
    #[test]
    fn prop_symmetry_expansion_count(
        row in 0u64..100,
        col in 0u64..100,
        symmetry in symmetry_strategy(),
    ) {
        let mut grid = Grid::new(&header(100, 100, symmetry), 10, 10);
        grid.record_entry(row, col);

        let expected = if symmetry != Symmetry::General && row != col { 2 } else { 1 };
        prop_assert_eq!(grid.entries(), expected);

        let bs = grid.block_size();
        let owning = ((row / bs) as usize, (col / bs) as usize);
        let mirrored = (owning.1, owning.0);
        if expected == 2 && owning != mirrored {
            prop_assert_eq!(grid.count_at(owning.0, owning.1), 1);
            prop_assert_eq!(grid.count_at(mirrored.0, mirrored.1), 1);
        } else {
            prop_assert_eq!(grid.count_at(owning.0, owning.1), expected);
        }
    }

    /// Property: re-serializing a parsed banner and re-parsing it yields the
    /// same header fields
    #[test]
    fn prop_banner_round_trips(
        format in prop_oneof![Just(MatrixFormat::Coordinate), Just(MatrixFormat::Array)],
        element_type in element_type_strategy(),
        symmetry in symmetry_strategy(),
        rows in 1u64..1_000_000,
        cols in 1u64..1_000_000,
        declared in 0u64..1_000_000,
    ) {
        let input = format!(
            "%%MatrixMarket matrix {} {} {}\n{rows} {cols} {declared}\n",
            format.as_keyword(),
            element_type.as_keyword(),
            symmetry.as_keyword(),
        );
        let parsed = parse_header(&mut SliceSource::new(input.as_bytes())).unwrap();
        prop_assert_eq!(parsed.format, format);
        prop_assert_eq!(parsed.element_type, element_type);
        prop_assert_eq!(parsed.symmetry, symmetry);
        prop_assert_eq!(parsed.rows, rows);
        prop_assert_eq!(parsed.cols, cols);
        prop_assert_eq!(parsed.declared_entries, declared);

        let again = format!("{}\n{rows} {cols} {declared}\n", parsed.banner());
        let reparsed = parse_header(&mut SliceSource::new(again.as_bytes())).unwrap();
        prop_assert_eq!(reparsed, parsed);
    }

    /// Property: a well-formed document always parses, and the total matches
    /// the expanded entry count
    #[test]
    fn prop_well_formed_documents_parse(
        entries in prop::collection::vec((1u64..=50, 1u64..=50), 0..60),
        symmetry in symmetry_strategy(),
    ) {
        let mut input = format!(
            "%%MatrixMarket matrix coordinate pattern {}\n50 50 {}\n",
            symmetry.as_keyword(),
            entries.len(),
        );
        for &(row, col) in &entries {
            input.push_str(&format!("{row} {col}\n"));
        }

        let mut source = SliceSource::new(input.as_bytes());
        let parsed = parse_header(&mut source).unwrap();
        let mut grid = Grid::new(&parsed, 10, 10);
        parse_entries(&mut source, &parsed, &mut grid).unwrap();

        let expected: u64 = entries
            .iter()
            .map(|&(row, col)| {
                if symmetry != Symmetry::General && row != col { 2 } else { 1 }
            })
            .sum();
        prop_assert_eq!(grid.entries(), expected);
    }
}
