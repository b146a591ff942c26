//! Property tests for the table engine.
//!
//! Tables are driven through random operation sequences. Values produced by
//! `Op::AddRow` are small integer literals, which parse under every column
//! type, so those inserts fail only on arity. Parse failures are generated
//! separately by `arb_bad_number`.

use proptest::prelude::*;
use tabula_common::{DataType, ErrorCode, RowId};
use tabula_table::Table;

/// One mutation applied to a table under test.
#[derive(Debug, Clone)]
enum Op {
    AddColumn(DataType),
    DeleteColumn(usize),
    AddRow(i64),
    DeleteRow(usize),
}

fn arb_data_type() -> impl Strategy<Value = DataType> {
    prop_oneof![
        Just(DataType::Text),
        Just(DataType::Real),
        Just(DataType::Integer),
    ]
}

fn arb_numeric_type() -> impl Strategy<Value = DataType> {
    prop_oneof![Just(DataType::Real), Just(DataType::Integer)]
}

/// Text that neither `i64` nor `f64` parsing accepts. The `x` rules out
/// `inf`, `nan` and exponent forms.
fn arb_bad_number() -> impl Strategy<Value = String> {
    "[a-z]{0,4}x[a-z]{0,4}"
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        2 => arb_data_type().prop_map(Op::AddColumn),
        1 => (0usize..8).prop_map(Op::DeleteColumn),
        3 => (-1000i64..1000).prop_map(Op::AddRow),
        1 => (0usize..8).prop_map(Op::DeleteRow),
    ]
}

/// Applies `op`, ignoring expected failures. Returns the id of an inserted row.
fn apply(table: &mut Table, op: &Op) -> Option<RowId> {
    match op {
        Op::AddColumn(data_type) => {
            let name = format!("c{}", table.column_count());
            table.add_column(name, *data_type);
            None
        }
        Op::DeleteColumn(index) => {
            let _ = table.delete_column_by_idx(*index);
            None
        }
        Op::AddRow(seed) => {
            let values: Vec<String> = (0..table.column_count())
                .map(|i| (seed + i as i64).to_string())
                .collect();
            table.add_row(values).ok()
        }
        Op::DeleteRow(pick) => {
            let ids: Vec<RowId> = table.rows().map(|(id, _)| id).collect();
            if !ids.is_empty() {
                let id = ids[pick % ids.len()];
                let _ = table.delete_row_by_id(id);
            }
            None
        }
    }
}

fn build(columns: &[DataType], ops: &[Op]) -> Table {
    let mut table = Table::new();
    for (i, data_type) in columns.iter().enumerate() {
        table.add_column(format!("base{i}"), *data_type);
    }
    for op in ops {
        apply(&mut table, op);
    }
    table
}

proptest! {
    #[test]
    fn prop_rows_match_column_count(ops in prop::collection::vec(arb_op(), 0..64)) {
        let table = build(&[], &ops);
        for (_, row) in table.rows() {
            prop_assert_eq!(row.len(), table.column_count());
            prop_assert!(row.slot_capacity() >= table.capacity());
            prop_assert!(table.capacity() >= table.column_count());
        }
    }

    #[test]
    fn prop_ids_strictly_increase(ops in prop::collection::vec(arb_op(), 0..64)) {
        let mut table = Table::new();
        table.add_column("seed", DataType::Integer);

        let mut issued = Vec::new();
        for op in &ops {
            if let Some(id) = apply(&mut table, op) {
                issued.push(id);
            }
        }

        for pair in issued.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
        let ids: Vec<RowId> = table.rows().map(|(id, _)| id).collect();
        for pair in ids.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn prop_clone_is_independent(
        setup in prop::collection::vec(arb_op(), 0..32),
        mutations in prop::collection::vec(arb_op(), 1..32),
    ) {
        let mut original = build(&[DataType::Text], &setup);
        let mut copy = original.clone();
        let copy_rows = copy.get_rows();
        let copy_columns = copy.column_descriptors().to_vec();

        for op in &mutations {
            apply(&mut original, op);
        }
        prop_assert_eq!(copy.get_rows(), copy_rows);
        prop_assert_eq!(copy.column_descriptors(), &copy_columns[..]);

        let original_rows = original.get_rows();
        let original_columns = original.column_descriptors().to_vec();
        for op in &mutations {
            apply(&mut copy, op);
        }
        prop_assert_eq!(original.get_rows(), original_rows);
        prop_assert_eq!(original.column_descriptors(), &original_columns[..]);
    }

    #[test]
    fn prop_last_column_protected(
        data_type in arb_data_type(),
        rows in prop::collection::vec(-1000i64..1000, 0..8),
    ) {
        let mut table = Table::new();
        table.add_column("only", data_type);
        for value in &rows {
            table.add_row([value.to_string()]).unwrap();
        }

        let result = table.delete_column_by_idx(0);
        if rows.is_empty() {
            prop_assert!(result.is_ok());
            prop_assert_eq!(table.column_count(), 0);
        } else {
            prop_assert_eq!(result.unwrap_err().code(), ErrorCode::InvariantViolation);
            prop_assert_eq!(table.column_count(), 1);
            prop_assert_eq!(table.row_count(), rows.len());
        }
    }

    #[test]
    fn prop_add_then_delete_column_round_trips(
        columns in prop::collection::vec(arb_data_type(), 1..6),
        ops in prop::collection::vec(arb_op(), 0..32),
        added in arb_data_type(),
    ) {
        let mut table = build(&columns, &ops);
        let before_rows = table.get_rows();
        let before_count = table.column_count();

        table.add_column("added", added);
        table.delete_column_by_idx(before_count).unwrap();

        prop_assert_eq!(table.column_count(), before_count);
        prop_assert_eq!(table.get_rows(), before_rows);
    }

    #[test]
    fn prop_growth_preserves_cells(
        columns in prop::collection::vec(arb_data_type(), 1..4),
        rows in prop::collection::vec(-1000i64..1000, 1..16),
        extra in prop::collection::vec(arb_data_type(), 1..40),
    ) {
        let mut table = build(&columns, &[]);
        for seed in &rows {
            apply(&mut table, &Op::AddRow(*seed));
        }
        let before = table.get_rows();
        let before_capacity = table.capacity();

        for (i, data_type) in extra.iter().enumerate() {
            table.add_column(format!("extra{i}"), *data_type);
        }

        prop_assert!(table.capacity() >= before_capacity);
        prop_assert!(table.capacity() >= table.column_count());
        for (old, new) in before.iter().zip(table.get_rows()) {
            prop_assert_eq!(&new[..old.len()], &old[..]);
        }
    }

    #[test]
    fn prop_short_row_changes_nothing(
        columns in prop::collection::vec(arb_data_type(), 1..6),
        ops in prop::collection::vec(arb_op(), 0..32),
        short_by in 1usize..3,
    ) {
        let mut table = build(&columns, &ops);
        let snapshot = table.clone();

        let width = match table.column_count() {
            0 => 1,
            count => count.saturating_sub(short_by),
        };
        let values: Vec<String> = (0..width).map(|i| i.to_string()).collect();
        let err = table.add_row(values).unwrap_err();
        prop_assert_eq!(err.code(), ErrorCode::ArityMismatch);
        prop_assert_eq!(&table, &snapshot);
    }

    #[test]
    fn prop_unparsable_row_changes_nothing(
        columns in prop::collection::vec(arb_data_type(), 0..6),
        ops in prop::collection::vec(arb_op(), 0..32),
        numeric in arb_numeric_type(),
        bad in arb_bad_number(),
    ) {
        let mut table = build(&columns, &ops);
        // Every earlier cell parses before the last one fails.
        let position = table.column_count();
        table.add_column("num", numeric);
        let snapshot = table.clone();

        let values: Vec<String> = (0..table.column_count())
            .map(|i| if i == position { bad.clone() } else { i.to_string() })
            .collect();
        let err = table.add_row(values).unwrap_err();
        prop_assert_eq!(err.code(), ErrorCode::ParseError);
        prop_assert_eq!(&table, &snapshot);
        prop_assert_eq!(table.next_id(), snapshot.next_id());
    }
}
