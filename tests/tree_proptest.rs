// model = "claude-opus-4-5"
// created = "2026-10-17"
// modified = "2026-10-17"
// driver = "Isaac Clayton"

//! Property-based tests for AggTree against a plain Vec model.

use proptest::prelude::*;
use resegment::AggTree;
use resegment::Concat;
use resegment::Min;
use resegment::Sum;

// =============================================================================
// Test helpers
// =============================================================================

/// A random mutation
#[derive(Clone, Debug)]
enum TreeOp {
    Append(String),
    Set { pos_pct: f64, value: String },
}

fn arbitrary_value() -> impl Strategy<Value = String> {
    return "[a-z]{1,3}";
}

fn arbitrary_tree_op() -> impl Strategy<Value = TreeOp> {
    prop_oneof![
        arbitrary_value().prop_map(TreeOp::Append),
        (0.0..1.0f64, arbitrary_value())
            .prop_map(|(pos_pct, value)| TreeOp::Set { pos_pct, value }),
    ]
}

fn apply_op(tree: &mut AggTree<String, Concat>, model: &mut Vec<String>, op: &TreeOp) {
    match op {
        TreeOp::Append(value) => {
            tree.append(value.clone());
            model.push(value.clone());
        }
        TreeOp::Set { pos_pct, value } => {
            if model.is_empty() {
                return;
            }
            let pos = ((*pos_pct * model.len() as f64) as usize).min(model.len() - 1);
            tree.set(pos, value.clone()).unwrap();
            model[pos] = value.clone();
        }
    }
}

/// Pick a valid `start..end` inside `len` from two percentages.
fn pick_range(len: usize, a_pct: f64, b_pct: f64) -> (usize, usize) {
    let a = ((a_pct * len as f64) as usize).min(len - 1);
    let b = ((b_pct * len as f64) as usize).min(len - 1);
    return (a.min(b), a.max(b) + 1);
}

// =============================================================================
// Query properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// query(i, j) equals the left-to-right fold of the elements
    #[test]
    fn query_equals_naive_fold(
        values in prop::collection::vec(arbitrary_value(), 1..80),
        a_pct in 0.0..1.0f64,
        b_pct in 0.0..1.0f64,
    ) {
        let tree = AggTree::from_values(values.clone(), Concat);
        let (start, end) = pick_range(values.len(), a_pct, b_pct);
        prop_assert_eq!(tree.query(start, end), Ok(values[start..end].concat()));
    }

    /// query on integers under addition matches the iterator sum
    #[test]
    fn query_sums_match(
        values in prop::collection::vec(-1000i64..1000, 1..200),
        a_pct in 0.0..1.0f64,
        b_pct in 0.0..1.0f64,
    ) {
        let tree = AggTree::from_values(values.clone(), Sum);
        let (start, end) = pick_range(values.len(), a_pct, b_pct);
        prop_assert_eq!(tree.query(start, end), Ok(values[start..end].iter().sum::<i64>()));
    }

    /// query under min matches the iterator min
    #[test]
    fn query_min_matches(
        values in prop::collection::vec(any::<u32>(), 1..200),
        a_pct in 0.0..1.0f64,
        b_pct in 0.0..1.0f64,
    ) {
        let tree = AggTree::from_values(values.clone(), Min);
        let (start, end) = pick_range(values.len(), a_pct, b_pct);
        let expected = values[start..end].iter().copied().min();
        prop_assert_eq!(tree.query(start, end).ok(), expected);
    }

    /// Empty and overlong ranges are always rejected
    #[test]
    fn bad_ranges_rejected(
        values in prop::collection::vec(0u32..10, 0..40),
        start in 0usize..60,
        end in 0usize..60,
    ) {
        let tree = AggTree::from_values(values.clone(), Sum);
        if start >= end || end > values.len() {
            prop_assert!(tree.query(start, end).is_err());
        }
    }
}

// =============================================================================
// Mutation properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// After any mix of appends and sets, every element and the aggregates
    /// agree with the model
    #[test]
    fn mutations_track_model(
        initial in prop::collection::vec(arbitrary_value(), 0..20),
        ops in prop::collection::vec(arbitrary_tree_op(), 0..60),
        a_pct in 0.0..1.0f64,
        b_pct in 0.0..1.0f64,
    ) {
        let mut tree = AggTree::from_values(initial.clone(), Concat);
        let mut model = initial;
        for op in &ops {
            apply_op(&mut tree, &mut model, op);
        }

        prop_assert_eq!(tree.len(), model.len());
        prop_assert!(tree.validate().is_ok());
        let elements: Vec<String> = tree.iter().cloned().collect();
        prop_assert_eq!(&elements, &model);

        if !model.is_empty() {
            let (start, end) = pick_range(model.len(), a_pct, b_pct);
            prop_assert_eq!(tree.query(start, end), Ok(model[start..end].concat()));
        }
    }

    /// set(i, v) then get(i) returns v
    #[test]
    fn set_then_get(
        values in prop::collection::vec(arbitrary_value(), 1..50),
        pos_pct in 0.0..1.0f64,
        value in arbitrary_value(),
    ) {
        let mut tree = AggTree::from_values(values.clone(), Concat);
        let pos = ((pos_pct * values.len() as f64) as usize).min(values.len() - 1);
        tree.set(pos, value.clone()).unwrap();
        prop_assert_eq!(tree.get(pos), Ok(&value));
        prop_assert!(tree.validate().is_ok());
    }

    /// append(v) grows by one and v is readable at the end
    #[test]
    fn append_grows_by_one(
        values in prop::collection::vec(arbitrary_value(), 0..50),
        value in arbitrary_value(),
    ) {
        let mut tree = AggTree::from_values(values.clone(), Concat);
        tree.append(value.clone());
        prop_assert_eq!(tree.len(), values.len() + 1);
        prop_assert_eq!(tree.get(values.len()), Ok(&value));
        prop_assert_eq!(tree.query(0, values.len() + 1), Ok(values.concat() + &value));
    }

    /// Building from S equals building from S[..n-1] and appending S[n-1]
    #[test]
    fn append_equals_construction(
        values in prop::collection::vec(arbitrary_value(), 1..60),
        a_pct in 0.0..1.0f64,
        b_pct in 0.0..1.0f64,
    ) {
        let built = AggTree::from_values(values.clone(), Concat);
        let (last, init) = values.split_last().unwrap();
        let mut grown = AggTree::from_values(init.to_vec(), Concat);
        grown.append(last.clone());

        prop_assert_eq!(built.len(), grown.len());
        let (start, end) = pick_range(values.len(), a_pct, b_pct);
        prop_assert_eq!(built.query(start, end), grown.query(start, end));
        prop_assert_eq!(built.total(), grown.total());
    }
}
