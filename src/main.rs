// model = "claude-opus-4-5"
// created = "2026-10-17"
// modified = "2026-10-17"
// driver = "Isaac Clayton"

//! Walk through building, growing and updating a summing tree.

use resegment::AggTree;
use resegment::Result;
use resegment::Sum;

/// Compare every query against a naive sum of the elements.
fn check_queries(tree: &AggTree<i64, Sum>) -> Result<()> {
    let values: Vec<i64> = tree.iter().copied().collect();
    for i in 0..values.len() {
        for j in i + 1..=values.len() {
            let expected: i64 = values[i..j].iter().sum();
            assert_eq!(tree.query(i, j)?, expected, "query({}, {})", i, j);
        }
    }
    tree.validate()?;
    return Ok(());
}

fn main() -> Result<()> {
    let mut tree = AggTree::from_values([1, 2, 3, 4, 5, 6], Sum);
    println!("== initial tree");
    println!("{:?}", tree);
    println!("{}", tree.render(4));
    check_queries(&tree)?;

    for value in 7..=10 {
        tree.append(value);
    }
    println!();
    println!("== after appending");
    println!("{}", tree.render(4));
    check_queries(&tree)?;

    tree.set(2, 15)?;
    tree.set(6, 16)?;
    tree.set(8, 17)?;
    println!();
    println!("== after updates");
    println!("{}", tree.render(4));
    check_queries(&tree)?;

    println!();
    println!("total: {:?}", tree.total()?);
    return Ok(());
}
