//! AFL Fuzz harness for AggTree
//!
//! This harness checks the tree against a plain `Vec` model:
//! 1. Every query equals the naive left-to-right fold of the model
//! 2. Every internal aggregate matches the leaves it covers
//! 3. Rejected operations leave the tree unchanged
//!
//! String concatenation is used as the combine operator so that any
//! reordering of operands shows up as a mismatch.

use afl::fuzz;
use resegment::AggTree;
use resegment::Concat;

/// Operation types the fuzzer can generate
#[derive(Debug, Clone, Copy)]
enum FuzzOp {
    /// Append one byte as a new element
    Append { byte: u8 },
    /// Overwrite an element; positions past the end test rejection
    Set { pos: u8, byte: u8 },
    /// Fold a range; empty and overlong ranges test rejection
    Query { start: u8, end: u8 },
    /// Check every range and the whole slot buffer
    Sweep,
}

impl FuzzOp {
    fn from_bytes(bytes: &[u8]) -> Option<(FuzzOp, &[u8])> {
        if bytes.is_empty() {
            return None;
        }

        let op_type = bytes[0] % 4;
        let rest = &bytes[1..];

        match op_type {
            0 if !rest.is_empty() => Some((FuzzOp::Append { byte: rest[0] }, &rest[1..])),
            1 if rest.len() >= 2 => {
                let op = FuzzOp::Set { pos: rest[0], byte: rest[1] };
                Some((op, &rest[2..]))
            }
            2 if rest.len() >= 2 => {
                let op = FuzzOp::Query { start: rest[0], end: rest[1] };
                Some((op, &rest[2..]))
            }
            3 => Some((FuzzOp::Sweep, rest)),
            _ => None,
        }
    }
}

fn element(byte: u8) -> String {
    return ((b'a' + byte % 26) as char).to_string();
}

fn main() {
    fuzz!(|data: &[u8]| {
        let mut tree = AggTree::new(Concat);
        let mut model: Vec<String> = Vec::new();
        let mut remaining = data;

        while let Some((op, rest)) = FuzzOp::from_bytes(remaining) {
            remaining = rest;

            match op {
                FuzzOp::Append { byte } => {
                    tree.append(element(byte));
                    model.push(element(byte));
                    assert_eq!(tree.len(), model.len());
                }

                FuzzOp::Set { pos, byte } => {
                    let pos = pos as usize;
                    let result = tree.set(pos, element(byte));
                    if pos < model.len() {
                        assert!(result.is_ok());
                        model[pos] = element(byte);
                    } else {
                        assert!(result.is_err(), "set past end accepted");
                    }
                }

                FuzzOp::Query { start, end } => {
                    let (start, end) = (start as usize, end as usize);
                    let result = tree.query(start, end);
                    if start < end && end <= model.len() {
                        assert_eq!(result, Ok(model[start..end].concat()));
                    } else {
                        assert!(result.is_err(), "bad range {}..{} accepted", start, end);
                    }
                }

                FuzzOp::Sweep => {
                    // CRITICAL INVARIANT: no stale or missing aggregates
                    tree.validate().expect("aggregates out of sync with leaves");
                    for i in 0..model.len() {
                        for j in i + 1..=model.len() {
                            assert_eq!(tree.query(i, j), Ok(model[i..j].concat()));
                        }
                    }
                }
            }
        }
    });
}
