// model = "claude-opus-4-5"
// created = "2026-10-17"
// modified = "2026-10-17"
// driver = "Isaac Clayton"

//! Diagnostic printing for [`AggTree`].
//!
//! The layout is for eyeballing while debugging and may change.

use std::fmt::Debug;

use crate::tree::AggTree;

impl<T, C> AggTree<T, C> {
    /// Group every slot by level, leaves first.
    ///
    /// Level `d` holds the coordinates with exactly `d` trailing zeros, in
    /// order. Incomplete aggregates show up as `None`.
    pub fn levels(&self) -> Vec<Vec<Option<&T>>> {
        let mut levels: Vec<Vec<Option<&T>>> = Vec::new();
        for (coord, slot) in self.slots.iter().enumerate().skip(1) {
            let depth = coord.trailing_zeros() as usize;
            if levels.len() <= depth {
                levels.resize_with(depth + 1, Vec::new);
            }
            levels[depth].push(slot.as_ref());
        }
        return levels;
    }

    /// Draw the tree top-down, one row per level.
    ///
    /// Each slot gets a `width`-column cell at its coordinate, so parents
    /// land between their children. Incomplete aggregates print as `_`.
    pub fn render(&self, width: usize) -> String
    where
        T: Debug,
    {
        let mut rows: Vec<String> = Vec::new();
        for (coord, slot) in self.slots.iter().enumerate().skip(1) {
            let depth = coord.trailing_zeros() as usize;
            if rows.len() <= depth {
                rows.resize_with(depth + 1, String::new);
            }
            let row = &mut rows[depth];
            let column = (coord - 1) * width;
            let used = row.chars().count();
            if used < column {
                row.extend(std::iter::repeat(' ').take(column - used));
            }
            let text = match slot {
                Some(value) => format!("{value:?}"),
                None => "_".to_string(),
            };
            row.push_str(&format!("{text:>width$}"));
        }

        let lines: Vec<&str> = rows.iter().rev().map(|row| row.trim_end()).collect();
        return lines.join("\n");
    }
}
