//! # Section Layout
//!
//! Turning "how many bars of which diameter" into an ordered placement
//! across a section side.
//!
//! - [`parse_bar_notation`] reads `"2db12+3db16"` style notation into an
//!   ordered diameter → count map
//! - [`symmetric_list`] orders the bars so the layout mirrors about the
//!   side's center, with at most one odd group sitting in the middle
//! - [`SideLayout`] spaces that list along one side of a rectangular
//!   section
//!
//! ## Example
//!
//! ```rust
//! use rebar_core::layout::{parse_bar_notation, symmetric_list, SymmetricListOptions};
//!
//! let counts = parse_bar_notation("3db12 + 2db16").unwrap();
//! let list = symmetric_list(counts, &SymmetricListOptions::default()).unwrap();
//!
//! assert_eq!(list.diameters, vec![16.0, 12.0, 12.0, 12.0, 16.0]);
//! assert_eq!(list.labels[0], "#1 2Ø16");
//! ```

use std::collections::BTreeMap;
use std::fmt::Display;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{RebarError, RebarResult};
use crate::reinforcement::Orientation;

// ============================================================================
// Bar Notation
// ============================================================================

/// Parse `"<count>db<diameter>"` groups joined by `+`.
///
/// Whitespace is ignored and diameters are whole millimeters. A diameter
/// given twice adds up.
pub fn parse_bar_notation(notation: &str) -> RebarResult<BTreeMap<u32, usize>> {
    let compact: String = notation.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return Err(RebarError::invalid_input(
            "notation",
            notation,
            "Expected at least one '<count>db<diameter>' group",
        ));
    }

    let mut counts = BTreeMap::new();
    for group in compact.split('+') {
        let malformed = || {
            RebarError::invalid_input("notation", group, "Expected '<count>db<diameter>'")
        };
        let (count, diameter) = group.split_once("db").ok_or_else(malformed)?;
        let count: usize = count.parse().map_err(|_| malformed())?;
        let diameter: u32 = diameter.parse().map_err(|_| malformed())?;
        *counts.entry(diameter).or_insert(0) += count;
    }

    debug!(?counts, notation, "parsed bar notation");
    Ok(counts)
}

/// Flatten a key → count map into `count` copies of each key, in key order.
pub fn expand_counts<K: Clone>(counts: &BTreeMap<K, usize>) -> Vec<K> {
    counts
        .iter()
        .flat_map(|(key, count)| std::iter::repeat(key.clone()).take(*count))
        .collect()
}

// ============================================================================
// Symmetric List
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SymmetricListOptions {
    /// Label prefix, e.g. `"#"` gives `"#0 2Ø12"`
    pub prefix: String,
    /// Number of the first group
    pub start: usize,
    /// Keys are divided by this before landing in the list (1000 turns mm into m)
    pub factor: f64,
}

impl Default for SymmetricListOptions {
    fn default() -> Self {
        SymmetricListOptions {
            prefix: "#".to_string(),
            start: 0,
            factor: 1.0,
        }
    }
}

/// Parallel diameter and label lists, one entry per bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymmetricList {
    pub diameters: Vec<f64>,
    pub labels: Vec<String>,
}

impl SymmetricList {
    pub fn len(&self) -> usize {
        self.diameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diameters.is_empty()
    }

    /// Largest diameter in the list
    pub fn max_diameter(&self) -> Option<f64> {
        self.diameters.iter().copied().reduce(f64::max)
    }
}

/// Lay out `(diameter, count)` groups symmetrically.
///
/// Groups are taken in ascending diameter order, with repeated diameters
/// merged into one group. Each contributes `count / 2` copies to both
/// ends of the list, so the last (largest) group ends up outermost. An
/// odd group puts its extra bar at the midpoint; a second odd group fails
/// with
/// [`RebarError::AmbiguousSymmetricCenter`].
///
/// Labels read `"{prefix}{n} {count}Ø{diameter}"` with `n` advancing
/// once per group.
pub fn symmetric_list<D, I>(groups: I, options: &SymmetricListOptions) -> RebarResult<SymmetricList>
where
    D: Into<f64> + Copy + Display,
    I: IntoIterator<Item = (D, usize)>,
{
    let mut groups: Vec<(D, usize)> = groups.into_iter().collect();
    groups.sort_by(|a, b| a.0.into().total_cmp(&b.0.into()));
    groups.dedup_by(|next, kept| {
        let (a, b): (f64, f64) = (next.0.into(), kept.0.into());
        let same = a == b;
        if same {
            kept.1 += next.1;
        }
        same
    });

    let mut diameters: Vec<f64> = Vec::new();
    let mut labels: Vec<String> = Vec::new();
    let mut odd: Option<f64> = None;

    for (n, (key, count)) in groups.into_iter().enumerate() {
        let value = key.into() / options.factor;
        let label = format!("{}{} {}Ø{}", options.prefix, options.start + n, count, key);

        for _ in 0..count / 2 {
            diameters.insert(0, value);
            diameters.push(value);
            labels.insert(0, label.clone());
            labels.push(label.clone());
        }

        if count % 2 == 1 {
            if let Some(first) = odd {
                return Err(RebarError::AmbiguousSymmetricCenter {
                    first,
                    second: key.into(),
                });
            }
            odd = Some(key.into());
            let mid = diameters.len() / 2;
            diameters.insert(mid, value);
            labels.insert(mid, label);
        }
    }

    Ok(SymmetricList { diameters, labels })
}

// ============================================================================
// Side Layout
// ============================================================================

/// One bar placed along a side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SidePlacement {
    pub diameter: f64,
    pub label: String,
    /// Bar center measured along the side from its start (left end for
    /// top/bottom, bottom end for right/left)
    pub along: f64,
}

/// Spacing rule for the bars of one side of a rectangular section.
///
/// Top and bottom sides own the corner bars: their first and last bar sit
/// at `cover` from the ends. Right and left sides only hold the bars in
/// between, evenly spread in `width - 2·cover`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SideLayout {
    pub side: Orientation,
    /// Extent of the section along this side
    pub width: f64,
    pub cover: f64,
    /// Largest corner diameter on the section; corner bars of a thinner
    /// side shift so their outer faces line up with it
    pub corner_diameter: Option<f64>,
}

impl SideLayout {
    pub fn new(side: Orientation, width: f64, cover: f64) -> Self {
        SideLayout {
            side,
            width,
            cover,
            corner_diameter: None,
        }
    }

    /// Side by index, 0 top through 3 left.
    pub fn from_index(index: usize, width: f64, cover: f64) -> RebarResult<Self> {
        Ok(Self::new(Orientation::from_index(index)?, width, cover))
    }

    pub fn with_corner_diameter(mut self, diameter: f64) -> Self {
        self.corner_diameter = Some(diameter);
        self
    }

    /// Center-to-center distance between consecutive bars.
    pub fn separation(&self, count: usize, max_diameter: f64) -> f64 {
        let usable = self.width - self.cover * 2.0;
        if self.side.is_horizontal_side() {
            let corner = self.corner_diameter.unwrap_or(max_diameter);
            if count < 2 {
                return 0.0;
            }
            (usable + (corner - max_diameter)) / (count - 1) as f64
        } else {
            usable / (count + 1) as f64
        }
    }

    /// Place every bar of `list` along the side.
    pub fn place(&self, list: &SymmetricList) -> Vec<SidePlacement> {
        let Some(max_diameter) = list.max_diameter() else {
            return Vec::new();
        };
        let count = list.len();
        let separation = self.separation(count, max_diameter);

        let horizontal = self.side.is_horizontal_side();
        let single_center = horizontal && count == 1;

        list.diameters
            .iter()
            .zip(&list.labels)
            .enumerate()
            .map(|(i, (&diameter, label))| {
                let along = if single_center {
                    self.width / 2.0
                } else if horizontal {
                    self.cover + i as f64 * separation
                } else {
                    self.cover + (i + 1) as f64 * separation
                };
                SidePlacement {
                    diameter,
                    label: label.clone(),
                    along,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::approx_eq;
    use proptest::prelude::*;

    #[test]
    fn test_parse_bar_notation() {
        let counts = parse_bar_notation("2db12+3db16").unwrap();
        assert_eq!(counts.into_iter().collect::<Vec<_>>(), vec![(12, 2), (16, 3)]);

        let counts = parse_bar_notation(" 4db20 + 2db8 ").unwrap();
        assert_eq!(counts.keys().copied().collect::<Vec<_>>(), vec![8, 20]);

        let counts = parse_bar_notation("1db12+2db12").unwrap();
        assert_eq!(counts[&12], 3);
    }

    #[test]
    fn test_parse_bar_notation_errors() {
        for bad in ["", "2xb12", "db12", "2db", "2db12+", "twodb12"] {
            let err = parse_bar_notation(bad).unwrap_err();
            assert_eq!(err.error_code(), "INVALID_INPUT", "{}", bad);
        }
    }

    #[test]
    fn test_expand_counts() {
        let counts = parse_bar_notation("2db12+1db16").unwrap();
        assert_eq!(expand_counts(&counts), vec![12, 12, 16]);
        assert!(expand_counts(&BTreeMap::<u32, usize>::new()).is_empty());
    }

    #[test]
    fn test_symmetric_list_centered_odd() {
        let list = symmetric_list([(0.012, 3), (0.016, 2)], &SymmetricListOptions::default()).unwrap();
        assert_eq!(list.diameters, vec![0.016, 0.012, 0.012, 0.012, 0.016]);
        assert_eq!(
            list.labels,
            vec!["#1 2Ø0.016", "#0 3Ø0.012", "#0 3Ø0.012", "#0 3Ø0.012", "#1 2Ø0.016"]
        );
    }

    #[test]
    fn test_symmetric_list_options() {
        let options = SymmetricListOptions {
            prefix: "N".to_string(),
            start: 4,
            factor: 1000.0,
        };
        let counts = parse_bar_notation("2db12+2db20").unwrap();
        let list = symmetric_list(counts, &options).unwrap();
        assert_eq!(list.diameters, vec![0.02, 0.012, 0.012, 0.02]);
        assert_eq!(list.labels[0], "N5 2Ø20");
        assert_eq!(list.labels[1], "N4 2Ø12");
        assert_eq!(list.max_diameter(), Some(0.02));
    }

    #[test]
    fn test_symmetric_list_largest_outermost() {
        let list = symmetric_list([(12u32, 2), (16u32, 2)], &SymmetricListOptions::default()).unwrap();
        assert_eq!(list.diameters, vec![16.0, 12.0, 12.0, 16.0]);
        assert_eq!(list.labels[0], "#1 2Ø16");
    }

    #[test]
    fn test_symmetric_list_merges_repeated_diameter() {
        let list = symmetric_list([(12u32, 1), (16u32, 2), (12u32, 1)], &SymmetricListOptions::default()).unwrap();
        assert_eq!(list.diameters, vec![16.0, 12.0, 12.0, 16.0]);
        assert_eq!(list.labels, vec!["#1 2Ø16", "#0 2Ø12", "#0 2Ø12", "#1 2Ø16"]);
    }

    #[test]
    fn test_symmetric_list_input_order_irrelevant() {
        let a = symmetric_list([(16u32, 2), (12u32, 3)], &SymmetricListOptions::default()).unwrap();
        let b = symmetric_list([(12u32, 3), (16u32, 2)], &SymmetricListOptions::default()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_symmetric_list_two_odd_groups() {
        let err = symmetric_list([(12u32, 1), (16u32, 3)], &SymmetricListOptions::default()).unwrap_err();
        assert_eq!(
            err,
            RebarError::AmbiguousSymmetricCenter {
                first: 12.0,
                second: 16.0
            }
        );
    }

    #[test]
    fn test_symmetric_list_empty() {
        let list = symmetric_list(Vec::<(u32, usize)>::new(), &SymmetricListOptions::default()).unwrap();
        assert!(list.is_empty());
        assert_eq!(list.max_diameter(), None);
    }

    #[test]
    fn test_side_layout_bottom() {
        let list = symmetric_list([(0.012, 2), (0.016, 1)], &SymmetricListOptions::default()).unwrap();
        let placements = SideLayout::new(Orientation::Bottom, 0.3, 0.03).place(&list);
        let along: Vec<f64> = placements.iter().map(|p| p.along).collect();
        assert_eq!(along.len(), 3);
        assert!(approx_eq(along[0], 0.03));
        assert!(approx_eq(along[1], 0.15));
        assert!(approx_eq(along[2], 0.27));
        assert_eq!(placements[1].diameter, 0.016);
    }

    #[test]
    fn test_side_layout_corner_diameter() {
        let layout = SideLayout::new(Orientation::Top, 0.3, 0.03).with_corner_diameter(0.02);
        // corner bars are 4mm thicker than this side's largest bar
        assert!(approx_eq(layout.separation(3, 0.016), (0.24 + 0.004) / 2.0));
    }

    #[test]
    fn test_side_layout_right_skips_corners() {
        let list = symmetric_list([(0.012, 2)], &SymmetricListOptions::default()).unwrap();
        let placements = SideLayout::new(Orientation::Right, 0.5, 0.05).place(&list);
        assert!(approx_eq(placements[0].along, 0.05 + 0.4 / 3.0));
        assert!(approx_eq(placements[1].along, 0.05 + 0.8 / 3.0));
    }

    #[test]
    fn test_side_layout_single_bar_centered() {
        let list = symmetric_list([(0.012, 1)], &SymmetricListOptions::default()).unwrap();
        let placements = SideLayout::new(Orientation::Bottom, 0.3, 0.03).place(&list);
        assert_eq!(placements[0].along, 0.15);
    }

    #[test]
    fn test_side_layout_from_index() {
        let layout = SideLayout::from_index(3, 0.4, 0.03).unwrap();
        assert_eq!(layout.side, Orientation::Left);
        let err = SideLayout::from_index(7, 0.4, 0.03).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_SIDE_OR_AXIS");
    }

    proptest! {
        #[test]
        fn test_symmetric_list_is_palindrome(
            pairs in prop::collection::btree_map(6u32..40, 0usize..5, 0..5),
            odd in prop::option::of((40u32..50, 0usize..3)),
        ) {
            let mut groups: Vec<(u32, usize)> =
                pairs.into_iter().map(|(d, half)| (d, half * 2)).collect();
            if let Some((d, half)) = odd {
                groups.push((d, half * 2 + 1));
            }
            let total: usize = groups.iter().map(|g| g.1).sum();

            let list = symmetric_list(groups, &SymmetricListOptions::default()).unwrap();
            let mut reversed = list.diameters.clone();
            reversed.reverse();

            prop_assert_eq!(list.len(), total);
            prop_assert_eq!(list.labels.len(), total);
            prop_assert_eq!(&list.diameters, &reversed);
        }
    }
}
