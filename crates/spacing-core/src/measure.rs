//! Distance measurement between a selected box and a target box.
//!
//! The same four-edge computation covers both cases: nested or
//! overlapping boxes pair same-named edges (internal spacing), while
//! disjoint boxes pair opposite edges (external spacing).

use serde::{Deserialize, Serialize};

use crate::rect::{Rect, Relation};

/// One side of the selected box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    /// All sides, in emission order.
    pub const ALL: [Side; 4] = [Side::Top, Side::Bottom, Side::Left, Side::Right];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrounded distances, one per side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Distances {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl Distances {
    pub fn get(&self, side: Side) -> f64 {
        match side {
            Side::Top => self.top,
            Side::Bottom => self.bottom,
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// Result of measuring a selected box against a target box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub relation: Relation,
    /// `true` when the boxes are separate and distances are gaps.
    pub outside: bool,
    pub distances: Distances,
}

/// A distance annotation to be drawn on one side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mark {
    pub side: Side,
    pub label: String,
    pub distance: f64,
    pub outside: bool,
}

/// Measures `target` relative to `selected`.
pub fn measure(selected: &Rect, target: &Rect) -> Measurement {
    let relation = Relation::classify(selected, target);
    let outside = relation.is_outside();

    let distances = if outside {
        Distances {
            top: (selected.top - target.bottom()).abs(),
            bottom: (selected.bottom() - target.top).abs(),
            left: (selected.left - target.right()).abs(),
            right: (selected.right() - target.left).abs(),
        }
    } else {
        Distances {
            top: (selected.top - target.top).abs(),
            bottom: (selected.bottom() - target.bottom()).abs(),
            left: (selected.left - target.left).abs(),
            right: (selected.right() - target.right()).abs(),
        }
    };

    Measurement {
        relation,
        outside,
        distances,
    }
}

impl Measurement {
    /// Returns one mark per side whose unrounded distance is positive.
    ///
    /// Flush edges are skipped. Sub-pixel gaps still produce a mark.
    pub fn marks(&self) -> Vec<Mark> {
        Side::ALL
            .iter()
            .filter_map(|&side| {
                let distance = self.distances.get(side);
                (distance > 0.0).then(|| Mark {
                    side,
                    label: format_distance(distance),
                    distance,
                    outside: self.outside,
                })
            })
            .collect()
    }
}

/// Formats a distance for display: `0px`, `<1px`, or whole pixels.
pub fn format_distance(px: f64) -> String {
    if px == 0.0 {
        "0px".into()
    } else if px < 1.0 {
        "<1px".into()
    } else {
        format!("{}px", px.round())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(top: f64, left: f64, width: f64, height: f64) -> Rect {
        Rect::new(top, left, width, height)
    }

    fn sides(marks: &[Mark]) -> Vec<Side> {
        marks.iter().map(|m| m.side).collect()
    }

    // ── internal spacing ─────────────────────────────────────────

    #[test]
    fn nested_box_measures_padding_on_all_sides() {
        // Arrange
        let selected = r(0.0, 0.0, 200.0, 200.0);
        let target = r(50.0, 50.0, 20.0, 20.0);

        // Act
        let m = measure(&selected, &target);

        // Assert
        assert_eq!(m.relation, Relation::Containing);
        assert!(!m.outside);
        assert_eq!(m.distances.top, 50.0);
        assert_eq!(m.distances.left, 50.0);
        assert_eq!(m.distances.bottom, 130.0);
        assert_eq!(m.distances.right, 130.0);
        let labels: Vec<_> = m.marks().into_iter().map(|m| m.label).collect();
        assert_eq!(labels, ["50px", "130px", "50px", "130px"]);
    }

    #[test]
    fn identical_boxes_emit_nothing() {
        let a = r(10.0, 10.0, 40.0, 40.0);
        let m = measure(&a, &a);
        assert!(!m.outside);
        assert!(m.marks().is_empty());
    }

    #[test]
    fn flush_edges_are_suppressed() {
        // Target shares the selected box's top and left edges.
        let selected = r(0.0, 0.0, 100.0, 100.0);
        let target = r(0.0, 0.0, 60.0, 30.0);
        let marks = measure(&selected, &target).marks();
        assert_eq!(sides(&marks), [Side::Bottom, Side::Right]);
    }

    #[test]
    fn overlapping_boxes_use_same_edges() {
        let selected = r(0.0, 0.0, 100.0, 100.0);
        let target = r(50.0, 50.0, 100.0, 100.0);
        let m = measure(&selected, &target);
        assert_eq!(m.relation, Relation::Colliding);
        assert!(!m.outside);
        assert_eq!(m.distances.top, 50.0);
        assert_eq!(m.distances.bottom, 50.0);
    }

    // ── external spacing ─────────────────────────────────────────

    #[test]
    fn stacked_boxes_measure_gap_between_opposite_edges() {
        // Arrange
        let selected = r(100.0, 100.0, 50.0, 50.0);
        let target = r(160.0, 100.0, 50.0, 50.0);

        // Act
        let m = measure(&selected, &target);

        // Assert
        assert_eq!(m.relation, Relation::Separate);
        assert!(m.outside);
        assert_eq!(m.distances.top, 110.0);
        assert_eq!(m.distances.bottom, 10.0);
        let bottom = m
            .marks()
            .into_iter()
            .find(|mark| mark.side == Side::Bottom)
            .unwrap();
        assert_eq!(bottom.label, "10px");
        assert!(bottom.outside);
    }

    #[test]
    fn touching_boxes_are_measured_externally() {
        let selected = r(0.0, 0.0, 100.0, 100.0);
        let target = r(100.0, 0.0, 100.0, 100.0);
        let m = measure(&selected, &target);
        assert!(m.outside);
        assert_eq!(m.distances.bottom, 0.0);
        assert!(!sides(&m.marks()).contains(&Side::Bottom));
    }

    #[test]
    fn outside_distances_are_non_negative() {
        let selected = r(300.0, 300.0, 10.0, 10.0);
        for target in [
            r(0.0, 0.0, 5.0, 5.0),
            r(600.0, 0.0, 5.0, 5.0),
            r(0.0, 600.0, 5.0, 5.0),
            r(600.0, 600.0, 5.0, 5.0),
        ] {
            let m = measure(&selected, &target);
            assert!(m.outside);
            for side in Side::ALL {
                assert!(m.distances.get(side) >= 0.0);
            }
        }
    }

    #[test]
    fn swapping_pair_preserves_magnitudes() {
        let pairs = [
            (r(100.0, 100.0, 50.0, 50.0), r(160.0, 100.0, 50.0, 50.0)),
            (r(0.0, 0.0, 200.0, 200.0), r(50.0, 50.0, 20.0, 20.0)),
            (r(0.0, 0.0, 100.0, 100.0), r(50.0, 50.0, 100.0, 100.0)),
        ];
        for (a, b) in pairs {
            let forward = measure(&a, &b).distances;
            let backward = measure(&b, &a).distances;
            let mut f = [forward.top, forward.bottom, forward.left, forward.right];
            let mut g = [backward.top, backward.bottom, backward.left, backward.right];
            f.sort_by(f64::total_cmp);
            g.sort_by(f64::total_cmp);
            assert_eq!(f, g);
        }
    }

    // ── formatting ───────────────────────────────────────────────

    #[test]
    fn sub_pixel_gap_is_labelled_and_emitted() {
        let selected = r(0.0, 0.0, 100.0, 100.0);
        let target = r(0.4, 0.0, 100.0, 99.6);
        let marks = measure(&selected, &target).marks();
        let top = &marks[0];
        assert_eq!(top.side, Side::Top);
        assert_eq!(top.label, "<1px");
        assert!((top.distance - 0.4).abs() < 1e-9);
    }

    #[test]
    fn format_distance_rounds_whole_pixels() {
        assert_eq!(format_distance(0.0), "0px");
        assert_eq!(format_distance(0.4), "<1px");
        assert_eq!(format_distance(1.0), "1px");
        assert_eq!(format_distance(12.4), "12px");
        assert_eq!(format_distance(12.5), "13px");
    }
}
