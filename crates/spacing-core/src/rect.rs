use serde::{Deserialize, Serialize};

/// A snapshot of an element's bounding box in viewport pixels.
///
/// Rects are never mutated. A fresh one is read from the page every
/// time geometry is needed because layout can change between frames.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Builds a rect, clamping negative sizes to zero.
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Right edge.
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Bottom edge.
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Returns whether this is the all-zero box a page reports for a
    /// detached element.
    pub fn is_degenerate(&self) -> bool {
        self.top == 0.0 && self.left == 0.0 && self.width == 0.0 && self.height == 0.0
    }

    /// Returns whether `self` fully encloses `other`. Shared edges count.
    pub fn containing(&self, other: &Rect) -> bool {
        self.top <= other.top
            && self.left <= other.left
            && self.bottom() >= other.bottom()
            && self.right() >= other.right()
    }

    /// Returns whether `self` is fully enclosed by `other`.
    pub fn inside(&self, other: &Rect) -> bool {
        other.containing(self)
    }

    /// Returns whether the two boxes share a positive area while neither
    /// encloses the other. Boxes that only touch do not collide.
    pub fn colliding(&self, other: &Rect) -> bool {
        self.intersects(other) && !self.containing(other) && !self.inside(other)
    }

    fn intersects(&self, other: &Rect) -> bool {
        self.left < other.right()
            && self.right() > other.left
            && self.top < other.bottom()
            && self.bottom() > other.top
    }
}

/// How two boxes relate spatially, seen from the first one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relation {
    /// The first box encloses the second.
    Containing,
    /// The first box is enclosed by the second.
    Inside,
    /// The boxes overlap without nesting.
    Colliding,
    /// The boxes are disjoint or only touch.
    Separate,
}

impl Relation {
    /// Classifies a pair of boxes.
    ///
    /// Exactly one variant holds for any pair. Ties resolve in the
    /// order containing, inside, colliding, separate, so identical
    /// boxes are `Containing`.
    pub fn classify(a: &Rect, b: &Rect) -> Self {
        if a.containing(b) {
            Self::Containing
        } else if a.inside(b) {
            Self::Inside
        } else if a.colliding(b) {
            Self::Colliding
        } else {
            Self::Separate
        }
    }

    /// Returns whether distances should be taken between opposite edges.
    pub fn is_outside(self) -> bool {
        self == Self::Separate
    }
}

impl std::fmt::Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Containing => "containing",
            Self::Inside => "inside",
            Self::Colliding => "colliding",
            Self::Separate => "separate",
        };
        f.write_str(s)
    }
}
