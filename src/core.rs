// src/core.rs
//! Core schema and output types for the placement engine.
//! Keep this file dependency-light; it should compile before any component impls.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ---------- Geometry ----------

/// Rectangular region given by its four edges. `top >= bottom` and
/// `right >= left`; y grows upward.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl BoundingBox {
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self { top, right, bottom, left }
    }

    #[inline]
    pub fn width(&self) -> f64 { self.right - self.left }

    #[inline]
    pub fn height(&self) -> f64 { self.top - self.bottom }

    /// True when `other` lies fully inside (edges inclusive).
    pub fn contains(&self, other: &BoundingBox) -> bool {
        other.top <= self.top && other.bottom >= self.bottom &&
        other.right <= self.right && other.left >= self.left
    }
}

/// Axis and sense along which a possibility lays out its children.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Top,
    Right,
    Bottom,
    Left,
}

impl Direction {
    /// Edge of `b` the layout cursor starts on (the edge opposite the
    /// direction; placing toward `Bottom` starts at `b.top`, etc.).
    #[inline]
    pub fn start_edge(self, b: &BoundingBox) -> f64 {
        match self {
            Direction::Top => b.bottom,
            Direction::Right => b.left,
            Direction::Bottom => b.top,
            Direction::Left => b.right,
        }
    }

    /// Length of `size` along this axis.
    #[inline]
    pub fn extent_of(self, size: &Size) -> f64 {
        match self {
            Direction::Top | Direction::Bottom => size.height,
            Direction::Left | Direction::Right => size.width,
        }
    }

    /// Step `from` by `amount` in this direction's sense
    /// (`Bottom`/`Left` decrease, `Top`/`Right` increase).
    #[inline]
    pub fn advance(self, from: f64, amount: f64) -> f64 {
        match self {
            Direction::Top | Direction::Right => from + amount,
            Direction::Bottom | Direction::Left => from - amount,
        }
    }

    /// True when `position` has crossed outside `b` along this direction.
    #[inline]
    pub fn crosses(self, position: f64, b: &BoundingBox) -> bool {
        match self {
            Direction::Top => position > b.top,
            Direction::Right => position > b.right,
            Direction::Bottom => position < b.bottom,
            Direction::Left => position < b.left,
        }
    }
}

/// Positioning of a child on the axis perpendicular to the direction.
/// `Stretch` fills the full perpendicular span.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Align {
    Top,
    Right,
    Bottom,
    Left,
    Stretch,
}

impl Default for Align {
    fn default() -> Self { Align::Stretch }
}

/// Child extent along both axes.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

// ---------- Fixed-or-weighted values ----------

/// One weighted candidate; probabilities accumulate in list order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Weighted<T> {
    pub probability: f64,
    pub value: T,
}

/// A value given outright, or chosen at generation time from a weighted
/// candidate list. Tagged explicitly so a literal list value can never be
/// mistaken for a choice list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum FixedOrRandom<T> {
    Fixed(T),
    Random(Vec<Weighted<T>>),
}

// ---------- Spacing ----------

/// Gap inserted between consecutively placed children along the
/// direction axis.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Spacing {
    Fixed(f64),
    Range(SpacingRange),
    Weighted(Vec<Weighted<SpacingRange>>),
}

/// Inclusive distance range; the drawn value snaps to the nearest
/// multiple of `round_to`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpacingRange {
    pub min: f64,
    pub max: f64,
    #[serde(default = "default_round_to")]
    pub round_to: f64,
}

fn default_round_to() -> f64 {
    1.0
}

// ---------- Schema nodes ----------

/// A named rule describing how to fill a bounding box with children laid
/// out along one direction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Possibility {
    /// Re-resolved on every repeat iteration; entries may themselves be
    /// weighted.
    pub children: FixedOrRandom<Vec<FixedOrRandom<ChildDef>>>,

    pub direction: Direction,

    /// Default extent for children that carry no size of their own.
    pub size: Size,

    #[serde(default)]
    pub align: Align,

    #[serde(default = "default_repeat")]
    pub repeat: u32,

    #[serde(default = "default_spacing")]
    pub spacing: FixedOrRandom<Spacing>,
}

fn default_repeat() -> u32 {
    1
}

fn default_spacing() -> FixedOrRandom<Spacing> {
    FixedOrRandom::Fixed(Spacing::Fixed(0.0))
}

/// Reference to another named possibility, filled recursively within the
/// child's area.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PossibilityRef {
    pub title: String,
    #[serde(default)]
    pub size: Option<FixedOrRandom<Size>>,
    #[serde(default)]
    pub align: Option<Align>,
}

/// Leaf definition, emitted as a [`Placement`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResultDef {
    pub title: FixedOrRandom<String>,
    #[serde(default)]
    pub size: Option<FixedOrRandom<Size>>,
    #[serde(default)]
    pub align: Option<Align>,
    #[serde(default)]
    pub properties: Option<FixedOrRandom<PropertyMap>>,
}

/// A possibility's child: recurse deeper, or emit a leaf.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ChildDef {
    Possibility(PossibilityRef),
    Result(ResultDef),
}

impl ChildDef {
    pub fn size(&self) -> Option<&FixedOrRandom<Size>> {
        match self {
            ChildDef::Possibility(p) => p.size.as_ref(),
            ChildDef::Result(r) => r.size.as_ref(),
        }
    }

    pub fn align(&self) -> Option<Align> {
        match self {
            ChildDef::Possibility(p) => p.align,
            ChildDef::Result(r) => r.align,
        }
    }
}

// ---------- Output ----------

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum PropertyValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

/// Ordered so equal outputs compare and print identically.
pub type PropertyMap = BTreeMap<String, PropertyValue>;

/// A leaf placement handed to the external spawner.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub area: BoundingBox,
    pub title: String,
    pub properties: Option<PropertyMap>,
}

#[cfg(test)]
mod core_tests {
    use super::*;

    #[test]
    fn bounding_box_measures_from_edges() {
        let b = BoundingBox::new(8.0, 12.0, 0.0, 2.0);
        assert_eq!(10.0, b.width());
        assert_eq!(8.0, b.height());
    }

    #[test]
    fn contains_is_edge_inclusive() {
        let outer = BoundingBox::new(8.0, 12.0, 0.0, 0.0);
        assert!(outer.contains(&outer));
        assert!(outer.contains(&BoundingBox::new(6.0, 10.0, 2.0, 1.0)));
        assert!(!outer.contains(&BoundingBox::new(9.0, 12.0, 0.0, 0.0)));
        assert!(!outer.contains(&BoundingBox::new(8.0, 12.0, -1.0, 0.0)));
    }

    #[test]
    fn schema_defaults_fill_optional_fields() {
        let text = r#"(
            children: Fixed([Fixed(Result((title: Fixed("Tree"))))]),
            direction: Bottom,
            size: (width: 4.0, height: 4.0),
        )"#;
        let possibility: Possibility = ron::de::from_str(text).unwrap();
        assert_eq!(Align::Stretch, possibility.align);
        assert_eq!(1, possibility.repeat);
        assert_eq!(FixedOrRandom::Fixed(Spacing::Fixed(0.0)), possibility.spacing);
    }

    #[test]
    fn spacing_range_round_to_defaults_to_unity() {
        let range: SpacingRange = ron::de::from_str("(min: 1.0, max: 3.0)").unwrap();
        assert_eq!(1.0, range.round_to);
    }
}
