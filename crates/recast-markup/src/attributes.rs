//! Attributes shared by every view kind.

use crate::values::{Dimension, Drawable, Gravity, LayoutSize, TextValue, Visibility};

// ── Edges ─────────────────────────────────────────────────────────────────

/// Per-side insets after `padding` / `paddingHorizontal` / `paddingStart`
/// precedence has been resolved.  `None` means "not given".
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Edges {
    pub start: Option<Dimension>,
    pub top: Option<Dimension>,
    pub end: Option<Dimension>,
    pub bottom: Option<Dimension>,
}

impl Edges {
    pub fn uniform(d: Dimension) -> Self {
        Self { start: Some(d.clone()), top: Some(d.clone()), end: Some(d.clone()), bottom: Some(d) }
    }

    /// Sides in `start, top, end, bottom` order.
    pub fn sides(&self) -> [Option<&Dimension>; 4] {
        [self.start.as_ref(), self.top.as_ref(), self.end.as_ref(), self.bottom.as_ref()]
    }

    /// True when no side carries a non-zero inset.
    pub fn is_empty(&self) -> bool {
        self.sides().iter().all(|s| s.is_none_or(Dimension::is_zero))
    }

    pub fn has_negative(&self) -> bool {
        self.sides().iter().any(|s| s.is_some_and(Dimension::is_negative))
    }
}

// ── Constraints ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Top,
    Bottom,
    Start,
    End,
    Left,
    Right,
    Baseline,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstraintTarget {
    Parent,
    /// Bare id of a sibling inside the same ConstraintLayout.
    Sibling(String),
}

/// One `layout_constraintX_toYOf` attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraint {
    pub anchor: Anchor,
    pub target: ConstraintTarget,
    pub target_anchor: Anchor,
}

impl Constraint {
    /// The attribute this constraint was written as.
    pub fn attribute(&self) -> &'static str {
        CONSTRAINT_ATTRIBUTES
            .iter()
            .find(|(_, a, t)| *a == self.anchor && *t == self.target_anchor)
            .map_or("layout_constraint", |(name, _, _)| name)
    }
}

/// Every supported constraint attribute, in the order constraints are
/// collected (and later emitted).
pub const CONSTRAINT_ATTRIBUTES: &[(&str, Anchor, Anchor)] = &[
    ("layout_constraintTop_toTopOf",           Anchor::Top,      Anchor::Top),
    ("layout_constraintTop_toBottomOf",        Anchor::Top,      Anchor::Bottom),
    ("layout_constraintBottom_toTopOf",        Anchor::Bottom,   Anchor::Top),
    ("layout_constraintBottom_toBottomOf",     Anchor::Bottom,   Anchor::Bottom),
    ("layout_constraintStart_toStartOf",       Anchor::Start,    Anchor::Start),
    ("layout_constraintStart_toEndOf",         Anchor::Start,    Anchor::End),
    ("layout_constraintEnd_toStartOf",         Anchor::End,      Anchor::Start),
    ("layout_constraintEnd_toEndOf",           Anchor::End,      Anchor::End),
    ("layout_constraintLeft_toLeftOf",         Anchor::Left,     Anchor::Left),
    ("layout_constraintLeft_toRightOf",        Anchor::Left,     Anchor::Right),
    ("layout_constraintRight_toLeftOf",        Anchor::Right,    Anchor::Left),
    ("layout_constraintRight_toRightOf",       Anchor::Right,    Anchor::Right),
    ("layout_constraintBaseline_toBaselineOf", Anchor::Baseline, Anchor::Baseline),
];

// ── ViewAttributes ────────────────────────────────────────────────────────

/// The attribute bag every view kind carries.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewAttributes {
    pub id: Option<String>,
    pub width: LayoutSize,
    pub height: LayoutSize,
    pub padding: Edges,
    pub margin: Edges,
    pub background: Option<Drawable>,
    pub visibility: Visibility,
    pub enabled: bool,
    /// Opacity; validated against `0..=1` at composition time.
    pub alpha: f32,
    /// `layout_weight`; 0 means unweighted.
    pub weight: f32,
    pub layout_gravity: Gravity,
    pub content_description: Option<TextValue>,
    pub constraints: Vec<Constraint>,
}

impl Default for ViewAttributes {
    fn default() -> Self {
        Self {
            id: None,
            width: LayoutSize::Wrap,
            height: LayoutSize::Wrap,
            padding: Edges::default(),
            margin: Edges::default(),
            background: None,
            visibility: Visibility::Visible,
            enabled: true,
            alpha: 1.0,
            weight: 0.0,
            layout_gravity: Gravity::default(),
            content_description: None,
            constraints: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constraint_attribute_names() {
        let c = Constraint { anchor: Anchor::Start, target: ConstraintTarget::Parent, target_anchor: Anchor::End };
        assert_eq!(c.attribute(), "layout_constraintStart_toEndOf");
    }

    #[test]
    fn zero_edges_are_empty() {
        assert!(Edges::default().is_empty());
        assert!(Edges::uniform(Dimension::Dp(0.0)).is_empty());
        assert!(!Edges::uniform(Dimension::Dp(4.0)).is_empty());
        let e = Edges { top: Some(Dimension::Dp(-1.0)), ..Edges::default() };
        assert!(e.has_negative());
    }
}
