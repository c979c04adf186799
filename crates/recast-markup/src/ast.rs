//! Typed layout tree produced by the parser.
//!
//! One variant per [`ViewKind`]; each carries the common
//! [`ViewAttributes`] plus its own properties.  Containers own their
//! children in document order.

use crate::attributes::ViewAttributes;
use crate::catalog::ViewKind;
use crate::values::{
    ColorValue, Dimension, FontFamily, Gravity, HorizontalGravity, InputType, Orientation,
    ResourceRef, ScaleType, TextStyle, TextValue, ValueRange,
};

/// A parsed layout document.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    /// One node, or the children of a `<merge>` document element in order.
    pub roots: Vec<Node>,
}

impl Layout {
    /// The single root, if the document has exactly one.
    pub fn root(&self) -> Option<&Node> {
        match self.roots.as_slice() {
            [only] => Some(only),
            _ => None,
        }
    }
}

// ── Leaf properties ───────────────────────────────────────────────────────

/// Text appearance shared by text-bearing kinds.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextProps {
    pub text: TextValue,
    pub color: Option<ColorValue>,
    pub size: Option<Dimension>,
    pub style: TextStyle,
    pub font_family: Option<FontFamily>,
    pub align: Option<HorizontalGravity>,
    pub max_lines: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextNode {
    pub view: ViewAttributes,
    pub text: TextProps,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ButtonNode {
    pub view: ViewAttributes,
    pub label: TextProps,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct EditTextNode {
    pub view: ViewAttributes,
    pub text: TextProps,
    pub hint: Option<TextValue>,
    pub input_type: InputType,
    pub single_line: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImageNode {
    pub view: ViewAttributes,
    pub src: ResourceRef,
    pub scale: ScaleType,
}

/// CheckBox, RadioButton and Switch.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToggleNode {
    pub view: ViewAttributes,
    pub label: TextValue,
    pub checked: bool,
}

/// Bounds are kept as written; ordering is checked at composition time.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeSliderNode {
    pub view: ViewAttributes,
    pub min: f32,
    pub max: f32,
    /// Initial thumbs; `None` selects the whole range.
    pub values: Option<ValueRange>,
    /// 0 for a continuous slider.
    pub step_size: f32,
}

impl Default for RangeSliderNode {
    fn default() -> Self {
        Self { view: ViewAttributes::default(), min: 0.0, max: 1.0, values: None, step_size: 0.0 }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SliderNode {
    pub view: ViewAttributes,
    pub min: f32,
    pub max: f32,
    pub value: Option<f32>,
    pub step_size: f32,
}

impl Default for SliderNode {
    fn default() -> Self {
        Self { view: ViewAttributes::default(), min: 0.0, max: 1.0, value: None, step_size: 0.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewNode {
    pub view: ViewAttributes,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IncludeNode {
    pub view: ViewAttributes,
    pub layout: ResourceRef,
}

// ── Container properties ──────────────────────────────────────────────────

/// Row, Column and Box.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StackNode {
    pub view: ViewAttributes,
    pub gravity: Gravity,
    pub children: Vec<Node>,
}

/// LinearLayout and RadioGroup.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearNode {
    pub view: ViewAttributes,
    pub gravity: Gravity,
    pub orientation: Orientation,
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CardNode {
    pub view: ViewAttributes,
    pub corner_radius: Option<Dimension>,
    pub background: Option<ColorValue>,
    pub elevation: Option<Dimension>,
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScrollNode {
    pub view: ViewAttributes,
    pub horizontal: bool,
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConstraintNode {
    pub view: ViewAttributes,
    pub children: Vec<Node>,
}

// ── Node ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Text(TextNode),
    Button(ButtonNode),
    EditText(EditTextNode),
    Image(ImageNode),
    CheckBox(ToggleNode),
    RadioButton(ToggleNode),
    Switch(ToggleNode),
    RangeSlider(RangeSliderNode),
    Slider(SliderNode),
    View(ViewNode),
    Include(IncludeNode),
    Row(StackNode),
    Column(StackNode),
    Box(StackNode),
    LinearLayout(LinearNode),
    RadioGroup(LinearNode),
    Card(CardNode),
    ScrollView(ScrollNode),
    ConstraintLayout(ConstraintNode),
}

impl Node {
    pub fn kind(&self) -> ViewKind {
        match self {
            Node::Text(_) => ViewKind::Text,
            Node::Button(_) => ViewKind::Button,
            Node::EditText(_) => ViewKind::EditText,
            Node::Image(_) => ViewKind::Image,
            Node::CheckBox(_) => ViewKind::CheckBox,
            Node::RadioButton(_) => ViewKind::RadioButton,
            Node::Switch(_) => ViewKind::Switch,
            Node::RangeSlider(_) => ViewKind::RangeSlider,
            Node::Slider(_) => ViewKind::Slider,
            Node::View(_) => ViewKind::View,
            Node::Include(_) => ViewKind::Include,
            Node::Row(_) => ViewKind::Row,
            Node::Column(_) => ViewKind::Column,
            Node::Box(_) => ViewKind::Box,
            Node::LinearLayout(_) => ViewKind::LinearLayout,
            Node::RadioGroup(_) => ViewKind::RadioGroup,
            Node::Card(_) => ViewKind::Card,
            Node::ScrollView(_) => ViewKind::ScrollView,
            Node::ConstraintLayout(_) => ViewKind::ConstraintLayout,
        }
    }

    pub fn view(&self) -> &ViewAttributes {
        match self {
            Node::Text(n) => &n.view,
            Node::Button(n) => &n.view,
            Node::EditText(n) => &n.view,
            Node::Image(n) => &n.view,
            Node::CheckBox(n) | Node::RadioButton(n) | Node::Switch(n) => &n.view,
            Node::RangeSlider(n) => &n.view,
            Node::Slider(n) => &n.view,
            Node::View(n) => &n.view,
            Node::Include(n) => &n.view,
            Node::Row(n) | Node::Column(n) | Node::Box(n) => &n.view,
            Node::LinearLayout(n) | Node::RadioGroup(n) => &n.view,
            Node::Card(n) => &n.view,
            Node::ScrollView(n) => &n.view,
            Node::ConstraintLayout(n) => &n.view,
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.view().id.as_deref()
    }

    /// Children in document order; empty for leaves.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Row(n) | Node::Column(n) | Node::Box(n) => &n.children,
            Node::LinearLayout(n) | Node::RadioGroup(n) => &n.children,
            Node::Card(n) => &n.children,
            Node::ScrollView(n) => &n.children,
            Node::ConstraintLayout(n) => &n.children,
            _ => &[],
        }
    }

    /// `None` for leaves.
    pub(crate) fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::Row(n) | Node::Column(n) | Node::Box(n) => Some(&mut n.children),
            Node::LinearLayout(n) | Node::RadioGroup(n) => Some(&mut n.children),
            Node::Card(n) => Some(&mut n.children),
            Node::ScrollView(n) => Some(&mut n.children),
            Node::ConstraintLayout(n) => Some(&mut n.children),
            _ => None,
        }
    }
}
