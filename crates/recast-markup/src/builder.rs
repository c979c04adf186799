//! Attribute set → typed [`Node`].
//!
//! The parser hands over the already-filtered attributes of one element;
//! this module applies per-kind defaults and value grammars.

use crate::ast::{
    ButtonNode, CardNode, ConstraintNode, EditTextNode, ImageNode, IncludeNode, LinearNode, Node,
    RangeSliderNode, ScrollNode, SliderNode, StackNode, TextNode, TextProps, ToggleNode, ViewNode,
};
use crate::attributes::{Constraint, ConstraintTarget, Edges, ViewAttributes, CONSTRAINT_ATTRIBUTES};
use crate::catalog::ViewKind;
use crate::error::ParseErrorKind;
use crate::values::{self, Orientation, ValueError};

type BuildResult<T> = Result<T, ParseErrorKind>;

// ── AttributeSet ──────────────────────────────────────────────────────────

/// Bare attribute names and their unescaped values, in document order.
pub(crate) struct AttributeSet {
    tag: String,
    entries: Vec<(String, String)>,
}

impl AttributeSet {
    pub(crate) fn new(tag: &str) -> Self {
        Self { tag: tag.to_string(), entries: Vec::new() }
    }

    pub(crate) fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    pub(crate) fn push(&mut self, name: String, value: String) {
        self.entries.push((name, value));
    }

    fn raw(&self, name: &str) -> Option<&str> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, v)| v.as_str())
    }

    fn get<T>(&self, name: &str, parse: fn(&str) -> Result<T, ValueError>) -> BuildResult<Option<T>> {
        let Some(raw) = self.raw(name) else { return Ok(None) };
        parse(raw).map(Some).map_err(|e| ParseErrorKind::InvalidValue {
            tag: self.tag.clone(),
            attribute: name.to_string(),
            value: raw.to_string(),
            expected: e.expected,
        })
    }

    /// The first of `names` that is present wins.
    fn first<T>(&self, names: &[&str], parse: fn(&str) -> Result<T, ValueError>) -> BuildResult<Option<T>> {
        for name in names {
            if let Some(v) = self.get(name, parse)? {
                return Ok(Some(v));
            }
        }
        Ok(None)
    }

    fn require<T>(&self, names: &[&str], parse: fn(&str) -> Result<T, ValueError>) -> BuildResult<T> {
        self.first(names, parse)?.ok_or_else(|| ParseErrorKind::MissingAttribute {
            tag: self.tag.clone(),
            attribute: names.first().copied().unwrap_or_default().to_string(),
        })
    }
}

// ── Node construction ─────────────────────────────────────────────────────

pub(crate) fn build_node(kind: ViewKind, attrs: &AttributeSet) -> BuildResult<Node> {
    let view = if kind.info().common { view_attributes(attrs)? } else { include_attributes(attrs)? };

    Ok(match kind {
        ViewKind::Text => Node::Text(TextNode { view, text: text_props(attrs, true)? }),
        ViewKind::Button => Node::Button(ButtonNode { view, label: text_props(attrs, true)? }),
        ViewKind::EditText => Node::EditText(EditTextNode {
            view,
            text: text_props(attrs, false)?,
            hint: attrs.get("hint", values::parse_text)?,
            input_type: attrs.get("inputType", values::parse_input_type)?.unwrap_or_default(),
            single_line: attrs.get("singleLine", values::parse_bool)?.unwrap_or(false),
        }),
        ViewKind::Image => Node::Image(ImageNode {
            view,
            src: attrs.require(&["src", "srcCompat"], values::parse_image_source)?,
            scale: attrs.get("scaleType", values::parse_scale_type)?.unwrap_or_default(),
        }),
        ViewKind::CheckBox => Node::CheckBox(toggle(view, attrs)?),
        ViewKind::RadioButton => Node::RadioButton(toggle(view, attrs)?),
        ViewKind::Switch => Node::Switch(toggle(view, attrs)?),
        ViewKind::RangeSlider => {
            let (min, max, step_size) = slider_bounds(attrs)?;
            Node::RangeSlider(RangeSliderNode {
                view,
                min,
                max,
                values: attrs.get("values", values::parse_range)?,
                step_size,
            })
        }
        ViewKind::Slider => {
            let (min, max, step_size) = slider_bounds(attrs)?;
            Node::Slider(SliderNode {
                view,
                min,
                max,
                value: attrs.first(&["value", "progress"], values::parse_number)?,
                step_size,
            })
        }
        ViewKind::View => Node::View(ViewNode { view }),
        ViewKind::Include => Node::Include(IncludeNode {
            view,
            layout: attrs.require(&["layout"], values::parse_layout_ref)?,
        }),
        ViewKind::Row => Node::Row(stack(view, attrs)?),
        ViewKind::Column => Node::Column(stack(view, attrs)?),
        ViewKind::Box => Node::Box(stack(view, attrs)?),
        ViewKind::LinearLayout => Node::LinearLayout(linear(view, attrs, Orientation::Horizontal)?),
        ViewKind::RadioGroup => Node::RadioGroup(linear(view, attrs, Orientation::Vertical)?),
        ViewKind::Card => Node::Card(CardNode {
            view,
            corner_radius: attrs.get("cardCornerRadius", values::parse_dimension)?,
            background: attrs.get("cardBackgroundColor", values::parse_color)?,
            elevation: attrs.get("cardElevation", values::parse_dimension)?,
            children: Vec::new(),
        }),
        ViewKind::ScrollView => Node::ScrollView(ScrollNode {
            view,
            horizontal: attrs.tag == "HorizontalScrollView",
            children: Vec::new(),
        }),
        ViewKind::ConstraintLayout => Node::ConstraintLayout(ConstraintNode { view, children: Vec::new() }),
    })
}

fn view_attributes(attrs: &AttributeSet) -> BuildResult<ViewAttributes> {
    let mut constraints = Vec::new();
    for (name, anchor, target_anchor) in CONSTRAINT_ATTRIBUTES {
        if let Some(target) = attrs.get(name, parse_constraint_target)? {
            constraints.push(Constraint { anchor: *anchor, target, target_anchor: *target_anchor });
        }
    }

    Ok(ViewAttributes {
        id: attrs.get("id", values::parse_id)?,
        width: attrs.get("layout_width", values::parse_layout_size)?.unwrap_or_default(),
        height: attrs.get("layout_height", values::parse_layout_size)?.unwrap_or_default(),
        padding: edges(attrs, "padding")?,
        margin: edges(attrs, "layout_margin")?,
        background: attrs.get("background", values::parse_drawable)?,
        visibility: attrs.get("visibility", values::parse_visibility)?.unwrap_or_default(),
        enabled: attrs.get("enabled", values::parse_bool)?.unwrap_or(true),
        alpha: attrs.get("alpha", values::parse_number)?.unwrap_or(1.0),
        weight: attrs.get("layout_weight", values::parse_non_negative)?.unwrap_or(0.0),
        layout_gravity: attrs.get("layout_gravity", values::parse_gravity)?.unwrap_or_default(),
        content_description: attrs.get("contentDescription", values::parse_text)?,
        constraints,
    })
}

fn include_attributes(attrs: &AttributeSet) -> BuildResult<ViewAttributes> {
    Ok(ViewAttributes {
        id: attrs.get("id", values::parse_id)?,
        visibility: attrs.get("visibility", values::parse_visibility)?.unwrap_or_default(),
        ..ViewAttributes::default()
    })
}

fn parse_constraint_target(s: &str) -> Result<ConstraintTarget, ValueError> {
    if s.trim() == "parent" {
        return Ok(ConstraintTarget::Parent);
    }
    values::parse_id(s).map(ConstraintTarget::Sibling).map_err(|_| ValueError {
        expected: "`parent` or a sibling id such as `@id/title`".to_string(),
    })
}

/// Resolves `base`, `baseHorizontal|Vertical` and the per-side attributes.
/// The most specific attribute wins; Start/End win over Left/Right.
fn edges(attrs: &AttributeSet, base: &str) -> BuildResult<Edges> {
    let side = |suffix: &str| format!("{base}{suffix}");
    let dim = values::parse_dimension;

    let all = attrs.get(base, dim)?;
    let horizontal = attrs.get(&side("Horizontal"), dim)?;
    let vertical = attrs.get(&side("Vertical"), dim)?;
    let start = attrs.first(&[side("Start").as_str(), side("Left").as_str()], dim)?;
    let end = attrs.first(&[side("End").as_str(), side("Right").as_str()], dim)?;
    let top = attrs.get(&side("Top"), dim)?;
    let bottom = attrs.get(&side("Bottom"), dim)?;

    Ok(Edges {
        start: start.or_else(|| horizontal.clone()).or_else(|| all.clone()),
        end: end.or_else(|| horizontal.clone()).or_else(|| all.clone()),
        top: top.or_else(|| vertical.clone()).or_else(|| all.clone()),
        bottom: bottom.or(vertical).or(all),
    })
}

/// `fold_single_line` turns `singleLine="true"` into a one-line limit; text
/// fields keep it as a separate flag instead.
fn text_props(attrs: &AttributeSet, fold_single_line: bool) -> BuildResult<TextProps> {
    let mut max_lines = attrs.get("maxLines", values::parse_integer)?;
    if fold_single_line && attrs.get("singleLine", values::parse_bool)?.unwrap_or(false) {
        max_lines = max_lines.or(Some(1));
    }
    Ok(TextProps {
        text: attrs.get("text", values::parse_text)?.unwrap_or_default(),
        color: attrs.get("textColor", values::parse_color)?,
        size: attrs.get("textSize", values::parse_dimension)?,
        style: attrs.get("textStyle", values::parse_text_style)?.unwrap_or_default(),
        font_family: attrs.get("fontFamily", values::parse_font_family)?,
        align: attrs.get("gravity", values::parse_gravity)?.and_then(|g| g.horizontal),
        max_lines,
    })
}

fn toggle(view: ViewAttributes, attrs: &AttributeSet) -> BuildResult<ToggleNode> {
    Ok(ToggleNode {
        view,
        label: attrs.get("text", values::parse_text)?.unwrap_or_default(),
        checked: attrs.get("checked", values::parse_bool)?.unwrap_or(false),
    })
}

/// `(min, max, step_size)` with the Material defaults `0`, `1`, `0`.
fn slider_bounds(attrs: &AttributeSet) -> BuildResult<(f32, f32, f32)> {
    Ok((
        attrs.first(&["valueFrom", "min"], values::parse_number)?.unwrap_or(0.0),
        attrs.first(&["valueTo", "max"], values::parse_number)?.unwrap_or(1.0),
        attrs.get("stepSize", values::parse_non_negative)?.unwrap_or(0.0),
    ))
}

fn stack(view: ViewAttributes, attrs: &AttributeSet) -> BuildResult<StackNode> {
    Ok(StackNode {
        view,
        gravity: attrs.get("gravity", values::parse_gravity)?.unwrap_or_default(),
        children: Vec::new(),
    })
}

fn linear(view: ViewAttributes, attrs: &AttributeSet, default: Orientation) -> BuildResult<LinearNode> {
    Ok(LinearNode {
        view,
        gravity: attrs.get("gravity", values::parse_gravity)?.unwrap_or_default(),
        orientation: attrs.get("orientation", values::parse_orientation)?.unwrap_or(default),
        children: Vec::new(),
    })
}
