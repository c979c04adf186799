use recast_markup::ast::{
    ButtonNode, CardNode, ConstraintNode, EditTextNode, ImageNode, IncludeNode, Layout, LinearNode,
    Node, RangeSliderNode, ScrollNode, SliderNode, StackNode, TextNode, TextProps, ToggleNode,
    ViewNode,
};
use recast_markup::attributes::{Anchor, Constraint, ConstraintTarget, Edges, ViewAttributes};
use recast_markup::values::{
    Dimension, Drawable, Gravity, HorizontalGravity, KeyboardKind, LayoutSize, Orientation,
    ScaleType, ValueRange, VerticalGravity, Visibility,
};
use recast_markup::{ViewKind, Visitor};

use crate::error::ComposeError;
use crate::kotlin::{self, Call};
use crate::modifier::Modifier;
use crate::writer::CodeWriter;

type ComposeResult<T = ()> = Result<T, ComposeError>;

// ── ComposerOptions ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct ComposerOptions {
    /// Indentation levels added in front of every emitted line.
    pub start_indentation: usize,
}

// ── Composer ──────────────────────────────────────────────────────────────

/// Emits Compose source for a parsed layout.
///
/// Each call runs a fresh single-pass traversal; a `Composer` holds only its
/// options and can be reused across documents.
#[derive(Debug, Clone, Default)]
pub struct Composer {
    options: ComposerOptions,
}

impl Composer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ComposerOptions) -> Self {
        Self { options }
    }

    pub fn with_start_indentation(start_indentation: usize) -> Self {
        Self::with_options(ComposerOptions { start_indentation })
    }

    pub fn options(&self) -> &ComposerOptions {
        &self.options
    }

    /// Composes every root of `layout` in order.
    pub fn compose(&self, layout: &Layout) -> ComposeResult<String> {
        let mut emitter = Emitter::new(self.options.start_indentation);
        for root in &layout.roots {
            emitter.emit(root)?;
        }
        Ok(emitter.writer.finish())
    }

    pub fn compose_node(&self, node: &Node) -> ComposeResult<String> {
        let mut emitter = Emitter::new(self.options.start_indentation);
        emitter.emit(node)?;
        Ok(emitter.writer.finish())
    }
}

/// Composes with default options.
pub fn compose(layout: &Layout) -> ComposeResult<String> {
    Composer::new().compose(layout)
}

// ── Scopes ────────────────────────────────────────────────────────────────

/// The receiver scope children are emitted into; decides which scoped
/// modifiers (`weight`, `align`, `constrainAs`) are available.
enum Scope {
    Row,
    Column,
    Box,
    /// Card content: no scoped modifiers.
    Plain,
    Constraint(ConstraintScope),
}

struct Frame {
    scope: Scope,
    /// Index of the child currently being emitted.
    index: usize,
}

/// References declared at the top of a ConstraintLayout block.
#[derive(Default)]
struct ConstraintScope {
    /// Per child, in document order; `None` when the child needs no reference.
    refs: Vec<Option<String>>,
    /// Child ids and the reference each resolves to (`None` for gone views).
    ids: Vec<(String, Option<String>)>,
}

impl ConstraintScope {
    /// Ids are named first so generated `refN` names can skip every name an
    /// id already produced.
    fn build(node: &ConstraintNode) -> ComposeResult<Self> {
        let mut scope = Self::default();
        let mut taken: Vec<String> = Vec::new();
        let mut from_ids = Vec::with_capacity(node.children.len());

        for child in &node.children {
            let view = child.view();
            let fail = |reason: String| ComposeError::new(child.kind(), view, "id", reason);

            let name = match &view.id {
                Some(id) => {
                    if scope.ids.iter().any(|(other, _)| other == id) {
                        return Err(fail(format!("`{id}` is used by another child of the same ConstraintLayout")));
                    }
                    scope.ids.push((id.clone(), None));
                    let name = kotlin::camel_identifier(id);
                    if view.visibility == Visibility::Gone {
                        None
                    } else if !kotlin::is_identifier(&name) {
                        log::debug!("id `{id}` has no Kotlin spelling; using a generated reference");
                        None
                    } else if name == "parent" {
                        return Err(fail("clashes with the ConstraintLayout `parent` reference".into()));
                    } else if taken.contains(&name) {
                        return Err(fail(format!("reference name `{name}` is already used by a sibling")));
                    } else {
                        taken.push(name.clone());
                        Some(name)
                    }
                }
                None => None,
            };
            from_ids.push(name);
        }

        let mut next = 0;
        for (child, name) in node.children.iter().zip(from_ids) {
            let view = child.view();
            let needs_ref = view.visibility != Visibility::Gone
                && (view.id.is_some() || !view.constraints.is_empty());
            let name = match name {
                Some(name) => Some(name),
                None if needs_ref => {
                    let mut generated = format!("ref{next}");
                    while taken.contains(&generated) {
                        next += 1;
                        generated = format!("ref{next}");
                    }
                    next += 1;
                    taken.push(generated.clone());
                    Some(generated)
                }
                None => None,
            };

            if let Some(id) = &view.id {
                if let Some(entry) = scope.ids.iter_mut().find(|(other, _)| other == id) {
                    entry.1 = name.clone();
                }
            }
            scope.refs.push(name);
        }
        Ok(scope)
    }

    fn declared(&self) -> impl Iterator<Item = &String> {
        self.refs.iter().flatten()
    }
}

// ── Emitter ───────────────────────────────────────────────────────────────

struct Emitter {
    writer: CodeWriter,
    frames: Vec<Frame>,
}

impl Emitter {
    fn new(start_indentation: usize) -> Self {
        Self { writer: CodeWriter::new(start_indentation), frames: Vec::new() }
    }

    fn emit(&mut self, node: &Node) -> ComposeResult {
        if node.view().visibility == Visibility::Gone {
            log::debug!("skipping {} with visibility gone", node.kind());
            return Ok(());
        }
        node.accept(self)
    }

    fn children(&mut self, children: &[Node], scope: Scope) -> ComposeResult {
        self.frames.push(Frame { scope, index: 0 });
        for (i, child) in children.iter().enumerate() {
            if let Some(frame) = self.frames.last_mut() {
                frame.index = i;
            }
            self.emit(child)?;
        }
        self.frames.pop();
        Ok(())
    }

    /// `header {`, the children one level deeper, `}`.
    fn block(&mut self, call: &Call, children: &[Node], scope: Scope) -> ComposeResult {
        self.writer.open(&call.header());
        self.children(children, scope)?;
        self.writer.close();
        Ok(())
    }

    // ── Modifier chain ────────────────────────────────────────────────────

    /// Builds the chain in a fixed order: constraints, scope, margin, size,
    /// alpha, background, padding, `extras`, semantics.
    fn modifier(&self, kind: ViewKind, view: &ViewAttributes, extras: &[&str]) -> ComposeResult<Modifier> {
        let fail = |attribute: &str, reason: String| ComposeError::new(kind, view, attribute, reason);
        let mut m = Modifier::new();
        let mut skip_width = false;
        let mut skip_height = false;
        let frame = self.frames.last();

        match frame {
            Some(Frame { scope: Scope::Constraint(cs), index }) => {
                if let Some(name) = cs.refs.get(*index).and_then(Option::as_deref) {
                    let mut links = Vec::new();
                    for c in &view.constraints {
                        links.push(link(cs, kind, view, c)?);
                    }
                    if view.width.is_zero() {
                        links.push("width = Dimension.fillToConstraints".to_string());
                        skip_width = true;
                    }
                    if view.height.is_zero() {
                        links.push("height = Dimension.fillToConstraints".to_string());
                        skip_height = true;
                    }
                    if links.is_empty() {
                        m.then(format!("constrainAs({name}) {{}}"));
                    } else {
                        m.then(format!("constrainAs({name}) {{ {} }}", links.join("; ")));
                    }
                }
            }
            _ if !view.constraints.is_empty() => {
                log::debug!("{kind}: constraints ignored outside a ConstraintLayout");
            }
            _ => {}
        }

        let scope = frame.map(|f| &f.scope);
        if view.weight > 0.0 {
            match scope {
                Some(Scope::Row) => skip_width |= view.width.is_zero(),
                Some(Scope::Column) => skip_height |= view.height.is_zero(),
                _ => return Err(fail("layout_weight", "only applies to children of a Row or Column".into())),
            }
            m.then(format!("weight({})", kotlin::float(view.weight)));
        }
        if let Some(align) = child_alignment(scope, view.layout_gravity) {
            m.then(format!("align({align})"));
        }

        if view.margin.has_negative() {
            return Err(fail("layout_margin", "must not be negative".into()));
        }
        if let Some(margin) = padding(&view.margin) {
            m.then(margin);
        }

        let wrap = LayoutSize::Wrap;
        let width = if skip_width { &wrap } else { &view.width };
        let height = if skip_height { &wrap } else { &view.height };
        for call in size(width, height) {
            m.then(call);
        }

        if !(0.0..=1.0).contains(&view.alpha) {
            return Err(fail("alpha", format!("must be between 0 and 1 (got {})", kotlin::number(view.alpha))));
        }
        if view.visibility == Visibility::Invisible {
            m.then("alpha(0f)");
        } else if view.alpha < 1.0 {
            m.then(format!("alpha({})", kotlin::float(view.alpha)));
        }

        match &view.background {
            Some(Drawable::Color(c)) => {
                m.then(format!("background({})", kotlin::color(c)));
            }
            Some(Drawable::Resource(r)) => {
                m.then(format!(
                    "paint(painterResource(id = {}), contentScale = ContentScale.FillBounds)",
                    kotlin::resource(r)
                ));
            }
            None => {}
        }

        if view.padding.has_negative() {
            return Err(fail("padding", "must not be negative".into()));
        }
        if let Some(p) = padding(&view.padding) {
            m.then(p);
        }

        for extra in extras {
            m.then(*extra);
        }

        // Image takes the description as a parameter instead.
        if kind != ViewKind::Image {
            if let Some(desc) = &view.content_description {
                m.then(format!("semantics {{ contentDescription = {} }}", kotlin::text(desc)));
            }
        }
        Ok(m)
    }

    // ── Shared leaf helpers ───────────────────────────────────────────────

    fn toggle(&mut self, kind: ViewKind, node: &ToggleNode) -> ComposeResult {
        let modifier = self.modifier(kind, &node.view, &[])?;
        let checked = if node.checked { "true" } else { "false" };
        let control = match kind {
            ViewKind::RadioButton => Call::new("RadioButton").arg("selected", checked).arg("onClick", "{}"),
            ViewKind::Switch => Call::new("Switch").arg("checked", checked).arg("onCheckedChange", "{}"),
            _ => Call::new("Checkbox").arg("checked", checked).arg("onCheckedChange", "{}"),
        };

        if node.label.is_empty() {
            self.writer.line(&control.modifier(&modifier).enabled(node.view.enabled).render());
            return Ok(());
        }

        let control = control.enabled(node.view.enabled);
        let row = Call::new("Row")
            .modifier(&modifier)
            .arg("verticalAlignment", "Alignment.CenterVertically");
        let label = Call::new("Text").arg("text", kotlin::text(&node.label));
        self.writer.line(&format!("{} {{ {}; {} }}", row.render(), control.render(), label.render()));
        Ok(())
    }

    fn linear(&mut self, kind: ViewKind, node: &LinearNode, extras: &[&str]) -> ComposeResult {
        let modifier = self.modifier(kind, &node.view, extras)?;
        match node.orientation {
            Orientation::Horizontal => self.block(&row_call(&modifier, node.gravity), &node.children, Scope::Row),
            Orientation::Vertical => {
                self.block(&column_call(&modifier, node.gravity), &node.children, Scope::Column)
            }
        }
    }
}

// ── Visitor ───────────────────────────────────────────────────────────────

impl Visitor for Emitter {
    type Output = ComposeResult;

    fn visit_text(&mut self, node: &TextNode) -> ComposeResult {
        let modifier = self.modifier(ViewKind::Text, &node.view, &[])?;
        let call = Call::new("Text").arg("text", kotlin::text(&node.text.text)).modifier(&modifier);
        let call = text_args(call, &node.text, ViewKind::Text, &node.view)?;
        self.writer.line(&call.render());
        Ok(())
    }

    fn visit_button(&mut self, node: &ButtonNode) -> ComposeResult {
        let modifier = self.modifier(ViewKind::Button, &node.view, &[])?;
        let button = Call::new("Button")
            .arg("onClick", "{}")
            .modifier(&modifier)
            .enabled(node.view.enabled);
        let label = Call::new("Text").arg("text", kotlin::text(&node.label.text));
        let label = text_args(label, &node.label, ViewKind::Button, &node.view)?;
        self.writer.line(&format!("{} {{ {} }}", button.render(), label.render()));
        Ok(())
    }

    fn visit_edit_text(&mut self, node: &EditTextNode) -> ComposeResult {
        let kind = ViewKind::EditText;
        let modifier = self.modifier(kind, &node.view, &[])?;
        let props = &node.text;

        let mut style = Call::new("TextStyle")
            .arg_opt("color", props.color.as_ref().map(kotlin::color))
            .arg_opt("fontSize", props.size.as_ref().map(kotlin::sp));
        if props.style.bold {
            style = style.arg("fontWeight", "FontWeight.Bold");
        }
        if props.style.italic {
            style = style.arg("fontStyle", "FontStyle.Italic");
        }
        style = style
            .arg_opt("fontFamily", props.font_family.as_ref().map(kotlin::font_family))
            .arg_opt("textAlign", text_align(props.align));
        let has_style = style.header() != "TextStyle";

        let keyboard = match (node.input_type.password, node.input_type.keyboard) {
            (true, Some(KeyboardKind::Number)) => Some("NumberPassword"),
            (true, _) => Some("Password"),
            (false, Some(k)) => Some(keyboard_type(k)),
            (false, None) => None,
        };

        let mut call = Call::new("TextField")
            .arg("value", kotlin::text(&props.text))
            .arg("onValueChange", "{}")
            .modifier(&modifier)
            .enabled(node.view.enabled);
        if has_style {
            call = call.arg("textStyle", style.render());
        }
        call = call.arg_opt(
            "placeholder",
            node.hint.as_ref().map(|h| format!("{{ Text(text = {}) }}", kotlin::text(h))),
        );
        if node.input_type.password {
            call = call.arg("visualTransformation", "PasswordVisualTransformation()");
        }
        call = call.arg_opt(
            "keyboardOptions",
            keyboard.map(|k| format!("KeyboardOptions(keyboardType = KeyboardType.{k})")),
        );
        if node.single_line {
            call = call.arg("singleLine", "true");
        }
        call = call.arg_opt("maxLines", max_lines(props.max_lines, kind, &node.view)?);
        self.writer.line(&call.render());
        Ok(())
    }

    fn visit_image(&mut self, node: &ImageNode) -> ComposeResult {
        let modifier = self.modifier(ViewKind::Image, &node.view, &[])?;
        let description = node.view.content_description.as_ref().map_or_else(|| "null".to_string(), kotlin::text);
        let call = Call::new("Image")
            .arg("painter", format!("painterResource(id = {})", kotlin::resource(&node.src)))
            .arg("contentDescription", description)
            .modifier(&modifier)
            .arg_opt("contentScale", content_scale(node.scale).map(str::to_string));
        self.writer.line(&call.render());
        Ok(())
    }

    fn visit_check_box(&mut self, node: &ToggleNode) -> ComposeResult {
        self.toggle(ViewKind::CheckBox, node)
    }

    fn visit_radio_button(&mut self, node: &ToggleNode) -> ComposeResult {
        self.toggle(ViewKind::RadioButton, node)
    }

    fn visit_switch(&mut self, node: &ToggleNode) -> ComposeResult {
        self.toggle(ViewKind::Switch, node)
    }

    fn visit_range_slider(&mut self, node: &RangeSliderNode) -> ComposeResult {
        let kind = ViewKind::RangeSlider;
        let steps = slider_steps(kind, &node.view, node.min, node.max, node.step_size)?;
        let values = node.values.unwrap_or(ValueRange::new(node.min, node.max));
        if values.start < node.min || values.end > node.max {
            return Err(ComposeError::new(
                kind,
                &node.view,
                "values",
                format!(
                    "{} lies outside the value range {}",
                    kotlin::float_range(values.start, values.end),
                    kotlin::float_range(node.min, node.max)
                ),
            ));
        }

        let modifier = self.modifier(kind, &node.view, &[])?;
        let call = Call::new("RangeSlider")
            .arg("value", kotlin::float_range(values.start, values.end))
            .arg("onValueChange", "{}")
            .modifier(&modifier)
            .enabled(node.view.enabled)
            .arg_opt("valueRange", value_range(node.min, node.max))
            .arg_opt("steps", steps);
        self.writer.line(&call.render());
        Ok(())
    }

    fn visit_slider(&mut self, node: &SliderNode) -> ComposeResult {
        let kind = ViewKind::Slider;
        let steps = slider_steps(kind, &node.view, node.min, node.max, node.step_size)?;
        let value = node.value.unwrap_or(node.min);
        if !(node.min..=node.max).contains(&value) {
            return Err(ComposeError::new(
                kind,
                &node.view,
                "value",
                format!(
                    "{} lies outside the value range {}",
                    kotlin::float(value),
                    kotlin::float_range(node.min, node.max)
                ),
            ));
        }

        let modifier = self.modifier(kind, &node.view, &[])?;
        let call = Call::new("Slider")
            .arg("value", kotlin::float(value))
            .arg("onValueChange", "{}")
            .modifier(&modifier)
            .enabled(node.view.enabled)
            .arg_opt("valueRange", value_range(node.min, node.max))
            .arg_opt("steps", steps);
        self.writer.line(&call.render());
        Ok(())
    }

    fn visit_view(&mut self, node: &ViewNode) -> ComposeResult {
        let modifier = self.modifier(ViewKind::View, &node.view, &[])?;
        let modifier = modifier.render().unwrap_or_else(|| "Modifier".to_string());
        self.writer.line(&Call::new("Spacer").arg("modifier", modifier).render());
        Ok(())
    }

    fn visit_include(&mut self, node: &IncludeNode) -> ComposeResult {
        if node.view.visibility == Visibility::Invisible {
            log::debug!("include `{}`: invisible has no counterpart on a call", node.layout.name);
        }
        self.writer.line(&format!("{}()", kotlin::pascal_identifier(&node.layout.name)));
        Ok(())
    }

    fn visit_row(&mut self, node: &StackNode) -> ComposeResult {
        let modifier = self.modifier(ViewKind::Row, &node.view, &[])?;
        self.block(&row_call(&modifier, node.gravity), &node.children, Scope::Row)
    }

    fn visit_column(&mut self, node: &StackNode) -> ComposeResult {
        let modifier = self.modifier(ViewKind::Column, &node.view, &[])?;
        self.block(&column_call(&modifier, node.gravity), &node.children, Scope::Column)
    }

    fn visit_box(&mut self, node: &StackNode) -> ComposeResult {
        let modifier = self.modifier(ViewKind::Box, &node.view, &[])?;
        let call = Call::new("Box")
            .modifier(&modifier)
            .arg_opt("contentAlignment", box_alignment(node.gravity).map(str::to_string));
        self.block(&call, &node.children, Scope::Box)
    }

    fn visit_linear_layout(&mut self, node: &LinearNode) -> ComposeResult {
        self.linear(ViewKind::LinearLayout, node, &[])
    }

    fn visit_radio_group(&mut self, node: &LinearNode) -> ComposeResult {
        self.linear(ViewKind::RadioGroup, node, &["selectableGroup()"])
    }

    fn visit_card(&mut self, node: &CardNode) -> ComposeResult {
        let modifier = self.modifier(ViewKind::Card, &node.view, &[])?;
        let call = Call::new("Card")
            .modifier(&modifier)
            .arg_opt("shape", node.corner_radius.as_ref().map(|r| format!("RoundedCornerShape({})", kotlin::dp(r))))
            .arg_opt("backgroundColor", node.background.as_ref().map(kotlin::color))
            .arg_opt("elevation", node.elevation.as_ref().map(kotlin::dp));
        self.block(&call, &node.children, Scope::Plain)
    }

    fn visit_scroll_view(&mut self, node: &ScrollNode) -> ComposeResult {
        let kind = ViewKind::ScrollView;
        if node.children.len() != 1 {
            return Err(ComposeError::new(
                kind,
                &node.view,
                "children",
                format!("must hold exactly one child view (found {})", node.children.len()),
            ));
        }
        if node.horizontal {
            let modifier = self.modifier(kind, &node.view, &["horizontalScroll(rememberScrollState())"])?;
            self.block(&row_call(&modifier, Gravity::default()), &node.children, Scope::Row)
        } else {
            let modifier = self.modifier(kind, &node.view, &["verticalScroll(rememberScrollState())"])?;
            self.block(&column_call(&modifier, Gravity::default()), &node.children, Scope::Column)
        }
    }

    fn visit_constraint_layout(&mut self, node: &ConstraintNode) -> ComposeResult {
        let modifier = self.modifier(ViewKind::ConstraintLayout, &node.view, &[])?;
        let scope = ConstraintScope::build(node)?;
        let call = Call::new("ConstraintLayout").modifier(&modifier);
        self.writer.open(&call.header());
        for name in scope.declared() {
            self.writer.line(&format!("val {name} = createRef()"));
        }
        self.children(&node.children, Scope::Constraint(scope))?;
        self.writer.close();
        Ok(())
    }
}

// ── Free helpers ──────────────────────────────────────────────────────────

fn link(cs: &ConstraintScope, kind: ViewKind, view: &ViewAttributes, c: &Constraint) -> ComposeResult<String> {
    let fail = |reason: String| ComposeError::new(kind, view, c.attribute(), reason);
    let target = match &c.target {
        ConstraintTarget::Parent => "parent".to_string(),
        ConstraintTarget::Sibling(id) => {
            if view.id.as_deref() == Some(id.as_str()) {
                return Err(fail("cannot refer to the view itself".into()));
            }
            match cs.ids.iter().find(|(other, _)| other == id) {
                Some((_, Some(name))) => name.clone(),
                Some((_, None)) => return Err(fail(format!("refers to `{id}`, which has visibility gone"))),
                None => return Err(fail(format!("refers to unknown sibling id `{id}`"))),
            }
        }
    };
    Ok(format!("{}.linkTo({target}.{})", anchor(c.anchor), anchor(c.target_anchor)))
}

fn anchor(a: Anchor) -> &'static str {
    match a {
        Anchor::Top => "top",
        Anchor::Bottom => "bottom",
        Anchor::Start => "start",
        Anchor::End => "end",
        Anchor::Left => "absoluteLeft",
        Anchor::Right => "absoluteRight",
        Anchor::Baseline => "baseline",
    }
}

/// `padding(…)` in the most compact form, or `None` when every side is zero.
fn padding(edges: &Edges) -> Option<String> {
    let [start, top, end, bottom] = edges.sides().map(|s| s.filter(|d| !d.is_zero()));
    if edges.is_empty() {
        return None;
    }
    if start == top && top == end && end == bottom {
        return start.map(|d| format!("padding({})", kotlin::dp(d)));
    }

    let named = |pairs: &[(&str, Option<&Dimension>)]| {
        let parts: Vec<String> = pairs
            .iter()
            .filter_map(|(name, d)| d.map(|d| format!("{name} = {}", kotlin::dp(d))))
            .collect();
        format!("padding({})", parts.join(", "))
    };
    if start == end && top == bottom {
        return Some(named(&[("horizontal", start), ("vertical", top)]));
    }
    Some(named(&[("start", start), ("top", top), ("end", end), ("bottom", bottom)]))
}

fn size(width: &LayoutSize, height: &LayoutSize) -> Vec<String> {
    match (width, height) {
        (LayoutSize::Fill, LayoutSize::Fill) => vec!["fillMaxSize()".to_string()],
        (LayoutSize::Fixed(w), LayoutSize::Fixed(h)) if w == h => vec![format!("size({})", kotlin::dp(w))],
        _ => {
            let w = match width {
                LayoutSize::Wrap => None,
                LayoutSize::Fill => Some("fillMaxWidth()".to_string()),
                LayoutSize::Fraction(f) => Some(format!("fillMaxWidth({})", kotlin::float(*f))),
                LayoutSize::Fixed(d) => Some(format!("width({})", kotlin::dp(d))),
            };
            let h = match height {
                LayoutSize::Wrap => None,
                LayoutSize::Fill => Some("fillMaxHeight()".to_string()),
                LayoutSize::Fraction(f) => Some(format!("fillMaxHeight({})", kotlin::float(*f))),
                LayoutSize::Fixed(d) => Some(format!("height({})", kotlin::dp(d))),
            };
            w.into_iter().chain(h).collect()
        }
    }
}

/// `align(…)` argument for a child inside `scope`; `None` for the scope's
/// default placement or scopes without alignment.
fn child_alignment(scope: Option<&Scope>, g: Gravity) -> Option<&'static str> {
    match scope? {
        Scope::Row => match g.vertical? {
            VerticalGravity::Top => None,
            VerticalGravity::Center => Some("Alignment.CenterVertically"),
            VerticalGravity::Bottom => Some("Alignment.Bottom"),
        },
        Scope::Column => match g.horizontal? {
            HorizontalGravity::Start => None,
            HorizontalGravity::Center => Some("Alignment.CenterHorizontally"),
            HorizontalGravity::End => Some("Alignment.End"),
        },
        Scope::Box => box_alignment(g),
        Scope::Plain | Scope::Constraint(_) => None,
    }
}

fn box_alignment(g: Gravity) -> Option<&'static str> {
    use HorizontalGravity as H;
    use VerticalGravity as V;
    match (g.vertical.unwrap_or(V::Top), g.horizontal.unwrap_or(H::Start)) {
        (V::Top, H::Start) => None,
        (V::Top, H::Center) => Some("Alignment.TopCenter"),
        (V::Top, H::End) => Some("Alignment.TopEnd"),
        (V::Center, H::Start) => Some("Alignment.CenterStart"),
        (V::Center, H::Center) => Some("Alignment.Center"),
        (V::Center, H::End) => Some("Alignment.CenterEnd"),
        (V::Bottom, H::Start) => Some("Alignment.BottomStart"),
        (V::Bottom, H::Center) => Some("Alignment.BottomCenter"),
        (V::Bottom, H::End) => Some("Alignment.BottomEnd"),
    }
}

fn row_call(modifier: &Modifier, g: Gravity) -> Call {
    let arrangement = match g.horizontal {
        Some(HorizontalGravity::Center) => Some("Arrangement.Center"),
        Some(HorizontalGravity::End) => Some("Arrangement.End"),
        _ => None,
    };
    let alignment = match g.vertical {
        Some(VerticalGravity::Center) => Some("Alignment.CenterVertically"),
        Some(VerticalGravity::Bottom) => Some("Alignment.Bottom"),
        _ => None,
    };
    Call::new("Row")
        .modifier(modifier)
        .arg_opt("horizontalArrangement", arrangement.map(str::to_string))
        .arg_opt("verticalAlignment", alignment.map(str::to_string))
}

fn column_call(modifier: &Modifier, g: Gravity) -> Call {
    let arrangement = match g.vertical {
        Some(VerticalGravity::Center) => Some("Arrangement.Center"),
        Some(VerticalGravity::Bottom) => Some("Arrangement.Bottom"),
        _ => None,
    };
    let alignment = match g.horizontal {
        Some(HorizontalGravity::Center) => Some("Alignment.CenterHorizontally"),
        Some(HorizontalGravity::End) => Some("Alignment.End"),
        _ => None,
    };
    Call::new("Column")
        .modifier(modifier)
        .arg_opt("verticalArrangement", arrangement.map(str::to_string))
        .arg_opt("horizontalAlignment", alignment.map(str::to_string))
}

/// Appends the text appearance arguments in `Text`'s declaration order.
fn text_args(call: Call, props: &TextProps, kind: ViewKind, view: &ViewAttributes) -> ComposeResult<Call> {
    let mut call = call
        .arg_opt("color", props.color.as_ref().map(kotlin::color))
        .arg_opt("fontSize", props.size.as_ref().map(kotlin::sp));
    if props.style.italic {
        call = call.arg("fontStyle", "FontStyle.Italic");
    }
    if props.style.bold {
        call = call.arg("fontWeight", "FontWeight.Bold");
    }
    Ok(call
        .arg_opt("fontFamily", props.font_family.as_ref().map(kotlin::font_family))
        .arg_opt("textAlign", text_align(props.align))
        .arg_opt("maxLines", max_lines(props.max_lines, kind, view)?))
}

fn text_align(align: Option<HorizontalGravity>) -> Option<String> {
    match align? {
        HorizontalGravity::Start => None,
        HorizontalGravity::Center => Some("TextAlign.Center".to_string()),
        HorizontalGravity::End => Some("TextAlign.End".to_string()),
    }
}

fn max_lines(max: Option<u32>, kind: ViewKind, view: &ViewAttributes) -> ComposeResult<Option<String>> {
    match max {
        Some(0) => Err(ComposeError::new(kind, view, "maxLines", "must be at least 1")),
        other => Ok(other.map(|n| n.to_string())),
    }
}

fn keyboard_type(k: KeyboardKind) -> &'static str {
    match k {
        KeyboardKind::Number => "Number",
        KeyboardKind::Decimal => "Decimal",
        KeyboardKind::Phone => "Phone",
        KeyboardKind::Email => "Email",
        KeyboardKind::Uri => "Uri",
    }
}

fn content_scale(scale: ScaleType) -> Option<&'static str> {
    match scale {
        ScaleType::FitCenter => None,
        ScaleType::CenterCrop => Some("ContentScale.Crop"),
        ScaleType::FitXy => Some("ContentScale.FillBounds"),
        ScaleType::Center => Some("ContentScale.None"),
        ScaleType::CenterInside => Some("ContentScale.Inside"),
    }
}

/// `valueRange`, omitted for the default `0f..1f`.
fn value_range(min: f32, max: f32) -> Option<String> {
    if min == 0.0 && max == 1.0 { None } else { Some(kotlin::float_range(min, max)) }
}

/// Validates slider bounds and converts `stepSize` into Compose's count of
/// intermediate `steps` (`None` for a continuous slider).
fn slider_steps(kind: ViewKind, view: &ViewAttributes, min: f32, max: f32, step: f32) -> ComposeResult<Option<String>> {
    if min > max {
        return Err(ComposeError::new(
            kind,
            view,
            "min",
            format!("is greater than `max` ({} > {})", kotlin::number(min), kotlin::number(max)),
        ));
    }
    let span = max - min;
    if step <= 0.0 || span == 0.0 {
        return Ok(None);
    }
    let intervals = span / step;
    if (intervals - intervals.round()).abs() > 1e-3 {
        return Err(ComposeError::new(
            kind,
            view,
            "stepSize",
            format!("{} does not divide the range {} evenly", kotlin::number(step), kotlin::float_range(min, max)),
        ));
    }
    let steps = intervals.round() as i64 - 1;
    Ok((steps > 0).then(|| steps.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use recast_markup::parse_str;

    fn out(src: &str) -> String {
        compose(&parse_str(src).unwrap()).unwrap()
    }

    fn fail(src: &str) -> ComposeError {
        compose(&parse_str(src).unwrap()).unwrap_err()
    }

    #[test]
    fn padding_forms() {
        assert_eq!(padding(&Edges::uniform(Dimension::Dp(8.0))).as_deref(), Some("padding(8.dp)"));
        let sym = Edges {
            start: Some(Dimension::Dp(4.0)),
            end: Some(Dimension::Dp(4.0)),
            ..Edges::default()
        };
        assert_eq!(padding(&sym).as_deref(), Some("padding(horizontal = 4.dp)"));
        let one = Edges { top: Some(Dimension::Dp(2.0)), ..Edges::default() };
        assert_eq!(padding(&one).as_deref(), Some("padding(top = 2.dp)"));
        assert_eq!(padding(&Edges::uniform(Dimension::Dp(0.0))), None);
    }

    #[test]
    fn sizes() {
        assert_eq!(size(&LayoutSize::Fill, &LayoutSize::Fill), ["fillMaxSize()"]);
        let d = LayoutSize::Fixed(Dimension::Dp(24.0));
        assert_eq!(size(&d, &d), ["size(24.dp)"]);
        assert_eq!(size(&LayoutSize::Fraction(0.5), &LayoutSize::Wrap), ["fillMaxWidth(0.5f)"]);
        assert!(size(&LayoutSize::Wrap, &LayoutSize::Wrap).is_empty());
    }

    #[test]
    fn steps_from_step_size() {
        let view = ViewAttributes::default();
        let k = ViewKind::Slider;
        assert_eq!(slider_steps(k, &view, 0.0, 100.0, 10.0).unwrap().as_deref(), Some("9"));
        assert_eq!(slider_steps(k, &view, 0.0, 1.0, 0.0).unwrap(), None);
        assert_eq!(slider_steps(k, &view, 0.0, 1.0, 1.0).unwrap(), None);
        assert_eq!(slider_steps(k, &view, 0.0, 1.0, 0.3).unwrap_err().attribute, "stepSize");
    }

    #[test]
    fn weight_skips_zero_main_axis() {
        let src = r#"<LinearLayout><View android:layout_width="0dp" android:layout_height="4dp" android:layout_weight="1" /></LinearLayout>"#;
        assert_eq!(out(src), "Row {\n    Spacer(modifier = Modifier.weight(1f).height(4.dp))\n}\n");
    }

    #[test]
    fn weight_outside_row_or_column() {
        let e = fail(r#"<FrameLayout><View android:layout_weight="1" /></FrameLayout>"#);
        assert_eq!((e.kind, e.attribute.as_str()), (ViewKind::View, "layout_weight"));
    }

    #[test]
    fn invisible_and_gone() {
        let src = r#"<Column><View android:visibility="invisible" /><View android:visibility="gone" /></Column>"#;
        assert_eq!(out(src), "Column {\n    Spacer(modifier = Modifier.alpha(0f))\n}\n");
    }

    #[test]
    fn alpha_range() {
        assert_eq!(fail(r#"<View android:alpha="1.5" />"#).attribute, "alpha");
        assert_eq!(out(r#"<View android:alpha="0.5" />"#), "Spacer(modifier = Modifier.alpha(0.5f))\n");
    }

    #[test]
    fn negative_insets() {
        assert_eq!(fail(r#"<View android:padding="-2dp" />"#).attribute, "padding");
        assert_eq!(fail(r#"<View android:layout_marginTop="-2dp" />"#).attribute, "layout_margin");
    }

    #[test]
    fn zero_max_lines() {
        let e = fail(r#"<TextView android:id="@+id/t" android:maxLines="0" />"#);
        assert_eq!(e.to_string(), "cannot compose Text (id `t`): `maxLines` must be at least 1");
    }
}
