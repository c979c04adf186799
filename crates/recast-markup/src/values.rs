//! Typed attribute values and the string grammars they are parsed from.
//!
//! Every `parse_*` function takes the raw attribute text and returns either
//! the typed value or a [`ValueError`] describing what was expected.  The
//! parser attaches tag and attribute context to that description.

use std::fmt;

// ── ValueError ────────────────────────────────────────────────────────────

/// A raw attribute value that does not fit the attribute's grammar.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueError {
    /// Human description of the accepted forms, e.g. "a dimension such as `16dp`".
    pub expected: String,
}

impl ValueError {
    fn expected(what: impl Into<String>) -> Self {
        Self { expected: what.into() }
    }
}

impl fmt::Display for ValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected {}", self.expected)
    }
}

impl std::error::Error for ValueError {}

// ── Resource references ───────────────────────────────────────────────────

/// `@type/name` (app resources) or `@android:type/name` (framework resources).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRef {
    pub framework: bool,
    /// Resource type: `string`, `color`, `dimen`, `drawable`, `layout`, `id`, …
    pub kind: String,
    pub name: String,
}

impl ResourceRef {
    pub fn new(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self { framework: false, kind: kind.into(), name: name.into() }
    }
}

/// Parses `@[+][android:]type/name`.  Returns `None` when `s` is not a
/// well-formed reference.
pub fn parse_reference(s: &str) -> Option<ResourceRef> {
    let rest = s.trim().strip_prefix('@')?;
    let rest = rest.strip_prefix('+').unwrap_or(rest);
    let (framework, rest) = match rest.strip_prefix("android:") {
        Some(r) => (true, r),
        None => (false, rest),
    };
    let (kind, name) = rest.split_once('/')?;
    if kind.is_empty() || !kind.chars().all(|c| c.is_ascii_lowercase()) || !is_resource_name(name) {
        return None;
    }
    Some(ResourceRef { framework, kind: kind.to_string(), name: name.to_string() })
}

fn is_resource_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn reference_of(s: &str, kinds: &[&str]) -> Option<ResourceRef> {
    parse_reference(s).filter(|r| kinds.contains(&r.kind.as_str()))
}

// ── Numbers ───────────────────────────────────────────────────────────────

/// A finite decimal number.
pub fn parse_number(s: &str) -> Result<f32, ValueError> {
    let s = s.trim();
    match s.parse::<f32>() {
        Ok(v) if v.is_finite() && !s.is_empty() && !s.starts_with('+') => Ok(v),
        _ => Err(ValueError::expected("a decimal number")),
    }
}

pub fn parse_non_negative(s: &str) -> Result<f32, ValueError> {
    match parse_number(s) {
        Ok(v) if v >= 0.0 => Ok(v),
        _ => Err(ValueError::expected("a non-negative decimal number")),
    }
}

pub fn parse_integer(s: &str) -> Result<u32, ValueError> {
    s.trim().parse::<u32>().map_err(|_| ValueError::expected("a non-negative integer"))
}

pub fn parse_bool(s: &str) -> Result<bool, ValueError> {
    match s.trim() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ValueError::expected("`true` or `false`")),
    }
}

// ── Dimension ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum Dimension {
    /// Density-independent pixels (`dp` / `dip`).
    Dp(f32),
    /// Scale-independent pixels.
    Sp(f32),
    /// Raw device pixels.
    Px(f32),
    /// `@dimen/name`.
    Resource(ResourceRef),
}

impl Dimension {
    pub fn is_zero(&self) -> bool {
        matches!(self, Self::Dp(v) | Self::Sp(v) | Self::Px(v) if *v == 0.0)
    }

    pub fn is_negative(&self) -> bool {
        matches!(self, Self::Dp(v) | Self::Sp(v) | Self::Px(v) if *v < 0.0)
    }
}

pub fn parse_dimension(s: &str) -> Result<Dimension, ValueError> {
    let err = || ValueError::expected("a dimension such as `16dp`, `14sp`, `2px` or `@dimen/name`");
    let s = s.trim();
    if s.starts_with('@') {
        return reference_of(s, &["dimen"]).map(Dimension::Resource).ok_or_else(err);
    }
    let split = s.find(|c: char| c.is_ascii_alphabetic()).ok_or_else(err)?;
    let (num, unit) = s.split_at(split);
    let value = parse_number(num).map_err(|_| err())?;
    match unit {
        "dp" | "dip" => Ok(Dimension::Dp(value)),
        "sp" => Ok(Dimension::Sp(value)),
        "px" => Ok(Dimension::Px(value)),
        _ => Err(err()),
    }
}

// ── LayoutSize ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Default)]
pub enum LayoutSize {
    #[default]
    Wrap,
    Fill,
    /// Fraction of the parent, `0.0 ..= 1.0`.
    Fraction(f32),
    Fixed(Dimension),
}

impl LayoutSize {
    /// `0dp`: in a weighted LinearLayout or a ConstraintLayout this means
    /// "let the parent decide".
    pub fn is_zero(&self) -> bool {
        matches!(self, Self::Fixed(d) if d.is_zero())
    }
}

pub fn parse_layout_size(s: &str) -> Result<LayoutSize, ValueError> {
    let err = || {
        ValueError::expected("`match_parent`, `wrap_content`, a percentage such as `50%` or a dimension")
    };
    match s.trim() {
        "match_parent" | "fill_parent" => Ok(LayoutSize::Fill),
        "wrap_content" => Ok(LayoutSize::Wrap),
        t => {
            if let Some(pct) = t.strip_suffix('%') {
                match parse_number(pct) {
                    Ok(v) if (0.0..=100.0).contains(&v) => Ok(LayoutSize::Fraction(v / 100.0)),
                    _ => Err(err()),
                }
            } else {
                parse_dimension(t).map(LayoutSize::Fixed).map_err(|_| err())
            }
        }
    }
}

// ── Color ─────────────────────────────────────────────────────────────────

/// Theme color slots addressable through `?attr/…`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeColor {
    Primary,
    PrimaryVariant,
    Secondary,
    SecondaryVariant,
    Background,
    Surface,
    Error,
    OnPrimary,
    OnSecondary,
    OnBackground,
    OnSurface,
    OnError,
}

const THEME_COLORS: &[(&str, ThemeColor)] = &[
    ("colorPrimary",          ThemeColor::Primary),
    ("colorPrimaryVariant",   ThemeColor::PrimaryVariant),
    ("colorPrimaryDark",      ThemeColor::PrimaryVariant),
    ("colorSecondary",        ThemeColor::Secondary),
    ("colorAccent",           ThemeColor::Secondary),
    ("colorSecondaryVariant", ThemeColor::SecondaryVariant),
    ("colorBackground",       ThemeColor::Background),
    ("colorSurface",          ThemeColor::Surface),
    ("colorError",            ThemeColor::Error),
    ("colorOnPrimary",        ThemeColor::OnPrimary),
    ("colorOnSecondary",      ThemeColor::OnSecondary),
    ("colorOnBackground",     ThemeColor::OnBackground),
    ("colorOnSurface",        ThemeColor::OnSurface),
    ("colorOnError",          ThemeColor::OnError),
];

#[derive(Debug, Clone, PartialEq)]
pub enum ColorValue {
    /// `0xAARRGGBB`.
    Argb(u32),
    /// `@color/name` or `@android:color/name`.
    Resource(ResourceRef),
    /// `?attr/colorPrimary` and friends.
    Theme(ThemeColor),
}

pub fn parse_color(s: &str) -> Result<ColorValue, ValueError> {
    let err = || {
        ValueError::expected("a color such as `#ff0000`, `#80ff0000`, `@color/name` or `?attr/colorPrimary`")
    };
    let s = s.trim();
    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex_color(hex).ok_or_else(err);
    }
    if let Some(attr) = s.strip_prefix('?') {
        return parse_theme_color(attr).map(ColorValue::Theme).ok_or_else(err);
    }
    reference_of(s, &["color"]).map(ColorValue::Resource).ok_or_else(err)
}

fn parse_hex_color(hex: &str) -> Option<ColorValue> {
    if hex.is_empty() || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    // Short forms double every digit: `#f80` == `#ff8800`.
    let widened: String = match hex.len() {
        3 | 4 => hex.chars().flat_map(|c| [c, c]).collect(),
        6 | 8 => hex.to_string(),
        _ => return None,
    };
    let value = u32::from_str_radix(&widened, 16).ok()?;
    Some(ColorValue::Argb(if widened.len() == 6 { 0xFF00_0000 | value } else { value }))
}

fn parse_theme_color(attr: &str) -> Option<ThemeColor> {
    let attr = attr.strip_prefix("android:").unwrap_or(attr);
    let name = attr.strip_prefix("attr/").unwrap_or(attr);
    THEME_COLORS.iter().find(|(n, _)| *n == name).map(|(_, c)| *c)
}

// ── Drawable ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum Drawable {
    Color(ColorValue),
    /// `@drawable/name` or `@mipmap/name`.
    Resource(ResourceRef),
}

pub fn parse_drawable(s: &str) -> Result<Drawable, ValueError> {
    if let Ok(color) = parse_color(s) {
        return Ok(Drawable::Color(color));
    }
    parse_image_source(s)
        .map(Drawable::Resource)
        .map_err(|_| ValueError::expected("a color or a `@drawable/name` reference"))
}

pub fn parse_image_source(s: &str) -> Result<ResourceRef, ValueError> {
    reference_of(s, &["drawable", "mipmap"])
        .ok_or_else(|| ValueError::expected("a `@drawable/name` or `@mipmap/name` reference"))
}

pub fn parse_layout_ref(s: &str) -> Result<ResourceRef, ValueError> {
    reference_of(s, &["layout"]).ok_or_else(|| ValueError::expected("a `@layout/name` reference"))
}

// ── Text ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum TextValue {
    Literal(String),
    /// `@string/name` or `@android:string/name`.
    Resource(ResourceRef),
}

impl Default for TextValue {
    fn default() -> Self {
        Self::Literal(String::new())
    }
}

impl TextValue {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Literal(s) if s.is_empty())
    }
}

pub fn parse_text(s: &str) -> Result<TextValue, ValueError> {
    if s.starts_with('@') || s.starts_with('?') {
        return reference_of(s, &["string"])
            .map(TextValue::Resource)
            .ok_or_else(|| ValueError::expected("literal text or a `@string/name` reference"));
    }
    Ok(TextValue::Literal(unescape_text(s)))
}

/// Decodes the backslash escapes Android resources accept in text.
fn unescape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

// ── Id ────────────────────────────────────────────────────────────────────

/// `@+id/name` / `@id/name` → `name`.
pub fn parse_id(s: &str) -> Result<String, ValueError> {
    reference_of(s, &["id"])
        .map(|r| r.name)
        .ok_or_else(|| ValueError::expected("an id such as `@+id/name`"))
}

// ── Gravity ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalGravity {
    Start,
    Center,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalGravity {
    Top,
    Center,
    Bottom,
}

/// Either axis may be left unspecified; the consumer applies its default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Gravity {
    pub horizontal: Option<HorizontalGravity>,
    pub vertical: Option<VerticalGravity>,
}

pub fn parse_gravity(s: &str) -> Result<Gravity, ValueError> {
    let mut g = Gravity::default();
    for flag in s.split('|').map(str::trim) {
        match flag {
            "top" => g.vertical = Some(VerticalGravity::Top),
            "bottom" => g.vertical = Some(VerticalGravity::Bottom),
            "center_vertical" => g.vertical = Some(VerticalGravity::Center),
            "start" | "left" => g.horizontal = Some(HorizontalGravity::Start),
            "end" | "right" => g.horizontal = Some(HorizontalGravity::End),
            "center_horizontal" => g.horizontal = Some(HorizontalGravity::Center),
            "center" => {
                g.horizontal = Some(HorizontalGravity::Center);
                g.vertical = Some(VerticalGravity::Center);
            }
            _ => {
                return Err(ValueError::expected(
                    "`|`-separated gravity flags (top, bottom, start, end, left, right, center, center_horizontal, center_vertical)",
                ));
            }
        }
    }
    Ok(g)
}

// ── Range ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    pub start: f32,
    pub end: f32,
}

impl ValueRange {
    pub fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, v: f32) -> bool {
        (self.start..=self.end).contains(&v)
    }
}

/// `a..b` or `[a, b]`, with `a <= b`.
pub fn parse_range(s: &str) -> Result<ValueRange, ValueError> {
    let err = || ValueError::expected("a range such as `20..80` or `[20, 80]`");
    let s = s.trim();
    let (a, b) = match s.strip_prefix('[').and_then(|r| r.strip_suffix(']')) {
        Some(inner) => inner.split_once(',').ok_or_else(err)?,
        None => s.split_once("..").ok_or_else(err)?,
    };
    let start = parse_number(a).map_err(|_| err())?;
    let end = parse_number(b).map_err(|_| err())?;
    if start > end {
        return Err(ValueError::expected("a range whose start does not exceed its end"));
    }
    Ok(ValueRange { start, end })
}

// ── Enumerations ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Visible,
    Invisible,
    Gone,
}

pub fn parse_visibility(s: &str) -> Result<Visibility, ValueError> {
    match s.trim() {
        "visible" => Ok(Visibility::Visible),
        "invisible" => Ok(Visibility::Invisible),
        "gone" => Ok(Visibility::Gone),
        _ => Err(ValueError::expected("`visible`, `invisible` or `gone`")),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

pub fn parse_orientation(s: &str) -> Result<Orientation, ValueError> {
    match s.trim() {
        "horizontal" => Ok(Orientation::Horizontal),
        "vertical" => Ok(Orientation::Vertical),
        _ => Err(ValueError::expected("`horizontal` or `vertical`")),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStyle {
    pub bold: bool,
    pub italic: bool,
}

pub fn parse_text_style(s: &str) -> Result<TextStyle, ValueError> {
    let mut style = TextStyle::default();
    for flag in s.split('|').map(str::trim) {
        match flag {
            "normal" => {}
            "bold" => style.bold = true,
            "italic" => style.italic = true,
            _ => return Err(ValueError::expected("`normal`, `bold`, `italic` or `bold|italic`")),
        }
    }
    Ok(style)
}

#[derive(Debug, Clone, PartialEq)]
pub enum FontFamily {
    SansSerif,
    Serif,
    Monospace,
    Cursive,
    /// `@font/name`.
    Resource(ResourceRef),
}

pub fn parse_font_family(s: &str) -> Result<FontFamily, ValueError> {
    let s = s.trim();
    match s {
        "serif" => Ok(FontFamily::Serif),
        "monospace" => Ok(FontFamily::Monospace),
        "cursive" => Ok(FontFamily::Cursive),
        // sans-serif-medium, sans-serif-condensed, …
        _ if s.starts_with("sans-serif") => Ok(FontFamily::SansSerif),
        _ => reference_of(s, &["font"])
            .map(FontFamily::Resource)
            .ok_or_else(|| ValueError::expected("`sans-serif`, `serif`, `monospace`, `cursive` or `@font/name`")),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScaleType {
    #[default]
    FitCenter,
    CenterCrop,
    FitXy,
    Center,
    CenterInside,
}

pub fn parse_scale_type(s: &str) -> Result<ScaleType, ValueError> {
    match s.trim() {
        "fitCenter" => Ok(ScaleType::FitCenter),
        "centerCrop" => Ok(ScaleType::CenterCrop),
        "fitXY" => Ok(ScaleType::FitXy),
        "center" => Ok(ScaleType::Center),
        "centerInside" => Ok(ScaleType::CenterInside),
        _ => Err(ValueError::expected("`fitCenter`, `centerCrop`, `fitXY`, `center` or `centerInside`")),
    }
}

// ── Input type ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardKind {
    Number,
    Decimal,
    Phone,
    Email,
    Uri,
}

/// The parts of `inputType` that survive translation.  Flags with no
/// counterpart (`textCapSentences`, `textMultiLine`, …) are accepted and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputType {
    pub password: bool,
    pub keyboard: Option<KeyboardKind>,
}

pub fn parse_input_type(s: &str) -> Result<InputType, ValueError> {
    let mut input = InputType::default();
    for flag in s.split('|').map(str::trim) {
        if flag.is_empty() || !flag.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ValueError::expected("`|`-separated input type flags such as `textPassword`"));
        }
        match flag {
            "textPassword" | "textWebPassword" | "numberPassword" => input.password = true,
            _ => {}
        }
        let keyboard = match flag {
            "number" | "numberSigned" | "numberPassword" => Some(KeyboardKind::Number),
            "numberDecimal" => Some(KeyboardKind::Decimal),
            "phone" => Some(KeyboardKind::Phone),
            "textEmailAddress" | "textWebEmailAddress" => Some(KeyboardKind::Email),
            "textUri" => Some(KeyboardKind::Uri),
            _ => None,
        };
        // `number|numberDecimal` must not be downgraded by flag order.
        if keyboard.is_some() && input.keyboard != Some(KeyboardKind::Decimal) {
            input.keyboard = keyboard;
        }
    }
    Ok(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("16dp", Dimension::Dp(16.0))]
    #[case("16dip", Dimension::Dp(16.0))]
    #[case("1.5sp", Dimension::Sp(1.5))]
    #[case("-4px", Dimension::Px(-4.0))]
    #[case(" 0dp ", Dimension::Dp(0.0))]
    #[case("@dimen/gap", Dimension::Resource(ResourceRef::new("dimen", "gap")))]
    fn dimensions(#[case] raw: &str, #[case] expected: Dimension) {
        assert_eq!(parse_dimension(raw).unwrap(), expected);
    }

    #[rstest]
    #[case("16")]
    #[case("dp")]
    #[case("16em")]
    #[case("@color/gap")]
    #[case("NaNdp")]
    #[case("+3dp")]
    fn bad_dimensions(#[case] raw: &str) {
        assert!(parse_dimension(raw).is_err());
    }

    #[rstest]
    #[case("match_parent", LayoutSize::Fill)]
    #[case("fill_parent", LayoutSize::Fill)]
    #[case("wrap_content", LayoutSize::Wrap)]
    #[case("50%", LayoutSize::Fraction(0.5))]
    #[case("0dp", LayoutSize::Fixed(Dimension::Dp(0.0)))]
    fn layout_sizes(#[case] raw: &str, #[case] expected: LayoutSize) {
        assert_eq!(parse_layout_size(raw).unwrap(), expected);
    }

    #[test]
    fn percentage_out_of_range() {
        assert!(parse_layout_size("120%").is_err());
    }

    #[rstest]
    #[case("#f80", 0xFFFF_8800)]
    #[case("#8f80", 0x88FF_8800)]
    #[case("#112233", 0xFF11_2233)]
    #[case("#80112233", 0x8011_2233)]
    #[case("#FFFFFF", 0xFFFF_FFFF)]
    fn hex_colors(#[case] raw: &str, #[case] argb: u32) {
        assert_eq!(parse_color(raw).unwrap(), ColorValue::Argb(argb));
    }

    #[rstest]
    #[case("#12345")]
    #[case("#zzzzzz")]
    #[case("#")]
    #[case("red")]
    #[case("@string/red")]
    #[case("?attr/colorMystery")]
    fn bad_colors(#[case] raw: &str) {
        assert!(parse_color(raw).is_err());
    }

    #[test]
    fn color_references() {
        assert_eq!(
            parse_color("@color/brand").unwrap(),
            ColorValue::Resource(ResourceRef::new("color", "brand"))
        );
        let ColorValue::Resource(r) = parse_color("@android:color/white").unwrap() else { panic!() };
        assert!(r.framework);
        assert_eq!(parse_color("?attr/colorAccent").unwrap(), ColorValue::Theme(ThemeColor::Secondary));
        assert_eq!(
            parse_color("?android:attr/colorBackground").unwrap(),
            ColorValue::Theme(ThemeColor::Background)
        );
    }

    #[test]
    fn drawables() {
        assert_eq!(parse_drawable("#000").unwrap(), Drawable::Color(ColorValue::Argb(0xFF00_0000)));
        assert_eq!(
            parse_drawable("@drawable/bg").unwrap(),
            Drawable::Resource(ResourceRef::new("drawable", "bg"))
        );
        assert!(parse_drawable("@layout/bg").is_err());
    }

    #[test]
    fn text_values() {
        assert_eq!(parse_text("Hello").unwrap(), TextValue::Literal("Hello".into()));
        assert_eq!(parse_text(r"a\nb \'c\' \@d").unwrap(), TextValue::Literal("a\nb 'c' @d".into()));
        assert_eq!(
            parse_text("@string/title").unwrap(),
            TextValue::Resource(ResourceRef::new("string", "title"))
        );
        assert!(parse_text("@color/title").is_err());
        assert!(TextValue::default().is_empty());
    }

    #[test]
    fn ids() {
        assert_eq!(parse_id("@+id/title").unwrap(), "title");
        assert_eq!(parse_id("@id/title_bar").unwrap(), "title_bar");
        assert!(parse_id("title").is_err());
        assert!(parse_id("@+id/1abc").is_err());
        assert!(parse_id("@+string/title").is_err());
    }

    #[rstest]
    #[case("center", Some(HorizontalGravity::Center), Some(VerticalGravity::Center))]
    #[case("bottom|end", Some(HorizontalGravity::End), Some(VerticalGravity::Bottom))]
    #[case("center_vertical", None, Some(VerticalGravity::Center))]
    #[case("left", Some(HorizontalGravity::Start), None)]
    fn gravities(
        #[case] raw: &str,
        #[case] horizontal: Option<HorizontalGravity>,
        #[case] vertical: Option<VerticalGravity>,
    ) {
        assert_eq!(parse_gravity(raw).unwrap(), Gravity { horizontal, vertical });
    }

    #[test]
    fn bad_gravity() {
        assert!(parse_gravity("middle").is_err());
        assert!(parse_gravity("top|").is_err());
    }

    #[rstest]
    #[case("20..80", 20.0, 80.0)]
    #[case("[20, 80]", 20.0, 80.0)]
    #[case("0.5..0.5", 0.5, 0.5)]
    #[case("-1..1", -1.0, 1.0)]
    fn ranges(#[case] raw: &str, #[case] start: f32, #[case] end: f32) {
        assert_eq!(parse_range(raw).unwrap(), ValueRange::new(start, end));
    }

    #[test]
    fn reversed_range_rejected() {
        let e = parse_range("80..20").unwrap_err();
        assert!(e.expected.contains("does not exceed"));
    }

    #[test]
    fn input_types() {
        let pw = parse_input_type("textPassword").unwrap();
        assert!(pw.password);
        assert_eq!(pw.keyboard, None);
        let n = parse_input_type("numberDecimal|number").unwrap();
        assert_eq!(n.keyboard, Some(KeyboardKind::Decimal));
        assert_eq!(parse_input_type("textCapSentences").unwrap(), InputType::default());
        assert!(parse_input_type("text password").is_err());
    }

    #[test]
    fn misc_enums() {
        assert_eq!(parse_visibility("gone").unwrap(), Visibility::Gone);
        assert_eq!(parse_text_style("bold|italic").unwrap(), TextStyle { bold: true, italic: true });
        assert_eq!(parse_font_family("sans-serif-medium").unwrap(), FontFamily::SansSerif);
        assert_eq!(parse_scale_type("fitXY").unwrap(), ScaleType::FitXy);
        assert!(parse_bool("yes").is_err());
        assert_eq!(parse_integer("3").unwrap(), 3);
        assert!(parse_integer("-3").is_err());
    }
}
