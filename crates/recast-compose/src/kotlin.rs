//! Kotlin literals and Compose expressions for markup values.

use std::fmt::Write as _;

use convert_case::{Case, Casing};
use recast_markup::values::{ColorValue, Dimension, FontFamily, ResourceRef, TextValue, ThemeColor};

use crate::modifier::Modifier;

// ── Call ──────────────────────────────────────────────────────────────────

/// A composable or function call with named arguments, in insertion order.
#[derive(Debug, Clone)]
pub struct Call {
    name: String,
    args: Vec<String>,
}

impl Call {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), args: Vec::new() }
    }

    pub fn arg(mut self, name: &str, value: impl AsRef<str>) -> Self {
        self.args.push(format!("{name} = {}", value.as_ref()));
        self
    }

    pub fn arg_opt(self, name: &str, value: Option<String>) -> Self {
        match value {
            Some(v) => self.arg(name, v),
            None => self,
        }
    }

    /// `modifier = …`, omitted for an empty chain.
    pub fn modifier(self, modifier: &Modifier) -> Self {
        self.arg_opt("modifier", modifier.render())
    }

    /// `enabled = false`; `true` is the default and is omitted.
    pub fn enabled(self, enabled: bool) -> Self {
        if enabled { self } else { self.arg("enabled", "false") }
    }

    /// `Name(a = 1, b = 2)`, or `Name()` without arguments.
    pub fn render(&self) -> String {
        format!("{}({})", self.name, self.args.join(", "))
    }

    /// Block header: like [`render`](Self::render) but a bare `Name` when
    /// there are no arguments, ready for a trailing lambda.
    pub fn header(&self) -> String {
        if self.args.is_empty() { self.name.clone() } else { self.render() }
    }
}

// ── Literals ──────────────────────────────────────────────────────────────

/// Shortest decimal form: `16`, `1.5`, `-0.25`.
pub fn number(v: f32) -> String {
    if v.fract() == 0.0 && v.abs() < 1e9 {
        format!("{}", v as i64)
    } else {
        format!("{v}")
    }
}

/// `0f`, `0.5f`.
pub fn float(v: f32) -> String {
    format!("{}f", number(v))
}

/// `a..b` over floats.
pub fn float_range(start: f32, end: f32) -> String {
    format!("{}..{}", float(start), float(end))
}

/// A double-quoted Kotlin string literal.
pub fn string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            // String templates.
            '$' => out.push_str("\\$"),
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04X}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

pub fn resource(r: &ResourceRef) -> String {
    let prefix = if r.framework { "android.R" } else { "R" };
    format!("{prefix}.{}.{}", r.kind, r.name)
}

// ── Values ────────────────────────────────────────────────────────────────

/// A `Dp` expression.  `sp` values are taken numerically.
pub fn dp(d: &Dimension) -> String {
    match d {
        Dimension::Dp(v) | Dimension::Sp(v) => format!("{}.dp", number(*v)),
        Dimension::Px(v) => format!("with(LocalDensity.current) {{ {}.toDp() }}", float(*v)),
        Dimension::Resource(r) => format!("dimensionResource(id = {})", resource(r)),
    }
}

/// A `TextUnit` expression.  `dp` values are taken numerically.
pub fn sp(d: &Dimension) -> String {
    match d {
        Dimension::Sp(v) | Dimension::Dp(v) => format!("{}.sp", number(*v)),
        Dimension::Px(v) => format!("with(LocalDensity.current) {{ {}.toSp() }}", float(*v)),
        Dimension::Resource(r) => format!("dimensionResource(id = {}).value.sp", resource(r)),
    }
}

pub fn color(c: &ColorValue) -> String {
    match c {
        ColorValue::Argb(0xFFFF_FFFF) => "Color.White".to_string(),
        ColorValue::Argb(0xFF00_0000) => "Color.Black".to_string(),
        ColorValue::Argb(0x0000_0000) => "Color.Transparent".to_string(),
        ColorValue::Argb(argb) => format!("Color(0x{argb:08X})"),
        ColorValue::Resource(r) => format!("colorResource(id = {})", resource(r)),
        ColorValue::Theme(t) => format!("MaterialTheme.colors.{}", theme_color(*t)),
    }
}

fn theme_color(t: ThemeColor) -> &'static str {
    match t {
        ThemeColor::Primary => "primary",
        ThemeColor::PrimaryVariant => "primaryVariant",
        ThemeColor::Secondary => "secondary",
        ThemeColor::SecondaryVariant => "secondaryVariant",
        ThemeColor::Background => "background",
        ThemeColor::Surface => "surface",
        ThemeColor::Error => "error",
        ThemeColor::OnPrimary => "onPrimary",
        ThemeColor::OnSecondary => "onSecondary",
        ThemeColor::OnBackground => "onBackground",
        ThemeColor::OnSurface => "onSurface",
        ThemeColor::OnError => "onError",
    }
}

pub fn text(t: &TextValue) -> String {
    match t {
        TextValue::Literal(s) => string(s),
        TextValue::Resource(r) => format!("stringResource(id = {})", resource(r)),
    }
}

pub fn font_family(f: &FontFamily) -> String {
    match f {
        FontFamily::SansSerif => "FontFamily.SansSerif".to_string(),
        FontFamily::Serif => "FontFamily.Serif".to_string(),
        FontFamily::Monospace => "FontFamily.Monospace".to_string(),
        FontFamily::Cursive => "FontFamily.Cursive".to_string(),
        FontFamily::Resource(r) => format!("FontFamily(Font({}))", resource(r)),
    }
}

// ── Identifiers ───────────────────────────────────────────────────────────

const KEYWORDS: &[&str] = &[
    "as", "break", "class", "continue", "do", "else", "false", "for", "fun", "if", "in",
    "interface", "is", "null", "object", "package", "return", "super", "this", "throw", "true",
    "try", "typealias", "typeof", "val", "var", "when", "while",
];

/// `title_bar` → `titleBar`; hard keywords are backtick-quoted.
pub fn camel_identifier(raw: &str) -> String {
    let ident = raw.to_case(Case::Camel);
    if KEYWORDS.contains(&ident.as_str()) { format!("`{ident}`") } else { ident }
}

/// A usable Kotlin identifier: `[A-Za-z_][A-Za-z0-9_]*` other than a lone
/// `_`, or a backtick-quoted keyword.
pub fn is_identifier(name: &str) -> bool {
    if name.len() > 2 && name.starts_with('`') && name.ends_with('`') {
        return true;
    }
    let mut chars = name.chars();
    let head = matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_');
    head && name != "_" && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// `activity_main` → `ActivityMain`.  Names that would not start with a
/// letter get a `Layout` prefix.
pub fn pascal_identifier(raw: &str) -> String {
    let ident: String = raw
        .to_case(Case::Pascal)
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect();
    match ident.chars().next() {
        Some(c) if c.is_ascii_alphabetic() => ident,
        _ => format!("Layout{ident}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, "0")]
    #[case(16.0, "16")]
    #[case(1.5, "1.5")]
    #[case(-0.25, "-0.25")]
    #[case(100.0, "100")]
    fn numbers(#[case] v: f32, #[case] expected: &str) {
        assert_eq!(number(v), expected);
    }

    #[test]
    fn floats_and_ranges() {
        assert_eq!(float(0.0), "0f");
        assert_eq!(float(0.5), "0.5f");
        assert_eq!(float_range(0.0, 100.0), "0f..100f");
    }

    #[test]
    fn string_escapes() {
        assert_eq!(string("plain"), "\"plain\"");
        assert_eq!(string("a\"b\\c\nd$e"), r#""a\"b\\c\nd\$e""#);
        assert_eq!(string("bell\u{7}\u{1b}"), r#""bell\u0007\u001B""#);
    }

    #[rstest]
    #[case(Dimension::Dp(16.0), "16.dp")]
    #[case(Dimension::Sp(14.0), "14.dp")]
    #[case(Dimension::Px(2.0), "with(LocalDensity.current) { 2f.toDp() }")]
    #[case(Dimension::Resource(ResourceRef::new("dimen", "gap")), "dimensionResource(id = R.dimen.gap)")]
    fn dp_expressions(#[case] d: Dimension, #[case] expected: &str) {
        assert_eq!(dp(&d), expected);
    }

    #[test]
    fn sp_expressions() {
        assert_eq!(sp(&Dimension::Sp(14.0)), "14.sp");
        assert_eq!(sp(&Dimension::Resource(ResourceRef::new("dimen", "body"))), "dimensionResource(id = R.dimen.body).value.sp");
    }

    #[rstest]
    #[case(ColorValue::Argb(0xFFFF_FFFF), "Color.White")]
    #[case(ColorValue::Argb(0xFF21_2121), "Color(0xFF212121)")]
    #[case(ColorValue::Argb(0x80FF_0000), "Color(0x80FF0000)")]
    #[case(ColorValue::Resource(ResourceRef::new("color", "brand")), "colorResource(id = R.color.brand)")]
    #[case(ColorValue::Theme(ThemeColor::OnSurface), "MaterialTheme.colors.onSurface")]
    fn colors(#[case] c: ColorValue, #[case] expected: &str) {
        assert_eq!(color(&c), expected);
    }

    #[test]
    fn framework_resources() {
        let r = ResourceRef { framework: true, kind: "string".into(), name: "ok".into() };
        assert_eq!(text(&TextValue::Resource(r)), "stringResource(id = android.R.string.ok)");
    }

    #[test]
    fn identifiers() {
        assert_eq!(camel_identifier("title_bar"), "titleBar");
        assert_eq!(camel_identifier("object"), "`object`");
        assert_eq!(pascal_identifier("activity_main"), "ActivityMain");
        assert_eq!(pascal_identifier("toolbar_main"), "ToolbarMain");
        assert!(pascal_identifier("2fa_prompt").starts_with("Layout2"));
    }

    #[rstest]
    #[case("titleBar", true)]
    #[case("_hidden", true)]
    #[case("`object`", true)]
    #[case("", false)]
    #[case("_", false)]
    #[case("2fa", false)]
    #[case("a-b", false)]
    fn kotlin_identifiers(#[case] name: &str, #[case] expected: bool) {
        assert_eq!(is_identifier(name), expected);
    }

    #[test]
    fn calls() {
        assert_eq!(Call::new("Row").header(), "Row");
        assert_eq!(Call::new("Spacer").render(), "Spacer()");
        let call = Call::new("Text").arg("text", "\"a\"").arg_opt("color", None).enabled(false);
        assert_eq!(call.render(), "Text(text = \"a\", enabled = false)");
    }
}
