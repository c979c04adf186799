//! File-level driver for the `recast` binary: reads layout files, runs the
//! parser and the composer, optionally wraps the result in a complete Kotlin
//! file, and writes `<stem>.kt`.

pub mod logging;

use std::fmt::{self, Write as _};
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use recast_compose::{kotlin, ComposeError, Composer};
use recast_markup::catalog::{COMMON_ATTRS, KINDS};
use recast_markup::{ParseError, Parser, ParserOptions};

// ── Errors ────────────────────────────────────────────────────────────────

/// Why a single document failed to translate.
#[derive(Debug)]
pub enum TranslateError {
    Parse(ParseError),
    Compose(ComposeError),
}

impl fmt::Display for TranslateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(e) => e.fmt(f),
            Self::Compose(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for TranslateError {}

impl From<ParseError> for TranslateError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<ComposeError> for TranslateError {
    fn from(e: ComposeError) -> Self {
        Self::Compose(e)
    }
}

// ── Options ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct TranslateOptions {
    /// Directory for generated files; next to each input when `None`.
    pub output_dir: Option<PathBuf>,
    /// Wrap the body in imports, a `@Composable` function and a preview.
    pub complete: bool,
    /// Reject attributes outside a tag's vocabulary instead of warning.
    pub strict: bool,
    /// Print generated code instead of writing files.
    pub to_stdout: bool,
}

// ── Translator ────────────────────────────────────────────────────────────

pub struct Translator {
    parser: Parser,
    composer: Composer,
    complete: bool,
}

impl Translator {
    pub fn new(options: &TranslateOptions) -> Self {
        let start_indentation = if options.complete { 1 } else { 0 };
        Self {
            parser: Parser::with_options(ParserOptions { strict: options.strict }),
            composer: Composer::with_start_indentation(start_indentation),
            complete: options.complete,
        }
    }

    /// Translates one document.  `name` is the composable name used when
    /// wrapping.
    pub fn translate_str(&self, src: &str, name: &str) -> Result<String, TranslateError> {
        let layout = self.parser.parse_str(src)?;
        let body = self.composer.compose(&layout)?;
        Ok(if self.complete { wrap_complete(name, &body) } else { body })
    }

    /// Reads and translates `input`, returning the target path and code.
    /// Nothing is written.
    pub fn translate_file(&self, input: &Path, output_dir: Option<&Path>) -> Result<(PathBuf, String)> {
        let src = fs::read_to_string(input).with_context(|| format!("failed to read {}", input.display()))?;
        let name = composable_name(input);
        let code = self.translate_str(&src, &name)?;
        Ok((determine_target(output_dir, input), code))
    }
}

// ── Paths and names ───────────────────────────────────────────────────────

fn stem(input: &Path) -> String {
    input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "layout".to_string())
}

/// `<dir>/<stem>.kt`, where `<dir>` is `output_dir` or the input's directory.
pub fn determine_target(output_dir: Option<&Path>, input: &Path) -> PathBuf {
    let dir = match output_dir {
        Some(dir) => dir.to_path_buf(),
        None => input.parent().map(Path::to_path_buf).unwrap_or_default(),
    };
    dir.join(format!("{}.kt", stem(input)))
}

/// `activity_main.xml` → `ActivityMain`.
pub fn composable_name(input: &Path) -> String {
    kotlin::pascal_identifier(&stem(input))
}

// ── Complete-file wrapping ────────────────────────────────────────────────

const IMPORTS: &[&str] = &[
    "androidx.compose.foundation.*",
    "androidx.compose.foundation.layout.*",
    "androidx.compose.foundation.rememberScrollState",
    "androidx.compose.foundation.selection.selectableGroup",
    "androidx.compose.foundation.shape.RoundedCornerShape",
    "androidx.compose.foundation.text.KeyboardOptions",
    "androidx.compose.material.*",
    "androidx.compose.material.ExperimentalMaterialApi",
    "androidx.compose.runtime.Composable",
    "androidx.compose.ui.Alignment",
    "androidx.compose.ui.Modifier",
    "androidx.compose.ui.draw.alpha",
    "androidx.compose.ui.draw.paint",
    "androidx.compose.ui.graphics.Color",
    "androidx.compose.ui.layout.ContentScale",
    "androidx.compose.ui.platform.LocalDensity",
    "androidx.compose.ui.res.*",
    "androidx.compose.ui.semantics.contentDescription",
    "androidx.compose.ui.semantics.semantics",
    "androidx.compose.ui.text.TextStyle",
    "androidx.compose.ui.text.font.*",
    "androidx.compose.ui.text.input.KeyboardType",
    "androidx.compose.ui.text.input.PasswordVisualTransformation",
    "androidx.compose.ui.text.style.TextAlign",
    "androidx.compose.ui.tooling.preview.Preview",
    "androidx.compose.ui.unit.dp",
    "androidx.compose.ui.unit.sp",
    "androidx.constraintlayout.compose.ConstraintLayout",
    "androidx.constraintlayout.compose.Dimension",
];

/// Imports, `@Composable fun name()` around `body`, and a preview.  The
/// function opts in to `ExperimentalMaterialApi` for `RangeSlider`.  `body`
/// is expected at indentation level 1.
pub fn wrap_complete(name: &str, body: &str) -> String {
    let mut out = String::new();
    for import in IMPORTS {
        let _ = writeln!(out, "import {import}");
    }
    let _ = write!(
        out,
        "\n@Composable\n@OptIn(ExperimentalMaterialApi::class)\nfun {name}() {{\n{body}}}\n\n@Preview(showBackground = true)\n@Composable\nfun {name}Preview() {{\n    {name}()\n}}\n"
    );
    out
}

// ── Batch run ─────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct Summary {
    pub translated: Vec<PathBuf>,
    pub failed: Vec<PathBuf>,
}

/// Translates every input in order.  A failing file is reported on stderr
/// and skipped; its output file is never created.
pub fn run(inputs: &[PathBuf], options: &TranslateOptions) -> Summary {
    let translator = Translator::new(options);
    let mut summary = Summary::default();

    for input in inputs {
        let result = translator
            .translate_file(input, options.output_dir.as_deref())
            .and_then(|(target, code)| emit(&target, &code, options.to_stdout).map(|()| target));
        match result {
            Ok(target) => {
                log::info!("{} -> {}", input.display(), target.display());
                summary.translated.push(input.clone());
            }
            Err(err) => {
                eprintln!("Could not translate file: {}", input.display());
                eprintln!(" - {err:#}");
                summary.failed.push(input.clone());
            }
        }
    }
    summary
}

fn emit(target: &Path, code: &str, to_stdout: bool) -> Result<()> {
    if to_stdout {
        print!("{code}");
        return Ok(());
    }
    if let Some(dir) = target.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;
    }
    fs::write(target, code).with_context(|| format!("failed to write {}", target.display()))
}

// ── Catalog listing ───────────────────────────────────────────────────────

/// Human-readable dump of the supported tags and attributes.
pub fn catalog_listing() -> String {
    let mut out = String::new();
    for info in KINDS {
        let _ = writeln!(out, "{}  <{}>", info.name, info.tags.join("> <"));
        let _ = writeln!(out, "    {}", info.doc);
        for attr in info.attrs {
            let _ = writeln!(out, "    {:<22} {:<18} {}", attr.name, attr.kind.to_string(), attr.doc);
        }
        if info.common {
            let _ = writeln!(out, "    (+ {} common attributes and layout_constraint*)", COMMON_ATTRS.len());
        }
        out.push('\n');
    }
    let _ = writeln!(out, "Common attributes:");
    for attr in COMMON_ATTRS {
        let _ = writeln!(out, "    {:<24} {:<18} {}", attr.name, attr.kind.to_string(), attr.doc);
    }
    out
}
