//! Parser, typed AST, and view catalog for **Android layout XML**.
//!
//! Knows nothing about code generation: back ends walk the tree through the
//! [`Visitor`] trait.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`ast`] | `Layout`, `Node` and the per-kind node structs |
//! | [`attributes`] | `ViewAttributes`, `Edges`, `Constraint` |
//! | [`catalog`] | `ViewKind`, tag and attribute tables |
//! | [`error`] | `ParseError`, `ParseErrorKind` |
//! | [`parser`] | `Parser`, `ParserOptions`, `parse_str` |
//! | [`values`] | typed attribute values and their grammars |
//! | [`visitor`] | `Visitor` |
//!
//! # Quick start
//!
//! ```rust
//! use recast_markup::{parse_str, ViewKind};
//!
//! let src = r#"
//!     <LinearLayout xmlns:android="http://schemas.android.com/apk/res/android"
//!         android:orientation="vertical">
//!         <TextView android:text="Hello" />
//!     </LinearLayout>
//! "#;
//!
//! let layout = parse_str(src).unwrap();
//! let root = layout.root().unwrap();
//! assert_eq!(root.kind(), ViewKind::LinearLayout);
//! assert_eq!(root.children().len(), 1);
//! ```

pub mod ast;
pub mod attributes;
mod builder;
pub mod catalog;
pub mod error;
pub mod parser;
pub mod values;
pub mod visitor;

pub use ast::{Layout, Node};
pub use catalog::ViewKind;
pub use error::{ParseError, ParseErrorKind};
pub use parser::{parse_str, Parser, ParserOptions};
pub use visitor::Visitor;

#[cfg(test)]
mod parse_tests {
    use super::*;

    fn ok(src: &str) { parse_str(src).unwrap(); }
    fn err(src: &str) { parse_str(src).unwrap_err(); }

    #[test] fn empty_leaf() { ok("<TextView />"); }
    #[test] fn empty_container() { ok("<LinearLayout></LinearLayout>"); }
    #[test] fn nested_containers() {
        ok("<LinearLayout><FrameLayout><CardView><View /></CardView></FrameLayout></LinearLayout>");
    }
    #[test] fn xml_declaration() { ok("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<Space />"); }
    #[test] fn comments() { ok("<!-- top --><LinearLayout><!-- inside --><View /></LinearLayout>"); }
    #[test] fn qualified_tags() {
        ok("<androidx.constraintlayout.widget.ConstraintLayout><com.google.android.material.slider.RangeSlider /></androidx.constraintlayout.widget.ConstraintLayout>");
    }
    #[test] fn entity_in_value() { ok(r#"<TextView android:text="Fish &amp; Chips" />"#); }
    #[test] fn bom_prefix() { ok("\u{feff}<View />"); }

    #[test] fn err_unknown_tag() { err("<Spinner />"); }
    #[test] fn err_lowercase_tag() { err("<textview />"); }
    #[test] fn err_unclosed() { err("<LinearLayout><View />"); }
    #[test] fn err_mismatched() { err("<LinearLayout></FrameLayout>"); }
    #[test] fn err_text_content() { err("<LinearLayout>text</LinearLayout>"); }
    #[test] fn err_bad_color() { err(r##"<View android:background="#12" />"##); }
    #[test] fn err_bad_id() { err(r#"<View android:id="title" />"#); }
    #[test] fn err_reversed_values() { err(r#"<RangeSlider app:values="[80, 20]" />"#); }
    #[test] fn err_negative_weight() { err(r#"<View android:layout_weight="-1" />"#); }
    #[test] fn err_include_without_layout() { err("<include />"); }
    #[test] fn err_two_roots() { err("<View /><View />"); }
    #[test] fn err_nothing() { err("   "); }
}
