//! Jetpack Compose code generation for layouts parsed by `recast-markup`.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`composer`] | `Composer`, `ComposerOptions`, `compose` |
//! | [`error`] | `ComposeError` |
//! | [`kotlin`] | literals, `Call`, identifier casing |
//! | [`modifier`] | `Modifier` chain builder |
//! | [`writer`] | `CodeWriter`, the indentation-tracking buffer |
//!
//! # Quick start
//!
//! ```rust
//! let layout = recast_markup::parse_str(r#"<Row><TextView android:text="Hi" /></Row>"#).unwrap();
//! let code = recast_compose::compose(&layout).unwrap();
//! assert_eq!(code, "Row {\n    Text(text = \"Hi\")\n}\n");
//! ```

pub mod composer;
pub mod error;
pub mod kotlin;
pub mod modifier;
pub mod writer;

pub use composer::{compose, Composer, ComposerOptions};
pub use error::ComposeError;
