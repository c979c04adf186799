use std::fmt;

use recast_markup::ViewKind;
use recast_markup::attributes::ViewAttributes;

/// A node whose attributes parse individually but cannot be expressed in
/// Compose together.
#[derive(Debug, Clone, PartialEq)]
pub struct ComposeError {
    pub kind: ViewKind,
    /// The node's `android:id`, when it has one.
    pub id: Option<String>,
    /// The offending attribute (or `children` for structural problems).
    pub attribute: String,
    pub reason: String,
}

impl ComposeError {
    pub(crate) fn new(
        kind: ViewKind,
        view: &ViewAttributes,
        attribute: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self { kind, id: view.id.clone(), attribute: attribute.into(), reason: reason.into() }
    }
}

impl fmt::Display for ComposeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot compose {}", self.kind)?;
        if let Some(id) = &self.id {
            write!(f, " (id `{id}`)")?;
        }
        write!(f, ": `{}` {}", self.attribute, self.reason)
    }
}

impl std::error::Error for ComposeError {}
