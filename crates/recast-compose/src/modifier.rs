//! `Modifier` chain builder.

/// An ordered list of modifier calls, rendered as `Modifier.a().b()`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Modifier {
    calls: Vec<String>,
}

impl Modifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one call, written without the leading dot: `padding(8.dp)`.
    pub fn then(&mut self, call: impl Into<String>) -> &mut Self {
        self.calls.push(call.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    /// `None` when no call was added, so callers can omit the parameter.
    pub fn render(&self) -> Option<String> {
        if self.calls.is_empty() {
            return None;
        }
        let mut out = String::from("Modifier");
        for call in &self.calls {
            out.push('.');
            out.push_str(call);
        }
        Some(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_renders_nothing() {
        assert_eq!(Modifier::new().render(), None);
    }

    #[test]
    fn chain_keeps_order() {
        let mut m = Modifier::new();
        m.then("padding(8.dp)").then("fillMaxWidth()");
        assert_eq!(m.render().as_deref(), Some("Modifier.padding(8.dp).fillMaxWidth()"));
    }
}
