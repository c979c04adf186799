//! Line-oriented output buffer with block indentation.

/// One indentation level.
pub const INDENT: &str = "    ";

/// Accumulates Kotlin source.  Every line ends with `\n`; `open` / `close`
/// bracket a block and move the indentation by one level.
#[derive(Debug, Default)]
pub struct CodeWriter {
    out: String,
    depth: usize,
}

impl CodeWriter {
    pub fn new(depth: usize) -> Self {
        Self { out: String::new(), depth }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn line(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.out.push_str(INDENT);
        }
        self.out.push_str(text);
        self.out.push('\n');
    }

    /// `header {` then one level deeper.
    pub fn open(&mut self, header: &str) {
        self.line(&format!("{header} {{"));
        self.depth += 1;
    }

    pub fn close(&mut self) {
        debug_assert!(self.depth > 0, "close without open");
        self.depth = self.depth.saturating_sub(1);
        self.line("}");
    }

    pub fn finish(self) -> String {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_blocks() {
        let mut w = CodeWriter::new(0);
        w.open("Column");
        w.line("Text(text = \"a\")");
        w.open("Row");
        w.close();
        w.close();
        assert_eq!(w.finish(), "Column {\n    Text(text = \"a\")\n    Row {\n    }\n}\n");
    }

    #[test]
    fn start_depth() {
        let mut w = CodeWriter::new(2);
        w.line("Spacer(modifier = Modifier)");
        assert_eq!(w.depth(), 2);
        assert_eq!(w.finish(), "        Spacer(modifier = Modifier)\n");
    }
}
