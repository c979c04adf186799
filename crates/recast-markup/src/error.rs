use std::fmt;

/// What went wrong while turning layout markup into an AST.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorKind {
    /// The document is not well-formed XML.
    Malformed(String),
    /// The document contains no element at all.
    Empty,
    /// A second element follows the document element at top level.
    MultipleRoots,
    /// A tag with no entry in the view catalog.
    UnknownTag(String),
    /// `<merge>` used anywhere but as the document element.
    MisplacedMerge,
    /// Strict mode only: an attribute outside the kind's vocabulary.
    UnknownAttribute { tag: String, attribute: String },
    /// The same bare attribute name appears twice on one element.
    DuplicateAttribute { tag: String, attribute: String },
    MissingAttribute { tag: String, attribute: String },
    InvalidValue { tag: String, attribute: String, value: String, expected: String },
    /// A leaf view with nested elements.
    UnexpectedChild { tag: String, child: String },
    /// Non-whitespace character data between elements.
    UnexpectedText(String),
    /// The input stream could not be read.
    Io(String),
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed(msg) => write!(f, "malformed XML: {msg}"),
            Self::Empty => write!(f, "document contains no layout element"),
            Self::MultipleRoots => write!(f, "more than one root element; wrap siblings in <merge>"),
            Self::UnknownTag(tag) => write!(f, "unrecognized tag <{tag}>"),
            Self::MisplacedMerge => write!(f, "<merge> is only allowed as the document element"),
            Self::UnknownAttribute { tag, attribute } => {
                write!(f, "unsupported attribute `{attribute}` on <{tag}>")
            }
            Self::DuplicateAttribute { tag, attribute } => {
                write!(f, "attribute `{attribute}` given more than once on <{tag}>")
            }
            Self::MissingAttribute { tag, attribute } => {
                write!(f, "<{tag}> requires attribute `{attribute}`")
            }
            Self::InvalidValue { tag, attribute, value, expected } => {
                write!(f, "invalid value {value:?} for `{attribute}` on <{tag}>: expected {expected}")
            }
            Self::UnexpectedChild { tag, child } => {
                write!(f, "<{tag}> cannot contain child views (found <{child}>)")
            }
            Self::UnexpectedText(text) => write!(f, "unexpected text content {text:?}"),
            Self::Io(msg) => write!(f, "could not read input: {msg}"),
        }
    }
}

/// A parse error from layout markup.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// 1-based source line; 0 when the error has no source position.
    pub line: usize,
    /// 1-based source column (in characters); 0 when unknown.
    pub col: usize,
}

impl ParseError {
    pub(crate) fn new(kind: ParseErrorKind, line: usize, col: usize) -> Self {
        Self { kind, line, col }
    }

    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.line == 0 {
            write!(f, "parse error: {}", self.kind)
        } else {
            write!(f, "parse error at {}:{}: {}", self.line, self.col, self.kind)
        }
    }
}

impl std::error::Error for ParseError {}
