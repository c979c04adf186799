use std::io::Read;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::ast::{Layout, Node};
use crate::builder::{self, AttributeSet};
use crate::catalog::{self, ViewKind};
use crate::error::{ParseError, ParseErrorKind};

// ── Options ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct ParserOptions {
    /// Reject attributes outside a kind's vocabulary instead of dropping them
    /// with a warning.
    pub strict: bool,
}

// ── Public entry points ───────────────────────────────────────────────────

/// Turns layout markup into a [`Layout`].
#[derive(Debug, Clone, Default)]
pub struct Parser {
    options: ParserOptions,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ParserOptions) -> Self {
        Self { options }
    }

    pub fn strict() -> Self {
        Self::with_options(ParserOptions { strict: true })
    }

    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Reads the whole stream, then parses it.
    pub fn parse<R: Read>(&self, mut input: R) -> Result<Layout, ParseError> {
        let mut src = String::new();
        input
            .read_to_string(&mut src)
            .map_err(|e| ParseError::new(ParseErrorKind::Io(e.to_string()), 0, 0))?;
        self.parse_str(&src)
    }

    pub fn parse_str(&self, src: &str) -> Result<Layout, ParseError> {
        let src = src.strip_prefix('\u{feff}').unwrap_or(src);
        Session::new(src, &self.options).run()
    }
}

/// Parses with default (lenient) options.
pub fn parse_str(src: &str) -> Result<Layout, ParseError> {
    Parser::new().parse_str(src)
}

// ── Session ───────────────────────────────────────────────────────────────

enum Frame {
    Merge,
    View { tag: String, node: Node },
}

/// One pass over one document: an element stack fed by quick-xml events.
struct Session<'s> {
    src: &'s str,
    options: &'s ParserOptions,
    reader: Reader<&'s [u8]>,
    stack: Vec<Frame>,
    roots: Vec<Node>,
    seen_root: bool,
}

impl<'s> Session<'s> {
    fn new(src: &'s str, options: &'s ParserOptions) -> Self {
        let mut reader = Reader::from_str(src);
        reader.config_mut().trim_text(true);
        Self { src, options, reader, stack: Vec::new(), roots: Vec::new(), seen_root: false }
    }

    fn run(mut self) -> Result<Layout, ParseError> {
        loop {
            let offset = self.reader.buffer_position() as usize;
            let event = match self.reader.read_event() {
                Ok(ev) => ev,
                Err(e) => {
                    let at = self.reader.error_position() as usize;
                    return Err(self.error_at(at, ParseErrorKind::Malformed(e.to_string())));
                }
            };
            match event {
                Event::Start(e) => self.open(&e, offset, false)?,
                Event::Empty(e) => self.open(&e, offset, true)?,
                Event::End(_) => self.close(offset)?,
                Event::Text(t) => {
                    if t.iter().any(|b| !b.is_ascii_whitespace()) {
                        let text = String::from_utf8_lossy(&t).trim().to_string();
                        return Err(self.error_at(offset, ParseErrorKind::UnexpectedText(text)));
                    }
                }
                Event::CData(_) => {
                    return Err(self.error_at(offset, ParseErrorKind::UnexpectedText("<![CDATA[...]]>".into())));
                }
                Event::Eof => break,
                // Declarations, comments, processing instructions, doctype.
                _ => {}
            }
        }

        if let Some(frame) = self.stack.last() {
            let open = match frame {
                Frame::Merge => "merge",
                Frame::View { tag, .. } => tag.as_str(),
            };
            let msg = format!("unexpected end of document: <{open}> is not closed");
            return Err(self.error_at(self.src.len(), ParseErrorKind::Malformed(msg)));
        }
        if !self.seen_root {
            return Err(self.error_at(0, ParseErrorKind::Empty));
        }
        Ok(Layout { roots: self.roots })
    }

    fn open(&mut self, e: &BytesStart<'_>, offset: usize, empty: bool) -> Result<(), ParseError> {
        let tag = std::str::from_utf8(e.name().as_ref())
            .map_err(|_| self.error_at(offset, ParseErrorKind::Malformed("tag name is not UTF-8".into())))?
            .to_string();

        if tag == "merge" {
            if self.seen_root {
                return Err(self.error_at(offset, ParseErrorKind::MisplacedMerge));
            }
            self.seen_root = true;
            if !empty {
                self.stack.push(Frame::Merge);
            }
            return Ok(());
        }

        match self.stack.last() {
            None if self.seen_root => return Err(self.error_at(offset, ParseErrorKind::MultipleRoots)),
            None => self.seen_root = true,
            Some(Frame::View { tag: parent, node }) if !node.kind().is_container() => {
                let kind = ParseErrorKind::UnexpectedChild { tag: parent.clone(), child: tag };
                return Err(self.error_at(offset, kind));
            }
            Some(_) => {}
        }

        let kind = catalog::kind_for_tag(&tag)
            .ok_or_else(|| self.error_at(offset, ParseErrorKind::UnknownTag(tag.clone())))?;
        let attrs = self.attributes(e, &tag, kind).map_err(|k| self.error_at(offset, k))?;
        let node = builder::build_node(kind, &attrs).map_err(|k| self.error_at(offset, k))?;
        log::debug!("parsed <{tag}> as {kind}");

        if empty {
            self.attach(node);
        } else {
            self.stack.push(Frame::View { tag, node });
        }
        Ok(())
    }

    fn close(&mut self, offset: usize) -> Result<(), ParseError> {
        match self.stack.pop() {
            Some(Frame::View { node, .. }) => {
                self.attach(node);
                Ok(())
            }
            Some(Frame::Merge) => Ok(()),
            None => Err(self.error_at(offset, ParseErrorKind::Malformed("unexpected closing tag".into()))),
        }
    }

    /// Appends to the innermost open view, or to the roots.  `open` has
    /// already rejected children of leaves.
    fn attach(&mut self, node: Node) {
        let parent = match self.stack.last_mut() {
            Some(Frame::View { node: parent, .. }) => parent.children_mut(),
            _ => None,
        };
        match parent {
            Some(children) => children.push(node),
            None => self.roots.push(node),
        }
    }

    /// Collects attributes under their bare names and applies the
    /// unknown-attribute policy.
    fn attributes(&self, e: &BytesStart<'_>, tag: &str, kind: ViewKind) -> Result<AttributeSet, ParseErrorKind> {
        let mut set = AttributeSet::new(tag);
        for attr in e.attributes() {
            let attr = attr.map_err(|err| ParseErrorKind::Malformed(err.to_string()))?;
            let key = std::str::from_utf8(attr.key.as_ref())
                .map_err(|_| ParseErrorKind::Malformed("attribute name is not UTF-8".into()))?;

            if key == "xmlns" || key.starts_with("xmlns:") {
                continue;
            }
            let name = match key.split_once(':') {
                Some(("tools", _)) => continue,
                Some((_, local)) => local,
                None => key,
            };

            if set.contains(name) {
                return Err(ParseErrorKind::DuplicateAttribute {
                    tag: tag.to_string(),
                    attribute: name.to_string(),
                });
            }
            if catalog::attr_for_kind(kind, name).is_none() {
                if self.options.strict {
                    return Err(ParseErrorKind::UnknownAttribute {
                        tag: tag.to_string(),
                        attribute: key.to_string(),
                    });
                }
                log::warn!("ignoring unsupported attribute `{key}` on <{tag}>");
                continue;
            }

            let value = attr
                .unescape_value()
                .map_err(|err| ParseErrorKind::Malformed(err.to_string()))?;
            set.push(name.to_string(), value.into_owned());
        }
        Ok(set)
    }

    fn error_at(&self, offset: usize, kind: ParseErrorKind) -> ParseError {
        let (line, col) = self.locate(offset);
        ParseError::new(kind, line, col)
    }

    /// 1-based line/column of the first non-whitespace character at or after
    /// `offset`.
    fn locate(&self, offset: usize) -> (usize, usize) {
        let mut offset = offset.min(self.src.len());
        while !self.src.is_char_boundary(offset) {
            offset -= 1;
        }
        let start = self.src[offset..]
            .find(|c: char| !c.is_whitespace())
            .map_or(self.src.len(), |i| offset + i);
        let before = &self.src[..start];
        let line = before.matches('\n').count() + 1;
        let col = before.rsplit('\n').next().map_or(0, |l| l.chars().count()) + 1;
        (line, col)
    }
}
