//! Streaming write context for the textual output.
//!
//! The context owns all indentation and separator bookkeeping. Callers open
//! and close constructs explicitly; a stack of frames records the kind of
//! each open construct and how many items it has emitted, so a separator is
//! placed before every sibling line except the first and never before a
//! closing bracket. The emitted text is never inspected to recover state.

use std::borrow::Cow;
use std::fmt;
use std::io::{self, Write};

use thiserror::Error;

use crate::document::Document;

/// Indentation unit, repeated once per nesting level.
const INDENT: &str = "  ";

/// Errors produced while streaming a document to the sink. All are terminal
/// for the write call; no partial-document recovery is attempted.
#[derive(Error, Debug)]
pub enum WriteError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("\"{label}\" index {index} is out of range for {collection} ({len} entries)")]
    BadReference {
        label: String,
        index: usize,
        collection: Collection,
        len: usize,
    },
}

/// Document collections an index property can resolve against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Accessors,
    Materials,
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Accessors => f.write_str("accessors"),
            Self::Materials => f.write_str("materials"),
        }
    }
}

/// Collection lengths, snapshotted once before serialization begins.
/// Every emitted reference is validated against this table.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RefTables {
    accessors: usize,
    materials: usize,
}

impl RefTables {
    pub(crate) fn new(doc: &Document) -> Self {
        Self {
            accessors: doc.accessors.len(),
            materials: doc.materials.len(),
        }
    }

    fn len(&self, collection: Collection) -> usize {
        match collection {
            Collection::Accessors => self.accessors,
            Collection::Materials => self.materials,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Construct {
    Array,
    Object,
}

impl Construct {
    fn open(self) -> &'static [u8] {
        match self {
            Self::Array => b"[",
            Self::Object => b"{",
        }
    }

    fn close(self) -> &'static [u8] {
        match self {
            Self::Array => b"]",
            Self::Object => b"}",
        }
    }
}

/// One open construct: its kind and how many items it has emitted so far.
struct Frame {
    kind: Construct,
    items: usize,
}

pub(crate) struct WriteContext<W: Write> {
    sink: W,
    tables: RefTables,
    stack: Vec<Frame>,
}

impl<W: Write> WriteContext<W> {
    pub(crate) fn new(sink: W, tables: RefTables) -> Self {
        Self {
            sink,
            tables,
            stack: Vec::new(),
        }
    }

    pub(crate) fn begin_object(&mut self, label: Option<&str>) -> Result<(), WriteError> {
        self.begin(Construct::Object, label)
    }

    pub(crate) fn begin_array(&mut self, label: Option<&str>) -> Result<(), WriteError> {
        self.begin(Construct::Array, label)
    }

    fn begin(&mut self, kind: Construct, label: Option<&str>) -> Result<(), WriteError> {
        if self.stack.is_empty() {
            // Document root: bare bracket, no line prefix.
            self.sink.write_all(kind.open())?;
        } else {
            self.line_prefix()?;
            if let Some(label) = label {
                write!(self.sink, "\"{}\": ", escape(label))?;
            }
            self.sink.write_all(kind.open())?;
            self.count_item();
        }
        self.stack.push(Frame { kind, items: 0 });
        Ok(())
    }

    /// Close the innermost construct. A closing line is never preceded by a
    /// separator; the construct was already counted when it was opened.
    pub(crate) fn end(&mut self) -> Result<(), WriteError> {
        let frame = self.stack.pop().expect("end() without a matching begin()");
        self.sink.write_all(b"\n")?;
        self.indent()?;
        self.sink.write_all(frame.kind.close())?;
        Ok(())
    }

    /// Emit `"label": "value"`. Absent and empty values are skipped.
    pub(crate) fn str_prop(&mut self, label: &str, value: Option<&str>) -> Result<(), WriteError> {
        let Some(value) = value.filter(|v| !v.is_empty()) else {
            return Ok(());
        };
        self.line_prefix()?;
        write!(self.sink, "\"{}\": \"{}\"", escape(label), escape(value))?;
        self.count_item();
        Ok(())
    }

    /// Emit `"label": value`, suppressing the property when `value` equals
    /// the collection's default.
    pub(crate) fn int_prop(
        &mut self,
        label: &str,
        value: u32,
        default: u32,
    ) -> Result<(), WriteError> {
        if value == default {
            return Ok(());
        }
        self.line_prefix()?;
        write!(self.sink, "\"{}\": {}", escape(label), value)?;
        self.count_item();
        Ok(())
    }

    /// Emit a reference as its 0-based position within `collection`. Absent
    /// references are skipped; out-of-range references fail the write.
    pub(crate) fn index_prop(
        &mut self,
        label: &str,
        reference: Option<usize>,
        collection: Collection,
    ) -> Result<(), WriteError> {
        let Some(index) = reference else {
            return Ok(());
        };
        let len = self.tables.len(collection);
        if index >= len {
            return Err(WriteError::BadReference {
                label: label.to_string(),
                index,
                collection,
                len,
            });
        }
        self.line_prefix()?;
        write!(self.sink, "\"{}\": {}", escape(label), index)?;
        self.count_item();
        Ok(())
    }

    /// Terminate the document: every construct must have been closed.
    pub(crate) fn finish(mut self) -> Result<(), WriteError> {
        assert!(
            self.stack.is_empty(),
            "finish() with {} unclosed construct(s)",
            self.stack.len()
        );
        self.sink.write_all(b"\n")?;
        Ok(())
    }

    /// Separator (for the second and later items of a construct), newline,
    /// and indentation for the next line.
    fn line_prefix(&mut self) -> io::Result<()> {
        let first = self.stack.last().is_none_or(|frame| frame.items == 0);
        if first {
            self.sink.write_all(b"\n")?;
        } else {
            self.sink.write_all(b",\n")?;
        }
        self.indent()
    }

    fn indent(&mut self) -> io::Result<()> {
        for _ in 0..self.stack.len() {
            self.sink.write_all(INDENT.as_bytes())?;
        }
        Ok(())
    }

    fn count_item(&mut self) {
        if let Some(frame) = self.stack.last_mut() {
            frame.items += 1;
        }
    }
}

/// JSON string escaping for labels and values.
fn escape(s: &str) -> Cow<'_, str> {
    if !s.chars().any(|c| matches!(c, '"' | '\\') || (c as u32) < 0x20) {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len() + 2);
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}
