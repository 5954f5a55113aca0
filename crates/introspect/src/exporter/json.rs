//! JsonExporter — renders a flattened result as nested JSON.
//!
//! The tree is rebuilt in a single pass: each call to `print_group` renders
//! one sibling group and leaves the shared cursor on the first node that is
//! shallower than the group (or at end), so the caller can resume its own
//! sibling loop from there.

use std::io::{self, Write};

use tracing::debug;

use super::{validate, ExportOptions};
use crate::cursor::ResultCursor;
use crate::error::ExportResult;
use crate::types::IntrospectionResult;

/// Whitespace used by one sibling group.
struct Layout {
    indent: String,
    last_indent: String,
    tab: &'static str,
    space: &'static str,
    endl: &'static str,
    list_sep: &'static str,
}

impl Layout {
    fn new(pretty: bool, depth: usize) -> Self {
        if pretty {
            Layout {
                indent: make_indent(depth),
                last_indent: make_indent(depth.saturating_sub(1)),
                tab: "  ",
                space: " ",
                endl: "\n",
                list_sep: ", ",
            }
        } else {
            Layout {
                indent: String::new(),
                last_indent: String::new(),
                tab: "",
                space: "",
                endl: "",
                list_sep: ",",
            }
        }
    }
}

/// Four columns per level below the top.
fn make_indent(depth: usize) -> String {
    " ".repeat((depth.max(1) - 1) * 4)
}

/// Streams JSON for an [`IntrospectionResult`] into any writer.
pub struct JsonExporter<W: Write> {
    out: W,
    options: ExportOptions,
}

impl<W: Write> JsonExporter<W> {
    pub fn new(out: W, options: ExportOptions) -> Self {
        JsonExporter { out, options }
    }

    /// Validate `result`, then write it as one top-level array.
    ///
    /// Nothing is written when validation fails. A write failure aborts the
    /// export; bytes already handed to the sink stay there.
    pub fn export(&mut self, result: &IntrospectionResult) -> ExportResult<()> {
        let deepest = validate(result, self.options.max_depth)?;
        debug!(
            "Exporting {} nodes (max depth {}, pretty={})",
            result.len(),
            deepest,
            self.options.pretty
        );

        if result.is_empty() {
            let endl = if self.options.pretty { "\n" } else { "" };
            write!(self.out, "[]{}", endl)?;
        } else {
            let mut cursor = result.cursor();
            self.print_group(&mut cursor)?;
        }

        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Render the sibling group starting at the cursor.
    fn print_group(&mut self, cursor: &mut ResultCursor<'_>) -> ExportResult<()> {
        let depth = match cursor.current_depth() {
            Some(depth) => depth,
            None => return Ok(()),
        };
        let layout = Layout::new(self.options.pretty, depth);

        write!(self.out, "[{}{}", layout.endl, layout.indent)?;

        let mut first = true;
        while let Some(node) = cursor.current() {
            if node.depth() < depth {
                // Belongs to an enclosing group.
                break;
            }

            if !first {
                write!(self.out, ",{}{}", layout.endl, layout.indent)?;
            }
            first = false;

            write!(self.out, "{{{}{}", layout.endl, layout.indent)?;

            self.write_key(&layout, "name")?;
            self.write_string(&node.name)?;
            self.end_field(&layout)?;

            self.write_key(&layout, "typePath")?;
            self.write_string_list(&layout, &node.type_path)?;
            self.end_field(&layout)?;

            self.write_key(&layout, "typeNames")?;
            self.write_string_list(&layout, &node.type_names)?;
            self.end_field(&layout)?;

            self.write_key(&layout, "staticSize")?;
            write!(self.out, "{}", node.static_size)?;
            self.end_field(&layout)?;

            self.write_key(&layout, "exclusiveSize")?;
            write!(self.out, "{}", node.exclusive_size)?;
            self.end_field(&layout)?;

            if let Some(pointer) = node.pointer {
                self.write_key(&layout, "pointer")?;
                write!(self.out, "{}", pointer)?;
                self.end_field(&layout)?;
            }
            if let Some(stats) = node.container_stats {
                self.write_key(&layout, "length")?;
                write!(self.out, "{}", stats.length)?;
                self.end_field(&layout)?;
                self.write_key(&layout, "capacity")?;
                write!(self.out, "{}", stats.capacity)?;
                self.end_field(&layout)?;
            }
            if let Some(stats) = node.is_set_stats {
                self.write_key(&layout, "is_set")?;
                write!(self.out, "{}", stats.is_set)?;
                self.end_field(&layout)?;
            }

            self.write_key(&layout, "members")?;
            cursor.advance();
            match cursor.current_depth() {
                Some(next) if next > depth => self.print_group(cursor)?,
                _ => write!(self.out, "[]{}", layout.endl)?,
            }

            write!(self.out, "{}}}", layout.indent)?;
        }

        if depth == 1 {
            write!(self.out, "{}]{}", layout.endl, layout.endl)?;
        } else {
            write!(
                self.out,
                "{}{}{}]{}",
                layout.endl, layout.last_indent, layout.tab, layout.endl
            )?;
        }
        Ok(())
    }

    fn write_key(&mut self, layout: &Layout, key: &str) -> io::Result<()> {
        write!(self.out, "{}\"{}\":{}", layout.tab, key, layout.space)
    }

    fn end_field(&mut self, layout: &Layout) -> io::Result<()> {
        write!(self.out, ",{}{}", layout.endl, layout.indent)
    }

    fn write_string(&mut self, value: &str) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, value).map_err(io::Error::from)
    }

    fn write_string_list(&mut self, layout: &Layout, values: &[String]) -> io::Result<()> {
        self.out.write_all(b"[")?;
        for (i, value) in values.iter().enumerate() {
            if i > 0 {
                self.out.write_all(layout.list_sep.as_bytes())?;
            }
            self.write_string(value)?;
        }
        self.out.write_all(b"]")
    }
}
