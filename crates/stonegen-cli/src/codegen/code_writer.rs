//! Line-oriented writer with indentation tracking for emitted Rust source.
//!
//! Emitters describe structure (lines, blocks, doc comments) and the writer
//! takes care of indentation and wrapping. Output goes into an owned `String`,
//! so writing cannot fail.
//!
//! ```
//! use stonegen_cli::codegen::code_writer::CodeWriter;
//!
//! let mut w = CodeWriter::new();
//! w.block("impl Default for Empty", |w| {
//!     w.block("fn default() -> Self", |w| {
//!         w.line("Empty {}");
//!     });
//! });
//!
//! assert_eq!(
//!     w.into_string(),
//!     "impl Default for Empty {\n    fn default() -> Self {\n        Empty {}\n    }\n}\n"
//! );
//! ```

const INDENT: &str = "    ";

/// Minimum text width kept for wrapped doc comments regardless of nesting.
const MIN_WRAP_WIDTH: usize = 20;

#[derive(Debug, Default)]
pub struct CodeWriter {
    buf: String,
    indent_level: usize,
}

impl CodeWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write one line at the current indentation. Blank text produces an empty line.
    pub fn line(&mut self, text: impl AsRef<str>) {
        let text = text.as_ref();
        if !text.trim().is_empty() {
            for _ in 0..self.indent_level {
                self.buf.push_str(INDENT);
            }
            self.buf.push_str(text);
        }
        self.buf.push('\n');
    }

    pub fn blank_line(&mut self) {
        self.buf.push('\n');
    }

    /// Run `body` one indentation level deeper.
    pub fn indented<F>(&mut self, body: F)
    where
        F: FnOnce(&mut Self),
    {
        self.indent_level += 1;
        body(self);
        self.indent_level -= 1;
    }

    /// Write `header {`, the indented body, then `}`.
    pub fn block<F>(&mut self, header: &str, body: F)
    where
        F: FnOnce(&mut Self),
    {
        self.block_with_close(header, "}", body);
    }

    /// Like [`block`](Self::block) but closes with `close`, e.g. `})` or `};`.
    pub fn block_with_close<F>(&mut self, header: &str, close: &str, body: F)
    where
        F: FnOnce(&mut Self),
    {
        if header.is_empty() {
            self.line("{");
        } else {
            self.line(format!("{header} {{"));
        }
        self.indented(body);
        self.line(close);
    }

    /// Write `text` as comment lines starting with `prefix` (`///`, `//!`, `//`),
    /// word-wrapped so that no line exceeds `width` columns including indentation.
    pub fn doc_comment(&mut self, prefix: &str, text: &str, width: usize) {
        let used = self.indent_level * INDENT.len() + prefix.len() + 1;
        let available = width.saturating_sub(used).max(MIN_WRAP_WIDTH);

        for paragraph in text.lines() {
            let words: Vec<&str> = paragraph.split_whitespace().collect();
            if words.is_empty() {
                self.line(prefix);
                continue;
            }

            let mut current = String::new();
            for word in words {
                if !current.is_empty() && current.len() + 1 + word.len() > available {
                    self.line(format!("{prefix} {current}"));
                    current.clear();
                }
                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(word);
            }
            self.line(format!("{prefix} {current}"));
        }
    }

    pub fn indent_level(&self) -> usize {
        self.indent_level
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn into_string(self) -> String {
        self.buf
    }
}
