use std::fmt::Display;
use std::io::{self, Write};

use bson::Document;

/// Labeled, sequential console output.
pub struct Report<W: Write> {
    out: W,
}

impl<W: Write> Report<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn heading(&mut self, label: &str) -> io::Result<()> {
        writeln!(self.out, "{label}")
    }

    /// A heading separated from the previous output by a blank line.
    pub fn section(&mut self, label: &str) -> io::Result<()> {
        writeln!(self.out)?;
        self.heading(label)
    }

    pub fn line(&mut self, line: impl Display) -> io::Result<()> {
        writeln!(self.out, "{line}")
    }

    pub fn documents(&mut self, docs: &[Document]) -> io::Result<()> {
        self.rows(docs)
    }

    pub fn rows<T: Display>(&mut self, rows: &[T]) -> io::Result<()> {
        if rows.is_empty() {
            return writeln!(self.out, "  []");
        }
        for row in rows {
            writeln!(self.out, "  {row}")?;
        }
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
