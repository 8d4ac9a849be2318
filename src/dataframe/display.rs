//! Row-range views and their text rendering.
//!
//! A [`RowSlice`] only borrows the frame; rendering happens when a
//! [`TableRenderer`] walks [`RowSlice::rows`].

use std::fmt;
use std::io::Write;

use prettytable::format::{Alignment, FormatBuilder, LinePosition, LineSeparator, TableFormat};
use prettytable::{Cell, Row, Table};

use super::DataFrame;
use crate::error::Result;

/// Turns a header and a sequence of rows into text.
pub trait TableRenderer {
    fn render(&self, header: &[String], rows: &mut dyn Iterator<Item = Vec<String>>) -> String;
}

/// Centered cells in a ruled grid: `-` between rows, `=` under the header.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsciiGrid;

impl AsciiGrid {
    fn format() -> TableFormat {
        FormatBuilder::new()
            .column_separator('|')
            .borders('|')
            .separators(
                &[LinePosition::Top, LinePosition::Intern, LinePosition::Bottom],
                LineSeparator::new('-', '+', '+', '+'),
            )
            .separator(LinePosition::Title, LineSeparator::new('=', '+', '+', '+'))
            .padding(1, 1)
            .build()
    }
}

fn centered_row<S: AsRef<str>>(cells: &[S]) -> Row {
    Row::new(
        cells
            .iter()
            .map(|c| Cell::new_align(c.as_ref(), Alignment::CENTER))
            .collect(),
    )
}

impl TableRenderer for AsciiGrid {
    fn render(&self, header: &[String], rows: &mut dyn Iterator<Item = Vec<String>>) -> String {
        let mut table = Table::new();
        table.set_format(Self::format());
        table.set_titles(centered_row(header));
        for row in rows {
            table.add_row(centered_row(&row));
        }
        table.to_string()
    }
}

/// Read-only view over the rows `[start, end)` of a frame.
#[derive(Debug, Clone, Copy)]
pub struct RowSlice<'a> {
    frame: &'a DataFrame,
    start: usize,
    end: usize,
}

impl<'a> RowSlice<'a> {
    pub(crate) fn new(frame: &'a DataFrame, start: usize, end: usize) -> Self {
        RowSlice { frame, start, end }
    }

    pub fn header(&self) -> &'a [String] {
        self.frame.labels()
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// A fresh iterator over the rows; each call starts over.
    pub fn rows(&self) -> Rows<'a> {
        Rows {
            frame: self.frame,
            next: self.start,
            end: self.end,
        }
    }

    pub fn render_with(&self, renderer: &dyn TableRenderer) -> String {
        renderer.render(self.header(), &mut self.rows())
    }

    pub fn render(&self) -> String {
        self.render_with(&AsciiGrid)
    }

    pub fn write_to(&self, out: &mut impl Write) -> Result<()> {
        writeln!(out, "{}", self.render())?;
        Ok(())
    }
}

impl fmt::Display for RowSlice<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Rows of a [`RowSlice`], each rendered as one string per column.
#[derive(Debug, Clone)]
pub struct Rows<'a> {
    frame: &'a DataFrame,
    next: usize,
    end: usize,
}

impl Iterator for Rows<'_> {
    type Item = Vec<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let row = self.next;
        self.next += 1;
        Some(
            self.frame
                .columns()
                .iter()
                .map(|c| c.get(row).map(ToString::to_string).unwrap_or_default())
                .collect(),
        )
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end.saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Rows<'_> {}
