//
// Copyright (c) 2024 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Side-by-side HTML rendering of two classified files.

use std::io::{self, Write};

use chrono::{DateTime, Utc};

use crate::{
    classify::{ClassificationTable, LineClass},
    constants::{ASCTIME_FORMAT, DEFAULT_CSS},
    file_data::FileData,
};

#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    pub only_changes: bool,
    pub style_sheet: Option<String>,
    pub embeddable: bool,
    /// The invocation shown in the footer.
    pub command_line: String,
}

/// Escapes `&`, `<` and `>`.
fn escape_text(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());

    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            c => escaped.push(c),
        }
    }

    escaped
}

fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;")
}

/// Converts one line of a file to HTML.
///
/// Leading spaces become `&nbsp;` so indentation survives; spaces after the
/// first non-space character are left alone.
pub fn str_to_html(line: &str) -> String {
    let line = line.trim_end_matches(['\n', '\r']);
    let text = line.trim_start_matches(' ');
    let indent = line.len() - text.len();

    let mut html = "&nbsp;".repeat(indent);
    html.push_str(&escape_text(text));
    html
}

#[derive(Clone, Copy)]
enum LineNumber {
    Blank,
    Plain(usize),
    Anchor(char, usize),
}

impl LineNumber {
    fn cell(self) -> String {
        match self {
            LineNumber::Blank => String::from("<td class=\"linenum\">&nbsp;</td>"),
            LineNumber::Plain(ln) => format!("<td class=\"linenum\">{}</td>", ln),
            LineNumber::Anchor(file, ln) => {
                format!("<td class=\"linenum\"><a name=\"F{file}_{ln}\">{ln}</a></td>")
            }
        }
    }
}

/// One side of a table row.
struct Side<'a> {
    number: LineNumber,
    text: Option<&'a str>,
}

impl<'a> Side<'a> {
    fn empty() -> Self {
        Self {
            number: LineNumber::Blank,
            text: None,
        }
    }

    fn text_cell(&self, class: &str) -> String {
        match self.text {
            Some(text) => format!("<td class=\"{}\">{}</td>", class, str_to_html(text)),
            None => format!("<td class=\"{}\">&nbsp;</td>", class),
        }
    }
}

fn write_row<W: Write>(out: &mut W, class: &str, left: Side, right: Side) -> io::Result<()> {
    writeln!(out, "    <tr>")?;
    writeln!(out, "        {}", left.number.cell())?;
    writeln!(out, "        {}", left.text_cell(class))?;
    writeln!(out, "        <td width=\"16\">&nbsp;</td>")?;
    writeln!(out, "        {}", right.number.cell())?;
    writeln!(out, "        {}", right.text_cell(class))?;
    writeln!(out, "    </tr>")
}

/// Comma separated links to the given lines, or "None".
fn line_links(lines: &[usize], file: char) -> String {
    if lines.is_empty() {
        return String::from("None");
    }

    lines
        .iter()
        .map(|ln| format!("<a href=\"#F{file}_{ln}\">{ln}</a>"))
        .collect::<Vec<String>>()
        .join(", ")
}

pub struct HtmlRenderer<'a> {
    file1: &'a FileData,
    file2: &'a FileData,
    table: &'a ClassificationTable,
    options: &'a RenderOptions,
}

impl<'a> HtmlRenderer<'a> {
    pub fn new(
        file1: &'a FileData,
        file2: &'a FileData,
        table: &'a ClassificationTable,
        options: &'a RenderOptions,
    ) -> Self {
        Self {
            file1,
            file2,
            table,
            options,
        }
    }

    fn side(file: &FileData, ln: usize, number: LineNumber) -> Side<'_> {
        match file.line(ln) {
            Some(text) => Side {
                number,
                text: Some(text),
            },
            None => Side::empty(),
        }
    }

    /// Writes one row per aligned line pair.
    ///
    /// Both files are walked with one cursor each. Added lines only move the
    /// second cursor, removed lines only the first, everything else both.
    pub fn write_rows<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let count1 = self.file1.line_count();
        let count2 = self.file2.line_count();
        let mut ln1 = 1;
        let mut ln2 = 1;

        while ln1 <= count1 || ln2 <= count2 {
            if ln2 <= count2 && self.table.second(ln2) == LineClass::Added {
                let right = Self::side(self.file2, ln2, LineNumber::Anchor('2', ln2));
                write_row(out, "added", Side::empty(), right)?;
                ln2 += 1;
            } else if ln1 <= count1 && self.table.first(ln1) == LineClass::Removed {
                let left = Self::side(self.file1, ln1, LineNumber::Anchor('1', ln1));
                write_row(out, "removed", left, Side::empty())?;
                ln1 += 1;
            } else if ln1 <= count1 && self.table.first(ln1) == LineClass::Modified {
                let left = Self::side(self.file1, ln1, LineNumber::Anchor('1', ln1));
                let right = Self::side(self.file2, ln2, LineNumber::Plain(ln2));
                write_row(out, "modified", left, right)?;
                ln1 += 1;
                ln2 += 1;
            } else {
                if !self.options.only_changes {
                    let left = Self::side(self.file1, ln1, LineNumber::Plain(ln1));
                    let right = Self::side(self.file2, ln2, LineNumber::Plain(ln2));
                    write_row(out, "normal", left, right)?;
                }
                ln1 += 1;
                ln2 += 1;
            }
        }

        Ok(())
    }

    fn write_head<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(
            out,
            "<!DOCTYPE HTML PUBLIC \"-//W3C//DTD HTML 4.0 Transitional//EN\"\n \"http://www.w3.org/TR/REC-html40/loose.dtd\">"
        )?;
        writeln!(out, "<html>")?;
        writeln!(out, "<head>")?;
        writeln!(
            out,
            "    <title>Differences between {} and {}</title>",
            escape_text(self.file1.name()),
            escape_text(self.file2.name())
        )?;

        match &self.options.style_sheet {
            Some(href) => writeln!(
                out,
                "    <link rel=\"stylesheet\" href=\"{}\" type=\"text/css\">",
                escape_attr(href)
            )?,
            None => writeln!(out, "    <style>{}</style>", DEFAULT_CSS)?,
        }

        writeln!(out, "</head>")?;
        writeln!(out, "<body>")
    }

    fn write_summary<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let entries = [
            ("modified", "Modified lines", line_links(&self.table.modified(), '1')),
            ("added", "Added line", line_links(&self.table.added(), '2')),
            ("removed", "Removed line", line_links(&self.table.removed(), '1')),
        ];

        writeln!(out, "<table>")?;
        writeln!(out, "<tr><td width=\"50%\">")?;
        writeln!(out, "<table>")?;
        for (class, label, links) in entries {
            writeln!(out, "    <tr>")?;
            writeln!(out, "        <td class=\"{class}\">{label}:&nbsp;</td>")?;
            writeln!(out, "        <td class=\"{class}\">{links}</td>")?;
            writeln!(out, "    </tr>")?;
        }
        writeln!(out, "</table>")?;
        writeln!(out, "</td>")?;
        writeln!(out, "<td width=\"50%\">")?;
        writeln!(out, "<i>Generated by <b>diff2html</b></i>")?;
        writeln!(out, "</td></tr>")?;
        writeln!(out, "</table>")?;
        writeln!(out, "<hr/>")
    }

    fn write_file_info<W: Write>(out: &mut W, file: &FileData) -> io::Result<()> {
        writeln!(out, "        <td>")?;
        writeln!(out, "        {} lines<br/>", file.line_count())?;
        writeln!(out, "        {} bytes<br/>", file.size())?;
        writeln!(out, "        Last modified : {}<br/>", file.modified_asctime())?;
        writeln!(out, "        <hr/>")?;
        writeln!(out, "        </td>")
    }

    fn write_table_head<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "    <tr>")?;
        writeln!(out, "        <th>&nbsp;</th>")?;
        writeln!(
            out,
            "        <th width=\"45%\"><strong><big>{}</big></strong></th>",
            escape_text(self.file1.name())
        )?;
        writeln!(out, "        <th>&nbsp;</th>")?;
        writeln!(out, "        <th>&nbsp;</th>")?;
        writeln!(
            out,
            "        <th width=\"45%\"><strong><big>{}</big></strong></th>",
            escape_text(self.file2.name())
        )?;
        writeln!(out, "    </tr>")?;

        writeln!(out, "    <tr>")?;
        writeln!(out, "        <td width=\"16\">&nbsp;</td>")?;
        Self::write_file_info(out, self.file1)?;
        writeln!(out, "        <td width=\"16\">&nbsp;</td>")?;
        writeln!(out, "        <td width=\"16\">&nbsp;</td>")?;
        Self::write_file_info(out, self.file2)?;
        writeln!(out, "    </tr>")
    }

    fn write_footer<W: Write>(&self, out: &mut W, generated: DateTime<Utc>) -> io::Result<()> {
        writeln!(out, "<hr/>")?;
        writeln!(
            out,
            "<i>Generated by <b>diff2html</b> on {}<br/>",
            generated.format(ASCTIME_FORMAT)
        )?;
        writeln!(
            out,
            "Command-line:</i> <tt>{}</tt>",
            escape_text(&self.options.command_line)
        )?;
        writeln!(out, "</body>")?;
        writeln!(out, "</html>")
    }

    /// Writes the full report, or only the row table when embeddable.
    pub fn write_document<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.options.embeddable {
            writeln!(out, "<table>")?;
            self.write_rows(out)?;
            return writeln!(out, "</table>");
        }

        self.write_head(out)?;
        self.write_summary(out)?;
        writeln!(out, "<table>")?;
        self.write_table_head(out)?;
        self.write_rows(out)?;
        writeln!(out, "</table>")?;
        self.write_footer(out, Utc::now())
    }
}
