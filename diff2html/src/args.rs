//
// Copyright (c) 2024 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use std::ffi::OsString;

use clap::Parser;

use crate::{constants::DEFAULT_CSS, render::RenderOptions};

/// diff2html - format diff(1) output as a side-by-side HTML page on stdout
#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about, after_long_help = after_long_help())]
pub struct Args {
    /// Do not display lines that have not changed
    #[arg(long)]
    pub only_changes: bool,

    /// Use an alternate style sheet, linked to the given file
    #[arg(long, value_name = "PATH")]
    pub style_sheet: Option<String>,

    /// Only output the colorized table, so it can be embedded in another page
    #[arg(long)]
    pub embeddable: bool,

    /// Treat all files as text (diff -a)
    #[arg(short = 'a', long)]
    pub text: bool,

    /// Ignore changes in the amount of white space (diff -b)
    #[arg(short = 'b', long)]
    pub ignore_space_change: bool,

    /// Ignore all white space (diff -w)
    #[arg(short = 'w', long)]
    pub ignore_all_space: bool,

    /// Ignore case differences (diff -i)
    #[arg(short = 'i', long)]
    pub ignore_case: bool,

    /// Ignore changes whose lines are all blank (diff -B)
    #[arg(short = 'B', long)]
    pub ignore_blank_lines: bool,

    /// Pass <OPT> to diff(1) unchanged; may be repeated
    #[arg(long, value_name = "OPT", allow_hyphen_values = true)]
    pub diff_option: Vec<String>,

    /// First comparison file, or - for standard input
    pub file1: String,

    /// Second comparison file, or - for standard input
    pub file2: String,
}

fn after_long_help() -> String {
    format!(
        "Invalid options passed to diff(1) with --diff-option make diff2html fail.\n\n\
         Examples:\n  \
         diff2html file1.txt file2.txt > differences.html\n  \
         diff2html -a file1 file2 > diffs.html\n  \
         diff2html --style-sheet diff_style.css -a file1 file2 > diffs.html\n\n\
         The default style sheet is:\n{}",
        DEFAULT_CSS
    )
}

impl Args {
    /// Flags handed to the comparison tool, before the two files.
    pub fn diff_flags(&self) -> Vec<OsString> {
        let switches = [
            (self.text, "-a"),
            (self.ignore_space_change, "-b"),
            (self.ignore_all_space, "-w"),
            (self.ignore_case, "-i"),
            (self.ignore_blank_lines, "-B"),
        ];

        switches
            .into_iter()
            .filter(|(enabled, _)| *enabled)
            .map(|(_, flag)| OsString::from(flag))
            .chain(self.diff_option.iter().map(OsString::from))
            .collect()
    }

    pub fn render_options(&self, command_line: String) -> RenderOptions {
        RenderOptions {
            only_changes: self.only_changes,
            style_sheet: self.style_sheet.clone(),
            embeddable: self.embeddable,
            command_line,
        }
    }
}
