//
// Copyright (c) 2024 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use classify::ClassificationTable;
use constants::STDIN_OPERAND;
use error::{Error, Result};
use file_data::FileData;
use hunk::Hunk;
use plib::io::StagedInput;
use render::HtmlRenderer;
use tool::DiffTool;

pub mod args;
pub mod classify;
pub mod constants;
pub mod error;
pub mod exit_status;
pub mod file_data;
pub mod hunk;
pub mod render;
pub mod tool;

pub use args::Args;

const STDIN_LABEL: &str = "(standard input)";

/// A file operand resolved to something the comparison tool can open.
struct Operand {
    path: PathBuf,
    label: String,
    // Keeps staged standard input on disk until the run is over.
    _staged: Option<StagedInput>,
}

impl Operand {
    fn resolve(operand: &str) -> Result<Self> {
        if operand == STDIN_OPERAND {
            let staged = plib::io::stage_stdin("diff2html")?;
            log::debug!("staged standard input at {}", staged.path().display());

            return Ok(Self {
                path: staged.path().to_path_buf(),
                label: String::from(STDIN_LABEL),
                _staged: Some(staged),
            });
        }

        let path = PathBuf::from(operand);
        check_readable(&path)?;

        Ok(Self {
            path,
            label: operand.to_string(),
            _staged: None,
        })
    }

    fn load(&self) -> Result<FileData> {
        Ok(FileData::get_file(&self.path, &self.label)?)
    }
}

/// Directories are refused even though they can be opened.
fn check_readable(path: &Path) -> Result<()> {
    let opened = fs::metadata(path).and_then(|metadata| {
        if metadata.is_dir() {
            return Err(io::Error::other("is a directory"));
        }
        fs::File::open(path)
    });

    match opened {
        Ok(_) => Ok(()),
        Err(e) => {
            log::debug!("{}: {}", path.display(), e);
            Err(Error::InputNotFound(path.to_path_buf()))
        }
    }
}

/// Classifies `hunks` once every range is known to fit inside its file.
fn checked_table(hunks: &[Hunk], file1: &FileData, file2: &FileData) -> Result<ClassificationTable> {
    for hunk in hunks {
        hunk.check_bounds(file1.line_count(), file2.line_count())?;
    }

    Ok(ClassificationTable::from_hunks(hunks))
}

/// Compares the two operands of `args` and writes the HTML report to
/// `stdout`.
///
/// The report is assembled in memory first, so nothing is written unless the
/// whole run succeeds.
pub fn run<W: Write>(mut stdout: W, args: Args, command_line: String) -> Result<()> {
    if args.file1 == STDIN_OPERAND && args.file2 == STDIN_OPERAND {
        return Err(Error::StdinTwice);
    }

    let operand1 = Operand::resolve(&args.file1)?;
    let operand2 = Operand::resolve(&args.file2)?;

    let tool = DiffTool::from_env(args.diff_flags());
    let hunks = tool.hunks(&operand1.path, &operand2.path)?;

    let file1 = operand1.load()?;
    let file2 = operand2.load()?;

    let table = checked_table(&hunks, &file1, &file2)?;

    let options = args.render_options(command_line);
    let mut html = Vec::new();
    HtmlRenderer::new(&file1, &file2, &table, &options).write_document(&mut html)?;

    stdout.write_all(&html)?;
    stdout.flush()?;

    Ok(())
}
