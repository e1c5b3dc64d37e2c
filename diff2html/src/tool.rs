//
// Copyright (c) 2024 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use std::{
    env,
    ffi::OsString,
    path::Path,
    process::{Command, Stdio},
};

use crate::{
    constants::{DEFAULT_DIFF_PROGRAM, DIFF_PROGRAM_VAR},
    error::{Error, Result},
    hunk::{parse_report, Hunk},
};

/// The external line-comparison program and the flags passed to it.
#[derive(Debug, Clone)]
pub struct DiffTool {
    program: OsString,
    flags: Vec<OsString>,
}

impl DiffTool {
    pub fn new(program: impl Into<OsString>, flags: Vec<OsString>) -> Self {
        Self {
            program: program.into(),
            flags,
        }
    }

    /// Uses the program named by the environment, falling back to diff(1).
    pub fn from_env(flags: Vec<OsString>) -> Self {
        let program = env::var_os(DIFF_PROGRAM_VAR)
            .filter(|program| !program.is_empty())
            .unwrap_or_else(|| OsString::from(DEFAULT_DIFF_PROGRAM));

        Self::new(program, flags)
    }

    /// Runs the tool on two files and returns its report.
    ///
    /// Anything written to standard error makes the report unusable. The exit
    /// status is not consulted, since diff(1) exits non-zero whenever the files
    /// differ.
    pub fn compare(&self, file1: &Path, file2: &Path) -> Result<String> {
        log::debug!(
            "running {:?} {:?} {:?} {:?}",
            self.program,
            self.flags,
            file1,
            file2
        );

        let output = Command::new(&self.program)
            .args(&self.flags)
            .arg(file1)
            .arg(file2)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| {
                Error::ToolInvocation(format!("{}: {}", self.program.to_string_lossy(), e))
            })?;

        if !output.stderr.is_empty() {
            let message = String::from_utf8_lossy(&output.stderr);
            return Err(Error::ToolInvocation(message.trim_end().to_string()));
        }

        log::trace!(
            "{:?} exited with {}, {} bytes of report",
            self.program,
            output.status,
            output.stdout.len()
        );

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    pub fn hunks(&self, file1: &Path, file2: &Path) -> Result<Vec<Hunk>> {
        let report = self.compare(file1, file2)?;
        let hunks = parse_report(&report)?;

        log::debug!("report contains {} hunks", hunks.len());

        Ok(hunks)
    }

    /// Compares two in-memory texts by staging each to a temporary file.
    pub fn hunks_of_strs(&self, text1: &str, text2: &str) -> Result<Vec<Hunk>> {
        let staged1 = plib::io::stage(text1.as_bytes(), "diff2html")?;
        let staged2 = plib::io::stage(text2.as_bytes(), "diff2html")?;

        self.hunks(staged1.path(), staged2.path())
    }
}
