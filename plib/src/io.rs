//
// Copyright (c) 2024 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use std::env;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;
use std::sync::atomic::{AtomicUsize, Ordering};

static STAGED_COUNT: AtomicUsize = AtomicUsize::new(0);

pub fn input_stream(pathname: &Path, dashed_stdin: bool) -> io::Result<Box<dyn Read>> {
    // open file, or stdin
    let path_str = pathname.as_os_str();
    let file: Box<dyn Read> =
        if (dashed_stdin && path_str == "-") || (!dashed_stdin && path_str.is_empty()) {
            Box::new(io::stdin().lock())
        } else {
            Box::new(fs::File::open(pathname)?)
        };

    Ok(file)
}

/// Reads a whole file, or stdin, into memory.
pub fn read_all(pathname: &Path, dashed_stdin: bool) -> io::Result<Vec<u8>> {
    let mut content = Vec::new();
    input_stream(pathname, dashed_stdin)?.read_to_end(&mut content)?;
    Ok(content)
}

/// A temporary file holding data that was only available as a stream.
///
/// The file is removed when the value is dropped.
#[derive(Debug)]
pub struct StagedInput {
    path: PathBuf,
}

impl StagedInput {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for StagedInput {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

/// Copies `reader` into a fresh temporary file, for programs that need a
/// path to hand to another utility.
pub fn stage<R: Read>(mut reader: R, prefix: &str) -> io::Result<StagedInput> {
    let seq = STAGED_COUNT.fetch_add(1, Ordering::Relaxed);
    let path = env::temp_dir().join(format!("{}_{}_{}", prefix, process::id(), seq));

    let staged = StagedInput { path };
    let mut file = fs::File::create(&staged.path)?;
    io::copy(&mut reader, &mut file)?;

    Ok(staged)
}

pub fn stage_stdin(prefix: &str) -> io::Result<StagedInput> {
    stage(io::stdin().lock(), prefix)
}
