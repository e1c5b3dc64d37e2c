//
// Copyright (c) 2024 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use std::{fs, io, path::Path, time::SystemTime};

use chrono::{DateTime, Utc};

use crate::constants::ASCTIME_FORMAT;

/// An input file as shown in the report.
#[derive(Debug, Clone)]
pub struct FileData {
    name: String,
    lines: Vec<String>,
    size: u64,
    modified: SystemTime,
}

impl FileData {
    /// Reads `path`, labelling it `name` in the report.
    pub fn get_file(path: &Path, name: &str) -> io::Result<Self> {
        let content = plib::io::read_all(path, false)?;
        let modified = fs::metadata(path)?.modified()?;

        Ok(Self::from_bytes(name, &content, modified))
    }

    pub fn from_bytes(name: &str, content: &[u8], modified: SystemTime) -> Self {
        let text = String::from_utf8_lossy(content);
        let mut lines = text
            .split('\n')
            .map(|line| line.to_string())
            .collect::<Vec<String>>();

        // A final newline terminates the last line rather than opening a new one.
        if text.is_empty() || text.ends_with('\n') {
            lines.pop();
        }

        Self {
            name: name.to_string(),
            lines,
            size: content.len() as u64,
            modified,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// The 1-indexed line `ln`, if the file has one.
    pub fn line(&self, ln: usize) -> Option<&str> {
        ln.checked_sub(1)
            .and_then(|index| self.lines.get(index))
            .map(String::as_str)
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn modified_asctime(&self) -> String {
        system_time_to_asctime(self.modified)
    }
}

pub fn system_time_to_asctime(system_time: SystemTime) -> String {
    Into::<DateTime<Utc>>::into(system_time)
        .format(ASCTIME_FORMAT)
        .to_string()
}
