//
// Copyright (c) 2024 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use std::collections::BTreeMap;

use crate::hunk::{Hunk, OperationKind};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LineClass {
    Added,
    Removed,
    Modified,
    #[default]
    Unchanged,
}

/// Per-file line classifications derived from a list of hunks.
///
/// Modified lines are only recorded for the first file; their counterparts in
/// the second file are found by pairing positions while rendering.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassificationTable {
    first: BTreeMap<usize, LineClass>,
    second: BTreeMap<usize, LineClass>,
}

impl ClassificationTable {
    pub fn from_hunks(hunks: &[Hunk]) -> Self {
        let mut table = Self::default();

        for hunk in hunks {
            table.apply(hunk);
        }

        log::debug!(
            "classified {} hunks: {} modified, {} added, {} removed",
            hunks.len(),
            table.count_first(LineClass::Modified),
            table.count_second(LineClass::Added),
            table.count_first(LineClass::Removed),
        );

        table
    }

    fn apply(&mut self, hunk: &Hunk) {
        let first = hunk.first();
        let second = hunk.second();

        match hunk.kind() {
            OperationKind::Add => {
                for ln2 in second.lines() {
                    self.second.insert(ln2, LineClass::Added);
                }
            }
            OperationKind::Delete => {
                for ln1 in first.lines() {
                    self.first.insert(ln1, LineClass::Removed);
                }
            }
            OperationKind::Change => {
                let paired = first.len().min(second.len());

                for ln1 in first.lines() {
                    let class = if ln1 < first.start() + paired {
                        LineClass::Modified
                    } else {
                        LineClass::Removed
                    };
                    self.first.insert(ln1, class);
                }

                for ln2 in (second.start() + paired)..=second.end() {
                    self.second.insert(ln2, LineClass::Added);
                }
            }
        }
    }

    /// Classification of a 1-indexed line of the first file.
    pub fn first(&self, line: usize) -> LineClass {
        self.first.get(&line).copied().unwrap_or_default()
    }

    /// Classification of a 1-indexed line of the second file.
    pub fn second(&self, line: usize) -> LineClass {
        self.second.get(&line).copied().unwrap_or_default()
    }

    /// Modified lines, numbered in the first file.
    pub fn modified(&self) -> Vec<usize> {
        Self::lines_of(&self.first, LineClass::Modified)
    }

    /// Added lines, numbered in the second file.
    pub fn added(&self) -> Vec<usize> {
        Self::lines_of(&self.second, LineClass::Added)
    }

    /// Removed lines, numbered in the first file.
    pub fn removed(&self) -> Vec<usize> {
        Self::lines_of(&self.first, LineClass::Removed)
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_empty() && self.second.is_empty()
    }

    fn lines_of(map: &BTreeMap<usize, LineClass>, class: LineClass) -> Vec<usize> {
        map.iter()
            .filter(|(_, c)| **c == class)
            .map(|(ln, _)| *ln)
            .collect()
    }

    fn count_first(&self, class: LineClass) -> usize {
        self.first.values().filter(|c| **c == class).count()
    }

    fn count_second(&self, class: LineClass) -> usize {
        self.second.values().filter(|c| **c == class).count()
    }
}
