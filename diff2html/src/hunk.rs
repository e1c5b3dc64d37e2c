//
// Copyright (c) 2024 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Hunk headers of the diff(1) default output format.
//!
//! Only the `<n1>[,<m1>]<op><n2>[,<m2>]` header lines carry machine-readable
//! information; the `<`, `>` and `---` lines that follow them are ignored.

use std::{fmt, ops::RangeInclusive, sync::LazyLock};

use regex::{Captures, Regex};

use crate::error::{Error, Result};

static HUNK_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<start1>\d+)(?:,(?P<end1>\d+))?(?P<op>[acd])(?P<start2>\d+)(?:,(?P<end2>\d+))?$")
        .expect("hunk header pattern is valid")
});

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Add,
    Change,
    Delete,
}

impl OperationKind {
    fn from_op(op: &str) -> Self {
        match op {
            "a" => OperationKind::Add,
            "c" => OperationKind::Change,
            _ => OperationKind::Delete,
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = match self {
            OperationKind::Add => "a",
            OperationKind::Change => "c",
            OperationKind::Delete => "d",
        };
        f.write_str(op)
    }
}

/// Inclusive, 1-indexed line range. `start <= end` always holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LineRange {
    start: usize,
    end: usize,
}

impl LineRange {
    /// Returns `None` when `end` precedes `start`.
    pub fn new(start: usize, end: usize) -> Option<Self> {
        if end < start {
            return None;
        }

        Some(Self { start, end })
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    pub fn lines(&self) -> RangeInclusive<usize> {
        self.start..=self.end
    }
}

impl fmt::Display for LineRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{},{}", self.start, self.end)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Hunk {
    first: LineRange,
    second: LineRange,
    kind: OperationKind,
}

impl Hunk {
    pub fn new(first: LineRange, kind: OperationKind, second: LineRange) -> Self {
        Self {
            first,
            second,
            kind,
        }
    }

    pub fn first(&self) -> LineRange {
        self.first
    }

    pub fn second(&self) -> LineRange {
        self.second
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    /// Parses one line of the report.
    ///
    /// Returns `None` for lines that are not hunk headers, and an error for
    /// headers whose ranges cannot describe a change.
    pub fn parse_line(line: &str) -> Option<Result<Self>> {
        let line = line.trim();
        let captures = HUNK_HEADER.captures(line)?;

        Some(Self::from_captures(line, &captures))
    }

    fn from_captures(line: &str, captures: &Captures) -> Result<Self> {
        let number = |name: &str| -> Result<Option<usize>> {
            match captures.name(name) {
                Some(m) => m.as_str().parse::<usize>().map(Some).map_err(|_| {
                    Error::MalformedReport {
                        line: line.to_string(),
                        reason: "line number out of range",
                    }
                }),
                None => Ok(None),
            }
        };

        let start1 = number("start1")?.unwrap_or_default();
        let end1 = number("end1")?.unwrap_or(start1);
        let start2 = number("start2")?.unwrap_or_default();
        let end2 = number("end2")?.unwrap_or(start2);
        let kind = OperationKind::from_op(&captures["op"]);

        let malformed = |reason| Error::MalformedReport {
            line: line.to_string(),
            reason,
        };

        let (Some(first), Some(second)) = (
            LineRange::new(start1, end1),
            LineRange::new(start2, end2),
        ) else {
            return Err(malformed("range ends before it starts"));
        };

        // The side an add or delete does not touch names an anchor line, which
        // may be 0 (e.g. `0a1,2`).
        let touches_zero = match kind {
            OperationKind::Add => start2 == 0,
            OperationKind::Delete => start1 == 0,
            OperationKind::Change => start1 == 0 || start2 == 0,
        };
        if touches_zero {
            return Err(malformed("line numbers start at 1"));
        }

        Ok(Self::new(first, kind, second))
    }

    /// Fails when a classified side reaches past the end of its file.
    pub fn check_bounds(&self, count1: usize, count2: usize) -> Result<()> {
        let past_end = match self.kind {
            OperationKind::Add => self.second.end > count2,
            OperationKind::Delete => self.first.end > count1,
            OperationKind::Change => self.first.end > count1 || self.second.end > count2,
        };

        if past_end {
            return Err(Error::MalformedReport {
                line: self.to_string(),
                reason: "range extends past the end of the file",
            });
        }

        Ok(())
    }
}

impl fmt::Display for Hunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.first, self.kind, self.second)
    }
}

/// Extracts every hunk header from a diff(1) report, in report order.
pub fn parse_report(report: &str) -> Result<Vec<Hunk>> {
    report.lines().filter_map(Hunk::parse_line).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    fn hunk(s1: usize, e1: usize, kind: OperationKind, s2: usize, e2: usize) -> Hunk {
        Hunk::new(
            LineRange::new(s1, e1).unwrap(),
            kind,
            LineRange::new(s2, e2).unwrap(),
        )
    }

    #[test]
    fn test_reversed_line_range_is_rejected() {
        assert_eq!(LineRange::new(5, 3), None);
        assert_eq!(LineRange::new(3, 3).map(|r| r.len()), Some(1));
    }

    #[test]
    fn test_display_matches_report_syntax() {
        assert_eq!(hunk(3, 5, OperationKind::Change, 7, 7).to_string(), "3,5c7");
        assert_eq!(hunk(0, 0, OperationKind::Add, 1, 2).to_string(), "0a1,2");
    }

    #[test]
    fn test_check_bounds() {
        assert!(hunk(2, 2, OperationKind::Change, 2, 2).check_bounds(2, 2).is_ok());
        assert!(hunk(2, 2, OperationKind::Add, 3, 3).check_bounds(2, 3).is_ok());
        assert!(hunk(4, 4, OperationKind::Delete, 3, 3).check_bounds(4, 3).is_ok());

        // The anchor side of an add or delete is not checked.
        assert!(hunk(9, 9, OperationKind::Add, 1, 1).check_bounds(0, 1).is_ok());

        let huge = Hunk::parse_line("1,4000000000d1").unwrap().unwrap();
        match huge.check_bounds(10, 10) {
            Err(Error::MalformedReport { line, .. }) => assert_eq!(line, "1,4000000000d1"),
            other => panic!("unexpected result {other:?}"),
        }
        assert!(hunk(1, 1, OperationKind::Change, 1, 3).check_bounds(1, 2).is_err());
    }

    #[test]
    fn test_parse_single_numbers() {
        let parsed = Hunk::parse_line("2c2").unwrap().unwrap();
        assert_eq!(parsed, hunk(2, 2, OperationKind::Change, 2, 2));
    }

    #[test]
    fn test_parse_ranges() {
        let parsed = Hunk::parse_line("3,5c7,10").unwrap().unwrap();
        assert_eq!(parsed, hunk(3, 5, OperationKind::Change, 7, 10));
        assert_eq!(parsed.first().len(), 3);
        assert_eq!(parsed.second().len(), 4);
    }

    #[test]
    fn test_parse_add_and_delete_anchors() {
        assert_eq!(
            Hunk::parse_line("0a1,2").unwrap().unwrap(),
            hunk(0, 0, OperationKind::Add, 1, 2)
        );
        assert_eq!(
            Hunk::parse_line("4,6d3").unwrap().unwrap(),
            hunk(4, 6, OperationKind::Delete, 3, 3)
        );
        assert_eq!(
            Hunk::parse_line("5d0").unwrap().unwrap(),
            hunk(5, 5, OperationKind::Delete, 0, 0)
        );
    }

    #[test]
    fn test_parse_surrounding_whitespace() {
        assert!(Hunk::parse_line("  2a3\r").unwrap().is_ok());
    }

    #[test]
    fn test_non_header_lines_are_ignored() {
        for line in ["< 1a2", "> 3c4", "---", "", "\\ No newline at end of file", "12", "1x2", "1a2 extra"] {
            assert!(Hunk::parse_line(line).is_none(), "{line:?}");
        }
    }

    #[test]
    fn test_reversed_range_is_malformed() {
        let result = Hunk::parse_line("5,3c1").unwrap();
        assert!(matches!(result, Err(Error::MalformedReport { .. })));
    }

    #[test]
    fn test_zero_on_classified_side_is_malformed() {
        assert!(Hunk::parse_line("1a0").unwrap().is_err());
        assert!(Hunk::parse_line("0d1").unwrap().is_err());
        assert!(Hunk::parse_line("0c1").unwrap().is_err());
    }

    #[test]
    fn test_overflowing_number_is_malformed() {
        let result = Hunk::parse_line("99999999999999999999999a1").unwrap();
        assert!(matches!(result, Err(Error::MalformedReport { .. })));
    }

    #[test]
    fn test_parse_report() {
        let report = "2c2\n< b\n---\n> x\n3a4,5\n> d\n> e\n7,8d8\n< g\n< h\n";
        let hunks = parse_report(report).unwrap();
        assert_eq!(
            hunks,
            vec![
                hunk(2, 2, OperationKind::Change, 2, 2),
                hunk(3, 3, OperationKind::Add, 4, 5),
                hunk(7, 8, OperationKind::Delete, 8, 8),
            ]
        );
    }

    #[test]
    fn test_parse_report_stops_on_malformed_header() {
        let report = "2c2\n< b\n---\n> x\n9,4d3\n";
        assert!(parse_report(report).is_err());
    }

    #[test]
    fn test_parse_empty_report() {
        assert!(parse_report("").unwrap().is_empty());
        assert!(parse_report("Binary files a and b differ\n").unwrap().is_empty());
    }
}
