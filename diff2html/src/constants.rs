//
// Copyright (c) 2024 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

pub const EXIT_STATUS_SUCCESS: u8 = 0;
pub const EXIT_STATUS_TROUBLE: u8 = 2;

/// Program used to produce the change report when `DIFF_PROGRAM_VAR` is unset.
pub const DEFAULT_DIFF_PROGRAM: &str = "diff";
pub const DIFF_PROGRAM_VAR: &str = "DIFF2HTML_DIFF";

pub const STDIN_OPERAND: &str = "-";

/// Timestamp layout of the report, matching C `asctime()`.
pub const ASCTIME_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

pub const DEFAULT_CSS: &str = "
TABLE { border-collapse: collapse; border-spacing: 0px; }
TD.linenum { color: #909090;
             text-align: right;
             vertical-align: top;
             font-weight: bold;
             border-right: 1px solid black;
             border-left: 1px solid black; }
TD.added { background-color: #DDDDFF; }
TD.modified { background-color: #BBFFBB; }
TD.removed { background-color: #FFCCCC; }
TD.normal { background-color: #FFFFE1; }
";
