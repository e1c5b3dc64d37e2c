//
// Copyright (c) 2024 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("{}: No such file or directory, or no read permission", .0.display())]
    InputNotFound(PathBuf),
    #[error("{0}")]
    ToolInvocation(String),
    #[error("malformed change report line {line:?}: {reason}")]
    MalformedReport { line: String, reason: &'static str },
    #[error("cannot compare stdin to itself")]
    StdinTwice,
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
