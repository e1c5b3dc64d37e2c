//
// Copyright (c) 2024 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use std::process::{ExitCode, Termination};

use crate::constants::{EXIT_STATUS_SUCCESS, EXIT_STATUS_TROUBLE};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Trouble,
}

impl ExitStatus {
    pub fn status_code(&self) -> u8 {
        match self {
            ExitStatus::Success => EXIT_STATUS_SUCCESS,
            ExitStatus::Trouble => EXIT_STATUS_TROUBLE,
        }
    }
}

impl<T, E> From<&Result<T, E>> for ExitStatus {
    fn from(result: &Result<T, E>) -> Self {
        match result {
            Ok(_) => ExitStatus::Success,
            Err(_) => ExitStatus::Trouble,
        }
    }
}

impl Termination for ExitStatus {
    fn report(self) -> ExitCode {
        ExitCode::from(self.status_code())
    }
}
