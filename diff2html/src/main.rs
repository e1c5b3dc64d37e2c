//
// Copyright (c) 2024 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use std::{env, io};

use clap::Parser;
use diff2html::{exit_status::ExitStatus, Args};

fn main() -> ExitStatus {
    env_logger::init();
    let args = Args::parse();

    let command_line = env::args_os()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect::<Vec<String>>()
        .join(" ");

    let result = diff2html::run(io::stdout().lock(), args, command_line);
    if let Err(error) = &result {
        eprintln!("diff2html: {}", error);
    }

    ExitStatus::from(&result)
}
