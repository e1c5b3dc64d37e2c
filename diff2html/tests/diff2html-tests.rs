//
// Copyright (c) 2024 Jeff Garzik
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use plib::testing::{
    run_test, run_test_with_checker, run_test_with_checker_and_env, TestPlan,
};
use std::{fs, path::PathBuf};

const EXIT_STATUS_SUCCESS: i32 = 0;
const EXIT_STATUS_TROUBLE: i32 = 2;

fn base_path() -> PathBuf {
    PathBuf::from("tests").join("diff2html")
}

fn fixture_path(name: &str) -> String {
    base_path()
        .join(name)
        .to_str()
        .expect("Could not unwrap fixture path")
        .to_string()
}

fn fixture(name: &str) -> String {
    fs::read_to_string(base_path().join(name)).expect("Could not read fixture")
}

fn plan(args: &[&str], stdin_data: &str, expected_out: &str, expected_err: &str, code: i32) -> TestPlan {
    TestPlan {
        cmd: String::from("diff2html"),
        args: args.iter().map(|s| s.to_string()).collect(),
        stdin_data: String::from(stdin_data),
        expected_out: String::from(expected_out),
        expected_err: String::from(expected_err),
        expected_exit_code: code,
    }
}

fn diff2html_test(args: &[&str], expected_output: &str) {
    run_test(plan(args, "", expected_output, "", EXIT_STATUS_SUCCESS));
}

#[test]
fn test_embeddable_table() {
    let f1 = fixture_path("f1.txt");
    let f2 = fixture_path("f2.txt");

    diff2html_test(
        &["--embeddable", &f1, &f2],
        &fixture("f1_f2_embeddable.html"),
    );
}

#[test]
fn test_embeddable_only_changes() {
    let f1 = fixture_path("f1.txt");
    let f2 = fixture_path("f2.txt");

    diff2html_test(
        &["--embeddable", "--only-changes", &f1, &f2],
        &fixture("f1_f2_only_changes.html"),
    );
}

#[test]
fn test_identical_files_only_changes() {
    let f1 = fixture_path("f1.txt");

    diff2html_test(
        &["--embeddable", "--only-changes", &f1, &f1],
        "<table>\n</table>\n",
    );
}

#[test]
fn test_first_file_from_stdin() {
    let f2 = fixture_path("f2.txt");

    run_test(plan(
        &["--embeddable", "-", &f2],
        &fixture("f1.txt"),
        &fixture("f1_f2_embeddable.html"),
        "",
        EXIT_STATUS_SUCCESS,
    ));
}

#[test]
fn test_full_document() {
    let f1 = fixture_path("f1.txt");
    let f2 = fixture_path("f2.txt");

    run_test_with_checker(plan(&[&f1, &f2], "", "", "", EXIT_STATUS_SUCCESS), |_, output| {
        let stdout = String::from_utf8_lossy(&output.stdout);

        assert!(stdout.starts_with("<!DOCTYPE HTML PUBLIC"));
        assert!(stdout.contains(&format!(
            "<title>Differences between {} and {}</title>",
            f1, f2
        )));
        assert!(stdout.contains("<style>"));
        assert!(stdout.contains("TD.modified { background-color: #BBFFBB; }"));
        assert!(stdout.contains("<td class=\"modified\"><a href=\"#F1_2\">2</a></td>"));
        assert!(stdout.contains("<td class=\"added\"><a href=\"#F2_6\">6</a></td>"));
        assert!(stdout.contains("<td class=\"removed\">None</td>"));
        assert!(stdout.contains("6 lines<br/>"));
        assert!(stdout.contains("7 lines<br/>"));
        assert!(stdout.contains(&fixture("f1_f2_embeddable.html").replacen("<table>\n", "", 1)));
        assert!(stdout.contains("Command-line:</i> <tt>"));
        assert!(stdout.ends_with("</body>\n</html>\n"));

        assert!(output.stderr.is_empty());
        assert_eq!(output.status.code(), Some(EXIT_STATUS_SUCCESS));
    });
}

#[test]
fn test_external_style_sheet() {
    let f1 = fixture_path("f1.txt");
    let f2 = fixture_path("f2.txt");

    run_test_with_checker(
        plan(&["--style-sheet", "diff_style.css", &f1, &f2], "", "", "", EXIT_STATUS_SUCCESS),
        |_, output| {
            let stdout = String::from_utf8_lossy(&output.stdout);

            assert!(stdout.contains(
                "<link rel=\"stylesheet\" href=\"diff_style.css\" type=\"text/css\">"
            ));
            assert!(!stdout.contains("<style>"));
            assert_eq!(output.status.code(), Some(EXIT_STATUS_SUCCESS));
        },
    );
}

#[test]
fn test_missing_input() {
    let f1 = fixture_path("f1.txt");
    let missing = fixture_path("missing.txt");

    run_test(plan(
        &[&f1, &missing],
        "",
        "",
        &format!(
            "diff2html: {}: No such file or directory, or no read permission\n",
            missing
        ),
        EXIT_STATUS_TROUBLE,
    ));
}

#[test]
fn test_directory_operand() {
    let f1 = fixture_path("f1.txt");
    let dir = base_path().to_str().expect("Could not unwrap fixture path").to_string();

    run_test(plan(
        &[&f1, &dir],
        "",
        "",
        &format!(
            "diff2html: {}: No such file or directory, or no read permission\n",
            dir
        ),
        EXIT_STATUS_TROUBLE,
    ));
}

#[test]
fn test_stdin_twice() {
    run_test(plan(
        &["-", "-"],
        "",
        "",
        "diff2html: cannot compare stdin to itself\n",
        EXIT_STATUS_TROUBLE,
    ));
}

#[test]
fn test_tool_error_is_fatal() {
    let f1 = fixture_path("f1.txt");
    let f2 = fixture_path("f2.txt");

    run_test_with_checker(
        plan(
            &["--diff-option=--no-such-diff-option", &f1, &f2],
            "",
            "",
            "",
            EXIT_STATUS_TROUBLE,
        ),
        |_, output| {
            let stderr = String::from_utf8_lossy(&output.stderr);

            assert!(output.stdout.is_empty());
            assert!(stderr.starts_with("diff2html: "));
            assert!(stderr.contains("no-such-diff-option"));
            assert_eq!(output.status.code(), Some(EXIT_STATUS_TROUBLE));
        },
    );
}

#[test]
fn test_diff_program_from_environment() {
    let f1 = fixture_path("f1.txt");
    let f2 = fixture_path("f2.txt");

    run_test_with_checker_and_env(
        plan(&[&f1, &f2], "", "", "", EXIT_STATUS_TROUBLE),
        &[("DIFF2HTML_DIFF", "/nonexistent/diff")],
        |_, output| {
            let stderr = String::from_utf8_lossy(&output.stderr);

            assert!(output.stdout.is_empty());
            assert!(stderr.starts_with("diff2html: /nonexistent/diff: "));
            assert_eq!(output.status.code(), Some(EXIT_STATUS_TROUBLE));
        },
    );
}
