// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Integration tests for the `euler` binary

use assert_cmd::Command;
use predicates::prelude::*;

fn euler() -> Command {
    let mut cmd = Command::cargo_bin("euler").unwrap();
    cmd.env_remove("EULER_LOG").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_cli_help_flag() {
    euler()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"));
}

#[test]
fn test_list_prints_registry() {
    euler()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Multiples of 3 or 5"))
        .stdout(predicate::str::contains("Amicable chains"));
}

#[test]
fn test_solve_single_problem() {
    euler()
        .args(["solve", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("233168"))
        .stdout(predicate::str::contains("ok"));
}

#[test]
fn test_solve_several_problems_in_order() {
    euler()
        .args(["solve", "4", "2"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"(?s)906609.*4613732").unwrap());
}

#[test]
fn test_solve_unknown_problem_fails() {
    euler()
        .args(["solve", "9999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown problem: 9999"));
}

#[test]
fn test_solve_prints_known_problems_before_failing_on_unknown() {
    euler()
        .args(["solve", "1", "9999", "2"])
        .assert()
        .failure()
        .stdout(predicate::str::is_match(r"(?s)233168.*4613732").unwrap())
        .stderr(predicate::str::contains("Unknown problem: 9999"))
        .stderr(predicate::str::contains("Could not solve problem(s) 9999"));
}

#[test]
fn test_solve_without_ids_fails() {
    euler().arg("solve").assert().failure();
}

#[test]
fn test_verbose_logs_go_to_stderr() {
    euler()
        .args(["-vv", "solve", "6"])
        .assert()
        .success()
        .stdout(predicate::str::contains("25164150"))
        .stdout(predicate::str::contains("Solving problem").not())
        .stderr(predicate::str::contains("Solving problem"));
}

#[test]
fn test_rust_log_enables_logging() {
    euler()
        .env("RUST_LOG", "debug")
        .args(["solve", "6"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Solving problem"));
}

#[test]
fn test_euler_log_takes_precedence_over_rust_log() {
    euler()
        .env("EULER_LOG", "error")
        .env("RUST_LOG", "debug")
        .args(["solve", "6"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Solving problem").not());
}
