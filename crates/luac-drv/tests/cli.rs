//! End-to-end CLI tests: drive the built `luac` binary against fixture
//! `.lua` programs, the way the scenarios in the language's testable
//! properties are phrased.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::Builder;

fn lua_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = Builder::new().suffix(".lua").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn missing_argument_exits_with_usage() {
    Command::cargo_bin("luac")
        .unwrap()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn wrong_extension_is_rejected() {
    let mut file = Builder::new().suffix(".txt").tempfile().unwrap();
    file.write_all(b"print(1)\n").unwrap();

    Command::cargo_bin("luac")
        .unwrap()
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains(".lua"));
}

#[test]
fn missing_file_is_reported() {
    Command::cargo_bin("luac")
        .unwrap()
        .arg("does_not_exist_12345.lua")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn prints_arithmetic_result() {
    let file = lua_file("local x = 2 + 3 * 4\nprint(x)\n");
    Command::cargo_bin("luac")
        .unwrap()
        .arg(file.path())
        .assert()
        .success()
        .stdout("14\n");
}

#[test]
fn while_loop_prints_each_iteration() {
    let file = lua_file("local i = 0\nwhile i < 3 do\nprint(i)\ni = i + 1\nend\n");
    Command::cargo_bin("luac")
        .unwrap()
        .arg(file.path())
        .assert()
        .success()
        .stdout("0\n1\n2\n");
}

#[test]
fn function_definition_and_call() {
    let file = lua_file("function add(a, b)\nreturn a + b\nend\nprint(add(2, 40))\n");
    Command::cargo_bin("luac")
        .unwrap()
        .arg(file.path())
        .assert()
        .success()
        .stdout("42\n");
}

#[test]
fn comments_are_stripped() {
    let file = lua_file("local x = 1 -- this is a comment\nprint(x)\n");
    Command::cargo_bin("luac")
        .unwrap()
        .arg(file.path())
        .assert()
        .success()
        .stdout("1\n");
}

#[test]
fn runtime_type_error_exits_nonzero() {
    let file = lua_file("local x = \"a\" + 1\nprint(x)\n");
    Command::cargo_bin("luac")
        .unwrap()
        .arg(file.path())
        .assert()
        .failure();
}

#[test]
fn syntax_error_exits_nonzero() {
    let file = lua_file("print(1\n");
    Command::cargo_bin("luac")
        .unwrap()
        .arg(file.path())
        .assert()
        .failure();
}

#[test]
fn dump_tokens_flag_does_not_evaluate() {
    let file = lua_file("print(1)\n");
    Command::cargo_bin("luac")
        .unwrap()
        .arg("--dump-tokens")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Print"));
}
