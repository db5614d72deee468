use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn monkey() -> Command {
    let mut cmd = Command::cargo_bin("monkey").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn run_expression_prints_final_value() {
    monkey()
        .args(["run", "--expr", "len([1, 2, 3])"])
        .assert()
        .success()
        .stdout("3\n");
}

#[test]
fn run_puts_writes_each_argument_on_its_own_line() {
    monkey()
        .args(["run", "-e", "puts(1, \"a\", [1, \"b\"])"])
        .assert()
        .success()
        .stdout("1\na\n[1, b]\n");
}

#[test]
fn run_file_keeps_original_array_after_push() {
    let mut script = NamedTempFile::new().unwrap();
    writeln!(script, "let a = [1, 2];").unwrap();
    writeln!(script, "let b = push(a, 3);").unwrap();
    writeln!(script, "puts(a, b, rest(b), rest([]))").unwrap();

    monkey()
        .arg("run")
        .arg(script.path())
        .assert()
        .success()
        .stdout("[1, 2]\n[1, 2, 3]\n[2, 3]\nnull\n");
}

#[test]
fn run_reports_error_values_and_fails() {
    monkey()
        .args(["run", "-e", "len(5)"])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains(
            "ERROR: argument to `len` not supported, got INTEGER",
        ));
}

#[test]
fn run_reports_arity_errors() {
    monkey()
        .args(["run", "-e", "first()"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "wrong number of arguments. got=0, want=1",
        ));
}

#[test]
fn run_reports_parse_errors() {
    monkey()
        .args(["run", "-e", "len(]"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected input"));
}

#[test]
fn run_missing_file_fails_with_context() {
    monkey()
        .args(["run", "/definitely/not/here.monkey"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn repl_without_terminal_evaluates_piped_lines() {
    monkey()
        .args(["--no-history", "repl"])
        .write_stdin("let a = [1, 2, 3]\nfirst(a)\nlast(\"abc\")\n.exit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Hello! This is the Monkey programming language!",
        ))
        .stdout(predicate::str::contains("1\n"))
        .stdout(predicate::str::contains("c\n"))
        .stdout(predicate::str::contains("Exiting."));
}

#[test]
fn no_history_wins_over_history_file_from_environment() {
    let dir = tempfile::tempdir().unwrap();
    let history = dir.path().join("history.txt");
    monkey()
        .env("MONKEY_HISTORY_FILE", &history)
        .arg("--no-history")
        .write_stdin("len([1, 2])\n.exit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("2\n"));
    assert!(!history.exists());
}
