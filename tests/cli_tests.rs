//! Tests for the token listing binary.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn houselang() -> Command {
    Command::cargo_bin("houselang").unwrap()
}

#[test]
fn test_lists_tokens_of_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "beam num = 50 + 20;").unwrap();

    houselang()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Type: TOK_BEAM"))
        .stdout(predicate::str::contains("Lexeme: '50'"))
        .stdout(predicate::str::contains("Type: TOK_EOF"))
        .stdout(predicate::str::contains("(Line: 2)"));
}

#[test]
fn test_lists_inline_source() {
    houselang()
        .args(["--eval", "a-5;"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Type: NUMBER               Lexeme: '-5'"));
}

#[test]
fn test_reports_unknown_characters() {
    houselang()
        .args(["--eval", "tile x = 1 | 2;"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Type: TOK_UNKNOWN"))
        .stderr(predicate::str::contains("Error: UnrecognisedToken"));
}

#[test]
fn test_strict_mode_fails_on_diagnostics() {
    houselang()
        .args(["--strict", "--eval", "tile x = @;"])
        .assert()
        .failure();

    houselang()
        .args(["--strict", "--eval", "tile x = 1;"])
        .assert()
        .success();
}

#[test]
fn test_max_lexeme_len_flag() {
    houselang()
        .args(["--max-lexeme-len", "4", "--eval", "blueprint"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Type: TOK_BLUEPRINT        Lexeme: 'blue'"))
        .stderr(predicate::str::contains("LexemeTruncated"));

    houselang()
        .args(["--max-lexeme-len", "0", "--eval", "x"])
        .assert()
        .failure();
}

#[test]
fn test_missing_input() {
    houselang().assert().failure();

    houselang()
        .arg("/definitely/not/here.house")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read source file"));
}
