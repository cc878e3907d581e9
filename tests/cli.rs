use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_temp(contents: &str) -> NamedTempFile {
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(contents.as_bytes()).unwrap();
    f.flush().unwrap();
    f
}

fn bin() -> Command {
    let mut cmd = Command::cargo_bin("genome-matcher").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

const LIBRARY: &str = ">seq1\nACGTACGT\n>seq2\nTTTTACGA\n";

#[test]
fn search_reports_exact_hit() {
    let lib = write_temp(LIBRARY);
    bin()
        .args(["search", "-k", "4", "--exact"])
        .arg(lib.path())
        .arg("acgt")
        .assert()
        .success()
        .stdout(predicate::str::contains("fragment\tgenome\tposition\tlength"))
        .stdout(predicate::str::contains("ACGT\tseq1\t0\t4"))
        .stdout(predicate::str::contains("seq2").not());
}

#[test]
fn search_json_output() {
    let lib = write_temp(LIBRARY);
    let out = bin()
        .args(["search", "-k", "4", "--index-final-window", "--format", "json"])
        .arg(lib.path())
        .arg("ACGA")
        .output()
        .unwrap();
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let rows = v.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1]["genome_name"], "seq2");
    assert_eq!(rows[1]["position"], 4);
    assert_eq!(rows[1]["fragment"], "ACGA");
}

#[test]
fn search_skips_fragment_shorter_than_minimum() {
    let lib = write_temp(LIBRARY);
    bin()
        .args(["search", "-k", "4", "-m", "6"])
        .arg(lib.path())
        .arg("ACGT")
        .assert()
        .success()
        .stderr(predicate::str::contains("skipped"));
}

#[test]
fn malformed_library_is_rejected() {
    let lib = write_temp(">a\nACGT\n>b\n");
    bin()
        .args(["search", "-k", "4"])
        .arg(lib.path())
        .arg("ACGT")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot load genome library"));
}

#[test]
fn related_ranks_by_percent() {
    let lib = write_temp(">one\nAAAACCCCCGTTTTAG\n>two\nTTTTAGGGGGAGGGGAC\n");
    let queries = write_temp(">q\nAAAACCCCCGTTTTAGGGGATT\n");
    bin()
        .args(["related", "-k", "4", "-l", "5", "-p", "0", "--exact", "-t", "2"])
        .arg(lib.path())
        .arg(queries.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("q\tone\t75.00\nq\ttwo\t50.00"));
}

#[test]
fn related_rejects_chunk_below_k() {
    let lib = write_temp(LIBRARY);
    let queries = write_temp(">q\nACGTACGT\n");
    bin()
        .args(["related", "-k", "4", "-l", "3"])
        .arg(lib.path())
        .arg(queries.path())
        .assert()
        .failure();
}
