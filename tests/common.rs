#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn lc() -> Command {
    cargo_bin_cmd!("lessoncard")
}

/// Unique config path inside the system temp dir, removed if present
pub fn setup_test_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_lessoncard.conf", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Temporary output file path inside tempdir, removed if present
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write `content` to a fresh temp input file and return its path
pub fn write_input(name: &str, ext: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_in.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::write(&p, content).expect("write input file");
    p
}

/// A month of lessons as a .NET producer serializes them
pub const CARD_JSON: &str = r#"[
  {"date":"2024-03-01T00:00:00","attended":true,"replaced":false,"replacementDate":null},
  {"date":"2024-03-08T00:00:00","attended":false,"replaced":true,"replacementDate":"2024-03-09T00:00:00"},
  {"date":"2024-03-15T00:00:00","attended":false,"replaced":false,"replacementDate":"2024-03-16T00:00:00"},
  {"date":"0001-01-01T00:00:00","attended":false,"replaced":false,"replacementDate":null}
]"#;

pub const CARD_CSV: &str = "date,attended,replaced,replacementDate
2024-03-01,true,false,
2024-03-08,false,true,2024-03-09
0001-01-01,false,false,
";

/// Second row is replaced without a replacement date
pub const BROKEN_CSV: &str = "date,attended,replaced,replacementDate
2024-03-01,true,false,
2024-03-08,true,true,
";
