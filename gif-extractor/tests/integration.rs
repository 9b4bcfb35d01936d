use std::{
    fs,
    io::Write,
    path::Path,
    process::{Command, Output, Stdio},
};

const SCENARIO: &str = concat!(
    "A - - \"GET /path/to/file.gif HTTP/1.0\" 1 200\n",
    "A - - \"GET /path/to/file.gif HTTP/1.0\" 1 200\n",
    "A - - \"GET /other/pic.GIF HTTP/1.0\" 1 200\n",
    "A - - \"GET /x/doc.txt HTTP/1.0\" 1 200\n",
    "A - - \"GET /y/bad.gif HTTP/1.0\" 1 404\n",
    "A - - \"POST /z/skip.gif HTTP/1.0\" 1 200\n",
);

fn run_with_arg(dir: &Path, input: &str) -> Output {
    Command::new(env!("CARGO_BIN_EXE_gif-extractor"))
        .arg(input)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run gif-extractor")
}

fn sorted_lines(path: &Path) -> Vec<String> {
    let mut lines: Vec<String> = fs::read_to_string(path)
        .expect("output file missing")
        .lines()
        .map(String::from)
        .collect();
    lines.sort();
    lines
}

#[test]
fn writes_unique_gifs_and_reports_mismatch() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("requests.txt"), SCENARIO).unwrap();

    let output = run_with_arg(dir.path(), "requests.txt");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("Results are different between the approaches:"));
    assert!(stdout.contains("Field-based approach: {file.gif, pic.GIF}"));
    assert!(stdout.contains("Positional approach: {file.gif, pic.GIF, skip.gif}"));

    assert_eq!(
        sorted_lines(&dir.path().join("gif_requests.txt")),
        vec!["file.gif", "pic.GIF"]
    );
}

#[test]
fn reads_file_name_from_stdin() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("gets.txt"),
        "A - - \"GET /a/one.gif HTTP/1.0\" 1 200\nA - - \"GET /b/two.jpg HTTP/1.0\" 1 200\n",
    )
    .unwrap();

    let mut child = Command::new(env!("CARGO_BIN_EXE_gif-extractor"))
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("Failed to start gif-extractor");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"gets.txt\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout.trim_end(),
        "Results are the same for the field-based and positional approaches"
    );
    assert_eq!(sorted_lines(&dir.path().join("gif_gets.txt")), vec!["one.gif"]);
}

#[test]
fn missing_input_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_with_arg(dir.path(), "nope.txt");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("nope.txt"));
    assert!(!dir.path().join("gif_nope.txt").exists());
}

#[test]
fn malformed_line_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("bad.txt"),
        "A - - \"GET /a/one.gif HTTP/1.0\" 1 200\nA - - \"GET /a/two.gif HTTP/1.0\" 1 OK\n",
    )
    .unwrap();

    let output = run_with_arg(dir.path(), "bad.txt");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("NonNumericStatus"));
    assert!(!dir.path().join("gif_bad.txt").exists());
}
