use std::path::Path;
use std::process::Command;

fn sheetfill() -> Command {
    Command::new(env!("CARGO_BIN_EXE_sheetfill"))
}

fn write_names_csv(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("namen.csv");
    std::fs::write(&path, "Voornaam,Achternaam\nJan,Jansen\nEva,de Boer\n").unwrap();
    path
}

#[test]
fn info_lists_rows_and_columns() {
    let dir = tempfile::tempdir().unwrap();
    let csv = write_names_csv(dir.path());

    let out = sheetfill()
        .args(["--file", csv.to_str().unwrap(), "info"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("Rows: 2"));
    assert!(stdout.contains("Voornaam, Achternaam"));
}

#[test]
fn fill_writes_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let csv = write_names_csv(dir.path());
    let out_path = dir.path().join("uit.csv");

    let out = sheetfill()
        .args([
            "--file",
            csv.to_str().unwrap(),
            "fill",
            "--target",
            "VolledigeNaam",
            "--source",
            "Voornaam",
            "--source",
            "Achternaam",
            "--template",
            "{Voornaam} {Achternaam}",
            "--output",
            out_path.to_str().unwrap(),
        ])
        .output()
        .unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("2 rows"));

    let written = std::fs::read_to_string(&out_path).unwrap();
    assert!(written.contains("Jan Jansen"));
    assert!(written.contains("Eva de Boer"));
    // Input untouched without --save.
    let input = std::fs::read_to_string(&csv).unwrap();
    assert!(!input.contains("VolledigeNaam"));
}

#[test]
fn fill_without_save_does_not_persist() {
    let dir = tempfile::tempdir().unwrap();
    let csv = write_names_csv(dir.path());

    let out = sheetfill()
        .args([
            "--file",
            csv.to_str().unwrap(),
            "fill",
            "--target",
            "V",
            "--source",
            "Voornaam",
            "--template",
            "{Voornaam}",
        ])
        .output()
        .unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("not saved"));
}

#[test]
fn run_executes_a_workflow_file_with_progress() {
    let dir = tempfile::tempdir().unwrap();
    let csv = write_names_csv(dir.path());
    let wf = dir.path().join("wf.json");
    std::fs::write(
        &wf,
        r#"{
          "name": "namen",
          "actions": [
            { "kind": "fill-column", "target": "V1", "sources": ["Voornaam"], "template": "{Voornaam}" },
            { "kind": "fill-column", "target": "V2", "sources": ["V1", "Achternaam"], "template": "{V1} {Achternaam}" }
          ]
        }"#,
    )
    .unwrap();

    let out = sheetfill()
        .args([
            "--file",
            csv.to_str().unwrap(),
            "run",
            "--workflow",
            wf.to_str().unwrap(),
            "--save",
        ])
        .output()
        .unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("50.0%"));
    assert!(stdout.contains("100.0%"));

    let saved = std::fs::read_to_string(&csv).unwrap();
    assert!(saved.contains("Jan Jansen"));
}

#[test]
fn bad_range_fails_with_a_message() {
    let dir = tempfile::tempdir().unwrap();
    let csv = write_names_csv(dir.path());

    let out = sheetfill()
        .args([
            "--file",
            csv.to_str().unwrap(),
            "fill",
            "--target",
            "V",
            "--source",
            "Voornaam",
            "--template",
            "{Voornaam}",
            "--rows",
            "0-3",
        ])
        .output()
        .unwrap();
    assert!(!out.status.success());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("1-based"));
}

#[test]
fn unknown_source_column_fails() {
    let dir = tempfile::tempdir().unwrap();
    let csv = write_names_csv(dir.path());

    let out = sheetfill()
        .args([
            "--file",
            csv.to_str().unwrap(),
            "fill",
            "--target",
            "V",
            "--source",
            "Tussenvoegsel",
            "--template",
            "{Tussenvoegsel}",
        ])
        .output()
        .unwrap();
    assert!(!out.status.success());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("Tussenvoegsel"));
}
