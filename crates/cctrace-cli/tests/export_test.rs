
use fixtures::TestFixture;
use predicates::prelude::*;
use std::fs;

#[test]
fn test_export_writes_compilation_database() {
    let fixture = TestFixture::new();
    let root = fixture.make_root("proj");
    fixture.seed_under(&root, "a.c", "cc -c a.c -o a.o");
    fixture.seed_under(&root, "b.c", "cc -c b.c -o b.o");

    fixture.command().arg("export").arg(&root).assert().success();

    let raw = fs::read_to_string(root.join("compile_commands.json"))
        .expect("export must create compile_commands.json");
    let parsed: serde_json::Value = serde_json::from_str(&raw).expect("valid JSON");

    let entries = parsed.as_array().expect("top level is an array");
    assert_eq!(entries.len(), 2);
    for entry in entries {
        let object = entry.as_object().expect("array of objects");
        assert_eq!(object.len(), 3);
        assert!(object.contains_key("directory"));
        assert!(object.contains_key("command"));
        assert!(object.contains_key("file"));
        assert_eq!(object["directory"], root.to_string_lossy().as_ref());
    }

    // Key order is part of the clang convention.
    let directory = raw.find("\"directory\"").unwrap();
    let command = raw.find("\"command\"").unwrap();
    let file = raw.find("\"file\"").unwrap();
    assert!(directory < command && command < file);
}

#[test]
fn test_export_values_come_from_records() {
    let fixture = TestFixture::new();
    let root = fixture.make_root("proj");
    fixture.seed_under(&root, "main.cpp", "g++ -std=c++17 -c main.cpp -o main.o");

    fixture.command().arg("export").arg(&root).assert().success();

    let raw = fs::read_to_string(root.join("compile_commands.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let entry = &parsed.as_array().unwrap()[0];

    assert_eq!(entry["command"], "g++ -std=c++17 -c main.cpp -o main.o");
    assert_eq!(
        entry["file"],
        root.join("main.cpp").to_string_lossy().as_ref()
    );
}

#[test]
fn test_export_zero_matches_creates_no_file() {
    let fixture = TestFixture::new();
    let recorded = fixture.make_root("recorded");
    let empty = fixture.make_root("empty");
    fixture.seed_under(&recorded, "a.c", "cc -c a.c");

    fixture
        .command()
        .arg("export")
        .arg(&empty)
        .assert()
        .success()
        .stderr(predicate::str::contains("no records"));

    assert!(!empty.join("compile_commands.json").exists());
}

#[test]
fn test_export_handles_each_root_independently() {
    let fixture = TestFixture::new();
    let first = fixture.make_root("first");
    let second = fixture.make_root("second");
    fixture.seed_under(&first, "a.c", "cc -c a.c");

    fixture
        .command()
        .arg("export")
        .arg(&first)
        .arg(&second)
        .assert()
        .success();

    assert!(first.join("compile_commands.json").exists());
    assert!(!second.join("compile_commands.json").exists());
}

#[test]
fn test_export_failure_is_distinct_from_no_matches() {
    let fixture = TestFixture::new();
    let present = fixture.make_root("present");
    fixture.seed_under(&present, "a.c", "cc -c a.c");

    // Records exist under this root, but the directory itself does not, so
    // writing the database must fail.
    let ghost = fixture.store_path().parent().unwrap().join("ghost");
    fixture.seed_under(&ghost, "g.c", "cc -c g.c");

    fixture
        .command()
        .arg("export")
        .arg(&ghost)
        .arg(&present)
        .assert()
        .failure()
        .stderr(predicate::str::contains("FAIL"));

    // The failing root must not stop the remaining roots.
    assert!(present.join("compile_commands.json").exists());
}

#[test]
fn test_export_requires_store_configuration() {
    let fixture = TestFixture::new();
    let root = fixture.make_root("proj");

    fixture
        .bare_command()
        .arg("export")
        .arg(&root)
        .assert()
        .failure()
        .stderr(predicate::str::contains("CCTRACE_DB"));
}

#[test]
fn test_export_reads_store_from_environment() {
    let fixture = TestFixture::new();
    let root = fixture.make_root("proj");
    fixture.seed_under(&root, "a.c", "cc -c a.c");

    fixture
        .bare_command()
        .env("CCTRACE_DB", fixture.store_path())
        .arg("export")
        .arg(&root)
        .assert()
        .success();

    assert!(root.join("compile_commands.json").exists());
}

#[test]
fn test_reexport_overwrites_previous_database() {
    let fixture = TestFixture::new();
    let root = fixture.make_root("proj");
    fixture.seed_under(&root, "a.c", "cc -c a.c");

    fixture.command().arg("export").arg(&root).assert().success();
    fixture.seed_under(&root, "a.c", "cc -Wall -c a.c");
    fixture.command().arg("export").arg(&root).assert().success();

    let raw = fs::read_to_string(root.join("compile_commands.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let entries = parsed.as_array().unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["command"], "cc -Wall -c a.c");
}
