use std::fs;
use std::path::Path;

use ippcode::parsing;

#[test]
fn ensure_samples_parse() {
    let dir = Path::new("tests/samples/");

    assert!(dir.exists(), "samples directory missing");

    let entries = fs::read_dir(dir).expect("Failed to read samples directory");

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.expect("Failed to read directory entry");
        let path = entry.path();

        if path
            .extension()
            .and_then(|s| s.to_str())
            == Some("src")
        {
            files.push(path);
        }
    }

    assert!(!files.is_empty(), "No .src files found in samples directory");

    let mut failures = Vec::new();

    for file in &files {
        let handle = fs::File::open(file)
            .unwrap_or_else(|e| panic!("Failed to open file {:?}: {:?}", file, e));
        let content = parsing::load(handle)
            .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", file, e));

        match parsing::parse(&content) {
            Ok(document) => {
                // order numbers run 1..N without gaps
                for (i, instruction) in document
                    .iter()
                    .enumerate()
                {
                    assert_eq!(instruction.order, i + 1, "in {:?}", file);
                }
            }
            Err(e) => {
                println!("File {:?} failed to parse: {:?}", file, e);
                failures.push(file.clone());
            }
        }
    }

    if !failures.is_empty() {
        panic!(
            "Sample files should parse successfully, but {} files failed",
            failures.len()
        );
    }
}
