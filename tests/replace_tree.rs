use std::fs;
use std::path::Path;

use rebrand::defaults::builtin_config;
use rebrand::replacer::{run, run_to, RunOptions};
use rebrand::{CaseRule, RebrandConfig, Replacement};

fn write(root: &Path, rel: &str, content: &[u8]) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn read(root: &Path, rel: &str) -> String {
    fs::read_to_string(root.join(rel)).unwrap()
}

fn seed_project(root: &Path) {
    write(root, "about.md", "Welcome to IRA Sathi".as_bytes());
    write(root, "readme.txt", "hello world".as_bytes());
    write(
        root,
        "src/App.jsx",
        "<h1>ira sathi</h1>\n<img src=\"/logo.png\" alt=\"IRA-SATHI\" />\n".as_bytes(),
    );
    write(root, "src/i18n/hi.json", r#"{"title":"ईरा साथी","id":"ईरा आईडी"}"#.as_bytes());
    write(root, "public/index.html", "<title>IRASATHI | IRA ID</title>".as_bytes());
    write(root, ".git/HEAD.txt", "IRA Sathi".as_bytes());
    write(root, "node_modules/lib/index.js", "IRA Sathi".as_bytes());
    write(root, "web/build/out.js", "IRA Sathi".as_bytes());
    write(root, "rename_project.py", "IRA Sathi".as_bytes());
    write(root, "scripts/rename_project.py", "IRA Sathi".as_bytes());
    write(root, "src/main.rs", "IRA Sathi".as_bytes());
}

#[test]
fn rewrites_eligible_files_only() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    seed_project(root);

    let report = run(root, &builtin_config(), &RunOptions::default()).unwrap();

    assert_eq!(read(root, "about.md"), "Welcome to Satpura Bio");
    assert_eq!(read(root, "readme.txt"), "hello world");
    assert_eq!(
        read(root, "src/App.jsx"),
        "<h1>Satpura Bio</h1>\n<img src=\"/assets/Satpura-1.webp\" alt=\"SATPURA-BIO\" />\n"
    );
    assert_eq!(
        read(root, "src/i18n/hi.json"),
        r#"{"title":"सतपुड़ा बायो","id":"सतपुड़ा आईडी"}"#
    );
    assert_eq!(read(root, "public/index.html"), "<title>SATPURABIO | Satpura ID</title>");

    for untouched in [
        ".git/HEAD.txt",
        "node_modules/lib/index.js",
        "web/build/out.js",
        "rename_project.py",
        "scripts/rename_project.py",
        "src/main.rs",
    ] {
        assert_eq!(read(root, untouched), "IRA Sathi", "{} was modified", untouched);
    }

    let mut updated: Vec<String> = report
        .updated
        .iter()
        .map(|u| {
            Path::new(&u.path)
                .strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect();
    updated.sort();
    assert_eq!(
        updated,
        vec!["about.md", "public/index.html", "src/App.jsx", "src/i18n/hi.json"]
    );
    assert!(report.errors.is_empty());
}

#[test]
fn no_case_insensitive_key_survives() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    seed_project(root);

    run(root, &builtin_config(), &RunOptions::default()).unwrap();

    for rel in ["about.md", "src/App.jsx", "public/index.html"] {
        let content = read(root, rel).to_lowercase();
        for key in ["ira sathi", "ira-sathi", "irasathi", "ira id", "/logo.png"] {
            assert!(!content.contains(key), "{} still contains {}", rel, key);
        }
    }
}

#[test]
fn second_run_changes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    seed_project(root);

    let first = run(root, &builtin_config(), &RunOptions::default()).unwrap();
    let second = run(root, &builtin_config(), &RunOptions::default()).unwrap();

    assert!(!first.updated.is_empty());
    assert!(second.updated.is_empty());
    assert_eq!(first.files_scanned, second.files_scanned);
}

#[test]
fn undecodable_file_reports_once_and_run_continues() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    let garbage = [0xc3u8, 0x28, b'I', b'R', b'A'];
    write(root, "a/broken.txt", &garbage);
    write(root, "b/ok.md", "IRA Partner".as_bytes());

    let report = run(root, &builtin_config(), &RunOptions::default()).unwrap();

    assert_eq!(report.errors.len(), 1);
    assert!(report.errors[0].path.ends_with("broken.txt"));
    assert_eq!(fs::read(root.join("a/broken.txt")).unwrap(), garbage);
    assert_eq!(read(root, "b/ok.md"), "Satpura Bio Partner");
}

#[test]
fn dry_run_reports_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    seed_project(root);

    let options = RunOptions { dry_run: true };
    let report = run(root, &builtin_config(), &options).unwrap();

    assert!(report.dry_run);
    assert_eq!(report.updated.len(), 4);
    assert_eq!(read(root, "about.md"), "Welcome to IRA Sathi");
}

#[test]
fn custom_config_controls_table_and_filters() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(root, "lib.rs", "Acme acme".as_bytes());
    write(root, "notes.md", "Acme".as_bytes());
    write(root, "vendor/x.rs", "Acme".as_bytes());

    let config = RebrandConfig {
        replacements: vec![Replacement::new("Acme", "Globex", CaseRule::Exact)],
        exclude_dirs: vec!["vendor".to_string()],
        exclude_files: Vec::new(),
        extensions: vec![".rs".to_string()],
    };

    let report = run(root, &config, &RunOptions::default()).unwrap();

    assert_eq!(report.updated.len(), 1);
    assert_eq!(read(root, "lib.rs"), "Globex acme");
    assert_eq!(read(root, "notes.md"), "Acme");
    assert_eq!(read(root, "vendor/x.rs"), "Acme");
}

#[test]
fn progress_lines_name_updated_and_failed_files() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(root, "about.md", "Welcome to IRA Sathi".as_bytes());
    write(root, "readme.txt", "hello world".as_bytes());
    write(root, "data.json", &[0xff, 0xfe, 0xfd]);

    let mut out = Vec::new();
    let report = run_to(root, &builtin_config(), &RunOptions::default(), &mut out).unwrap();
    let out = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], format!("Updated: {}", root.join("about.md").display()));
    assert!(lines[1].starts_with(&format!("Error processing {}: ", root.join("data.json").display())));
    assert!(!out.contains("readme.txt"));
    assert_eq!(report.errors.len(), 1);
}

#[test]
fn dry_run_progress_says_would_update() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(root, "about.md", "Welcome to IRA Sathi".as_bytes());

    let mut out = Vec::new();
    run_to(root, &builtin_config(), &RunOptions { dry_run: true }, &mut out).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        format!("Would update: {}\n", root.join("about.md").display())
    );
}

#[cfg(unix)]
#[test]
fn dangling_symlink_is_reported_as_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    std::os::unix::fs::symlink(root.join("missing.md"), root.join("dangling.md")).unwrap();
    write(root, "about.md", "IRA Sathi".as_bytes());

    let report = run(root, &builtin_config(), &RunOptions::default()).unwrap();

    assert_eq!(report.files_scanned, 2);
    assert_eq!(report.errors.len(), 1);
    assert!(report.errors[0].path.ends_with("dangling.md"));
    assert_eq!(report.errors[0].code, "internal.io_error");
    assert_eq!(read(root, "about.md"), "Satpura Bio");
}
