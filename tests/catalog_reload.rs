// tests/catalog_reload.rs
//
// File-backed catalog loading and mtime-based hot reload.

use std::path::PathBuf;
use std::{fs, io::Write, thread, time::Duration};

use cf_screening_engine::{load_catalog_file, HotReloadCatalog};

/// Create a unique temporary directory in std::env::temp_dir().
fn unique_tmp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    dir.push(format!("catalog_test_{}", nanos));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_catalog(path: &PathBuf, json: &str) {
    let mut f = fs::File::create(path).unwrap();
    write!(f, "{json}").unwrap();
    f.sync_all().unwrap();
}

#[test]
fn loads_and_hot_reloads() {
    let tmpdir = unique_tmp_dir();
    let path = tmpdir.join("symptoms.json");

    write_catalog(
        &path,
        r#"[{"code":"G01","category":"anxiety","weight":0.8,"text":"Sering khawatir"}]"#,
    );

    let hot = HotReloadCatalog::new(Some(&path));
    let c1 = hot.current();
    assert_eq!(c1.len(), 1);
    assert!((c1.weight_of("G01") - 0.8).abs() < 1e-12);

    // Ensure different mtime (Windows granularity can be coarse).
    thread::sleep(Duration::from_millis(1100));

    write_catalog(
        &path,
        r#"[
            {"code":"G01","category":"anxiety","weight":0.6},
            {"code":"G02","category":"emotional","weight":0.9}
        ]"#,
    );

    let c2 = hot.current();
    assert_eq!(c2.len(), 2);
    assert!((c2.weight_of("G01") - 0.6).abs() < 1e-12);

    // Cleanup (best-effort)
    let _ = fs::remove_file(&path);
    let _ = fs::remove_dir_all(&tmpdir);
}

#[test]
fn malformed_file_keeps_previous_snapshot() {
    let tmpdir = unique_tmp_dir();
    let path = tmpdir.join("symptoms.json");

    write_catalog(&path, r#"[{"code":"G01","category":"motivation","weight":0.7}]"#);
    let hot = HotReloadCatalog::new(Some(&path));
    assert_eq!(hot.current().len(), 1);

    thread::sleep(Duration::from_millis(1100));
    write_catalog(&path, "not json at all");

    // Reload attempt fails; the old snapshot stays in service.
    assert_eq!(hot.current().len(), 1);

    let _ = fs::remove_file(&path);
    let _ = fs::remove_dir_all(&tmpdir);
}

#[test]
fn missing_file_yields_empty_catalog() {
    let hot = HotReloadCatalog::new(Some(&PathBuf::from("/nonexistent/symptoms.json")));
    assert!(hot.current().is_empty());
}

#[test]
fn load_catalog_file_reports_errors() {
    assert!(load_catalog_file(std::path::Path::new("/nonexistent/symptoms.json")).is_err());
}
