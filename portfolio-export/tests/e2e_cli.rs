//! End-to-end tests for the portfolio-export binary.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn export() -> Command {
    cargo_bin_cmd!("portfolio-export")
}

const CUSTOM_CONTENT: &str = r##"
title = "Custom Portfolio"

[brand]
logo_src = "/logo.svg"
logo_alt = "Custom Logo"

[[nav]]
label = "Work"
anchor = "#projects"

[hero]
greeting = "Hello"
role = "Engineer"
bio = "Builds things."

[[projects]]
id = 7
title = "Only Project"
description = "The single card"
image_src = "/only.jpg"
icon = "users"
accent = "pink"

[about]
heading = "About"
body = "Short."
skills = ["Rust"]

[footer]
copyright = "(c) Custom"
"##;

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        export()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("--out"))
            .stdout(predicate::str::contains("--content"))
            .stdout(predicate::str::contains("--assets"));
    }

    #[test]
    fn shows_version() {
        export()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}

mod exporting {
    use super::*;

    #[test]
    fn writes_index_html_from_embedded_content() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("site");

        export()
            .arg("--out")
            .arg(&out)
            .assert()
            .success()
            .stdout(predicate::str::contains("index.html"));

        let html = fs::read_to_string(out.join("index.html")).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("AI Customer Service"));
        assert!(html.contains("Female Friendly Iterations"));
        assert!(html.contains("Microsoft Cortana"));
    }

    #[test]
    fn renders_content_override() {
        let dir = TempDir::new().unwrap();
        let content = dir.path().join("site.toml");
        fs::write(&content, CUSTOM_CONTENT).unwrap();

        export()
            .arg("--out")
            .arg(dir.path())
            .arg("--content")
            .arg(&content)
            .assert()
            .success();

        let html = fs::read_to_string(dir.path().join("index.html")).unwrap();
        assert!(html.contains("Only Project"));
        assert!(!html.contains("Microsoft Cortana"));
        assert_eq!(html.matches("data-project-id=").count(), 1);
    }

    #[test]
    fn rejects_invalid_content() {
        let dir = TempDir::new().unwrap();
        let content = dir.path().join("site.toml");
        fs::write(&content, CUSTOM_CONTENT.replace("#projects", "#blog")).unwrap();

        export()
            .arg("--out")
            .arg(dir.path().join("site"))
            .arg("--content")
            .arg(&content)
            .assert()
            .failure()
            .stderr(predicate::str::contains("#blog"));

        assert!(!dir.path().join("site").exists());
    }

    #[test]
    fn fails_on_unreadable_content_path() {
        let dir = TempDir::new().unwrap();

        export()
            .arg("--out")
            .arg(dir.path())
            .arg("--content")
            .arg(dir.path().join("missing.toml"))
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to read content file"));
    }

    #[test]
    fn warns_about_missing_assets_but_succeeds() {
        let dir = TempDir::new().unwrap();
        let assets = dir.path().join("public");
        fs::create_dir_all(&assets).unwrap();
        fs::write(assets.join("mu-logo.png"), b"png").unwrap();

        export()
            .arg("--out")
            .arg(dir.path().join("dist"))
            .arg("--assets")
            .arg(&assets)
            .assert()
            .success()
            .stderr(predicate::str::contains("referenced image not found"))
            .stderr(predicate::str::contains("/cortana.jpg"))
            .stderr(predicate::str::contains("mu-logo.png").not());

        assert!(dir.path().join("dist/index.html").is_file());
    }
}
