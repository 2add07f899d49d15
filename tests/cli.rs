//! End-to-end tests driving the `simple-folio` binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_simple-folio"))
        .current_dir(dir)
        .args(args)
        .output()
        .expect("failed to run simple-folio")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn write_config(dir: &Path, toml: &str) {
    fs::write(dir.join("folio.toml"), toml).unwrap();
}

fn skills_section(html: &str) -> &str {
    let start = html.find(r#"<section id="skills""#).expect("skills section");
    let end = start + html[start..].find("</section>").expect("end of skills section");
    &html[start..end]
}

#[test]
fn export_end_to_end() {
    let tmp = TempDir::new().unwrap();
    write_config(
        tmp.path(),
        r#"
[profile]
name = "Ada Lovelace"
skills = "Math, Computing"
"#,
    );

    let output = run(tmp.path(), &["export"]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert!(stdout(&output).contains("Exported ada-lovelace-portfolio.html"));

    let html = fs::read_to_string(tmp.path().join("dist/ada-lovelace-portfolio.html")).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Ada Lovelace's Portfolio</title>"));

    let skills = skills_section(&html);
    assert_eq!(skills.matches(r#"<li class="skill-tag">"#).count(), 2);
    let math = skills.find(">Math<").unwrap();
    let computing = skills.find(">Computing<").unwrap();
    assert!(math < computing);

    assert!(html.contains("yourname@example.com"));
    assert!(html.contains("LinkedIn Profile"));
    assert!(html.contains("GitHub Profile"));
    assert!(html.contains("new IntersectionObserver"));
}

#[test]
fn export_without_config_uses_fallbacks() {
    let tmp = TempDir::new().unwrap();
    let output = run(tmp.path(), &["export", "--output", "out"]);
    assert!(output.status.success());

    let html = fs::read_to_string(tmp.path().join("out/portfolio-portfolio.html")).unwrap();
    assert!(html.contains("<title>Portfolio's Portfolio</title>"));
    assert!(html.contains("Your Name"));
    assert!(html.contains("Skills will appear here..."));
}

#[test]
fn set_overrides_config() {
    let tmp = TempDir::new().unwrap();
    write_config(
        tmp.path(),
        r#"
[profile]
name = "Ada"
title = "Analyst"
"#,
    );

    let output = run(tmp.path(), &["render", "--set", "name=Jane Q. Public"]);
    assert!(output.status.success());
    let html = stdout(&output);
    assert!(html.contains("<h1>Jane Q. Public</h1>"));
    assert!(html.contains("<p>Analyst</p>"));

    let output = run(tmp.path(), &["export", "--set", "name=Jane Q. Public"]);
    assert!(output.status.success());
    assert!(tmp.path().join("dist/jane-q.-public-portfolio.html").exists());
}

#[test]
fn image_upload_is_embedded() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("me.gif"), b"GIF89a").unwrap();

    let output = run(
        tmp.path(),
        &["render", "--image", "me.gif", "--set", "image_url=https://me.dev/me.jpg"],
    );
    assert!(output.status.success());
    let html = stdout(&output);
    assert!(html.contains(r#"src="data:image/gif;base64,R0lGODlh""#));
    assert!(!html.contains("https://me.dev/me.jpg"));
}

#[test]
fn non_image_upload_is_ignored() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("notes.txt"), b"hello").unwrap();

    let output = run(tmp.path(), &["render", "--image", "notes.txt"]);
    assert!(output.status.success());
    let html = stdout(&output);
    assert!(html.contains(r#"src="https://via.placeholder.com/150""#));
}

#[test]
fn missing_image_is_error() {
    let tmp = TempDir::new().unwrap();
    let output = run(tmp.path(), &["render", "--image", "missing.png"]);
    assert!(!output.status.success());
}

#[test]
fn unknown_field_is_rejected() {
    let tmp = TempDir::new().unwrap();
    let output = run(tmp.path(), &["render", "--set", "nickname=Ada"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("nickname"));
}

#[test]
fn invalid_config_is_error() {
    let tmp = TempDir::new().unwrap();
    write_config(tmp.path(), "[colors]\naccent = \"\"\n");
    let output = run(tmp.path(), &["export"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("colors.accent"));
}

#[test]
fn check_json_lists_fields() {
    let tmp = TempDir::new().unwrap();
    let output = run(tmp.path(), &["check", "--json", "--set", "skills=A, B,,  C ,"]);
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["skills_raw"], "A, B,,  C ,");
    assert_eq!(value["name"], "");
}

#[test]
fn check_marks_fallbacks() {
    let tmp = TempDir::new().unwrap();
    let output = run(tmp.path(), &["check", "--set", "email=ada@example.org"]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("Name: Your Name (empty)"));
    assert!(out.contains("Email: ada@example.org"));
}

#[test]
fn preview_writes_preview_file() {
    let tmp = TempDir::new().unwrap();
    let output = run(tmp.path(), &["preview", "--set", "name=Ada"]);
    assert!(output.status.success());
    let html = fs::read_to_string(tmp.path().join("dist/preview.html")).unwrap();
    assert!(html.contains("<h1>Ada</h1>"));
}

#[test]
fn gen_config_round_trips() {
    let tmp = TempDir::new().unwrap();
    let output = run(tmp.path(), &["gen-config"]);
    assert!(output.status.success());
    write_config(tmp.path(), &stdout(&output));

    let output = run(tmp.path(), &["export"]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert!(tmp.path().join("dist/portfolio-portfolio.html").exists());
}
