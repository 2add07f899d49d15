//! Standalone document export.
//!
//! Wraps the live fragment in a complete HTML document that works on its own:
//!
//! - the stylesheet is embedded (only the webfont is fetched remotely),
//! - the reveal logic is inlined as a script, since the exported file has no
//!   access to the code that drives the live preview,
//! - an uploaded profile image is already a `data:` URI inside the fragment.
//!
//! The fragment is taken verbatim. Exporting never re-renders.
//!
//! ## File naming
//!
//! The file is named after the profile: lower-cased, each run of whitespace
//! replaced by a single `-`, with `-portfolio.html` appended. Nothing else is
//! touched, so punctuation survives:
//!
//! ```text
//! "Ada Lovelace"    → ada-lovelace-portfolio.html
//! "Jane Q. Public"  → jane-q.-public-portfolio.html
//! ""                → portfolio-portfolio.html
//! ```

use crate::config::{self, SiteConfig};
use crate::fields::or_fallback;
use crate::reveal::{ObserverOptions, reveal_script};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const CSS_STATIC: &str = include_str!("../static/portfolio.css");

/// MIME type of exported documents.
pub const MIME_TYPE: &str = "text/html";

/// Stand-in for an empty name in the document title and file name.
pub const NAME_FALLBACK: &str = "Portfolio";

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A finished document, ready to be saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub filename: String,
    pub mime: &'static str,
    pub contents: String,
}

impl ExportedFile {
    /// Write the document into `dir` (created if missing), replacing any
    /// previous export with the same name.
    pub fn save(&self, dir: &Path) -> Result<PathBuf, ExportError> {
        let path = dir.join(&self.filename);
        let io_err = |source| ExportError::Io {
            path: path.clone(),
            source,
        };
        fs::create_dir_all(dir).map_err(io_err)?;
        fs::write(&path, &self.contents).map_err(io_err)?;
        tracing::info!(path = %path.display(), bytes = self.contents.len(), "exported portfolio");
        Ok(path)
    }
}

/// Full embedded stylesheet: webfont import, palette, fixed rules.
pub fn stylesheet(config: &SiteConfig) -> String {
    format!(
        "{}\n\n{}\n\n{}",
        config::generate_font_css(&config.fonts),
        config::generate_color_css(&config.colors),
        CSS_STATIC
    )
}

/// Document title for a profile name.
pub fn document_title(name: &str) -> String {
    format!("{}'s Portfolio", or_fallback(name, NAME_FALLBACK))
}

/// Filename-safe form of the profile name.
pub fn slug(name: &str) -> String {
    let base = or_fallback(name, NAME_FALLBACK).to_lowercase();
    let mut slug = String::with_capacity(base.len());
    let mut in_whitespace = false;
    for c in base.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
            }
            in_whitespace = true;
        } else {
            slug.push(c);
            in_whitespace = false;
        }
    }
    slug
}

/// Name of the exported file for a profile name.
pub fn export_filename(name: &str) -> String {
    format!("{}-portfolio.html", slug(name))
}

/// Wrap a rendered fragment in the standalone document shell.
pub fn export_document(fragment: &str, name: &str, config: &SiteConfig) -> Markup {
    let script = reveal_script(&ObserverOptions::default());
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (document_title(name)) }
                style { (PreEscaped(stylesheet(config))) }
            }
            body {
                (PreEscaped(fragment))
                script { (PreEscaped(script)) }
            }
        }
    }
}

/// Package a fragment as a downloadable file.
pub fn export(fragment: &str, name: &str, config: &SiteConfig) -> ExportedFile {
    ExportedFile {
        filename: export_filename(name),
        mime: MIME_TYPE,
        contents: export_document(fragment, name, config).into_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn filename_lowercases_and_hyphenates() {
        assert_eq!(export_filename("Ada Lovelace"), "ada-lovelace-portfolio.html");
    }

    #[test]
    fn filename_keeps_punctuation() {
        assert_eq!(export_filename("Jane Q. Public"), "jane-q.-public-portfolio.html");
        assert_eq!(export_filename("O'Brien, Pat"), "o'brien,-pat-portfolio.html");
    }

    #[test]
    fn filename_collapses_whitespace_runs() {
        assert_eq!(export_filename("Ada \t  Lovelace"), "ada-lovelace-portfolio.html");
        assert_eq!(export_filename("Ada\nLovelace"), "ada-lovelace-portfolio.html");
    }

    #[test]
    fn filename_keeps_edge_whitespace_as_hyphens() {
        assert_eq!(export_filename(" Ada "), "-ada--portfolio.html");
    }

    #[test]
    fn filename_fallback_for_empty_name() {
        assert_eq!(export_filename(""), "portfolio-portfolio.html");
    }

    #[test]
    fn title_uses_name_or_fallback() {
        assert_eq!(document_title("Ada Lovelace"), "Ada Lovelace's Portfolio");
        assert_eq!(document_title(""), "Portfolio's Portfolio");
    }

    #[test]
    fn document_shell_structure() {
        let doc = export_document("<p>fragment</p>", "Ada", &SiteConfig::default()).into_string();
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains(r#"<html lang="en">"#));
        assert!(doc.contains(r#"<meta charset="UTF-8">"#));
        assert!(doc.contains("<title>Ada's Portfolio</title>"));
        assert!(doc.contains("<body><p>fragment</p><script>"));
    }

    #[test]
    fn fragment_is_embedded_verbatim() {
        let fragment = r#"<section id="about" class="portfolio-section is-visible"><h2>About Me</h2></section>"#;
        let doc = export_document(fragment, "", &SiteConfig::default()).into_string();
        assert!(doc.contains(fragment));
    }

    #[test]
    fn title_is_escaped() {
        let doc = export_document("", "<Ada>", &SiteConfig::default()).into_string();
        assert!(doc.contains("<title>&lt;Ada&gt;'s Portfolio</title>"));
    }

    #[test]
    fn stylesheet_is_embedded_unescaped() {
        let doc = export_document("", "", &SiteConfig::default()).into_string();
        // `@import` must come first and its URL must keep its raw `&`.
        assert!(doc.contains("<style>@import url('https://fonts.googleapis.com/css2?family=Roboto:wght@300;400;700;900&display=swap');"));
        assert!(doc.contains(".portfolio-section.is-visible"));
        assert!(doc.contains("@media (max-width: 768px)"));
        assert!(doc.contains("--color-accent: #00bcd4"));
        assert!(!doc.contains("<link"));
    }

    #[test]
    fn reveal_script_is_inlined() {
        let doc = export_document("", "", &SiteConfig::default()).into_string();
        assert!(doc.contains("new IntersectionObserver"));
        assert!(doc.contains("threshold: 0.2"));
        assert!(doc.contains(r#"rootMargin: "0px""#));
    }

    #[test]
    fn stylesheet_follows_config() {
        let mut config = SiteConfig::default();
        config.colors.accent = "#ff0066".to_string();
        config.fonts.import_url = String::new();
        let css = stylesheet(&config);
        assert!(css.contains("--color-accent: #ff0066"));
        assert!(!css.contains("@import"));
    }

    #[test]
    fn export_packages_document() {
        let file = export("<p>hi</p>", "Ada Lovelace", &SiteConfig::default());
        assert_eq!(file.filename, "ada-lovelace-portfolio.html");
        assert_eq!(file.mime, "text/html");
        assert!(file.contents.contains("<p>hi</p>"));
    }

    #[test]
    fn save_writes_into_created_dir() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("dist");
        let file = export("<p>hi</p>", "Ada", &SiteConfig::default());

        let path = file.save(&out).unwrap();
        assert_eq!(path, out.join("ada-portfolio.html"));
        assert_eq!(fs::read_to_string(&path).unwrap(), file.contents);
    }

    #[test]
    fn save_overwrites_previous_export() {
        let tmp = TempDir::new().unwrap();
        export("<p>old</p>", "Ada", &SiteConfig::default())
            .save(tmp.path())
            .unwrap();
        let path = export("<p>new</p>", "Ada", &SiteConfig::default())
            .save(tmp.path())
            .unwrap();
        let contents = fs::read_to_string(path).unwrap();
        assert!(contents.contains("<p>new</p>"));
        assert!(!contents.contains("<p>old</p>"));
    }

    #[test]
    fn save_into_file_path_is_error() {
        let tmp = TempDir::new().unwrap();
        let blocker = tmp.path().join("blocker");
        fs::write(&blocker, "not a dir").unwrap();
        let err = export("", "Ada", &SiteConfig::default())
            .save(&blocker)
            .unwrap_err();
        assert!(matches!(err, ExportError::Io { .. }));
    }
}
