//! CLI output formatting.
//!
//! Output describes the profile as it will be shown, not as it was typed:
//! every field is listed with its display value, and fields that fall back to
//! a placeholder are marked so it is obvious what is still missing.
//!
//! ## Check
//!
//! ```text
//! Profile
//!     Name: Ada Lovelace
//!     Title: Your Role/Title (empty)
//!     Skills: Math, Computing (2)
//!     ...
//!     Image: uploaded (image/png, 1.2 KB)
//! ```
//!
//! ## Export
//!
//! ```text
//! Exported ada-lovelace-portfolio.html (14.3 KB) → dist/ada-lovelace-portfolio.html
//! ```
//!
//! Each output has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout.

use crate::avatar::ProfileImage;
use crate::export::ExportedFile;
use crate::fields::ProfileFields;
use crate::render::{
    BIO_FALLBACK, EMAIL_FALLBACK, GITHUB_FALLBACK, LINKEDIN_FALLBACK, NAME_FALLBACK,
    PROJECT_DESC_FALLBACK, PROJECT_LINK_FALLBACK, PROJECT_TITLE_FALLBACK, SKILLS_FALLBACK,
    TITLE_FALLBACK,
};
use std::path::Path;

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Human-readable byte size.
fn format_size(bytes: usize) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}

/// `Label: value`, or `Label: fallback (empty)`.
fn field_line(label: &str, value: &str, fallback: &str) -> String {
    if value.is_empty() {
        format!("{}{}: {} (empty)", indent(1), label, fallback)
    } else {
        format!("{}{}: {}", indent(1), label, value)
    }
}

/// Collapse newlines so multi-line bios stay on one output line.
fn one_line(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn format_profile(fields: &ProfileFields, image: &ProfileImage) -> Vec<String> {
    let skills = fields.skills();
    let skills_line = if skills.is_empty() {
        format!("{}Skills: {} (empty)", indent(1), SKILLS_FALLBACK)
    } else {
        format!("{}Skills: {} ({})", indent(1), skills.join(", "), skills.len())
    };

    let image_line = match image.uploaded() {
        Some(uri) => format!(
            "{}Image: uploaded ({}, {})",
            indent(1),
            uri.mime(),
            format_size(uri.len())
        ),
        None if !fields.image_url.is_empty() => {
            format!("{}Image: {}", indent(1), fields.image_url)
        }
        None => format!("{}Image: placeholder", indent(1)),
    };

    vec![
        "Profile".to_string(),
        field_line("Name", &fields.name, NAME_FALLBACK),
        field_line("Title", &fields.title, TITLE_FALLBACK),
        field_line("Bio", &one_line(&fields.bio), BIO_FALLBACK),
        skills_line,
        field_line("Project", &fields.project_title, PROJECT_TITLE_FALLBACK),
        field_line(
            "Description",
            &one_line(&fields.project_desc),
            PROJECT_DESC_FALLBACK,
        ),
        field_line("Link", &fields.project_link, PROJECT_LINK_FALLBACK),
        field_line("Email", &fields.email, EMAIL_FALLBACK),
        field_line("LinkedIn", &fields.linkedin, LINKEDIN_FALLBACK),
        field_line("GitHub", &fields.github, GITHUB_FALLBACK),
        image_line,
    ]
}

pub fn print_profile(fields: &ProfileFields, image: &ProfileImage) {
    for line in format_profile(fields, image) {
        println!("{}", line);
    }
}

pub fn format_export(file: &ExportedFile, path: &Path) -> Vec<String> {
    vec![format!(
        "Exported {} ({}) → {}",
        file.filename,
        format_size(file.contents.len()),
        path.display()
    )]
}

pub fn print_export(file: &ExportedFile, path: &Path) {
    for line in format_export(file, path) {
        println!("{}", line);
    }
}

/// `generation` counts preview writes in this run, starting at 1.
pub fn format_preview(path: &Path, generation: u64) -> Vec<String> {
    vec![format!("Preview #{} → {}", generation, path.display())]
}

pub fn print_preview(path: &Path, generation: u64) {
    for line in format_preview(path, generation) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::avatar::DataUri;
    use crate::fields::{FieldId, Form};
    use crate::test_helpers::fields_from;

    #[test]
    fn size_units() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.0 MB");
    }

    #[test]
    fn empty_profile_marks_every_fallback() {
        let lines = format_profile(&ProfileFields::default(), &ProfileImage::new());
        assert_eq!(lines[0], "Profile");
        assert_eq!(lines[1], "    Name: Your Name (empty)");
        assert!(lines.contains(&"    Skills: Skills will appear here... (empty)".to_string()));
        assert!(lines.contains(&"    Link: # (empty)".to_string()));
        assert_eq!(lines.last().unwrap(), "    Image: placeholder");
    }

    #[test]
    fn filled_profile_lists_values() {
        let fields = fields_from(
            Form::new()
                .with(FieldId::Name, "Ada Lovelace")
                .with(FieldId::Skills, "Math, Computing")
                .with(FieldId::Bio, "Wrote\nthe first\n\nprogram."),
        );
        let lines = format_profile(&fields, &ProfileImage::new());
        assert_eq!(lines[1], "    Name: Ada Lovelace");
        assert!(lines.contains(&"    Bio: Wrote the first program.".to_string()));
        assert!(lines.contains(&"    Skills: Math, Computing (2)".to_string()));
    }

    #[test]
    fn image_line_reports_source() {
        let fields = fields_from(Form::new().with(FieldId::ImageUrl, "https://me.dev/me.jpg"));
        let lines = format_profile(&fields, &ProfileImage::new());
        assert_eq!(lines.last().unwrap(), "    Image: https://me.dev/me.jpg");

        let mut image = ProfileImage::new();
        image.set_uploaded(DataUri::encode("image/png", &[0u8; 300]));
        let lines = format_profile(&fields, &image);
        assert_eq!(lines.last().unwrap(), "    Image: uploaded (image/png, 422 B)");
    }

    #[test]
    fn export_line() {
        let file = ExportedFile {
            filename: "ada-portfolio.html".to_string(),
            mime: "text/html",
            contents: "x".repeat(2048),
        };
        let lines = format_export(&file, Path::new("dist/ada-portfolio.html"));
        assert_eq!(
            lines,
            vec!["Exported ada-portfolio.html (2.0 KB) → dist/ada-portfolio.html"]
        );
    }

    #[test]
    fn preview_line() {
        assert_eq!(
            format_preview(Path::new("dist/preview.html"), 3),
            vec!["Preview #3 → dist/preview.html"]
        );
    }
}
