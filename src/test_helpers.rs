//! Shared test utilities for the simple-folio test suite.
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let fields = fields_from(Form::new().with(FieldId::Skills, "A, B"));
//! let html = render_fragment(&fields, &ProfileImage::new(), &SiteConfig::default()).into_string();
//!
//! assert_eq!(count(&html, "skill-tag"), 2);
//! assert_in_order(&html, &[">A<", ">B<"]);
//! ```

use crate::fields::{Form, ProfileFields};
use std::path::{Path, PathBuf};

/// A valid 1×1 transparent PNG.
pub const TINY_PNG: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
    0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F,
    0x15, 0xC4, 0x89, 0x00, 0x00, 0x00, 0x0A, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9C, 0x63, 0x00,
    0x01, 0x00, 0x00, 0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, 0x00, 0x00, 0x00, 0x00, 0x49,
    0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
];

/// Write `contents` to `dir/name` and return the path.
pub fn write_file(dir: &Path, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

pub fn fields_from(form: Form) -> ProfileFields {
    ProfileFields::read(&form)
}

/// Number of non-overlapping occurrences of `needle`.
pub fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

/// Assert that every needle occurs, each after the previous one.
pub fn assert_in_order(haystack: &str, needles: &[&str]) {
    let mut from = 0;
    for needle in needles {
        match haystack[from..].find(needle) {
            Some(pos) => from += pos + needle.len(),
            None => panic!("'{needle}' not found after byte {from} in:\n{haystack}"),
        }
    }
}
