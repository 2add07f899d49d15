//! # Simple Folio
//!
//! Turns a handful of profile fields into a single, self-contained portfolio
//! page. Fill in a name, a title, a bio, some skills, one project and a few
//! contact links; get back one HTML file with its styling and its scroll
//! animation embedded, ready to be opened locally or dropped on any host.
//!
//! # Architecture
//!
//! ```text
//! folio.toml / --set ──▶ Form ──▶ ProfileFields ──▶ render_fragment ──▶ Preview
//! --image ──▶ acquire ──▶ ProfileImage ───────────────────┘                │
//!                                                                          ▼
//!                                               export_document ──▶ <slug>-portfolio.html
//! ```
//!
//! A [`session::Session`] owns the mutable state (field values, uploaded
//! image, live preview). Rendering and exporting are plain functions of that
//! state: every change rebuilds the whole fragment, and exporting wraps the
//! current fragment without rendering again.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`fields`] | Named form fields, `FIELD=VALUE` parsing, skill list normalization |
//! | [`avatar`] | Profile image precedence and image-file acquisition as `data:` URIs |
//! | [`render`] | The portfolio fragment (header, about, skills, projects, contact) using Maud |
//! | [`reveal`] | One-shot scroll reveal state machine and its inlined browser script |
//! | [`export`] | Standalone document shell, embedded stylesheet, file naming |
//! | [`session`] | Editing session: explicit state, background uploads, re-rendering |
//! | [`config`] | `folio.toml` loading, validation, merging, and CSS generation |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## One File, Nothing External
//!
//! The exported page embeds everything it needs: CSS in a `<style>` block, the
//! reveal logic in a `<script>` block, an uploaded photo as a `data:` URI. The
//! only remote reference left is the webfont import (and the placeholder
//! images, until real ones are provided). Mailing the file to someone is
//! enough to share the portfolio.
//!
//! ## Fallbacks at Render Time
//!
//! Empty fields are never an error. Field values are read as-is and the
//! renderer substitutes a placeholder ("Your Name", "Skills will appear
//! here...") only for display, so a half-filled profile always produces a
//! complete-looking page.
//!
//! ## Escaped Interpolation
//!
//! All field values go through Maud and are HTML-escaped. Typing markup into
//! a field shows the markup as text.

pub mod avatar;
pub mod config;
pub mod export;
pub mod fields;
pub mod output;
pub mod render;
pub mod reveal;
pub mod session;

#[cfg(test)]
pub(crate) mod test_helpers;
