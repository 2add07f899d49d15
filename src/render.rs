//! Portfolio fragment rendering.
//!
//! Turns the current [`ProfileFields`] and [`ProfileImage`] into the portfolio
//! fragment: the markup that goes inside `<body>`, without the document shell.
//! The fragment is rebuilt from scratch on every change; there is no diffing.
//!
//! ## Layout
//!
//! ```text
//! div.portfolio-header            image, name, title
//! section#about.portfolio-section    bio
//! section#skills.portfolio-section   one tag per skill
//! section#projects.portfolio-section one project card
//! section#contact.portfolio-section  email, LinkedIn, GitHub
//! ```
//!
//! Only the four `section`s take part in the scroll reveal; the header is
//! always visible.
//!
//! ## Fallbacks
//!
//! Every empty field renders a placeholder text (see the `*_FALLBACK`
//! constants). Substitution only affects what is displayed: link targets use
//! the raw value, so an empty email still links to `mailto:` and an empty
//! LinkedIn URL to `""`. The project link is the exception and falls back to
//! `#`.
//!
//! ## Escaping
//!
//! Field values are interpolated through Maud and therefore HTML-escaped.
//! A name like `<b>Ada</b>` shows up literally instead of as markup.

use crate::avatar::ProfileImage;
use crate::config::SiteConfig;
use crate::fields::{ProfileFields, or_fallback};
use maud::{Markup, html};
use std::fmt;

pub const NAME_FALLBACK: &str = "Your Name";
pub const TITLE_FALLBACK: &str = "Your Role/Title";
pub const BIO_FALLBACK: &str = "This is where your professional bio will go.";
pub const SKILLS_FALLBACK: &str = "Skills will appear here...";
pub const PROJECT_TITLE_FALLBACK: &str = "Project Title";
pub const PROJECT_DESC_FALLBACK: &str = "Project description goes here.";
pub const PROJECT_LINK_FALLBACK: &str = "#";
pub const EMAIL_FALLBACK: &str = "yourname@example.com";
pub const LINKEDIN_FALLBACK: &str = "LinkedIn Profile";
pub const GITHUB_FALLBACK: &str = "GitHub Profile";

/// CSS class shared by every revealable section.
pub const SECTION_CLASS: &str = "portfolio-section";

/// A revealable section of the fragment, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    About,
    Skills,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ];

    /// The element id of the section.
    pub fn id(self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            Section::About => "About Me",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Render the portfolio fragment.
///
/// Deterministic: the same inputs always produce byte-identical markup.
pub fn render_fragment(
    fields: &ProfileFields,
    image: &ProfileImage,
    config: &SiteConfig,
) -> Markup {
    let image_src = image.src(&fields.image_url, &config.placeholders.profile_image);

    html! {
        div.portfolio-header {
            img.profile-img src=(image_src) alt=(fields.name);
            h1 { (or_fallback(&fields.name, NAME_FALLBACK)) }
            p { (or_fallback(&fields.title, TITLE_FALLBACK)) }
        }
        (section(Section::About, html! {
            p { (or_fallback(&fields.bio, BIO_FALLBACK)) }
        }))
        (section(Section::Skills, render_skills(fields)))
        (section(Section::Projects, render_project(fields, config)))
        (section(Section::Contact, render_contact(fields)))
    }
}

fn section(which: Section, body: Markup) -> Markup {
    html! {
        section id=(which.id()) class=(SECTION_CLASS) {
            h2 { (which.heading()) }
            (body)
        }
    }
}

fn render_skills(fields: &ProfileFields) -> Markup {
    let skills = fields.skills();
    html! {
        ul.skills-list {
            @if skills.is_empty() {
                li.skill-tag { (SKILLS_FALLBACK) }
            } @else {
                @for skill in &skills {
                    li.skill-tag { (skill) }
                }
            }
        }
    }
}

fn render_project(fields: &ProfileFields, config: &SiteConfig) -> Markup {
    html! {
        div.project-card {
            img.project-img src=(config.placeholders.project_image) alt="Project screenshot";
            div.project-card-content {
                h3 { (or_fallback(&fields.project_title, PROJECT_TITLE_FALLBACK)) }
                p { (or_fallback(&fields.project_desc, PROJECT_DESC_FALLBACK)) }
                p {
                    a href=(or_fallback(&fields.project_link, PROJECT_LINK_FALLBACK)) target="_blank" {
                        "View Live Demo →"
                    }
                }
            }
        }
    }
}

fn render_contact(fields: &ProfileFields) -> Markup {
    html! {
        div.contact-info {
            p {
                "Email: "
                a href={ "mailto:" (fields.email) } { (or_fallback(&fields.email, EMAIL_FALLBACK)) }
            }
            p {
                "LinkedIn: "
                a href=(fields.linkedin) target="_blank" { (or_fallback(&fields.linkedin, LINKEDIN_FALLBACK)) }
            }
            p {
                "GitHub: "
                a href=(fields.github) target="_blank" { (or_fallback(&fields.github, GITHUB_FALLBACK)) }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
