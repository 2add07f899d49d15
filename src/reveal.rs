//! One-shot scroll reveal for rendered sections.
//!
//! Each section starts hidden (offset and transparent, see `.portfolio-section`
//! in the stylesheet) and is revealed the first time enough of it scrolls into
//! view. Reveal is one-directional: a revealed section stays revealed for as
//! long as the fragment that contains it is live, no matter how often it
//! leaves and re-enters the viewport.
//!
//! ```text
//! unrevealed ──(intersection ratio ≥ threshold)──▶ revealed (terminal)
//! ```
//!
//! The state machine lives in [`RevealAnimator`], driven by an
//! [`IntersectionObserver`] that mirrors the browser API of the same name:
//! the host reports per-section intersection ratios, the observer filters them
//! down to watched sections that cross the threshold.
//!
//! Exported documents have no access to this code, so [`reveal_script`]
//! produces the equivalent browser script with the same options. Both read
//! the threshold from [`ObserverOptions`], so the preview model and the
//! exported page cannot drift apart.

use crate::render::{SECTION_CLASS, Section};
use std::collections::{BTreeMap, BTreeSet};

/// CSS class added to a section once it has been revealed.
pub const VISIBLE_CLASS: &str = "is-visible";

/// Observation settings: the whole viewport as root, no margin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverOptions {
    /// Fraction of a section's area that must be visible (0.0..=1.0).
    pub threshold: f64,
    /// Margin added around the viewport, in pixels.
    pub root_margin_px: f64,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            threshold: 0.2,
            root_margin_px: 0.0,
        }
    }
}

/// An axis-aligned box in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    fn area(&self) -> f64 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    fn expand(&self, margin: f64) -> Rect {
        Rect::new(
            self.x - margin,
            self.y - margin,
            self.width + 2.0 * margin,
            self.height + 2.0 * margin,
        )
    }
}

/// Fraction of `target` that lies within `root`, in `0.0..=1.0`.
///
/// A zero-area target counts as fully visible when it touches the root,
/// matching how browsers report empty elements.
pub fn intersection_ratio(target: Rect, root: Rect) -> f64 {
    let left = target.x.max(root.x);
    let top = target.y.max(root.y);
    let right = (target.x + target.width).min(root.x + root.width);
    let bottom = (target.y + target.height).min(root.y + root.height);
    if right < left || bottom < top {
        return 0.0;
    }
    let target_area = target.area();
    if target_area == 0.0 {
        return 1.0;
    }
    ((right - left) * (bottom - top) / target_area).clamp(0.0, 1.0)
}

/// One intersection report: how much of a section is currently visible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
    pub section: Section,
    pub ratio: f64,
}

impl IntersectionEntry {
    /// Compute an entry from layout boxes.
    pub fn measure(
        section: Section,
        bounds: Rect,
        viewport: Rect,
        options: &ObserverOptions,
    ) -> Self {
        let root = viewport.expand(options.root_margin_px);
        Self {
            section,
            ratio: intersection_ratio(bounds, root),
        }
    }
}

/// Watches a set of sections and reports those crossing the threshold.
#[derive(Debug, Clone, Default)]
pub struct IntersectionObserver {
    options: ObserverOptions,
    watched: BTreeSet<Section>,
}

impl IntersectionObserver {
    pub fn new(options: ObserverOptions) -> Self {
        Self {
            options,
            watched: BTreeSet::new(),
        }
    }

    pub fn options(&self) -> &ObserverOptions {
        &self.options
    }

    pub fn observe(&mut self, section: Section) {
        self.watched.insert(section);
    }

    pub fn unobserve(&mut self, section: Section) {
        self.watched.remove(&section);
    }

    /// Stop watching everything.
    pub fn disconnect(&mut self) {
        self.watched.clear();
    }

    pub fn is_observing(&self, section: Section) -> bool {
        self.watched.contains(&section)
    }

    /// Watched sections whose entry meets the threshold, in report order.
    pub fn take_intersecting(&self, entries: &[IntersectionEntry]) -> Vec<Section> {
        entries
            .iter()
            .filter(|e| {
                self.is_observing(e.section) && e.ratio > 0.0 && e.ratio >= self.options.threshold
            })
            .map(|e| e.section)
            .collect()
    }
}

/// Per-section reveal state for the live fragment.
#[derive(Debug, Clone, Default)]
pub struct RevealAnimator {
    observer: IntersectionObserver,
    revealed: BTreeMap<Section, bool>,
}

impl RevealAnimator {
    pub fn new(options: ObserverOptions) -> Self {
        Self {
            observer: IntersectionObserver::new(options),
            revealed: BTreeMap::new(),
        }
    }

    /// Re-arm for a freshly rendered fragment.
    ///
    /// Tears down every outstanding observation first, then starts every
    /// section unrevealed and watched.
    pub fn reinit(&mut self, sections: &[Section]) {
        self.observer.disconnect();
        self.revealed.clear();
        for &section in sections {
            self.revealed.insert(section, false);
            self.observer.observe(section);
        }
        tracing::debug!(sections = sections.len(), "reveal observer re-armed");
    }

    /// Apply a batch of intersection reports.
    ///
    /// Returns the sections revealed by this batch. A revealed section is no
    /// longer observed, so later reports for it are ignored.
    pub fn handle(&mut self, entries: &[IntersectionEntry]) -> Vec<Section> {
        let mut newly = Vec::new();
        for section in self.observer.take_intersecting(entries) {
            // A batch may report the same section twice.
            if !self.observer.is_observing(section) {
                continue;
            }
            self.revealed.insert(section, true);
            self.observer.unobserve(section);
            newly.push(section);
        }
        newly
    }

    /// Measure every section against the viewport and apply the result.
    pub fn scroll(&mut self, layout: &[(Section, Rect)], viewport: Rect) -> Vec<Section> {
        let options = *self.observer.options();
        let entries: Vec<_> = layout
            .iter()
            .map(|&(section, bounds)| IntersectionEntry::measure(section, bounds, viewport, &options))
            .collect();
        self.handle(&entries)
    }

    pub fn is_revealed(&self, section: Section) -> bool {
        self.revealed.get(&section).copied().unwrap_or(false)
    }

    pub fn is_observing(&self, section: Section) -> bool {
        self.observer.is_observing(section)
    }

    /// Sections of the live fragment that are revealed, in render order.
    pub fn revealed_sections(&self) -> Vec<Section> {
        self.revealed
            .iter()
            .filter(|(_, revealed)| **revealed)
            .map(|(section, _)| *section)
            .collect()
    }
}

/// Standalone browser script implementing the same reveal for exported files.
pub fn reveal_script(options: &ObserverOptions) -> String {
    format!(
        r#"(function () {{
  var sections = document.querySelectorAll(".{section_class}");
  if (sections.length === 0) return;
  if (!("IntersectionObserver" in window)) {{
    sections.forEach(function (s) {{ s.classList.add("{visible_class}"); }});
    return;
  }}
  var observer = new IntersectionObserver(function (entries, obs) {{
    entries.forEach(function (entry) {{
      if (entry.isIntersecting) {{
        entry.target.classList.add("{visible_class}");
        obs.unobserve(entry.target);
      }}
    }});
  }}, {{ root: null, rootMargin: "{margin}px", threshold: {threshold} }});
  sections.forEach(function (s) {{
    s.classList.remove("{visible_class}");
    observer.observe(s);
  }});
}})();"#,
        section_class = SECTION_CLASS,
        visible_class = VISIBLE_CLASS,
        margin = options.root_margin_px,
        threshold = options.threshold,
    )
}
