//! Editing session: the explicit state behind the live preview.
//!
//! A [`Session`] owns everything that changes while a portfolio is being
//! edited:
//!
//! | State | Changed by |
//! |---|---|
//! | [`Form`] (field values) | [`Session::edit`] |
//! | [`ProfileImage`] (uploaded image) | completed uploads, applied by [`Session::pump`] |
//! | [`Preview`] (fragment + reveal state) | every render |
//!
//! Every change re-renders the whole fragment and re-arms the reveal
//! animator, so newly rendered sections always start hidden.
//!
//! ## Uploads
//!
//! Reading and encoding an image is the one slow operation, so
//! [`Session::upload`] hands it to a worker thread and returns immediately.
//! Results come back over a channel and are only applied when the owner calls
//! [`Session::pump`] (or [`Session::upload_blocking`]), which keeps all state
//! changes on the owner's thread. Uploads are not cancelled: if two are in
//! flight, whichever finishes last is the image that sticks.

use crate::avatar::{self, AcquireError, DataUri, ProfileImage};
use crate::config::SiteConfig;
use crate::export::{self, ExportedFile};
use crate::fields::{FieldId, Form, ProfileFields};
use crate::render::{Section, render_fragment};
use crate::reveal::{IntersectionEntry, ObserverOptions, Rect, RevealAnimator};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

/// The live preview: the current fragment and its reveal state.
#[derive(Debug, Clone, Default)]
pub struct Preview {
    fragment: String,
    reveal: RevealAnimator,
}

impl Preview {
    pub fn new(options: ObserverOptions) -> Self {
        Self {
            fragment: String::new(),
            reveal: RevealAnimator::new(options),
        }
    }

    /// Replace the content wholesale and re-arm the reveal animator.
    pub fn replace(&mut self, fragment: String) {
        self.fragment = fragment;
        self.reveal.reinit(&Section::ALL);
    }

    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    pub fn reveal(&self) -> &RevealAnimator {
        &self.reveal
    }

    pub fn is_revealed(&self, section: Section) -> bool {
        self.reveal.is_revealed(section)
    }

    /// Apply intersection reports from the host.
    pub fn report(&mut self, entries: &[IntersectionEntry]) -> Vec<Section> {
        self.reveal.handle(entries)
    }

    /// Apply a scroll position given the current section layout.
    pub fn scroll(&mut self, layout: &[(Section, Rect)], viewport: Rect) -> Vec<Section> {
        self.reveal.scroll(layout, viewport)
    }
}

/// Outcome of a background upload.
#[derive(Debug)]
enum Decoded {
    Image(DataUri),
    NotAnImage(PathBuf),
    Failed(AcquireError),
}

/// Controller for one editing session.
pub struct Session {
    config: SiteConfig,
    form: Form,
    image: ProfileImage,
    preview: Preview,
    renders: u64,
    decoded_tx: Sender<Decoded>,
    decoded_rx: Receiver<Decoded>,
    in_flight: usize,
}

impl Session {
    /// Start a session from config; the `[profile]` table seeds the form.
    pub fn new(config: SiteConfig) -> Self {
        let (decoded_tx, decoded_rx) = mpsc::channel();
        let form = config.profile.clone();
        let mut session = Self {
            config,
            form,
            image: ProfileImage::new(),
            preview: Preview::new(ObserverOptions::default()),
            renders: 0,
            decoded_tx,
            decoded_rx,
            in_flight: 0,
        };
        session.render();
        session
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn image(&self) -> &ProfileImage {
        &self.image
    }

    pub fn preview(&self) -> &Preview {
        &self.preview
    }

    pub fn preview_mut(&mut self) -> &mut Preview {
        &mut self.preview
    }

    /// Number of renders so far, the initial one included.
    pub fn renders(&self) -> u64 {
        self.renders
    }

    /// Current normalized field values.
    pub fn fields(&self) -> ProfileFields {
        ProfileFields::read(&self.form)
    }

    /// Change one field and re-render.
    pub fn edit(&mut self, field: FieldId, value: impl Into<String>) {
        self.form.set(field, value);
        self.render();
    }

    /// Start reading an image in the background.
    ///
    /// Files that do not declare an image type are ignored; the result only
    /// shows up once [`pump`](Self::pump) picks it up.
    pub fn upload(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        let tx = self.decoded_tx.clone();
        self.in_flight += 1;
        thread::spawn(move || {
            let outcome = match avatar::acquire(&path) {
                Ok(Some(uri)) => Decoded::Image(uri),
                Ok(None) => Decoded::NotAnImage(path),
                Err(err) => Decoded::Failed(err),
            };
            // The session may be gone by now; nobody is left to care.
            let _ = tx.send(outcome);
        });
    }

    /// Read an image and apply it before returning.
    ///
    /// Returns whether the profile image changed.
    pub fn upload_blocking(&mut self, path: &Path) -> Result<bool, AcquireError> {
        match avatar::acquire(path)? {
            Some(uri) => {
                self.image.set_uploaded(uri);
                self.render();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Uploads started but not yet applied.
    pub fn pending_uploads(&self) -> usize {
        self.in_flight
    }

    /// Apply every finished upload, in completion order.
    ///
    /// Re-renders once if any of them changed the image. Returns whether the
    /// image changed.
    pub fn pump(&mut self) -> bool {
        let mut changed = false;
        while let Ok(outcome) = self.decoded_rx.try_recv() {
            changed |= self.apply(outcome);
        }
        if changed {
            self.render();
        }
        changed
    }

    /// Block until every started upload has finished, then apply them.
    pub fn wait_for_uploads(&mut self) -> bool {
        let mut changed = false;
        while self.in_flight > 0 {
            match self.decoded_rx.recv() {
                Ok(outcome) => changed |= self.apply(outcome),
                Err(_) => break,
            }
        }
        if changed {
            self.render();
        }
        changed
    }

    fn apply(&mut self, outcome: Decoded) -> bool {
        self.in_flight = self.in_flight.saturating_sub(1);
        match outcome {
            Decoded::Image(uri) => {
                self.image.set_uploaded(uri);
                true
            }
            Decoded::NotAnImage(path) => {
                tracing::debug!(path = %path.display(), "upload ignored");
                false
            }
            Decoded::Failed(err) => {
                tracing::warn!("upload failed: {err}");
                false
            }
        }
    }

    /// Rebuild the preview from the current state.
    pub fn render(&mut self) {
        let fields = self.fields();
        let fragment = render_fragment(&fields, &self.image, &self.config).into_string();
        self.preview.replace(fragment);
        self.renders += 1;
        tracing::debug!(
            render = self.renders,
            bytes = self.preview.fragment().len(),
            "rendered preview"
        );
    }

    /// Package the current preview as a standalone document.
    ///
    /// Uses the fragment as it stands; nothing is re-rendered.
    pub fn export(&self) -> ExportedFile {
        export::export(self.preview.fragment(), self.form.value(FieldId::Name), &self.config)
    }
}
