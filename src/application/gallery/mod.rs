// SPDX-License-Identifier: MPL-2.0
//! Gallery controller: the navigation and event-coordination state machine.
//!
//! [`Gallery`] owns the image list, the current index and the open/loading
//! flags. Every user gesture (arrow click, key, swipe, thumbnail click)
//! ends up in one of its operations, which mutate the state, raise events on
//! the [`GalleryEvents`] outputs and keep the keyboard service in step.
//!
//! All operations run to completion on the caller's thread. Handlers that
//! react to user input return early when the viewer is closed.
//!
//! # Example
//!
//! ```
//! use gallery_lens::application::{Gallery, GalleryOptions, GalleryOutput};
//! use gallery_lens::domain::gallery::{Action, Image};
//! use gallery_lens::infrastructure::memory::{InMemoryShortcuts, RecordingDownloads};
//!
//! let images = vec![Image::new("a.jpg"), Image::new("b.jpg"), Image::new("c.jpg")];
//! let mut gallery = Gallery::new(
//!     InMemoryShortcuts::default(),
//!     RecordingDownloads::default(),
//!     GalleryOptions::default(),
//! )
//! .with_source(images);
//! gallery.init();
//!
//! assert!(gallery.show_gallery_strip());
//! gallery.open_at(2).expect("index in range");
//! assert_eq!(gallery.advance(Action::Click), Some(0));
//! assert_eq!(gallery.compute_description().as_deref(), Some("Image 1/3"));
//!
//! gallery.close(Action::Normal);
//! assert!(!gallery.is_open());
//! ```

use crate::application::bridge::ShortcutBridge;
use crate::application::events::{GalleryEvents, GalleryOutput, ListenerId};
use crate::application::navigation::{self, NavigationInfo, Step};
use crate::application::port::{
    DownloadPlatform, KeyboardService, ShortcutAction, ShortcutResponse,
};
use crate::application::source::{ImageSource, Polled, Subscription};
use crate::domain::error::GalleryError;
use crate::domain::gallery::{
    Action, ButtonsConfig, DescriptionFormat, Image, KeyCode, KeyCommand, KeyboardRemap,
    NavigationEvent, SwipeDirection,
};
use crate::error::Result;


/// Per-instance configuration, fully resolved.
///
/// Build it once, either by hand or from a loaded settings file with
/// [`Config::gallery_options`](crate::config::Config::gallery_options).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GalleryOptions {
    /// Enables [`Gallery::download_image`].
    pub downloadable: bool,
    /// Enables [`Gallery::request_close`] for backdrop clicks.
    pub close_on_outside_click: bool,
    /// Index to open directly once data is ready. `None` lands on the strip.
    pub image_pointer: Option<usize>,
    pub keyboard: KeyboardRemap,
    pub description: DescriptionFormat,
    /// Forwarded to the rendering layer untouched.
    pub buttons: ButtonsConfig,
}

/// A change to one of the gallery inputs.
#[derive(Debug)]
pub enum InputChange {
    Images(ImageSource),
    ImagePointer(Option<usize>),
    Downloadable(bool),
    CloseOnOutsideClick(bool),
    KeyboardRemap(KeyboardRemap),
    Description(DescriptionFormat),
    Buttons(ButtonsConfig),
}

/// The gallery state machine.
///
/// `K` is the host's keyboard-shortcut service and `D` its download
/// capability; both are injected and owned for the gallery's lifetime.
#[derive(Debug)]
pub struct Gallery<K: KeyboardService, D: DownloadPlatform> {
    images: Vec<Image>,
    current_index: Option<usize>,
    is_open: bool,
    is_loading: bool,
    show_gallery_strip: bool,
    options: GalleryOptions,
    pending_source: Option<ImageSource>,
    subscription: Option<Subscription>,
    bridge: ShortcutBridge<K>,
    downloads: D,
    events: GalleryEvents,
    destroyed: bool,
}

impl<K: KeyboardService, D: DownloadPlatform> Gallery<K, D> {
    /// Creates a closed, empty gallery.
    pub fn new(keyboard: K, downloads: D, options: GalleryOptions) -> Self {
        Self {
            images: Vec::new(),
            current_index: None,
            is_open: false,
            is_loading: false,
            show_gallery_strip: false,
            options,
            pending_source: None,
            subscription: None,
            bridge: ShortcutBridge::new(keyboard),
            downloads,
            events: GalleryEvents::new(),
            destroyed: false,
        }
    }

    /// Sets the images input consumed by [`Gallery::init`].
    #[must_use]
    pub fn with_source(mut self, source: impl Into<ImageSource>) -> Self {
        self.pending_source = Some(source.into());
        self
    }

    /// Reconciles the images input supplied at construction.
    ///
    /// Subscribe to the outputs before calling this to observe `hasData`.
    pub fn init(&mut self) {
        if let Some(source) = self.pending_source.take() {
            self.on_images_available(source);
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[must_use]
    pub fn images(&self) -> &[Image] {
        &self.images
    }

    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    #[must_use]
    pub fn current_image(&self) -> Option<&Image> {
        self.current_index.and_then(|index| self.images.get(index))
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    #[must_use]
    pub fn show_gallery_strip(&self) -> bool {
        self.show_gallery_strip
    }

    #[must_use]
    pub fn options(&self) -> &GalleryOptions {
        &self.options
    }

    #[must_use]
    pub fn buttons(&self) -> ButtonsConfig {
        self.options.buttons
    }

    #[must_use]
    pub fn navigation_info(&self) -> NavigationInfo {
        NavigationInfo::new(self.current_index, self.images.len())
    }

    /// Returns true while an image stream is subscribed.
    #[must_use]
    pub fn has_subscription(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn keyboard(&self) -> &K {
        self.bridge.service()
    }

    pub fn keyboard_mut(&mut self) -> &mut K {
        self.bridge.service_mut()
    }

    pub fn downloads(&self) -> &D {
        &self.downloads
    }

    pub fn events_mut(&mut self) -> &mut GalleryEvents {
        &mut self.events
    }

    /// Shorthand for `events_mut().subscribe(..)`.
    pub fn subscribe<F>(&mut self, output: GalleryOutput, listener: F) -> ListenerId
    where
        F: FnMut(&NavigationEvent) + 'static,
    {
        self.events.subscribe(output, listener)
    }

    // =========================================================================
    // Viewer state
    // =========================================================================

    /// Opens the viewer at `index`.
    ///
    /// Emits `show` with the 1-based position and installs the download
    /// shortcut.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::IndexOutOfRange`] when `index` is not a valid
    /// position; the state is left untouched in that case.
    pub fn open_at(&mut self, index: usize) -> Result<()> {
        let len = self.images.len();
        if index >= len {
            return Err(GalleryError::IndexOutOfRange { index, len }.into());
        }

        self.is_loading = true;
        self.commit(index);
        self.events
            .emit(GalleryOutput::Show, NavigationEvent::position_of(Action::Load, index));
        self.bridge.install();
        Ok(())
    }

    /// Thumbnail activation from the gallery strip.
    ///
    /// # Errors
    ///
    /// Same as [`Gallery::open_at`].
    pub fn open_from_strip(&mut self, index: usize) -> Result<()> {
        self.open_at(index)
    }

    /// Shows the next image, wrapping to the first.
    ///
    /// Returns the new index, or `None` when the viewer is closed.
    pub fn advance(&mut self, kind: Action) -> Option<usize> {
        self.navigate(kind, navigation::next_index)
    }

    /// Shows the previous image, wrapping to the last.
    ///
    /// Returns the new index, or `None` when the viewer is closed.
    pub fn retreat(&mut self, kind: Action) -> Option<usize> {
        self.navigate(kind, navigation::previous_index)
    }

    /// Right arrow button.
    pub fn next_image(&mut self) -> Option<usize> {
        self.advance(Action::Click)
    }

    /// Left arrow button.
    pub fn prev_image(&mut self) -> Option<usize> {
        self.retreat(Action::Click)
    }

    fn navigate(&mut self, kind: Action, step: fn(usize, usize) -> Option<Step>) -> Option<usize> {
        if !self.is_open {
            return None;
        }
        let current = self.current_index?;

        self.is_loading = true;
        let Some(step) = step(current, self.images.len()) else {
            self.is_loading = false;
            return None;
        };
        self.emit_step(kind, step);
        self.commit(step.index);
        self.bridge.install();
        Some(step.index)
    }

    fn emit_step(&mut self, kind: Action, step: Step) {
        if step.at_first {
            self.events
                .emit(GalleryOutput::FirstImage, NavigationEvent::flag(kind, true));
        }
        if step.at_last {
            self.events
                .emit(GalleryOutput::LastImage, NavigationEvent::flag(kind, true));
        }
        self.events
            .emit(GalleryOutput::Show, NavigationEvent::position_of(kind, step.index));
    }

    fn commit(&mut self, index: usize) {
        self.current_index = Some(index);
        self.is_open = true;
        self.is_loading = false;
    }

    /// Closes the viewer and clears the keyboard registrations.
    ///
    /// Emits `close` on every call, including when already closed.
    pub fn close(&mut self, kind: Action) {
        self.events
            .emit(GalleryOutput::Close, NavigationEvent::flag(kind, true));
        self.is_open = false;
        self.bridge.clear();
    }

    /// Backdrop click handler.
    ///
    /// Closes with [`Action::Click`] only for clicks outside the image and
    /// only when outside-click closing is enabled. Returns whether it closed.
    pub fn request_close(&mut self, from_outside_click: bool) -> bool {
        if from_outside_click && self.options.close_on_outside_click {
            self.close(Action::Click);
            true
        } else {
            false
        }
    }

    /// Builds the caption of the current image.
    ///
    /// A custom full description is returned whatever the state. Otherwise
    /// `None` when no image is current.
    #[must_use]
    pub fn compute_description(&self) -> Option<String> {
        let format = &self.options.description;
        if let Some(custom) = &format.custom_full_description {
            return Some(custom.clone());
        }
        let index = self.current_index?;
        let image = self.images.get(index)?;
        Some(format.compose(index, self.images.len(), image.description()))
    }

    // =========================================================================
    // Input handlers
    // =========================================================================

    /// Key-down handler. Returns whether the key was consumed.
    pub fn on_key_down(&mut self, code: KeyCode) -> bool {
        if !self.is_open {
            return false;
        }
        match self.options.keyboard.resolve(code) {
            Some(KeyCommand::Close) => {
                self.close(Action::Keyboard);
                true
            }
            Some(KeyCommand::Previous) => {
                self.retreat(Action::Keyboard);
                true
            }
            Some(KeyCommand::Next) => {
                self.advance(Action::Keyboard);
                true
            }
            None => false,
        }
    }

    /// Touch swipe handler. Returns whether the swipe was consumed.
    pub fn on_swipe(&mut self, direction: SwipeDirection) -> bool {
        if !self.is_open {
            return false;
        }
        match direction {
            SwipeDirection::Left => self.advance(Action::Swipe),
            SwipeDirection::Right => self.retreat(Action::Swipe),
        };
        true
    }

    /// Dispatch target for shortcuts registered with the keyboard service.
    pub fn on_shortcut(&mut self, action: ShortcutAction) -> ShortcutResponse {
        if !self.is_open {
            return ShortcutResponse::Propagate;
        }
        match action {
            ShortcutAction::DownloadCurrent => {
                self.download_image();
            }
        }
        ShortcutResponse::PreventDefault
    }

    /// Asks the platform to save the current image under its file name.
    ///
    /// Does nothing when downloads are disabled or no image is current.
    /// Returns whether a save was requested.
    pub fn download_image(&mut self) -> bool {
        if !self.options.downloadable {
            return false;
        }
        let Some(image) = self.current_index.and_then(|index| self.images.get(index)) else {
            return false;
        };
        log::debug!("download requested for {}", image.img);
        self.downloads.save(&image.img, image.file_name());
        true
    }

    // =========================================================================
    // Input reconciliation
    // =========================================================================

    /// Takes a new images input.
    ///
    /// Any previous stream subscription is released first. A list is applied
    /// at once; a stream is subscribed and its pending emissions applied.
    pub fn on_images_available(&mut self, source: ImageSource) {
        self.release_subscription();
        match source {
            ImageSource::List(images) => self.replace_images(images),
            ImageSource::Stream(stream) => {
                self.subscription = Some(Subscription::new(stream));
                self.pump();
            }
        }
    }

    /// Applies the changed inputs.
    ///
    /// Settings are applied first; the images input, if it is among the
    /// changes, is reconciled last so it sees the new pointer.
    pub fn apply_changes(&mut self, changes: impl IntoIterator<Item = InputChange>) {
        let mut images = None;
        for change in changes {
            match change {
                InputChange::Images(source) => images = Some(source),
                InputChange::ImagePointer(pointer) => self.options.image_pointer = pointer,
                InputChange::Downloadable(enabled) => self.options.downloadable = enabled,
                InputChange::CloseOnOutsideClick(enabled) => {
                    self.options.close_on_outside_click = enabled;
                }
                InputChange::KeyboardRemap(remap) => self.options.keyboard = remap,
                InputChange::Description(format) => self.options.description = format,
                InputChange::Buttons(buttons) => self.options.buttons = buttons,
            }
        }
        if let Some(source) = images {
            self.on_images_available(source);
        }
    }

    /// Applies every emission already waiting on the subscribed stream, in
    /// order. Returns how many were applied.
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        while let Some(subscription) = self.subscription.as_mut() {
            let polled = subscription.try_next();
            match polled {
                Polled::Emission(images) => {
                    self.replace_images(images);
                    applied += 1;
                }
                Polled::Idle => break,
                Polled::Completed => {
                    log::debug!("image stream completed");
                    break;
                }
            }
        }
        applied
    }

    /// Waits for the next stream emission and applies it.
    ///
    /// Returns false when no stream is subscribed or the stream completed.
    pub async fn next_emission(&mut self) -> bool {
        let Some(subscription) = self.subscription.as_mut() else {
            return false;
        };
        let next = subscription.next().await;
        match next {
            Some(images) => {
                self.replace_images(images);
                true
            }
            None => false,
        }
    }

    fn replace_images(&mut self, images: Vec<Image>) {
        log::debug!("image list replaced ({} images)", images.len());
        self.images = images;
        self.data_ready();
    }

    fn data_ready(&mut self) {
        self.events
            .emit(GalleryOutput::HasData, NavigationEvent::flag(Action::Load, true));
        self.is_loading = true;

        if let Some(pointer) = self.options.image_pointer {
            match self.open_at(pointer) {
                Ok(()) => {
                    self.show_gallery_strip = false;
                    return;
                }
                Err(err) => log::warn!("ignoring initial image pointer: {err}"),
            }
        }
        self.show_gallery_strip = true;
        self.drop_stale_index();
    }

    /// Closes the viewer if the new list no longer contains its image.
    fn drop_stale_index(&mut self) {
        let valid = self
            .current_index
            .is_some_and(|index| index < self.images.len());
        if !valid {
            self.current_index = None;
            if self.is_open {
                self.close(Action::Load);
            }
        }
    }

    fn release_subscription(&mut self) {
        self.subscription = None;
    }

    // =========================================================================
    // Teardown
    // =========================================================================

    /// Releases the stream subscription and resets the keyboard service.
    ///
    /// Runs once; later calls and the implicit call on drop do nothing.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.destroyed = true;
        self.release_subscription();
        self.bridge.clear();
        log::debug!("gallery destroyed");
    }
}

impl<K: KeyboardService, D: DownloadPlatform> Drop for Gallery<K, D> {
    fn drop(&mut self) {
        self.destroy();
    }
}
