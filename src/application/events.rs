// SPDX-License-Identifier: MPL-2.0
//! Multicast event outputs of the gallery.
//!
//! Each output is an [`EventEmitter`]: listeners are called synchronously,
//! in subscription order, from inside the gallery operation that raised the
//! event. Nothing is buffered, so a listener added later never sees earlier
//! events.

use crate::domain::gallery::NavigationEvent;
use std::fmt;

/// Identifies a listener for later removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&NavigationEvent)>;

/// A synchronous multicast event stream.
#[derive(Default)]
pub struct EventEmitter {
    listeners: Vec<(ListenerId, Listener)>,
    next_id: u64,
}

impl EventEmitter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a listener called for every subsequent event.
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&NavigationEvent) + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns false if it was not subscribed.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Delivers `event` to every listener.
    pub fn emit(&mut self, event: &NavigationEvent) {
        for (_, listener) in &mut self.listeners {
            listener(event);
        }
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl fmt::Debug for EventEmitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventEmitter")
            .field("listeners", &self.listeners.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}

/// The gallery's outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GalleryOutput {
    /// The viewer was closed.
    Close,
    /// An image was shown; the payload is its 1-based position.
    Show,
    /// Navigation landed on the first image.
    FirstImage,
    /// Navigation landed on the last image.
    LastImage,
    /// A new image list became available.
    HasData,
}

impl GalleryOutput {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            GalleryOutput::Close => "close",
            GalleryOutput::Show => "show",
            GalleryOutput::FirstImage => "firstImage",
            GalleryOutput::LastImage => "lastImage",
            GalleryOutput::HasData => "hasData",
        }
    }
}

/// One emitter per [`GalleryOutput`].
#[derive(Debug, Default)]
pub struct GalleryEvents {
    close: EventEmitter,
    show: EventEmitter,
    first_image: EventEmitter,
    last_image: EventEmitter,
    has_data: EventEmitter,
}

impl GalleryEvents {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emitter_mut(&mut self, output: GalleryOutput) -> &mut EventEmitter {
        match output {
            GalleryOutput::Close => &mut self.close,
            GalleryOutput::Show => &mut self.show,
            GalleryOutput::FirstImage => &mut self.first_image,
            GalleryOutput::LastImage => &mut self.last_image,
            GalleryOutput::HasData => &mut self.has_data,
        }
    }

    pub fn subscribe<F>(&mut self, output: GalleryOutput, listener: F) -> ListenerId
    where
        F: FnMut(&NavigationEvent) + 'static,
    {
        self.emitter_mut(output).subscribe(listener)
    }

    pub fn unsubscribe(&mut self, output: GalleryOutput, id: ListenerId) -> bool {
        self.emitter_mut(output).unsubscribe(id)
    }

    pub(crate) fn emit(&mut self, output: GalleryOutput, event: NavigationEvent) {
        log::debug!("{} {:?}", output.name(), event);
        self.emitter_mut(output).emit(&event);
    }
}
