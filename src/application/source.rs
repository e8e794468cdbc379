// SPDX-License-Identifier: MPL-2.0
//! Image sources accepted by the gallery.
//!
//! A source is either a literal list or a stream of lists. The stream is a
//! `tokio` unbounded channel: the host keeps the [`ImageSender`] and pushes a
//! complete list whenever its data changes, the gallery keeps the receiving
//! end for as long as it is subscribed.

use crate::domain::gallery::Image;
use tokio::sync::mpsc::{self, error::TryRecvError};

/// The images input, resolved once when it reaches the gallery.
#[derive(Debug)]
pub enum ImageSource {
    /// A fixed list.
    List(Vec<Image>),
    /// A stream whose every emission replaces the whole list.
    Stream(ImageStream),
}

impl From<Vec<Image>> for ImageSource {
    fn from(images: Vec<Image>) -> Self {
        ImageSource::List(images)
    }
}

impl From<ImageStream> for ImageSource {
    fn from(stream: ImageStream) -> Self {
        ImageSource::Stream(stream)
    }
}

/// Receiving end of an image stream.
#[derive(Debug)]
pub struct ImageStream {
    receiver: mpsc::UnboundedReceiver<Vec<Image>>,
}

impl ImageStream {
    /// Creates a connected sender/stream pair.
    #[must_use]
    pub fn channel() -> (ImageSender, ImageStream) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (ImageSender { sender }, ImageStream { receiver })
    }
}

/// Host side of an image stream.
#[derive(Debug, Clone)]
pub struct ImageSender {
    sender: mpsc::UnboundedSender<Vec<Image>>,
}

impl ImageSender {
    /// Pushes a new list. Returns false once the gallery has released the
    /// stream.
    pub fn emit(&self, images: Vec<Image>) -> bool {
        self.sender.send(images).is_ok()
    }

    /// Returns true once the gallery has released the stream.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}

/// Outcome of a non-blocking poll of a subscription.
#[derive(Debug)]
pub(crate) enum Polled {
    Emission(Vec<Image>),
    Idle,
    Completed,
}

/// An active subscription to an [`ImageStream`].
///
/// Dropping the subscription releases the stream; the host's sender then
/// reports itself closed.
#[derive(Debug)]
pub(crate) struct Subscription {
    stream: ImageStream,
}

impl Subscription {
    pub(crate) fn new(stream: ImageStream) -> Self {
        log::debug!("subscribed to image stream");
        Self { stream }
    }

    pub(crate) fn try_next(&mut self) -> Polled {
        match self.stream.receiver.try_recv() {
            Ok(images) => Polled::Emission(images),
            Err(TryRecvError::Empty) => Polled::Idle,
            Err(TryRecvError::Disconnected) => Polled::Completed,
        }
    }

    /// Waits for the next emission. `None` once every sender is gone.
    pub(crate) async fn next(&mut self) -> Option<Vec<Image>> {
        self.stream.receiver.recv().await
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.stream.receiver.close();
        log::debug!("released image stream subscription");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_next_reports_emissions_in_order() {
        let (sender, stream) = ImageStream::channel();
        let mut subscription = Subscription::new(stream);

        assert!(sender.emit(vec![Image::new("a.jpg")]));
        assert!(sender.emit(vec![Image::new("b.jpg")]));

        match subscription.try_next() {
            Polled::Emission(images) => assert_eq!(images[0].img, "a.jpg"),
            other => panic!("expected emission, got {other:?}"),
        }
        match subscription.try_next() {
            Polled::Emission(images) => assert_eq!(images[0].img, "b.jpg"),
            other => panic!("expected emission, got {other:?}"),
        }
        assert!(matches!(subscription.try_next(), Polled::Idle));
    }

    #[test]
    fn dropped_sender_completes_subscription() {
        let (sender, stream) = ImageStream::channel();
        let mut subscription = Subscription::new(stream);
        drop(sender);

        assert!(matches!(subscription.try_next(), Polled::Completed));
    }

    #[test]
    fn dropping_subscription_closes_sender() {
        let (sender, stream) = ImageStream::channel();
        let subscription = Subscription::new(stream);
        assert!(!sender.is_closed());

        drop(subscription);
        assert!(sender.is_closed());
        assert!(!sender.emit(vec![Image::new("late.jpg")]));
    }

    #[tokio::test]
    async fn next_waits_for_emission() {
        let (sender, stream) = ImageStream::channel();
        let mut subscription = Subscription::new(stream);

        let handle = tokio::spawn(async move {
            sender.emit(vec![Image::new("async.jpg")]);
        });

        let images = subscription.next().await.expect("stream emits once");
        assert_eq!(images[0].img, "async.jpg");
        handle.await.expect("sender task completes");
        assert!(subscription.next().await.is_none());
    }
}
