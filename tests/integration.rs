// SPDX-License-Identifier: MPL-2.0
use gallery_lens::application::port::{ShortcutAction, ShortcutResponse, SAVE_SHORTCUT_COMBOS};
use gallery_lens::application::{Gallery, GalleryOutput, ImageStream, InputChange};
use gallery_lens::config::{self, Config, GalleryConfig, KeyboardConfig};
use gallery_lens::domain::gallery::{Action, DescriptionFormat, Image, KeyCode, NavigationEvent};
use gallery_lens::i18n::fluent::I18n;
use gallery_lens::infrastructure::{InMemoryShortcuts, RecordingDownloads};
use std::cell::RefCell;
use std::rc::Rc;
use tempfile::tempdir;

type TestGallery = Gallery<InMemoryShortcuts, RecordingDownloads>;

fn photos(count: usize) -> Vec<Image> {
    (1..=count)
        .map(|n| Image::new(format!("photos/beach-{n}.jpg")).with_description(format!("Beach {n}")))
        .collect()
}

fn log_events(gallery: &mut TestGallery) -> Rc<RefCell<Vec<(GalleryOutput, NavigationEvent)>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    for output in [
        GalleryOutput::Close,
        GalleryOutput::Show,
        GalleryOutput::FirstImage,
        GalleryOutput::LastImage,
        GalleryOutput::HasData,
    ] {
        let log = Rc::clone(&log);
        gallery.subscribe(output, move |event| log.borrow_mut().push((output, *event)));
    }
    log
}

#[test]
fn test_browse_wrap_and_close_from_strip() {
    let mut options = Config::default().gallery_options(DescriptionFormat::default());
    options.downloadable = true;
    options.close_on_outside_click = true;

    let mut gallery = Gallery::new(
        InMemoryShortcuts::default(),
        RecordingDownloads::default(),
        options,
    )
    .with_source(photos(3));
    let log = log_events(&mut gallery);
    gallery.init();

    assert!(gallery.show_gallery_strip());
    assert!(!gallery.is_open());
    assert_eq!(log.borrow().len(), 1);
    assert_eq!(log.borrow()[0].0, GalleryOutput::HasData);

    gallery.open_from_strip(2).expect("index 2 is valid");
    assert_eq!(gallery.keyboard().registrations().len(), 1);

    assert_eq!(gallery.next_image(), Some(0));
    assert_eq!(
        gallery.compute_description().as_deref(),
        Some("Image 1/3 - Beach 1")
    );

    let outputs: Vec<GalleryOutput> = log.borrow().iter().map(|(output, _)| *output).collect();
    assert_eq!(
        outputs,
        vec![
            GalleryOutput::HasData,
            GalleryOutput::Show,
            GalleryOutput::FirstImage,
            GalleryOutput::Show,
        ]
    );
    assert_eq!(log.borrow()[3].1.position(), Some(1));

    let action = gallery
        .keyboard()
        .fire(SAVE_SHORTCUT_COMBOS[1])
        .expect("save shortcut registered while open");
    assert_eq!(action, ShortcutAction::DownloadCurrent);
    assert_eq!(gallery.on_shortcut(action), ShortcutResponse::PreventDefault);
    assert_eq!(gallery.downloads().saved().len(), 1);
    assert_eq!(gallery.downloads().saved()[0].filename, "beach-1.jpg");

    assert!(!gallery.request_close(false));
    assert!(gallery.request_close(true));
    assert!(!gallery.is_open());
    assert!(gallery.keyboard().registrations().is_empty());
    assert_eq!(log.borrow().last().map(|(output, _)| *output), Some(GalleryOutput::Close));
}

#[test]
fn test_settings_file_drives_gallery_options() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let stored = Config {
        gallery: GalleryConfig {
            initial_pointer: Some(1),
            ..GalleryConfig::default()
        },
        keyboard: KeyboardConfig {
            right: Some(68),
            ..KeyboardConfig::default()
        },
        ..Config::default()
    };
    config::save_to_path(&stored, &path).expect("Failed to write config file");
    let loaded = config::load_from_path(&path).expect("Failed to read config file");
    assert_eq!(loaded, stored);

    let i18n = I18n::new(Some("en-US".to_string()), &loaded);
    let mut gallery = Gallery::new(
        InMemoryShortcuts::default(),
        RecordingDownloads::default(),
        loaded.gallery_options(i18n.description_defaults()),
    )
    .with_source(photos(4));
    gallery.init();

    assert!(gallery.is_open());
    assert!(!gallery.show_gallery_strip());
    assert_eq!(gallery.current_index(), Some(1));

    // 'D' now advances, the old right arrow does nothing.
    assert!(gallery.on_key_down(KeyCode(68)));
    assert_eq!(gallery.current_index(), Some(2));
    assert!(!gallery.on_key_down(KeyCode(39)));
    assert_eq!(gallery.current_index(), Some(2));

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_language_from_config_changes_captions() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let mut stored = Config::default();
    stored.general.language = Some("fr".to_string());
    config::save_with_override(&stored, Some(dir.path().to_path_buf()))
        .expect("Failed to write french config");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());

    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");

    let mut gallery = Gallery::new(
        InMemoryShortcuts::default(),
        RecordingDownloads::default(),
        loaded.gallery_options(i18n.description_defaults()),
    )
    .with_source(photos(5));
    gallery.init();
    gallery.open_at(1).expect("index 1 is valid");

    assert_eq!(
        gallery.compute_description().as_deref(),
        Some("Image 2 sur 5 - Beach 2")
    );
}

#[tokio::test]
async fn test_streamed_images_replace_list_in_order() {
    let (sender, stream) = ImageStream::channel();
    let mut gallery = Gallery::new(
        InMemoryShortcuts::default(),
        RecordingDownloads::default(),
        Default::default(),
    );
    let log = log_events(&mut gallery);
    gallery.apply_changes([
        InputChange::ImagePointer(Some(2)),
        InputChange::Images(stream.into()),
    ]);
    assert!(gallery.has_subscription());
    assert!(gallery.images().is_empty());

    let producer = tokio::spawn(async move {
        sender.emit(photos(2));
        sender.emit(photos(3));
    });
    producer.await.expect("producer task panicked");

    assert!(gallery.next_emission().await);
    assert_eq!(gallery.images().len(), 2);
    assert!(gallery.show_gallery_strip());
    assert!(!gallery.is_open());

    assert!(gallery.next_emission().await);
    assert_eq!(gallery.images().len(), 3);
    assert!(gallery.is_open());
    assert_eq!(gallery.current_index(), Some(2));

    // The sender was dropped with the producer task.
    assert!(!gallery.next_emission().await);

    let outputs: Vec<GalleryOutput> = log.borrow().iter().map(|(output, _)| *output).collect();
    assert_eq!(
        outputs,
        vec![
            GalleryOutput::HasData,
            GalleryOutput::HasData,
            GalleryOutput::Show,
        ]
    );
    let last = log.borrow()[2].1;
    assert_eq!(last.kind, Action::Load);
    assert_eq!(last.position(), Some(3));
}
