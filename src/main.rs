// SPDX-License-Identifier: MPL-2.0
//! Headless driver for the gallery core.
//!
//! Reads viewer commands from stdin and prints captions and events, which
//! makes it handy for trying settings files and key remaps.

use gallery_lens::application::port::{DownloadPlatform, SAVE_SHORTCUT_COMBOS};
use gallery_lens::application::{Gallery, GalleryOutput};
use gallery_lens::config;
use gallery_lens::domain::gallery::{Action, Image, KeyCode, SwipeDirection};
use gallery_lens::i18n::fluent::I18n;
use gallery_lens::infrastructure::{FsDownloader, InMemoryShortcuts, RecordingDownloads};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

const HELP: &str = "\
gallery-lens [OPTIONS] <IMAGE>...

Options:
  --lang <LOCALE>        UI language (e.g. en-US, fr)
  --config-dir <DIR>     Directory holding settings.toml
  --open <INDEX>         Open the viewer at INDEX once images are loaded
  --downloadable         Enable saving the current image
  --target-dir <DIR>     Copy saved images into DIR
  -h, --help             Print this help

Commands (stdin):
  open N | next | prev | close | outside | key CODE | swipe left|right | save | quit";

struct Flags {
    lang: Option<String>,
    config_dir: Option<PathBuf>,
    open: Option<usize>,
    downloadable: bool,
    target_dir: Option<PathBuf>,
    images: Vec<String>,
}

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        println!("{HELP}");
        std::process::exit(0);
    }

    Ok(Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        open: args.opt_value_from_str("--open")?,
        downloadable: args.contains("--downloadable"),
        target_dir: args.opt_value_from_str("--target-dir")?,
        images: args
            .finish()
            .into_iter()
            .filter_map(|arg| arg.into_string().ok())
            .collect(),
    })
}

fn main() -> ExitCode {
    env_logger::init();

    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            return ExitCode::FAILURE;
        }
    };

    let (config, warning) = config::load_with_override(flags.config_dir.clone());
    let i18n = I18n::new(flags.lang.clone(), &config);
    if let Some(key) = warning {
        eprintln!("{}", i18n.tr(&key));
    }

    let mut options = config.gallery_options(i18n.description_defaults());
    if flags.open.is_some() {
        options.image_pointer = flags.open;
    }
    options.downloadable |= flags.downloadable;

    let downloads: Box<dyn DownloadPlatform> = match flags.target_dir {
        Some(dir) => Box::new(FsDownloader::new(dir)),
        None => Box::new(RecordingDownloads::default()),
    };
    let images: Vec<Image> = flags.images.into_iter().map(Image::new).collect();
    let mut gallery = Gallery::new(InMemoryShortcuts::default(), downloads, options)
        .with_source(images);

    for output in [
        GalleryOutput::Close,
        GalleryOutput::Show,
        GalleryOutput::FirstImage,
        GalleryOutput::LastImage,
        GalleryOutput::HasData,
    ] {
        gallery.subscribe(output, move |event| println!("[{}] {:?}", output.name(), event));
    }
    gallery.init();

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            continue;
        };
        let argument = words.next();

        match (command, argument) {
            ("quit" | "exit", _) => break,
            ("open", Some(index)) => match index.parse::<usize>() {
                Ok(index) => {
                    if let Err(err) = gallery.open_from_strip(index) {
                        eprintln!("{err}");
                    }
                }
                Err(err) => eprintln!("invalid index: {err}"),
            },
            ("next", _) => {
                gallery.next_image();
            }
            ("prev", _) => {
                gallery.prev_image();
            }
            ("close", _) => gallery.close(Action::Click),
            ("outside", _) => {
                gallery.request_close(true);
            }
            ("key", Some(code)) => match code.parse::<u32>() {
                Ok(code) => {
                    gallery.on_key_down(KeyCode(code));
                }
                Err(err) => eprintln!("invalid key code: {err}"),
            },
            ("swipe", Some("left")) => {
                gallery.on_swipe(SwipeDirection::Left);
            }
            ("swipe", Some("right")) => {
                gallery.on_swipe(SwipeDirection::Right);
            }
            ("save", _) => match gallery.keyboard().fire(SAVE_SHORTCUT_COMBOS[0]) {
                Some(action) => {
                    let response = gallery.on_shortcut(action);
                    println!("shortcut handled: {response:?}");
                }
                None => println!("no shortcut registered"),
            },
            _ => eprintln!("unknown command: {line}"),
        }

        if gallery.is_open() {
            if let Some(caption) = gallery.compute_description() {
                println!("{caption}");
            }
        }
        let _ = io::stdout().flush();
    }

    gallery.destroy();
    ExitCode::SUCCESS
}
