use iced::keyboard::{self, key::Named, Key};
use iced::widget::image::Handle;
use iced::widget::{button, column, container, horizontal_space, row, text, text_input};
use iced::{window, Alignment, Element, Length, Size, Subscription, Task, Theme};
use std::collections::HashMap;
use tracing::{debug, info, warn};

mod capture;
mod color;
mod config;
mod error;
mod export;
mod state;
mod ui;

use capture::clipboard::{ingest, SystemClipboard};
use capture::thumbnail::thumbnail_handle;
use config::GalleryConfig;
use error::{ExportError, IngestError};
use state::collection::Collection;
use state::data::RecordId;
use state::rename::{RenameController, RenameOutcome};
use ui::gallery::{rename_input_id, Gallery};
use ui::status::{StatusLine, Tone, REMOVE_HINT};

/// Main application state
struct ClipCollector {
    config: GalleryConfig,
    /// Every image pasted this session
    collection: Collection,
    /// Grid thumbnails, built once per record at paste time
    thumbnails: HashMap<RecordId, Handle>,
    renamer: RenameController,
    status: StatusLine,
    /// Thumbnail currently under the pointer
    hovered: Option<RecordId>,
    /// Gallery area in pixels, derived from the window size
    viewport: (u32, u32),
    clipboard: SystemClipboard,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// Ctrl+V pressed
    Paste,
    /// Thumbnail clicked
    RemoveImage(RecordId),
    HoverThumbnail(RecordId),
    LeaveThumbnail,
    /// Name label clicked
    BeginRename(RecordId),
    RenameInput(String),
    /// Enter pressed in the rename field
    CommitRename,
    /// Escape pressed
    CancelRename,
    ClearAll,
    DownloadAll,
    WindowResized(Size),
    /// A status revert timer fired for the given generation
    StatusExpired(u64),
}

impl ClipCollector {
    /// Create a new instance of the application
    fn new(config: GalleryConfig) -> (Self, Task<Message>) {
        let viewport = config.viewport_for_window(config.window_width, config.window_height);
        info!("🎨 Clip collector ready, viewport {}x{}", viewport.0, viewport.1);

        (
            ClipCollector {
                config,
                collection: Collection::new(),
                thumbnails: HashMap::new(),
                renamer: RenameController::new(),
                status: StatusLine::default(),
                hovered: None,
                viewport,
                clipboard: SystemClipboard::new(),
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Paste => self.paste(),
            Message::RemoveImage(id) => self.remove(id),
            Message::HoverThumbnail(id) => {
                self.hovered = Some(id);
                self.status.hint(REMOVE_HINT);
                Task::none()
            }
            Message::LeaveThumbnail => {
                self.hovered = None;
                self.status.reset();
                Task::none()
            }
            Message::BeginRename(id) => self.begin_rename(id),
            Message::RenameInput(draft) => {
                self.renamer.update_draft(draft);
                Task::none()
            }
            Message::CommitRename => {
                self.commit_rename();
                Task::none()
            }
            Message::CancelRename => {
                self.renamer.cancel();
                Task::none()
            }
            Message::ClearAll => self.clear_all(),
            Message::DownloadAll => self.download_all(),
            Message::WindowResized(size) => {
                self.viewport = self.config.viewport_for_window(size.width, size.height);
                Task::none()
            }
            Message::StatusExpired(generation) => {
                self.status.expire(generation);
                Task::none()
            }
        }
    }

    /// Show a transient status message and schedule its revert
    fn flash(&mut self, text: impl Into<String>, tone: Tone) -> Task<Message> {
        let generation = self.status.show(text, tone);
        let delay = self.config.status_delay(tone);
        Task::perform(tokio::time::sleep(delay), move |_| {
            Message::StatusExpired(generation)
        })
    }

    fn paste(&mut self) -> Task<Message> {
        match ingest(&mut self.clipboard, &mut self.collection) {
            Ok(id) => {
                if let Some(record) = self.collection.get_by_id(id) {
                    let handle = thumbnail_handle(&record.image, self.config.thumbnail_size);
                    self.thumbnails.insert(id, handle);
                }
                self.flash("✓ Image added!", Tone::Success)
            }
            Err(IngestError::NoImage) => self.flash("⚠ No image in clipboard!", Tone::Warning),
            Err(IngestError::NotAnImage) => {
                self.flash("⚠ Please copy an image, not a file!", Tone::Warning)
            }
            Err(err @ IngestError::IngestFailed(_)) => {
                self.flash(format!("⚠ Error: {}", err), Tone::Error)
            }
        }
    }

    fn remove(&mut self, id: RecordId) -> Task<Message> {
        self.commit_rename();
        match self.collection.remove_by_id(id) {
            Some(record) => {
                self.thumbnails.remove(&id);
                if self.hovered == Some(id) {
                    self.hovered = None;
                }
                info!("🗑  Removed {} ({} left)", record.name, self.collection.len());
                self.flash("✓ Image removed!", Tone::Success)
            }
            None => Task::none(),
        }
    }

    fn begin_rename(&mut self, id: RecordId) -> Task<Message> {
        let Some(index) = self.collection.index_of(id) else {
            return Task::none();
        };

        match self.renamer.begin(&mut self.collection, index) {
            Ok(_) => {
                let field = rename_input_id();
                text_input::focus(field.clone()).chain(text_input::select_all(field))
            }
            Err(err) => {
                warn!("⚠️  Cannot rename: {}", err);
                Task::none()
            }
        }
    }

    /// Commit an open rename, if any
    fn commit_rename(&mut self) {
        match self.renamer.commit(&mut self.collection) {
            RenameOutcome::Renamed(name) => debug!(%name, "rename committed"),
            RenameOutcome::KeptPrevious => debug!("blank rename ignored"),
            RenameOutcome::RecordGone | RenameOutcome::NoSession => {}
        }
    }

    fn clear_collection(&mut self) -> usize {
        self.renamer.cancel();
        self.thumbnails.clear();
        self.hovered = None;
        let count = self.collection.clear();
        info!("🧹 Cleared {} images", count);
        count
    }

    fn clear_all(&mut self) -> Task<Message> {
        self.commit_rename();
        if self.collection.is_empty() {
            ui::dialogs::inform("Clear All", "No images to clear!");
            return Task::none();
        }

        let question = format!(
            "Are you sure you want to remove all {} images?\n\nThis cannot be undone.",
            self.collection.len()
        );
        if !ui::dialogs::confirm("Clear All", &question) {
            return Task::none();
        }

        self.clear_collection();
        self.flash("✓ All images cleared!", Tone::Success)
    }

    fn download_all(&mut self) -> Task<Message> {
        self.commit_rename();
        if self.collection.is_empty() {
            ui::dialogs::inform("Download All", "No images to download!");
            return Task::none();
        }

        let Some(folder) = ui::dialogs::pick_export_folder() else {
            debug!("export cancelled");
            return Task::none();
        };

        match export::export_all(self.collection.records(), &folder, self.config.jpeg_quality) {
            Ok(report) if report.is_complete() => {
                ui::dialogs::inform("Download Complete", &report.summary(&folder));
                if ui::dialogs::confirm(
                    "Clear Images?",
                    "Would you like to clear the collected images now?",
                ) {
                    self.clear_collection();
                }
            }
            Ok(report) => {
                ui::dialogs::warn("Download Complete", &report.summary(&folder));
            }
            Err(ExportError::NothingToExport) => {
                ui::dialogs::inform("Download All", "No images to download!");
            }
            Err(err) => {
                ui::dialogs::warn("Download All", &err.to_string());
            }
        }

        Task::none()
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let top_bar = row![
            text(self.status.text())
                .size(14)
                .color(self.status.tone().color()),
            horizontal_space(),
            text(format!("Images: {}", self.collection.len())).size(14),
        ]
        .align_y(Alignment::Center);

        let gallery = Gallery {
            collection: &self.collection,
            thumbnails: &self.thumbnails,
            renamer: &self.renamer,
            hovered: self.hovered,
            config: &self.config,
            viewport: self.viewport,
        }
        .view();

        let buttons = row![
            button("Clear All")
                .on_press(Message::ClearAll)
                .padding([10, 20])
                .style(button::secondary),
            horizontal_space(),
            button("Download All")
                .on_press(Message::DownloadAll)
                .padding([10, 20])
                .style(button::secondary),
        ];

        container(column![top_bar, gallery, buttons].spacing(12))
            .padding([12, 16])
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        let paste = keyboard::on_key_press(|key, modifiers| match key.as_ref() {
            Key::Character("v") | Key::Character("V") if modifiers.command() => {
                Some(Message::Paste)
            }
            _ => None,
        });

        // Escape is listened for regardless of focus so it reaches the rename field
        let window_events = iced::event::listen_with(|event, _status, _id| match event {
            iced::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
            iced::Event::Keyboard(keyboard::Event::KeyPressed {
                key: Key::Named(Named::Escape),
                ..
            }) => Some(Message::CancelRename),
            _ => None,
        });

        Subscription::batch([paste, window_events])
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// Log to stdout; `RUST_LOG` overrides the default filter
fn setup_logging() {
    use tracing_subscriber::prelude::*;

    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new("info,clip_collector=debug,wgpu_core=warn,wgpu_hal=warn")
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .init();
}

fn main() -> iced::Result {
    setup_logging();

    let config = GalleryConfig::default();
    let window_settings = window::Settings {
        size: Size::new(config.window_width, config.window_height),
        min_size: Some(Size::new(config.min_width, config.min_height)),
        ..window::Settings::default()
    };

    iced::application(config::WINDOW_TITLE, ClipCollector::update, ClipCollector::view)
        .subscription(ClipCollector::subscription)
        .theme(ClipCollector::theme)
        .window(window_settings)
        .centered()
        .run_with(move || ClipCollector::new(config))
}
