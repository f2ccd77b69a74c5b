/// Thumbnail gallery widget tree
///
/// Turns the collection plus a `Layout` into iced rows and columns. Every
/// interactive element carries a `RecordId`, never a position.

use iced::widget::image::Handle;
use iced::widget::{column, container, image, mouse_area, scrollable, text, text_input, Column, Row};
use iced::{alignment, mouse, Background, Border, Color, Element, Length, Padding, Theme};
use std::collections::HashMap;

use crate::config::GalleryConfig;
use crate::state::collection::Collection;
use crate::state::data::{ImageRecord, RecordId};
use crate::state::rename::RenameController;
use crate::ui::grid::{layout, GridLayout, Layout, ScrollAffordance};
use crate::Message;

pub const PLACEHOLDER: &str =
    "No images yet\n\nCopy an image (right-click → Copy Image)\nthen press  Ctrl+V  here to add it";

const GALLERY_BACKGROUND: Color = Color::from_rgb(0.137, 0.137, 0.137);
const CELL_BORDER: Color = Color::from_rgb(0.2, 0.2, 0.2);
const CELL_BORDER_HOVER: Color = Color::from_rgb(0.878, 0.333, 0.333);
const NAME_COLOR: Color = Color::from_rgb(0.667, 0.667, 0.667);

/// Id of the inline rename field, so it can be focused when editing starts
pub fn rename_input_id() -> text_input::Id {
    text_input::Id::new("rename-field")
}

/// Everything the gallery needs to draw one frame
pub struct Gallery<'a> {
    pub collection: &'a Collection,
    pub thumbnails: &'a HashMap<RecordId, Handle>,
    pub renamer: &'a RenameController,
    pub hovered: Option<RecordId>,
    pub config: &'a GalleryConfig,
    /// Visible gallery area in pixels
    pub viewport: (u32, u32),
}

impl<'a> Gallery<'a> {
    pub fn view(self) -> Element<'a, Message> {
        let (viewport_width, viewport_height) = self.viewport;
        let placement = layout(
            self.collection.len(),
            viewport_width,
            self.config.cell_size,
            self.config.cell_margin,
        );
        let scroll = ScrollAffordance::for_layout(&placement, viewport_width, viewport_height);

        let content: Element<'a, Message> = match &placement {
            Layout::Empty => {
                return container(
                    text(PLACEHOLDER)
                        .size(15)
                        .color(Color::from_rgb8(0x66, 0x66, 0x66))
                        .align_x(alignment::Horizontal::Center),
                )
                .center(Length::Fill)
                .style(gallery_style)
                .into();
            }
            Layout::Grid(grid) => self.grid(grid),
        };

        let body: Element<'a, Message> = if scroll.any() {
            let direction = match (scroll.vertical, scroll.horizontal) {
                (true, true) => scrollable::Direction::Both {
                    vertical: scrollable::Scrollbar::default(),
                    horizontal: scrollable::Scrollbar::default(),
                },
                (false, true) => scrollable::Direction::Horizontal(scrollable::Scrollbar::default()),
                _ => scrollable::Direction::Vertical(scrollable::Scrollbar::default()),
            };
            scrollable(content)
                .direction(direction)
                .width(Length::Fill)
                .height(Length::Fill)
                .into()
        } else {
            content
        };

        container(body)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(gallery_style)
            .into()
    }

    fn grid(&self, grid: &GridLayout) -> Element<'a, Message> {
        let margin = self.config.cell_margin as f32;
        let half_margin = (self.config.cell_margin / 2) as f32;

        let mut rows: Vec<Vec<Element<'a, Message>>> = (0..grid.rows()).map(|_| Vec::new()).collect();
        for (record, position) in self.collection.iter().zip(&grid.positions) {
            rows[position.row].push(self.cell(record));
        }

        let rows = rows
            .into_iter()
            .map(|cells| Element::from(Row::with_children(cells).spacing(margin)));

        Column::with_children(rows)
            .spacing(margin)
            .padding(Padding {
                top: half_margin,
                right: half_margin,
                bottom: half_margin,
                left: grid.left_padding as f32 + half_margin,
            })
            .into()
    }

    fn cell(&self, record: &'a ImageRecord) -> Element<'a, Message> {
        let id = record.id;
        let cell_size = self.config.cell_size as f32;
        let thumb_size = (self.config.cell_size.saturating_sub(self.config.label_height + 6)) as f32;
        let hovered = self.hovered == Some(id);

        let picture: Element<'a, Message> = match self.thumbnails.get(&id) {
            Some(handle) => image(handle.clone())
                .width(Length::Fixed(thumb_size))
                .height(Length::Fixed(thumb_size))
                .content_fit(iced::ContentFit::ScaleDown)
                .into(),
            None => container(text("…").size(10))
                .center(Length::Fixed(thumb_size))
                .into(),
        };

        let thumbnail = mouse_area(
            container(picture)
                .padding(2)
                .style(move |_theme: &Theme| container::Style {
                    background: Some(Background::Color(GALLERY_BACKGROUND)),
                    border: Border {
                        color: if hovered { CELL_BORDER_HOVER } else { CELL_BORDER },
                        width: 2.0,
                        radius: 3.0.into(),
                    },
                    ..container::Style::default()
                }),
        )
        .on_press(Message::RemoveImage(id))
        .on_enter(Message::HoverThumbnail(id))
        .on_exit(Message::LeaveThumbnail)
        .interaction(mouse::Interaction::Pointer);

        let label: Element<'a, Message> = match self.renamer.session() {
            Some(session) if session.id == id => text_input("", &session.draft)
                .id(rename_input_id())
                .on_input(Message::RenameInput)
                .on_submit(Message::CommitRename)
                .size(11)
                .padding(1)
                .width(Length::Fixed(cell_size))
                .into(),
            _ => mouse_area(text(&record.name).size(11).color(NAME_COLOR))
                .on_press(Message::BeginRename(id))
                .interaction(mouse::Interaction::Text)
                .into(),
        };

        container(column![thumbnail, label].spacing(2).align_x(alignment::Horizontal::Center))
            .width(Length::Fixed(cell_size))
            .height(Length::Fixed(cell_size))
            .align_x(alignment::Horizontal::Center)
            .into()
    }
}

fn gallery_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(GALLERY_BACKGROUND)),
        border: Border {
            color: Color::from_rgb8(0x35, 0x35, 0x35),
            width: 1.0,
            radius: 4.0.into(),
        },
        ..container::Style::default()
    }
}
