/// Gallery modal viewer
///
/// Draws the open gallery over the page: backdrop, current image with
/// counter and title, thumbnail strip, navigation arrows and close button.
/// The keyboard binding is only subscribed while the modal is open.
use iced::keyboard::{self, key, Key};
use iced::widget::{
    button, center, column, container, image, mouse_area, opaque, row, scrollable, stack, text,
    Row, Space,
};
use iced::{Alignment, ContentFit, Element, Length};

use super::style;
use crate::state::gallery::OpenGallery;
use crate::Message;

const THUMBNAIL_SIZE: f32 = 64.0;
const ARROW_SLOT: f32 = 72.0;

/// Escape closes, arrows navigate
pub fn key_binding(key: Key, _modifiers: keyboard::Modifiers) -> Option<Message> {
    match key {
        Key::Named(key::Named::Escape) => Some(Message::CloseGallery),
        Key::Named(key::Named::ArrowLeft) => Some(Message::PreviousImage),
        Key::Named(key::Named::ArrowRight) => Some(Message::NextImage),
        _ => None,
    }
}

/// Messages for the ‹ and › arrows, `None` where there is nowhere to go
fn arrow_messages(open: &OpenGallery) -> (Option<Message>, Option<Message>) {
    let controls = open.controls();
    (
        controls.previous.then_some(Message::PreviousImage),
        controls.next.then_some(Message::NextImage),
    )
}

fn arrow<'a>(glyph: &'a str, message: Option<Message>) -> Element<'a, Message> {
    match message {
        Some(message) => button(text(glyph).size(56))
            .style(style::overlay_control)
            .on_press(message)
            .into(),
        None => Space::with_width(Length::Fixed(ARROW_SLOT)).into(),
    }
}

fn thumbnails<'a>(open: &OpenGallery) -> Element<'a, Message> {
    let project = open.project();
    let strip = project.images.iter().enumerate().map(|(index, image_ref)| {
        button(
            image(image::Handle::from_path(image_ref.path()))
                .content_fit(ContentFit::Cover)
                .width(Length::Fixed(THUMBNAIL_SIZE))
                .height(Length::Fixed(THUMBNAIL_SIZE)),
        )
        .padding(2)
        .style(style::thumbnail(index == open.index()))
        .on_press(Message::SelectImage(index))
        .into()
    });

    scrollable(Row::with_children(strip).spacing(8))
        .direction(scrollable::Direction::Horizontal(scrollable::Scrollbar::new()))
        .into()
}

pub fn view<'a>(open: &'a OpenGallery) -> Element<'a, Message> {
    let project = open.project();
    let (previous, next) = arrow_messages(open);

    let viewer = column![
        image(image::Handle::from_path(open.current_image().path()))
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::FillPortion(5)),
        text(&project.title).size(22).font(style::BOLD).color(iced::Color::WHITE),
        text(format!("{} из {}", open.index() + 1, project.image_count()))
            .color(iced::Color::from_rgb(0.82, 0.84, 0.86)),
        thumbnails(open),
    ]
    .spacing(12)
    .max_width(960.0)
    .align_x(Alignment::Center);

    let navigation = row![
        arrow("‹", previous),
        // Clicks on the image and thumbnails must not reach the backdrop
        opaque(viewer),
        arrow("›", next),
    ]
    .spacing(16)
    .align_y(Alignment::Center);

    let close = container(
        button(text("✕").size(32))
            .style(style::overlay_control)
            .on_press(Message::CloseGallery),
    )
    .padding(16)
    .width(Length::Fill)
    .align_x(Alignment::End);

    let backdrop = mouse_area(
        container(Space::new(Length::Fill, Length::Fill)).style(style::backdrop),
    )
    .on_press(Message::CloseGallery);

    opaque(stack![backdrop, center(navigation).padding(16), close])
}
