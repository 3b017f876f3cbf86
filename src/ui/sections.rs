/// Page sections: navigation bar, hero, about, portfolio, services, rules,
/// contact and footer
use chrono::{Datelike, Local};
use iced::widget::{
    button, column, container, horizontal_space, image, row, stack, text, Column, Space,
};
use iced::{Alignment, Color, ContentFit, Element, Length};
use iced_aw::Wrap;
use std::sync::Arc;

use super::content::{self, Package, RuleBlock, SectionHeading, PROFILE};
use super::style;
use crate::assets::AssetManifest;
use crate::state::data::{ImageRef, Project};
use crate::state::navigation::{Section, SectionLayout};
use crate::Message;

const CONTENT_WIDTH: f32 = 1080.0;

fn picture(image_ref: &ImageRef) -> iced::widget::Image<image::Handle> {
    image(image::Handle::from_path(image_ref.path()))
}

fn heading<'a>(heading: &SectionHeading) -> Element<'a, Message> {
    column![
        text(heading.title).size(40).font(style::BOLD).color(style::INK),
        text(heading.subtitle).size(20).color(style::MUTED),
    ]
    .spacing(12)
    .align_x(Alignment::Center)
    .width(Length::Fill)
    .into()
}

/// Fixed-height frame so section offsets stay predictable
fn frame<'a>(section: Section, background: Color, content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    container(
        container(content)
            .max_width(CONTENT_WIDTH)
            .padding([64, 24]),
    )
    .center_x(Length::Fill)
    .height(Length::Fixed(section.height()))
    .clip(true)
    .style(style::band(background))
    .into()
}

pub fn nav_bar<'a>(active: Section) -> Element<'a, Message> {
    let links = Section::ALL.into_iter().fold(row![].spacing(8), |links, section| {
        links.push(
            button(text(section.label()).size(16))
                .padding([6, 12])
                .style(style::nav_item(section == active))
                .on_press(Message::ScrollToSection(section.id())),
        )
    });

    container(
        row![
            text(PROFILE.name).size(24).font(style::BOLD).color(style::INK),
            horizontal_space(),
            links,
        ]
        .align_y(Alignment::Center),
    )
    .padding([14, 24])
    .width(Length::Fill)
    .style(style::nav_bar)
    .into()
}

/// All sections in layout order, followed by the footer
pub fn page<'a>(
    layout: &SectionLayout,
    manifest: &'a AssetManifest,
    projects: &'a [Arc<Project>],
) -> Element<'a, Message> {
    let sections = layout.sections().iter().map(|&section| match section {
        Section::Home => hero(manifest.hero_background.as_ref()),
        Section::About => about(manifest.headshot.as_ref()),
        Section::Portfolio => portfolio(projects),
        Section::Services => services(),
        Section::Rules => rules(),
        Section::Contact => contact(),
    });

    Column::with_children(sections).push(footer()).into()
}

fn hero<'a>(background: Option<&ImageRef>) -> Element<'a, Message> {
    let content = column![
        text(PROFILE.headline)
            .size(64)
            .font(style::BOLD)
            .color(Color::WHITE)
            .align_x(Alignment::Center),
        text(PROFILE.tagline)
            .size(24)
            .color(Color::from_rgb(0.9, 0.91, 0.92))
            .align_x(Alignment::Center),
        row![
            button(text("Посмотреть портфолио  →").size(18))
                .padding([12, 24])
                .style(style::solid(Color::WHITE, style::INK))
                .on_press(Message::ScrollToSection(Section::Portfolio.id())),
            button(text("Связаться со мной").size(18))
                .padding([12, 24])
                .style(style::outline)
                .on_press(Message::ScrollToSection(Section::Contact.id())),
        ]
        .spacing(16),
    ]
    .spacing(28)
    .max_width(900.0)
    .align_x(Alignment::Center);

    let base: Element<'a, Message> = match background {
        Some(image_ref) => picture(image_ref)
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => container(Space::new(Length::Fill, Length::Fill))
            .style(style::band(style::NIGHT))
            .into(),
    };

    container(stack![
        base,
        container(content)
            .center(Length::Fill)
            .style(style::hero_shade),
    ])
    .width(Length::Fill)
    .height(Length::Fixed(Section::Home.height()))
    .clip(true)
    .into()
}

fn about<'a>(headshot: Option<&ImageRef>) -> Element<'a, Message> {
    let copy = column![
        text("Обо мне").size(40).font(style::BOLD),
        text(PROFILE.about[0]).size(18).color(style::MUTED),
        text(PROFILE.about[1]).size(18).color(style::MUTED),
        row![
            text(format!("📍 {}", PROFILE.location)).color(style::MUTED),
            text(format!("📷 {}", PROFILE.specialty)).color(style::MUTED),
        ]
        .spacing(24),
    ]
    .spacing(20)
    .width(Length::FillPortion(1));

    let portrait: Element<'a, Message> = match headshot {
        Some(image_ref) => picture(image_ref)
            .content_fit(ContentFit::Cover)
            .width(Length::FillPortion(1))
            .height(Length::Fixed(420.0))
            .into(),
        None => container(text(PROFILE.name).color(style::MUTED))
            .center_x(Length::FillPortion(1))
            .center_y(Length::Fixed(420.0))
            .style(style::placeholder)
            .into(),
    };

    frame(
        Section::About,
        style::PAPER,
        row![copy, portrait].spacing(48).align_y(Alignment::Center),
    )
}

fn project_card<'a>(position: usize, project: &'a Project) -> Element<'a, Message> {
    let cover: Element<'a, Message> = match &project.cover_image {
        Some(image_ref) => picture(image_ref)
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fixed(240.0))
            .into(),
        None => container(text("Нет фото").color(style::MUTED))
            .center_x(Length::Fill)
            .center_y(Length::Fixed(240.0))
            .style(style::placeholder)
            .into(),
    };

    let body = column![
        text(&project.title).size(20).font(style::BOLD),
        text(&project.description).size(15).color(style::MUTED),
        text(format!("Посмотреть галерею · {} фото", project.image_count()))
            .size(14)
            .color(style::ACCENT),
    ]
    .spacing(8)
    .padding(20);

    button(column![cover, body])
        .padding(0)
        .width(Length::Fixed(330.0))
        .style(style::project_card)
        .on_press_maybe(project.has_images().then_some(Message::OpenGallery(position)))
        .into()
}

fn portfolio<'a>(projects: &'a [Arc<Project>]) -> Element<'a, Message> {
    let cards = projects
        .iter()
        .enumerate()
        .map(|(position, project)| project_card(position, project))
        .collect();

    frame(
        Section::Portfolio,
        style::MIST,
        column![
            heading(&content::PORTFOLIO_HEADING),
            Wrap::with_elements(cards).spacing(24.0).line_spacing(24.0),
        ]
        .spacing(48),
    )
}

fn package_card<'a>(package: &'a Package) -> Element<'a, Message> {
    let features = package.features.iter().fold(column![].spacing(10), |list, feature| {
        list.push(row![text("✓").color(style::CHECK), text(*feature)].spacing(10))
    });

    let mut card = column![];
    if package.highlighted {
        card = card.push(
            container(text(content::POPULAR_BADGE).size(13))
                .padding([4, 14])
                .style(style::badge),
        );
    }

    let call_to_action = if package.highlighted {
        style::solid(style::ACCENT, Color::WHITE)
    } else {
        style::solid(style::INK, Color::WHITE)
    };

    card = card
        .push(text(package.name).size(26).font(style::BOLD))
        .push(text(package.price).size(38).font(style::BOLD))
        .push(text(package.summary).color(style::MUTED))
        .push(features)
        .push(
            button(
                container(text(package.call_to_action)).center_x(Length::Fill),
            )
            .padding(12)
            .width(Length::Fill)
            .style(call_to_action)
            .on_press(Message::ScrollToSection(Section::Contact.id())),
        );

    container(card.spacing(16).align_x(Alignment::Center))
        .padding(28)
        .width(Length::Fixed(330.0))
        .style(style::card(package.highlighted))
        .into()
}

fn services<'a>() -> Element<'a, Message> {
    let cards = content::PACKAGES.iter().map(package_card).collect();

    frame(
        Section::Services,
        style::PAPER,
        column![
            heading(&content::SERVICES_HEADING),
            Wrap::with_elements(cards).spacing(24.0).line_spacing(24.0),
        ]
        .spacing(48),
    )
}

fn rule_block<'a>(block: &'a RuleBlock, marker: Color) -> Element<'a, Message> {
    let items = block.items.iter().fold(column![].spacing(10), |list, item| {
        list.push(text(format!("• {item}")).color(style::MUTED))
    });

    column![
        row![
            text("■").color(marker),
            text(block.title).size(20).font(style::BOLD),
        ]
        .spacing(12)
        .align_y(Alignment::Center),
        items,
    ]
    .spacing(16)
    .width(Length::FillPortion(1))
    .into()
}

fn rules<'a>() -> Element<'a, Message> {
    let terms = content::TERMS.chunks(2).fold(column![].spacing(20), |grid, pair| {
        let cells = pair.iter().map(|(term, explanation)| {
            column![text(*term).font(style::BOLD), text(*explanation).color(style::MUTED)]
                .spacing(6)
                .width(Length::FillPortion(1))
                .into()
        });
        grid.push(iced::widget::Row::with_children(cells).spacing(24))
    });

    let card = column![
        row![
            rule_block(&content::CANCELLATION, style::ACCENT),
            rule_block(&content::RESCHEDULING, style::CHECK),
        ]
        .spacing(32),
        text(content::TERMS_TITLE).size(20).font(style::BOLD),
        terms,
    ]
    .spacing(28);

    frame(
        Section::Rules,
        style::MIST,
        column![
            heading(&content::RULES_HEADING),
            container(card).padding(32).style(style::card(false)),
        ]
        .spacing(40),
    )
}

fn link_button<'a>(label: &'a str, url: &'static str, color: Color) -> Element<'a, Message> {
    button(text(label))
        .padding(0)
        .style(style::link(color))
        .on_press(Message::OpenLink(url))
        .into()
}

fn contact<'a>() -> Element<'a, Message> {
    let offerings = content::OFFERINGS.iter().fold(column![].spacing(8), |list, offering| {
        list.push(text(format!("• {offering}")).color(style::MUTED))
    });

    let details = column![
        text("Контактная информация").size(24).font(style::BOLD),
        text(format!("📍 {}", PROFILE.location)).color(style::MUTED),
        row![
            text("Instagram").color(style::MUTED),
            link_button(content::INSTAGRAM.label, content::INSTAGRAM.url, style::INK),
        ]
        .spacing(12),
        row![
            text("Telegram").color(style::MUTED),
            link_button(content::TELEGRAM.label, content::TELEGRAM.url, style::ACCENT),
        ]
        .spacing(12),
        text(content::OFFERINGS_TITLE).size(18).font(style::BOLD),
        offerings,
    ]
    .spacing(16)
    .width(Length::FillPortion(1));

    let callout = &content::TELEGRAM_CALLOUT;
    let telegram = container(
        column![
            text("✉").size(56).color(style::ACCENT),
            text(callout.title).size(20).font(style::BOLD),
            text(callout.body).color(style::MUTED).align_x(Alignment::Center),
            button(text(callout.action))
                .padding([12, 24])
                .style(style::solid(style::ACCENT, Color::WHITE))
                .on_press(Message::OpenLink(content::TELEGRAM.url)),
        ]
        .spacing(16)
        .align_x(Alignment::Center),
    )
    .padding(32)
    .width(Length::FillPortion(1))
    .style(style::callout);

    frame(
        Section::Contact,
        style::PAPER,
        column![
            heading(&content::CONTACT_HEADING),
            container(row![details, telegram].spacing(48).align_y(Alignment::Center))
                .padding(32)
                .style(style::card(false)),
        ]
        .spacing(40),
    )
}

fn footer<'a>() -> Element<'a, Message> {
    let grey = Color::from_rgb(0.61, 0.64, 0.69);

    container(
        column![
            text(format!(
                "© {} {}. {}",
                Local::now().year(),
                PROFILE.name,
                content::FOOTER_TAGLINE
            ))
            .color(grey),
            row![
                link_button(content::FOOTER_INSTAGRAM, content::INSTAGRAM.url, grey),
                link_button(content::FOOTER_TELEGRAM, content::TELEGRAM.url, grey),
            ]
            .spacing(24),
        ]
        .spacing(16)
        .align_x(Alignment::Center),
    )
    .padding(32)
    .center_x(Length::Fill)
    .style(style::band(style::NIGHT))
    .into()
}
