use iced::widget::scrollable::AbsoluteOffset;
use iced::widget::{column, scrollable, stack};
use iced::{keyboard, window, Element, Length, Size, Subscription, Task, Theme};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

mod assets;
mod config;
mod error;
mod logging;
mod state;
mod ui;

use assets::AssetManifest;
use config::Config;
use error::AssetError;
use state::data::Project;
use state::gallery::GalleryModal;
use state::navigation::PageNavigation;
use state::portfolio;

/// Main application state
struct PortfolioSite {
    /// Ordered images discovered at startup
    manifest: AssetManifest,
    /// Fixed project list built from the manifest
    projects: Vec<Arc<Project>>,
    /// Active section and any smooth scroll in flight
    navigation: PageNavigation,
    gallery: GalleryModal,
    /// Last vertical offset reported by the page scrollable
    page_offset: f32,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// Background asset scan finished
    ManifestLoaded(Result<AssetManifest, AssetError>),
    /// Navigation bar or call to action targeting a section id
    ScrollToSection(&'static str),
    /// Frame tick while a smooth scroll is running
    AnimationFrame(Instant),
    /// The page scrollable moved
    PageScrolled(f32),
    /// Open the gallery of the project at this position
    OpenGallery(usize),
    CloseGallery,
    PreviousImage,
    NextImage,
    SelectImage(usize),
    /// Hand an outbound link to the system browser
    OpenLink(&'static str),
}

fn page_scroll_id() -> scrollable::Id {
    scrollable::Id::new("page")
}

fn scroll_page(offset_y: f32) -> Task<Message> {
    scrollable::scroll_to(page_scroll_id(), AbsoluteOffset { x: 0.0, y: offset_y })
}

impl PortfolioSite {
    /// Create the application and kick off the one-shot asset scan
    fn new(config: Config) -> (Self, Task<Message>) {
        let scan = assets::load_manifest(
            config.assets_root,
            portfolio::folder_names(),
            config.manifest_path,
        );

        (
            Self::with_manifest(AssetManifest::default()),
            Task::perform(scan, Message::ManifestLoaded),
        )
    }

    fn with_manifest(manifest: AssetManifest) -> Self {
        Self {
            projects: portfolio::build_portfolio(&manifest),
            manifest,
            navigation: PageNavigation::default(),
            gallery: GalleryModal::default(),
            page_offset: 0.0,
        }
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ManifestLoaded(Ok(manifest)) => {
                self.projects = portfolio::build_portfolio(&manifest);
                self.manifest = manifest;

                for project in &self.projects {
                    info!(
                        "📸 {} → {} images{}",
                        project.folder,
                        project.image_count(),
                        if project.has_images() { "" } else { " (no fallback available)" }
                    );
                }
                Task::none()
            }
            Message::ManifestLoaded(Err(e)) => {
                // Keep the empty manifest; cards show placeholders
                warn!("⚠️  {e}");
                Task::none()
            }
            Message::ScrollToSection(id) => {
                if self.gallery.is_open() {
                    return Task::none();
                }

                match self.navigation.scroll_to_section(id, self.page_offset, Instant::now()) {
                    Some(offset) => debug!(id, offset, "scrolling to section"),
                    None => debug!(id, "no such section"),
                }
                Task::none()
            }
            Message::AnimationFrame(now) => match self.navigation.tick(now) {
                Some(offset) => scroll_page(offset),
                None => Task::none(),
            },
            Message::PageScrolled(offset) => {
                if let Some(lock) = self.gallery.scroll_lock() {
                    // Background stays put while the gallery is open
                    if (offset - lock.offset_y).abs() > f32::EPSILON {
                        return scroll_page(lock.offset_y);
                    }
                    return Task::none();
                }

                self.page_offset = offset;
                Task::none()
            }
            Message::OpenGallery(position) => {
                if let Some(project) = self.projects.get(position).cloned() {
                    let title = project.title.clone();
                    self.navigation.cancel_scroll();
                    if self.gallery.open(project, 0, self.page_offset) {
                        info!("🖼️  Opened gallery: {title}");
                    }
                }
                Task::none()
            }
            Message::CloseGallery => {
                if let Some(lock) = self.gallery.close() {
                    debug!(offset = lock.offset_y, "gallery closed, page scrolling restored");
                }
                Task::none()
            }
            Message::PreviousImage => {
                self.gallery.previous();
                Task::none()
            }
            Message::NextImage => {
                self.gallery.next();
                Task::none()
            }
            Message::SelectImage(index) => {
                self.gallery.select(index);
                Task::none()
            }
            Message::OpenLink(url) => {
                if !ui::content::is_outbound_link(url) {
                    warn!("⚠️  Refusing to open unknown link {url}");
                } else if let Err(e) = open::that_detached(url) {
                    warn!("⚠️  Could not open {url}: {e}");
                }
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let page = scrollable(ui::sections::page(
            self.navigation.layout(),
            &self.manifest,
            &self.projects,
        ))
        .id(page_scroll_id())
        .on_scroll(|viewport| Message::PageScrolled(viewport.absolute_offset().y))
        .height(Length::Fill);

        let shell = column![ui::sections::nav_bar(self.navigation.active()), page];

        match self.gallery.as_open() {
            Some(open) => stack![shell, ui::gallery::view(open)].into(),
            None => shell.into(),
        }
    }

    /// Keyboard only while the gallery is open, frames only while scrolling
    fn subscription(&self) -> Subscription<Message> {
        let keys = if self.gallery.is_open() {
            keyboard::on_key_press(ui::gallery::key_binding)
        } else {
            Subscription::none()
        };

        let frames = if self.navigation.is_scrolling() {
            window::frames().map(Message::AnimationFrame)
        } else {
            Subscription::none()
        };

        Subscription::batch([keys, frames])
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Light
    }
}

fn main() -> iced::Result {
    logging::init_tracing();

    let config = Config::load();
    let window_size = Size::new(config.window_width, config.window_height);

    iced::application(
        "Полина Яворская · Фотограф",
        PortfolioSite::update,
        PortfolioSite::view,
    )
    .subscription(PortfolioSite::subscription)
    .theme(PortfolioSite::theme)
    .window_size(window_size)
    .centered()
    .run_with(move || PortfolioSite::new(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::ImageRef;
    use crate::state::navigation::{Section, SectionLayout};
    use iced::keyboard::{key, Key, Modifiers};

    fn refs(names: &[&str]) -> Vec<ImageRef> {
        names.iter().map(|name| ImageRef::new(*name)).collect()
    }

    fn site() -> PortfolioSite {
        let mut manifest = AssetManifest::default();
        manifest
            .folders
            .insert("fashion-collection".to_string(), refs(&["a.jpg", "b.jpg", "c.jpg"]));
        PortfolioSite::with_manifest(manifest)
    }

    fn press(site: &mut PortfolioSite, named: key::Named) {
        if let Some(message) = ui::gallery::key_binding(Key::Named(named), Modifiers::empty()) {
            let _ = site.update(message);
        }
    }

    #[test]
    fn test_gallery_scenario() {
        let mut site = site();
        let _ = site.update(Message::OpenGallery(0));
        assert_eq!(site.gallery.index(), Some(0));

        press(&mut site, key::Named::ArrowRight);
        press(&mut site, key::Named::ArrowRight);
        press(&mut site, key::Named::ArrowRight);
        assert_eq!(site.gallery.index(), Some(2));

        let _ = site.update(Message::SelectImage(0));
        press(&mut site, key::Named::ArrowLeft);
        assert_eq!(site.gallery.index(), Some(0));
    }

    #[test]
    fn test_every_close_path_restores_scrolling() {
        let close_paths: [fn(&mut PortfolioSite); 2] = [
            |site| press(site, key::Named::Escape),
            // Close button and backdrop both emit CloseGallery
            |site| {
                let _ = site.update(Message::CloseGallery);
            },
        ];

        for close in close_paths {
            let mut site = site();
            let _ = site.update(Message::OpenGallery(0));
            assert!(site.gallery.scroll_lock().is_some());
            assert!(site.gallery.is_open());

            close(&mut site);

            assert!(!site.gallery.is_open());
            assert!(site.gallery.scroll_lock().is_none());
        }
    }

    #[test]
    fn test_page_offset_is_frozen_while_open() {
        let mut site = site();
        let _ = site.update(Message::PageScrolled(300.0));
        let _ = site.update(Message::OpenGallery(0));

        let _ = site.update(Message::PageScrolled(900.0));
        assert_eq!(site.page_offset, 300.0);

        let _ = site.update(Message::CloseGallery);
        let _ = site.update(Message::PageScrolled(900.0));
        assert_eq!(site.page_offset, 900.0);
    }

    #[test]
    fn test_scroll_to_section() {
        let mut site = site();
        let _ = site.update(Message::ScrollToSection("portfolio"));

        assert_eq!(site.navigation.active(), Section::Portfolio);
        assert_eq!(
            site.navigation.scroll().map(|scroll| scroll.target()),
            SectionLayout::default().offset_of(Section::Portfolio)
        );
    }

    #[test]
    fn test_unknown_section_is_ignored() {
        let mut site = site();
        let before = site.navigation.clone();
        let _ = site.update(Message::ScrollToSection("blog"));
        assert_eq!(site.navigation, before);
    }

    #[test]
    fn test_navigation_is_blocked_while_gallery_open() {
        let mut site = site();
        let _ = site.update(Message::OpenGallery(0));
        let _ = site.update(Message::ScrollToSection("contact"));
        assert_eq!(site.navigation.active(), Section::Home);
    }

    #[test]
    fn test_project_without_images_does_not_open() {
        let mut site = PortfolioSite::with_manifest(AssetManifest::default());
        let _ = site.update(Message::OpenGallery(1));
        assert!(!site.gallery.is_open());

        let _ = site.update(Message::OpenGallery(99));
        assert!(!site.gallery.is_open());
    }

    #[test]
    fn test_manifest_loaded_rebuilds_projects() {
        let mut site = PortfolioSite::with_manifest(AssetManifest::default());
        assert!(site.projects.iter().all(|project| !project.has_images()));

        let manifest = AssetManifest {
            portfolio: refs(&["p1.jpg", "p2.jpg"]),
            ..AssetManifest::default()
        };
        let _ = site.update(Message::ManifestLoaded(Ok(manifest)));

        assert_eq!(site.projects.len(), 3);
        assert!(site.projects.iter().all(|project| project.image_count() == 2));
    }

    #[test]
    fn test_failed_scan_keeps_placeholders() {
        let mut site = PortfolioSite::with_manifest(AssetManifest::default());
        let _ = site.update(Message::ManifestLoaded(Err(AssetError::Join("cancelled".into()))));
        assert_eq!(site.projects.len(), 3);
        assert_eq!(site.manifest, AssetManifest::default());
    }
}
