/// Gallery modal state machine
///
/// `Closed` or `Open(project, index)`. The open state owns the scroll lock,
/// so leaving it through any path releases the lock with it.

use std::sync::Arc;

use super::data::{ImageRef, Project};

/// Holds the page at the offset it had when the gallery opened
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollLock {
    pub offset_y: f32,
}

/// Which navigation arrows the viewer should draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationControls {
    pub previous: bool,
    pub next: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OpenGallery {
    project: Arc<Project>,
    index: usize,
    scroll_lock: ScrollLock,
}

impl OpenGallery {
    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn last_index(&self) -> usize {
        self.project.images.len().saturating_sub(1)
    }

    pub fn current_image(&self) -> &ImageRef {
        &self.project.images[self.index]
    }

    pub fn controls(&self) -> NavigationControls {
        NavigationControls {
            previous: self.index > 0,
            next: self.index < self.last_index(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum GalleryModal {
    #[default]
    Closed,
    Open(OpenGallery),
}

impl GalleryModal {
    /// Open the gallery on `project` at `index`.
    ///
    /// `page_offset` is the page scroll position to hold while open. An
    /// index past the end is clamped to the last image. A project without
    /// images leaves the modal closed and returns false.
    pub fn open(&mut self, project: Arc<Project>, index: usize, page_offset: f32) -> bool {
        if !project.has_images() {
            return false;
        }

        let index = index.min(project.images.len() - 1);
        *self = GalleryModal::Open(OpenGallery {
            project,
            index,
            scroll_lock: ScrollLock { offset_y: page_offset },
        });
        true
    }

    /// Close the gallery, returning the released scroll lock if it was open
    pub fn close(&mut self) -> Option<ScrollLock> {
        match std::mem::take(self) {
            GalleryModal::Open(open) => Some(open.scroll_lock),
            GalleryModal::Closed => None,
        }
    }

    /// Step back one image; no-op at the first image
    pub fn previous(&mut self) -> bool {
        match self {
            GalleryModal::Open(open) if open.index > 0 => {
                open.index -= 1;
                true
            }
            _ => false,
        }
    }

    /// Step forward one image; no-op at the last image
    pub fn next(&mut self) -> bool {
        match self {
            GalleryModal::Open(open) if open.index < open.last_index() => {
                open.index += 1;
                true
            }
            _ => false,
        }
    }

    /// Jump to a thumbnail. Indices outside the project are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        match self {
            GalleryModal::Open(open) if index < open.project.images.len() => {
                open.index = index;
                true
            }
            _ => false,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, GalleryModal::Open(_))
    }

    pub fn as_open(&self) -> Option<&OpenGallery> {
        match self {
            GalleryModal::Open(open) => Some(open),
            GalleryModal::Closed => None,
        }
    }

    pub fn scroll_lock(&self) -> Option<ScrollLock> {
        self.as_open().map(|open| open.scroll_lock)
    }

    pub fn controls(&self) -> Option<NavigationControls> {
        self.as_open().map(OpenGallery::controls)
    }

    pub fn index(&self) -> Option<usize> {
        self.as_open().map(OpenGallery::index)
    }
}
