/// User interface module
///
/// This module builds the widget tree:
/// - Page sections and navigation bar (sections.rs)
/// - Gallery modal and its keyboard binding (gallery.rs)
/// - Static copy (content.rs)
/// - Colors and widget styles (style.rs)

pub mod content;
pub mod gallery;
pub mod sections;
pub mod style;
