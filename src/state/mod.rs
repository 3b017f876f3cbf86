/// State management module
///
/// This module handles all application state, including:
/// - Shared data structures (data.rs)
/// - The fixed project list and its fallback rules (portfolio.rs)
/// - The gallery modal state machine (gallery.rs)
/// - Section navigation and smooth scrolling (navigation.rs)

pub mod data;
pub mod gallery;
pub mod navigation;
pub mod portfolio;
