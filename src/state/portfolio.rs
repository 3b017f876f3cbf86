/// Fixed portfolio projects
///
/// Each project pulls its images from its own folder and falls back to the
/// shared portfolio lists when that folder is empty. The list always has
/// exactly one record per definition, in id order.

use std::sync::Arc;

use super::data::{ImageRef, Project};
use crate::assets::AssetManifest;

/// Which shared list replaces an empty project folder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    /// `portfolio-*.jpg`
    Portfolio,
    /// `portfolio-*.jpg` followed by `images/*`
    PortfolioThenAdditional,
}

impl Fallback {
    /// Build the fallback sequence from the manifest
    pub fn resolve(self, manifest: &AssetManifest) -> Vec<ImageRef> {
        match self {
            Fallback::Portfolio => manifest.portfolio.clone(),
            Fallback::PortfolioThenAdditional => manifest
                .portfolio
                .iter()
                .chain(manifest.additional.iter())
                .cloned()
                .collect(),
        }
    }
}

/// Static description of one project card
#[derive(Debug, Clone, Copy)]
pub struct ProjectDefinition {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub folder: &'static str,
    pub fallback: Fallback,
    /// Index into the portfolio list used as cover when nothing else resolved
    pub cover_fallback: usize,
}

pub const PROJECTS: [ProjectDefinition; 3] = [
    ProjectDefinition {
        id: 1,
        title: "Элегантная модная коллекция",
        description: "Студийная фотосъемка для люксового модного бренда с элегантной вечерней одеждой и профессиональным стайлингом.",
        folder: "fashion-collection",
        fallback: Fallback::Portfolio,
        cover_fallback: 0,
    },
    ProjectDefinition {
        id: 2,
        title: "Стайлинг и предметная съемка",
        description: "Чистая, минималистичная предметная фотосъемка одежды с профессиональным стайлингом и освещением.",
        folder: "product-styling",
        fallback: Fallback::Portfolio,
        cover_fallback: 1,
    },
    ProjectDefinition {
        id: 3,
        title: "За кадром",
        description: "Профессиональная студийная обстановка и процесс производства контента для модных брендов и фотосъемки.",
        folder: "behind-scenes",
        fallback: Fallback::PortfolioThenAdditional,
        cover_fallback: 2,
    },
];

/// Folder names the asset scan has to cover
pub fn folder_names() -> Vec<String> {
    PROJECTS.iter().map(|def| def.folder.to_string()).collect()
}

/// Resolve one project against the manifest
pub fn build_project(def: &ProjectDefinition, manifest: &AssetManifest) -> Project {
    let own = manifest.folder(def.folder);
    let images = if own.is_empty() {
        def.fallback.resolve(manifest)
    } else {
        own.to_vec()
    };

    let cover_image = images
        .first()
        .or_else(|| manifest.portfolio.get(def.cover_fallback))
        .cloned();

    Project {
        id: def.id,
        title: def.title.to_string(),
        description: def.description.to_string(),
        folder: def.folder.to_string(),
        cover_image,
        images,
    }
}

/// Build the shared, immutable project list consumed by the page
pub fn build_portfolio(manifest: &AssetManifest) -> Vec<Arc<Project>> {
    build_projects(&PROJECTS, manifest)
}

pub fn build_projects(defs: &[ProjectDefinition], manifest: &AssetManifest) -> Vec<Arc<Project>> {
    defs.iter()
        .map(|def| Arc::new(build_project(def, manifest)))
        .collect()
}
