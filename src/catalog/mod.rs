pub mod filter;
pub mod seed;

use std::collections::BTreeSet;

use serde::Serialize;
use tracing::debug;

pub use filter::filter_scripts;

use crate::error::Result;
use crate::store::{Store, keys, load_document, save_document};
use crate::types::{CategoryFilter, Script, ScriptDraft, ScriptId};

/// Scripts, categories and favorites held in memory.
///
/// Mutations only touch memory; the caller persists the affected document
/// with the matching `save_*` method afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    scripts: Vec<Script>,
    categories: Vec<String>,
    favorites: Vec<ScriptId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub total_scripts: usize,
    /// Distinct category strings used by scripts, which may include
    /// categories no longer in the category list.
    pub total_categories: usize,
    pub favorites: usize,
    pub dangling_favorites: usize,
    pub total_copies: u64,
}

impl Catalog {
    pub fn new(scripts: Vec<Script>, categories: Vec<String>, favorites: Vec<ScriptId>) -> Self {
        Self {
            scripts,
            categories,
            favorites,
        }
    }

    /// The catalog of a fresh data directory.
    pub fn seeded() -> Self {
        Self::new(seed::default_scripts(), seed::default_categories(), Vec::new())
    }

    /// Loads each document independently, falling back to the seed data (or
    /// an empty favorites list) when a document is missing or malformed.
    pub fn load<S: Store + ?Sized>(store: &S) -> Result<Self> {
        let scripts: Vec<Script> =
            load_document(store, keys::SCRIPTS)?.unwrap_or_else(seed::default_scripts);
        let categories: Vec<String> =
            load_document(store, keys::CATEGORIES)?.unwrap_or_else(seed::default_categories);
        let favorites: Vec<ScriptId> = load_document(store, keys::FAVORITES)?.unwrap_or_default();

        Ok(Self::new(scripts, categories, favorites))
    }

    pub fn save_scripts<S: Store + ?Sized>(&self, store: &S) -> Result<()> {
        save_document(store, keys::SCRIPTS, &self.scripts)
    }

    pub fn save_categories<S: Store + ?Sized>(&self, store: &S) -> Result<()> {
        save_document(store, keys::CATEGORIES, &self.categories)
    }

    pub fn save_favorites<S: Store + ?Sized>(&self, store: &S) -> Result<()> {
        save_document(store, keys::FAVORITES, &self.favorites)
    }

    pub fn save_all<S: Store + ?Sized>(&self, store: &S) -> Result<()> {
        self.save_scripts(store)?;
        self.save_categories(store)?;
        self.save_favorites(store)
    }

    pub fn scripts(&self) -> &[Script] {
        &self.scripts
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn favorites(&self) -> &[ScriptId] {
        &self.favorites
    }

    pub fn get(&self, id: ScriptId) -> Option<&Script> {
        self.scripts.iter().find(|s| s.id == id)
    }

    pub fn filter(&self, category: &CategoryFilter, query: &str) -> Vec<&Script> {
        filter_scripts(&self.scripts, &self.favorites, category, query)
    }

    /// Appends a script built from `draft` and returns its id.
    ///
    /// The id is `now_ms`, or one past the largest id when `now_ms` is taken.
    pub fn create(&mut self, draft: ScriptDraft, default_url: &str, now_ms: i64) -> ScriptId {
        let id = if self.get(now_ms).is_some() {
            self.scripts.iter().map(|s| s.id).max().unwrap_or(now_ms) + 1
        } else {
            now_ms
        };

        let url = if draft.url.trim().is_empty() {
            default_url.to_string()
        } else {
            draft.url
        };

        self.scripts.push(Script {
            id,
            title: draft.title,
            description: draft.description,
            category: draft.category,
            is_external_tool: draft.is_external_tool,
            content: draft.content,
            url,
            tags: draft.tags.unwrap_or_default(),
            preview_image_url: draft.preview_image_url,
            copy_count: 0,
        });
        debug!(id, "Created script");
        id
    }

    /// Shallow-merges `draft` into the script with `id`. Returns false when
    /// no such script exists.
    pub fn update(&mut self, id: ScriptId, draft: ScriptDraft) -> bool {
        let Some(script) = self.scripts.iter_mut().find(|s| s.id == id) else {
            debug!(id, "Update of unknown script ignored");
            return false;
        };

        script.title = draft.title;
        script.description = draft.description;
        script.category = draft.category;
        script.is_external_tool = draft.is_external_tool;
        script.content = draft.content;
        if !draft.url.trim().is_empty() {
            script.url = draft.url;
        }
        if let Some(tags) = draft.tags {
            script.tags = tags;
        }
        if draft.preview_image_url.is_some() {
            script.preview_image_url = draft.preview_image_url;
        }
        debug!(id, "Updated script");
        true
    }

    /// Removes the script with `id`. Favorites pointing at it are kept.
    pub fn delete(&mut self, id: ScriptId) -> bool {
        let before = self.scripts.len();
        self.scripts.retain(|s| s.id != id);
        let removed = self.scripts.len() != before;
        if removed {
            debug!(id, "Deleted script");
        }
        removed
    }

    /// Returns the new count, or `None` for an unknown id.
    pub fn increment_copy_count(&mut self, id: ScriptId) -> Option<u64> {
        let script = self.scripts.iter_mut().find(|s| s.id == id)?;
        script.copy_count += 1;
        Some(script.copy_count)
    }

    pub fn is_favorite(&self, id: ScriptId) -> bool {
        self.favorites.contains(&id)
    }

    /// Flips membership of `id` and returns whether it is now a favorite.
    pub fn toggle_favorite(&mut self, id: ScriptId) -> bool {
        if let Some(pos) = self.favorites.iter().position(|f| *f == id) {
            self.favorites.remove(pos);
            false
        } else {
            self.favorites.push(id);
            true
        }
    }

    /// Favorite ids that no longer reference a script.
    pub fn dangling_favorites(&self) -> Vec<ScriptId> {
        self.favorites
            .iter()
            .copied()
            .filter(|id| self.get(*id).is_none())
            .collect()
    }

    /// Drops dangling favorite ids and returns how many were removed.
    pub fn prune_favorites(&mut self) -> usize {
        let before = self.favorites.len();
        let scripts = &self.scripts;
        self.favorites.retain(|id| scripts.iter().any(|s| s.id == *id));
        before - self.favorites.len()
    }

    /// Appends `name` unless it is blank or already listed.
    pub fn add_category(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || self.categories.iter().any(|c| c == name) {
            return false;
        }
        self.categories.push(name.to_string());
        true
    }

    /// Removes `name` from the category list. Scripts keep the string.
    pub fn delete_category(&mut self, name: &str) -> bool {
        let name = name.trim();
        let before = self.categories.len();
        self.categories.retain(|c| c != name);
        self.categories.len() != before
    }

    pub fn stats(&self) -> CatalogStats {
        let used: BTreeSet<&str> = self.scripts.iter().map(|s| s.category.as_str()).collect();

        CatalogStats {
            total_scripts: self.scripts.len(),
            total_categories: used.len(),
            favorites: self.favorites.len(),
            dangling_favorites: self.dangling_favorites().len(),
            total_copies: self.scripts.iter().map(|s| s.copy_count).sum(),
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seeded()
    }
}
