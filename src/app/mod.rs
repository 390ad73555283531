//! The application controller.
//!
//! [`Shelf`] owns every piece of mutable state. Each user intent is a method
//! that mutates memory, persists the affected document in full and then
//! re-renders the regions that show it.

mod view;

pub use view::{Dispatched, Panel};

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::auth;
use crate::catalog::Catalog;
use crate::clipboard::Clipboard;
use crate::config::AppConfig;
use crate::error::Result;
use crate::render::{Fragment, LogHooks, Region, RenderHooks};
use crate::store::{Store, keys, save_document};
use crate::types::{CategoryFilter, Notice, Script, ScriptDraft, ScriptId, Session, Theme};

pub const DELETE_SCRIPT_PROMPT: &str = "Are you sure you want to delete this script?";

/// Grid selector and search text. Not persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub filter: CategoryFilter,
    pub query: String,
}

pub struct Shelf<S: Store> {
    store: S,
    config: AppConfig,
    catalog: Catalog,
    session: Option<Session>,
    theme: Theme,
    view: ViewState,
    detail: Option<ScriptId>,
    dashboard_open: bool,
    notice: Option<Notice>,
    fragments: BTreeMap<Region, Fragment>,
    hooks: Box<dyn RenderHooks>,
}

impl<S: Store> Shelf<S> {
    /// Loads all persisted state from `store` and renders the initial view.
    pub fn open(store: S, config: AppConfig) -> Result<Self> {
        store.initialize()?;

        let catalog = Catalog::load(&store)?;
        let session = auth::load_session(&store)?;
        let theme = load_theme(&store, config.prefers_dark)?;

        let mut shelf = Self {
            store,
            config,
            catalog,
            session,
            theme,
            view: ViewState::default(),
            detail: None,
            dashboard_open: false,
            notice: None,
            fragments: BTreeMap::new(),
            hooks: Box::new(LogHooks),
        };
        shelf.refresh_all();
        Ok(shelf)
    }

    /// Replaces the post-render hooks and re-renders every region.
    #[must_use]
    pub fn with_hooks(mut self, hooks: Box<dyn RenderHooks>) -> Self {
        self.hooks = hooks;
        self.refresh_all();
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn is_owner(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.is_owner)
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn visible_scripts(&self) -> Vec<&Script> {
        self.catalog.filter(&self.view.filter, &self.view.query)
    }

    // View state

    pub fn set_query(&mut self, query: &str) {
        self.view.query = query.to_string();
        self.refresh(&[Region::Grid, Region::Filters]);
    }

    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.view.filter = filter;
        self.refresh(&[Region::Grid, Region::Filters]);
    }

    /// Shows a script's full content. Unknown ids close the detail view.
    pub fn show_script(&mut self, id: ScriptId) -> Option<&Script> {
        self.detail = self.catalog.get(id).map(|s| s.id);
        self.refresh(&[Region::Detail]);
        self.detail.and_then(|id| self.catalog.get(id))
    }

    /// Opens the owner dashboard. Returns false for non-owner sessions.
    pub fn open_dashboard(&mut self) -> bool {
        self.dashboard_open = self.is_owner();
        self.refresh(&[Region::Dashboard]);
        self.dashboard_open
    }

    pub fn close_dashboard(&mut self) {
        self.dashboard_open = false;
        self.refresh(&[Region::Dashboard]);
    }

    // Theme

    pub fn set_theme(&mut self, theme: Theme) -> Result<()> {
        self.theme = theme;
        save_document(&self.store, keys::THEME, &theme)
    }

    pub fn toggle_theme(&mut self) -> Result<Theme> {
        let theme = self.theme.toggled();
        self.set_theme(theme)?;
        Ok(theme)
    }

    // Session

    pub fn login(&mut self, identifier: &str, secret: &str) -> Result<Notice> {
        let session = auth::login(identifier, secret)?;
        auth::save_session(&self.store, &session)?;

        let notice = Notice::success(format!("Welcome back, {}!", session.display_name));
        self.session = Some(session);
        self.refresh(&[Region::Auth, Region::Dashboard]);
        Ok(self.show_notice(notice))
    }

    pub fn logout(&mut self) -> Result<Notice> {
        auth::clear_session(&self.store)?;
        self.session = None;
        self.dashboard_open = false;
        self.refresh(&[Region::Auth, Region::Dashboard]);
        Ok(self.show_notice(Notice::success("Logged out successfully")))
    }

    // Scripts

    pub fn create_script(&mut self, draft: ScriptDraft) -> Result<(ScriptId, Notice)> {
        let now_ms = Utc::now().timestamp_millis();
        let id = self
            .catalog
            .create(draft, &self.config.default_script_url, now_ms);
        self.catalog.save_scripts(&self.store)?;
        info!(id, "Script added");

        self.refresh_catalog();
        Ok((id, self.show_notice(Notice::success("New script added"))))
    }

    /// Returns `None` when no script has `id`.
    pub fn update_script(&mut self, id: ScriptId, draft: ScriptDraft) -> Result<Option<Notice>> {
        if !self.catalog.update(id, draft) {
            return Ok(None);
        }
        self.catalog.save_scripts(&self.store)?;
        info!(id, "Script updated");

        self.refresh_catalog();
        Ok(Some(self.show_notice(Notice::success("Script updated successfully"))))
    }

    /// Form submission: updates when `edit_id` is set, creates otherwise.
    pub fn submit_script(
        &mut self,
        edit_id: Option<ScriptId>,
        draft: ScriptDraft,
    ) -> Result<Option<Notice>> {
        match edit_id {
            Some(id) => self.update_script(id, draft),
            None => self.create_script(draft).map(|(_, notice)| Some(notice)),
        }
    }

    /// Deletes a script after confirmation. Favorites keep the id.
    pub fn delete_script(&mut self, id: ScriptId, confirmed: bool) -> Result<Option<Notice>> {
        if !confirmed {
            debug!(id, "Script deletion not confirmed");
            return Ok(None);
        }
        if !self.catalog.delete(id) {
            return Ok(None);
        }
        self.catalog.save_scripts(&self.store)?;
        info!(id, "Script deleted");

        self.refresh_catalog();
        Ok(Some(self.show_notice(Notice::info("Script deleted"))))
    }

    /// Returns `None` for unknown scripts.
    pub fn toggle_favorite(&mut self, id: ScriptId) -> Result<Option<Notice>> {
        if self.catalog.get(id).is_none() {
            return Ok(None);
        }
        let added = self.catalog.toggle_favorite(id);
        self.catalog.save_favorites(&self.store)?;

        self.refresh_catalog();
        let notice = if added {
            Notice::success("Added to favorites")
        } else {
            Notice::info("Removed from favorites")
        };
        Ok(Some(self.show_notice(notice)))
    }

    pub fn prune_favorites(&mut self) -> Result<usize> {
        let removed = self.catalog.prune_favorites();
        if removed > 0 {
            self.catalog.save_favorites(&self.store)?;
            self.refresh_catalog();
        }
        Ok(removed)
    }

    /// Writes the script's content to `clipboard` and counts the copy.
    ///
    /// The write runs on the blocking pool. Only a successful write
    /// increments the counter; a failed one yields an error notice and
    /// leaves the catalog untouched. Unknown ids return `None`.
    pub async fn copy_script(
        &mut self,
        id: ScriptId,
        clipboard: Arc<dyn Clipboard>,
    ) -> Result<Option<Notice>> {
        let Some(script) = self.catalog.get(id) else {
            return Ok(None);
        };
        let content = script.content.clone();

        let written = tokio::task::spawn_blocking(move || clipboard.write_text(&content)).await;
        let failure = match written {
            Ok(Ok(())) => None,
            Ok(Err(e)) => Some(e.to_string()),
            Err(e) => Some(e.to_string()),
        };

        if let Some(reason) = failure {
            warn!(id, "Clipboard write failed: {reason}");
            return Ok(Some(
                self.show_notice(Notice::error("Could not copy script to clipboard")),
            ));
        }

        if let Some(count) = self.catalog.increment_copy_count(id) {
            self.catalog.save_scripts(&self.store)?;
            debug!(id, count, "Script copied");
            self.refresh_catalog();
        }
        Ok(Some(self.show_notice(Notice::success("Script copied to clipboard!"))))
    }

    // Categories

    pub fn add_category(&mut self, name: &str) -> Result<bool> {
        if !self.catalog.add_category(name) {
            return Ok(false);
        }
        self.catalog.save_categories(&self.store)?;
        self.refresh(&[Region::Filters, Region::Dashboard]);
        Ok(true)
    }

    /// Removes a category after confirmation. Scripts keep the name.
    pub fn delete_category(&mut self, name: &str, confirmed: bool) -> Result<bool> {
        let name = name.trim();
        if !confirmed || !self.catalog.delete_category(name) {
            return Ok(false);
        }
        self.catalog.save_categories(&self.store)?;
        if self.view.filter == CategoryFilter::Category(name.to_string()) {
            self.view.filter = CategoryFilter::All;
        }
        self.refresh(&[Region::Filters, Region::Grid, Region::Dashboard]);
        Ok(true)
    }
}

/// Stored theme first; a bare `dark`/`light` string written by older
/// versions is accepted too. Without one, `prefers_dark` decides.
fn load_theme<S: Store + ?Sized>(store: &S, prefers_dark: bool) -> Result<Theme> {
    let stored = store.get(keys::THEME)?.and_then(|raw| {
        serde_json::from_str::<Theme>(&raw)
            .ok()
            .or_else(|| raw.parse().ok())
    });

    Ok(stored.unwrap_or(if prefers_dark { Theme::Dark } else { Theme::Light }))
}

#[cfg(test)]
mod tests;
