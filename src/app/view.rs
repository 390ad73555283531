use std::sync::Arc;

use tracing::debug;

use super::{DELETE_SCRIPT_PROMPT, Shelf};
use crate::clipboard::Clipboard;
use crate::error::Result;
use crate::render::{
    Action, Binding, Fragment, Region, render_auth, render_dashboard, render_detail,
    render_filters, render_grid, render_notice, render_page,
};
use crate::store::Store;
use crate::types::{Notice, ScriptId};

/// Result of activating a bound element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatched {
    Notice(Notice),
    /// State changed without a message for the user.
    Updated,
    /// The host should open a panel.
    Open(Panel),
    /// Nothing is bound to the element, or the action was declined.
    Unbound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Login,
    Dashboard,
    /// The script form, prefilled when editing.
    ScriptForm(Option<ScriptId>),
}

impl<S: Store> Shelf<S> {
    /// Latest fragment for `region`, if the region is currently shown.
    pub fn fragment(&self, region: Region) -> Option<&Fragment> {
        self.fragments.get(&region)
    }

    /// Bindings of every fragment currently shown.
    pub fn bindings(&self) -> impl Iterator<Item = &Binding> {
        self.fragments.values().flat_map(|f| f.bindings.iter())
    }

    pub fn action_for(&self, element_id: &str) -> Option<&Action> {
        self.bindings()
            .find(|b| b.element_id == element_id)
            .map(|b| &b.action)
    }

    /// Full document built from the current fragments.
    pub fn render_page(&self) -> String {
        render_page(self.theme, self.fragments.values())
    }

    /// Runs the action bound to `element_id`. `confirm` is asked before
    /// anything destructive happens.
    pub async fn dispatch(
        &mut self,
        element_id: &str,
        clipboard: &Arc<dyn Clipboard>,
        confirm: impl FnOnce(&str) -> bool,
    ) -> Result<Dispatched> {
        let Some(action) = self.action_for(element_id).cloned() else {
            debug!(element_id, "No binding for element");
            return Ok(Dispatched::Unbound);
        };

        let dispatched = match action {
            Action::CopyScript(id) => {
                notice_or_unbound(self.copy_script(id, Arc::clone(clipboard)).await?)
            }
            Action::ToggleFavorite(id) => notice_or_unbound(self.toggle_favorite(id)?),
            Action::ShowScript(id) => match self.show_script(id) {
                Some(_) => Dispatched::Updated,
                None => Dispatched::Unbound,
            },
            Action::SelectCategory(filter) => {
                self.set_filter(filter);
                Dispatched::Updated
            }
            Action::ToggleTheme => {
                self.toggle_theme()?;
                Dispatched::Updated
            }
            Action::ShowLogin => Dispatched::Open(Panel::Login),
            Action::Logout => Dispatched::Notice(self.logout()?),
            Action::OpenDashboard => {
                if self.open_dashboard() {
                    Dispatched::Open(Panel::Dashboard)
                } else {
                    Dispatched::Unbound
                }
            }
            Action::ShowAddScript => Dispatched::Open(Panel::ScriptForm(None)),
            Action::EditScript(id) => Dispatched::Open(Panel::ScriptForm(Some(id))),
            Action::DeleteScript(id) => {
                let confirmed = confirm(DELETE_SCRIPT_PROMPT);
                notice_or_unbound(self.delete_script(id, confirmed)?)
            }
            Action::DeleteCategory(name) => {
                let confirmed = confirm(&format!("Delete category \"{name}\"?"));
                if self.delete_category(&name, confirmed)? {
                    Dispatched::Updated
                } else {
                    Dispatched::Unbound
                }
            }
        };
        Ok(dispatched)
    }

    pub(super) fn show_notice(&mut self, notice: Notice) -> Notice {
        self.notice = Some(notice.clone());
        self.refresh(&[Region::Notice]);
        notice
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
        self.refresh(&[Region::Notice]);
    }

    pub(super) fn refresh_all(&mut self) {
        self.refresh(&Region::ALL);
    }

    /// Regions that show script data.
    pub(super) fn refresh_catalog(&mut self) {
        self.refresh(&[Region::Grid, Region::Dashboard, Region::Detail]);
    }

    /// Regenerates `regions` in full. The new fragment replaces the old one
    /// along with its bindings; regions with nothing to show are removed.
    pub(super) fn refresh(&mut self, regions: &[Region]) {
        for &region in regions {
            match self.build(region) {
                Some(fragment) => {
                    self.hooks.after_render(&fragment);
                    self.fragments.insert(region, fragment);
                }
                None => {
                    self.fragments.remove(&region);
                }
            }
        }
    }

    fn build(&self, region: Region) -> Option<Fragment> {
        match region {
            Region::Filters => Some(render_filters(
                self.catalog.categories(),
                &self.view.filter,
                &self.view.query,
            )),
            Region::Grid => Some(render_grid(
                &self.visible_scripts(),
                self.catalog.favorites(),
            )),
            Region::Auth => Some(render_auth(self.session.as_ref())),
            Region::Dashboard => (self.dashboard_open && self.is_owner())
                .then(|| render_dashboard(&self.catalog)),
            Region::Detail => self
                .detail
                .and_then(|id| self.catalog.get(id))
                .map(|s| render_detail(s, self.catalog.is_favorite(s.id))),
            Region::Notice => self.notice.as_ref().map(render_notice),
        }
    }
}

fn notice_or_unbound(notice: Option<Notice>) -> Dispatched {
    notice.map_or(Dispatched::Unbound, Dispatched::Notice)
}
