//! Turns catalog state into HTML fragments.
//!
//! Every fragment is regenerated in full and carries the bindings for the
//! interactive elements it contains. Replacing a fragment invalidates the
//! bindings of the one it replaces.

mod html;

pub use html::{
    EMPTY_GRID_MESSAGE, render_auth, render_dashboard, render_detail, render_filters, render_grid,
    render_notice, render_page,
};

use tracing::debug;

use crate::types::{CategoryFilter, ScriptId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Region {
    Filters,
    Grid,
    Auth,
    Dashboard,
    Detail,
    Notice,
}

impl Region {
    pub const ALL: [Region; 6] = [
        Region::Filters,
        Region::Grid,
        Region::Auth,
        Region::Dashboard,
        Region::Detail,
        Region::Notice,
    ];

    #[must_use]
    pub fn container_id(self) -> &'static str {
        match self {
            Region::Filters => "filterBar",
            Region::Grid => "scriptGrid",
            Region::Auth => "authContainer",
            Region::Dashboard => "ownerDashboard",
            Region::Detail => "scriptDetail",
            Region::Notice => "toastContainer",
        }
    }
}

/// What activating a bound element asks the controller to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    CopyScript(ScriptId),
    ToggleFavorite(ScriptId),
    ShowScript(ScriptId),
    SelectCategory(CategoryFilter),
    ToggleTheme,
    ShowLogin,
    Logout,
    OpenDashboard,
    ShowAddScript,
    EditScript(ScriptId),
    DeleteScript(ScriptId),
    DeleteCategory(String),
}

impl Action {
    /// Value of the element's `data-action` attribute.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Action::CopyScript(_) => "copy-script",
            Action::ToggleFavorite(_) => "toggle-favorite",
            Action::ShowScript(_) => "show-script",
            Action::SelectCategory(_) => "select-category",
            Action::ToggleTheme => "toggle-theme",
            Action::ShowLogin => "show-login",
            Action::Logout => "logout",
            Action::OpenDashboard => "open-dashboard",
            Action::ShowAddScript => "show-add-script",
            Action::EditScript(_) => "edit-script",
            Action::DeleteScript(_) => "delete-script",
            Action::DeleteCategory(_) => "delete-category",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub element_id: String,
    pub action: Action,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub region: Region,
    pub html: String,
    pub bindings: Vec<Binding>,
}

/// Side effects that run after a fragment is produced, such as icon or
/// syntax-highlighting passes in a browser host.
pub trait RenderHooks: Send + Sync {
    fn after_render(&self, fragment: &Fragment);
}

/// Default hooks: records the pass in the log and nothing else.
#[derive(Debug, Default)]
pub struct LogHooks;

impl RenderHooks for LogHooks {
    fn after_render(&self, fragment: &Fragment) {
        debug!(
            region = ?fragment.region,
            bindings = fragment.bindings.len(),
            "Rendered fragment"
        );
    }
}
