mod auth;
mod browse;
mod category;
mod commands;
mod dashboard;
mod favorite;
pub mod pickers;
mod script;
mod theme;

pub use auth::{run_auth_login, run_auth_logout, run_auth_whoami};
pub use browse::{run_copy, run_list, run_render, run_show};
pub use category::{run_category_add, run_category_delete, run_category_list};
pub use commands::{
    AuthCommands, CategoryCommands, FavoriteCommands, ScriptCommands, ThemeCommands,
};
pub use dashboard::run_dashboard;
pub use favorite::{run_favorite_list, run_favorite_prune, run_favorite_toggle};
pub use script::{ScriptFields, run_script_add, run_script_delete, run_script_edit};
pub use theme::{run_theme_set, run_theme_show, run_theme_toggle};

use std::fs;

use crate::app::Shelf;
use crate::config::AppConfig;
use crate::store::SqliteStore;
use crate::types::Notice;

/// Open the shelf stored in `data_dir`, creating the directory on first use
pub fn init_shelf(data_dir: &str) -> anyhow::Result<Shelf<SqliteStore>> {
    fs::create_dir_all(data_dir)?;
    let config = AppConfig::load(data_dir)?;
    let store = SqliteStore::new(config.db_path())?;
    Ok(Shelf::open(store, config)?)
}

/// Owner commands are hidden from regular sessions, like the dashboard is
pub fn require_owner(shelf: &Shelf<SqliteStore>) -> anyhow::Result<()> {
    if !shelf.is_owner() {
        anyhow::bail!(
            "This command requires the owner session. Sign in with 'scriptshelf auth login'."
        );
    }
    Ok(())
}

pub fn print_notice(notice: &Notice) {
    if notice.is_error() {
        eprintln!("{}", notice.message);
    } else {
        println!("{}", notice.message);
    }
}
