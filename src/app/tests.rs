use std::sync::{Arc, Mutex};

use super::*;
use crate::clipboard::{MemoryClipboard, UnavailableClipboard};
use crate::store::{MemoryStore, load_document};
use crate::types::NoticeKind;

fn shelf() -> Shelf<MemoryStore> {
    Shelf::open(MemoryStore::new(), AppConfig::default()).unwrap()
}

fn owner_shelf() -> Shelf<MemoryStore> {
    let mut shelf = shelf();
    shelf
        .login(auth::OWNER_IDENTIFIER, auth::OWNER_SECRET)
        .unwrap();
    shelf
}

fn draft(title: &str) -> ScriptDraft {
    ScriptDraft {
        title: title.to_string(),
        description: "Adds a thing".to_string(),
        category: "Developer".to_string(),
        content: "console.log('hi')".to_string(),
        ..ScriptDraft::default()
    }
}

fn clipboard() -> Arc<dyn Clipboard> {
    Arc::new(MemoryClipboard::new())
}

#[test]
fn test_open_renders_initial_regions() {
    let shelf = shelf();

    assert!(shelf.fragment(Region::Grid).is_some());
    assert!(shelf.fragment(Region::Filters).is_some());
    assert!(shelf.fragment(Region::Auth).is_some());
    assert!(shelf.fragment(Region::Dashboard).is_none());
    assert_eq!(shelf.action_for("showLogin"), Some(&crate::render::Action::ShowLogin));
}

#[test]
fn test_filter_by_category_then_query() {
    let mut shelf = shelf();

    shelf.set_filter(CategoryFilter::Category("Developer".to_string()));
    let titles: Vec<&str> = shelf
        .visible_scripts()
        .into_iter()
        .map(|s| s.title.as_str())
        .collect();
    assert_eq!(titles, vec!["JSON Formatter"]);

    shelf.set_filter(CategoryFilter::All);
    shelf.set_query("dark");
    let titles: Vec<&str> = shelf
        .visible_scripts()
        .into_iter()
        .map(|s| s.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Dark Mode Enforcer"]);
    assert!(shelf.action_for("copy-2").is_some());
    assert!(shelf.action_for("copy-1").is_none());
}

#[test]
fn test_login_owner_and_regular_user() {
    let mut shelf = shelf();
    let notice = shelf.login("ada@example.com", "whatever").unwrap();
    assert_eq!(notice.message, "Welcome back, ada!");
    assert!(!shelf.is_owner());
    assert!(shelf.action_for("openDashboard").is_none());
    assert!(!shelf.open_dashboard());

    let shelf = owner_shelf();
    assert!(shelf.is_owner());
    assert!(shelf.action_for("openDashboard").is_some());
}

#[test]
fn test_blank_login_keeps_session() {
    let mut shelf = shelf();
    assert!(shelf.login("", "").is_err());
    assert!(shelf.session().is_none());
}

#[test]
fn test_session_survives_reopen_and_logout_clears_it() {
    let shelf = owner_shelf();
    let mut shelf = Shelf::open(shelf.into_store(), AppConfig::default()).unwrap();
    assert!(shelf.is_owner());

    shelf.open_dashboard();
    let notice = shelf.logout().unwrap();
    assert_eq!(notice.message, "Logged out successfully");
    assert!(shelf.fragment(Region::Dashboard).is_none());

    let shelf = Shelf::open(shelf.into_store(), AppConfig::default()).unwrap();
    assert!(shelf.session().is_none());
}

#[test]
fn test_wrong_owner_secret_is_not_upgraded_on_reopen() {
    let mut shelf = shelf();
    shelf.login(auth::OWNER_IDENTIFIER, "wrong").unwrap();
    assert!(!shelf.is_owner());

    let mut shelf = Shelf::open(shelf.into_store(), AppConfig::default()).unwrap();
    assert!(!shelf.is_owner());
    assert!(!shelf.open_dashboard());
}

#[test]
fn test_open_upgrades_reserved_identifier_session() {
    let store = MemoryStore::new();
    store
        .set(keys::CURRENT_USER, r#"{"identifier":"jvdb","displayName":"jvdb"}"#)
        .unwrap();

    let shelf = Shelf::open(store, AppConfig::default()).unwrap();
    assert!(shelf.is_owner());
}

#[test]
fn test_theme_defaults_and_persistence() {
    let config = AppConfig {
        prefers_dark: true,
        ..AppConfig::default()
    };
    let mut shelf = Shelf::open(MemoryStore::new(), config.clone()).unwrap();
    assert_eq!(shelf.theme(), Theme::Dark);

    assert_eq!(shelf.toggle_theme().unwrap(), Theme::Light);
    let shelf = Shelf::open(shelf.into_store(), config).unwrap();
    assert_eq!(shelf.theme(), Theme::Light);
}

#[test]
fn test_theme_accepts_bare_string() {
    let store = MemoryStore::new();
    store.set(keys::THEME, "dark").unwrap();

    let shelf = Shelf::open(store, AppConfig::default()).unwrap();
    assert_eq!(shelf.theme(), Theme::Dark);
    assert!(shelf.render_page().contains(r#"class="dark""#));
}

#[test]
fn test_create_update_and_persist() {
    let mut shelf = owner_shelf();
    let (id, notice) = shelf.create_script(draft("Clipboard Cleaner")).unwrap();
    assert_eq!(notice.message, "New script added");
    assert_eq!(shelf.catalog().get(id).unwrap().url, "https://github.com");

    let mut changed = draft("Clipboard Sweeper");
    changed.tags = Some(vec!["clipboard".to_string()]);
    let notice = shelf.submit_script(Some(id), changed).unwrap().unwrap();
    assert_eq!(notice.message, "Script updated successfully");

    let stored: Vec<Script> = load_document(shelf.store(), keys::SCRIPTS).unwrap().unwrap();
    let script = stored.iter().find(|s| s.id == id).unwrap();
    assert_eq!(script.title, "Clipboard Sweeper");
    assert_eq!(script.tags, vec!["clipboard".to_string()]);
}

#[test]
fn test_update_unknown_id_is_silent() {
    let mut shelf = owner_shelf();
    assert_eq!(shelf.submit_script(Some(404), draft("Ghost")).unwrap(), None);
    assert!(shelf.store().get(keys::SCRIPTS).unwrap().is_none());
}

#[test]
fn test_delete_requires_confirmation_and_drops_bindings() {
    let mut shelf = owner_shelf();
    shelf.open_dashboard();
    assert!(shelf.action_for("delete-1").is_some());

    assert_eq!(shelf.delete_script(1, false).unwrap(), None);
    assert!(shelf.catalog().get(1).is_some());

    let notice = shelf.delete_script(1, true).unwrap().unwrap();
    assert_eq!(notice.kind, NoticeKind::Info);
    assert!(shelf.catalog().get(1).is_none());
    assert!(shelf.action_for("delete-1").is_none());
    assert!(shelf.action_for("copy-1").is_none());
}

#[test]
fn test_delete_favorited_script_leaves_dangling_id() {
    let mut shelf = owner_shelf();
    shelf.toggle_favorite(2).unwrap();
    shelf.delete_script(2, true).unwrap();

    assert_eq!(shelf.catalog().favorites(), [2]);
    let stored: Vec<ScriptId> = load_document(shelf.store(), keys::FAVORITES).unwrap().unwrap();
    assert_eq!(stored, vec![2]);

    shelf.set_filter(CategoryFilter::Favorites);
    assert!(shelf.visible_scripts().is_empty());
    assert!(
        shelf
            .fragment(Region::Grid)
            .unwrap()
            .html
            .contains(crate::render::EMPTY_GRID_MESSAGE)
    );

    assert_eq!(shelf.prune_favorites().unwrap(), 1);
    assert!(shelf.catalog().favorites().is_empty());
}

#[test]
fn test_toggle_favorite_unknown_script_is_noop() {
    let mut shelf = shelf();
    assert_eq!(shelf.toggle_favorite(999).unwrap(), None);
    assert!(shelf.catalog().favorites().is_empty());
}

#[tokio::test]
async fn test_copy_twice_counts_two() {
    let mut shelf = shelf();
    let memory = Arc::new(MemoryClipboard::new());
    let clipboard: Arc<dyn Clipboard> = memory.clone();

    shelf.copy_script(3, Arc::clone(&clipboard)).await.unwrap();
    let notice = shelf.copy_script(3, clipboard).await.unwrap().unwrap();

    assert_eq!(notice.message, "Script copied to clipboard!");
    assert_eq!(shelf.catalog().get(3).unwrap().copy_count, 2);
    assert_eq!(
        memory.contents().as_deref(),
        Some(shelf.catalog().get(3).unwrap().content.as_str())
    );

    let stored: Vec<Script> = load_document(shelf.store(), keys::SCRIPTS).unwrap().unwrap();
    assert_eq!(stored.iter().find(|s| s.id == 3).unwrap().copy_count, 2);
}

#[tokio::test]
async fn test_copy_failure_does_not_count() {
    let mut shelf = shelf();
    let notice = shelf
        .copy_script(1, Arc::new(UnavailableClipboard))
        .await
        .unwrap()
        .unwrap();

    assert!(notice.is_error());
    assert_eq!(shelf.catalog().get(1).unwrap().copy_count, 0);
    assert!(shelf.store().get(keys::SCRIPTS).unwrap().is_none());
    assert!(shelf.fragment(Region::Notice).unwrap().html.contains("toast-error"));
}

#[tokio::test]
async fn test_copy_unknown_script_is_silent() {
    let mut shelf = shelf();
    assert_eq!(shelf.copy_script(12, clipboard()).await.unwrap(), None);
}

#[test]
fn test_categories_add_and_delete() {
    let mut shelf = owner_shelf();
    assert!(shelf.add_category("Security").unwrap());
    assert!(!shelf.add_category("Security").unwrap());
    assert!(!shelf.add_category("").unwrap());
    assert!(shelf.action_for("filter-3").is_some());

    shelf.set_filter(CategoryFilter::Category("Security".to_string()));
    assert!(!shelf.delete_category("Security", false).unwrap());
    assert!(shelf.delete_category("Security", true).unwrap());
    assert_eq!(shelf.view().filter, CategoryFilter::All);
    assert!(shelf.action_for("filter-3").is_none());

    let stored: Vec<String> = load_document(shelf.store(), keys::CATEGORIES).unwrap().unwrap();
    assert_eq!(stored, vec!["Automation", "UI/UX", "Developer"]);
}

#[tokio::test]
async fn test_dispatch_routes_bound_actions() {
    let mut shelf = owner_shelf();
    let clipboard = clipboard();

    let result = shelf.dispatch("copy-1", &clipboard, |_| true).await.unwrap();
    assert!(matches!(result, Dispatched::Notice(n) if !n.is_error()));
    assert_eq!(shelf.catalog().get(1).unwrap().copy_count, 1);

    let result = shelf.dispatch("filter-2", &clipboard, |_| true).await.unwrap();
    assert_eq!(result, Dispatched::Updated);
    assert_eq!(shelf.visible_scripts().len(), 1);

    let result = shelf.dispatch("openDashboard", &clipboard, |_| true).await.unwrap();
    assert_eq!(result, Dispatched::Open(Panel::Dashboard));

    let result = shelf.dispatch("edit-3", &clipboard, |_| true).await.unwrap();
    assert_eq!(result, Dispatched::Open(Panel::ScriptForm(Some(3))));

    let result = shelf.dispatch("missing", &clipboard, |_| true).await.unwrap();
    assert_eq!(result, Dispatched::Unbound);
}

#[tokio::test]
async fn test_dispatch_asks_before_deleting() {
    let mut shelf = owner_shelf();
    shelf.open_dashboard();
    let clipboard = clipboard();
    let prompts = Mutex::new(Vec::new());

    let result = shelf
        .dispatch("delete-2", &clipboard, |message| {
            prompts.lock().unwrap().push(message.to_string());
            false
        })
        .await
        .unwrap();

    assert_eq!(result, Dispatched::Unbound);
    assert!(shelf.catalog().get(2).is_some());
    assert_eq!(prompts.into_inner().unwrap(), vec![DELETE_SCRIPT_PROMPT.to_string()]);

    let result = shelf.dispatch("delete-2", &clipboard, |_| true).await.unwrap();
    assert!(matches!(result, Dispatched::Notice(_)));
    assert!(shelf.catalog().get(2).is_none());
}

#[test]
fn test_show_script_renders_detail() {
    let mut shelf = shelf();
    assert!(shelf.show_script(3).is_some());
    assert!(shelf.action_for("detail-copy-3").is_some());

    assert!(shelf.show_script(999).is_none());
    assert!(shelf.fragment(Region::Detail).is_none());
}
