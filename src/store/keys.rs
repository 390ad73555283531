//! Fixed keys of the persisted documents.

pub const SCRIPTS: &str = "scripts";
pub const FAVORITES: &str = "favorites";
pub const CATEGORIES: &str = "categories";
pub const CURRENT_USER: &str = "currentUser";
pub const THEME: &str = "theme";
