//! Mock sign-in. Nothing here verifies anything against a remote authority;
//! the owner flag only decides which parts of the UI are shown.

mod session;

pub use session::{
    OWNER_DISPLAY_NAME, OWNER_IDENTIFIER, OWNER_SECRET, clear_session, display_name_for,
    load_session, login, save_session, upgrade_owner_session,
};
