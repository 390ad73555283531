use serde_json::Value;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::store::{Store, keys, load_document, save_document};
use crate::types::Session;

/// Reserved identifier of the catalog owner. Not a production credential.
pub const OWNER_IDENTIFIER: &str = "jvdb";
/// Literal secret paired with [`OWNER_IDENTIFIER`]. Not a production credential.
pub const OWNER_SECRET: &str = "978123";
pub const OWNER_DISPLAY_NAME: &str = "Owner";

/// Builds a session for `identifier`.
///
/// Only the reserved owner pair yields an owner session. Any other
/// non-blank identifier is accepted without checking `secret`.
pub fn login(identifier: &str, secret: &str) -> Result<Session> {
    let identifier = identifier.trim();
    if identifier.is_empty() {
        return Err(Error::BadRequest("identifier cannot be empty".to_string()));
    }

    if identifier == OWNER_IDENTIFIER && secret == OWNER_SECRET {
        info!("Owner session granted");
        return Ok(Session {
            identifier: OWNER_IDENTIFIER.to_string(),
            display_name: OWNER_DISPLAY_NAME.to_string(),
            is_owner: true,
        });
    }

    Ok(Session {
        identifier: identifier.to_string(),
        display_name: display_name_for(identifier),
        is_owner: false,
    })
}

/// The part of an e-mail style identifier before the `@`.
pub fn display_name_for(identifier: &str) -> String {
    match identifier.split('@').next() {
        Some(local) if !local.is_empty() => local.to_string(),
        _ => identifier.to_string(),
    }
}

/// Field that marks a session written by [`login`]. Stored sessions without
/// it predate the owner flag.
const OWNER_FLAG_FIELD: &str = "isOwner";

/// Sets the owner flag on a session for the reserved identifier. Returns
/// true when the session changed.
///
/// Only apply this to sessions that predate the owner flag; a session
/// written by [`login`] already carries the outcome of the secret check.
pub fn upgrade_owner_session(session: &mut Session) -> bool {
    if session.identifier == OWNER_IDENTIFIER && !session.is_owner {
        session.is_owner = true;
        return true;
    }
    false
}

/// Reads the persisted session. A session stored before the owner flag
/// existed is upgraded and re-persisted when it belongs to the owner.
pub fn load_session<S: Store + ?Sized>(store: &S) -> Result<Option<Session>> {
    let Some(document) = load_document::<_, Value>(store, keys::CURRENT_USER)? else {
        return Ok(None);
    };
    let predates_owner_flag = document.get(OWNER_FLAG_FIELD).is_none();

    let mut session: Session = match serde_json::from_value(document) {
        Ok(session) => session,
        Err(e) => {
            warn!("Ignoring malformed stored session: {e}");
            return Ok(None);
        }
    };

    if predates_owner_flag && upgrade_owner_session(&mut session) {
        debug!("Upgraded stored session to owner");
        save_session(store, &session)?;
    }
    Ok(Some(session))
}

pub fn save_session<S: Store + ?Sized>(store: &S, session: &Session) -> Result<()> {
    save_document(store, keys::CURRENT_USER, session)
}

pub fn clear_session<S: Store + ?Sized>(store: &S) -> Result<()> {
    store.remove(keys::CURRENT_USER)?;
    Ok(())
}
