mod models;
mod notice;

pub use models::*;
pub use notice::{Notice, NoticeKind};
