//! Database rows and their client-safe projections. Every row type derives
//! [`sqlx::FromRow`] and converts to the matching `domain` DTO via
//! `to_info()`; status columns are stored as text and parsed leniently so
//! records written with older casings still load.

mod content;
mod user;

pub use content::{
    ApplicationRow, ComplaintRow, ContactRow, GalleryRow, NoticeRow, ProjectRow, SchemeRow,
    VillageRow,
};
pub use user::User;
