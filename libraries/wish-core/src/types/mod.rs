//! Domain types

mod ids;
mod image;
mod record;

pub use ids::RecordId;
pub use image::ImageFile;
pub use record::{NewRecord, UserRecord};
