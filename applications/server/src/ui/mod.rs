/// Server-rendered pages: the wish form, the wish display, and the admin listing
pub mod admin;
pub mod display;
pub mod form;
pub mod html;
pub mod pages;

pub use form::{FormState, FormValues};
