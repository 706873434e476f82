pub mod classes;
pub mod drivers_license;
pub mod form;
pub mod id_card;
pub mod passport;

pub use form::{FieldCheck, FormValidator};
