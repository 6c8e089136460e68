//! Domain value objects and types.
//!
//! The three contact fields (name, phone number, birthday) are independent
//! value types. Each one validates at construction time, so a `Record` can
//! never hold an invalid field, and each renders itself through [`FieldValue`].

pub mod birthday;
pub mod errors;
pub mod name;
pub mod phone;

pub use birthday::Birthday;
pub use errors::ValidationError;
pub use name::Name;
pub use phone::PhoneNumber;

/// Common capability of validated contact fields.
pub trait FieldValue {
    /// Text shown to the user for this field.
    fn as_display(&self) -> String;
}
