//! Record types held by the record store.
//!
//! Each record type comes with:
//! - the stored record (serialized as camelCase JSON, absent optionals as `null`)
//! - a `New*` insert type carrying the caller-supplied fields
//! - for publicly submitted records, a `*Form` wire type that validates into the insert type

pub mod blog;
pub mod contact;
pub mod job_application;
pub mod shipment;

pub use blog::{BlogPost, NewBlogPost};
pub use contact::{Contact, ContactForm, NewContact};
pub use job_application::{JobApplication, JobApplicationForm, NewJobApplication};
pub use shipment::{NewShipment, Shipment};

/// Store-side normalization of an optional text field: an empty string is
/// treated as omitted. Anything else is kept verbatim; trimming user input is
/// the form layer's job.
pub(crate) fn omit_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
