//! Common reusable UI components
//!
//! Shared pieces of the form surfaces: labelled input fields with validation
//! slots and the notice banner the contact form reports through.

pub mod form;
pub mod message;

pub use form::{FormField, TextAreaField};
pub use message::{FormNotice, NoticeKind};
