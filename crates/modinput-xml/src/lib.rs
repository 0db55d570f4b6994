//! XML wire format for modular inputs.
//!
//! - `<event>` fragments for [`Record`](modinput_model::Record)s
//! - `<arg>` fragments for [`ParameterDescriptor`](modinput_model::ParameterDescriptor)s
//! - parsing of the host's `<items>` validation request
//!
//! Rendering is table driven: each type declares its fields in output order
//! with an emission rule, and empty or false fields are left out.

mod argument;
mod common;
mod error;
mod event;
mod fields;
mod validation;

pub use argument::ARG_TAG;
pub use common::{
    STREAM_CLOSE, STREAM_OPEN, STREAM_TAG, XmlFragment, render_error_document, write_text_element,
};
pub use error::{Result, XmlError};
pub use event::EVENT_TAG;
pub use validation::{parse_validation_request, parse_validation_request_from_reader};
