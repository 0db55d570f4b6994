//! Data model for the modular input data plane.
//!
//! A modular input is a child process that streams records to a supervising
//! host and answers the host's configuration questions. This crate holds the
//! plain types exchanged in both directions:
//!
//! - [`Record`]: one data record destined for the records channel
//! - [`TimeValue`] / [`Timestamp`]: record times and their canonical form
//! - [`ParameterDescriptor`]: one configurable input parameter
//! - [`ValidationRequest`]: a proposed configuration sent by the host
//! - [`Severity`]: diagnostics channel tags

pub mod argument;
pub mod enums;
pub mod error;
pub mod record;
pub mod time;
pub mod validation;

pub use argument::ParameterDescriptor;
pub use enums::{DataType, Severity};
pub use error::{ModelError, Result};
pub use record::Record;
pub use time::{TimeValue, Timestamp, normalize_time};
pub use validation::{ParamValue, ValidationRequest};
