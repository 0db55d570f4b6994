//! `<arg>` rendering for parameter descriptors.
//!
//! The fragment is embedded by the caller inside a larger configuration
//! description, so it is written without an XML declaration. `description`
//! and `validation` are emitted as empty markers: the enclosing template owns
//! their payload, and only whether they are present is decided here.

use std::borrow::Cow;
use std::io::Write;

use modinput_model::ParameterDescriptor;
use quick_xml::Writer;

use crate::common::XmlFragment;
use crate::error::Result;
use crate::fields::{FieldRule, Placement, flag, text, write_fields};

pub const ARG_TAG: &str = "arg";

const ARG_FIELDS: &[FieldRule<ParameterDescriptor>] = &[
    FieldRule {
        name: "name",
        placement: Placement::Attribute,
        value: arg_name,
    },
    FieldRule {
        name: "description",
        placement: Placement::Marker,
        value: arg_description,
    },
    FieldRule {
        name: "validation",
        placement: Placement::Marker,
        value: arg_validation,
    },
    FieldRule {
        name: "data_type",
        placement: Placement::Element,
        value: arg_data_type,
    },
    FieldRule {
        name: "required_on_edit",
        placement: Placement::Element,
        value: arg_required_on_edit,
    },
    FieldRule {
        name: "required_on_create",
        placement: Placement::Element,
        value: arg_required_on_create,
    },
];

fn arg_name(arg: &ParameterDescriptor) -> Option<Cow<'_, str>> {
    Some(Cow::Borrowed(arg.name.as_str()))
}

fn arg_description(arg: &ParameterDescriptor) -> Option<Cow<'_, str>> {
    text(arg.description())
}

fn arg_validation(arg: &ParameterDescriptor) -> Option<Cow<'_, str>> {
    text(arg.validation())
}

fn arg_data_type(arg: &ParameterDescriptor) -> Option<Cow<'_, str>> {
    arg.data_type.map(|data_type| Cow::Borrowed(data_type.as_xml_text()))
}

fn arg_required_on_edit(arg: &ParameterDescriptor) -> Option<Cow<'_, str>> {
    flag(arg.required_on_edit, "true")
}

fn arg_required_on_create(arg: &ParameterDescriptor) -> Option<Cow<'_, str>> {
    flag(arg.required_on_create, "true")
}

impl XmlFragment for ParameterDescriptor {
    fn write_xml<W: Write>(&self, xml: &mut Writer<W>) -> Result<()> {
        write_fields(xml, ARG_TAG, self, ARG_FIELDS)
    }
}
