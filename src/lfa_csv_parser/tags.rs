//! Metadata tag dispatch
//!
//! Metadata rows carry a marker in their first field and the value in the
//! second. The table below is evaluated in order against every non-empty
//! row; each tag whose marker is a substring of the first field fires.

use tracing::debug;

use super::builder::RecordBuilder;
use crate::constants::{METADATA_VALUE_INDEX, tags};
use crate::{Error, Result};

type TagHandler = fn(&mut RecordBuilder, &str);

/// A recognized metadata marker and the record field it populates
#[derive(Debug, Clone, Copy)]
pub struct MetadataTag {
    /// Substring looked for in the first field
    pub marker: &'static str,

    /// Record field populated by this tag
    pub field: &'static str,

    handler: TagHandler,
}

impl MetadataTag {
    /// Check whether this tag matches the first field of a row
    pub fn matches(&self, first_field: &str) -> bool {
        first_field.contains(self.marker)
    }

    /// Store a value in the builder
    pub fn apply(&self, builder: &mut RecordBuilder, value: &str) {
        (self.handler)(builder, value)
    }
}

/// Metadata tags in evaluation order
pub const METADATA_TAGS: &[MetadataTag] = &[
    MetadataTag {
        marker: tags::MATERIAL,
        field: "chemical_formula",
        handler: set_material,
    },
    MetadataTag {
        marker: tags::INSTRUMENT,
        field: "instrument",
        handler: set_instrument,
    },
    MetadataTag {
        marker: tags::THICKNESS,
        field: "thickness",
        handler: set_thickness,
    },
    MetadataTag {
        marker: tags::DIAMETER,
        field: "diameter",
        handler: set_diameter,
    },
    MetadataTag {
        marker: tags::DATE,
        field: "date",
        handler: set_date,
    },
    MetadataTag {
        marker: tags::ATMOSPHERE,
        field: "atmosphere",
        handler: set_atmosphere,
    },
    MetadataTag {
        marker: tags::GAS_FLOW,
        field: "gas_flow",
        handler: set_gas_flow,
    },
];

/// Tags matching the first field, in evaluation order
pub fn matching_tags(first_field: &str) -> impl Iterator<Item = &'static MetadataTag> + '_ {
    METADATA_TAGS.iter().filter(move |tag| tag.matches(first_field))
}

/// Apply every matching tag to the builder, returning how many fired
///
/// `row` must be non-empty. A matching row without a value field fails with
/// [`Error::IndexOutOfRange`].
pub fn apply_metadata<S: AsRef<str>>(
    row: &[S],
    row_number: usize,
    builder: &mut RecordBuilder,
) -> Result<usize> {
    let Some(first_field) = row.first() else {
        return Ok(0);
    };

    let first_field: &str = first_field.as_ref();

    let mut applied = 0;
    for tag in matching_tags(first_field) {
        let value: &str = row
            .get(METADATA_VALUE_INDEX)
            .ok_or_else(|| Error::index_out_of_range(row_number, METADATA_VALUE_INDEX, row.len()))?
            .as_ref();

        debug!("Row {}: {} -> {} = {:?}", row_number, tag.marker, tag.field, value);
        tag.apply(builder, value);
        applied += 1;
    }

    Ok(applied)
}

// Text values are trimmed; scalar values with units are stored as found.

fn set_material(builder: &mut RecordBuilder, value: &str) {
    builder.chemical_formula = Some(value.trim().to_string());
}

fn set_instrument(builder: &mut RecordBuilder, value: &str) {
    builder.instrument = Some(value.replace('#', ""));
}

fn set_thickness(builder: &mut RecordBuilder, value: &str) {
    builder.thickness = Some(value.to_string());
}

fn set_diameter(builder: &mut RecordBuilder, value: &str) {
    builder.diameter = Some(value.to_string());
}

fn set_date(builder: &mut RecordBuilder, value: &str) {
    builder.date = Some(value.trim().to_string());
}

fn set_atmosphere(builder: &mut RecordBuilder, value: &str) {
    builder.atmosphere = Some(value.trim().to_string());
}

fn set_gas_flow(builder: &mut RecordBuilder, value: &str) {
    builder.gas_flow = Some(value.to_string());
}
