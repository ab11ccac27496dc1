//! Record assembly for LFA exports
//!
//! Metadata and data rows populate a [`RecordBuilder`] in whatever order the
//! export lists them. [`RecordBuilder::build`] then validates every required
//! field in one pass and assembles the PIF record.

use std::path::Path;

use tracing::{debug, warn};

use super::header::DataPoint;
use crate::constants::{SAMPLE_ID_SEPARATOR, names, units};
use crate::models::{ChemicalSystem, FileReference, Instrument, Property, Scalars, Value};
use crate::{Error, Result};

/// Temperature and diffusivity columns accumulated after the header row
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DataSeries {
    pub temperature: Vec<String>,
    pub diffusivity: Vec<String>,
}

impl DataSeries {
    pub fn push(&mut self, point: DataPoint) {
        self.temperature.push(point.temperature);
        self.diffusivity.push(point.diffusivity);
    }

    pub fn len(&self) -> usize {
        self.diffusivity.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diffusivity.is_empty()
    }
}

/// Builder for the converted record
///
/// Every field starts absent. Thickness, diameter and the data series are
/// required; the rest are left out of the record when never seen.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecordBuilder {
    pub chemical_formula: Option<String>,
    pub instrument: Option<String>,
    pub thickness: Option<String>,
    pub diameter: Option<String>,
    pub date: Option<String>,
    pub atmosphere: Option<String>,
    pub gas_flow: Option<String>,
    pub series: Option<DataSeries>,
}

impl RecordBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the data series once the header row is resolved
    pub fn begin_series(&mut self) {
        self.series.get_or_insert_with(DataSeries::default);
    }

    /// Append a data point, opening the series if needed
    pub fn push_point(&mut self, point: DataPoint) {
        self.series.get_or_insert_with(DataSeries::default).push(point);
    }

    /// Names of the required fields that are still absent
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.thickness.is_none() {
            missing.push("thickness");
        }
        if self.diameter.is_none() {
            missing.push("diameter");
        }
        if self.series.is_none() {
            missing.push("diffusivity");
        }
        missing
    }

    /// Validate required fields and assemble the record
    pub fn build(self, source_name: &str) -> Result<ChemicalSystem> {
        let missing = self.missing_fields();
        let (Some(thickness), Some(diameter), Some(series)) =
            (self.thickness, self.diameter, self.series)
        else {
            return Err(Error::missing_field(source_name, missing));
        };

        if series.is_empty() {
            warn!("No data rows found after the header in {}", source_name);
        }

        let file_name = file_name(source_name);
        let mut record = ChemicalSystem::new(sample_id(file_name));
        record.chemical_formula = self.chemical_formula;

        let point_count = series.len();
        let mut diffusivity = Property::new(
            names::DIFFUSIVITY,
            Scalars::Series(series.diffusivity),
            units::DIFFUSIVITY,
        );

        diffusivity.conditions.push(
            Value::new(names::TEMPERATURE, Scalars::Series(series.temperature))
                .with_units(units::TEMPERATURE),
        );
        if let Some(date) = self.date {
            diffusivity
                .conditions
                .push(Value::new(names::EXPERIMENT_DATE, Scalars::Single(date)));
        }
        if let Some(atmosphere) = self.atmosphere {
            diffusivity
                .conditions
                .push(Value::new(names::ATMOSPHERE, Scalars::Single(atmosphere)));
        }
        if let Some(flow) = self.gas_flow {
            diffusivity.conditions.push(
                Value::new(names::FLOW_RATE, Scalars::Single(flow)).with_units(units::FLOW_RATE),
            );
        }

        diffusivity.instrument = self.instrument.map(|name| Instrument { name });
        diffusivity.files = Some(FileReference {
            relative_path: file_name.to_string(),
        });

        record.properties.push(diffusivity);
        record.properties.push(Property::new(
            names::THICKNESS,
            Scalars::Single(thickness),
            units::MILLIMETRE,
        ));
        record.properties.push(Property::new(
            names::DIAMETER,
            Scalars::Single(diameter),
            units::MILLIMETRE,
        ));

        debug!(
            "Built record {:?} with {} data points",
            record.ids, point_count
        );

        Ok(record)
    }
}

/// Final path component of a source name
pub fn file_name(source_name: &str) -> &str {
    Path::new(source_name)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(source_name)
}

/// Sample identifier: the file name up to the first underscore
pub fn sample_id(file_name: &str) -> &str {
    file_name
        .split(SAMPLE_ID_SEPARATOR)
        .next()
        .unwrap_or(file_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_id_from_path() {
        assert_eq!(file_name("/data/lfa/Fe2O3_run1_2020.csv"), "Fe2O3_run1_2020.csv");
        assert_eq!(sample_id("Fe2O3_run1_2020.csv"), "Fe2O3");
        assert_eq!(sample_id("plain.csv"), "plain.csv");
    }

    #[test]
    fn test_missing_fields_reports_every_absent_field() {
        let builder = RecordBuilder::new();
        assert_eq!(
            builder.missing_fields(),
            vec!["thickness", "diameter", "diffusivity"]
        );
    }
}
