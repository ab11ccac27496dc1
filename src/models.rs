//! PIF record structures for LFA conversion.
//!
//! The types mirror the Physical Information File layout: a chemical system
//! carrying measured properties, each with conditions, an instrument and a
//! file reference. Field names serialize in camelCase and absent optional
//! fields are omitted.

use serde::{Deserialize, Serialize};

use crate::constants::CHEMICAL_SYSTEM_CATEGORY;

/// Scalar payload of a property or condition
///
/// Metadata values are single scalars, measured series are lists. Both are
/// kept as the text found in the export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalars {
    Single(String),
    Series(Vec<String>),
}

impl Scalars {
    /// Number of scalar values carried
    pub fn len(&self) -> usize {
        match self {
            Scalars::Single(_) => 1,
            Scalars::Series(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Series values, if this is a series
    pub fn as_series(&self) -> Option<&[String]> {
        match self {
            Scalars::Series(values) => Some(values.as_slice()),
            Scalars::Single(_) => None,
        }
    }

    /// Single value, if this is a single scalar
    pub fn as_single(&self) -> Option<&str> {
        match self {
            Scalars::Single(value) => Some(value.as_str()),
            Scalars::Series(_) => None,
        }
    }
}

/// Named value, used as a property condition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Value {
    pub name: String,
    pub scalars: Scalars,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub units: Option<String>,
}

impl Value {
    pub fn new(name: impl Into<String>, scalars: Scalars) -> Self {
        Self {
            name: name.into(),
            scalars,
            units: None,
        }
    }

    pub fn with_units(mut self, units: impl Into<String>) -> Self {
        self.units = Some(units.into());
        self
    }
}

/// Instrument a property was measured with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instrument {
    pub name: String,
}

/// Reference to the file a property was read from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileReference {
    pub relative_path: String,
}

/// Measured property of a chemical system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub name: String,
    pub scalars: Scalars,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub units: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub conditions: Vec<Value>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub instrument: Option<Instrument>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub files: Option<FileReference>,
}

impl Property {
    pub fn new(name: impl Into<String>, scalars: Scalars, units: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            scalars,
            units: Some(units.into()),
            conditions: Vec::new(),
            instrument: None,
            files: None,
        }
    }

    /// Find a condition by name
    pub fn condition(&self, name: &str) -> Option<&Value> {
        self.conditions.iter().find(|c| c.name == name)
    }
}

/// Converted record of one LFA export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChemicalSystem {
    pub category: String,
    pub ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub chemical_formula: Option<String>,
    pub properties: Vec<Property>,
}

impl ChemicalSystem {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            category: CHEMICAL_SYSTEM_CATEGORY.to_string(),
            ids: vec![id.into()],
            chemical_formula: None,
            properties: Vec::new(),
        }
    }

    /// Find a property by name
    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_property_serializes_camel_case_and_skips_absent_fields() {
        let mut property = Property::new(
            "Diffusivity",
            Scalars::Series(vec!["1.2".to_string()]),
            "mm$^2$/s",
        );
        property.files = Some(FileReference {
            relative_path: "S1_run.csv".to_string(),
        });

        let value = serde_json::to_value(&property).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "Diffusivity",
                "scalars": ["1.2"],
                "units": "mm$^2$/s",
                "files": { "relativePath": "S1_run.csv" }
            })
        );
    }

    #[test]
    fn test_chemical_system_without_formula() {
        let system = ChemicalSystem::new("S1");
        let value = serde_json::to_value(&system).unwrap();

        assert_eq!(value["category"], "system.chemical");
        assert_eq!(value["ids"], json!(["S1"]));
        assert!(value.get("chemicalFormula").is_none());
    }

    #[test]
    fn test_scalars_accessors() {
        let single = Scalars::Single("2.0".to_string());
        let series = Scalars::Series(vec!["25.0".to_string(), "50.0".to_string()]);

        assert_eq!(single.as_single(), Some("2.0"));
        assert_eq!(single.len(), 1);
        assert_eq!(series.as_series().map(<[String]>::len), Some(2));
        assert!(series.as_single().is_none());
        assert!(Scalars::Series(Vec::new()).is_empty());
    }
}
