//! Application constants for the LFA processor
//!
//! Tag markers, header keywords, units and PIF property names used when
//! converting LFA exports.

// =============================================================================
// Metadata Tags
// =============================================================================

/// First-field markers of the metadata rows written above the data block
pub mod tags {
    pub const MATERIAL: &str = "#Material";
    pub const INSTRUMENT: &str = "#Instrument";
    pub const THICKNESS: &str = "#Thickness_RT/mm";
    pub const DIAMETER: &str = "#Diameter/mm";
    pub const DATE: &str = "#Date";
    pub const ATMOSPHERE: &str = "#Atmosphere";
    pub const GAS_FLOW: &str = "#Gas_flow/(ml/min)";

    /// Header row of per-shot exports
    pub const SHOT: &str = "#Shot";

    /// Header row of time-resolved exports
    pub const TIME: &str = "#Time/min";
}

/// Field position holding the value of a metadata row
pub const METADATA_VALUE_INDEX: usize = 1;

// =============================================================================
// Header Keywords
// =============================================================================

/// Substrings used to locate data columns within the header row
pub mod columns {
    pub const TEMPERATURE: &str = "Temperature";
    pub const DIFFUSIVITY: &str = "Diffusivity";
    pub const STD_DEV: &str = "Std_Dev";
}

/// Field position checked for the Std_Dev keyword on `#Shot` header rows
pub const STD_DEV_PROBE_INDEX: usize = 4;

/// Separator between a diffusivity value and its standard deviation
pub const PLUS_MINUS: &str = "±";

// =============================================================================
// Units
// =============================================================================

pub mod units {
    pub const MILLIMETRE: &str = "mm";
    pub const FLOW_RATE: &str = "ml/min";
    pub const DIFFUSIVITY: &str = "mm$^2$/s";
    pub const TEMPERATURE: &str = "$^\\circ$C";
}

// =============================================================================
// PIF Names
// =============================================================================

pub mod names {
    pub const DIFFUSIVITY: &str = "Diffusivity";
    pub const TEMPERATURE: &str = "Temperature";
    pub const THICKNESS: &str = "Thickness";
    pub const DIAMETER: &str = "Diameter";
    pub const EXPERIMENT_DATE: &str = "Experiment date";
    pub const ATMOSPHERE: &str = "Atmosphere";
    pub const FLOW_RATE: &str = "Flow rate";
}

/// PIF category of the emitted record
pub const CHEMICAL_SYSTEM_CATEGORY: &str = "system.chemical";

/// Separator ending the sample identifier within an export filename
pub const SAMPLE_ID_SEPARATOR: char = '_';

// =============================================================================
// Output
// =============================================================================

/// Extension of the JSON document written next to each input file
pub const DEFAULT_OUTPUT_EXTENSION: &str = "json";

/// Indent width of the written JSON documents
pub const DEFAULT_JSON_INDENT: usize = 4;

/// Extension of the files picked up when a directory is given
pub const INPUT_EXTENSION: &str = "csv";
