//! Header detection and column resolution
//!
//! The data block starts after a header row whose position is not fixed.
//! Two rules recognize it:
//!
//! - [`HeaderRule::ShotWithStdDev`]: the first field contains `#Shot` and
//!   field 4 contains `Std_Dev`. Temperature, Diffusivity and Std_Dev
//!   columns are resolved.
//! - [`HeaderRule::Marker`]: the first field contains `#Shot` or
//!   `#Time/min`. Temperature and Diffusivity are resolved, Std_Dev is not.
//!
//! Both rules fire on a `#Shot` row with a Std_Dev column; the
//! [`HeaderPolicy`] decides which resolution of Std_Dev survives.

use tracing::debug;

use crate::config::HeaderPolicy;
use crate::constants::{PLUS_MINUS, STD_DEV_PROBE_INDEX, columns, tags};
use crate::{Error, Result};

/// Rule that recognized a header row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderRule {
    ShotWithStdDev,
    Marker,
}

impl HeaderRule {
    /// Check whether this rule recognizes the row as a header
    pub fn matches<S: AsRef<str>>(&self, row: &[S]) -> bool {
        let Some(first) = row.first().map(AsRef::<str>::as_ref) else {
            return false;
        };

        match self {
            HeaderRule::ShotWithStdDev => {
                // Rows too short to hold the probe field do not match
                first.contains(tags::SHOT)
                    && row
                        .get(STD_DEV_PROBE_INDEX)
                        .is_some_and(|cell| AsRef::<str>::as_ref(cell).contains(columns::STD_DEV))
            }
            HeaderRule::Marker => first.contains(tags::SHOT) || first.contains(tags::TIME),
        }
    }
}

/// Resolved column positions of the data block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderIndex {
    pub temperature: usize,
    pub diffusivity: usize,
    pub std_dev: Option<usize>,
}

/// One accepted data row, kept as text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPoint {
    pub temperature: String,
    pub diffusivity: String,
}

/// Column positions found by scanning header cells
///
/// When several cells contain the same keyword the last one wins.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct ColumnScan {
    temperature: Option<usize>,
    diffusivity: Option<usize>,
    std_dev: Option<usize>,
}

impl ColumnScan {
    fn scan<S: AsRef<str>>(row: &[S]) -> Self {
        let mut found = Self::default();
        for (index, cell) in row.iter().enumerate() {
            let cell: &str = cell.as_ref();
            if cell.contains(columns::TEMPERATURE) {
                found.temperature = Some(index);
            }
            if cell.contains(columns::DIFFUSIVITY) {
                found.diffusivity = Some(index);
            }
            if cell.contains(columns::STD_DEV) {
                found.std_dev = Some(index);
            }
        }
        found
    }
}

/// Check a row against the header rules
///
/// Returns `Ok(None)` when neither rule recognizes the row. A recognized row
/// without a Temperature or Diffusivity column fails with
/// [`Error::MalformedHeader`].
pub fn detect_header<S: AsRef<str>>(
    row: &[S],
    row_number: usize,
    policy: HeaderPolicy,
) -> Result<Option<HeaderIndex>> {
    let shot_with_std_dev = HeaderRule::ShotWithStdDev.matches(row);
    let marker = HeaderRule::Marker.matches(row);

    if !shot_with_std_dev && !marker {
        return Ok(None);
    }

    let found = ColumnScan::scan(row);
    let temperature = found.temperature.ok_or_else(|| {
        Error::malformed_header(row_number, "no cell contains 'Temperature'")
    })?;
    let diffusivity = found.diffusivity.ok_or_else(|| {
        Error::malformed_header(row_number, "no cell contains 'Diffusivity'")
    })?;

    let std_dev = match (shot_with_std_dev, marker, policy) {
        (true, true, HeaderPolicy::LastRuleWins) => None,
        (true, _, _) => found.std_dev,
        (false, _, _) => None,
    };

    let index = HeaderIndex {
        temperature,
        diffusivity,
        std_dev,
    };

    debug!(
        "Row {}: header resolved (shot_with_std_dev={}, marker={}) -> {:?}",
        row_number, shot_with_std_dev, marker, index
    );

    Ok(Some(index))
}

impl HeaderIndex {
    /// Read a candidate data row
    ///
    /// Returns `Ok(None)` when the temperature or diffusivity cell is empty
    /// or absent. An accepted row must also hold the Std_Dev cell when that
    /// column was resolved.
    pub fn read_point<S: AsRef<str>>(
        &self,
        row: &[S],
        row_number: usize,
    ) -> Result<Option<DataPoint>> {
        let temperature = cell(row, self.temperature);
        let diffusivity = cell(row, self.diffusivity);

        if temperature.is_empty() || diffusivity.is_empty() {
            return Ok(None);
        }

        let diffusivity = match self.std_dev {
            Some(std_index) => {
                let std_dev: &str = row
                    .get(std_index)
                    .ok_or_else(|| Error::index_out_of_range(row_number, std_index, row.len()))?
                    .as_ref();
                format!("{}{}{}", diffusivity, PLUS_MINUS, std_dev)
            }
            None => diffusivity.to_string(),
        };

        Ok(Some(DataPoint {
            temperature: temperature.to_string(),
            diffusivity,
        }))
    }
}

fn cell<S: AsRef<str>>(row: &[S], index: usize) -> &str {
    row.get(index).map_or("", AsRef::<str>::as_ref)
}
