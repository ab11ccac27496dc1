//! Test utilities for LFA parser testing
//!
//! Row fixtures and helpers shared by the test modules below.

use std::io::Write;
use tempfile::NamedTempFile;

mod tags_tests;

/// Build an owned row from string slices
pub fn row(fields: &[&str]) -> Vec<String> {
    fields.iter().map(|f| f.to_string()).collect()
}

/// Metadata rows of a complete export
pub fn metadata_rows() -> Vec<Vec<String>> {
    vec![
        row(&["#Material", "Fe2O3"]),
        row(&["#Instrument", "LFA-457"]),
        row(&["#Thickness_RT/mm", "2.0"]),
        row(&["#Diameter/mm", "12.5"]),
        row(&["#Date", "2020-01-01"]),
        row(&["#Atmosphere", "Argon"]),
        row(&["#Gas_flow/(ml/min)", "50"]),
    ]
}

/// Complete export with a `#Shot` header carrying Std_Dev and `n` data rows
pub fn create_shot_rows(n: usize) -> Vec<Vec<String>> {
    let mut rows = metadata_rows();
    rows.push(row(&[
        "#Shot",
        "1",
        "x",
        "x",
        "Std_Dev",
        "Temperature",
        "Diffusivity",
    ]));
    for i in 0..n {
        let shot = (i + 1).to_string();
        let temperature = format!("{}.0", 25 + i * 25);
        let diffusivity = format!("1.{}", i);
        let std_dev = format!("0.0{}", i);
        rows.push(row(&[
            shot.as_str(),
            "x",
            "x",
            "x",
            std_dev.as_str(),
            temperature.as_str(),
            diffusivity.as_str(),
        ]));
    }
    rows
}

/// Complete export with a `#Time/min` header and `n` data rows
pub fn create_time_rows(n: usize) -> Vec<Vec<String>> {
    let mut rows = metadata_rows();
    rows.push(row(&[
        "#Time/min",
        "Temperature/°C",
        "Diffusivity/(mm^2/s)",
        "Std_Dev/(mm^2/s)",
    ]));
    for i in 0..n {
        let time = (i * 10).to_string();
        let temperature = format!("{}.5", 100 + i);
        let diffusivity = format!("0.{}7", i);
        rows.push(row(&[
            time.as_str(),
            temperature.as_str(),
            diffusivity.as_str(),
            "0.001",
        ]));
    }
    rows
}

/// CSV text of a complete export, as written by the instrument software
pub fn create_test_lfa_csv() -> String {
    r#"#Material,Fe2O3
#Instrument,#LFA-457 MicroFlash
#Thickness_RT/mm,2.0
#Diameter/mm,12.5
#Date, 2020-01-01 
#Atmosphere, Argon
#Gas_flow/(ml/min),50

#Shot,Shot_Number,Time,Laser,Std_Dev,Temperature/°C,Diffusivity/(mm^2/s)
1,1,0,x,0.002,25.0,1.200
2,2,0,x,0.003,100.0,1.100
3,3,0,x,0.004,,1.000
4,4,0,x,0.005,200.0,0.950"#
        .to_string()
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "{}", content).unwrap();
    temp_file
}
