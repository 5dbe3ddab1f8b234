//! Common routines for handling input data, including scenario files.
use crate::calculator::{Calculator, Inputs};
use crate::development_type::DevelopmentType;
use anyhow::{Context, Result, ensure};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Format an error message to include the file path
pub fn input_err_msg<P: AsRef<Path>>(file_path: P) -> String {
    format!("Error reading {}", file_path.as_ref().display())
}

/// Parse a TOML file at the specified path.
///
/// # Arguments
///
/// * `file_path` - Path to the TOML file
///
/// # Returns
///
/// * The deserialised TOML data or an error if the file could not be read or parsed.
pub fn read_toml<T: DeserializeOwned>(file_path: &Path) -> Result<T> {
    let toml_str = fs::read_to_string(file_path).with_context(|| input_err_msg(file_path))?;
    let toml_data = toml::from_str(&toml_str).with_context(|| input_err_msg(file_path))?;
    Ok(toml_data)
}

fn default_collections() -> u32 {
    1
}

/// A development as written in a scenario file
#[derive(Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
struct DevelopmentRaw {
    name: Option<String>,
    development_type: DevelopmentType,
    number_of_units: u32,
    #[serde(default)]
    is_seniors_housing: bool,
    #[serde(default)]
    has_compaction: bool,
    #[serde(default = "default_collections")]
    collections_per_week: u32,
    #[serde(default = "default_collections")]
    collections_per_fortnight: u32,
}

/// The contents of a scenario file
#[derive(Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
struct ScenarioRaw {
    development: Vec<DevelopmentRaw>,
}

/// A named development with a calculator holding its inputs and results
#[derive(Debug, Clone, PartialEq)]
pub struct Development {
    /// A label for the development (defaults to the development type identifier)
    pub name: String,
    /// The calculator for the development
    pub calculator: Calculator,
}

impl DevelopmentRaw {
    /// Validate the inputs and create a calculator with them
    fn into_development(self) -> Result<Development> {
        let mut inputs = Inputs::default();
        inputs.set_number_of_units(self.number_of_units)?;
        inputs.set_is_seniors_housing(self.is_seniors_housing);
        inputs.set_has_compaction(self.has_compaction);
        inputs.set_collections_per_week(self.collections_per_week)?;
        inputs.set_collections_per_fortnight(self.collections_per_fortnight)?;

        let calculator = Calculator::with_inputs(self.development_type, inputs);

        Ok(Development {
            name: self
                .name
                .unwrap_or_else(|| self.development_type.id().to_string()),
            calculator,
        })
    }
}

/// Read the developments from a scenario file.
///
/// Results are not calculated until [`Calculator::calculate`] is called on each development.
pub fn read_scenario(file_path: &Path) -> Result<Vec<Development>> {
    let scenario: ScenarioRaw = read_toml(file_path)?;
    read_scenario_from_raw(scenario).with_context(|| input_err_msg(file_path))
}

fn read_scenario_from_raw(scenario: ScenarioRaw) -> Result<Vec<Development>> {
    ensure!(
        !scenario.development.is_empty(),
        "Scenario must contain at least one development"
    );

    scenario
        .development
        .into_iter()
        .enumerate()
        .map(|(index, raw)| {
            raw.into_development()
                .with_context(|| format!("Invalid development at position {}", index + 1))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::assert_error;
    use std::fs::File;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn write_scenario(dir: &Path, contents: &str) -> PathBuf {
        let file_path = dir.join("scenario.toml");
        let mut file = File::create(&file_path).unwrap();
        write!(file, "{contents}").unwrap();
        file_path
    }

    #[test]
    fn test_read_toml() {
        #[derive(Deserialize)]
        struct Record {
            a: u32,
        }

        let dir = tempdir().unwrap();
        let file_path = write_scenario(dir.path(), "a = 3");
        let record: Record = read_toml(&file_path).unwrap();
        assert_eq!(record.a, 3);

        // Missing file
        assert!(read_toml::<Record>(&dir.path().join("missing.toml")).is_err());
    }

    #[test]
    fn test_read_scenario() {
        let dir = tempdir().unwrap();
        let file_path = write_scenario(
            dir.path(),
            r#"
            [[development]]
            name = "Lot 12"
            development_type = "residential_flat"
            number_of_units = 40
            has_compaction = true
            collections_per_week = 2

            [[development]]
            development_type = "standard_single"
            number_of_units = 1
            "#,
        );

        let developments = read_scenario(&file_path).unwrap();
        assert_eq!(developments.len(), 2);

        let flat = &developments[0];
        assert_eq!(flat.name, "Lot 12");
        assert_eq!(
            flat.calculator.development_type(),
            DevelopmentType::ResidentialFlat
        );
        assert_eq!(flat.calculator.inputs().number_of_units(), 40);
        assert!(flat.calculator.inputs().has_compaction());
        assert_eq!(flat.calculator.inputs().collections_per_week(), 2);
        assert_eq!(flat.calculator.inputs().collections_per_fortnight(), 1);

        let house = &developments[1];
        assert_eq!(house.name, "standard_single");
        assert!(!house.calculator.inputs().has_compaction());
    }

    #[test]
    fn test_read_scenario_empty() {
        assert_error!(
            read_scenario_from_raw(ScenarioRaw {
                development: Vec::new()
            }),
            "Scenario must contain at least one development"
        );
    }

    #[test]
    fn test_read_scenario_invalid_development() {
        let scenario = ScenarioRaw {
            development: vec![DevelopmentRaw {
                name: None,
                development_type: DevelopmentType::Trad11Plus,
                number_of_units: 0,
                is_seniors_housing: false,
                has_compaction: false,
                collections_per_week: 1,
                collections_per_fortnight: 1,
            }],
        };
        let err = read_scenario_from_raw(scenario).unwrap_err();
        assert_eq!(err.to_string(), "Invalid development at position 1");
        assert_eq!(
            err.root_cause().to_string(),
            "Invalid value for number_of_units: must be at least 1"
        );
    }

    #[test]
    fn test_read_scenario_unknown_type() {
        let dir = tempdir().unwrap();
        let file_path = write_scenario(
            dir.path(),
            "[[development]]\ndevelopment_type = \"castle\"\nnumber_of_units = 3\n",
        );
        assert!(read_scenario(&file_path).is_err());
    }
}
