//! The module responsible for writing results to disk.
use crate::calculator::Calculator;
use crate::development_type::DevelopmentType;
use crate::engine::StreamResult;
use crate::units::{Litres, LitresPerWeek, SquareMetres};
use anyhow::{Context, Result, ensure};
use serde::Serialize;
use std::fs;
use std::fs::File;
use std::path::Path;

/// The output file name for per-stream bin requirements
const BIN_REQUIREMENTS_FILE_NAME: &str = "bin_requirements.csv";

/// The output file name for totals
const TOTALS_FILE_NAME: &str = "totals.csv";

/// Create a new output directory.
///
/// If the directory already exists and contains files, it will only be reused if `allow_overwrite`
/// is set.
///
/// # Returns
///
/// Whether existing files may be overwritten
pub fn create_output_directory(output_dir: &Path, allow_overwrite: bool) -> Result<bool> {
    if output_dir.is_dir() {
        // Directory exists, so check whether it's empty
        let is_empty = fs::read_dir(output_dir)?.next().is_none();
        if is_empty {
            return Ok(false);
        }

        ensure!(
            allow_overwrite,
            "Output folder already exists and is not empty. Use --overwrite to replace its \
            contents."
        );
        return Ok(true);
    }

    // Try to create the directory, with parents
    fs::create_dir_all(output_dir)?;

    Ok(false)
}

/// A waste stream, as it appears in output files
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
enum Stream {
    Waste,
    Recycling,
    Organic,
}

/// Represents a row in the bin requirements CSV file
#[derive(Serialize, Debug, PartialEq)]
struct BinRequirementRow<'a> {
    development: &'a str,
    development_type: DevelopmentType,
    stream: Stream,
    generation: LitresPerWeek,
    effective_generation: LitresPerWeek,
    bin_size: Litres,
    number_of_bins: u32,
    space_required: SquareMetres,
}

impl<'a> BinRequirementRow<'a> {
    fn new(
        development: &'a str,
        development_type: DevelopmentType,
        stream: Stream,
        result: &StreamResult,
        effective_generation: LitresPerWeek,
    ) -> Self {
        Self {
            development,
            development_type,
            stream,
            generation: result.generation,
            effective_generation,
            bin_size: result.bin_size,
            number_of_bins: result.number_of_bins,
            space_required: result.space_required,
        }
    }
}

/// Represents a row in the totals CSV file
#[derive(Serialize, Debug, PartialEq)]
struct TotalsRow<'a> {
    development: &'a str,
    development_type: DevelopmentType,
    number_of_units: u32,
    number_of_bins: u32,
    space_required: SquareMetres,
    bulky_waste_space: SquareMetres,
}

/// An object for writing bin calculation results to CSV files
pub struct DataWriter {
    bin_requirements_writer: csv::Writer<File>,
    totals_writer: csv::Writer<File>,
}

impl DataWriter {
    /// Open CSV files to write output data to
    ///
    /// # Arguments
    ///
    /// * `output_path` - Folder where files will be saved
    pub fn create(output_path: &Path) -> Result<Self> {
        let new_writer = |file_name| {
            let file_path = output_path.join(file_name);
            csv::Writer::from_path(&file_path)
                .with_context(|| format!("Could not create {}", file_path.display()))
        };

        Ok(Self {
            bin_requirements_writer: new_writer(BIN_REQUIREMENTS_FILE_NAME)?,
            totals_writer: new_writer(TOTALS_FILE_NAME)?,
        })
    }

    /// Write the latest results of a calculator
    pub fn write_development(&mut self, name: &str, calculator: &Calculator) -> Result<()> {
        let development_type = calculator.development_type();
        let results = calculator.results();
        let rows = [
            BinRequirementRow::new(
                name,
                development_type,
                Stream::Waste,
                &results.waste.stream,
                results.waste.compacted_generation,
            ),
            BinRequirementRow::new(
                name,
                development_type,
                Stream::Recycling,
                &results.recycling.stream,
                results.recycling.stream.generation,
            ),
            BinRequirementRow::new(
                name,
                development_type,
                Stream::Organic,
                &results.organic,
                results.organic.generation,
            ),
        ];
        for row in rows {
            self.bin_requirements_writer.serialize(row)?;
        }

        self.totals_writer.serialize(TotalsRow {
            development: name,
            development_type,
            number_of_units: calculator.inputs().number_of_units(),
            number_of_bins: results.total.number_of_bins,
            space_required: results.total.space_required,
            bulky_waste_space: results.total.bulky_waste_space,
        })?;

        Ok(())
    }

    /// Flush the underlying streams
    pub fn flush(&mut self) -> Result<()> {
        self.bin_requirements_writer.flush()?;
        self.totals_writer.flush()?;

        Ok(())
    }
}
