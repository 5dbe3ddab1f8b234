//! The bin calculation engine.
//!
//! Bin requirements are calculated in four ordered steps: waste, recycling, organics and then
//! totals. Each step depends only on the development type's constants, the current inputs and the
//! output of earlier steps, so [`compute`] is a pure function and is safe to call repeatedly.
use crate::calculator::Inputs;
use crate::development_type::{CollectionType, DevelopmentTypeConstants};
use crate::units::{
    Dimensionless, Litres, LitresPerUnitPerWeek, LitresPerWeek, PerWeek, SquareMetres,
};
use log::debug;
use serde::Serialize;

/// The standard wheelie bin size, used for all streams with kerbside collection
pub const STANDARD_BIN_SIZE: Litres = Litres(240.0);

/// The bulk bin size used for waste with onsite collection
pub const BULK_BIN_SIZE: Litres = Litres(1100.0);

/// Results for a single waste stream
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct StreamResult {
    /// Volume generated by the whole development
    pub generation: LitresPerWeek,
    /// The size of bin used for this stream
    pub bin_size: Litres,
    /// The number of bins required
    pub number_of_bins: u32,
    /// The floor area required to store the bins
    pub space_required: SquareMetres,
}

/// Results for general waste
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WasteResult {
    /// Figures common to all streams
    pub stream: StreamResult,
    /// Generation after compaction has been applied (equal to generation if there is none)
    pub compacted_generation: LitresPerWeek,
    /// The number of collections per week used in the calculation
    pub collections_per_week: u32,
}

/// Results for recycling
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RecyclingResult {
    /// Figures common to all streams
    pub stream: StreamResult,
    /// The number of collections per fortnight used in the calculation
    pub collections_per_fortnight: u32,
}

/// Aggregate figures across all streams
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Totals {
    /// Total number of bins across all streams
    pub number_of_bins: u32,
    /// Total floor area for bin storage across all streams
    pub space_required: SquareMetres,
    /// Floor area reserved for bulky waste
    pub bulky_waste_space: SquareMetres,
}

/// The bin requirements for a development
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Results {
    /// General waste
    pub waste: WasteResult,
    /// Recycling
    pub recycling: RecyclingResult,
    /// Food and garden organics
    pub organic: StreamResult,
    /// Totals across all streams
    pub total: Totals,
}

/// The floor area taken up by a single bin of the given size.
///
/// Smaller bins take 1m² each and bulk bins 0.9m² each.
pub fn space_per_bin(bin_size: Litres) -> SquareMetres {
    if bin_size <= STANDARD_BIN_SIZE {
        SquareMetres(1.0)
    } else {
        SquareMetres(0.9)
    }
}

/// The total floor area for a number of bins of the given size
fn space_required(bin_size: Litres, number_of_bins: u32) -> SquareMetres {
    space_per_bin(bin_size) * Dimensionless::from(number_of_bins)
}

/// The number of bins needed to hold the given volume between collections.
///
/// # Arguments
///
/// * `generation` - Volume to be stored
/// * `capacity` - Volume removed from a single bin per week
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn bins_required(generation: LitresPerWeek, capacity: LitresPerWeek) -> u32 {
    let bins = (generation / capacity).ceil();

    // Guard against a negative or NaN volume producing a nonsensical count
    if bins.value().is_nan() || bins <= Dimensionless(0.0) {
        return 0;
    }

    bins.value() as u32
}

/// Calculate waste generation and bin requirements
fn calculate_waste(constants: &DevelopmentTypeConstants, inputs: &Inputs) -> WasteResult {
    let generation = constants.waste_generation_rate * inputs.number_of_units();
    let compacted_generation = if inputs.has_compaction() {
        generation / Dimensionless(2.0)
    } else {
        generation
    };

    let bin_size = match constants.collection_type {
        CollectionType::Onsite => BULK_BIN_SIZE,
        CollectionType::Kerbside => STANDARD_BIN_SIZE,
    };
    let collections_per_week = inputs.collections_per_week();
    let capacity = bin_size * PerWeek(f64::from(collections_per_week));
    let number_of_bins = bins_required(compacted_generation, capacity);

    WasteResult {
        stream: StreamResult {
            generation,
            bin_size,
            number_of_bins,
            space_required: space_required(bin_size, number_of_bins),
        },
        compacted_generation,
        collections_per_week,
    }
}

/// Calculate recycling generation and bin requirements.
///
/// Recycling always uses standard bins, whatever the collection type.
fn calculate_recycling(constants: &DevelopmentTypeConstants, inputs: &Inputs) -> RecyclingResult {
    let generation = constants.recycling_generation_rate * inputs.number_of_units();
    let bin_size = STANDARD_BIN_SIZE;
    let collections_per_fortnight = inputs.collections_per_fortnight();
    let capacity = bin_size * PerWeek(f64::from(collections_per_fortnight) / 2.0);
    let number_of_bins = bins_required(generation, capacity);

    RecyclingResult {
        stream: StreamResult {
            generation,
            bin_size,
            number_of_bins,
            space_required: space_required(bin_size, number_of_bins),
        },
        collections_per_fortnight,
    }
}

/// Calculate organics generation and bin requirements.
///
/// Development types without an organics service get all-zero results.
fn calculate_organics(constants: &DevelopmentTypeConstants, inputs: &Inputs) -> StreamResult {
    if constants.organics_generation_rate <= LitresPerUnitPerWeek(0.0) {
        return StreamResult::default();
    }

    let generation = constants.organics_generation_rate * inputs.number_of_units();
    let bin_size = STANDARD_BIN_SIZE;
    let number_of_bins = bins_required(generation, bin_size * PerWeek(1.0));

    StreamResult {
        generation,
        bin_size,
        number_of_bins,
        space_required: space_required(bin_size, number_of_bins),
    }
}

/// Sum the figures for each stream
fn calculate_totals(
    constants: &DevelopmentTypeConstants,
    waste: &StreamResult,
    recycling: &StreamResult,
    organic: &StreamResult,
) -> Totals {
    Totals {
        number_of_bins: waste.number_of_bins + recycling.number_of_bins + organic.number_of_bins,
        space_required: waste.space_required + recycling.space_required + organic.space_required,
        bulky_waste_space: constants.bulky_waste_space,
    }
}

/// Calculate bin requirements for a development.
///
/// # Arguments
///
/// * `constants` - The constants for the development type
/// * `inputs` - The current inputs (number of units, compaction etc.)
///
/// # Returns
///
/// Freshly calculated results. Nothing is carried over from previous calculations.
pub fn compute(constants: &DevelopmentTypeConstants, inputs: &Inputs) -> Results {
    let waste = calculate_waste(constants, inputs);
    let recycling = calculate_recycling(constants, inputs);
    let organic = calculate_organics(constants, inputs);
    let total = calculate_totals(constants, &waste.stream, &recycling.stream, &organic);

    debug!(
        "Calculated bins for {} with {} units: {} bins, {}m² (+{}m² bulky waste)",
        constants.development_type,
        inputs.number_of_units(),
        total.number_of_bins,
        total.space_required,
        total.bulky_waste_space
    );

    Results {
        waste,
        recycling,
        organic,
        total,
    }
}
