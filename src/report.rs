//! Plain-text summaries of bin calculation results.
use crate::calculator::Calculator;
use crate::engine::StreamResult;
use crate::units::{LitresPerWeek, SquareMetres};
use std::fmt::Write;

/// Write the figures for a single stream
fn write_stream(out: &mut String, heading: &str, result: &StreamResult) {
    writeln!(out, "{heading}:").unwrap();
    writeln!(out, "  Generation: {} L/week", result.generation).unwrap();
    writeln!(out, "  Bin size: {}L", result.bin_size).unwrap();
    writeln!(out, "  Number of bins: {}", result.number_of_bins).unwrap();
    writeln!(out, "  Space required: {}m²", result.space_required).unwrap();
}

/// Round to two decimal places for display, so that sums like 0.9 + 1.0 read cleanly
fn round_area(area: SquareMetres) -> SquareMetres {
    SquareMetres((area.value() * 100.0).round() / 100.0)
}

/// Render the results of a calculator as text.
///
/// The organics section is only included if organics are generated and bulky waste space is only
/// shown if some is required.
pub fn render(name: &str, calculator: &Calculator) -> String {
    let results = calculator.results();
    let inputs = calculator.inputs();
    let mut out = String::new();

    writeln!(
        out,
        "{name} ({}, calculator {}): {} units, {} bins, {} collection",
        calculator.development_type(),
        calculator.calculator_id(),
        inputs.number_of_units(),
        calculator.bin_type(),
        calculator.collection_type()
    )
    .unwrap();

    write_stream(&mut out, "Waste bins", &results.waste.stream);
    if inputs.has_compaction() {
        writeln!(
            out,
            "  Compacted generation: {} L/week",
            results.waste.compacted_generation
        )
        .unwrap();
    }
    if results.waste.collections_per_week > 1 {
        writeln!(
            out,
            "  Collections per week: {}",
            results.waste.collections_per_week
        )
        .unwrap();
    }

    write_stream(&mut out, "Recycling bins", &results.recycling.stream);
    if results.recycling.collections_per_fortnight > 1 {
        writeln!(
            out,
            "  Collections per fortnight: {}",
            results.recycling.collections_per_fortnight
        )
        .unwrap();
    }

    if results.organic.generation > LitresPerWeek(0.0) {
        write_stream(&mut out, "Organic bins", &results.organic);
    }

    writeln!(out, "Totals:").unwrap();
    writeln!(out, "  Total bins: {}", results.total.number_of_bins).unwrap();
    writeln!(
        out,
        "  Total space required: {}m²",
        round_area(results.total.space_required)
    )
    .unwrap();
    if results.total.bulky_waste_space > SquareMetres(0.0) {
        writeln!(
            out,
            "  Bulky waste space: {}m²",
            results.total.bulky_waste_space
        )
        .unwrap();
    }

    out
}
