//! A calculator for a single development type, holding its inputs and latest results.
use crate::development_type::{
    AllowedChoices, BinType, CollectionType, DevelopmentType, DevelopmentTypeConstants,
};
use crate::engine::{Results, compute};
use crate::error::CalculatorError;
use log::warn;
use std::str::FromStr;
use strum::{Display, EnumString};

/// The largest number of units (dwellings or rooms) a single development can have
pub const MAX_NUMBER_OF_UNITS: u32 = 100_000;

/// The largest number of waste collections per week which can be selected
pub const MAX_COLLECTIONS_PER_WEEK: u32 = 3;

/// The largest number of recycling collections per fortnight which can be selected
pub const MAX_COLLECTIONS_PER_FORTNIGHT: u32 = 2;

/// The user-provided inputs for a calculation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inputs {
    number_of_units: u32,
    is_seniors_housing: bool,
    has_compaction: bool,
    collections_per_week: u32,
    collections_per_fortnight: u32,
}

impl Default for Inputs {
    fn default() -> Self {
        Self {
            number_of_units: 0,
            is_seniors_housing: false,
            has_compaction: false,
            collections_per_week: 1,
            collections_per_fortnight: 1,
        }
    }
}

impl Inputs {
    /// The number of dwellings (or rooms, for boarding houses)
    pub fn number_of_units(&self) -> u32 {
        self.number_of_units
    }

    /// Whether the development is seniors housing
    pub fn is_seniors_housing(&self) -> bool {
        self.is_seniors_housing
    }

    /// Whether waste is compacted at a 1:2 ratio
    pub fn has_compaction(&self) -> bool {
        self.has_compaction
    }

    /// How many times waste is collected each week
    pub fn collections_per_week(&self) -> u32 {
        self.collections_per_week
    }

    /// How many times recycling is collected each fortnight
    pub fn collections_per_fortnight(&self) -> u32 {
        self.collections_per_fortnight
    }

    /// Set the number of units, which must be between one and [`MAX_NUMBER_OF_UNITS`]
    pub fn set_number_of_units(&mut self, number_of_units: u32) -> Result<(), CalculatorError> {
        check_number_of_units(number_of_units)?;
        self.number_of_units = number_of_units;
        Ok(())
    }

    /// Set whether the development is seniors housing
    pub fn set_is_seniors_housing(&mut self, is_seniors_housing: bool) {
        self.is_seniors_housing = is_seniors_housing;
    }

    /// Set whether waste is compacted
    pub fn set_has_compaction(&mut self, has_compaction: bool) {
        self.has_compaction = has_compaction;
    }

    /// Set the number of waste collections per week (1-3)
    pub fn set_collections_per_week(&mut self, collections: u32) -> Result<(), CalculatorError> {
        check_collections("collections_per_week", collections, MAX_COLLECTIONS_PER_WEEK)?;
        self.collections_per_week = collections;
        Ok(())
    }

    /// Set the number of recycling collections per fortnight (1-2)
    pub fn set_collections_per_fortnight(
        &mut self,
        collections: u32,
    ) -> Result<(), CalculatorError> {
        check_collections(
            "collections_per_fortnight",
            collections,
            MAX_COLLECTIONS_PER_FORTNIGHT,
        )?;
        self.collections_per_fortnight = collections;
        Ok(())
    }

    /// The names of inputs which differ from their defaults but are not offered for a development
    /// type
    fn unavailable_choices(&self, allowed: AllowedChoices) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.is_seniors_housing && !allowed.can_be_seniors_housing {
            names.push("is_seniors_housing");
        }
        if self.has_compaction && !allowed.allows_compaction {
            names.push("has_compaction");
        }
        if self.collections_per_week > 1 && !allowed.allows_multiple_collections_per_week {
            names.push("collections_per_week");
        }
        if self.collections_per_fortnight > 1 && !allowed.allows_multiple_collections_per_fortnight
        {
            names.push("collections_per_fortnight");
        }

        names
    }
}

/// Check that a number of units is within the range the calculators accept
fn check_number_of_units(value: u32) -> Result<(), CalculatorError> {
    if value == 0 {
        return Err(CalculatorError::invalid_input(
            "number_of_units",
            "must be at least 1",
        ));
    }
    if value > MAX_NUMBER_OF_UNITS {
        return Err(CalculatorError::invalid_input(
            "number_of_units",
            format!("must be at most {MAX_NUMBER_OF_UNITS}, got {value}"),
        ));
    }

    Ok(())
}

/// Check that a number of collections is within the selectable range
fn check_collections(field: &'static str, value: u32, max: u32) -> Result<(), CalculatorError> {
    if !(1..=max).contains(&value) {
        return Err(CalculatorError::invalid_input(
            field,
            format!("must be between 1 and {max}, got {value}"),
        ));
    }

    Ok(())
}

/// Parse a number of units from user-provided text.
///
/// Surrounding whitespace is ignored. The value must be a whole number between one and
/// [`MAX_NUMBER_OF_UNITS`].
pub fn parse_number_of_units(value: &str) -> Result<u32, CalculatorError> {
    let value = value.trim();
    let number = value.parse::<u32>().map_err(|_| {
        CalculatorError::invalid_input(
            "number_of_units",
            format!("'{value}' is not a positive whole number"),
        )
    })?;

    check_number_of_units(number)?;

    Ok(number)
}

/// Parse a yes/no answer from user-provided text
fn parse_bool(field: &'static str, value: &str) -> Result<bool, CalculatorError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" => Ok(true),
        "false" | "no" => Ok(false),
        other => Err(CalculatorError::invalid_input(
            field,
            format!("'{other}' is not yes or no"),
        )),
    }
}

/// Parse a number of collections from user-provided text
fn parse_collections(field: &'static str, value: &str) -> Result<u32, CalculatorError> {
    value.trim().parse().map_err(|_| {
        CalculatorError::invalid_input(field, format!("'{}' is not a whole number", value.trim()))
    })
}

/// An input which can be set from text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum InputField {
    /// See [`Inputs::number_of_units`]
    NumberOfUnits,
    /// See [`Inputs::is_seniors_housing`]
    IsSeniorsHousing,
    /// See [`Inputs::has_compaction`]
    HasCompaction,
    /// See [`Inputs::collections_per_week`]
    CollectionsPerWeek,
    /// See [`Inputs::collections_per_fortnight`]
    CollectionsPerFortnight,
}

impl InputField {
    /// Look up an input field by name
    pub fn from_name(name: &str) -> Result<Self, CalculatorError> {
        Self::from_str(name)
            .map_err(|_| CalculatorError::invalid_input("field", format!("unknown input '{name}'")))
    }
}

/// Calculates bin requirements for a single development type.
///
/// Inputs are changed through the setters and results are only updated when
/// [`Calculator::calculate`] is called (or when an input is set from text with
/// [`Calculator::set_input`]).
#[derive(Debug, Clone, PartialEq)]
pub struct Calculator {
    constants: &'static DevelopmentTypeConstants,
    inputs: Inputs,
    results: Results,
}

impl Calculator {
    /// Create a calculator with default inputs and empty results
    pub fn new(development_type: DevelopmentType) -> Self {
        Self {
            constants: development_type.constants(),
            inputs: Inputs::default(),
            results: Results::default(),
        }
    }

    /// Create a calculator with the given inputs and empty results.
    ///
    /// Unlike [`Calculator::set_inputs`], this does not log warnings for inputs the development
    /// type does not offer. Call [`Calculator::warn_unavailable_choices`] once logging is set up.
    pub fn with_inputs(development_type: DevelopmentType, inputs: Inputs) -> Self {
        Self {
            inputs,
            ..Self::new(development_type)
        }
    }

    /// The development type this calculator is for
    pub fn development_type(&self) -> DevelopmentType {
        self.constants.development_type
    }

    /// The constants for this calculator's development type
    pub fn constants(&self) -> &'static DevelopmentTypeConstants {
        self.constants
    }

    /// The calculator number (1-9), used to decide which inputs to offer
    pub fn calculator_id(&self) -> u32 {
        self.constants.calculator_id
    }

    /// Individual or communal bins
    pub fn bin_type(&self) -> BinType {
        self.constants.bin_type
    }

    /// Kerbside or onsite collection
    pub fn collection_type(&self) -> CollectionType {
        self.constants.collection_type
    }

    /// The optional inputs offered for this development type
    pub fn allowed_choices(&self) -> &'static AllowedChoices {
        &self.constants.allowed_choices
    }

    /// The current inputs
    pub fn inputs(&self) -> &Inputs {
        &self.inputs
    }

    /// The results of the last calculation
    pub fn results(&self) -> &Results {
        &self.results
    }

    /// Replace all inputs at once
    pub fn set_inputs(&mut self, inputs: Inputs) {
        self.inputs = inputs;
        self.warn_unavailable_choices();
    }

    /// Set the number of units
    pub fn set_number_of_units(&mut self, number_of_units: u32) -> Result<(), CalculatorError> {
        self.inputs.set_number_of_units(number_of_units)
    }

    /// Set whether the development is seniors housing
    pub fn set_is_seniors_housing(&mut self, is_seniors_housing: bool) {
        self.inputs.set_is_seniors_housing(is_seniors_housing);
        self.warn_unavailable_choices();
    }

    /// Set whether waste is compacted
    pub fn set_has_compaction(&mut self, has_compaction: bool) {
        self.inputs.set_has_compaction(has_compaction);
        self.warn_unavailable_choices();
    }

    /// Set the number of waste collections per week
    pub fn set_collections_per_week(&mut self, collections: u32) -> Result<(), CalculatorError> {
        self.inputs.set_collections_per_week(collections)?;
        self.warn_unavailable_choices();
        Ok(())
    }

    /// Set the number of recycling collections per fortnight
    pub fn set_collections_per_fortnight(
        &mut self,
        collections: u32,
    ) -> Result<(), CalculatorError> {
        self.inputs.set_collections_per_fortnight(collections)?;
        self.warn_unavailable_choices();
        Ok(())
    }

    /// Set an input from text and recalculate.
    ///
    /// If the value is rejected, the inputs and results are left unchanged.
    pub fn set_input(&mut self, field: InputField, value: &str) -> Result<(), CalculatorError> {
        match field {
            InputField::NumberOfUnits => {
                self.set_number_of_units(parse_number_of_units(value)?)?;
            }
            InputField::IsSeniorsHousing => {
                self.set_is_seniors_housing(parse_bool("is_seniors_housing", value)?);
            }
            InputField::HasCompaction => {
                self.set_has_compaction(parse_bool("has_compaction", value)?);
            }
            InputField::CollectionsPerWeek => {
                let collections = parse_collections("collections_per_week", value)?;
                self.set_collections_per_week(collections)?;
            }
            InputField::CollectionsPerFortnight => {
                let collections = parse_collections("collections_per_fortnight", value)?;
                self.set_collections_per_fortnight(collections)?;
            }
        }

        self.calculate();
        Ok(())
    }

    /// Recalculate results from the current inputs
    pub fn calculate(&mut self) -> &Results {
        self.results = compute(self.constants, &self.inputs);
        &self.results
    }

    /// Log a warning for any input which would not be offered for this development type
    pub fn warn_unavailable_choices(&self) {
        for name in self.inputs.unavailable_choices(*self.allowed_choices()) {
            warn!(
                "Input {name} is not offered for development type {}",
                self.development_type()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::{assert_error, calculator};
    use crate::units::LitresPerWeek;
    use rstest::rstest;

    #[test]
    fn test_inputs_default() {
        let inputs = Inputs::default();
        assert_eq!(inputs.number_of_units(), 0);
        assert!(!inputs.is_seniors_housing());
        assert!(!inputs.has_compaction());
        assert_eq!(inputs.collections_per_week(), 1);
        assert_eq!(inputs.collections_per_fortnight(), 1);
    }

    #[test]
    fn test_set_number_of_units_zero() {
        let mut inputs = Inputs::default();
        assert_error!(
            inputs.set_number_of_units(0),
            "Invalid value for number_of_units: must be at least 1"
        );
        assert_eq!(inputs.number_of_units(), 0);
    }

    #[rstest]
    #[case(MAX_NUMBER_OF_UNITS, true)]
    #[case(MAX_NUMBER_OF_UNITS + 1, false)]
    #[case(u32::MAX, false)]
    fn test_set_number_of_units_upper_bound(#[case] value: u32, #[case] expected_valid: bool) {
        let mut inputs = Inputs::default();
        assert_eq!(inputs.set_number_of_units(value).is_ok(), expected_valid);
    }

    #[test]
    fn test_parse_number_of_units_too_large() {
        assert_error!(
            parse_number_of_units("2000000000"),
            "Invalid value for number_of_units: must be at most 100000, got 2000000000"
        );
        assert_eq!(
            parse_number_of_units("100000").unwrap(),
            MAX_NUMBER_OF_UNITS
        );
    }

    #[rstest]
    #[case(0, false)]
    #[case(1, true)]
    #[case(3, true)]
    #[case(4, false)]
    fn test_set_collections_per_week(#[case] value: u32, #[case] expected_valid: bool) {
        let mut inputs = Inputs::default();
        assert_eq!(inputs.set_collections_per_week(value).is_ok(), expected_valid);
    }

    #[rstest]
    #[case(0, false)]
    #[case(1, true)]
    #[case(2, true)]
    #[case(3, false)]
    fn test_set_collections_per_fortnight(#[case] value: u32, #[case] expected_valid: bool) {
        let mut inputs = Inputs::default();
        assert_eq!(
            inputs.set_collections_per_fortnight(value).is_ok(),
            expected_valid
        );
    }

    #[rstest]
    #[case("12", Some(12))]
    #[case(" 7 ", Some(7))]
    #[case("0", None)]
    #[case("-3", None)]
    #[case("2.5", None)]
    #[case("", None)]
    #[case("ten", None)]
    fn test_parse_number_of_units(#[case] value: &str, #[case] expected: Option<u32>) {
        assert_eq!(parse_number_of_units(value).ok(), expected);
    }

    #[test]
    fn test_parse_number_of_units_message() {
        assert_error!(
            parse_number_of_units("abc"),
            "Invalid value for number_of_units: 'abc' is not a positive whole number"
        );
    }

    #[rstest]
    #[case("true", true)]
    #[case("Yes", true)]
    #[case("false", false)]
    #[case(" NO ", false)]
    fn test_parse_bool(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(parse_bool("has_compaction", value).unwrap(), expected);
    }

    #[test]
    fn test_input_field_from_name() {
        assert_eq!(
            InputField::from_name("number_of_units").unwrap(),
            InputField::NumberOfUnits
        );
        assert_eq!(
            InputField::from_name("collections_per_fortnight").unwrap(),
            InputField::CollectionsPerFortnight
        );
        assert_error!(
            InputField::from_name(""),
            "Invalid value for field: unknown input ''"
        );
    }

    #[test]
    fn test_with_inputs() {
        let mut inputs = Inputs::default();
        inputs.set_number_of_units(12).unwrap();
        inputs.set_has_compaction(true);
        let calculator = Calculator::with_inputs(DevelopmentType::ResidentialFlat, inputs.clone());
        assert_eq!(calculator.inputs(), &inputs);
        assert_eq!(calculator.results(), &Results::default());
    }

    #[rstest]
    fn test_new_calculator_is_empty(calculator: Calculator) {
        assert_eq!(calculator.inputs(), &Inputs::default());
        assert_eq!(calculator.results(), &Results::default());
        assert_eq!(calculator.calculator_id(), 5);
        assert_eq!(calculator.collection_type(), CollectionType::Onsite);
    }

    #[rstest]
    fn test_set_input_recalculates(mut calculator: Calculator) {
        calculator
            .set_input(InputField::NumberOfUnits, "10")
            .unwrap();
        assert_eq!(
            calculator.results().waste.stream.generation,
            LitresPerWeek(2400.0)
        );

        calculator.set_input(InputField::HasCompaction, "yes").unwrap();
        assert_eq!(
            calculator.results().waste.compacted_generation,
            LitresPerWeek(1200.0)
        );
    }

    #[rstest]
    fn test_set_input_rejected_leaves_state(mut calculator: Calculator) {
        calculator
            .set_input(InputField::NumberOfUnits, "10")
            .unwrap();
        let before = calculator.clone();

        assert!(
            calculator
                .set_input(InputField::NumberOfUnits, "lots")
                .is_err()
        );
        assert!(
            calculator
                .set_input(InputField::CollectionsPerWeek, "4")
                .is_err()
        );
        assert_eq!(calculator, before);
    }

    #[rstest]
    fn test_calculate_is_idempotent(mut calculator: Calculator) {
        calculator.set_number_of_units(42).unwrap();
        calculator.set_has_compaction(true);
        let first = *calculator.calculate();
        let second = *calculator.calculate();
        assert_eq!(first, second);
    }

    #[test]
    fn test_unavailable_choices() {
        let mut inputs = Inputs::default();
        inputs.set_is_seniors_housing(true);
        inputs.set_has_compaction(true);
        inputs.set_collections_per_week(2).unwrap();

        let allowed = DevelopmentType::StandardSingle.constants().allowed_choices;
        assert_eq!(
            inputs.unavailable_choices(allowed),
            ["is_seniors_housing", "has_compaction", "collections_per_week"]
        );

        let allowed = DevelopmentType::Mdh8PlusNoLoop.constants().allowed_choices;
        assert!(inputs.unavailable_choices(allowed).is_empty());
    }
}
