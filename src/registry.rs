//! Creates calculators for development types.
use crate::calculator::Calculator;
use crate::development_type::DevelopmentType;
use crate::error::CalculatorError;
use strum::IntoEnumIterator;

/// Create a calculator for the development type with the given identifier.
///
/// # Arguments
///
/// * `type_id` - A development type identifier, e.g. `standard_single`
///
/// # Returns
///
/// A calculator with default inputs and empty results, or [`CalculatorError::UnknownType`] if the
/// identifier is not recognised.
pub fn create_calculator(type_id: &str) -> Result<Calculator, CalculatorError> {
    let development_type = DevelopmentType::from_id(type_id)?;
    Ok(create_calculator_for(development_type))
}

/// Create a calculator for the given development type
pub fn create_calculator_for(development_type: DevelopmentType) -> Calculator {
    Calculator::new(development_type)
}

/// Iterate over the identifiers of all development types, in declaration order
pub fn development_type_ids() -> impl Iterator<Item = &'static str> {
    DevelopmentType::iter().map(DevelopmentType::id)
}
