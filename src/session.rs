//! Keeps one calculator per development type, with one of them active at a time.
//!
//! This is the state a front end holds while the user switches between development types. Each
//! calculator keeps its own inputs, so switching back to a type shows what was entered before.
use crate::calculator::Calculator;
use crate::development_type::DevelopmentType;
use crate::error::CalculatorError;
use crate::registry::create_calculator_for;
use anyhow::{Context, Result};
use indexmap::IndexMap;
use log::debug;
use strum::IntoEnumIterator;

/// A set of calculators, one per development type, in declaration order
#[derive(Debug, Clone)]
pub struct CalculatorSession {
    calculators: IndexMap<DevelopmentType, Calculator>,
    active: DevelopmentType,
}

impl Default for CalculatorSession {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorSession {
    /// Create a calculator for every development type, with the first one active
    pub fn new() -> Self {
        let calculators: IndexMap<_, _> = DevelopmentType::iter()
            .map(|development_type| (development_type, create_calculator_for(development_type)))
            .collect();

        Self {
            calculators,
            active: DevelopmentType::StandardSingle,
        }
    }

    /// The currently selected development type
    pub fn active_type(&self) -> DevelopmentType {
        self.active
    }

    /// The calculator for the currently selected development type
    pub fn active(&self) -> &Calculator {
        &self.calculators[&self.active]
    }

    /// Mutable access to the calculator for the currently selected development type
    pub fn active_mut(&mut self) -> &mut Calculator {
        self.calculators
            .get_mut(&self.active)
            .expect("Every development type has a calculator")
    }

    /// Get the calculator for a development type, whether or not it is active
    pub fn get(&self, development_type: DevelopmentType) -> &Calculator {
        &self.calculators[&development_type]
    }

    /// Select the active development type
    pub fn select(&mut self, development_type: DevelopmentType) -> &mut Calculator {
        debug!("Selected development type {development_type}");
        self.active = development_type;
        self.active_mut()
    }

    /// Select the active development type by identifier
    pub fn select_id(&mut self, type_id: &str) -> Result<&mut Calculator, CalculatorError> {
        let development_type = DevelopmentType::from_id(type_id)?;
        Ok(self.select(development_type))
    }

    /// Select the active development type by its position (e.g. the index of a tab)
    pub fn select_index(&mut self, index: usize) -> Result<&mut Calculator> {
        let (&development_type, _) = self
            .calculators
            .get_index(index)
            .with_context(|| format!("No development type at index {index}"))?;

        Ok(self.select(development_type))
    }

    /// Iterate over all calculators in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &Calculator> {
        self.calculators.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::InputField;
    use crate::fixture::assert_error;
    use crate::units::SquareMetres;

    #[test]
    fn test_new_session() {
        let session = CalculatorSession::new();
        assert_eq!(session.active_type(), DevelopmentType::StandardSingle);
        assert_eq!(session.iter().count(), 9);
        assert!(
            session
                .iter()
                .all(|calculator| calculator.inputs().number_of_units() == 0)
        );
    }

    #[test]
    fn test_switching_keeps_inputs() {
        let mut session = CalculatorSession::new();
        session
            .select(DevelopmentType::ResidentialFlat)
            .set_input(InputField::NumberOfUnits, "30")
            .unwrap();

        session
            .select_id("trad_11_plus")
            .unwrap()
            .set_input(InputField::NumberOfUnits, "5")
            .unwrap();
        assert_eq!(session.active().inputs().number_of_units(), 5);

        session.select_index(4).unwrap();
        assert_eq!(session.active_type(), DevelopmentType::ResidentialFlat);
        assert_eq!(session.active().inputs().number_of_units(), 30);
        assert_eq!(
            session.active().results().total.bulky_waste_space,
            SquareMetres(4.0)
        );

        // Untouched calculators are unaffected
        assert_eq!(
            session
                .get(DevelopmentType::StandardSingle)
                .inputs()
                .number_of_units(),
            0
        );
    }

    #[test]
    fn test_select_invalid() {
        let mut session = CalculatorSession::new();
        assert_error!(session.select_index(9), "No development type at index 9");
        assert_error!(
            session.select_id("castle"),
            "Unknown development type: castle"
        );
        assert_eq!(session.active_type(), DevelopmentType::StandardSingle);
    }
}
