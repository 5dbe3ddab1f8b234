//! Fixtures for tests

use crate::calculator::{Calculator, Inputs};
use crate::development_type::DevelopmentType;
use rstest::fixture;

/// Assert that an error with the given message occurs
macro_rules! assert_error {
    ($result:expr, $msg:expr) => {
        assert_eq!($result.unwrap_err().to_string(), $msg);
    };
}
pub(crate) use assert_error;

/// Default inputs with the given number of units
pub fn inputs_with_units(number_of_units: u32) -> Inputs {
    let mut inputs = Inputs::default();
    inputs.set_number_of_units(number_of_units).unwrap();
    inputs
}

#[fixture]
pub fn calculator() -> Calculator {
    Calculator::new(DevelopmentType::ResidentialFlat)
}
