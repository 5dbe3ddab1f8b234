//! This module defines the unit types used for bin calculations and the arithmetic between them.
use float_cmp::{ApproxEq, F64Margin};
use serde::{Deserialize, Serialize};

macro_rules! unit_struct {
    ($name:ident) => {
        /// Represents a type of quantity.
        #[derive(
            Debug,
            Default,
            Clone,
            Copy,
            PartialEq,
            PartialOrd,
            Serialize,
            Deserialize,
            derive_more::Add,
            derive_more::Sub,
            derive_more::Display,
        )]
        #[serde(transparent)]
        pub struct $name(pub f64);

        impl $name {
            /// Creates a new instance of the unit type from a f64 value.
            pub const fn new(val: f64) -> Self {
                Self(val)
            }

            /// Returns the value of the unit type as a f64.
            pub fn value(self) -> f64 {
                self.0
            }
        }

        impl ApproxEq for $name {
            type Margin = F64Margin;

            fn approx_eq<M: Into<Self::Margin>>(self, other: Self, margin: M) -> bool {
                self.0.approx_eq(other.0, margin)
            }
        }

        impl std::ops::Mul<Dimensionless> for $name {
            type Output = $name;
            fn mul(self, rhs: Dimensionless) -> $name {
                $name(self.0 * rhs.0)
            }
        }

        impl std::ops::Div<Dimensionless> for $name {
            type Output = $name;
            fn div(self, rhs: Dimensionless) -> $name {
                $name(self.0 / rhs.0)
            }
        }
    };
}

macro_rules! impl_mul {
    ($Lhs:ty, $Rhs:ty, $Out:ty) => {
        impl std::ops::Mul<$Rhs> for $Lhs {
            type Output = $Out;
            fn mul(self, rhs: $Rhs) -> $Out {
                <$Out>::new(self.0 * rhs.0)
            }
        }
        impl std::ops::Mul<$Lhs> for $Rhs {
            type Output = $Out;
            fn mul(self, lhs: $Lhs) -> $Out {
                <$Out>::new(self.0 * lhs.0)
            }
        }
    };
}

macro_rules! impl_div {
    ($Lhs:ty, $Rhs:ty, $Out:ty) => {
        impl std::ops::Div<$Rhs> for $Lhs {
            type Output = $Out;
            fn div(self, rhs: $Rhs) -> $Out {
                <$Out>::new(self.0 / rhs.0)
            }
        }
    };
}

// Base quantities
unit_struct!(Dimensionless);
unit_struct!(Litres);
unit_struct!(SquareMetres);
unit_struct!(PerWeek);

// Derived quantities
unit_struct!(LitresPerWeek);
unit_struct!(LitresPerUnitPerWeek);

impl Dimensionless {
    /// The smallest integer greater than or equal to this value
    pub fn ceil(self) -> Self {
        Self(self.0.ceil())
    }
}

impl From<u32> for Dimensionless {
    fn from(val: u32) -> Self {
        Self(f64::from(val))
    }
}

// Division rules
impl_div!(LitresPerWeek, LitresPerWeek, Dimensionless);

// Multiplication rules
impl_mul!(Litres, PerWeek, LitresPerWeek);

/// A generation rate applied to a number of dwellings gives a weekly volume
impl std::ops::Mul<u32> for LitresPerUnitPerWeek {
    type Output = LitresPerWeek;

    fn mul(self, units: u32) -> LitresPerWeek {
        LitresPerWeek(self.0 * f64::from(units))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn test_rate_times_units() {
        let rate = LitresPerUnitPerWeek(0.35);
        assert_approx_eq!(LitresPerWeek, rate * 20, LitresPerWeek(7.0));
    }

    #[test]
    fn test_bin_capacity_per_week() {
        let capacity = Litres(240.0) * PerWeek(0.5);
        assert_eq!(capacity, LitresPerWeek(120.0));
        assert_eq!(PerWeek(2.0) * Litres(1100.0), LitresPerWeek(2200.0));
    }

    #[test]
    fn test_volume_ratio_is_dimensionless() {
        let ratio = LitresPerWeek(2400.0) / LitresPerWeek(240.0);
        assert_eq!(ratio, Dimensionless(10.0));
        assert_eq!((LitresPerWeek(7.0) / LitresPerWeek(1100.0)).ceil(), Dimensionless(1.0));
    }

    #[test]
    fn test_display_is_transparent() {
        assert_eq!(SquareMetres(1.5).to_string(), "1.5");
        assert_eq!(Litres(240.0).to_string(), "240");
    }
}
