//! The fixed set of development types and the constants which apply to each.
//!
//! Each development type corresponds to one row of a static table. Looking up a type's constants
//! is an index into that table, so adding a type means adding a variant and a row.
use crate::error::CalculatorError;
use crate::units::{LitresPerUnitPerWeek, SquareMetres};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

/// A classification of residential development, governing which generation rates apply.
///
/// Variants are declared in the order the calculators are numbered.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    EnumCount,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[serde(try_from = "String", into = "&'static str")]
pub enum DevelopmentType {
    /// A standard single dwelling
    #[strum(serialize = "standard_single")]
    StandardSingle,
    /// Multi-dwelling housing of seven dwellings or fewer
    #[strum(serialize = "mdh_7_or_less")]
    Mdh7OrLess,
    /// Multi-dwelling housing of eight or more dwellings with a vehicle loop for onsite collection
    #[strum(serialize = "mdh_8_plus_loop")]
    Mdh8PlusLoop,
    /// Multi-dwelling housing of eight or more dwellings without a vehicle loop
    #[strum(serialize = "mdh_8_plus_no_loop")]
    Mdh8PlusNoLoop,
    /// A residential flat building
    #[strum(serialize = "residential_flat")]
    ResidentialFlat,
    /// New generation boarding house with ten rooms or fewer
    #[strum(serialize = "new_gen_10_or_less")]
    NewGen10OrLess,
    /// New generation boarding house with eleven or more rooms
    #[strum(serialize = "new_gen_11_plus")]
    NewGen11Plus,
    /// Traditional boarding house with ten rooms or fewer
    #[strum(serialize = "trad_10_or_less")]
    Trad10OrLess,
    /// Traditional boarding house with eleven or more rooms
    #[strum(serialize = "trad_11_plus")]
    Trad11Plus,
}

impl DevelopmentType {
    /// Look up a development type from its identifier (e.g. `residential_flat`)
    pub fn from_id(id: &str) -> Result<Self, CalculatorError> {
        Self::from_str(id).map_err(|_| CalculatorError::UnknownType { id: id.to_string() })
    }

    /// The identifier for this development type
    pub fn id(self) -> &'static str {
        self.into()
    }

    /// The constants which apply to this development type
    pub fn constants(self) -> &'static DevelopmentTypeConstants {
        &DEVELOPMENT_TYPE_TABLE[self as usize]
    }
}

impl TryFrom<String> for DevelopmentType {
    type Error = CalculatorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_id(&value)
    }
}

/// Whether bins are allocated to each dwelling or shared between them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
pub enum BinType {
    /// Each dwelling has its own bins
    Individual,
    /// Bins are shared between dwellings
    Communal,
}

/// Where bins are collected from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
pub enum CollectionType {
    /// Bins are presented at the street
    Kerbside,
    /// Bins are collected from within the property
    Onsite,
}

/// The optional inputs which are offered for a development type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct AllowedChoices {
    /// Whether the development may be designated as seniors housing
    pub can_be_seniors_housing: bool,
    /// Whether onsite compaction of waste may be used
    pub allows_compaction: bool,
    /// Whether waste may be collected more than once per week
    pub allows_multiple_collections_per_week: bool,
    /// Whether recycling may be collected more than once per fortnight
    pub allows_multiple_collections_per_fortnight: bool,
}

/// The constants for a single development type
#[derive(Debug, Clone, PartialEq)]
pub struct DevelopmentTypeConstants {
    /// The development type these constants belong to
    pub development_type: DevelopmentType,
    /// The calculator number (1-9)
    pub calculator_id: u32,
    /// Individual or communal bins
    pub bin_type: BinType,
    /// Kerbside or onsite collection
    pub collection_type: CollectionType,
    /// Waste generated per dwelling per week
    pub waste_generation_rate: LitresPerUnitPerWeek,
    /// Recycling generated per dwelling per week
    pub recycling_generation_rate: LitresPerUnitPerWeek,
    /// Organics generated per dwelling per week
    pub organics_generation_rate: LitresPerUnitPerWeek,
    /// Floor area reserved for bulky waste, regardless of development size
    pub bulky_waste_space: SquareMetres,
    /// Which optional inputs apply
    pub allowed_choices: AllowedChoices,
}

const NO_CHOICES: AllowedChoices = AllowedChoices {
    can_be_seniors_housing: false,
    allows_compaction: false,
    allows_multiple_collections_per_week: false,
    allows_multiple_collections_per_fortnight: false,
};

const SENIORS_ONLY: AllowedChoices = AllowedChoices {
    can_be_seniors_housing: true,
    ..NO_CHOICES
};

const SENIORS_AND_COMPACTION: AllowedChoices = AllowedChoices {
    can_be_seniors_housing: true,
    allows_compaction: true,
    ..NO_CHOICES
};

const SENIORS_AND_ONSITE_OPTIONS: AllowedChoices = AllowedChoices {
    can_be_seniors_housing: true,
    allows_compaction: true,
    allows_multiple_collections_per_week: true,
    allows_multiple_collections_per_fortnight: true,
};

const ONSITE_OPTIONS: AllowedChoices = AllowedChoices {
    can_be_seniors_housing: false,
    ..SENIORS_AND_ONSITE_OPTIONS
};

/// Constants for every development type, in declaration order
static DEVELOPMENT_TYPE_TABLE: [DevelopmentTypeConstants; DevelopmentType::COUNT] = [
    DevelopmentTypeConstants {
        development_type: DevelopmentType::StandardSingle,
        calculator_id: 1,
        bin_type: BinType::Individual,
        collection_type: CollectionType::Kerbside,
        waste_generation_rate: LitresPerUnitPerWeek(240.0),
        recycling_generation_rate: LitresPerUnitPerWeek(120.0),
        organics_generation_rate: LitresPerUnitPerWeek(240.0),
        bulky_waste_space: SquareMetres(0.0),
        allowed_choices: NO_CHOICES,
    },
    DevelopmentTypeConstants {
        development_type: DevelopmentType::Mdh7OrLess,
        calculator_id: 2,
        bin_type: BinType::Individual,
        collection_type: CollectionType::Kerbside,
        waste_generation_rate: LitresPerUnitPerWeek(240.0),
        recycling_generation_rate: LitresPerUnitPerWeek(120.0),
        organics_generation_rate: LitresPerUnitPerWeek(240.0),
        bulky_waste_space: SquareMetres(0.0),
        allowed_choices: SENIORS_ONLY,
    },
    DevelopmentTypeConstants {
        development_type: DevelopmentType::Mdh8PlusLoop,
        calculator_id: 3,
        bin_type: BinType::Individual,
        collection_type: CollectionType::Onsite,
        waste_generation_rate: LitresPerUnitPerWeek(240.0),
        recycling_generation_rate: LitresPerUnitPerWeek(120.0),
        organics_generation_rate: LitresPerUnitPerWeek(0.0),
        bulky_waste_space: SquareMetres(4.0),
        allowed_choices: SENIORS_AND_COMPACTION,
    },
    DevelopmentTypeConstants {
        development_type: DevelopmentType::Mdh8PlusNoLoop,
        calculator_id: 4,
        bin_type: BinType::Communal,
        collection_type: CollectionType::Onsite,
        waste_generation_rate: LitresPerUnitPerWeek(240.0),
        recycling_generation_rate: LitresPerUnitPerWeek(120.0),
        organics_generation_rate: LitresPerUnitPerWeek(0.0),
        bulky_waste_space: SquareMetres(4.0),
        allowed_choices: SENIORS_AND_ONSITE_OPTIONS,
    },
    DevelopmentTypeConstants {
        development_type: DevelopmentType::ResidentialFlat,
        calculator_id: 5,
        bin_type: BinType::Communal,
        collection_type: CollectionType::Onsite,
        waste_generation_rate: LitresPerUnitPerWeek(240.0),
        recycling_generation_rate: LitresPerUnitPerWeek(80.0),
        organics_generation_rate: LitresPerUnitPerWeek(0.0),
        bulky_waste_space: SquareMetres(4.0),
        allowed_choices: SENIORS_AND_ONSITE_OPTIONS,
    },
    DevelopmentTypeConstants {
        development_type: DevelopmentType::NewGen10OrLess,
        calculator_id: 6,
        bin_type: BinType::Communal,
        collection_type: CollectionType::Kerbside,
        waste_generation_rate: LitresPerUnitPerWeek(110.0),
        recycling_generation_rate: LitresPerUnitPerWeek(90.0),
        organics_generation_rate: LitresPerUnitPerWeek(0.0),
        bulky_waste_space: SquareMetres(0.0),
        allowed_choices: NO_CHOICES,
    },
    DevelopmentTypeConstants {
        development_type: DevelopmentType::NewGen11Plus,
        calculator_id: 7,
        bin_type: BinType::Communal,
        collection_type: CollectionType::Onsite,
        waste_generation_rate: LitresPerUnitPerWeek(110.0),
        recycling_generation_rate: LitresPerUnitPerWeek(90.0),
        organics_generation_rate: LitresPerUnitPerWeek(0.0),
        bulky_waste_space: SquareMetres(502.0),
        allowed_choices: ONSITE_OPTIONS,
    },
    DevelopmentTypeConstants {
        development_type: DevelopmentType::Trad10OrLess,
        calculator_id: 8,
        bin_type: BinType::Communal,
        collection_type: CollectionType::Kerbside,
        waste_generation_rate: LitresPerUnitPerWeek(0.35),
        recycling_generation_rate: LitresPerUnitPerWeek(0.15),
        organics_generation_rate: LitresPerUnitPerWeek(0.0),
        bulky_waste_space: SquareMetres(0.0),
        allowed_choices: NO_CHOICES,
    },
    DevelopmentTypeConstants {
        development_type: DevelopmentType::Trad11Plus,
        calculator_id: 9,
        bin_type: BinType::Communal,
        collection_type: CollectionType::Onsite,
        waste_generation_rate: LitresPerUnitPerWeek(0.35),
        recycling_generation_rate: LitresPerUnitPerWeek(0.15),
        organics_generation_rate: LitresPerUnitPerWeek(0.0),
        bulky_waste_space: SquareMetres(502.0),
        allowed_choices: ONSITE_OPTIONS,
    },
];
