//! Catalogue of the prefixes a NIF may start with.

use serde::Serialize;

/// Kind of taxpayer a NIF prefix is reserved for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Pessoa singular.
    Individual,
    /// Pessoa colectiva.
    Corporate,
    /// Organismo público.
    PublicBody,
    /// Herança indivisa colectiva.
    CollectiveUndividedEstate,
    /// Não residente colectivo.
    CollectiveNonResident,
    /// NIF oficioso de sujeito passivo.
    OfficialTaxpayer,
    /// Regime excepcional, Expo '98.
    Expo98,
    /// Empresário em nome individual.
    SoleTrader,
    /// Condomínio, sociedade irregular ou herança indivisa.
    Condominium,
    /// Não residente sem estabelecimento estável.
    NonResident,
    /// Sociedade civil sem personalidade jurídica.
    CivilPartnership,
}

impl Category {
    /// Human-readable description.
    pub fn description(self) -> &'static str {
        match self {
            Self::Individual => "individual",
            Self::Corporate => "corporate body",
            Self::PublicBody => "public body",
            Self::CollectiveUndividedEstate => "collective undivided estate",
            Self::CollectiveNonResident => "collective non-resident",
            Self::OfficialTaxpayer => "official taxpayer number",
            Self::Expo98 => "exceptional scheme (Expo '98)",
            Self::SoleTrader => "sole trader",
            Self::Condominium => "condominium, irregular company or undivided estate",
            Self::NonResident => "non-resident without permanent establishment",
            Self::CivilPartnership => "civil partnership without legal personality",
        }
    }
}

/// A 1- or 2-digit prefix that a valid NIF base starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Combination {
    /// The prefix digits.
    pub digits: &'static [u8],
    /// What the prefix denotes.
    pub category: Category,
}

impl Combination {
    const fn new(digits: &'static [u8], category: Category) -> Self {
        Self { digits, category }
    }

    /// Whether `digits` starts with this combination.
    pub fn is_prefix_of(&self, digits: &[u8]) -> bool {
        digits.starts_with(self.digits)
    }
}

/// All valid combinations, in catalogue order.
///
/// `3` (individuals, not yet assigned) is deliberately absent.
pub static COMBINATIONS: &[Combination] = &[
    Combination::new(&[1], Category::Individual),
    Combination::new(&[2], Category::Individual),
    Combination::new(&[5], Category::Corporate),
    Combination::new(&[6], Category::PublicBody),
    Combination::new(&[7, 0], Category::CollectiveUndividedEstate),
    Combination::new(&[7, 1], Category::CollectiveNonResident),
    Combination::new(&[7, 7], Category::OfficialTaxpayer),
    Combination::new(&[7, 9], Category::Expo98),
    Combination::new(&[8], Category::SoleTrader),
    Combination::new(&[9, 0], Category::Condominium),
    Combination::new(&[9, 1], Category::Condominium),
    Combination::new(&[9, 8], Category::NonResident),
    Combination::new(&[9, 9], Category::CivilPartnership),
];

/// Second-digit choices a single-digit combination stands in for.
const FAIR_WEIGHT: usize = 10;

/// Return the catalogue entry `digits` starts with, if any.
///
/// Matches against the raw catalogue only: `9` followed by `5` matches
/// nothing even though `9` begins several entries.
pub fn find_combination(digits: &[u8]) -> Option<&'static Combination> {
    COMBINATIONS.iter().find(|c| c.is_prefix_of(digits))
}

/// Expand the catalogue so every concrete two-digit prefix is equally likely.
///
/// Single-digit entries are repeated ten times (one per free second digit),
/// two-digit entries appear once.
pub fn fair_combinations() -> Vec<&'static Combination> {
    COMBINATIONS
        .iter()
        .flat_map(|c| {
            let copies = if c.digits.len() == 1 { FAIR_WEIGHT } else { 1 };
            std::iter::repeat_n(c, copies)
        })
        .collect()
}
