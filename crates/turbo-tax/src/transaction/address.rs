//! Tax service address shape.

use crate::order::AddressSource;
use serde::{Deserialize, Serialize};

/// Number of leading zip code characters the tax service accepts.
const ZIP5_LEN: usize = 5;

/// A normalized address as the tax service expects it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct TaxAddress {
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    /// Region abbreviation (e.g., "CA").
    pub state: Option<String>,
    /// First five characters of the zip code.
    pub zip5: Option<String>,
}

impl TaxAddress {
    /// Normalize any address-carrying value.
    ///
    /// Missing fields stay `None`. The zip code is truncated to five
    /// characters but never padded or otherwise validated.
    pub fn from_source<A>(source: &A) -> Self
    where
        A: AddressSource + ?Sized,
    {
        Self {
            address1: source.address1().map(str::to_owned),
            address2: source.address2().map(str::to_owned),
            city: source.city().map(str::to_owned),
            state: source.state_abbr().map(str::to_owned),
            zip5: source
                .zipcode()
                .map(|zip| zip.chars().take(ZIP5_LEN).collect()),
        }
    }

    /// Format as a single line, skipping absent fields.
    pub fn one_line(&self) -> String {
        [
            &self.address1,
            &self.address2,
            &self.city,
            &self.state,
            &self.zip5,
        ]
        .into_iter()
        .filter_map(|part| part.as_deref())
        .collect::<Vec<_>>()
        .join(", ")
    }
}
