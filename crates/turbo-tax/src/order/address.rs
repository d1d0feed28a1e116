//! Address and stock location types.

use crate::ids::StockLocationId;
use serde::{Deserialize, Serialize};

/// A state/province region.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct State {
    /// Full name (e.g., "California").
    pub name: String,
    /// Abbreviation (e.g., "CA").
    pub abbr: String,
}

impl State {
    pub fn new(name: impl Into<String>, abbr: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            abbr: abbr.into(),
        }
    }
}

/// Anything that carries postal address fields.
///
/// Implemented by customer addresses and stock locations so both can be
/// normalized into a tax address.
pub trait AddressSource {
    fn address1(&self) -> Option<&str>;
    fn address2(&self) -> Option<&str>;
    fn city(&self) -> Option<&str>;
    /// Abbreviation of the region, when the region is known.
    fn state_abbr(&self) -> Option<&str>;
    fn zipcode(&self) -> Option<&str>;
}

/// A customer postal address.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Address {
    /// First name.
    #[serde(default)]
    pub first_name: Option<String>,
    /// Last name.
    #[serde(default)]
    pub last_name: Option<String>,
    /// Address line 1.
    #[serde(default)]
    pub address1: Option<String>,
    /// Address line 2 (apt, suite, etc.).
    #[serde(default)]
    pub address2: Option<String>,
    /// City.
    #[serde(default)]
    pub city: Option<String>,
    /// State/province.
    #[serde(default)]
    pub state: Option<State>,
    /// Postal/ZIP code, as entered.
    #[serde(default)]
    pub zipcode: Option<String>,
    /// Country code (e.g., "US").
    #[serde(default)]
    pub country_code: Option<String>,
}

impl Address {
    /// Create an address from its street, city and zip fields.
    pub fn new(
        address1: impl Into<String>,
        city: impl Into<String>,
        zipcode: impl Into<String>,
    ) -> Self {
        Self {
            address1: Some(address1.into()),
            city: Some(city.into()),
            zipcode: Some(zipcode.into()),
            ..Self::default()
        }
    }

    /// Set the state.
    pub fn with_state(mut self, state: State) -> Self {
        self.state = Some(state);
        self
    }

    /// Set address line 2.
    pub fn with_address2(mut self, address2: impl Into<String>) -> Self {
        self.address2 = Some(address2.into());
        self
    }
}

impl AddressSource for Address {
    fn address1(&self) -> Option<&str> {
        self.address1.as_deref()
    }

    fn address2(&self) -> Option<&str> {
        self.address2.as_deref()
    }

    fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    fn state_abbr(&self) -> Option<&str> {
        self.state.as_ref().map(|s| s.abbr.as_str())
    }

    fn zipcode(&self) -> Option<&str> {
        self.zipcode.as_deref()
    }
}

/// A warehouse or store that ships orders.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StockLocation {
    /// Unique identifier.
    pub id: StockLocationId,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Whether the location currently ships.
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default)]
    pub address1: Option<String>,
    #[serde(default)]
    pub address2: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<State>,
    #[serde(default)]
    pub zipcode: Option<String>,
}

fn default_active() -> bool {
    true
}

impl StockLocation {
    /// Create an active stock location at the given address.
    pub fn new(id: impl Into<StockLocationId>, name: impl Into<String>, address: Address) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            active: true,
            address1: address.address1,
            address2: address.address2,
            city: address.city,
            state: address.state,
            zipcode: address.zipcode,
        }
    }

    /// Whether this location can serve as a shipping origin.
    ///
    /// It must be active and have a street, city, zip code and state.
    pub fn is_valid(&self) -> bool {
        fn filled(field: &Option<String>) -> bool {
            field.as_deref().is_some_and(|s| !s.trim().is_empty())
        }

        self.active
            && filled(&self.address1)
            && filled(&self.city)
            && filled(&self.zipcode)
            && self.state.is_some()
    }
}

impl AddressSource for StockLocation {
    fn address1(&self) -> Option<&str> {
        self.address1.as_deref()
    }

    fn address2(&self) -> Option<&str> {
        self.address2.as_deref()
    }

    fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    fn state_abbr(&self) -> Option<&str> {
        self.state.as_ref().map(|s| s.abbr.as_str())
    }

    fn zipcode(&self) -> Option<&str> {
        self.zipcode.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nevada() -> State {
        State::new("Nevada", "NV")
    }

    #[test]
    fn test_address_source_for_address() {
        let addr = Address::new("1 Main St", "Reno", "89501").with_state(nevada());
        assert_eq!(AddressSource::address1(&addr), Some("1 Main St"));
        assert_eq!(addr.state_abbr(), Some("NV"));
        assert_eq!(AddressSource::address2(&addr), None);
    }

    #[test]
    fn test_stock_location_valid() {
        let loc = StockLocation::new(
            "wh-1",
            "Warehouse",
            Address::new("1 Dock Rd", "Reno", "89501").with_state(nevada()),
        );
        assert!(loc.is_valid());
    }

    #[test]
    fn test_stock_location_inactive_is_invalid() {
        let mut loc = StockLocation::new(
            "wh-1",
            "Warehouse",
            Address::new("1 Dock Rd", "Reno", "89501").with_state(nevada()),
        );
        loc.active = false;
        assert!(!loc.is_valid());
    }

    #[test]
    fn test_stock_location_incomplete_is_invalid() {
        let no_state = StockLocation::new("wh-2", "No state", Address::new("1 Dock Rd", "Reno", "89501"));
        assert!(!no_state.is_valid());

        let blank_city = StockLocation::new(
            "wh-3",
            "Blank city",
            Address::new("1 Dock Rd", "  ", "89501").with_state(nevada()),
        );
        assert!(!blank_city.is_valid());
    }

    #[test]
    fn test_stock_location_defaults_to_active() {
        let loc: StockLocation = serde_json::from_str(r#"{"id": "wh-9"}"#).unwrap();
        assert!(loc.active);
        assert!(!loc.is_valid());
    }
}
