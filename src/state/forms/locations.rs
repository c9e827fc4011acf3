//! Country to city lookup table

use serde::{Deserialize, Serialize};

/// One country and its cities, in display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryCities {
    pub name: String,
    pub cities: Vec<String>,
}

/// Read-only mapping from country name to its ordered city list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryCityTable {
    entries: Vec<CountryCities>,
}

impl CountryCityTable {
    pub fn new(entries: Vec<CountryCities>) -> Self {
        Self { entries }
    }

    /// Country names in table order
    pub fn countries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    pub fn contains_country(&self, country: &str) -> bool {
        self.entries.iter().any(|entry| entry.name == country)
    }

    /// Cities for a country; empty when the country is unknown or blank
    pub fn cities(&self, country: &str) -> &[String] {
        self.entries
            .iter()
            .find(|entry| entry.name == country)
            .map(|entry| entry.cities.as_slice())
            .unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CountryCityTable {
    fn default() -> Self {
        fn entry(name: &str, cities: &[&str]) -> CountryCities {
            CountryCities {
                name: name.to_string(),
                cities: cities.iter().map(|c| c.to_string()).collect(),
            }
        }

        Self::new(vec![
            entry(
                "India",
                &[
                    "Delhi",
                    "Mumbai",
                    "Bangalore",
                    "Chennai",
                    "kolkata",
                    "hyderabad",
                    "pune",
                ],
            ),
            entry("USA", &["New York", "Los Angeles", "Chicago", "Houston"]),
        ])
    }
}
