use serde::{Deserialize, Serialize};

use crate::timing::operating_hours::OperatingHoursEntry;

/// A tourist attraction, accommodation, restaurant or souvenir shop.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub district: Option<String>,
    #[serde(default)]
    pub season: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    /// Only filled in by the nearest-place lookup.
    #[serde(default)]
    pub distance: Option<f64>,
    #[serde(default)]
    pub operating_hours: Vec<OperatingHoursEntry>,
}

/// Optional fields of a place search. Unset fields are not sent.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlaceFilter {
    pub name: Option<String>,
    pub category: Option<String>,
    pub district: Option<String>,
    pub season: Option<String>,
}

impl PlaceFilter {
    pub fn pairs(&self) -> Vec<(&'static str, &str)> {
        [
            ("name", &self.name),
            ("category", &self.category),
            ("district", &self.district),
            ("season", &self.season),
        ]
        .into_iter()
        .filter_map(|(key, value)| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(|value| (key, value))
        })
        .collect()
    }
}
