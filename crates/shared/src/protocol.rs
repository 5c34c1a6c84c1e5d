use std::fmt;

use serde::{
    de::{self, MapAccess, Visitor},
    ser::SerializeMap,
    Deserialize, Deserializer, Serialize, Serializer,
};

use crate::domain::Flow;

/// Request body shared by all three endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelQuery {
    pub message: String,
}

impl TravelQuery {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// `/extract_location_date` success body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather_summary: Option<String>,
}

/// `/travel_guide` success body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccommodationResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accommodation: Option<AccommodationDetails>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccommodationDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

/// `/full_travel_guide` success body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullGuideResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatted_response: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub itinerary: Option<Itinerary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub travel_summary: Option<TravelSummary>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItineraryDay {
    pub name: String,
    pub activities: Vec<String>,
}

/// Day name to activity list, in the order the keys appeared on the wire.
///
/// The service may send the map directly or wrapped once under an
/// `itinerary` key; both decode to the same value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Itinerary {
    pub days: Vec<ItineraryDay>,
}

impl Itinerary {
    pub fn from_days<I, S>(days: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<String>)>,
        S: Into<String>,
    {
        Self {
            days: days
                .into_iter()
                .map(|(name, activities)| ItineraryDay {
                    name: name.into(),
                    activities,
                })
                .collect(),
        }
    }
}

impl Serialize for Itinerary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.days.len()))?;
        for day in &self.days {
            map.serialize_entry(&day.name, &day.activities)?;
        }
        map.end()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ItineraryEntry {
    Activities(Vec<String>),
    Nested(Itinerary),
}

struct ItineraryVisitor;

impl<'de> Visitor<'de> for ItineraryVisitor {
    type Value = Itinerary;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of day names to activity lists")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Itinerary, A::Error> {
        let mut entries: Vec<(String, ItineraryEntry)> =
            Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, value)) = access.next_entry::<String, ItineraryEntry>()? {
            entries.push((key, value));
        }

        let wrapped = entries.len() == 1
            && entries[0].0 == "itinerary"
            && matches!(entries[0].1, ItineraryEntry::Nested(_));
        if wrapped {
            if let Some((_, ItineraryEntry::Nested(inner))) = entries.pop() {
                return Ok(inner);
            }
        }

        let mut days = Vec::with_capacity(entries.len());
        for (name, entry) in entries {
            match entry {
                ItineraryEntry::Activities(activities) => {
                    days.push(ItineraryDay { name, activities })
                }
                ItineraryEntry::Nested(_) => {
                    return Err(de::Error::custom(format!(
                        "itinerary day `{name}` must be a list of activities"
                    )))
                }
            }
        }
        Ok(Itinerary { days })
    }
}

impl<'de> Deserialize<'de> for Itinerary {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ItineraryVisitor)
    }
}

/// Decoded success body of any of the three endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowResponse {
    Extraction(ExtractionResult),
    Accommodation(AccommodationResult),
    FullGuide(FullGuideResult),
}

impl FlowResponse {
    pub fn flow(&self) -> Flow {
        match self {
            FlowResponse::Extraction(_) => Flow::Extraction,
            FlowResponse::Accommodation(_) => Flow::Accommodation,
            FlowResponse::FullGuide(_) => Flow::FullGuide,
        }
    }
}
