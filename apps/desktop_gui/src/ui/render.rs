//! Display models derived from service results. egui drawing lives in
//! `panels`; everything here is plain data so it can be checked directly.

use shared::protocol::{AccommodationResult, ExtractionResult, FullGuideResult};

pub const NO_SUGGESTIONS: &str = "No suggestions available.";
pub const NO_TRAVEL_SUMMARY: &str = "No travel summary available.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledField {
    pub label: &'static str,
    pub value: String,
}

impl LabeledField {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

/// Only the fields the service actually returned.
pub fn extraction_fields(result: &ExtractionResult) -> Vec<LabeledField> {
    [
        ("Location:", result.location.as_deref()),
        ("Date:", result.date.as_deref()),
        ("Summary:", result.weather_summary.as_deref()),
    ]
    .into_iter()
    .filter_map(|(label, value)| {
        value
            .filter(|v| !v.is_empty())
            .map(|v| LabeledField::new(label, v))
    })
    .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccommodationView {
    pub location: LabeledField,
    pub date: LabeledField,
    pub suggestions: String,
}

pub fn accommodation_view(result: &AccommodationResult) -> AccommodationView {
    AccommodationView {
        location: LabeledField::new("Location:", result.city.clone().unwrap_or_default()),
        date: LabeledField::new("Date:", result.date.clone().unwrap_or_default()),
        suggestions: non_empty_or(
            result
                .accommodation
                .as_ref()
                .and_then(|details| details.summary.as_deref()),
            NO_SUGGESTIONS,
        ),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayBlock {
    pub label: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuideView {
    pub formatted_response: String,
    pub days: Vec<DayBlock>,
    pub summary: String,
}

/// `None` when there is no formatted guide text; the other fields are not
/// shown on their own.
pub fn full_guide_view(result: &FullGuideResult) -> Option<GuideView> {
    let formatted_response = result
        .formatted_response
        .as_deref()
        .filter(|text| !text.is_empty())?;

    let days = result
        .itinerary
        .iter()
        .flat_map(|itinerary| itinerary.days.iter())
        .map(|day| DayBlock {
            label: day_label(&day.name),
            items: day.activities.clone(),
        })
        .collect();

    Some(GuideView {
        formatted_response: formatted_response.to_string(),
        days,
        summary: non_empty_or(
            result
                .travel_summary
                .as_ref()
                .and_then(|summary| summary.summary.as_deref()),
            NO_TRAVEL_SUMMARY,
        ),
    })
}

/// Upper-cases the first character, leaving the rest untouched.
pub fn day_label(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn non_empty_or(value: Option<&str>, fallback: &str) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or(fallback)
        .to_string()
}

#[cfg(test)]
#[path = "../tests/render_tests.rs"]
mod tests;
