use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(
            Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        pub struct $name(pub u64);
    };
}

id_newtype!(RequestId);

impl RequestId {
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// One of the three independent query/response cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Flow {
    Extraction,
    Accommodation,
    FullGuide,
}

impl Flow {
    pub const ALL: [Flow; 3] = [Flow::Extraction, Flow::Accommodation, Flow::FullGuide];

    pub fn endpoint(self) -> &'static str {
        match self {
            Flow::Extraction => "/extract_location_date",
            Flow::Accommodation => "/travel_guide",
            Flow::FullGuide => "/full_travel_guide",
        }
    }

    /// Message shown when the request fails before a usable body arrives.
    pub fn transport_failure_message(self) -> &'static str {
        match self {
            Flow::Extraction => "Failed to extract location and date",
            Flow::Accommodation => "Failed to get accommodation guide",
            Flow::FullGuide => "Failed to get full travel guide",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Flow::Extraction => "extraction",
            Flow::Accommodation => "accommodation",
            Flow::FullGuide => "full_guide",
        }
    }
}
