//! The "add a road" form: raw text fields and their validation.

use sr_core::Real;

use crate::error::{AppError, AppResult};

pub(crate) const ROAD_USAGE: &str = "road <from>, <to>, <distance>";

/// Raw, unvalidated input from the road form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoadForm {
    pub source: String,
    pub destination: String,
    pub distance: String,
}

/// A road that passed form validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRoad<'a> {
    pub source: &'a str,
    pub destination: &'a str,
    pub distance: Real,
}

impl RoadForm {
    pub fn new(
        source: impl Into<String>,
        destination: impl Into<String>,
        distance: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            distance: distance.into(),
        }
    }

    /// Build a form from comma-separated `from, to, distance` text.
    ///
    /// Fields are trimmed; absent trailing fields are left blank so that
    /// [`parse`](Self::parse) reports them as missing input.
    pub fn from_fields(text: &str) -> AppResult<Self> {
        let text = text.trim();
        let fields: Vec<&str> = if text.is_empty() {
            Vec::new()
        } else {
            text.split(',').map(str::trim).collect()
        };
        if fields.len() > 3 {
            return Err(AppError::Usage(ROAD_USAGE));
        }
        let field = |i: usize| fields.get(i).copied().unwrap_or_default();
        Ok(Self::new(field(0), field(1), field(2)))
    }

    /// Check the fields without touching any state.
    ///
    /// Blank fields are reported before the distance is parsed. Labels are
    /// taken verbatim; the distance may carry surrounding whitespace.
    pub fn parse(&self) -> AppResult<ParsedRoad<'_>> {
        for (field, value) in [
            ("Source", &self.source),
            ("Destination", &self.destination),
            ("Distance", &self.distance),
        ] {
            if value.is_empty() {
                return Err(AppError::MissingInput { field });
            }
        }

        let distance: Real =
            self.distance
                .trim()
                .parse()
                .map_err(|_| AppError::MalformedDistance {
                    input: self.distance.clone(),
                })?;

        Ok(ParsedRoad {
            source: &self.source,
            destination: &self.destination,
            distance,
        })
    }
}
