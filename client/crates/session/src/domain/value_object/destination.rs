use derive_more::Display;

/// Deferred navigation target, e.g. `booking_flow/7`
///
/// Remembered when an action needs login first and resumed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub struct Destination(String);

impl Destination {
    pub fn new(route: impl Into<String>) -> Self {
        Self(route.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Booking flow for one villa
    pub fn booking_flow(villa_id: &str) -> Self {
        Self(format!("booking_flow/{villa_id}"))
    }

    /// Split into route name and argument (`booking_flow/7` -> (`booking_flow`, `7`))
    pub fn split(&self) -> (&str, Option<&str>) {
        match self.0.split_once('/') {
            Some((route, arg)) => (route, Some(arg)),
            None => (self.0.as_str(), None),
        }
    }
}

impl From<&str> for Destination {
    fn from(route: &str) -> Self {
        Self::new(route)
    }
}
