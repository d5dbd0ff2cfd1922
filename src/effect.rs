//! Effects - side effects declared by the reducer

/// Side effects that can be triggered by actions
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Request a snapshot for the given query
    FetchWeather { location: String },
    /// Resolve the current position
    Geolocate,
}
