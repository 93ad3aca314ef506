use thiserror::Error;

/// Convenient result alias for the flightpath library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when inserting a city whose code is already taken.
    #[error("city code {code} is already in the graph")]
    DuplicateCode { code: String },

    /// Raised when inserting a city whose display name is already taken.
    #[error("city name {name} is already in the graph")]
    DuplicateName { name: String },

    /// Raised when a city name or code could not be resolved.
    #[error("unknown city: {name}")]
    UnknownCity { name: String },

    /// Raised when no itinerary connects two cities.
    #[error("no route found between {start} and {finish}")]
    RouteNotFound { start: String, finish: String },

    /// Raised when a negative duration reaches a duration formatter.
    #[error("cannot format a negative duration of {minutes} minutes")]
    NegativeDuration { minutes: i32 },
}
