use thiserror::Error;

#[derive(Debug, Error)]
pub enum RouteError {
    #[error("a route needs at least 2 points, got {0}")]
    TooFewPoints(usize),

    #[error("no itinerary found between the requested locations")]
    NoItinerary,

    #[error("remote service failure: {0}")]
    Remote(String),
}

pub type RouteResult<T> = Result<T, RouteError>;
