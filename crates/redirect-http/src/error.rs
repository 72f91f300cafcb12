/// Transport-level failures. A response with any status code is never one of these.
#[derive(thiserror::Error, Debug)]
pub enum HttpServiceError {
    /// The request did not complete in time
    #[error("Request timed out")]
    TimedOut,
    /// A request or response body could not be read
    #[error("Body error: {:?}", .0)]
    Body(Box<dyn std::error::Error + Send + Sync + 'static>),
    /// No connection could be made to the server
    #[error("Connect error: {:?}", .0)]
    Connect(Box<dyn std::error::Error + Send + Sync + 'static>),
    /// Any other transport failure
    #[error("Unexpected HTTP error: {:?}", .0)]
    Unexpected(Box<dyn std::error::Error + Send + Sync + 'static>),
}
