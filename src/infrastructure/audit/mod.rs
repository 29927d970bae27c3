/// Recording of call events pushed by the provider
pub mod logger;

pub use logger::CallEventLogger;
