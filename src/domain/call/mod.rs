//! Call bounded context - outbound calls placed through an external provider

pub mod event;
pub mod provider;
pub mod request;
pub mod twiml;
pub mod value_object;

pub use event::{CallEvent, CallEventSink};
pub use provider::{CallProvider, NewCall, ProviderFailure, ProviderResult};
pub use request::CallRequest;
pub use twiml::{escape_xml, SpeechDocument};
pub use value_object::{CallHandle, CallStatusView, CallbackEvent};
