// Florida Autism Services - Directory API Core
//
// Backend API for the regional autism-services directory: providers,
// schools, daycares, faith communities, events, informational articles,
// and lead-generation submissions.
//
// The filter engine lives in kernel/ and is pure; domains/ own the record
// types and their data sources; server/ wires everything into axum.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
