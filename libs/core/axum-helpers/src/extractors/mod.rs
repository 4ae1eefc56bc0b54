//! Custom extractors for Axum handlers.
//!
//! Every extractor rejects with the standard error envelope so handlers only
//! ever see well-formed input.

pub mod id_path;
pub mod query_params;
pub mod text_path;
pub mod validated_json;

pub use id_path::IdPath;
pub use query_params::QueryParams;
pub use text_path::TextPath;
pub use validated_json::ValidatedJson;
