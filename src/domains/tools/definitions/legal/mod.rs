//! Legal assistance tool definitions.
//!
//! One file per tool, plus shared response helpers and the static Indian
//! law knowledge base.

pub mod common;
pub mod knowledge;

mod consultation;
mod document_analyzer;
mod precedent_search;
mod statute_search;
mod validate;

pub use consultation::{LegalConsultationParams, LegalConsultationTool};
pub use document_analyzer::{LegalDocumentAnalyzerParams, LegalDocumentAnalyzerTool};
pub use precedent_search::{LegalPrecedentSearchParams, LegalPrecedentSearchTool};
pub use statute_search::{IndianLegalSearchParams, IndianLegalSearchTool};
pub use validate::{ValidateParams, ValidateTool};
