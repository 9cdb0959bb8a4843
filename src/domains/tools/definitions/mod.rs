//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod legal;

pub use legal::{
    IndianLegalSearchParams, IndianLegalSearchTool, LegalConsultationParams, LegalConsultationTool,
    LegalDocumentAnalyzerParams, LegalDocumentAnalyzerTool, LegalPrecedentSearchParams,
    LegalPrecedentSearchTool, ValidateParams, ValidateTool,
};
