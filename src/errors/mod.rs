//! Error types and error handling for the tokenizer.
//!
//! This module defines the errors a scan can end with. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for stalls and failed validation
//! - Error formatting and display functionality
//! - Helpful error messages and suggestions
//!
//! Malformed spans that the recognizers recover from are not errors; they
//! surface as `Unexpected` tokens in the stream instead.

pub mod errors;
