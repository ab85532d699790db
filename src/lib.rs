pub mod config;
pub mod exit_codes;
pub mod file_processor;
pub mod formatter;
pub mod quote_style;
pub mod rewriter;

pub use crate::file_processor::{FileOutcome, FixMode, ProcessError, process_file};
pub use crate::quote_style::QuoteStyle;
pub use crate::rewriter::{BlockConversion, Rewrite, RewriteError, RewriteOptions, Rewriter, rewrite};
