use serde::{Deserialize, Serialize};
use std::fmt;

/// Triple-quote delimiter style for shell step bodies
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum QuoteStyle {
    /// Single quote style (''')
    #[default]
    Single,
    /// Double quote style (""")
    Double,
}

impl QuoteStyle {
    /// The triple-quote delimiter for this style
    pub fn delimiter(self) -> &'static str {
        match self {
            QuoteStyle::Single => "'''",
            QuoteStyle::Double => "\"\"\"",
        }
    }
}

impl fmt::Display for QuoteStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuoteStyle::Single => write!(f, "single"),
            QuoteStyle::Double => write!(f, "double"),
        }
    }
}
