//! Data module - CSV loading, enrichment, sampling and export

mod enricher;
mod exporter;
mod loader;
mod sampler;

pub use enricher::{DataEnricher, EnrichError};
pub use exporter::{DataExporter, ExportReport};
pub use loader::{DataLoader, LoadError};
pub use sampler::{DataSampler, SampleError};

use std::fmt;
use std::str::FromStr;

pub const CATEGORY: &str = "Category";
pub const IMPORT_EXPORT: &str = "Import_Export";
pub const COUNTRY: &str = "Country";
pub const PRODUCT: &str = "Product";
pub const VALUE: &str = "Value";
pub const QUANTITY: &str = "Quantity";
pub const WEIGHT: &str = "Weight";
pub const DATE: &str = "Date";

pub const TOTAL_VALUE: &str = "Total_Value";
pub const YEAR: &str = "Year";
pub const MONTH: &str = "Month";

/// Columns every input file must carry, in output order.
pub const REQUIRED_COLUMNS: [&str; 8] = [
    CATEGORY,
    IMPORT_EXPORT,
    COUNTRY,
    PRODUCT,
    VALUE,
    QUANTITY,
    WEIGHT,
    DATE,
];

/// Direction of a trade record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TradeFlow {
    Import,
    Export,
}

impl TradeFlow {
    pub fn as_str(&self) -> &'static str {
        match self {
            TradeFlow::Import => "Import",
            TradeFlow::Export => "Export",
        }
    }
}

impl fmt::Display for TradeFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TradeFlow {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Import" => Ok(TradeFlow::Import),
            "Export" => Ok(TradeFlow::Export),
            other => Err(format!("unknown trade flow: {other}")),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trade_flow_parses_known_values() {
        assert_eq!("Import".parse::<TradeFlow>(), Ok(TradeFlow::Import));
        assert_eq!(" Export ".parse::<TradeFlow>(), Ok(TradeFlow::Export));
        assert!("Transit".parse::<TradeFlow>().is_err());
        assert_eq!(TradeFlow::Export.to_string(), "Export");
    }
}
