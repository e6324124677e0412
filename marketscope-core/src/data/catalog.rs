//! Sector catalog — fixed sector → ticker lists.
//!
//! The catalog is a static mapping decided at startup: either the built-in
//! NSE sector lists or a user-supplied TOML file. It is never mutated by
//! the pipeline.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Sector-organized ticker lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectorCatalog {
    pub sectors: BTreeMap<String, Vec<String>>,
}

impl SectorCatalog {
    /// Load a catalog from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, String> {
        let content =
            std::fs::read_to_string(path).map_err(|e| format!("read catalog file: {e}"))?;
        Self::from_toml(&content)
    }

    /// Parse a catalog from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| format!("parse catalog TOML: {e}"))
    }

    /// Serialize the catalog to TOML.
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("serialize catalog: {e}"))
    }

    /// Sector names in catalog order.
    pub fn sector_names(&self) -> Vec<&str> {
        self.sectors.keys().map(|s| s.as_str()).collect()
    }

    /// Tickers for a specific sector.
    pub fn sector_tickers(&self, sector: &str) -> Option<&[String]> {
        self.sectors.get(sector).map(|v| v.as_slice())
    }

    /// All tickers across all sectors, sorted and de-duplicated.
    pub fn all_tickers(&self) -> Vec<&str> {
        let mut all: Vec<&str> = self
            .sectors
            .values()
            .flat_map(|tickers| tickers.iter().map(|t| t.as_str()))
            .collect();
        all.sort_unstable();
        all.dedup();
        all
    }

    /// Total number of ticker entries.
    pub fn ticker_count(&self) -> usize {
        self.sectors.values().map(|v| v.len()).sum()
    }

    /// The built-in NSE universe, organized by market sector.
    pub fn default_nse() -> Self {
        let mut sectors = BTreeMap::new();

        let mut insert = |name: &str, tickers: &[&str]| {
            sectors.insert(
                name.to_string(),
                tickers.iter().map(|t| (*t).to_string()).collect(),
            );
        };

        insert("Oil & Gas", &["RELIANCE.NS", "ONGC.NS", "BPCL.NS", "GAIL.NS"]);
        insert(
            "IT",
            &["TCS.NS", "INFY.NS", "WIPRO.NS", "HCLTECH.NS", "TECHM.NS"],
        );
        insert(
            "Banking",
            &[
                "HDFCBANK.NS",
                "ICICIBANK.NS",
                "SBIN.NS",
                "KOTAKBANK.NS",
                "AXISBANK.NS",
                "INDUSINDBK.NS",
            ],
        );
        insert(
            "Automobile",
            &[
                "MARUTI.NS",
                "TATAMOTORS.NS",
                "M&M.NS",
                "BAJAJ-AUTO.NS",
                "EICHERMOT.NS",
                "HEROMOTOCO.NS",
            ],
        );
        insert(
            "FMCG",
            &["HINDUNILVR.NS", "ITC.NS", "BRITANNIA.NS", "NESTLEIND.NS"],
        );
        insert(
            "Pharma",
            &["SUNPHARMA.NS", "DRREDDY.NS", "CIPLA.NS", "DIVISLAB.NS"],
        );
        insert(
            "Infrastructure",
            &["LT.NS", "ADANIPORTS.NS", "ADANIENT.NS", "ULTRACEMCO.NS"],
        );
        insert("Power", &["NTPC.NS", "POWERGRID.NS"]);
        insert("Metals", &["TATASTEEL.NS", "JSWSTEEL.NS"]);
        insert(
            "Others",
            &[
                "BHARTIARTL.NS",
                "ASIANPAINT.NS",
                "TITAN.NS",
                "BAJFINANCE.NS",
                "BAJAJFINSV.NS",
                "HDFCLIFE.NS",
                "SHREECEM.NS",
                "COALINDIA.NS",
                "GRASIM.NS",
                "UPL.NS",
                "HDFCAMC.NS",
                "APOLLOHOSP.NS",
            ],
        );

        Self { sectors }
    }
}

impl Default for SectorCatalog {
    fn default() -> Self {
        Self::default_nse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_has_all_sectors() {
        let c = SectorCatalog::default_nse();
        let names = c.sector_names();
        for expected in [
            "Oil & Gas",
            "IT",
            "Banking",
            "Automobile",
            "FMCG",
            "Pharma",
            "Infrastructure",
            "Power",
            "Metals",
            "Others",
        ] {
            assert!(names.contains(&expected), "missing sector {expected}");
        }
    }

    #[test]
    fn every_sector_is_non_empty_and_duplicate_free() {
        let c = SectorCatalog::default_nse();
        for name in c.sector_names() {
            let tickers = c.sector_tickers(name).unwrap();
            assert!(!tickers.is_empty(), "sector {name} is empty");
            let mut unique: Vec<&String> = tickers.iter().collect();
            unique.sort();
            unique.dedup();
            assert_eq!(unique.len(), tickers.len(), "duplicates in sector {name}");
        }
    }

    #[test]
    fn all_tickers_is_sorted_and_unique() {
        let c = SectorCatalog::default_nse();
        let all = c.all_tickers();
        assert_eq!(all.len(), c.ticker_count(), "catalog-wide duplicate ticker");
        assert!(all.windows(2).all(|w| w[0] < w[1]));
        assert!(all.contains(&"RELIANCE.NS"));
    }

    #[test]
    fn unknown_sector_is_none() {
        let c = SectorCatalog::default_nse();
        assert!(c.sector_tickers("Aerospace").is_none());
    }

    #[test]
    fn toml_roundtrip() {
        let c = SectorCatalog::default_nse();
        let toml_str = c.to_toml().unwrap();
        let parsed = SectorCatalog::from_toml(&toml_str).unwrap();
        assert_eq!(c.ticker_count(), parsed.ticker_count());
        assert_eq!(c.sector_names(), parsed.sector_names());
    }
}
