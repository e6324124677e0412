//! Selection resolution — sector choice or individual picks to a bounded
//! symbol list.
//!
//! Sector mode always yields the sector's fixed list. Individual picks are
//! ordered, de-duplicated (first occurrence wins), and capped at
//! [`MAX_PICKS`]. Resolution happens before any fetch, so an invalid
//! selection never costs a network round trip.

use crate::data::catalog::SectorCatalog;
use crate::domain::Symbol;
use std::collections::HashSet;
use thiserror::Error;

/// Maximum number of individually selected symbols per screen run.
pub const MAX_PICKS: usize = 10;

/// What the user asked to screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// An entire sector from the catalog.
    Sector(String),
    /// An explicit list of tickers.
    Symbols(Vec<String>),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectError {
    #[error("please select at least one stock")]
    Empty,

    #[error("at most {MAX_PICKS} stocks can be screened at once (got {0})")]
    TooMany(usize),

    #[error("unknown sector: {0}")]
    UnknownSector(String),
}

/// Resolve a selection to an ordered, de-duplicated symbol list.
pub fn resolve(selection: &Selection, catalog: &SectorCatalog) -> Result<Vec<Symbol>, SelectError> {
    match selection {
        Selection::Sector(name) => {
            let tickers = catalog
                .sector_tickers(name)
                .ok_or_else(|| SelectError::UnknownSector(name.clone()))?;
            if tickers.is_empty() {
                return Err(SelectError::Empty);
            }
            Ok(tickers.iter().map(Symbol::new).collect())
        }
        Selection::Symbols(picks) => {
            let mut seen = HashSet::new();
            let unique: Vec<&String> = picks.iter().filter(|t| seen.insert(t.as_str())).collect();

            if unique.is_empty() {
                return Err(SelectError::Empty);
            }
            if unique.len() > MAX_PICKS {
                return Err(SelectError::TooMany(unique.len()));
            }
            Ok(unique.into_iter().map(Symbol::new).collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> SectorCatalog {
        SectorCatalog::default_nse()
    }

    #[test]
    fn sector_mode_yields_catalog_order() {
        let symbols = resolve(&Selection::Sector("Power".into()), &catalog()).unwrap();
        let tickers: Vec<&str> = symbols.iter().map(|s| s.ticker.as_str()).collect();
        assert_eq!(tickers, ["NTPC.NS", "POWERGRID.NS"]);
    }

    #[test]
    fn unknown_sector_is_an_error() {
        let err = resolve(&Selection::Sector("Aerospace".into()), &catalog()).unwrap_err();
        assert_eq!(err, SelectError::UnknownSector("Aerospace".into()));
    }

    #[test]
    fn empty_picks_halt_before_fetch() {
        let err = resolve(&Selection::Symbols(vec![]), &catalog()).unwrap_err();
        assert_eq!(err, SelectError::Empty);
    }

    #[test]
    fn duplicate_picks_keep_first_occurrence() {
        let sel = Selection::Symbols(vec![
            "TCS.NS".into(),
            "INFY.NS".into(),
            "TCS.NS".into(),
        ]);
        let symbols = resolve(&sel, &catalog()).unwrap();
        let tickers: Vec<&str> = symbols.iter().map(|s| s.ticker.as_str()).collect();
        assert_eq!(tickers, ["TCS.NS", "INFY.NS"]);
    }

    #[test]
    fn exactly_ten_picks_are_accepted() {
        let picks: Vec<String> = (0..10).map(|i| format!("S{i}.NS")).collect();
        let symbols = resolve(&Selection::Symbols(picks), &catalog()).unwrap();
        assert_eq!(symbols.len(), 10);
    }

    #[test]
    fn eleven_picks_are_rejected() {
        let picks: Vec<String> = (0..11).map(|i| format!("S{i}.NS")).collect();
        let err = resolve(&Selection::Symbols(picks), &catalog()).unwrap_err();
        assert_eq!(err, SelectError::TooMany(11));
    }
}
