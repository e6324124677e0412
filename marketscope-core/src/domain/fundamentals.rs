//! Fundamentals snapshot — point-in-time company metrics.

use serde::{Deserialize, Serialize};

/// Point-in-time fundamentals for one symbol.
///
/// Every field is optional: `None` means the provider did not report the
/// value. Unavailable fields surface as a literal marker in the display
/// table and are never coerced to zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FundamentalsSnapshot {
    pub market_cap: Option<f64>,
    pub trailing_pe: Option<f64>,
    pub dividend_yield: Option<f64>,
    pub fifty_two_week_high: Option<f64>,
    pub fifty_two_week_low: Option<f64>,
    pub trailing_eps: Option<f64>,
}

impl FundamentalsSnapshot {
    /// Snapshot with every field unavailable. Used when the fundamentals
    /// call fails but the price history succeeded, so the row still renders.
    pub fn unavailable() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.market_cap.is_none()
            && self.trailing_pe.is_none()
            && self.dividend_yield.is_none()
            && self.fifty_two_week_high.is_none()
            && self.fifty_two_week_low.is_none()
            && self.trailing_eps.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unavailable_is_empty() {
        assert!(FundamentalsSnapshot::unavailable().is_empty());
    }

    #[test]
    fn any_field_makes_it_non_empty() {
        let snap = FundamentalsSnapshot {
            trailing_pe: Some(24.5),
            ..Default::default()
        };
        assert!(!snap.is_empty());
    }
}
