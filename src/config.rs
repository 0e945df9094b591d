//! Ledger configuration

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::types::*;

/// Phone top-up amounts accepted by default, in whole currency units
pub const DEFAULT_TOPUP_DENOMINATIONS: [u32; 6] = [10, 20, 50, 100, 300, 500];

/// Number of transactions returned by a default history view
pub const DEFAULT_HISTORY_LIMIT: usize = 10;

/// Tunable rules for an account
///
/// Can be built in code or loaded from TOML:
///
/// ```toml
/// topup_denominations = [10, 20, 50, 100, 300, 500]
/// default_history_limit = 10
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// Accepted phone top-up amounts, in whole currency units
    pub topup_denominations: Vec<u32>,
    /// Limit used by `recent_history_default`
    pub default_history_limit: usize,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            topup_denominations: DEFAULT_TOPUP_DENOMINATIONS.to_vec(),
            default_history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl LedgerConfig {
    /// Parse and validate a TOML document; missing keys take their defaults
    pub fn from_toml_str(source: &str) -> LedgerResult<Self> {
        let config: LedgerConfig =
            toml::from_str(source).map_err(|e| LedgerError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration is usable
    pub fn validate(&self) -> LedgerResult<()> {
        if self.topup_denominations.is_empty() {
            return Err(LedgerError::Config(
                "At least one top-up denomination is required".to_string(),
            ));
        }

        if self.topup_denominations.contains(&0) {
            return Err(LedgerError::Config(
                "Top-up denominations must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Top-up denominations as decimal amounts
    pub fn denominations(&self) -> Vec<BigDecimal> {
        self.topup_denominations
            .iter()
            .map(|d| BigDecimal::from(*d))
            .collect()
    }
}
