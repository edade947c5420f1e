// ⚙️ App Configuration - JSON file, every key optional
// Fee, currency, starting theme and the dashboard's sample data.

use crate::checkout::DEFAULT_CONVENIENCE_FEE;
use anyhow::{ensure, Context as AnyhowContext, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Flat fee added to every checkout
    pub convenience_fee: f64,

    pub currency_symbol: String,

    /// Start in dark mode
    pub dark_mode: bool,

    pub profile: ProfileConfig,

    /// Shown under "Transaction Details" on the home screen
    pub recent_transactions: Vec<RecentTransaction>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    pub name: String,
    pub mobile: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentTransaction {
    pub id: String,
    pub title: String,
    pub amount: f64,
    pub date: NaiveDate,
}

impl RecentTransaction {
    fn new(id: &str, title: &str, amount: f64, date: NaiveDate) -> Self {
        RecentTransaction {
            id: id.to_string(),
            title: title.to_string(),
            amount,
            date,
        }
    }

    /// e.g. "03-Dec-2024"
    pub fn date_label(&self) -> String {
        self.date.format("%d-%b-%Y").to_string()
    }
}

impl Default for ProfileConfig {
    fn default() -> Self {
        ProfileConfig {
            name: "John Doe".to_string(),
            mobile: "+1234567890".to_string(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default();

        AppConfig {
            convenience_fee: DEFAULT_CONVENIENCE_FEE,
            currency_symbol: "₹".to_string(),
            dark_mode: false,
            profile: ProfileConfig::default(),
            recent_transactions: vec![
                RecentTransaction::new("1", "Grocery Shopping", 50.0, date(2024, 12, 3)),
                RecentTransaction::new("2", "Electricity Bill", 100.0, date(2024, 12, 1)),
                RecentTransaction::new("3", "Netflix Subscription", 15.0, date(2024, 11, 30)),
                RecentTransaction::new("4", "Dining Out", 75.0, date(2024, 11, 28)),
            ],
        }
    }
}

impl AppConfig {
    /// Load config from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;

        let config: AppConfig =
            serde_json::from_str(&content).context("Failed to parse config JSON")?;

        config.check()?;
        debug!(path = ?path.as_ref(), "loaded config");
        Ok(config)
    }

    /// File config when a path is given, built-in defaults otherwise
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    fn check(&self) -> Result<()> {
        ensure!(
            self.convenience_fee.is_finite() && self.convenience_fee >= 0.0,
            "convenience_fee must be a non-negative number, got {}",
            self.convenience_fee
        );
        ensure!(
            !self.currency_symbol.trim().is_empty(),
            "currency_symbol must not be empty"
        );
        Ok(())
    }
}
