// 🧾 Checkout - amount + convenience fee, payment method catalogue
// Nothing is charged; the summary only feeds the payment method screens.

use crate::display::format_money;
use crate::navigation::Route;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_CONVENIENCE_FEE: f64 = 100.0;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    #[error("Please enter an amount")]
    EmptyAmount,
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
}

// ============================================================================
// CHECKOUT SUMMARY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutSummary {
    pub amount: f64,
    pub convenience_fee: f64,
    pub total: f64,
}

impl CheckoutSummary {
    pub fn new(amount: f64, convenience_fee: f64) -> Self {
        CheckoutSummary {
            amount,
            convenience_fee,
            total: amount + convenience_fee,
        }
    }

    /// Parse the amount typed on the home screen
    pub fn from_input(amount: &str, convenience_fee: f64) -> Result<Self, CheckoutError> {
        let trimmed = amount.trim();
        if trimmed.is_empty() {
            return Err(CheckoutError::EmptyAmount);
        }

        let value: f64 = trimmed
            .parse()
            .map_err(|_| CheckoutError::InvalidAmount(trimmed.to_string()))?;

        if !value.is_finite() || value <= 0.0 {
            return Err(CheckoutError::InvalidAmount(trimmed.to_string()));
        }

        Ok(CheckoutSummary::new(value, convenience_fee))
    }

    pub fn summary(&self, currency_symbol: &str) -> String {
        format!(
            "Amount: {}, Convenience Fee: {}, Total: {}",
            format_money(currency_symbol, self.amount),
            format_money(currency_symbol, self.convenience_fee),
            format_money(currency_symbol, self.total)
        )
    }
}

// ============================================================================
// PAYMENT METHODS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    Upi,
    Card,
    NetBanking,
    Wallet,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::Upi,
        PaymentMethod::Card,
        PaymentMethod::NetBanking,
        PaymentMethod::Wallet,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PaymentMethod::Upi => "UPI",
            PaymentMethod::Card => "Card",
            PaymentMethod::NetBanking => "Net Banking",
            PaymentMethod::Wallet => "Wallet",
        }
    }

    /// Brands shown next to the option
    pub fn providers(&self) -> &'static [&'static str] {
        match self {
            PaymentMethod::Upi => &["UPI", "PhonePe", "Razorpay"],
            PaymentMethod::Card => &["Mastercard", "Visa"],
            PaymentMethod::NetBanking | PaymentMethod::Wallet => &[],
        }
    }

    /// Screen that handles this method, if one exists
    pub fn route(&self) -> Option<Route> {
        match self {
            PaymentMethod::Upi => Some(Route::Upi),
            PaymentMethod::Card => Some(Route::CardPayment),
            PaymentMethod::NetBanking | PaymentMethod::Wallet => None,
        }
    }

    pub fn is_available(&self) -> bool {
        self.route().is_some()
    }

    pub fn unavailable_notice(&self) -> String {
        format!("{} is not available yet", self.name())
    }
}
