// UdyamPay - Core Library
// Field validation core, session/theme state and the screens built on them.

pub mod fields;      // Keystroke normalization + validation
pub mod display;     // Card preview formatting
pub mod form;        // Per-screen form state + submission gate
pub mod session;     // Logged-in identity
pub mod theme;       // Light/dark mode + palettes
pub mod navigation;  // Route stack
pub mod checkout;    // Fee calculation + payment methods
pub mod config;      // JSON app configuration
pub mod logging;     // tracing subscriber setup

// Only compile the terminal UI when the TUI feature is enabled
#[cfg(feature = "tui")]
pub mod ui;

// Re-export commonly used types
pub use fields::{
    erase, normalize, process, validate,
    ErrorCode, FieldKind, ValidationResult,
};
pub use form::{FormField, FormState, FormValues, SubmitError, CORRECT_ERRORS_NOTICE};
pub use session::{Session, SessionError, SessionState, UserIdentity};
pub use theme::{Palette, Theme, ThemeMode};
pub use navigation::{Navigator, Route};
pub use checkout::{CheckoutError, CheckoutSummary, PaymentMethod};
pub use config::{AppConfig, ProfileConfig, RecentTransaction};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
