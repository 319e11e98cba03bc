use crate::error::Error;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Represents a positive monetary amount for a payment.
///
/// Wraps `rust_decimal::Decimal` and keeps the scale it was parsed with,
/// so `100.00` is reported back as `100.00`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(into = "Decimal")]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self, Error> {
        if value > Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(Error::Validation("Amount must be positive".to_string()))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = Error;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl FromStr for Amount {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = Decimal::from_str(s.trim())
            .map_err(|e| Error::Validation(format!("Invalid amount '{s}': {e}")))?;
        Self::new(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The payment methods shipped with the crate.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
pub enum PaymentMethodKind {
    CreditCard,
    PayPal,
    Crypto,
}

impl PaymentMethodKind {
    pub const ALL: [PaymentMethodKind; 3] = [
        PaymentMethodKind::CreditCard,
        PaymentMethodKind::PayPal,
        PaymentMethodKind::Crypto,
    ];

    /// The tag used to select this method.
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethodKind::CreditCard => "CreditCard",
            PaymentMethodKind::PayPal => "PayPal",
            PaymentMethodKind::Crypto => "Crypto",
        }
    }
}

impl FromStr for PaymentMethodKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| Error::UnknownPaymentMethod(s.to_string()))
    }
}

impl fmt::Display for PaymentMethodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of processing a single payment.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct Receipt {
    /// Tag of the method that handled the payment.
    pub method: String,
    pub amount: Amount,
    pub message: String,
}
