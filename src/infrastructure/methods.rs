use crate::domain::payment::{Amount, PaymentMethodKind, Receipt};
use crate::domain::ports::{PaymentMethod, PaymentMethodBox};
use crate::error::Result;
use async_trait::async_trait;

fn receipt(kind: PaymentMethodKind, label: &str, amount: Amount) -> Receipt {
    let message = format!("Processing {label} payment of {amount}");
    log::info!("{message}");
    Receipt {
        method: kind.as_str().to_string(),
        amount,
        message,
    }
}

/// Card payments. Only reports what it would charge.
#[derive(Debug, Default, Clone, Copy)]
pub struct CreditCardPayment;

#[async_trait]
impl PaymentMethod for CreditCardPayment {
    fn name(&self) -> &str {
        PaymentMethodKind::CreditCard.as_str()
    }

    async fn process_payment(&self, amount: Amount) -> Result<Receipt> {
        Ok(receipt(PaymentMethodKind::CreditCard, "credit card", amount))
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PayPalPayment;

#[async_trait]
impl PaymentMethod for PayPalPayment {
    fn name(&self) -> &str {
        PaymentMethodKind::PayPal.as_str()
    }

    async fn process_payment(&self, amount: Amount) -> Result<Receipt> {
        Ok(receipt(PaymentMethodKind::PayPal, "PayPal", amount))
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CryptoPayment;

#[async_trait]
impl PaymentMethod for CryptoPayment {
    fn name(&self) -> &str {
        PaymentMethodKind::Crypto.as_str()
    }

    async fn process_payment(&self, amount: Amount) -> Result<Receipt> {
        Ok(receipt(PaymentMethodKind::Crypto, "cryptocurrency", amount))
    }
}

/// Builds the built-in payment method for `kind`.
pub fn create_payment_method(kind: PaymentMethodKind) -> PaymentMethodBox {
    match kind {
        PaymentMethodKind::CreditCard => Box::new(CreditCardPayment),
        PaymentMethodKind::PayPal => Box::new(PayPalPayment),
        PaymentMethodKind::Crypto => Box::new(CryptoPayment),
    }
}
