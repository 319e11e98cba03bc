use super::factory::PaymentMethodRegistry;
use crate::domain::payment::{Amount, Receipt};
use crate::domain::ports::PaymentMethodBox;
use crate::error::Result;

/// Processes payments with a single method chosen up front.
///
/// The method is resolved once, when the processor is built, so an invalid tag
/// fails at construction rather than on the first payment.
pub struct PaymentProcessor {
    method: PaymentMethodBox,
}

impl PaymentProcessor {
    /// Creates a processor for the method registered under `tag`.
    ///
    /// # Arguments
    ///
    /// * `registry` - The registry used to build the method.
    /// * `tag` - The payment method tag, e.g. `"PayPal"`.
    pub fn new(registry: &PaymentMethodRegistry, tag: &str) -> Result<Self> {
        let method = registry.create(tag)?;
        Ok(Self::from_method(method))
    }

    pub fn from_method(method: PaymentMethodBox) -> Self {
        Self { method }
    }

    pub fn method_name(&self) -> &str {
        self.method.name()
    }

    pub async fn process(&self, amount: Amount) -> Result<Receipt> {
        log::debug!("dispatching {amount} to {}", self.method.name());
        self.method.process_payment(amount).await
    }
}
