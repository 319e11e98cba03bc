use super::payment::{Amount, Receipt};
use crate::error::Result;
use async_trait::async_trait;

/// A strategy able to process a payment of a given amount.
#[async_trait]
pub trait PaymentMethod: Send + Sync {
    /// The tag this method is selected by.
    fn name(&self) -> &str;
    async fn process_payment(&self, amount: Amount) -> Result<Receipt>;
}

pub type PaymentMethodBox = Box<dyn PaymentMethod>;

/// Creates a fresh payment method on every call.
pub type PaymentMethodFactory = Box<dyn Fn() -> PaymentMethodBox + Send + Sync>;
