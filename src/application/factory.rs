use crate::domain::payment::PaymentMethodKind;
use crate::domain::ports::{PaymentMethodBox, PaymentMethodFactory};
use crate::error::{Error, Result};
use crate::infrastructure::methods::create_payment_method;
use std::collections::BTreeMap;

/// Maps payment method tags to the factories that build them.
///
/// New methods are added with [`PaymentMethodRegistry::register`]; the built-in
/// ones never need to change for that.
#[derive(Default)]
pub struct PaymentMethodRegistry {
    factories: BTreeMap<String, PaymentMethodFactory>,
}

impl PaymentMethodRegistry {
    /// Creates a registry with no methods.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding `CreditCard`, `PayPal` and `Crypto`.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for kind in PaymentMethodKind::ALL {
            registry.register(kind.as_str(), Box::new(move || create_payment_method(kind)));
        }
        registry
    }

    /// Registers `factory` under `tag`, replacing any previous entry.
    pub fn register(&mut self, tag: impl Into<String>, factory: PaymentMethodFactory) {
        let tag = tag.into();
        if self.factories.insert(tag.clone(), factory).is_some() {
            log::debug!("replaced payment method factory for {tag}");
        }
    }

    /// Builds a new payment method for `tag`.
    ///
    /// Tags are matched exactly; unknown tags yield [`Error::UnknownPaymentMethod`].
    pub fn create(&self, tag: &str) -> Result<PaymentMethodBox> {
        let factory = self
            .factories
            .get(tag)
            .ok_or_else(|| Error::UnknownPaymentMethod(tag.to_string()))?;
        Ok(factory())
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.factories.contains_key(tag)
    }

    /// Registered tags, in sorted order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }
}
