use crate::domain::payment::Amount;
use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer};
use std::io::Read;

/// One row of a payment batch: which method to use and how much to charge.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct PaymentRecord {
    pub method: String,
    #[serde(deserialize_with = "deserialize_amount")]
    pub amount: Amount,
}

// Parsed from the raw text so the decimal scale survives.
fn deserialize_amount<'de, D>(deserializer: D) -> std::result::Result<Amount, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    raw.parse().map_err(serde::de::Error::custom)
}

/// Reads payment records from a CSV source.
///
/// This reader wraps `csv::Reader` and provides an iterator over `Result<PaymentRecord>`.
/// It handles whitespace trimming and flexible record lengths automatically.
pub struct PaymentReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> PaymentReader<R> {
    /// Creates a new `PaymentReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes payment records.
    pub fn payments(self) -> impl Iterator<Item = Result<PaymentRecord>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(Error::from))
    }
}
