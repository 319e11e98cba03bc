use crate::domain::payment::Receipt;
use crate::error::Result;
use std::io::Write;

/// Writes processed payment receipts as CSV (`method,amount,message`).
pub struct ReceiptWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> ReceiptWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    /// Serializes every receipt and flushes the underlying sink.
    ///
    /// The header row is written even when there are no receipts.
    pub fn write_receipts(&mut self, receipts: impl IntoIterator<Item = Receipt>) -> Result<()> {
        let mut wrote_any = false;
        for receipt in receipts {
            self.writer.serialize(receipt)?;
            wrote_any = true;
        }
        if !wrote_any {
            self.writer.write_record(["method", "amount", "message"])?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_header_and_rows() {
        let receipt = Receipt {
            method: "PayPal".to_string(),
            amount: "100.00".parse().unwrap(),
            message: "Processing PayPal payment of 100.00".to_string(),
        };

        let mut out = Vec::new();
        ReceiptWriter::new(&mut out)
            .write_receipts(vec![receipt])
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "method,amount,message\nPayPal,100.00,Processing PayPal payment of 100.00\n"
        );
    }

    #[test]
    fn test_empty_batch_still_has_header() {
        let mut out = Vec::new();
        ReceiptWriter::new(&mut out).write_receipts(Vec::new()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "method,amount,message\n");
    }
}
