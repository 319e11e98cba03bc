use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use paypair::application::factory::PaymentMethodRegistry;
use paypair::application::processor::PaymentProcessor;
use paypair::domain::pair_sum::find_pair;
use paypair::domain::payment::{Amount, Receipt};
use paypair::interfaces::csv::payment_reader::{PaymentReader, PaymentRecord};
use paypair::interfaces::csv::receipt_writer::ReceiptWriter;
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Process a single payment with the given method (CreditCard, PayPal, Crypto)
    Pay {
        method: String,
        amount: Amount,
    },
    /// Process every `method, amount` row of a CSV file and print the receipts
    Batch {
        /// Input payments CSV file
        input: PathBuf,
    },
    /// Find two numbers that add up to the target
    Pair {
        #[arg(long, allow_negative_numbers = true)]
        target: i64,

        #[arg(allow_negative_numbers = true)]
        numbers: Vec<i64>,
    },
}

async fn process_record(
    registry: &PaymentMethodRegistry,
    record: PaymentRecord,
) -> paypair::error::Result<Receipt> {
    let processor = PaymentProcessor::new(registry, &record.method)?;
    processor.process(record.amount).await
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let registry = PaymentMethodRegistry::with_defaults();

    match cli.command {
        Command::Pay { method, amount } => {
            let processor = PaymentProcessor::new(&registry, &method).into_diagnostic()?;
            let receipt = processor.process(amount).await.into_diagnostic()?;
            println!("{}", receipt.message);
        }
        Command::Batch { input } => {
            let file = File::open(input).into_diagnostic()?;
            let reader = PaymentReader::new(file);

            let mut receipts = Vec::new();
            for record in reader.payments() {
                match record {
                    Ok(record) => match process_record(&registry, record).await {
                        Ok(receipt) => receipts.push(receipt),
                        Err(e) => eprintln!("Error processing payment: {}", e),
                    },
                    Err(e) => eprintln!("Error reading payment: {}", e),
                }
            }

            let stdout = io::stdout();
            let mut writer = ReceiptWriter::new(stdout.lock());
            writer.write_receipts(receipts).into_diagnostic()?;
        }
        Command::Pair { target, numbers } => match find_pair(&numbers, target) {
            Some(pair) => println!("{pair}"),
            None => println!("No two numbers add up to {target}."),
        },
    }

    Ok(())
}
