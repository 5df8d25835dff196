use crate::encoder::encode;
use crate::models::{BankDirectory, EncodedRow, TransferRequest};
use crate::types::RowNumber;
use anyhow::Context;
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::BufReader;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::{spawn_blocking, JoinHandle};
use tracing::{debug, error, warn};

/// Streams transfer requests out of a CSV file and encodes each into a payload.
pub struct BatchEngine {
    directory: Option<Arc<BankDirectory>>,
    backpressure: usize
}

impl BatchEngine {
    pub fn new() -> Self {
        Self {
            directory: None,
            backpressure: 256
        }
    }

    /// Lets rows name their bank by code or short name instead of BIN.
    pub fn with_directory(mut self, directory: Arc<BankDirectory>) -> Self {
        self.directory = Some(directory);
        self
    }

    pub fn with_backpressure(mut self, backpressure: usize) -> Self {
        self.backpressure = backpressure.max(1);
        self
    }

    /// Reads, encodes and collects every valid row of the CSV file, in file order.
    ///
    /// Rows that cannot be deserialized or encoded are logged and skipped, so a
    /// single bad line never costs the rest of the batch.
    pub async fn run(&self, path: &str) -> anyhow::Result<Vec<EncodedRow>> {
        let (sender, receiver) = mpsc::channel::<(RowNumber, TransferRequest)>(self.backpressure);
        let csv_handle = self.spawn_csv_reader(path.to_string(), sender);
        let rows = self.encode_requests(receiver).await;

        if let Err(error) = csv_handle.await {
            error!("CSV ingestion failed: {error}");
        }

        Ok(rows)
    }

    fn spawn_csv_reader(&self, path: String, sender: mpsc::Sender<(RowNumber, TransferRequest)>) -> JoinHandle<()> {
        spawn_blocking(move || {
            let file = match File::open(&path) {
                Ok(file) => file,
                Err(error) => {
                    error!("Error opening CSV at path: {path} | {error}");
                    return;
                }
            };

            let mut reader = ReaderBuilder::new()
                .trim(Trim::All)
                .flexible(true)
                .from_reader(BufReader::new(file));

            let headers = match reader.headers() {
                Ok(headers) => headers.clone(),
                Err(error) => {
                    error!("Error reading CSV headers at path: {path} | {error}");
                    return;
                }
            };

            for (index, result) in reader.records().enumerate() {
                let row = index as RowNumber + 1;

                match result.and_then(|record| TransferRequest::from_record(&record, &headers)) {
                    Ok(request) => {
                        if sender.blocking_send((row, request)).is_err() {
                            break;
                        }
                    }
                    Err(error) => {
                        error!("CSV deserialization error on row [{row}]: {error}");
                    }
                }
            }
        })
    }

    async fn encode_requests(&self, mut receiver: mpsc::Receiver<(RowNumber, TransferRequest)>) -> Vec<EncodedRow> {
        let mut rows = Vec::new();

        while let Some((row, request)) = receiver.recv().await {
            match self.encode_row(row, request) {
                Ok(encoded) => {
                    debug!("Row [{}] for bank [{}] encoded", encoded.row, encoded.bank);
                    rows.push(encoded);
                }
                Err(error) => {
                    warn!("{error:#}");
                }
            }
        }

        rows
    }

    fn encode_row(&self, row: RowNumber, mut request: TransferRequest) -> anyhow::Result<EncodedRow> {
        if let Some(directory) = &self.directory {
            let bin = directory.resolve(&request.bank)
                .with_context(|| format!("Row [{row}] skipped"))?
                .to_string();
            request.bank = bin;
        }

        let payload = encode(&request).with_context(|| format!("Row [{row}] skipped"))?;

        Ok(EncodedRow {
            row,
            bank: request.bank,
            account_number: request.account_number,
            payload
        })
    }
}

impl Default for BatchEngine {
    fn default() -> Self {
        Self::new()
    }
}
