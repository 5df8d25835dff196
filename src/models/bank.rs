use crate::models::errors::DirectoryError;
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// A bank as listed by the VietQR bank directory.
#[derive(Debug, Clone, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bank {
    #[serde(default)]
    pub id: u32,
    pub name: String,
    pub code: String,
    pub bin: String,
    pub short_name: String,
    #[serde(default)]
    pub logo: String,
    #[serde(default)]
    pub transfer_supported: u8,
    #[serde(default)]
    pub lookup_supported: u8,
    #[serde(default, rename = "swift_code")]
    pub swift_code: Option<String>
}

impl Bank {
    pub fn supports_transfer(&self) -> bool {
        self.transfer_supported != 0
    }
}

//NOTE: The public listing wraps the banks in a `{ code, desc, data }` envelope, cached copies are often just the array.
#[derive(Deserialize)]
#[serde(untagged)]
enum DirectoryDocument {
    Envelope { data: Vec<Bank> },
    List(Vec<Bank>)
}

/// Read-only lookup table from bank names and codes to acquirer BINs.
#[derive(Debug, Clone, Default)]
pub struct BankDirectory {
    banks: Vec<Bank>
}

impl BankDirectory {
    pub fn new(banks: Vec<Bank>) -> Self {
        Self { banks }
    }

    pub fn from_json<R: Read>(reader: R) -> Result<Self, DirectoryError> {
        let banks = match serde_json::from_reader(reader)? {
            DirectoryDocument::Envelope { data } => data,
            DirectoryDocument::List(banks) => banks
        };

        Ok(Self { banks })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DirectoryError> {
        let file = File::open(path)?;
        Self::from_json(BufReader::new(file))
    }

    pub fn len(&self) -> usize {
        self.banks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.banks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bank> {
        self.banks.iter()
    }

    pub fn find_by_bin(&self, bin: &str) -> Option<&Bank> {
        self.banks.iter().find(|bank| bank.bin == bin)
    }

    /// Case-insensitive match on either the bank code (`ICB`) or its short name (`VietinBank`).
    pub fn find_by_code(&self, code: &str) -> Option<&Bank> {
        let code = code.trim();

        self.banks.iter().find(|bank| {
            bank.code.eq_ignore_ascii_case(code) || bank.short_name.eq_ignore_ascii_case(code)
        })
    }

    /// Turns whatever the caller typed for the bank into a BIN.
    ///
    /// All-digit input is taken to already be a BIN and is passed through even
    /// when the directory does not list it.
    pub fn resolve<'a>(&'a self, bank: &'a str) -> Result<&'a str, DirectoryError> {
        let bank = bank.trim();

        if !bank.is_empty() && bank.bytes().all(|byte| byte.is_ascii_digit()) {
            return Ok(bank);
        }

        self.find_by_code(bank)
            .map(|entry| entry.bin.as_str())
            .ok_or_else(|| DirectoryError::UnknownBank(bank.to_string()))
    }
}
