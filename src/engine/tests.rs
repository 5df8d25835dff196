use super::BatchEngine;

use anyhow::Result;
use std::io::Write;
use std::sync::Arc;

use tempfile::NamedTempFile;

use crate::encoder::{parse_fields, verify};
use crate::models::{Bank, BankDirectory};

const REFERENCE_PAYLOAD: &str = "00020101021238540010A00000072701240006970422011003375418780208QRIBFTTA53037045405200005802VN62190815Buy me a coffee6304EC1E";

fn create_temporary_csv(content: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    write!(file, "{content}")?;
    file.flush()?;

    Ok(file)
}

fn path_of(file: &NamedTempFile) -> Result<&str> {
    file.path().to_str().ok_or_else(|| anyhow::anyhow!("Temporary path is not valid UTF-8"))
}

fn directory() -> BankDirectory {
    BankDirectory::new(vec![Bank {
        id: 43,
        name: "Ngân hàng TMCP Quân đội".to_string(),
        code: "MB".to_string(),
        bin: "970422".to_string(),
        short_name: "MBBank".to_string(),
        logo: String::new(),
        transfer_supported: 1,
        lookup_supported: 1,
        swift_code: Some("MSCBVNVX".to_string())
    }])
}

#[tokio::test]
async fn test_engine_encodes_valid_csv_stream_in_order() -> Result<()> {
    let file = create_temporary_csv(
        "bank,account,holder,amount,content,format\n\
         970422,0337541878,,\"20,000\",Buy me a coffee,dynamic\n\
         970436,1234567890,,150000,Thanh toan,\n\
         970422,0337541878,,,,static\n"
    )?;

    let rows = BatchEngine::new().run(path_of(&file)?).await?;

    assert_eq!(rows.len(), 3);
    assert_eq!(rows.iter().map(|row| row.row).collect::<Vec<_>>(), vec![1, 2, 3]);
    assert_eq!(rows[0].payload, REFERENCE_PAYLOAD);
    assert_eq!(rows[1].bank, "970436");
    assert_eq!(&rows[2].payload[6..12], "010211");

    for row in &rows {
        verify(&row.payload)?;
    }

    Ok(())
}

#[tokio::test]
async fn test_engine_skips_malformed_and_unencodable_rows() -> Result<()> {
    let file = create_temporary_csv(
        "bank,account,holder,amount,content,format\n\
         970422,0337541878,,20000,Buy me a coffee,\n\
         970422,0337541878,,,,weekly\n\
         ,0337541878,,,,\n\
         970422,0337541878,,,,\n"
    )?;

    let rows = BatchEngine::new().run(path_of(&file)?).await?;

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].row, 1);
    assert_eq!(rows[1].row, 4);

    Ok(())
}

#[tokio::test]
async fn test_engine_resolves_bank_names_through_directory() -> Result<()> {
    let file = create_temporary_csv(
        "bank,account,holder,amount,content,format\n\
         MBBank,0337541878,,20000,Buy me a coffee,\n\
         mb,0337541878,,20000,Buy me a coffee,\n\
         ACB,123456,,,,\n"
    )?;

    let engine = BatchEngine::new()
        .with_directory(Arc::new(directory()))
        .with_backpressure(1);

    let rows = engine.run(path_of(&file)?).await?;

    assert_eq!(rows.len(), 2);

    for row in &rows {
        assert_eq!(row.bank, "970422");
        assert_eq!(row.payload, REFERENCE_PAYLOAD);
    }

    Ok(())
}

#[tokio::test]
async fn test_engine_rejects_bank_names_without_directory() -> Result<()> {
    let file = create_temporary_csv("bank,account\nMBBank,0337541878\n970422,0337541878\n")?;

    let rows = BatchEngine::new().run(path_of(&file)?).await?;

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].row, 2);

    Ok(())
}

#[tokio::test]
async fn test_engine_fills_defaults_for_rows_missing_trailing_columns() -> Result<()> {
    let file = create_temporary_csv(
        "bank,account,holder,amount,content,format\n\
         970422,0337541878\n\
         970422,0337541878,,20000\n"
    )?;

    let rows = BatchEngine::new().run(path_of(&file)?).await?;

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].payload, "00020101021238540010A00000072701240006970422011003375418780208QRIBFTTA53037045802VN6304B6D3");
    assert!(rows[1].payload.contains("540520000"));
    assert!(!parse_fields(&rows[1].payload)?.iter().any(|field| field.tag == "62"));

    for row in &rows {
        verify(&row.payload)?;
    }

    Ok(())
}

#[tokio::test]
async fn test_engine_handles_missing_csv_file_without_error() -> Result<()> {
    let rows = BatchEngine::new().run("missing.csv").await?;

    assert!(rows.is_empty());

    Ok(())
}
