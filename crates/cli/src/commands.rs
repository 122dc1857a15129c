//! Subcommand implementations. Each returns the text to print.

use std::fs;
use std::path::Path;

use anyhow::{Context, bail};
use serde::Serialize;

use loanbook_loans::LoanBook;
use loanbook_storage::{from_xml_str, to_xml_string};

use crate::config::{CliConfig, OutputFormat};

/// Reads and validates the data file.
pub fn load(path: &Path) -> anyhow::Result<LoanBook> {
    let xml = fs::read_to_string(path)
        .with_context(|| format!("failed to read loan book at {}", path.display()))?;
    let book = from_xml_str(&xml)
        .with_context(|| format!("data file {} is corrupt", path.display()))?;
    tracing::info!(
        path = %path.display(),
        bikes = book.bikes().len(),
        loans = book.loans().len(),
        "loaded loan book"
    );
    Ok(book)
}

/// Validates the data file and summarises its contents.
pub fn check(config: &CliConfig) -> anyhow::Result<String> {
    let book = load(&config.data_file)?;
    let ongoing = book.loans().iter().filter(|loan| loan.is_ongoing()).count();
    Ok(format!(
        "{}: ok ({} bikes, {} loans, {} ongoing)",
        config.data_file.display(),
        book.bikes().len(),
        book.loans().len(),
        ongoing
    ))
}

pub fn bikes(config: &CliConfig) -> anyhow::Result<String> {
    let book = load(&config.data_file)?;
    render(book.bikes().as_slice(), config.output)
}

pub fn loans(config: &CliConfig) -> anyhow::Result<String> {
    let book = load(&config.data_file)?;
    render(book.loans().as_slice(), config.output)
}

/// Writes an empty loan book. Refuses to overwrite unless `force` is set.
pub fn init(config: &CliConfig, force: bool) -> anyhow::Result<String> {
    let path = &config.data_file;
    if path.exists() && !force {
        bail!(
            "{} already exists (pass --force to overwrite)",
            path.display()
        );
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }

    let xml = to_xml_string(&LoanBook::new())?;
    fs::write(path, xml).with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), "wrote empty loan book");

    Ok(format!("created {}", path.display()))
}

fn render<T>(records: &[T], output: OutputFormat) -> anyhow::Result<String>
where
    T: Serialize + core::fmt::Display,
{
    match output {
        OutputFormat::Text => Ok(records
            .iter()
            .enumerate()
            .map(|(i, record)| format!("{}. {record}", i + 1))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => {
            serde_json::to_string_pretty(records).context("failed to encode records as JSON")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use loanbook_loans::LoanBook;

    fn scratch_file(test: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("loanbook-cli-{}-{test}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir.join("nested").join("loanbook.xml")
    }

    fn config_for(path: PathBuf, output: OutputFormat) -> CliConfig {
        CliConfig {
            data_file: path,
            output,
            ..CliConfig::default()
        }
    }

    fn write_sample(path: &Path) {
        let xml = r#"<loanbook>
  <bikes><name>B001</name><status>Available</status></bikes>
  <bikes><name>B002</name><status>Loaned</status></bikes>
  <loans>
    <loanId>0</loanId>
    <bike>B002</bike>
    <startTime>2024-03-01T09:00:00Z</startTime>
    <status>Ongoing</status>
  </loans>
  <lastLoanId>0</lastLoanId>
</loanbook>"#;
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, xml).unwrap();
    }

    #[test]
    fn init_then_check_reports_empty_book() {
        let config = config_for(scratch_file("init"), OutputFormat::Text);
        init(&config, false).unwrap();
        assert_eq!(load(&config.data_file).unwrap(), LoanBook::new());
        assert!(check(&config).unwrap().ends_with("ok (0 bikes, 0 loans, 0 ongoing)"));
    }

    #[test]
    fn init_refuses_to_overwrite_without_force() {
        let config = config_for(scratch_file("overwrite"), OutputFormat::Text);
        write_sample(&config.data_file);
        assert!(init(&config, false).is_err());
        init(&config, true).unwrap();
        assert!(load(&config.data_file).unwrap().bikes().is_empty());
    }

    #[test]
    fn bikes_lists_one_line_per_bike() {
        let config = config_for(scratch_file("bikes"), OutputFormat::Text);
        write_sample(&config.data_file);
        assert_eq!(
            bikes(&config).unwrap(),
            "1. B001 Status: Available\n2. B002 Status: Loaned"
        );
    }

    #[test]
    fn loans_as_json_is_an_array() {
        let config = config_for(scratch_file("loans"), OutputFormat::Json);
        write_sample(&config.data_file);
        let json: serde_json::Value = serde_json::from_str(&loans(&config).unwrap()).unwrap();
        let loans = json.as_array().unwrap();
        assert_eq!(loans.len(), 1);
        assert_eq!(loans[0]["bike"], "B002");
        assert_eq!(loans[0]["status"], "Ongoing");
    }

    #[test]
    fn check_reports_missing_file() {
        let config = config_for(scratch_file("missing"), OutputFormat::Text);
        let err = check(&config).unwrap_err();
        assert!(err.to_string().contains("failed to read loan book"));
    }

    #[test]
    fn check_reports_corrupt_file() {
        let config = config_for(scratch_file("corrupt"), OutputFormat::Text);
        fs::create_dir_all(config.data_file.parent().unwrap()).unwrap();
        fs::write(
            &config.data_file,
            "<loanbook><bikes><name>B 0!</name><status>Available</status></bikes></loanbook>",
        )
        .unwrap();
        let err = check(&config).unwrap_err();
        assert!(err.to_string().contains("is corrupt"));
        assert!(format!("{err:#}").contains("Names should only contain"));
    }
}
