//! XML text encoding of a loan book.

use quick_xml::se::Serializer;
use serde::Serialize;

use loanbook_loans::LoanBook;

use crate::error::{StorageError, StorageResult};
use crate::serializable::XmlSerializableLoanBook;

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

/// Encodes `book` as an indented XML document, declaration included.
pub fn to_xml_string(book: &LoanBook) -> StorageResult<String> {
    let document = XmlSerializableLoanBook::from(book);

    let mut body = String::new();
    let mut serializer = Serializer::new(&mut body);
    serializer.indent(' ', 2);
    document
        .serialize(serializer)
        .map_err(|e| StorageError::format(e.to_string()))?;

    tracing::debug!(
        bikes = document.bike_count(),
        loans = document.loan_count(),
        "encoded loan book"
    );

    Ok(format!("{XML_DECLARATION}\n{body}\n"))
}

/// Parses a document produced by [`to_xml_string`] (or edited by hand) and
/// validates it into a [`LoanBook`].
pub fn from_xml_str(xml: &str) -> StorageResult<LoanBook> {
    let document: XmlSerializableLoanBook =
        quick_xml::de::from_str(xml).map_err(|e| StorageError::format(e.to_string()))?;

    let book = document.to_model_type().map_err(|err| {
        tracing::warn!(error = %err, "stored loan book holds illegal values");
        StorageError::from(err)
    })?;

    tracing::debug!(
        bikes = document.bike_count(),
        loans = document.loan_count(),
        "decoded loan book"
    );

    Ok(book)
}
