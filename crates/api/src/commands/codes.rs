//! Lookup table listing

use serde::Serialize;
use upsbridge_core::shipping::codes::ALL_TABLES;

/// One label/code pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeEntry {
    pub label: &'static str,
    pub code: &'static str,
}

/// A lookup table in printable form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeTableView {
    pub name: &'static str,
    pub entries: Vec<CodeEntry>,
}

/// Every label-to-code table the payload builder consults.
pub fn code_tables() -> Vec<CodeTableView> {
    ALL_TABLES
        .iter()
        .map(|table| CodeTableView {
            name: table.name(),
            entries: table
                .entries()
                .iter()
                .map(|&(label, code)| CodeEntry { label, code })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_table() {
        let tables = code_tables();
        assert_eq!(tables.len(), ALL_TABLES.len());
        assert!(tables.iter().all(|table| !table.entries.is_empty()));
    }

    #[test]
    fn ground_service_is_listed() {
        let tables = code_tables();
        let ground = tables
            .iter()
            .flat_map(|table| table.entries.iter())
            .find(|entry| entry.label == "Ground");
        assert_eq!(ground.map(|entry| entry.code), Some("03"));
    }
}
