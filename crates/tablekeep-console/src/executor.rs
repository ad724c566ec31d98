use std::collections::BTreeMap;

use tablekeep_core::catalog::Catalog;
use tablekeep_core::error::Error;
use tablekeep_core::store::MemoryStore;
use tablekeep_core::types::{AttributeType, StatusCode, TableMetadata};

use crate::commands::Command;

/// Structured result from executing a command.
pub enum CommandResult {
    /// Outcome of a mutation (CREATE, DROP, ADD).
    Status(StatusCode),
    /// Full catalog listing (LIST TABLES).
    Tables(BTreeMap<String, TableMetadata>),
    /// Single-table metadata (DESCRIBE); `None` when absent or hidden.
    Table {
        name: String,
        metadata: Option<TableMetadata>,
    },
    /// Help text (optional topic).
    Help(Option<String>),
    /// Exit signal.
    Exit,
}

/// Execute a parsed command against the embedded catalog.
pub fn execute(catalog: &Catalog<MemoryStore>, cmd: Command) -> Result<CommandResult, Error> {
    match cmd {
        Command::CreateTable { name, attributes } => {
            let names: Vec<&str> = attributes.iter().map(|a| a.name.as_str()).collect();
            let types: Vec<AttributeType> = attributes.iter().map(|a| a.attr_type).collect();
            let primary_keys: Vec<&str> = attributes
                .iter()
                .filter(|a| a.primary_key)
                .map(|a| a.name.as_str())
                .collect();
            catalog
                .create_table(&name, &names, &types, &primary_keys)
                .map(CommandResult::Status)
        }
        Command::DropTable { name } => catalog.delete_table(&name).map(CommandResult::Status),
        Command::DropAllTables => catalog.drop_all_tables().map(CommandResult::Status),
        Command::ListTables => catalog.list_tables().map(CommandResult::Tables),
        Command::DescribeTable { name } => {
            let metadata = catalog.describe_table(&name)?;
            Ok(CommandResult::Table { name, metadata })
        }
        Command::AddAttribute {
            table,
            name,
            attr_type,
        } => catalog
            .add_attribute(&table, &name, attr_type)
            .map(CommandResult::Status),
        Command::DropAttribute { table, name } => catalog
            .drop_attribute(&table, &name)
            .map(CommandResult::Status),
        Command::Help(topic) => Ok(CommandResult::Help(topic)),
        Command::Exit => Ok(CommandResult::Exit),
    }
}
