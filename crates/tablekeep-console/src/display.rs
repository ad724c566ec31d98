use serde_json::json;
use tablekeep_core::types::TableMetadata;

use crate::executor::CommandResult;

/// Output mode for rendering command results.
pub enum OutputMode {
    /// Human-readable output.
    Pretty,
    /// Machine-parseable JSON, one object per result on stdout.
    Json,
}

/// Render a command result to stdout.
///
/// Returns `true` to continue execution, `false` to signal exit.
pub fn render(result: &CommandResult, mode: &OutputMode) -> bool {
    match result {
        CommandResult::Status(code) => match mode {
            OutputMode::Pretty => println!("{code}"),
            OutputMode::Json => println!(
                "{}",
                json!({"status": code, "ok": code.is_success()})
            ),
        },
        CommandResult::Tables(tables) => match mode {
            OutputMode::Pretty => {
                if tables.is_empty() {
                    println!("(no tables)");
                }
                for (name, metadata) in tables {
                    print_table(name, metadata);
                }
            }
            OutputMode::Json => println!("{}", json!({"tables": tables})),
        },
        CommandResult::Table { name, metadata } => match mode {
            OutputMode::Pretty => match metadata {
                Some(m) => print_table(name, m),
                None => println!("(table '{name}' not found)"),
            },
            OutputMode::Json => match metadata {
                Some(m) => println!("{}", json!({"found": true, "name": name, "table": m})),
                None => println!("{}", json!({"found": false, "name": name})),
            },
        },
        CommandResult::Help(topic) => print_help(topic.as_deref()),
        CommandResult::Exit => return false,
    }
    true
}

fn print_table(name: &str, metadata: &TableMetadata) {
    println!("{name} ({} attributes)", metadata.attribute_count());
    for (attr, attr_type) in metadata
        .attribute_names
        .iter()
        .zip(metadata.attribute_types.iter())
    {
        let marker = if metadata.primary_key_names.contains(attr) {
            "  PK"
        } else {
            ""
        };
        println!("  {attr} {attr_type}{marker}");
    }
}

fn print_help(topic: Option<&str>) {
    match topic {
        Some("CREATE") => {
            println!("CREATE TABLE <name> <attr> <TYPE> [PK] [<attr> <TYPE> [PK] ...]");
            println!("  Types: INT, STRING, BOOLEAN, DOUBLE. At least one PK is required.");
        }
        Some("DROP") => {
            println!("DROP TABLE <name>        delete one table and all its records");
            println!("DROP ALL TABLES          delete every table");
            println!("DROP ATTRIBUTE <t> <a>   remove one attribute from a table");
        }
        Some("ADD") => {
            println!("ADD ATTRIBUTE <table> <attr> <TYPE>");
            println!("  Added attributes are never primary keys.");
        }
        _ => {
            println!("Commands:");
            println!("  CREATE TABLE <name> <attr> <TYPE> [PK] ...");
            println!("  DROP TABLE <name> | DROP ALL TABLES | DROP ATTRIBUTE <table> <attr>");
            println!("  ADD ATTRIBUTE <table> <attr> <TYPE>");
            println!("  LIST TABLES | DESCRIBE <table>");
            println!("  HELP [CREATE|DROP|ADD] | EXIT");
        }
    }
}
