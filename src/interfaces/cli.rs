//! CLI Commands
//!
//! This module provides the `td-import` commands for:
//! - CSV-to-property import
//! - Affordance duplication inside a TD file

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use serde_json::{Map, Value};
use tracing::warn;

use crate::application::use_cases::copy_affordance::copy_affordance;
use crate::application::use_cases::csv_importer::CsvImporter;
use crate::domain::csv::ImportConfig;
use crate::domain::error::{ImportError, Result};
use crate::domain::td::PropertyCollection;
use crate::infrastructure::config::load_config;
use crate::infrastructure::csv::{detect_delimiter, read_import_file};

/// CSV import tooling for Thing Descriptions.
#[derive(Parser)]
#[command(name = "td-import", version, about = "CSV import tooling for Thing Descriptions")]
pub struct Cli {
    /// Path to a TOML config file (defaults to td-import.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Import a CSV file into a TD property collection
    Import {
        /// Path to the CSV file
        file: PathBuf,

        /// Detect the delimiter from the file instead of using the
        /// configured one
        #[arg(long)]
        detect_delimiter: bool,

        /// Splice the imported properties into this TD file and print
        /// the whole updated document
        #[arg(long)]
        into: Option<PathBuf>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Duplicate an affordance inside a TD document
    Copy {
        /// Path to the TD JSON file
        file: PathBuf,

        /// Affordance name to duplicate
        name: String,

        /// Section holding the affordance
        #[arg(long, default_value = "properties")]
        section: String,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
}

/// Parse arguments and dispatch
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Import {
            file,
            detect_delimiter,
            into,
            pretty,
        } => run_import(config, &file, detect_delimiter, into.as_deref(), pretty),
        Commands::Copy {
            file,
            name,
            section,
            pretty,
        } => run_copy(&file, &name, &section, pretty),
    }
}

fn run_import(
    mut config: ImportConfig,
    file: &Path,
    detect: bool,
    into: Option<&Path>,
    pretty: bool,
) -> Result<()> {
    let text = read_import_file(file)?;
    if detect {
        config.delimiter = detect_delimiter(&text);
    }

    let report = CsvImporter::new(config).import_str(&text)?;
    for warning in &report.warnings {
        warn!("import warning: {}", warning);
    }

    let output = match into {
        Some(td_path) => {
            let mut td: Value = serde_json::from_str(&read_import_file(td_path)?)?;
            splice_properties(&mut td, &report.properties)?;
            td
        }
        None => serde_json::to_value(&report.properties)?,
    };

    print_json(&output, pretty)
}

fn run_copy(file: &Path, name: &str, section: &str, pretty: bool) -> Result<()> {
    let td: Value = serde_json::from_str(&read_import_file(file)?)?;

    let affordance = td
        .get(section)
        .and_then(|s| s.get(name))
        .cloned()
        .ok_or_else(|| {
            ImportError::NotFound(format!("affordance \"{}\" in section \"{}\"", name, section))
        })?;

    let result = copy_affordance(&td, section, name, &affordance)?;
    print_json(&result.document, pretty)
}

/// Splice an imported collection under the document's `properties`
/// section, creating the section when absent. This merge is a caller
/// concern; the import pipeline itself never touches the document.
fn splice_properties(td: &mut Value, properties: &PropertyCollection) -> Result<()> {
    let root = td
        .as_object_mut()
        .ok_or_else(|| ImportError::ParseError("TD root is not a JSON object".to_string()))?;

    let section = root
        .entry("properties".to_string())
        .or_insert_with(|| Value::Object(Map::new()));
    let section_map = section
        .as_object_mut()
        .ok_or_else(|| ImportError::ParseError("\"properties\" is not a JSON object".to_string()))?;

    for (name, property) in properties {
        section_map.insert(name.clone(), serde_json::to_value(property)?);
    }
    Ok(())
}

fn print_json(value: &Value, pretty: bool) -> Result<()> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", text);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_splice_creates_the_section_when_absent() {
        let mut td = json!({"title": "device"});
        let report = CsvImporter::default_config()
            .import_str("name,modbus:address,modbus:entity\ntemperature,40001,Coil")
            .unwrap();

        splice_properties(&mut td, &report.properties).unwrap();

        assert_eq!(td["properties"]["temperature"]["readOnly"], json!(true));
        assert_eq!(
            td["properties"]["temperature"]["forms"][0]["modbus:address"],
            json!(40001.0)
        );
    }

    #[test]
    fn test_splice_overwrites_colliding_names_only() {
        let mut td = json!({"properties": {"temperature": {"old": true}, "valve": {}}});
        let report = CsvImporter::default_config()
            .import_str("name,modbus:address,modbus:entity\ntemperature,40001,Coil")
            .unwrap();

        splice_properties(&mut td, &report.properties).unwrap();

        assert!(td["properties"]["temperature"].get("old").is_none());
        assert!(td["properties"].get("valve").is_some());
    }

    #[test]
    fn test_splice_rejects_non_object_root() {
        let mut td = json!([1, 2]);
        let report = CsvImporter::default_config()
            .import_str("name,modbus:address,modbus:entity\ntemperature,40001,Coil")
            .unwrap();

        assert!(splice_properties(&mut td, &report.properties).is_err());
    }
}
