// FILE: src/cli/handlers.rs
use crate::{
    cli::{OutputFormat, RunOptions},
    convert_document, parse_legacy_document, CompilerError, ConversionReport, ParserContext, Property,
    PropertyRegistry, Result, Value,
};

use serde::Serialize;
use std::fs;

/// Serializable view of one converted property
#[derive(Debug, Serialize)]
struct PropertyRecord<'a> {
    entry: usize,
    kind: &'static str,
    wire_name: &'static str,
    position: Option<usize>,
    value1: &'a Value,
    value2: Option<&'a Value>,
    value3: Option<&'a Value>,
}

impl<'a> PropertyRecord<'a> {
    fn new(entry: usize, property: &'a Property) -> Self {
        Self {
            entry,
            kind: property.kind_name(),
            wire_name: property.kind().wire_name(),
            position: property.position(),
            value1: property.value1(),
            value2: property.value2(),
            value3: property.value3(),
        }
    }
}

// --- CHECK ---
pub fn handle_check_command(cli: &super::LesserCli, matches: &clap::ArgMatches) -> Result<()> {
    let input_path = required_input(matches)?;
    let options = cli.build_run_options(matches)?;
    let report = convert_file(input_path, &options)?;

    for (index, error) in &report.failures {
        eprintln!("❌ entry {}: {}", index, error);
    }

    if report.is_success() {
        println!("✅ {}: {} properties OK", input_path, report.properties.len());
        Ok(())
    } else {
        Err(check_failure(input_path, &report))
    }
}

fn check_failure(input_path: &str, report: &ConversionReport) -> CompilerError {
    CompilerError::InvalidFormat {
        message: format!(
            "{}: {} failed entries ({} converted)",
            input_path,
            report.failures.len(),
            report.properties.len()
        ),
    }
}

// --- DUMP ---
pub fn handle_dump_command(cli: &super::LesserCli, matches: &clap::ArgMatches) -> Result<()> {
    let input_path = required_input(matches)?;
    let options = cli.build_run_options(matches)?;
    let report = convert_file(input_path, &options)?;

    for (index, error) in &report.failures {
        log::warn!("Skipping entry {}: {}", index, error);
    }

    match options.output_format {
        OutputFormat::Json => {
            let records: Vec<PropertyRecord> = report
                .properties
                .iter()
                .map(|(index, property)| PropertyRecord::new(*index, property))
                .collect();
            let json = serde_json::to_string_pretty(&records).map_err(|e| CompilerError::InvalidFormat {
                message: format!("Failed to serialize properties: {}", e),
            })?;
            println!("{}", json);
        }
        OutputFormat::Debug => {
            for (index, property) in &report.properties {
                println!("{:>4}  {}", index, describe(property));
            }
        }
    }
    Ok(())
}

// --- KINDS ---
pub fn handle_kinds_command() -> Result<()> {
    println!("{:<18} {:<16} {}", "WIRE NAME", "KIND", "TYPE");
    for kind in PropertyRegistry::global().kinds() {
        println!("{:<18} {:<16} {}", kind.wire_name(), kind.name(), kind.type_name());
    }
    Ok(())
}

fn required_input(matches: &clap::ArgMatches) -> Result<&str> {
    matches
        .get_one::<String>("input")
        .map(String::as_str)
        .ok_or_else(|| CompilerError::InvalidFormat {
            message: "No input file given".to_string(),
        })
}

fn convert_file(input_path: &str, options: &RunOptions) -> Result<ConversionReport> {
    let content = fs::read_to_string(input_path).map_err(|e| CompilerError::FileNotFound {
        path: format!("{}: {}", input_path, e),
    })?;
    let entries = parse_legacy_document(&content)?;
    let ctx = build_context(input_path, options)?;
    log::debug!("Converting {} entries, positions refer to {}", entries.len(), ctx.file());
    Ok(convert_document(&ctx, &entries, options.fail_fast))
}

fn build_context(input_path: &str, options: &RunOptions) -> Result<ParserContext> {
    match &options.source {
        Some(source_path) => {
            let source = fs::read_to_string(source_path).map_err(|e| CompilerError::FileNotFound {
                path: format!("{}: {}", source_path, e),
            })?;
            Ok(ParserContext::with_source(source_path.clone(), &source))
        }
        None => Ok(ParserContext::new(input_path)),
    }
}

fn describe(property: &Property) -> String {
    let mut line = format!("{:<16} {}", property.kind_name(), property.value1());
    if let Some(value2) = property.value2() {
        line.push_str(&format!(" | {}", value2));
    }
    if let Some(value3) = property.value3() {
        line.push_str(&format!(" | {}", value3));
    }
    if let Some(position) = property.position() {
        line.push_str(&format!(" @{}", position));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_convert_file_with_source() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("props.json");
        let source = dir.path().join("main.less");
        fs::write(&input, r#"[{"position": 4, "tuple": ["nope", 1]}, ["comment", "/* x */"]]"#).unwrap();
        fs::write(&source, "a {\n  b: c;\n}\n").unwrap();

        let options = RunOptions {
            source: Some(source.to_string_lossy().into_owned()),
            ..RunOptions::default()
        };
        let report = convert_file(input.to_str().unwrap(), &options).unwrap();
        assert_eq!(report.properties.len(), 1);
        match &report.failures[0].1 {
            CompilerError::UnknownPropertyKind { location, .. } => assert!(location.ends_with("main.less:2:1")),
            other => panic!("Expected UnknownPropertyKind, got {:?}", other),
        }
    }

    #[test]
    fn test_check_failure_counts_every_error_kind() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("props.json");
        fs::write(&input, r#"[["mystery", 1], ["raw"], ["comment", "/* ok */"]]"#).unwrap();

        let path = input.to_str().unwrap();
        let report = convert_file(path, &RunOptions::default()).unwrap();
        assert!(matches!(report.failures[0].1, CompilerError::UnknownPropertyKind { .. }));
        assert!(matches!(report.failures[1].1, CompilerError::MalformedLegacyProperty { .. }));

        let message = check_failure(path, &report).to_string();
        assert!(message.contains("2 failed entries (1 converted)"));
        assert!(!message.contains("malformed"));
    }

    #[test]
    fn test_missing_input() {
        let result = convert_file("/nonexistent/props.json", &RunOptions::default());
        assert!(matches!(result, Err(CompilerError::FileNotFound { .. })));
    }

    #[test]
    fn test_describe() {
        let ctx = ParserContext::new("t.less");
        let tuple = vec![Value::from("assign"), Value::from("color"), Value::from("red")];
        let property = crate::from_legacy_tuple(&ctx, &tuple, Some(9)).unwrap();
        assert_eq!(describe(&property), "assign           color | red @9");

        let record = PropertyRecord::new(0, &property);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["kind"], "assign");
        assert_eq!(json["value2"], "red");
        assert_eq!(json["value3"], serde_json::Value::Null);
    }
}
