//! Report subcommand handlers for casefile.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, info};

use casefile_config::ConfigLoader;
use casefile_core::{normalize, ErrorTypeRegistry, FailureCause};
use casefile_protocols::render_stack_trace;

use crate::cli::Commands;

/// Handle a subcommand.
pub(crate) fn handle_command(
    command: Commands,
    registry: &ErrorTypeRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Inspect { report, format } => inspect(&report, &format, registry),
        Commands::Normalize { message } => {
            println!("{}", normalize(&message));
            Ok(())
        }
        Commands::Classify { report, category } => {
            let causes = load_report(&report)?;
            print!("{}", classification_table(&causes, &category, registry));
            Ok(())
        }
        Commands::Types => {
            print!("{}", types_table(registry));
            Ok(())
        }
    }
}

/// Load the failure causes of a report: a single object or an array.
pub(crate) fn load_report(path: &Path) -> Result<Vec<FailureCause>, Box<dyn std::error::Error>> {
    let path = PathBuf::from(ConfigLoader::expand_path(&path.to_string_lossy()));
    let content = fs::read_to_string(&path)
        .map_err(|e| format!("Failed to read report {}: {}", path.display(), e))?;

    let value: Value = serde_json::from_str(&content)?;
    let causes: Vec<FailureCause> = if value.is_array() {
        serde_json::from_value(value)?
    } else {
        vec![serde_json::from_value(value)?]
    };
    debug!("Loaded {} failure causes from {}", causes.len(), path.display());
    Ok(causes)
}

/// Reconstruct and print every failure cause of a report.
fn inspect(
    report: &Path,
    format: &str,
    registry: &ErrorTypeRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    let causes = load_report(report)?;
    if causes.is_empty() {
        println!("No failure causes found.");
        return Ok(());
    }

    match format {
        "json" => {
            let json = serde_json::to_string_pretty(&inspection_json(&causes, registry)?)?;
            println!("{}", json);
        }
        _ => print!("{}", inspection_text(&causes, registry)),
    }
    info!("Inspected {} failure causes", causes.len());
    Ok(())
}

/// Text report: rendered reconstruction plus recorded and resolved types.
fn inspection_text(causes: &[FailureCause], registry: &ErrorTypeRegistry) -> String {
    let mut out = String::new();
    for (index, cause) in causes.iter().enumerate() {
        let exception = cause.to_exception(registry);
        let class = cause.error_class(registry);
        out.push_str(&format!(
            "#{} {}\n",
            index,
            render_stack_trace(exception.as_ref())
        ));
        out.push_str(&format!(
            "   recorded type: {}\n",
            display_type(cause.error_type())
        ));
        out.push_str(&format!("   resolved type: {}\n", class.name()));
        if exception.type_name() != cause.error_type() {
            out.push_str(&format!(
                "   reconstructed as: {}\n",
                exception.type_name()
            ));
        }
        out.push('\n');
    }
    out
}

/// JSON report: each normalized cause with its resolution and reconstruction.
fn inspection_json(
    causes: &[FailureCause],
    registry: &ErrorTypeRegistry,
) -> Result<Value, serde_json::Error> {
    let mut entries = Vec::with_capacity(causes.len());
    for cause in causes {
        let exception = cause.to_exception(registry);
        let mut entry = serde_json::to_value(cause)?;
        if let Value::Object(fields) = &mut entry {
            fields.insert(
                "resolvedType".to_string(),
                Value::String(cause.error_class(registry).name().to_string()),
            );
            fields.insert(
                "reconstructedType".to_string(),
                Value::String(exception.type_name().to_string()),
            );
            fields.insert(
                "rendered".to_string(),
                Value::String(render_stack_trace(exception.as_ref())),
            );
        }
        entries.push(entry);
    }
    Ok(Value::Array(entries))
}

/// Per-cause verdict of whether it belongs to `category`.
fn classification_table(
    causes: &[FailureCause],
    category: &str,
    registry: &ErrorTypeRegistry,
) -> String {
    let mut out = format!("{:<6} {:<50} {}\n", "INDEX", "TYPE", category);
    out.push_str(&format!("{}\n", "-".repeat(70)));
    for (index, cause) in causes.iter().enumerate() {
        let verdict = if cause.is_instance_of(registry, category) {
            "yes"
        } else {
            "no"
        };
        out.push_str(&format!(
            "{:<6} {:<50} {}\n",
            index,
            display_type(cause.error_type()),
            verdict
        ));
    }
    out
}

fn types_table(registry: &ErrorTypeRegistry) -> String {
    let mut out = format!("{:<55} {:<45} {}\n", "TYPE", "SUPERTYPE", "CONSTRUCTOR");
    out.push_str(&format!("{}\n", "-".repeat(110)));
    for id in registry.list_ids() {
        let Some(error_type) = registry.resolve(&id) else {
            continue;
        };
        let constructor = error_type
            .constructor()
            .map(|c| format!("{:?}", c.shape()).to_lowercase())
            .unwrap_or_else(|| "-".to_string());
        out.push_str(&format!(
            "{:<55} {:<45} {}\n",
            id,
            error_type.supertype().unwrap_or("-"),
            constructor
        ));
    }
    out
}

fn display_type(error_type: &str) -> &str {
    if error_type.is_empty() {
        "<none>"
    } else {
        error_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn report_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    fn causes() -> Vec<FailureCause> {
        vec![
            FailureCause::new(
                "org.openqa.selenium.NoSuchElementException",
                Some("#pay"),
                Vec::new(),
            ),
            FailureCause::new("com.unknown.Type", Some("some text"), Vec::new()),
        ]
    }

    /// Verdict column of the row for `index`.
    fn verdict(table: &str, index: usize) -> String {
        let row = table
            .lines()
            .skip(2)
            .nth(index)
            .unwrap();
        row.split_whitespace().last().unwrap().to_string()
    }

    #[test]
    fn test_load_single_cause() {
        let file = report_file(
            r#"{"errorType":"java.lang.RuntimeException","message":"db down","stackTrace":[]}"#,
        );
        let causes = load_report(file.path()).unwrap();
        assert_eq!(causes.len(), 1);
        assert_eq!(causes[0].message(), Some("db down"));
    }

    #[test]
    fn test_load_cause_array_normalizes() {
        let file = report_file(
            r#"[
                {"errorType":"java.lang.RuntimeException","message":"db down"},
                {"errorType":"org.openqa.selenium.TimeoutException","message":"{'errorMessage':'waited','x':'y'}"}
            ]"#,
        );
        let causes = load_report(file.path()).unwrap();
        assert_eq!(causes.len(), 2);
        assert_eq!(causes[1].message(), Some("waited"));
    }

    #[test]
    fn test_load_missing_report() {
        let result = load_report(Path::new("/nonexistent/report.json"));
        assert!(result.unwrap_err().to_string().contains("Failed to read report"));
    }

    #[test]
    fn test_load_invalid_report() {
        let file = report_file("[1, 2, 3]");
        assert!(load_report(file.path()).is_err());
    }

    #[test]
    fn test_inspection_json_known_and_unknown_types() {
        let registry = ErrorTypeRegistry::with_builtins();
        let json = inspection_json(&causes(), &registry).unwrap();

        let known = &json[0];
        assert_eq!(known["errorType"], "org.openqa.selenium.NoSuchElementException");
        assert_eq!(known["resolvedType"], "org.openqa.selenium.NoSuchElementException");
        assert_eq!(
            known["reconstructedType"],
            "org.openqa.selenium.NoSuchElementException"
        );
        assert_eq!(
            known["rendered"],
            "org.openqa.selenium.NoSuchElementException: #pay"
        );

        let unknown = &json[1];
        assert_eq!(unknown["errorType"], "com.unknown.Type");
        assert_eq!(unknown["resolvedType"], "java.lang.Throwable");
        assert_eq!(unknown["reconstructedType"], "java.lang.RuntimeException");
        assert_eq!(
            unknown["rendered"],
            "java.lang.RuntimeException: com.unknown.Type: some text"
        );
    }

    #[test]
    fn test_inspection_text() {
        let registry = ErrorTypeRegistry::with_builtins();
        let text = inspection_text(&causes(), &registry);

        assert!(text.contains("#0 org.openqa.selenium.NoSuchElementException: #pay\n"));
        assert!(text.contains("   resolved type: org.openqa.selenium.NoSuchElementException\n"));
        assert!(text.contains("#1 java.lang.RuntimeException: com.unknown.Type: some text\n"));
        assert!(text.contains("   recorded type: com.unknown.Type\n"));
        assert!(text.contains("   resolved type: java.lang.Throwable\n"));
        assert!(text.contains("   reconstructed as: java.lang.RuntimeException\n"));
        assert_eq!(text.matches("reconstructed as").count(), 1);
    }

    #[test]
    fn test_classification_verdicts() {
        let registry = ErrorTypeRegistry::with_builtins();

        let table =
            classification_table(&causes(), "org.openqa.selenium.WebDriverException", &registry);
        assert!(table.starts_with("INDEX"));
        assert_eq!(verdict(&table, 0), "yes");
        assert_eq!(verdict(&table, 1), "no");

        let table = classification_table(&causes(), "java.lang.AssertionError", &registry);
        assert_eq!(verdict(&table, 0), "no");

        let table = classification_table(&causes(), "java.lang.Throwable", &registry);
        assert_eq!(verdict(&table, 0), "yes");
        assert_eq!(verdict(&table, 1), "yes");
    }

    #[test]
    fn test_types_table() {
        let registry = ErrorTypeRegistry::with_builtins();
        let table = types_table(&registry);

        let row = |name: &str| {
            table
                .lines()
                .find(|line| line.starts_with(&format!("{} ", name)))
                .unwrap()
                .split_whitespace()
                .map(str::to_string)
                .collect::<Vec<_>>()
        };
        assert_eq!(
            row("java.lang.AssertionError"),
            vec!["java.lang.AssertionError", "java.lang.Error", "object"]
        );
        assert_eq!(
            row("org.junit.ComparisonFailure"),
            vec!["org.junit.ComparisonFailure", "java.lang.AssertionError", "-"]
        );
        assert_eq!(row("java.lang.Throwable"), vec!["java.lang.Throwable", "-", "text"]);
        assert_eq!(table.lines().count(), 2 + registry.len());
    }

    #[test]
    fn test_display_type() {
        assert_eq!(display_type(""), "<none>");
        assert_eq!(display_type("a.B"), "a.B");
    }

    #[test]
    fn test_handle_commands() {
        let registry = ErrorTypeRegistry::with_builtins();
        let file = report_file(r#"{"errorType":"com.unknown.Type","message":"x"}"#);

        for format in ["text", "json"] {
            handle_command(
                Commands::Inspect {
                    report: file.path().to_path_buf(),
                    format: format.to_string(),
                },
                &registry,
            )
            .unwrap();
        }
        handle_command(
            Commands::Classify {
                report: file.path().to_path_buf(),
                category: "java.lang.Throwable".to_string(),
            },
            &registry,
        )
        .unwrap();
        handle_command(Commands::Types, &registry).unwrap();
    }
}
