use clap::Parser;
use itertools::Itertools;
use liquilint::prelude::*;
use serde::Deserialize;
use std::fs;
use std::time::Instant;

// --- JSON Deserialization Structs (Input Format Specific) ---
// These structs match the exported workflow format and are only used here
// for conversion.

#[derive(Deserialize)]
struct RawWorkflow {
    name: String,
    #[serde(alias = "payloadSchema")]
    payload_schema: Option<serde_json::Value>,
    steps: Vec<RawStep>,
}

#[derive(Deserialize)]
struct RawStep {
    #[serde(alias = "stepId")]
    id: String,
    name: Option<String>,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default, alias = "controlValues")]
    controls: serde_json::Value,
    #[serde(default)]
    outputs: Vec<String>,
}

// --- Converter Implementation ---
// Maps the raw export model onto liquilint's canonical WorkflowDefinition.

impl IntoWorkflow for RawWorkflow {
    fn into_workflow(self) -> Result<WorkflowDefinition, WorkflowConversionError> {
        let steps = self
            .steps
            .into_iter()
            .map(|raw| {
                let kind = match raw.kind.as_str() {
                    "in_app" | "inApp" => StepKind::InApp,
                    "email" => StepKind::Email,
                    "sms" => StepKind::Sms,
                    "push" => StepKind::Push,
                    "chat" => StepKind::Chat,
                    "digest" => StepKind::Digest,
                    "delay" => StepKind::Delay,
                    "custom" => StepKind::Custom,
                    other => {
                        return Err(WorkflowConversionError::ValidationError(format!(
                            "step '{}' has unknown type '{}'",
                            raw.id, other
                        )));
                    }
                };
                Ok(StepDefinition {
                    name: raw.name.unwrap_or_else(|| raw.id.clone()),
                    id: raw.id,
                    kind,
                    controls: raw.controls,
                    outputs: raw.outputs,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut seen = std::collections::HashSet::new();
        for step in &steps {
            if !seen.insert(step.id.clone()) {
                return Err(WorkflowConversionError::DuplicateStepId {
                    step_id: step.id.clone(),
                });
            }
        }

        Ok(WorkflowDefinition {
            name: self.name,
            payload_schema: self.payload_schema,
            steps,
        })
    }
}

/// A variable resolution and validation CLI for liquid-templated workflows
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the workflow definition JSON file
    workflow_path: String,

    /// Optional path to a preview data JSON file (subscriber/context/payload)
    preview_path: Option<String>,

    /// Enforce the payload schema: unknown payload variables become errors
    #[arg(short, long)]
    strict: bool,

    /// Compare the workflow's payload schema against a candidate replacement
    /// and report in-use changes instead of linting
    #[arg(short, long, value_name = "NEW_SCHEMA_JSON")]
    diff: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let total_start = Instant::now();

    // --- 1. File Loading ---
    let workflow_json = fs::read_to_string(&cli.workflow_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read workflow file '{}': {}",
            &cli.workflow_path, e
        ))
    });

    // --- 2. Parsing and Conversion ---
    let raw_workflow: RawWorkflow = serde_json::from_str(&workflow_json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse workflow JSON: {}", e)));
    let workflow = raw_workflow
        .into_workflow()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to convert workflow: {}", e)));

    match cli.diff {
        Some(new_schema_path) => run_diff(&workflow, &new_schema_path),
        None => {
            let preview = match &cli.preview_path {
                Some(path) => PreviewData::from_file(path).unwrap_or_else(|e| {
                    exit_with_error(&format!(
                        "Failed to load preview data from '{}': {}",
                        path, e
                    ))
                }),
                None => {
                    println!("No preview data file provided. Using default mock data.");
                    PreviewData::sample()
                }
            };
            run_lint(&workflow, &preview, cli.strict);
        }
    }

    println!("\nTotal Execution: {:?}", total_start.elapsed());
}

/// Lints every step of the workflow and prints per-expression verdicts.
fn run_lint(workflow: &WorkflowDefinition, preview: &PreviewData, strict: bool) {
    println!(
        "\nLinting workflow '{}' ({} steps, strict: {})...",
        workflow.name,
        workflow.steps.len(),
        strict
    );

    let lint_start = Instant::now();
    let verdicts = lint_workflow(workflow, Some(preview), strict);
    let lint_duration = lint_start.elapsed();

    let total = verdicts.len();
    let mut errors = 0usize;

    for (step_id, step_verdicts) in &verdicts.iter().chunk_by(|v| v.step_id.clone()) {
        println!("\nStep '{}':", step_id);
        for item in step_verdicts {
            if item.verdict.has_error() {
                errors += 1;
                println!(
                    "  ERROR {} -> {}",
                    item.expression.full_expression,
                    item.verdict.error_message()
                );
            } else {
                println!("  ok    {}", item.expression.full_expression);
            }
        }
    }

    println!("\n--- Lint Summary ---");
    println!("Expressions checked: {}", total);
    println!("Errors:              {}", errors);
    println!("Lint time:           {:?}", lint_duration);

    if errors > 0 {
        exit_with_error(&format!("{} invalid variable reference(s) found", errors));
    }
}

/// Diffs the workflow's payload schema against a candidate replacement and
/// prints the change report with usage annotations.
fn run_diff(workflow: &WorkflowDefinition, new_schema_path: &str) {
    let old_schema = workflow
        .payload_schema_node()
        .unwrap_or_else(|| exit_with_error("Workflow has no payload schema to diff against"));

    let new_schema_json = fs::read_to_string(new_schema_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read schema file '{}': {}",
            new_schema_path, e
        ))
    });
    let new_schema_value: serde_json::Value = serde_json::from_str(&new_schema_json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse schema JSON: {}", e)));
    let new_schema = SchemaNode::from_value(&new_schema_value);

    let usage = UsageIndex::scan(workflow);
    let changes = detect_schema_changes(&old_schema, &new_schema, &usage);

    if changes.is_empty() {
        println!("\nNo schema changes detected.");
        return;
    }

    println!("\n--- Schema Changes ---");
    for change in &changes.deleted {
        println!("deleted   {}{}", change.key, format_usage(&change.usage));
    }
    for change in &changes.added {
        println!("added     {}", change.key);
    }
    for change in &changes.type_changed {
        println!(
            "type      {} ({} -> {}){}",
            change.key,
            format_type(change.original_type),
            format_type(change.new_type),
            format_usage(&change.usage)
        );
    }
    for change in &changes.required_changed {
        println!(
            "required  {} ({} -> {}){}",
            change.key, change.originally_required, change.now_required,
            format_usage(&change.usage)
        );
    }

    if changes.any_in_use() {
        println!("\nWarning: some changed properties are referenced by steps.");
        println!("Saving this schema may break the steps listed above.");
    }
}

fn format_type(ty: Option<SchemaType>) -> String {
    ty.map(|t| t.to_string()).unwrap_or_else(|| "?".to_string())
}

fn format_usage(usage: &UsageInfo) -> String {
    if !usage.is_used {
        return String::new();
    }
    let steps = usage
        .used_in_steps
        .iter()
        .map(|s| s.step_name.as_str())
        .join(", ");
    format!("  [used in: {}]", steps)
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
