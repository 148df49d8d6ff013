//! `hiersel verify` command - check a filter document against the tree invariants

use std::path::Path;

use serde_json::Value;

use crate::cli::Cli;
use crate::output_by_format_result;
use hiersel_core::error::{HierselError, Result};
use hiersel_core::filter::FilterPayload;
use hiersel_core::identity::EqComparator;
use hiersel_core::tree::{node_count, validate_forest};

/// Execute the verify command
pub fn execute(cli: &Cli, filter: &Path) -> Result<()> {
    let payload: FilterPayload<Value> = FilterPayload::load(filter)?;
    let forest = payload.hierarchy_data();
    let errors = validate_forest(forest, &EqComparator);

    output_by_format_result!(cli.format,
        json => {
            println!(
                "{}",
                serde_json::json!({
                    "kind": payload.kind(),
                    "nodes": node_count(forest),
                    "valid": errors.is_empty(),
                    "errors": errors,
                })
            );
            Ok::<(), HierselError>(())
        },
        human => {
            if errors.is_empty() {
                if !cli.quiet {
                    println!("ok: {} filter, {} node(s)", payload.kind(), node_count(forest));
                }
            } else {
                for error in &errors {
                    println!("{}", error);
                }
            }
        }
    )?;

    if !errors.is_empty() {
        return Err(HierselError::InvariantViolations {
            count: errors.len(),
        });
    }

    Ok(())
}
