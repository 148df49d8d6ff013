//! `hiersel resolve` command - display state of one hierarchy path

use std::path::Path;

use serde_json::Value;

use crate::cli::Cli;
use crate::output_by_format_result;
use hiersel_core::config::SelectionConfig;
use hiersel_core::error::{HierselError, Result};
use hiersel_core::filter::FilterPayload;
use hiersel_core::identity::EqComparator;
use hiersel_core::resolve::resolve_selection_state;

/// Execute the resolve command
pub fn execute(cli: &Cli, config: &SelectionConfig, filter: &Path, segments: &[String]) -> Result<()> {
    let payload: FilterPayload<Value> = FilterPayload::load(filter)?;
    let path: Vec<Value> = segments.iter().cloned().map(Value::String).collect();

    let state = resolve_selection_state(&path, payload.hierarchy_data(), &EqComparator);
    let color = config.palette.color_for(state);

    output_by_format_result!(cli.format,
        json => {
            println!(
                "{}",
                serde_json::json!({
                    "path": path,
                    "state": state,
                    "color": color,
                })
            );
            Ok::<(), HierselError>(())
        },
        human => {
            if cli.quiet {
                println!("{}", state);
            } else {
                println!("{}: {} ({})", segments.join(" > "), state, color);
            }
        }
    )?;

    Ok(())
}
