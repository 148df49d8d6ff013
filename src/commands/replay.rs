//! `hiersel replay` command - drive a selection controller from recorded clicks

use std::path::Path;
use std::time::Instant;

use serde::Deserialize;
use serde_json::Value;

use crate::cli::Cli;
use crate::commands::render;
use crate::output_by_format_result;
use hiersel_core::config::SelectionConfig;
use hiersel_core::controller::SelectionController;
use hiersel_core::error::{HierselError, Result};
use hiersel_core::filter::FilterPayload;
use hiersel_core::identity::EqComparator;

/// One recorded host interaction
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum ReplayEvent {
    /// Row click; `multi` is true when a modifier key was held
    Select {
        path: Vec<Value>,
        #[serde(default)]
        multi: bool,
    },
    /// "Clear selections" button
    Clear,
    /// Settings change of the unselect-all mode, followed by a host sync
    Mode { unselect_all: bool },
}

pub fn load_events(path: &Path) -> Result<Vec<ReplayEvent>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| HierselError::io_operation("read events", path.display(), e))?;
    serde_json::from_str(&content).map_err(|e| HierselError::InvalidEvents {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Execute the replay command
pub fn execute(
    cli: &Cli,
    config: SelectionConfig,
    events_path: &Path,
    initial: Option<&Path>,
) -> Result<()> {
    let start = Instant::now();
    let events = load_events(events_path)?;
    let event_count = events.len();
    let mut controller = SelectionController::new(EqComparator, config);

    // The host echoes the last applied filter back on every sync.
    let mut applied: Option<FilterPayload<Value>> = match initial {
        Some(path) => Some(FilterPayload::load(path)?),
        None => None,
    };
    if let Some(reemit) = controller.restore_from_filter(applied.clone())? {
        applied = Some(reemit);
    }

    for (index, event) in events.into_iter().enumerate() {
        tracing::debug!(index, event = ?event, "replay event");
        match event {
            ReplayEvent::Select { path, multi } => {
                applied = Some(controller.handle_selection(&path, multi)?);
            }
            ReplayEvent::Clear => {
                applied = Some(controller.clear_selections()?);
            }
            ReplayEvent::Mode { unselect_all } => {
                controller.set_unselect_all_by_default(unselect_all);
                if let Some(reemit) = controller.restore_from_filter(applied.clone())? {
                    applied = Some(reemit);
                }
            }
        }
    }
    hiersel_core::trace_time!(start, "replay_events", events = event_count);

    output_by_format_result!(cli.format,
        json => {
            println!("{}", serde_json::to_string_pretty(&applied)?);
            Ok::<(), HierselError>(())
        },
        human => {
            match &applied {
                Some(payload) => {
                    println!("{}", render::summary(payload));
                    if !cli.quiet {
                        for line in render::tree_lines(payload.hierarchy_data()) {
                            println!("{}", line);
                        }
                    }
                }
                None => println!("No filter emitted"),
            }
        }
    )?;

    Ok(())
}
