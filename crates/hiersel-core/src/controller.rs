//! Selection controller: sole owner of the selection forest
//!
//! Each user action runs to completion, replaces the forest wholesale and
//! yields the filter document to hand to the host. Transmission is the
//! caller's concern; the controller never rolls its forest back.

use std::fmt;

use crate::config::SelectionConfig;
use crate::error::Result;
use crate::filter::{build_payload, FilterPayload, QueryNameTarget};
use crate::identity::IdentityComparator;
use crate::resolve::{resolve_selection_state, SelectionState};
use crate::strategy::{multi_select_toggle, single_select_toggle};
use crate::tree::{node_count, FilterNode, Forest};

pub struct SelectionController<I, C> {
    forest: Forest<I>,
    comparator: C,
    config: SelectionConfig,
    /// Mode the current forest was built under; the configured one may differ
    /// until the next [`SelectionController::restore_from_filter`].
    unselect_all_active: bool,
}

impl<I, C> fmt::Debug for SelectionController<I, C>
where
    I: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionController")
            .field("forest", &self.forest)
            .field("config", &self.config)
            .field("unselect_all_active", &self.unselect_all_active)
            .finish_non_exhaustive()
    }
}

impl<I, C> SelectionController<I, C>
where
    I: Clone,
    C: IdentityComparator<I>,
{
    /// Start a session with an empty selection
    pub fn new(comparator: C, config: SelectionConfig) -> Self {
        let unselect_all_active = config.unselect_all.enabled;
        Self {
            forest: Vec::new(),
            comparator,
            config,
            unselect_all_active,
        }
    }

    pub fn forest(&self) -> &[FilterNode<I>] {
        &self.forest
    }

    pub fn config(&self) -> &SelectionConfig {
        &self.config
    }

    pub fn is_unselect_all_active(&self) -> bool {
        self.unselect_all_active
    }

    /// Change the unselect-all mode; takes effect on the next host sync.
    pub fn set_unselect_all_by_default(&mut self, enabled: bool) {
        self.config.unselect_all.enabled = enabled;
    }

    /// Apply one row click and return the filter document to emit.
    #[tracing::instrument(skip(self, path), fields(depth = path.len()))]
    pub fn handle_selection(&mut self, path: &[I], multi_select: bool) -> Result<FilterPayload<I>> {
        let forest = std::mem::take(&mut self.forest);
        self.forest = if multi_select {
            multi_select_toggle(path, forest, &self.comparator)
        } else {
            single_select_toggle(path, forest, &self.comparator)
        };

        tracing::debug!(
            roots = self.forest.len(),
            nodes = node_count(&self.forest),
            "selection updated"
        );

        self.payload(self.hierarchy_target())
    }

    /// Revert every row to the default state.
    #[tracing::instrument(skip(self))]
    pub fn clear_selections(&mut self) -> Result<FilterPayload<I>> {
        self.forest.clear();
        self.payload(Vec::new())
    }

    /// Re-sync with the filter the host currently has applied.
    ///
    /// A basic filter means the fallback is in force, so the forest is empty.
    /// Returns a payload to re-emit when the selection had to be cleared:
    /// after a mode change, or when unselect-all mode sees no filter or an
    /// empty hierarchy filter. An echoed basic filter is never re-emitted.
    #[tracing::instrument(skip(self, applied))]
    pub fn restore_from_filter(
        &mut self,
        applied: Option<FilterPayload<I>>,
    ) -> Result<Option<FilterPayload<I>>> {
        let wanted = self.config.unselect_all.enabled;
        let fallback_applied = matches!(applied, Some(FilterPayload::Basic(_)));
        self.forest = applied
            .map(FilterPayload::into_hierarchy_data)
            .unwrap_or_default();

        let fallback_due = wanted && !fallback_applied && self.forest.is_empty();
        if wanted != self.unselect_all_active || fallback_due {
            tracing::debug!(
                unselect_all = wanted,
                mode_changed = wanted != self.unselect_all_active,
                "clearing selection on host sync"
            );
            self.unselect_all_active = wanted;
            return self.clear_selections().map(Some);
        }

        Ok(None)
    }

    /// Effective display state of `path` under the current forest.
    pub fn selection_state(&self, path: &[I]) -> SelectionState {
        resolve_selection_state(path, &self.forest, &self.comparator)
    }

    fn hierarchy_target(&self) -> Vec<QueryNameTarget> {
        self.config
            .target
            .columns
            .iter()
            .map(QueryNameTarget::new)
            .collect()
    }

    fn payload(&mut self, target: Vec<QueryNameTarget>) -> Result<FilterPayload<I>> {
        let mut unselect_all = self.config.unselect_all.clone();
        unselect_all.enabled = self.unselect_all_active;

        let payload = build_payload(
            &self.forest,
            target,
            &unselect_all,
            &self.config.target.columns,
        )?;
        if let FilterPayload::Basic(_) = payload {
            // The fallback stands in for the tree; nothing may linger.
            self.forest.clear();
        }
        Ok(payload)
    }
}
