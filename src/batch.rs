//! Batch classification of every method in a [`ClassPool`].

use crate::config::{ClassificationConfig, ParallelConfig};
use crate::errors::{Error, Result};
use crate::model::{ClassPool, MethodDescription, MethodView, Modifier, TypeDescription, TypeView};
use crate::sort::{sorts_of, Sort};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, debug_span};

/// Classification of a single declared method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodReport {
    /// Binary name of the declaring type
    pub type_name: String,
    /// Erased signature, e.g. `java.lang.Object get()`
    pub signature: String,
    pub modifiers: Vec<Modifier>,
    /// Selected sorts the method belongs to, in [`Sort::ALL`] order
    pub sorts: Vec<Sort>,
}

impl MethodReport {
    pub fn for_method(method: &MethodView<'_>, selected: &[Sort]) -> Self {
        Self {
            type_name: method.declaring_type().name().to_string(),
            signature: method.signature(),
            modifiers: method.flags().modifiers().collect(),
            sorts: sorts_of(method)
                .into_iter()
                .filter(|sort| selected.contains(sort))
                .collect(),
        }
    }

    pub fn is_bridge(&self) -> bool {
        self.modifiers.contains(&Modifier::Bridge)
    }
}

/// Number of reported methods per sort.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SortCounts {
    pub methods: usize,
    pub counts: Vec<(Sort, usize)>,
}

impl SortCounts {
    pub fn from_reports(reports: &[MethodReport]) -> Self {
        let counts = Sort::ALL
            .into_iter()
            .map(|sort| {
                let count = reports.iter().filter(|r| r.sorts.contains(&sort)).count();
                (sort, count)
            })
            .filter(|&(_, count)| count > 0)
            .collect();
        Self {
            methods: reports.len(),
            counts,
        }
    }
}

fn reports_for_type(
    declaring: &TypeView<'_>,
    classification: &ClassificationConfig,
    selected: &[Sort],
) -> Vec<MethodReport> {
    declaring
        .declared_methods()
        .iter()
        .map(|method| MethodReport::for_method(method, selected))
        .filter(|report| classification.include_unmatched || !report.sorts.is_empty())
        .collect()
}

/// Classify every method declared in `pool`, in definition order.
///
/// Methods matching none of the selected sorts are dropped unless
/// `include_unmatched` is set.
pub fn classify_pool(
    pool: &ClassPool,
    classification: &ClassificationConfig,
    parallel: &ParallelConfig,
) -> Result<Vec<MethodReport>> {
    let selected = classification.selected_sorts()?;
    let types: Vec<TypeView<'_>> = pool.types().collect();
    let _span = debug_span!(
        "classify_pool",
        types = types.len(),
        parallel = parallel.enabled
    )
    .entered();

    let reports: Vec<MethodReport> = if parallel.enabled {
        let run = || -> Vec<MethodReport> {
            types
                .par_iter()
                .flat_map_iter(|declaring| reports_for_type(declaring, classification, &selected))
                .collect()
        };
        match parallel.max_concurrency {
            Some(_) => rayon::ThreadPoolBuilder::new()
                .num_threads(parallel.effective_concurrency())
                .build()
                .map_err(|e| Error::Configuration(format!("Failed to build thread pool: {e}")))?
                .install(run),
            None => run(),
        }
    } else {
        types
            .iter()
            .flat_map(|declaring| reports_for_type(declaring, classification, &selected))
            .collect()
    };

    debug!(reports = reports.len(), "Classified class pool");
    Ok(reports)
}
