use crate::batch::classify_pool;
use crate::config::{self, MethodsortConfig};
use crate::io::output::{create_writer, OutputFormat};
use crate::model::HierarchyDocument;
use crate::sort::Sort;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, IsTerminal};
use std::path::PathBuf;

/// Options of `methodsort classify`. Unset options fall back to the
/// configuration file.
#[derive(Debug, Clone, Default)]
pub struct ClassifyConfig {
    pub path: PathBuf,
    pub sorts: Option<Vec<Sort>>,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub include_unmatched: bool,
    pub no_parallel: bool,
    pub jobs: Option<usize>,
    pub plain: bool,
}

fn load_settings(config: &ClassifyConfig) -> Result<MethodsortConfig> {
    match &config.config {
        Some(path) => config::load_config_file(path)
            .with_context(|| format!("Failed to load configuration {}", path.display())),
        None => Ok(config::load_config()),
    }
}

/// Apply command line overrides on top of the loaded configuration.
pub fn merge_settings(mut settings: MethodsortConfig, config: &ClassifyConfig) -> MethodsortConfig {
    let mut classification = settings.classification();
    if let Some(sorts) = &config.sorts {
        classification.sorts = Some(sorts.iter().map(|sort| sort.name().to_string()).collect());
    }
    classification.include_unmatched |= config.include_unmatched;
    settings.classification = Some(classification);

    let mut parallel = settings.parallel();
    if config.no_parallel {
        parallel.enabled = false;
    }
    if let Some(jobs) = config.jobs {
        parallel.max_concurrency = (jobs > 0).then_some(jobs);
    }
    settings.parallel = Some(parallel);
    settings
}

fn resolve_format(settings: &MethodsortConfig, config: &ClassifyConfig) -> Result<OutputFormat> {
    if let Some(format) = config.format {
        return Ok(format);
    }
    match settings.default_format() {
        Some(format) => Ok(format.parse()?),
        None => Ok(OutputFormat::Terminal),
    }
}

fn use_color(settings: &MethodsortConfig, config: &ClassifyConfig) -> bool {
    if config.plain || config.output.is_some() {
        return false;
    }
    settings
        .use_color()
        .unwrap_or_else(|| std::io::stdout().is_terminal())
}

pub fn classify_hierarchy(config: ClassifyConfig) -> Result<()> {
    let settings = merge_settings(load_settings(&config)?, &config);
    let format = resolve_format(&settings, &config)?;

    let pool = HierarchyDocument::load(&config.path)
        .and_then(HierarchyDocument::into_pool)
        .with_context(|| format!("Failed to load class hierarchy {}", config.path.display()))?;
    let reports = classify_pool(&pool, &settings.classification(), &settings.parallel())?;
    log::info!(
        "Classified {} methods of {} types",
        reports.len(),
        pool.len()
    );

    let use_color = use_color(&settings, &config);
    colored::control::set_override(use_color);
    let mut writer = match &config.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?;
            create_writer(format, BufWriter::new(file), use_color)
        }
        None => create_writer(format, std::io::stdout(), use_color),
    };
    writer.write_reports(&reports)
}
