//! Workspace umbrella crate for the ingredient phrase tagger (IPT).
//!
//! This crate stitches row ingestion and translation together so callers can
//! go from raw labeled rows to a training corpus with a single API entry point.

pub mod config;

pub use ipt_record::{
    ingest_row, Field, FieldValue, IngredientRecord, IngredientRow, RawIngredientRow,
    RecordConfig, RecordError, FIELD_PRIORITY, INPUT_COLUMN,
};
pub use ipt_tagger::{
    add_prefixes, best_tag, match_token, parse_number, translate, translate_record,
    FieldMatchSet, FinalLabel, Label, NumericError, Prefix, TaggerConfig, TaggerError,
    TranslatedRecord, TranslatedToken, OTHER_LABEL,
};
pub use ipt_text::{
    compute_features, join_line, normalize_token, normalize_unicode_fractions, tokenize, unclump,
    FeatureConfig,
};

use std::error::Error;
use std::fmt;
use std::sync::{Arc, OnceLock, RwLock};
use std::time::{Duration, Instant};

use tracing::info;

/// Errors that can occur while turning a raw row into training lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    Record(RecordError),
    Tagger(TaggerError),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::Record(err) => write!(f, "record ingestion failure: {err}"),
            PipelineError::Tagger(err) => write!(f, "translation failure: {err}"),
        }
    }
}

impl Error for PipelineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PipelineError::Record(err) => Some(err),
            PipelineError::Tagger(err) => Some(err),
        }
    }
}

impl From<RecordError> for PipelineError {
    fn from(value: RecordError) -> Self {
        PipelineError::Record(value)
    }
}

impl From<TaggerError> for PipelineError {
    fn from(value: TaggerError) -> Self {
        PipelineError::Tagger(value)
    }
}

/// Settings for a whole corpus run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineConfig {
    pub record: RecordConfig,
    pub tagger: TaggerConfig,
    /// Translate rows on a rayon pool. Ignored without the `parallel` feature.
    pub use_parallel: bool,
}

/// Metrics observer for pipeline stages.
pub trait PipelineMetrics: Send + Sync {
    fn record_ingest(&self, latency: Duration, result: Result<(), RecordError>);
    fn record_translate(&self, latency: Duration, token_count: usize, result: Result<(), TaggerError>);
}

/// Install or clear the global pipeline metrics recorder.
pub fn set_pipeline_metrics(recorder: Option<Arc<dyn PipelineMetrics>>) {
    let mut guard = metrics_lock()
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = recorder;
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn PipelineMetrics>>> {
    static METRICS: OnceLock<RwLock<Option<Arc<dyn PipelineMetrics>>>> = OnceLock::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

fn metrics_recorder() -> Option<Arc<dyn PipelineMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

struct MetricsSpan {
    recorder: Arc<dyn PipelineMetrics>,
    start: Instant,
}

impl MetricsSpan {
    fn start() -> Option<Self> {
        metrics_recorder().map(|recorder| Self {
            recorder,
            start: Instant::now(),
        })
    }

    fn record_ingest(self, result: Result<(), RecordError>) {
        self.recorder.record_ingest(self.start.elapsed(), result);
    }

    fn record_translate(self, token_count: usize, result: Result<(), TaggerError>) {
        self.recorder
            .record_translate(self.start.elapsed(), token_count, result);
    }
}

/// Ingest and translate one raw row.
///
/// The `input` column is split off as the display string before matching, so
/// it never matches itself.
pub fn translate_row(
    raw: RawIngredientRow,
    record_cfg: &RecordConfig,
    tagger_cfg: &TaggerConfig,
) -> Result<String, PipelineError> {
    let ingest_metrics = MetricsSpan::start();
    let row = match ingest_row(raw, record_cfg) {
        Ok(row) => {
            if let Some(span) = ingest_metrics {
                span.record_ingest(Ok(()));
            }
            row
        }
        Err(err) => {
            if let Some(span) = ingest_metrics {
                span.record_ingest(Err(err.clone()));
            }
            return Err(PipelineError::Record(err));
        }
    };

    let translate_metrics = MetricsSpan::start();
    match translate_record(&row.display, &row.record, tagger_cfg) {
        Ok(translated) => {
            if let Some(span) = translate_metrics {
                span.record_translate(translated.len(), Ok(()));
            }
            Ok(translated.to_lines())
        }
        Err(err) => {
            if let Some(span) = translate_metrics {
                span.record_translate(0, Err(err.clone()));
            }
            Err(PipelineError::Tagger(err))
        }
    }
}

/// Translates many rows into one corpus.
///
/// Each record's lines are followed by one blank line, the sequence separator
/// CRF-style trainers expect. Rows whose display string has no tokens
/// contribute nothing. Output order always follows input order; the first
/// failing row aborts the run.
pub fn build_corpus(
    rows: Vec<RawIngredientRow>,
    cfg: &PipelineConfig,
) -> Result<String, PipelineError> {
    let start = Instant::now();
    let row_count = rows.len();
    let parallel = cfg.use_parallel && cfg!(feature = "parallel");

    let translated = translate_all(rows, cfg)?;

    let mut corpus = String::with_capacity(translated.iter().map(|t| t.len() + 1).sum());
    let mut empty_rows = 0usize;
    for lines in translated {
        if lines.is_empty() {
            empty_rows += 1;
            continue;
        }
        corpus.push_str(&lines);
        corpus.push('\n');
    }

    info!(
        rows = row_count,
        empty_rows,
        parallel,
        corpus_len = corpus.len(),
        elapsed_micros = start.elapsed().as_micros(),
        "corpus_built"
    );
    Ok(corpus)
}

#[cfg(feature = "parallel")]
fn translate_all(
    rows: Vec<RawIngredientRow>,
    cfg: &PipelineConfig,
) -> Result<Vec<String>, PipelineError> {
    use rayon::prelude::*;

    let translate_one =
        |raw: RawIngredientRow| translate_row(raw, &cfg.record, &cfg.tagger);
    if cfg.use_parallel {
        rows.into_par_iter().map(translate_one).collect()
    } else {
        rows.into_iter().map(translate_one).collect()
    }
}

#[cfg(not(feature = "parallel"))]
fn translate_all(
    rows: Vec<RawIngredientRow>,
    cfg: &PipelineConfig,
) -> Result<Vec<String>, PipelineError> {
    rows.into_iter()
        .map(|raw| translate_row(raw, &cfg.record, &cfg.tagger))
        .collect()
}
