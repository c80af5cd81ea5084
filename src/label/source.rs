//! The label data source seam and last-query-wins searching.
//!
//! The crate does not own the network transport. A [`LabelSource`] receives
//! an assembled [`LabelQuery`] and hands back decoded records; this module
//! ships a file-backed and an in-memory source. [`LabelSearch`] sits on top
//! and drops results of searches that a newer search has superseded.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use futures::future::BoxFuture;
use log::{debug, info};

use crate::analysis::synonym::SynonymTable;
use crate::error::Result;
use crate::label::query::{LabelQuery, parse_label_response};
use crate::label::record::LabelRecord;

/// Something that can answer a label query.
pub trait LabelSource: Send + Sync {
    /// Fetch up to `query.limit()` records matching `query`.
    fn fetch<'a>(&'a self, query: &'a LabelQuery) -> BoxFuture<'a, Result<Vec<LabelRecord>>>;
}

/// Serves a saved response body from disk, whatever the query.
#[derive(Debug, Clone)]
pub struct FileLabelSource {
    path: PathBuf,
}

impl FileLabelSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        FileLabelSource {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl LabelSource for FileLabelSource {
    fn fetch<'a>(&'a self, query: &'a LabelQuery) -> BoxFuture<'a, Result<Vec<LabelRecord>>> {
        Box::pin(async move {
            debug!("reading label response from {}", self.path.display());
            let body = tokio::fs::read_to_string(&self.path).await?;
            let mut records = parse_label_response(&body)?;
            records.truncate(query.limit());
            Ok(records)
        })
    }
}

/// Serves a fixed response body held in memory.
#[derive(Debug, Clone)]
pub struct MemoryLabelSource {
    body: String,
}

impl MemoryLabelSource {
    pub fn new<S: Into<String>>(body: S) -> Self {
        MemoryLabelSource { body: body.into() }
    }
}

impl LabelSource for MemoryLabelSource {
    fn fetch<'a>(&'a self, query: &'a LabelQuery) -> BoxFuture<'a, Result<Vec<LabelRecord>>> {
        Box::pin(async move {
            let mut records = parse_label_response(&self.body)?;
            records.truncate(query.limit());
            Ok(records)
        })
    }
}

/// Resolves free-text queries and fetches them, newest query first.
///
/// Every [`search`](Self::search) call takes a ticket. When a call finishes
/// after a later call has started, its outcome is discarded and `Ok(None)`
/// is returned, so only the latest query's records are ever rendered.
pub struct LabelSearch<'t, S> {
    source: S,
    synonyms: &'t SynonymTable,
    limit: usize,
    generation: AtomicU64,
}

impl<'t, S: LabelSource> LabelSearch<'t, S> {
    pub fn new(source: S, synonyms: &'t SynonymTable, limit: usize) -> Self {
        LabelSearch {
            source,
            synonyms,
            limit,
            generation: AtomicU64::new(0),
        }
    }

    /// Resolve `query`, fetch it and return the records unless superseded.
    ///
    /// Fetch failures of superseded searches are discarded too.
    pub async fn search(&self, query: &str) -> Result<Option<Vec<LabelRecord>>> {
        let query = LabelQuery::resolve(query, self.synonyms, self.limit)?;
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        info!("label search #{ticket}: {}", query.search_expression());

        let outcome = self.source.fetch(&query).await;

        if self.generation.load(Ordering::SeqCst) != ticket {
            debug!("label search #{ticket} superseded, dropping result");
            return Ok(None);
        }
        outcome.map(Some)
    }
}
