use crate::core_types::ParameterVector;
use crate::error::{HashTuneError, HtResult};
use crate::wordset::{DistributionMetrics, HashWordSet};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// A single source text, kept whole in memory.
#[derive(Debug, Clone)]
pub struct Document {
    pub name: String,
    pub text: String,
}

impl Document {
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.text.lines().flat_map(str::split_whitespace)
    }
}

/// The ordered, read-only set of documents every candidate is scored against.
#[derive(Debug, Clone)]
pub struct Corpus {
    documents: Vec<Document>,
}

impl Corpus {
    /// Reads every path as UTF-8. Any unreadable document aborts the load.
    pub fn load<P: AsRef<Path>>(paths: &[P]) -> HtResult<Self> {
        if paths.is_empty() {
            return Err(HashTuneError::Config(
                "Corpus needs at least one document".to_string(),
            ));
        }

        let mut documents = Vec::with_capacity(paths.len());
        for path in paths {
            let path = path.as_ref();
            let text = fs::read_to_string(path).map_err(|source| HashTuneError::Corpus {
                path: path.display().to_string(),
                source,
            })?;
            debug!("Loaded {} ({} bytes)", path.display(), text.len());
            documents.push(Document {
                name: path.display().to_string(),
                text,
            });
        }

        info!("📚 Corpus ready: {} document(s)", documents.len());
        Ok(Self { documents })
    }

    /// Builds a corpus from in-memory texts, named by position.
    pub fn from_texts<S: Into<String>>(texts: impl IntoIterator<Item = S>) -> HtResult<Self> {
        let documents: Vec<Document> = texts
            .into_iter()
            .enumerate()
            .map(|(i, t)| Document {
                name: format!("doc-{}", i),
                text: t.into(),
            })
            .collect();
        if documents.is_empty() {
            return Err(HashTuneError::Config(
                "Corpus needs at least one document".to_string(),
            ));
        }
        Ok(Self { documents })
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

/// Anything that can turn a weight vector into a scalar fitness.
///
/// Implementations are called concurrently from the worker pool and must not
/// rely on shared mutable state.
pub trait Evaluate: Send + Sync {
    fn evaluate(&self, params: &ParameterVector) -> f64;
}

impl<F> Evaluate for F
where
    F: Fn(&ParameterVector) -> f64 + Send + Sync,
{
    fn evaluate(&self, params: &ParameterVector) -> f64 {
        self(params)
    }
}

/// Scores weights by how evenly they spread each document's distinct words.
pub struct CorpusEvaluator {
    corpus: Corpus,
}

impl CorpusEvaluator {
    pub fn new(corpus: Corpus) -> Self {
        Self { corpus }
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn build_set(doc: &Document, params: &ParameterVector) -> HashWordSet {
        let mut set = HashWordSet::with_weights(*params);
        for token in doc.tokens() {
            set.add(token);
        }
        set
    }

    /// Per-document distribution metrics, in corpus order.
    pub fn document_metrics(&self, params: &ParameterVector) -> Vec<DistributionMetrics> {
        self.corpus
            .documents()
            .iter()
            .map(|doc| Self::build_set(doc, params).efficiency_factor())
            .collect()
    }
}

impl Evaluate for CorpusEvaluator {
    /// Mean efficiency factor across documents. Lower is better.
    fn evaluate(&self, params: &ParameterVector) -> f64 {
        let metrics = self.document_metrics(params);
        let total: f64 = metrics.iter().map(|m| m.efficiency_factor).sum();
        total / metrics.len() as f64
    }
}
