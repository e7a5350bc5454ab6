use std::future::Future;
use std::pin::Pin;

use kubectl_foreach::contexts::ContextProvider;
use kubectl_foreach::errors::{ForeachError, Result};

/// Returns a fixed list of contexts.
#[derive(Debug, Clone, Default)]
pub struct StaticContexts {
    contexts: Vec<String>,
}

impl StaticContexts {
    pub fn new<S: Into<String>>(contexts: impl IntoIterator<Item = S>) -> Self {
        Self {
            contexts: contexts.into_iter().map(Into::into).collect(),
        }
    }
}

impl ContextProvider for StaticContexts {
    fn contexts(&self) -> Pin<Box<dyn Future<Output = Result<Vec<String>>> + Send + '_>> {
        let contexts = self.contexts.clone();
        Box::pin(async move { Ok(contexts) })
    }
}

/// Always fails, like a missing or broken kubeconfig.
#[derive(Debug, Clone, Default)]
pub struct FailingContexts;

impl ContextProvider for FailingContexts {
    fn contexts(&self) -> Pin<Box<dyn Future<Output = Result<Vec<String>>> + Send + '_>> {
        Box::pin(async { Err(ForeachError::Provider("no kubeconfig".to_string())) })
    }
}
