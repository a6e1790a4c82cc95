use crate::Result;
use async_trait::async_trait;

/// A unit of work driven on a fixed interval.
///
/// Implementations own their error isolation: a failed tick must leave no
/// partial state behind. The scheduling runtime (see [`JobRunner`]) logs the
/// failure and keeps ticking.
///
/// [`JobRunner`]: crate::runner::JobRunner
#[async_trait]
pub trait PeriodicJob: Send + Sync + 'static {
    fn name(&self) -> &'static str;

    async fn tick(&self) -> Result<()>;
}
