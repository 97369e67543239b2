//! Build pipeline
//!
//! A build followed by the automatic purge pass when the configuration
//! asks for one. Shared by `ngtw build` and every rebuild in watch mode.

use serde::Serialize;

use crate::config::ResolvedConfig;
use crate::domain::ports::{CompileEngine, PurgeEngine};
use crate::error::PipelineError;

use super::build::{BuildOutcome, Builder};
use super::purge::{PurgeOptions, PurgeReport, Purger};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PipelineOutcome {
    pub build: BuildOutcome,
    /// Present when `purge_enabled` was set
    pub purge: Option<PurgeReport>,
}

pub struct BuildPipeline<C, P>
where
    C: CompileEngine,
    P: PurgeEngine,
{
    builder: Builder<C>,
    purger: Purger<P>,
}

impl<C, P> BuildPipeline<C, P>
where
    C: CompileEngine,
    P: PurgeEngine,
{
    pub fn new(compile: C, purge: P) -> Self {
        Self {
            builder: Builder::new(compile),
            purger: Purger::new(purge),
        }
    }

    pub fn run(&self, config: &ResolvedConfig) -> Result<PipelineOutcome, PipelineError> {
        let build = self.builder.build(config)?;
        let purge = if config.purge_enabled {
            Some(self.purger.purge(config, &PurgeOptions::default())?)
        } else {
            None
        };
        Ok(PipelineOutcome { build, purge })
    }
}
