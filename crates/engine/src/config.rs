use derive_builder::Builder;
use word_tally_shared_kernel::{ConfigError, ConfigResult};

use crate::options::PoolKind;

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    /// Worker threads for the parallel pool.
    #[builder(default = "num_cpus::get()")]
    pub jobs: usize,
    #[builder(default)]
    pub pool: PoolKind,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            jobs: num_cpus::get(),
            pool: PoolKind::default(),
        }
    }
}

impl Config {
    /// Reject settings the engine cannot run with.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidJobs`] when a parallel pool is asked for zero workers.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.pool == PoolKind::Parallel && self.jobs == 0 {
            return Err(ConfigError::InvalidJobs { jobs: self.jobs });
        }
        Ok(())
    }

    /// Workers that will actually execute tasks.
    pub const fn workers(&self) -> usize {
        match self.pool {
            PoolKind::Parallel => self.jobs,
            PoolKind::Inline => 1,
        }
    }
}
