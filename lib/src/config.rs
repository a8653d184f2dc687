//! Runtime configuration.
//!
//! There is no configuration file and no environment access: a program picks
//! its settings at compile time through [`RtConfig`] and hands them to
//! [`crate::entry_point!`]. The entry code installs them once, before `main`.
//!
//! ```ignore
//! use slopcrt_lib::{entry_point, ExitPolicy, Fd, KlogLevel, RtConfig};
//!
//! const CONFIG: RtConfig = RtConfig::DEFAULT
//!     .with_output_fd(Fd::STDERR)
//!     .with_log_level(KlogLevel::Debug)
//!     .with_exit_policy(ExitPolicy::Trap);
//!
//! entry_point!(config = CONFIG);
//! ```

use slopcrt_abi::Fd;
use spin::Once;

use crate::klog::KlogLevel;

/// What to do if the termination request comes back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ExitPolicy {
    /// Re-issue the request forever. There is nothing else a freestanding
    /// process can rely on.
    #[default]
    RetryForever,
    /// Log and execute `ud2`, so the kernel kills the process with SIGILL.
    Trap,
}

#[cfg(feature = "verbose")]
const DEFAULT_LOG_LEVEL: KlogLevel = KlogLevel::Debug;
#[cfg(not(feature = "verbose"))]
const DEFAULT_LOG_LEVEL: KlogLevel = KlogLevel::Warn;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RtConfig {
    /// Descriptor used by [`crate::numfmt::print`].
    pub output_fd: Fd,
    /// Initial klog threshold.
    pub log_level: KlogLevel,
    pub exit_policy: ExitPolicy,
}

impl RtConfig {
    pub const DEFAULT: Self = Self {
        output_fd: Fd::STDOUT,
        log_level: DEFAULT_LOG_LEVEL,
        exit_policy: ExitPolicy::RetryForever,
    };

    pub const fn with_output_fd(self, output_fd: Fd) -> Self {
        Self { output_fd, ..self }
    }

    pub const fn with_log_level(self, log_level: KlogLevel) -> Self {
        Self { log_level, ..self }
    }

    pub const fn with_exit_policy(self, exit_policy: ExitPolicy) -> Self {
        Self { exit_policy, ..self }
    }
}

impl Default for RtConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

static CONFIG: Once<RtConfig> = Once::new();

/// Install the process configuration.
///
/// Returns `false` if a configuration was already installed; the first one
/// stays in effect.
pub fn install(config: RtConfig) -> bool {
    let mut installed = false;
    CONFIG.call_once(|| {
        installed = true;
        config
    });
    installed
}

/// Installed configuration, or [`RtConfig::DEFAULT`] before installation.
pub fn config() -> RtConfig {
    CONFIG.get().copied().unwrap_or(RtConfig::DEFAULT)
}
