//! Runtime logger.
//!
//! Lines go to stderr so they never mix with the program's own output. The
//! threshold starts at [`RtConfig::log_level`](crate::RtConfig) once the
//! entry code calls [`klog_init`].

use core::fmt::{self, Write};
use core::sync::atomic::{AtomicU8, Ordering};

use slopcrt_abi::Fd;

use crate::arch::NATIVE;
use crate::config;
use crate::platform::Platform;
use crate::sys;

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum KlogLevel {
    Error = 0,
    Warn = 1,
    Info = 2,
    Debug = 3,
    Trace = 4,
}

impl KlogLevel {
    fn from_raw(raw: u8) -> Self {
        match raw {
            0 => KlogLevel::Error,
            1 => KlogLevel::Warn,
            2 => KlogLevel::Info,
            3 => KlogLevel::Debug,
            _ => KlogLevel::Trace,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            KlogLevel::Error => "error",
            KlogLevel::Warn => "warn",
            KlogLevel::Info => "info",
            KlogLevel::Debug => "debug",
            KlogLevel::Trace => "trace",
        }
    }
}

static CURRENT_LEVEL: AtomicU8 = AtomicU8::new(KlogLevel::Warn as u8);

#[inline(always)]
fn is_enabled(level: KlogLevel) -> bool {
    level as u8 <= CURRENT_LEVEL.load(Ordering::Relaxed)
}

struct KlogWriter<'a, P: Platform + ?Sized> {
    platform: &'a P,
}

impl<P: Platform + ?Sized> Write for KlogWriter<'_, P> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        sys::write_all_on(self.platform, Fd::STDERR, s.as_bytes()).map_err(|_| fmt::Error)
    }
}

/// Log one line through `platform`. Write failures are dropped.
pub fn log_args_on<P: Platform + ?Sized>(platform: &P, level: KlogLevel, args: fmt::Arguments<'_>) {
    if !is_enabled(level) {
        return;
    }
    let mut writer = KlogWriter { platform };
    let _ = write!(writer, "[{}] ", level.tag());
    let _ = writer.write_fmt(args);
    let _ = writer.write_str("\n");
}

pub fn log_args(level: KlogLevel, args: fmt::Arguments<'_>) {
    log_args_on(&NATIVE, level, args);
}

/// Reset the threshold to the installed configuration.
pub fn klog_init() {
    klog_set_level(config::config().log_level);
}
pub fn klog_set_level(level: KlogLevel) {
    CURRENT_LEVEL.store(level as u8, Ordering::Relaxed);
}
pub fn klog_get_level() -> KlogLevel {
    KlogLevel::from_raw(CURRENT_LEVEL.load(Ordering::Relaxed))
}
pub fn klog_is_enabled(level: KlogLevel) -> bool {
    is_enabled(level)
}

#[macro_export]
macro_rules! klog_error {
    ($($arg:tt)*) => {
        $crate::klog::log_args($crate::klog::KlogLevel::Error, ::core::format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! klog_debug {
    ($($arg:tt)*) => {
        $crate::klog::log_args($crate::klog::KlogLevel::Debug, ::core::format_args!($($arg)*))
    };
}
