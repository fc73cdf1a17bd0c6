//! Platform layer for process resource limits.
//!
//! Maps the symbolic limit names used in check files (`nofile`, `cpu`, ...)
//! to `RLIMIT_*` identifiers and reads the current process's `(soft, hard)`
//! pair. Only unix targets expose rlimits; everywhere else every lookup
//! reports [`HostcheckError::UnsupportedPlatform`].

use crate::error::{HostcheckError, Result};

/// Soft and hard values of one resource limit.
///
/// [`LimitPair::UNLIMITED`] stands for the platform's `RLIM_INFINITY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LimitPair {
    pub soft: u64,
    pub hard: u64,
}

impl LimitPair {
    #[cfg(unix)]
    #[allow(clippy::unnecessary_cast)]
    pub const UNLIMITED: u64 = libc::RLIM_INFINITY as u64;

    #[cfg(not(unix))]
    pub const UNLIMITED: u64 = u64::MAX;
}

#[cfg(all(target_os = "linux", target_env = "gnu"))]
type Resource = libc::__rlimit_resource_t;

#[cfg(all(unix, not(all(target_os = "linux", target_env = "gnu"))))]
type Resource = libc::c_int;

#[cfg(any(target_os = "linux", target_os = "android"))]
const LIMITS_BY_NAME: &[(&str, Resource)] = &[
    ("core", libc::RLIMIT_CORE),
    ("data", libc::RLIMIT_DATA),
    ("fsize", libc::RLIMIT_FSIZE),
    ("memlock", libc::RLIMIT_MEMLOCK),
    ("nofile", libc::RLIMIT_NOFILE),
    ("rss", libc::RLIMIT_RSS),
    ("stack", libc::RLIMIT_STACK),
    ("cpu", libc::RLIMIT_CPU),
    ("nproc", libc::RLIMIT_NPROC),
    ("as", libc::RLIMIT_AS),
    ("locks", libc::RLIMIT_LOCKS),
    ("sigpending", libc::RLIMIT_SIGPENDING),
    ("msgqueue", libc::RLIMIT_MSGQUEUE),
    ("nice", libc::RLIMIT_NICE),
    ("rtprio", libc::RLIMIT_RTPRIO),
    ("rttime", libc::RLIMIT_RTTIME),
];

#[cfg(all(unix, not(any(target_os = "linux", target_os = "android"))))]
const LIMITS_BY_NAME: &[(&str, Resource)] = &[
    ("core", libc::RLIMIT_CORE),
    ("data", libc::RLIMIT_DATA),
    ("fsize", libc::RLIMIT_FSIZE),
    ("memlock", libc::RLIMIT_MEMLOCK),
    ("nofile", libc::RLIMIT_NOFILE),
    ("rss", libc::RLIMIT_RSS),
    ("stack", libc::RLIMIT_STACK),
    ("cpu", libc::RLIMIT_CPU),
    ("nproc", libc::RLIMIT_NPROC),
    ("as", libc::RLIMIT_AS),
];

/// Symbolic limit names recognized on this platform.
pub fn limit_names() -> Vec<&'static str> {
    #[cfg(unix)]
    {
        LIMITS_BY_NAME.iter().map(|(name, _)| *name).collect()
    }
    #[cfg(not(unix))]
    {
        Vec::new()
    }
}

/// Whether `item` names a resource limit on this platform.
///
/// Fails with `UnsupportedPlatform` where rlimits do not exist.
pub fn validate_limit_name(item: &str) -> Result<()> {
    #[cfg(unix)]
    {
        resource_for(item).map(|_| ())
    }
    #[cfg(not(unix))]
    {
        let _ = item;
        Err(unsupported())
    }
}

/// Read the current process's limits for the named resource.
#[allow(clippy::unnecessary_cast)]
pub fn read_limit(item: &str) -> Result<LimitPair> {
    #[cfg(unix)]
    {
        let resource = resource_for(item)?;
        let mut rlim = libc::rlimit {
            rlim_cur: 0,
            rlim_max: 0,
        };
        // SAFETY: `rlim` is a valid, writable rlimit and `resource` comes from
        // the libc constant table above.
        let rc = unsafe { libc::getrlimit(resource, &mut rlim) };
        if rc != 0 {
            return Err(HostcheckError::Io(std::io::Error::last_os_error()));
        }
        Ok(LimitPair {
            soft: rlim.rlim_cur as u64,
            hard: rlim.rlim_max as u64,
        })
    }
    #[cfg(not(unix))]
    {
        let _ = item;
        Err(unsupported())
    }
}

#[cfg(unix)]
fn resource_for(item: &str) -> Result<Resource> {
    LIMITS_BY_NAME
        .iter()
        .find(|(name, _)| *name == item)
        .map(|(_, resource)| *resource)
        .ok_or_else(|| HostcheckError::UnknownResourceItem {
            item: item.to_string(),
        })
}

#[cfg(not(unix))]
fn unsupported() -> HostcheckError {
    HostcheckError::UnsupportedPlatform {
        capability: "Resource limits (ulimit)".to_string(),
    }
}
