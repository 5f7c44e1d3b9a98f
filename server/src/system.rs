use serde::Serialize;
use sysinfo::{CpuRefreshKind, RefreshKind, System};

const UNKNOWN: &str = "unknown";

/// Facts about the host, read fresh on every call.
///
/// Lookups are best effort: anything the host refuses to tell us is reported
/// as `"unknown"` (or a single cpu) instead of failing the request.
#[derive(Debug, Clone, Serialize)]
pub struct SystemInfo {
    pub hostname: String,
    pub platform: String,
    pub platform_version: String,
    pub architecture: String,
    pub cpu_count: usize,
    pub rust_version: String,
}

impl SystemInfo {
    pub fn snapshot() -> Self {
        Self {
            hostname: System::host_name().unwrap_or_else(|| {
                tracing::warn!("unable to read hostname");
                UNKNOWN.into()
            }),
            platform: platform().into(),
            platform_version: System::kernel_version().unwrap_or_else(|| {
                tracing::warn!("unable to read kernel version");
                UNKNOWN.into()
            }),
            architecture: architecture(),
            cpu_count: cpu_count(),
            rust_version: env!("RUSTC_VERSION").into(),
        }
    }
}

fn platform() -> &'static str {
    match std::env::consts::OS {
        "linux" => "Linux",
        "macos" => "Darwin",
        "windows" => "Windows",
        "freebsd" => "FreeBSD",
        other => other,
    }
}

/// The host's machine type (`uname -m`), which can differ from the target the binary was built for.
fn architecture() -> String {
    match System::cpu_arch() {
        arch if arch.is_empty() || arch == UNKNOWN => {
            tracing::warn!("unable to read cpu architecture, using build target");
            std::env::consts::ARCH.into()
        }
        arch => arch,
    }
}

fn cpu_count() -> usize {
    let system =
        System::new_with_specifics(RefreshKind::nothing().with_cpu(CpuRefreshKind::nothing()));

    match system.cpus().len() {
        0 => {
            tracing::warn!("unable to count cpus, assuming 1");
            1
        }
        n => n,
    }
}
