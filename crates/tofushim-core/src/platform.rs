use crate::error::{Result, ShimError};
use std::fmt;

/// Operating system tag used in OpenTofu release asset names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Os {
    Windows,
    Darwin,
    Linux,
}

impl Os {
    pub fn as_str(self) -> &'static str {
        match self {
            Os::Windows => "windows",
            Os::Darwin => "darwin",
            Os::Linux => "linux",
        }
    }
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// CPU architecture tag used in OpenTofu release asset names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arch {
    Amd64,
    Arm64,
    X86,
}

impl Arch {
    pub fn as_str(self) -> &'static str {
        match self {
            Arch::Amd64 => "amd64",
            Arch::Arm64 => "arm64",
            Arch::X86 => "386",
        }
    }

    /// Maps a Rust target architecture name (`std::env::consts::ARCH`)
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedPlatform` for anything other than x86_64, aarch64 or x86
    pub fn from_target_arch(arch: &str) -> Result<Self> {
        match arch {
            "x86_64" => Ok(Arch::Amd64),
            "aarch64" => Ok(Arch::Arm64),
            "x86" => Ok(Arch::X86),
            other => Err(ShimError::UnsupportedPlatform {
                arch: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Detects the host OS; any Unix-like system other than macOS is Linux
pub fn detect_os() -> Os {
    #[cfg(target_os = "windows")]
    return Os::Windows;

    #[cfg(target_os = "macos")]
    return Os::Darwin;

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    return Os::Linux;
}

pub fn detect_arch() -> Result<Arch> {
    Arch::from_target_arch(std::env::consts::ARCH)
}
