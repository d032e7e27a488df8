//! Host platform resolution.
//!
//! The architecture, operating system, and classpath separator are resolved
//! once at startup into a [`HostConfig`] that callers thread by reference,
//! so tests and cross-builds can override the host without touching ambient
//! process state.

use std::path::Path;

use crate::error::ConfigError;

/// CPU architecture a build targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arch {
    /// 64-bit x86.
    X64,
    /// 64-bit ARM.
    Arm64,
}

impl Arch {
    /// Parses an architecture name.
    ///
    /// Accepts both the canonical names used in artifact classifiers
    /// (`x64`, `arm64`) and the raw machine names reported by the
    /// respective platforms (`AMD64`, `x86_64`, `aarch64`).
    pub fn from_name(name: &str) -> Result<Self, ConfigError> {
        match name {
            "x64" | "AMD64" | "x86_64" => Ok(Arch::X64),
            "arm64" | "aarch64" => Ok(Arch::Arm64),
            other => Err(ConfigError::UnknownArch(other.to_string())),
        }
    }

    /// Detects the architecture of the current process.
    pub fn detect() -> Result<Self, ConfigError> {
        Arch::from_name(std::env::consts::ARCH)
    }

    /// The canonical name used in classifiers and output paths.
    pub fn name(self) -> &'static str {
        match self {
            Arch::X64 => "x64",
            Arch::Arm64 => "arm64",
        }
    }
}

/// Operating system a build targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Os {
    /// Microsoft Windows.
    Windows,
    /// Apple macOS.
    Macos,
    /// Linux.
    Linux,
}

impl Os {
    /// Parses an operating system name.
    ///
    /// Accepts the canonical names (`windows`, `macos`, `linux`) and the
    /// platform-reported spellings (`Windows`, `Darwin`, `Linux`).
    pub fn from_name(name: &str) -> Result<Self, ConfigError> {
        match name {
            "windows" | "Windows" => Ok(Os::Windows),
            "macos" | "Darwin" => Ok(Os::Macos),
            "linux" | "Linux" => Ok(Os::Linux),
            other => Err(ConfigError::UnknownOs(other.to_string())),
        }
    }

    /// Detects the operating system of the current process.
    pub fn detect() -> Result<Self, ConfigError> {
        Os::from_name(std::env::consts::OS)
    }

    /// The canonical name used in classifiers and output paths.
    pub fn name(self) -> &'static str {
        match self {
            Os::Windows => "windows",
            Os::Macos => "macos",
            Os::Linux => "linux",
        }
    }
}

/// The host platform, resolved once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostConfig {
    /// Target operating system.
    pub os: Os,
    /// Target CPU architecture.
    pub arch: Arch,
}

impl HostConfig {
    /// Resolves the host configuration from optional overrides.
    ///
    /// Each override, if present, must name a recognized value; otherwise
    /// the corresponding property is detected from the running process.
    pub fn resolve(
        arch_override: Option<&str>,
        os_override: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let arch = match arch_override {
            Some(name) => Arch::from_name(name)?,
            None => Arch::detect()?,
        };
        let os = match os_override {
            Some(name) => Os::from_name(name)?,
            None => Os::detect()?,
        };
        Ok(HostConfig { os, arch })
    }

    /// The separator used between classpath entries on this platform.
    pub fn classpath_separator(&self) -> char {
        match self.os {
            Os::Windows => ';',
            Os::Macos | Os::Linux => ':',
        }
    }

    /// Joins path entries into a single classpath string.
    pub fn classpath_join<P: AsRef<Path>>(&self, entries: &[P]) -> String {
        let sep = self.classpath_separator().to_string();
        entries
            .iter()
            .map(|p| p.as_ref().to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join(&sep)
    }

    /// The Maven launcher name on this platform.
    pub fn maven_command(&self) -> &'static str {
        match self.os {
            Os::Windows => "mvn.cmd",
            Os::Macos | Os::Linux => "mvn",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn arch_from_canonical_names() {
        assert_eq!(Arch::from_name("x64").unwrap(), Arch::X64);
        assert_eq!(Arch::from_name("arm64").unwrap(), Arch::Arm64);
    }

    #[test]
    fn arch_from_machine_names() {
        assert_eq!(Arch::from_name("AMD64").unwrap(), Arch::X64);
        assert_eq!(Arch::from_name("x86_64").unwrap(), Arch::X64);
        assert_eq!(Arch::from_name("aarch64").unwrap(), Arch::Arm64);
    }

    #[test]
    fn arch_unknown_errors() {
        let err = Arch::from_name("sparc").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownArch(_)));
    }

    #[test]
    fn os_from_names() {
        assert_eq!(Os::from_name("windows").unwrap(), Os::Windows);
        assert_eq!(Os::from_name("Darwin").unwrap(), Os::Macos);
        assert_eq!(Os::from_name("Linux").unwrap(), Os::Linux);
        assert_eq!(Os::from_name("macos").unwrap(), Os::Macos);
    }

    #[test]
    fn os_unknown_errors() {
        let err = Os::from_name("plan9").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownOs(_)));
    }

    #[test]
    fn detect_current_host() {
        // The test host is one of the supported platforms.
        let host = HostConfig::resolve(None, None).unwrap();
        assert!(!host.arch.name().is_empty());
        assert!(!host.os.name().is_empty());
    }

    #[test]
    fn overrides_take_precedence() {
        let host = HostConfig::resolve(Some("arm64"), Some("windows")).unwrap();
        assert_eq!(host.arch, Arch::Arm64);
        assert_eq!(host.os, Os::Windows);
    }

    #[test]
    fn classpath_separator_per_os() {
        let win = HostConfig {
            os: Os::Windows,
            arch: Arch::X64,
        };
        let lin = HostConfig {
            os: Os::Linux,
            arch: Arch::X64,
        };
        let mac = HostConfig {
            os: Os::Macos,
            arch: Arch::Arm64,
        };
        assert_eq!(win.classpath_separator(), ';');
        assert_eq!(lin.classpath_separator(), ':');
        assert_eq!(mac.classpath_separator(), ':');
    }

    #[test]
    fn classpath_join_unix() {
        let host = HostConfig {
            os: Os::Linux,
            arch: Arch::X64,
        };
        let entries = [PathBuf::from("a.jar"), PathBuf::from("b.jar")];
        assert_eq!(host.classpath_join(&entries), "a.jar:b.jar");
    }

    #[test]
    fn classpath_join_windows() {
        let host = HostConfig {
            os: Os::Windows,
            arch: Arch::X64,
        };
        let entries = ["lib\\a.jar", "lib\\b.jar"];
        assert_eq!(host.classpath_join(&entries), "lib\\a.jar;lib\\b.jar");
    }

    #[test]
    fn classpath_join_single_entry() {
        let host = HostConfig {
            os: Os::Linux,
            arch: Arch::X64,
        };
        assert_eq!(host.classpath_join(&["only.jar"]), "only.jar");
    }

    #[test]
    fn maven_command_per_os() {
        let win = HostConfig {
            os: Os::Windows,
            arch: Arch::X64,
        };
        let lin = HostConfig {
            os: Os::Linux,
            arch: Arch::X64,
        };
        assert_eq!(win.maven_command(), "mvn.cmd");
        assert_eq!(lin.maven_command(), "mvn");
    }
}
