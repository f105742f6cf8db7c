//! Per-architecture kernels and the runtime choice between them.
use std::fmt::{self, Display};
use std::sync::OnceLock;

use crate::{scalar, FormatConfig, ParseConfig, BLOCK_LEN, MAC_STR_LEN};

#[cfg(target_arch = "x86_64")]
mod x86_64;

#[cfg(all(target_arch = "aarch64", target_endian = "little"))]
mod aarch64;

/// An instruction set the kernels can run on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Backend {
    /// x86_64, 256-bit registers. Formatting uses the SSSE3 kernel.
    Avx2,
    /// x86_64, 128-bit registers.
    Ssse3,
    /// aarch64, 128-bit registers.
    Neon,
    /// One byte at a time. Defines the result of every other backend.
    Scalar,
}

impl Backend {
    /// Every backend, fastest first.
    pub const ALL: [Backend; 4] = [Backend::Avx2, Backend::Ssse3, Backend::Neon, Backend::Scalar];

    /// The fastest backend the running CPU supports. Detected once per
    /// process.
    pub fn active() -> Backend {
        static ACTIVE: OnceLock<Backend> = OnceLock::new();

        *ACTIVE.get_or_init(|| {
            let backend = Self::supported().next().unwrap_or(Backend::Scalar);
            log::debug!(
                "macad: selected {backend} kernels (detected features: {})",
                detected_features()
            );
            backend
        })
    }

    /// Backends usable on the running CPU, fastest first. Always ends with
    /// [`Backend::Scalar`].
    pub fn supported() -> impl Iterator<Item = Backend> {
        Self::ALL.into_iter().filter(|backend| backend.is_supported())
    }

    pub fn is_supported(self) -> bool {
        match self {
            #[cfg(target_arch = "x86_64")]
            Backend::Avx2 => is_x86_feature_detected!("avx2"),
            #[cfg(target_arch = "x86_64")]
            Backend::Ssse3 => is_x86_feature_detected!("ssse3"),
            #[cfg(all(target_arch = "aarch64", target_endian = "little"))]
            Backend::Neon => std::arch::is_aarch64_feature_detected!("neon"),
            Backend::Scalar => true,
            _ => false,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Backend::Avx2 => "avx2",
            Backend::Ssse3 => "ssse3",
            Backend::Neon => "neon",
            Backend::Scalar => "scalar",
        }
    }

    /// Parses with this backend, or with the scalar kernel when the running
    /// CPU doesn't support it.
    pub fn parse_block(self, block: &[u8; BLOCK_LEN], config: &ParseConfig) -> Option<u64> {
        self.or_scalar().parse_supported(block, config)
    }

    /// Formats with this backend, or with the scalar kernel when the running
    /// CPU doesn't support it.
    pub fn encode(self, value: u64, config: &FormatConfig) -> [u8; MAC_STR_LEN] {
        let mut out = [0; MAC_STR_LEN];
        self.or_scalar().format_supported(value, &mut out, config);
        out
    }

    fn or_scalar(self) -> Backend {
        if self.is_supported() {
            self
        } else {
            Backend::Scalar
        }
    }

    /// `self` must be supported by the running CPU.
    #[inline]
    pub(crate) fn parse_supported(self, block: &[u8; BLOCK_LEN], config: &ParseConfig) -> Option<u64> {
        match self {
            // SAFETY: only reached for backends the CPU reports
            #[cfg(target_arch = "x86_64")]
            Backend::Avx2 => unsafe { x86_64::parse_avx2(block, config) },
            #[cfg(target_arch = "x86_64")]
            Backend::Ssse3 => unsafe { x86_64::parse_ssse3(block, config) },
            #[cfg(all(target_arch = "aarch64", target_endian = "little"))]
            Backend::Neon => unsafe { aarch64::parse_neon(block, config) },
            _ => scalar::parse_block(block, config),
        }
    }

    /// `self` must be supported by the running CPU.
    #[inline]
    pub(crate) fn format_supported(
        self,
        value: u64,
        out: &mut [u8; MAC_STR_LEN],
        config: &FormatConfig,
    ) {
        match self {
            // SAFETY: only reached for backends the CPU reports, and AVX2
            // implies SSSE3
            #[cfg(target_arch = "x86_64")]
            Backend::Avx2 | Backend::Ssse3 => unsafe { x86_64::format_ssse3(value, out, config) },
            #[cfg(all(target_arch = "aarch64", target_endian = "little"))]
            Backend::Neon => unsafe { aarch64::format_neon(value, out, config) },
            _ => scalar::format_into(value, out, config),
        }
    }
}

impl Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Instruction-set extensions the kernels use that the running CPU has,
/// comma-separated, or `none`.
fn detected_features() -> String {
    let features: Vec<&str> = Backend::supported()
        .filter(|backend| *backend != Backend::Scalar)
        .map(Backend::name)
        .collect();

    if features.is_empty() {
        "none".to_owned()
    } else {
        features.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::{detected_features, Backend};

    #[test]
    fn scalar_is_always_supported() {
        assert!(Backend::Scalar.is_supported());
        assert_eq!(Backend::supported().last(), Some(Backend::Scalar));
    }

    #[test]
    fn active_backend_is_the_fastest_supported() {
        let active = Backend::active();

        assert!(active.is_supported());
        assert_eq!(Backend::supported().next(), Some(active));
        assert_eq!(Backend::active(), active);
    }

    #[test]
    fn detected_features_name_the_active_kernels() {
        let features = detected_features();
        let active = Backend::active();

        if active == Backend::Scalar {
            assert_eq!(features, "none");
        } else {
            assert!(features.starts_with(active.name()), "{features}");
        }
        assert!(!features.contains("scalar"), "{features}");

        #[cfg(target_arch = "x86_64")]
        assert_eq!(
            features.contains("ssse3"),
            is_x86_feature_detected!("ssse3"),
            "{features}"
        );
    }

    #[test]
    fn unsupported_backends_fall_back_to_scalar() {
        let mut block = [0; crate::BLOCK_LEN];
        block[..17].copy_from_slice(b"AB:CD:EF:01:23:45");

        for backend in Backend::ALL {
            assert_eq!(
                backend.parse_block(&block, &Default::default()),
                Some(0xABCDEF012345),
                "{backend}"
            );
        }
    }
}
