//! Centralized parameter validation.

use thiserror::Error;

use crate::correction::CorrectionConfig;
use crate::mapping::EngineConfig;

/// Largest k-mer that fits the 2-bit encoding in a `u64`
pub const MAX_KMER_LEN: usize = 32;

/// Upper bound on worker threads accepted from the command line
pub const MAX_THREADS: usize = 1024;

#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("k-mer length must be between 1 and {}, got {}", MAX_KMER_LEN, .0)]
    KmerLength(usize),

    #[error("window length must be at least 1, got {0}")]
    WindowLength(usize),

    #[error("minimizer frequency must be in [0, 1), got {0}")]
    Frequency(f64),

    #[error("minimum chain anchors must be at least 1")]
    ChainAnchors,

    #[error("thread count must be at most {}, got {}", MAX_THREADS, .0)]
    Threads(usize),

    #[error("batch size must be at least 1 byte")]
    BatchSize,
}

/// Check that engine parameters are usable.
///
/// # Examples
///
/// ```
/// use seq_patcher::mapping::EngineConfig;
/// use seq_patcher::utils::validation::validate_engine_config;
///
/// assert!(validate_engine_config(&EngineConfig::default()).is_ok());
///
/// let config = EngineConfig { kmer_len: 40, ..EngineConfig::default() };
/// assert!(validate_engine_config(&config).is_err());
/// ```
///
/// # Errors
///
/// Returns the first [`ValidationError`] found.
pub fn validate_engine_config(config: &EngineConfig) -> Result<(), ValidationError> {
    if !(1..=MAX_KMER_LEN).contains(&config.kmer_len) {
        return Err(ValidationError::KmerLength(config.kmer_len));
    }
    if config.window_len == 0 {
        return Err(ValidationError::WindowLength(config.window_len));
    }
    if !(0.0..1.0).contains(&config.frequency) {
        return Err(ValidationError::Frequency(config.frequency));
    }
    if config.min_chain_anchors == 0 {
        return Err(ValidationError::ChainAnchors);
    }
    Ok(())
}

/// Check that correction parameters are usable.
///
/// # Errors
///
/// Returns the first [`ValidationError`] found.
pub fn validate_correction_config(config: &CorrectionConfig) -> Result<(), ValidationError> {
    if config.threads > MAX_THREADS {
        return Err(ValidationError::Threads(config.threads));
    }
    if config.batch_bytes == 0 {
        return Err(ValidationError::BatchSize);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configs_are_valid() {
        assert!(validate_engine_config(&EngineConfig::default()).is_ok());
        assert!(validate_correction_config(&CorrectionConfig::default()).is_ok());
    }

    #[test]
    fn test_kmer_length_bounds() {
        for k in [0, 33] {
            let config = EngineConfig {
                kmer_len: k,
                ..EngineConfig::default()
            };
            assert_eq!(
                validate_engine_config(&config),
                Err(ValidationError::KmerLength(k))
            );
        }
        let config = EngineConfig {
            kmer_len: 32,
            ..EngineConfig::default()
        };
        assert!(validate_engine_config(&config).is_ok());
    }

    #[test]
    fn test_window_and_frequency() {
        let config = EngineConfig {
            window_len: 0,
            ..EngineConfig::default()
        };
        assert_eq!(
            validate_engine_config(&config),
            Err(ValidationError::WindowLength(0))
        );

        for frequency in [-0.1, 1.0, f64::NAN] {
            let config = EngineConfig {
                frequency,
                ..EngineConfig::default()
            };
            assert!(matches!(
                validate_engine_config(&config),
                Err(ValidationError::Frequency(_))
            ));
        }
    }

    #[test]
    fn test_correction_limits() {
        let config = CorrectionConfig {
            threads: MAX_THREADS + 1,
            ..CorrectionConfig::default()
        };
        assert_eq!(
            validate_correction_config(&config),
            Err(ValidationError::Threads(MAX_THREADS + 1))
        );

        let config = CorrectionConfig {
            batch_bytes: 0,
            ..CorrectionConfig::default()
        };
        assert_eq!(
            validate_correction_config(&config),
            Err(ValidationError::BatchSize)
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationError::KmerLength(40).to_string(),
            "k-mer length must be between 1 and 32, got 40"
        );
    }
}
