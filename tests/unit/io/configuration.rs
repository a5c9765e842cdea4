//! Tests for collage defaults and configuration validation

#[cfg(test)]
mod tests {
    use gridcollage::CollageError;
    use gridcollage::io::configuration::{
        CollageConfig, DEFAULT_MIXED_OUTPUT, DEFAULT_PLACEMENT_ATTEMPTS, SUPPORTED_EXTENSIONS,
    };
    use gridcollage::spatial::CellSize;
    use std::path::PathBuf;

    fn parameter_of(result: Result<(), CollageError>) -> Option<&'static str> {
        match result {
            Err(CollageError::InvalidParameter { parameter, .. }) => Some(parameter),
            _ => None,
        }
    }

    // Tests the defaults describe the 14x11 grid of 460x215 cells
    // Verified by changing a default constant
    #[test]
    fn test_defaults() {
        let config = CollageConfig::default();

        assert_eq!((config.rows, config.cols), (14, 11));
        assert_eq!(config.cell, CellSize::new(460, 215));
        assert_eq!(config.large_blocks, 8);
        assert_eq!(config.placement_attempts, DEFAULT_PLACEMENT_ATTEMPTS);
        assert_eq!(config.quality, 90);
        assert!(config.shuffle);
        assert_eq!(config.seed, None);
        assert_eq!(config.output, PathBuf::from(DEFAULT_MIXED_OUTPUT));
        assert_eq!(config.total_cells(), 154);
        assert_eq!(config.canvas_size().ok(), Some((5060, 3010)));
        assert_eq!(SUPPORTED_EXTENSIONS.len(), 5);
    }

    // Tests the default configuration validates for both builders
    // Verified by requiring a seed
    #[test]
    fn test_defaults_validate() {
        let config = CollageConfig::default();

        assert!(config.validate().is_ok());
        let quota = config.validate_mixed().unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(quota.needed, 130);
    }

    // Tests each invalid field is named in the error
    // Verified by reporting every failure as the grid
    #[test]
    fn test_invalid_fields_named() {
        let base = CollageConfig::default();

        let zero_rows = CollageConfig { rows: 0, ..base.clone() };
        let zero_cols = CollageConfig { cols: 0, ..base.clone() };
        let flat_cell = CollageConfig {
            cell: CellSize::new(10, 0),
            ..base.clone()
        };
        let no_quality = CollageConfig {
            quality: 0,
            ..base.clone()
        };
        let huge_quality = CollageConfig {
            quality: 101,
            ..base.clone()
        };

        assert_eq!(parameter_of(zero_rows.validate()), Some("rows"));
        assert_eq!(parameter_of(zero_cols.validate()), Some("cols"));
        assert_eq!(parameter_of(flat_cell.validate()), Some("cell_size"));
        assert_eq!(parameter_of(no_quality.validate()), Some("quality"));
        assert_eq!(parameter_of(huge_quality.validate()), Some("quality"));
    }

    // Tests canvases beyond u32 pixels are rejected
    // Verified by computing the canvas with wrapping arithmetic
    #[test]
    fn test_canvas_overflow_rejected() {
        let config = CollageConfig {
            cols: 100_000,
            cell: CellSize::new(100_000, 1),
            ..CollageConfig::default()
        };

        assert!(config.canvas_size().is_err());
        assert_eq!(parameter_of(config.validate()), Some("grid"));
    }

    // Tests mixed validation checks the retry budget and block count
    // Verified by validating only the shared settings
    #[test]
    fn test_mixed_validation() {
        let no_attempts = CollageConfig {
            placement_attempts: 0,
            ..CollageConfig::default()
        };
        let crowded = CollageConfig {
            rows: 2,
            cols: 2,
            large_blocks: 2,
            ..CollageConfig::default()
        };

        assert_eq!(
            parameter_of(no_attempts.validate_mixed().map(|_| ())),
            Some("placement_attempts")
        );
        assert_eq!(
            parameter_of(crowded.validate_mixed().map(|_| ())),
            Some("large_blocks")
        );
        assert!(crowded.validate().is_ok());
    }
}
