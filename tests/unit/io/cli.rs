//! Tests for argument parsing and the collage processor

#[cfg(test)]
mod tests {
    use clap::Parser;
    use gridcollage::CollageError;
    use gridcollage::io::cli::{Cli, CollageProcessor, parse_color};
    use gridcollage::io::configuration::{CollageConfig, DEFAULT_UNIFORM_OUTPUT};
    use image::{Rgb, RgbImage};
    use std::path::{Path, PathBuf};

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("gridcollage").chain(args.iter().copied()))
            .unwrap_or_else(|e| panic!("{e}"))
    }

    fn write_solid(dir: &Path, name: &str, color: [u8; 3]) {
        RgbImage::from_pixel(4, 3, Rgb(color))
            .save(dir.join(name))
            .unwrap_or_else(|e| panic!("{e}"));
    }

    fn path_arg(path: &Path) -> String {
        path.display().to_string()
    }

    // Tests the mixed command defaults match the default configuration
    // Verified by changing a CLI default
    #[test]
    fn test_mixed_defaults() {
        let cli = parse(&["mixed"]);

        assert!(!cli.quiet);
        assert_eq!(cli.command.input(), Path::new("images"));
        assert_eq!(cli.command.config(), CollageConfig::default());
    }

    // Tests the uniform command never requests large blocks
    // Verified by passing the default block count through
    #[test]
    fn test_uniform_config() {
        let cli = parse(&["uniform", "-r", "3", "-c", "5", "--no-shuffle", "-s", "42", "-q"]);
        let config = cli.command.config();

        assert!(cli.quiet);
        assert_eq!((config.rows, config.cols), (3, 5));
        assert_eq!(config.large_blocks, 0);
        assert!(!config.shuffle);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.output, PathBuf::from(DEFAULT_UNIFORM_OUTPUT));
    }

    // Tests mixed-only options reach the configuration
    // Verified by ignoring the attempts option
    #[test]
    fn test_mixed_options() {
        let cli = parse(&[
            "mixed", "-l", "3", "-a", "7", "-W", "100", "-H", "50", "-b", "#102030", "--quality",
            "75",
        ]);
        let config = cli.command.config();

        assert_eq!(config.large_blocks, 3);
        assert_eq!(config.placement_attempts, 7);
        assert_eq!((config.cell.width, config.cell.height), (100, 50));
        assert_eq!(config.background, [0x10, 0x20, 0x30]);
        assert_eq!(config.quality, 75);
    }

    // Tests out-of-range quality and unknown colors are rejected at parse time
    // Verified by accepting any u8 quality
    #[test]
    fn test_rejects_bad_values() {
        let args = |extra: &[&'static str]| {
            let mut all = vec!["gridcollage", "uniform"];
            all.extend_from_slice(extra);
            Cli::try_parse_from(all)
        };

        assert!(args(&["--quality", "0"]).is_err());
        assert!(args(&["--quality", "101"]).is_err());
        assert!(args(&["-b", "chartreuse"]).is_err());
        assert!(Cli::try_parse_from(["gridcollage"]).is_err());
    }

    // Tests color names and hex values, with or without '#'
    // Verified by parsing channels in reverse order
    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("white"), Ok([255, 255, 255]));
        assert_eq!(parse_color("BLACK"), Ok([0, 0, 0]));
        assert_eq!(parse_color("grey"), Ok([128, 128, 128]));
        assert_eq!(parse_color("#ff8000"), Ok([255, 128, 0]));
        assert_eq!(parse_color("0A0b0C"), Ok([10, 11, 12]));
        assert!(parse_color("#fff").is_err());
        assert!(parse_color("zzzzzz").is_err());
        assert!(parse_color("#ff80001").is_err());
    }

    // Tests a uniform run writes a collage with blank cells in the background color
    // Verified by skipping padding for short pools
    #[test]
    fn test_process_uniform() {
        let dir = tempfile::tempdir().unwrap_or_else(|e| panic!("{e}"));
        let input = dir.path().join("images");
        std::fs::create_dir(&input).unwrap_or_else(|e| panic!("{e}"));
        write_solid(&input, "a.png", [255, 0, 0]);
        write_solid(&input, "b.png", [0, 255, 0]);
        write_solid(&input, "c.png", [0, 0, 255]);
        let output = dir.path().join("out").join("grid.png");

        let cli = parse(&[
            "-q",
            "uniform",
            "-i",
            &path_arg(&input),
            "-o",
            &path_arg(&output),
            "-r",
            "2",
            "-c",
            "2",
            "-W",
            "4",
            "-H",
            "3",
            "-b",
            "black",
            "--no-shuffle",
        ]);
        let written = CollageProcessor::new(cli)
            .process()
            .unwrap_or_else(|e| panic!("{e}"));

        assert_eq!(written, output);
        let collage = image::open(&output)
            .unwrap_or_else(|e| panic!("{e}"))
            .to_rgb8();
        assert_eq!(collage.dimensions(), (8, 6));
        assert_eq!(collage.get_pixel(1, 1).0, [255, 0, 0]);
        assert_eq!(collage.get_pixel(5, 1).0, [0, 255, 0]);
        assert_eq!(collage.get_pixel(1, 4).0, [0, 0, 255]);
        assert_eq!(collage.get_pixel(6, 4).0, [0, 0, 0]);
    }

    // Tests a short pool fails the mixed layout before anything is written
    // Verified by padding the mixed pool with blanks
    #[test]
    fn test_process_mixed_insufficient() {
        let dir = tempfile::tempdir().unwrap_or_else(|e| panic!("{e}"));
        write_solid(dir.path(), "a.png", [1, 1, 1]);
        write_solid(dir.path(), "b.png", [2, 2, 2]);
        let output = dir.path().join("mixed.jpg");

        let cli = parse(&[
            "-q",
            "mixed",
            "-i",
            &path_arg(dir.path()),
            "-o",
            &path_arg(&output),
            "-r",
            "2",
            "-c",
            "3",
            "-l",
            "1",
        ]);

        match CollageProcessor::new(cli).process() {
            Err(CollageError::InsufficientImages { available, needed }) => {
                assert_eq!((available, needed), (2, 3));
            }
            other => panic!("Expected InsufficientImages, got {other:?}"),
        }
        assert!(!output.exists());
    }

    // Tests an unwritable output extension fails before the input is read
    // Verified by checking the extension only when saving
    #[test]
    fn test_process_bad_extension_first() {
        let dir = tempfile::tempdir().unwrap_or_else(|e| panic!("{e}"));
        let missing_input = dir.path().join("absent");
        let output = dir.path().join("collage.xyz");

        let cli = parse(&[
            "uniform",
            "-i",
            &path_arg(&missing_input),
            "-o",
            &path_arg(&output),
        ]);
        let result = CollageProcessor::new(cli).process();

        assert!(result.is_err_and(|e| e.is_configuration()));
    }
}
