use std::error::Error;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

use clap::Parser;
use escape_time_explorer::{
    ExplorerConfig, ExplorerController, FilePresenterPort, FractalKinds, PixelBuffer,
    PngFilePresenter, PpmFilePresenter, ProgressLogger,
};
use log::info;

/// Renders an escape-time fractal, optionally zooming in on a sequence of
/// clicked pixels, and saves the result.
///
/// Example:
///   escape_time_explorer --fractal "burning ship" --zoom 200,260 --output ship.png
#[derive(Parser, Debug)]
#[command(name = "escape_time_explorer", version, about)]
struct Cli {
    /// Mandelbrot, Tricorn or Burning Ship
    #[arg(long, default_value_t = FractalKinds::default())]
    fractal: FractalKinds,

    /// Width and height of the square image in pixels
    #[arg(long, default_value_t = ExplorerConfig::default().display_size)]
    size: u32,

    /// Pixel to recenter on and zoom into, as X,Y; repeat to zoom further
    #[arg(long = "zoom", value_name = "X,Y")]
    zooms: Vec<Click>,

    /// Render threads (defaults to one per core)
    #[arg(long)]
    threads: Option<usize>,

    /// Output file; a .ppm extension writes PPM, anything else PNG
    #[arg(long, default_value = "output/escape_time.png")]
    output: PathBuf,

    /// More log output (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Click {
    x: u32,
    y: u32,
}

impl FromStr for Click {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| format!("expected X,Y but got {:?}", s))?;
        let parse = |v: &str| {
            v.trim()
                .parse::<u32>()
                .map_err(|err| format!("invalid coordinate {:?}: {}", v, err))
        };

        Ok(Self {
            x: parse(x)?,
            y: parse(y)?,
        })
    }
}

fn default_log_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

fn is_ppm(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("ppm"))
}

fn save(buffer: &PixelBuffer, output: &Path) -> std::io::Result<PathBuf> {
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    if is_ppm(output) {
        PpmFilePresenter::new().present(buffer, output)
    } else {
        PngFilePresenter::new().present(buffer, output)
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_log_filter(cli.verbose)),
    )
    .init();

    let config = ExplorerConfig {
        display_size: cli.size,
        threads: cli.threads,
        fractal: cli.fractal,
        ..ExplorerConfig::default()
    };

    let sink = Arc::new(ProgressLogger::new(config.display_size));
    let mut controller = ExplorerController::new(config, sink)?;

    info!("rendering {} at {}x{}", cli.fractal, cli.size, cli.size);
    controller.draw()?.wait()?;

    for click in &cli.zooms {
        controller.click(click.x, click.y)?.wait()?;
        info!("zoomed to {:?}", controller.viewport());
    }

    let written = save(&controller.snapshot(), &cli.output)?;
    info!("saved to {}", written.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["escape_time_explorer"]).unwrap();

        assert_eq!(cli.fractal, FractalKinds::Mandelbrot);
        assert_eq!(cli.size, 400);
        assert!(cli.zooms.is_empty());
        assert_eq!(cli.threads, None);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_parses_fractal_and_repeated_zooms() {
        let cli = Cli::try_parse_from([
            "escape_time_explorer",
            "--fractal",
            "burning-ship",
            "--zoom",
            "10,20",
            "--zoom",
            "3, 4",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.fractal, FractalKinds::BurningShip);
        assert_eq!(cli.zooms, vec![Click { x: 10, y: 20 }, Click { x: 3, y: 4 }]);
        assert_eq!(default_log_filter(cli.verbose), "trace");
    }

    #[test]
    fn test_rejects_unknown_fractal_and_bad_click() {
        assert!(Cli::try_parse_from(["escape_time_explorer", "--fractal", "julia"]).is_err());
        assert!("12".parse::<Click>().is_err());
        assert!("-1,2".parse::<Click>().is_err());
    }

    #[test]
    fn test_output_format_follows_extension() {
        assert!(is_ppm(Path::new("out/image.ppm")));
        assert!(is_ppm(Path::new("IMAGE.PPM")));
        assert!(!is_ppm(Path::new("image.png")));
        assert!(!is_ppm(Path::new("image")));
    }
}
