#[cfg(feature = "cairo-backend")]
use std::fs::{self, File};
#[cfg(feature = "cairo-backend")]
use std::path::PathBuf;

#[cfg(feature = "cairo-backend")]
const DEFAULT_OUTPUT_PATH: &str = "chart.png";
#[cfg(feature = "cairo-backend")]
const DEFAULT_WIDTH: f64 = 800.0;
#[cfg(feature = "cairo-backend")]
const DEFAULT_HEIGHT: f64 = 400.0;

#[cfg(feature = "cairo-backend")]
#[derive(Debug)]
struct CliArgs {
    config_path: PathBuf,
    output_path: PathBuf,
    width: f64,
    height: f64,
    device_pixel_ratio: f64,
    highlight: Option<usize>,
    log_filter: Option<String>,
}

#[cfg(feature = "cairo-backend")]
fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

#[cfg(not(feature = "cairo-backend"))]
fn main() {
    eprintln!("this tool requires feature `cairo-backend`");
    std::process::exit(1);
}

#[cfg(feature = "cairo-backend")]
fn run() -> Result<(), String> {
    use trend_chart::api::{ChartConfig, render_line_chart};
    use trend_chart::host::HeadlessHost;
    use trend_chart::render::CairoRenderer;

    let args = parse_args()?;
    let _ = trend_chart::telemetry::init_tracing_with_filter(args.log_filter.as_deref());
    let raw = fs::read_to_string(&args.config_path).map_err(|err| {
        format!(
            "failed to read config `{}`: {err}",
            args.config_path.display()
        )
    })?;
    let config = ChartConfig::from_json_str(&raw).map_err(|err| err.to_string())?;

    let renderer = CairoRenderer::new(args.width, args.height).map_err(|err| err.to_string())?;
    let host = HeadlessHost::new().with_device_pixel_ratio(args.device_pixel_ratio);
    let mut chart =
        render_line_chart(Some(renderer), host, config).map_err(|err| err.to_string())?;

    let rendered = chart.on_animation_frame().map_err(|err| err.to_string())?;
    if !rendered {
        return Err("chart did not render; check --width/--height".to_owned());
    }

    if let Some(index) = args.highlight {
        let x = chart
            .x_positions()
            .get(index)
            .copied()
            .ok_or_else(|| format!("highlight index {index} is out of range"))?;
        chart.on_pointer_move(x, args.height / 2.0);
        if chart.highlighted_index() != Some(index) {
            return Err(format!("category {index} has no data to highlight"));
        }
        chart.on_animation_frame().map_err(|err| err.to_string())?;
    }

    let (renderer, _host) = chart.into_parts();
    let mut file = File::create(&args.output_path).map_err(|err| {
        format!(
            "failed to create output `{}`: {err}",
            args.output_path.display()
        )
    })?;
    renderer
        .surface()
        .write_to_png(&mut file)
        .map_err(|err| format!("failed to write png: {err}"))?;

    println!("wrote {}", args.output_path.display());
    Ok(())
}

#[cfg(feature = "cairo-backend")]
fn parse_args() -> Result<CliArgs, String> {
    let mut config_path: Option<PathBuf> = None;
    let mut output_path = PathBuf::from(DEFAULT_OUTPUT_PATH);
    let mut width = DEFAULT_WIDTH;
    let mut height = DEFAULT_HEIGHT;
    let mut device_pixel_ratio = 1.0;
    let mut highlight: Option<usize> = None;
    let mut log_filter: Option<String> = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                config_path = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output_path = PathBuf::from(value);
            }
            "--width" => width = parse_number(args.next(), "--width")?,
            "--height" => height = parse_number(args.next(), "--height")?,
            "--dpr" => device_pixel_ratio = parse_number(args.next(), "--dpr")?,
            "--highlight" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --highlight".to_owned())?;
                highlight = Some(
                    value
                        .parse()
                        .map_err(|_| format!("invalid value for --highlight: `{value}`"))?,
                );
            }
            "--log" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --log".to_owned())?;
                log_filter = Some(value);
            }
            "-h" | "--help" => {
                print_usage();
                std::process::exit(0);
            }
            other => {
                return Err(format!("unknown argument `{other}`\n\n{}", usage_message()));
            }
        }
    }

    let config_path =
        config_path.ok_or_else(|| format!("--config is required\n\n{}", usage_message()))?;
    Ok(CliArgs {
        config_path,
        output_path,
        width,
        height,
        device_pixel_ratio,
        highlight,
        log_filter,
    })
}

#[cfg(feature = "cairo-backend")]
fn parse_number(value: Option<String>, flag: &str) -> Result<f64, String> {
    let value = value.ok_or_else(|| format!("missing value for {flag}"))?;
    let parsed: f64 = value
        .parse()
        .map_err(|_| format!("invalid value for {flag}: `{value}`"))?;
    if !parsed.is_finite() || parsed <= 0.0 {
        return Err(format!("{flag} must be finite and > 0"));
    }
    Ok(parsed)
}

#[cfg(feature = "cairo-backend")]
fn print_usage() {
    println!("{}", usage_message());
}

#[cfg(feature = "cairo-backend")]
fn usage_message() -> String {
    format!(
        "Usage: cargo run --features cairo-backend --bin render_chart_png -- --config <path> [options]\n\nOptions:\n  --config <path>      Chart config JSON (labels, datasets, padding, yRange, yTicks)\n  --output <path>      PNG output path (default: {DEFAULT_OUTPUT_PATH})\n  --width <px>         Canvas CSS width (default: {DEFAULT_WIDTH})\n  --height <px>        Canvas CSS height (default: {DEFAULT_HEIGHT})\n  --dpr <ratio>        Device pixel ratio (default: 1)\n  --highlight <index>  Draw the crosshair on a category\n  --log <filter>       tracing filter, needs feature `telemetry` (default: RUST_LOG)\n  -h, --help           Show this message"
    )
}

#[cfg(all(test, feature = "cairo-backend"))]
mod tests {
    use super::parse_number;

    #[test]
    fn parse_number_accepts_positive_values() {
        assert_eq!(parse_number(Some("2.5".to_owned()), "--dpr"), Ok(2.5));
    }

    #[test]
    fn parse_number_rejects_missing_and_invalid_values() {
        assert!(parse_number(None, "--width").is_err());
        assert!(parse_number(Some("wide".to_owned()), "--width").is_err());
        assert!(parse_number(Some("0".to_owned()), "--height").is_err());
        assert!(parse_number(Some("inf".to_owned()), "--height").is_err());
    }
}
