use clap::Parser;
use rotext::interop::view_rgb_mut;
use rotext::lowlevel::Interpolation;
use rotext::{
    BitmapFont, BorderPolicy, FontFace, LineStyle, Point2i, Rect, RenderConfig,
    RotatedTextRenderer, TextStyle,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const SCHEMA_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.schema.json"));
const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json"));

#[derive(Parser, Debug)]
#[command(author, version, about = "Draw rotated text labels onto an image (JSON config driven)")]
struct Cli {
    /// Path to the JSON configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "config.json")]
    config: PathBuf,
    /// Print the JSON schema and exit.
    #[arg(long)]
    print_schema: bool,
    /// Print an example config and exit.
    #[arg(long)]
    print_example: bool,
    /// Enable tracing output.
    #[arg(long)]
    trace: bool,
}

#[derive(Debug, Deserialize, Default, Clone, Copy)]
#[serde(rename_all = "snake_case")]
enum InterpolationConfig {
    #[default]
    Bilinear,
    Nearest,
}

impl From<InterpolationConfig> for Interpolation {
    fn from(value: InterpolationConfig) -> Self {
        match value {
            InterpolationConfig::Bilinear => Interpolation::Bilinear,
            InterpolationConfig::Nearest => Interpolation::Nearest,
        }
    }
}

#[derive(Debug, Deserialize, Default, Clone, Copy)]
#[serde(rename_all = "snake_case")]
enum BorderConfig {
    #[default]
    Replicate,
    Fill,
}

impl From<BorderConfig> for BorderPolicy {
    fn from(value: BorderConfig) -> Self {
        match value {
            BorderConfig::Replicate => BorderPolicy::Replicate,
            BorderConfig::Fill => BorderPolicy::Fill,
        }
    }
}

#[derive(Debug, Deserialize, Default, Clone, Copy)]
#[serde(rename_all = "snake_case")]
enum FontConfig {
    #[default]
    Plain,
    Bold,
}

impl From<FontConfig> for FontFace {
    fn from(value: FontConfig) -> Self {
        match value {
            FontConfig::Plain => FontFace::Plain,
            FontConfig::Bold => FontFace::Bold,
        }
    }
}

#[derive(Debug, Deserialize, Default, Clone, Copy)]
#[serde(rename_all = "snake_case")]
enum LineStyleConfig {
    Four,
    #[default]
    Eight,
    AntiAliased,
}

impl From<LineStyleConfig> for LineStyle {
    fn from(value: LineStyleConfig) -> Self {
        match value {
            LineStyleConfig::Four => LineStyle::Four,
            LineStyleConfig::Eight => LineStyle::Eight,
            LineStyleConfig::AntiAliased => LineStyle::AntiAliased,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct RenderConfigJson {
    interpolation: InterpolationConfig,
    border: BorderConfig,
    parallel: bool,
}

impl From<&RenderConfigJson> for RenderConfig {
    fn from(value: &RenderConfigJson) -> Self {
        Self {
            interpolation: value.interpolation.into(),
            border: value.border.into(),
            parallel: value.parallel,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct CanvasConfig {
    width: u32,
    height: u32,
    background: [u8; 3],
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            background: [0, 0, 0],
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct LabelConfig {
    text: String,
    x: i32,
    y: i32,
    angle_deg: f64,
    scale: f64,
    thickness: u32,
    color: [u8; 3],
    font: FontConfig,
    line_style: LineStyleConfig,
}

impl Default for LabelConfig {
    fn default() -> Self {
        let style = TextStyle::default();
        Self {
            text: String::new(),
            x: 0,
            y: 0,
            angle_deg: 0.0,
            scale: style.scale,
            thickness: style.thickness,
            color: [255, 255, 255],
            font: FontConfig::Plain,
            line_style: LineStyleConfig::Eight,
        }
    }
}

impl LabelConfig {
    fn style(&self) -> TextStyle {
        TextStyle {
            font: self.font.into(),
            scale: self.scale,
            thickness: self.thickness,
            line_style: self.line_style.into(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct Config {
    image_path: Option<String>,
    canvas: CanvasConfig,
    output_path: String,
    report_path: Option<String>,
    render: RenderConfigJson,
    labels: Vec<LabelConfig>,
}

#[derive(Debug, Serialize)]
struct RegionRecord {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
}

impl From<Rect> for RegionRecord {
    fn from(value: Rect) -> Self {
        Self {
            x: value.x,
            y: value.y,
            width: value.width,
            height: value.height,
        }
    }
}

#[derive(Debug, Serialize)]
struct LabelRecord {
    text: String,
    angle_deg: f64,
    dest_region: Option<RegionRecord>,
    written: Option<RegionRecord>,
}

#[derive(Debug, Serialize)]
struct Report {
    width: u32,
    height: u32,
    labels: Vec<LabelRecord>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env().add_directive("rotext=debug".parse()?))
            .with_target(false)
            .init();
    }

    if cli.print_schema {
        println!("{SCHEMA_JSON}");
        return Ok(());
    }
    if cli.print_example {
        println!("{EXAMPLE_JSON}");
        return Ok(());
    }

    let config_text = fs::read_to_string(&cli.config)?;
    let config: Config = serde_json::from_str(&config_text)?;
    if config.output_path.is_empty() {
        return Err("output_path must be set in the config".into());
    }

    let mut image = match &config.image_path {
        Some(path) => image::open(path)?.to_rgb8(),
        None => {
            if config.canvas.width == 0 || config.canvas.height == 0 {
                return Err("canvas width and height must be at least 1".into());
            }
            image::RgbImage::from_pixel(
                config.canvas.width,
                config.canvas.height,
                image::Rgb(config.canvas.background),
            )
        }
    };
    let (width, height) = image.dimensions();
    tracing::info!(width, height, labels = config.labels.len(), "rendering labels");

    if config.render.parallel && !cfg!(feature = "rayon") {
        eprintln!("warning: render.parallel ignored (built without the rayon feature)");
    }

    let renderer = RotatedTextRenderer::new(BitmapFont).with_config((&config.render).into());
    let mut records = Vec::with_capacity(config.labels.len());
    {
        let mut view = view_rgb_mut(&mut image)?;
        for label in &config.labels {
            let anchor = Point2i::new(label.x, label.y);
            let style = label.style();
            let layout = renderer.layout(
                &label.text,
                anchor,
                label.angle_deg,
                &style,
                (view.width(), view.height()),
            )?;
            renderer.draw(
                &mut view,
                &label.text,
                anchor,
                label.angle_deg,
                &style,
                label.color,
            )?;
            records.push(LabelRecord {
                text: label.text.clone(),
                angle_deg: label.angle_deg,
                dest_region: layout.map(|l| l.dest_region().into()),
                written: layout
                    .and_then(|l| l.composite_region(view.width(), view.height()))
                    .map(RegionRecord::from),
            });
        }
    }

    image.save(&config.output_path)?;

    let report = Report {
        width,
        height,
        labels: records,
    };
    let json = serde_json::to_string_pretty(&report)?;
    match config.report_path {
        Some(path) => fs::write(path, json)?,
        None => println!("{json}"),
    }

    Ok(())
}
