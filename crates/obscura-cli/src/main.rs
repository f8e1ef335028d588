//! Command-line consumer for the simulation core.
//!
//! Renders one simulated frame as a text report or JSON. A slider UI and
//! this binary differ only in how they fill in `CameraSettings`; both
//! feed the same pure core.

mod presets;

use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use obscura_core::{
    CameraSettings, ModelTuning, Simulation, WhiteBalance, simulate,
};

#[derive(Parser)]
#[command(name = "obscura")]
#[command(version, about = "Photography simulator — exposure playground core", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate one frame and print the result
    Simulate {
        /// Scene preset to start from (see `obscura scenes`)
        #[arg(long, value_name = "NAME")]
        scene: Option<String>,

        /// Aperture f-number
        #[arg(short = 'a', long, value_name = "F_NUMBER")]
        aperture: Option<f32>,

        /// Shutter speed in seconds, or a fraction like 1/125
        #[arg(short = 's', long, value_name = "SECONDS")]
        shutter: Option<String>,

        /// ISO sensitivity
        #[arg(short = 'i', long, value_name = "ISO")]
        iso: Option<u32>,

        /// White balance: 'auto' or a Kelvin value
        #[arg(short = 'w', long, value_name = "WB")]
        white_balance: Option<String>,

        /// Focal length in millimeters
        #[arg(short = 'f', long, value_name = "MM")]
        focal_length: Option<f32>,

        /// Key light intensity, 0-100 percent
        #[arg(long, value_name = "PERCENT")]
        light_intensity: Option<f32>,

        /// Key light angle in degrees above the horizon
        #[arg(long, value_name = "DEGREES")]
        light_angle: Option<f32>,

        /// Tuning override file (TOML, partial overrides allowed)
        #[arg(short = 't', long, value_name = "FILE")]
        tuning: Option<PathBuf>,

        /// Emit JSON instead of the text report
        #[arg(long)]
        json: bool,
    },

    /// List the scene presets
    Scenes,

    /// Print the default tuning as TOML, for saving and editing
    Tuning,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("unknown scene '{0}' (run `obscura scenes` for the list)")]
    UnknownScene(String),

    #[error("invalid shutter speed '{0}' (use seconds or a fraction like 1/125)")]
    InvalidShutter(String),

    #[error("invalid white balance '{0}' (use 'auto' or a Kelvin value)")]
    InvalidWhiteBalance(String),

    #[error("failed to read tuning file {path}: {source}")]
    ReadTuning {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse tuning file {path}: {source}")]
    ParseTuning {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error(transparent)]
    Simulation(#[from] obscura_core::SimulationError),

    #[error("failed to encode output: {0}")]
    EncodeJson(#[from] serde_json::Error),

    #[error("failed to encode tuning: {0}")]
    EncodeToml(#[from] toml::ser::Error),
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "obscura=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Simulate {
            scene,
            aperture,
            shutter,
            iso,
            white_balance,
            focal_length,
            light_intensity,
            light_angle,
            tuning,
            json,
        } => cmd_simulate(
            scene,
            aperture,
            shutter,
            iso,
            white_balance,
            focal_length,
            light_intensity,
            light_angle,
            tuning,
            json,
        ),
        Commands::Scenes => cmd_scenes(),
        Commands::Tuning => cmd_tuning(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_simulate(
    scene: Option<String>,
    aperture: Option<f32>,
    shutter: Option<String>,
    iso: Option<u32>,
    white_balance: Option<String>,
    focal_length: Option<f32>,
    light_intensity: Option<f32>,
    light_angle: Option<f32>,
    tuning_path: Option<PathBuf>,
    json: bool,
) -> Result<(), CliError> {
    let mut settings = match &scene {
        Some(name) => {
            presets::find(name)
                .ok_or_else(|| CliError::UnknownScene(name.clone()))?
                .settings
        }
        None => CameraSettings::default(),
    };

    // Flags override the preset base field by field.
    if let Some(a) = aperture {
        settings.aperture = a;
    }
    if let Some(s) = &shutter {
        settings.shutter_speed_s = parse_shutter(s)?;
    }
    if let Some(i) = iso {
        settings.iso = i;
    }
    if let Some(wb) = &white_balance {
        settings.white_balance = parse_white_balance(wb)?;
    }
    if let Some(f) = focal_length {
        settings.focal_length_mm = f;
    }
    if let Some(l) = light_intensity {
        settings.light_intensity_percent = l;
    }
    if let Some(l) = light_angle {
        settings.light_angle_degrees = l;
    }

    let tuning = load_tuning(tuning_path)?;
    debug!(?settings, "simulating");
    let simulation = simulate(&settings, &tuning)?;

    if json {
        print_json(&settings, &simulation)?;
    } else {
        print_report(scene.as_deref(), &settings, &simulation);
    }
    Ok(())
}

fn cmd_scenes() -> Result<(), CliError> {
    for preset in presets::SCENES {
        let s = &preset.settings;
        println!("{:<10} {}", preset.name, preset.description);
        println!(
            "{:<10}   f/{}, {}, ISO {}, {}, {}mm",
            "",
            s.aperture,
            format_shutter(s.shutter_speed_s),
            s.iso,
            s.white_balance,
            s.focal_length_mm,
        );
    }
    Ok(())
}

fn cmd_tuning() -> Result<(), CliError> {
    print!("{}", toml::to_string_pretty(&ModelTuning::default())?);
    Ok(())
}

fn load_tuning(path: Option<PathBuf>) -> Result<ModelTuning, CliError> {
    let Some(path) = path else {
        return Ok(ModelTuning::default());
    };
    let text = fs::read_to_string(&path).map_err(|source| CliError::ReadTuning {
        path: path.clone(),
        source,
    })?;
    let tuning =
        toml::from_str(&text).map_err(|source| CliError::ParseTuning { path: path.clone(), source })?;
    info!(path = %path.display(), "loaded tuning overrides");
    Ok(tuning)
}

/// Parse a shutter speed given as decimal seconds or a `1/125` fraction.
fn parse_shutter(text: &str) -> Result<f32, CliError> {
    let invalid = || CliError::InvalidShutter(text.to_string());
    let seconds = match text.split_once('/') {
        Some((num, den)) => {
            let num: f32 = num.trim().parse().map_err(|_| invalid())?;
            let den: f32 = den.trim().parse().map_err(|_| invalid())?;
            if den == 0.0 {
                return Err(invalid());
            }
            num / den
        }
        None => text.trim().parse().map_err(|_| invalid())?,
    };
    if !seconds.is_finite() || seconds <= 0.0 {
        return Err(invalid());
    }
    Ok(seconds)
}

/// Parse `auto` or a Kelvin integer (0 also means auto).
fn parse_white_balance(text: &str) -> Result<WhiteBalance, CliError> {
    if text.eq_ignore_ascii_case("auto") {
        return Ok(WhiteBalance::Auto);
    }
    let kelvin: u32 = text
        .trim()
        .trim_end_matches(['k', 'K'])
        .parse()
        .map_err(|_| CliError::InvalidWhiteBalance(text.to_string()))?;
    Ok(WhiteBalance::from_kelvin(kelvin))
}

/// Display a shutter speed the way camera bodies do.
fn format_shutter(seconds: f32) -> String {
    if seconds >= 1.0 {
        format!("{seconds}s")
    } else {
        format!("1/{}s", (1.0 / seconds).round())
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    settings: &'a CameraSettings,
    simulation: &'a Simulation,
}

fn print_json(settings: &CameraSettings, simulation: &Simulation) -> Result<(), CliError> {
    let report = JsonReport {
        settings,
        simulation,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn print_report(scene: Option<&str>, settings: &CameraSettings, simulation: &Simulation) {
    if let Some(scene) = scene {
        println!("Scene:          {scene}");
    }
    println!("Aperture:       f/{}", settings.aperture);
    println!("Shutter:        {}", format_shutter(settings.shutter_speed_s));
    println!("ISO:            {}", settings.iso);
    println!("White balance:  {}", settings.white_balance);
    println!("Focal length:   {}mm", settings.focal_length_mm);
    println!("Key light:      {}% at {}°",
        settings.light_intensity_percent, settings.light_angle_degrees);
    println!();

    let exposure = &simulation.exposure;
    let effects = &simulation.effects;
    println!("Exposure value: {:.2} EV", exposure.exposure_value);
    println!("Brightness:     {:.2}x", exposure.brightness);
    println!("DOF blur:       {:.1}px", effects.blur_px);
    println!("Motion blur:    {:.1}px", effects.motion_blur_px);
    println!("Grain:          {:.0}%", effects.grain_opacity * 100.0);
    println!("Color filter:   {}", effects.color_filter.label());
    println!("View scale:     {:.2}x", effects.view_scale);
    println!();
    println!("{}", simulation.feedback.message());
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    #[test]
    fn test_parse_shutter_accepts_fractions() {
        assert!((parse_shutter("1/125").unwrap() - 1.0 / 125.0).abs() < EPSILON);
        assert!((parse_shutter("1/4000").unwrap() - 0.00025).abs() < EPSILON);
    }

    #[test]
    fn test_parse_shutter_accepts_decimal_seconds() {
        assert!((parse_shutter("0.5").unwrap() - 0.5).abs() < EPSILON);
        assert!((parse_shutter("2").unwrap() - 2.0).abs() < EPSILON);
    }

    #[test]
    fn test_parse_shutter_rejects_garbage() {
        assert!(parse_shutter("fast").is_err());
        assert!(parse_shutter("1/0").is_err());
        assert!(parse_shutter("-1/125").is_err());
        assert!(parse_shutter("0").is_err());
    }

    #[test]
    fn test_parse_white_balance_variants() {
        assert_eq!(parse_white_balance("auto").unwrap(), WhiteBalance::Auto);
        assert_eq!(parse_white_balance("Auto").unwrap(), WhiteBalance::Auto);
        assert_eq!(parse_white_balance("0").unwrap(), WhiteBalance::Auto);
        assert_eq!(
            parse_white_balance("5500").unwrap(),
            WhiteBalance::Kelvin(5500)
        );
        assert_eq!(
            parse_white_balance("3200K").unwrap(),
            WhiteBalance::Kelvin(3200)
        );
        assert!(parse_white_balance("daylight").is_err());
    }

    #[test]
    fn test_format_shutter_round_trips_common_speeds() {
        assert_eq!(format_shutter(1.0 / 125.0), "1/125s");
        assert_eq!(format_shutter(1.0 / 4000.0), "1/4000s");
        assert_eq!(format_shutter(1.0), "1s");
        assert_eq!(format_shutter(2.0), "2s");
    }
}
