//! Build script for segtherm-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates thermometer.toml at compile time
//! - Generates the `CONFIG` constant compiled into the firmware

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use segtherm_core::config::{ConfigError, ThermometerConfig};
use segtherm_core::reading::TemperatureUnit;

fn main() {
    setup_linker();
    let config = load_config();
    generate_config(&config);
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Load and validate thermometer.toml
fn load_config() -> ThermometerConfig {
    println!("cargo:rerun-if-changed=thermometer.toml");

    let config_path = Path::new("thermometer.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: thermometer.toml not found!                              ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a thermometer.toml configuration file.    ║\n\
            ║  Please create one in the segtherm-firmware directory.           ║\n\
            ║  An empty file selects the reference wiring.                     ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read thermometer.toml                          ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: ThermometerConfig = match toml::from_str(&config_content) {
        Ok(config) => config,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid thermometer.toml                                 ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    if let Err(e) = config.validate() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid thermometer configuration                        ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            format_error_lines(&describe(e))
        );
    }

    println!("cargo:warning=thermometer.toml validated successfully");
    config
}

/// Human-readable validation error
fn describe(error: ConfigError) -> String {
    match error {
        ConfigError::InvalidPin(pin) => {
            format!("GPIO{} does not exist (RP2040 has GPIO0-GPIO29)", pin)
        }
        ConfigError::DuplicatePin(pin) => {
            format!("GPIO{} is assigned to more than one function", pin)
        }
        ConfigError::InvalidTiming(field) => {
            format!("{} is zero or inconsistent with the other timings", field)
        }
    }
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write `$OUT_DIR/config.rs` holding the validated configuration
fn generate_config(config: &ThermometerConfig) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    let pins = &config.pins;
    let sensor = &config.sensor;
    let display = &config.display;
    let input = &config.input;
    let unit = match config.unit {
        TemperatureUnit::Fahrenheit => "Fahrenheit",
        TemperatureUnit::Celsius => "Celsius",
    };

    let source = format!(
        "// Generated from thermometer.toml by build.rs\n\
         pub const CONFIG: ThermometerConfig = ThermometerConfig {{\n    \
             pins: PinMap {{\n        \
                 sensor: {},\n        \
                 button: {},\n        \
                 digits: {:?},\n        \
                 segments: {:?},\n    \
             }},\n    \
             sensor: SensorTiming {{\n        \
                 wake_pulse_ms: {},\n        \
                 release_wait_us: {},\n        \
                 tick_ns: {},\n        \
                 max_windows: {},\n        \
                 saturation_count: {},\n        \
                 one_threshold: {},\n    \
             }},\n    \
             display: DisplayTiming {{\n        \
                 dwell_ms: {},\n        \
                 cycles: {},\n    \
             }},\n    \
             input: InputTiming {{\n        \
                 debounce_us: {},\n        \
                 idle_poll_ms: {},\n    \
             }},\n    \
             unit: TemperatureUnit::{},\n\
         }};\n",
        pins.sensor,
        pins.button,
        pins.digits,
        pins.segments,
        sensor.wake_pulse_ms,
        sensor.release_wait_us,
        sensor.tick_ns,
        sensor.max_windows,
        sensor.saturation_count,
        sensor.one_threshold,
        display.dwell_ms,
        display.cycles,
        input.debounce_us,
        input.idle_poll_ms,
        unit,
    );

    fs::write(out_dir.join("config.rs"), source).unwrap();
}
