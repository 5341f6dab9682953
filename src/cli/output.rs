//! Output formatting utilities
//!
//! Provides table and JSON output formatting for CLI commands, plus the
//! terminal dashboard rendering used by the watch command.

use crate::cli::args::OutputFormat;
use crate::domain::{Breach, LimitConfig, SensorReading};
use crate::services::DashboardState;

use serde::Serialize;
use std::collections::HashMap;
use std::io::{self, Write};

/// Format and print output based on the selected format
pub fn print_output<T: Serialize + TableDisplay>(data: &T, format: OutputFormat) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match format {
        OutputFormat::Table => {
            writeln!(handle, "{}", data.to_table())?;
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(data).unwrap_or_else(|_| "{}".to_string());
            writeln!(handle, "{}", json)?;
        }
        OutputFormat::Compact => {
            writeln!(handle, "{}", data.to_compact())?;
        }
    }

    Ok(())
}

/// Trait for types that can be displayed as a table
pub trait TableDisplay {
    /// Format as a table string
    fn to_table(&self) -> String;

    /// Format as a compact single line
    fn to_compact(&self) -> String {
        self.to_table().replace('\n', " | ")
    }
}

/// ANSI color palette for asset names on the dashboard
pub const COLOR_PALETTE: [&str; 6] = [
    "\x1b[36m", // Cyan
    "\x1b[32m", // Green
    "\x1b[35m", // Magenta
    "\x1b[34m", // Blue
    "\x1b[33m", // Yellow
    "\x1b[31m", // Red
];

/// Pick a color for an asset name given the assignments made so far.
///
/// Pure lookup over an explicitly passed map: returns the existing
/// assignment if one exists, otherwise the next palette entry (wrapping).
/// The caller owns the map and records the returned color itself.
pub fn color_for(name: &str, assignments: &HashMap<String, &'static str>) -> &'static str {
    if let Some(color) = assignments.get(name) {
        return color;
    }
    COLOR_PALETTE[assignments.len() % COLOR_PALETTE.len()]
}

/// One sensor row for display
#[derive(Debug, Clone, Serialize)]
pub struct SensorRow {
    pub sid: String,
    pub asset_name: String,
    pub temperature: f64,
    pub humidity: f64,
    pub voltage: f64,
    pub received_at: String,
    /// "OK", "HIGH", "LOW", or "--" when the sensor has no configured limit
    pub status: String,
}

impl SensorRow {
    /// Build a row, deriving the status from the sensor's limit if any
    pub fn new(reading: &SensorReading, limits: &[LimitConfig]) -> Self {
        let status = limits
            .iter()
            .find(|l| l.sid == reading.sid)
            .and_then(|l| l.range())
            .map(|range| {
                if reading.temperature > range.upper {
                    "HIGH"
                } else if reading.temperature < range.lower {
                    "LOW"
                } else {
                    "OK"
                }
            })
            .unwrap_or("--")
            .to_string();

        Self {
            sid: reading.sid.clone(),
            asset_name: reading.asset_name.clone(),
            temperature: reading.temperature,
            humidity: reading.humidity,
            voltage: reading.voltage,
            received_at: reading.received_at.clone(),
            status,
        }
    }
}

impl TableDisplay for SensorRow {
    fn to_table(&self) -> String {
        format!(
            "{:<12} {:<20} {:>7.1}°C {:>6.1}% {:>5.2}V  {:<4}  {}",
            self.sid,
            self.asset_name,
            self.temperature,
            self.humidity,
            self.voltage,
            self.status,
            self.received_at
        )
    }

    fn to_compact(&self) -> String {
        format!("{}:{:.1}°C:{}", self.sid, self.temperature, self.status)
    }
}

/// Live sensor listing
#[derive(Debug, Clone, Serialize)]
pub struct SensorList {
    pub sensors: Vec<SensorRow>,
}

impl SensorList {
    /// Build from readings and limits, excluding unprovisioned sensors
    pub fn new(readings: &[SensorReading], limits: &[LimitConfig]) -> Self {
        Self {
            sensors: readings
                .iter()
                .filter(|r| r.is_provisioned())
                .map(|r| SensorRow::new(r, limits))
                .collect(),
        }
    }
}

impl TableDisplay for SensorList {
    fn to_table(&self) -> String {
        if self.sensors.is_empty() {
            return "No sensor data available\n".to_string();
        }

        let mut output = format!("Sensors: {}\n\n", self.sensors.len());
        for sensor in &self.sensors {
            output.push_str(&sensor.to_table());
            output.push('\n');
        }
        output
    }

    fn to_compact(&self) -> String {
        self.sensors
            .iter()
            .map(|s| s.to_compact())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Configured limit listing
#[derive(Debug, Clone, Serialize)]
pub struct LimitList {
    pub limits: Vec<LimitConfig>,
}

impl TableDisplay for LimitList {
    fn to_table(&self) -> String {
        if self.limits.is_empty() {
            return "No limits configured\n".to_string();
        }

        let mut output = format!("Configured limits: {}\n\n", self.limits.len());
        for limit in &self.limits {
            let parsed = match limit.range() {
                Some(range) => format!("[{:.1}°C, {:.1}°C]", range.lower, range.upper),
                None => "(unparseable)".to_string(),
            };
            output.push_str(&format!(
                "{:<12} lower={:<8} upper={:<8} {}\n",
                limit.sid, limit.lower_limit, limit.upper_limit, parsed
            ));
        }
        output
    }
}

/// Result of a one-shot check cycle
#[derive(Debug, Clone, Serialize)]
pub struct BreachReport {
    pub breaches: Vec<Breach>,
    pub notified: bool,
}

impl TableDisplay for BreachReport {
    fn to_table(&self) -> String {
        if self.breaches.is_empty() {
            return "All sensors within configured limits\n".to_string();
        }

        let mut output = format!("Breaches detected: {}\n\n", self.breaches.len());
        for breach in &self.breaches {
            output.push_str(&format!("  {}\n", breach));
        }
        if self.notified {
            output.push_str("\nAlert notification dispatched\n");
        }
        output
    }

    fn to_compact(&self) -> String {
        if self.breaches.is_empty() {
            "no breaches".to_string()
        } else {
            self.breaches
                .iter()
                .map(|b| b.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        }
    }
}

/// Simple message output
#[derive(Debug, Clone, Serialize)]
pub struct Message {
    pub message: String,
    pub success: bool,
}

impl TableDisplay for Message {
    fn to_table(&self) -> String {
        if self.success {
            format!("✓ {}", self.message)
        } else {
            format!("✗ {}", self.message)
        }
    }
}

const RESET: &str = "\x1b[0m";
const BOLD_RED: &str = "\x1b[31m\x1b[1m";

/// Render the live dashboard: gauge rows per sensor plus the alert banner
/// for the queue head. Asset names are colored through [`color_for`];
/// `colors` persists assignments across refreshes so names keep their color.
pub fn render_dashboard(
    state: &DashboardState,
    colors: &mut HashMap<String, &'static str>,
    use_colors: bool,
) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Live Temperature Data — {} sensor(s), cycle {}\n\n",
        state.sensors.len(),
        state.cycles_completed
    ));

    if state.sensors.is_empty() {
        output.push_str("No sensor data available\n");
    }

    for reading in &state.sensors {
        let row = SensorRow::new(reading, &state.limits);
        if use_colors {
            let color = color_for(&reading.asset_name, colors);
            colors.entry(reading.asset_name.clone()).or_insert(color);
            output.push_str(&format!(
                "{}{:<20}{} {}\n",
                color,
                reading.asset_name,
                RESET,
                row.to_compact()
            ));
        } else {
            output.push_str(&row.to_table());
            output.push('\n');
        }
    }

    match state.queue.current() {
        Some(alert) => {
            let pending = state.queue.len() - 1;
            let banner = format!(
                "\nALERT: {}  ({} more queued — press Enter to acknowledge)\n",
                alert, pending
            );
            if use_colors {
                output.push_str(BOLD_RED);
                output.push_str(&banner);
                output.push_str(RESET);
            } else {
                output.push_str(&banner);
            }
        }
        None => output.push_str("\nNo active alerts\n"),
    }

    output
}
