//! # Terminal Rendering
//!
//! Turns plants and the current time into plain text for the CLI: one card
//! per plant with a water gauge and status phrase, and a small sky strip
//! showing the sun's arc by day and stars by night.
//!
//! Every function returns a `String` instead of printing, so output can be
//! checked in tests and the binary decides where it goes.

use crate::day_night::{is_night, sun_position, ColorScheme, TIME_PRESETS};
use crate::status::phrase_for;
use crate::water_level::WaterReading;
use crate::Plant;
use chrono::{DateTime, NaiveTime, Timelike, Utc};
use rand::Rng;
use serde::Serialize;
use std::fmt::Write;

const BAR_WIDTH: usize = 20;
const SKY_ROWS: usize = 6;
const SKY_COLS: usize = 40;
const STAR_COUNT: usize = 12;

/// JSON-friendly snapshot of one plant at one instant.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantView<'a> {
    #[serde(flatten)]
    pub plant: &'a Plant,
    pub water_level: u8,
    pub status: &'static str,
    pub badge_color: &'static str,
    pub days_since_watering: Option<i64>,
    pub phrase: &'static str,
}

impl<'a> PlantView<'a> {
    pub fn new<R: Rng>(plant: &'a Plant, now: DateTime<Utc>, rng: &mut R) -> Self {
        let reading = WaterReading::for_plant(plant, now);
        Self {
            plant,
            water_level: reading.level,
            status: reading.status.as_str(),
            badge_color: reading.status.badge_color(),
            days_since_watering: reading.days_since,
            phrase: phrase_for(&reading, rng),
        }
    }
}

/// Gauge like `[██████████░░░░░░░░░░]  50%`.
pub fn water_bar(level: u8) -> String {
    let level = level.min(100);
    let filled = (usize::from(level) * BAR_WIDTH + 50) / 100;
    format!(
        "[{}{}] {:>3}%",
        "█".repeat(filled),
        "░".repeat(BAR_WIDTH - filled),
        level
    )
}

/// Text card for one plant.
pub fn render_card<R: Rng>(plant: &Plant, now: DateTime<Utc>, rng: &mut R) -> String {
    let view = PlantView::new(plant, now, rng);
    let mut card = String::new();

    let _ = writeln!(card, "{} ({})", plant.display_name(), plant.plant_type);
    let _ = writeln!(card, "  id:       {}", plant.id);
    let _ = writeln!(card, "  water:    {}", water_bar(view.water_level));
    let watered = match (plant.last_watered, view.days_since_watering) {
        (Some(date), Some(days)) => format!("{date} ({days} days ago)"),
        _ => "N/A".to_string(),
    };
    let _ = writeln!(card, "  watered:  {watered}");
    if !plant.water_frequency.is_empty() {
        let _ = writeln!(card, "  schedule: {}", plant.water_frequency);
    }
    let _ = writeln!(card, "  status:   {} [{}]", view.phrase, view.status);
    let _ = writeln!(card, "  badge:    {}", view.badge_color);
    card
}

/// Card plus care instructions, for a single plant's detail view.
pub fn render_detail<R: Rng>(plant: &Plant, now: DateTime<Utc>, rng: &mut R) -> String {
    let mut out = render_card(plant, now, rng);
    out.push_str("  care:\n");
    if !plant.water_frequency.is_empty() {
        let _ = writeln!(out, "    - Water every {}", plant.water_frequency);
    }
    out.push_str("    - Place in bright, indirect light\n");
    out.push_str("    - Keep away from drafts and cold windows\n");
    out
}

/// Header line naming the theme for `time`.
pub fn render_theme_line<T: Timelike>(time: &T) -> String {
    let scheme = ColorScheme::for_time(time);
    let part = if scheme.is_night { "night" } else { "day" };
    format!(
        "{:02}:{:02} {part} (background {}, text {})",
        time.hour(),
        time.minute(),
        scheme.background,
        scheme.text
    )
}

/// Every plant's card under a theme header.
pub fn render_garden<T: Timelike, R: Rng>(
    plants: &[Plant],
    now: DateTime<Utc>,
    display_time: &T,
    rng: &mut R,
) -> String {
    let mut out = render_theme_line(display_time);
    out.push_str("\n\n");

    if plants.is_empty() {
        out.push_str("No plants yet. Add one with `plant-tracker add --type <TYPE>`.\n");
        return out;
    }

    for plant in plants {
        out.push_str(&render_card(plant, now, rng));
        out.push('\n');
    }
    out
}

/// One theme line per preview preset, e.g. for `sky --presets`.
pub fn render_presets() -> String {
    let mut out = String::new();
    for (label, hour) in TIME_PRESETS {
        let Some(time) = NaiveTime::from_hms_opt(hour, 0, 0) else {
            continue;
        };
        let _ = writeln!(out, "{label:<18} {}", render_theme_line(&time));
    }
    out
}

/// Sky strip: the sun on its arc by day, a moon and scattered stars by night.
pub fn render_sky<T: Timelike, R: Rng>(time: &T, rng: &mut R) -> String {
    let mut grid = vec![vec![' '; SKY_COLS]; SKY_ROWS];

    if is_night(time.hour()) {
        for _ in 0..STAR_COUNT {
            let row = rng.random_range(0..SKY_ROWS);
            let col = rng.random_range(0..SKY_COLS);
            grid[row][col] = if rng.random_bool(0.3) { '*' } else { '·' };
        }
        grid[1][SKY_COLS - 6] = '☾';
    } else {
        let sun = sun_position(time);
        // vertical spans [0.05, 0.5]: the top half of the screen
        let row = ((sun.vertical / 0.5) * (SKY_ROWS - 1) as f64).round() as usize;
        let col = (sun.horizontal * (SKY_COLS - 1) as f64).round() as usize;
        grid[row.min(SKY_ROWS - 1)][col.min(SKY_COLS - 1)] = '☀';
    }

    let mut out = String::new();
    for row in grid {
        out.push_str(row.into_iter().collect::<String>().trim_end());
        out.push('\n');
    }
    out.push_str(&"─".repeat(SKY_COLS));
    out.push('\n');

    let sun = sun_position(time);
    let (left, top) = sun.as_percentages();
    let _ = writeln!(
        out,
        "{}  sun left {left} top {top} progress {:.2}",
        render_theme_line(time),
        sun.progress
    );
    out
}
