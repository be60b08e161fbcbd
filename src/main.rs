//! # Plant Tracker Application Entry Point
//!
//! This binary wires the library together for the terminal: it loads the
//! configuration, connects to the plant store (MongoDB, or an in-memory demo
//! store with `--memory`), and renders plant cards and the day/night sky.
//! It owns every clock read and every timer; the library only ever receives
//! "now" as a value.

mod cli;


use anyhow::Context;
use chrono::NaiveDate;
use clap::Parser;
use cli::{AddArgs, Cli, Commands, PlantCommands, WaterArgs};
use plant_care_lib::clock::{Clock, SimulatedHourClock, SystemClock};
use plant_care_lib::config::Config;
use plant_care_lib::error::parse_iso_date;
use plant_care_lib::frequency::{parse_frequency_days, FREQUENCY_PRESETS};
use plant_care_lib::renderer::{
    render_detail, render_garden, render_presets, render_sky, PlantView,
};
use plant_care_lib::store::{MemoryStore, MongoStore, PlantStore};
use plant_care_lib::{logger, AccountScope, NewPlant, PlantError, PlantId};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Current calendar day as an ISO date would name it (UTC).
fn today() -> NaiveDate {
    SystemClock.now_utc().date_naive()
}

/// Clock used for theming: a simulated hour from the command line or the
/// configuration, otherwise real time.
fn display_clock(hour: Option<u32>, config: &Config) -> anyhow::Result<Box<dyn Clock>> {
    match hour.or(config.display.simulated_hour) {
        Some(hour) => {
            debug!(hour, "using simulated hour");
            Ok(Box::new(SimulatedHourClock::new(SystemClock, hour)?))
        }
        None => Ok(Box::new(SystemClock)),
    }
}

/// Fill the add-plant input from CLI arguments and configured defaults.
fn new_plant(args: AddArgs, config: &Config) -> NewPlant {
    NewPlant {
        plant_type: args.plant_type,
        nickname: args.nickname,
        image_url: args
            .image
            .or_else(|| Some(config.defaults.image_url.clone())),
        water_frequency: args
            .frequency
            .unwrap_or_else(|| config.defaults.water_frequency.clone()),
    }
}

/// Watering date from `--date`, defaulting to `today`.
fn watering_date(args: &WaterArgs, today: NaiveDate) -> anyhow::Result<NaiveDate> {
    match args.date.as_deref() {
        Some(date) => Ok(parse_iso_date(date)?),
        None => Ok(today),
    }
}

async fn run<S: PlantStore>(
    store: &S,
    config: &Config,
    scope: &AccountScope,
    command: PlantCommands,
) -> anyhow::Result<()> {
    let mut rng = StdRng::from_os_rng();

    match command {
        PlantCommands::List { hour, json } => {
            let plants = store
                .list_plants(scope)
                .await
                .context("fetching plants")?;
            let clock = display_clock(hour, config)?;

            if json {
                let now = clock.now_utc();
                let views: Vec<PlantView> = plants
                    .iter()
                    .map(|plant| PlantView::new(plant, now, &mut rng))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&views)?);
            } else {
                print!(
                    "{}",
                    render_garden(&plants, clock.now_utc(), &clock.wall_time(), &mut rng)
                );
            }
        }
        PlantCommands::Show { id } => {
            let id = PlantId::new(id);
            let plants = store
                .list_plants(scope)
                .await
                .context("fetching plants")?;
            let plant = plants
                .iter()
                .find(|plant| plant.id == id)
                .ok_or_else(|| PlantError::NotFound { id: id.clone() })?;
            print!("{}", render_detail(plant, SystemClock.now_utc(), &mut rng));
        }
        PlantCommands::Add(args) => {
            let plant = new_plant(args, config);
            if parse_frequency_days(&plant.water_frequency) == 0 {
                warn!(
                    frequency = %plant.water_frequency,
                    "no day count in frequency label, the plant will always read 0%; try one of: {}",
                    FREQUENCY_PRESETS.join(", ")
                );
            }
            let plant = store
                .add_plant(scope, plant, today())
                .await
                .context("adding plant")?;
            println!("Plant added, id: {}", plant.id);
        }
        PlantCommands::Water(args) => {
            let today = today();
            let date = watering_date(&args, today)?;
            let id = PlantId::new(args.id);
            store
                .update_last_watered(scope, &id, date, today)
                .await
                .with_context(|| format!("updating watering date of plant {id}"))?;
            println!("Plant {id} watered on {date}");
        }
        PlantCommands::Watch { hour } => {
            watch(store, config, scope, hour).await?;
        }
    }

    Ok(())
}

/// Draw the sky, or list the preview presets. Needs no store.
fn sky(hour: Option<u32>, presets: bool, config: &Config) -> anyhow::Result<()> {
    if presets {
        print!("{}", render_presets());
    } else {
        let clock = display_clock(hour, config)?;
        let mut rng = StdRng::from_os_rng();
        print!("{}", render_sky(&clock.wall_time(), &mut rng));
    }
    Ok(())
}

/// Fetch once, then redraw on every tick so water levels and the sky follow
/// the clock.
async fn watch<S: PlantStore>(
    store: &S,
    config: &Config,
    scope: &AccountScope,
    hour: Option<u32>,
) -> anyhow::Result<()> {
    let plants = store
        .list_plants(scope)
        .await
        .context("fetching plants")?;
    let clock = display_clock(hour, config)?;
    let mut rng = StdRng::from_os_rng();
    let mut ticker = tokio::time::interval(Duration::from_secs(config.display.refresh_seconds));

    info!(
        refresh_seconds = config.display.refresh_seconds,
        simulated = clock.is_simulated(),
        "watching plants, press Ctrl-C to stop"
    );

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let display_time = clock.wall_time();
                print!("{}", render_sky(&display_time, &mut rng));
                print!("{}", render_garden(&plants, clock.now_utc(), &display_time, &mut rng));
            }
            _ = tokio::signal::ctrl_c() => {
                info!("stopping watch");
                break;
            }
        }
    }

    Ok(())
}

/// Write `config` to `path`, refusing to clobber an existing file unless forced.
fn init_config(config: &Config, path: &Path, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists, pass --force to overwrite it",
            path.display()
        );
    }
    config
        .save_to_path(path)
        .map_err(|e| anyhow::anyhow!("writing {}: {e}", path.display()))?;
    println!("Configuration written to {}", path.display());
    Ok(())
}

/// Main application entry point.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    let config = Config::load_from_path(&cli.config);
    let scope = config.scope();

    let command = match cli.command {
        Commands::InitConfig { force } => return init_config(&config, &cli.config, force),
        Commands::Sky { hour, presets } => return sky(hour, presets, &config),
        Commands::Plants(command) => command,
    };

    if cli.memory {
        info!("using in-memory store with demo plants");
        let store = MemoryStore::with_demo_plants(&scope, today());
        run(&store, &config, &scope, command).await
    } else {
        let store = MongoStore::connect(&config.database)
            .await
            .with_context(|| format!("connecting to MongoDB at {}", config.database.uri))?;
        run(&store, &config, &scope, command).await
    }
}
