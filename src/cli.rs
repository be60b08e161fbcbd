use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "plant-tracker")]
#[command(about = "Track when your plants were watered and how thirsty they are now")]
pub struct Cli {
    /// Configuration file
    #[arg(long, global = true, default_value = plant_care_lib::config::CONFIG_FILE)]
    pub config: PathBuf,

    /// Use a throwaway in-memory store with demo plants instead of MongoDB
    #[arg(long, global = true)]
    pub memory: bool,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(flatten)]
    Plants(PlantCommands),
    /// Show the day/night sky for now or a simulated hour
    Sky {
        /// Preview this hour (0-23)
        #[arg(long, value_parser = clap::value_parser!(u32).range(0..24))]
        hour: Option<u32>,
        /// List the preview presets instead of drawing the sky
        #[arg(long, conflicts_with = "hour")]
        presets: bool,
    },
    /// Write the current configuration (defaults for missing values) to the config file
    InitConfig {
        /// Replace an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Commands that work on the plant store.
#[derive(Subcommand, Debug)]
pub enum PlantCommands {
    /// Show every plant with its current water level
    List {
        /// Preview the theme at this hour (0-23)
        #[arg(long, value_parser = clap::value_parser!(u32).range(0..24))]
        hour: Option<u32>,
        /// Print JSON instead of cards
        #[arg(long, conflicts_with = "hour")]
        json: bool,
    },
    /// Show one plant with its care instructions
    Show {
        /// Plant id
        #[arg(long)]
        id: String,
    },
    /// Add a new plant, watered today
    Add(AddArgs),
    /// Record a watering
    Water(WaterArgs),
    /// Re-render the plant list periodically until Ctrl-C
    Watch {
        /// Preview the theme at this hour (0-23)
        #[arg(long, value_parser = clap::value_parser!(u32).range(0..24))]
        hour: Option<u32>,
    },
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Plant type, e.g. "Monstera Deliciosa"
    #[arg(short = 't', long = "type")]
    pub plant_type: String,
    /// Nickname (defaults to "My <type>")
    #[arg(short, long)]
    pub nickname: Option<String>,
    /// Image URL (defaults to the configured image)
    #[arg(short, long)]
    pub image: Option<String>,
    /// Watering frequency label, e.g. "Every 7 days"
    #[arg(short, long)]
    pub frequency: Option<String>,
}

#[derive(Args, Debug)]
pub struct WaterArgs {
    /// Plant id
    #[arg(long)]
    pub id: String,
    /// Watering date as YYYY-MM-DD (defaults to today)
    #[arg(long)]
    pub date: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add() {
        let cli = Cli::try_parse_from([
            "plant-tracker",
            "add",
            "--type",
            "Pothos",
            "--frequency",
            "Every 10 days",
        ])
        .unwrap();
        match cli.command {
            Commands::Plants(PlantCommands::Add(args)) => {
                assert_eq!(args.plant_type, "Pothos");
                assert_eq!(args.frequency.as_deref(), Some("Every 10 days"));
                assert!(args.nickname.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_hour_out_of_range_is_rejected() {
        assert!(Cli::try_parse_from(["plant-tracker", "sky", "--hour", "24"]).is_err());
        assert!(Cli::try_parse_from(["plant-tracker", "sky", "--hour", "23"]).is_ok());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["plant-tracker", "list", "--memory", "--json"]).unwrap();
        assert!(cli.memory);
        assert!(matches!(
            cli.command,
            Commands::Plants(PlantCommands::List {
                json: true,
                hour: None
            })
        ));
    }

    #[test]
    fn test_json_list_does_not_take_an_hour() {
        assert!(Cli::try_parse_from(["plant-tracker", "list", "--json", "--hour", "21"]).is_err());
        assert!(Cli::try_parse_from(["plant-tracker", "list", "--hour", "21"]).is_ok());
    }

    #[test]
    fn test_parse_show_and_init_config() {
        let cli = Cli::try_parse_from(["plant-tracker", "show", "--id", "plant-3"]).unwrap();
        match cli.command {
            Commands::Plants(PlantCommands::Show { id }) => assert_eq!(id, "plant-3"),
            other => panic!("unexpected command {other:?}"),
        }

        let cli = Cli::try_parse_from(["plant-tracker", "init-config", "--force"]).unwrap();
        assert!(matches!(cli.command, Commands::InitConfig { force: true }));
    }
}
