//! Command handlers

use std::path::PathBuf;

use tracing::{debug, info};

use crate::cli::{AirlineCommand, BagCommand, Cli, Commands};
use crate::output;
use seatcheck_app::app::{self, BagCheckRequest};
use seatcheck_app::config::Config;
use seatcheck_app::export::export_history_to_excel;
use seatcheck_app::repository::{open_repositories, Repositories};
use seatcheck_domain::model::{BagCheckRecord, Dimensions, NewBag};
use seatcheck_infra::airline_loader::AirlineDataset;
use seatcheck_infra::bag_csv::load_bags_from_csv;
use seatcheck_server::{start_server, AppState};
use seatcheck_types::{CarrierType, OutputFormat, Result, Unit};

pub fn execute(cli: Cli) -> Result<()> {
    // Load config
    let mut config = Config::load()?;

    // Override from CLI args
    if let Some(ref data_dir) = cli.data_dir {
        config.data_dir = Some(data_dir.clone());
    }
    let format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        Commands::Check {
            airline,
            length,
            width,
            height,
            unit,
            pet_carrier,
            flight,
            bag_id,
            user,
        } => {
            let unit = unit.unwrap_or(config.default_unit);
            let dimensions = Dimensions::from_unit(length, width, height, unit)?;
            let request = BagCheckRequest {
                airline_iata_code: airline,
                flight_number: flight,
                dimensions,
                is_pet_carrier: pet_carrier,
                bag_id,
                user_id: user,
            };
            cmd_check(&config, format, request, unit)
        }

        Commands::Airlines { command } => match command {
            AirlineCommand::List => cmd_airlines_list(&config, format),
            AirlineCommand::Show { code } => cmd_airlines_show(&config, format, &code),
            AirlineCommand::Import { file } => cmd_airlines_import(&config, file),
        },

        Commands::Bags { command } => match command {
            BagCommand::List => cmd_bags_list(&config, format),
            BagCommand::Search { brand, model } => cmd_bags_search(&config, format, &brand, &model),
            BagCommand::Add {
                brand,
                model,
                length,
                width,
                height,
                unit,
                pet_carrier,
                carrier_type,
            } => {
                let unit = unit.unwrap_or(config.default_unit);
                let dimensions = Dimensions::from_unit(length, width, height, unit)?;
                cmd_bags_add(&config, format, brand, model, dimensions, pet_carrier, carrier_type)
            }
            BagCommand::Import { file, unit, verified } => {
                let unit = unit.unwrap_or(config.default_unit);
                cmd_bags_import(&config, file, unit, verified)
            }
        },

        Commands::History { user } => cmd_history(&config, format, user.as_deref()),

        Commands::Export { user, output } => cmd_export(&config, user.as_deref(), output),

        Commands::Serve { bind, static_dir } => {
            if let Some(bind) = bind {
                config.bind_addr = bind;
            }
            if static_dir.is_some() {
                config.static_dir = static_dir;
            }
            cmd_serve(&config)
        }

        Commands::Config {
            show,
            set_data_dir,
            set_bind,
            set_unit,
            set_output,
            set_seed,
            set_static_dir,
            reset,
        } => cmd_config(
            show,
            set_data_dir,
            set_bind,
            set_unit,
            set_output,
            set_seed,
            set_static_dir,
            reset,
        ),
    }
}

/// Open the data store, seeding built-in airlines into an empty one
fn open_store(config: &Config) -> Result<Repositories> {
    let repos = open_repositories(config)?;
    if config.seed_airlines {
        let inserted = app::seed_airlines(repos.airlines.as_ref())?;
        if inserted > 0 {
            debug!(inserted, "seeded airline data");
        }
    }
    Ok(repos)
}

fn cmd_check(config: &Config, format: OutputFormat, request: BagCheckRequest, unit: Unit) -> Result<()> {
    let repos = open_store(config)?;
    let outcome = app::check_bag(&repos, request)?;
    output::print_check(format, &outcome, unit)
}

fn cmd_airlines_list(config: &Config, format: OutputFormat) -> Result<()> {
    let repos = open_store(config)?;
    let airlines = app::list_airlines(&repos)?;
    output::print_airlines(format, &airlines)
}

fn cmd_airlines_show(config: &Config, format: OutputFormat, code: &str) -> Result<()> {
    let repos = open_store(config)?;
    let airline = app::get_airline(&repos, code)?;
    output::print_airline(format, &airline)
}

fn cmd_airlines_import(config: &Config, file: PathBuf) -> Result<()> {
    let dataset = AirlineDataset::load_from_file(&file)?;
    println!("Loaded {} airlines from {}", dataset.len(), file.display());

    let repos = open_store(config)?;
    let summary = app::import_airlines(repos.airlines.as_ref(), dataset.into_airlines())?;
    println!("Created: {}", summary.created);
    println!("Updated: {}", summary.updated);
    Ok(())
}

fn cmd_bags_list(config: &Config, format: OutputFormat) -> Result<()> {
    let repos = open_store(config)?;
    let bags = app::list_bags(&repos)?;
    output::print_bags(format, &bags)
}

fn cmd_bags_search(config: &Config, format: OutputFormat, brand: &str, model: &str) -> Result<()> {
    let repos = open_store(config)?;
    match app::search_bag(&repos, brand, model)? {
        Some(bag) => output::print_bags(format, std::slice::from_ref(&bag)),
        None => {
            println!("{}", app::MANUAL_ENTRY_MESSAGE);
            Ok(())
        }
    }
}

fn cmd_bags_add(
    config: &Config,
    format: OutputFormat,
    brand: Option<String>,
    model: Option<String>,
    dimensions: Dimensions,
    pet_carrier: bool,
    carrier_type: Option<CarrierType>,
) -> Result<()> {
    let repos = open_store(config)?;
    let mut bag = NewBag::new(dimensions);
    bag.brand = brand;
    bag.model = model;
    bag.is_pet_carrier = pet_carrier || carrier_type.is_some();
    bag.carrier_type = carrier_type;

    let created = app::create_bag(&repos, bag)?;
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&created)?);
    } else {
        println!("Added {} ({})", created.display_name(), created.id);
    }
    Ok(())
}

fn cmd_bags_import(config: &Config, file: PathBuf, unit: Unit, verified: bool) -> Result<()> {
    let bags = load_bags_from_csv(&file, unit, verified)?;
    let repos = open_store(config)?;
    let stored = app::import_bags(&repos, bags)?;
    println!("Imported {} bags from {}", stored, file.display());
    Ok(())
}

fn load_history(repos: &Repositories, user: Option<&str>) -> Result<Vec<BagCheckRecord>> {
    match user {
        Some(user) => app::check_history(repos, user),
        None => app::all_check_history(repos),
    }
}

fn cmd_history(config: &Config, format: OutputFormat, user: Option<&str>) -> Result<()> {
    let repos = open_store(config)?;
    let records = load_history(&repos, user)?;
    output::print_history(format, &records)
}

fn cmd_export(config: &Config, user: Option<&str>, output: Option<PathBuf>) -> Result<()> {
    let repos = open_store(config)?;
    let records = load_history(&repos, user)?;

    let output_path = output.unwrap_or_else(|| {
        PathBuf::from(format!("bag-checks-{}.xlsx", user.unwrap_or("all")))
    });
    export_history_to_excel(user, &records, &output_path)?;

    println!("Exported {} checks to: {}", records.len(), output_path.display());
    Ok(())
}

fn cmd_serve(config: &Config) -> Result<()> {
    let addr = config.socket_addr()?;
    let repos = open_store(config)?;
    let state = AppState::from_config(config, repos);

    info!(%addr, "starting server");
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(start_server(state, addr))
}

#[allow(clippy::too_many_arguments)]
fn cmd_config(
    show: bool,
    set_data_dir: Option<PathBuf>,
    set_bind: Option<String>,
    set_unit: Option<Unit>,
    set_output: Option<OutputFormat>,
    set_seed: Option<bool>,
    set_static_dir: Option<PathBuf>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(data_dir) = set_data_dir {
        config.data_dir = Some(data_dir);
        modified = true;
    }

    if let Some(bind) = set_bind {
        config.bind_addr = bind;
        config.socket_addr()?;
        modified = true;
    }

    if let Some(unit) = set_unit {
        config.default_unit = unit;
        modified = true;
    }

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(seed) = set_seed {
        config.seed_airlines = seed;
        modified = true;
    }

    if let Some(static_dir) = set_static_dir {
        config.static_dir = Some(static_dir);
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
