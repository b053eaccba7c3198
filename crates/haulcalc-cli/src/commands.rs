//! Command handlers

use std::io::{BufRead, IsTerminal, Write};
use std::path::PathBuf;

use haulcalc_domain::model::LoadInput;
use haulcalc_domain::service::{compute_profitability, estimate, DistanceResolver, DistanceTable};
use haulcalc_infra::persistence::load_book_store;
use haulcalc_infra::{load_records_from_csv, write_csv, write_excel};
use haulcalc_types::{InputError, OutputFormat, Result};

use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::output::{output_book, output_estimate, output_routes, output_table};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let output_format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        Commands::Estimate {
            origin,
            destination,
            pay,
            deadhead_to,
            deadhead_from,
            miles,
            book,
            consider,
        } => cmd_estimate(
            &config,
            origin,
            destination,
            pay,
            deadhead_to,
            deadhead_from,
            miles,
            book,
            consider,
            output_format,
        ),

        Commands::Analyze {
            input,
            output,
            excel,
        } => cmd_analyze(input, output, excel, output_format),

        Commands::Loads => cmd_loads(output_format),

        Commands::Routes => cmd_routes(output_format),

        Commands::Config {
            show,
            set_fuel_cost,
            set_dispatcher_rate,
            set_maintenance_cost,
            set_toll_cost,
            set_output,
            reset,
        } => cmd_config(
            show,
            set_fuel_cost,
            set_dispatcher_rate,
            set_maintenance_cost,
            set_toll_cost,
            set_output,
            reset,
        ),
    }
}

/// Resolver for routes missing from the known-route table.
///
/// With `--miles` the given value answers directly; otherwise the user is
/// prompted on stdin, and an empty line or EOF cancels the calculation.
struct CliDistanceResolver {
    miles: Option<f64>,
}

impl DistanceResolver for CliDistanceResolver {
    fn resolve(&self, origin: &str, destination: &str) -> Option<String> {
        if let Some(miles) = self.miles {
            return Some(miles.to_string());
        }

        let stdin = std::io::stdin();
        if stdin.is_terminal() {
            eprint!(
                "Route {} -> {} is not known. Enter distance in miles (empty to cancel): ",
                origin, destination
            );
            let _ = std::io::stderr().flush();
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => {
                let line = line.trim();
                if line.is_empty() {
                    None
                } else {
                    Some(line.to_string())
                }
            }
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn cmd_estimate(
    config: &Config,
    origin: String,
    destination: String,
    pay: f64,
    deadhead_to: f64,
    deadhead_from: f64,
    miles: Option<f64>,
    book: bool,
    consider: bool,
    output_format: OutputFormat,
) -> Result<()> {
    let input = LoadInput::new(origin, destination, pay, deadhead_to, deadhead_from)?;

    let distances = DistanceTable::with_known_routes();
    let resolver = CliDistanceResolver { miles };

    let result = estimate(&input, &distances, &resolver, &config.rates)?;

    output_estimate(output_format, &input, &result)?;

    if book || consider {
        let path = Config::book_path()?;
        let mut loads = load_book_store::load(&path)?;
        if book {
            loads.book(input, result);
        } else {
            loads.consider(input, result);
        }
        load_book_store::save(&loads, &path)?;
        println!(
            "\nLoad recorded as {}",
            if book { "booked" } else { "under consideration" }
        );
    }

    Ok(())
}

fn cmd_analyze(
    input: PathBuf,
    output: Option<PathBuf>,
    excel: Option<PathBuf>,
    output_format: OutputFormat,
) -> Result<()> {
    let records = load_records_from_csv(&input)?;
    let table = compute_profitability(&records);

    output_table(output_format, &table)?;

    if let Some(ref path) = output {
        write_csv(&table, path)?;
        println!("Exported to: {}", path.display());
    }

    if let Some(ref path) = excel {
        write_excel(&table, path)?;
        println!("Exported to: {}", path.display());
    }

    Ok(())
}

fn cmd_loads(output_format: OutputFormat) -> Result<()> {
    let book = load_book_store::load(&Config::book_path()?)?;
    output_book(output_format, &book)
}

fn cmd_routes(output_format: OutputFormat) -> Result<()> {
    output_routes(output_format, &DistanceTable::with_known_routes())
}

fn cmd_config(
    show: bool,
    set_fuel_cost: Option<f64>,
    set_dispatcher_rate: Option<f64>,
    set_maintenance_cost: Option<f64>,
    set_toll_cost: Option<f64>,
    set_output: Option<OutputFormat>,
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

    if let Some(fuel_cost) = set_fuel_cost {
        config.rates.fuel_cost_per_mile = check_rate("fuel cost per mile", fuel_cost)?;
        modified = true;
    }

    if let Some(rate) = set_dispatcher_rate {
        config.rates.dispatcher_fee_rate = check_rate("dispatcher fee rate", rate)?;
        modified = true;
    }

    if let Some(maintenance) = set_maintenance_cost {
        config.rates.maintenance_cost_per_mile =
            check_rate("maintenance cost per mile", maintenance)?;
        modified = true;
    }

    if let Some(toll) = set_toll_cost {
        config.rates.default_toll_cost = check_rate("toll cost", toll)?;
        modified = true;
    }

    if let Some(output_format) = set_output {
        config.output_format = output_format;
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

fn check_rate(field: &str, value: f64) -> Result<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(InputError::NegativeNumber {
            field: field.to_string(),
            value,
        }
        .into());
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_miles_flag_answers_resolver() {
        let resolver = CliDistanceResolver { miles: Some(250.0) };
        assert_eq!(
            resolver.resolve("Atlanta, GA", "Nashville, TN"),
            Some("250".to_string())
        );
    }

    #[test]
    fn test_check_rate_rejects_negative() {
        assert!(check_rate("toll cost", -1.0).is_err());
        assert!(check_rate("toll cost", f64::NAN).is_err());
        assert!((check_rate("toll cost", 55.0).unwrap() - 55.0).abs() < f64::EPSILON);
    }
}
