//! Output formatting module
//!
//! Table output shows currency with a 2-decimal `$` prefix and distances
//! with a `miles` suffix; `--format json` prints the raw records.

use haulcalc_domain::model::{LoadBook, LoadEstimate, LoadInput, ProfitabilityTable};
use haulcalc_domain::service::DistanceTable;
use haulcalc_types::{OutputFormat, Result};

pub fn output_estimate(
    output_format: OutputFormat,
    input: &LoadInput,
    estimate: &LoadEstimate,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(estimate)?;
        println!("{}", content);
        return Ok(());
    }

    println!("\nLoad Estimate");
    println!("=============");
    println!("Route:            {} -> {}", input.origin, input.destination);
    println!("Load pay:         ${:.2}", input.load_pay);
    println!("Total distance:   {:.2} miles", estimate.total_distance);
    println!("Rate per mile:    ${:.2}", estimate.rate_per_mile);
    println!();
    println!("Fuel cost:        ${:.2}", estimate.fuel_cost);
    println!("Dispatcher fee:   ${:.2}", estimate.dispatcher_fee);
    println!("Maintenance:      ${:.2}", estimate.maintenance_cost);
    println!("Tolls:            ${:.2}", estimate.toll_cost);
    println!("Total expenses:   ${:.2}", estimate.total_expenses);
    println!();
    println!("Net profit:       ${:.2}", estimate.net_profit);

    Ok(())
}

pub fn output_table(output_format: OutputFormat, table: &ProfitabilityTable) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(table)?;
        println!("{}", content);
        return Ok(());
    }

    let s = &table.summary;

    println!("\nProfitability Analysis");
    println!("======================");
    println!("Loads analyzed:       {}", table.rows.len());
    println!("Profitable:           {}", table.profitable().len());
    println!("Non-profitable:       {}", table.non_profitable().len());
    println!();
    println!("Total revenue:        ${:.2}", s.total_revenue);
    println!("Total costs:          ${:.2}", s.total_costs);
    println!("Total profit:         ${:.2}", s.total_profit);
    if s.total_revenue != 0.0 {
        println!(
            "Profit margin:        {:.1}%",
            s.total_profit / s.total_revenue * 100.0
        );
    }
    println!();
    println!("Avg profit/mile:      ${:.2}", s.avg_profit_per_mile);
    println!("Avg fuel cost/mile:   ${:.2}", s.avg_fuel_cost_per_mile);
    println!("Avg driver pay/mile:  ${:.2}", s.avg_driver_pay_per_mile);

    Ok(())
}

pub fn output_book(output_format: OutputFormat, book: &LoadBook) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(book)?;
        println!("{}", content);
        return Ok(());
    }

    if book.is_empty() {
        println!("No loads recorded");
        return Ok(());
    }

    println!("\nBooked Loads");
    println!("============");
    for entry in book.booked() {
        print_entry_line(&entry.input, &entry.estimate);
    }
    if book.booked().is_empty() {
        println!("(none)");
    }

    println!("\nUnder Consideration");
    println!("===================");
    for entry in book.considered() {
        print_entry_line(&entry.input, &entry.estimate);
    }
    if book.considered().is_empty() {
        println!("(none)");
    }

    println!();
    println!("Total booked profit:    ${:.2}", book.total_profit());
    println!("Total booked expenses:  ${:.2}", book.total_expenses());

    Ok(())
}

fn print_entry_line(input: &LoadInput, estimate: &LoadEstimate) {
    println!(
        "{} -> {}: {:.2} miles, pay ${:.2}, profit ${:.2}",
        input.origin,
        input.destination,
        estimate.total_distance,
        input.load_pay,
        estimate.net_profit
    );
}

pub fn output_routes(output_format: OutputFormat, distances: &DistanceTable) -> Result<()> {
    let routes = distances.routes();

    if output_format == OutputFormat::Json {
        let records: Vec<serde_json::Value> = routes
            .iter()
            .map(|(origin, destination, miles)| {
                serde_json::json!({
                    "origin": origin,
                    "destination": destination,
                    "miles": miles,
                })
            })
            .collect();
        let content = serde_json::to_string_pretty(&records)?;
        println!("{}", content);
        return Ok(());
    }

    println!("\nKnown Routes");
    println!("============");
    for (origin, destination, miles) in routes {
        println!("{} -> {}: {:.0} miles", origin, destination, miles);
    }

    Ok(())
}
