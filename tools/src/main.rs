//! cts-runner: headless budget run for the cost-to-service model.
//!
//! Usage:
//!   cts-runner --data-dir ./model_inputs --out ./model_outputs
//!   cts-runner --config ./budget_config.json

use anyhow::{Context, Result};
use cts_core::{
    config::BudgetConfig,
    engine::run_budget,
    report::JSON_FILE_NAME,
};
use std::env;
use std::path::Path;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let data_dir = parse_str(&args, "--data-dir", "./model_inputs");
    let out_dir = parse_str(&args, "--out", "./model_outputs");
    let config_path = args
        .windows(2)
        .find(|w| w[0] == "--config")
        .map(|w| w[1].as_str());

    println!("Cost to Service: cts-runner");
    println!("  data_dir:  {data_dir}");
    println!("  out_dir:   {out_dir}");
    println!("  config:    {}", config_path.unwrap_or("(data_dir default)"));
    println!();

    let config = match config_path {
        Some(path) => BudgetConfig::load_file(path)?,
        None => BudgetConfig::load(data_dir)?,
    };

    let report = run_budget(config, Path::new(data_dir))
        .with_context(|| format!("budget run over {data_dir} failed"))?;

    let out = Path::new(out_dir);
    report
        .write_csv_dir(out)
        .with_context(|| format!("cannot write CSV reports to {out_dir}"))?;
    report
        .write_json(&out.join(JSON_FILE_NAME))
        .with_context(|| format!("cannot write {JSON_FILE_NAME} to {out_dir}"))?;
    log::info!("reports written to {out_dir}");

    println!("=== RUN SUMMARY ===");
    println!("  generated_at:   {}", report.generated_at.to_rfc3339());
    println!("  cost centres:   {}", report.cost_centres.len());
    println!(
        "  assets:         {}",
        report.cost_centres.iter().map(|cc| cc.assets.len()).sum::<usize>()
    );
    println!("  total cost:     ${:.2}", report.total_cost);

    println!();
    println!("=== COST CENTRES ===");
    for cc in &report.cost_centres {
        println!(
            "  {:<32} {:<9} POHR ${:>8.2}/h  tech ${:>7.2}/h  net ${:>14.2}",
            cc.name,
            cc.function.as_str(),
            cc.pohr,
            cc.weighted_avg_tech_hourly_wage,
            cc.net_cost_to_service
        );
    }

    Ok(())
}

fn parse_str<'a>(args: &'a [String], flag: &str, default: &'a str) -> &'a str {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
        .unwrap_or(default)
}
