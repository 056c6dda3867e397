// Wildlife Rehabilitation Registry - Demo Entry Point
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/wildlife-rehab-registry
// ```
//
// Or with a custom facility and log files:
//
// ```console
// $ ./target/release/wildlife-rehab-registry --config facility.json --verbose --log-dir logs
// ```

use anyhow::Context;
use clap::Parser;
use serde_json::json;
use std::process;
use tracing::{error, info};
use wildlife_rehab_registry::{CliArgs, FacilityConfig, FacilityRegistry, LoggingConfig};

fn main() {
    // Parse CLI arguments first to check for special flags
    let args = CliArgs::parse();

    if args.print_config {
        match FacilityConfig::default().print_json() {
            Ok(json) => {
                println!("{}", json);
                return;
            }
            Err(e) => {
                eprintln!("Failed to serialize default configuration: {}", e);
                process::exit(1);
            }
        }
    }

    // Initialize logging based on CLI flags
    let mut logging = LoggingConfig::from_flags(args.verbose, args.debug);
    if let Some(log_dir) = &args.log_dir {
        logging = logging.with_file_logging(log_dir);
    }

    let _log_guard = match logging.init() {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            process::exit(1);
        }
    };

    info!("Starting Wildlife Rehabilitation Registry");

    let json_output = args.json;
    let dry_run = args.dry_run;
    let save_path = args.save_config.clone();

    // Load configuration from CLI arguments and optional config file
    let config = match FacilityConfig::from_cli_args(args) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        error!("Configuration validation failed: {}", e);
        process::exit(1);
    }

    if let Some(path) = save_path {
        if let Err(e) = config.save_to_file(&path) {
            error!("Failed to save configuration to {}: {}", path, e);
            process::exit(1);
        }
        eprintln!("Configuration saved to {}", path);
        return;
    }

    if dry_run {
        eprintln!("Configuration validation successful!");
        eprintln!("Dry run mode - registry will not be built.");
        print_configuration_summary(&config);
        return;
    }

    if let Err(e) = run(&config, json_output) {
        error!("Registry run failed: {:#}", e);
        process::exit(1);
    }

    info!("Wildlife Rehabilitation Registry completed successfully");
}

/// Build the registry, print its state, and tear it down
fn run(config: &FacilityConfig, json_output: bool) -> anyhow::Result<()> {
    let registry =
        FacilityRegistry::from_config(config).context("Failed to build facility registry")?;

    if json_output {
        print_json_report(&registry)?;
    } else {
        print_listing(&registry);
    }

    let report = registry.close();
    eprintln!("{}", report);
    Ok(())
}

/// Print configuration summary
fn print_configuration_summary(config: &FacilityConfig) {
    eprintln!("Configuration:");
    eprintln!("  Name: {}", config.name);
    eprintln!("  Location: {}", config.location);
    eprintln!("  Reassignment Policy: {}", config.reassignment_policy);
    eprintln!(
        "  Enclosures: {} (total capacity {})",
        config.enclosures.len(),
        config.total_capacity()
    );
    eprintln!("  Patients: {}", config.patients.len());
    eprintln!("  Assignments: {}", config.assignments.len());
    eprintln!("  Discharges: {}", config.discharges.len());
    eprintln!();
}

/// Print the patient and enclosure listings
fn print_listing(registry: &FacilityRegistry) {
    println!("===== WILDLIFE REHABILITATION MANAGEMENT SYSTEM =====");
    println!("Center Name: {}", registry.name());
    println!("Location: {}", registry.location());
    println!(
        "Animals: {} | Enclosures: {}",
        registry.patient_count(),
        registry.enclosure_count()
    );

    println!("\nCurrent Animals:");
    for patient in registry.patients() {
        println!("{}", patient.summarize());
    }

    println!("\nEnclosures:");
    for enclosure in registry.enclosures() {
        println!("{}", enclosure.summarize());
    }

    println!("\n{}", registry.statistics());
}

/// Print the registry state as one JSON document
fn print_json_report(registry: &FacilityRegistry) -> anyhow::Result<()> {
    let report = json!({
        "name": registry.name(),
        "location": registry.location(),
        "policy": registry.policy(),
        "patients": registry.patients(),
        "enclosures": registry.enclosures(),
        "statistics": registry.statistics(),
    });

    let text =
        serde_json::to_string_pretty(&report).context("Failed to serialize registry report")?;
    println!("{}", text);
    Ok(())
}
