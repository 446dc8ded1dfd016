use clap::{Parser, Subcommand, ValueEnum};
use gl_app::{AppError, AppResult, SizingReport};
use gl_core::numeric::round2;
use gl_sizing::{BomEntry, RoomDimensions};
use serde::Serialize;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "gl-cli")]
#[command(about = "Gasline CLI - gas pipe network sizing tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate job file syntax and structure
    Validate {
        /// Path to the job file (YAML, or JSON by extension)
        job_path: PathBuf,
    },
    /// Size the pipes of a job and print the results
    Size {
        /// Path to the job file
        job_path: PathBuf,
        /// Catalog file (defaults to the built-in reference catalog)
        #[arg(long)]
        catalog: Option<PathBuf>,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
        /// Output file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List fuels, pipe systems, appliances and climate zones
    Catalog {
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
    /// Estimate the heat load of a room
    HeatLoad {
        /// Room length in metres
        #[arg(long)]
        length: f64,
        /// Room width in metres
        #[arg(long)]
        width: f64,
        /// Room height in metres
        #[arg(long)]
        height: f64,
        /// Climate zone ID
        #[arg(long)]
        zone: String,
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
    /// Size several jobs and print the merged material list
    Materials {
        /// Paths to the job files
        #[arg(required = true)]
        job_paths: Vec<PathBuf>,
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Yaml,
    Json,
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { job_path } => cmd_validate(&job_path),
        Commands::Size {
            job_path,
            catalog,
            format,
            output,
        } => cmd_size(&job_path, catalog.as_deref(), format, output.as_deref()),
        Commands::Catalog { catalog } => cmd_catalog(catalog.as_deref()),
        Commands::HeatLoad {
            length,
            width,
            height,
            zone,
            catalog,
        } => cmd_heat_load(
            RoomDimensions::new(length, width, height),
            &zone,
            catalog.as_deref(),
        ),
        Commands::Materials { job_paths, catalog } => {
            cmd_materials(&job_paths, catalog.as_deref())
        }
    }
}

fn cmd_validate(job_path: &Path) -> AppResult<()> {
    println!("Validating job: {}", job_path.display());
    let job = gl_app::load_job(job_path)?;
    gl_app::validate_job(&job)?;
    let summary = gl_app::summarize_job(&job);
    println!("✓ Job is valid");
    println!(
        "  {} - {} outlets ({} with catalog demand), {:.2} m of pipe",
        summary.name, summary.outlet_count, summary.prefilled_outlets, summary.total_distance_m
    );
    Ok(())
}

fn cmd_size(
    job_path: &Path,
    catalog_path: Option<&Path>,
    format: OutputFormat,
    output: Option<&Path>,
) -> AppResult<()> {
    let catalog = gl_app::load_catalog(catalog_path)?;
    let job = gl_app::load_job(job_path)?;
    let report = gl_app::size_job(&job, &catalog)?;

    let text = match format {
        OutputFormat::Table => render_report(&report),
        OutputFormat::Yaml => to_yaml(&report)?,
        OutputFormat::Json => to_json(&report)?,
    };

    // Write to file or stdout
    if let Some(path) = output {
        std::fs::write(path, text).map_err(|source| AppError::OutputWrite {
            path: path.to_path_buf(),
            source,
        })?;
        println!("✓ Wrote sizing results to {}", path.display());
    } else {
        print!("{}", text);
    }

    Ok(())
}

fn cmd_catalog(catalog_path: Option<&Path>) -> AppResult<()> {
    let catalog = gl_app::load_catalog(catalog_path)?;
    let summary = gl_app::summarize_catalog(&catalog);

    println!("Fuels:");
    for fuel in &summary.fuels {
        let table = if fuel.has_capacity_table {
            ""
        } else {
            " [no capacity table]"
        };
        println!(
            "  {} - {} ({} kcal/m³ at {} mbar){}",
            fuel.id, fuel.label, fuel.calorific_value_kcal_m3, fuel.supply_pressure_mbar, table
        );
    }

    println!("\nPipe systems:");
    for system in &summary.pipe_systems {
        let sizes: Vec<String> = system.diameters_mm.iter().map(|d| d.to_string()).collect();
        println!("  {} - {} (DN {})", system.id, system.label, sizes.join(", "));
    }

    println!("\nAppliances:");
    for appliance in &summary.appliances {
        println!(
            "  {} - {} ({} kcal/h)",
            appliance.id, appliance.label, appliance.default_demand_kcal_h
        );
    }

    println!("\nClimate zones:");
    for zone in &summary.climate_zones {
        println!("  {} - {} (K = {})", zone.id, zone.label, zone.k_coefficient);
    }

    Ok(())
}

fn cmd_heat_load(room: RoomDimensions, zone_id: &str, catalog_path: Option<&Path>) -> AppResult<()> {
    let catalog = gl_app::load_catalog(catalog_path)?;
    let load = gl_app::heat_load(room, zone_id, &catalog)?;

    println!("Heat load for zone {}:", load.zone_id);
    println!("  Volume: {:.2} m³", load.volume_m3);
    println!("  K = {}, ΔT = {} °C", load.k_coefficient, load.delta_t_c);
    println!("  Required: {} kcal/h", load.load_kcal_h);
    Ok(())
}

fn cmd_materials(job_paths: &[PathBuf], catalog_path: Option<&Path>) -> AppResult<()> {
    let catalog = gl_app::load_catalog(catalog_path)?;
    let jobs = job_paths
        .iter()
        .map(|path| gl_app::load_job(path))
        .collect::<AppResult<Vec<_>>>()?;

    let rows = gl_app::materials_for_jobs(&jobs, &catalog)?;

    println!("Materials for {} job(s):", jobs.len());
    for row in rows {
        println!("  {:<32} {:>10.2} {}", row.label, row.quantity, row.unit);
    }
    Ok(())
}

fn render_report(report: &SizingReport) -> String {
    let mut out = String::new();
    let result = &report.result;

    let _ = writeln!(
        out,
        "{} ({} / {})",
        report.job_name, report.fuel_id, report.pipe_system_id
    );
    let _ = writeln!(
        out,
        "Total demand: {} kcal/h, flow: {:.2} m³/h\n",
        round2(result.totals.demand_kcal_h),
        result.totals.flow_m3_h
    );

    let _ = writeln!(
        out,
        "{:<36} {:>8} {:>8} {:>8} {:>5} {:>9} {:>6}",
        "Segment", "Flow", "L", "L eq", "DN", "Capacity", "Use"
    );
    for seg in &result.segment_results {
        let _ = writeln!(
            out,
            "{:<36} {:>8.2} {:>8.2} {:>8.2} {:>5} {:>9.2} {:>5.0}%{}",
            seg.label,
            seg.flow_m3_h,
            seg.length_m,
            seg.equivalent_length_m,
            seg.dn_mm,
            seg.capacity_m3_h,
            seg.utilization * 100.0,
            if seg.is_undersized() { " !" } else { "" }
        );
    }

    let warnings: Vec<String> = result
        .warnings()
        .map(|(seg, warning)| format!("  {}: {}", seg.id, warning))
        .collect();
    if !warnings.is_empty() {
        let _ = writeln!(out, "\nWarnings:\n{}", warnings.join("\n"));
    }

    let _ = writeln!(out, "\nBill of materials:");
    for entry in &result.bom {
        let line = match entry {
            BomEntry::Pipe { dn_mm, length_m } => {
                format!("Pipe DN {}: {:.2} m", dn_mm, length_m)
            }
            BomEntry::Fitting {
                kind,
                dn_mm,
                quantity,
            } => format!("{} DN {}: {} u", kind.label(), dn_mm, quantity),
            BomEntry::Accessory {
                label,
                quantity,
                unit,
                ..
            } => format!("{}: {} {}", label, quantity, unit),
        };
        let _ = writeln!(out, "  {}", line);
    }

    out
}

fn to_yaml<T: Serialize>(value: &T) -> AppResult<String> {
    serde_yaml::to_string(value).map_err(|e| AppError::Export(e.to_string()))
}

fn to_json<T: Serialize>(value: &T) -> AppResult<String> {
    let mut text =
        serde_json::to_string_pretty(value).map_err(|e| AppError::Export(e.to_string()))?;
    text.push('\n');
    Ok(text)
}
