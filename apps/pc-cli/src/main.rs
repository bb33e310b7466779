use clap::{Parser, Subcommand};
use pc_app::{AppResult, chart_service, query};
use pc_psychro::STANDARD_PRESSURE;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "pc-cli")]
#[command(about = "psychroflow CLI - psychrometric charts and moist-air properties", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a chart from a configuration file and write it as PNG, SVG or JSON geometry
    Render {
        /// Path to the chart configuration (YAML or JSON)
        config_path: PathBuf,
        /// Output file (defaults to `chart.output` from the configuration)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Validate a chart configuration file
    Validate {
        /// Path to the chart configuration (YAML or JSON)
        config_path: PathBuf,
    },
    /// Print every property of one moist-air state
    State {
        /// Dry-bulb temperature [°C]
        #[arg(long, allow_negative_numbers = true)]
        t: f64,
        /// Relative humidity, as a fraction or a percentage
        #[arg(long)]
        rh: f64,
        /// Total pressure [Pa]
        #[arg(long, default_value_t = STANDARD_PRESSURE)]
        p: f64,
    },
    /// Tabulate properties along a dry-bulb sweep at constant relative humidity
    Sweep {
        /// First dry-bulb temperature [°C]
        #[arg(long, allow_negative_numbers = true)]
        t_min: f64,
        /// Last dry-bulb temperature [°C]
        #[arg(long, allow_negative_numbers = true)]
        t_max: f64,
        /// Relative humidity, as a fraction or a percentage
        #[arg(long)]
        rh: f64,
        /// Number of temperatures
        #[arg(long, default_value_t = 11)]
        points: usize,
        /// Total pressure [Pa]
        #[arg(long, default_value_t = STANDARD_PRESSURE)]
        p: f64,
        /// Output CSV file path (optional, defaults to a table on stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Evaluate a comfort index
    #[command(subcommand)]
    Index(IndexCommands),
}

#[derive(Subcommand)]
enum IndexCommands {
    /// Temperature-humidity index
    Itu {
        /// Dry-bulb temperature [°C]
        #[arg(long, allow_negative_numbers = true)]
        t: f64,
        /// Relative humidity, as a fraction or a percentage
        #[arg(long)]
        rh: f64,
    },
    /// Heat load index
    Hli {
        /// Dry-bulb temperature [°C]
        #[arg(long, allow_negative_numbers = true)]
        t: f64,
        /// Relative humidity, as a fraction or a percentage
        #[arg(long)]
        rh: f64,
        /// Solar radiation [W/m²]
        #[arg(long)]
        sr: f64,
        /// Wind speed [m/s]
        #[arg(long)]
        ws: f64,
    },
}

fn main() -> AppResult<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            config_path,
            output,
        } => cmd_render(&config_path, output.as_deref()),
        Commands::Validate { config_path } => cmd_validate(&config_path),
        Commands::State { t, rh, p } => cmd_state(t, rh, p),
        Commands::Sweep {
            t_min,
            t_max,
            rh,
            points,
            p,
            output,
        } => cmd_sweep(t_min, t_max, rh, points, p, output.as_deref()),
        Commands::Index(index_cmd) => match index_cmd {
            IndexCommands::Itu { t, rh } => {
                let value = query::itu(t, rh)?;
                println!("ITU = {value:.2}");
                Ok(())
            }
            IndexCommands::Hli { t, rh, sr, ws } => {
                let value = query::hli(t, rh, sr, ws)?;
                println!("HLI = {value:.2}");
                Ok(())
            }
        },
    }
}

fn cmd_render(config_path: &Path, output: Option<&Path>) -> AppResult<()> {
    println!("Rendering chart: {}", config_path.display());
    let response = chart_service::render_to_file(config_path, output)?;
    let geometry = &response.geometry;
    tracing::debug!("{}", geometry.summary());

    println!("✓ Chart written to {}", response.output.display());
    println!("  Isolines: {}", geometry.isolines.len());
    println!("  Zones: {}", geometry.zones.len());
    println!("  Points: {}", geometry.points.len());
    for point in &geometry.points {
        let hli = point
            .hli
            .map(|v| format!(", HLI {v:.1}"))
            .unwrap_or_default();
        println!(
            "    {}: W {:.5} kg/kg, h {:.1} kJ/kg, ITU {:.1}{}",
            point.label, point.w, point.h, point.itu, hli
        );
    }
    Ok(())
}

fn cmd_validate(config_path: &Path) -> AppResult<()> {
    println!("Validating configuration: {}", config_path.display());
    let config = chart_service::load_config(config_path)?;
    println!("✓ Configuration is valid");
    println!(
        "  T range: {} .. {} °C at {} Pa",
        config.chart.t_min, config.chart.t_max, config.chart.pressure
    );
    println!(
        "  Isoline sets: {} ({} enabled)",
        config.isos.len(),
        config.enabled_isolines().count()
    );
    println!("  Zones: {}", config.zones.len());
    println!("  Points: {}", config.points.len());
    Ok(())
}

fn cmd_state(t: f64, rh: f64, p: f64) -> AppResult<()> {
    let state = query::state_point(t, rh, p)?;

    println!("Dry-bulb temperature   {:>12.2} °C", state.t);
    println!("Relative humidity      {:>12.1} %", state.rh * 100.0);
    println!("Total pressure         {:>12.0} Pa", state.p);
    println!("Saturation pressure    {:>12.1} Pa", state.p_sat);
    println!("Vapor pressure         {:>12.1} Pa", state.p_v);
    println!("Humidity ratio         {:>12.5} kg/kg", state.w);
    println!("Specific humidity      {:>12.5} kg/kg", state.q);
    println!("Enthalpy               {:>12.2} kJ/kg", state.h);
    println!("Specific volume        {:>12.4} m³/kg", state.v);
    println!("Density                {:>12.4} kg/m³", state.rho);
    match state.t_dp {
        Some(t_dp) if state.dew_point_converged => {
            println!("Dew-point temperature  {:>12.2} °C", t_dp)
        }
        Some(t_dp) => println!("Dew-point temperature  {:>12.2} °C (not converged)", t_dp),
        None => println!("Dew-point temperature  {:>12} ", "n/a"),
    }
    Ok(())
}

fn cmd_sweep(
    t_min: f64,
    t_max: f64,
    rh: f64,
    points: usize,
    p: f64,
    output: Option<&Path>,
) -> AppResult<()> {
    let sweep = query::temperature_sweep(t_min, t_max, rh, points, p)?;
    if !sweep.dew_point_converged {
        tracing::warn!(rh = sweep.rh, "sweep dew points did not converge");
    }

    if let Some(path) = output {
        std::fs::write(path, sweep.to_csv())?;
        println!(
            "✓ Exported {} sweep points to {}",
            sweep.rows.len(),
            path.display()
        );
        return Ok(());
    }

    println!(
        "Sweep at RH = {:.1} %, P = {:.0} Pa",
        sweep.rh * 100.0,
        sweep.p
    );
    println!(
        "{:>8} {:>10} {:>9} {:>8} {:>8} {:>8}",
        "T [°C]", "W [kg/kg]", "h [kJ/kg]", "v [m³/kg]", "ρ", "Tdp [°C]"
    );
    for row in &sweep.rows {
        let t_dp = row
            .t_dp
            .map(|v| format!("{v:.2}"))
            .unwrap_or_else(|| "n/a".to_string());
        println!(
            "{:>8.2} {:>10.5} {:>9.2} {:>8.4} {:>8.4} {:>8}",
            row.t, row.w, row.h, row.v, row.rho, t_dp
        );
    }
    if !sweep.dew_point_converged {
        println!("  (dew points not converged)");
    }
    Ok(())
}
