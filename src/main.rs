use clap::{Parser, Subcommand};
use primix_core::{
    compose_color, cube_exit_point, determinant, is_linearly_independent, solve_mixing_ratios,
    CancellationToken, Color, CoverageEstimator, GridOrigin, PrimaryBasis,
};
use serde_json::json;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use primix::api;
use primix::models::AppConfig;
use primix::server;

#[derive(Parser)]
#[command(name = "primix")]
#[command(about = "Primix - mixing ratios and gamut coverage for user-chosen primaries")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Check whether three primaries are linearly independent
    Check {
        /// Primaries as comma-separated hex colors (e.g. "#FF0000,#00FF00,#0000FF")
        #[arg(short, long)]
        primaries: Option<PrimaryBasis>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Solve the mixing ratios that reproduce a target color
    Ratio {
        /// Primaries as comma-separated hex colors
        #[arg(short, long)]
        primaries: Option<PrimaryBasis>,

        /// Target color as hex (e.g. "#808080")
        #[arg(short, long)]
        target: Color,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Mix the primaries at the given slider positions
    Mix {
        /// Primaries as comma-separated hex colors
        #[arg(short, long)]
        primaries: Option<PrimaryBasis>,

        /// Slider positions as "R,G,B" (0-255 each) or a hex color
        #[arg(short, long, value_parser = parse_sliders)]
        ratios: Color,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Estimate the share of the color cube reachable from the primaries
    Coverage {
        /// Primaries as comma-separated hex colors
        #[arg(short, long)]
        primaries: Option<PrimaryBasis>,

        /// Grid spacing (1-255); defaults to the configured step
        #[arg(short, long)]
        step: Option<u32>,

        /// Grid origin: "center" or "corner"
        #[arg(short, long)]
        origin: Option<GridOrigin>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Primix API",
        description = "Mixing ratios and gamut coverage for user-chosen primaries",
        version = "0.1.0",
        license(name = "MIT")
    ),
    paths(
        api::handle_independence,
        api::handle_ratio,
        api::handle_mix,
        api::handle_coverage,
    ),
    components(schemas(
        api::ColorInput,
        api::RgbValue,
        api::IndependenceRequest,
        api::IndependenceResponse,
        api::RatioRequest,
        api::RatioResponse,
        api::MixRequest,
        api::MixResponse,
        api::CoverageRequest,
        api::CoverageResponse,
        api::AxisInfo,
    )),
    tags(
        (name = "Mixing", description = "Independence, ratio solving and mixing"),
        (name = "Coverage", description = "Gamut coverage estimation")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve) => run_server().await,
        Some(Commands::Check { primaries, json }) => {
            init_cli_tracing();
            run_check_command(resolve_primaries(primaries), json)
        }
        Some(Commands::Ratio {
            primaries,
            target,
            json,
        }) => {
            init_cli_tracing();
            run_ratio_command(resolve_primaries(primaries), target, json)
        }
        Some(Commands::Mix {
            primaries,
            ratios,
            json,
        }) => {
            init_cli_tracing();
            run_mix_command(resolve_primaries(primaries), ratios, json)
        }
        Some(Commands::Coverage {
            primaries,
            step,
            origin,
            json,
        }) => {
            init_cli_tracing();
            run_coverage_command(primaries, step, origin, json).await
        }
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Minimal logging for one-shot commands
fn init_cli_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "primix=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

/// `--primaries` if given, otherwise the configured default basis
fn resolve_primaries(primaries: Option<PrimaryBasis>) -> PrimaryBasis {
    primaries.unwrap_or_else(|| AppConfig::from_env().default_basis())
}

/// Parse slider positions from "R,G,B" or a hex color
fn parse_sliders(s: &str) -> Result<Color, String> {
    if !s.contains(',') {
        return s.parse::<Color>().map_err(|e| e.to_string());
    }

    let values = s
        .split(',')
        .map(|p| {
            p.trim()
                .parse::<f64>()
                .map_err(|e| format!("invalid slider value '{}': {e}", p.trim()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    match values.as_slice() {
        [r, g, b] if values.iter().all(|v| v.is_finite()) => Ok(Color::new(*r, *g, *b)),
        [_, _, _] => Err("slider values must be finite".to_string()),
        _ => Err(format!("expected 3 slider values, got {}", values.len())),
    }
}

fn print_json(value: &serde_json::Value) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run_check_command(basis: PrimaryBasis, json: bool) -> anyhow::Result<()> {
    let independent = is_linearly_independent(&basis);
    let det = determinant(&basis);

    if json {
        return print_json(&json!({ "independent": independent, "determinant": det }));
    }

    println!("Primaries:   {}, {}, {}", basis.color1, basis.color2, basis.color3);
    println!("Determinant: {det}");
    if independent {
        println!("Independent: yes");
    } else {
        println!("Independent: no (the primaries cannot mix every color)");
    }
    Ok(())
}

fn run_ratio_command(basis: PrimaryBasis, target: Color, json: bool) -> anyhow::Result<()> {
    let ratios = solve_mixing_ratios(&basis, &target);
    let independent = is_linearly_independent(&basis);
    let sliders = ratios.slider_positions();

    if json {
        return print_json(&json!({
            "independent": independent,
            "x": ratios.x,
            "y": ratios.y,
            "z": ratios.z,
            "reachable": ratios.is_reachable(),
            "sliders": sliders,
        }));
    }

    if !independent {
        println!("Primaries are linearly dependent; ratios fall back to zero.");
    }
    println!("Target:    {target}");
    println!("Ratios:    x = {:.6}, y = {:.6}, z = {:.6}", ratios.x, ratios.y, ratios.z);
    println!("Sliders:   {:.1}, {:.1}, {:.1}", sliders.r, sliders.g, sliders.b);
    println!(
        "Reachable: {}",
        if ratios.is_reachable() { "yes" } else { "no" }
    );
    Ok(())
}

fn run_mix_command(basis: PrimaryBasis, sliders: Color, json: bool) -> anyhow::Result<()> {
    let mixed = compose_color(&basis, &sliders);

    if json {
        let [r, g, b] = mixed.color;
        return print_json(&json!({
            "color": { "r": r, "g": g, "b": b },
            "hex": mixed.hex,
            "color_hex": mixed.color_hex(),
        }));
    }

    let [r, g, b] = mixed.color;
    println!("Color:     ({r}, {g}, {b}) {}", mixed.color_hex());
    println!("Sliders:   {}", mixed.hex);
    Ok(())
}

async fn run_coverage_command(
    primaries: Option<PrimaryBasis>,
    step: Option<u32>,
    origin: Option<GridOrigin>,
    json: bool,
) -> anyhow::Result<()> {
    let config = AppConfig::from_env();
    let basis = primaries.unwrap_or_else(|| config.default_basis());
    let step = step.unwrap_or(config.coverage.step);
    let origin = origin.unwrap_or(config.coverage.origin);

    // Ctrl-C stops the scan at the next r-slice
    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            on_interrupt.cancel();
        }
    });

    let result = CoverageEstimator::new(basis)
        .step(step)
        .origin(origin)
        .collect_samples(false)
        .cancel_token(cancel)
        .run()
        .await?;

    if json {
        let axes: Vec<_> = basis
            .colors()
            .iter()
            .map(|c| json!({ "primary": c, "exit": cube_exit_point(c) }))
            .collect();
        return print_json(&json!({
            "percentage": result.percentage,
            "total": result.total,
            "step": step,
            "origin": origin,
            "axes": axes,
        }));
    }

    println!("Primaries: {}, {}, {}", basis.color1, basis.color2, basis.color3);
    println!("Grid:      step {step}, origin {origin}, {} samples", result.total);
    println!("Coverage:  {:.2}%", result.percentage);
    if result.total == 0 {
        println!("(the primaries are linearly dependent)");
    }
    Ok(())
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let bind_addr = std::env::var("BIND_ADDR").ok();
    let config_file = std::env::var("CONFIG_FILE").ok();

    println!("Primix v{VERSION}");
    println!("Mixing ratios and gamut coverage for user-chosen primaries\n");

    println!("Environment Variables:");
    println!(
        "  BIND_ADDR   = {}",
        bind_addr.as_deref().unwrap_or("0.0.0.0:3000 (default)")
    );
    println!(
        "  CONFIG_FILE = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );

    let config_source = match AppConfig::config_path() {
        Some(path) if path.exists() => path.display().to_string(),
        Some(path) => format!("{} (not found, using defaults)", path.display()),
        None => "built-in defaults".to_string(),
    };
    let config = AppConfig::from_env();

    println!("\nConfiguration:");
    println!("  Source:    {config_source}");
    println!("  Primaries: {}", config.primaries.join(", "));
    println!(
        "  Coverage:  step {}, origin {}, min step {}",
        config.coverage.step, config.coverage.origin, config.coverage.min_step
    );

    println!("\nCommands:");
    println!("  primix serve      Start the HTTP server");
    println!("  primix check      Check primaries for linear independence");
    println!("  primix ratio      Solve mixing ratios for a target color");
    println!("  primix mix        Mix primaries at slider positions");
    println!("  primix coverage   Estimate gamut coverage");
    println!("\nRun 'primix --help' for more details.");
}

/// Run the HTTP server
async fn run_server() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "primix=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

    let config = AppConfig::from_env();
    tracing::info!(
        config = ?AppConfig::config_path().map(|p| p.display().to_string()).unwrap_or_else(|| "defaults".to_string()),
        primaries = ?config.primaries,
        "Configuration resolved"
    );

    let state = server::create_app_state(config);
    let shutdown = state.shutdown.clone();

    // Build router: start with shared API routes, add production-only routes
    let app = server::build_router(state)
        // OpenAPI documentation (production only)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "Primix server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown))
        .await?;

    tracing::info!("Primix server stopped");
    Ok(())
}

/// Resolve on Ctrl-C and cancel in-flight coverage scans
async fn shutdown_signal(token: CancellationToken) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(%e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown requested");
    token.cancel();
}
