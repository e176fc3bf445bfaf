use anyhow::Result;
use clap::Parser;
use std::time::Duration;
use tour_api_conn::app::{
    App, Lookup, SAMPLE_CONTENT_ID, SAMPLE_CONTENT_TYPE_ID, SAMPLE_LATITUDE, SAMPLE_LONGITUDE,
    SAMPLE_RADIUS,
};
use tour_api_conn::models::{ClientConfig, ResponseFormat, DEFAULT_BASE_URL};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "tour-api-conn")]
#[command(about = "Query the Korean tourism information API")]
struct CliArgs {
    /// Service key issued by data.go.kr (decoded form).
    #[arg(value_name = "SERVICE_KEY")]
    service_key: String,

    /// Response format: json or xml.
    #[arg(value_name = "FORMAT", value_parser = parse_format_arg, default_value_t = ResponseFormat::Json)]
    format: ResponseFormat,

    #[arg(long, default_value_t = SAMPLE_LATITUDE, allow_negative_numbers = true)]
    latitude: f64,

    #[arg(long, default_value_t = SAMPLE_LONGITUDE, allow_negative_numbers = true)]
    longitude: f64,

    /// Search radius in meters.
    #[arg(long, default_value_t = SAMPLE_RADIUS)]
    radius: f64,

    #[arg(long, default_value = SAMPLE_CONTENT_TYPE_ID)]
    content_type_id: String,

    #[arg(long, default_value = SAMPLE_CONTENT_ID)]
    content_id: String,

    /// Service root the endpoint paths are appended to.
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Request timeout in seconds. Requests wait indefinitely when unset.
    #[arg(long)]
    timeout_secs: Option<u64>,
}

impl CliArgs {
    fn config(&self) -> ClientConfig {
        ClientConfig::default()
            .with_base_url(self.base_url.clone())
            .with_timeout(self.timeout_secs.map(Duration::from_secs))
    }

    fn lookup(&self) -> Lookup {
        Lookup {
            latitude: self.latitude,
            longitude: self.longitude,
            radius: self.radius,
            content_type_id: self.content_type_id.clone(),
            content_id: self.content_id.clone(),
            format: self.format,
        }
    }
}

fn parse_format_arg(input: &str) -> std::result::Result<ResponseFormat, String> {
    input.parse()
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tour_api_conn=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Exits with status 2 and a usage message before any request is made.
    let args = CliArgs::parse();

    match App::new(args.service_key.clone(), args.config()) {
        Ok(app) => match app.run(&args.lookup()).await {
            Ok(report) => {
                println!("{}", report.nearby);
                println!("{}", report.detail);
                info!("Lookups completed successfully");
                Ok(())
            }
            Err(e) => {
                error!("Lookup failed: {}", e);
                std::process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to initialize client: {}", e);
            std::process::exit(1);
        }
    }
}
