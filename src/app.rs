//! Command-line orchestration: look up sights near a point and the details of
//! one content item, returning both bodies for printing.

use crate::client::TourApiClient;
use crate::models::{ClientConfig, ResponseFormat};
use crate::transport::{HttpTransport, Transport};
use crate::Result;
use tracing::info;

/// Seoul City Hall.
pub const SAMPLE_LATITUDE: f64 = 37.566535;
pub const SAMPLE_LONGITUDE: f64 = 126.977969;
pub const SAMPLE_RADIUS: f64 = 2000.0;
/// Tourist attraction content type.
pub const SAMPLE_CONTENT_TYPE_ID: &str = "14";
pub const SAMPLE_CONTENT_ID: &str = "129898";

/// What to look up on a single run.
#[derive(Debug, Clone, PartialEq)]
pub struct Lookup {
    pub latitude: f64,
    pub longitude: f64,
    pub radius: f64,
    pub content_type_id: String,
    pub content_id: String,
    pub format: ResponseFormat,
}

impl Default for Lookup {
    fn default() -> Self {
        Self {
            latitude: SAMPLE_LATITUDE,
            longitude: SAMPLE_LONGITUDE,
            radius: SAMPLE_RADIUS,
            content_type_id: SAMPLE_CONTENT_TYPE_ID.to_string(),
            content_id: SAMPLE_CONTENT_ID.to_string(),
            format: ResponseFormat::default(),
        }
    }
}

/// Raw bodies from one run, in request order.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub nearby: String,
    pub detail: String,
}

pub struct App {
    client: TourApiClient,
}

impl App {
    /// Build an app around an arbitrary transport; used by tests to inject mocks.
    pub fn with_transport(
        transport: Box<dyn Transport>,
        service_key: String,
        config: ClientConfig,
    ) -> Self {
        Self {
            client: TourApiClient::new(transport, service_key, config),
        }
    }

    /// Construct an app that talks to the network.
    pub fn new(service_key: String, config: ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(config.timeout)?;
        info!("Using endpoint root {}", config.base_url);
        Ok(Self::with_transport(Box::new(transport), service_key, config))
    }

    /// Run both lookups, one after the other. The first failure aborts the run.
    pub async fn run(&self, lookup: &Lookup) -> Result<Report> {
        let nearby = self
            .client
            .fetch_nearby_sights(
                lookup.latitude,
                lookup.longitude,
                lookup.radius,
                lookup.format,
            )
            .await?;

        let detail = self
            .client
            .fetch_sight_detail(&lookup.content_type_id, &lookup.content_id, lookup.format)
            .await?;

        Ok(Report { nearby, detail })
    }
}
