//! Facade over the two tourism API operations.
//!
//! Each call runs the same linear pipeline: default the parameter record,
//! overlay caller values, encode the query with the service key, issue one
//! GET and return the body exactly as received.

use crate::models::{
    ClientConfig, QueryKind, QueryParams, ResponseFormat, DEFAULT_PAGE_SIZE, FIRST_PAGE,
};
use crate::query::build_url;
use crate::transport::Transport;
use crate::Result;
use tracing::debug;

pub struct TourApiClient {
    transport: Box<dyn Transport>,
    service_key: String,
    config: ClientConfig,
}

impl TourApiClient {
    pub fn new(transport: Box<dyn Transport>, service_key: String, config: ClientConfig) -> Self {
        Self {
            transport,
            service_key,
            config,
        }
    }

    /// Defaulted record of `kind` carrying this client's app tags.
    fn defaults(&self, kind: QueryKind, format: ResponseFormat) -> QueryParams {
        let mut params = QueryParams::defaults(kind);
        *params.common_mut() = self.config.common_params(format);
        params
    }

    /// Tourist sights within `radius` meters of a point, first page of ten.
    pub async fn fetch_nearby_sights(
        &self,
        latitude: f64,
        longitude: f64,
        radius: f64,
        format: ResponseFormat,
    ) -> Result<String> {
        let mut params = self.defaults(QueryKind::List, format);
        if let QueryParams::List(query) = &mut params {
            query.map_x = longitude;
            query.map_y = latitude;
            query.radius = radius;
            query.num_of_rows = DEFAULT_PAGE_SIZE;
            query.page_no = FIRST_PAGE;
        }

        self.fetch(&params).await
    }

    /// Common details for one content item.
    pub async fn fetch_sight_detail(
        &self,
        content_type_id: &str,
        content_id: &str,
        format: ResponseFormat,
    ) -> Result<String> {
        let mut params = self.defaults(QueryKind::Detail, format);
        if let QueryParams::Detail(query) = &mut params {
            query.content_type_id = content_type_id.to_string();
            query.content_id = content_id.to_string();
        }

        self.fetch(&params).await
    }

    /// Encode `params` and issue the request for its endpoint.
    pub async fn fetch(&self, params: &QueryParams) -> Result<String> {
        let url = build_url(&self.config.base_url, params, &self.service_key)?;
        debug!(
            "Built {:?} request for {}",
            params.kind(),
            params.endpoint().path()
        );

        self.transport.get(&url).await
    }
}
