//! Data models and structures
//!
//! Defines the request parameter records for the two tourism API operations,
//! the value types their fields carry, and the client configuration.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.visitkorea.or.kr/openapi/service/rest/KorService";
pub const DEFAULT_MOBILE_OS: &str = "ETC";
pub const DEFAULT_MOBILE_APP: &str = "TourAPI3.0_Guide";

/// Page size used by the nearby-sights lookup.
pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const FIRST_PAGE: u32 = 1;

/// `Y`/`N` inclusion flag as the API spells it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YesNo {
    #[default]
    Yes,
    No,
}

impl YesNo {
    pub fn as_str(&self) -> &'static str {
        match self {
            YesNo::Yes => "Y",
            YesNo::No => "N",
        }
    }
}

impl fmt::Display for YesNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort order code for list results.
///
/// The `*WithImage` variants restrict results to entries that carry a
/// representative image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Arrange {
    #[default]
    Title,
    Views,
    Modified,
    Created,
    Distance,
    TitleWithImage,
    ViewsWithImage,
    ModifiedWithImage,
    CreatedWithImage,
    DistanceWithImage,
}

impl Arrange {
    pub fn code(&self) -> &'static str {
        match self {
            Arrange::Title => "A",
            Arrange::Views => "B",
            Arrange::Modified => "C",
            Arrange::Created => "D",
            Arrange::Distance => "E",
            Arrange::TitleWithImage => "O",
            Arrange::ViewsWithImage => "P",
            Arrange::ModifiedWithImage => "Q",
            Arrange::CreatedWithImage => "R",
            Arrange::DistanceWithImage => "S",
        }
    }
}

impl fmt::Display for Arrange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Body format requested from the API (`_type`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseFormat {
    #[default]
    Json,
    Xml,
}

impl ResponseFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseFormat::Json => "json",
            ResponseFormat::Xml => "xml",
        }
    }
}

impl fmt::Display for ResponseFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResponseFormat {
    type Err = String;

    fn from_str(input: &str) -> std::result::Result<Self, Self::Err> {
        match input.to_ascii_lowercase().as_str() {
            "json" => Ok(ResponseFormat::Json),
            "xml" => Ok(ResponseFormat::Xml),
            _ => Err(format!(
                "Invalid format '{}'. Expected one of: json, xml",
                input
            )),
        }
    }
}

/// Fields every request carries.
#[derive(Debug, Clone, PartialEq)]
pub struct CommonParams {
    pub mobile_os: String,
    pub mobile_app: String,
    pub format: ResponseFormat,
}

impl Default for CommonParams {
    fn default() -> Self {
        Self {
            mobile_os: DEFAULT_MOBILE_OS.to_string(),
            mobile_app: DEFAULT_MOBILE_APP.to_string(),
            format: ResponseFormat::default(),
        }
    }
}

impl CommonParams {
    fn query_pairs(&self) -> [(&'static str, String); 3] {
        [
            ("MobileOS", self.mobile_os.clone()),
            ("MobileApp", self.mobile_app.clone()),
            ("_type", self.format.to_string()),
        ]
    }
}

/// Location based list lookup (`locationBasedList`).
#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery {
    /// Longitude.
    pub map_x: f64,
    /// Latitude.
    pub map_y: f64,
    /// Search radius in meters.
    pub radius: f64,
    pub list_yn: YesNo,
    pub arrange: Arrange,
    pub num_of_rows: u32,
    pub page_no: u32,
    pub common: CommonParams,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            map_x: 0.0,
            map_y: 0.0,
            radius: 0.0,
            list_yn: YesNo::Yes,
            arrange: Arrange::Title,
            num_of_rows: DEFAULT_PAGE_SIZE,
            page_no: FIRST_PAGE,
            common: CommonParams::default(),
        }
    }
}

impl ListQuery {
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("mapX", self.map_x.to_string()),
            ("mapY", self.map_y.to_string()),
            ("radius", self.radius.to_string()),
            ("listYN", self.list_yn.to_string()),
            ("arrange", self.arrange.to_string()),
            ("numOfRows", self.num_of_rows.to_string()),
            ("pageNo", self.page_no.to_string()),
        ];
        pairs.extend(self.common.query_pairs());
        pairs
    }
}

/// Common detail lookup for a single content item (`detailCommon`).
#[derive(Debug, Clone, PartialEq)]
pub struct DetailQuery {
    pub content_type_id: String,
    pub content_id: String,
    pub default_yn: YesNo,
    pub first_image_yn: YesNo,
    pub area_code_yn: YesNo,
    pub cat_code_yn: YesNo,
    pub addr_info_yn: YesNo,
    pub map_info_yn: YesNo,
    pub overview_yn: YesNo,
    pub common: CommonParams,
}

impl Default for DetailQuery {
    fn default() -> Self {
        Self {
            content_type_id: String::new(),
            content_id: String::new(),
            default_yn: YesNo::Yes,
            first_image_yn: YesNo::Yes,
            area_code_yn: YesNo::Yes,
            cat_code_yn: YesNo::Yes,
            addr_info_yn: YesNo::Yes,
            map_info_yn: YesNo::Yes,
            overview_yn: YesNo::Yes,
            common: CommonParams::default(),
        }
    }
}

impl DetailQuery {
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("contentTypeId", self.content_type_id.clone()),
            ("contentId", self.content_id.clone()),
            ("defaultYN", self.default_yn.to_string()),
            ("firstImageYN", self.first_image_yn.to_string()),
            ("areacodeYN", self.area_code_yn.to_string()),
            ("catcodeYN", self.cat_code_yn.to_string()),
            ("addrinfoYN", self.addr_info_yn.to_string()),
            ("mapinfoYN", self.map_info_yn.to_string()),
            ("overviewYN", self.overview_yn.to_string()),
        ];
        pairs.extend(self.common.query_pairs());
        pairs
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    List,
    Detail,
}

/// API operation path below the service root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    LocationBasedList,
    DetailCommon,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::LocationBasedList => "locationBasedList",
            Endpoint::DetailCommon => "detailCommon",
        }
    }
}

/// Parameters for exactly one request.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryParams {
    List(ListQuery),
    Detail(DetailQuery),
}

impl QueryParams {
    /// Fully defaulted record of the requested kind.
    pub fn defaults(kind: QueryKind) -> Self {
        match kind {
            QueryKind::List => QueryParams::List(ListQuery::default()),
            QueryKind::Detail => QueryParams::Detail(DetailQuery::default()),
        }
    }

    /// Shared fields of whichever record is active.
    pub fn common_mut(&mut self) -> &mut CommonParams {
        match self {
            QueryParams::List(query) => &mut query.common,
            QueryParams::Detail(query) => &mut query.common,
        }
    }

    pub fn kind(&self) -> QueryKind {
        match self {
            QueryParams::List(_) => QueryKind::List,
            QueryParams::Detail(_) => QueryKind::Detail,
        }
    }

    pub fn endpoint(&self) -> Endpoint {
        match self {
            QueryParams::List(_) => Endpoint::LocationBasedList,
            QueryParams::Detail(_) => Endpoint::DetailCommon,
        }
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        match self {
            QueryParams::List(query) => query.query_pairs(),
            QueryParams::Detail(query) => query.query_pairs(),
        }
    }
}

// Configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub mobile_os: String,
    pub mobile_app: String,
    /// `None` leaves requests without a deadline.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            mobile_os: DEFAULT_MOBILE_OS.to_string(),
            mobile_app: DEFAULT_MOBILE_APP.to_string(),
            timeout: None,
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Shared request fields for the given response format.
    pub fn common_params(&self, format: ResponseFormat) -> CommonParams {
        CommonParams {
            mobile_os: self.mobile_os.clone(),
            mobile_app: self.mobile_app.clone(),
            format,
        }
    }
}
