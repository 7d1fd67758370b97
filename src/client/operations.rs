//! Static descriptors for the Search Console API operations.
//!
//! Each [`Operation`] records the verb, the API base, the path template and
//! the parameters of one upstream endpoint. Tools never build URLs by hand;
//! they render an operation with their arguments.

use serde::Serialize;

use super::error::{ApiError, ApiResult};

/// HTTP verbs used by the Search Console API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// Which API host an operation lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiBase {
    /// `https://www.googleapis.com/webmasters/v3`
    Webmasters,
    /// `https://searchconsole.googleapis.com/v1`
    SearchConsole,
}

/// Where a parameter is placed in the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamLocation {
    Path,
    Query,
    Body,
}

/// One parameter of an operation.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ParamSpec {
    pub name: &'static str,
    pub location: ParamLocation,
    pub required: bool,
}

/// Descriptor of a single upstream API operation.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Operation {
    /// Discovery-style id, e.g. `sitemaps.submit`.
    pub id: &'static str,
    pub method: HttpMethod,
    pub base: ApiBase,
    /// Path relative to the base, with `{name}` placeholders.
    pub path: &'static str,
    pub params: &'static [ParamSpec],
    pub description: &'static str,
}

const fn path(name: &'static str) -> ParamSpec {
    ParamSpec {
        name,
        location: ParamLocation::Path,
        required: true,
    }
}

const fn query(name: &'static str) -> ParamSpec {
    ParamSpec {
        name,
        location: ParamLocation::Query,
        required: false,
    }
}

const fn body(name: &'static str, required: bool) -> ParamSpec {
    ParamSpec {
        name,
        location: ParamLocation::Body,
        required,
    }
}

pub const SITES_LIST: Operation = Operation {
    id: "sites.list",
    method: HttpMethod::Get,
    base: ApiBase::Webmasters,
    path: "sites",
    params: &[],
    description: "Lists the user's Search Console sites.",
};

pub const SITES_GET: Operation = Operation {
    id: "sites.get",
    method: HttpMethod::Get,
    base: ApiBase::Webmasters,
    path: "sites/{siteUrl}",
    params: &[path("siteUrl")],
    description: "Retrieves information about a specific site.",
};

pub const SITES_ADD: Operation = Operation {
    id: "sites.add",
    method: HttpMethod::Put,
    base: ApiBase::Webmasters,
    path: "sites/{siteUrl}",
    params: &[path("siteUrl")],
    description: "Adds a site to the set of the user's sites in Search Console.",
};

pub const SITES_DELETE: Operation = Operation {
    id: "sites.delete",
    method: HttpMethod::Delete,
    base: ApiBase::Webmasters,
    path: "sites/{siteUrl}",
    params: &[path("siteUrl")],
    description: "Removes a site from the set of the user's Search Console sites.",
};

pub const SITEMAPS_LIST: Operation = Operation {
    id: "sitemaps.list",
    method: HttpMethod::Get,
    base: ApiBase::Webmasters,
    path: "sites/{siteUrl}/sitemaps",
    params: &[path("siteUrl"), query("sitemapIndex")],
    description: "Lists the sitemaps submitted for a site, or included in a sitemap index.",
};

pub const SITEMAPS_GET: Operation = Operation {
    id: "sitemaps.get",
    method: HttpMethod::Get,
    base: ApiBase::Webmasters,
    path: "sites/{siteUrl}/sitemaps/{feedpath}",
    params: &[path("siteUrl"), path("feedpath")],
    description: "Retrieves information about a specific sitemap.",
};

pub const SITEMAPS_SUBMIT: Operation = Operation {
    id: "sitemaps.submit",
    method: HttpMethod::Put,
    base: ApiBase::Webmasters,
    path: "sites/{siteUrl}/sitemaps/{feedpath}",
    params: &[path("siteUrl"), path("feedpath")],
    description: "Submits a sitemap for a site.",
};

pub const SITEMAPS_DELETE: Operation = Operation {
    id: "sitemaps.delete",
    method: HttpMethod::Delete,
    base: ApiBase::Webmasters,
    path: "sites/{siteUrl}/sitemaps/{feedpath}",
    params: &[path("siteUrl"), path("feedpath")],
    description: "Deletes a sitemap from a site.",
};

pub const SEARCH_ANALYTICS_QUERY: Operation = Operation {
    id: "searchanalytics.query",
    method: HttpMethod::Post,
    base: ApiBase::Webmasters,
    path: "sites/{siteUrl}/searchAnalytics/query",
    params: &[
        path("siteUrl"),
        body("startDate", true),
        body("endDate", true),
        body("dimensions", false),
        body("type", false),
        body("dimensionFilterGroups", false),
        body("aggregationType", false),
        body("rowLimit", false),
        body("startRow", false),
        body("dataState", false),
    ],
    description: "Queries search traffic data with filters and parameters that you define.",
};

pub const URL_INSPECTION_INDEX_INSPECT: Operation = Operation {
    id: "urlInspection.index.inspect",
    method: HttpMethod::Post,
    base: ApiBase::SearchConsole,
    path: "urlInspection/index:inspect",
    params: &[
        body("inspectionUrl", true),
        body("siteUrl", true),
        body("languageCode", false),
    ],
    description: "Inspects a URL in the Google index and reports its status.",
};

/// Every operation exposed by this crate.
pub const ALL_OPERATIONS: &[Operation] = &[
    SITES_LIST,
    SITES_GET,
    SITES_ADD,
    SITES_DELETE,
    SITEMAPS_LIST,
    SITEMAPS_GET,
    SITEMAPS_SUBMIT,
    SITEMAPS_DELETE,
    SEARCH_ANALYTICS_QUERY,
    URL_INSPECTION_INDEX_INSPECT,
];

/// Look up an operation by id.
pub fn find_operation(id: &str) -> Option<&'static Operation> {
    ALL_OPERATIONS.iter().find(|op| op.id == id)
}

impl Operation {
    /// Substitute path arguments into the template.
    ///
    /// Each value is percent-encoded as a single segment, so a site URL such
    /// as `https://example.com/` stays one segment. A placeholder without a
    /// non-blank argument fails with [`ApiError::MissingParameter`].
    pub fn render_path(&self, args: &[(&str, &str)]) -> ApiResult<String> {
        let mut rendered = String::with_capacity(self.path.len());
        let mut rest = self.path;

        while let Some(open) = rest.find('{') {
            let close = rest[open..]
                .find('}')
                .map(|i| open + i)
                .ok_or_else(|| ApiError::Decode(format!("Malformed path template: {}", self.path)))?;

            let name = &rest[open + 1..close];
            let value = args
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| value.trim())
                .filter(|value| !value.is_empty())
                .ok_or_else(|| ApiError::missing(name))?;

            rendered.push_str(&rest[..open]);
            rendered.push_str(&urlencoding::encode(value));
            rest = &rest[close + 1..];
        }

        rendered.push_str(rest);
        Ok(rendered)
    }

    /// Names of the required parameters.
    pub fn required_params(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.params.iter().filter(|p| p.required).map(|p| p.name)
    }
}
