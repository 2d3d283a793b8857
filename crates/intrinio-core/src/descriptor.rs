//! Declarative description of one API operation.
//!
//! A [`RequestDescriptor`] names the operation, carries the URL template with
//! `{placeholder}` segments, the path and query arguments, and the optional
//! pagination cursor. [`RequestDescriptor::build_request`] turns it into an
//! [`HttpRequest`] against a [`Configuration`]:
//!
//! 1. every placeholder is replaced by its percent-encoded path argument;
//! 2. query arguments are appended in declaration order, absent ones skipped;
//! 3. the cursor is appended as `next_page`;
//! 4. default headers, `Accept: application/json` and the user agent are set;
//! 5. the API key is attached last, where the configuration says.
//!
//! Validation happens before anything is returned, so an invalid descriptor
//! never reaches the transport.

use crate::config::Configuration;
use crate::error::ApiError;
use crate::http_client::HttpRequest;
use crate::pagination::PageCursor;
use crate::params::QueryValue;

pub const NEXT_PAGE_PARAM: &str = "next_page";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathParam {
    pub name: &'static str,
    pub value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParam {
    pub name: &'static str,
    pub value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    operation: &'static str,
    path_template: &'static str,
    path_params: Vec<PathParam>,
    query_params: Vec<QueryParam>,
    next_page: Option<PageCursor>,
}

impl RequestDescriptor {
    pub fn new(operation: &'static str, path_template: &'static str) -> Self {
        Self {
            operation,
            path_template,
            path_params: Vec::new(),
            query_params: Vec::new(),
            next_page: None,
        }
    }

    /// Required path argument. Blank strings count as missing.
    pub fn path(self, name: &'static str, value: impl QueryValue) -> Self {
        self.path_opt(name, Some(value))
    }

    pub fn path_opt(mut self, name: &'static str, value: Option<impl QueryValue>) -> Self {
        self.path_params.push(PathParam {
            name,
            value: value.map(|value| value.to_query_value()),
        });
        self
    }

    /// Optional query argument; `None` leaves the key out of the URL.
    pub fn query(mut self, name: &'static str, value: Option<impl QueryValue>) -> Self {
        self.query_params.push(QueryParam {
            name,
            value: value.map(|value| value.to_query_value()),
        });
        self
    }

    pub fn next_page(mut self, cursor: Option<PageCursor>) -> Self {
        self.next_page = cursor;
        self
    }

    pub const fn operation(&self) -> &'static str {
        self.operation
    }

    pub const fn path_template(&self) -> &'static str {
        self.path_template
    }

    pub fn query_params(&self) -> &[QueryParam] {
        &self.query_params
    }

    pub fn cursor(&self) -> Option<&PageCursor> {
        self.next_page.as_ref()
    }

    /// Expand the URL template. Fails on the first placeholder without a value.
    pub fn expand_path(&self) -> Result<String, ApiError> {
        let mut path = String::with_capacity(self.path_template.len() + 16);
        let mut rest = self.path_template;

        while let Some(open) = rest.find('{') {
            path.push_str(&rest[..open]);
            let after_open = &rest[open + 1..];
            let close = after_open
                .find('}')
                .ok_or_else(|| ApiError::InvalidParameter {
                    operation: self.operation,
                    parameter: "path",
                    reason: format!("unterminated placeholder in '{}'", self.path_template),
                })?;
            let name = &after_open[..close];
            let value = self.path_value(name)?;
            path.push_str(&urlencoding::encode(value));
            rest = &after_open[close + 1..];
        }
        path.push_str(rest);

        Ok(path)
    }

    fn path_value(&self, name: &str) -> Result<&str, ApiError> {
        let param = self
            .path_params
            .iter()
            .find(|param| param.name == name)
            .ok_or_else(|| self.undeclared_placeholder(name))?;

        match param.value.as_deref() {
            // Dot segments survive percent-encoding and would be collapsed by URL parsing.
            Some(value) if value == "." || value == ".." => Err(ApiError::InvalidParameter {
                operation: self.operation,
                parameter: param.name,
                reason: format!("'{value}' is not a valid path segment"),
            }),
            Some(value) if !value.trim().is_empty() => Ok(value),
            _ => Err(ApiError::MissingParameter {
                operation: self.operation,
                parameter: param.name,
            }),
        }
    }

    fn undeclared_placeholder(&self, name: &str) -> ApiError {
        ApiError::InvalidParameter {
            operation: self.operation,
            parameter: "path",
            reason: format!("placeholder '{{{name}}}' has no declared argument"),
        }
    }

    /// Build the outgoing request. No I/O happens here.
    pub fn build_request(&self, config: &Configuration) -> Result<HttpRequest, ApiError> {
        let path = self.expand_path()?;

        let api_key = config
            .api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or(ApiError::MissingApiKey {
                operation: self.operation,
            })?;

        let mut request = HttpRequest::get(format!("{}{}", config.base_path, path))
            .with_timeout_ms(config.timeout_ms);

        for param in &self.query_params {
            if let Some(value) = &param.value {
                request = request.with_query(param.name, value.clone());
            }
        }

        if let Some(cursor) = &self.next_page {
            request = request.with_query(NEXT_PAGE_PARAM, cursor.as_str());
        }

        for (name, value) in &config.default_headers {
            request = request.with_header(name.clone(), value.clone());
        }

        let request = request
            .with_header("accept", "application/json")
            .with_header("user-agent", config.user_agent.clone());

        Ok(config.api_key_location.apply(api_key, request))
    }
}
