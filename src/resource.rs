//! Resource locations and fetching.
//!
//! Catalog resources are either HTTP(S) URLs or local filesystem paths. A
//! resource whose name ends in `.br` is Brotli-compressed and is decoded
//! transparently after fetching.

use std::collections::HashMap;
use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};

use brotli::Decompressor;
use once_cell::sync::OnceCell;
use thiserror::Error;
use url::Url;

use crate::traits::ResourceFetcher;

/// Default catalog resource name, relative to the working directory.
pub const DEFAULT_CATALOG_RESOURCE: &str = "CLASSIFY.csv";

/// Default phone model list resource name, relative to the working directory.
pub const DEFAULT_PHONE_MODELS_RESOURCE: &str = "phone_model_dict.txt";

/// Errors produced while fetching a resource.
#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("request to {url} failed")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("failed to decompress {location}")]
    Decompress {
        location: String,
        #[source]
        source: std::io::Error,
    },
    #[error("resource not found: {0}")]
    NotFound(String),
}

/// Where a resource lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceLocation {
    Url(Url),
    Path(PathBuf),
}

impl ResourceLocation {
    /// Interprets a user-supplied string as a URL (http/https) or a path.
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        match Url::parse(input) {
            // Schemes come back lowercased
            Ok(url) if matches!(url.scheme(), "http" | "https") => ResourceLocation::Url(url),
            _ => ResourceLocation::Path(PathBuf::from(input)),
        }
    }

    /// True when the resource name ends with `.br`.
    pub fn is_brotli(&self) -> bool {
        match self {
            ResourceLocation::Url(url) => url.path().ends_with(".br"),
            ResourceLocation::Path(path) => path.extension().is_some_and(|ext| ext == "br"),
        }
    }

    /// Last path segment, used in status messages.
    pub fn file_name(&self) -> String {
        match self {
            ResourceLocation::Url(url) => url
                .path_segments()
                .and_then(|segments| segments.filter(|segment| !segment.is_empty()).last())
                .map(str::to_string)
                .unwrap_or_else(|| url.to_string()),
            ResourceLocation::Path(path) => path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
        }
    }

    /// Resolves a reference found inside this resource (an image URL in a
    /// catalog row) into a URI the image loaders understand.
    ///
    /// Absolute URIs are returned unchanged. Relative references are joined
    /// with the directory of this resource; filesystem results use `file://`.
    /// A reference that cannot be resolved is returned as written.
    pub fn resolve_reference(&self, reference: &str) -> String {
        let reference = reference.trim();
        if is_absolute_uri(reference) {
            return reference.to_string();
        }

        let resolved = match self {
            ResourceLocation::Url(base) => base.join(reference).ok(),
            ResourceLocation::Path(_) if Path::new(reference).is_absolute() => {
                Url::from_file_path(reference).ok()
            }
            ResourceLocation::Path(path) => {
                directory_url(path).and_then(|base| base.join(reference).ok())
            }
        };
        match resolved {
            Some(url) => url.into(),
            None => reference.to_string(),
        }
    }
}

impl fmt::Display for ResourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceLocation::Url(url) => f.write_str(url.as_str()),
            ResourceLocation::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

fn is_absolute_uri(reference: &str) -> bool {
    // A one-letter scheme is a Windows drive, not a URI
    Url::parse(reference).is_ok_and(|url| url.scheme().len() > 1)
}

/// `file://` URL of the directory holding `path`, relative paths taken
/// from the working directory.
fn directory_url(path: &Path) -> Option<Url> {
    let parent = path.parent().unwrap_or_else(|| Path::new(""));
    let directory = std::env::current_dir().ok()?.join(parent);
    Url::from_directory_path(directory).ok()
}

/// Fetches local files from disk and URLs with a blocking HTTP client.
///
/// The HTTP client is built on first use so purely local sessions never
/// initialise TLS.
#[derive(Default)]
pub struct DefaultFetcher {
    client: OnceCell<reqwest::blocking::Client>,
}

impl DefaultFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    fn client(&self, url: &str) -> Result<&reqwest::blocking::Client, ResourceError> {
        self.client.get_or_try_init(|| {
            reqwest::blocking::Client::builder()
                .user_agent(concat!("rcatalog/", env!("CARGO_PKG_VERSION")))
                .build()
                .map_err(|source| ResourceError::Http {
                    url: url.to_string(),
                    source,
                })
        })
    }
}

impl ResourceFetcher for DefaultFetcher {
    fn fetch(&self, location: &ResourceLocation) -> Result<Vec<u8>, ResourceError> {
        match location {
            ResourceLocation::Path(path) => std::fs::read(path).map_err(|source| ResourceError::Io {
                path: path.clone(),
                source,
            }),
            ResourceLocation::Url(url) => {
                let http_error = |source| ResourceError::Http {
                    url: url.to_string(),
                    source,
                };
                let response = self.client(url.as_str())?.get(url.clone()).send().map_err(http_error)?;
                let status = response.status();
                if !status.is_success() {
                    return Err(ResourceError::Status {
                        url: url.to_string(),
                        status: status.as_u16(),
                    });
                }
                let bytes = response.bytes().map_err(http_error)?;
                Ok(bytes.to_vec())
            }
        }
    }
}

/// In-memory fetcher keyed by the display form of a location.
#[derive(Debug, Default, Clone)]
pub struct MemoryFetcher {
    resources: HashMap<String, Vec<u8>>,
}

impl MemoryFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_resource(mut self, location: &str, contents: impl Into<Vec<u8>>) -> Self {
        self.resources
            .insert(ResourceLocation::parse(location).to_string(), contents.into());
        self
    }
}

impl ResourceFetcher for MemoryFetcher {
    fn fetch(&self, location: &ResourceLocation) -> Result<Vec<u8>, ResourceError> {
        let key = location.to_string();
        self.resources
            .get(&key)
            .cloned()
            .ok_or(ResourceError::NotFound(key))
    }
}

/// Fetches a resource and undoes Brotli compression when the name asks for it.
pub fn fetch_bytes(
    fetcher: &dyn ResourceFetcher,
    location: &ResourceLocation,
) -> Result<Vec<u8>, ResourceError> {
    let raw = fetcher.fetch(location)?;
    if !location.is_brotli() {
        return Ok(raw);
    }

    let mut decoded = Vec::with_capacity(raw.len() * 4);
    Decompressor::new(raw.as_slice(), 4096)
        .read_to_end(&mut decoded)
        .map_err(|source| ResourceError::Decompress {
            location: location.to_string(),
            source,
        })?;
    Ok(decoded)
}

/// Fetches a resource as text (UTF-8, invalid sequences replaced, BOM removed).
pub fn fetch_text(
    fetcher: &dyn ResourceFetcher,
    location: &ResourceLocation,
) -> Result<String, ResourceError> {
    fetch_bytes(fetcher, location).map(decode_text)
}

pub fn decode_text(bytes: Vec<u8>) -> String {
    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
    };
    match text.strip_prefix('\u{feff}') {
        Some(stripped) => stripped.to_string(),
        None => text,
    }
}
