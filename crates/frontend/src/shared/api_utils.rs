//! API utilities for frontend-backend communication
//!
//! `ApiClient` is built once from [`ApiConfig`] and handed to whoever needs it;
//! it joins resource paths to the base URL and attaches the headers and
//! credentials mode every request needs.

use crate::shared::config::ApiConfig;
use contracts::domain::a001_product::aggregate::ImageUpload;
use contracts::domain::a001_product::payload::{FormPart, FormParts};
use gloo_net::http::{Request, RequestBuilder, Response};
use wasm_bindgen::JsValue;
use web_sys::{Blob, BlobPropertyBag, FormData, RequestCredentials};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("failed to send request: {0}")]
    Network(String),
    #[error("HTTP {status} {status_text}")]
    Status { status: u16, status_text: String },
    #[error("failed to parse response: {0}")]
    Decode(String),
    #[error("failed to build request body: {0}")]
    Encode(String),
    #[error("failed to read file: {0}")]
    File(String),
}

fn js_error(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{e:?}"))
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    /// Build a full API URL from a resource path
    ///
    /// # Example
    /// ```rust,ignore
    /// let url = client.url("products/3"); // http://localhost:8000/api/products/3
    /// ```
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Headers sent with every request, in the order they are set
    pub fn default_headers(&self) -> Vec<(&'static str, String)> {
        let mut headers = vec![("Accept", "application/json".to_string())];
        if !self.config.requested_with.is_empty() {
            headers.push(("X-Requested-With", self.config.requested_with.clone()));
        }
        headers
    }

    fn prepare(&self, builder: RequestBuilder) -> RequestBuilder {
        let builder = self
            .default_headers()
            .into_iter()
            .fold(builder, |b, (name, value)| b.header(name, &value));
        if self.config.with_credentials {
            builder.credentials(RequestCredentials::Include)
        } else {
            builder
        }
    }

    /// GET a resource and return the raw response body
    pub async fn get_text(&self, path: &str) -> Result<String, ApiError> {
        let response = self
            .prepare(Request::get(&self.url(path)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = ensure_ok(response)?;
        response
            .text()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// POST a multipart body. The browser sets the `Content-Type` boundary itself.
    pub async fn post_multipart(&self, path: &str, parts: FormParts) -> Result<(), ApiError> {
        let body = to_form_data(parts)?;
        let request = self
            .prepare(Request::post(&self.url(path)))
            .body(body)
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        ensure_ok(response).map(|_| ())
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let response = self
            .prepare(Request::delete(&self.url(path)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        ensure_ok(response).map(|_| ())
    }
}

fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        Ok(response)
    } else {
        Err(ApiError::Status {
            status: response.status(),
            status_text: response.status_text(),
        })
    }
}

/// Convert multipart parts into a browser `FormData`, preserving their order
pub fn to_form_data(parts: FormParts) -> Result<FormData, ApiError> {
    let form = FormData::new().map_err(|e| ApiError::Encode(js_error(e)))?;
    for (name, part) in parts {
        match part {
            FormPart::Text(value) => form.append_with_str(name, &value),
            FormPart::File(upload) => {
                let blob = upload_blob(&upload)?;
                form.append_with_blob_and_filename(name, &blob, &upload.file_name)
            }
        }
        .map_err(|e| ApiError::Encode(js_error(e)))?;
    }
    Ok(form)
}

fn upload_blob(upload: &ImageUpload) -> Result<Blob, ApiError> {
    let bytes = js_sys::Uint8Array::from(upload.bytes.as_slice());
    let sequence = js_sys::Array::of1(&bytes);
    let options = BlobPropertyBag::new();
    options.set_type(&upload.content_type);
    Blob::new_with_u8_array_sequence_and_options(&sequence, &options)
        .map_err(|e| ApiError::Encode(js_error(e)))
}

/// Read a file picked in an `<input type="file">` into memory
pub async fn read_upload(file: &web_sys::File) -> Result<ImageUpload, ApiError> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| ApiError::File(js_error(e)))?;
    Ok(ImageUpload {
        file_name: file.name(),
        content_type: file.type_(),
        bytes: js_sys::Uint8Array::new(&buffer).to_vec(),
    })
}
