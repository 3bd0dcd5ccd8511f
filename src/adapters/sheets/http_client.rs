use error_stack::ResultExt;
use google_sheets4::{hyper, hyper_rustls};
use thiserror::Error;

pub type HttpsConnector = hyper_rustls::HttpsConnector<hyper::client::HttpConnector>;
pub type HttpClient = hyper::Client<HttpsConnector>;

#[derive(Error, Debug)]
pub enum HttpClientError {
    #[error("Failed to load native root certificates")]
    NativeRoots,
}

pub fn http_client() -> error_stack::Result<HttpClient, HttpClientError> {
    let connector = hyper_rustls::HttpsConnectorBuilder::new()
        .with_native_roots()
        .change_context(HttpClientError::NativeRoots)?
        .https_or_http()
        .enable_http1()
        .build();

    Ok(hyper::Client::builder().build(connector))
}
