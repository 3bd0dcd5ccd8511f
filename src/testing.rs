//! Fakes of the ports for unit tests.

use error_stack::report;
use serde_json::Value;
use std::{
    path::Path,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    },
};

use crate::adapters::config::sheets_config::SpreadsheetConfig;
use crate::domain::{
    credential::{ConsentGrant, Credential},
    sheets::a1_notation::A1Notation,
};
use crate::ports::{
    consent_flow::{ConsentFlow, ConsentFlowError},
    credential_store::{CredentialStore, CredentialStoreError},
    spreadsheet_api::{AppendSummary, SpreadsheetApi, SpreadsheetApiError, ValueInputOption},
};

pub fn sheets_config() -> SpreadsheetConfig {
    SpreadsheetConfig {
        spreadsheet_id: "sheet-id".into(),
        token_path: "token.json".into(),
        credentials_path: "credentials.json".into(),
    }
}

pub struct InMemoryCredentialStore {
    stored: Mutex<Option<Credential>>,
    has_client_secret: bool,
    saves: AtomicUsize,
}

impl InMemoryCredentialStore {
    pub fn empty() -> Self {
        Self {
            stored: Mutex::new(None),
            has_client_secret: true,
            saves: AtomicUsize::new(0),
        }
    }

    pub fn with_credential(credential: Credential) -> Self {
        Self {
            stored: Mutex::new(Some(credential)),
            ..Self::empty()
        }
    }

    pub fn without_client_secret() -> Self {
        Self {
            has_client_secret: false,
            ..Self::empty()
        }
    }

    pub fn saves(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn load(&self) -> Option<Credential> {
        self.stored.lock().unwrap().clone()
    }

    async fn save(
        &self,
        refresh_token: &str,
    ) -> error_stack::Result<Credential, CredentialStoreError> {
        if !self.has_client_secret {
            return Err(report!(CredentialStoreError::ReadClientSecret));
        }
        self.saves.fetch_add(1, Ordering::SeqCst);
        let credential = Credential::authorized_user("client-id", "client-secret", refresh_token);
        *self.stored.lock().unwrap() = Some(credential.clone());
        Ok(credential)
    }
}

pub struct FakeConsentFlow {
    outcome: Option<ConsentGrant>,
    calls: AtomicUsize,
    scopes: Mutex<Vec<String>>,
}

impl FakeConsentFlow {
    pub fn granting(refresh_token: &str) -> Self {
        Self {
            outcome: Some(ConsentGrant {
                refresh_token: Some(refresh_token.to_string()),
            }),
            calls: AtomicUsize::new(0),
            scopes: Mutex::new(Vec::new()),
        }
    }

    pub fn without_refresh_token() -> Self {
        Self {
            outcome: Some(ConsentGrant::default()),
            ..Self::failing()
        }
    }

    pub fn failing() -> Self {
        Self {
            outcome: None,
            calls: AtomicUsize::new(0),
            scopes: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requested_scopes(&self) -> Vec<String> {
        self.scopes.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl ConsentFlow for FakeConsentFlow {
    async fn request_consent(
        &self,
        scopes: &[&str],
        _client_secret_path: &Path,
    ) -> error_stack::Result<ConsentGrant, ConsentFlowError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.scopes.lock().unwrap() = scopes.iter().map(|s| s.to_string()).collect();
        // Give concurrent callers a chance to pile up on the consent lock.
        tokio::task::yield_now().await;
        self.outcome
            .clone()
            .ok_or(report!(ConsentFlowError::FlowFailed("user denied consent")))
    }
}

pub struct FakeSpreadsheetApi {
    row_count: u32,
    rows: Vec<Vec<Value>>,
    fail: bool,
    spreadsheets: Mutex<Vec<String>>,
    ranges: Mutex<Vec<String>>,
    appended: Mutex<Vec<(String, Vec<Vec<Value>>, ValueInputOption)>>,
}

impl FakeSpreadsheetApi {
    pub fn with_rows(row_count: u32, rows: Vec<Vec<Value>>) -> Self {
        Self {
            row_count,
            rows,
            fail: false,
            spreadsheets: Mutex::new(Vec::new()),
            ranges: Mutex::new(Vec::new()),
            appended: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::with_rows(0, vec![])
        }
    }

    pub fn requested_spreadsheets(&self) -> Vec<String> {
        self.spreadsheets.lock().unwrap().clone()
    }

    pub fn requested_ranges(&self) -> Vec<String> {
        self.ranges.lock().unwrap().clone()
    }

    pub fn appended(&self) -> Vec<(String, Vec<Vec<Value>>, ValueInputOption)> {
        self.appended.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl SpreadsheetApi for FakeSpreadsheetApi {
    async fn grid_row_count(
        &self,
        _credential: &Credential,
        spreadsheet_id: &str,
    ) -> error_stack::Result<u32, SpreadsheetApiError> {
        self.spreadsheets
            .lock()
            .unwrap()
            .push(spreadsheet_id.to_string());
        if self.fail {
            return Err(report!(SpreadsheetApiError::FetchSpreadsheet));
        }
        Ok(self.row_count)
    }

    async fn get_values(
        &self,
        _credential: &Credential,
        _spreadsheet_id: &str,
        range: &A1Notation,
    ) -> error_stack::Result<Vec<Vec<Value>>, SpreadsheetApiError> {
        self.ranges.lock().unwrap().push(range.to_string());
        if self.fail {
            return Err(report!(SpreadsheetApiError::FetchRange));
        }
        Ok(self.rows.clone())
    }

    async fn append_values(
        &self,
        _credential: &Credential,
        _spreadsheet_id: &str,
        range: &A1Notation,
        values: Vec<Vec<Value>>,
        input_option: ValueInputOption,
    ) -> error_stack::Result<AppendSummary, SpreadsheetApiError> {
        if self.fail {
            return Err(report!(SpreadsheetApiError::AppendRange));
        }
        let updated_cells = values.iter().map(Vec::len).sum::<usize>() as i32;
        self.appended
            .lock()
            .unwrap()
            .push((range.to_string(), values, input_option));
        Ok(AppendSummary {
            updated_cells: Some(updated_cells),
            updated_range: Some("Sheet1!A2:C3".to_string()),
        })
    }
}
