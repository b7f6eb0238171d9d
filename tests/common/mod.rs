#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use salesreps_api::ai::{AiResult, AiServiceError, ChatModel, ChatSession};
use salesreps_api::models::config::{AiConfig, ServerConfig};
use serde_json::{Value, json};
use tempfile::TempDir;

/// The two-record document used across the HTTP tests.
pub fn sample_document() -> Value {
    json!({
        "salesReps": [
            {
                "id": 1,
                "name": "John Doe",
                "role": "Senior Sales Rep",
                "region": "North America",
                "skills": ["Negotiation", "CRM Software", "Product Knowledge"],
                "deals": [
                    {"client": "ABC Corp", "value": 75000, "status": "Closed Won"},
                    {"client": "XYZ Inc", "value": 50000, "status": "In Progress"}
                ],
                "clients": [
                    {"name": "ABC Corp", "industry": "Technology", "contact": "john@abccorp.com"},
                    {"name": "XYZ Inc", "industry": "Healthcare", "contact": "jane@xyzinc.com"}
                ]
            },
            {
                "id": 2,
                "name": "Jane Smith",
                "role": "Sales Manager",
                "region": "Europe",
                "skills": ["Team Leadership", "Strategic Planning", "CRM Software"],
                "deals": [
                    {"client": "Euro Tech", "value": 120000, "status": "Closed Won"},
                    {"client": "Med Solutions", "value": 85000, "status": "Closed Lost"}
                ],
                "clients": [
                    {"name": "Euro Tech", "industry": "Technology", "contact": "contact@eurotech.com"},
                    {"name": "Med Solutions", "industry": "Healthcare", "contact": "info@medsolutions.com"}
                ]
            }
        ]
    })
}

/// Data file living in a temporary directory removed on drop.
pub struct TestData {
    _dir: TempDir,
    path: PathBuf,
}

impl TestData {
    pub fn new(contents: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("dummyData.json");
        fs::write(&path, contents).expect("write data file");
        Self { _dir: dir, path }
    }

    pub fn sample() -> Self {
        Self::new(&sample_document().to_string())
    }

    /// Path inside the temp dir that was never written.
    pub fn missing() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("absent.json");
        Self { _dir: dir, path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

pub fn server_config(data_path: &str) -> ServerConfig {
    ServerConfig {
        address: "127.0.0.1".to_string(),
        port: 0,
        data_path: data_path.to_string(),
        default_page_size: 10,
        max_page_size: 100,
        ai: AiConfig {
            api_key: None,
            model: "gemini-2.0-flash".to_string(),
            endpoint: "https://generativelanguage.googleapis.com/v1beta".to_string(),
        },
    }
}

#[derive(Clone, Copy)]
pub enum Script {
    Reply(&'static str),
    FailStart,
    FailSend,
}

/// Chat model that follows a fixed script and records every prompt sent.
#[derive(Clone)]
pub struct ScriptedModel {
    script: Script,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl ScriptedModel {
    pub fn new(script: Script) -> Self {
        Self {
            script,
            prompts: Arc::default(),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().expect("prompts lock").clone()
    }
}

impl ChatModel for ScriptedModel {
    fn start_chat(&self) -> AiResult<Box<dyn ChatSession>> {
        if let Script::FailStart = self.script {
            return Err(AiServiceError::Construction("API Error".into()));
        }
        Ok(Box::new(ScriptedSession {
            script: self.script,
            prompts: Arc::clone(&self.prompts),
        }))
    }
}

struct ScriptedSession {
    script: Script,
    prompts: Arc<Mutex<Vec<String>>>,
}

#[async_trait]
impl ChatSession for ScriptedSession {
    async fn send_message(&mut self, message: &str) -> AiResult<String> {
        self.prompts
            .lock()
            .expect("prompts lock")
            .push(message.to_string());
        match self.script {
            Script::Reply(text) => Ok(text.to_string()),
            _ => Err(AiServiceError::Decode("API Error".into())),
        }
    }
}
