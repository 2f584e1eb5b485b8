// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Process configuration from environment variables

use std::env;
use std::time::Duration;

/// Runtime configuration, read once at startup
#[derive(Debug, Clone)]
pub struct NodeConfig {
    /// Interface the API server binds to
    pub api_host: String,
    /// Port the API server binds to
    pub api_port: u16,
    /// Base URL of the face-verification sidecar
    pub verifier_endpoint: String,
    /// Transport timeout for sidecar calls
    pub verifier_timeout: Duration,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            api_host: "0.0.0.0".to_string(),
            api_port: 5000,
            verifier_endpoint: "http://127.0.0.1:8500".to_string(),
            verifier_timeout: Duration::from_secs(120),
        }
    }
}

impl NodeConfig {
    /// Read configuration from environment variables, falling back to
    /// defaults for anything unset or unparseable.
    ///
    /// - `API_HOST` - bind interface (default "0.0.0.0")
    /// - `API_PORT` - bind port (default 5000)
    /// - `VERIFIER_ENDPOINT` - sidecar base URL (default "http://127.0.0.1:8500")
    /// - `VERIFIER_TIMEOUT_SECS` - sidecar timeout (default 120)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let api_host = env::var("API_HOST").unwrap_or(defaults.api_host);
        let api_port = env::var("API_PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(defaults.api_port);
        let verifier_endpoint =
            env::var("VERIFIER_ENDPOINT").unwrap_or(defaults.verifier_endpoint);
        let verifier_timeout = env::var("VERIFIER_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.verifier_timeout);

        Self {
            api_host,
            api_port,
            verifier_endpoint,
            verifier_timeout,
        }
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.api_host, self.api_port)
    }
}
