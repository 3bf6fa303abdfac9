//! Static clinic registry: logical id -> MCP endpoint URL.
//!
//! The router is the only component that knows the network topology; clinic
//! daemons have no knowledge of each other. The mapping is fixed at process
//! start — there is no dynamic registration, service discovery is out of
//! scope. In production these entries would come from environment
//! configuration.

use std::collections::HashMap;

pub struct Registry {
    endpoints: HashMap<String, String>,
}

impl Registry {
    /// Default deployment: six clinics on localhost.
    pub fn with_defaults() -> Self {
        let endpoints = [
            ("clinic_a", "http://localhost:8001/mcp"),
            ("clinic_b", "http://localhost:8002/mcp"),
            ("clinic_c", "http://localhost:8003/mcp"),
            ("clinic_d", "http://localhost:8004/mcp"),
            ("clinic_e", "http://localhost:8005/mcp"),
            ("clinic_f", "http://localhost:8006/mcp"),
        ]
        .into_iter()
        .map(|(id, url)| (id.to_string(), url.to_string()))
        .collect();
        Self { endpoints }
    }

    /// Registry with explicit entries, for tests and custom deployments.
    pub fn with_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self {
            endpoints: entries.into_iter().collect(),
        }
    }

    pub fn resolve(&self, clinic_id: &str) -> Option<&str> {
        self.endpoints.get(clinic_id).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_registry_resolves_all_six_clinics() {
        let registry = Registry::with_defaults();
        for clinic in ["clinic_a", "clinic_b", "clinic_c", "clinic_d", "clinic_e", "clinic_f"] {
            assert!(registry.resolve(clinic).is_some(), "missing {clinic}");
        }
        assert_eq!(registry.resolve("clinic_a"), Some("http://localhost:8001/mcp"));
        assert_eq!(registry.resolve("clinic_g"), None);
    }
}
