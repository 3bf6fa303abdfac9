//! Clinic daemon configuration.

use std::path::PathBuf;

/// Identity and wiring for one clinic daemon process.
#[derive(Debug, Clone)]
pub struct SiloConfig {
    /// Logical identifier, e.g. `clinic_a`.
    pub clinic_id: String,
    /// Medical specialty label attached to every tool result.
    pub specialty: String,
    /// TCP port for the /mcp endpoint.
    pub port: u16,
    /// Backing file for the slot store.
    pub db_path: PathBuf,
    /// Require the caller's cpf to match the booked record on
    /// cancel/reschedule.
    pub verify_identity: bool,
}

/// Default (specialty, port) wiring per clinic id, matching the registry
/// on the orchestrator side.
pub fn default_wiring(clinic_id: &str) -> Option<(&'static str, u16)> {
    match clinic_id {
        "clinic_a" => Some(("Cardiology", 8001)),
        "clinic_b" => Some(("Dermatology", 8002)),
        "clinic_c" => Some(("Cardiology", 8003)),
        "clinic_e" => Some(("Orthopedics", 8005)),
        "clinic_f" => Some(("Dermatology", 8006)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_clinics_have_wiring() {
        assert_eq!(default_wiring("clinic_a"), Some(("Cardiology", 8001)));
        assert_eq!(default_wiring("clinic_f"), Some(("Dermatology", 8006)));
        assert_eq!(default_wiring("clinic_z"), None);
    }
}
