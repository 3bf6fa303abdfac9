//! Appointment slot model shared by clinic daemons and the orchestrator.

use serde::{Deserialize, Serialize};

/// One bookable (doctor, date, time) unit at a single clinic.
///
/// A slot is either available (no patient bound) or booked (both patient
/// fields present and non-empty); no partially bound state is ever
/// persisted. Field declaration order is the stable serialization order of
/// the store file. The (doctor, date, time) tuple is assumed unique within
/// one clinic's store; slot selection takes the first match in stored order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub doctor: String,
    pub specialty: String,
    /// Calendar day, `YYYY-MM-DD`.
    pub date: String,
    /// Local clock time, `HH:MM`.
    pub time: String,
    pub available: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpf: Option<String>,
}

impl Slot {
    /// A freshly created, unbooked slot.
    pub fn available(doctor: &str, specialty: &str, date: &str, time: &str) -> Self {
        Self {
            doctor: doctor.to_string(),
            specialty: specialty.to_string(),
            date: date.to_string(),
            time: time.to_string(),
            available: true,
            patient_name: None,
            cpf: None,
        }
    }

    pub fn is_booked(&self) -> bool {
        !self.available
    }

    /// Case-insensitive doctor match at exact (date, time) coordinates.
    pub fn matches(&self, doctor: &str, date: &str, time: &str) -> bool {
        self.doctor.to_lowercase() == doctor.to_lowercase()
            && self.date == date
            && self.time == time
    }

    /// Bind a patient and clear availability.
    pub fn bind(&mut self, patient_name: &str, cpf: &str) {
        self.available = false;
        self.patient_name = Some(patient_name.to_string());
        self.cpf = Some(cpf.to_string());
    }

    /// Unbind the patient and restore availability.
    pub fn release(&mut self) {
        self.available = true;
        self.patient_name = None;
        self.cpf = None;
    }

    /// The availability <-> patient-binding invariant:
    /// available means no patient fields, booked means both non-empty.
    pub fn invariant_ok(&self) -> bool {
        let name_bound = self.patient_name.as_deref().is_some_and(|v| !v.is_empty());
        let cpf_bound = self.cpf.as_deref().is_some_and(|v| !v.is_empty());
        if self.available {
            self.patient_name.is_none() && self.cpf.is_none()
        } else {
            name_bound && cpf_bound
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_and_release_preserve_invariant() {
        let mut slot = Slot::available("Dr. Ricardo Lopes", "Cardiology", "2025-07-21", "09:00");
        assert!(slot.invariant_ok());

        slot.bind("Carlos", "111");
        assert!(slot.is_booked());
        assert!(slot.invariant_ok());

        slot.release();
        assert!(!slot.is_booked());
        assert!(slot.invariant_ok());
    }

    #[test]
    fn partially_bound_slot_breaks_invariant() {
        let mut slot = Slot::available("Dr. Ricardo Lopes", "Cardiology", "2025-07-21", "09:00");
        slot.available = false;
        slot.patient_name = Some("Carlos".to_string());
        assert!(!slot.invariant_ok());
    }

    #[test]
    fn matches_is_case_insensitive_on_doctor_only() {
        let slot = Slot::available("Dr. Ricardo Lopes", "Cardiology", "2025-07-21", "09:00");
        assert!(slot.matches("dr. ricardo lopes", "2025-07-21", "09:00"));
        assert!(!slot.matches("Dr. Ricardo Lopes", "2025-07-21", "10:00"));
        assert!(!slot.matches("Dr. Ricardo Lopes", "2025-07-22", "09:00"));
    }

    #[test]
    fn available_slot_omits_patient_fields_on_the_wire() {
        let slot = Slot::available("Dr. Ricardo Lopes", "Cardiology", "2025-07-21", "09:00");
        let wire = serde_json::to_string(&slot).unwrap();
        assert!(!wire.contains("patient_name"));
        assert!(!wire.contains("cpf"));
    }
}
