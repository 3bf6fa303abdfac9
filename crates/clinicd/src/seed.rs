//! Static seed data for a freshly initialized clinic store.
//!
//! Mirrors the demo deployment: each clinic owns a small private week of
//! slots. In production the store would sit in front of a real EHR/FHIR
//! backend instead.

use clinic_common::Slot;

/// Seed slot collection for a clinic. Unknown ids get a small generic
/// schedule so ad-hoc clinics still come up bookable.
pub fn seed_slots(clinic_id: &str, specialty: &str) -> Vec<Slot> {
    let schedule: &[(&str, &str, &str)] = match clinic_id {
        "clinic_a" => &[
            ("Dr. Ricardo Lopes", "2025-07-21", "09:00"),
            ("Dr. Ricardo Lopes", "2025-07-22", "14:00"),
            ("Dr. Ricardo Lopes", "2025-07-23", "08:00"),
        ],
        "clinic_b" => &[
            ("Dr. Paula Martins", "2025-07-20", "13:00"),
            ("Dr. Paula Martins", "2025-07-24", "15:30"),
        ],
        "clinic_c" => &[
            ("Dr. Fernando Mendes", "2025-07-18", "10:00"),
            ("Dr. Fernando Mendes", "2025-07-25", "09:30"),
        ],
        "clinic_e" => &[
            ("Dr. Sofia Carvalho", "2025-07-22", "08:30"),
            ("Dr. Sofia Carvalho", "2025-07-26", "11:00"),
        ],
        "clinic_f" => &[
            ("Dr. Andre Nunes", "2025-07-19", "16:00"),
            ("Dr. Andre Nunes", "2025-07-23", "10:30"),
        ],
        _ => &[
            ("Dr. Helena Prado", "2025-07-21", "09:00"),
            ("Dr. Helena Prado", "2025-07-22", "10:00"),
        ],
    };

    schedule
        .iter()
        .map(|(doctor, date, time)| Slot::available(doctor, specialty, date, time))
        .collect()
}
