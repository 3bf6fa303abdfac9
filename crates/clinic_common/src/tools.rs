//! The closed tool surface exposed by every clinic daemon.
//!
//! Tool names are a closed enum rather than a dynamic lookup table, and
//! every tool's required arguments are a typed struct: a missing wire field
//! is rejected at deserialization instead of defaulting to an empty string.

use serde::{Deserialize, Serialize};

/// The four slot tools every clinic exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolName {
    ListAvailableSlots,
    BookAppointment,
    CancelAppointment,
    RescheduleAppointment,
}

impl ToolName {
    pub const ALL: [ToolName; 4] = [
        ToolName::ListAvailableSlots,
        ToolName::BookAppointment,
        ToolName::CancelAppointment,
        ToolName::RescheduleAppointment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ToolName::ListAvailableSlots => "list_available_slots",
            ToolName::BookAppointment => "book_appointment",
            ToolName::CancelAppointment => "cancel_appointment",
            ToolName::RescheduleAppointment => "reschedule_appointment",
        }
    }

    /// Resolve a wire-level tool name. Unknown names are rejected
    /// explicitly; there is no fallback.
    pub fn parse(name: &str) -> Option<ToolName> {
        Self::ALL.iter().copied().find(|t| t.as_str() == name)
    }

    /// Comma-separated list of the known tool names, for error messages.
    pub fn known_names() -> String {
        Self::ALL
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for ToolName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Arguments of `list_available_slots`. The doctor filter is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListArgs {
    #[serde(default)]
    pub doctor: String,
}

/// Arguments of `book_appointment`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookArgs {
    pub doctor: String,
    pub date: String,
    pub time: String,
    pub patient_name: String,
    pub cpf: String,
}

/// Arguments of `cancel_appointment`. Cancellation is addressed by slot
/// coordinates; the patient fields identify the caller, not the record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CancelArgs {
    pub doctor: String,
    pub date: String,
    pub time: String,
    pub patient_name: String,
    pub cpf: String,
}

/// Arguments of `reschedule_appointment`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RescheduleArgs {
    pub original_date: String,
    pub original_time: String,
    pub doctor: String,
    pub new_date: String,
    pub new_time: String,
    pub patient_name: String,
    pub cpf: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_only_known_names() {
        assert_eq!(
            ToolName::parse("book_appointment"),
            Some(ToolName::BookAppointment)
        );
        assert_eq!(ToolName::parse("drop_tables"), None);
        assert_eq!(ToolName::parse(""), None);
    }

    #[test]
    fn known_names_lists_all_four_tools() {
        let names = ToolName::known_names();
        for tool in ToolName::ALL {
            assert!(names.contains(tool.as_str()));
        }
    }

    #[test]
    fn book_args_reject_missing_fields() {
        let incomplete = serde_json::json!({
            "doctor": "Dr. Ricardo Lopes",
            "date": "2025-07-21",
            "time": "09:00",
        });
        assert!(serde_json::from_value::<BookArgs>(incomplete).is_err());
    }
}
