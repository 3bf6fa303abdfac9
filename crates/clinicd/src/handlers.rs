//! Tool handlers: list/book/cancel/reschedule against the slot store.
//!
//! Every handler runs its load -> mutate -> save triplet under the store
//! lock. A successful mutating call performs exactly one save; failed
//! validation or lookup performs zero saves, leaving the store file
//! byte-identical.

use crate::store::SlotStore;
use clinic_common::tools::{BookArgs, CancelArgs, ListArgs, RescheduleArgs, ToolName};
use clinic_common::ToolError;
use serde::de::DeserializeOwned;
use serde_json::{json, Map, Value};
use std::sync::Arc;

/// The silo-agnostic tool logic, parameterized by specialty label and store.
pub struct ToolHandlers {
    store: Arc<SlotStore>,
    specialty: String,
    /// When set, cancel/reschedule require the caller's cpf to match the
    /// booked record. Off by default: the historical contract cancels by
    /// slot coordinates alone, so any caller who knows doctor/date/time can
    /// release another patient's booking.
    verify_identity: bool,
}

impl ToolHandlers {
    pub fn new(store: Arc<SlotStore>, specialty: impl Into<String>, verify_identity: bool) -> Self {
        Self {
            store,
            specialty: specialty.into(),
            verify_identity,
        }
    }

    /// Dispatch a parsed tool call to the matching handler.
    pub fn call(&self, tool: ToolName, arguments: Map<String, Value>) -> Result<Value, ToolError> {
        let arguments = Value::Object(arguments);
        match tool {
            ToolName::ListAvailableSlots => self.list_available_slots(&parse_args(arguments)?),
            ToolName::BookAppointment => self.book_appointment(&parse_args(arguments)?),
            ToolName::CancelAppointment => self.cancel_appointment(&parse_args(arguments)?),
            ToolName::RescheduleAppointment => self.reschedule_appointment(&parse_args(arguments)?),
        }
    }

    /// All available slots, optionally narrowed by a case-insensitive
    /// substring match on the doctor name. Never mutates.
    pub fn list_available_slots(&self, args: &ListArgs) -> Result<Value, ToolError> {
        let _guard = self.store.lock();
        let slots = self.store.load()?;

        let filter = args.doctor.trim().to_lowercase();
        let available: Vec<Value> = slots
            .iter()
            .filter(|s| s.available)
            .filter(|s| filter.is_empty() || s.doctor.to_lowercase().contains(&filter))
            .map(|s| {
                json!({
                    "doctor": s.doctor,
                    "specialty": s.specialty,
                    "date": s.date,
                    "time": s.time,
                    "available": true,
                })
            })
            .collect();

        Ok(json!({
            "specialty": self.specialty,
            "available_slots": available,
            "note": "To confirm a booking, provide the desired time slot.",
        }))
    }

    /// Book the first available slot matching (doctor, date, time) in
    /// stored order. All-or-nothing: no match (including "exists but
    /// already booked") mutates nothing.
    pub fn book_appointment(&self, args: &BookArgs) -> Result<Value, ToolError> {
        require(&[
            ("doctor", &args.doctor),
            ("date", &args.date),
            ("time", &args.time),
            ("patient_name", &args.patient_name),
            ("cpf", &args.cpf),
        ])?;

        let _guard = self.store.lock();
        let mut slots = self.store.load()?;

        let slot = slots
            .iter_mut()
            .find(|s| s.available && s.matches(&args.doctor, &args.date, &args.time))
            .ok_or_else(|| {
                ToolError::NotFound(format!(
                    "no available slot for {} on {} at {}",
                    args.doctor, args.date, args.time
                ))
            })?;

        slot.bind(&args.patient_name, &args.cpf);
        let confirmed = json!({
            "status": "confirmed",
            "appointment": {
                "doctor": slot.doctor,
                "date": args.date,
                "time": args.time,
                "patient_name": args.patient_name,
                "cpf": args.cpf,
                "specialty": self.specialty,
            },
            "message": "Appointment booked successfully.",
        });

        self.store.save(&slots)?;
        Ok(confirmed)
    }

    /// Release a booked slot matched by (doctor, date, time).
    pub fn cancel_appointment(&self, args: &CancelArgs) -> Result<Value, ToolError> {
        require(&[
            ("doctor", &args.doctor),
            ("date", &args.date),
            ("time", &args.time),
            ("patient_name", &args.patient_name),
            ("cpf", &args.cpf),
        ])?;

        let _guard = self.store.lock();
        let mut slots = self.store.load()?;

        let not_found = || {
            ToolError::NotFound(format!(
                "no booked appointment for {} on {} at {}",
                args.doctor, args.date, args.time
            ))
        };
        let slot = slots
            .iter_mut()
            .find(|s| s.is_booked() && s.matches(&args.doctor, &args.date, &args.time))
            .ok_or_else(not_found)?;
        if self.verify_identity && slot.cpf.as_deref() != Some(args.cpf.as_str()) {
            return Err(not_found());
        }

        let cancelled = json!({
            "status": "cancelled",
            "cancelled_appointment": {
                "doctor": slot.doctor,
                "date": args.date,
                "time": args.time,
                "patient_name": args.patient_name,
                "cpf": args.cpf,
                "specialty": self.specialty,
            },
            "message": "Appointment cancelled successfully.",
        });
        slot.release();

        self.store.save(&slots)?;
        Ok(cancelled)
    }

    /// Atomic two-slot transition: locate both the booked original and the
    /// available new slot before mutating either, then free the original,
    /// occupy the new one, and persist both changes in a single save.
    pub fn reschedule_appointment(&self, args: &RescheduleArgs) -> Result<Value, ToolError> {
        require(&[
            ("original_date", &args.original_date),
            ("original_time", &args.original_time),
            ("doctor", &args.doctor),
            ("new_date", &args.new_date),
            ("new_time", &args.new_time),
            ("patient_name", &args.patient_name),
            ("cpf", &args.cpf),
        ])?;

        let _guard = self.store.lock();
        let mut slots = self.store.load()?;

        let original_idx = slots
            .iter()
            .position(|s| {
                s.is_booked() && s.matches(&args.doctor, &args.original_date, &args.original_time)
            })
            .ok_or_else(|| {
                ToolError::NotFound(format!(
                    "no booked appointment for {} on {} at {}",
                    args.doctor, args.original_date, args.original_time
                ))
            })?;
        if self.verify_identity && slots[original_idx].cpf.as_deref() != Some(args.cpf.as_str()) {
            return Err(ToolError::NotFound(format!(
                "no booked appointment for {} on {} at {}",
                args.doctor, args.original_date, args.original_time
            )));
        }
        let new_idx = slots
            .iter()
            .position(|s| s.available && s.matches(&args.doctor, &args.new_date, &args.new_time))
            .ok_or_else(|| {
                ToolError::NotFound(format!(
                    "no available slot for {} on {} at {}",
                    args.doctor, args.new_date, args.new_time
                ))
            })?;

        slots[original_idx].release();
        slots[new_idx].bind(&args.patient_name, &args.cpf);

        let rescheduled = json!({
            "status": "rescheduled",
            "original_appointment": {
                "doctor": args.doctor,
                "date": args.original_date,
                "time": args.original_time,
            },
            "new_appointment": {
                "doctor": slots[new_idx].doctor,
                "date": args.new_date,
                "time": args.new_time,
                "patient_name": args.patient_name,
                "cpf": args.cpf,
                "specialty": self.specialty,
            },
            "message": "Appointment rescheduled successfully.",
        });

        self.store.save(&slots)?;
        Ok(rescheduled)
    }
}

fn parse_args<T: DeserializeOwned>(arguments: Value) -> Result<T, ToolError> {
    serde_json::from_value(arguments)
        .map_err(|e| ToolError::Validation(format!("invalid arguments: {e}")))
}

/// Reject empty required arguments, naming every offender.
fn require(fields: &[(&str, &str)]) -> Result<(), ToolError> {
    let missing: Vec<&str> = fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ToolError::Validation(format!(
            "missing required fields: {}",
            missing.join(", ")
        )))
    }
}
