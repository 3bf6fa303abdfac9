//! Instruction-plan execution and cross-clinic result aggregation.

use crate::router::{Instruction, Router};
use crate::transport::Transport;
use anyhow::Context;
use chrono::{DateTime, Utc};
use clinic_common::McpResponse;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Outcome of one dispatched step. Partial failure is surfaced as data,
/// never hidden behind an aggregate success; the caller decides how to
/// present it.
#[derive(Debug, Serialize)]
pub struct StepReport {
    pub step: usize,
    pub clinic: String,
    pub action: String,
    pub dispatched_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<StepError>,
}

/// Error slot of a step report. Envelope errors keep their wire code so
/// callers can branch on error class; dispatch failures carry none.
#[derive(Debug, Serialize)]
pub struct StepError {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<i64>,
    pub message: String,
}

/// Parse a JSON-lines instruction plan. Blank lines are skipped; a bad line
/// fails the whole plan with its line number.
pub fn parse_plan(input: &str) -> anyhow::Result<Vec<Instruction>> {
    input
        .lines()
        .enumerate()
        .map(|(i, line)| (i, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .map(|(i, line)| {
            serde_json::from_str(line).with_context(|| format!("invalid instruction on line {}", i + 1))
        })
        .collect()
}

/// Dispatch each instruction independently, in order. A step that fails
/// (error envelope or malformed reply) does not stop the following steps.
pub async fn run_plan<T: Transport>(
    router: &Router<T>,
    instructions: &[Instruction],
) -> Vec<StepReport> {
    let mut reports = Vec::with_capacity(instructions.len());
    for (step, instruction) in instructions.iter().enumerate() {
        let dispatched_at = Utc::now();
        let (result, error) = match router.dispatch(instruction).await {
            Ok(response) => {
                let error = response.error.map(|e| StepError {
                    code: Some(e.code),
                    message: e.message,
                });
                (response.result, error)
            }
            Err(e) => (
                None,
                Some(StepError {
                    code: None,
                    message: e.to_string(),
                }),
            ),
        };
        reports.push(StepReport {
            step,
            clinic: instruction.clinic.clone(),
            action: instruction.action.clone(),
            dispatched_at,
            result,
            error,
        });
    }
    reports
}

/// Minimal slot summary used for cross-clinic aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotSummary {
    pub doctor: String,
    pub specialty: String,
    pub date: String,
    pub time: String,
}

/// Flatten `list_available_slots` results from several clinics and pick the
/// earliest (date, time) pair. Deterministic regardless of the order the
/// clinics were queried in; ties on (date, time) break on
/// (specialty, doctor). Error envelopes contribute nothing.
pub fn earliest_available(responses: &[McpResponse]) -> Option<SlotSummary> {
    let mut slots: Vec<SlotSummary> = Vec::new();
    for response in responses {
        let Some(result) = &response.result else { continue };
        let Some(list) = result.get("available_slots").and_then(Value::as_array) else {
            continue;
        };
        for entry in list {
            if let Ok(slot) = serde_json::from_value::<SlotSummary>(entry.clone()) {
                slots.push(slot);
            }
        }
    }

    // ISO dates and HH:MM times order lexicographically.
    slots.into_iter().min_by(|a, b| {
        (&a.date, &a.time, &a.specialty, &a.doctor).cmp(&(&b.date, &b.time, &b.specialty, &b.doctor))
    })
}
