//! Loading persisted roadmaps, including older shapes.
//!
//! Accepted inputs:
//!
//! - the current shape, an array of `{id, name, steps: [{id, text,
//!   completed, x?, y?}]}`;
//! - the same wrapped in an object as `{"phases": [...]}`;
//! - a flat array of steps (objects or bare strings) from before phases
//!   existed, which becomes a single phase.
//!
//! An array is read as phases when any entry has a `steps` array, or when
//! every entry is an object with a `name` and none of the step keys (a phase
//! list whose phases were all saved without steps).
//!
//! Missing ids are generated, numeric ids become strings, duplicate step or
//! phase ids are replaced, missing flags default to `false`, and every step without a
//! usable position is pinned at its default-layout position.

use std::collections::HashSet;

use log::{debug, warn};
use serde_json::{Map, Value};

use crate::{
    canvas::{pin_positions, CanvasConfig},
    focus::FALLBACK_PHASE_NAME,
    models::{Phase, PhaseId, Position, Roadmap, Step, StepId},
};

/// Parses stored roadmap JSON.
///
/// Malformed JSON or an unrecognized top-level value yields `None`, which
/// callers treat as "no data".
pub fn parse_roadmap(text: &str, config: &CanvasConfig) -> Option<Roadmap> {
    match serde_json::from_str::<Value>(text) {
        Ok(value) => migrate(&value, config),
        Err(e) => {
            warn!("ignoring malformed roadmap document: {e}");
            None
        }
    }
}

/// Converts any accepted persisted shape into a current roadmap.
pub fn migrate(value: &Value, config: &CanvasConfig) -> Option<Roadmap> {
    let items = match value {
        Value::Array(items) => items,
        Value::Object(map) => match map.get("phases") {
            Some(Value::Array(items)) => items,
            _ => {
                warn!("roadmap document is an object without a phases array");
                return None;
            }
        },
        _ => {
            warn!("roadmap document is neither an array nor an object");
            return None;
        }
    };

    let mut seen = HashSet::new();
    let mut seen_phases = HashSet::new();
    let phases = if is_phase_list(items) {
        items
            .iter()
            .filter_map(|item| match item {
                Value::Object(map) => Some(phase_from(map, &mut seen_phases, &mut seen)),
                other => {
                    warn!("skipping non-object phase entry: {other}");
                    None
                }
            })
            .collect()
    } else {
        debug!("migrating flat step list of {} entries", items.len());
        if items.is_empty() {
            Vec::new()
        } else {
            vec![Phase::named(FALLBACK_PHASE_NAME).with_steps(steps_from(items, &mut seen))]
        }
    };

    Some(pin_positions(&Roadmap::from_phases(phases), config))
}

/// Keys only a step object carries.
const STEP_KEYS: [&str; 6] = ["text", "title", "completed", "done", "x", "y"];

fn is_phase_list(items: &[Value]) -> bool {
    let has_steps = |item: &Value| item.get("steps").is_some_and(Value::is_array);
    let is_bare_phase = |item: &Value| match item {
        Value::Object(map) => {
            map.contains_key("name") && !STEP_KEYS.iter().any(|key| map.contains_key(*key))
        }
        _ => false,
    };
    items.iter().any(has_steps) || (!items.is_empty() && items.iter().all(is_bare_phase))
}

fn phase_from(
    map: &Map<String, Value>,
    seen_phases: &mut HashSet<String>,
    seen: &mut HashSet<String>,
) -> Phase {
    let id = PhaseId::from(unique(id_from(map.get("id")), seen_phases, || {
        PhaseId::generate().to_string()
    }));
    let name = text_from(map, &["name", "title"]);
    let steps = match map.get("steps") {
        Some(Value::Array(items)) => steps_from(items, seen),
        _ => Vec::new(),
    };
    Phase::new(id, name).with_steps(steps)
}

fn steps_from(items: &[Value], seen: &mut HashSet<String>) -> Vec<Step> {
    items
        .iter()
        .filter_map(|item| match item {
            Value::String(text) => Some(Step::new(unique_step_id(None, seen), text.clone())),
            Value::Object(map) => Some(step_from(map, seen)),
            other => {
                warn!("skipping unrecognized step entry: {other}");
                None
            }
        })
        .collect()
}

fn step_from(map: &Map<String, Value>, seen: &mut HashSet<String>) -> Step {
    let id = unique_step_id(id_from(map.get("id")), seen);
    let text = text_from(map, &["text", "title", "name"]);
    let completed = ["completed", "done"]
        .iter()
        .find_map(|key| map.get(*key).and_then(Value::as_bool))
        .unwrap_or(false);
    let position = match (
        map.get("x").and_then(Value::as_f64),
        map.get("y").and_then(Value::as_f64),
    ) {
        (Some(x), Some(y)) if x.is_finite() && y.is_finite() => Position::Positioned { x, y },
        _ => Position::Unpositioned,
    };
    Step {
        id,
        text,
        completed,
        position,
    }
}

fn id_from(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn unique_step_id(candidate: Option<String>, seen: &mut HashSet<String>) -> StepId {
    StepId::from(unique(candidate, seen, || StepId::generate().to_string()))
}

/// Keeps `candidate` unless it is missing or already taken.
fn unique(
    candidate: Option<String>,
    seen: &mut HashSet<String>,
    generate: impl Fn() -> String,
) -> String {
    let id = match candidate {
        Some(id) if !seen.contains(&id) => id,
        Some(id) => {
            debug!("replacing duplicate id {id}");
            generate()
        }
        None => generate(),
    };
    seen.insert(id.clone());
    id
}

fn text_from(map: &Map<String, Value>, keys: &[&str]) -> String {
    keys.iter()
        .find_map(|key| match map.get(*key) {
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::models::Point;

    fn config() -> CanvasConfig {
        CanvasConfig::default()
    }

    #[test]
    fn test_current_shape_is_preserved() {
        let value = json!([
            {"id": "p1", "name": "Start", "steps": [
                {"id": "a", "text": "A", "completed": true, "x": 10.0, "y": 20.0},
                {"id": "b", "text": "B", "completed": false, "x": 10.0, "y": 160.0}
            ]}
        ]);
        let roadmap = migrate(&value, &config()).unwrap();

        assert_eq!(roadmap.phases[0].id.as_str(), "p1");
        assert_eq!(roadmap.phases[0].name, "Start");
        let a = roadmap.step(&"a".into()).unwrap();
        assert!(a.completed);
        assert_eq!(a.position.point(), Some(Point::new(10.0, 20.0)));
        assert_eq!(serde_json::to_value(&roadmap).unwrap(), value);
    }

    #[test]
    fn test_missing_coordinates_get_default_layout() {
        let value = json!([{"id": "p1", "name": "Start", "steps": [
            {"id": "a", "text": "A", "completed": false},
            {"id": "b", "text": "B"}
        ]}]);
        let roadmap = migrate(&value, &config()).unwrap();

        assert_eq!(
            roadmap.step(&"a".into()).unwrap().position,
            Position::Positioned { x: 0.0, y: 0.0 }
        );
        assert_eq!(
            roadmap.step(&"b".into()).unwrap().position,
            Position::Positioned { x: 0.0, y: 140.0 }
        );
    }

    #[test]
    fn test_flat_step_list_becomes_single_phase() {
        let value = json!([
            {"id": 1700000000001_u64, "text": "First", "completed": true},
            "Second",
            {"title": "Third"}
        ]);
        let roadmap = migrate(&value, &config()).unwrap();

        assert_eq!(roadmap.phases.len(), 1);
        assert_eq!(roadmap.phases[0].name, FALLBACK_PHASE_NAME);
        let texts: Vec<&str> = roadmap.steps().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, ["First", "Second", "Third"]);
        assert_eq!(roadmap.phases[0].steps[0].id.as_str(), "1700000000001");
        assert!(roadmap.phases[0].steps[0].completed);
        assert!(roadmap.steps().all(|s| s.position.is_positioned()));
    }

    #[test]
    fn test_phases_wrapper_object_and_missing_fields() {
        let value = json!({"phases": [{"steps": [{"done": true}]}, {"name": "Later", "steps": []}]});
        let roadmap = migrate(&value, &config()).unwrap();

        assert_eq!(roadmap.phases.len(), 2);
        assert!(!roadmap.phases[0].id.as_str().is_empty());
        assert_eq!(roadmap.phases[0].name, "");
        assert!(roadmap.phases[0].steps[0].completed);
        assert_eq!(roadmap.phases[0].steps[0].text, "");
        assert!(roadmap.phases[1].steps.is_empty());
    }

    #[test]
    fn test_duplicate_step_ids_are_replaced() {
        let value = json!([{"id": "p", "name": "P", "steps": [
            {"id": "same", "text": "one"},
            {"id": "same", "text": "two"}
        ]}]);
        let roadmap = migrate(&value, &config()).unwrap();

        assert_eq!(roadmap.phases[0].steps[0].id.as_str(), "same");
        assert_ne!(roadmap.phases[0].steps[1].id.as_str(), "same");
    }

    #[test]
    fn test_duplicate_phase_ids_are_replaced() {
        let value = json!([
            {"id": "p", "name": "First", "steps": [{"id": "a", "text": "A"}]},
            {"id": "p", "name": "Second", "steps": [{"id": "b", "text": "B"}]}
        ]);
        let roadmap = migrate(&value, &config()).unwrap();

        assert_eq!(roadmap.phases[0].id.as_str(), "p");
        assert_ne!(roadmap.phases[1].id.as_str(), "p");
        assert_eq!(roadmap.phase(&"p".into()).unwrap().name, "First");
    }

    #[test]
    fn test_phases_saved_without_steps_stay_phases() {
        let value = json!([{"id": "p", "name": "Only"}, {"id": "q", "name": "Later"}]);
        let roadmap = migrate(&value, &config()).unwrap();

        let names: Vec<&str> = roadmap.phases.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Only", "Later"]);
        assert_eq!(roadmap.phases[0].id.as_str(), "p");
        assert!(roadmap.is_empty());

        // A step keyed by `name` next to plain strings is still a flat list.
        let flat = migrate(&json!([{"name": "Named step"}, "Second"]), &config()).unwrap();
        assert_eq!(flat.phases[0].name, FALLBACK_PHASE_NAME);
        assert_eq!(flat.step_count(), 2);
    }

    #[test]
    fn test_empty_and_unrecognized_documents() {
        assert_eq!(migrate(&json!([]), &config()), Some(Roadmap::new()));
        assert_eq!(migrate(&json!("text"), &config()), None);
        assert_eq!(migrate(&json!({"other": 1}), &config()), None);
        assert_eq!(parse_roadmap("{not json", &config()), None);
    }

    #[test]
    fn test_non_finite_or_partial_coordinates_are_replaced() {
        let value = json!([{"id": "p", "name": "P", "steps": [
            {"id": "a", "text": "A", "x": 50.0},
            {"id": "b", "text": "B", "x": 5.0, "y": 5.0}
        ]}]);
        let roadmap = migrate(&value, &config()).unwrap();
        assert_eq!(
            roadmap.step(&"a".into()).unwrap().position,
            Position::Positioned { x: 0.0, y: 0.0 }
        );
        assert_eq!(
            roadmap.step(&"b".into()).unwrap().position,
            Position::Positioned { x: 5.0, y: 5.0 }
        );
    }
}
