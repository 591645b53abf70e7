#[cfg(test)]
mod model_tests {
    use jiff::Timestamp;
    use serde_json::json;

    use crate::models::{Phase, Position, Roadmap, Step, StepId, Thought, ThoughtId, ViewState};

    fn create_test_roadmap() -> Roadmap {
        Roadmap::from_phases(vec![
            Phase::new("p1", "First").with_steps(vec![
                Step::new("a", "Alpha").completed(true),
                Step::new("b", "Beta"),
            ]),
            Phase::new("p2", "Second").with_steps(vec![Step::new("c", "Gamma").at(5.0, -7.5)]),
        ])
    }

    #[test]
    fn test_template_has_three_phases_of_two_steps() {
        let roadmap = Roadmap::template();

        assert_eq!(roadmap.phases.len(), 3);
        assert!(roadmap.phases.iter().all(|p| p.steps.len() == 2));
        assert!(roadmap.steps().all(|s| !s.completed));
        assert!(roadmap.steps().all(|s| s.position == Position::Unpositioned));
    }

    #[test]
    fn test_template_ids_are_unique() {
        let roadmap = Roadmap::template();
        let mut ids: Vec<&StepId> = roadmap.steps().map(|s| &s.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 6);
    }

    #[test]
    fn test_find_step() {
        let roadmap = create_test_roadmap();

        assert_eq!(roadmap.find_step(&"a".into()), Some((0, 0)));
        assert_eq!(roadmap.find_step(&"c".into()), Some((1, 0)));
        assert_eq!(roadmap.find_step(&"missing".into()), None);
        assert_eq!(roadmap.step(&"b".into()).map(|s| s.text.as_str()), Some("Beta"));
    }

    #[test]
    fn test_empty_phases_do_not_count_as_steps() {
        let roadmap = Roadmap::from_phases(vec![Phase::new("p", "Empty")]);
        assert!(roadmap.is_empty());
        assert_eq!(roadmap.step_count(), 0);
    }

    #[test]
    fn test_step_serializes_optional_coordinates() {
        let roadmap = create_test_roadmap();
        let value = serde_json::to_value(&roadmap).unwrap();

        assert_eq!(
            value[1]["steps"][0],
            json!({"id": "c", "text": "Gamma", "completed": false, "x": 5.0, "y": -7.5})
        );
        assert_eq!(
            value[0]["steps"][1],
            json!({"id": "b", "text": "Beta", "completed": false})
        );
    }

    #[test]
    fn test_step_with_single_coordinate_is_unpositioned() {
        let step: Step = serde_json::from_value(json!({"id": "s", "text": "t", "x": 3.0})).unwrap();
        assert_eq!(step.position, Position::Unpositioned);
        assert!(!step.completed);
    }

    #[test]
    fn test_roadmap_json_round_trip() {
        let roadmap = create_test_roadmap();
        let text = serde_json::to_string(&roadmap).unwrap();
        let parsed: Roadmap = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, roadmap);
    }

    #[test]
    fn test_thought_optional_fields_default() {
        let thought: Thought = serde_json::from_value(json!({
            "id": "t1",
            "text": "remember",
            "created_at": "2024-03-01T10:00:00Z",
        }))
        .unwrap();

        assert_eq!(thought.id, ThoughtId::from("t1"));
        assert_eq!(thought.step_id, None);
        assert_eq!(thought.scheduled_at, None);
        assert!(!thought.reminder_dismissed);
        assert_eq!(
            thought.created_at,
            "2024-03-01T10:00:00Z".parse::<Timestamp>().unwrap()
        );
    }

    #[test]
    fn test_view_state_session_flags_are_not_persisted() {
        let view = ViewState {
            auto_centered: true,
            pending_center: true,
            ..ViewState::default()
        };
        let text = serde_json::to_string(&view).unwrap();
        let parsed: ViewState = serde_json::from_str(&text).unwrap();

        assert!(!parsed.auto_centered);
        assert!(!parsed.pending_center);
        assert_eq!(parsed.zoom, 1.0);
    }
}
