mod common;

use stepwise_core::{
    canvas::CanvasConfig,
    flatten::{focus_state, progress},
    params::{
        AddThought, AppendStep, FocusAt, ImportRoadmap, InsertStep, ListThoughts, MoveStep,
        Project, StepRef, SwapSteps, Viewport,
    },
    FocusState, PlannerBuilder, Point, Size,
};

fn default_project() -> Project {
    Project::default()
}

fn import(json: &str) -> ImportRoadmap {
    ImportRoadmap {
        project: "default".to_string(),
        json: json.to_string(),
    }
}

const TWO_BY_TWO: &str = r#"[
    {"id": "p1", "name": "One", "steps": [{"id": "a", "text": "A"}, {"id": "b", "text": "B"}]},
    {"id": "p2", "name": "Two", "steps": [{"id": "c", "text": "C"}, {"id": "d", "text": "D"}]}
]"#;

#[tokio::test]
async fn test_completing_every_step_reaches_all_done() {
    let (_temp_dir, planner) = common::create_test_planner().await;
    planner.import_roadmap(&import(TWO_BY_TWO)).await.unwrap();

    for _ in 0..4 {
        planner.complete_current(&default_project()).await.unwrap();
    }
    let roadmap = planner.roadmap(&default_project()).await.unwrap();
    assert_eq!(focus_state(&roadmap), FocusState::AllDone);

    // A fifth completion changes nothing.
    let again = planner.complete_current(&default_project()).await.unwrap();
    assert_eq!(again, roadmap);
}

#[tokio::test]
async fn test_reopening_last_step_after_all_done() {
    let (_temp_dir, planner) = common::create_test_planner().await;
    planner
        .import_roadmap(&import(
            r#"[{"id": "p", "name": "P", "steps": [
                {"id": "a", "text": "A", "completed": true},
                {"id": "b", "text": "B", "completed": true},
                {"id": "c", "text": "C", "completed": true}
            ]}]"#,
        ))
        .await
        .unwrap();

    let roadmap = planner
        .focus_at(&FocusAt {
            project: "default".to_string(),
            index: 2,
        })
        .await
        .unwrap();

    assert_eq!(focus_state(&roadmap).current().map(|id| id.as_str()), Some("c"));
    assert_eq!(progress(&roadmap).completed, 2);
}

#[tokio::test]
async fn test_removing_current_step_moves_focus_forward() {
    let (_temp_dir, planner) = common::create_test_planner().await;
    planner
        .import_roadmap(&import(
            r#"[{"id": "p", "name": "P", "steps": [
                {"id": "a", "text": "A", "completed": true},
                {"id": "b", "text": "B"},
                {"id": "c", "text": "C"}
            ]}]"#,
        ))
        .await
        .unwrap();

    planner
        .remove_step(&StepRef {
            project: "default".to_string(),
            step_id: "b".to_string(),
        })
        .await
        .unwrap();

    let roadmap = planner.roadmap(&default_project()).await.unwrap();
    assert_eq!(focus_state(&roadmap).current().map(|id| id.as_str()), Some("c"));
    assert!(roadmap.step(&"a".into()).unwrap().completed);
}

#[tokio::test]
async fn test_insert_before_current_keeps_focus() {
    let (_temp_dir, planner) = common::create_test_planner().await;
    planner.import_roadmap(&import(TWO_BY_TWO)).await.unwrap();
    planner.complete_current(&default_project()).await.unwrap();

    let inserted = planner
        .insert_step(&InsertStep {
            project: "default".to_string(),
            anchor: "b".to_string(),
            before: true,
            text: None,
        })
        .await
        .unwrap()
        .expect("anchor exists");

    let roadmap = planner.roadmap(&default_project()).await.unwrap();
    assert!(inserted.completed);
    assert_eq!(inserted.text, "New step");
    assert_eq!(focus_state(&roadmap).current().map(|id| id.as_str()), Some("b"));
}

#[tokio::test]
async fn test_swap_keeps_current_step() {
    let (_temp_dir, planner) = common::create_test_planner().await;
    planner.import_roadmap(&import(TWO_BY_TWO)).await.unwrap();
    planner.complete_current(&default_project()).await.unwrap();

    let roadmap = planner
        .swap_steps(&SwapSteps {
            project: "default".to_string(),
            first: "b".to_string(),
            second: "d".to_string(),
        })
        .await
        .unwrap();

    let order: Vec<&str> = roadmap.steps().map(|s| s.id.as_str()).collect();
    assert_eq!(order, ["a", "d", "c", "b"]);
    assert_eq!(focus_state(&roadmap).current().map(|id| id.as_str()), Some("b"));
}

#[tokio::test]
async fn test_append_into_empty_roadmap() {
    let (_temp_dir, planner) = common::create_test_planner().await;
    planner.import_roadmap(&import("[]")).await.unwrap();

    let step = planner
        .append_step(&AppendStep {
            project: "default".to_string(),
            phase_id: None,
            text: "First".to_string(),
        })
        .await
        .unwrap()
        .expect("append creates a fallback phase");

    let roadmap = planner.roadmap(&default_project()).await.unwrap();
    assert_eq!(roadmap.phases.len(), 1);
    assert_eq!(roadmap.phases[0].name, "Roadmap");
    assert_eq!(focus_state(&roadmap).current(), Some(&step.id));
}

#[tokio::test]
async fn test_legacy_flat_list_import() {
    let (_temp_dir, planner) = common::create_test_planner().await;

    let roadmap = planner
        .import_roadmap(&import(r#"["Plan", {"text": "Do", "completed": true}, 7]"#))
        .await
        .unwrap();

    assert_eq!(roadmap.phases.len(), 1);
    assert_eq!(roadmap.step_count(), 2);
    assert!(roadmap.steps().all(|s| s.position.is_positioned()));
}

#[tokio::test]
async fn test_move_far_away_clamps_into_canvas() {
    let (_temp_dir, planner) = common::create_test_planner().await;
    planner.import_roadmap(&import(TWO_BY_TWO)).await.unwrap();

    let position = planner
        .move_step(&MoveStep {
            project: "default".to_string(),
            step_id: "a".to_string(),
            x: 1.0e7,
            y: -1.0e7,
        })
        .await
        .unwrap()
        .expect("step exists");

    // Width stays at the 4000 minimum; y hits the fixed low limit.
    assert_eq!(position, Point::new(4000.0 - 1500.0 - 240.0 - 24.0, -1476.0));
}

#[tokio::test]
async fn test_custom_canvas_config() {
    let (_temp_dir, db_path) = common::create_test_environment();
    let planner = PlannerBuilder::new()
        .with_database_path(Some(&db_path))
        .with_canvas_config(CanvasConfig {
            layout_spacing: 200.0,
            min_size: Size::new(1000.0, 1000.0),
            ..CanvasConfig::default()
        })
        .build()
        .await
        .unwrap();
    planner.import_roadmap(&import(TWO_BY_TWO)).await.unwrap();

    let layout = planner.layout(&default_project()).await.unwrap();
    assert_eq!(layout.steps[1].position, Point::new(0.0, 200.0));
    assert_eq!(layout.size, Size::new(3240.0, 3696.0));
}

#[tokio::test]
async fn test_invalid_canvas_config_is_rejected() {
    let (_temp_dir, db_path) = common::create_test_environment();
    let result = PlannerBuilder::new()
        .with_database_path(Some(&db_path))
        .with_canvas_config(CanvasConfig {
            min_zoom: 3.0,
            max_zoom: 2.0,
            ..CanvasConfig::default()
        })
        .build()
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_reset_view_on_empty_roadmap_is_safe() {
    let (_temp_dir, planner) = common::create_test_planner().await;
    planner.import_roadmap(&import("[]")).await.unwrap();

    let view = planner
        .reset_view(&Viewport {
            project: "default".to_string(),
            width: 800.0,
            height: 600.0,
        })
        .await
        .unwrap();
    assert!(view.pan.is_finite());
    assert_eq!(view.zoom, 1.0);
}

#[tokio::test]
async fn test_planners_share_the_database() {
    let (_temp_dir, db_path) = common::create_test_environment();
    let first = PlannerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .unwrap();
    let second = PlannerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .unwrap();

    first
        .add_thought(&AddThought {
            project: "default".to_string(),
            text: "Shared".to_string(),
            step_id: None,
            scheduled_at: None,
        })
        .await
        .unwrap();

    let seen = second
        .thoughts(&ListThoughts {
            project: "default".to_string(),
            step_id: None,
        })
        .await
        .unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(
        first.roadmap(&default_project()).await.unwrap(),
        second.roadmap(&default_project()).await.unwrap()
    );
}
