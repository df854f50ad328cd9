use std::sync::Arc;

use krishi_core::{
    display::{Notice, Plans},
    params::{AttachEvidence, CreatePlan, NewCrop, StepRef},
    tracker::suggestion_for_day,
    CropPlanTracker, KrishiError, UuidIds,
};
use tempfile::TempDir;

#[test]
#[allow(clippy::too_many_lines)]
fn test_complete_plan_workflow() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let mut tracker = CropPlanTracker::new();

    let plan = tracker
        .create_plan(&CreatePlan {
            crop_name: "  Ginger ".to_string(),
            start_date: Some(jiff::civil::date(2025, 3, 10)),
        })
        .expect("Failed to create plan");
    assert_eq!(plan.crop_name, "Ginger");

    // Walk through the week alternating explicit completion and photos
    for day in 1..=7u8 {
        let step = StepRef {
            plan_id: plan.id.clone(),
            day,
        };
        let updated = if day % 2 == 0 {
            let photo = temp_dir.path().join(format!("day{day}.jpg"));
            std::fs::write(&photo, b"jpeg").expect("Failed to write photo");
            tracker
                .attach_evidence(&AttachEvidence { step, photo })
                .expect("Failed to attach evidence")
        } else {
            tracker.complete_step(&step).expect("Failed to complete step")
        };

        assert!(updated.is_consistent());
        assert_eq!(updated.completed_steps(), usize::from(day));
        let expected_active = if day < 7 { Some(day + 1) } else { None };
        assert_eq!(updated.active_day(), expected_active);
    }

    let finished = tracker.plan(&plan.id).expect("Plan missing");
    assert!(finished.is_finished());

    let day2 = finished.step(2).expect("Day 2 missing");
    assert!(day2
        .photo_url
        .as_deref()
        .is_some_and(|url| url.starts_with("file://") && url.ends_with("day2.jpg")));
    assert_eq!(day2.suggestion.as_deref(), Some(suggestion_for_day(2)));
    assert!(finished.step(3).expect("Day 3 missing").photo_url.is_none());

    // Terminal state rejects further completion
    let err = tracker
        .complete_step(&StepRef {
            plan_id: plan.id.clone(),
            day: 7,
        })
        .unwrap_err();
    assert!(matches!(err, KrishiError::StepNotActive { active_day: None, .. }));

    let output = Plans(tracker.plans().to_vec()).to_string();
    assert!(output.contains("## Ginger"));
    assert!(output.contains("(7/7)"));
    assert!(output.contains("All days completed"));
}

#[test]
fn test_rejected_operations_leave_state_unchanged() {
    let mut tracker = CropPlanTracker::new().with_demo_data();
    let before = tracker.plans();
    let plan_id = before[0].id.clone();

    let gap = tracker.complete_step(&StepRef {
        plan_id: plan_id.clone(),
        day: 6,
    });
    assert!(matches!(
        gap,
        Err(KrishiError::StepNotActive {
            day: 6,
            active_day: Some(4),
            ..
        })
    ));

    let missing = tracker.attach_evidence(&AttachEvidence {
        step: StepRef {
            plan_id: plan_id.clone(),
            day: 4,
        },
        photo: "/definitely/not/here.jpg".into(),
    });
    assert!(matches!(missing, Err(KrishiError::FileSystem { .. })));

    let unknown = tracker.complete_step(&StepRef {
        plan_id: "nope".to_string(),
        day: 1,
    });
    assert!(matches!(unknown, Err(KrishiError::PlanNotFound { .. })));

    assert!(Arc::ptr_eq(&before, &tracker.plans()));
}

#[test]
fn test_duplicate_plan_notice() {
    let mut tracker = CropPlanTracker::new().with_demo_data();
    let existing = tracker.plans()[0].crop_name.clone();

    let err = tracker
        .create_plan(&CreatePlan {
            crop_name: existing.clone(),
            start_date: None,
        })
        .unwrap_err();

    let notice = Notice::from(&err);
    assert!(!notice.is_success());
    assert!(notice.description.contains(&existing));
}

#[test]
fn test_add_crop_with_uuid_ids() {
    let mut tracker = CropPlanTracker::with_ids(Arc::new(UuidIds));

    let crop = tracker
        .add_crop(&NewCrop {
            name: "Cardamom".to_string(),
            crop_type: "Spice".to_string(),
            area: "0.5 acre".to_string(),
            price: Some("  ".to_string()),
            ..NewCrop::default()
        })
        .expect("Failed to add crop");

    assert_eq!(crop.id.len(), 36);
    assert_eq!(crop.icon, "🌶️");
    assert_eq!(crop.yield_estimate, "New");
    assert_eq!(crop.price, None);
    assert_eq!(tracker.crops().len(), 1);
}
