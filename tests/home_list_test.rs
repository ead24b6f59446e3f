#![allow(clippy::indexing_slicing)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use chrono::{TimeZone, Utc};
use common::{create_test_dir, date, names, open_store};
use expiry_tracker::detector::{FixedDateDetector, ImageRef, NoDetection, TextDateDetector};
use expiry_tracker::item::{Category, ItemError, NewFoodItem};
use expiry_tracker::prompt::{AutoConfirm, Decision, ScriptedPrompt};
use expiry_tracker::urgency::Urgency;
use expiry_tracker::view::{scan_expiry, ItemListView, ScanOutcome};
use std::path::Path;
use std::sync::Arc;

#[tokio::test]
async fn test_scan_then_add_lists_item() {
    let temp_dir = create_test_dir();
    let store = Arc::new(open_store(temp_dir.path()));
    let mut view = ItemListView::open(Arc::clone(&store)).await;
    assert!(view.is_empty());

    let prompt = ScriptedPrompt::new([Decision::Yes]);
    let image = ImageRef::from(Path::new("/photos/label.jpg"));
    let outcome = scan_expiry(&FixedDateDetector::default(), &prompt, &image).await;
    assert_eq!(outcome, ScanOutcome::Detected(date(2025, 12, 1)));
    assert_eq!(
        prompt.asked(),
        vec!["Would you like to use this date: 12/2025?".to_string()]
    );

    let now = Utc.with_ymd_and_hms(2025, 11, 20, 10, 0, 0).unwrap();
    let expiry = outcome.expiry_or(date(2025, 11, 20));
    let item = view
        .add(NewFoodItem::new("Cheese", Category::Dairy, expiry), now)
        .await
        .unwrap();

    assert_eq!(item.expiry_date, "2025-12-01");
    assert_eq!(item.added_date, "2025-11-20T10:00:00.000Z");

    let rows = view.rows(date(2025, 11, 28));
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].days_left, Some(3));
    assert_eq!(rows[0].urgency, Some(Urgency::Critical));
    assert_eq!(rows[0].label, "3 days left");

    // Another view over the same directory sees the item
    let other = ItemListView::open(Arc::new(open_store(temp_dir.path()))).await;
    assert_eq!(names(other.items()), vec!["Cheese"]);
}

#[tokio::test]
async fn test_declined_detection_falls_back_to_manual_date() {
    let prompt = ScriptedPrompt::new([Decision::No]);
    let outcome = scan_expiry(
        &FixedDateDetector::default(),
        &prompt,
        &ImageRef::new("label.jpg"),
    )
    .await;

    assert_eq!(outcome, ScanOutcome::Manual);
    assert_eq!(outcome.expiry_or(date(2025, 3, 1)), date(2025, 3, 1));
}

#[tokio::test]
async fn test_scan_reads_label_text_next_to_image() {
    let temp_dir = create_test_dir();
    let image = temp_dir.path().join("yogurt.jpg");
    std::fs::write(
        temp_dir.path().join("yogurt.txt"),
        "Natural yogurt\nBEST BEFORE 2026-02-14\n",
    )
    .unwrap();

    let prompt = ScriptedPrompt::new([Decision::Yes]);
    let outcome = scan_expiry(&TextDateDetector, &prompt, &ImageRef::from(image.as_path())).await;

    assert_eq!(outcome, ScanOutcome::Detected(date(2026, 2, 14)));
    assert_eq!(
        prompt.asked(),
        vec!["Would you like to use this date: 02/2026?".to_string()]
    );
}

#[tokio::test]
async fn test_scan_without_label_text_falls_back_to_manual() {
    let temp_dir = create_test_dir();
    let image = temp_dir.path().join("bread.jpg");

    let prompt = ScriptedPrompt::default();
    let outcome = scan_expiry(&TextDateDetector, &prompt, &ImageRef::from(image.as_path())).await;

    assert_eq!(outcome, ScanOutcome::Manual);
    assert!(prompt.asked().is_empty());
}

#[tokio::test]
async fn test_no_detection_does_not_ask() {
    let prompt = ScriptedPrompt::default();
    let outcome = scan_expiry(&NoDetection, &prompt, &ImageRef::new("blurry.jpg")).await;

    assert_eq!(outcome, ScanOutcome::Manual);
    assert!(prompt.asked().is_empty());
}

#[tokio::test]
async fn test_invalid_name_is_not_saved() {
    let temp_dir = create_test_dir();
    let store = Arc::new(open_store(temp_dir.path()));
    let mut view = ItemListView::open(Arc::clone(&store)).await;

    let result = view
        .add(NewFoodItem::new("", Category::Meat, date(2025, 1, 2)), Utc::now())
        .await;

    assert_eq!(result, Err(ItemError::EmptyName));
    assert!(store.load_all().await.is_empty());
}

#[tokio::test]
async fn test_delete_flow_on_disk() {
    let temp_dir = create_test_dir();
    let store = Arc::new(open_store(temp_dir.path()));
    let mut view = ItemListView::open(Arc::clone(&store)).await;
    let now = Utc.with_ymd_and_hms(2025, 1, 1, 9, 0, 0).unwrap();

    let milk = view
        .add(NewFoodItem::new("Milk", Category::Dairy, date(2025, 1, 5)), now)
        .await
        .unwrap();
    let eggs = view
        .add(NewFoodItem::new("Eggs", Category::Dairy, date(2025, 1, 2)), now)
        .await
        .unwrap();
    assert_ne!(milk.id, eggs.id);

    let cancel = ScriptedPrompt::new([Decision::Cancel]);
    assert!(!view.delete(eggs.id, &cancel).await);
    assert_eq!(store.load_all().await.len(), 2);

    assert!(view.delete(eggs.id, &AutoConfirm).await);
    assert_eq!(names(view.items()), vec!["Milk"]);
    assert_eq!(names(&store.load_all().await), vec!["Milk"]);
}

#[tokio::test]
async fn test_rows_follow_urgency_order() {
    let temp_dir = create_test_dir();
    let store = Arc::new(open_store(temp_dir.path()));
    let mut view = ItemListView::open(store).await;
    let now = Utc.with_ymd_and_hms(2025, 1, 1, 9, 0, 0).unwrap();

    for (name, expiry) in [
        ("Carrots", date(2025, 1, 20)),
        ("Yogurt", date(2024, 12, 30)),
        ("Bread", date(2025, 1, 1)),
        ("Apples", date(2025, 1, 6)),
    ] {
        view.add(NewFoodItem::new(name, Category::Other, expiry), now)
            .await
            .unwrap();
    }

    let rows = view.rows(date(2025, 1, 1));
    let order: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(order, vec!["Yogurt", "Bread", "Apples", "Carrots"]);

    let labels: Vec<&str> = rows.iter().map(|r| r.label.as_str()).collect();
    assert_eq!(
        labels,
        vec!["Expired 2 days ago", "Expires today!", "5 days left", "19 days left"]
    );
    let urgencies: Vec<Option<Urgency>> = rows.iter().map(|r| r.urgency).collect();
    assert_eq!(
        urgencies,
        vec![
            Some(Urgency::Expired),
            Some(Urgency::Critical),
            Some(Urgency::Soon),
            Some(Urgency::Fresh)
        ]
    );
}
