mod common;

use anyhow::Result;
use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

#[tokio::test]
async fn created_bill_round_trips_with_its_payload() -> Result<()> {
    let app = common::test_app();

    let (status, body) = common::send(
        &app,
        "POST",
        "/bills",
        None,
        Some(json!({
            "category": "electricity",
            "date": "2025-06-01",
            "provider": "City Power",
            "amountDue": 120.5
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["insertedId"].as_str().expect("insertedId").to_string();

    let (status, bill) = common::send(&app, "GET", &format!("/bills/{}", id), None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(bill["id"], id.as_str());
    assert_eq!(bill["category"], "electricity");
    assert_eq!(bill["provider"], "City Power");
    assert_eq!(bill["amountDue"], 120.5);
    // Bare day normalized to a midnight-UTC timestamp
    assert_eq!(bill["date"], "2025-06-01T00:00:00Z");
    Ok(())
}

#[tokio::test]
async fn recent_is_bounded_to_six_newest_first() -> Result<()> {
    let app = common::test_app();

    for day in 1..=9 {
        let (status, _) = common::send(
            &app,
            "POST",
            "/bills",
            None,
            Some(json!({
                "category": "water",
                "date": format!("2025-06-{:02}", day)
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = common::send(&app, "GET", "/bills/recent", None, None).await;
    assert_eq!(status, StatusCode::OK);
    let bills = body.as_array().expect("array");
    assert_eq!(bills.len(), 6);

    let dates: Vec<&str> = bills.iter().map(|b| b["date"].as_str().unwrap()).collect();
    for pair in dates.windows(2) {
        // RFC 3339 UTC timestamps compare correctly as strings
        assert!(pair[0] >= pair[1], "dates out of order: {:?}", dates);
    }
    assert_eq!(dates[0], "2025-06-09T00:00:00Z");
    Ok(())
}

#[tokio::test]
async fn category_filter_matches_exactly() -> Result<()> {
    let app = common::test_app();

    for (category, date) in [("internet", "2025-01-01"), ("gas", "2025-01-02"), ("internet", "2025-01-03")] {
        common::send(
            &app,
            "POST",
            "/bills",
            None,
            Some(json!({ "category": category, "date": date })),
        )
        .await;
    }

    let (status, body) = common::send(&app, "GET", "/bills?category=internet", None, None).await;
    assert_eq!(status, StatusCode::OK);
    let bills = body.as_array().expect("array");
    assert_eq!(bills.len(), 2);
    assert!(bills.iter().all(|b| b["category"] == "internet"));

    let (status, body) = common::send(&app, "GET", "/bills", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 3);
    Ok(())
}

#[tokio::test]
async fn malformed_bill_id_is_invalid_not_missing() -> Result<()> {
    let app = common::test_app();

    let (status, body) = common::send(&app, "GET", "/bills/not-a-uuid", None, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
    Ok(())
}

#[tokio::test]
async fn well_formed_but_absent_bill_id_is_not_found() -> Result<()> {
    let app = common::test_app();

    let (status, _) = common::send(
        &app,
        "GET",
        &format!("/bills/{}", Uuid::new_v4()),
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn unparseable_date_is_rejected() -> Result<()> {
    let app = common::test_app();

    let (status, _) = common::send(
        &app,
        "POST",
        "/bills",
        None,
        Some(json!({ "category": "gas", "date": "whenever" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}
