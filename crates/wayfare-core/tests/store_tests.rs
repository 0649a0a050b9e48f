//! Integration tests for the local rusqlite-backed server.

use jiff::civil::date;
use tempfile::TempDir;
use wayfare_core::{
    clients::{ActivityClient, CurrentTripStore, LinkClient, ParticipantClient, TripClient},
    params::{CreateActivity, CreateLink, CreateTrip, UpdateTrip},
    LocalServer, LocalServerBuilder, TripError,
};

/// Helper function to create a test server over a temporary database.
async fn create_test_server() -> (TempDir, LocalServer) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let server = LocalServerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create server");
    (temp_dir, server)
}

fn lisbon_trip() -> CreateTrip {
    CreateTrip {
        destination: "Lisbon".to_string(),
        starts_at: date(2024, 5, 5),
        ends_at: date(2024, 5, 7),
        emails_to_invite: vec!["ana@example.com".to_string(), "bia@example.com".to_string()],
    }
}

#[tokio::test]
async fn test_create_and_get_trip_round_trip() {
    let (_temp_dir, server) = create_test_server().await;

    let trip_id = TripClient::create(&server, &lisbon_trip())
        .await
        .expect("create trip");
    let trip = server
        .get_by_id(trip_id)
        .await
        .expect("get trip")
        .expect("trip exists");

    assert_eq!(trip.id, trip_id);
    assert_eq!(trip.destination, "Lisbon");
    assert_eq!(trip.starts_at, date(2024, 5, 5));
    assert_eq!(trip.ends_at, date(2024, 5, 7));
}

#[tokio::test]
async fn test_get_missing_trip_is_none() {
    let (_temp_dir, server) = create_test_server().await;
    assert!(server.get_by_id(99).await.expect("query").is_none());
}

#[tokio::test]
async fn test_invited_emails_become_participants() {
    let (_temp_dir, server) = create_test_server().await;

    let trip_id = TripClient::create(&server, &lisbon_trip())
        .await
        .expect("create trip");
    let participants = ParticipantClient::list_by_trip(&server, trip_id)
        .await
        .expect("list participants");

    let emails: Vec<&str> = participants.iter().map(|p| p.email.as_str()).collect();
    assert_eq!(emails, ["ana@example.com", "bia@example.com"]);
    assert!(participants.iter().all(|p| !p.is_confirmed));
}

#[tokio::test]
async fn test_update_trip_changes_fields() {
    let (_temp_dir, server) = create_test_server().await;
    let trip_id = TripClient::create(&server, &lisbon_trip())
        .await
        .expect("create trip");

    server
        .update(&UpdateTrip {
            id: trip_id,
            destination: "Porto".to_string(),
            starts_at: date(2024, 6, 1),
            ends_at: date(2024, 6, 3),
        })
        .await
        .expect("update trip");

    let trip = server.get_by_id(trip_id).await.unwrap().unwrap();
    assert_eq!(trip.destination, "Porto");
    assert_eq!(trip.starts_at, date(2024, 6, 1));
    assert_eq!(trip.ends_at, date(2024, 6, 3));
}

#[tokio::test]
async fn test_update_missing_trip_is_not_found() {
    let (_temp_dir, server) = create_test_server().await;

    let err = server
        .update(&UpdateTrip {
            id: 99,
            destination: "Porto".to_string(),
            starts_at: date(2024, 6, 1),
            ends_at: date(2024, 6, 3),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, TripError::TripNotFound { id: 99 }));
}

#[tokio::test]
async fn test_activity_sections_cover_whole_trip_span() {
    let (_temp_dir, server) = create_test_server().await;
    let trip_id = TripClient::create(&server, &lisbon_trip())
        .await
        .expect("create trip");

    ActivityClient::create(
        &server,
        &CreateActivity {
            trip_id,
            title: "Museum".to_string(),
            occurs_at: date(2024, 5, 6).at(15, 0, 0, 0),
        },
    )
    .await
    .expect("create activity");

    let sections = ActivityClient::list_by_trip(&server, trip_id)
        .await
        .expect("list activities");

    // One section per day of the trip, including the empty ones.
    assert_eq!(sections.len(), 3);
    assert_eq!(sections[0].date, date(2024, 5, 5));
    assert!(sections[0].activities.is_empty());
    assert_eq!(sections[1].activities.len(), 1);
    assert_eq!(sections[1].activities[0].title, "Museum");
    assert!(sections[2].activities.is_empty());
}

#[tokio::test]
async fn test_activity_outside_trip_span_is_rejected() {
    let (_temp_dir, server) = create_test_server().await;
    let trip_id = TripClient::create(&server, &lisbon_trip())
        .await
        .expect("create trip");

    let err = ActivityClient::create(
        &server,
        &CreateActivity {
            trip_id,
            title: "Too late".to_string(),
            occurs_at: date(2024, 5, 20).at(10, 0, 0, 0),
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(err, TripError::Validation { .. }));
}

#[tokio::test]
async fn test_activity_for_missing_trip_is_not_found() {
    let (_temp_dir, server) = create_test_server().await;

    let err = ActivityClient::create(
        &server,
        &CreateActivity {
            trip_id: 99,
            title: "Nowhere".to_string(),
            occurs_at: date(2024, 5, 6).at(10, 0, 0, 0),
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(err, TripError::TripNotFound { id: 99 }));
}

#[tokio::test]
async fn test_links_round_trip() {
    let (_temp_dir, server) = create_test_server().await;
    let trip_id = TripClient::create(&server, &lisbon_trip())
        .await
        .expect("create trip");

    LinkClient::create(
        &server,
        &CreateLink {
            trip_id,
            title: "Booking".to_string(),
            url: "https://example.com/stay".to_string(),
        },
    )
    .await
    .expect("create link");

    let links = LinkClient::list_by_trip(&server, trip_id)
        .await
        .expect("list links");
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].title, "Booking");
    assert_eq!(links[0].url, "https://example.com/stay");
}

#[tokio::test]
async fn test_link_for_missing_trip_is_not_found() {
    let (_temp_dir, server) = create_test_server().await;

    let err = LinkClient::create(
        &server,
        &CreateLink {
            trip_id: 99,
            title: "Booking".to_string(),
            url: "https://example.com".to_string(),
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(err, TripError::TripNotFound { id: 99 }));
}

#[tokio::test]
async fn test_current_trip_save_get_clear() {
    let (_temp_dir, server) = create_test_server().await;

    assert_eq!(server.get().await.expect("empty get"), None);

    server.save(3).await.expect("save");
    assert_eq!(server.get().await.expect("get"), Some(3));

    // Saving again overwrites the single slot.
    server.save(8).await.expect("overwrite");
    assert_eq!(server.get().await.expect("get"), Some(8));

    server.clear().await.expect("clear");
    assert_eq!(server.get().await.expect("get after clear"), None);

    // Clearing an empty slot is a no-op.
    server.clear().await.expect("clear again");
}
