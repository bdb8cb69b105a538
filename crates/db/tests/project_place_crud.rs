//! Integration tests for the project and place repositories.
//!
//! Exercises the repository layer against a fresh SQLite database per test:
//! - Two-phase create (project row, then places)
//! - Eager loading for single and list reads
//! - Visit marking and its idempotence
//! - Guarded delete and cascade

use planner_core::place::DEFAULT_PLACE_NOTES;
use planner_core::types::DbId;
use planner_db::models::place::{CreatePlace, Place};
use planner_db::models::project::CreateProject;
use planner_db::repositories::{DeleteOutcome, PlaceRepo, ProjectRepo};
use sqlx::SqlitePool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_project(name: &str) -> CreateProject {
    CreateProject {
        name: name.to_string(),
        description: None,
        start_date: None,
        places: Vec::new(),
    }
}

fn new_place(external_id: &str, notes: Option<&str>) -> CreatePlace {
    CreatePlace {
        external_id: external_id.to_string(),
        notes: notes.map(str::to_string),
    }
}

async fn fetch_place(pool: &SqlitePool, id: DbId) -> Option<Place> {
    sqlx::query_as::<_, Place>(
        "SELECT id, external_id, notes, is_visited, project_id FROM places WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
    .unwrap()
}

async fn count_places(pool: &SqlitePool, project_id: DbId) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM places WHERE project_id = ?")
        .bind(project_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

// ---------------------------------------------------------------------------
// Bootstrap
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_health_check_and_schema(pool: SqlitePool) {
    planner_db::health_check(&pool).await.unwrap();

    for table in ["projects", "places"] {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert_eq!(count.0, 0, "{table} should start empty");
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_migrations_are_idempotent(pool: SqlitePool) {
    planner_db::run_migrations(&pool).await.unwrap();
    planner_db::run_migrations(&pool).await.unwrap();
}

// ---------------------------------------------------------------------------
// Create / read
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_create_project_defaults(pool: SqlitePool) {
    let input = CreateProject {
        name: "Impressionists".to_string(),
        description: Some("Room 201".to_string()),
        start_date: Some("next spring".to_string()),
        places: Vec::new(),
    };
    let project = ProjectRepo::create(&pool, &input).await.unwrap();

    assert_eq!(project.name, "Impressionists");
    assert_eq!(project.description.as_deref(), Some("Room 201"));
    assert_eq!(project.start_date.as_deref(), Some("next spring"));
    assert!(!project.is_completed);

    let found = ProjectRepo::find_with_places(&pool, project.id)
        .await
        .unwrap()
        .expect("project should exist");
    assert_eq!(found.project, project);
    assert!(found.places.is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_places_in_insertion_order(pool: SqlitePool) {
    let project = ProjectRepo::create(&pool, &new_project("Trip")).await.unwrap();
    let inputs = vec![
        new_place("27992", Some(DEFAULT_PLACE_NOTES)),
        new_place("28560", Some("Nighthawks")),
        new_place("111628", None),
    ];

    let created = PlaceRepo::create_many(&pool, project.id, &inputs)
        .await
        .unwrap();
    assert_eq!(created.len(), 3);
    assert!(created.iter().all(|p| p.project_id == project.id && !p.is_visited));

    let loaded = ProjectRepo::find_with_places(&pool, project.id)
        .await
        .unwrap()
        .expect("project should exist");
    let external_ids: Vec<&str> = loaded.places.iter().map(|p| p.external_id.as_str()).collect();
    assert_eq!(external_ids, ["27992", "28560", "111628"]);
    assert_eq!(loaded.places[0].notes.as_deref(), Some(DEFAULT_PLACE_NOTES));
    assert_eq!(loaded.places[1].notes.as_deref(), Some("Nighthawks"));
    assert_eq!(loaded.places[2].notes, None);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_find_with_places_missing_returns_none(pool: SqlitePool) {
    let found = ProjectRepo::find_with_places(&pool, 4242).await.unwrap();
    assert!(found.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_with_places_eager_loads_each_project(pool: SqlitePool) {
    let empty = ProjectRepo::create(&pool, &new_project("Empty")).await.unwrap();
    let full = ProjectRepo::create(&pool, &new_project("Full")).await.unwrap();
    PlaceRepo::create_many(
        &pool,
        full.id,
        &[new_place("1", None), new_place("2", None)],
    )
    .await
    .unwrap();

    let listed = ProjectRepo::list_with_places(&pool).await.unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].project.id, empty.id);
    assert!(listed[0].places.is_empty());
    assert_eq!(listed[1].project.id, full.id);
    assert_eq!(listed[1].places.len(), 2);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_with_places_empty_store(pool: SqlitePool) {
    let listed = ProjectRepo::list_with_places(&pool).await.unwrap();
    assert!(listed.is_empty());
}

// ---------------------------------------------------------------------------
// Visit marking
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_mark_visited_is_idempotent(pool: SqlitePool) {
    let project = ProjectRepo::create(&pool, &new_project("Trip")).await.unwrap();
    let places = PlaceRepo::create_many(&pool, project.id, &[new_place("1", None)])
        .await
        .unwrap();
    let place_id = places[0].id;

    assert!(PlaceRepo::mark_visited(&pool, place_id).await.unwrap());
    assert!(PlaceRepo::mark_visited(&pool, place_id).await.unwrap());

    let place = fetch_place(&pool, place_id).await.unwrap();
    assert!(place.is_visited);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_mark_visited_missing_place(pool: SqlitePool) {
    assert!(!PlaceRepo::mark_visited(&pool, 999).await.unwrap());
}

// ---------------------------------------------------------------------------
// Guarded delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_cascades_unvisited_places(pool: SqlitePool) {
    let project = ProjectRepo::create(&pool, &new_project("Trip")).await.unwrap();
    let places = PlaceRepo::create_many(&pool, project.id, &[new_place("1", None)])
        .await
        .unwrap();

    assert_eq!(
        ProjectRepo::delete_unvisited(&pool, project.id).await.unwrap(),
        DeleteOutcome::Deleted
    );

    assert!(ProjectRepo::find_with_places(&pool, project.id)
        .await
        .unwrap()
        .is_none());
    assert!(fetch_place(&pool, places[0].id).await.is_none());
    assert_eq!(count_places(&pool, project.id).await, 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_blocked_by_visited_place(pool: SqlitePool) {
    let project = ProjectRepo::create(&pool, &new_project("Trip")).await.unwrap();
    let places = PlaceRepo::create_many(
        &pool,
        project.id,
        &[new_place("1", None), new_place("2", None)],
    )
    .await
    .unwrap();
    PlaceRepo::mark_visited(&pool, places[1].id).await.unwrap();

    assert_eq!(
        ProjectRepo::delete_unvisited(&pool, project.id).await.unwrap(),
        DeleteOutcome::HasVisitedPlaces
    );

    let loaded = ProjectRepo::find_with_places(&pool, project.id)
        .await
        .unwrap()
        .expect("project must survive a blocked delete");
    assert_eq!(loaded.places.len(), 2);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_missing_project(pool: SqlitePool) {
    assert_eq!(
        ProjectRepo::delete_unvisited(&pool, 31337).await.unwrap(),
        DeleteOutcome::NotFound
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_after_earlier_delete_reports_not_found(pool: SqlitePool) {
    // Two callers both saw the project; the slower one must get NotFound,
    // not the visited-places conflict.
    let project = ProjectRepo::create(&pool, &new_project("Trip")).await.unwrap();
    PlaceRepo::create_many(&pool, project.id, &[new_place("1", None)])
        .await
        .unwrap();

    let first = ProjectRepo::delete_unvisited(&pool, project.id).await.unwrap();
    let second = ProjectRepo::delete_unvisited(&pool, project.id).await.unwrap();

    assert_eq!(first, DeleteOutcome::Deleted);
    assert_eq!(second, DeleteOutcome::NotFound);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_place_requires_existing_project(pool: SqlitePool) {
    let result = PlaceRepo::create_many(&pool, 777, &[new_place("1", None)]).await;
    assert!(result.is_err(), "foreign key should reject an unknown project");

    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM places")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count.0, 0);
}
