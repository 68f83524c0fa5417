//! Integration tests for the Todos domain
//!
//! These run against a real PostgreSQL started through testcontainers, so
//! they are ignored by default. Run them with `--ignored` when Docker is
//! available.

use domain_todos::*;
use test_utils::{TestDataBuilder, TestDatabase, assertions::*};

fn todo(title: String, priority: i32) -> Todo {
    Todo::new(TodoFields {
        title,
        description: "Integration test todo".to_string(),
        completed: false,
        priority,
    })
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_save_and_find_todo() {
    let db = TestDatabase::new().await;
    let repo = PgTodoRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("save_and_find");

    let priority = builder.priority(5);
    let created = repo.save(todo(builder.title("main"), priority)).await.unwrap();
    let id = assert_some(created.id, "saved todo should have an id");

    let found = repo.find_by_id(id).await.unwrap();
    let found = assert_some(found, "todo should exist");

    assert_eq!(found, created);
    assert_eq!(found.title, builder.title("main"));
    assert_eq!(found.priority, priority);
    assert!(!found.completed);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_update_overwrites_row() {
    let db = TestDatabase::new().await;
    let repo = PgTodoRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("update_row");

    let mut saved = repo.save(todo(builder.title("before"), 1)).await.unwrap();
    saved.apply(TodoFields {
        title: builder.title("after"),
        description: "Changed".to_string(),
        completed: true,
        priority: 4,
    });
    let updated = repo.save(saved.clone()).await.unwrap();

    assert_eq!(updated.id, saved.id);
    assert_eq!(updated.title, builder.title("after"));
    assert!(updated.completed);
    assert_eq!(updated.priority, 4);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_update_of_deleted_row_is_not_found() {
    let db = TestDatabase::new().await;
    let repo = PgTodoRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("update_deleted");

    let saved = repo.save(todo(builder.title("gone"), 1)).await.unwrap();
    let id = assert_some(saved.id, "saved todo should have an id");
    repo.delete_by_id(id).await.unwrap();

    assert!(matches!(
        repo.save(saved).await,
        Err(TodoError::NotFound(missing)) if missing == id
    ));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_list_is_sorted_case_sensitively() {
    let db = TestDatabase::new().await;
    let repo = PgTodoRepository::new(db.connection());

    for (title, priority) in [("banana", 2), ("Banana", 2), ("apple", 2), ("urgent", 5)] {
        repo.save(todo(title.to_string(), priority)).await.unwrap();
    }

    let titles: Vec<String> = repo
        .find_all_sorted(TodoOrder::default())
        .await
        .unwrap()
        .into_iter()
        .map(|t| t.title)
        .collect();

    assert_eq!(titles, vec!["urgent", "Banana", "apple", "banana"]);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_delete_and_exists() {
    let db = TestDatabase::new().await;
    let repo = PgTodoRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("delete_exists");

    let saved = repo.save(todo(builder.title("doomed"), 0)).await.unwrap();
    let id = assert_some(saved.id, "saved todo should have an id");

    assert!(repo.exists_by_id(id).await.unwrap());
    repo.delete_by_id(id).await.unwrap();
    assert!(!repo.exists_by_id(id).await.unwrap());
    assert!(matches!(
        repo.delete_by_id(id).await,
        Err(TodoError::NotFound(_))
    ));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_priority_check_constraint() {
    let db = TestDatabase::new().await;
    let repo = PgTodoRepository::new(db.connection());

    let result = repo.save(todo("out of range".to_string(), 9)).await;

    assert!(matches!(result, Err(TodoError::Storage(_))));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_service_round_trip() {
    let db = TestDatabase::new().await;
    let service = TodoService::new(PgTodoRepository::new(db.connection()));

    let milk = service
        .create(TodoRequest {
            title: Some("Buy milk".to_string()),
            description: Some("Two liters".to_string()),
            completed: None,
            priority: Some(3),
        })
        .await
        .unwrap();
    let dentist = service
        .create(TodoRequest {
            title: Some("Call dentist".to_string()),
            description: Some("Annual checkup".to_string()),
            completed: None,
            priority: Some(5),
        })
        .await
        .unwrap();

    let listed = service.list().await.unwrap();
    assert_eq!(listed, vec![dentist.clone(), milk.clone()]);
    assert_sorted_by(&listed, |a, b| b.priority.cmp(&a.priority), "priority desc");

    service.delete(milk.id).await.unwrap();
    assert!(matches!(
        service.find_by_id(milk.id).await,
        Err(TodoError::NotFound(_))
    ));
}
