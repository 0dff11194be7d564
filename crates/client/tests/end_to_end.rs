//! End-to-end tests: the real router on an ephemeral port, backed by an
//! in-memory SQLite database, driven through `PersonsClient` and `TableView`.

use std::sync::Arc;

use client::{Alert, PersonsClient, SortKey, TableView, ViewState};
use db::{pool::memory_pool, SqlPersonStore};
use domain::{NewPerson, Person};

async fn spawn_server() -> String {
    let pool = memory_pool().await.expect("pool");
    let state = api::AppState::new(Arc::new(SqlPersonStore::new(pool)));
    let app = api::router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn new_person(fname: &str, lname: &str, age: u32) -> NewPerson {
    NewPerson { fname: fname.into(), lname: lname.into(), age }
}

/// Records every alert it receives.
#[derive(Default)]
struct Alerts(Vec<(bool, String, Vec<String>)>);

impl Alert for Alerts {
    fn alert(&mut self, success: bool, message: &str, errors: &[String]) {
        self.0.push((success, message.to_owned(), errors.to_vec()));
    }
}

impl Alerts {
    fn last(&self) -> &(bool, String, Vec<String>) {
        self.0.last().expect("an alert was raised")
    }
}

// ============================================================
// PersonsClient
// ============================================================

#[tokio::test]
async fn add_person_returns_record_with_id() {
    let client = PersonsClient::new(spawn_server().await);

    let results = client.add_person(&new_person("Ada", "Lovelace", 28)).await;

    assert_eq!(results.status, Some(200));
    let created = results.data.expect("data");
    assert_eq!(created, Person::from_new(created.id, new_person("Ada", "Lovelace", 28)));

    let fetched = client.fetch_person(created.id).await;
    assert_eq!(fetched.data, Some(created));
}

#[tokio::test]
async fn invalid_person_reports_validation_errors() {
    let client = PersonsClient::new(spawn_server().await);

    let results = client.add_person(&new_person("", "X", 5)).await;

    assert_eq!(results.status, Some(400));
    assert!(results.errors.contains(&"Missing parameter 'fname'!".to_owned()));
    assert!(results.data.is_none());
}

#[tokio::test]
async fn missing_person_is_404_naming_the_id() {
    let client = PersonsClient::new(spawn_server().await);

    let results = client.fetch_person(9999).await;

    assert_eq!(results.status, Some(404));
    assert!(results.message.contains("9999"));
    assert!(results.errors.is_empty());
}

#[tokio::test]
async fn edit_and_delete_round_trip() {
    let client = PersonsClient::new(spawn_server().await);
    let created = client.add_person(&new_person("Ada", "Lovelace", 28)).await.data.unwrap();

    let edited = Person { age: 29, ..created.clone() };
    let results = client.edit_person(&edited).await;
    assert_eq!(results.data, Some(edited.clone()));

    let deleted = client.delete_person(created.id).await;
    assert_eq!(deleted.status, Some(200));
    assert_eq!(deleted.data, Some(true));

    let again = client.delete_person(created.id).await;
    assert_eq!(again.status, Some(404));

    let missing_edit = client.edit_person(&edited).await;
    assert_eq!(missing_edit.status, Some(404));
    assert_eq!(client.fetch_persons().await.data, Some(vec![]));
}

#[tokio::test]
async fn unreachable_server_yields_no_status() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = PersonsClient::new(format!("http://{addr}"));
    let results = client.fetch_persons().await;

    assert_eq!(results.status, None);
    assert_eq!(results.status_code(), -1);
    assert!(!results.message.is_empty());
    assert!(results.data.is_none());
}

// ============================================================
// TableView
// ============================================================

#[tokio::test]
async fn refresh_loads_and_sorts() {
    let client = PersonsClient::new(spawn_server().await);
    for (name, age) in [("C", 30), ("A", 10), ("B", 20)] {
        client.add_person(&new_person(name, "L", age)).await;
    }

    let mut view = TableView::new();
    assert_eq!(view.state(), &ViewState::Loading);

    let mut alerts = Alerts::default();
    view.refresh(&client, &mut alerts).await;
    assert_eq!(alerts.last(), &(true, "Success!".to_owned(), vec![]));

    view.sort_by_column(SortKey::Age);
    let ages: Vec<u32> = view.rows().iter().map(|p| p.age).collect();
    assert_eq!(ages, [10, 20, 30]);

    view.sort_by_column(SortKey::Age);
    let ages: Vec<u32> = view.rows().iter().map(|p| p.age).collect();
    assert_eq!(ages, [30, 20, 10]);
    assert!(view.render().contains("Age v"));
}

#[tokio::test]
async fn add_validates_locally_before_sending() {
    let client = PersonsClient::new(spawn_server().await);
    let mut view = TableView::new();
    let mut alerts = Alerts::default();
    view.refresh(&client, &mut alerts).await;

    view.new_person_mut().fname = "Ada".into();
    view.new_person_mut().set_age("abc");
    view.add(&client, &mut alerts).await;

    assert_eq!(
        alerts.last(),
        &(
            false,
            "Invalid input!".to_owned(),
            vec!["Missing parameter 'lname'!".to_owned(), "Missing parameter 'age'!".to_owned()]
        )
    );
    assert!(client.fetch_persons().await.data.unwrap().is_empty());
}

#[tokio::test]
async fn add_edit_delete_patch_local_rows() {
    let client = PersonsClient::new(spawn_server().await);
    let mut view = TableView::new();
    let mut alerts = Alerts::default();
    view.refresh(&client, &mut alerts).await;

    // Add.
    {
        let draft = view.new_person_mut();
        draft.fname = "Ada".into();
        draft.lname = "Lovelace".into();
        draft.set_age("28");
    }
    view.add(&client, &mut alerts).await;
    assert!(alerts.last().0);
    let rows = view.rows();
    assert_eq!(rows.len(), 1);
    let id = rows[0].id;

    // Edit.
    assert!(view.start_edit(id));
    view.draft_mut(id).unwrap().set_age("29");
    view.save_edit(id, &client, &mut alerts).await;
    assert!(!view.is_editing(id));
    assert_eq!(alerts.last().1, format!("Person with id {id} was successfully updated in the database!"));
    assert_eq!(view.rows()[0].age, 29);

    // Delete.
    view.delete(id, &client, &mut alerts).await;
    assert!(alerts.last().0);
    assert!(view.rows().is_empty());

    // Deleting again fails and leaves the local rows alone.
    view.delete(id, &client, &mut alerts).await;
    assert!(!alerts.last().0);
    assert!(alerts.last().1.contains(&id.to_string()));
}

#[tokio::test]
async fn failed_edit_leaves_row_untouched() {
    let client = PersonsClient::new(spawn_server().await);
    let created = client.add_person(&new_person("Ada", "Lovelace", 28)).await.data.unwrap();

    let mut view = TableView::new();
    let mut alerts = Alerts::default();
    view.refresh(&client, &mut alerts).await;

    // Someone else deletes the record; the local mirror is now stale.
    client.delete_person(created.id).await;

    view.start_edit(created.id);
    view.draft_mut(created.id).unwrap().fname = "Augusta".into();
    view.save_edit(created.id, &client, &mut alerts).await;

    assert!(!alerts.last().0);
    assert!(!view.is_editing(created.id));
    assert_eq!(view.rows(), vec![created]);
}

#[tokio::test]
async fn closures_can_receive_alerts() {
    let client = PersonsClient::new(spawn_server().await);
    let mut view = TableView::new();

    let mut seen = Vec::new();
    let mut alert = |ok: bool, message: &str, _errors: &[String]| seen.push((ok, message.to_owned()));
    view.refresh(&client, &mut alert).await;

    assert_eq!(seen, [(true, "Success!".to_owned())]);
}
