use axum::{
    body::Bytes,
    extract::{Path, State},
    Json,
};
use domain::{validate_new_person, Envelope, NewPerson, Person, PersonId, PersonInput};
use tracing::debug;

use super::AppState;
use crate::ApiError;

pub async fn list(State(state): State<AppState>) -> Result<Json<Envelope<Vec<Person>>>, ApiError> {
    match state.store.list().await {
        Ok(persons) => Ok(Json(Envelope::new("Success!", persons))),
        Err(e) => Err(ApiError::Storage {
            context: "There was an error while trying to retrieve persons from the database!".into(),
            source: e,
        }),
    }
}

pub async fn get(
    Path(raw_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Envelope<Person>>, ApiError> {
    let id = parse_id(&raw_id)?;
    let person = state.store.get(id).await.map_err(|e| {
        ApiError::from_db(
            e,
            id,
            format!("There was an error while trying to retrieve person with id {id} from the database!"),
        )
    })?;

    Ok(Json(Envelope::new("Success!", person)))
}

pub async fn create(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Envelope<Person>>, ApiError> {
    let person = parse_person("POST", &body)?;

    match state.store.insert(&person).await {
        Ok(created) => Ok(Json(Envelope::new(
            "New person was successfully inserted into the database!",
            created,
        ))),
        Err(e) => Err(ApiError::Storage {
            context: "There was an error while trying to add the new person into the database.".into(),
            source: e,
        }),
    }
}

pub async fn update(
    Path(raw_id): Path<String>,
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Envelope<Person>>, ApiError> {
    let id = parse_id(&raw_id)?;
    let person = parse_person("PUT", &body)?;

    let updated = state.store.update(id, &person).await.map_err(|e| {
        ApiError::from_db(
            e,
            id,
            format!("There was an error while trying to edit person with id {id} in the database."),
        )
    })?;

    Ok(Json(Envelope::new(
        format!("Person with id {id} was successfully updated in the database!"),
        updated,
    )))
}

pub async fn delete(
    Path(raw_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Envelope<bool>>, ApiError> {
    let id = parse_id(&raw_id)?;
    state.store.delete(id).await.map_err(|e| {
        ApiError::from_db(
            e,
            id,
            format!("There was an error while trying to delete person with id {id} from the database."),
        )
    })?;

    Ok(Json(Envelope::new(
        format!("Person with id {id} was successfully deleted from the database!"),
        true,
    )))
}

fn parse_id(raw: &str) -> Result<PersonId, ApiError> {
    raw.trim()
        .parse::<PersonId>()
        .map_err(|_| ApiError::InvalidId(raw.to_owned()))
}

/// Body → `PersonInput` → `NewPerson`. Only JSON objects are accepted.
fn parse_person(method: &'static str, body: &Bytes) -> Result<NewPerson, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(ApiError::MissingBody(method));
    }

    let value: serde_json::Value =
        serde_json::from_slice(body).map_err(|e| ApiError::MalformedBody(e.to_string()))?;
    if !value.is_object() {
        return Err(ApiError::MalformedBody("expected a JSON object".into()));
    }
    let input: PersonInput =
        serde_json::from_value(value).map_err(|e| ApiError::MalformedBody(e.to_string()))?;
    debug!("{} body: {:?}", method, input);

    Ok(validate_new_person(&input)?)
}
