//! One method per REST route.

use domain::{NewPerson, Person, PersonId};
use reqwest::Client;
use tracing::debug;

use crate::Results;

/// HTTP client for the persons API.
#[derive(Debug, Clone)]
pub struct PersonsClient {
    http: Client,
    base_url: String,
}

impl PersonsClient {
    /// `base_url` is the server root, e.g. `http://localhost:8080`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /persons`
    pub async fn fetch_persons(&self) -> Results<Vec<Person>> {
        let url = self.url(None);
        debug!("GET {}", url);
        Results::from_response(self.http.get(url).send().await).await
    }

    /// `GET /persons/{id}`
    pub async fn fetch_person(&self, id: PersonId) -> Results<Person> {
        let url = self.url(Some(id));
        debug!("GET {}", url);
        Results::from_response(self.http.get(url).send().await).await
    }

    /// `POST /persons`
    pub async fn add_person(&self, person: &NewPerson) -> Results<Person> {
        let url = self.url(None);
        debug!("POST {}", url);
        Results::from_response(self.http.post(url).json(person).send().await).await
    }

    /// `PUT /persons/{id}` with the record's current fields.
    pub async fn edit_person(&self, person: &Person) -> Results<Person> {
        let url = self.url(Some(person.id));
        debug!("PUT {}", url);
        Results::from_response(self.http.put(url).json(&person.fields()).send().await).await
    }

    /// `DELETE /persons/{id}`; `data` is `Some(true)` on success.
    pub async fn delete_person(&self, id: PersonId) -> Results<bool> {
        let url = self.url(Some(id));
        debug!("DELETE {}", url);
        Results::from_response(self.http.delete(url).send().await).await
    }

    fn url(&self, id: Option<PersonId>) -> String {
        match id {
            Some(id) => format!("{}/persons/{}", self.base_url, id),
            None => format!("{}/persons", self.base_url),
        }
    }
}
