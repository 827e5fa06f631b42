use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coffee {
    pub id: i64,
    pub name: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub price: Decimal,
    pub create_time: DateTime<Utc>,
    pub update_time: DateTime<Utc>,
}

#[derive(Deserialize)]
pub struct NewCoffee {
    pub name: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub price: Decimal,
}

#[derive(Default)]
pub struct Store {
    next_id: i64,
    coffees: BTreeMap<i64, Coffee>,
}

impl Store {
    fn insert(&mut self, input: NewCoffee) -> Coffee {
        self.next_id += 1;
        let now = Utc::now();
        let coffee = Coffee {
            id: self.next_id,
            name: input.name,
            price: input.price,
            create_time: now,
            update_time: now,
        };
        self.coffees.insert(coffee.id, coffee.clone());
        coffee
    }
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/coffee", get(list_coffee).post(create_coffee))
        .route("/coffee/", get(list_coffee).post(create_coffee))
        .route("/coffee/{id}", get(get_coffee))
        .with_state(db)
}

/// A router that answers every request with the same status and body.
pub fn stub(status: StatusCode, body: &'static str) -> Router {
    Router::new().fallback(move || async move { (status, body) })
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    serve(listener, app()).await
}

pub async fn serve(listener: TcpListener, router: Router) -> Result<(), std::io::Error> {
    axum::serve(listener, router).await
}

async fn list_coffee(State(db): State<Db>) -> Json<Vec<Coffee>> {
    let store = db.read().await;
    Json(store.coffees.values().cloned().collect())
}

async fn create_coffee(
    State(db): State<Db>,
    Json(input): Json<NewCoffee>,
) -> Result<(StatusCode, Json<Coffee>), StatusCode> {
    if input.name.trim().is_empty() || input.price < Decimal::ZERO {
        return Err(StatusCode::BAD_REQUEST);
    }
    let coffee = db.write().await.insert(input);
    info!(id = coffee.id, name = %coffee.name, "created coffee");
    Ok((StatusCode::CREATED, Json(coffee)))
}

async fn get_coffee(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<Json<Coffee>, StatusCode> {
    let store = db.read().await;
    store.coffees.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}
