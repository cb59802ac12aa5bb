//! REST helpers for the remote plant service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call fails with `DataFetchError::Unavailable`;
//! pages only start fetches in the browser (`pages::load_into`).
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses become `DataFetchError::Status` so pages can render an
//! error state instead of empty or partial data. No retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "plants_test.rs"]
mod plants_test;

use chrono::NaiveDate;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::{CareLevel, NewPlant, Plant, WriteAck};
use crate::error::DataFetchError;

fn plants_endpoint(base: &str) -> String {
    format!("{base}/plants")
}

fn plant_endpoint(base: &str, id: &str) -> String {
    format!("{base}/plants/{}", urlencoding::encode(id))
}

fn my_plants_endpoint(base: &str, email: &str) -> String {
    format!("{base}/my-plants?email={}", urlencoding::encode(email))
}

#[derive(Clone, Copy, Debug)]
enum Method {
    Get,
    Post,
    Put,
    Delete,
}

async fn request<T, B>(method: Method, url: &str, body: Option<&B>) -> Result<T, DataFetchError>
where
    T: DeserializeOwned,
    B: Serialize,
{
    #[cfg(feature = "hydrate")]
    {
        use gloo_net::http::Request;

        let builder = match method {
            Method::Get => Request::get(url),
            Method::Post => Request::post(url),
            Method::Put => Request::put(url),
            Method::Delete => Request::delete(url),
        };
        let resp = match body {
            Some(body) => builder
                .json(body)
                .map_err(|e| DataFetchError::Network(e.to_string()))?
                .send()
                .await,
            None => builder.send().await,
        }
        .map_err(|e| DataFetchError::Network(e.to_string()))?;
        if !resp.ok() {
            log::warn!("{method:?} {url} -> {}", resp.status());
            return Err(DataFetchError::Status { status: resp.status() });
        }
        resp.json::<T>().await.map_err(|e| DataFetchError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (method, url, body);
        Err(DataFetchError::Unavailable)
    }
}

/// `GET /plants`.
///
/// # Errors
///
/// Returns a `DataFetchError` on transport failure, non-2xx status, or bad JSON.
pub async fn fetch_plants(base: &str) -> Result<Vec<Plant>, DataFetchError> {
    request::<_, ()>(Method::Get, &plants_endpoint(base), None).await
}

/// `GET /plants/{id}`.
///
/// # Errors
///
/// Returns a `DataFetchError` on transport failure, non-2xx status, or bad JSON.
pub async fn fetch_plant(base: &str, id: &str) -> Result<Plant, DataFetchError> {
    request::<_, ()>(Method::Get, &plant_endpoint(base, id), None).await
}

/// `GET /my-plants?email=...`: plants added by one user.
///
/// # Errors
///
/// Returns a `DataFetchError` on transport failure, non-2xx status, or bad JSON.
pub async fn fetch_my_plants(base: &str, email: &str) -> Result<Vec<Plant>, DataFetchError> {
    request::<_, ()>(Method::Get, &my_plants_endpoint(base, email), None).await
}

/// `POST /plants`.
///
/// # Errors
///
/// Returns a `DataFetchError` on transport failure, non-2xx status, or bad JSON.
pub async fn create_plant(base: &str, plant: &NewPlant) -> Result<WriteAck, DataFetchError> {
    request(Method::Post, &plants_endpoint(base), Some(plant)).await
}

/// `PUT /plants/{id}`.
///
/// # Errors
///
/// Returns a `DataFetchError` on transport failure, non-2xx status, or bad JSON.
pub async fn update_plant(base: &str, id: &str, plant: &NewPlant) -> Result<WriteAck, DataFetchError> {
    request(Method::Put, &plant_endpoint(base, id), Some(plant)).await
}

/// `DELETE /plants/{id}`.
///
/// # Errors
///
/// Returns a `DataFetchError` on transport failure, non-2xx status, or bad JSON.
pub async fn delete_plant(base: &str, id: &str) -> Result<WriteAck, DataFetchError> {
    request::<_, ()>(Method::Delete, &plant_endpoint(base, id), None).await
}

/// Table orderings offered on the plant lists.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlantSort {
    /// Service order (insertion).
    #[default]
    Default,
    /// Soonest next watering first; plants without a date go last.
    NextWatering,
    /// Easy, then moderate, then difficult.
    CareLevel,
}

impl PlantSort {
    pub const ALL: [PlantSort; 3] = [PlantSort::Default, PlantSort::NextWatering, PlantSort::CareLevel];

    pub fn key(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::NextWatering => "next-watering",
            Self::CareLevel => "care-level",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::NextWatering => "Next watering",
            Self::CareLevel => "Care level",
        }
    }

    pub fn from_key(key: &str) -> Self {
        Self::ALL.into_iter().find(|s| s.key() == key).unwrap_or_default()
    }
}

/// Sort `plants` in place. Stable, so ties keep service order.
pub fn sort_plants(plants: &mut [Plant], sort: PlantSort) {
    match sort {
        PlantSort::Default => {}
        PlantSort::NextWatering => plants.sort_by_key(|p| {
            let next = p.details.next_watering();
            (next.is_none(), next)
        }),
        PlantSort::CareLevel => {
            plants.sort_by(|a, b| a.details.care_level.cmp(&b.details.care_level));
        }
    }
}

/// Whether a plant is due for water on `today`. Without a known date, nothing is.
pub fn needs_water(plant: &Plant, today: Option<NaiveDate>) -> bool {
    today.zip(plant.details.next_watering()).is_some_and(|(today, next)| next <= today)
}

/// The `limit` most recently added plants, newest first.
pub fn newest(plants: &[Plant], limit: usize) -> Vec<Plant> {
    plants.iter().rev().take(limit).cloned().collect()
}

/// Counts shown on the dashboard overview.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlantStats {
    pub total: usize,
    pub mine: usize,
    pub needs_water: usize,
    pub difficult: usize,
}

pub fn plant_stats(plants: &[Plant], email: Option<&str>, today: Option<NaiveDate>) -> PlantStats {
    PlantStats {
        total: plants.len(),
        mine: email.map_or(0, |email| {
            plants.iter().filter(|p| p.details.user_email.eq_ignore_ascii_case(email)).count()
        }),
        needs_water: plants.iter().filter(|p| needs_water(p, today)).count(),
        difficult: plants.iter().filter(|p| p.details.care_level == CareLevel::Difficult).count(),
    }
}
