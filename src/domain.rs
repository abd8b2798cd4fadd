pub mod booking;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::{
    fmt::{Debug, Display},
    hash::Hash,
    ops::Deref,
    str::FromStr,
};
use thiserror::Error;

pub trait Id:
    Copy
    + Eq
    + Hash
    + Deref<Target = Self::Inner>
    + From<Self::Inner>
    + Display
    + Debug
    + Serialize
    + for<'de> Deserialize<'de>
{
    type Inner: FromStr;
}

pub trait Entity: Debug + Clone {
    type Id: Id;

    const ENTITY_NAME: &'static str;

    fn id(&self) -> Self::Id;
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataAccessError {
    #[error("Duplicate key: {entity} {id} already exists")]
    DuplicateKey { entity: &'static str, id: String },
    #[error("Not found: {entity} {id}")]
    NotFound { entity: &'static str, id: String },
}

impl DataAccessError {
    pub fn duplicate_key<E: Entity>(id: E::Id) -> Self {
        Self::DuplicateKey {
            entity: E::ENTITY_NAME,
            id: id.to_string(),
        }
    }

    pub fn not_found<E: Entity>(id: E::Id) -> Self {
        Self::NotFound {
            entity: E::ENTITY_NAME,
            id: id.to_string(),
        }
    }
}

/// 検証時点の「今日」を与える
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// ローカルタイムゾーンの暦日
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// 固定された日付を返す
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
