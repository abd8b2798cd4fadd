use std::collections::{hash_map, HashMap};

use parking_lot::RwLock;
use tracing::{debug, trace};

use crate::domain::booking::{Booking, BookingId, BookingRepository};
use crate::domain::{DataAccessError, Entity};

/// メモリ上の予約リポジトリ
///
/// 単一の `RwLock` でマップを保護する。ロックは各操作の間だけ保持される。
#[derive(Debug, Default)]
pub struct InMemoryBookingRepository {
    bookings: RwLock<HashMap<BookingId, Booking>>,
}

impl InMemoryBookingRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BookingRepository for InMemoryBookingRepository {
    fn find_by_id(&self, id: BookingId) -> Option<Booking> {
        self.bookings.read().get(&id).cloned()
    }

    fn find_all(&self) -> Vec<Booking> {
        self.bookings.read().values().cloned().collect()
    }

    fn add(&self, entity: Booking) -> Result<(), DataAccessError> {
        let id = entity.id();
        match self.bookings.write().entry(id) {
            hash_map::Entry::Occupied(_) => {
                debug!("{} {} は既に存在します", Booking::ENTITY_NAME, id);
                Err(DataAccessError::duplicate_key::<Booking>(id))
            }
            hash_map::Entry::Vacant(slot) => {
                slot.insert(entity);
                trace!("{} {} を追加しました", Booking::ENTITY_NAME, id);
                Ok(())
            }
        }
    }

    fn update(&self, entity: Booking) -> Result<(), DataAccessError> {
        let id = entity.id();
        match self.bookings.write().get_mut(&id) {
            Some(stored) => {
                *stored = entity;
                trace!("{} {} を置き換えました", Booking::ENTITY_NAME, id);
                Ok(())
            }
            None => {
                debug!("{} {} が見つかりません", Booking::ENTITY_NAME, id);
                Err(DataAccessError::not_found::<Booking>(id))
            }
        }
    }

    fn delete(&self, id: BookingId) {
        if self.bookings.write().remove(&id).is_some() {
            trace!("{} {} を削除しました", Booking::ENTITY_NAME, id);
        }
    }
}
