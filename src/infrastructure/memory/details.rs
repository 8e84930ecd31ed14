use async_trait::async_trait;

use super::MemoryTable;
use crate::domain::{
    Delivery, DeliveryRepository, DeliveryUpdate, Schedule, ScheduleRepository, ScheduleUpdate,
};
use crate::shared::error::AppError;

#[derive(Default)]
pub struct MemoryScheduleRepository {
    pub(super) table: MemoryTable<Schedule>,
}

#[async_trait]
impl ScheduleRepository for MemoryScheduleRepository {
    async fn create(&self, schedule: &Schedule) -> Result<String, AppError> {
        self.table
            .insert_unless(schedule, |s| s.store_id == schedule.store_id)
            .ok_or_else(|| AppError::BadRequest("Schedule already exists".to_string()))
    }

    async fn get(&self, store_id: &str) -> Result<Option<Schedule>, AppError> {
        Ok(self.table.find(|s| s.store_id == store_id))
    }

    async fn update(&self, store_id: &str, update: &ScheduleUpdate) -> Result<(), AppError> {
        if !self.table.patch(|s| s.store_id == store_id, update) {
            return Err(AppError::not_found("Schedule of store", store_id));
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        if !self.table.remove(id) {
            return Err(AppError::not_found("Schedule", id));
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryDeliveryRepository {
    pub(super) table: MemoryTable<Delivery>,
}

#[async_trait]
impl DeliveryRepository for MemoryDeliveryRepository {
    async fn create(&self, delivery: &Delivery) -> Result<String, AppError> {
        self.table
            .insert_unless(delivery, |d| d.store_id == delivery.store_id)
            .ok_or_else(|| AppError::BadRequest("Delivery already exists".to_string()))
    }

    async fn get(&self, store_id: &str) -> Result<Option<Delivery>, AppError> {
        Ok(self.table.find(|d| d.store_id == store_id))
    }

    async fn update(&self, store_id: &str, update: &DeliveryUpdate) -> Result<(), AppError> {
        if !self.table.patch(|d| d.store_id == store_id, update) {
            return Err(AppError::not_found("Delivery of store", store_id));
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        if !self.table.remove(id) {
            return Err(AppError::not_found("Delivery", id));
        }
        Ok(())
    }
}
