use super::WarehouseService;
use crate::application::dto::{
    CityResponse, CountryResponse, CurrencyResponse, DeliveryResponse, ScheduleResponse,
    StoreDeliverySection, StoreRequest, StoreResponse, StoreScheduleSection, UpdateStoreRequest,
};
use crate::domain::{
    City, CityUpdate, Delivery, DeliveryUpdate, Period, Schedule, ScheduleUpdate, Store,
    StoreUpdate,
};
use crate::shared::blob;
use crate::shared::error::AppError;

impl WarehouseService {
    /// Every store, each assembled with its locality and details.
    pub async fn list_stores(&self) -> Result<Vec<StoreResponse>, AppError> {
        let stores = self.stores.select().await?;

        let mut responses = Vec::with_capacity(stores.len());
        for store in stores {
            responses.push(self.assemble(store).await?);
        }
        Ok(responses)
    }

    pub async fn add_store(&self, request: StoreRequest) -> Result<StoreResponse, AppError> {
        let mut store = Store::from(request);
        store.id = self.stores.create(&store).await?;

        tracing::info!(store_id = %store.id, merchant_id = %store.merchant_id, "Store created");
        Ok(store.into())
    }

    pub async fn get_store(&self, id: &str) -> Result<StoreResponse, AppError> {
        let store = self.stores.get(id).await?;
        self.assemble(store).await
    }

    /// Merge-patch a store and the detail records named in the request.
    ///
    /// A `city` section patches the store's city, or creates one and points
    /// the store at it. `schedule` and `delivery` sections update the store's
    /// row or create it. Writes are not transactional: on failure, earlier
    /// writes stay committed.
    pub async fn update_store(&self, id: &str, request: UpdateStoreRequest) -> Result<(), AppError> {
        let store = self.stores.get(id).await?;
        let mut patch = request.store_update();

        if let Some(section) = request.city {
            let city_id = patch.city_id.clone().unwrap_or(store.city_id);
            self.upsert_city(&city_id, CityUpdate::from(section), &mut patch)
                .await?;
        }

        self.stores.update(id, &patch).await?;

        if let Some(section) = request.schedule {
            self.upsert_schedule(id, section).await?;
        }
        if let Some(section) = request.delivery {
            self.upsert_delivery(id, section).await?;
        }

        Ok(())
    }

    pub async fn delete_store(&self, id: &str) -> Result<(), AppError> {
        self.stores.delete(id).await?;
        tracing::info!(store_id = %id, "Store deleted");
        Ok(())
    }

    /// Attach city, country, currency, schedule and delivery to a store.
    ///
    /// Missing detail records stay `None`; repository errors abort.
    async fn assemble(&self, store: Store) -> Result<StoreResponse, AppError> {
        let city = self.cities.get(&store.city_id).await?;

        let (country, currency) = match &city {
            Some(city) => {
                let country = match self.countries.get(&city.country_id).await {
                    Ok(country) => Some(country),
                    Err(e) if e.is_not_found() => None,
                    Err(e) => return Err(e),
                };
                let currency = self.currencies.get(&city.country_id).await?;
                (country, currency)
            }
            None => (None, None),
        };

        let schedule = self.schedules.get(&store.id).await?;
        let delivery = self.deliveries.get(&store.id).await?;

        let mut response = StoreResponse::from(store);
        response.city = city.map(CityResponse::from);
        response.country = country.map(CountryResponse::from);
        response.currency = currency.map(CurrencyResponse::from);
        response.schedule = schedule.map(ScheduleResponse::from);
        response.delivery = delivery.map(DeliveryResponse::from);
        Ok(response)
    }

    async fn upsert_city(
        &self,
        city_id: &str,
        update: CityUpdate,
        store_patch: &mut StoreUpdate,
    ) -> Result<(), AppError> {
        if self.cities.get(city_id).await?.is_some() {
            return self.cities.update(city_id, &update).await;
        }

        let country_id = update
            .country_id
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| AppError::Validation("city.country_id: cannot be blank".into()))?;

        let city = City::new(country_id, update.name, update.geocenter);
        let new_id = self.cities.create(&city).await?;

        tracing::info!(city_id = %new_id, previous_city_id = %city_id, "City created for store");
        store_patch.city_id = Some(new_id);
        Ok(())
    }

    async fn upsert_schedule(&self, store_id: &str, section: StoreScheduleSection) -> Result<(), AppError> {
        let periods = encode_periods(section.periods.as_deref())?;

        if self.schedules.get(store_id).await?.is_some() {
            let update = ScheduleUpdate {
                periods,
                is_active: section.is_active,
            };
            return self.schedules.update(store_id, &update).await;
        }

        let mut schedule = Schedule::new(store_id, periods.unwrap_or_else(empty_list));
        if let Some(is_active) = section.is_active {
            schedule.is_active = is_active;
        }
        let schedule_id = self.schedules.create(&schedule).await?;

        tracing::info!(store_id = %store_id, schedule_id = %schedule_id, "Schedule created");
        Ok(())
    }

    async fn upsert_delivery(&self, store_id: &str, section: StoreDeliverySection) -> Result<(), AppError> {
        let periods = encode_periods(section.periods.as_deref())?;
        let areas = section.areas.as_deref().map(blob::encode).transpose()?;

        if self.deliveries.get(store_id).await?.is_some() {
            let update = DeliveryUpdate {
                periods,
                areas,
                is_active: section.is_active,
            };
            return self.deliveries.update(store_id, &update).await;
        }

        let mut delivery = Delivery::new(
            store_id,
            periods.unwrap_or_else(empty_list),
            areas.unwrap_or_else(empty_list),
        );
        if let Some(is_active) = section.is_active {
            delivery.is_active = is_active;
        }
        let delivery_id = self.deliveries.create(&delivery).await?;

        tracing::info!(store_id = %store_id, delivery_id = %delivery_id, "Delivery created");
        Ok(())
    }
}

fn empty_list() -> Vec<u8> {
    b"[]".to_vec()
}

fn encode_periods(periods: Option<&[Period]>) -> Result<Option<Vec<u8>>, AppError> {
    periods.map(blob::encode).transpose()
}
