use crate::db::{postgres_service::PostgresService, scoped};
use crate::types::error::AppError;
use crate::types::reservation::{DBReservationCreate, RReservationUpdate};
use crate::utils::token::new_id;
use chrono::Utc;
use entity::client::Entity as Client;
use entity::reservation::{
    ActiveModel as ReservationActive, Entity as Reservation, Model as ReservationModel,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, PaginatorTrait, QueryFilter, Set,
    TransactionTrait,
};
use uuid::Uuid;

impl PostgresService {
    /// Create, with the referenced client required to live under the same
    /// restaurant. Check and insert share a transaction so no row is written
    /// when the reference is bad.
    pub async fn create_reservation(
        &self,
        restaurant_id: Uuid,
        payload: DBReservationCreate,
    ) -> Result<ReservationModel, AppError> {
        let txn = self.db.begin().await?;

        Self::assert_client_reference(&txn, restaurant_id, payload.client_id).await?;

        let am = ReservationActive {
            id: Set(new_id()),
            restaurant_id: Set(restaurant_id),
            client_id: Set(payload.client_id),
            reservation_date: Set(payload.reservation_date),
            guest_count: Set(payload.guest_count),
            status: Set(payload.status),
            notes: Set(payload.notes),
            created_at: Set(Utc::now()),
        };
        let model = am.insert(&txn).await?;

        txn.commit().await?;
        Ok(model)
    }

    pub async fn list_reservations(
        &self,
        restaurant_id: Uuid,
    ) -> Result<Vec<ReservationModel>, AppError> {
        Ok(scoped::<Reservation>(restaurant_id).all(&self.db).await?)
    }

    pub async fn get_reservation(
        &self,
        restaurant_id: Uuid,
        id: Uuid,
    ) -> Result<ReservationModel, AppError> {
        scoped::<Reservation>(restaurant_id)
            .filter(entity::reservation::Column::Id.eq(id))
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)
    }

    /// Partial merge. A changed client_id goes through the same reference
    /// check as creation. Status moves freely between the four values.
    pub async fn update_reservation(
        &self,
        restaurant_id: Uuid,
        id: Uuid,
        update: RReservationUpdate,
    ) -> Result<ReservationModel, AppError> {
        let txn = self.db.begin().await?;

        let current = scoped::<Reservation>(restaurant_id)
            .filter(entity::reservation::Column::Id.eq(id))
            .one(&txn)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut am: ReservationActive = current.into();
        if let Some(client_id) = update.client_id {
            Self::assert_client_reference(&txn, restaurant_id, client_id).await?;
            am.client_id = Set(client_id);
        }
        if let Some(reservation_date) = update.reservation_date {
            am.reservation_date = Set(reservation_date);
        }
        if let Some(guest_count) = update.guest_count {
            am.guest_count = Set(guest_count);
        }
        if let Some(status) = update.status {
            am.status = Set(status);
        }
        if let Some(notes) = update.notes {
            am.notes = Set(notes);
        }
        let model = am.update(&txn).await?;

        txn.commit().await?;
        Ok(model)
    }

    pub async fn delete_reservation(&self, restaurant_id: Uuid, id: Uuid) -> Result<(), AppError> {
        let reservation = self.get_reservation(restaurant_id, id).await?;
        let am: ReservationActive = reservation.into();
        am.delete(&self.db).await?;
        Ok(())
    }

    /// InvalidReference when the client is missing or under another
    /// restaurant; the two cases are deliberately indistinguishable.
    async fn assert_client_reference(
        conn: &impl ConnectionTrait,
        restaurant_id: Uuid,
        client_id: Uuid,
    ) -> Result<(), AppError> {
        let found = scoped::<Client>(restaurant_id)
            .filter(entity::client::Column::Id.eq(client_id))
            .count(conn)
            .await?;
        if found == 0 {
            return Err(AppError::InvalidReference);
        }
        Ok(())
    }
}
