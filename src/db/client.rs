use crate::db::{postgres_service::PostgresService, scoped};
use crate::types::client::{DBClientCreate, RClientUpdate};
use crate::types::error::AppError;
use crate::utils::token::new_id;
use chrono::Utc;
use entity::client::{ActiveModel as ClientActive, Entity as Client, Model as ClientModel};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set, TransactionTrait};
use uuid::Uuid;

impl PostgresService {
    /// The stored row always carries the given restaurant id; callers resolve
    /// it from their own identity, never from request input.
    pub async fn create_client(
        &self,
        restaurant_id: Uuid,
        payload: DBClientCreate,
    ) -> Result<ClientModel, AppError> {
        let am = ClientActive {
            id: Set(new_id()),
            restaurant_id: Set(restaurant_id),
            name: Set(payload.name),
            phone_number: Set(payload.phone_number),
            email: Set(payload.email),
            created_at: Set(Utc::now()),
        };
        Ok(am.insert(&self.db).await?)
    }

    pub async fn list_clients(&self, restaurant_id: Uuid) -> Result<Vec<ClientModel>, AppError> {
        Ok(scoped::<Client>(restaurant_id).all(&self.db).await?)
    }

    pub async fn get_client(&self, restaurant_id: Uuid, id: Uuid) -> Result<ClientModel, AppError> {
        scoped::<Client>(restaurant_id)
            .filter(entity::client::Column::Id.eq(id))
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)
    }

    pub async fn update_client(
        &self,
        restaurant_id: Uuid,
        id: Uuid,
        update: RClientUpdate,
    ) -> Result<ClientModel, AppError> {
        let mut am: ClientActive = self.get_client(restaurant_id, id).await?.into();
        if let Some(name) = update.name {
            am.name = Set(name);
        }
        if let Some(phone_number) = update.phone_number {
            am.phone_number = Set(phone_number);
        }
        if let Some(email) = update.email {
            am.email = Set(email);
        }
        Ok(am.update(&self.db).await?)
    }

    /// Deleting a client takes its reservations with it.
    pub async fn delete_client(&self, restaurant_id: Uuid, id: Uuid) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        let client = scoped::<Client>(restaurant_id)
            .filter(entity::client::Column::Id.eq(id))
            .one(&txn)
            .await?
            .ok_or(AppError::NotFound)?;

        entity::reservation::Entity::delete_many()
            .filter(entity::reservation::Column::ClientId.eq(client.id))
            .exec(&txn)
            .await?;

        let am: ClientActive = client.into();
        am.delete(&txn).await?;

        txn.commit().await?;
        Ok(())
    }
}
