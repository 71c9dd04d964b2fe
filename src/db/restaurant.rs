use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::restaurant::{RRestaurantCreate, RRestaurantUpdate};
use crate::utils::token::new_id;
use chrono::Utc;
use entity::restaurant::{
    ActiveModel as RestaurantActive, Entity as Restaurant, Model as RestaurantModel,
};
use entity::user::{Entity as User, Model as UserModel};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};
use uuid::Uuid;

impl PostgresService {
    /// Claim: create the restaurant and link it to the caller in one
    /// transaction. The link update is conditional on the user still owning
    /// nothing, so two concurrent claims cannot both succeed.
    pub async fn claim_restaurant(
        &self,
        owner: Uuid,
        profile: RRestaurantCreate,
    ) -> Result<Uuid, AppError> {
        let txn = self.db.begin().await?;

        let user = User::find_by_id(owner)
            .one(&txn)
            .await?
            .ok_or(AppError::NotFound)?;
        if user.restaurant_id.is_some() {
            txn.rollback().await?;
            return Err(AppError::AlreadyOwnsRestaurant);
        }

        let rid = new_id();
        let now = Utc::now();
        Restaurant::insert(RestaurantActive {
            id: Set(rid),
            name: Set(profile.name),
            phone_number: Set(profile.phone_number),
            email: Set(profile.email),
            created_at: Set(now),
        })
        .exec(&txn)
        .await?;

        // check-and-set: only links if restaurant_id is still null
        let linked = User::update_many()
            .col_expr(entity::user::Column::RestaurantId, Expr::value(rid))
            .filter(entity::user::Column::Id.eq(owner))
            .filter(entity::user::Column::RestaurantId.is_null())
            .exec(&txn)
            .await?;
        if linked.rows_affected == 0 {
            txn.rollback().await?;
            return Err(AppError::AlreadyOwnsRestaurant);
        }

        txn.commit().await?;
        Ok(rid)
    }

    pub async fn get_own_restaurant(&self, owner: Uuid) -> Result<RestaurantModel, AppError> {
        let user = self.get_user_by_id(&owner).await?;
        self.restaurant_of(&user).await
    }

    pub async fn update_own_restaurant(
        &self,
        owner: Uuid,
        update: RRestaurantUpdate,
    ) -> Result<RestaurantModel, AppError> {
        let user = self.get_user_by_id(&owner).await?;
        let mut am: RestaurantActive = self.restaurant_of(&user).await?.into();
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

    /// Delete the caller's restaurant: sever the owner link, drop dependent
    /// reservations and clients, then the restaurant row, all in one
    /// transaction so nothing dangles.
    pub async fn delete_own_restaurant(&self, owner: Uuid) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        let user = User::find_by_id(owner)
            .one(&txn)
            .await?
            .ok_or(AppError::NotFound)?;
        let rid = user.restaurant_id.ok_or(AppError::NotFound)?;

        User::update_many()
            .col_expr(
                entity::user::Column::RestaurantId,
                Expr::value(None::<Uuid>),
            )
            .filter(entity::user::Column::Id.eq(owner))
            .exec(&txn)
            .await?;

        entity::reservation::Entity::delete_many()
            .filter(entity::reservation::Column::RestaurantId.eq(rid))
            .exec(&txn)
            .await?;
        entity::client::Entity::delete_many()
            .filter(entity::client::Column::RestaurantId.eq(rid))
            .exec(&txn)
            .await?;

        Restaurant::delete_by_id(rid).exec(&txn).await?;

        txn.commit().await?;
        Ok(())
    }

    /// Staff only (enforced by the gate at the route).
    pub async fn list_restaurants(&self) -> Result<Vec<RestaurantModel>, AppError> {
        Ok(Restaurant::find().all(&self.db).await?)
    }

    async fn restaurant_of(&self, user: &UserModel) -> Result<RestaurantModel, AppError> {
        let rid = user.restaurant_id.ok_or(AppError::NotFound)?;
        Ok(Restaurant::find_by_id(rid)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?)
    }
}
