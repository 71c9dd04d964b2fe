use crate::db::postgres_service::PostgresService;
use crate::types::{error::AppError, user::DBUserRegister};
use crate::utils::token::{encrypt, new_id, new_token, verify};
use chrono::Utc;
use entity::user::{ActiveModel as UserActive, Entity as User, Model as UserModel};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, ModelTrait, PaginatorTrait, QueryFilter,
    Set,
};
use uuid::Uuid;

impl PostgresService {
    pub async fn user_exists_by_username(&self, username: &str) -> Result<bool, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Username.eq(username))
            .count(&self.db)
            .await?
            > 0)
    }

    pub async fn get_user_by_id(&self, id: &Uuid) -> Result<UserModel, AppError> {
        Ok(User::find_by_id(*id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }

    pub async fn get_user_by_username(&self, username: &str) -> Result<Option<UserModel>, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(&self.db)
            .await?)
    }

    /// Signup. The unique index on username backs the existence check.
    pub async fn register_user(&self, payload: DBUserRegister) -> Result<Uuid, AppError> {
        if self.user_exists_by_username(&payload.username).await? {
            return Err(AppError::DuplicateLogin);
        }
        let uid = new_id();
        let now = Utc::now();

        User::insert(UserActive {
            id: Set(uid),
            username: Set(payload.username),
            password_hash: Set(payload.password_hash),
            token_hash: Set(None),
            is_staff: Set(false),
            restaurant_id: Set(None),
            created_at: Set(now),
            last_login: Set(None),
        })
        .exec(&self.db)
        .await?;

        Ok(uid)
    }

    /// Login: verify the password, rotate the stored API secret, return it.
    /// Unknown username and wrong password both come back InvalidCredentials.
    pub async fn authenticate_user(
        &self,
        username: &str,
        password: &str,
    ) -> Result<(Uuid, String), AppError> {
        let user = self
            .get_user_by_username(username)
            .await?
            .ok_or(AppError::InvalidCredentials)?;
        if !verify(password, &user.password_hash).unwrap_or(false) {
            return Err(AppError::InvalidCredentials);
        }
        let uid = user.id;
        let secret = self.rotate_token(user).await?;
        Ok((uid, secret))
    }

    /// Issue a fresh API secret, invalidating the previous one.
    pub async fn regenerate_user_token(&self, user_id: &Uuid) -> Result<String, AppError> {
        let user = self.get_user_by_id(user_id).await?;
        self.rotate_token(user).await
    }

    async fn rotate_token(&self, user: UserModel) -> Result<String, AppError> {
        let secret = new_token();
        let encrypted =
            encrypt(&secret).map_err(|e| AppError::Internal(format!("hashing failed: {e}")))?;
        let mut am: UserActive = user.into();
        am.token_hash = Set(Some(encrypted));
        am.last_login = Set(Some(Utc::now()));
        am.update(&self.db).await?;
        Ok(secret)
    }

    /// Ops-level escalation. No route exposes this; staff accounts are made
    /// by an operator, not by the API.
    pub async fn promote_to_staff(&self, user_id: &Uuid) -> Result<(), AppError> {
        let mut am: UserActive = self.get_user_by_id(user_id).await?.into();
        am.is_staff = Set(true);
        am.update(&self.db).await?;
        Ok(())
    }

    pub async fn delete_user(&self, user_id: &Uuid) -> Result<(), AppError> {
        let user = self.get_user_by_id(user_id).await?;
        user.delete(&self.db).await?;
        Ok(())
    }
}
