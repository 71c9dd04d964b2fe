use crate::types::error::AppError;

/// Caller privilege, ordered weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Role {
    Anonymous,
    Authenticated,
    Staff,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    RegisterUser,
    ObtainToken,
    RefreshToken,
    DeleteUser,
    ClaimRestaurant,
    ManageOwnRestaurant,
    ListAllRestaurants,
    ManageClients,
    ManageReservations,
}

impl Operation {
    fn required_role(self) -> Role {
        use Operation::*;
        match self {
            RegisterUser | ObtainToken => Role::Anonymous,
            RefreshToken | ClaimRestaurant | ManageOwnRestaurant | ManageClients
            | ManageReservations => Role::Authenticated,
            DeleteUser | ListAllRestaurants => Role::Staff,
        }
    }
}

/// The one allow/deny decision, a pure function of (role, operation).
/// Anonymous callers short of the bar get Unauthorized, authenticated callers
/// short of it get Forbidden. The two are never conflated.
pub fn authorize(role: Role, operation: Operation) -> Result<(), AppError> {
    if role >= operation.required_role() {
        return Ok(());
    }
    match role {
        Role::Anonymous => Err(AppError::Unauthorized),
        _ => Err(AppError::Forbidden),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_operations_allow_anyone() {
        for op in [Operation::RegisterUser, Operation::ObtainToken] {
            assert!(authorize(Role::Anonymous, op).is_ok());
            assert!(authorize(Role::Authenticated, op).is_ok());
            assert!(authorize(Role::Staff, op).is_ok());
        }
    }

    #[test]
    fn authenticated_operations_reject_anonymous() {
        for op in [
            Operation::ClaimRestaurant,
            Operation::ManageOwnRestaurant,
            Operation::ManageClients,
            Operation::ManageReservations,
            Operation::RefreshToken,
        ] {
            assert!(matches!(
                authorize(Role::Anonymous, op),
                Err(AppError::Unauthorized)
            ));
            assert!(authorize(Role::Authenticated, op).is_ok());
        }
    }

    #[test]
    fn staff_operations_forbid_plain_users() {
        for op in [Operation::DeleteUser, Operation::ListAllRestaurants] {
            assert!(matches!(
                authorize(Role::Anonymous, op),
                Err(AppError::Unauthorized)
            ));
            assert!(matches!(
                authorize(Role::Authenticated, op),
                Err(AppError::Forbidden)
            ));
            assert!(authorize(Role::Staff, op).is_ok());
        }
    }
}
