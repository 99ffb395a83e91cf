//! Translation of pool and Diesel failures into [`UserPersistenceError`].

use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::UserPersistenceError;

use super::pool::PoolError;

/// Constraint guarding `users.user_name`.
pub(crate) const USER_NAME_CONSTRAINT: &str = "users_user_name_key";
/// Constraint guarding `users.email`.
pub(crate) const EMAIL_CONSTRAINT: &str = "users_email_key";

/// Pool failures mean the store is unreachable.
pub(crate) fn map_pool_error(error: PoolError) -> UserPersistenceError {
    UserPersistenceError::connection(error.into_message())
}

/// Map Diesel errors, resolving unique violations to the colliding field.
pub(crate) fn map_diesel_error(error: DieselError) -> UserPersistenceError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(
                ?kind,
                message = info.message(),
                constraint = info.constraint_name(),
                "diesel operation failed"
            );
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => UserPersistenceError::query("record not found"),
        DieselError::QueryBuilderError(_) => UserPersistenceError::query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
            map_unique_violation(info.as_ref())
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            UserPersistenceError::connection("database connection error")
        }
        _ => UserPersistenceError::query("database error"),
    }
}

fn map_unique_violation(info: &dyn DatabaseErrorInformation) -> UserPersistenceError {
    match info.constraint_name() {
        Some(USER_NAME_CONSTRAINT) => UserPersistenceError::user_name_taken(),
        Some(EMAIL_CONSTRAINT) => UserPersistenceError::email_taken(),
        _ => UserPersistenceError::query("unexpected unique constraint violation"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    /// Database error carrying a constraint name, as PostgreSQL reports it.
    struct ConstraintViolation(Option<&'static str>);

    impl DatabaseErrorInformation for ConstraintViolation {
        fn message(&self) -> &str {
            "duplicate key value violates unique constraint"
        }

        fn details(&self) -> Option<&str> {
            None
        }

        fn hint(&self) -> Option<&str> {
            None
        }

        fn table_name(&self) -> Option<&str> {
            Some("users")
        }

        fn column_name(&self) -> Option<&str> {
            None
        }

        fn constraint_name(&self) -> Option<&str> {
            self.0
        }

        fn statement_position(&self) -> Option<i32> {
            None
        }
    }

    fn unique_violation(constraint: Option<&'static str>) -> DieselError {
        DieselError::DatabaseError(
            DatabaseErrorKind::UniqueViolation,
            Box::new(ConstraintViolation(constraint)),
        )
    }

    #[rstest]
    #[case(Some(USER_NAME_CONSTRAINT), UserPersistenceError::user_name_taken())]
    #[case(Some(EMAIL_CONSTRAINT), UserPersistenceError::email_taken())]
    fn unique_violation_names_the_colliding_field(
        #[case] constraint: Option<&'static str>,
        #[case] expected: UserPersistenceError,
    ) {
        assert_eq!(map_diesel_error(unique_violation(constraint)), expected);
    }

    #[rstest]
    #[case(Some("users_pkey"))]
    #[case(None)]
    fn other_unique_violations_are_query_errors(#[case] constraint: Option<&'static str>) {
        let err = map_diesel_error(unique_violation(constraint));
        assert!(matches!(err, UserPersistenceError::Query { .. }), "{err:?}");
    }

    #[rstest]
    fn closed_connection_maps_to_connection_error() {
        let err = map_diesel_error(DieselError::DatabaseError(
            DatabaseErrorKind::ClosedConnection,
            Box::new("server closed the connection".to_owned()),
        ));
        assert!(matches!(err, UserPersistenceError::Connection { .. }));
    }

    #[rstest]
    fn not_found_maps_to_query_error() {
        let err = map_diesel_error(DieselError::NotFound);
        assert_eq!(err, UserPersistenceError::query("record not found"));
    }

    #[rstest]
    fn pool_errors_map_to_connection_errors() {
        let err = map_pool_error(PoolError::checkout("connection refused"));
        assert_eq!(err, UserPersistenceError::connection("connection refused"));
    }
}
