/// Name of the unique constraint an error violated, if any.
///
/// Repositories use it to turn duplicate keys into domain conflicts:
///
/// ```ignore
/// match db::unique_violation(&err).as_deref() {
///     Some("users_email_key") => UserError::EmailAlreadyExists(email),
///     _ => UserError::DatabaseError(err.to_string()),
/// }
/// ```
pub fn unique_violation(err: &sqlx::Error) -> Option<String> {
    let db_err = err.as_database_error()?;
    if !db_err.is_unique_violation() {
        return None;
    }
    Some(db_err.constraint().unwrap_or_default().to_string())
}
