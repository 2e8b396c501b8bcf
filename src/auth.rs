use crate::errors::AppError;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;

pub fn resolve_credential_path() -> PathBuf {
    env::var("JOURNAL_CREDENTIAL_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data/credential.txt"))
}

pub async fn load_credential(path: &Path) -> Result<Option<String>, AppError> {
    match fs::read_to_string(path).await {
        Ok(saved) => Ok(Some(saved)),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err.into()),
    }
}

// First login stores the password and returns true; later logins must
// match the stored value.
pub async fn login(path: &Path, password: &str) -> Result<bool, AppError> {
    if password.trim().is_empty() {
        return Err(AppError::validation("password must not be empty"));
    }

    match load_credential(path).await? {
        Some(saved) if saved == password => Ok(false),
        Some(_) => Err(AppError::IncorrectPassword),
        None => {
            fs::write(path, password).await?;
            Ok(true)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir().join(format!(
            "credential_{name}_{}_{nanos}.txt",
            std::process::id()
        ))
    }

    #[tokio::test]
    async fn first_login_creates_the_credential() {
        let path = temp_path("create");

        assert!(login(&path, "hunter2").await.unwrap());
        assert_eq!(load_credential(&path).await.unwrap().as_deref(), Some("hunter2"));

        assert!(!login(&path, "hunter2").await.unwrap());
        let err = login(&path, "letmein").await.unwrap_err();
        assert!(matches!(err, AppError::IncorrectPassword));

        let _ = std::fs::remove_file(path);
    }

    #[tokio::test]
    async fn blank_password_is_rejected() {
        let path = temp_path("blank");
        let err = login(&path, "   ").await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(load_credential(&path).await.unwrap().is_none());
    }
}
