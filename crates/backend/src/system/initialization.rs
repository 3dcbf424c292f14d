use anyhow::Result;
use contracts::system::users::CreateUserDto;

use crate::shared::config::AdminConfig;

/// Ensure the bootstrap admin user exists (created when the table is empty)
pub async fn ensure_admin_user_exists(admin: &AdminConfig) -> Result<()> {
    use crate::system::users::{repository, service};

    let count = repository::count_users().await?;

    if count == 0 {
        tracing::info!("No users found. Creating bootstrap admin user...");

        let admin_dto = CreateUserDto {
            username: admin.username.clone(),
            password: admin.password.clone(),
            email: None,
            full_name: Some("Administrateur".to_string()),
            is_admin: true,
        };

        let admin_id = service::create(admin_dto).await?;

        tracing::warn!("═══════════════════════════════════════════════");
        tracing::warn!("  Bootstrap admin user created!");
        tracing::warn!("  Username: {}", admin.username);
        tracing::warn!("  User ID: {}", admin_id);
        tracing::warn!("  Change the password via config before deploying.");
        tracing::warn!("═══════════════════════════════════════════════");
    }

    Ok(())
}
