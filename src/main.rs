use dotenvy::dotenv;
use staffdesk::model::employee::Employee;
use staffdesk::{ApiClient, Config};
use tracing::info;
use tracing_appender::rolling;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = Config::from_env();

    // Rolling daily log
    let file_appender = rolling::daily("logs", "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_target(false)
        .init();

    info!("Mock backend starting...");

    let password = config.shared_password.clone();
    let mut client = ApiClient::new(config);

    // Scripted session so a fresh checkout shows the whole path working:
    // login, a filtered read, the dashboard, logout.
    let login = client.login("sunita.kapoor@company.com", &password).await;
    anyhow::ensure!(login.success, "demo login failed");
    let principal = client
        .principal()
        .ok_or_else(|| anyhow::anyhow!("no session after login"))?;
    info!(id = %principal.id, role = principal.role.as_str(), "signed in");

    let employees = client
        .get("/employees", &[("department", "Engineering"), ("status", "Active")])
        .await;
    let listed: Vec<Employee> = employees.decode().unwrap_or_default();
    info!(
        total = employees.total.unwrap_or_default(),
        listed = listed.len(),
        "active engineering roster fetched"
    );

    let dashboard = client.get("/reports/dashboard", &[]).await;
    if let Some(data) = dashboard.data {
        info!(%data, "dashboard snapshot");
    }

    client.logout().await;
    info!("Session closed, shutting down");

    Ok(())
}
