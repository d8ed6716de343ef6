use std::fmt::{Debug, Display};
use tokio::task::JoinError;

use docker_home::{
    configuration::get_configuration,
    startup::Application,
    telemetry::{get_subscriber, init_subscriber},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging()?;

    let configuration = get_configuration()?;
    let application = Application::build(configuration).await?;
    let application_task = tokio::spawn(application.run_until_stopped());

    report_exit("API", application_task.await);

    Ok(())
}

#[cfg(feature = "console")]
fn init_logging() -> anyhow::Result<()> {
    if std::env::var("TOKIO_CONSOLE").is_ok() {
        console_subscriber::init();
        return Ok(());
    }
    init_subscriber(get_subscriber("docker_home".into(), "info".into(), std::io::stdout))
}

#[cfg(not(feature = "console"))]
fn init_logging() -> anyhow::Result<()> {
    init_subscriber(get_subscriber("docker_home".into(), "info".into(), std::io::stdout))
}

// log how the server task ended
fn report_exit(task_name: &str, outcome: Result<Result<(), impl Debug + Display>, JoinError>) {
    match outcome {
        Ok(Ok(())) => {
            tracing::info!("{} has exited", task_name)
        }
        Ok(Err(e)) => {
            tracing::error!(
                error.cause_chain = ?e,
                error.message = %e,
                "{} failed",
                task_name
            )
        }
        Err(e) => {
            tracing::error!(
                error.cause_chain = ?e,
                error.message = %e,
                "{} task failed to complete",
                task_name
            )
        }
    }
}
