use tracing::{Subscriber, subscriber::set_global_default};
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_log::LogTracer;
use tracing_subscriber::{EnvFilter, Registry, fmt::MakeWriter, layer::SubscriberExt};

// compose the layers into one subscriber
// Send + Sync so it can be handed to init_subscriber
pub fn get_subscriber<Sink>(
    name: String,
    env_filter: String,
    sink: Sink,
) -> impl Subscriber + Send + Sync
// sink must produce a writer for any borrow lifetime and be shareable across workers
where
    Sink: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    // RUST_LOG wins over the default level
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(env_filter));
    // bunyan turns each event into one JSON line, tagged with `name`
    let formatting_layer = BunyanFormattingLayer::new(name, sink);

    // layers run in order, starting from an empty registry
    Registry::default()
        // decides which events get through at all
        .with(env_filter)
        // keeps span fields around so they end up on every nested event
        .with(JsonStorageLayer)
        // writes the surviving events to the sink
        .with(formatting_layer)
}

/// Installs `subscriber` as the global default and routes `log` records into it.
///
/// # Errors
/// Fails if a logger or subscriber has already been installed.
pub fn init_subscriber(subscriber: impl Subscriber + Send + Sync) -> anyhow::Result<()> {
    // actix and friends still log through `log`, forward those records to tracing
    LogTracer::init()?;
    set_global_default(subscriber)?;
    Ok(())
}
