use actix_web::{App, HttpServer, dev::Server, web, web::Data};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

use crate::configuration::Settings;
use crate::routes::{HomePage, health_check, home, not_found};

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    #[allow(clippy::missing_errors_doc)]
    pub async fn build(configuration: Settings) -> Result<Self, anyhow::Error> {
        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port,
        );

        // bind ourselves instead of letting actix do it, so tests can pass port 0
        let listener = TcpListener::bind(&address)?;
        // port 0 asks the OS for a free one, so read back what we got
        let port = listener.local_addr()?.port();
        tracing::info!(%address, port, "Listening");

        // the title is the only configurable part of the page, escape it up front
        let page = HomePage::render(&configuration.page.title);
        let server = run(listener, page)?;

        Ok(Self { port, server })
    }

    #[must_use]
    pub const fn port(&self) -> u16 {
        self.port
    }

    #[allow(clippy::missing_errors_doc)]
    // only return when the application is stopped
    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

fn run(listener: TcpListener, page: HomePage) -> Result<Server, anyhow::Error> {
    // rendered once, every worker shares the same reference-counted body
    let page = Data::new(page);
    let server = HttpServer::new(move || {
        App::new()
            // one span per request, carrying method, path and status
            .wrap(TracingLogger::default())
            // resources rather than bare routes: a known path hit with the wrong
            // method answers 405 from the resource instead of reaching the 404 below
            .service(
                web::resource("/")
                    .route(web::get().to(home))
                    .route(web::head().to(home)),
            )
            .service(
                web::resource("/health_check")
                    .route(web::get().to(health_check))
                    .route(web::head().to(health_check)),
            )
            // anything that matched no path at all
            .default_service(web::to(not_found))
            .app_data(page.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
