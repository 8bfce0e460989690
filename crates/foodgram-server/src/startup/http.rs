//! HTTP server construction

use std::sync::Arc;

use actix_web::{
    App, HttpServer,
    dev::Server,
    middleware::{Logger, NormalizePath},
    web,
};

use crate::{api::route, middleware::Authentication, model::AppState};

/// Creates and binds the main HTTP server.
pub fn main_server(
    app_state: Arc<AppState>,
    context_path: String,
    address: String,
    port: u16,
) -> Result<Server, std::io::Error> {
    Ok(HttpServer::new(move || {
        App::new()
            .wrap(Authentication)
            .wrap(NormalizePath::trim())
            .wrap(Logger::default())
            .app_data(web::Data::from(app_state.clone()))
            .service(route::routes(&context_path))
    })
    .bind((address, port))?
    .run())
}
