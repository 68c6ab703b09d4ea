use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use log::info;

use mobilis_api::routes;
use mobilis_db::{connection::Connection, metrics::MetricsRepositoryImpl};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    log4rs::init_file("log4rs.yml", Default::default()).unwrap();

    info!("Connecting to database");
    let conn = Connection::establish().await.unwrap();
    let metrics_repository = MetricsRepositoryImpl::new(conn.clone());

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(metrics_repository.clone()))
            .wrap(Cors::permissive())
            .configure(routes::configure)
    })
    .bind(("127.0.0.1", 8080))?
    .run()
    .await
}
