use std::{env, io, sync::Arc};

use actix_cors::Cors;
use actix_web::{get, post, web, App, HttpResponse, HttpServer, Responder};
use dotenv::dotenv;
use log::{error, info, warn};
use nutriplan_db::{
    connection::Connection,
    profile::{ProfileRepository, ProfileRepositoryImpl},
};
use nutriplan_model::{profile::ProfileRecord, validation::check_record};
use serde::Serialize;

const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8080";

#[derive(Serialize)]
struct Inserted {
    id: String,
}

#[post("/profiles")]
async fn insert_profile(
    repository: web::Data<dyn ProfileRepository>,
    record: web::Json<ProfileRecord>,
) -> impl Responder {
    let record = record.into_inner();
    if let Err(errors) = check_record(&record) {
        warn!("Rejecting profile for user {}: {}", record.user_id, errors);
        return HttpResponse::BadRequest().body(errors.to_string());
    }

    info!("Storing profile for user {}", record.user_id);
    match repository.store_profile(record).await {
        Ok(id) => HttpResponse::Created().json(Inserted { id: id.to_string() }),
        Err(e) => {
            error!("Failed to store profile: {}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/profiles")]
async fn list_profiles(repository: web::Data<dyn ProfileRepository>) -> impl Responder {
    match repository.fetch_profiles().await {
        Ok(profiles) => HttpResponse::Ok().json(profiles),
        Err(e) => {
            error!("Failed to fetch profiles: {}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}

fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(insert_profile).service(list_profiles);
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    log4rs::init_file("log4rs.yml", Default::default()).map_err(io::Error::other)?;
    dotenv().ok();

    info!("Connecting to database");
    let conn = Connection::establish()
        .await
        .map_err(|e| io::Error::other(e.to_string()))?;
    let repository: Arc<dyn ProfileRepository> = Arc::new(ProfileRepositoryImpl::new(conn));
    let repository = web::Data::from(repository);

    let bind_address =
        env::var("NUTRIPLAN_BIND").unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_owned());
    info!("Listening on {}", bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .app_data(repository.clone())
            .configure(configure)
    })
    .bind(bind_address)?
    .run()
    .await
}
