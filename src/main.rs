use rocket::fairing::AdHoc;
use rocket::{catchers, launch, routes, Build, Rocket};

mod config;
mod cors;
mod database;
mod leaderboard;
mod request_error;
mod requests;
mod validation;

use config::Config;
use database::Storage;

#[launch]
fn rocket() -> _ {
    build(Config::from_env())
}

/// Builds the server around the score store at `config.database_path`.
/// The store is initialized on ignite; launch is aborted if that fails.
pub fn build(config: Config) -> Rocket<Build> {
    let storage = Storage::new(&config.database_path);

    rocket::build()
        .attach(AdHoc::try_on_ignite("Score storage", |rocket| async move {
            match storage.init().await {
                Ok(()) => {
                    log::info!("score storage ready at {}", storage.path().display());
                    Ok(rocket.manage(storage))
                }
                Err(err) => {
                    log::error!(
                        "failed to initialize score storage at {}: {}",
                        storage.path().display(),
                        err
                    );
                    Err(rocket)
                }
            }
        }))
        .attach(cors::Cors)
        .mount(
            "/api",
            routes![
                requests::healthz,
                requests::readyz,
                requests::get_leaderboard,
                requests::submit_score
            ],
        )
        .mount("/", routes![cors::preflight])
        .register("/", catchers![requests::default_catcher])
}
