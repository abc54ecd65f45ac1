use log::{error, info, LevelFilter};
use rocket::Error as RocketError;

/// Launch the server, returning only on shutdown or a critical failure.
async fn run() -> Result<(), RocketError> {
    info!("Configuring server...");
    let rocket = election_config::build().ignite().await?;
    info!("...server configured!");
    // Rocket's own launch banner is noise next to ours.
    log4rs_dynamic_filters::DynamicLevelFilter::set("rocket", LevelFilter::Off);
    let _ = rocket.launch().await?;
    Ok(())
}

#[rocket::main]
async fn main() {
    if let Err(e) = log4rs::init_file("log4rs.yaml", log4rs_dynamic_filters::default_deserializers())
    {
        eprintln!("Failed to initialise logging: {e}");
        std::process::exit(1)
    }
    info!("Initialised logging");

    if let Err(err) = run().await {
        error!("{err}");
        error!("Critical failure, shutting down");
        std::process::exit(1)
    }
}
