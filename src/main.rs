use actix_files::Files;
use actix_web::middleware::Logger;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use rusty_golf_scorecard::args;
use rusty_golf_scorecard::controller::round::{AppState, configure};
use rusty_golf_scorecard::logging::setup_logging;
use tracing::info;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = args::args_checks()?;
    setup_logging(args.verbose, args.quiet)?;

    let state = Data::new(AppState::new(
        args.catalog.clone(),
        args.session_max_age,
        args.max_sessions,
    ));
    let static_dir = args.static_dir.clone();

    info!(host = %args.host, port = args.port, courses = state.catalog.courses.len(), "starting scorecard server");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(configure)
            .service(Files::new("/static", static_dir.clone()))
    })
    .bind((args.host.as_str(), args.port))?
    .run()
    .await?;
    Ok(())
}
