// Entrypoint for the seeder.
// - Loads `.env`, sets up logging, builds the API client from the
//   environment and runs generate -> preview -> upload -> report.
// - Returns `anyhow::Result`: a transport error ends the run non-zero.

use dotenv::dotenv;
use stayeasy_seeder::{
    api::ApiClient,
    room::{generate_rooms, DEFAULT_ROOM_COUNT},
    ui::{print_preview, print_summary, run_upload, PREVIEW_COUNT},
};

fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let api = ApiClient::from_env()?;
    log::info!("Seeding {} rooms into {}", DEFAULT_ROOM_COUNT, api.records_url());

    let rooms = generate_rooms(DEFAULT_ROOM_COUNT, &mut rand::thread_rng());
    print_preview(&rooms, PREVIEW_COUNT)?;

    let report = run_upload(&api, &rooms)?;
    print_summary(&report);
    Ok(())
}
