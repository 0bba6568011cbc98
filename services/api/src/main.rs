use farm_advisor_api::run;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("farm advisor error: {err}");
        std::process::exit(1);
    }
}
