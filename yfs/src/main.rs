use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use yfs_api::{Client, Fantasy};
use yfs_auth::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false),
        )
        .init();

    let settings = Settings::new()?;

    let credential = yfs_auth::authenticate(&settings).await?;
    let client = Client::new(&credential.access_token);

    println!("\nFetching NFL game metadata...");
    let game = client.send(Fantasy::games().get("nfl")).await?;
    let game = game.game();
    println!(
        "Game: {} season {} (key {})",
        game.code, game.season, game.game_key
    );

    if let Some(league_key) = settings.league_key.as_deref() {
        println!("\nFetching league {}...", league_key);
        let league_response = client.send(Fantasy::leagues().get(league_key)).await?;
        let league = league_response.league();
        println!(
            "League: {} ({} teams, season {})",
            league.name,
            league.num_teams.unwrap_or_default(),
            league.season.as_deref().unwrap_or("unknown"),
        );

        let standings = client
            .send(Fantasy::leagues().standings(league_key))
            .await?;
        let team_count = standings.standings()[0]["teams"]["count"]
            .as_u64()
            .unwrap_or_default();
        println!("Standings cover {} teams", team_count);

        let mut scoreboard_request = Fantasy::leagues().scoreboard(league_key);
        if let Some(week) = league.current_week {
            scoreboard_request = scoreboard_request.week(week);
        }
        let scoreboard = client.send(scoreboard_request).await?;
        tracing::debug!("scoreboard payload: {}", scoreboard.scoreboard());
        match league.current_week {
            Some(week) => println!("Fetched scoreboard for week {}", week),
            None => println!("Fetched scoreboard for the current week"),
        }
    }

    println!("\nSmoke test completed successfully.");

    Ok(())
}
