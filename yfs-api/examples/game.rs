use yfs_api::{Client, Fantasy, FantasyApiError};

#[tokio::main]
pub async fn main() -> Result<(), FantasyApiError> {
    let client = Client::new("api_token");

    let req = Fantasy::leagues().scoreboard("nfl.l.686965").week(4u32);

    let _res = client.send(req).await?;
    Ok(())
}
