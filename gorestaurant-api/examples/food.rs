use gorestaurant_api::{ApiError, Client, Request};

#[tokio::main]
pub async fn main() -> Result<(), ApiError> {
    let client = Client::default();

    let food = client.send(Request::foods().get(1.into())).await?;
    println!("{} ({} extras)", food.name, food.extras.len());

    let favorite = client.send(Request::favorites().get(food.id)).await;
    println!("favorite lookup: {:?}", favorite);
    Ok(())
}
