use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use order_tracker_server::{
    OrderId,
    adapters::inbound::http::dto::{
        CreateOrderDto, ErrorResponseDto, ListOrdersResponseDto, OrderDto, UpdateStatusDto,
    },
};
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;

#[derive(Parser, Debug)]
#[command(name = "order-tracker-cli")]
#[command(about = "CLI for interacting with the order tracker server", long_about = None)]
struct Cli {
    /// Server URL
    #[arg(short, long, env = "ORDER_TRACKER_URL", default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add a new order
    Add {
        /// Item name
        item_name: String,
        /// Quantity
        quantity: i64,
        /// Customer id
        customer_id: String,
        /// Order id (generated when omitted)
        #[arg(long)]
        order_id: Option<String>,
        /// Initial status (defaults to pending)
        #[arg(short, long)]
        status: Option<String>,
    },

    /// Show one order
    Get {
        /// Order id
        order_id: String,
    },

    /// Change the status of an order
    UpdateStatus {
        /// Order id
        order_id: String,
        /// New status: pending, processing, shipped or delivered
        status: String,
    },

    /// List orders
    List {
        /// Only show orders in this status
        #[arg(short, long)]
        status: Option<String>,
    },
}

/// Thin client for the order REST API
struct OrderClient {
    http: Client,
    base_url: String,
}

impl OrderClient {
    fn new(base_url: &str) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// `{base}/api/orders/{segments..}`, each segment percent-encoded
    fn orders_url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)
            .with_context(|| format!("Invalid server URL {}", self.base_url))?;

        url.path_segments_mut()
            .map_err(|_| anyhow!("Server URL cannot carry a path: {}", self.base_url))?
            .pop_if_empty()
            .extend(["api", "orders"])
            .extend(segments);

        Ok(url)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request
            .send()
            .await
            .with_context(|| format!("Failed to reach {}", self.base_url))?;

        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<ErrorResponseDto>().await {
                Ok(body) => body.message,
                Err(_) => status.to_string(),
            };
            anyhow::bail!("Request failed ({}): {}", status, message);
        }

        response
            .json::<T>()
            .await
            .context("Failed to decode server response")
    }

    async fn add(&self, order: &CreateOrderDto) -> Result<OrderDto> {
        self.send(self.http.post(self.orders_url(&[])?).json(order))
            .await
    }

    fn get_request(&self, order_id: &str) -> Result<RequestBuilder> {
        Ok(self.http.get(self.orders_url(&[order_id])?))
    }

    async fn get(&self, order_id: &str) -> Result<OrderDto> {
        self.send(self.get_request(order_id)?).await
    }

    fn update_status_request(&self, order_id: &str, status: &str) -> Result<RequestBuilder> {
        let body = UpdateStatusDto {
            status: status.to_string(),
        };
        Ok(self
            .http
            .put(self.orders_url(&[order_id, "status"])?)
            .json(&body))
    }

    async fn update_status(&self, order_id: &str, status: &str) -> Result<OrderDto> {
        self.send(self.update_status_request(order_id, status)?)
            .await
    }

    async fn list(&self, status: Option<&str>) -> Result<ListOrdersResponseDto> {
        let mut request = self.http.get(self.orders_url(&[])?);
        if let Some(status) = status {
            request = request.query(&[("status", status)]);
        }
        self.send(request).await
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let client = OrderClient::new(&cli.url);

    match cli.command {
        Commands::Add {
            item_name,
            quantity,
            customer_id,
            order_id,
            status,
        } => {
            let order = CreateOrderDto {
                order_id: order_id.unwrap_or_else(|| OrderId::generate().to_string()),
                item_name,
                quantity,
                customer_id,
                status,
            };
            print_json(&client.add(&order).await?)
        }
        Commands::Get { order_id } => print_json(&client.get(&order_id).await?),
        Commands::UpdateStatus { order_id, status } => {
            print_json(&client.update_status(&order_id, &status).await?)
        }
        Commands::List { status } => print_json(&client.list(status.as_deref()).await?),
    }
}
