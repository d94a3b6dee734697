//! Subcommand dispatch over the SDK clients and core workflows.

use anyhow::{Context, bail};
use clap::Subcommand;
use fueldrop_core::payment::PaymentSigner;
use fueldrop_core::workflow::{OrderActions, StatusMutator};
use fueldrop_sdk::client::{AdminClient, CustomerClient, StationClient};
use fueldrop_sdk::objects::order::{Order, OrderStatus, PaymentStatus};
use fueldrop_sdk::objects::payment::GATEWAY_FORM_URL;
use fueldrop_sdk::presenter::{EnabledActions, payment_badge, status_badge};
use fueldrop_sdk::session::{SessionStore, UserRole};
use rust_decimal::Decimal;

use crate::config::{self, FileConfig};

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch one order by id
    Get { order_id: String },
    /// List a customer's orders (defaults to the logged-in user)
    List { user_id: Option<String> },
    /// List a station's incoming orders
    StationOrders {
        station_id: String,
        /// Filter by fulfillment status
        #[arg(long)]
        status: Option<String>,
    },
    /// Cancel an order (customer action)
    Cancel { order_id: String },
    /// Delete a cancelled order (customer action)
    Delete { order_id: String },
    /// Apply the two-phase admin status + payment update
    SetStatus {
        order_id: String,
        #[arg(long)]
        status: String,
        #[arg(long, default_value = "PENDING")]
        payment: String,
    },
    /// Sign an eSewa payment form for an amount
    SignPayment { amount: Decimal },
}

impl Command {
    /// Which role the session acts as for this command.
    pub fn role(&self) -> UserRole {
        match self {
            Command::SetStatus { .. } => UserRole::Admin,
            Command::StationOrders { .. } => UserRole::Station,
            _ => UserRole::Customer,
        }
    }
}

pub async fn run(command: Command, session: SessionStore, config: FileConfig) -> anyhow::Result<()> {
    let base_url = config.api.base_url.clone();
    match command {
        Command::Get { order_id } => {
            let client = CustomerClient::new(base_url, session);
            let order = client.get_order(&order_id).await?;
            print_order(&order)?;
        }
        Command::List { user_id } => {
            let client = CustomerClient::new(base_url, session);
            let user_id = match user_id.or_else(|| client.session().user_id()) {
                Some(id) => id,
                None => bail!("no user id given and no session user available"),
            };
            let orders = client.list_user_orders(&user_id).await?;
            print_order_lines(&orders);
        }
        Command::StationOrders { station_id, status } => {
            let filter = status.map(|s| parse_status(&s)).transpose()?;
            let client = StationClient::new(base_url, session);
            let orders = client.list_station_orders(&station_id, filter).await?;
            print_order_lines(&orders);
        }
        Command::Cancel { order_id } => {
            let client = CustomerClient::new(base_url, session);
            let order = client.get_order(&order_id).await?;
            let actions = OrderActions::new(client);
            let refreshed = actions.cancel(&order).await?;
            tracing::info!(%order_id, "order cancelled");
            print_order_lines(&refreshed);
        }
        Command::Delete { order_id } => {
            let client = CustomerClient::new(base_url, session);
            let order = client.get_order(&order_id).await?;
            let actions = OrderActions::new(client);
            let refreshed = actions.delete(&order).await?;
            tracing::info!(%order_id, "order deleted");
            print_order_lines(&refreshed);
        }
        Command::SetStatus {
            order_id,
            status,
            payment,
        } => {
            let status = parse_status(&status)?;
            let payment = parse_payment(&payment)?;
            let mutator = StatusMutator::new(AdminClient::new(base_url, session));
            let report = mutator.apply(&order_id, status, payment).await?;
            println!(
                "status updated: {}, payment updated: {}",
                report.status_updated, report.payment_updated
            );
            if let Some(err) = &report.payment_error {
                println!("payment update skipped/failed: {err}");
            }
            print_order(&report.order)?;
        }
        Command::SignPayment { amount } => {
            let secret = config::esewa_secret()?;
            let signer = PaymentSigner::new(
                secret.into_bytes(),
                config.payment.product_code.clone(),
                config.payment.success_url.clone(),
                config.payment.failure_url.clone(),
            );
            let form = signer.sign(amount);
            println!("POST {GATEWAY_FORM_URL}");
            for (name, value) in form.form_fields() {
                println!("  {name} = {value}");
            }
        }
    }
    Ok(())
}

fn parse_status(label: &str) -> anyhow::Result<OrderStatus> {
    OrderStatus::parse(label).with_context(|| format!("unrecognized order status {label:?}"))
}

fn parse_payment(label: &str) -> anyhow::Result<PaymentStatus> {
    match label.trim().to_ascii_uppercase().as_str() {
        "PENDING" => Ok(PaymentStatus::Pending),
        "PAID" => Ok(PaymentStatus::Paid),
        other => bail!("unrecognized payment status {other:?}"),
    }
}

fn print_order(order: &Order) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(order)?);
    let actions = EnabledActions::for_order(order);
    println!(
        "badges: status={:?} payment={:?}",
        status_badge(&order.status),
        payment_badge(&order.payment_status)
    );
    let mut enabled = Vec::new();
    if actions.cancel {
        enabled.push("cancel");
    }
    if actions.delete {
        enabled.push("delete");
    }
    if actions.mark_processing {
        enabled.push("mark-processing");
    }
    if actions.mark_completed {
        enabled.push("mark-completed");
    }
    if actions.mark_cancelled {
        enabled.push("mark-cancelled");
    }
    if actions.payment_section {
        enabled.push("pay");
    }
    println!("actions: {}", enabled.join(", "));
    Ok(())
}

fn print_order_lines(orders: &[Order]) {
    if orders.is_empty() {
        println!("no orders");
        return;
    }
    for order in orders {
        println!(
            "{}  {:<12} {:<8} {} x {}L = {}",
            order.id,
            order.status.as_str(),
            order.payment_status.as_str(),
            order.fuel_type,
            order.quantity,
            order.total_cost
        );
    }
}
