mod domain;
mod clients;
mod config;
mod storage;
mod storefront;

mod app_system;

#[cfg(test)]
mod mock_framework;
#[cfg(test)]
mod integration_tests;

mod actor_framework;
mod product_actor;
mod user_actor;
mod cart_actor;
mod order_actor;
mod contact_actor;

use tracing::{error, info, Instrument};
use crate::app_system::{setup_tracing, StoreError, StoreSystem};
use crate::config::Config;
use crate::domain::{Category, ContactCreate, FeedbackType, OrderStatus};
use crate::storage::{FileStorage, MemoryStorage};

#[tokio::main]
async fn main() -> Result<(), StoreError> {
    dotenvy::dotenv().ok();
    setup_tracing();

    let config = Config::load()?;
    info!(device_storage = %config.device_storage.display(), "Starting dairy store");

    let system = StoreSystem::start(&config).await?;
    let storefront = system.storefront();

    // Shopper on this device: browse, fill the cart, sign in, check out.
    let storage = FileStorage::open(&config.device_storage)?;
    let mut shopper = storefront.open_session(Box::new(storage)).await;

    let span = tracing::info_span!("shopping");
    let order_id = async {
        let drinks = storefront.catalog.by_category(Category::Drinks).await?;
        info!(count = drinks.len(), "Browsing drinks");
        for product in storefront.catalog.browse(None, "shrikhand").await? {
            shopper.add_to_cart(&product, 1).await?;
        }
        info!(items = shopper.item_count(), total = shopper.total_amount(), "Anonymous cart");

        if !shopper.is_logged_in() {
            shopper.login("john@example.com", app_system::seed::DEMO_PASSWORD).await?;
        }
        if let Some(lassi) = drinks.first() {
            shopper.add_to_cart(lassi, 2).await?;
            shopper.add_to_cart(lassi, 1).await?;
        }
        info!(items = shopper.item_count(), total = shopper.total_amount(), "Signed-in cart");

        let order_id = shopper.place_order().await?;
        for order in shopper.my_orders().await? {
            info!(order_id = %order.id, status = %order.status, total = order.total_amount, "My order");
        }
        Ok::<_, StoreError>(order_id)
    }
    .instrument(span)
    .await?;

    for notice in shopper.take_notices() {
        info!(level = ?notice.level, "{}", notice.message);
    }

    storefront
        .contact
        .submit(ContactCreate {
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            feedback_type: FeedbackType::Suggestion,
            message: "Could you deliver on Sundays too?".to_string(),
        })
        .await?;

    // Admin on a second device: move the new order along and review the dashboard.
    let span = tracing::info_span!("admin");
    let admin_result = async {
        let mut admin = storefront.open_session(Box::new(MemoryStorage::new())).await;
        admin.login(&config.admin_email, &config.admin_password).await?;

        let mut status = Some(OrderStatus::Processing);
        while let Some(next) = status {
            storefront.admin.set_order_status(&admin, &order_id, next).await?;
            status = next.next();
        }

        let stats = storefront.admin.dashboard(&admin).await?;
        info!(
            products = stats.products,
            orders = stats.orders,
            pending = stats.pending_orders,
            delivered = stats.delivered_orders,
            revenue = stats.revenue,
            new_messages = stats.new_messages,
            "Dashboard"
        );
        admin.logout();
        Ok::<_, StoreError>(())
    }
    .instrument(span)
    .await;

    if let Err(e) = admin_result {
        error!(error = %e, "Admin session failed");
    }

    shopper.logout();
    drop(shopper);
    drop(storefront);
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
