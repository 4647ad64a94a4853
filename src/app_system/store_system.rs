use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{error, info};
use crate::actor_framework::ResourceActor;
use crate::clients::{CartClient, ContactClient, OrderClient, ProductClient, UserClient};
use crate::config::Config;
use crate::domain::{ContactMessage, Order, Product, StoredCart, User, UserAuth};
use crate::storefront::{AdminService, AuthService, Catalog, Storefront};
use super::error::StoreError;
use super::seed;

/// Sequential ids of the form `<prefix>_<n>`, starting at 1.
fn sequential_ids(prefix: &'static str) -> impl Fn() -> String + Send + Sync + 'static {
    let counter = Arc::new(AtomicU64::new(1));
    move || format!("{}_{}", prefix, counter.fetch_add(1, Ordering::SeqCst))
}

/// The running store: one actor per collection plus the clients wired to them.
///
/// Responsible for starting up actors, seeding, and handling shutdown.
pub struct StoreSystem {
    pub product_client: ProductClient,
    pub user_client: UserClient,
    pub cart_client: CartClient,
    pub order_client: OrderClient,
    pub contact_client: ContactClient,
    config: Config,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl StoreSystem {
    /// Spawns the collection actors. Collections start empty.
    pub fn new(config: &Config) -> Self {
        let buffer = config.channel_buffer;

        let (product_actor, products) = ResourceActor::<Product>::new(buffer, sequential_ids("product"));
        let (user_actor, users) = ResourceActor::<User>::new(buffer, sequential_ids("user"));
        // Credentials and carts are always written under their user's id.
        let (auth_actor, credentials) = ResourceActor::<UserAuth>::new(buffer, String::new);
        let (cart_actor, carts) = ResourceActor::<StoredCart>::new(buffer, String::new);
        let (order_actor, orders) = ResourceActor::<Order>::new(buffer, sequential_ids("order"));
        let (contact_actor, messages) = ResourceActor::<ContactMessage>::new(buffer, sequential_ids("msg"));

        let handles = vec![
            tokio::spawn(product_actor.run()),
            tokio::spawn(user_actor.run()),
            tokio::spawn(auth_actor.run()),
            tokio::spawn(cart_actor.run()),
            tokio::spawn(order_actor.run()),
            tokio::spawn(contact_actor.run()),
        ];

        Self {
            product_client: ProductClient::new(products),
            user_client: UserClient::new(users, credentials),
            cart_client: CartClient::new(carts),
            order_client: OrderClient::new(orders),
            contact_client: ContactClient::new(messages),
            config: config.clone(),
            handles,
        }
    }

    /// Spawns the actors, writes the bootstrap admin account and, if
    /// configured, the demo data.
    pub async fn start(config: &Config) -> Result<Self, StoreError> {
        info!("Starting store system");
        let system = Self::new(config);
        system
            .storefront()
            .auth
            .bootstrap_admin(&config.admin_email, &config.admin_password)
            .await?;
        if config.seed_demo_data {
            seed::seed_demo_data(&system).await?;
        }
        Ok(system)
    }

    pub fn storefront(&self) -> Storefront {
        Storefront::new(
            Catalog::new(self.product_client.clone()),
            AuthService::new(
                self.user_client.clone(),
                self.config.min_password_len,
                self.config.allow_guest_login,
            ),
            AdminService::new(
                self.product_client.clone(),
                self.order_client.clone(),
                self.contact_client.clone(),
            ),
            self.contact_client.clone(),
            self.order_client.clone(),
            self.cart_client.clone(),
            self.config.cart_rollback,
        )
    }

    /// Drops this system's clients and waits for the actors to stop.
    ///
    /// Actors only stop once every clone of their client is gone, so any
    /// `Storefront` or `Session` must be dropped first.
    pub async fn shutdown(self) -> Result<(), StoreError> {
        info!("Shutting down system...");
        drop(self.product_client);
        drop(self.user_client);
        drop(self.cart_client);
        drop(self.order_client);
        drop(self.contact_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(StoreError::ActorTask(e.to_string()));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
