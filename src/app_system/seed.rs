//! Demo data: a small catalog, two customers with credentials, a couple of
//! past orders and one contact message. Fixed ids, so reseeding overwrites.

use chrono::{Duration, NaiveDate, Utc};
use tracing::{info, instrument};
use crate::domain::{
    CartItem, Category, ContactMessage, FeedbackType, MessageStatus, Order, OrderStatus, Product,
    Role, User, UserAuth,
};
use super::error::StoreError;
use super::store_system::StoreSystem;

pub const DEMO_PASSWORD: &str = "password123";

struct SeedProduct {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    price: f64,
    category: Category,
    ingredients: &'static [&'static str],
    expires: (i32, u32, u32),
}

const CATALOG: &[SeedProduct] = &[
    SeedProduct {
        id: "1",
        name: "Fresh Farm Milk",
        description: "Straight from our farm to your table. Pure and fresh cow milk with no additives.",
        price: 3.99,
        category: Category::Milk,
        ingredients: &["Whole Milk"],
        expires: (2026, 11, 2),
    },
    SeedProduct {
        id: "2",
        name: "Organic Low-Fat Milk",
        description: "Lower in fat but not in taste. Perfect for those watching their fat intake.",
        price: 4.49,
        category: Category::Milk,
        ingredients: &["Low-fat Milk"],
        expires: (2026, 11, 1),
    },
    SeedProduct {
        id: "3",
        name: "Mango Shrikhand",
        description: "Sweet and tangy yogurt dessert with fresh mango pulp and saffron.",
        price: 6.99,
        category: Category::Shrikhand,
        ingredients: &["Strained Yogurt", "Mango Pulp", "Sugar", "Saffron", "Cardamom"],
        expires: (2026, 10, 28),
    },
    SeedProduct {
        id: "4",
        name: "Saffron Shrikhand",
        description: "Traditional sweet yogurt dessert infused with saffron and cardamom.",
        price: 5.99,
        category: Category::Shrikhand,
        ingredients: &["Strained Yogurt", "Sugar", "Saffron", "Cardamom"],
        expires: (2026, 10, 27),
    },
    SeedProduct {
        id: "5",
        name: "Strawberry Lassi",
        description: "Creamy yogurt drink blended with ripe strawberries.",
        price: 4.99,
        category: Category::Drinks,
        ingredients: &["Yogurt", "Strawberries", "Sugar", "Mint"],
        expires: (2026, 10, 25),
    },
    SeedProduct {
        id: "6",
        name: "Mango Lassi",
        description: "The classic mango and yogurt cooler.",
        price: 4.99,
        category: Category::Drinks,
        ingredients: &["Yogurt", "Mango Pulp", "Sugar"],
        expires: (2026, 10, 25),
    },
    SeedProduct {
        id: "7",
        name: "Kesar Basundi",
        description: "Slow-simmered sweetened milk with saffron, almonds and pistachios.",
        price: 7.49,
        category: Category::Basundi,
        ingredients: &["Whole Milk", "Sugar", "Saffron", "Almonds", "Pistachios"],
        expires: (2026, 10, 26),
    },
    SeedProduct {
        id: "8",
        name: "Paneer",
        description: "Soft, fresh cottage cheese made every morning.",
        price: 7.99,
        category: Category::Others,
        ingredients: &["Milk", "Lemon Juice"],
        expires: (2026, 10, 30),
    },
    SeedProduct {
        id: "9",
        name: "Ghee",
        description: "Clarified butter slow-cooked the traditional way.",
        price: 9.99,
        category: Category::Others,
        ingredients: &["Butter from Cow's Milk"],
        expires: (2027, 3, 31),
    },
];

fn demo_catalog() -> Vec<Product> {
    CATALOG
        .iter()
        .map(|seed| Product {
            id: seed.id.to_string(),
            name: seed.name.to_string(),
            description: seed.description.to_string(),
            price: seed.price,
            category: seed.category,
            ingredients: seed.ingredients.iter().map(|i| i.to_string()).collect(),
            expiry_date: NaiveDate::from_ymd_opt(seed.expires.0, seed.expires.1, seed.expires.2)
                .unwrap_or_default(),
            images: vec![format!("/images/products/{}.jpg", seed.id)],
            in_stock: true,
        })
        .collect()
}

fn demo_users() -> Vec<User> {
    [("user1", "John", "Doe", "john@example.com"), ("user2", "Jane", "Smith", "jane@example.com")]
        .into_iter()
        .map(|(id, first, last, email)| User {
            id: id.to_string(),
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: email.to_string(),
            role: Role::User,
        })
        .collect()
}

fn line(catalog: &[Product], id: &str, quantity: u32) -> Option<CartItem> {
    let product = catalog.iter().find(|product| product.id == id)?.clone();
    Some(CartItem { product, quantity })
}

fn demo_order(id: &str, user_id: &str, items: Vec<CartItem>, status: OrderStatus, days_ago: i64) -> Order {
    Order {
        id: id.to_string(),
        user_id: user_id.to_string(),
        total_amount: items.iter().map(CartItem::line_total).sum(),
        items,
        status,
        created_at: Utc::now() - Duration::days(days_ago),
    }
}

#[instrument(skip(system))]
pub async fn seed_demo_data(system: &StoreSystem) -> Result<(), StoreError> {
    info!("Seeding demo data");

    let catalog = demo_catalog();
    for product in &catalog {
        system.product_client.put_product(product.clone()).await?;
    }

    let users = demo_users();
    for user in &users {
        system.user_client.put_user(user.clone()).await?;
        system
            .user_client
            .put_credentials(UserAuth {
                user_id: user.id.clone(),
                email: user.email.clone(),
                password: DEMO_PASSWORD.to_string(),
                last_login: Utc::now(),
            })
            .await?;
    }

    let orders = [
        demo_order(
            "order1",
            "user1",
            [line(&catalog, "1", 2), line(&catalog, "9", 1)].into_iter().flatten().collect(),
            OrderStatus::Delivered,
            6,
        ),
        demo_order(
            "order2",
            "user2",
            [line(&catalog, "3", 2), line(&catalog, "6", 2)].into_iter().flatten().collect(),
            OrderStatus::OutForDelivery,
            1,
        ),
    ];
    for order in orders {
        system.order_client.put_order(order).await?;
    }

    system
        .contact_client
        .put_message(ContactMessage {
            id: "msg_seed_1".to_string(),
            name: "Sarah Johnson".to_string(),
            email: "sarah@example.com".to_string(),
            feedback_type: FeedbackType::Product,
            message: "Loved the mango shrikhand, please make a larger tub.".to_string(),
            status: MessageStatus::New,
            created_at: Utc::now() - Duration::hours(5),
        })
        .await?;

    info!(products = catalog.len(), users = users.len(), "Demo data seeded");
    Ok(())
}
