#[cfg(test)]
mod tests {
    use crate::app_system::seed::DEMO_PASSWORD;
    use crate::app_system::StoreSystem;
    use crate::config::Config;
    use crate::domain::{
        Category, ContactCreate, FeedbackType, MessageStatus, OrderStatus, ProductPatch, Role, User, UserPatch,
    };
    use crate::order_actor::OrderError;
    use crate::storage::{save_json, FileStorage, MemoryStorage, USER_KEY};
    use crate::storefront::notice::NoticeLevel;
    use crate::storefront::{AdminError, AuthError, Session, Storefront};

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    async fn start() -> (StoreSystem, Storefront) {
        let system = StoreSystem::start(&Config::default()).await.unwrap();
        let storefront = system.storefront();
        (system, storefront)
    }

    async fn anonymous(storefront: &Storefront) -> Session {
        storefront.open_session(Box::new(MemoryStorage::new())).await
    }

    async fn signed_in(storefront: &Storefront, email: &str, password: &str) -> Session {
        let mut session = anonymous(storefront).await;
        session.login(email, password).await.unwrap();
        session
    }

    #[tokio::test]
    async fn test_catalog_browsing() {
        let (_system, storefront) = start().await;

        assert_eq!(storefront.catalog.all_products().await.unwrap().len(), 9);
        let shrikhand = storefront.catalog.by_category(Category::Shrikhand).await.unwrap();
        assert_eq!(shrikhand.len(), 2);

        let mango = storefront.catalog.browse(None, "MANGO").await.unwrap();
        let names: Vec<_> = mango.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Mango Lassi", "Mango Shrikhand"]);

        let mango_drinks = storefront.catalog.browse(Some(Category::Drinks), "mango").await.unwrap();
        assert_eq!(mango_drinks.len(), 1);

        assert!(storefront.catalog.product("1").await.unwrap().is_some());
        assert!(storefront.catalog.product("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_anonymous_cart_lives_in_device_storage() {
        let (_system, storefront) = start().await;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("device.json");
        let milk = storefront.catalog.product("1").await.unwrap().unwrap();

        let mut session = storefront.open_session(Box::new(FileStorage::open(&path).unwrap())).await;
        session.add_to_cart(&milk, 1).await.unwrap();
        session.add_to_cart(&milk, 2).await.unwrap();
        assert_eq!(session.cart().items().len(), 1);
        assert_eq!(session.item_count(), 3);
        drop(session);

        let reopened = storefront.open_session(Box::new(FileStorage::open(&path).unwrap())).await;
        assert!(!reopened.is_logged_in());
        assert_eq!(reopened.item_count(), 3);
        assert!(approx(reopened.total_amount(), 3.0 * 3.99));
    }

    #[tokio::test]
    async fn test_sign_in_replaces_cart_and_sign_out_restores_device_cart() {
        let (_system, storefront) = start().await;
        let paneer = storefront.catalog.product("8").await.unwrap().unwrap();
        let ghee = storefront.catalog.product("9").await.unwrap().unwrap();

        let mut session = anonymous(&storefront).await;
        session.add_to_cart(&paneer, 1).await.unwrap();

        session.login("john@example.com", DEMO_PASSWORD).await.unwrap();
        assert!(session.cart().is_empty(), "anonymous items are not merged");

        session.add_to_cart(&ghee, 2).await.unwrap();
        session.logout();
        assert_eq!(session.cart().get("8").map(|item| item.quantity), Some(1));
        assert!(session.cart().get("9").is_none());

        session.login("john@example.com", DEMO_PASSWORD).await.unwrap();
        assert_eq!(session.cart().get("9").map(|item| item.quantity), Some(2));
        assert!(session.cart().get("8").is_none());
    }

    #[tokio::test]
    async fn test_signed_in_session_is_restored_from_device() {
        let (_system, storefront) = start().await;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("device.json");
        let lassi = storefront.catalog.product("6").await.unwrap().unwrap();

        let mut session = storefront.open_session(Box::new(FileStorage::open(&path).unwrap())).await;
        session.login("jane@example.com", DEMO_PASSWORD).await.unwrap();
        session.add_to_cart(&lassi, 4).await.unwrap();
        drop(session);

        let restored = storefront.open_session(Box::new(FileStorage::open(&path).unwrap())).await;
        assert_eq!(restored.user().map(|u| u.email.as_str()), Some("jane@example.com"));
        assert_eq!(restored.item_count(), 4);
    }

    #[tokio::test]
    async fn test_quantity_updates() {
        let (_system, storefront) = start().await;
        let milk = storefront.catalog.product("1").await.unwrap().unwrap();
        let basundi = storefront.catalog.product("7").await.unwrap().unwrap();
        let mut session = signed_in(&storefront, "john@example.com", DEMO_PASSWORD).await;

        session.add_to_cart(&milk, 1).await.unwrap();
        session.add_to_cart(&basundi, 1).await.unwrap();
        session.update_quantity("1", 5).await.unwrap();
        assert_eq!(session.item_count(), 6);
        assert!(approx(session.total_amount(), 5.0 * 3.99 + 7.49));

        session.update_quantity("1", 0).await.unwrap();
        session.update_quantity("7", -1).await.unwrap();
        assert!(session.cart().is_empty());

        session.add_to_cart(&milk, 2).await.unwrap();
        session.clear_cart().await.unwrap();
        assert_eq!(session.item_count(), 0);
    }

    #[tokio::test]
    async fn test_place_order_preconditions() {
        let (system, storefront) = start().await;
        let milk = storefront.catalog.product("1").await.unwrap().unwrap();

        let mut guest = anonymous(&storefront).await;
        guest.add_to_cart(&milk, 1).await.unwrap();
        assert_eq!(guest.place_order().await, Err(OrderError::Unauthenticated));
        assert_eq!(guest.item_count(), 1);

        let mut john = signed_in(&storefront, "john@example.com", DEMO_PASSWORD).await;
        assert_eq!(john.place_order().await, Err(OrderError::EmptyCart));
        let notices = john.take_notices();
        assert_eq!(notices.last().map(|n| n.level), Some(NoticeLevel::Error));

        assert_eq!(system.order_client.all_orders().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_place_order_snapshots_cart_and_clears_it() {
        let (system, storefront) = start().await;
        let milk = storefront.catalog.product("1").await.unwrap().unwrap();
        let shrikhand = storefront.catalog.product("3").await.unwrap().unwrap();

        let mut john = signed_in(&storefront, "john@example.com", DEMO_PASSWORD).await;
        john.add_to_cart(&milk, 2).await.unwrap();
        john.add_to_cart(&shrikhand, 1).await.unwrap();
        let expected_total = 2.0 * 3.99 + 6.99;

        let before = system.order_client.all_orders().await.unwrap().len();
        let order_id = john.place_order().await.unwrap();
        assert_eq!(system.order_client.all_orders().await.unwrap().len(), before + 1);

        let order = john.get_order(&order_id).await.unwrap().unwrap();
        assert_eq!(order.status, OrderStatus::Placed);
        assert_eq!(order.user_id, "user1");
        assert_eq!(order.item_count(), 3);
        assert!(approx(order.total_amount, expected_total));

        assert!(john.cart().is_empty());
        let persisted = system.cart_client.load_cart("user1".into()).await.unwrap();
        assert!(persisted.is_empty());

        // Later catalog edits do not reach the stored order.
        let mut admin = signed_in(&storefront, "admin@dairyfarm.com", "admin123").await;
        storefront
            .admin
            .edit_product(&admin, "1", ProductPatch { price: Some(10.0), ..Default::default() })
            .await
            .unwrap();
        let order = john.get_order(&order_id).await.unwrap().unwrap();
        assert!(approx(order.total_amount, expected_total));
        let milk_line = order.items.iter().find(|item| item.product.id == "1").unwrap();
        assert!(approx(milk_line.product.price, 3.99));

        let mine = john.my_orders().await.unwrap();
        assert_eq!(mine.first().map(|o| o.id.as_str()), Some(order_id.as_str()));
        admin.logout();
    }

    #[tokio::test]
    async fn test_login_roles() {
        let (_system, storefront) = start().await;
        let mut session = anonymous(&storefront).await;

        let admin = session.login("admin@dairyfarm.com", "admin123").await.unwrap();
        assert_eq!(admin.role, Role::Admin);
        assert!(session.is_admin());
        session.logout();
        assert!(!session.is_logged_in());

        let guest = session.login("shopper@example.com", "secret1").await.unwrap();
        assert_eq!(guest.role, Role::User);
        assert!(guest.id.starts_with("guest-"));
        assert_eq!(guest.first_name, "shopper");
        session.logout();

        assert_eq!(
            session.login("shopper@example.com", "short").await,
            Err(AuthError::InvalidCredentials)
        );
        assert_eq!(
            session.login("john@example.com", "not-johns-password").await,
            Err(AuthError::InvalidCredentials)
        );
        assert_eq!(
            session.login("admin@dairyfarm.com", "wrong-password").await,
            Err(AuthError::InvalidCredentials)
        );
        assert!(!session.is_logged_in());
    }

    #[tokio::test]
    async fn test_guest_login_can_be_disabled() {
        let config = Config { allow_guest_login: false, ..Config::default() };
        let system = StoreSystem::start(&config).await.unwrap();
        let storefront = system.storefront();
        let mut session = anonymous(&storefront).await;

        assert_eq!(
            session.login("shopper@example.com", "secret1").await,
            Err(AuthError::InvalidCredentials)
        );
    }

    #[tokio::test]
    async fn test_registration_and_profile() {
        let (_system, storefront) = start().await;
        let mut session = anonymous(&storefront).await;

        assert_eq!(
            session.register("Jane", "Again", "JANE@example.com", "password").await,
            Err(AuthError::EmailInUse("JANE@example.com".into()))
        );
        assert_eq!(
            session.register("Ravi", "Patel", "ravi@example.com", "123").await,
            Err(AuthError::PasswordTooShort(6))
        );

        let ravi = session.register("Ravi", "Patel", "ravi@example.com", "ghee-lover").await.unwrap();
        assert_eq!(ravi.role, Role::User);
        assert!(session.is_logged_in());

        let updated = session
            .update_profile(UserPatch { email: Some("ravi.p@example.com".into()), ..Default::default() })
            .await
            .unwrap();
        assert_eq!(updated.email, "ravi.p@example.com");

        assert_eq!(
            session
                .update_profile(UserPatch { email: Some("john@example.com".into()), ..Default::default() })
                .await,
            Err(AuthError::EmailInUse("john@example.com".into()))
        );

        session.logout();
        let again = session.login("ravi.p@example.com", "ghee-lover").await.unwrap();
        assert_eq!(again.id, ravi.id);
        assert_eq!(again.full_name(), "Ravi Patel");
    }

    #[tokio::test]
    async fn test_order_status_is_admin_only_and_unrestricted() {
        let (_system, storefront) = start().await;
        let john = signed_in(&storefront, "john@example.com", DEMO_PASSWORD).await;
        let admin = signed_in(&storefront, "admin@dairyfarm.com", "admin123").await;

        assert_eq!(
            storefront.admin.set_order_status(&john, "order2", OrderStatus::Delivered).await,
            Err(AdminError::Forbidden)
        );

        // Backward and skip-ahead moves are both accepted.
        let previous = storefront
            .admin
            .set_order_status(&admin, "order2", OrderStatus::Placed)
            .await
            .unwrap();
        assert_eq!(previous, OrderStatus::OutForDelivery);
        let previous = storefront
            .admin
            .set_order_status(&admin, "order2", OrderStatus::Delivered)
            .await
            .unwrap();
        assert_eq!(previous, OrderStatus::Placed);

        let delivered = storefront.admin.orders(&admin, Some(OrderStatus::Delivered)).await.unwrap();
        assert_eq!(delivered.len(), 2);

        assert!(matches!(
            storefront.admin.set_order_status(&admin, "nope", OrderStatus::Processing).await,
            Err(AdminError::Order(OrderError::NotFound(_)))
        ));
    }

    #[tokio::test]
    async fn test_admin_products_and_dashboard() {
        let (_system, storefront) = start().await;
        let admin = signed_in(&storefront, "admin@dairyfarm.com", "admin123").await;
        let anonymous_session = anonymous(&storefront).await;

        assert_eq!(storefront.admin.dashboard(&anonymous_session).await, Err(AdminError::Forbidden));

        let stats = storefront.admin.dashboard(&admin).await.unwrap();
        assert_eq!(stats.products, 9);
        assert_eq!(stats.orders, 2);
        assert_eq!(stats.delivered_orders, 1);
        assert_eq!(stats.pending_orders, 1);
        assert_eq!(stats.new_messages, 1);
        assert!(approx(stats.revenue, 2.0 * 3.99 + 9.99 + 2.0 * 6.99 + 2.0 * 4.99));

        assert!(storefront.admin.set_in_stock(&admin, "9", false).await.unwrap());
        assert!(!storefront.catalog.product("9").await.unwrap().unwrap().in_stock);

        storefront.admin.delete_product(&admin, "9").await.unwrap();
        assert!(storefront.catalog.product("9").await.unwrap().is_none());
        assert_eq!(storefront.admin.dashboard(&admin).await.unwrap().products, 8);
    }

    #[tokio::test]
    async fn test_contact_messages() {
        let (_system, storefront) = start().await;
        let admin = signed_in(&storefront, "admin@dairyfarm.com", "admin123").await;

        let id = storefront
            .contact
            .submit(ContactCreate {
                name: "Meera".into(),
                email: "meera@example.com".into(),
                feedback_type: FeedbackType::Complaint,
                message: "My paneer arrived warm.".into(),
            })
            .await
            .unwrap();

        let new_messages = storefront.admin.messages(&admin, Some(MessageStatus::New)).await.unwrap();
        assert_eq!(new_messages.len(), 2);
        assert_eq!(new_messages[0].id, id);

        let previous = storefront
            .admin
            .set_message_status(&admin, &id, MessageStatus::Replied)
            .await
            .unwrap();
        assert_eq!(previous, MessageStatus::New);
        assert_eq!(storefront.admin.messages(&admin, Some(MessageStatus::New)).await.unwrap().len(), 1);
        assert_eq!(storefront.admin.messages(&admin, None).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_shutdown_after_sessions_are_dropped() {
        let (system, storefront) = start().await;
        let session = signed_in(&storefront, "john@example.com", DEMO_PASSWORD).await;
        drop(session);
        drop(storefront);
        assert!(system.shutdown().await.is_ok());
    }

    fn forged(id: &str, email: &str) -> MemoryStorage {
        let mut storage = MemoryStorage::new();
        let user = User {
            id: id.to_string(),
            first_name: "Mallory".into(),
            last_name: String::new(),
            email: email.to_string(),
            role: Role::Admin,
        };
        save_json(&mut storage, USER_KEY, &user).unwrap();
        storage
    }

    #[tokio::test]
    async fn test_stored_role_is_not_trusted() {
        let (_system, storefront) = start().await;

        let session = storefront.open_session(Box::new(forged("evil", "evil@example.com"))).await;
        assert!(session.is_logged_in());
        assert!(!session.is_admin());
        assert_eq!(storefront.admin.dashboard(&session).await, Err(AdminError::Forbidden));
        assert_eq!(
            storefront.admin.set_order_status(&session, "order1", OrderStatus::Placed).await,
            Err(AdminError::Forbidden)
        );

        let session = storefront.open_session(Box::new(forged("user1", "mallory@example.com"))).await;
        let user = session.user().unwrap();
        assert_eq!(user.role, Role::User);
        assert_eq!(user.email, "john@example.com");
        assert_eq!(storefront.admin.dashboard(&session).await, Err(AdminError::Forbidden));
    }
}
