//! End-to-end tests for the storefront router.
//!
//! Requests are driven through the full router in-process with
//! `tower::ServiceExt::oneshot`; the session cookie is carried between
//! requests by hand, so the add -> cart -> checkout -> confirmation flow
//! runs exactly as a browser would see it.

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, Response, StatusCode, header};
use tower::ServiceExt;

use timberhaus_storefront::catalog::seed_catalog;
use timberhaus_storefront::config::StorefrontConfig;
use timberhaus_storefront::state::AppState;

fn test_app() -> Router {
    let config = StorefrontConfig {
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        base_url: "http://localhost:3000".to_string(),
        database_url: None,
    };
    timberhaus_storefront::app(AppState::new(config, seed_catalog(), None))
}

async fn get(app: &Router, path: &str, cookie: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder().uri(path);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    let request = builder.body(Body::empty()).unwrap();
    app.clone().oneshot(request).await.unwrap()
}

async fn post_form(app: &Router, path: &str, body: &str, cookie: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    let request = builder.body(Body::from(body.to_string())).unwrap();
    app.clone().oneshot(request).await.unwrap()
}

/// Session cookie from a response, if one was issued.
fn session_cookie(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(str::to_string)
}

fn location(response: &Response<Body>) -> String {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

async fn body_text(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_landing_page_shows_featured_products() {
    let app = test_app();
    let response = get(&app, "/", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains("Classic Oak Sofa"));
    assert!(body.contains("49,999.00"));
    // Only the first three products are featured.
    assert!(!body.contains("Scandinavian Bed Frame"));
}

#[tokio::test]
async fn test_product_listing_and_detail() {
    let app = test_app();

    let body = body_text(get(&app, "/products", None).await).await;
    for name in [
        "Classic Oak Sofa",
        "Mid-Century Dining Chair",
        "Rustic Coffee Table",
        "Scandinavian Bed Frame",
    ] {
        assert!(body.contains(name), "missing {name}");
    }

    let response = get(&app, "/product/2", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("walnut legs"));
}

#[tokio::test]
async fn test_unknown_product_and_unknown_path_render_404_page() {
    let app = test_app();

    for path in ["/product/999", "/product/sofa", "/no-such-page"] {
        let response = get(&app, path, None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{path}");
        let body = body_text(response).await;
        assert!(body.contains("404"));
    }
}

#[tokio::test]
async fn test_add_to_cart_and_view_cart() {
    let app = test_app();

    let response = post_form(&app, "/add_to_cart", "product_id=1&quantity=2", None).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/cart");
    let cookie = session_cookie(&response).expect("session cookie");

    let response = get(&app, "/cart", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("Added 2 x Classic Oak Sofa to cart."));
    assert!(body.contains("Classic Oak Sofa"));
    assert!(body.contains("99,998.00"));
    // Nav badge counts items, not lines.
    assert!(body.contains("Cart (2)"));
}

#[tokio::test]
async fn test_add_to_cart_unknown_product_redirects_to_listing() {
    let app = test_app();

    let response = post_form(&app, "/add_to_cart", "product_id=999&quantity=1", None).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/products");

    let cookie = session_cookie(&response).expect("session cookie");
    let body = body_text(get(&app, "/products", Some(&cookie)).await).await;
    assert!(body.contains("Product not found."));
}

#[tokio::test]
async fn test_add_to_cart_malformed_quantity_defaults_to_one() {
    let app = test_app();

    let response = post_form(&app, "/add_to_cart", "product_id=3&quantity=lots", None).await;
    let cookie = session_cookie(&response).expect("session cookie");

    let body = body_text(get(&app, "/cart", Some(&cookie)).await).await;
    assert!(body.contains("Cart (1)"));
    assert!(body.contains("14,900.00"));
}

#[tokio::test]
async fn test_add_to_cart_honors_local_next_target_only() {
    let app = test_app();

    let response = post_form(
        &app,
        "/add_to_cart",
        "product_id=1&quantity=1&next=/products",
        None,
    )
    .await;
    assert_eq!(location(&response), "/products");

    let response = post_form(
        &app,
        "/add_to_cart",
        "product_id=1&quantity=1&next=https://evil.example",
        None,
    )
    .await;
    assert_eq!(location(&response), "/cart");
}

#[tokio::test]
async fn test_update_cart_replaces_and_removes_lines() {
    let app = test_app();

    let response = post_form(&app, "/add_to_cart", "product_id=1&quantity=2", None).await;
    let cookie = session_cookie(&response).expect("session cookie");
    post_form(&app, "/add_to_cart", "product_id=2&quantity=1", Some(&cookie)).await;
    // Drain the add-to-cart flash messages before asserting on cart contents.
    get(&app, "/cart", Some(&cookie)).await;

    // Replace product 1's quantity, remove product 2.
    let response = post_form(
        &app,
        "/update_cart",
        "product_id=1&quantity=3&product_id=2&quantity=0",
        Some(&cookie),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/cart");

    let body = body_text(get(&app, "/cart", Some(&cookie)).await).await;
    assert!(body.contains("Cart (3)"));
    assert!(!body.contains("Mid-Century Dining Chair"));
    assert!(body.contains("149,997.00"));
}

#[tokio::test]
async fn test_remove_and_clear_cart() {
    let app = test_app();

    let response = post_form(&app, "/add_to_cart", "product_id=1&quantity=1", None).await;
    let cookie = session_cookie(&response).expect("session cookie");
    post_form(&app, "/add_to_cart", "product_id=2&quantity=1", Some(&cookie)).await;
    // Drain the add-to-cart flash messages before asserting on cart contents.
    get(&app, "/cart", Some(&cookie)).await;

    let response = get(&app, "/remove_from_cart/1", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let body = body_text(get(&app, "/cart", Some(&cookie)).await).await;
    assert!(!body.contains("Classic Oak Sofa"));
    assert!(body.contains("Mid-Century Dining Chair"));

    get(&app, "/clear_cart", Some(&cookie)).await;
    let body = body_text(get(&app, "/cart", Some(&cookie)).await).await;
    assert!(body.contains("Your cart is empty."));
}

#[tokio::test]
async fn test_checkout_empty_cart_redirects_to_products() {
    let app = test_app();

    let response = get(&app, "/checkout", None).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/products");

    let response = post_form(&app, "/checkout", "street=Moi+Avenue", None).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/products");
}

#[tokio::test]
async fn test_checkout_validation_failures_rerender_form() {
    let app = test_app();

    let response = post_form(&app, "/add_to_cart", "product_id=1&quantity=1", None).await;
    let cookie = session_cookie(&response).expect("session cookie");

    let cases = [
        ("street=&house_number=12&city=Nairobi&payment_method=cash",
         "Please fill street, house number and city."),
        ("street=Moi+Avenue&house_number=12&city=Nairobi&payment_method=barter",
         "Please select a payment method."),
        ("street=Moi+Avenue&house_number=12&city=Nairobi&payment_method=mpesa",
         "Please enter your M-Pesa number."),
        ("street=Moi+Avenue&house_number=12&city=Nairobi&payment_method=credit_card&card_number=4242",
         "Please fill all credit card details."),
    ];

    for (body, expected) in cases {
        let response = post_form(&app, "/checkout", body, Some(&cookie)).await;
        assert_eq!(response.status(), StatusCode::OK);
        let text = body_text(response).await;
        assert!(text.contains(expected), "expected {expected:?}");
        // The form is re-rendered over the untouched cart.
        assert!(text.contains("49,999.00"));
    }

    // No order was created by any failed attempt.
    let response = get(&app, "/order/DEADBEEF", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_full_checkout_flow() {
    let app = test_app();

    // Cart: 2 x 49999.00 + 1 x 7999.00 = 107997.00.
    let response = post_form(&app, "/add_to_cart", "product_id=1&quantity=2", None).await;
    let cookie = session_cookie(&response).expect("session cookie");
    post_form(&app, "/add_to_cart", "product_id=2&quantity=1", Some(&cookie)).await;

    let response = post_form(
        &app,
        "/checkout",
        "street=Moi+Avenue&house_number=12&city=Nairobi&payment_method=cash",
        Some(&cookie),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let confirmation_path = location(&response);
    assert!(confirmation_path.starts_with("/order/"));

    let response = get(&app, &confirmation_path, Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("Order placed successfully."));
    assert!(body.contains("107,997.00"));
    assert!(body.contains("2 x Classic Oak Sofa"));
    assert!(body.contains("1 x Mid-Century Dining Chair"));
    assert!(body.contains("Moi Avenue 12"));
    assert!(body.contains("Cash on delivery"));

    // Checkout cleared the cart.
    let body = body_text(get(&app, "/cart", Some(&cookie)).await).await;
    assert!(body.contains("Your cart is empty."));
    assert!(body.contains("Cart (0)"));
}

#[tokio::test]
async fn test_unknown_order_is_404() {
    let app = test_app();
    let response = get(&app, "/order/DEADBEEF", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_contact_form_validation_and_logging_variant() {
    let app = test_app();

    let response = get(&app, "/contact", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    // Missing message: re-rendered with an error.
    let response = post_form(&app, "/contact", "name=Jane&email=jane%40example.com", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("Please fill all fields."));

    // Bad email shape.
    let response = post_form(
        &app,
        "/contact",
        "name=Jane&email=jane&message=Do+you+deliver%3F",
        None,
    )
    .await;
    let body = body_text(response).await;
    assert!(body.contains("Please enter a valid email address."));

    // Valid submission without a database is logged and redirects back.
    let response = post_form(
        &app,
        "/contact",
        "name=Jane&email=jane%40example.com&message=Do+you+deliver%3F",
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/contact");
}

#[tokio::test]
async fn test_health_endpoints() {
    let app = test_app();
    let response = get(&app, "/health", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let response = get(&app, "/health/ready", None).await;
    assert_eq!(response.status(), StatusCode::OK);
}
