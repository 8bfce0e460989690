//! Shopping-list download endpoint tests

mod common;

use std::sync::Arc;

use actix_web::{http::StatusCode, test};
use serde_json::Value;

use common::{TestContext, UnavailableStorage, bearer, init_app, token_for};
use foodgram_persistence::ShoppingListRow;
use foodgram_server::model::AppState;
use foodgram_server::service::shopping_list::aggregate_shopping_list;

const DOWNLOAD_URI: &str = "/api/recipes/download_shopping_cart";

#[actix_web::test]
async fn test_download_requires_authentication() {
    let ctx = TestContext::new().await;
    let app = init_app!(ctx.state());

    let req = test::TestRequest::get().uri(DOWNLOAD_URI).to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_ne!(
        resp.headers().get("content-type").and_then(|v| v.to_str().ok()),
        Some("application/pdf")
    );

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 10001);
}

#[actix_web::test]
async fn test_download_rejects_invalid_token() {
    let ctx = TestContext::new().await;
    let app = init_app!(ctx.state());

    let req = test::TestRequest::get()
        .uri(DOWNLOAD_URI)
        .insert_header(("Authorization", "Bearer not.a.token"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_download_returns_pdf_attachment() {
    let ctx = TestContext::new().await;
    let user = ctx.user("anna").await;
    let flour = ctx.ingredient("Мука", "г").await;
    let sugar = ctx.ingredient("Сахар", "г").await;
    let pancakes = ctx.recipe(user, "Блины", &[(flour, 200), (sugar, 50)]).await;
    let pie = ctx.recipe(user, "Пирог", &[(flour, 300)]).await;
    ctx.add_to_cart(user, pancakes).await;
    ctx.add_to_cart(user, pie).await;

    let app = init_app!(ctx.state());
    let req = test::TestRequest::get()
        .uri(DOWNLOAD_URI)
        .insert_header(bearer(user))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get("content-type").unwrap(),
        "application/pdf"
    );
    assert_eq!(
        resp.headers().get("content-disposition").unwrap(),
        "attachment; filename=\"shopping_list.pdf\""
    );

    let body = test::read_body(resp).await;
    assert!(body.starts_with(b"%PDF"));
    let document = lopdf::Document::load_mem(&body).unwrap();
    assert_eq!(document.get_pages().len(), 1);

    let text = document.extract_text(&[1]).unwrap();
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    assert_eq!(
        lines,
        vec![
            "Список покупок.",
            "Ингредиент",
            "Кол-во",
            "Ед. измерения",
            "Мука",
            "500",
            "г",
            "Сахар",
            "50",
            "г",
        ]
    );
}

#[actix_web::test]
async fn test_download_accepts_token_scheme() {
    let ctx = TestContext::new().await;
    let user = ctx.user("boris").await;
    let app = init_app!(ctx.state());

    let req = test::TestRequest::get()
        .uri(DOWNLOAD_URI)
        .insert_header(("Authorization", format!("Token {}", token_for(user))))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_empty_cart_still_renders_document() {
    let ctx = TestContext::new().await;
    let user = ctx.user("vera").await;
    let app = init_app!(ctx.state());

    let req = test::TestRequest::get()
        .uri(DOWNLOAD_URI)
        .insert_header(("accessToken", token_for(user)))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    let document = lopdf::Document::load_mem(&body).unwrap();
    assert_eq!(document.get_pages().len(), 1);
}

#[actix_web::test]
async fn test_repeated_downloads_are_identical() {
    let ctx = TestContext::new().await;
    let user = ctx.user("gleb").await;
    let salt = ctx.ingredient("Соль", "г").await;
    let soup = ctx.recipe(user, "Суп", &[(salt, 5)]).await;
    ctx.add_to_cart(user, soup).await;

    let app = init_app!(ctx.state());
    let mut bodies = Vec::new();
    for _ in 0..2 {
        let req = test::TestRequest::get()
            .uri(DOWNLOAD_URI)
            .insert_header(bearer(user))
            .to_request();
        bodies.push(test::call_and_read_body(&app, req).await);
    }

    assert_eq!(bodies[0], bodies[1]);
}

#[actix_web::test]
async fn test_missing_font_is_render_failure() {
    let ctx = TestContext::new().await;
    let user = ctx.user("dina").await;
    let missing = ctx.font_dir.path().join("missing.ttf");
    let app = init_app!(ctx.state_with_font(&missing.to_string_lossy()));

    let req = test::TestRequest::get()
        .uri(DOWNLOAD_URI)
        .insert_header(bearer(user))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 30001);
}

#[actix_web::test]
async fn test_storage_failure_is_aggregation_failure() {
    let ctx = TestContext::new().await;
    let state = Arc::new(AppState::new(
        ctx.configuration_with_font(&ctx.font_path()),
        Arc::new(UnavailableStorage),
    ));
    let app = init_app!(state);

    let req = test::TestRequest::get()
        .uri(DOWNLOAD_URI)
        .insert_header(bearer(1))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 10002);
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .contains("shopping list aggregation failed")
    );
}

#[actix_web::test]
async fn test_aggregation_sums_shared_ingredients() {
    let ctx = TestContext::new().await;
    let user = ctx.user("egor").await;
    let other = ctx.user("fedor").await;
    let flour = ctx.ingredient("Flour", "g").await;
    let sugar = ctx.ingredient("Sugar", "g").await;
    let bread = ctx.recipe(other, "Bread", &[(flour, 200)]).await;
    let cake = ctx.recipe(other, "Cake", &[(flour, 300), (sugar, 100)]).await;
    ctx.add_to_cart(user, bread).await;
    ctx.add_to_cart(user, cake).await;
    ctx.add_to_cart(other, bread).await;

    let rows = aggregate_shopping_list(ctx.service.as_ref(), user)
        .await
        .unwrap();

    assert_eq!(
        rows,
        vec![
            ShoppingListRow::new("Flour", 500, "g"),
            ShoppingListRow::new("Sugar", 100, "g"),
        ]
    );

    let again = aggregate_shopping_list(ctx.service.as_ref(), user)
        .await
        .unwrap();
    assert_eq!(rows, again);
}
