mod common;

use actix_web::{http::StatusCode, test};
use common::{client::TestClient, test_data, TestContext};
use serde_json::json;
use uuid::Uuid;

#[tokio::test]
async fn test_client_create_requires_restaurant() {
    println!("\n\n[+] Running test: test_client_create_requires_restaurant");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (_user_id, token) = client.create_test_user(None).await;

    println!("[>] Creating a client without owning a restaurant.");
    let req = test::TestRequest::post()
        .uri("/clients")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(test_data::sample_client_body("Bob"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "NO_RESTAURANT");
    println!("[/] Test passed: tenant-less callers cannot create clients.");
}

#[tokio::test]
async fn test_client_create_stamps_callers_restaurant() {
    println!("\n\n[+] Running test: test_client_create_stamps_callers_restaurant");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (user_id, token) = client.create_test_user(None).await;
    let own_restaurant = client.claim_restaurant(user_id, "Mine").await;

    println!("[>] Supplying a foreign restaurant_id in the payload.");
    let foreign = Uuid::new_v4();
    let req = test::TestRequest::post()
        .uri("/clients")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(json!({
            "name": "Bob",
            "phone_number": "555-1",
            "restaurant_id": foreign,
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: serde_json::Value = test::read_body_json(resp).await;
    println!("[<] Stored restaurant_id: {}", body["restaurant_id"]);
    // server-side stamp wins, always
    assert_eq!(body["restaurant_id"], own_restaurant.to_string());
    println!("[/] Test passed: client rows carry the caller's own restaurant.");
}

#[tokio::test]
async fn test_client_cross_tenant_access_masked_as_not_found() {
    println!("\n\n[+] Running test: test_client_cross_tenant_access_masked_as_not_found");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (user_a, token_a) = client.create_test_user(None).await;
    client.claim_restaurant(user_a, "Bistro A").await;
    let (user_b, token_b) = client.create_test_user(None).await;
    client.claim_restaurant(user_b, "Bistro B").await;

    println!("[>] A creates a client.");
    let req = test::TestRequest::post()
        .uri("/clients")
        .insert_header(("Authorization", format!("Bearer {}", token_a)))
        .set_json(test_data::sample_client_body("Bob"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: serde_json::Value = test::read_body_json(resp).await;
    let client_id = body["id"].as_str().unwrap().to_string();

    println!("[>] B fetches, updates and deletes A's client.");
    let req = test::TestRequest::get()
        .uri(&format!("/clients/{}", client_id))
        .insert_header(("Authorization", format!("Bearer {}", token_b)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::put()
        .uri(&format!("/clients/{}", client_id))
        .insert_header(("Authorization", format!("Bearer {}", token_b)))
        .set_json(json!({"name": "Hijacked"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::delete()
        .uri(&format!("/clients/{}", client_id))
        .insert_header(("Authorization", format!("Bearer {}", token_b)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    println!("[>] B's list stays empty, A still sees Bob.");
    let req = test::TestRequest::get()
        .uri("/clients")
        .insert_header(("Authorization", format!("Bearer {}", token_b)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body.as_array().unwrap().len(), 0);

    let req = test::TestRequest::get()
        .uri("/clients")
        .insert_header(("Authorization", format!("Bearer {}", token_a)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["name"], "Bob");
    println!("[/] Test passed: cross-tenant rows look absent.");
}

#[tokio::test]
async fn test_client_update_and_delete_own() {
    println!("\n\n[+] Running test: test_client_update_and_delete_own");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (user_id, token) = client.create_test_user(None).await;
    client.claim_restaurant(user_id, "Bistro").await;

    let req = test::TestRequest::post()
        .uri("/clients")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(test_data::sample_client_body("Bob"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    let client_id = body["id"].as_str().unwrap().to_string();

    println!("[>] Updating phone number only.");
    let req = test::TestRequest::put()
        .uri(&format!("/clients/{}", client_id))
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(json!({"phone_number": "555-9"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["phone_number"], "555-9");
    assert_eq!(body["name"], "Bob");

    println!("[>] Deleting the client.");
    let req = test::TestRequest::delete()
        .uri(&format!("/clients/{}", client_id))
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::get()
        .uri(&format!("/clients/{}", client_id))
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    println!("[/] Test passed: update and delete within own tenant.");
}

#[tokio::test]
async fn test_client_update_null_clears_email() {
    println!("\n\n[+] Running test: test_client_update_null_clears_email");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (user_id, token) = client.create_test_user(None).await;
    client.claim_restaurant(user_id, "Mine").await;

    let req = test::TestRequest::post()
        .uri("/clients")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(json!({
            "name": "Bob",
            "phone_number": "555-1",
            "email": "bob@mail.com",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: serde_json::Value = test::read_body_json(resp).await;
    let id = body["id"].as_str().unwrap().to_string();

    println!("[>] Updating the name only: email must survive.");
    let req = test::TestRequest::put()
        .uri(&format!("/clients/{}", id))
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(json!({"name": "Bobby"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["email"], "bob@mail.com");

    println!("[>] Sending an explicit null: email must clear.");
    let req = test::TestRequest::put()
        .uri(&format!("/clients/{}", id))
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(json!({"email": null}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["email"].is_null());
    println!("[/] Test passed: absent keeps the email, null clears it.");
}
