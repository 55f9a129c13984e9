use test_utils::prelude::*;

#[tokio::test]
async fn list_users() {
    let app = App::new().await;
    let admin = app.register_admin().await;
    let user = app.register_user().await;

    let body: Vec<Value> = app
        .get("/v1/admin/user")
        .user(&admin)
        .send()
        .await
        .json()
        .await;

    assert_eq!(body.len(), 2);

    let listed = body
        .iter()
        .find(|entry| entry["id"] == json!(user.id))
        .expect("user not listed");
    assert_eq!(listed["email"], user.email.as_str());
    assert_eq!(listed["roles"], json!([]));
}

#[tokio::test]
async fn grant_roles() {
    let app = App::new().await;
    let admin = app.register_admin().await;
    let user = app.register_user().await;

    let res = app
        .patch(&format!("/v1/admin/user/{}", user.id))
        .user(&admin)
        .json(&json!({ "is_coord": true, "is_tecnico": true }))
        .send()
        .await;
    assert_status!(res, NO_CONTENT);

    let me: Value = app.get("/v1/me").user(&user).send().await.json().await;
    assert_eq!(me["roles"], json!(["coordinator", "technician"]));

    let res = app
        .patch(&format!("/v1/admin/user/{}", user.id))
        .user(&admin)
        .json(&json!({ "is_coord": false }))
        .send()
        .await;
    assert_status!(res, NO_CONTENT);

    let me: Value = app.get("/v1/me").user(&user).send().await.json().await;
    assert_eq!(me["roles"], json!(["technician"]));
}

#[tokio::test]
async fn grant_roles_to_missing_user() {
    let app = App::new().await;
    let admin = app.register_admin().await;

    let res = app
        .patch(&format!("/v1/admin/user/{}", Uuid::now_v7()))
        .user(&admin)
        .json(&json!({ "is_admin": true }))
        .send()
        .await;
    assert_error!(res, error::USER_NOT_FOUND);
}

#[tokio::test]
async fn audit_listings() {
    let app = App::new().await;
    let seed = Seed::new(&app).await;
    let north = seed.create_project(&app, "Projeto Norte").await;
    let x = seed.create_team(&app, north, "Equipe X").await;
    let y = seed.create_team(&app, north, "Equipe Y").await;
    let first = seed.create_athlete(&app, x).await;
    let second = seed.create_athlete(&app, x).await;

    for (athlete, body) in [
        (first, json!({ "team_id": y })),
        (second, json!({ "status_id": seed.injured })),
        (first, json!({ "status_id": seed.suspended })),
    ] {
        let res = app
            .patch(&format!("/v1/athlete/{athlete}"))
            .user(&seed.admin)
            .json(&body)
            .send()
            .await;
        assert_status!(res, NO_CONTENT);
    }

    let transfers: Vec<Value> = app
        .get("/v1/admin/transfer")
        .user(&seed.admin)
        .send()
        .await
        .json()
        .await;
    assert_eq!(transfers.len(), 1);
    assert_eq!(transfers[0]["athlete_id"], json!(first));

    let history: Vec<Value> = app
        .get("/v1/admin/history")
        .user(&seed.admin)
        .send()
        .await
        .json()
        .await;
    let statuses: Vec<&str> = history
        .iter()
        .map(|entry| entry["status"].as_str().unwrap())
        .collect();
    assert_eq!(statuses, ["Suspenso", "Lesionado", "Ativo"]);

    let history: Vec<Value> = app
        .get("/v1/admin/history?limit=1&offset=1")
        .user(&seed.admin)
        .send()
        .await
        .json()
        .await;
    assert_eq!(history.len(), 1);
    assert_eq!(history[0]["athlete_id"], json!(second));
}

#[tokio::test]
async fn audit_rows_cannot_be_written() {
    let app = App::new().await;
    let admin = app.register_admin().await;

    let res = app
        .post("/v1/admin/transfer")
        .user(&admin)
        .json(&json!({}))
        .send()
        .await;
    assert_status!(res, METHOD_NOT_ALLOWED);

    let res = app
        .delete(&format!("/v1/admin/history/{}", Uuid::now_v7()))
        .user(&admin)
        .send()
        .await;
    assert_status!(res, NOT_FOUND);
}
