use test_utils::prelude::*;

#[tokio::test]
async fn create_and_list() {
    let app = App::new().await;
    let admin = app.register_admin().await;

    for name in ["  Suspenso ", "ATIVO", "Lesionado"] {
        let res = app
            .post("/v1/lookup/status")
            .user(&admin)
            .json(&json!({ "name": name }))
            .send()
            .await;
        assert_status!(res, CREATED);
    }

    let technician = app.register_technician().await;
    let res = app.get("/v1/lookup/status").user(&technician).send().await;
    assert_status!(res, OK);

    let body: Vec<Value> = res.json().await;
    let names: Vec<&str> = body
        .iter()
        .map(|entry| entry["name"].as_str().expect("no name"))
        .collect();

    assert_eq!(names, ["ativo", "lesionado", "suspenso"]);
}

#[tokio::test]
async fn duplicate_name_ignores_case() {
    let app = App::new().await;
    let admin = app.register_admin().await;

    let res = app
        .post("/v1/lookup/modality")
        .user(&admin)
        .json(&json!({ "name": "Futsal" }))
        .send()
        .await;
    assert_status!(res, CREATED);

    let res = app
        .post("/v1/lookup/modality")
        .user(&admin)
        .json(&json!({ "name": "FUTSAL" }))
        .send()
        .await;
    assert_error!(res, error::DUPLICATE_LOOKUP);
}

#[tokio::test]
async fn rename() {
    let app = App::new().await;
    let admin = app.register_admin().await;

    let id = created_id(
        app.post("/v1/lookup/level")
            .user(&admin)
            .json(&json!({ "name": "Iniciante" }))
            .send()
            .await,
    )
    .await;

    let res = app
        .patch(&format!("/v1/lookup/level/{id}"))
        .user(&admin)
        .json(&json!({ "name": "Avançado" }))
        .send()
        .await;
    assert_status!(res, NO_CONTENT);

    let body: Vec<Value> = app
        .get("/v1/lookup/level")
        .user(&admin)
        .send()
        .await
        .json()
        .await;
    assert_json_eq!(body, json!([{ "id": id, "name": "avançado" }]));
}

#[tokio::test]
async fn rename_missing() {
    let app = App::new().await;
    let admin = app.register_admin().await;

    let res = app
        .patch(&format!("/v1/lookup/sex/{}", Uuid::now_v7()))
        .user(&admin)
        .json(&json!({ "name": "Masculino" }))
        .send()
        .await;
    assert_error!(res, error::LOOKUP_NOT_FOUND);
}

#[tokio::test]
async fn delete_unused() {
    let app = App::new().await;
    let admin = app.register_admin().await;

    let id = created_id(
        app.post("/v1/lookup/position")
            .user(&admin)
            .json(&json!({ "name": "Goleiro" }))
            .send()
            .await,
    )
    .await;

    let res = app
        .delete(&format!("/v1/lookup/position/{id}"))
        .user(&admin)
        .send()
        .await;
    assert_status!(res, NO_CONTENT);

    let res = app
        .delete(&format!("/v1/lookup/position/{id}"))
        .user(&admin)
        .send()
        .await;
    assert_error!(res, error::LOOKUP_NOT_FOUND);
}

#[tokio::test]
async fn delete_in_use() {
    let app = App::new().await;
    let seed = Seed::new(&app).await;
    let project = seed.create_project(&app, "Projeto Norte").await;
    let team = seed.create_team(&app, project, "Equipe A").await;
    seed.create_athlete(&app, team).await;

    let res = app
        .delete(&format!("/v1/lookup/category/{}", seed.category))
        .user(&seed.admin)
        .send()
        .await;
    assert_error!(res, error::LOOKUP_IN_USE);
}

#[tokio::test]
async fn delete_state_with_cities() {
    let app = App::new().await;
    let seed = Seed::new(&app).await;

    let res = app
        .delete(&format!("/v1/lookup/state/{}", seed.state))
        .user(&seed.admin)
        .send()
        .await;
    assert_error!(res, error::LOOKUP_IN_USE);
}

#[tokio::test]
async fn delete_city_of_project() {
    let app = App::new().await;
    let seed = Seed::new(&app).await;
    seed.create_project(&app, "Projeto Norte").await;

    let res = app
        .delete(&format!("/v1/lookup/city/{}", seed.city))
        .user(&seed.admin)
        .send()
        .await;
    assert_error!(res, error::LOOKUP_IN_USE);
}

#[tokio::test]
async fn delete_unused_city() {
    let app = App::new().await;
    let seed = Seed::new(&app).await;

    let city = created_id(
        app.post("/v1/lookup/city")
            .user(&seed.admin)
            .json(&json!({ "name": "Limeira", "state_id": seed.state }))
            .send()
            .await,
    )
    .await;

    let res = app
        .delete(&format!("/v1/lookup/city/{city}"))
        .user(&seed.admin)
        .send()
        .await;
    assert_status!(res, NO_CONTENT);
}

#[tokio::test]
async fn cities_are_labelled_with_their_state() {
    let app = App::new().await;
    let seed = Seed::new(&app).await;

    let res = app
        .post("/v1/lookup/city")
        .user(&seed.admin)
        .json(&json!({ "name": "araraquara", "state_id": seed.state }))
        .send()
        .await;
    assert_status!(res, CREATED);

    let body: Vec<Value> = app
        .get("/v1/lookup/city")
        .user(&seed.admin)
        .send()
        .await
        .json()
        .await;
    let labels: Vec<&str> = body
        .iter()
        .map(|city| city["label"].as_str().expect("no label"))
        .collect();

    assert_eq!(labels, ["Araraquara - SP", "Campinas - SP"]);
}

#[tokio::test]
async fn city_of_missing_state() {
    let app = App::new().await;
    let admin = app.register_admin().await;

    let res = app
        .post("/v1/lookup/city")
        .user(&admin)
        .json(&json!({ "name": "Campinas", "state_id": Uuid::now_v7() }))
        .send()
        .await;
    assert_error!(res, error::INVALID_REFERENCE);
}
