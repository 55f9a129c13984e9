use test_utils::prelude::*;

#[tokio::test]
async fn create_and_get() {
    let app = App::new().await;
    let seed = Seed::new(&app).await;

    let project = seed.create_project(&app, "projeto norte").await;
    let team = seed.create_team(&app, project, "Equipe A").await;
    seed.create_athlete(&app, team).await;

    let res = app
        .get(&format!("/v1/project/{project}"))
        .user(&seed.admin)
        .send()
        .await;
    assert_status!(res, OK);

    let body: Value = res.json().await;
    assert_json_include!(
        actual: body.clone(),
        expected: json!({
            "id": project,
            "name": "Projeto Norte",
            "description": "Programa regional",
            "is_active": true,
            "city": "Campinas",
            "teams": [{
                "id": team,
                "name": "Equipe A",
                "is_active": true,
                "athlete_count": 1,
            }],
        })
    );

    let athletes = body["athletes"].as_array().expect("no athletes");
    assert_eq!(athletes.len(), 1);
    assert_json_include!(
        actual: athletes[0].clone(),
        expected: json!({
            "team_id": team,
            "team": "Equipe A",
            "modality": "Futsal",
            "position": "Ala",
            "category": "Sub-17",
            "level": "Iniciante",
            "status": "Ativo",
        })
    );
}

#[tokio::test]
async fn name_too_short() {
    let app = App::new().await;
    let seed = Seed::new(&app).await;

    let res = app
        .post("/v1/project")
        .user(&seed.admin)
        .json(&json!({
            "name": "Abc",
            "city_id": seed.city,
            "responsible_id": seed.admin.id,
        }))
        .send()
        .await;

    assert_error!(res, error::JSON_VALIDATE_INVALID);
}

#[tokio::test]
async fn duplicate_name() {
    let app = App::new().await;
    let seed = Seed::new(&app).await;

    seed.create_project(&app, "Projeto Norte").await;

    let res = app
        .post("/v1/project")
        .user(&seed.admin)
        .json(&json!({
            "name": "PROJETO NORTE",
            "city_id": seed.city,
            "responsible_id": seed.admin.id,
        }))
        .send()
        .await;

    assert_error!(res, error::DUPLICATE_PROJECT_NAME);
}

#[tokio::test]
async fn missing_city() {
    let app = App::new().await;
    let seed = Seed::new(&app).await;

    let res = app
        .post("/v1/project")
        .user(&seed.admin)
        .json(&json!({
            "name": "Projeto Norte",
            "city_id": Uuid::now_v7(),
            "responsible_id": seed.admin.id,
        }))
        .send()
        .await;

    assert_error!(res, error::INVALID_REFERENCE);
}

#[tokio::test]
async fn list_with_filters() {
    let app = App::new().await;
    let seed = Seed::new(&app).await;

    let north = seed.create_project(&app, "Projeto Norte").await;
    let south = seed.create_project(&app, "Projeto Sul").await;
    seed.create_team(&app, north, "Equipe A").await;

    let res = app
        .patch(&format!("/v1/project/{south}"))
        .user(&seed.admin)
        .json(&json!({ "is_active": false }))
        .send()
        .await;
    assert_status!(res, NO_CONTENT);

    let body: Vec<Value> = app
        .get("/v1/project?q=norte")
        .user(&seed.admin)
        .send()
        .await
        .json()
        .await;
    assert_eq!(body.len(), 1);
    assert_json_include!(
        actual: body[0].clone(),
        expected: json!({
            "id": north,
            "name": "Projeto Norte",
            "city": "Campinas",
            "team_count": 1,
            "athlete_count": 0,
        })
    );

    let body: Vec<Value> = app
        .get("/v1/project?status=inactive")
        .user(&seed.admin)
        .send()
        .await
        .json()
        .await;
    assert_eq!(body.len(), 1);
    assert_eq!(body[0]["id"], json!(south));

    let body: Vec<Value> = app
        .get(&format!("/v1/project?city={}", Uuid::now_v7()))
        .user(&seed.admin)
        .send()
        .await
        .json()
        .await;
    assert!(body.is_empty());
}

#[tokio::test]
async fn search_matches_wildcards_literally() {
    let app = App::new().await;
    let seed = Seed::new(&app).await;

    seed.create_project(&app, "Projeto Norte").await;
    let discounted = seed.create_project(&app, "Bolsa 100% Sub_17").await;

    for (q, expected) in [("_", 1), ("%25", 1), ("sub_1", 1), ("sub%", 0)] {
        let body: Vec<Value> = app
            .get(&format!("/v1/project?q={q}"))
            .user(&seed.admin)
            .send()
            .await
            .json()
            .await;
        assert_eq!(body.len(), expected, "q={q}");

        if expected == 1 {
            assert_eq!(body[0]["id"], json!(discounted));
        }
    }
}

#[tokio::test]
async fn update() {
    let app = App::new().await;
    let seed = Seed::new(&app).await;
    let project = seed.create_project(&app, "Projeto Norte").await;

    let res = app
        .patch(&format!("/v1/project/{project}"))
        .user(&seed.admin)
        .json(&json!({
            "name": "Projeto Leste",
            "description": null,
        }))
        .send()
        .await;
    assert_status!(res, NO_CONTENT);

    let body: Value = app
        .get(&format!("/v1/project/{project}"))
        .user(&seed.admin)
        .send()
        .await
        .json()
        .await;
    assert_eq!(body["name"], "Projeto Leste");
    assert_eq!(body["description"], Value::Null);
    assert_eq!(body["is_active"], true);
}

#[tokio::test]
async fn update_missing() {
    let app = App::new().await;
    let seed = Seed::new(&app).await;

    let res = app
        .patch(&format!("/v1/project/{}", Uuid::now_v7()))
        .user(&seed.admin)
        .json(&json!({ "is_active": false }))
        .send()
        .await;

    assert_error!(res, error::PROJECT_NOT_FOUND);
}

#[tokio::test]
async fn get_missing() {
    let app = App::new().await;
    let seed = Seed::new(&app).await;

    let res = app
        .get(&format!("/v1/project/{}", Uuid::now_v7()))
        .user(&seed.admin)
        .send()
        .await;

    assert_error!(res, error::PROJECT_NOT_FOUND);
}
