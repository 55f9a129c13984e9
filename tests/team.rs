use test_utils::prelude::*;

#[tokio::test]
async fn create_and_get() {
    let app = App::new().await;
    let seed = Seed::new(&app).await;
    let project = seed.create_project(&app, "Projeto Norte").await;
    let team = seed.create_team(&app, project, "equipe a").await;
    let athlete = seed.create_athlete(&app, team).await;

    let res = app
        .get(&format!("/v1/team/{team}"))
        .user(&seed.admin)
        .send()
        .await;
    assert_status!(res, OK);

    let body: Value = res.json().await;
    assert_json_include!(
        actual: body.clone(),
        expected: json!({
            "id": team,
            "name": "Equipe A",
            "project_id": project,
            "project": "Projeto Norte",
            "lead_id": seed.admin.id,
            "is_active": true,
            "athlete_count": 1,
        })
    );
    assert_eq!(body["athletes"][0]["id"], json!(athlete));
}

#[tokio::test]
async fn list_by_project() {
    let app = App::new().await;
    let seed = Seed::new(&app).await;
    let north = seed.create_project(&app, "Projeto Norte").await;
    let south = seed.create_project(&app, "Projeto Sul").await;
    seed.create_team(&app, north, "Equipe B").await;
    seed.create_team(&app, north, "Equipe A").await;
    seed.create_team(&app, south, "Equipe C").await;

    let body: Vec<Value> = app
        .get(&format!("/v1/team?project={north}"))
        .user(&seed.admin)
        .send()
        .await
        .json()
        .await;
    let names: Vec<&str> = body
        .iter()
        .map(|team| team["name"].as_str().expect("no name"))
        .collect();
    assert_eq!(names, ["Equipe A", "Equipe B"]);

    let body: Vec<Value> = app
        .get("/v1/team")
        .user(&seed.admin)
        .send()
        .await
        .json()
        .await;
    assert_eq!(body.len(), 3);
}

#[tokio::test]
async fn inactive_project() {
    let app = App::new().await;
    let seed = Seed::new(&app).await;
    let project = seed.create_project(&app, "Projeto Norte").await;

    let res = app
        .patch(&format!("/v1/project/{project}"))
        .user(&seed.admin)
        .json(&json!({ "is_active": false }))
        .send()
        .await;
    assert_status!(res, NO_CONTENT);

    let res = app
        .post("/v1/team")
        .user(&seed.admin)
        .json(&json!({
            "name": "Equipe A",
            "project_id": project,
            "lead_id": seed.admin.id,
        }))
        .send()
        .await;
    assert_error!(res, error::PROJECT_INACTIVE);
}

#[tokio::test]
async fn missing_project() {
    let app = App::new().await;
    let seed = Seed::new(&app).await;

    let res = app
        .post("/v1/team")
        .user(&seed.admin)
        .json(&json!({
            "name": "Equipe A",
            "project_id": Uuid::now_v7(),
            "lead_id": seed.admin.id,
        }))
        .send()
        .await;
    assert_error!(res, error::PROJECT_NOT_FOUND);
}

#[tokio::test]
async fn lead_without_role() {
    let app = App::new().await;
    let seed = Seed::new(&app).await;
    let project = seed.create_project(&app, "Projeto Norte").await;
    let user = app.register_user().await;

    let res = app
        .post("/v1/team")
        .user(&seed.admin)
        .json(&json!({
            "name": "Equipe A",
            "project_id": project,
            "lead_id": user.id,
        }))
        .send()
        .await;
    assert_error!(res, error::INVALID_TEAM_LEAD);
}

#[tokio::test]
async fn duplicate_name() {
    let app = App::new().await;
    let seed = Seed::new(&app).await;
    let project = seed.create_project(&app, "Projeto Norte").await;
    seed.create_team(&app, project, "Equipe A").await;

    let res = app
        .post("/v1/team")
        .user(&seed.admin)
        .json(&json!({
            "name": "EQUIPE A",
            "project_id": project,
            "lead_id": seed.admin.id,
        }))
        .send()
        .await;
    assert_error!(res, error::DUPLICATE_TEAM_NAME);
}

#[tokio::test]
async fn update() {
    let app = App::new().await;
    let seed = Seed::new(&app).await;
    let project = seed.create_project(&app, "Projeto Norte").await;
    let team = seed.create_team(&app, project, "Equipe A").await;
    let technician = app.register_technician().await;

    let res = app
        .patch(&format!("/v1/team/{team}"))
        .user(&seed.admin)
        .json(&json!({
            "name": "Equipe Principal",
            "lead_id": technician.id,
            "is_active": false,
        }))
        .send()
        .await;
    assert_status!(res, NO_CONTENT);

    let body: Value = app
        .get(&format!("/v1/team/{team}"))
        .user(&seed.admin)
        .send()
        .await
        .json()
        .await;
    assert_json_include!(
        actual: body,
        expected: json!({
            "name": "Equipe Principal",
            "lead_id": technician.id,
            "is_active": false,
        })
    );
}

#[tokio::test]
async fn update_missing() {
    let app = App::new().await;
    let seed = Seed::new(&app).await;

    let res = app
        .patch(&format!("/v1/team/{}", Uuid::now_v7()))
        .user(&seed.admin)
        .json(&json!({ "is_active": false }))
        .send()
        .await;
    assert_error!(res, error::TEAM_NOT_FOUND);
}
