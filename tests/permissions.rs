use test_utils::prelude::*;

#[tokio::test]
async fn user_without_role_cannot_create_project() {
    let app = App::new().await;
    let seed = Seed::new(&app).await;
    let user = app.register_user().await;

    let res = app
        .post("/v1/project")
        .user(&user)
        .json(&json!({
            "name": "Projeto Norte",
            "city_id": seed.city,
            "responsible_id": user.id,
        }))
        .send()
        .await;

    assert_error!(res, error::NOT_ENOUGH_PERMISSIONS);
}

#[tokio::test]
async fn technician_cannot_manage_projects() {
    let app = App::new().await;
    let seed = Seed::new(&app).await;
    let technician = app.register_technician().await;

    let res = app
        .post("/v1/project")
        .user(&technician)
        .json(&json!({
            "name": "Projeto Norte",
            "city_id": seed.city,
            "responsible_id": technician.id,
        }))
        .send()
        .await;

    assert_error!(res, error::NOT_ENOUGH_PERMISSIONS);
}

#[tokio::test]
async fn coordinator_can_manage_projects() {
    let app = App::new().await;
    let seed = Seed::new(&app).await;
    let coordinator = app.register_coordinator().await;

    let res = app
        .post("/v1/project")
        .user(&coordinator)
        .json(&json!({
            "name": "Projeto Norte",
            "city_id": seed.city,
            "responsible_id": coordinator.id,
        }))
        .send()
        .await;

    assert_status!(res, CREATED);
}

#[tokio::test]
async fn technician_can_edit_athletes() {
    let app = App::new().await;
    let seed = Seed::new(&app).await;
    let project = seed.create_project(&app, "Projeto Norte").await;
    let team = seed.create_team(&app, project, "Equipe A").await;
    let technician = app.register_technician().await;

    let res = app
        .post("/v1/athlete")
        .user(&technician)
        .json(&seed.athlete_body(team))
        .send()
        .await;
    let athlete = created_id(res).await;

    let res = app
        .patch(&format!("/v1/athlete/{athlete}"))
        .user(&technician)
        .json(&json!({ "first_name": "Joana" }))
        .send()
        .await;

    assert_status!(res, NO_CONTENT);
}

#[tokio::test]
async fn user_without_role_cannot_see_athletes() {
    let app = App::new().await;
    let seed = Seed::new(&app).await;
    let project = seed.create_project(&app, "Projeto Norte").await;
    let team = seed.create_team(&app, project, "Equipe A").await;
    let athlete = seed.create_athlete(&app, team).await;
    let user = app.register_user().await;

    let res = app
        .get(&format!("/v1/athlete/{athlete}"))
        .user(&user)
        .send()
        .await;

    assert_error!(res, error::NOT_ENOUGH_PERMISSIONS);
}

#[tokio::test]
async fn admin_routes_need_admin() {
    let app = App::new().await;
    let coordinator = app.register_coordinator().await;

    for path in ["/v1/admin/user", "/v1/admin/transfer", "/v1/admin/history"] {
        let res = app.get(path).user(&coordinator).send().await;
        assert_error!(res, error::NOT_ENOUGH_PERMISSIONS);
    }
}

#[tokio::test]
async fn lookups_are_managed_by_admins() {
    let app = App::new().await;
    let coordinator = app.register_coordinator().await;

    let res = app
        .post("/v1/lookup/status")
        .user(&coordinator)
        .json(&json!({ "name": "ativo" }))
        .send()
        .await;

    assert_error!(res, error::NOT_ENOUGH_PERMISSIONS);
}

#[tokio::test]
async fn gated_route_without_token() {
    let app = App::new().await;

    let res = app.get("/v1/admin/user").send().await;
    assert_error!(res, error::NOT_ENOUGH_PERMISSIONS);
}
