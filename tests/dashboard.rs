use test_utils::prelude::*;

#[tokio::test]
async fn counts_and_latest_transfers() {
    let app = App::new().await;
    let seed = Seed::new(&app).await;
    let north = seed.create_project(&app, "Projeto Norte").await;
    let south = seed.create_project(&app, "Projeto Sul").await;
    let x = seed.create_team(&app, north, "Equipe X").await;
    let y = seed.create_team(&app, south, "Equipe Y").await;

    let first = seed.create_athlete(&app, x).await;
    let second = seed.create_athlete(&app, x).await;
    seed.create_athlete(&app, y).await;

    let res = app
        .patch(&format!("/v1/athlete/{first}"))
        .user(&seed.admin)
        .json(&json!({ "team_id": y, "status_id": seed.injured }))
        .send()
        .await;
    assert_status!(res, NO_CONTENT);

    let res = app
        .patch(&format!("/v1/athlete/{second}"))
        .user(&seed.admin)
        .json(&json!({ "status_id": seed.suspended }))
        .send()
        .await;
    assert_status!(res, NO_CONTENT);

    let res = app
        .patch(&format!("/v1/project/{south}"))
        .user(&seed.admin)
        .json(&json!({ "is_active": false }))
        .send()
        .await;
    assert_status!(res, NO_CONTENT);

    let user = app.register_user().await;
    let res = app.get("/v1/dashboard").user(&user).send().await;
    assert_status!(res, OK);

    let body: Value = res.json().await;
    assert_json_include!(
        actual: body.clone(),
        expected: json!({
            "active_projects": 1,
            "active_teams": 2,
            "athletes": 3,
            "statuses": {
                "active": 1,
                "injured": 1,
                "suspended": 1,
            },
            "latest_transfers": [{
                "athlete_id": first,
                "origin_team": "Equipe X",
                "destination_team": "Equipe Y",
                "destination_project": "Projeto Sul",
            }],
        })
    );

    let projects = body["projects"].as_array().expect("no projects");
    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0]["athlete_count"], 1);
    assert_eq!(projects[1]["athlete_count"], 2);
}

#[tokio::test]
async fn missing_statuses_count_as_zero() {
    let app = App::new().await;
    let user = app.register_user().await;

    let body: Value = app.get("/v1/dashboard").user(&user).send().await.json().await;

    assert_json_eq!(
        body,
        json!({
            "active_projects": 0,
            "active_teams": 0,
            "athletes": 0,
            "statuses": {
                "active": 0,
                "injured": 0,
                "suspended": 0,
            },
            "latest_transfers": [],
            "projects": [],
        })
    );
}

#[tokio::test]
async fn project_table_is_filtered() {
    let app = App::new().await;
    let seed = Seed::new(&app).await;
    seed.create_project(&app, "Projeto Norte").await;
    seed.create_project(&app, "Projeto Sul").await;

    let body: Value = app
        .get("/v1/dashboard?q=sul")
        .user(&seed.admin)
        .send()
        .await
        .json()
        .await;

    let projects = body["projects"].as_array().expect("no projects");
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0]["name"], "Projeto Sul");
}

#[tokio::test]
async fn requires_login() {
    let app = App::new().await;

    let res = app.get("/v1/dashboard").send().await;
    assert_error!(res, error::COULD_NOT_GET_CLAIMS);
}
