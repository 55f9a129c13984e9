use test_utils::prelude::*;

async fn setup() -> (App, Seed, Uuid) {
    let app = App::new().await;
    let seed = Seed::new(&app).await;
    let project = seed.create_project(&app, "Projeto Norte").await;
    let team = seed.create_team(&app, project, "Equipe A").await;

    (app, seed, team)
}

#[tokio::test]
async fn create_and_get() {
    let (app, seed, team) = setup().await;

    let mut body = seed.athlete_body(team);
    body["first_name"] = json!("joão");
    body["last_name"] = json!("de souza");
    body["email"] = json!("Joao@Example.com");
    body["rg"] = json!("12.345.678-90");
    body["cpf"] = json!("123.456.789-01");
    body["phone2"] = json!("1133334444");

    let id = created_id(app.post("/v1/athlete").user(&seed.admin).json(&body).send().await).await;

    let res = app
        .get(&format!("/v1/athlete/{id}"))
        .user(&seed.admin)
        .send()
        .await;
    assert_status!(res, OK);

    let athlete: Value = res.json().await;
    assert_json_include!(
        actual: athlete,
        expected: json!({
            "id": id,
            "first_name": "João",
            "last_name": "De Souza",
            "email": "joao@example.com",
            "birth_date": "17/05/2008",
            "phone1": "(11) 98765-4321",
            "phone2": "(11) 3333-4444",
            "rg": "1234567890-",
            "cpf": "123.456.789-01",
            "team": { "id": team, "name": "Equipe A" },
            "project": { "name": "Projeto Norte" },
            "sex": { "id": seed.sex, "name": "Feminino" },
            "status": { "id": seed.active, "name": "Ativo" },
            "address": null,
            "history": [],
        })
    );
}

#[tokio::test]
async fn invalid_cpf() {
    let (app, seed, team) = setup().await;

    let mut body = seed.athlete_body(team);
    body["cpf"] = json!("123.456.789-0");

    let res = app.post("/v1/athlete").user(&seed.admin).json(&body).send().await;
    assert_error!(res, error::JSON_VALIDATE_INVALID);
}

#[tokio::test]
async fn duplicate_cpf() {
    let (app, seed, team) = setup().await;

    let first = seed.athlete_body(team);
    let res = app.post("/v1/athlete").user(&seed.admin).json(&first).send().await;
    assert_status!(res, CREATED);

    let mut second = seed.athlete_body(team);
    second["cpf"] = first["cpf"].clone();

    let res = app.post("/v1/athlete").user(&seed.admin).json(&second).send().await;
    assert_error!(res, error::DUPLICATE_ATHLETE);
}

#[tokio::test]
async fn duplicate_email_on_update() {
    let (app, seed, team) = setup().await;

    let first = seed.athlete_body(team);
    created_id(app.post("/v1/athlete").user(&seed.admin).json(&first).send().await).await;
    let second = seed.create_athlete(&app, team).await;

    let res = app
        .patch(&format!("/v1/athlete/{second}"))
        .user(&seed.admin)
        .json(&json!({ "email": first["email"] }))
        .send()
        .await;
    assert_error!(res, error::DUPLICATE_ATHLETE);
}

#[tokio::test]
async fn missing_team() {
    let (app, seed, _) = setup().await;

    let res = app
        .post("/v1/athlete")
        .user(&seed.admin)
        .json(&seed.athlete_body(Uuid::now_v7()))
        .send()
        .await;
    assert_error!(res, error::INVALID_REFERENCE);
}

#[tokio::test]
async fn get_missing() {
    let (app, seed, _) = setup().await;

    let res = app
        .get(&format!("/v1/athlete/{}", Uuid::now_v7()))
        .user(&seed.admin)
        .send()
        .await;
    assert_error!(res, error::ATHLETE_NOT_FOUND);
}

#[tokio::test]
async fn update_missing() {
    let (app, seed, _) = setup().await;

    let res = app
        .patch(&format!("/v1/athlete/{}", Uuid::now_v7()))
        .user(&seed.admin)
        .json(&json!({ "first_name": "Ana" }))
        .send()
        .await;
    assert_error!(res, error::ATHLETE_NOT_FOUND);
}

#[tokio::test]
async fn update_to_missing_status_fails() {
    let (app, seed, team) = setup().await;
    let athlete = seed.create_athlete(&app, team).await;

    let res = app
        .patch(&format!("/v1/athlete/{athlete}"))
        .user(&seed.admin)
        .json(&json!({ "status_id": Uuid::now_v7() }))
        .send()
        .await;
    assert_error!(res, error::ATHLETE_UPDATE_FAILED);

    let body: Value = app
        .get(&format!("/v1/athlete/{athlete}"))
        .user(&seed.admin)
        .send()
        .await
        .json()
        .await;
    assert_eq!(body["status"]["id"], json!(seed.active));
    assert_eq!(body["history"], json!([]));
}

#[tokio::test]
async fn address() {
    let (app, seed, team) = setup().await;
    let athlete = seed.create_athlete(&app, team).await;
    let path = format!("/v1/athlete/{athlete}/address");

    let res = app
        .patch(&path)
        .user(&seed.admin)
        .json(&json!({ "number": "10" }))
        .send()
        .await;
    assert_error!(res, error::ADDRESS_NOT_FOUND);

    let address = json!({
        "street": "rua das flores",
        "number": "s/n",
        "district": "centro",
        "city_id": seed.city,
        "cep": "13010-100",
    });

    let res = app.post(&path).user(&seed.admin).json(&address).send().await;
    assert_status!(res, CREATED);

    let res = app.post(&path).user(&seed.admin).json(&address).send().await;
    assert_error!(res, error::ADDRESS_ALREADY_EXISTS);

    let res = app
        .patch(&path)
        .user(&seed.admin)
        .json(&json!({ "number": "120", "complement": "apto 3" }))
        .send()
        .await;
    assert_status!(res, NO_CONTENT);

    let body: Value = app
        .get(&format!("/v1/athlete/{athlete}"))
        .user(&seed.admin)
        .send()
        .await
        .json()
        .await;
    assert_json_eq!(
        body["address"],
        json!({
            "street": "Rua Das Flores",
            "number": "120",
            "complement": "Apto 3",
            "district": "Centro",
            "city_id": seed.city,
            "city": "Campinas - SP",
            "cep": "13010-100",
        })
    );
}

#[tokio::test]
async fn address_with_invalid_cep() {
    let (app, seed, team) = setup().await;
    let athlete = seed.create_athlete(&app, team).await;

    let res = app
        .post(&format!("/v1/athlete/{athlete}/address"))
        .user(&seed.admin)
        .json(&json!({
            "street": "Rua das Flores",
            "number": "12",
            "district": "Centro",
            "city_id": seed.city,
            "cep": "1301-010",
        }))
        .send()
        .await;
    assert_error!(res, error::JSON_VALIDATE_INVALID);
}

#[tokio::test]
async fn address_of_missing_athlete() {
    let (app, seed, _) = setup().await;

    let res = app
        .post(&format!("/v1/athlete/{}/address", Uuid::now_v7()))
        .user(&seed.admin)
        .json(&json!({
            "street": "Rua das Flores",
            "number": "12",
            "district": "Centro",
            "city_id": seed.city,
            "cep": "13010100",
        }))
        .send()
        .await;
    assert_error!(res, error::ATHLETE_NOT_FOUND);
}
