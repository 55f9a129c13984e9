use crate::{created_id, App, User};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Lookup rows every athlete needs, created through the admin endpoints.
#[derive(Debug, Clone)]
pub struct Seed {
    pub admin: User,
    pub active: Uuid,
    pub injured: Uuid,
    pub suspended: Uuid,
    pub sex: Uuid,
    pub modality: Uuid,
    pub position: Uuid,
    pub category: Uuid,
    pub level: Uuid,
    pub state: Uuid,
    pub city: Uuid,
}

static COUNTER: AtomicU64 = AtomicU64::new(0);

fn next() -> u64 {
    COUNTER.fetch_add(1, Ordering::Relaxed)
}

impl Seed {
    pub async fn new(app: &App) -> Self {
        let admin = app.register_admin().await;

        let lookup = |kind: &'static str, name: &'static str| {
            let app = app.clone();
            let admin = admin.clone();

            async move {
                created_id(
                    app.post(&format!("/v1/lookup/{kind}"))
                        .user(&admin)
                        .json(&json!({ "name": name }))
                        .send()
                        .await,
                )
                .await
            }
        };

        let active = lookup("status", "Ativo").await;
        let injured = lookup("status", "Lesionado").await;
        let suspended = lookup("status", "Suspenso").await;
        let sex = lookup("sex", "Feminino").await;
        let modality = lookup("modality", "Futsal").await;
        let position = lookup("position", "Ala").await;
        let category = lookup("category", "Sub-17").await;
        let level = lookup("level", "Iniciante").await;

        let state = created_id(
            app.post("/v1/lookup/state")
                .user(&admin)
                .json(&json!({ "name": "São Paulo", "abbreviation": "SP" }))
                .send()
                .await,
        )
        .await;

        let city = created_id(
            app.post("/v1/lookup/city")
                .user(&admin)
                .json(&json!({ "name": "Campinas", "state_id": state }))
                .send()
                .await,
        )
        .await;

        Seed {
            admin,
            active,
            injured,
            suspended,
            sex,
            modality,
            position,
            category,
            level,
            state,
            city,
        }
    }

    pub async fn create_project(&self, app: &App, name: &str) -> Uuid {
        created_id(
            app.post("/v1/project")
                .user(&self.admin)
                .json(&json!({
                    "name": name,
                    "description": "Programa regional",
                    "city_id": self.city,
                    "responsible_id": self.admin.id,
                }))
                .send()
                .await,
        )
        .await
    }

    pub async fn create_team(&self, app: &App, project: Uuid, name: &str) -> Uuid {
        created_id(
            app.post("/v1/team")
                .user(&self.admin)
                .json(&json!({
                    "name": name,
                    "project_id": project,
                    "lead_id": self.admin.id,
                }))
                .send()
                .await,
        )
        .await
    }

    /// Body of a valid athlete creation request, unique per call.
    pub fn athlete_body(&self, team: Uuid) -> Value {
        let n = next();

        json!({
            "team_id": team,
            "first_name": "Ana",
            "last_name": format!("Souza {n}"),
            "email": format!("ana-{n}@test.test"),
            "birth_date": "2008-05-17",
            "phone1": "(11) 98765-4321",
            "rg": format!("{:09}", 100_000_000 + n),
            "cpf": format!("{:011}", 10_000_000_000 + n),
            "sex_id": self.sex,
            "modality_id": self.modality,
            "position_id": self.position,
            "category_id": self.category,
            "level_id": self.level,
            "status_id": self.active,
        })
    }

    pub async fn create_athlete(&self, app: &App, team: Uuid) -> Uuid {
        created_id(
            app.post("/v1/athlete")
                .user(&self.admin)
                .json(&self.athlete_body(team))
                .send()
                .await,
        )
        .await
    }
}
