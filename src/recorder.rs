//! Audit trail of roster changes.
//!
//! Editing an athlete may move them to another team or change their status.
//! Deciding which of those happened is [`plan`], a pure function over the
//! values before and after the edit. [`record`] then writes the athlete row
//! together with the audit rows the decision calls for. Callers run it
//! inside a transaction and commit afterwards, so a failure anywhere leaves
//! neither a half edited athlete nor an orphan audit row behind.

use chrono::Utc;
use entity::{
    athlete_history::{self, reasons},
    athletes, teams, transfers,
};
use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait, Set};
use uuid::Uuid;

/// Team and status of an athlete as persisted before the edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    pub team_id: Uuid,
    pub status_id: Uuid,
}

impl From<&athletes::Model> for Snapshot {
    fn from(athlete: &athletes::Model) -> Self {
        Self {
            team_id: athlete.team_id,
            status_id: athlete.status_id,
        }
    }
}

/// Team and status requested by the edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Proposal {
    pub team_id: Uuid,
    pub status_id: Uuid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterChange {
    Unchanged,
    StatusChanged {
        status_id: Uuid,
    },
    /// Takes precedence over a simultaneous status change, the new status
    /// travels with the transfer.
    Transferred {
        from_team_id: Uuid,
        to_team_id: Uuid,
        status_id: Uuid,
    },
}

pub fn plan(before: Snapshot, after: Proposal) -> RosterChange {
    if before.team_id != after.team_id {
        RosterChange::Transferred {
            from_team_id: before.team_id,
            to_team_id: after.team_id,
            status_id: after.status_id,
        }
    } else if before.status_id != after.status_id {
        RosterChange::StatusChanged {
            status_id: after.status_id,
        }
    } else {
        RosterChange::Unchanged
    }
}

/// Who requested the edit and why.
#[derive(Debug, Clone)]
pub struct Actor {
    pub user_id: Uuid,
    /// Stored on the transfer, history rows carry a fixed reason.
    pub reason: Option<String>,
}

/// Writes `changes` over `current` and inserts the audit rows for the roster
/// change between them. `current` must be the row as read inside the same
/// transaction, before any update.
pub async fn record<C>(
    conn: &C,
    current: &athletes::Model,
    mut changes: athletes::ActiveModel,
    proposal: Proposal,
    actor: Actor,
) -> Result<(athletes::Model, RosterChange), DbErr>
where
    C: ConnectionTrait,
{
    let change = plan(Snapshot::from(current), proposal);
    let now = Utc::now();

    changes.id = Set(current.id);
    changes.team_id = Set(proposal.team_id);
    changes.status_id = Set(proposal.status_id);
    changes.last_edited = Set(now);

    let athlete = changes.update(conn).await?;

    match change {
        RosterChange::Unchanged => {}
        RosterChange::StatusChanged { status_id } => {
            let project_id = project_of(conn, athlete.team_id).await?;

            insert_history(
                conn,
                &athlete,
                project_id,
                status_id,
                reasons::STATUS_CHANGE,
                actor.user_id,
            )
            .await?;
        }
        RosterChange::Transferred {
            from_team_id,
            to_team_id,
            status_id,
        } => {
            let origin_project_id = project_of(conn, from_team_id).await?;
            let destination_project_id = project_of(conn, to_team_id).await?;

            let transfer = transfers::ActiveModel {
                id: Set(Uuid::now_v7()),
                athlete_id: Set(athlete.id),
                origin_project_id: Set(origin_project_id),
                origin_team_id: Set(from_team_id),
                destination_project_id: Set(destination_project_id),
                destination_team_id: Set(to_team_id),
                reason: Set(actor.reason),
                responsible_id: Set(actor.user_id),
                created_at: Set(now),
            };

            transfers::Entity::insert(transfer)
                .exec_without_returning(conn)
                .await?;

            insert_history(
                conn,
                &athlete,
                destination_project_id,
                status_id,
                reasons::TEAM_TRANSFER,
                actor.user_id,
            )
            .await?;
        }
    }

    debug!(athlete_id = %athlete.id, ?change, "recorded athlete edit");

    Ok((athlete, change))
}

async fn project_of<C: ConnectionTrait>(conn: &C, team_id: Uuid) -> Result<Uuid, DbErr> {
    teams::Entity::find_by_id(team_id)
        .one(conn)
        .await?
        .map(|team| team.project_id)
        .ok_or_else(|| DbErr::RecordNotFound(format!("team {team_id}")))
}

async fn insert_history<C: ConnectionTrait>(
    conn: &C,
    athlete: &athletes::Model,
    project_id: Uuid,
    status_id: Uuid,
    reason: &str,
    responsible_id: Uuid,
) -> Result<(), DbErr> {
    let entry = athlete_history::ActiveModel {
        id: Set(Uuid::now_v7()),
        athlete_id: Set(athlete.id),
        project_id: Set(project_id),
        team_id: Set(athlete.team_id),
        status_id: Set(status_id),
        reason: Set(Some(reason.to_owned())),
        responsible_id: Set(responsible_id),
        created_at: Set(Utc::now()),
    };

    athlete_history::Entity::insert(entry)
        .exec_without_returning(conn)
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids() -> (Uuid, Uuid, Uuid, Uuid) {
        (
            Uuid::now_v7(),
            Uuid::now_v7(),
            Uuid::now_v7(),
            Uuid::now_v7(),
        )
    }

    #[test]
    fn same_values_change_nothing() {
        let (team, status, _, _) = ids();

        let change = plan(
            Snapshot {
                team_id: team,
                status_id: status,
            },
            Proposal {
                team_id: team,
                status_id: status,
            },
        );

        assert_eq!(change, RosterChange::Unchanged);
    }

    #[test]
    fn status_only() {
        let (team, active, suspended, _) = ids();

        let change = plan(
            Snapshot {
                team_id: team,
                status_id: active,
            },
            Proposal {
                team_id: team,
                status_id: suspended,
            },
        );

        assert_eq!(
            change,
            RosterChange::StatusChanged {
                status_id: suspended
            }
        );
    }

    #[test]
    fn team_only() {
        let (x, y, active, _) = ids();

        let change = plan(
            Snapshot {
                team_id: x,
                status_id: active,
            },
            Proposal {
                team_id: y,
                status_id: active,
            },
        );

        assert_eq!(
            change,
            RosterChange::Transferred {
                from_team_id: x,
                to_team_id: y,
                status_id: active,
            }
        );
    }

    #[test]
    fn team_and_status_collapse_into_transfer() {
        let (x, y, active, injured) = ids();

        let change = plan(
            Snapshot {
                team_id: x,
                status_id: active,
            },
            Proposal {
                team_id: y,
                status_id: injured,
            },
        );

        assert_eq!(
            change,
            RosterChange::Transferred {
                from_team_id: x,
                to_team_id: y,
                status_id: injured,
            }
        );
    }

    #[test]
    fn snapshot_is_taken_from_model_fields() {
        let (team, status, _, _) = ids();
        let now = Utc::now();

        let athlete = athletes::Model {
            id: Uuid::now_v7(),
            team_id: team,
            first_name: "ANA".to_owned(),
            last_name: "SOUZA".to_owned(),
            email: "ana@example.com".to_owned(),
            rg: "1234567".to_owned(),
            cpf: "12345678901".to_owned(),
            birth_date: now.date_naive(),
            phone1: "11987654321".to_owned(),
            phone2: None,
            sex_id: Uuid::now_v7(),
            modality_id: Uuid::now_v7(),
            position_id: Uuid::now_v7(),
            category_id: Uuid::now_v7(),
            level_id: Uuid::now_v7(),
            status_id: status,
            created_at: now,
            last_edited: now,
        };

        assert_eq!(
            Snapshot::from(&athlete),
            Snapshot {
                team_id: team,
                status_id: status,
            }
        );
    }
}
