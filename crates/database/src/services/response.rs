use crate::entities::responses;
use chrono::{DateTime, Utc};
use models::submission::NewResponse;
use sea_orm::{
    ActiveValue::Set, ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr, EntityTrait,
    Statement, TransactionTrait, sea_query::OnConflict,
};
use serde_json::{Map, Value, json};
use uuid::Uuid;

/// Outcome of persisting one submission
#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    /// A new row was written
    Created {
        id: Uuid,
        submitted_at: DateTime<Utc>,
    },
    /// The response_id was already present; nothing was written
    Duplicate,
}

/// Row returned by the connectivity probe
#[derive(Debug, Clone)]
pub struct ConnectionStatus {
    pub now: DateTime<Utc>,
    pub usr: String,
    pub db: String,
}

pub struct ResponseService;

impl ResponseService {
    /// Persists one validated submission as one row. The id and the stored
    /// timestamp are assigned here, not taken from the client.
    pub async fn save_response(
        db: &DatabaseConnection,
        submission: NewResponse,
    ) -> Result<SaveOutcome, DbErr> {
        let txn = db.begin().await?;

        let id = Uuid::new_v4();
        let submitted_at = Utc::now();

        let row = responses::ActiveModel {
            id: Set(id),
            response_id: Set(submission.response_id),
            perfil_2050: Set(submission.perfil_2050),
            user_agent: Set(submission.user_agent),
            data: Set(Value::Object(submission.data)),
            submitted_at: Set(submitted_at),
        };

        let inserted = responses::Entity::insert(row)
            .on_conflict(
                OnConflict::column(responses::Column::ResponseId)
                    .do_nothing()
                    .to_owned(),
            )
            .exec(&txn)
            .await;

        match inserted {
            Ok(_) => {
                txn.commit().await?;
                Ok(SaveOutcome::Created { id, submitted_at })
            }
            // A conflicting response_id inserts zero rows, which SeaORM
            // surfaces as RecordNotInserted. Resubmission is not an error.
            Err(DbErr::RecordNotInserted) => {
                txn.commit().await?;
                Ok(SaveOutcome::Duplicate)
            }
            Err(err) => Err(err),
        }
    }

    /// Runs a trivial read query to confirm the database is reachable
    pub async fn check_connection(db: &DatabaseConnection) -> Result<ConnectionStatus, DbErr> {
        let probe = Statement::from_string(
            DatabaseBackend::Postgres,
            "SELECT now() AS now, current_user::text AS usr, current_database()::text AS db",
        );

        let row = db.query_one(probe).await?.ok_or_else(|| {
            DbErr::RecordNotFound("connectivity probe returned no row".to_owned())
        })?;

        Ok(ConnectionStatus {
            now: row.try_get("", "now")?,
            usr: row.try_get("", "usr")?,
            db: row.try_get("", "db")?,
        })
    }

    /// Writes one canned row through the regular insert path, for manual
    /// testing of the database wiring
    pub async fn insert_probe_row(db: &DatabaseConnection) -> Result<Uuid, DbErr> {
        let mut data = Map::new();
        data.insert("source".to_owned(), json!("debug-insert"));

        let submission = NewResponse {
            // Fresh suffix so repeated probes never hit the unique constraint
            response_id: format!("debug-{}", Uuid::new_v4()),
            perfil_2050: None,
            user_agent: Some("debug".to_owned()),
            data,
        };

        match Self::save_response(db, submission).await? {
            SaveOutcome::Created { id, .. } => Ok(id),
            SaveOutcome::Duplicate => Err(DbErr::Custom(
                "debug insert collided with an existing response_id".to_owned(),
            )),
        }
    }
}
