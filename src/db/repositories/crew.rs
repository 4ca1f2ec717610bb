use chrono::{NaiveDate, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set, TransactionTrait,
};
use tracing::info;

use super::map_insert_error;
use crate::constants::DATE_FORMAT;
use crate::domain::{CrewId, CrewStatus, Passport, RecordError};
use crate::entities::{crew_members, prelude::CrewMembers};
use crate::models::crew::{CrewMember, CrewRegistration, CrewStats};

pub struct CrewRepository {
    conn: DatabaseConnection,
}

impl CrewRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Validates and inserts a new record at the initial stage.
    ///
    /// The unique index on `passport` decides duplicates, so two concurrent
    /// registrations of one passport cannot both commit.
    pub async fn create(&self, registration: &CrewRegistration) -> Result<CrewMember, RecordError> {
        let valid = registration.validate()?;
        let passport = valid.passport.into_inner();
        let now = Utc::now().to_rfc3339();

        let txn = self.conn.begin().await?;

        let model = crew_members::ActiveModel {
            name: Set(valid.name),
            rank: Set(valid.rank),
            passport: Set(passport.clone()),
            status: Set(CrewStatus::INITIAL.value()),
            nationality: Set(valid.nationality),
            date_of_birth: Set(valid.date_of_birth.map(format_date)),
            years_experience: Set(valid.years_experience),
            last_vessel_type: Set(valid.last_vessel_type),
            availability_date: Set(valid.availability_date.map(format_date)),
            created_at: Set(now.clone()),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| map_insert_error(e, || format!("Crew member with passport {passport}")))?;

        txn.commit().await?;

        info!(crew_id = model.id, passport = %model.passport, "Crew member registered");
        CrewMember::try_from(model)
    }

    pub async fn get(&self, id: CrewId) -> Result<Option<CrewMember>, RecordError> {
        CrewMembers::find_by_id(id.value())
            .one(&self.conn)
            .await?
            .map(CrewMember::try_from)
            .transpose()
    }

    /// Malformed input is reported exactly like an unknown passport.
    pub async fn get_by_passport(&self, raw: &str) -> Result<Option<CrewMember>, RecordError> {
        let Some(passport) = Passport::parse(raw) else {
            return Ok(None);
        };

        CrewMembers::find()
            .filter(crew_members::Column::Passport.eq(passport.as_str()))
            .one(&self.conn)
            .await?
            .map(CrewMember::try_from)
            .transpose()
    }

    /// Newest registrations first.
    pub async fn list(&self) -> Result<Vec<CrewMember>, RecordError> {
        CrewMembers::find()
            .order_by_desc(crew_members::Column::Id)
            .all(&self.conn)
            .await?
            .into_iter()
            .map(CrewMember::try_from)
            .collect()
    }

    /// Moves a record one stage forward.
    ///
    /// The increment is a single guarded `UPDATE`, so concurrent calls on the
    /// same id each apply exactly one step until the terminal stage.
    pub async fn advance(&self, id: CrewId) -> Result<CrewMember, RecordError> {
        let now = Utc::now().to_rfc3339();

        let txn = self.conn.begin().await?;

        let result = CrewMembers::update_many()
            .col_expr(
                crew_members::Column::Status,
                Expr::col(crew_members::Column::Status).add(1),
            )
            .col_expr(crew_members::Column::UpdatedAt, Expr::value(now))
            .filter(crew_members::Column::Id.eq(id.value()))
            .filter(crew_members::Column::Status.gte(CrewStatus::INITIAL.value()))
            .filter(crew_members::Column::Status.lt(CrewStatus::TERMINAL.value()))
            .exec(&txn)
            .await?;

        let Some(model) = CrewMembers::find_by_id(id.value()).one(&txn).await? else {
            return Err(RecordError::not_found(format!("Crew member {id}")));
        };

        if result.rows_affected == 0 {
            // Guard skipped the row: either terminal or an out-of-range value.
            return Err(match CrewStatus::try_from(model.status) {
                Ok(_) => RecordError::AlreadyAtMax,
                Err(e) => e,
            });
        }

        let updated = CrewMember::try_from(model)?;
        txn.commit().await?;

        info!(crew_id = %id, status = %updated.status, "Crew member status advanced");
        Ok(updated)
    }

    pub async fn stats(&self) -> Result<CrewStats, RecordError> {
        let rows: Vec<(i32, i64)> = CrewMembers::find()
            .select_only()
            .column(crew_members::Column::Status)
            .column_as(Expr::col(crew_members::Column::Id).count(), "count")
            .group_by(crew_members::Column::Status)
            .into_tuple()
            .all(&self.conn)
            .await?;

        let mut stats = CrewStats::default();
        for (status, count) in rows {
            stats.add(
                CrewStatus::try_from(status)?,
                u64::try_from(count).unwrap_or_default(),
            );
        }

        Ok(stats)
    }
}

fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
