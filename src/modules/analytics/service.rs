use schoolpro_core::AppError;
use schoolpro_models::analytics::SchoolCounts;
use schoolpro_models::ids::SchoolId;
use schoolpro_models::roles::UserRole;
use sqlx::PgPool;
use tracing::{debug, instrument};

pub struct AnalyticsService;

impl AnalyticsService {
    /// People are counted through their user accounts, classes directly.
    #[instrument(skip(db), fields(school.id = %school_id))]
    pub async fn school_counts(db: &PgPool, school_id: SchoolId) -> Result<SchoolCounts, AppError> {
        let students = Self::count_users(db, school_id, UserRole::Student).await?;
        let teachers = Self::count_users(db, school_id, UserRole::Teacher).await?;
        let parents = Self::count_users(db, school_id, UserRole::Parent).await?;

        let classes =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM classes WHERE school_id = $1")
                .bind(school_id)
                .fetch_one(db)
                .await?;

        let counts = SchoolCounts {
            students,
            teachers,
            parents,
            classes,
        };
        debug!(?counts, "School counts computed");

        Ok(counts)
    }

    async fn count_users(
        db: &PgPool,
        school_id: SchoolId,
        role: UserRole,
    ) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM users WHERE school_id = $1 AND role = $2",
        )
        .bind(school_id)
        .bind(role)
        .fetch_one(db)
        .await?;

        Ok(count)
    }
}
