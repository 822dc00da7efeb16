use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

const INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_bookings_user_id ON bookings(user_id)",
    "CREATE INDEX IF NOT EXISTS idx_bookings_lawyer_date ON bookings(lawyer_id, date)",
    // One active booking per lawyer and slot; cancelled rows free the slot.
    "CREATE UNIQUE INDEX IF NOT EXISTS idx_bookings_active_slot \
     ON bookings(lawyer_id, date, start_time) WHERE status <> 'cancelled'",
];

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Weekly availability is stored whole; it is always read and replaced as a unit.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS lawyer_schedules (
            lawyer_id UUID PRIMARY KEY,
            availability JSONB NOT NULL,
            password_hash VARCHAR(255) NULL,
            timezone VARCHAR(64) NOT NULL DEFAULT 'Asia/Ho_Chi_Minh',
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS bookings (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            user_id UUID NOT NULL,
            lawyer_id UUID NOT NULL,
            date DATE NOT NULL,
            start_time VARCHAR(5) NOT NULL,
            end_time VARCHAR(5) NOT NULL,
            price BIGINT NOT NULL,
            booking_type VARCHAR(16) NOT NULL,
            address_meeting TEXT NULL,
            actual_phone VARCHAR(32) NOT NULL,
            documents JSONB NOT NULL DEFAULT '[]',
            note TEXT NULL,
            status VARCHAR(16) NOT NULL DEFAULT 'pending',
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_time_range CHECK (end_time > start_time)
        );
        "#,
    )
    .execute(pool)
    .await?;

    for statement in INDEXES {
        sqlx::query(statement).execute(pool).await?;
    }

    info!("Database schema initialized successfully.");
    Ok(())
}
