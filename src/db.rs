use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};

/// Saved wedding plan
/// Stored as an opaque document: selections, budget and timestamps are kept exactly as sent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeddingPlan {
    /// Stable identity - generated on first save when absent
    #[serde(default)]
    pub plan_id: Option<String>,

    pub guest_count: i64,

    /// Client-computed budget, stored as-is
    #[serde(default)]
    pub total_budget: Option<i64>,

    #[serde(default)]
    pub venue: Option<serde_json::Value>,

    #[serde(default)]
    pub cuisine: Option<Vec<serde_json::Value>>,

    #[serde(default)]
    pub services: Option<Vec<serde_json::Value>>,

    // ========================================================================
    // TIME MODEL
    // Free-form strings: server-generated values are RFC 3339, client values
    // (e.g. naive ISO 8601 without offset) are kept verbatim
    // ========================================================================
    #[serde(default)]
    pub created_at: Option<String>,

    #[serde(default)]
    pub updated_at: Option<String>,
}

impl WeddingPlan {
    pub fn new(guest_count: i64) -> Self {
        WeddingPlan {
            plan_id: None,
            guest_count,
            total_budget: None,
            venue: None,
            cuisine: None,
            services: None,
            created_at: None,
            updated_at: None,
        }
    }
}

/// Outcome of an upsert
#[derive(Debug, Clone, PartialEq)]
pub struct SavedPlan {
    pub plan_id: String,
    pub created: bool,
    pub plan: WeddingPlan,
}

/// Event for audit trail
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Event {
    pub event_id: String,
    pub timestamp: DateTime<Utc>,
    pub event_type: String,
    pub plan_id: String,
    pub data: serde_json::Value,
}

impl Event {
    pub fn new(event_type: &str, plan_id: &str, data: serde_json::Value) -> Self {
        Self {
            event_id: uuid::Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            event_type: event_type.to_string(),
            plan_id: plan_id.to_string(),
            data,
        }
    }
}

pub fn open_database(path: &str) -> Result<Connection> {
    let conn = Connection::open(path)
        .with_context(|| format!("Failed to open plan database: {}", path))?;
    setup_database(&conn)?;
    Ok(conn)
}

pub fn setup_database(conn: &Connection) -> Result<()> {
    // Enable WAL mode for crash recovery (in-memory databases keep "memory")
    conn.pragma_update(None, "journal_mode", "WAL")?;

    // ==========================================================================
    // Wedding Plans Table (whole plan stored as a JSON document)
    // ==========================================================================
    conn.execute(
        "CREATE TABLE IF NOT EXISTS wedding_plans (
            plan_id TEXT PRIMARY KEY,
            document TEXT NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )",
        [],
    )?;

    // ==========================================================================
    // Events Table (audit trail)
    // ==========================================================================
    conn.execute(
        "CREATE TABLE IF NOT EXISTS events (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            event_id TEXT UNIQUE NOT NULL,
            timestamp TEXT NOT NULL,
            event_type TEXT NOT NULL,
            plan_id TEXT NOT NULL,
            data TEXT NOT NULL
        )",
        [],
    )?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_events_plan ON events(plan_id)",
        [],
    )?;

    Ok(())
}

/// Upsert a plan keyed by plan_id
///
/// - No plan_id: a new UUID is generated
/// - Existing plan_id: stored created_at is kept, updated_at refreshed
pub fn save_plan(conn: &Connection, plan: &WeddingPlan) -> Result<SavedPlan> {
    let now = Utc::now().to_rfc3339();
    let plan_id = plan
        .plan_id
        .clone()
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

    let tx = conn.unchecked_transaction()?;

    let existing_created_at: Option<String> = tx
        .query_row(
            "SELECT created_at FROM wedding_plans WHERE plan_id = ?1",
            params![plan_id],
            |row| row.get(0),
        )
        .optional()?;

    let created = existing_created_at.is_none();
    let created_at = match existing_created_at {
        Some(stored) => stored,
        None => plan
            .created_at
            .clone()
            .filter(|ts| !ts.is_empty())
            .unwrap_or_else(|| now.clone()),
    };

    let mut stored = plan.clone();
    stored.plan_id = Some(plan_id.clone());
    stored.created_at = Some(created_at.clone());
    stored.updated_at = Some(now.clone());

    let document = serde_json::to_string(&stored)?;

    tx.execute(
        "INSERT INTO wedding_plans (plan_id, document, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4)
         ON CONFLICT(plan_id) DO UPDATE SET
            document = excluded.document,
            updated_at = excluded.updated_at",
        params![plan_id, document, created_at, now],
    )?;

    let event = Event::new(
        if created { "plan_created" } else { "plan_updated" },
        &plan_id,
        serde_json::json!({
            "guest_count": stored.guest_count,
            "total_budget": stored.total_budget,
        }),
    );
    insert_event(&tx, &event)?;

    tx.commit()?;

    tracing::info!(plan_id = %plan_id, created, "Wedding plan saved");

    Ok(SavedPlan {
        plan_id,
        created,
        plan: stored,
    })
}

/// Load a plan by id (None when no plan is stored under that id)
pub fn load_plan(conn: &Connection, plan_id: &str) -> Result<Option<WeddingPlan>> {
    let document: Option<String> = conn
        .query_row(
            "SELECT document FROM wedding_plans WHERE plan_id = ?1",
            params![plan_id],
            |row| row.get(0),
        )
        .optional()?;

    match document {
        Some(json) => {
            let plan = serde_json::from_str(&json)
                .with_context(|| format!("Corrupt plan document for {}", plan_id))?;
            Ok(Some(plan))
        }
        None => Ok(None),
    }
}

pub fn count_plans(conn: &Connection) -> Result<i64> {
    let count: i64 =
        conn.query_row("SELECT COUNT(*) FROM wedding_plans", [], |row| row.get(0))?;
    Ok(count)
}

/// Insert event into audit trail
pub fn insert_event(conn: &Connection, event: &Event) -> Result<()> {
    let data_json = serde_json::to_string(&event.data)?;

    conn.execute(
        "INSERT INTO events (event_id, timestamp, event_type, plan_id, data)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            event.event_id,
            event.timestamp.to_rfc3339(),
            event.event_type,
            event.plan_id,
            data_json,
        ],
    )?;

    Ok(())
}

/// Get events for a plan, newest first
pub fn get_events_for_plan(conn: &Connection, plan_id: &str) -> Result<Vec<Event>> {
    let mut stmt = conn.prepare(
        "SELECT event_id, timestamp, event_type, plan_id, data
         FROM events
         WHERE plan_id = ?1
         ORDER BY id DESC",
    )?;

    let rows = stmt
        .query_map(params![plan_id], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, String>(4)?,
            ))
        })?
        .collect::<Result<Vec<_>, _>>()?;

    rows.into_iter()
        .map(|(event_id, timestamp, event_type, plan_id, data)| {
            Ok(Event {
                event_id,
                timestamp: parse_timestamp(&timestamp)?,
                event_type,
                plan_id,
                data: serde_json::from_str(&data).context("Corrupt event data")?,
            })
        })
        .collect()
}

fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    let parsed = DateTime::parse_from_rfc3339(value)
        .with_context(|| format!("Invalid stored timestamp: {}", value))?;
    Ok(parsed.with_timezone(&Utc))
}
