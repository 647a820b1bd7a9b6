//! Demonstration schema seeding.
//!
//! Builds the two-table lab schema (`users`, `orders`) with deliberate gaps
//! in `orders.id` so a freshly seeded database immediately demonstrates
//! `gapscan check`: order ids 1, 2, 4, 5, 7 leave ids 3 and 6 missing.

use serde::Serialize;

use crate::error::Result;

use super::source::Database;

/// Row counts after seeding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeedSummary {
    pub users: u64,
    pub orders: u64,
}

const SEED_SQL: &str = r#"
DROP TABLE IF EXISTS orders;
DROP TABLE IF EXISTS users;

CREATE TABLE users (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    email TEXT UNIQUE NOT NULL,
    age INTEGER
);

CREATE TABLE orders (
    id INTEGER PRIMARY KEY,
    user_id INTEGER NOT NULL REFERENCES users(id),
    item TEXT NOT NULL,
    quantity INTEGER NOT NULL DEFAULT 1,
    unit_price REAL NOT NULL
);

CREATE INDEX idx_orders_user_id ON orders(user_id);

INSERT INTO users (id, name, email, age) VALUES
    (1, 'Ada Lovelace', 'ada@example.com', 36),
    (2, 'Grace Hopper', 'grace@example.com', 45),
    (3, 'Edsger Dijkstra', 'edsger@example.com', 41),
    (4, 'Barbara Liskov', 'barbara@example.com', 39),
    (5, 'Donald Knuth', 'donald@example.com', 47);

INSERT INTO orders (id, user_id, item, quantity, unit_price) VALUES
    (1, 1, 'notebook', 2, 4.50),
    (2, 1, 'fountain pen', 1, 18.00),
    (4, 2, 'graph paper', 5, 2.25),
    (5, 3, 'chalk', 10, 0.40),
    (7, 5, 'index cards', 3, 1.10);
"#;

/// Create and populate the demonstration schema.
///
/// Drops and recreates both tables, so re-seeding an existing demo database
/// always produces the same contents.
pub fn seed(db: &Database) -> Result<SeedSummary> {
    tracing::info!("seeding demonstration schema");
    db.connection().execute_batch(SEED_SQL)?;

    let users: u64 = db
        .connection()
        .query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))?;
    let orders: u64 = db
        .connection()
        .query_row("SELECT COUNT(*) FROM orders", [], |row| row.get(0))?;

    Ok(SeedSummary { users, orders })
}
