pub const SCHEMA_QUERY: &str = "CREATE TABLE IF NOT EXISTS profiles (
    id BLOB PRIMARY KEY NOT NULL,
    user_id TEXT NOT NULL,
    weight REAL NOT NULL,
    height REAL NOT NULL,
    age INTEGER NOT NULL,
    gender INTEGER NOT NULL,
    activity_level INTEGER NOT NULL,
    goal INTEGER NOT NULL,
    created_at BIGINT NOT NULL
);
CREATE INDEX IF NOT EXISTS profiles_user_id ON profiles (user_id);";
