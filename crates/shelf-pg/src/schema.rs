/// Schema metadata for PostgreSQL tables.
///
/// All methods return `&'static str` so DDL can be assembled at compile
/// time with `const_format::concatcp!`. No I/O happens here; see
/// [`bootstrap`](crate::bootstrap).
pub trait Schema {
    /// Returns the table name in the database.
    fn name() -> &'static str;
    /// Returns `CREATE TABLE IF NOT EXISTS` DDL statement.
    fn creates() -> &'static str;
    /// Returns `CREATE INDEX IF NOT EXISTS` statements for all indices.
    fn indices() -> &'static str;
}
