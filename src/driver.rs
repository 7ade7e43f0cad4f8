//! Supported Driver Identifiers
//!
//! This module defines the closed set of driver identifiers the DBCode host
//! understands. The set is part of the wire contract: a configuration naming
//! any identifier outside it is rejected at deserialization time, before it
//! ever reaches the host.
//!
//! # Closed Set
//! `Driver` has exactly 36 members. Growing the set is a contract change and
//! requires at least a minor version bump of this crate, in step with the
//! host release that introduces the engine.

use serde::{Deserialize, Serialize};

/// Database engine or file format a connection speaks to
///
/// Wire representation is the lowercase identifier (e.g. `"postgres"`,
/// `"mssql"`). The identifier is what the host dispatches on; it is not a
/// display string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum Driver {
    /// `PostgreSQL`
    Postgres,
    /// `CockroachDB` (postgres wire protocol)
    Cockroach,
    /// Amazon Redshift
    Redshift,
    /// `TimescaleDB`
    Timescale,
    /// `YugabyteDB`
    Yugabyte,
    /// Greenplum
    Greenplum,
    /// `MySQL`
    MySQL,
    /// `MariaDB`
    MariaDB,
    /// `TiDB` (mysql wire protocol)
    TiDB,
    /// `SingleStore`
    SingleStore,
    /// Microsoft SQL Server
    #[serde(rename = "mssql")]
    SqlServer,
    /// Oracle Database
    Oracle,
    /// IBM Db2
    Db2,
    /// `SQLite` (file-backed)
    SQLite,
    /// `libSQL` (file-backed or remote)
    LibSQL,
    /// Cloudflare D1
    D1,
    /// `DuckDB` (file-backed)
    DuckDB,
    /// `MotherDuck`
    MotherDuck,
    /// Snowflake
    Snowflake,
    /// Google `BigQuery`
    BigQuery,
    /// Databricks SQL
    Databricks,
    /// Amazon Athena
    Athena,
    /// `ClickHouse`
    ClickHouse,
    /// Vertica
    Vertica,
    /// Trino
    Trino,
    /// Presto
    Presto,
    /// `MongoDB`
    MongoDB,
    /// Amazon `DocumentDB` (mongodb wire protocol)
    DocumentDB,
    /// Azure Cosmos DB
    CosmosDB,
    /// Amazon `DynamoDB`
    DynamoDB,
    /// Couchbase
    Couchbase,
    /// Redis
    Redis,
    /// Valkey
    Valkey,
    /// Apache Cassandra
    Cassandra,
    /// `ScyllaDB`
    Scylla,
    /// Elasticsearch
    Elasticsearch,
}

impl Driver {
    /// Every driver the host understands, in canonical order
    ///
    /// Canonical order groups wire-protocol families together and is the
    /// order the host lists engines in its connection dialog.
    pub const ALL: &'static [Self] = &[
        Self::Postgres,
        Self::Cockroach,
        Self::Redshift,
        Self::Timescale,
        Self::Yugabyte,
        Self::Greenplum,
        Self::MySQL,
        Self::MariaDB,
        Self::TiDB,
        Self::SingleStore,
        Self::SqlServer,
        Self::Oracle,
        Self::Db2,
        Self::SQLite,
        Self::LibSQL,
        Self::D1,
        Self::DuckDB,
        Self::MotherDuck,
        Self::Snowflake,
        Self::BigQuery,
        Self::Databricks,
        Self::Athena,
        Self::ClickHouse,
        Self::Vertica,
        Self::Trino,
        Self::Presto,
        Self::MongoDB,
        Self::DocumentDB,
        Self::CosmosDB,
        Self::DynamoDB,
        Self::Couchbase,
        Self::Redis,
        Self::Valkey,
        Self::Cassandra,
        Self::Scylla,
        Self::Elasticsearch,
    ];

    /// Get the wire identifier as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Postgres => "postgres",
            Self::Cockroach => "cockroach",
            Self::Redshift => "redshift",
            Self::Timescale => "timescale",
            Self::Yugabyte => "yugabyte",
            Self::Greenplum => "greenplum",
            Self::MySQL => "mysql",
            Self::MariaDB => "mariadb",
            Self::TiDB => "tidb",
            Self::SingleStore => "singlestore",
            Self::SqlServer => "mssql",
            Self::Oracle => "oracle",
            Self::Db2 => "db2",
            Self::SQLite => "sqlite",
            Self::LibSQL => "libsql",
            Self::D1 => "d1",
            Self::DuckDB => "duckdb",
            Self::MotherDuck => "motherduck",
            Self::Snowflake => "snowflake",
            Self::BigQuery => "bigquery",
            Self::Databricks => "databricks",
            Self::Athena => "athena",
            Self::ClickHouse => "clickhouse",
            Self::Vertica => "vertica",
            Self::Trino => "trino",
            Self::Presto => "presto",
            Self::MongoDB => "mongodb",
            Self::DocumentDB => "documentdb",
            Self::CosmosDB => "cosmosdb",
            Self::DynamoDB => "dynamodb",
            Self::Couchbase => "couchbase",
            Self::Redis => "redis",
            Self::Valkey => "valkey",
            Self::Cassandra => "cassandra",
            Self::Scylla => "scylla",
            Self::Elasticsearch => "elasticsearch",
        }
    }

    /// Human-readable engine name for UI surfaces
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Postgres => "PostgreSQL",
            Self::Cockroach => "CockroachDB",
            Self::Redshift => "Amazon Redshift",
            Self::Timescale => "TimescaleDB",
            Self::Yugabyte => "YugabyteDB",
            Self::Greenplum => "Greenplum",
            Self::MySQL => "MySQL",
            Self::MariaDB => "MariaDB",
            Self::TiDB => "TiDB",
            Self::SingleStore => "SingleStore",
            Self::SqlServer => "SQL Server",
            Self::Oracle => "Oracle",
            Self::Db2 => "IBM Db2",
            Self::SQLite => "SQLite",
            Self::LibSQL => "libSQL",
            Self::D1 => "Cloudflare D1",
            Self::DuckDB => "DuckDB",
            Self::MotherDuck => "MotherDuck",
            Self::Snowflake => "Snowflake",
            Self::BigQuery => "Google BigQuery",
            Self::Databricks => "Databricks",
            Self::Athena => "Amazon Athena",
            Self::ClickHouse => "ClickHouse",
            Self::Vertica => "Vertica",
            Self::Trino => "Trino",
            Self::Presto => "Presto",
            Self::MongoDB => "MongoDB",
            Self::DocumentDB => "Amazon DocumentDB",
            Self::CosmosDB => "Azure Cosmos DB",
            Self::DynamoDB => "Amazon DynamoDB",
            Self::Couchbase => "Couchbase",
            Self::Redis => "Redis",
            Self::Valkey => "Valkey",
            Self::Cassandra => "Apache Cassandra",
            Self::Scylla => "ScyllaDB",
            Self::Elasticsearch => "Elasticsearch",
        }
    }

    /// Conventional server port for host-type connections
    ///
    /// `None` for file-backed and serverless engines where a port has no
    /// meaning, and for HTTPS-only cloud services.
    #[must_use]
    pub const fn default_port(&self) -> Option<u16> {
        match self {
            Self::Postgres | Self::Timescale | Self::Greenplum => Some(5432),
            Self::Cockroach => Some(26257),
            Self::Redshift => Some(5439),
            Self::Yugabyte | Self::Vertica => Some(5433),
            Self::MySQL | Self::MariaDB | Self::SingleStore => Some(3306),
            Self::TiDB => Some(4000),
            Self::SqlServer => Some(1433),
            Self::Oracle => Some(1521),
            Self::Db2 => Some(50000),
            Self::ClickHouse => Some(8123),
            Self::Trino | Self::Presto => Some(8080),
            Self::MongoDB | Self::DocumentDB => Some(27017),
            Self::Couchbase => Some(8091),
            Self::Redis | Self::Valkey => Some(6379),
            Self::Cassandra | Self::Scylla => Some(9042),
            Self::Elasticsearch => Some(9200),
            Self::SQLite
            | Self::LibSQL
            | Self::D1
            | Self::DuckDB
            | Self::MotherDuck
            | Self::Snowflake
            | Self::BigQuery
            | Self::Databricks
            | Self::Athena
            | Self::CosmosDB
            | Self::DynamoDB => None,
        }
    }
}

impl std::fmt::Display for Driver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_driver_set_is_exactly_36() {
        assert_eq!(Driver::ALL.len(), 36);
    }

    #[test]
    fn test_driver_serialization_matches_as_str() {
        for driver in Driver::ALL {
            let json = serde_json::to_string(driver).unwrap();
            assert_eq!(json, format!("\"{}\"", driver.as_str()));
        }
    }

    #[test]
    fn test_driver_round_trip() {
        for driver in Driver::ALL {
            let json = serde_json::to_string(driver).unwrap();
            let back: Driver = serde_json::from_str(&json).unwrap();
            assert_eq!(back, *driver);
        }
    }

    #[test]
    fn test_unknown_driver_rejected() {
        for literal in ["\"postgresql\"", "\"sqlserver\"", "\"mongo\"", "\"Postgres\"", "\"\""] {
            assert!(
                serde_json::from_str::<Driver>(literal).is_err(),
                "literal {literal} should not deserialize"
            );
        }
    }

    #[test]
    fn test_wire_identifiers_unique() {
        let mut seen = std::collections::HashSet::new();
        for driver in Driver::ALL {
            assert!(seen.insert(driver.as_str()), "duplicate identifier {driver}");
        }
    }

    #[test]
    fn test_mssql_wire_identifier() {
        assert_eq!(serde_json::to_string(&Driver::SqlServer).unwrap(), r#""mssql""#);
        assert_eq!(serde_json::from_str::<Driver>(r#""mssql""#).unwrap(), Driver::SqlServer);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Driver::Postgres.display_name(), "PostgreSQL");
        assert_eq!(Driver::SqlServer.display_name(), "SQL Server");
        assert_eq!(Driver::D1.display_name(), "Cloudflare D1");
    }

    #[test]
    fn test_default_ports() {
        assert_eq!(Driver::Postgres.default_port(), Some(5432));
        assert_eq!(Driver::MySQL.default_port(), Some(3306));
        assert_eq!(Driver::SQLite.default_port(), None);
        assert_eq!(Driver::Snowflake.default_port(), None);
    }

    #[test]
    fn test_display_uses_wire_identifier() {
        assert_eq!(Driver::Postgres.to_string(), "postgres");
        assert_eq!(Driver::SqlServer.to_string(), "mssql");
    }
}
