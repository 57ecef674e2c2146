//! Statement classifications and their identifier rules.

/// The dialect classification of the statement being scanned.
///
/// Each concrete variant may accept characters as identifier letters on
/// top of the standard letter classification. [`StatementType::Unknown`]
/// is the sentinel used before a statement has been classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StatementType {
    /// Not classified yet.
    #[default]
    Unknown,
    /// ANSI SQL, no extra identifier characters.
    Generic,
    /// MySQL / MariaDB.
    MySql,
    /// PostgreSQL.
    PostgreSql,
    /// Oracle SQL and PL/SQL.
    Oracle,
    /// SQL Server T-SQL.
    SqlServer,
}

impl StatementType {
    /// Returns whether `c` counts as an identifier letter for this
    /// statement type even though it is not a standard letter.
    #[must_use]
    pub const fn treat_as_if_letter(self, c: char) -> bool {
        match self {
            Self::Unknown | Self::Generic => false,
            Self::MySql | Self::PostgreSql => c == '$',
            Self::Oracle => matches!(c, '$' | '#'),
            Self::SqlServer => matches!(c, '@' | '#' | '$'),
        }
    }

    /// Returns whether this is the unclassified sentinel.
    #[must_use]
    pub const fn is_unknown(self) -> bool {
        matches!(self, Self::Unknown)
    }

    /// Returns the name of this statement type.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Generic => "generic",
            Self::MySql => "mysql",
            Self::PostgreSql => "postgresql",
            Self::Oracle => "oracle",
            Self::SqlServer => "sqlserver",
        }
    }
}
