//! Closed catalog of the supported indicator datasets.
//!
//! Each variant binds an indicator to the layout of its source table: the
//! entity column, the year-column prefix and the optional stratum or
//! category column. Keeping the catalog closed means a frame column is
//! always one of these variants, never a free-form string.

use std::fmt;

use serde::Serialize;

/// A yearly labor-market indicator and the table layout it is published in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Indicator {
    /// Registered unemployment rate, stratified by sex
    UnemploymentRate,
    /// Employment rate of labor resources
    EmploymentRate,
    /// Economically active population
    ActivePopulation,
    /// Average net monthly wage
    AverageWage,
    /// Gross domestic product per capita
    GdpPerCapita,
    /// Graduates, stratified by education level
    Graduates,
    /// Net migration balance
    NetMigration,
    /// Employees broken down by economic activity
    EmployeesByActivity,
}

impl Indicator {
    /// Every supported indicator, in catalog order
    pub const ALL: [Indicator; 8] = [
        Indicator::UnemploymentRate,
        Indicator::EmploymentRate,
        Indicator::ActivePopulation,
        Indicator::AverageWage,
        Indicator::GdpPerCapita,
        Indicator::Graduates,
        Indicator::NetMigration,
        Indicator::EmployeesByActivity,
    ];

    /// Name of the source table the indicator is published in
    pub fn table_name(self) -> &'static str {
        match self {
            Indicator::UnemploymentRate => "Somaj",
            Indicator::EmploymentRate => "Resurse",
            Indicator::ActivePopulation => "PopulatiaActiva",
            Indicator::AverageWage => "Salarii",
            Indicator::GdpPerCapita => "PIB",
            Indicator::Graduates => "Absolventi",
            Indicator::NetMigration => "Migratie",
            Indicator::EmployeesByActivity => "Salariati2",
        }
    }

    /// Column holding the entity labels
    pub fn entity_column(self) -> &'static str {
        "Judete"
    }

    /// Prefix of the per-year value columns, e.g. "Anul 2021"
    pub fn year_prefix(self) -> &'static str {
        "Anul"
    }

    /// Stratum column the table can be filtered on, where the source has one
    pub fn stratum_column(self) -> Option<&'static str> {
        match self {
            Indicator::UnemploymentRate => Some("Sexe"),
            Indicator::Graduates => Some("Niveluri de educatie"),
            _ => None,
        }
    }

    /// Category column whose rows are summed per entity, where the source
    /// splits an entity over several rows
    pub fn category_column(self) -> Option<&'static str> {
        match self {
            Indicator::EmployeesByActivity => Some("Activitati ale economiei"),
            Indicator::Graduates => Some("Niveluri de educatie"),
            _ => None,
        }
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Indicator::UnemploymentRate => "unemployment_rate",
            Indicator::EmploymentRate => "employment_rate",
            Indicator::ActivePopulation => "active_population",
            Indicator::AverageWage => "average_wage",
            Indicator::GdpPerCapita => "gdp_per_capita",
            Indicator::Graduates => "graduates",
            Indicator::NetMigration => "net_migration",
            Indicator::EmployeesByActivity => "employees_by_activity",
        };
        f.write_str(name)
    }
}
