//! Frame reconciliation: from raw source tables to joined analysis frames.
//!
//! `build_frame` resolves one year column per source table, filters each
//! table to its requested stratum, canonicalizes entity labels, sums rows
//! that share an entity (category breakdowns) and joins the per-table
//! values on the canonical entity key. The result is an [`AnalysisFrame`]:
//! one row per entity, one column per indicator, missing values preserved
//! as `None`.
//!
//! `year_series` applies the same per-table pipeline across every year
//! column of a single table, for trend views.

use std::collections::{BTreeMap, BTreeSet};

use log::debug;
use serde::Serialize;

use crate::catalog::Indicator;
use crate::entity::{canonicalize, EntityKey};
use crate::errors::{StatsError, StatsResult};
use crate::table::IndicatorTable;

/// Which entities a frame is built over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntityFilter {
    /// The six Centru-region counties, aggregate excluded
    #[default]
    FocusRegion,
    /// Every entity in the sources, the national aggregate included
    All,
}

/// How entities absent from some of the tables are handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JoinPolicy {
    /// Keep the entities present in every table, drop the rest
    #[default]
    Inner,
    /// Error with the first entity that is not present in every table
    RequireAll,
}

/// What to build: year, entity scope and join strictness
#[derive(Debug, Clone)]
pub struct FrameRequest<'a> {
    /// 4-digit year token, e.g. "2021"
    pub year: &'a str,
    /// Entity scope
    pub entity_filter: EntityFilter,
    /// Join strictness
    pub join: JoinPolicy,
}

impl<'a> FrameRequest<'a> {
    /// Request for a year with the default scope (focus region, inner join)
    pub fn new(year: &'a str) -> Self {
        Self {
            year,
            entity_filter: EntityFilter::default(),
            join: JoinPolicy::default(),
        }
    }
}

/// An indicator bound to its loaded source table.
///
/// The stratum value applies to this table only; tables without a declared
/// stratum column ignore it. A stratified table read without a stratum
/// aggregates across its strata.
#[derive(Debug, Clone, Copy)]
pub struct FrameSource<'a> {
    pub indicator: Indicator,
    pub table: &'a IndicatorTable,
    pub stratum: Option<&'a str>,
}

impl<'a> FrameSource<'a> {
    /// Binds an indicator to its table, with no stratum filter
    pub fn new(indicator: Indicator, table: &'a IndicatorTable) -> Self {
        Self {
            indicator,
            table,
            stratum: None,
        }
    }

    /// Binds an indicator to its table, filtered to one stratum value
    pub fn with_stratum(indicator: Indicator, table: &'a IndicatorTable, stratum: &'a str) -> Self {
        Self {
            indicator,
            table,
            stratum: Some(stratum),
        }
    }
}

/// Year-resolved, entity-joined indicator values.
///
/// Rows are keyed by canonical entity and hold one `Option<f64>` per
/// indicator, aligned with `indicators`. An entity that is present in a
/// table but carries no usable number stays in the frame with `None`.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisFrame {
    /// Year token the frame was built for
    pub year: String,
    /// Column order
    pub indicators: Vec<Indicator>,
    /// One row per canonical entity
    pub rows: BTreeMap<EntityKey, Vec<Option<f64>>>,
}

impl AnalysisFrame {
    /// Number of entities in the frame
    pub fn n_entities(&self) -> usize {
        self.rows.len()
    }

    /// True when the frame has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Entity keys in row order
    pub fn entities(&self) -> impl Iterator<Item = &EntityKey> {
        self.rows.keys()
    }

    /// Values of one indicator column, in row order, missing kept as `None`
    pub fn column(&self, indicator: Indicator) -> StatsResult<Vec<Option<f64>>> {
        let pos = self
            .indicators
            .iter()
            .position(|i| *i == indicator)
            .ok_or_else(|| StatsError::UnknownColumn(indicator.to_string()))?;
        Ok(self
            .rows
            .values()
            .map(|row| row.get(pos).copied().flatten())
            .collect())
    }

    /// Present values of one indicator column, missing rows skipped
    pub fn numeric_column(&self, indicator: Indicator) -> StatsResult<Vec<f64>> {
        Ok(self.column(indicator)?.into_iter().flatten().collect())
    }

    /// A copy of the frame narrowed to the given entity scope
    pub fn restrict(&self, filter: EntityFilter) -> AnalysisFrame {
        let rows = self
            .rows
            .iter()
            .filter(|(key, _)| match filter {
                EntityFilter::FocusRegion => key.is_focus_county(),
                EntityFilter::All => true,
            })
            .map(|(key, row)| (key.clone(), row.clone()))
            .collect();
        AnalysisFrame {
            year: self.year.clone(),
            indicators: self.indicators.clone(),
            rows,
        }
    }
}

/// Values of a single indicator across every year of its table
#[derive(Debug, Clone, Serialize)]
pub struct IndicatorSeries {
    /// The indicator
    pub indicator: Indicator,
    /// Years in ascending order
    pub years: Vec<i32>,
    /// One row per canonical entity, aligned with `years`
    pub rows: BTreeMap<EntityKey, Vec<Option<f64>>>,
}

/// Builds an analysis frame for one year from several source tables.
///
/// Per table: resolve the year column, apply the source's stratum filter,
/// map entity labels to canonical keys, restrict to the requested scope
/// and sum rows sharing an entity. The per-table maps are then joined on
/// the canonical key according to the join policy.
///
/// # Arguments
/// * `sources` - Indicator and table bindings, at least one
/// * `request` - Year, scope and join policy
///
/// # Returns
/// The joined frame, or the first reconciliation error encountered
pub fn build_frame(
    sources: &[FrameSource<'_>],
    request: &FrameRequest<'_>,
) -> StatsResult<AnalysisFrame> {
    if sources.is_empty() {
        return Err(StatsError::EmptyInput { field: "sources" });
    }

    let mut resolved: Vec<BTreeMap<EntityKey, Option<f64>>> = Vec::with_capacity(sources.len());
    for source in sources {
        let year_column = source
            .table
            .find_year_column(source.indicator.year_prefix(), request.year)
            .ok_or_else(|| StatsError::UnknownYearColumn {
                table: source.table.name().to_string(),
                year: request.year.to_string(),
            })?;
        let values = collect_year(*source, year_column, request.entity_filter)?;
        debug!(
            "{}: {} entities for year {}",
            source.table.name(),
            values.len(),
            request.year
        );
        resolved.push(values);
    }

    if request.join == JoinPolicy::RequireAll {
        let union: BTreeSet<&EntityKey> = resolved.iter().flat_map(|m| m.keys()).collect();
        for (source, values) in sources.iter().zip(&resolved) {
            for key in &union {
                if !values.contains_key(*key) {
                    return Err(StatsError::UnjoinableEntity {
                        entity: key.to_string(),
                        table: source.table.name().to_string(),
                    });
                }
            }
        }
    }

    let mut keys: Vec<EntityKey> = resolved[0].keys().cloned().collect();
    keys.retain(|key| resolved[1..].iter().all(|m| m.contains_key(key)));

    let mut rows = BTreeMap::new();
    for key in keys {
        let row: Vec<Option<f64>> = resolved
            .iter()
            .map(|m| m.get(&key).copied().flatten())
            .collect();
        rows.insert(key, row);
    }

    Ok(AnalysisFrame {
        year: request.year.to_string(),
        indicators: sources.iter().map(|s| s.indicator).collect(),
        rows,
    })
}

/// Builds the full year-by-year series of one indicator.
///
/// Applies the same stratum, normalization and aggregation steps as
/// `build_frame` to every year column of the table. Entities are the
/// union over the years; an entity without a usable value in some year
/// carries `None` there.
pub fn year_series(
    source: FrameSource<'_>,
    entity_filter: EntityFilter,
) -> StatsResult<IndicatorSeries> {
    let year_columns = source.table.year_columns(source.indicator.year_prefix());
    if year_columns.is_empty() {
        return Err(StatsError::EmptyInput {
            field: "year columns",
        });
    }

    let mut years = Vec::with_capacity(year_columns.len());
    let mut per_year = Vec::with_capacity(year_columns.len());
    for column in &year_columns {
        years.push(column.year);
        per_year.push(collect_year(source, column.name, entity_filter)?);
    }

    let union: BTreeSet<EntityKey> = per_year.iter().flat_map(|m| m.keys().cloned()).collect();
    let mut rows = BTreeMap::new();
    for key in union {
        let row: Vec<Option<f64>> = per_year
            .iter()
            .map(|m| m.get(&key).copied().flatten())
            .collect();
        rows.insert(key, row);
    }

    Ok(IndicatorSeries {
        indicator: source.indicator,
        years,
        rows,
    })
}

/// One table, one year column: stratum filter, canonicalize, scope, sum.
///
/// Summation treats missing values as absent, not as zero: an entity whose
/// rows are all missing maps to `None`, never to `Some(0.0)`.
fn collect_year(
    source: FrameSource<'_>,
    year_column: &str,
    filter: EntityFilter,
) -> StatsResult<BTreeMap<EntityKey, Option<f64>>> {
    let table = source.table;
    let indicator = source.indicator;
    let entity_cells = table
        .column(indicator.entity_column())
        .ok_or_else(|| StatsError::UnknownColumn(indicator.entity_column().to_string()))?;
    let value_cells = table
        .column(year_column)
        .ok_or_else(|| StatsError::UnknownColumn(year_column.to_string()))?;
    let mask = stratum_mask(table, indicator, source.stratum)?;

    let mut acc: BTreeMap<EntityKey, Option<f64>> = BTreeMap::new();
    let mut unparsed = 0usize;
    for i in 0..table.n_rows() {
        if let Some(mask) = &mask {
            if !mask[i] {
                continue;
            }
        }
        let label = match entity_cells[i].as_text() {
            Some(label) if !label.is_empty() => label,
            _ => continue,
        };
        let key = canonicalize(label);
        let in_scope = match filter {
            EntityFilter::FocusRegion => key.is_focus_county(),
            EntityFilter::All => true,
        };
        if !in_scope {
            continue;
        }
        let value = value_cells[i].as_number();
        if value.is_none() && value_cells[i].as_text().is_some() {
            unparsed += 1;
        }
        let slot = acc.entry(key).or_insert(None);
        if let Some(v) = value {
            *slot = Some(slot.unwrap_or(0.0) + v);
        }
    }
    if unparsed > 0 {
        debug!(
            "{}: {} cells in '{}' did not parse as numbers",
            table.name(),
            unparsed,
            year_column
        );
    }
    Ok(acc)
}

/// Row mask for the requested stratum, `None` when no filtering applies
fn stratum_mask(
    table: &IndicatorTable,
    indicator: Indicator,
    stratum: Option<&str>,
) -> StatsResult<Option<Vec<bool>>> {
    let (column, wanted) = match (indicator.stratum_column(), stratum) {
        (Some(column), Some(wanted)) => (column, wanted),
        _ => return Ok(None),
    };
    let cells = match table.column(column) {
        Some(cells) => cells,
        None => {
            debug!(
                "{}: declared stratum column '{}' not present, not filtering",
                table.name(),
                column
            );
            return Ok(None);
        }
    };
    let mask: Vec<bool> = cells
        .iter()
        .map(|cell| cell.as_text() == Some(wanted))
        .collect();
    if !mask.iter().any(|m| *m) {
        return Err(StatsError::MissingStratum {
            column: column.to_string(),
            value: wanted.to_string(),
        });
    }
    Ok(Some(mask))
}
