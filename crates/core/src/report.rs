// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Daily ledger aggregation and rendering.
//!
//! Totals are recomputed from the rows every time a report is built.

use parking_sim_domain::{Session, format_timestamp};

const RULE: &str = "====================";

/// Aggregate figures over a set of sessions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ReportTotals {
    /// Number of completed sessions.
    pub departures: usize,
    /// Sum of the fees charged.
    pub revenue: f64,
}

impl ReportTotals {
    /// Sums the given sessions.
    #[must_use]
    pub fn from_sessions(sessions: &[Session]) -> Self {
        Self {
            departures: sessions.len(),
            revenue: sessions.iter().map(Session::fee).sum(),
        }
    }
}

/// A snapshot of the daily ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyReport {
    rows: Vec<Session>,
    totals: ReportTotals,
}

impl DailyReport {
    /// Builds a report over `sessions`, keeping their order.
    #[must_use]
    pub fn new(sessions: &[Session]) -> Self {
        Self {
            rows: sessions.to_vec(),
            totals: ReportTotals::from_sessions(sessions),
        }
    }

    /// Returns the session rows in insertion order.
    #[must_use]
    pub fn rows(&self) -> &[Session] {
        &self.rows
    }

    /// Returns the aggregate totals.
    #[must_use]
    pub const fn totals(&self) -> ReportTotals {
        self.totals
    }

    /// Returns whether no vehicle has departed since the last reset.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl std::fmt::Display for DailyReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Daily Parking Report")?;
        writeln!(f, "{RULE}")?;

        if self.rows.is_empty() {
            return writeln!(f, "No vehicles departed today.");
        }

        writeln!(
            f,
            "{:<15} {:<12} {:<20} {:<20} {:>10}",
            "Plate", "Type", "Entry time", "Exit time", "Fee"
        )?;
        for session in &self.rows {
            writeln!(
                f,
                "{:<15} {:<12} {:<20} {:<20} {:>10.2}",
                session.plate().value(),
                session.vehicle_type(),
                format_timestamp(session.entry_time()),
                format_timestamp(session.exit_time()),
                session.fee()
            )?;
        }
        writeln!(f, "{RULE}")?;
        writeln!(f, "Total departures: {}", self.totals.departures)?;
        writeln!(f, "Total revenue: {:.2}", self.totals.revenue)
    }
}
