// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Finding records and the dual-sink finding log
//!
//! Every check emits [`Finding`]s; the driver owns a [`FindingLog`] that
//! accumulates them across all rule invocations for one report. The log
//! maintains two parallel views: a flat tabular one for CSV-style output and
//! a rich one carrying the offending entities for camera framing and issue
//! packaging. The tabular view is always a projection of the rich one.

use crate::{EntityId, GlobalId};
use serde::{Deserialize, Serialize};

/// One reported non-conformance
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    /// Subject type label (ObjectType or IFC type name)
    pub subject_type: String,
    /// GlobalId of the subject, empty for findings about an absence
    pub global_id: GlobalId,
    /// Issue title
    pub title: String,
    /// Issue comment
    pub comment: String,
    /// Entities to frame in the attached viewpoint
    pub offending: Vec<EntityId>,
}

impl Finding {
    /// Create a new finding
    pub fn new(
        subject_type: impl Into<String>,
        global_id: impl Into<GlobalId>,
        title: impl Into<String>,
        comment: impl Into<String>,
    ) -> Self {
        Self {
            subject_type: subject_type.into(),
            global_id: global_id.into(),
            title: title.into(),
            comment: comment.into(),
            offending: Vec::new(),
        }
    }

    /// Attach the offending entities
    pub fn with_offending(mut self, offending: Vec<EntityId>) -> Self {
        self.offending = offending;
        self
    }

    /// Project to the tabular row representation
    pub fn to_row(&self) -> FindingRow {
        FindingRow {
            subject_type: self.subject_type.clone(),
            global_id: self.global_id.clone(),
            title: self.title.clone(),
            comment: self.comment.clone(),
        }
    }
}

/// Tabular projection of a finding (the four string columns of the report)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FindingRow {
    pub subject_type: String,
    pub global_id: GlobalId,
    pub title: String,
    pub comment: String,
}

/// Caller-owned accumulator with the two parallel sinks
#[derive(Clone, Debug, Default)]
pub struct FindingLog {
    rows: Vec<FindingRow>,
    findings: Vec<Finding>,
}

impl FindingLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a finding to both sinks
    pub fn push(&mut self, finding: Finding) {
        self.rows.push(finding.to_row());
        self.findings.push(finding);
    }

    /// Append a batch of findings
    pub fn extend(&mut self, findings: impl IntoIterator<Item = Finding>) {
        for finding in findings {
            self.push(finding);
        }
    }

    /// Tabular sink
    pub fn rows(&self) -> &[FindingRow] {
        &self.rows
    }

    /// Rich sink
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    /// Number of accumulated findings
    pub fn len(&self) -> usize {
        self.findings.len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }
}
