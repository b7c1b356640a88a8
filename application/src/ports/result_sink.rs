//! Result sink port
//!
//! Side channel that receives auxiliary settlement data (elapsed time,
//! file-reference annotations) once a query settles successfully.

use promptgate_domain::{FileReference, SessionId};
use std::time::Duration;

/// Port for recording query settlements.
pub trait ResultSink: Send + Sync {
    fn record_settlement(
        &self,
        session: &SessionId,
        elapsed: Duration,
        file_references: &[FileReference],
    );
}

/// No-op sink used when no collaborator is wired in.
pub struct NoResultSink;

impl ResultSink for NoResultSink {
    fn record_settlement(
        &self,
        _session: &SessionId,
        _elapsed: Duration,
        _file_references: &[FileReference],
    ) {
    }
}
