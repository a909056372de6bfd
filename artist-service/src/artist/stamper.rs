use std::{fmt::Debug, sync::Arc};

use artist_api::model::artist::MetadataModel;
use time::OffsetDateTime;

/// Stamps audit timestamps onto artist metadata right before it is written.
pub trait MetadataStamper: Debug {
    fn stamp(&self, metadata: &mut MetadataModel);
}

pub type MetadataStamperArc = Arc<dyn MetadataStamper + Send + Sync>;

/// Stamps the current wall clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemMetadataStamper;

impl MetadataStamper for SystemMetadataStamper {
    fn stamp(&self, metadata: &mut MetadataModel) {
        stamp_at(metadata, OffsetDateTime::now_utc());
    }
}

/// Stamps a fixed instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedMetadataStamper(pub OffsetDateTime);

impl MetadataStamper for FixedMetadataStamper {
    fn stamp(&self, metadata: &mut MetadataModel) {
        stamp_at(metadata, self.0);
    }
}

fn stamp_at(metadata: &mut MetadataModel, now: OffsetDateTime) {
    metadata.create_time.get_or_insert(now);
    metadata.update_time = Some(now);
}
