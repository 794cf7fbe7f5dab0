use crate::sector::SectorKind;
use async_trait::async_trait;

/// Static advisory text per sector.
///
/// Implementations must absorb their own failures and return an explanatory
/// inline message instead, so a missing resource never aborts a
/// recommendation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AdvisorySource: Send + Sync {
    async fn load(&self, kind: SectorKind) -> String;
}

/// Inline text used when the advisory resource for `kind` is absent.
pub fn missing_advisory_text(kind: SectorKind) -> String {
    format!("Recommendation file not found for {}.\n\n", kind)
}
