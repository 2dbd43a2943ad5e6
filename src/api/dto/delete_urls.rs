use serde::Deserialize;

/// Body of a batch deletion request: a bare JSON array of short URL ids.
///
/// ```json
/// ["abc12", "xyz99"]
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct DeleteUrlsRequest(pub Vec<String>);

impl DeleteUrlsRequest {
    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}
