//! HTTP(S) remote client backed by ureq.

use cartopress_traits::{FetchError, RemoteClient};
use std::fmt;
use std::io::Read;

/// A blocking HTTP(S) client implementing [`RemoteClient`].
///
/// Uses a shared [`ureq::Agent`] so connections are reused across fetches
/// within one pipeline.
#[derive(Clone)]
pub struct UreqClient {
    agent: ureq::Agent,
}

impl UreqClient {
    pub fn new() -> Self {
        Self {
            agent: ureq::Agent::new_with_defaults(),
        }
    }
}

impl Default for UreqClient {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for UreqClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UreqClient").finish()
    }
}

impl RemoteClient for UreqClient {
    fn get(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = self.agent.get(url).call().map_err(|e| FetchError::Failed {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        let mut body = Vec::new();
        response
            .into_body()
            .into_reader()
            .read_to_end(&mut body)
            .map_err(|e| FetchError::Io(e.to_string()))?;
        Ok(body)
    }

    fn name(&self) -> &'static str {
        "UreqClient"
    }
}
