//! Remote resource download into temporary files.

use crate::ResourceError;
use cartopress_traits::RemoteClient;
use std::io::Write;
use tempfile::NamedTempFile;

/// Download `url` into a uniquely named temporary file.
///
/// The write handle is flushed before the file is handed over. On every exit
/// path, success or failure, the handle is closed when it goes out of scope;
/// on failure the temp file is also removed from disk by the drop.
pub(crate) fn download_to_temp(
    client: &dyn RemoteClient,
    url: &str,
) -> Result<NamedTempFile, ResourceError> {
    let body = client.get(url)?;

    let mut temp = tempfile::Builder::new()
        .prefix("cartopress-download-")
        .tempfile()?;
    {
        let file = temp.as_file_mut();
        file.write_all(&body)?;
        file.flush()?;
    }
    log::debug!(
        "downloaded {} bytes from '{}' to {}",
        body.len(),
        url,
        temp.path().display()
    );
    Ok(temp)
}
