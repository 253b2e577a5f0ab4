//! Input adapters turning route files into instruction sequences.
//!
//! - [`gpx`]: one instruction per GPX route (or track) point
//! - [`routing_response`]: instructions of a routing engine JSON response

pub mod gpx;
pub mod routing_response;

use std::path::Path;

use crate::errors::SourceError;
use crate::models::Instruction;

/// Supported input formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Gpx,
    RoutingResponse,
}

impl InputFormat {
    pub fn detect(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "gpx" => Some(InputFormat::Gpx),
            "json" => Some(InputFormat::RoutingResponse),
            _ => None,
        }
    }
}

/// Reads a route file and builds its instructions, picking the adapter
/// from the file extension.
pub fn load_instructions(path: &Path) -> Result<Vec<Instruction>, SourceError> {
    let format = InputFormat::detect(path)
        .ok_or_else(|| SourceError::UnsupportedFile(path.display().to_string()))?;
    let bytes = std::fs::read(path)?;

    match format {
        InputFormat::Gpx => gpx::instructions_from_gpx(bytes.as_slice()),
        InputFormat::RoutingResponse => routing_response::instructions_from_json(&bytes),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_format() {
        assert_eq!(InputFormat::detect(Path::new("a/route.GPX")), Some(InputFormat::Gpx));
        assert_eq!(
            InputFormat::detect(Path::new("route.json")),
            Some(InputFormat::RoutingResponse)
        );
        assert_eq!(InputFormat::detect(Path::new("route.fit")), None);
        assert_eq!(InputFormat::detect(Path::new("route")), None);
    }

    #[test]
    fn test_unsupported_file() {
        let err = load_instructions(Path::new("does-not-matter.tcx")).unwrap_err();
        assert!(matches!(err, SourceError::UnsupportedFile(_)));
    }
}
